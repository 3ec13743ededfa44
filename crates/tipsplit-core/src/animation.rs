//! # Count-Up Animation
//!
//! Frames for the cosmetic "counting up" display of a result.
//!
//! The frames are derived from the final amount; they never feed back into
//! the calculation. The last frame is always the exact target.
//!
//! ```text
//!   count_up($27.50, 4):  $6.87 ─► $13.75 ─► $20.62 ─► $27.50
//! ```

use crate::money::Money;

/// Longest animation a caller may request.
pub const MAX_ANIMATION_STEPS: u32 = 100;

/// Linear frames from zero up to `target`.
///
/// Yields `steps` frames (capped at [`MAX_ANIMATION_STEPS`]); frame `k` is
/// `target × k / steps` truncated toward zero, so frames never overshoot.
/// `steps == 0` yields the target alone.
///
/// ## Example
/// ```rust
/// use tipsplit_core::animation::count_up;
/// use tipsplit_core::money::Money;
///
/// let frames: Vec<_> = count_up(Money::from_cents(2750), 4).collect();
/// assert_eq!(frames.last(), Some(&Money::from_cents(2750)));
/// assert_eq!(frames.len(), 4);
/// ```
pub fn count_up(target: Money, steps: u32) -> impl Iterator<Item = Money> {
    let steps = steps.clamp(1, MAX_ANIMATION_STEPS) as i128;
    let cents = target.cents() as i128;

    (1..=steps).map(move |k| Money::from_cents((cents * k / steps) as i64))
}
