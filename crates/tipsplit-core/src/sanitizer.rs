//! # Input Sanitizer
//!
//! Filters raw keystrokes from the bill field into a valid decimal numeral.
//!
//! ## Key Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Key                      Buffer "12"       Buffer "12.5"               │
//! │  ───────────────────────  ───────────────   ───────────────             │
//! │  "7"          (digit)     "127"             "12.57"                     │
//! │  "."          (point)     "12."             "12.5"  (already has one)   │
//! │  "Backspace"  (delete)    "1"               "12."                       │
//! │  "a", "Shift" (other)     "12"              "12.5"                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Key
// =============================================================================

/// A keystroke as reported by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Key {
    /// A single printable character.
    Char(char),
    /// The backspace signal.
    Backspace,
    /// The delete signal. Treated like backspace.
    Delete,
    /// Any other named key (`"Shift"`, `"ArrowLeft"`, ...).
    Named(String),
}

impl Key {
    /// Parses a key name the way browsers report `KeyboardEvent.key`.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::sanitizer::Key;
    ///
    /// assert_eq!(Key::parse("7"), Key::Char('7'));
    /// assert_eq!(Key::parse("Backspace"), Key::Backspace);
    /// assert_eq!(Key::parse("Shift"), Key::Named("Shift".to_string()));
    /// ```
    pub fn parse(name: &str) -> Self {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::Char(c),
            _ => match name {
                "Backspace" => Key::Backspace,
                "Delete" => Key::Delete,
                other => Key::Named(other.to_string()),
            },
        }
    }

    /// True for the backspace/delete signal.
    pub const fn is_erase(&self) -> bool {
        matches!(self, Key::Backspace | Key::Delete)
    }
}

// =============================================================================
// Sanitize
// =============================================================================

/// Applies one key to the buffer and returns the new buffer.
///
/// ## Rules
/// - A single ASCII digit is appended
/// - `.` is appended only if the buffer has none
/// - Backspace/Delete removes the last character (no-op when empty)
/// - Anything else leaves the buffer unchanged
///
/// ## Example
/// ```rust
/// use tipsplit_core::sanitizer::{sanitize, Key};
///
/// let buffer = sanitize("12", &Key::parse("."));
/// assert_eq!(buffer, "12.");
/// assert_eq!(sanitize(&buffer, &Key::parse(".")), "12.");
/// assert_eq!(sanitize("", &Key::Backspace), "");
/// ```
pub fn sanitize(buffer: &str, key: &Key) -> String {
    let mut next = buffer.to_string();
    apply_key(&mut next, key);
    next
}

/// In-place form of [`sanitize`]. Returns whether the buffer changed.
fn apply_key(buffer: &mut String, key: &Key) -> bool {
    match key {
        Key::Char(c) if c.is_ascii_digit() => {
            buffer.push(*c);
            true
        }
        Key::Char('.') if !buffer.contains('.') => {
            buffer.push('.');
            true
        }
        key if key.is_erase() => buffer.pop().is_some(),
        _ => false,
    }
}

// =============================================================================
// Numeral Buffer
// =============================================================================

/// The bill amount as typed.
///
/// ## Invariants
/// - Only ASCII digits and `.`
/// - At most one `.`
///
/// The only way in is [`NumeralBuffer::push_key`], so the invariants hold
/// for any keystroke sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct NumeralBuffer(String);

impl NumeralBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a key. Returns whether the buffer changed.
    pub fn push_key(&mut self, key: &Key) -> bool {
        apply_key(&mut self.0, key)
    }

    /// Applies every character of `text` as a key, returning how many were
    /// accepted.
    pub fn push_str(&mut self, text: &str) -> usize {
        text.chars()
            .filter(|c| self.push_key(&Key::Char(*c)))
            .count()
    }

    /// The buffer contents, for display echo.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
