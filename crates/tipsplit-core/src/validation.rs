//! # Validation Module
//!
//! Parses the bill and people fields and decides their invalid-input flags.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Sanitizer (keystrokes)                                       │
//! │  └── Only digits and one '.' reach the bill buffer                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── parse_bill   → BillAmount (exact, > 0)                            │
//! │  └── parse_people → u32   (> 0)                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculator                                                   │
//! │  └── Any Err here becomes the {0.00, 0.00} fallback                    │
//! │                                                                         │
//! │  Errors become flags for styling; they never halt computation          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipsplit_core::validation::{parse_bill, parse_people};
//!
//! assert!(parse_bill("12.34").is_ok());
//! assert_eq!(parse_people("4").unwrap(), 4);
//! assert!(parse_people("0").is_err());
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::BillAmount;
use crate::MAX_BILL_DOLLARS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Parsers
// =============================================================================

/// Parses the bill field into an exact amount.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Optional sign, then digits with at most one `.`
/// - At least one digit (`"."` alone is not a number)
/// - Every fractional digit is kept (`"0.004"` is a valid, positive bill)
/// - Must be positive, with at most [`MAX_BILL_DOLLARS`] whole dollars
///
/// ## Example
/// ```rust
/// use tipsplit_core::validation::parse_bill;
///
/// assert!(parse_bill("100").is_ok());
/// assert!(parse_bill(".5").is_ok());
/// assert!(parse_bill("0.004").is_ok());
/// assert!(parse_bill("abc").is_err());
/// assert!(parse_bill("0").is_err());
/// ```
pub fn parse_bill(text: &str) -> ValidationResult<BillAmount> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "bill".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "bill".to_string(),
        reason: reason.to_string(),
    };

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) {
        return Err(invalid("must be a decimal number"));
    }
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid("must contain at least one digit"));
    }

    let dollars = whole
        .bytes()
        .try_fold(0u64, |acc, b| {
            acc.checked_mul(10)
                .and_then(|a| a.checked_add(u64::from(b - b'0')))
                .filter(|a| *a <= MAX_BILL_DOLLARS)
        })
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "bill".to_string(),
            min: 0,
            max: MAX_BILL_DOLLARS as i64,
        })?;

    let amount = BillAmount::from_digits(dollars, fraction);
    if negative || amount.is_zero() {
        return Err(ValidationError::MustBePositive {
            field: "bill".to_string(),
        });
    }

    Ok(amount)
}

/// Parses the people field.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Base-10 integer only (`"4.5"` is rejected, not truncated)
/// - Must be positive and fit in `u32`
pub fn parse_people(text: &str) -> ValidationResult<u32> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "people".to_string(),
        });
    }

    let people: i64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "people".to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    if people <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "people".to_string(),
        });
    }

    u32::try_from(people).map_err(|_| ValidationError::OutOfRange {
        field: "people".to_string(),
        min: 1,
        max: u32::MAX as i64,
    })
}

// =============================================================================
// Field Validity
// =============================================================================

/// Per-field invalid-input flags for error styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidity {
    /// Bill did not parse, or is zero/negative.
    pub bill_invalid: bool,
    /// People did not parse, or is zero/negative.
    pub people_invalid: bool,
}

impl FieldValidity {
    /// Checks both fields.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::validation::FieldValidity;
    ///
    /// let validity = FieldValidity::check("100", "0");
    /// assert!(!validity.bill_invalid);
    /// assert!(validity.people_invalid);
    /// ```
    pub fn check(bill_text: &str, people_text: &str) -> Self {
        FieldValidity {
            bill_invalid: parse_bill(bill_text).is_err(),
            people_invalid: parse_people(people_text).is_err(),
        }
    }

    /// True when neither field is flagged.
    pub const fn is_valid(&self) -> bool {
        !self.bill_invalid && !self.people_invalid
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
