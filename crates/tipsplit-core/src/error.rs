//! # Error Types
//!
//! Domain-specific error types for tipsplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tipsplit-core errors (this file)                                      │
//! │  ├── CoreError        - Session misuse (bad tip index, ...)            │
//! │  └── ValidationError  - Field parsing failures                         │
//! │                                                                         │
//! │  tipsplit-cli errors (app)                                             │
//! │  ├── ConfigError      - Bad environment values                         │
//! │  └── ApiError         - What the client sees (serialized)              │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → Client                                   │
//! │        ValidationError → invalid flags + $0.00 fallback                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note
//! A `ValidationError` from the bill or people field never stops the
//! calculator. It only decides the invalid-input flag and the `0.00`
//! fallback. See [`crate::calculator`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core errors.
///
/// These represent requests the session cannot honor. They are rare: the
/// view layer only ever sends tip indices 0-5.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A tip button index outside the fixed table was selected.
    ///
    /// ## When This Occurs
    /// - A client sends `tip 6` or `tip -1`
    /// - The state is left unchanged
    #[error("Tip index {index} is not a tip button (expected 0 to {max})")]
    InvalidTipIndex { index: i64, max: usize },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for the bill and people fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., letters in a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
