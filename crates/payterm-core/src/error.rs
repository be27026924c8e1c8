//! # Error Types
//!
//! Domain-specific error types for payterm-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  payterm-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Amount validation failures                     │
//! │                                                                         │
//! │  payterm-terminal errors (separate crate)                              │
//! │  └── TerminalError    - Terminal boundary failures                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → TerminalError → caller            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Each variant carries the bound or reason it reports
//! 3. Errors are enum variants, never String
//! 4. Every variant maps to a user-facing message

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Validation Error
// =============================================================================

/// Amount validation failures.
///
/// These are the only failure reasons a payment attempt can be rejected
/// with before it reaches the terminal. Each variant corresponds to one
/// rule in [`crate::validation::validate_amount_input`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input was empty, non-numeric, or otherwise not parseable.
    #[error("amount must be a valid number")]
    NotANumber,

    /// Amount resolved to zero or a negative value.
    #[error("amount must be greater than zero")]
    MustBePositive,

    /// Amount is below the minimum the terminal accepts.
    #[error("minimum amount is {min}")]
    BelowMinimum { min: Money },

    /// Amount is above the maximum the terminal accepts.
    #[error("maximum amount is {max}")]
    AboveMaximum { max: Money },

    /// More than two decimal digits of precision were supplied.
    #[error("amount cannot have more than two decimal places")]
    TooManyDecimals,
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A monetary value overflowed the representable range.
    #[error("amount overflow")]
    AmountOverflow,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::NotANumber.to_string(),
            "amount must be a valid number"
        );
        assert_eq!(
            ValidationError::MustBePositive.to_string(),
            "amount must be greater than zero"
        );
        assert_eq!(
            ValidationError::TooManyDecimals.to_string(),
            "amount cannot have more than two decimal places"
        );
    }

    #[test]
    fn test_bound_errors_carry_formatted_amount() {
        let err = ValidationError::BelowMinimum {
            min: Money::from_kobo(1_000),
        };
        assert_eq!(err.to_string(), "minimum amount is ₦10.00");

        let err = ValidationError::AboveMaximum {
            max: Money::from_kobo(99_999_999),
        };
        assert_eq!(err.to_string(), "maximum amount is ₦999,999.99");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::NotANumber.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
