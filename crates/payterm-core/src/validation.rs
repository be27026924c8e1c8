//! # Validation Module
//!
//! Amount validation for PayTerm.
//!
//! ## One Validator, One Bound
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Strategy                                │
//! │                                                                         │
//! │  The original integration carried TWO overlapping rule sets:            │
//! │    • form-level ad hoc checks, bounds 10 .. 1,000,000                   │
//! │    • service-level checks,     bounds 10 .. 999,999.99                  │
//! │                                                                         │
//! │  This module is the single authoritative copy. Both the form path and   │
//! │  the service path call the SAME function with the SAME bounds:          │
//! │                                                                         │
//! │      MIN_AMOUNT = ₦10.00       MAX_AMOUNT = ₦999,999.99                 │
//! │                                                                         │
//! │  999,999.99 wins over 1,000,000: it is what the terminal actually       │
//! │  enforced, and 1,000,000.00 must fail "above maximum".                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use payterm_core::validation::validate_amount_input;
//!
//! // Validate raw form input before a payment is attempted
//! let amount = validate_amount_input("250.00").unwrap();
//! assert_eq!(amount.kobo(), 25_000);
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::{MAX_AMOUNT, MIN_AMOUNT};

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates a transaction amount against the business limits.
///
/// ## Rules (checked in order)
/// - Must be positive (> 0)
/// - Must be at least [`MIN_AMOUNT`] (₦10.00)
/// - Must be at most [`MAX_AMOUNT`] (₦999,999.99)
///
/// Precision is not checked here: a [`Money`] value is already exact kobo,
/// so "too many decimals" can only occur while parsing user input
/// (see [`validate_amount_input`]).
///
/// Purely functional: no side effects, deterministic for identical input.
pub fn validate_amount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive);
    }

    if amount < MIN_AMOUNT {
        return Err(ValidationError::BelowMinimum { min: MIN_AMOUNT });
    }

    if amount > MAX_AMOUNT {
        return Err(ValidationError::AboveMaximum { max: MAX_AMOUNT });
    }

    Ok(())
}

/// Parses and validates raw user input in one pass.
///
/// This is the function the amount form submits through, so the rule set
/// is shared rather than duplicated with different bounds.
///
/// ## Failure Reasons
/// ```text
/// "abc", "", "10.5.0"  → amount must be a valid number
/// "0", "-5"            → amount must be greater than zero
/// "9.99"               → minimum amount is ₦10.00
/// "1000000.00"         → maximum amount is ₦999,999.99
/// "10.005"             → amount cannot have more than two decimal places
/// ```
pub fn validate_amount_input(input: &str) -> ValidationResult<Money> {
    let amount = Money::parse(input)?;
    validate_amount(amount)?;
    Ok(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
