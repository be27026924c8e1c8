//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Checking "two decimal places" with floats produces false negatives:    │
//! │    10.15 * 100 = 1014.9999999999999                                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Kobo                                             │
//! │    Amounts are parsed from the decimal string straight into kobo        │
//! │    (1 Naira = 100 Kobo). No float ever enters the pipeline, so the      │
//! │    precision rule is an exact integer comparison.                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use payterm_core::money::Money;
//!
//! // Create from kobo (preferred)
//! let amount = Money::from_kobo(1_050); // ₦10.50
//!
//! // Parse from user input (major-unit decimal string)
//! let parsed = Money::parse("10.50").unwrap();
//! assert_eq!(parsed, amount);
//!
//! // Display is the receipt/UI format
//! assert_eq!(amount.to_string(), "₦10.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (kobo).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for reversals/refund display
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Serializes as a plain kobo integer
///
/// ## Where Money Flows
/// ```text
/// User input "10.50" ──► Money::parse ──► validate_amount ──► PaymentRequest
///                                                                  │
///                  Receipt "₦10.50" ◄── compose ◄── PaymentResult ◄┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from kobo (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use payterm_core::money::Money;
    ///
    /// let amount = Money::from_kobo(1_050); // ₦10.50
    /// assert_eq!(amount.kobo(), 1_050);
    /// ```
    #[inline]
    pub const fn from_kobo(kobo: i64) -> Self {
        Money(kobo)
    }

    /// Creates a Money value from major and minor units (naira and kobo).
    ///
    /// ## Example
    /// ```rust
    /// use payterm_core::money::Money;
    ///
    /// let amount = Money::from_major_minor(10, 50); // ₦10.50
    /// assert_eq!(amount.kobo(), 1_050);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -₦5.50, not -₦4.50.
    #[inline]
    pub const fn from_major_minor(naira: i64, kobo: i64) -> Self {
        if naira < 0 {
            Money(naira * 100 - kobo)
        } else {
            Money(naira * 100 + kobo)
        }
    }

    /// Returns the value in kobo (smallest currency unit).
    #[inline]
    pub const fn kobo(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (naira) portion.
    #[inline]
    pub const fn naira(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (kobo) portion (always 0-99).
    #[inline]
    pub const fn kobo_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Parses a major-unit decimal string into Money.
    ///
    /// ## Accepted Forms
    /// - `"10"`, `"10.5"`, `"10.50"`, `".50"`
    /// - Digit-grouping commas in the integer part: `"1,000.00"`
    /// - A single leading sign: `"-5.00"` (validation rejects it later)
    ///
    /// ## Rejected Forms
    /// - Empty/whitespace, letters, multiple dots → [`ValidationError::NotANumber`]
    /// - More than two *significant* fractional digits →
    ///   [`ValidationError::TooManyDecimals`]
    ///
    /// ## Precision Rule
    /// The two-decimal check is performed on the string: trailing zeros in
    /// the fraction are insignificant, so `"10.500"` parses to ₦10.50 while
    /// `"10.005"` is rejected. This is the tolerance-free equivalent of
    /// "amount × 100 must be an integer" without ever touching a float.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError::NotANumber);
        }

        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };

        // Grouping commas are only meaningful in the integer part.
        let int_digits: String = int_part.chars().filter(|c| *c != ',').collect();

        if int_digits.is_empty() && frac_part.is_empty() {
            return Err(ValidationError::NotANumber);
        }
        if !int_digits.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ValidationError::NotANumber);
        }

        let significant_frac = frac_part.trim_end_matches('0');
        if significant_frac.len() > 2 {
            return Err(ValidationError::TooManyDecimals);
        }

        let naira: i64 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse().map_err(|_| ValidationError::NotANumber)?
        };

        // Pad the fraction to exactly two digits: "5" means 50 kobo.
        let kobo_minor: i64 = match significant_frac.len() {
            0 => 0,
            1 => significant_frac.parse::<i64>().map_err(|_| ValidationError::NotANumber)? * 10,
            _ => significant_frac[..2]
                .parse()
                .map_err(|_| ValidationError::NotANumber)?,
        };

        let magnitude = naira
            .checked_mul(100)
            .and_then(|n| n.checked_add(kobo_minor))
            .ok_or(ValidationError::NotANumber)?;

        Ok(Money(if negative { -magnitude } else { magnitude }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation renders the receipt/UI format: currency symbol,
/// thousands grouping, exactly two fractional digits.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}₦{}.{:02}",
            sign,
            group_thousands(self.naira().abs()),
            self.kobo_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Inserts a comma every three digits: 999999 → "999,999".
fn group_thousands(mut value: i64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut groups: Vec<String> = Vec::new();
    while value > 0 {
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    let mut out = groups.pop().unwrap_or_default();
    // Leading group keeps no zero padding.
    out = out.trim_start_matches('0').to_string();
    for g in groups.iter().rev() {
        out.push(',');
        out.push_str(g);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kobo() {
        let money = Money::from_kobo(1_099);
        assert_eq!(money.kobo(), 1_099);
        assert_eq!(money.naira(), 10);
        assert_eq!(money.kobo_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).kobo(), 1_099);
        assert_eq!(Money::from_major_minor(-5, 50).kobo(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_kobo(1_099).to_string(), "₦10.99");
        assert_eq!(Money::from_kobo(500).to_string(), "₦5.00");
        assert_eq!(Money::from_kobo(-550).to_string(), "-₦5.50");
        assert_eq!(Money::from_kobo(0).to_string(), "₦0.00");
        assert_eq!(Money::from_kobo(99_999_999).to_string(), "₦999,999.99");
        assert_eq!(Money::from_kobo(123_456_789).to_string(), "₦1,234,567.89");
    }

    #[test]
    fn test_parse_basic_forms() {
        assert_eq!(Money::parse("10").unwrap().kobo(), 1_000);
        assert_eq!(Money::parse("10.5").unwrap().kobo(), 1_050);
        assert_eq!(Money::parse("10.50").unwrap().kobo(), 1_050);
        assert_eq!(Money::parse(".50").unwrap().kobo(), 50);
        assert_eq!(Money::parse(" 25.00 ").unwrap().kobo(), 2_500);
        assert_eq!(Money::parse("1,000.00").unwrap().kobo(), 100_000);
        assert_eq!(Money::parse("-5.00").unwrap().kobo(), -500);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse(""), Err(ValidationError::NotANumber));
        assert_eq!(Money::parse("   "), Err(ValidationError::NotANumber));
        assert_eq!(Money::parse("abc"), Err(ValidationError::NotANumber));
        assert_eq!(Money::parse("10.5.0"), Err(ValidationError::NotANumber));
        assert_eq!(Money::parse("10a"), Err(ValidationError::NotANumber));
        assert_eq!(Money::parse("NaN"), Err(ValidationError::NotANumber));
        assert_eq!(Money::parse("."), Err(ValidationError::NotANumber));
    }

    #[test]
    fn test_parse_precision_rule() {
        // Three significant fractional digits fail.
        assert_eq!(Money::parse("10.005"), Err(ValidationError::TooManyDecimals));
        // Trailing zeros are insignificant: 10.500 == 10.50 exactly.
        assert_eq!(Money::parse("10.500").unwrap().kobo(), 1_050);
        // The classic float false-negative case parses exactly.
        assert_eq!(Money::parse("10.15").unwrap().kobo(), 1_015);
    }

    #[test]
    fn test_parse_overflow_is_rejected() {
        assert_eq!(
            Money::parse("99999999999999999999"),
            Err(ValidationError::NotANumber)
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_kobo(1_000);
        let b = Money::from_kobo(500);

        assert_eq!((a + b).kobo(), 1_500);
        assert_eq!((a - b).kobo(), 500);

        let mut c = a;
        c += b;
        assert_eq!(c.kobo(), 1_500);
        c -= a;
        assert_eq!(c.kobo(), 500);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_kobo(100).is_positive());
        assert!(Money::from_kobo(-100).is_negative());
        assert_eq!(Money::from_kobo(-550).abs().kobo(), 550);
    }
}
