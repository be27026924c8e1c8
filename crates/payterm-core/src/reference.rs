//! # Transaction References
//!
//! Generates and wraps the transaction reference that ties a payment
//! attempt to the result the terminal reports back.
//!
//! Generated references follow the literal pattern
//! `TXN_<unix-millis>_<random 0..=999999>`, so they sort roughly by time
//! and stay unique without any coordination.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A transaction reference string.
///
/// Either generated locally ([`TransactionRef::generate`]) or supplied by
/// the caller ([`TransactionRef::from_raw`]). Serializes as the plain
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionRef(String);

impl TransactionRef {
    /// Generates a fresh reference: `TXN_<unix-millis>_<random>`.
    ///
    /// ## Example
    /// ```rust
    /// use payterm_core::reference::TransactionRef;
    ///
    /// let reference = TransactionRef::generate();
    /// assert!(reference.as_str().starts_with("TXN_"));
    /// ```
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000);
        TransactionRef(format!("TXN_{}_{}", millis, suffix))
    }

    /// Wraps a caller-supplied reference verbatim.
    pub fn from_raw(reference: impl Into<String>) -> Self {
        TransactionRef(reference.into())
    }

    /// Returns the reference as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
