//! # payterm-core: Pure Business Logic for PayTerm
//!
//! This crate is the **heart** of PayTerm. It contains the amount
//! validation contract and the receipt composer as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         PayTerm Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Application (forms, screens)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              payterm-terminal (async boundary)                  │   │
//! │  │    PaymentService, TerminalClient trait, event callbacks        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ payterm-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │validation │  │  receipt  │  │   types   │  │   │
//! │  │   │   Money   │  │  amount   │  │  compose  │  │  Payment  │  │   │
//! │  │   │  parsing  │  │   rules   │  │line items │  │  Result   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO PRINTING • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type in kobo with integer arithmetic (no floats!)
//! - [`validation`] - The single authoritative amount validator
//! - [`receipt`] - Receipt composition (full and simple variants)
//! - [`reference`] - Transaction reference generation
//! - [`types`] - Domain types (PaymentResult, CardDetails, etc.)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic - same input = same output
//! 2. **No I/O**: the terminal, printer, network live in payterm-terminal
//! 3. **Integer Money**: all monetary values are kobo (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use payterm_core::validation::validate_amount_input;
//!
//! // One validator gates both the form and the service path
//! let amount = validate_amount_input("250.00").unwrap();
//! assert_eq!(amount.to_string(), "₦250.00");
//!
//! assert!(validate_amount_input("9.99").is_err());     // below minimum
//! assert!(validate_amount_input("10.005").is_err());   // too precise
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod receipt;
pub mod reference;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use money::Money;
pub use receipt::{compose, compose_simple, ReceiptLineItem};
pub use reference::TransactionRef;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum accepted transaction amount: ₦10.00.
///
/// ## Business Reason
/// Card-present transactions below this are not worth the network fees.
pub const MIN_AMOUNT: Money = Money::from_kobo(1_000);

/// Maximum accepted transaction amount: ₦999,999.99.
///
/// ## Business Reason
/// The terminal's transaction ceiling. The original integration also had a
/// 1,000,000 form-level bound; this constant is the single authoritative
/// one, so ₦1,000,000.00 fails validation everywhere.
pub const MAX_AMOUNT: Money = Money::from_kobo(99_999_999);
