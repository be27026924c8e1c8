//! # Domain Types
//!
//! Core domain types used throughout PayTerm.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  PaymentResult  │   │   CardDetails   │   │  MerchantInfo   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  approved       │   │  card_type      │   │  name           │       │
//! │  │  reference      │   │  masked_pan     │   │  address        │       │
//! │  │  amount (kobo)  │   │  expiry         │   │  phone          │       │
//! │  │  rrn/stan/auth  │   │  holder_name    │   │  logo           │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │CompletionStatus │   │   PrintReport   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Completed      │   │  success        │                             │
//! │  │  Cancelled      │   │  message        │                             │
//! │  └─────────────────┘   │  timestamp      │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! A `PaymentResult` is produced exactly once per attempt by the terminal
//! integration and handed to the caller through a completion callback.
//! Downstream code (receipt composition, display) only reads it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::reference::TransactionRef;

// =============================================================================
// Completion Status
// =============================================================================

/// Distinguishes a transaction that ran to completion from one the user
/// cancelled on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    /// The terminal processed the transaction (approved or declined).
    Completed,
    /// The user cancelled before the transaction completed.
    Cancelled,
}

// =============================================================================
// Card Details
// =============================================================================

/// Card metadata the terminal reports for a card-present transaction.
///
/// Every field is optional: cash-like flows and some decline paths report
/// nothing. Empty strings are treated the same as absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    /// Card scheme, e.g. "VERVE", "MASTERCARD".
    pub card_type: Option<String>,

    /// Masked primary account number, e.g. "506099******1234".
    pub masked_pan: Option<String>,

    /// Card expiry as reported by the terminal (MM/YY).
    pub expiry: Option<String>,

    /// Cardholder name from the card track data.
    pub holder_name: Option<String>,
}

// =============================================================================
// Payment Result
// =============================================================================

/// The immutable record of one completed transaction attempt.
///
/// Produced by the external terminal integration and delivered via the
/// payment-completed (or payment-cancelled) callback. Read-only downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    /// Whether the transaction was approved.
    pub approved: bool,

    /// Terminal response code, e.g. "00" for approval.
    pub response_code: String,

    /// Human-readable response message, e.g. "Approved".
    pub response_message: String,

    /// Transaction reference (caller-supplied or generated).
    pub reference: TransactionRef,

    /// Retrieval Reference Number from the settlement network.
    pub rrn: Option<String>,

    /// Settled amount.
    pub amount: Money,

    /// Card metadata, when the terminal reports any.
    pub card: Option<CardDetails>,

    /// Authorization code from the issuer.
    pub auth_code: Option<String>,

    /// System Trace Audit Number (per-transaction sequence counter).
    pub stan: Option<String>,

    /// When the terminal completed the transaction.
    pub timestamp: Option<DateTime<Utc>>,

    /// Whether the attempt completed or was cancelled by the user.
    pub status: CompletionStatus,
}

impl PaymentResult {
    /// True when the attempt was cancelled on the terminal.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.status == CompletionStatus::Cancelled
    }

    /// Receipt status title: "APPROVED" or "DECLINED".
    #[inline]
    pub fn status_title(&self) -> &'static str {
        if self.approved {
            "APPROVED"
        } else {
            "DECLINED"
        }
    }
}

// =============================================================================
// Print Report
// =============================================================================

/// Payload of the print-completed and print-error callbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintReport {
    /// Whether the print job succeeded.
    pub success: bool,

    /// Status or error message from the printer.
    pub message: String,

    /// When the printer reported back.
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Merchant Info
// =============================================================================

/// Merchant header data printed at the top of a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantInfo {
    /// Trading name shown bold and centered.
    pub name: String,

    /// Street address line.
    pub address: Option<String>,

    /// Contact phone, printed with a "Tel:" prefix.
    pub phone: Option<String>,

    /// Logo image reference (printer-resident slot or file path).
    pub logo: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
