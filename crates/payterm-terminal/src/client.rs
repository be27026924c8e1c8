//! # Terminal Client Trait
//!
//! The capability object for the vendor terminal integration.
//!
//! ## Why a Trait?
//! The original integration was a singleton wrapping a platform event
//! emitter. Here it is an explicit interface injected into call sites, so
//! tests substitute a fake terminal and the demo binary substitutes the
//! in-process simulator — no global mutable state.
//!
//! ## Operation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Operation Model                                  │
//! │                                                                         │
//! │  initialize ──────► Ack { success, message }                            │
//! │  make_payment ────► Ack (submission only!)                              │
//! │                       │                                                 │
//! │                       └──► authoritative PaymentResult arrives LATER    │
//! │                            via TerminalEvents (completed or cancelled)  │
//! │  print_receipt ───► Ack; outcome via print completed/error events       │
//! │  show_settings ───► Ack                                                 │
//! │  call_home ───────► Ack                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use payterm_core::{Money, ReceiptLineItem, TransactionRef};

use crate::error::TerminalResult;

// =============================================================================
// Acknowledgement
// =============================================================================

/// What every terminal operation returns: a success flag plus an optional
/// message or error string. For `make_payment` this only acknowledges
/// submission; the payment outcome is delivered via callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// Whether the operation was accepted.
    pub success: bool,

    /// Optional status or error message from the integration.
    pub message: Option<String>,
}

impl Ack {
    /// A bare success acknowledgement.
    pub fn ok() -> Self {
        Ack {
            success: true,
            message: None,
        }
    }

    /// A success acknowledgement with a message.
    pub fn ok_with(message: impl Into<String>) -> Self {
        Ack {
            success: true,
            message: Some(message.into()),
        }
    }

    /// A failure acknowledgement with an error string.
    pub fn failed(message: impl Into<String>) -> Self {
        Ack {
            success: false,
            message: Some(message.into()),
        }
    }
}

// =============================================================================
// Payment Request
// =============================================================================

/// The outbound payment submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Validated transaction amount.
    pub amount: Money,

    /// Reference that will tie the eventual result back to this attempt.
    pub reference: TransactionRef,

    /// Customer name collected by the form, if any.
    pub customer_name: Option<String>,
}

// =============================================================================
// Terminal Client
// =============================================================================

/// The injected capability object for the vendor terminal.
///
/// Implementations: the vendor bridge in production, the in-process
/// [`crate::simulator::SimulatedTerminal`] for demos, and test fakes.
#[async_trait]
pub trait TerminalClient: Send + Sync {
    /// Brings the terminal integration up. Must be called before payments.
    async fn initialize(&self) -> TerminalResult<Ack>;

    /// Submits a payment. Fire-and-forget: a successful `Ack` means the
    /// terminal accepted the request, not that the payment succeeded. The
    /// authoritative [`payterm_core::PaymentResult`] is published on the
    /// payment-completed (or payment-cancelled) event channel.
    async fn make_payment(&self, request: PaymentRequest) -> TerminalResult<Ack>;

    /// Sends a composed receipt to the terminal printer. The print outcome
    /// is published on the print completed/error event channels.
    async fn print_receipt(&self, items: &[ReceiptLineItem]) -> TerminalResult<Ack>;

    /// Opens the terminal's built-in settings screen.
    async fn show_settings(&self) -> TerminalResult<Ack>;

    /// Triggers the terminal's call-home (key exchange / parameter
    /// download) routine.
    async fn call_home(&self) -> TerminalResult<Ack>;
}

// =============================================================================
// Unit Tests
// =============================================================================
