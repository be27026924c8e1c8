//! # Simulated Terminal
//!
//! An in-process [`TerminalClient`] that stands in for the vendor SDK.
//!
//! The real integration is an opaque hardware bridge; this simulator
//! reproduces its *observable* contract so the demo binary and
//! integration-style tests can exercise the full path: submission ack now,
//! authoritative result later via the terminal bus.
//!
//! ```text
//! make_payment ──► Ack(accepted)
//!        │
//!        └── spawned task: sleep(delay)
//!                 │
//!                 ├── Approve ──► publish payment_completed (approved)
//!                 ├── Decline ──► publish payment_completed (declined)
//!                 └── Cancel  ──► publish payment_cancelled
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use tokio::time::sleep;
use tracing::{debug, info};

use payterm_core::{
    CardDetails, CompletionStatus, PaymentResult, PrintReport, ReceiptLineItem,
};

use crate::client::{Ack, PaymentRequest, TerminalClient};
use crate::error::TerminalResult;
use crate::events::TerminalEvents;

// =============================================================================
// Simulated Outcome
// =============================================================================

/// The outcome the simulator delivers for every payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimOutcome {
    /// Approve with fabricated card data ("00 Approved").
    #[default]
    Approve,
    /// Decline ("05 Do not honour").
    Decline,
    /// Simulate the user pressing cancel on the terminal.
    Cancel,
}

// =============================================================================
// Simulated Terminal
// =============================================================================

/// In-process terminal for demos and tests.
pub struct SimulatedTerminal {
    bus: Arc<TerminalEvents>,
    outcome: SimOutcome,
    delay: Duration,
    ready: AtomicBool,
}

impl SimulatedTerminal {
    /// Creates an approve-everything simulator publishing on `bus`.
    pub fn new(bus: Arc<TerminalEvents>) -> Self {
        SimulatedTerminal {
            bus,
            outcome: SimOutcome::Approve,
            delay: Duration::from_millis(200),
            ready: AtomicBool::new(false),
        }
    }

    /// Fixes the outcome of every payment.
    pub fn with_outcome(mut self, outcome: SimOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Overrides the callback delay (tests use `Duration::ZERO`).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn fabricate_result(request: &PaymentRequest, outcome: SimOutcome) -> PaymentResult {
        let mut rng = rand::thread_rng();

        match outcome {
            SimOutcome::Approve => PaymentResult {
                approved: true,
                response_code: "00".to_string(),
                response_message: "Approved".to_string(),
                reference: request.reference.clone(),
                rrn: Some(format!("{:012}", rng.gen_range(0..1_000_000_000_000u64))),
                amount: request.amount,
                card: Some(CardDetails {
                    card_type: Some("VERVE".to_string()),
                    masked_pan: Some(format!("506099******{:04}", rng.gen_range(0..10_000))),
                    expiry: Some("12/27".to_string()),
                    holder_name: request.customer_name.clone(),
                }),
                auth_code: Some(format!("{:06}", rng.gen_range(0..1_000_000))),
                stan: Some(format!("{:06}", rng.gen_range(0..1_000_000))),
                timestamp: Some(Utc::now()),
                status: CompletionStatus::Completed,
            },
            SimOutcome::Decline => PaymentResult {
                approved: false,
                response_code: "05".to_string(),
                response_message: "Do not honour".to_string(),
                reference: request.reference.clone(),
                rrn: Some(format!("{:012}", rng.gen_range(0..1_000_000_000_000u64))),
                amount: request.amount,
                card: None,
                auth_code: None,
                stan: Some(format!("{:06}", rng.gen_range(0..1_000_000))),
                timestamp: Some(Utc::now()),
                status: CompletionStatus::Completed,
            },
            SimOutcome::Cancel => PaymentResult {
                approved: false,
                response_code: "CANCELLED".to_string(),
                response_message: "Transaction cancelled by user".to_string(),
                reference: request.reference.clone(),
                rrn: None,
                amount: request.amount,
                card: None,
                auth_code: None,
                stan: None,
                timestamp: Some(Utc::now()),
                status: CompletionStatus::Cancelled,
            },
        }
    }
}

#[async_trait]
impl TerminalClient for SimulatedTerminal {
    async fn initialize(&self) -> TerminalResult<Ack> {
        self.ready.store(true, Ordering::SeqCst);
        info!("Simulated terminal ready");
        Ok(Ack::ok_with("simulated terminal ready"))
    }

    async fn make_payment(&self, request: PaymentRequest) -> TerminalResult<Ack> {
        if !self.ready.load(Ordering::SeqCst) {
            return Ok(Ack::failed("terminal not initialized"));
        }

        debug!(reference = %request.reference, amount = %request.amount, "Payment accepted");

        let bus = Arc::clone(&self.bus);
        let outcome = self.outcome;
        let delay = self.delay;
        tokio::spawn(async move {
            sleep(delay).await;
            let result = Self::fabricate_result(&request, outcome);
            match outcome {
                SimOutcome::Cancel => bus.publish_payment_cancelled(&result),
                _ => bus.publish_payment_completed(&result),
            }
        });

        Ok(Ack::ok())
    }

    async fn print_receipt(&self, items: &[ReceiptLineItem]) -> TerminalResult<Ack> {
        if !self.ready.load(Ordering::SeqCst) {
            return Ok(Ack::failed("terminal not initialized"));
        }

        let line_count = items.len();
        let bus = Arc::clone(&self.bus);
        let delay = self.delay;
        tokio::spawn(async move {
            sleep(delay).await;
            bus.publish_print_completed(&PrintReport {
                success: true,
                message: format!("printed {} lines", line_count),
                timestamp: Utc::now(),
            });
        });

        Ok(Ack::ok())
    }

    async fn show_settings(&self) -> TerminalResult<Ack> {
        Ok(Ack::ok_with("settings screen opened"))
    }

    async fn call_home(&self) -> TerminalResult<Ack> {
        Ok(Ack::ok_with("parameters downloaded"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
