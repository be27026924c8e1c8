//! # Payment Service
//!
//! The thin service in front of the terminal client: validates amounts,
//! builds transaction references, forwards calls, and republishes the
//! client's event callbacks to the application.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PaymentService Flow                              │
//! │                                                                         │
//! │  start_payment("250.00")                                                │
//! │       │                                                                 │
//! │       ├── validate_amount_input ── Err ──► reported, nothing sent       │
//! │       │                                                                 │
//! │       ├── in-flight check ──────── busy ─► TerminalError::Busy          │
//! │       │                                                                 │
//! │       ├── TransactionRef::generate()                                    │
//! │       │                                                                 │
//! │       └── client.make_payment(request)   (fire-and-forget)              │
//! │                  │                                                      │
//! │                  ▼  later, via terminal events                          │
//! │       terminal bus ──► service listener ──► clears in-flight flag       │
//! │                                    │                                    │
//! │                                    └──► republished on the service's    │
//! │                                         public event channels           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The in-flight flag is the only recovery state: any failure clears it so
//! a fresh attempt can be made. There is no retry policy.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use payterm_core::{
    compose, compose_simple, validation::validate_amount, validation::validate_amount_input,
    MerchantInfo, Money, PaymentResult, ReceiptLineItem, TransactionRef,
};

use crate::client::{Ack, PaymentRequest, TerminalClient};
use crate::error::{TerminalError, TerminalResult};
use crate::events::{Subscription, TerminalEvents};

// =============================================================================
// Payment Service
// =============================================================================

/// Dependency-injected wrapper around a [`TerminalClient`].
///
/// The client publishes raw callbacks on its *terminal bus*; the service
/// listens there, maintains the in-flight flag, and republishes every
/// event on its own public channels ([`PaymentService::events`]).
pub struct PaymentService {
    client: Arc<dyn TerminalClient>,
    /// Public channels the application subscribes to.
    events: Arc<TerminalEvents>,
    merchant: Option<MerchantInfo>,
    initialized: AtomicBool,
    in_flight: Arc<AtomicBool>,
    session_id: Mutex<Option<Uuid>>,
    /// Internal bus registrations, torn down by [`PaymentService::shutdown`].
    bus_subscriptions: Vec<Subscription>,
}

impl PaymentService {
    /// Creates the service around a client and the terminal bus that
    /// client publishes into.
    ///
    /// `merchant` supplies the receipt header; `None` prints header-less
    /// receipts.
    pub fn new(
        client: Arc<dyn TerminalClient>,
        terminal_bus: Arc<TerminalEvents>,
        merchant: Option<MerchantInfo>,
    ) -> Self {
        let events = Arc::new(TerminalEvents::new());
        let in_flight = Arc::new(AtomicBool::new(false));

        // Bridge the terminal bus onto the public channels. Completion and
        // cancellation both end the current attempt, so the flag is cleared
        // before the event reaches the application listener.
        let mut bus_subscriptions = Vec::with_capacity(4);

        let flag = Arc::clone(&in_flight);
        let public = Arc::clone(&events);
        bus_subscriptions.push(terminal_bus.on_payment_completed(move |result| {
            flag.store(false, Ordering::SeqCst);
            info!(
                reference = %result.reference,
                approved = result.approved,
                code = %result.response_code,
                "Payment completed"
            );
            public.publish_payment_completed(result);
        }));

        let flag = Arc::clone(&in_flight);
        let public = Arc::clone(&events);
        bus_subscriptions.push(terminal_bus.on_payment_cancelled(move |result| {
            flag.store(false, Ordering::SeqCst);
            info!(reference = %result.reference, "Payment cancelled by user");
            public.publish_payment_cancelled(result);
        }));

        let public = Arc::clone(&events);
        bus_subscriptions.push(terminal_bus.on_print_completed(move |report| {
            info!(message = %report.message, "Print completed");
            public.publish_print_completed(report);
        }));

        let public = Arc::clone(&events);
        bus_subscriptions.push(terminal_bus.on_print_error(move |report| {
            warn!(message = %report.message, "Print failed");
            public.publish_print_error(report);
        }));

        PaymentService {
            client,
            events,
            merchant,
            initialized: AtomicBool::new(false),
            in_flight,
            session_id: Mutex::new(None),
            bus_subscriptions,
        }
    }

    /// The public event channels (payment completed/cancelled, print
    /// completed/error). Subscribe here, not on the terminal bus.
    pub fn events(&self) -> &TerminalEvents {
        &self.events
    }

    /// True while a payment attempt is awaiting its terminal callback.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Session id assigned on the last successful initialize.
    pub fn session_id(&self) -> Option<Uuid> {
        *self.session_id.lock().expect("session lock poisoned")
    }

    // -------------------------------------------------------------------------
    // Forwarded Operations
    // -------------------------------------------------------------------------

    /// Initializes the terminal integration.
    pub async fn initialize(&self) -> TerminalResult<Ack> {
        let ack = self.client.initialize().await?;
        if ack.success {
            let session = Uuid::new_v4();
            *self.session_id.lock().expect("session lock poisoned") = Some(session);
            self.initialized.store(true, Ordering::SeqCst);
            info!(%session, "Terminal initialized");
        } else {
            warn!(message = ?ack.message, "Terminal initialize rejected");
        }
        Ok(ack)
    }

    /// Validates raw form input and submits a payment.
    ///
    /// Returns the generated reference on acceptance; the authoritative
    /// result arrives later on the payment channels.
    pub async fn start_payment(
        &self,
        amount_input: &str,
        customer_name: Option<String>,
    ) -> TerminalResult<TransactionRef> {
        let amount = validate_amount_input(amount_input)?;
        self.submit(PaymentRequest {
            amount,
            reference: TransactionRef::generate(),
            customer_name,
        })
        .await
    }

    /// Submits a pre-built request (caller-supplied reference). The amount
    /// still passes through the same validator as the form path.
    pub async fn start_payment_with(&self, request: PaymentRequest) -> TerminalResult<TransactionRef> {
        validate_amount(request.amount)?;
        self.submit(request).await
    }

    async fn submit(&self, request: PaymentRequest) -> TerminalResult<TransactionRef> {
        if !self.initialized.load(Ordering::SeqCst) {
            return Err(TerminalError::NotInitialized);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(TerminalError::Busy);
        }

        let reference = request.reference.clone();
        info!(reference = %reference, amount = %request.amount, "Submitting payment");

        match self.client.make_payment(request).await {
            Ok(ack) if ack.success => Ok(reference),
            Ok(ack) => {
                // Rejected at submission: the attempt is over, allow retry.
                self.in_flight.store(false, Ordering::SeqCst);
                let message = ack.message.unwrap_or_else(|| "payment rejected".to_string());
                warn!(reference = %reference, %message, "Payment submission rejected");
                Err(TerminalError::Client(message))
            }
            Err(e) => {
                self.in_flight.store(false, Ordering::SeqCst);
                Err(e)
            }
        }
    }

    /// Composes the full receipt for a result and sends it to the printer.
    /// The print outcome arrives on the print channels.
    pub async fn print_payment_receipt(&self, result: &PaymentResult) -> TerminalResult<Ack> {
        let items = compose(result, self.merchant.as_ref());
        self.print(&items).await
    }

    /// Composes the minimal 7-item receipt and sends it to the printer.
    pub async fn print_simple_receipt(&self, result: &PaymentResult) -> TerminalResult<Ack> {
        let items = compose_simple(result);
        self.print(&items).await
    }

    async fn print(&self, items: &[ReceiptLineItem]) -> TerminalResult<Ack> {
        if !self.initialized.load(Ordering::SeqCst) {
            return Err(TerminalError::NotInitialized);
        }
        self.client.print_receipt(items).await
    }

    /// Opens the terminal settings screen.
    pub async fn show_settings(&self) -> TerminalResult<Ack> {
        self.client.show_settings().await
    }

    /// Runs the terminal call-home routine.
    pub async fn call_home(&self) -> TerminalResult<Ack> {
        self.client.call_home().await
    }

    /// Tears down the terminal-bus registrations. Safe to call twice.
    pub fn shutdown(&self) {
        for sub in &self.bus_subscriptions {
            sub.cancel();
        }
    }

    /// Smallest accepted amount, for form hints.
    pub const fn min_amount() -> Money {
        payterm_core::MIN_AMOUNT
    }

    /// Largest accepted amount, for form hints.
    pub const fn max_amount() -> Money {
        payterm_core::MAX_AMOUNT
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use payterm_core::CompletionStatus;
    use std::sync::atomic::AtomicUsize;

    /// Scripted fake terminal: records calls, publishes nothing on its own.
    struct FakeTerminal {
        bus: Arc<TerminalEvents>,
        payment_acks: Mutex<Vec<TerminalResult<Ack>>>,
        payments_seen: Mutex<Vec<PaymentRequest>>,
        prints_seen: AtomicUsize,
    }

    impl FakeTerminal {
        fn new(bus: Arc<TerminalEvents>) -> Self {
            FakeTerminal {
                bus,
                payment_acks: Mutex::new(Vec::new()),
                payments_seen: Mutex::new(Vec::new()),
                prints_seen: AtomicUsize::new(0),
            }
        }

        fn script_payment(&self, ack: TerminalResult<Ack>) {
            self.payment_acks.lock().unwrap().push(ack);
        }

        /// Simulates the vendor SDK's completion callback.
        fn complete(&self, reference: TransactionRef, approved: bool) {
            let result = PaymentResult {
                approved,
                response_code: if approved { "00" } else { "05" }.to_string(),
                response_message: String::new(),
                reference,
                rrn: None,
                amount: Money::from_kobo(25_000),
                card: None,
                auth_code: None,
                stan: None,
                timestamp: None,
                status: CompletionStatus::Completed,
            };
            self.bus.publish_payment_completed(&result);
        }
    }

    #[async_trait]
    impl TerminalClient for FakeTerminal {
        async fn initialize(&self) -> TerminalResult<Ack> {
            Ok(Ack::ok())
        }

        async fn make_payment(&self, request: PaymentRequest) -> TerminalResult<Ack> {
            self.payments_seen.lock().unwrap().push(request);
            self.payment_acks
                .lock()
                .unwrap()
                .pop()
                .unwrap_or(Ok(Ack::ok()))
        }

        async fn print_receipt(&self, _items: &[ReceiptLineItem]) -> TerminalResult<Ack> {
            self.prints_seen.fetch_add(1, Ordering::SeqCst);
            Ok(Ack::ok())
        }

        async fn show_settings(&self) -> TerminalResult<Ack> {
            Ok(Ack::ok())
        }

        async fn call_home(&self) -> TerminalResult<Ack> {
            Ok(Ack::ok_with("parameters downloaded"))
        }
    }

    fn build() -> (Arc<FakeTerminal>, PaymentService) {
        let bus = Arc::new(TerminalEvents::new());
        let fake = Arc::new(FakeTerminal::new(Arc::clone(&bus)));
        let service = PaymentService::new(Arc::clone(&fake) as Arc<dyn TerminalClient>, bus, None);
        (fake, service)
    }

    #[tokio::test]
    async fn test_happy_path_round_trip() {
        let (fake, service) = build();
        service.initialize().await.unwrap();
        assert!(service.session_id().is_some());

        let reference = service.start_payment("250.00", None).await.unwrap();
        assert!(service.is_busy());
        assert!(reference.as_str().starts_with("TXN_"));

        let delivered = Arc::new(AtomicUsize::new(0));
        let delivered_clone = Arc::clone(&delivered);
        let _sub = service.events().on_payment_completed(move |result| {
            assert!(result.approved);
            delivered_clone.fetch_add(1, Ordering::SeqCst);
        });

        fake.complete(reference, true);

        assert_eq!(delivered.load(Ordering::SeqCst), 1);
        assert!(!service.is_busy());
    }

    #[tokio::test]
    async fn test_requires_initialize_first() {
        let (_fake, service) = build();
        let err = service.start_payment("250.00", None).await.unwrap_err();
        assert!(matches!(err, TerminalError::NotInitialized));
    }

    #[tokio::test]
    async fn test_validation_failures_never_reach_the_client() {
        let (fake, service) = build();
        service.initialize().await.unwrap();

        for input in ["", "abc", "9.99", "1000000.00", "10.005", "-50"] {
            let err = service.start_payment(input, None).await.unwrap_err();
            assert!(matches!(err, TerminalError::Validation(_)), "input {:?}", input);
        }
        assert!(fake.payments_seen.lock().unwrap().is_empty());
        assert!(!service.is_busy());
    }

    #[tokio::test]
    async fn test_second_attempt_while_in_flight_is_busy() {
        let (fake, service) = build();
        service.initialize().await.unwrap();

        let reference = service.start_payment("100.00", None).await.unwrap();
        let err = service.start_payment("200.00", None).await.unwrap_err();
        assert!(matches!(err, TerminalError::Busy));

        // Completion frees the slot for the next attempt.
        fake.complete(reference, false);
        assert!(service.start_payment("200.00", None).await.is_ok());
    }

    #[tokio::test]
    async fn test_rejected_submission_clears_in_flight_flag() {
        let (fake, service) = build();
        service.initialize().await.unwrap();

        fake.script_payment(Ok(Ack::failed("terminal busy printing")));
        let err = service.start_payment("100.00", None).await.unwrap_err();
        assert!(matches!(err, TerminalError::Client(_)));
        assert!(!service.is_busy());

        // Next attempt goes through.
        assert!(service.start_payment("100.00", None).await.is_ok());
    }

    #[tokio::test]
    async fn test_client_error_clears_in_flight_flag() {
        let (fake, service) = build();
        service.initialize().await.unwrap();

        fake.script_payment(Err(TerminalError::Client("bridge exception".to_string())));
        let err = service.start_payment("100.00", None).await.unwrap_err();
        assert!(matches!(err, TerminalError::Client(_)));
        assert!(!service.is_busy());
    }

    #[tokio::test]
    async fn test_cancellation_clears_in_flight_flag() {
        let (fake, service) = build();
        service.initialize().await.unwrap();

        let reference = service.start_payment("100.00", None).await.unwrap();
        assert!(service.is_busy());

        let result = PaymentResult {
            approved: false,
            response_code: "CANCELLED".to_string(),
            response_message: "User cancelled".to_string(),
            reference,
            rrn: None,
            amount: Money::from_kobo(10_000),
            card: None,
            auth_code: None,
            stan: None,
            timestamp: None,
            status: CompletionStatus::Cancelled,
        };
        fake.bus.publish_payment_cancelled(&result);
        assert!(!service.is_busy());
    }

    #[tokio::test]
    async fn test_caller_supplied_reference_is_used() {
        let (fake, service) = build();
        service.initialize().await.unwrap();

        let reference = service
            .start_payment_with(PaymentRequest {
                amount: Money::from_kobo(25_000),
                reference: TransactionRef::from_raw("POS-00042"),
                customer_name: Some("Ada Obi".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(reference.as_str(), "POS-00042");

        let seen = fake.payments_seen.lock().unwrap();
        assert_eq!(seen[0].reference.as_str(), "POS-00042");
        assert_eq!(seen[0].customer_name.as_deref(), Some("Ada Obi"));
    }

    #[tokio::test]
    async fn test_caller_supplied_amount_is_still_validated() {
        let (_fake, service) = build();
        service.initialize().await.unwrap();

        let err = service
            .start_payment_with(PaymentRequest {
                amount: Money::from_kobo(999), // ₦9.99
                reference: TransactionRef::from_raw("POS-1"),
                customer_name: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, TerminalError::Validation(_)));
    }

    #[tokio::test]
    async fn test_print_receipt_forwards_to_client() {
        let (fake, service) = build();
        service.initialize().await.unwrap();

        let result = PaymentResult {
            approved: true,
            response_code: "00".to_string(),
            response_message: "Approved".to_string(),
            reference: TransactionRef::from_raw("TXN_1_1"),
            rrn: None,
            amount: Money::from_kobo(25_000),
            card: None,
            auth_code: None,
            stan: None,
            timestamp: None,
            status: CompletionStatus::Completed,
        };

        service.print_payment_receipt(&result).await.unwrap();
        service.print_simple_receipt(&result).await.unwrap();
        assert_eq!(fake.prints_seen.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_shutdown_stops_republishing() {
        let (fake, service) = build();
        service.initialize().await.unwrap();
        let reference = service.start_payment("100.00", None).await.unwrap();

        let delivered = Arc::new(AtomicUsize::new(0));
        let delivered_clone = Arc::clone(&delivered);
        let _sub = service.events().on_payment_completed(move |_| {
            delivered_clone.fetch_add(1, Ordering::SeqCst);
        });

        service.shutdown();
        service.shutdown(); // idempotent

        fake.complete(reference, true);
        assert_eq!(delivered.load(Ordering::SeqCst), 0);
    }
}
