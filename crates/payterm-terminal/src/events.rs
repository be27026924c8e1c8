//! # Terminal Event Channels
//!
//! Callback-based delivery of the four terminal events.
//!
//! ## Subscription Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Single-Active-Listener Policy                       │
//! │                                                                         │
//! │  Four channels, each with AT MOST ONE active listener:                  │
//! │    • payment completed   (PaymentResult)                                │
//! │    • payment cancelled   (PaymentResult, status = Cancelled)            │
//! │    • print completed     (PrintReport)                                  │
//! │    • print error         (PrintReport)                                  │
//! │                                                                         │
//! │  subscribe ──► replaces any previous listener on that channel           │
//! │  cancel ─────► idempotent no-op when already cancelled, and             │
//! │                token-guarded: a stale handle can never tear down        │
//! │                a NEWER subscription on the same channel                  │
//! │  publish ────► silent no-op when no listener is registered              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This mirrors the native event-emitter boundary of the original
//! integration, where a second `addListener` had to tear down the prior
//! registration first and `remove` was safe to call twice.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

use payterm_core::{PaymentResult, PrintReport};

// =============================================================================
// Listener Slot
// =============================================================================

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registered<T> {
    token: u64,
    listener: Listener<T>,
}

/// One event channel: holds at most one registered listener.
struct Slot<T> {
    name: &'static str,
    inner: Mutex<Option<Registered<T>>>,
    next_token: AtomicU64,
}

impl<T> Slot<T> {
    fn new(name: &'static str) -> Self {
        Slot {
            name,
            inner: Mutex::new(None),
            next_token: AtomicU64::new(1),
        }
    }

    /// Registers a listener, replacing any previous one.
    fn subscribe(slot: &Arc<Self>, listener: Listener<T>) -> Subscription
    where
        T: 'static + Send + Sync,
    {
        let token = slot.next_token.fetch_add(1, Ordering::Relaxed);
        let replaced = {
            let mut guard = slot.inner.lock().expect("event slot poisoned");
            guard.replace(Registered { token, listener }).is_some()
        };
        debug!(channel = slot.name, token, replaced, "Listener registered");

        let slot = Arc::clone(slot);
        Subscription {
            canceller: Box::new(move || slot.unsubscribe(token)),
        }
    }

    /// Removes the listener, but only if `token` still identifies it.
    fn unsubscribe(&self, token: u64) {
        let mut guard = self.inner.lock().expect("event slot poisoned");
        if guard.as_ref().map(|r| r.token) == Some(token) {
            *guard = None;
            debug!(channel = self.name, token, "Listener removed");
        }
    }

    /// Delivers an event to the active listener, if any.
    ///
    /// The listener is cloned out of the slot before invocation so a
    /// callback may subscribe or cancel on this channel without deadlock.
    fn publish(&self, value: &T) {
        let listener = {
            let guard = self.inner.lock().expect("event slot poisoned");
            guard.as_ref().map(|r| Arc::clone(&r.listener))
        };
        match listener {
            Some(listener) => listener(value),
            None => debug!(channel = self.name, "Event dropped - no listener"),
        }
    }

    fn has_listener(&self) -> bool {
        self.inner.lock().expect("event slot poisoned").is_some()
    }
}

// =============================================================================
// Subscription Handle
// =============================================================================

/// Cancellation handle returned by every subscribe call.
///
/// `cancel` may be called any number of times; after the first call (or
/// after the listener was replaced by a newer subscription) it does
/// nothing. Dropping the handle does NOT cancel the subscription - the
/// boundary requires explicit teardown, like the emitter it wraps.
pub struct Subscription {
    canceller: Box<dyn Fn() + Send + Sync>,
}

impl Subscription {
    /// Removes the listener this handle registered. Idempotent.
    pub fn cancel(&self) {
        (self.canceller)()
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

// =============================================================================
// Terminal Events
// =============================================================================

/// The four terminal event channels.
///
/// Shared between the terminal client (publisher) and the application
/// (subscriber) as an `Arc<TerminalEvents>`.
pub struct TerminalEvents {
    payment_completed: Arc<Slot<PaymentResult>>,
    payment_cancelled: Arc<Slot<PaymentResult>>,
    print_completed: Arc<Slot<PrintReport>>,
    print_error: Arc<Slot<PrintReport>>,
}

impl TerminalEvents {
    /// Creates the channel set with no listeners registered.
    pub fn new() -> Self {
        TerminalEvents {
            payment_completed: Arc::new(Slot::new("payment_completed")),
            payment_cancelled: Arc::new(Slot::new("payment_cancelled")),
            print_completed: Arc::new(Slot::new("print_completed")),
            print_error: Arc::new(Slot::new("print_error")),
        }
    }

    // -------------------------------------------------------------------------
    // Subscribe (replaces any previous listener on the channel)
    // -------------------------------------------------------------------------

    /// Listens for the authoritative result of a completed payment.
    pub fn on_payment_completed<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&PaymentResult) + Send + Sync + 'static,
    {
        Slot::subscribe(&self.payment_completed, Arc::new(listener))
    }

    /// Listens for user cancellation (result carries `Cancelled` status).
    pub fn on_payment_cancelled<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&PaymentResult) + Send + Sync + 'static,
    {
        Slot::subscribe(&self.payment_cancelled, Arc::new(listener))
    }

    /// Listens for successful print completion.
    pub fn on_print_completed<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&PrintReport) + Send + Sync + 'static,
    {
        Slot::subscribe(&self.print_completed, Arc::new(listener))
    }

    /// Listens for print failures.
    pub fn on_print_error<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&PrintReport) + Send + Sync + 'static,
    {
        Slot::subscribe(&self.print_error, Arc::new(listener))
    }

    // -------------------------------------------------------------------------
    // Publish (called by TerminalClient implementations)
    // -------------------------------------------------------------------------

    /// Publishes a completed payment result.
    pub fn publish_payment_completed(&self, result: &PaymentResult) {
        self.payment_completed.publish(result);
    }

    /// Publishes a cancelled payment result.
    pub fn publish_payment_cancelled(&self, result: &PaymentResult) {
        self.payment_cancelled.publish(result);
    }

    /// Publishes a successful print report.
    pub fn publish_print_completed(&self, report: &PrintReport) {
        self.print_completed.publish(report);
    }

    /// Publishes a failed print report.
    pub fn publish_print_error(&self, report: &PrintReport) {
        self.print_error.publish(report);
    }

    /// True when any channel has an active listener (diagnostics).
    pub fn has_any_listener(&self) -> bool {
        self.payment_completed.has_listener()
            || self.payment_cancelled.has_listener()
            || self.print_completed.has_listener()
            || self.print_error.has_listener()
    }
}

impl Default for TerminalEvents {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
