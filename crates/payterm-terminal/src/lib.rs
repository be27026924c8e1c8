//! # payterm-terminal: Terminal Integration Boundary
//!
//! This crate owns everything that touches the vendor payment terminal:
//! the injected [`TerminalClient`] capability, the callback event
//! channels, the thin [`PaymentService`] in front of them, configuration,
//! and an in-process simulator.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Terminal Boundary                                  │
//! │                                                                         │
//! │   Application ──► PaymentService ──► TerminalClient (injected)          │
//! │        ▲                │                   │                           │
//! │        │                │ validates,        │ vendor bridge /           │
//! │        │                │ builds refs,      │ SimulatedTerminal /       │
//! │        │                │ in-flight flag    │ test fake                 │
//! │        │                │                   │                           │
//! │        └── public ◄── republish ◄── terminal bus (TerminalEvents)       │
//! │            events                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Contracts
//! - `make_payment` is fire-and-forget; the authoritative
//!   [`payterm_core::PaymentResult`] arrives via the event channels.
//! - Each event channel holds at most one listener; subscribing replaces
//!   the previous listener and cancellation is idempotent.
//! - The only recovery state is the in-flight flag, cleared on every
//!   failure so a fresh attempt can be made.

pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod service;
pub mod simulator;

pub use client::{Ack, PaymentRequest, TerminalClient};
pub use config::{DeviceConfig, MerchantConfig, TerminalConfig};
pub use error::{TerminalError, TerminalResult};
pub use events::{Subscription, TerminalEvents};
pub use service::PaymentService;
pub use simulator::{SimOutcome, SimulatedTerminal};
