//! # PayTerm CLI
//!
//! Demo binary: runs one payment through the simulated terminal and
//! prints the composed receipt to stdout.
//!
//! ## Usage
//! ```text
//! payterm <amount> [approve|decline|cancel]
//!
//! payterm 250.00            # approved payment + receipt
//! payterm 250.00 decline    # declined payment + receipt
//! payterm 9.99              # rejected by validation, exit code 1
//! ```

mod render;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use payterm_core::{compose, PaymentResult};
use payterm_terminal::{
    PaymentService, SimOutcome, SimulatedTerminal, TerminalConfig, TerminalEvents,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let amount_input = match args.get(1) {
        Some(a) => a.clone(),
        None => {
            eprintln!("usage: payterm <amount> [approve|decline|cancel]");
            return ExitCode::FAILURE;
        }
    };
    let outcome = match args.get(2).map(String::as_str) {
        None | Some("approve") => SimOutcome::Approve,
        Some("decline") => SimOutcome::Decline,
        Some("cancel") => SimOutcome::Cancel,
        Some(other) => {
            eprintln!("unknown outcome '{}', expected approve|decline|cancel", other);
            return ExitCode::FAILURE;
        }
    };

    // Load configuration
    let config = match TerminalConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("config error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let merchant = config.merchant_info();

    // Wire the simulated terminal to the service over a shared bus.
    let bus = Arc::new(TerminalEvents::new());
    let terminal = Arc::new(
        SimulatedTerminal::new(Arc::clone(&bus))
            .with_outcome(outcome)
            .with_delay(Duration::from_millis(300)),
    );
    let service = PaymentService::new(terminal, bus, merchant.clone());

    if let Err(e) = service.initialize().await {
        eprintln!("initialize failed: {}", e);
        return ExitCode::FAILURE;
    }

    // One channel for both outcomes - either way the attempt is over.
    let (tx, mut rx) = mpsc::unbounded_channel::<PaymentResult>();
    let tx_completed = tx.clone();
    let _completed = service.events().on_payment_completed(move |result| {
        let _ = tx_completed.send(result.clone());
    });
    let _cancelled = service.events().on_payment_cancelled(move |result| {
        let _ = tx.send(result.clone());
    });

    match service.start_payment(&amount_input, None).await {
        Ok(reference) => info!(%reference, "Payment submitted, waiting for terminal"),
        Err(e) => {
            eprintln!("payment rejected: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let result = match rx.recv().await {
        Some(result) => result,
        None => {
            eprintln!("terminal event channel closed");
            return ExitCode::FAILURE;
        }
    };

    if result.is_cancelled() {
        println!("Transaction cancelled by user.");
        return ExitCode::FAILURE;
    }

    let receipt = compose(&result, merchant.as_ref());
    println!("{}", render::render(&receipt));

    service.shutdown();
    if result.approved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
