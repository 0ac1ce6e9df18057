//! Example: reputation check against the sandbox service
//!
//! This example demonstrates how to:
//! 1. Configure a client for the sandbox environment
//! 2. Check a buyer's reputation against a threshold
//! 3. Classify the answer into a flag level
//! 4. Report a delivery outcome
//!
//! ## Prerequisites
//!
//! Set environment variables:
//! ```bash
//! export UVB_PUBLIC_KEY="your-public-key"
//! export UVB_PRIVATE_KEY="your-private-key"
//! export UVB_EMAIL="buyer@example.com"
//! ```
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=uvb_client=debug cargo run --example sandbox_check
//! ```

use std::env;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uvb_client::{Classifier, Credentials, Outcome, ReputationClient, Signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uvb_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let public_key = env::var("UVB_PUBLIC_KEY").context("UVB_PUBLIC_KEY not set")?;
    let private_key = env::var("UVB_PRIVATE_KEY").context("UVB_PRIVATE_KEY not set")?;
    let email = env::var("UVB_EMAIL").context("UVB_EMAIL not set")?;
    let threshold = 0.5;

    let client =
        ReputationClient::new(Credentials::new(public_key, private_key))?.with_sandbox(true);

    println!("Checking {email} (threshold {threshold})...");
    let Some(reputation) = client.check_reputation(&email, threshold).await? else {
        println!("  No answer from the service, order would not be flagged.");
        return Ok(());
    };
    println!("  Score: {}", reputation.score());

    match Classifier::new().classify(&reputation.assessment(threshold)) {
        Some(level) => println!("  Flag: {level} ({})", level.label()),
        None => println!("  No flag."),
    }

    println!("Reporting a delivered order...");
    let signal = Signal::new(&email, Outcome::Delivered, "sandbox-1").with_country_code("HU");
    match client.report_outcome(&signal).await? {
        Some(ack) => println!("  Acknowledged: {ack}"),
        None => println!("  Signal not delivered."),
    }

    Ok(())
}
