//! Run with
//!
//! ```not_rust
//! cargo run --example admission -- 'https://app.example.com/?token=eyJ...'
//! ```
//!
//! Runs the startup admission sequence against the given page URL with an
//! empty in-memory store and prints the resulting state as JSON.

use tokengate::{GateConfig, MemoryLocation, MemoryStore, TokenGate};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug,tokengate=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let href = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:3000/".to_string());

    let mut gate = TokenGate::new(
        MemoryStore::new(),
        MemoryLocation::new(href),
        GateConfig::default(),
    )?;

    gate.initialize();

    println!("{}", serde_json::to_string_pretty(gate.state())?);
    println!("address bar: {}", gate.location().url());

    Ok(())
}
