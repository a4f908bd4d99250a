//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//! Log lines are compact and hide the module path (`with_target(false)`); the
//! level comes from the `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup with the seeded counts, shutdown with the final summary
//! - **Ledger requests**: one `debug` line per request, `info` on a successful cancel,
//!   `warn` with the error on a refused one
//! - **Client calls**: a span per call via `#[instrument]`
//!
//! The ledger itself never logs.
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run -- --cancel ORD-001 --reason customer-choice
//! RUST_LOG=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Ledger seeded orders=5 undeliverable=2
//! INFO Actor started orders=5 undeliverable=2
//! INFO Cancelled id=ORD-001 reason=Customer Choice
//! INFO Shutdown delivered=2 pending=2 cancelled=1 undeliverable=2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
