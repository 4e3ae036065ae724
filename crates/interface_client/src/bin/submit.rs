//! Loan Intake - Submission CLI
//!
//! Reads a request draft from a JSON file, runs it through the intake
//! pipeline, and prints the outcome.
//!
//! # Usage
//!
//! ```bash
//! # Submit a draft against the default backend
//! cargo run --bin intake-submit -- draft.json
//!
//! # Run with environment variables
//! INTAKE_BASE_URL=https://loans.example.com cargo run --bin intake-submit -- draft.json
//! ```
//!
//! # Environment Variables
//!
//! * `INTAKE_BASE_URL` - Base URL of the loan backend (default: http://localhost:8080)
//! * `INTAKE_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
//! * `INTAKE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::sync::Arc;

use domain_request::{RequestDraft, RequestIntake, SubmissionStatus};
use interface_client::{ClientConfig, HttpSubmissionAdapter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the submission CLI.
///
/// Initializes logging, loads configuration, reads the draft file, and runs
/// one submission attempt.
///
/// # Errors
///
/// Returns an error if the draft file cannot be read or parsed, or if the
/// HTTP client cannot be constructed. Backend rejections and unreachable
/// backends are reported as outcomes, not process errors.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = load_config();

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    let draft_path = std::env::args()
        .nth(1)
        .ok_or("usage: intake-submit <draft.json>")?;

    tracing::info!(%draft_path, base_url = %config.base_url, "Submitting loan request draft");

    let raw = std::fs::read_to_string(&draft_path)?;
    let draft: RequestDraft = serde_json::from_str(&raw)?;

    let adapter = Arc::new(HttpSubmissionAdapter::new(config)?);
    let mut intake = RequestIntake::new(draft.carryover(), adapter);
    *intake.draft_mut() = draft;

    let report = intake.submit().await?;
    for issue in &report.issues {
        tracing::warn!(field = %issue.field, "{}", issue.message);
    }

    match intake.status() {
        SubmissionStatus::Succeeded { receipt, .. } => {
            println!("created: {}", receipt.id);
        }
        SubmissionStatus::Rejected { status, details } => {
            println!("rejected ({status}): {details}");
        }
        SubmissionStatus::Unreachable { reason } => {
            println!("backend unreachable: {reason}");
        }
        other => {
            println!("unexpected final state: {}", other.label());
        }
    }

    if let Some(path) = intake.take_navigation() {
        println!("open {path}");
    }

    Ok(())
}

/// Loads client configuration from environment variables.
///
/// Falls back to individual variables or defaults when the prefixed set is
/// incomplete.
fn load_config() -> ClientConfig {
    ClientConfig::from_env().unwrap_or_else(|_| ClientConfig {
        base_url: std::env::var("INTAKE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        timeout_secs: std::env::var("INTAKE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30),
        log_level: std::env::var("INTAKE_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
