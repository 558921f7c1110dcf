//! Triage application entry point
//!
//! Run with:
//! ```bash
//! cargo run -p triage-app
//! ```
//!
//! Configuration is loaded from environment variables (`LEXICON_PATH`,
//! `MESSAGES_PATH`, `APP_ENV`, ...), with `.env` support.

use triage_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, code = e.error_code(), "Startup failed");
        std::process::exit(1);
    }
}

async fn run() -> triage_common::AppResult<()> {
    info!("Starting triage...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        lexicon = %config.lexicon.path.display(),
        "Configuration loaded"
    );

    triage_app::run(config).await
}
