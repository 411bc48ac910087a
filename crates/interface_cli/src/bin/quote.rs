//! GCCV premium quote binary
//!
//! # Usage
//!
//! ```bash
//! # Read the request from a file
//! gccv-quote request.json
//!
//! # Or from stdin, with JSON output
//! QUOTE_OUTPUT=json gccv-quote < request.json
//! ```
//!
//! # Environment Variables
//!
//! * `QUOTE_LOG_LEVEL` - Log level or filter directive (default: info)
//! * `QUOTE_LOG_JSON` - Emit logs as JSON lines (default: false)
//! * `QUOTE_OUTPUT` - `text` or `json` (default: text)
//! * `QUOTE_CONSUMABLE_INCLUDES_CNG` - Add the CNG kit value to the consumables basis (default: true)
//!
//! Logs go to stderr so stdout carries only the quote.

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::Context;
use interface_cli::config::{CliConfig, OutputFormat};
use interface_cli::error::CliError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config.log_level, config.log_json);

    let today = chrono::Local::now().date_naive();
    let stdout = io::stdout().lock();

    let result = match std::env::args().nth(1) {
        Some(path) => {
            tracing::debug!(%path, "Reading request file");
            let file = File::open(&path).with_context(|| format!("Failed to open {}", path))?;
            interface_cli::run(&config, BufReader::new(file), stdout, today)
        }
        None => {
            tracing::debug!("Reading request from stdin");
            interface_cli::run(&config, io::stdin().lock(), stdout, today)
        }
    };

    if let Err(err) = &result {
        tracing::error!(error = %err, "Quote failed");
        if config.output == OutputFormat::Json {
            report_json(err)?;
        }
    }
    result.context("Failed to compute quote")
}

/// Initializes the tracing subscriber, writing to stderr
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
    });
    let text_layer = (!json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn report_json(err: &CliError) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &err.to_response()).context("Failed to write error")?;
    writeln!(stdout)?;
    Ok(())
}
