//! Command-line front end
//!
//! Reads one quote request as JSON, runs the premium calculator and writes
//! either the plain-text statement or the breakdown as JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{config::CliConfig, run};
//!
//! let config = CliConfig::from_env()?;
//! run(&config, std::io::stdin().lock(), std::io::stdout().lock(), today)?;
//! ```

pub mod config;
pub mod error;

use std::io::{Read, Write};

use chrono::NaiveDate;
use core_kernel::Money;
use domain_rating::{BreakdownLine, PremiumBreakdown, PremiumCalculator, QuoteRequest, QuoteStatement};
use serde::Serialize;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

/// JSON output body
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub breakdown: PremiumBreakdown,
    /// Lines a statement would print, unrounded
    pub lines: Vec<BreakdownLine>,
    /// Grand total rounded to paise
    pub grand_total: Money,
}

impl QuoteResponse {
    pub fn new(breakdown: PremiumBreakdown) -> Self {
        let lines = breakdown.lines().into_iter().filter(BreakdownLine::is_visible).collect();
        Self {
            grand_total: breakdown.grand_total.round_to_paise(),
            lines,
            breakdown,
        }
    }
}

/// Parses a quote request from JSON
pub fn read_request(reader: impl Read) -> Result<QuoteRequest, CliError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads a request, computes it and writes the result in the configured
/// format
pub fn run(config: &CliConfig, input: impl Read, mut output: impl Write, today: NaiveDate) -> Result<(), CliError> {
    let request = read_request(input)?;
    let calculator = PremiumCalculator::new(config.rating_options());
    let breakdown = calculator.quote(&request, today)?;

    tracing::info!(
        grand_total = %breakdown.grand_total.round_to_paise(),
        output = ?config.output,
        "Quote computed"
    );

    match config.output {
        OutputFormat::Text => {
            let statement = QuoteStatement::render(&breakdown, request.policy_details.as_ref());
            write!(output, "{}", statement)?;
            writeln!(output)?;
            writeln!(output, "{}", statement.summary_banner())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut output, &QuoteResponse::new(breakdown))?;
            writeln!(output)?;
        }
    }
    Ok(())
}
