//! CLI command implementation.
//!
//! Runs a session against the configured target and formats the result.

use crate::cli::output::{OutputFormat, format_report};
use crate::cli::parser::Cli;
use crate::error::Result;
use crate::net::{Connector, TcpConnector};
use crate::session::run_session;

/// Executes the CLI command against the real network.
///
/// # Errors
///
/// Returns an error if the session fails at any stage.
pub fn execute(cli: &Cli) -> Result<String> {
    execute_with(&TcpConnector::new(), cli)
}

/// Executes the CLI command using `connector` for connection setup.
///
/// # Errors
///
/// Returns an error if the session fails at any stage.
pub fn execute_with<C: Connector>(connector: &C, cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let report = run_session(connector, &cli.session_config())?;
    Ok(format_report(&report, format))
}
