//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::counting::{DEFAULT_MODE, available_modes, create_counter};
use crate::session::{DEFAULT_HOST, DEFAULT_SERVICE, SessionConfig};
use clap::Parser;
use clap::builder::{PossibleValue, PossibleValuesParser};

/// Fetch a fixed web page and count its h1 tags.
///
/// Sends a single HTTP/1.0 request, reads the response `CHUNK_SIZE` bytes at
/// a time until the server closes the connection, then reports the number of
/// bytes received and the number of `<h1>` tags found (case-insensitive).
#[derive(Parser, Debug)]
#[command(name = "h1-counter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Bytes to request per receive call (1-1000).
    pub chunk_size: usize,

    /// Enable verbose logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Counting mode.
    #[arg(short, long, default_value = DEFAULT_MODE, value_parser = mode_parser())]
    pub mode: String,

    /// Host override, for pointing at a local test server.
    #[arg(long, env = "H1_COUNTER_HOST", default_value = DEFAULT_HOST, hide = true)]
    pub host: String,

    /// Port override, for pointing at a local test server.
    #[arg(long, env = "H1_COUNTER_PORT", default_value = DEFAULT_SERVICE, hide = true)]
    pub port: String,
}

impl Cli {
    /// Builds the session config from the parsed arguments.
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.chunk_size)
            .host(&self.host)
            .service(&self.port)
            .mode(&self.mode)
    }
}

/// Accepts the available counting modes, each shown with its description.
fn mode_parser() -> PossibleValuesParser {
    PossibleValuesParser::new(available_modes().into_iter().map(|name| {
        let value = PossibleValue::new(name);
        match create_counter(name) {
            Ok(counter) => value.help(counter.description()),
            Err(_) => value,
        }
    }))
}
