//! CLI layer for h1-counter.
//!
//! Provides the command-line interface using clap, plus result and error
//! formatting.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{execute, execute_with};
pub use output::OutputFormat;
pub use parser::Cli;
