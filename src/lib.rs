//! # h1-counter
//!
//! Fetches a fixed web page over a plain TCP connection and counts the
//! `<h1>` tags in the response.
//!
//! A single HTTP/1.0 request is sent, the response is read in caller-chosen
//! chunk sizes until the server closes the connection, and two totals are
//! reported: bytes received and case-insensitive `<h1>` occurrences. The
//! response is not parsed as HTTP; headers count toward the byte total.
//!
//! ## Features
//!
//! - **Partial-I/O safety**: sends and receives loop over short writes and reads
//! - **Counting modes**: per-chunk scanning (tags split across chunks are
//!   missed) or opt-in carry-over scanning
//! - **Pluggable connector**: connection setup sits behind the [`Connector`] trait

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod cli;
pub mod counting;
pub mod error;
pub mod net;
pub mod session;

// Re-export commonly used types at crate root
pub use error::{Error, NetError, Result, UsageError};

// Re-export counting types
pub use counting::{
    CarryOverCounter, ChunkCounter, DEFAULT_TAG, TagCounter, available_modes, create_counter,
};

// Re-export network types
pub use net::{Connector, Received, TcpConnector, recv_chunk, send_all};

// Re-export session types
pub use session::{
    RECV_BUFFER_CAPACITY, REQUEST, Report, SessionConfig, count_stream, run_session,
};

// Re-export CLI types
pub use cli::{Cli, OutputFormat};
