//! Session driver.
//!
//! Runs one session end to end: connect, send the fixed request, then
//! receive the response in fixed-size chunks, counting tags in each chunk
//! until the peer closes the connection.

use crate::counting::{DEFAULT_MODE, TagCounter, create_counter};
use crate::error::{Error, Result, UsageError};
use crate::net::{Connector, Received, recv_chunk, send_all};
use serde::Serialize;
use std::io::Read;
use tracing::{debug, info};

/// Capacity of the receive buffer; the largest allowed chunk size.
pub const RECV_BUFFER_CAPACITY: usize = 1000;

/// Host the request is sent to.
pub const DEFAULT_HOST: &str = "www.ecst.csuchico.edu";

/// Service (port) the request is sent to.
pub const DEFAULT_SERVICE: &str = "80";

/// The request sent once per session. HTTP/1.0 makes the server close the
/// connection at the end of the response, which ends the receive loop.
pub const REQUEST: &[u8] = b"GET /~kkredo/file.html HTTP/1.0\r\n\r\n";

/// Settings for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Host to connect to.
    pub host: String,
    /// Service (port) to connect to.
    pub service: String,
    /// Bytes requested per receive call.
    pub chunk_size: usize,
    /// Counting mode name.
    pub mode: String,
}

impl SessionConfig {
    /// Creates a config for the default target with the given chunk size.
    #[must_use]
    pub fn new(chunk_size: usize) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            service: DEFAULT_SERVICE.to_string(),
            chunk_size,
            mode: DEFAULT_MODE.to_string(),
        }
    }

    /// Sets the host.
    #[must_use]
    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// Sets the service.
    #[must_use]
    pub fn service(mut self, service: &str) -> Self {
        self.service = service.to_string();
        self
    }

    /// Sets the counting mode.
    #[must_use]
    pub fn mode(mut self, mode: &str) -> Self {
        self.mode = mode.to_string();
        self
    }

    /// Checks the chunk size against the receive buffer.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::InvalidChunkSize`] unless
    /// `1 <= chunk_size <= RECV_BUFFER_CAPACITY`, and a config error for an
    /// empty host or service.
    pub fn validate(&self) -> Result<()> {
        check_chunk_size(self.chunk_size)?;
        if self.host.is_empty() || self.service.is_empty() {
            return Err(Error::Config {
                message: "host and service must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn check_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 || chunk_size > RECV_BUFFER_CAPACITY {
        return Err(UsageError::InvalidChunkSize {
            value: chunk_size,
            max: RECV_BUFFER_CAPACITY,
        }
        .into());
    }
    Ok(())
}

/// Totals for a completed session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Bytes received, response headers included.
    pub bytes: u64,
    /// Tags counted.
    pub tags: u64,
}

/// Runs one session against `config`'s target.
///
/// The chunk size and mode are validated before any network activity. The
/// stream is closed exactly once, on success and on every error path, when
/// it goes out of scope.
///
/// # Errors
///
/// Returns a usage error for an invalid config, or the first network error
/// from connecting, sending or receiving. No partial report is produced.
pub fn run_session<C: Connector>(connector: &C, config: &SessionConfig) -> Result<Report> {
    config.validate()?;
    let mut counter = create_counter(&config.mode)?;

    let mut stream = connector.connect(&config.host, &config.service)?;
    send_all(&mut stream, REQUEST)?;
    let report = count_stream(&mut stream, config.chunk_size, counter.as_mut())?;
    drop(stream);

    info!(
        bytes = report.bytes,
        tags = report.tags,
        mode = counter.name(),
        tag = %String::from_utf8_lossy(counter.tag()),
        "session complete"
    );
    Ok(report)
}

/// Receives `stream` to end-of-stream in chunks of `chunk_size` bytes,
/// feeding each chunk to `counter`.
///
/// # Errors
///
/// Returns a usage error if `chunk_size` is outside the receive buffer, or
/// the receive error that ended the loop.
pub fn count_stream<R: Read + ?Sized>(
    stream: &mut R,
    chunk_size: usize,
    counter: &mut dyn TagCounter,
) -> Result<Report> {
    check_chunk_size(chunk_size)?;

    let mut buf = [0u8; RECV_BUFFER_CAPACITY];
    let mut report = Report::default();
    let mut chunks = 0u64;

    loop {
        let filled = match recv_chunk(&mut *stream, &mut buf[..chunk_size])? {
            Received::Closed => break,
            received => received.len(),
        };

        let tags = counter.count(&buf[..filled]);
        chunks += 1;
        report.bytes += filled as u64;
        report.tags += tags as u64;
        debug!(chunk = chunks, bytes = filled, tags, "chunk processed");
    }

    debug!(chunks, "peer closed connection");
    Ok(report)
}
