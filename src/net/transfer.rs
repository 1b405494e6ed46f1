//! Partial-I/O-safe send and receive helpers.
//!
//! A single `write` or `read` on a stream socket may move fewer bytes than
//! asked for. These helpers loop until the whole request has been sent, or
//! until a receive chunk is full or the peer has closed the connection.

use crate::error::{NetError, Result};
use std::io::{ErrorKind, Read, Write};
use tracing::{debug, trace};

/// Outcome of filling one receive chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Received {
    /// The chunk was filled completely; more data may follow.
    Full(usize),
    /// The peer closed the connection after this many bytes (at least one,
    /// fewer than requested).
    Short(usize),
    /// The peer closed the connection before any byte of this chunk arrived.
    Closed,
}

impl Received {
    /// Returns the number of bytes placed in the buffer.
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Full(n) | Self::Short(n) => n,
            Self::Closed => 0,
        }
    }

    /// Returns true if no bytes were received.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// Writes all of `buf` to `stream`, retrying on short writes.
///
/// Returns the number of bytes sent, which always equals `buf.len()`.
/// An empty buffer succeeds immediately with zero bytes sent.
///
/// # Errors
///
/// Returns [`NetError::Send`] carrying the number of bytes transmitted
/// before the failure. Nothing is retried apart from interrupted calls.
pub fn send_all<W: Write + ?Sized>(stream: &mut W, buf: &[u8]) -> Result<usize> {
    let total = buf.len();
    let mut sent = 0;

    while sent < total {
        match stream.write(&buf[sent..]) {
            Ok(0) => {
                return Err(NetError::Send {
                    sent,
                    total,
                    reason: "connection accepted no more bytes".to_string(),
                }
                .into());
            }
            Ok(n) => {
                sent += n;
                trace!(sent, total, "partial send");
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => {
                return Err(NetError::Send {
                    sent,
                    total,
                    reason: e.to_string(),
                }
                .into());
            }
        }
    }

    stream.flush().map_err(|e| NetError::Send {
        sent,
        total,
        reason: e.to_string(),
    })?;

    debug!(bytes = sent, "request sent");
    Ok(sent)
}

/// Fills `buf` from `stream`, tolerating short reads.
///
/// Stops when `buf` is full or the peer signals end-of-stream. A chunk that
/// ends early because of a clean close is not an error. An empty `buf`
/// reports [`Received::Closed`] without reading.
///
/// # Errors
///
/// Returns [`NetError::Receive`] if the transport reports an error. Bytes
/// already placed in `buf` during this call are not reported.
pub fn recv_chunk<R: Read + ?Sized>(stream: &mut R, buf: &mut [u8]) -> Result<Received> {
    let wanted = buf.len();
    let mut filled = 0;

    while filled < wanted {
        match stream.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => {
                filled += n;
                trace!(filled, wanted, "partial receive");
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(NetError::from(e).into()),
        }
    }

    Ok(if filled == 0 {
        Received::Closed
    } else if filled == wanted {
        Received::Full(filled)
    } else {
        Received::Short(filled)
    })
}
