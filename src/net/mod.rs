//! Network layer.
//!
//! Connection setup and the partial-I/O-safe transfer helpers the session
//! loop is built on.

pub mod connector;
pub mod transfer;

pub use connector::{Connector, TcpConnector, connect_candidates, resolve};
pub use transfer::{Received, recv_chunk, send_all};
