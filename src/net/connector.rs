//! Name resolution and connection setup.
//!
//! Resolves a host/service pair through the platform resolver and connects
//! to the first candidate address that accepts.

use crate::error::{NetError, Result};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use tracing::{debug, warn};

/// Produces a connected stream for a host/service pair.
///
/// The returned stream is owned by the caller and closed when dropped.
pub trait Connector {
    /// Stream type handed back on success.
    type Stream: Read + Write;

    /// Resolves `host`/`service` and connects to one of its addresses.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::Resolution`] if the lookup fails and
    /// [`NetError::Connection`] if no resolved address accepts.
    fn connect(&self, host: &str, service: &str) -> Result<Self::Stream>;
}

/// TCP connector backed by the system resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector;

impl TcpConnector {
    /// Creates a new TCP connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Connector for TcpConnector {
    type Stream = TcpStream;

    fn connect(&self, host: &str, service: &str) -> Result<TcpStream> {
        let candidates = resolve(host, service)?;
        connect_candidates(host, service, &candidates)
    }
}

/// Connects to the first of `candidates` that accepts, trying them in order.
///
/// `host` and `service` are only used for the error report.
///
/// # Errors
///
/// Returns [`NetError::Connection`] carrying the number of attempts and the
/// last failure if no candidate accepts.
pub fn connect_candidates(
    host: &str,
    service: &str,
    candidates: &[SocketAddr],
) -> Result<TcpStream> {
    let mut last_error = None;
    for (attempt, addr) in candidates.iter().enumerate() {
        debug!(%addr, attempt = attempt + 1, "connecting");
        // A failed attempt drops its socket before the next one is opened.
        match TcpStream::connect(addr) {
            Ok(stream) => {
                debug!(%addr, "connected");
                return Ok(stream);
            }
            Err(e) => {
                warn!(%addr, error = %e, "candidate address failed");
                last_error = Some(e);
            }
        }
    }

    Err(NetError::Connection {
        host: host.to_string(),
        service: service.to_string(),
        attempts: candidates.len(),
        reason: last_error.map_or_else(|| "no addresses".to_string(), |e| e.to_string()),
    }
    .into())
}

/// Resolves `host`/`service` into candidate addresses, in resolver order.
///
/// Any address family is accepted. `service` must be a numeric port or one
/// of the names `http`/`www` (port 80); the system services database is not
/// consulted, so other names such as `https` fail with
/// [`NetError::Resolution`].
///
/// # Errors
///
/// Returns [`NetError::Resolution`] with the resolver's diagnostic if the
/// lookup fails or yields no addresses.
pub fn resolve(host: &str, service: &str) -> Result<Vec<SocketAddr>> {
    let resolution_error = |reason: String| NetError::Resolution {
        host: host.to_string(),
        service: service.to_string(),
        reason,
    };

    let port = service_port(service)
        .ok_or_else(|| resolution_error("Servname not supported".to_string()))?;

    let candidates: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|e| resolution_error(e.to_string()))?
        .collect();

    if candidates.is_empty() {
        return Err(resolution_error("no address associated with hostname".to_string()).into());
    }

    debug!(host, port, count = candidates.len(), "resolved");
    Ok(candidates)
}

/// Maps a service string to a port number.
fn service_port(service: &str) -> Option<u16> {
    match service {
        "http" | "www" => Some(80),
        _ => service.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::net::TcpListener;

    #[test]
    fn test_service_port() {
        assert_eq!(service_port("80"), Some(80));
        assert_eq!(service_port("http"), Some(80));
        assert_eq!(service_port("8080"), Some(8080));
        assert_eq!(service_port("gopher-ish"), None);
        assert_eq!(service_port("70000"), None);
    }

    #[test]
    fn test_resolve_only_knows_http_service_names() {
        assert!(resolve("127.0.0.1", "http").is_ok());
        let err = resolve("127.0.0.1", "https").unwrap_err();
        match err {
            Error::Net(NetError::Resolution { reason, .. }) => {
                assert_eq!(reason, "Servname not supported");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_numeric_host() {
        let addrs = resolve("127.0.0.1", "8080").unwrap();
        assert_eq!(addrs, vec!["127.0.0.1:8080".parse::<SocketAddr>().unwrap()]);
    }

    #[test]
    fn test_resolve_bad_service() {
        let err = resolve("127.0.0.1", "nonsense").unwrap_err();
        assert!(matches!(err, Error::Net(NetError::Resolution { .. })));
    }

    #[test]
    fn test_resolve_unknown_host() {
        // The .invalid TLD is reserved and never resolves.
        let err = resolve("h1-counter.invalid", "80").unwrap_err();
        assert!(matches!(err, Error::Net(NetError::Resolution { .. })));
    }

    #[test]
    fn test_connect_loopback() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port().to_string();
        let stream = TcpConnector::new().connect("127.0.0.1", &port).unwrap();
        assert_eq!(stream.peer_addr().unwrap(), listener.local_addr().unwrap());
    }

    #[test]
    fn test_connect_refused() {
        // Grab a free port, then release it so nothing is listening.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port().to_string()
        };
        let err = TcpConnector::new().connect("127.0.0.1", &port).unwrap_err();
        match err {
            Error::Net(NetError::Connection { attempts, .. }) => assert_eq!(attempts, 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    /// Returns a loopback address with nothing listening on it.
    fn refused_addr() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    }

    #[test]
    fn test_connect_candidates_falls_through_to_next() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let listening = listener.local_addr().unwrap();
        let candidates = [refused_addr(), listening];

        let stream = connect_candidates("localhost", "80", &candidates).unwrap();
        assert_eq!(stream.peer_addr().unwrap(), listening);
    }

    #[test]
    fn test_connect_candidates_all_refused() {
        let candidates = [refused_addr(), refused_addr()];
        let err = connect_candidates("localhost", "80", &candidates).unwrap_err();
        match err {
            Error::Net(NetError::Connection {
                attempts, host, ..
            }) => {
                assert_eq!(attempts, 2);
                assert_eq!(host, "localhost");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_connect_candidates_empty() {
        let err = connect_candidates("localhost", "80", &[]).unwrap_err();
        assert!(matches!(
            err,
            Error::Net(NetError::Connection { attempts: 0, .. })
        ));
    }
}
