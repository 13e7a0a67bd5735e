use std::net::SocketAddr;

use tokio::net::lookup_host;

// ---

use floodgate_domain::{FloodgateError, Result};

// ---------------------------------------------------------------------------
// Service names
// ---------------------------------------------------------------------------

/// Well-known service names accepted in place of a decimal port.
const SERVICES: &[(&str, u16)] = &[("http", 80), ("https", 443)];

// ---

/// Map `service` to a port: decimal string first, then the name table.
fn service_port(service: &str) -> Result<u16> {
    // ---
    if let Ok(port) = service.parse::<u16>() {
        return Ok(port);
    }
    SERVICES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(service))
        .map(|&(_, port)| port)
        .ok_or_else(|| FloodgateError::Resolve(format!("unknown service: {service}")))
}

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

/// Resolve `host:service` to a connectable socket address.
///
/// `service` is either a decimal port number or a well-known service name
/// (`"http"`, `"https"`). The first address returned by the system resolver
/// wins. Failures are runtime conditions — an unresolvable host or an
/// unknown service name returns [`FloodgateError::Resolve`], never panics.
pub async fn resolve(host: &str, service: &str) -> Result<SocketAddr> {
    // ---
    let port = service_port(service)?;

    let mut addrs = lookup_host((host, port))
        .await
        .map_err(|e| FloodgateError::Resolve(format!("{host}:{port}: {e}")))?;

    let addr = addrs
        .next()
        .ok_or_else(|| FloodgateError::Resolve(format!("{host}:{port}: no addresses returned")))?;

    tracing::debug!(%host, port, %addr, "resolved");
    Ok(addr)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    // ---
    use floodgate_domain::FloodgateError;

    use super::{resolve, service_port};

    // ---

    #[test]
    fn numeric_service_is_a_port() {
        // ---
        assert_eq!(service_port("8080").unwrap(), 8080);
        assert_eq!(service_port("80").unwrap(), 80);
    }

    // ---

    #[test]
    fn named_services_map_to_ports() {
        // ---
        assert_eq!(service_port("http").unwrap(), 80);
        assert_eq!(service_port("HTTPS").unwrap(), 443, "names are case-insensitive");
    }

    // ---

    #[test]
    fn unknown_service_is_an_error() {
        // ---
        let err = service_port("gopher-ng").unwrap_err();
        assert!(matches!(err, FloodgateError::Resolve(_)));
        assert!(err.to_string().contains("unknown service"));
    }

    // ---

    #[tokio::test]
    async fn ip_literal_resolves_to_itself() {
        // ---
        let addr = resolve("127.0.0.1", "8080").await.unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    // ---

    #[tokio::test]
    async fn unresolvable_host_is_an_error() {
        // ---
        // .invalid is reserved (RFC 2606) and never resolves.
        let err = resolve("no-such-host.invalid", "http").await.unwrap_err();
        assert!(matches!(err, FloodgateError::Resolve(_)));
    }
}
