use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::net::UdpSocket;
use tracing::debug;

use super::{ConnectivityError, ConnectivityOracle};

/// Public addresses used to test for a route out of the host, one per
/// address family. Connecting a UDP socket sends no packets.
const ROUTE_TARGETS: [(SocketAddr, SocketAddr); 2] = [
    (
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
        SocketAddr::new(IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)), 53),
    ),
    (
        SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
        SocketAddr::new(IpAddr::V6(Ipv6Addr::new(0x2606, 0x4700, 0x4700, 0, 0, 0, 0, 0x1111)), 53),
    ),
];

/// Connect errors that mean "no usable interface or route", as opposed to a
/// failure of the network stack itself
fn means_no_route(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NetworkUnreachable
            | io::ErrorKind::HostUnreachable
            | io::ErrorKind::AddrNotAvailable
            | io::ErrorKind::NetworkDown
    )
}

/// Default timeout for the reachability request.
pub const DEFAULT_REACHABILITY_TIMEOUT_SECS: u64 = 5;

/// Connectivity oracle backed by the host network stack.
///
/// Connected means two things hold: the OS has a route to a public address
/// (an interface is up), and an HTTP `HEAD` to the reachability URL gets any
/// response at all.
#[derive(Clone, Debug)]
pub struct NetworkProbe {
    client: Client,
    reachability_url: String,
}

impl NetworkProbe {
    pub fn new(reachability_url: impl Into<String>, timeout: Duration) -> Result<Self, ConnectivityError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            reachability_url: reachability_url.into(),
        })
    }

    /// Whether any address family has a route out. A family whose socket
    /// cannot be opened is skipped; if none can be opened, that is an error.
    async fn has_route(&self) -> Result<bool, ConnectivityError> {
        let mut bind_error = None;
        let mut bound_any = false;

        for (local, target) in ROUTE_TARGETS {
            let socket = match UdpSocket::bind(local).await {
                Ok(socket) => socket,
                Err(e) => {
                    debug!(family = if local.is_ipv4() { "ipv4" } else { "ipv6" }, error = %e, "Address family unavailable");
                    bind_error = Some(e);
                    continue;
                }
            };
            bound_any = true;

            match socket.connect(target).await {
                Ok(()) => return Ok(true),
                Err(e) if means_no_route(&e) => {
                    debug!(%target, error = %e, "No route to the internet");
                }
                Err(e) => return Err(e.into()),
            }
        }

        match bind_error {
            Some(e) if !bound_any => Err(e.into()),
            _ => Ok(false),
        }
    }

    async fn is_reachable(&self) -> bool {
        match self.client.head(&self.reachability_url).send().await {
            Ok(response) => {
                debug!(status = %response.status(), "Reachability probe answered");
                true
            }
            Err(e) => {
                debug!(url = %self.reachability_url, error = %e, "Reachability probe failed");
                false
            }
        }
    }
}

#[async_trait]
impl ConnectivityOracle for NetworkProbe {
    async fn is_connected(&self) -> Result<bool, ConnectivityError> {
        if !self.has_route().await? {
            return Ok(false);
        }
        Ok(self.is_reachable().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_errors_mean_no_route() {
        for kind in [
            io::ErrorKind::NetworkUnreachable,
            io::ErrorKind::HostUnreachable,
            io::ErrorKind::AddrNotAvailable,
            io::ErrorKind::NetworkDown,
        ] {
            assert!(means_no_route(&io::Error::from(kind)), "{:?}", kind);
        }
    }

    #[test]
    fn test_other_errors_are_platform_failures() {
        for kind in [
            io::ErrorKind::PermissionDenied,
            io::ErrorKind::InvalidInput,
            io::ErrorKind::Other,
        ] {
            assert!(!means_no_route(&io::Error::from(kind)), "{:?}", kind);
        }
    }

    #[test]
    fn test_route_targets_cover_both_families() {
        assert!(ROUTE_TARGETS[0].0.is_ipv4() && ROUTE_TARGETS[0].1.is_ipv4());
        assert!(ROUTE_TARGETS[1].0.is_ipv6() && ROUTE_TARGETS[1].1.is_ipv6());
    }
}
