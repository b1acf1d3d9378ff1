//! Network reachability checks.
//!
//! A `ConnectivityOracle` answers "can we reach the internet right now?"
//! once per call. `execute_with_connectivity_check` uses that answer to run
//! exactly one of an online or an offline branch.

pub mod probe;

use std::future::Future;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

pub use probe::NetworkProbe;

#[derive(Error, Debug)]
pub enum ConnectivityError {
    #[error("Connectivity check failed: {0}")]
    Platform(#[from] std::io::Error),

    #[error("Could not build reachability client: {0}")]
    Client(#[from] reqwest::Error),
}

#[async_trait]
pub trait ConnectivityOracle: Send + Sync {
    /// True only when a network interface is up and the internet is
    /// reachable. Undeterminable reachability counts as not connected;
    /// failure of the check itself is an error.
    async fn is_connected(&self) -> Result<bool, ConnectivityError>;
}

/// Oracle with a fixed answer, for forced offline mode.
#[derive(Debug, Clone, Copy)]
pub struct StaticConnectivity {
    connected: bool,
}

impl StaticConnectivity {
    pub fn online() -> Self {
        Self { connected: true }
    }

    pub fn offline() -> Self {
        Self { connected: false }
    }
}

#[async_trait]
impl ConnectivityOracle for StaticConnectivity {
    async fn is_connected(&self) -> Result<bool, ConnectivityError> {
        Ok(self.connected)
    }
}

/// Check connectivity once, then await exactly one of `online` or `offline`.
pub async fn execute_with_connectivity_check<O, T, E, On, OnFut, Off, OffFut>(
    oracle: &O,
    online: On,
    offline: Off,
) -> Result<T, E>
where
    O: ConnectivityOracle + ?Sized,
    E: From<ConnectivityError>,
    On: FnOnce() -> OnFut,
    OnFut: Future<Output = Result<T, E>>,
    Off: FnOnce() -> OffFut,
    OffFut: Future<Output = Result<T, E>>,
{
    let connected = oracle.is_connected().await?;
    debug!(connected, "Connectivity checked");
    if connected {
        online().await
    } else {
        offline().await
    }
}
