use thiserror::Error;

use crate::api::ApiError;
use crate::connectivity::ConnectivityError;

/// Failure of a repository read. Each variant names the branch that failed;
/// online failures keep the original network error as their source.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Failed to fetch users and no cached data available")]
    Network {
        #[source]
        source: ApiError,
    },

    #[error("Failed to fetch user {id} and it is not in the cache")]
    UserUnavailable {
        id: i64,
        #[source]
        source: ApiError,
    },

    #[error("No internet connection and no cached data available")]
    NoConnectivityNoCache,

    #[error("No internet connection and user {id} not found in cache")]
    NoConnectivityUserNotFound { id: i64 },

    #[error(transparent)]
    Connectivity(#[from] ConnectivityError),
}

impl RepositoryError {
    /// The network error behind an online failure
    pub fn network_error(&self) -> Option<&ApiError> {
        match self {
            RepositoryError::Network { source } | RepositoryError::UserUnavailable { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }

    /// True when the failure happened without a network connection
    pub fn is_offline(&self) -> bool {
        matches!(
            self,
            RepositoryError::NoConnectivityNoCache | RepositoryError::NoConnectivityUserNotFound { .. }
        )
    }
}
