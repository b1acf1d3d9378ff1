//! Composition root: builds the repository once from configuration and
//! hands it to the use cases the commands run.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use tracing::debug;
use usercache_core::{
    ApiClient, ApiError, CachedUserRepository, Config, ConnectivityOracle, FileUserStore, Fetched,
    GetUserByIdUseCase, GetUsersUseCase, NetworkProbe, RepositoryError, StaticConnectivity, User,
    UserRepository, UserStore,
};

use crate::cli::Cli;

/// Snapshot of connectivity and cache state for `usercache status`.
#[derive(Debug)]
pub struct Status {
    pub base_url: String,
    pub offline_mode: bool,
    /// `Err` carries the message of a failed connectivity check
    pub connected: Result<bool, String>,
    pub cache_dir: PathBuf,
    /// `Err` carries why the cache could not be read
    pub cached_users: Result<usize, String>,
    pub last_saved: Option<DateTime<Utc>>,
}

pub struct App {
    config: Config,
    cache_dir: PathBuf,
    connectivity: Arc<dyn ConnectivityOracle>,
    store: Arc<dyn UserStore>,
    get_users: GetUsersUseCase,
    get_user_by_id: GetUserByIdUseCase,
}

impl App {
    pub fn new(cli: &Cli) -> Result<Self> {
        let mut config = Config::load()?;
        if let Some(ref url) = cli.base_url {
            config.base_url = url.clone();
        }
        if cli.offline {
            config.offline_mode = true;
        }

        let cache_dir = config.cache_dir()?;
        debug!(?cache_dir, "Cache directory configured");

        let store: Arc<dyn UserStore> = Arc::new(
            FileUserStore::new(cache_dir.clone())
                .with_context(|| format!("Failed to open cache directory {}", cache_dir.display()))?,
        );

        let connectivity: Arc<dyn ConnectivityOracle> = if config.offline_mode {
            Arc::new(StaticConnectivity::offline())
        } else {
            Arc::new(NetworkProbe::new(config.reachability_url(), config.reachability_timeout())?)
        };

        let source = Arc::new(ApiClient::with_timeout(&config.base_url, config.request_timeout())?);

        let repository: Arc<dyn UserRepository> = Arc::new(CachedUserRepository::new(
            connectivity.clone(),
            store.clone(),
            source,
        ));

        Ok(Self {
            config,
            cache_dir,
            connectivity,
            store,
            get_users: GetUsersUseCase::new(repository.clone()),
            get_user_by_id: GetUserByIdUseCase::new(repository),
        })
    }

    pub async fn list_users(&self) -> Result<Fetched<Vec<User>>> {
        Ok(self.get_users.execute().await?)
    }

    pub async fn show_user(&self, id: i64) -> Result<Fetched<User>> {
        self.get_user_by_id.execute(id).await.map_err(|e| explain_show_error(id, e))
    }

    pub async fn cache_last_saved(&self) -> Option<DateTime<Utc>> {
        self.store.last_saved().await
    }

    pub async fn status(&self) -> Status {
        let (connected, cached, last_saved) = futures::join!(
            self.connectivity.is_connected(),
            self.store.load_all(),
            self.store.last_saved(),
        );

        Status {
            base_url: self.config.base_url.clone(),
            offline_mode: self.config.offline_mode,
            connected: connected.map_err(|e| e.to_string()),
            cache_dir: self.cache_dir.clone(),
            cached_users: cached.map(|users| users.len()).map_err(|e| e.to_string()),
            last_saved,
        }
    }
}

/// Turns "the service has no such user" into a direct message; other
/// failures keep their own wording.
fn explain_show_error(id: i64, error: RepositoryError) -> anyhow::Error {
    let unknown = error.network_error().is_some_and(ApiError::is_not_found);
    if unknown {
        anyhow!("User {} does not exist on the service and is not cached", id)
    } else {
        error.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_user_gets_direct_message() {
        let error = RepositoryError::UserUnavailable {
            id: 42,
            source: ApiError::NotFound("{}".to_string()),
        };
        assert_eq!(
            explain_show_error(42, error).to_string(),
            "User 42 does not exist on the service and is not cached"
        );
    }

    #[test]
    fn test_other_failures_keep_their_message() {
        let error = RepositoryError::UserUnavailable {
            id: 42,
            source: ApiError::ServerError("down".to_string()),
        };
        assert_eq!(
            explain_show_error(42, error).to_string(),
            "Failed to fetch user 42 and it is not in the cache"
        );

        let offline = explain_show_error(7, RepositoryError::NoConnectivityUserNotFound { id: 7 });
        assert_eq!(offline.to_string(), "No internet connection and user 7 not found in cache");
    }
}
