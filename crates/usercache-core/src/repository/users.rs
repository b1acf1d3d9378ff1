use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::api::UserSource;
use crate::cache::{CacheError, UserStore};
use crate::connectivity::{execute_with_connectivity_check, ConnectivityOracle};
use crate::models::User;

use super::{Fetched, RepositoryError, UserRepository};

/// Repository composed from injected collaborators. Build it once and share
/// it behind an `Arc`.
pub struct CachedUserRepository {
    connectivity: Arc<dyn ConnectivityOracle>,
    store: Arc<dyn UserStore>,
    source: Arc<dyn UserSource>,
}

impl CachedUserRepository {
    pub fn new(
        connectivity: Arc<dyn ConnectivityOracle>,
        store: Arc<dyn UserStore>,
        source: Arc<dyn UserSource>,
    ) -> Self {
        Self {
            connectivity,
            store,
            source,
        }
    }

    /// Non-empty cached list, or None. Cache errors stop here and are only logged.
    async fn cached_users(&self) -> Option<Vec<User>> {
        match self.store.load_all().await {
            Ok(users) if !users.is_empty() => Some(users),
            Ok(_) => {
                debug!("Cached user list is empty");
                None
            }
            Err(CacheError::Missing) => {
                debug!("No cached user list");
                None
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable user cache");
                None
            }
        }
    }

    async fn cached_user(&self, id: i64) -> Option<User> {
        self.cached_users().await?.into_iter().find(|u| u.id == id)
    }
}

#[async_trait]
impl UserRepository for CachedUserRepository {
    async fn get_users(&self) -> Result<Fetched<Vec<User>>, RepositoryError> {
        execute_with_connectivity_check(
            self.connectivity.as_ref(),
            || async move {
                match self.source.fetch_all().await {
                    Ok(users) => {
                        if let Err(e) = self.store.save_all(&users).await {
                            warn!(error = %e, "Failed to cache user list");
                        }
                        Ok(Fetched::remote(users))
                    }
                    Err(error) => {
                        warn!(error = %error, "Online fetch of users failed, trying cache");
                        match self.cached_users().await {
                            Some(users) => Ok(Fetched::cached(users, Some(error))),
                            None => Err(RepositoryError::Network { source: error }),
                        }
                    }
                }
            },
            || async move {
                info!("No internet connection, using cached users");
                self.cached_users()
                    .await
                    .map(|users| Fetched::cached(users, None))
                    .ok_or(RepositoryError::NoConnectivityNoCache)
            },
        )
        .await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Fetched<User>, RepositoryError> {
        execute_with_connectivity_check(
            self.connectivity.as_ref(),
            || async move {
                match self.source.fetch_by_id(id).await {
                    Ok(user) => Ok(Fetched::remote(user)),
                    Err(error) => {
                        warn!(user_id = id, error = %error, "Online fetch of user failed, trying cache");
                        match self.cached_user(id).await {
                            Some(user) => Ok(Fetched::cached(user, Some(error))),
                            None => Err(RepositoryError::UserUnavailable { id, source: error }),
                        }
                    }
                }
            },
            || async move {
                info!(user_id = id, "No internet connection, looking up cached user");
                self.cached_user(id)
                    .await
                    .map(|user| Fetched::cached(user, None))
                    .ok_or(RepositoryError::NoConnectivityUserNotFound { id })
            },
        )
        .await
    }
}
