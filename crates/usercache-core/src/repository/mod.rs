//! User repository: the read-through cache policy.
//!
//! Every read checks connectivity first. Online reads go to the remote
//! source and fall back to the cached list when the request fails; offline
//! reads use the cached list only. A successful online listing replaces the
//! cache. Single-user reads never write the cache.

pub mod error;
pub mod users;

use async_trait::async_trait;

use crate::api::ApiError;
use crate::models::User;

pub use error::RepositoryError;
pub use users::CachedUserRepository;

/// Where a returned value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Cache,
}

/// A repository result plus how it was obtained.
#[derive(Debug)]
pub struct Fetched<T> {
    pub data: T,
    pub origin: Origin,
    /// Network error that cached data was substituted for, if any
    pub suppressed: Option<ApiError>,
}

impl<T> Fetched<T> {
    pub fn remote(data: T) -> Self {
        Self {
            data,
            origin: Origin::Remote,
            suppressed: None,
        }
    }

    pub fn cached(data: T, suppressed: Option<ApiError>) -> Self {
        Self {
            data,
            origin: Origin::Cache,
            suppressed,
        }
    }

    pub fn is_from_cache(&self) -> bool {
        self.origin == Origin::Cache
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_users(&self) -> Result<Fetched<Vec<User>>, RepositoryError>;

    async fn get_user_by_id(&self, id: i64) -> Result<Fetched<User>, RepositoryError>;
}
