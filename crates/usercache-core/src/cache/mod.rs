//! Local caching module for offline data access.
//!
//! The last successfully fetched user list is kept as a single JSON array
//! under one fixed key. It is replaced wholesale on every successful online
//! listing and read wholesale whenever the repository falls back. Nothing is
//! ever evicted or expired.

pub mod error;
pub mod file;
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::User;

pub use error::CacheError;
pub use file::FileUserStore;
pub use memory::MemoryUserStore;

/// Fixed key the user list is stored under
pub const USER_LIST_KEY: &str = "user_list";

/// Persistence for the last-known full user list.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Replace the stored list. Readers never observe a partial write.
    async fn save_all(&self, users: &[User]) -> Result<(), CacheError>;

    /// Load the stored list
    async fn load_all(&self) -> Result<Vec<User>, CacheError>;

    /// When the list was last saved, if known
    async fn last_saved(&self) -> Option<DateTime<Utc>>;
}
