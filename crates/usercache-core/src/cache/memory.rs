use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::models::User;

use super::{CacheError, UserStore};

/// In-process store. Keeps the serialized blob rather than the parsed list
/// so it behaves like the file store, including on corrupt contents.
#[derive(Default)]
pub struct MemoryUserStore {
    blob: RwLock<Option<(String, DateTime<Utc>)>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `users`
    pub fn with_users(users: &[User]) -> Result<Self, CacheError> {
        let blob = serde_json::to_string(users)?;
        Ok(Self {
            blob: RwLock::new(Some((blob, Utc::now()))),
        })
    }

    /// Overwrite the stored blob with raw contents
    pub async fn set_raw(&self, contents: impl Into<String>) {
        *self.blob.write().await = Some((contents.into(), Utc::now()));
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn save_all(&self, users: &[User]) -> Result<(), CacheError> {
        let blob = serde_json::to_string(users)?;
        *self.blob.write().await = Some((blob, Utc::now()));
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<User>, CacheError> {
        match self.blob.read().await.as_ref() {
            Some((blob, _)) => Ok(serde_json::from_str(blob)?),
            None => Err(CacheError::Missing),
        }
    }

    async fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.blob.read().await.as_ref().map(|(_, saved_at)| *saved_at)
    }
}
