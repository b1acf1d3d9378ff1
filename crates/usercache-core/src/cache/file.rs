use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::models::User;

use super::{CacheError, UserStore, USER_LIST_KEY};

/// Stores the user list as `{cache_dir}/user_list.json`.
pub struct FileUserStore {
    cache_dir: PathBuf,
}

impl FileUserStore {
    pub fn new(cache_dir: PathBuf) -> Result<Self, CacheError> {
        std::fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn cache_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", name))
    }
}

#[async_trait]
impl UserStore for FileUserStore {
    async fn save_all(&self, users: &[User]) -> Result<(), CacheError> {
        let contents = serde_json::to_string_pretty(users)?;
        let dir = self.cache_dir.clone();
        let path = self.cache_path(USER_LIST_KEY);

        // Each write gets its own temp file in the cache dir; the rename over
        // the target is atomic, so readers see the old or the new list.
        let target = path.clone();
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(contents.as_bytes())?;
            tmp.as_file().sync_all()?;
            tmp.persist(&target).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(std::io::Error::other)??;

        debug!(count = users.len(), path = %path.display(), "Saved user list");
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<User>, CacheError> {
        let path = self.cache_path(USER_LIST_KEY);
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(CacheError::Missing),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    async fn last_saved(&self) -> Option<DateTime<Utc>> {
        let metadata = tokio::fs::metadata(self.cache_path(USER_LIST_KEY)).await.ok()?;
        metadata.modified().ok().map(DateTime::<Utc>::from)
    }
}
