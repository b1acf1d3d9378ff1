use thiserror::Error;

/// Why the local store could not produce a user list.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("No cached user list")]
    Missing,

    #[error("Cached user list is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),
}
