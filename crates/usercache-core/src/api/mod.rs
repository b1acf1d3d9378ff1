//! REST API client module for the remote user service.
//!
//! This module provides the `UserSource` trait the repository reads through,
//! and `ApiClient`, its HTTP implementation. The service exposes
//! `GET {base}/users` and `GET {base}/users/{id}` without authentication.

pub mod client;
pub mod error;

use async_trait::async_trait;

use crate::models::User;

pub use client::ApiClient;
pub use error::ApiError;

/// Network reads of the user collection.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the entire user collection
    async fn fetch_all(&self) -> Result<Vec<User>, ApiError>;

    /// Fetch a single user; an id unknown to the service is an error
    async fn fetch_by_id(&self, id: i64) -> Result<User, ApiError>;
}
