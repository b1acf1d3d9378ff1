//! Core library for usercache.
//!
//! Fetches a user directory from a remote REST service and keeps the last
//! full listing on disk so it can still be browsed offline. The pieces are:
//!
//! - `api`: HTTP client for the remote user service
//! - `cache`: the local store holding the last-known user list
//! - `connectivity`: point-in-time network reachability checks
//! - `repository`: the read-through / cache-fallback policy
//! - `usecase`: thin entry points consumed by front-ends
//! - `config`: persisted settings and environment overrides

pub mod api;
pub mod cache;
pub mod config;
pub mod connectivity;
pub mod models;
pub mod repository;
pub mod usecase;
pub mod utils;

pub use api::{ApiClient, ApiError, UserSource};
pub use cache::{CacheError, FileUserStore, MemoryUserStore, UserStore};
pub use config::Config;
pub use connectivity::{
    execute_with_connectivity_check, ConnectivityError, ConnectivityOracle, NetworkProbe,
    StaticConnectivity,
};
pub use models::{Address, Company, User};
pub use repository::{CachedUserRepository, Fetched, Origin, RepositoryError, UserRepository};
pub use usecase::{GetUserByIdUseCase, GetUsersUseCase};
