//! Data models for the user directory.
//!
//! - `User`: one directory entry with contact details
//! - `Address`, `Company`: optional nested records on a user

pub mod user;

pub use user::{display_or_default, filter_users, Address, Company, User, NOT_AVAILABLE};
