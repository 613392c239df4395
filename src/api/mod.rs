//! REST collaborator client.
//!
//! Two read-only endpoints are consumed: the comment collection shown in
//! the dashboard table, and a single user record for the profile screen.

mod client;
mod types;

pub use client::{ApiClient, FetchError};
pub use types::{Address, Comment, User};
