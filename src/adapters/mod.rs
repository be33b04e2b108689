//! Adapters - Implementations of port interfaces.
//!
//! - `http` exposes the application handlers over REST (axum)
//! - `storage` holds the in-memory session repository

pub mod http;
pub mod storage;

pub use http::{api_router, build_app};
pub use storage::InMemorySessionRepository;
