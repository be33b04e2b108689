//! Storage Adapters
//!
//! Implementations of the SessionRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionRepository** - Stores sessions in memory (development/testing)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemorySessionRepository;
//!
//! let repository: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());
//! ```

mod in_memory_session_repository;

pub use in_memory_session_repository::InMemorySessionRepository;
