//! Session command and query handlers.

mod create_session;
mod get_session;
mod list_sessions;

pub use create_session::{CreateSessionCommand, CreateSessionHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use list_sessions::ListSessionsHandler;
