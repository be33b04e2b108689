//! HTTP adapter for idea endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{IdeaSummaryResponse, NewIdeaRequest};
pub use handlers::IdeaHandlers;
pub use routes::idea_routes;
