//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates with the
//! session repository. Handlers report [`ActionOutcome`]s; [`response`]
//! turns those into transport-neutral response shapes.

pub mod handlers;
pub mod outcome;
pub mod response;

pub use handlers::{
    AddIdeaCommand, AddIdeaHandler, CreateSessionCommand, CreateSessionHandler,
    GetSessionHandler, GetSessionQuery, ListIdeasHandler, ListIdeasQuery, ListSessionsHandler,
};
pub use outcome::{ActionOutcome, Validated};
pub use response::{respond, respond_created, ResponseShape};
