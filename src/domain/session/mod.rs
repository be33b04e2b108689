//! Session domain module.
//!
//! Brainstorm sessions and the ideas collected in them. Sessions are the
//! top-level containers; ideas never exist outside one.

mod aggregate;
mod idea;

pub use aggregate::{BrainstormSession, NewSession, SessionSummary, MAX_SESSION_NAME_LENGTH};
pub use idea::{Idea, IdeaSummary, MAX_IDEA_DESCRIPTION_LENGTH, MAX_IDEA_NAME_LENGTH};
