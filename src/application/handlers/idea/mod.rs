//! Idea command and query handlers.

mod add_idea;
mod list_ideas;

pub use add_idea::{AddIdeaCommand, AddIdeaHandler};
pub use list_ideas::{ListIdeasHandler, ListIdeasQuery};
