//! In-memory content tables.
mod messages;
mod pet_talk;

pub use messages::MessageCatalog;
pub use pet_talk::{HungerThresholds, PetTalkCatalog, PetTalkLine};
