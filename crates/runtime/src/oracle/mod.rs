//! Runtime wrappers around static content tables.
//!
//! These implementations expose the `statsync-core` oracle traits and bundle
//! them into an [`OracleBundle`] so the engine can build a
//! [`SyncEnv`] for each dispatch. The data is immutable at runtime.
mod messages;
mod pet_talk;

use std::sync::Arc;

use statsync_content::{MessageCatalog, PetTalkCatalog};
use statsync_core::SyncEnv;

pub use messages::MessageTable;
pub use pet_talk::PetTalkTable;

use crate::api::Result;

/// Shared handles to every oracle the engine reads.
#[derive(Clone, Debug)]
pub struct OracleBundle {
    pub(crate) messages: Arc<MessageTable>,
    pub(crate) pet_talk: Arc<PetTalkTable>,
}

impl OracleBundle {
    pub fn new(messages: Arc<MessageTable>, pet_talk: Arc<PetTalkTable>) -> Self {
        Self { messages, pet_talk }
    }

    /// Builds the bundle from loaded catalogs, validating the dialogue table.
    pub fn from_catalogs(messages: MessageCatalog, pet_talk: &PetTalkCatalog) -> Result<Self> {
        Ok(Self::new(
            Arc::new(MessageTable::new(messages)),
            Arc::new(PetTalkTable::from_catalog(pet_talk)?),
        ))
    }

    /// Built-in messages and an empty dialogue table.
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(MessageTable::new(MessageCatalog::builtin())),
            Arc::new(PetTalkTable::default()),
        )
    }

    pub fn as_env(&self) -> SyncEnv<'_> {
        SyncEnv::new(self.messages.as_ref(), self.pet_talk.as_ref())
    }

    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    pub fn pet_talk(&self) -> &PetTalkTable {
        &self.pet_talk
    }
}

impl Default for OracleBundle {
    fn default() -> Self {
        Self::builtin()
    }
}
