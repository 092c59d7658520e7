//! Traits describing read-only collaborator data.
//!
//! Oracles expose the localized message table and the companion dialogue
//! table. The [`SyncEnv`] aggregate bundles them so handlers can reach both
//! without depending on concrete loaders.
mod companion;
mod messages;

pub use companion::CompanionOracle;
pub use messages::MessageOracle;

/// Aggregates the read-only oracles needed during dispatch.
#[derive(Clone, Copy)]
pub struct SyncEnv<'a> {
    messages: &'a dyn MessageOracle,
    companion: &'a dyn CompanionOracle,
}

impl<'a> SyncEnv<'a> {
    pub fn new(messages: &'a dyn MessageOracle, companion: &'a dyn CompanionOracle) -> Self {
        Self {
            messages,
            companion,
        }
    }

    pub fn messages(&self) -> &'a dyn MessageOracle {
        self.messages
    }

    pub fn companion(&self) -> &'a dyn CompanionOracle {
        self.companion
    }
}

impl core::fmt::Debug for SyncEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SyncEnv").finish_non_exhaustive()
    }
}
