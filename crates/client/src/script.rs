use anyhow::{Context, Result};
use serde::Deserialize;
use statsync_core::{AccountId, InboundEvent, SessionState};

/// One line of a replay script.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    /// Decoded server message to dispatch.
    Event(InboundEvent),
    /// Move the replay clock forward.
    AdvanceMs(u64),
    /// Host-side change applied between events.
    Session(SessionPatch),
}

/// Partial update of the host-owned session flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionPatch {
    pub account_id: Option<u32>,
    pub in_party: Option<bool>,
    pub chat_room_open: Option<bool>,
    pub companion: Option<CompanionPatch>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompanionPatch {
    pub species: Option<u32>,
    pub friendliness: Option<i32>,
    pub hunger: Option<i32>,
}

impl SessionPatch {
    pub fn apply(&self, session: &mut SessionState) {
        if let Some(account_id) = self.account_id {
            session.account_id = AccountId(account_id);
        }
        if let Some(in_party) = self.in_party {
            session.in_party = in_party;
        }
        if let Some(open) = self.chat_room_open {
            session.chat_room_open = open;
        }
        if let Some(companion) = &self.companion {
            let state = &mut session.companion;
            if let Some(species) = companion.species {
                state.species = species;
            }
            if let Some(friendliness) = companion.friendliness {
                state.friendliness = friendliness;
            }
            if let Some(hunger) = companion.hunger {
                state.hunger = hunger;
            }
        }
    }
}

/// Parses a JSON-lines script. Blank lines and `#` comments are skipped.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("Invalid script line {}: {}", index + 1, line.trim()))
        })
        .collect()
}
