use std::collections::BTreeMap;

/// Localized chat templates keyed by message id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageCatalog {
    pub messages: BTreeMap<u32, String>,
}

impl MessageCatalog {
    pub fn new(messages: BTreeMap<u32, String>) -> Self {
        Self { messages }
    }

    /// English templates for every id the engine emits.
    pub fn builtin() -> Self {
        let entries = [
            (178, "%d players are currently online."),
            (242, "Please equip the proper ammunition first."),
            (
                243,
                "You can't attack or use skills because your weight limit has been exceeded.",
            ),
            (
                244,
                "You can't use skills because your weight limit has been exceeded.",
            ),
            (245, "Ammunition has been equipped."),
            (1358, "Other players can no longer view your equipment."),
            (1359, "Other players can now view your equipment."),
            (2383, "Rank"),
            (2385, "Points"),
            (2386, "BlackSmith"),
            (2387, "Alchemist"),
            (2388, "Taekwon"),
        ];
        Self::new(
            entries
                .into_iter()
                .map(|(id, text)| (id, text.to_owned()))
                .collect(),
        )
    }

    pub fn get(&self, id: u32) -> Option<&str> {
        self.messages.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Overlays `other` on top of this catalog; ids present in both take `other`'s text.
    pub fn merge(&mut self, other: MessageCatalog) {
        self.messages.extend(other.messages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_rank_and_config_messages() {
        let catalog = MessageCatalog::builtin();
        for id in [178, 242, 243, 244, 245, 1358, 1359, 2383, 2385, 2386, 2387, 2388] {
            assert!(catalog.get(id).is_some(), "missing {id}");
        }
        assert_eq!(catalog.get(2389), None);
    }

    #[test]
    fn merge_overrides_existing_ids() {
        let mut catalog = MessageCatalog::builtin();
        catalog.merge(MessageCatalog::new(BTreeMap::from([
            (2383, "Classement".to_owned()),
            (9000, "extra".to_owned()),
        ])));
        assert_eq!(catalog.get(2383), Some("Classement"));
        assert_eq!(catalog.get(9000), Some("extra"));
        assert_eq!(catalog.get(2385), Some("Points"));
    }
}
