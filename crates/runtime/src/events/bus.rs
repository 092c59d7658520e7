//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use statsync_core::Effect;
use strum::IntoEnumIterator;
use tokio::sync::broadcast;

use super::EffectSink;

/// Topics for effect routing, one per collaborator family.
#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    /// Stats window, basic info panel, skill list, equipment and cart widgets
    Ui,
    /// Chat log, chat room, overhead bubble and announcement banner
    Chat,
    /// Party roster
    Party,
    /// Outbound packets
    Network,
    /// Entities, visual effects and the altitude map
    World,
}

impl Topic {
    pub const COUNT: usize = 5;

    /// Topic an effect is published on.
    pub fn of(effect: &Effect) -> Self {
        match effect {
            Effect::Stat { .. }
            | Effect::Info { .. }
            | Effect::Gauge { .. }
            | Effect::SkillPoints(_)
            | Effect::SkillListLevelUp
            | Effect::EquipmentLevelUp
            | Effect::CartLevelUp { .. }
            | Effect::EquipConfig { .. } => Self::Ui,
            Effect::Chat(_)
            | Effect::ChatRoom(_)
            | Effect::Overhead(_)
            | Effect::BannerAppend
            | Effect::BannerSet(_) => Self::Chat,
            Effect::PartyMemberLife { .. } => Self::Party,
            Effect::Outbound(_) => Self::Network,
            Effect::AuraReload
            | Effect::WalkTo { .. }
            | Effect::Focus { .. }
            | Effect::ReadyFight
            | Effect::Heal { .. }
            | Effect::CellType { .. } => Self::World,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// effects they care about. Publishing never blocks; a topic nobody listens
/// to drops its effects.
#[derive(Clone)]
pub struct EventBus {
    channels: [broadcast::Sender<Effect>; Topic::COUNT],
}

impl EventBus {
    pub const DEFAULT_CAPACITY: usize = 128;

    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: std::array::from_fn(|_| broadcast::channel(capacity.max(1)).0),
        }
    }

    /// Publish an effect to its corresponding topic
    pub fn publish(&self, effect: Effect) {
        let topic = Topic::of(&effect);
        if self.channels[topic.index()].send(effect).is_err() {
            tracing::trace!(target: "statsync::bus", %topic, "no subscribers for topic");
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Effect> {
        self.channels[topic.index()].subscribe()
    }

    /// Subscribe to every topic at once.
    pub fn subscribe_all(&self) -> Vec<(Topic, broadcast::Receiver<Effect>)> {
        Topic::iter()
            .map(|topic| (topic, self.subscribe(topic)))
            .collect()
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.channels[topic.index()].receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectSink for EventBus {
    fn emit(&mut self, effect: Effect) {
        self.publish(effect);
    }
}
