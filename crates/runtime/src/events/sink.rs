use statsync_core::Effect;
use tokio::sync::mpsc;

/// Receives effects in emission order.
pub trait EffectSink: Send {
    fn emit(&mut self, effect: Effect);
}

impl<S: EffectSink + ?Sized> EffectSink for &mut S {
    fn emit(&mut self, effect: Effect) {
        (**self).emit(effect);
    }
}

impl<S: EffectSink + ?Sized> EffectSink for Box<S> {
    fn emit(&mut self, effect: Effect) {
        (**self).emit(effect);
    }
}

/// Forwards effects to an ordered channel; a closed receiver drops them.
impl EffectSink for mpsc::UnboundedSender<Effect> {
    fn emit(&mut self, effect: Effect) {
        if self.send(effect).is_err() {
            tracing::trace!(target: "statsync::sink", "effect receiver dropped");
        }
    }
}

/// Recording sink.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectLog {
    effects: Vec<Effect>,
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Counts recorded effects matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&Effect) -> bool) -> usize {
        self.effects.iter().filter(|effect| predicate(effect)).count()
    }
}

impl EffectSink for EffectLog {
    fn emit(&mut self, effect: Effect) {
        self.effects.push(effect);
    }
}

impl IntoIterator for EffectLog {
    type Item = Effect;
    type IntoIter = std::vec::IntoIter<Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use statsync_core::{InfoKey, StatKey};

    use super::*;

    #[test]
    fn log_keeps_emission_order() {
        let mut log = EffectLog::new();
        log.emit(Effect::AuraReload);
        log.emit(Effect::Info {
            key: InfoKey::BaseLevel,
            value: 12,
        });
        log.emit(Effect::Stat {
            key: StatKey::Luk,
            value: 3,
        });

        assert_eq!(log.count(|e| matches!(e, Effect::Info { .. })), 1);
        let drained = log.drain();
        assert_eq!(drained[0], Effect::AuraReload);
        assert_eq!(drained.len(), 3);
        assert!(log.is_empty());
    }

    #[test]
    fn channel_sink_tolerates_closed_receiver() {
        let (mut tx, rx) = mpsc::unbounded_channel();
        tx.emit(Effect::ReadyFight);
        drop(rx);
        tx.emit(Effect::ReadyFight);
    }
}
