//! Builds the runtime, oracles, and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::Result;
use statsync_content::ContentFactory;
use statsync_core::{SessionState, SyncConfig};
use statsync_runtime::{Clock, EffectSink, SyncRuntime};
use tracing::debug;

use crate::config::ClientConfig;
use crate::oracles::{BuiltinOracleFactory, ContentOracleFactory, OracleFactory};

/// Builder that assembles engine configuration, oracles and the runtime.
///
/// Engine settings are layered: compile-time defaults, then `config.toml`
/// from the content directory, then environment overrides.
pub struct RuntimeBuilder {
    config: ClientConfig,
    oracle_factory: Arc<dyn OracleFactory>,
    session: SessionState,
    clock: Option<Arc<dyn Clock>>,
    tap: Option<Box<dyn EffectSink>>,
}

impl RuntimeBuilder {
    pub fn new(config: ClientConfig) -> Self {
        let oracle_factory: Arc<dyn OracleFactory> = match &config.content_dir {
            Some(dir) => Arc::new(ContentOracleFactory::new(dir)),
            None => Arc::new(BuiltinOracleFactory),
        };
        Self {
            config,
            oracle_factory,
            session: SessionState::default(),
            clock: None,
            tap: None,
        }
    }

    /// Provide a custom oracle factory.
    pub fn oracle_factory(mut self, factory: impl OracleFactory + 'static) -> Self {
        self.oracle_factory = Arc::new(factory);
        self
    }

    pub fn session(mut self, session: SessionState) -> Self {
        self.session = session;
        self
    }

    /// Time source for companion cooldowns; defaults to the system clock.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Extra sink fed with every effect, alongside the event bus.
    pub fn tap(mut self, sink: impl EffectSink + 'static) -> Self {
        self.tap = Some(Box::new(sink));
        self
    }

    /// Resolves the engine configuration without starting anything.
    pub fn sync_config(&self) -> Result<SyncConfig> {
        let mut sync = match &self.config.content_dir {
            Some(dir) => ContentFactory::new(dir).load_config()?.unwrap_or_default(),
            None => SyncConfig::default(),
        };
        self.config.overrides.apply(&mut sync);
        Ok(sync)
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let sync = self.sync_config()?;
        debug!(
            target: "statsync::bootstrap",
            packet_version = sync.packet_version,
            recovery2 = sync.uses_recovery2(),
            "engine configuration resolved"
        );

        let oracles = self.oracle_factory.build()?;
        let mut builder = SyncRuntime::builder()
            .config(self.config.runtime_config(sync.clone()))
            .oracles(oracles)
            .session(self.session);
        if let Some(clock) = self.clock {
            builder = builder.clock(clock);
        }
        if let Some(tap) = self.tap {
            builder = builder.tap(tap);
        }
        let runtime = builder.build().await?;

        Ok(RuntimeSetup {
            config: self.config,
            sync,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: ClientConfig,
    pub sync: SyncConfig,
    pub runtime: SyncRuntime,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use statsync_core::{Effect, InboundEvent, UserCount};
    use tokio::sync::mpsc;

    use super::*;

    fn shipped_content() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../game/content/data")
    }

    #[test]
    fn environment_wins_over_config_file() {
        let mut config = ClientConfig {
            content_dir: Some(shipped_content()),
            ..ClientConfig::default()
        };
        config.overrides.packet_version = Some(20120410);

        let sync = RuntimeBuilder::new(config).sync_config().unwrap();
        assert_eq!(sync.packet_version, 20120410);
        assert_eq!(sync.companion.friendliness_threshold, 900);
    }

    #[tokio::test]
    async fn builds_runtime_from_shipped_content() {
        let config = ClientConfig {
            content_dir: Some(shipped_content()),
            ..ClientConfig::default()
        };
        let (tap_tx, mut tap_rx) = mpsc::unbounded_channel();
        let setup = RuntimeBuilder::new(config).tap(tap_tx).build().await.unwrap();

        let handle = setup.runtime.handle();
        let handled = handle
            .dispatch(InboundEvent::UserCount(UserCount { count: 3 }))
            .await
            .unwrap();
        assert!(handled);
        setup.runtime.shutdown().await.unwrap();

        match tap_rx.try_recv().unwrap() {
            Effect::Chat(line) => assert!(line.text.starts_with('3')),
            other => panic!("unexpected effect {other:?}"),
        }
    }
}
