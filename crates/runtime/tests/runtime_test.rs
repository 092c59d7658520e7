//! End-to-end tests through the async runtime.

mod common;

use common::{DANGER_TALK, pet_talks, status};
use statsync_core::{
    AnnounceEvent, Effect, EventKind, GaugeKind, InboundEvent, OutboundPacket, RankCategory,
    RankEvent, StatusProperty as P,
};
use statsync_runtime::{RuntimeError, SyncRuntime, Topic};
use tokio::sync::mpsc;

async fn spawn_runtime() -> (SyncRuntime, mpsc::UnboundedReceiver<Effect>) {
    let (tap_tx, tap_rx) = mpsc::unbounded_channel();
    let runtime = SyncRuntime::builder()
        .oracles(common::oracles())
        .session(common::session())
        .tap(tap_tx)
        .build()
        .await
        .expect("runtime should start");
    (runtime, tap_rx)
}

#[tokio::test]
async fn events_are_applied_in_arrival_order() {
    let (runtime, mut tap) = spawn_runtime().await;
    let handle = runtime.handle();

    // ========================================================================
    // Phase 1: queue a vital pair and a lethal drop
    // ========================================================================
    handle.send(status(P::MaxHp, 200)).await.expect("send max hp");
    handle.send(status(P::Hp, 150)).await.expect("send hp");
    handle.send(status(P::Hp, 0)).await.expect("send hp drop");

    // ========================================================================
    // Phase 2: shutdown drains the queue and returns the session
    // ========================================================================
    let session = runtime.shutdown().await.expect("clean shutdown");
    assert_eq!(session.player.life.hp.current, 0);
    assert_eq!(session.player.life.hp.max, 200);
    assert!(session.companion.last_talk.is_some());

    let mut effects = Vec::new();
    while let Ok(effect) = tap.try_recv() {
        effects.push(effect);
    }
    let gauges: Vec<_> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Gauge {
                kind: GaugeKind::Hp,
                current,
                ..
            } => Some(*current),
            _ => None,
        })
        .collect();
    assert_eq!(gauges, [150, 0]);
    assert_eq!(pet_talks(&effects), [DANGER_TALK, common::DEATH_TALK]);
}

#[tokio::test]
async fn bus_routes_effects_by_topic() {
    let (runtime, _tap) = spawn_runtime().await;
    let handle = runtime.handle();
    let mut network = handle.subscribe(Topic::Network);
    let mut chat = handle.subscribe(Topic::Chat);

    handle.send(status(P::MaxHp, 100)).await.expect("send max hp");
    assert!(handle.dispatch(status(P::Hp, 10)).await.expect("dispatch hp"));
    assert!(
        handle
            .dispatch(InboundEvent::Broadcast(AnnounceEvent::new("ssssMaintenance soon")))
            .await
            .expect("dispatch announce")
    );

    assert_eq!(
        network.recv().await.expect("network effect"),
        Effect::Outbound(OutboundPacket::PetAct { data: DANGER_TALK })
    );
    match chat.recv().await.expect("chat effect") {
        Effect::Chat(line) => {
            assert_eq!(line.text, "Maintenance soon");
            assert_eq!(line.color.as_deref(), Some("#FFFF00"));
        }
        other => panic!("unexpected chat effect {other:?}"),
    }

    runtime.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn host_updates_are_serialized_with_events() {
    let (runtime, mut tap) = spawn_runtime().await;
    let handle = runtime.handle();

    handle
        .update_session(|session| session.in_party = true)
        .await
        .expect("update session");
    handle.send(status(P::MaxHp, 100)).await.expect("send max hp");
    handle.send(status(P::Hp, 80)).await.expect("send hp");

    let session = handle.query_session().await.expect("query session");
    assert!(session.in_party);
    assert_eq!(session.player.life.hp.current, 80);

    runtime.shutdown().await.expect("clean shutdown");
    let mut party_updates = 0;
    while let Ok(effect) = tap.try_recv() {
        if matches!(effect, Effect::PartyMemberLife { .. }) {
            party_updates += 1;
        }
    }
    assert_eq!(party_updates, 1);
}

#[tokio::test]
async fn unhandled_kinds_report_false() {
    let (tap_tx, _tap_rx) = mpsc::unbounded_channel();
    let runtime = SyncRuntime::builder()
        .oracles(common::oracles())
        .tap(tap_tx)
        .configure_registry(|registry| {
            registry.unregister(EventKind::Broadcast);
        })
        .build()
        .await
        .expect("runtime should start");
    let handle = runtime.handle();

    let handled = handle
        .dispatch(InboundEvent::Broadcast(AnnounceEvent::new("hello")))
        .await
        .expect("dispatch");
    assert!(!handled);

    let handled = handle
        .dispatch(InboundEvent::Rank(RankEvent::new(RankCategory::Killer)))
        .await
        .expect("dispatch");
    assert!(!handled);

    runtime.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn builder_requires_oracles() {
    let result = SyncRuntime::builder().build().await;
    assert!(matches!(result, Err(RuntimeError::MissingOracles)));
}

#[tokio::test]
async fn handle_fails_after_shutdown() {
    let (runtime, _tap) = spawn_runtime().await;
    let handle = runtime.handle();
    runtime.shutdown().await.expect("clean shutdown");

    let result = handle.send(status(P::Hp, 1)).await;
    assert!(matches!(result, Err(RuntimeError::CommandChannelClosed)));
}
