//! Sync worker that owns the authoritative [`SessionState`].
//!
//! Receives commands from [`SyncHandle`](crate::SyncHandle) over a single
//! queue, so events are applied one at a time in arrival order.

use statsync_core::{InboundEvent, SessionState};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::engine::SyncEngine;
use crate::events::EffectSink;

/// Session mutation requested by the host (party membership, chat room, companion).
pub type SessionUpdate = Box<dyn FnOnce(&mut SessionState) + Send>;

/// Commands that can be sent to the sync worker
pub enum Command {
    /// Apply one inbound event.
    Dispatch { event: InboundEvent },
    /// Apply one inbound event and report whether a handler ran.
    DispatchAndWait {
        event: InboundEvent,
        reply: oneshot::Sender<bool>,
    },
    /// Apply a host-side change to the session between events.
    UpdateSession { update: SessionUpdate },
    /// Query the current session (read-only snapshot).
    QuerySession { reply: oneshot::Sender<SessionState> },
    /// Stop after every previously queued command.
    Shutdown,
}

/// Background task that processes inbound events.
pub struct SyncWorker {
    engine: SyncEngine,
    session: SessionState,
    sink: Box<dyn EffectSink>,
    command_rx: mpsc::Receiver<Command>,
}

impl SyncWorker {
    pub fn new(
        engine: SyncEngine,
        session: SessionState,
        sink: Box<dyn EffectSink>,
        command_rx: mpsc::Receiver<Command>,
    ) -> Self {
        info!(
            target: "statsync::worker",
            account_id = session.account_id.0,
            packet_version = engine.config().packet_version,
            handlers = engine.registry().len(),
            "SyncWorker initialized"
        );
        Self {
            engine,
            session,
            sink,
            command_rx,
        }
    }

    /// Main worker loop. Returns the final session once the queue closes.
    pub async fn run(mut self) -> SessionState {
        while let Some(cmd) = self.command_rx.recv().await {
            if !self.handle_command(cmd) {
                break;
            }
        }
        debug!(target: "statsync::worker", "SyncWorker stopped");
        self.session
    }

    fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Dispatch { event } => {
                self.dispatch(&event);
            }
            Command::DispatchAndWait { event, reply } => {
                let handled = self.dispatch(&event);
                if reply.send(handled).is_err() {
                    debug!(target: "statsync::worker", "DispatchAndWait reply channel closed (caller dropped)");
                }
            }
            Command::UpdateSession { update } => update(&mut self.session),
            Command::QuerySession { reply } => {
                if reply.send(self.session.clone()).is_err() {
                    debug!(target: "statsync::worker", "QuerySession reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown => return false,
        }
        true
    }

    fn dispatch(&mut self, event: &InboundEvent) -> bool {
        self.engine
            .dispatch(event, &mut self.session, self.sink.as_mut())
    }
}
