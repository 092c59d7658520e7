//! Cloneable façade for feeding events to the runtime.
//!
//! [`SyncHandle`] hides channel plumbing and offers async helpers for
//! enqueuing events or streaming effects from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use statsync_core::{Effect, InboundEvent, SessionState};

use super::errors::{Result, RuntimeError};
use crate::events::{EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct SyncHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl SyncHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Enqueue an event, waiting for queue capacity.
    pub async fn send(&self, event: InboundEvent) -> Result<()> {
        self.command_tx
            .send(Command::Dispatch { event })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Enqueue an event without waiting.
    ///
    /// Fails with [`RuntimeError::QueueFull`] when the queue is at capacity.
    pub fn try_send(&self, event: InboundEvent) -> Result<()> {
        self.command_tx
            .try_send(Command::Dispatch { event })
            .map_err(|err| match err {
                mpsc::error::TrySendError::Full(_) => RuntimeError::QueueFull,
                mpsc::error::TrySendError::Closed(_) => RuntimeError::CommandChannelClosed,
            })
    }

    /// Enqueue an event and wait until it has been applied.
    ///
    /// Resolves to false when no handler is registered for its kind.
    pub async fn dispatch(&self, event: InboundEvent) -> Result<bool> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::DispatchAndWait {
                event,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Apply a host-side session change, ordered with respect to queued events.
    pub async fn update_session<F>(&self, update: F) -> Result<()>
    where
        F: FnOnce(&mut SessionState) + Send + 'static,
    {
        self.command_tx
            .send(Command::UpdateSession {
                update: Box::new(update),
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Query the current session (read-only snapshot)
    pub async fn query_session(&self) -> Result<SessionState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QuerySession { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    pub(crate) async fn shutdown(&self) -> Result<()> {
        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Subscribe to effects from a specific topic
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use statsync_runtime::Topic;
    ///
    /// let mut network = handle.subscribe(Topic::Network);
    /// while let Ok(effect) = network.recv().await {
    ///     // forward outbound packets
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Effect> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
