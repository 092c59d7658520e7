//! Error types surfaced by the runtime API.
//!
//! Dispatch itself never fails; these cover the plumbing around it.
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("sync worker command channel closed")]
    CommandChannelClosed,

    #[error("sync worker command queue is full")]
    QueueFull,

    #[error("sync worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("sync worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error("invalid content table")]
    Content(#[from] statsync_content::ContentError),
}
