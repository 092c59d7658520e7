//! Background tasks owned by the runtime.
mod sync;

pub use sync::{Command, SyncWorker};
