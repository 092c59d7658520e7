//! Handlers registered in the default [`EventRegistry`](crate::EventRegistry).
//!
//! Every handler has the same shape: it receives the inbound event and the
//! per-dispatch [`SyncContext`](crate::SyncContext), mutates the session and
//! emits effects. Handlers never fail; anything they cannot apply is logged
//! and dropped.
//!
//! - [`status`]: attribute updates and the status mutation table
//! - [`vitals`]: HP/SP pairs, party broadcast and recovery
//! - [`companion`]: companion dialogue reactions
//! - [`broadcast`]: announcements, rankings and message-table lines
//! - [`player`]: movement, own chat, combat notices, config and map cells
pub mod broadcast;
pub mod companion;
pub mod player;
pub mod status;
pub mod vitals;

pub use broadcast::{on_announce, on_rank, on_table_message, on_user_count};
pub use companion::CompanionPolicy;
pub use player::{
    on_action_failure, on_attack_failure_for_distance, on_attack_range, on_config,
    on_player_chat, on_player_move, on_update_map_info,
};
pub use status::{MutationTable, on_status, on_status_block, on_status_change_ack};
pub use vitals::on_recovery;
