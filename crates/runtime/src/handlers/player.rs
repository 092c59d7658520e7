//! Notices about the local player that are not attribute updates.

use statsync_core::{ChatFilter, ChatKind, ChatLine, ConfigUpdate, Effect, InboundEvent};
use tracing::{debug, trace};

use crate::context::SyncContext;

/// First of the two equipment visibility messages (hidden, then shown).
pub const EQUIP_CONFIG_MSG: u32 = 1358;
/// First of the action failure messages, indexed by error code.
pub const ACTION_FAILURE_MSG: u32 = 242;

pub fn on_player_move(event: &InboundEvent, ctx: &mut SyncContext<'_>) {
    let InboundEvent::PlayerMove(movement) = event else {
        return;
    };
    ctx.emit(Effect::WalkTo {
        from: movement.from,
        to: movement.to,
    });
}

/// Own chat goes to the open chat room, otherwise to the log and overhead bubble.
pub fn on_player_chat(event: &InboundEvent, ctx: &mut SyncContext<'_>) {
    let InboundEvent::PlayerChat(chat) = event else {
        return;
    };
    if ctx.session().chat_room_open {
        ctx.emit(Effect::ChatRoom(chat.msg.clone()));
        return;
    }
    ctx.emit(Effect::Chat(ChatLine::new(
        chat.msg.clone(),
        ChatKind::PUBLIC | ChatKind::SELF,
        ChatFilter::PublicChat,
    )));
    ctx.emit(Effect::Overhead(chat.msg.clone()));
}

pub fn on_attack_failure_for_distance(event: &InboundEvent, ctx: &mut SyncContext<'_>) {
    let InboundEvent::AttackFailureForDistance(failure) = event else {
        return;
    };
    ctx.emit(Effect::Focus {
        target_id: failure.target_id,
    });
}

pub fn on_attack_range(event: &InboundEvent, ctx: &mut SyncContext<'_>) {
    let InboundEvent::AttackRange(range) = event else {
        return;
    };
    ctx.player_mut().attack_range = range.current_attack_range;
}

/// Only the equipment visibility config is acted on.
pub fn on_config(event: &InboundEvent, ctx: &mut SyncContext<'_>) {
    let InboundEvent::Config(update) = event else {
        return;
    };
    if update.config != ConfigUpdate::EQUIP_WINDOW {
        debug!(
            target: "statsync::player",
            config = update.config,
            value = update.value,
            "unsupported config type ignored"
        );
        return;
    }

    let open = update.value != 0;
    ctx.player_mut().equip_window_open = open;
    ctx.emit(Effect::EquipConfig { open });
    let text = ctx.message(EQUIP_CONFIG_MSG + u32::from(open));
    ctx.emit(Effect::Chat(ChatLine::new(
        text,
        ChatKind::INFO,
        ChatFilter::PublicLog,
    )));
}

/// Logs the failure reason, then puts the player back into the fight pose.
pub fn on_action_failure(event: &InboundEvent, ctx: &mut SyncContext<'_>) {
    let InboundEvent::ActionFailure(failure) = event else {
        return;
    };
    let kind = match failure.error_code {
        0..=2 => Some(ChatKind::ERROR),
        3 => Some(ChatKind::BLUE),
        _ => None,
    };
    match kind {
        Some(kind) => {
            // error_code is within 0..=3 here
            let id = ACTION_FAILURE_MSG + failure.error_code.unsigned_abs();
            let text = ctx.message(id);
            ctx.emit(Effect::Chat(ChatLine::new(text, kind, ChatFilter::Item)));
        }
        None => trace!(
            target: "statsync::player",
            error_code = failure.error_code,
            "action failure without message"
        ),
    }
    ctx.emit(Effect::ReadyFight);
}

pub fn on_update_map_info(event: &InboundEvent, ctx: &mut SyncContext<'_>) {
    let InboundEvent::UpdateMapInfo(update) = event else {
        return;
    };
    ctx.emit(Effect::CellType {
        pos: update.pos,
        cell_type: update.cell_type,
    });
}
