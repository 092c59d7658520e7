//! Announcements, rankings and message-table lines.

use statsync_core::format::substitute;
use statsync_core::{
    ChatFilter, ChatKind, ChatLine, Effect, InboundEvent, format_announce, format_rank,
    rgb_from_packed,
};

use crate::context::SyncContext;

/// Message id of the "%d players online" template.
pub const USER_COUNT_MSG: u32 = 178;

/// Handler for both announce packet shapes.
///
/// The formatted line goes to the chat log, then the banner queue is
/// advanced and shows the newest message.
pub fn on_announce(event: &InboundEvent, ctx: &mut SyncContext<'_>) {
    let (InboundEvent::Broadcast(announce) | InboundEvent::Broadcast2(announce)) = event else {
        return;
    };
    let display = format_announce(announce);

    ctx.emit(Effect::Chat(
        ChatLine::new(display.text.clone(), ChatKind::ANNOUNCE, ChatFilter::PublicChat)
            .with_color(display.color.clone()),
    ));
    ctx.emit(Effect::BannerAppend);
    ctx.emit(Effect::BannerSet(display));
}

/// Handler for the leaderboard packets: one header and ten entry lines.
pub fn on_rank(event: &InboundEvent, ctx: &mut SyncContext<'_>) {
    let InboundEvent::Rank(rank) = event else {
        return;
    };
    for line in format_rank(rank, ctx.env().messages()) {
        ctx.emit(Effect::Chat(ChatLine::new(
            line,
            ChatKind::ANNOUNCE,
            ChatFilter::PublicLog,
        )));
    }
}

pub fn on_user_count(event: &InboundEvent, ctx: &mut SyncContext<'_>) {
    let InboundEvent::UserCount(count) = event else {
        return;
    };
    let text = substitute(&ctx.message(USER_COUNT_MSG), "%d", count.count);
    ctx.emit(Effect::Chat(ChatLine::new(
        text,
        ChatKind::INFO,
        ChatFilter::PublicLog,
    )));
}

/// Handler for plain and coloured message-table lines.
pub fn on_table_message(event: &InboundEvent, ctx: &mut SyncContext<'_>) {
    let (InboundEvent::Msg(message) | InboundEvent::MsgColor(message)) = event else {
        return;
    };
    let mut line = ChatLine::new(
        ctx.message(message.msg),
        ChatKind::PUBLIC,
        ChatFilter::PublicLog,
    );
    if let Some(color) = message.color.filter(|&c| c != 0) {
        line = line.with_color(rgb_from_packed(color));
    }
    ctx.emit(Effect::Chat(line));
}
