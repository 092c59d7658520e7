//! Attribute updates: the status family, the full status block and raise acks.
mod table;

pub use table::{CombatField, MeterSlot, Mutation, MutationTable, Side};

use statsync_core::{
    Effect, InboundEvent, PrimaryStat, StatKey, StatusBlock, StatusChangeAck, StatusCode,
    StatusFields,
};
use tracing::{debug, trace, warn};

use crate::context::SyncContext;

/// Handler for every status-family packet kind.
pub fn on_status(event: &InboundEvent, ctx: &mut SyncContext<'_>) {
    let InboundEvent::Status(status) = event else {
        return;
    };
    apply_fields(ctx, &status.fields());
}

/// Normalizes `fields` and applies the resulting update.
///
/// Unrecognized or unsupported codes are logged and leave the session untouched.
pub fn apply_fields(ctx: &mut SyncContext<'_>, fields: &StatusFields) {
    let update = fields.normalize();
    let property = match update.code.property() {
        Ok(property) => property,
        Err(error) => {
            warn!(
                target: "statsync::status",
                code = update.code.0,
                error_code = error.error_code(),
                ?fields,
                "unrecognized status code, update ignored"
            );
            return;
        }
    };

    let Some(mutation) = MutationTable::global().get(property) else {
        warn!(
            target: "statsync::status",
            %property,
            amount = update.amount,
            "unsupported status update ignored"
        );
        return;
    };

    trace!(
        target: "statsync::status",
        %property,
        amount = update.amount,
        ?mutation,
        "applying status update"
    );
    mutation.apply(ctx, update.amount, fields);
}

/// Handler for the full status block.
///
/// Every field is written first, then one stat effect per field is emitted.
pub fn on_status_block(event: &InboundEvent, ctx: &mut SyncContext<'_>) {
    let InboundEvent::StatusBlock(block) = event else {
        return;
    };
    write_block(ctx, block);

    let primaries = [
        (PrimaryStat::Str, block.str, block.standard_str),
        (PrimaryStat::Agi, block.agi, block.standard_agi),
        (PrimaryStat::Vit, block.vit, block.standard_vit),
        (PrimaryStat::Int, block.int, block.standard_int),
        (PrimaryStat::Dex, block.dex, block.standard_dex),
        (PrimaryStat::Luk, block.luk, block.standard_luk),
    ];
    for (stat, base, _) in primaries {
        ctx.emit(Effect::Stat {
            key: StatKey::base(stat),
            value: base,
        });
    }
    for (stat, _, cost) in primaries {
        ctx.emit(Effect::Stat {
            key: StatKey::cost(stat),
            value: cost,
        });
    }

    // matak shows the minimum here but the maximum on single-code updates.
    let derived = [
        (StatKey::Aspd, block.display_aspd()),
        (StatKey::Atk, block.att_power),
        (StatKey::AtkBonus, block.refining_power),
        (StatKey::Matk, block.min_matt_power),
        (StatKey::Matk2, block.max_matt_power),
        (StatKey::Flee, block.avoid_success_value),
        (StatKey::FleeBonus, block.plus_avoid_success_value),
        (StatKey::Critical, block.critical_success_value),
        (StatKey::Hit, block.hit_success_value),
        (StatKey::Def, block.itemdef_power),
        (StatKey::DefBonus, block.plusdef_power),
        (StatKey::Mdef, block.mdef_power),
        (StatKey::MdefBonus, block.plusmdef_power),
        (StatKey::StatusPoint, block.point),
    ];
    for (key, value) in derived {
        ctx.emit(Effect::Stat { key, value });
    }
}

fn write_block(ctx: &mut SyncContext<'_>, block: &StatusBlock) {
    let player = ctx.player_mut();
    for (stat, base, cost) in [
        (PrimaryStat::Str, block.str, block.standard_str),
        (PrimaryStat::Agi, block.agi, block.standard_agi),
        (PrimaryStat::Vit, block.vit, block.standard_vit),
        (PrimaryStat::Int, block.int, block.standard_int),
        (PrimaryStat::Dex, block.dex, block.standard_dex),
        (PrimaryStat::Luk, block.luk, block.standard_luk),
    ] {
        let points = player.stat_mut(stat);
        points.base = base;
        points.raise_cost = cost;
    }

    let combat = &mut player.combat;
    combat.attack = block.att_power;
    combat.attack_bonus = block.refining_power;
    combat.matk_max = block.max_matt_power;
    combat.matk_min = block.min_matt_power;
    combat.def = block.itemdef_power;
    combat.def_bonus = block.plusdef_power;
    combat.mdef = block.mdef_power;
    combat.mdef_bonus = block.plusmdef_power;
    combat.hit = block.hit_success_value;
    combat.flee = block.avoid_success_value;
    combat.flee_bonus = block.plus_avoid_success_value;
    combat.critical = block.critical_success_value;
    combat.aspd = block.display_aspd();

    player.progression.status_points = block.point;
}

/// Handler for the server's answer to a stat raise request.
///
/// A refused raise is discarded entirely; only primary stats are applied.
pub fn on_status_change_ack(event: &InboundEvent, ctx: &mut SyncContext<'_>) {
    let InboundEvent::StatusChangeAck(ack) = event else {
        return;
    };
    let StatusChangeAck {
        status_id,
        result,
        value,
    } = *ack;

    if !result {
        debug!(target: "statsync::status", status_id, "stat raise refused, update discarded");
        return;
    }

    let Some(stat) = StatusCode(status_id)
        .property()
        .ok()
        .and_then(|property| property.primary())
    else {
        debug!(target: "statsync::status", status_id, "stat raise ack for non-primary code ignored");
        return;
    };

    ctx.player_mut().stat_mut(stat).base = value;
    ctx.emit(Effect::Stat {
        key: StatKey::base(stat),
        value,
    });
}
