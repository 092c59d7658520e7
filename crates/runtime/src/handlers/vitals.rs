//! HP/SP pairs.
//!
//! Either half of a vital may arrive first. The gauge is only shown once
//! both are known, and every HP change made through the status family is
//! mirrored to the party roster while the player is in a party.

use statsync_core::{CompanionTrigger, Effect, InboundEvent, StatusCode, StatusProperty, VitalKind};
use tracing::debug;

use super::companion::CompanionPolicy;
use crate::context::SyncContext;

/// Writes the current half of a vital.
///
/// For HP, the danger and death reactions are evaluated afterwards against
/// the committed value; both may fire for the same update.
pub fn set_current(ctx: &mut SyncContext<'_>, kind: VitalKind, amount: i64) {
    let life = &mut ctx.player_mut().life;
    life.meter_mut(kind).current = amount;
    life.update();

    if ctx.player().life.meter(kind).has_max() {
        refresh(ctx, kind, true);
    }

    if kind == VitalKind::Hp {
        let hp = ctx.player().life.hp;
        let danger_percent = ctx.config().companion.danger_percent;
        if hp.current.saturating_mul(100) <= hp.max.saturating_mul(danger_percent) {
            CompanionPolicy::maybe_react(ctx, CompanionTrigger::Danger);
        }
        if hp.current <= 1 {
            CompanionPolicy::maybe_react(ctx, CompanionTrigger::Death);
        }
    }
}

/// Writes the max half of a vital. Never triggers companion reactions.
pub fn set_max(ctx: &mut SyncContext<'_>, kind: VitalKind, amount: i64) {
    let life = &mut ctx.player_mut().life;
    life.meter_mut(kind).max = amount;
    life.update();

    if ctx.player().life.meter(kind).has_current() {
        refresh(ctx, kind, true);
    }
}

/// Emits the gauge and, for HP while in a party, the roster update.
fn refresh(ctx: &mut SyncContext<'_>, kind: VitalKind, broadcast: bool) {
    let meter = *ctx.player().life.meter(kind);
    ctx.emit(Effect::Gauge {
        kind: kind.into(),
        current: meter.current,
        max: meter.max,
    });

    if broadcast && kind == VitalKind::Hp && ctx.session().in_party {
        let account_id = ctx.session().account_id;
        let life = ctx.player().life.snapshot();
        ctx.emit(Effect::PartyMemberLife {
            account_id,
            life,
            hp: meter.current,
            hp_max: meter.max,
        });
    }
}

/// Handler for both vital recovery packet variants.
///
/// Adds the recovered amount, shows the heal, and refreshes the gauge when
/// the max is known. No party update and no companion reaction.
pub fn on_recovery(event: &InboundEvent, ctx: &mut SyncContext<'_>) {
    let (InboundEvent::Recovery(recovery) | InboundEvent::Recovery2(recovery)) = event else {
        return;
    };

    let kind = match StatusCode(recovery.var_id).property() {
        Ok(StatusProperty::Hp) => VitalKind::Hp,
        Ok(StatusProperty::Sp) => VitalKind::Sp,
        _ => {
            debug!(
                target: "statsync::vitals",
                var_id = recovery.var_id,
                "recovery for non-vital code ignored"
            );
            return;
        }
    };

    ctx.emit(Effect::Heal {
        vital: kind,
        amount: recovery.amount,
    });

    let life = &mut ctx.player_mut().life;
    let meter = life.meter_mut(kind);
    meter.current = meter.current.saturating_add(recovery.amount);
    life.update();

    if ctx.player().life.meter(kind).has_max() {
        refresh(ctx, kind, false);
    }
}
