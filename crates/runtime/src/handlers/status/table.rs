//! Attribute code to mutation descriptor table.

use std::collections::HashMap;
use std::sync::LazyLock;

use statsync_core::state::{CombatStats, Progression, TraitStats};
use statsync_core::{
    CompanionTrigger, Effect, GaugeKind, InfoKey, Meter, PlayerState, PrimaryStat, StatKey,
    StatusFields, StatusProperty, VitalKind,
};

use crate::context::SyncContext;
use crate::handlers::companion::CompanionPolicy;
use crate::handlers::vitals;

/// Which half of a current/max pair an update writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Current,
    Max,
}

/// Current/max pairs that are not vitals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeterSlot {
    BaseExp,
    JobExp,
    Weight,
}

impl MeterSlot {
    fn meter(self, player: &mut PlayerState) -> &mut Meter {
        match self {
            Self::BaseExp => &mut player.progression.base_exp,
            Self::JobExp => &mut player.progression.job_exp,
            Self::Weight => &mut player.weight,
        }
    }

    const fn gauge(self) -> GaugeKind {
        match self {
            Self::BaseExp => GaugeKind::BaseExp,
            Self::JobExp => GaugeKind::JobExp,
            Self::Weight => GaugeKind::Weight,
        }
    }
}

/// Single-valued combat fields of the stats window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatField {
    Attack,
    AttackBonus,
    MatkMax,
    MatkMin,
    Def,
    DefBonus,
    Mdef,
    MdefBonus,
    Hit,
    Flee,
    FleeBonus,
    Critical,
    Aspd,
}

impl CombatField {
    pub(crate) fn slot(self, combat: &mut CombatStats) -> &mut i64 {
        match self {
            Self::Attack => &mut combat.attack,
            Self::AttackBonus => &mut combat.attack_bonus,
            Self::MatkMax => &mut combat.matk_max,
            Self::MatkMin => &mut combat.matk_min,
            Self::Def => &mut combat.def,
            Self::DefBonus => &mut combat.def_bonus,
            Self::Mdef => &mut combat.mdef,
            Self::MdefBonus => &mut combat.mdef_bonus,
            Self::Hit => &mut combat.hit,
            Self::Flee => &mut combat.flee,
            Self::FleeBonus => &mut combat.flee_bonus,
            Self::Critical => &mut combat.critical,
            Self::Aspd => &mut combat.aspd,
        }
    }

    /// Widget key. The single-code path shows max magic attack as `matak`.
    pub(crate) const fn key(self) -> StatKey {
        match self {
            Self::Attack => StatKey::Atk,
            Self::AttackBonus => StatKey::AtkBonus,
            Self::MatkMax => StatKey::Matk,
            Self::MatkMin => StatKey::Matk2,
            Self::Def => StatKey::Def,
            Self::DefBonus => StatKey::DefBonus,
            Self::Mdef => StatKey::Mdef,
            Self::MdefBonus => StatKey::MdefBonus,
            Self::Hit => StatKey::Hit,
            Self::Flee => StatKey::Flee,
            Self::FleeBonus => StatKey::FleeBonus,
            Self::Critical => StatKey::Critical,
            Self::Aspd => StatKey::Aspd,
        }
    }
}

/// What applying one attribute code does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    /// HP or SP half of a vital pair.
    Vital(VitalKind, Side),
    /// Half of an exp or weight pair.
    Meter(MeterSlot, Side),
    /// Base value of a primary stat, bonus taken from the couple-status shape.
    Primary(PrimaryStat),
    /// Status points needed to raise a primary stat.
    RaiseCost(PrimaryStat),
    Combat(CombatField),
    /// Trait block value shown in the basic-info panel.
    Trait(InfoKey),
    StatusPoints,
    SkillPoints,
    BaseLevel,
    JobLevel,
    Money,
    WalkSpeed,
    /// Recognized but carries nothing this engine tracks.
    Ignore,
}

impl Mutation {
    /// Applies the mutation and emits its notifications.
    pub fn apply(self, ctx: &mut SyncContext<'_>, amount: i64, fields: &StatusFields) {
        match self {
            Self::Vital(kind, Side::Current) => vitals::set_current(ctx, kind, amount),
            Self::Vital(kind, Side::Max) => vitals::set_max(ctx, kind, amount),
            Self::Meter(slot, side) => {
                let meter = slot.meter(ctx.player_mut());
                match side {
                    Side::Current => meter.current = amount,
                    Side::Max => meter.max = amount,
                }
                if let Some((current, max)) = meter.known() {
                    ctx.emit(Effect::Gauge {
                        kind: slot.gauge(),
                        current,
                        max,
                    });
                }
            }
            Self::Primary(stat) => {
                let base = fields.default_status.unwrap_or(amount);
                ctx.player_mut().stat_mut(stat).base = base;
                ctx.emit(Effect::Stat {
                    key: StatKey::base(stat),
                    value: base,
                });
                if let Some(bonus) = fields.plus_status {
                    ctx.player_mut().stat_mut(stat).bonus = bonus;
                    ctx.emit(Effect::Stat {
                        key: StatKey::bonus(stat),
                        value: bonus,
                    });
                }
            }
            Self::RaiseCost(stat) => {
                ctx.player_mut().stat_mut(stat).raise_cost = amount;
                ctx.emit(Effect::Stat {
                    key: StatKey::cost(stat),
                    value: amount,
                });
            }
            Self::Combat(field) => {
                *field.slot(&mut ctx.player_mut().combat) = amount;
                ctx.emit(Effect::Stat {
                    key: field.key(),
                    value: amount,
                });
            }
            Self::Trait(key) => {
                if let Some(slot) = trait_slot(&mut ctx.player_mut().traits, key) {
                    *slot = amount;
                }
                ctx.emit(Effect::Info { key, value: amount });
            }
            Self::StatusPoints => {
                progression(ctx).status_points = amount;
                ctx.emit(Effect::Stat {
                    key: StatKey::StatusPoint,
                    value: amount,
                });
            }
            Self::SkillPoints => {
                progression(ctx).skill_points = amount;
                ctx.emit(Effect::SkillPoints(amount));
            }
            Self::BaseLevel => {
                progression(ctx).base_level = amount;
                ctx.emit(Effect::AuraReload);
                ctx.emit(Effect::Info {
                    key: InfoKey::BaseLevel,
                    value: amount,
                });
                ctx.emit(Effect::EquipmentLevelUp);
                ctx.emit(Effect::CartLevelUp { level: amount });
                CompanionPolicy::maybe_react(ctx, CompanionTrigger::LevelUp);
            }
            Self::JobLevel => {
                progression(ctx).job_level = amount;
                ctx.emit(Effect::Info {
                    key: InfoKey::JobLevel,
                    value: amount,
                });
                ctx.emit(Effect::SkillListLevelUp);
            }
            Self::Money => {
                ctx.player_mut().money = amount;
                ctx.emit(Effect::Info {
                    key: InfoKey::Zeny,
                    value: amount,
                });
            }
            Self::WalkSpeed => ctx.player_mut().walk_speed = amount,
            Self::Ignore => {}
        }
    }
}

fn progression<'c>(ctx: &'c mut SyncContext<'_>) -> &'c mut Progression {
    &mut ctx.player_mut().progression
}

fn trait_slot(traits: &mut TraitStats, key: InfoKey) -> Option<&mut i64> {
    let slot = match key {
        InfoKey::Pow => &mut traits.pow,
        InfoKey::Sta => &mut traits.sta,
        InfoKey::Wis => &mut traits.wis,
        InfoKey::Spl => &mut traits.spl,
        InfoKey::Con => &mut traits.con,
        InfoKey::Crt => &mut traits.crt,
        InfoKey::Patk => &mut traits.patk,
        InfoKey::Smatk => &mut traits.smatk,
        InfoKey::Res => &mut traits.res,
        InfoKey::Mres => &mut traits.mres,
        InfoKey::Hplus => &mut traits.hplus,
        InfoKey::Crate => &mut traits.crate_rate,
        InfoKey::TraitPoint => &mut traits.trait_points,
        InfoKey::Ap => &mut traits.ap,
        InfoKey::MaxAp => &mut traits.max_ap,
        InfoKey::Upow => &mut traits.upow,
        InfoKey::Usta => &mut traits.usta,
        InfoKey::Uwis => &mut traits.uwis,
        InfoKey::Uspl => &mut traits.uspl,
        InfoKey::Ucon => &mut traits.ucon,
        InfoKey::Ucrt => &mut traits.ucrt,
        InfoKey::BaseLevel | InfoKey::JobLevel | InfoKey::Zeny => return None,
    };
    Some(slot)
}

/// Mapping from canonical attribute code to its mutation, built once.
#[derive(Debug)]
pub struct MutationTable {
    entries: HashMap<StatusProperty, Mutation>,
}

static DEFAULT_TABLE: LazyLock<MutationTable> = LazyLock::new(MutationTable::new);

impl MutationTable {
    /// Process-wide table shared by every engine.
    pub fn global() -> &'static Self {
        &DEFAULT_TABLE
    }

    pub fn new() -> Self {
        use StatusProperty as P;

        let mut entries = HashMap::new();

        entries.insert(P::Speed, Mutation::WalkSpeed);
        entries.insert(P::Virtue, Mutation::Ignore);
        entries.insert(P::Honor, Mutation::Ignore);

        entries.insert(P::Hp, Mutation::Vital(VitalKind::Hp, Side::Current));
        entries.insert(P::MaxHp, Mutation::Vital(VitalKind::Hp, Side::Max));
        entries.insert(P::Sp, Mutation::Vital(VitalKind::Sp, Side::Current));
        entries.insert(P::MaxSp, Mutation::Vital(VitalKind::Sp, Side::Max));

        entries.insert(P::BaseExp, Mutation::Meter(MeterSlot::BaseExp, Side::Current));
        entries.insert(P::NextBaseExp, Mutation::Meter(MeterSlot::BaseExp, Side::Max));
        entries.insert(P::JobExp, Mutation::Meter(MeterSlot::JobExp, Side::Current));
        entries.insert(P::NextJobExp, Mutation::Meter(MeterSlot::JobExp, Side::Max));
        entries.insert(P::Weight, Mutation::Meter(MeterSlot::Weight, Side::Current));
        entries.insert(P::MaxWeight, Mutation::Meter(MeterSlot::Weight, Side::Max));

        entries.insert(P::StatusPoint, Mutation::StatusPoints);
        entries.insert(P::SkillPoint, Mutation::SkillPoints);
        entries.insert(P::BaseLevel, Mutation::BaseLevel);
        entries.insert(P::JobLevel, Mutation::JobLevel);
        entries.insert(P::Money, Mutation::Money);

        for property in [P::Str, P::Agi, P::Vit, P::Int, P::Dex, P::Luk] {
            if let Some(stat) = property.primary() {
                entries.insert(property, Mutation::Primary(stat));
            }
        }
        for property in [
            P::StandardStr,
            P::StandardAgi,
            P::StandardVit,
            P::StandardInt,
            P::StandardDex,
            P::StandardLuk,
        ] {
            if let Some(stat) = property.standard() {
                entries.insert(property, Mutation::RaiseCost(stat));
            }
        }

        for (property, field) in [
            (P::AttPower, CombatField::Attack),
            (P::RefiningPower, CombatField::AttackBonus),
            (P::MaxMattPower, CombatField::MatkMax),
            (P::MinMattPower, CombatField::MatkMin),
            (P::ItemDefPower, CombatField::Def),
            (P::PlusDefPower, CombatField::DefBonus),
            (P::MdefPower, CombatField::Mdef),
            (P::PlusMdefPower, CombatField::MdefBonus),
            (P::HitSuccessValue, CombatField::Hit),
            (P::AvoidSuccessValue, CombatField::Flee),
            (P::PlusAvoidSuccessValue, CombatField::FleeBonus),
            (P::CriticalSuccessValue, CombatField::Critical),
            (P::Aspd, CombatField::Aspd),
        ] {
            entries.insert(property, Mutation::Combat(field));
        }

        for (property, key) in [
            (P::Pow, InfoKey::Pow),
            (P::Sta, InfoKey::Sta),
            (P::Wis, InfoKey::Wis),
            (P::Spl, InfoKey::Spl),
            (P::Con, InfoKey::Con),
            (P::Crt, InfoKey::Crt),
            (P::Patk, InfoKey::Patk),
            (P::Smatk, InfoKey::Smatk),
            (P::Res, InfoKey::Res),
            (P::Mres, InfoKey::Mres),
            (P::Hplus, InfoKey::Hplus),
            (P::Crate, InfoKey::Crate),
            (P::TraitPoint, InfoKey::TraitPoint),
            (P::Ap, InfoKey::Ap),
            (P::MaxAp, InfoKey::MaxAp),
            (P::Upow, InfoKey::Upow),
            (P::Usta, InfoKey::Usta),
            (P::Uwis, InfoKey::Uwis),
            (P::Uspl, InfoKey::Uspl),
            (P::Ucon, InfoKey::Ucon),
            (P::Ucrt, InfoKey::Ucrt),
        ] {
            entries.insert(property, Mutation::Trait(key));
        }

        Self { entries }
    }

    pub fn get(&self, property: StatusProperty) -> Option<Mutation> {
        self.entries.get(&property).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MutationTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn unsupported_codes_have_no_entry() {
        let table = MutationTable::global();
        for property in [
            StatusProperty::HairColor,
            StatusProperty::Class,
            StatusProperty::Sex,
            StatusProperty::PlusAspd,
        ] {
            assert_eq!(table.get(property), None, "{property}");
        }
    }

    #[test]
    fn every_other_code_is_covered() {
        let table = MutationTable::new();
        let unsupported = 4;
        assert_eq!(table.len(), StatusProperty::iter().count() - unsupported);
    }

    #[test]
    fn magic_attack_codes_keep_their_widget_keys() {
        let table = MutationTable::new();
        let max = table.get(StatusProperty::MaxMattPower);
        assert_eq!(max, Some(Mutation::Combat(CombatField::MatkMax)));
        assert_eq!(CombatField::MatkMax.key(), StatKey::Matk);
        assert_eq!(CombatField::MatkMin.key(), StatKey::Matk2);
    }

    #[test]
    fn primary_and_standard_codes_share_stats() {
        let table = MutationTable::new();
        assert_eq!(
            table.get(StatusProperty::Dex),
            Some(Mutation::Primary(PrimaryStat::Dex))
        );
        assert_eq!(
            table.get(StatusProperty::StandardDex),
            Some(Mutation::RaiseCost(PrimaryStat::Dex))
        );
    }
}
