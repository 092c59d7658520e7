use super::life::{Life, Meter};
use crate::status::PrimaryStat;

/// Base, equipment bonus and raise cost of one primary stat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatPoints {
    pub base: i64,
    pub bonus: i64,
    /// Status points required to raise `base` by one.
    pub raise_cost: i64,
}

/// Derived combat values shown in the stats window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub attack: i64,
    pub attack_bonus: i64,
    pub matk_max: i64,
    pub matk_min: i64,
    pub def: i64,
    pub def_bonus: i64,
    pub mdef: i64,
    pub mdef_bonus: i64,
    pub hit: i64,
    pub flee: i64,
    pub flee_bonus: i64,
    pub critical: i64,
    /// Attack speed as displayed (already divided down from wire units).
    pub aspd: i64,
}

/// Levels, experience and unspent points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    pub base_level: i64,
    pub job_level: i64,
    pub base_exp: Meter,
    pub job_exp: Meter,
    pub skill_points: i64,
    pub status_points: i64,
}

/// Trait attribute block sent by newer protocol revisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitStats {
    pub pow: i64,
    pub sta: i64,
    pub wis: i64,
    pub spl: i64,
    pub con: i64,
    pub crt: i64,
    pub patk: i64,
    pub smatk: i64,
    pub res: i64,
    pub mres: i64,
    pub hplus: i64,
    pub crate_rate: i64,
    pub trait_points: i64,
    pub ap: i64,
    pub max_ap: i64,
    pub upow: i64,
    pub usta: i64,
    pub uwis: i64,
    pub uspl: i64,
    pub ucon: i64,
    pub ucrt: i64,
}

/// Attributes of the locally controlled actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    primary: [StatPoints; PrimaryStat::COUNT],
    pub combat: CombatStats,
    pub life: Life,
    pub progression: Progression,
    pub money: i64,
    pub weight: Meter,
    /// Milliseconds per cell.
    pub walk_speed: i64,
    pub attack_range: i64,
    pub traits: TraitStats,
    /// Whether other players may inspect this player's equipment.
    pub equip_window_open: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stat(&self, stat: PrimaryStat) -> &StatPoints {
        &self.primary[stat.index()]
    }

    pub fn stat_mut(&mut self, stat: PrimaryStat) -> &mut StatPoints {
        &mut self.primary[stat.index()]
    }
}
