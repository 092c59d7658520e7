//! Canonical attribute codes shared by every status-family wire shape.
//!
//! The numeric values are the server's attribute identifiers. Every inbound
//! shape (`varID`, `statusType`, `statusID`) uses the same namespace, so one
//! table covers all of them.
mod fields;

pub use fields::{NormalizedStatus, StatusFields};

use crate::error::CoreError;

/// Raw attribute identifier as carried on the wire.
///
/// `StatusCode::UNRECOGNIZED` is produced when an event carries no code field
/// at all; it never maps to a [`StatusProperty`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatusCode(pub i32);

impl StatusCode {
    pub const UNRECOGNIZED: Self = Self(-1);

    /// Resolves the raw code into its canonical attribute.
    pub fn property(self) -> Result<StatusProperty, CoreError> {
        StatusProperty::from_repr(self.0).ok_or(CoreError::UnknownStatusCode(self.0))
    }
}

impl From<StatusProperty> for StatusCode {
    fn from(property: StatusProperty) -> Self {
        Self(property as i32)
    }
}

/// Canonical attribute identifiers.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[repr(i32)]
pub enum StatusProperty {
    Speed = 0,
    BaseExp = 1,
    JobExp = 2,
    Virtue = 3,
    Honor = 4,
    Hp = 5,
    MaxHp = 6,
    Sp = 7,
    MaxSp = 8,
    StatusPoint = 9,
    HairColor = 10,
    BaseLevel = 11,
    SkillPoint = 12,
    Str = 13,
    Agi = 14,
    Vit = 15,
    Int = 16,
    Dex = 17,
    Luk = 18,
    Class = 19,
    Money = 20,
    Sex = 21,
    NextBaseExp = 22,
    NextJobExp = 23,
    Weight = 24,
    MaxWeight = 25,
    StandardStr = 32,
    StandardAgi = 33,
    StandardVit = 34,
    StandardInt = 35,
    StandardDex = 36,
    StandardLuk = 37,
    AttPower = 41,
    RefiningPower = 42,
    MaxMattPower = 43,
    MinMattPower = 44,
    ItemDefPower = 45,
    PlusDefPower = 46,
    MdefPower = 47,
    PlusMdefPower = 48,
    HitSuccessValue = 49,
    AvoidSuccessValue = 50,
    PlusAvoidSuccessValue = 51,
    CriticalSuccessValue = 52,
    Aspd = 53,
    PlusAspd = 54,
    JobLevel = 55,

    // Trait block (fourth job protocol revisions)
    Pow = 219,
    Sta = 220,
    Wis = 221,
    Spl = 222,
    Con = 223,
    Crt = 224,
    Patk = 225,
    Smatk = 226,
    Res = 227,
    Mres = 228,
    Hplus = 229,
    Crate = 230,
    TraitPoint = 231,
    Ap = 232,
    MaxAp = 233,
    Upow = 247,
    Usta = 248,
    Uwis = 249,
    Uspl = 250,
    Ucon = 251,
    Ucrt = 252,
}

impl StatusProperty {
    /// Maps the six primary stat codes onto [`PrimaryStat`].
    pub const fn primary(self) -> Option<PrimaryStat> {
        match self {
            Self::Str => Some(PrimaryStat::Str),
            Self::Agi => Some(PrimaryStat::Agi),
            Self::Vit => Some(PrimaryStat::Vit),
            Self::Int => Some(PrimaryStat::Int),
            Self::Dex => Some(PrimaryStat::Dex),
            Self::Luk => Some(PrimaryStat::Luk),
            _ => None,
        }
    }

    /// Maps the `STANDARD_*` codes (points needed to raise a stat) onto [`PrimaryStat`].
    pub const fn standard(self) -> Option<PrimaryStat> {
        match self {
            Self::StandardStr => Some(PrimaryStat::Str),
            Self::StandardAgi => Some(PrimaryStat::Agi),
            Self::StandardVit => Some(PrimaryStat::Vit),
            Self::StandardInt => Some(PrimaryStat::Int),
            Self::StandardDex => Some(PrimaryStat::Dex),
            Self::StandardLuk => Some(PrimaryStat::Luk),
            _ => None,
        }
    }
}

/// The six primary stats.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PrimaryStat {
    Str,
    Agi,
    Vit,
    Int,
    Dex,
    Luk,
}

impl PrimaryStat {
    pub const COUNT: usize = 6;

    pub const fn index(self) -> usize {
        self as usize
    }
}
