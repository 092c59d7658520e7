//! Side effects emitted while applying inbound events.
//!
//! The engine never calls UI widgets, the party roster or the network
//! directly. It emits [`Effect`] values in the order they happen, and the host
//! routes them to its collaborators. Tests read the same stream.

use bitflags::bitflags;

use crate::event::CellPos;
use crate::state::{AccountId, LifeSnapshot, VitalKind};

/// Stats-window fields. `Display` yields the widget key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatKey {
    #[strum(to_string = "str")]
    Str,
    #[strum(to_string = "agi")]
    Agi,
    #[strum(to_string = "vit")]
    Vit,
    #[strum(to_string = "int")]
    Int,
    #[strum(to_string = "dex")]
    Dex,
    #[strum(to_string = "luk")]
    Luk,
    #[strum(to_string = "str2")]
    StrBonus,
    #[strum(to_string = "agi2")]
    AgiBonus,
    #[strum(to_string = "vit2")]
    VitBonus,
    #[strum(to_string = "int2")]
    IntBonus,
    #[strum(to_string = "dex2")]
    DexBonus,
    #[strum(to_string = "luk2")]
    LukBonus,
    #[strum(to_string = "str3")]
    StrCost,
    #[strum(to_string = "agi3")]
    AgiCost,
    #[strum(to_string = "vit3")]
    VitCost,
    #[strum(to_string = "int3")]
    IntCost,
    #[strum(to_string = "dex3")]
    DexCost,
    #[strum(to_string = "luk3")]
    LukCost,
    #[strum(to_string = "aspd")]
    Aspd,
    #[strum(to_string = "atak")]
    Atk,
    #[strum(to_string = "atak2")]
    AtkBonus,
    #[strum(to_string = "matak")]
    Matk,
    #[strum(to_string = "matak2")]
    Matk2,
    #[strum(to_string = "def")]
    Def,
    #[strum(to_string = "def2")]
    DefBonus,
    #[strum(to_string = "mdef")]
    Mdef,
    #[strum(to_string = "mdef2")]
    MdefBonus,
    #[strum(to_string = "hit")]
    Hit,
    #[strum(to_string = "flee")]
    Flee,
    #[strum(to_string = "flee2")]
    FleeBonus,
    #[strum(to_string = "critical")]
    Critical,
    #[strum(to_string = "statuspoint")]
    StatusPoint,
}

impl StatKey {
    pub const fn base(stat: crate::status::PrimaryStat) -> Self {
        use crate::status::PrimaryStat::*;
        match stat {
            Str => Self::Str,
            Agi => Self::Agi,
            Vit => Self::Vit,
            Int => Self::Int,
            Dex => Self::Dex,
            Luk => Self::Luk,
        }
    }

    pub const fn bonus(stat: crate::status::PrimaryStat) -> Self {
        use crate::status::PrimaryStat::*;
        match stat {
            Str => Self::StrBonus,
            Agi => Self::AgiBonus,
            Vit => Self::VitBonus,
            Int => Self::IntBonus,
            Dex => Self::DexBonus,
            Luk => Self::LukBonus,
        }
    }

    pub const fn cost(stat: crate::status::PrimaryStat) -> Self {
        use crate::status::PrimaryStat::*;
        match stat {
            Str => Self::StrCost,
            Agi => Self::AgiCost,
            Vit => Self::VitCost,
            Int => Self::IntCost,
            Dex => Self::DexCost,
            Luk => Self::LukCost,
        }
    }
}

/// Single-valued fields of the basic-info panel. `Display` yields the widget key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum InfoKey {
    #[strum(to_string = "blvl")]
    BaseLevel,
    #[strum(to_string = "jlvl")]
    JobLevel,
    Zeny,
    Pow,
    Sta,
    Wis,
    Spl,
    Con,
    Crt,
    Patk,
    Smatk,
    Res,
    Mres,
    Hplus,
    Crate,
    TraitPoint,
    Ap,
    MaxAp,
    Upow,
    Usta,
    Uwis,
    Uspl,
    Ucon,
    Ucrt,
}

/// Current/max pairs of the basic-info panel. `Display` yields the widget key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GaugeKind {
    #[strum(to_string = "hp")]
    Hp,
    #[strum(to_string = "sp")]
    Sp,
    #[strum(to_string = "bexp")]
    BaseExp,
    #[strum(to_string = "jexp")]
    JobExp,
    #[strum(to_string = "weight")]
    Weight,
}

impl From<VitalKind> for GaugeKind {
    fn from(kind: VitalKind) -> Self {
        match kind {
            VitalKind::Hp => Self::Hp,
            VitalKind::Sp => Self::Sp,
        }
    }
}

bitflags! {
    /// Chat line category bits, combinable (e.g. `PUBLIC | SELF`).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ChatKind: u16 {
        const PUBLIC   = 1 << 0;
        const PRIVATE  = 1 << 1;
        const PARTY    = 1 << 2;
        const GUILD    = 1 << 3;
        const ANNOUNCE = 1 << 4;
        const ERROR    = 1 << 5;
        const INFO     = 1 << 6;
        const BLUE     = 1 << 7;
        const ADMIN    = 1 << 8;
        const SELF     = 1 << 9;
    }
}

/// Chat-log tab a line is filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ChatFilter {
    PublicLog,
    PublicChat,
    Item,
}

/// One line appended to the chat log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatLine {
    pub text: String,
    pub kind: ChatKind,
    pub filter: ChatFilter,
    /// CSS colour string; `None` uses the colour implied by `kind`.
    pub color: Option<String>,
}

impl ChatLine {
    pub fn new(text: impl Into<String>, kind: ChatKind, filter: ChatFilter) -> Self {
        Self {
            text: text.into(),
            kind,
            filter,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Text and colour of a formatted announcement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnounceDisplay {
    pub text: String,
    pub color: String,
}

/// Packets this engine hands to the outbound network collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OutboundPacket {
    /// `CZ_PET_ACT`: make the companion perform a dialogue line.
    PetAct { data: u32 },
}

/// Observable side effect of one dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Effect {
    /// Stats window field update.
    Stat { key: StatKey, value: i64 },
    /// Basic-info single value update.
    Info { key: InfoKey, value: i64 },
    /// Basic-info current/max pair update. Only emitted once both are known.
    Gauge {
        kind: GaugeKind,
        current: i64,
        max: i64,
    },
    /// Skill list: unspent skill points changed.
    SkillPoints(i64),
    /// Skill list: job level changed.
    SkillListLevelUp,
    /// Equipment window: base level changed.
    EquipmentLevelUp,
    /// Cart selector: base level changed.
    CartLevelUp { level: i64 },
    /// Player aura must be reloaded for the new base level.
    AuraReload,
    /// Equipment window: visibility-to-others flag changed.
    EquipConfig { open: bool },
    /// Party roster: new life of a member.
    PartyMemberLife {
        account_id: AccountId,
        life: LifeSnapshot,
        hp: i64,
        hp_max: i64,
    },
    /// Chat log append.
    Chat(ChatLine),
    /// Line routed to the open chat room.
    ChatRoom(String),
    /// Speech bubble above the player.
    Overhead(String),
    /// Announcement banner: push the banner into the display queue.
    BannerAppend,
    /// Announcement banner: show this message.
    BannerSet(AnnounceDisplay),
    /// Packet for the outbound network collaborator.
    Outbound(OutboundPacket),
    /// Player walk request.
    WalkTo { from: CellPos, to: CellPos },
    /// Focus the given entity (target too far to attack).
    Focus { target_id: u32 },
    /// Put the player back into the ready-to-fight pose.
    ReadyFight,
    /// Floating heal number plus recovery visual.
    Heal { vital: VitalKind, amount: i64 },
    /// Altitude map: cell type changed.
    CellType { pos: CellPos, cell_type: i32 },
}
