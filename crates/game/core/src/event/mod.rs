//! Decoded inbound protocol events.
//!
//! Byte-level decoding happens upstream; by the time an [`InboundEvent`]
//! reaches this crate every field is typed. Each variant corresponds to one or
//! more packet kinds, and [`InboundEvent::kind`] recovers the exact packet kind
//! for registry lookup.
mod broadcast;
mod status;

pub use broadcast::{AnnounceEvent, RankCategory, RankEvent};
pub use status::{StatusBlock, StatusChangeAck, StatusEvent};

/// Protocol packet kinds this engine knows how to route.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    NotifyPlayerMove,
    ParChange,
    LongParChange,
    LongParChange2,
    StatusChange,
    NotifyCartItemCountInfo,
    CoupleStatus,
    Status,
    StatusChangeAck,
    AttackRange,
    Broadcast,
    Broadcast2,
    UserCount,
    NotifyPlayerChat,
    AttackFailureForDistance,
    Config,
    ActionFailure,
    Msg,
    MsgColor,
    Recovery,
    Recovery2,
    BlacksmithRank,
    AlchemistRank,
    TaekwonRank,
    KillerRank,
    UpdateMapInfo,
}

impl EventKind {
    /// Kinds that encode the generic "set attribute" operation.
    pub const STATUS_FAMILY: [EventKind; 6] = [
        EventKind::ParChange,
        EventKind::LongParChange,
        EventKind::LongParChange2,
        EventKind::StatusChange,
        EventKind::NotifyCartItemCountInfo,
        EventKind::CoupleStatus,
    ];
}

/// Map cell coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// `ZC_NOTIFY_PLAYERMOVE`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerMove {
    pub from: CellPos,
    pub to: CellPos,
}

/// `ZC_NOTIFY_PLAYERCHAT`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerChat {
    pub msg: String,
}

/// `ZC_ATTACK_FAILURE_FOR_DISTANCE`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackFailure {
    pub target_id: u32,
    pub target_pos: CellPos,
    pub current_attack_range: i64,
}

/// `ZC_ATTACK_RANGE`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackRange {
    pub current_attack_range: i64,
}

/// `ZC_USER_COUNT`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserCount {
    pub count: i64,
}

/// `ZC_CONFIG`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigUpdate {
    /// Config type; 0 is equipment window visibility.
    pub config: i32,
    pub value: i32,
}

impl ConfigUpdate {
    pub const EQUIP_WINDOW: i32 = 0;
}

/// `ZC_ACTION_FAILURE`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionFailure {
    pub error_code: i32,
}

/// `ZC_MSG` / `ZC_MSG_COLOR`: a message-table id, optionally coloured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableMessage {
    pub msg: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<u32>,
}

/// `ZC_RECOVERY` / `ZC_RECOVERY2`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recovery {
    pub var_id: i32,
    pub amount: i64,
}

/// `ZC_UPDATE_MAPINFO`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapCellUpdate {
    pub pos: CellPos,
    pub cell_type: i32,
}

/// A decoded server message, one variant per payload shape.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InboundEvent {
    PlayerMove(PlayerMove),
    /// Any of the status-family shapes.
    Status(StatusEvent),
    StatusBlock(StatusBlock),
    StatusChangeAck(StatusChangeAck),
    AttackRange(AttackRange),
    Broadcast(AnnounceEvent),
    Broadcast2(AnnounceEvent),
    UserCount(UserCount),
    PlayerChat(PlayerChat),
    AttackFailureForDistance(AttackFailure),
    Config(ConfigUpdate),
    ActionFailure(ActionFailure),
    Msg(TableMessage),
    MsgColor(TableMessage),
    Recovery(Recovery),
    Recovery2(Recovery),
    Rank(RankEvent),
    UpdateMapInfo(MapCellUpdate),
}

impl InboundEvent {
    /// Packet kind used for registry lookup.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PlayerMove(_) => EventKind::NotifyPlayerMove,
            Self::Status(status) => status.kind(),
            Self::StatusBlock(_) => EventKind::Status,
            Self::StatusChangeAck(_) => EventKind::StatusChangeAck,
            Self::AttackRange(_) => EventKind::AttackRange,
            Self::Broadcast(_) => EventKind::Broadcast,
            Self::Broadcast2(_) => EventKind::Broadcast2,
            Self::UserCount(_) => EventKind::UserCount,
            Self::PlayerChat(_) => EventKind::NotifyPlayerChat,
            Self::AttackFailureForDistance(_) => EventKind::AttackFailureForDistance,
            Self::Config(_) => EventKind::Config,
            Self::ActionFailure(_) => EventKind::ActionFailure,
            Self::Msg(_) => EventKind::Msg,
            Self::MsgColor(_) => EventKind::MsgColor,
            Self::Recovery(_) => EventKind::Recovery,
            Self::Recovery2(_) => EventKind::Recovery2,
            Self::Rank(rank) => rank.category.kind(),
            Self::UpdateMapInfo(_) => EventKind::UpdateMapInfo,
        }
    }
}

impl From<StatusEvent> for InboundEvent {
    fn from(event: StatusEvent) -> Self {
        Self::Status(event)
    }
}
