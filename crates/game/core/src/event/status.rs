//! Status-family wire shapes.

use crate::status::{NormalizedStatus, StatusCode, StatusFields};

use super::EventKind;

/// One "set attribute X to Y" update, tagged by the wire shape that carried it.
///
/// Every variant encodes the same semantic operation; they differ only in
/// which field names the server used. [`StatusEvent::fields`] lifts each
/// variant into the common [`StatusFields`] view consumed by the normalizer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatusEvent {
    /// `ZC_PAR_CHANGE`
    ParChange { var_id: i32, count: i64 },
    /// `ZC_LONGPAR_CHANGE`
    LongParChange { var_id: i32, amount: i64 },
    /// `ZC_LONGPAR_CHANGE2`
    LongParChange2 { var_id: i32, amount: i64 },
    /// `ZC_STATUS_CHANGE`
    StatusChange { status_id: i32, value: i64 },
    /// `ZC_NOTIFY_CARTITEM_COUNTINFO`; carries no attribute code.
    CartItemCountInfo {
        cur_count: i64,
        max_count: i64,
        cur_weight: i64,
        max_weight: i64,
    },
    /// `ZC_COUPLESTATUS`: a primary stat with its base and bonus parts.
    CoupleStatus {
        status_type: i32,
        default_status: i64,
        plus_status: i64,
    },
}

impl StatusEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ParChange { .. } => EventKind::ParChange,
            Self::LongParChange { .. } => EventKind::LongParChange,
            Self::LongParChange2 { .. } => EventKind::LongParChange2,
            Self::StatusChange { .. } => EventKind::StatusChange,
            Self::CartItemCountInfo { .. } => EventKind::NotifyCartItemCountInfo,
            Self::CoupleStatus { .. } => EventKind::CoupleStatus,
        }
    }

    /// Field view of this event.
    pub fn fields(&self) -> StatusFields {
        match *self {
            Self::ParChange { var_id, count } => StatusFields {
                var_id: Some(var_id),
                count: Some(count),
                ..Default::default()
            },
            Self::LongParChange { var_id, amount } | Self::LongParChange2 { var_id, amount } => {
                StatusFields {
                    var_id: Some(var_id),
                    amount: Some(amount),
                    ..Default::default()
                }
            }
            Self::StatusChange { status_id, value } => StatusFields {
                status_id: Some(status_id),
                value: Some(value),
                ..Default::default()
            },
            Self::CartItemCountInfo { .. } => StatusFields::default(),
            Self::CoupleStatus {
                status_type,
                default_status,
                plus_status,
            } => StatusFields {
                status_type: Some(status_type),
                default_status: Some(default_status),
                plus_status: Some(plus_status),
                ..Default::default()
            },
        }
    }

    pub fn code(&self) -> StatusCode {
        self.fields().code()
    }

    pub fn amount(&self) -> i64 {
        self.fields().amount()
    }

    pub fn normalize(&self) -> NormalizedStatus {
        self.fields().normalize()
    }
}

/// `ZC_STATUS`: the full stats-window block sent on login and after stat changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusBlock {
    pub point: i64,
    pub str: i64,
    pub standard_str: i64,
    pub agi: i64,
    pub standard_agi: i64,
    pub vit: i64,
    pub standard_vit: i64,
    pub int: i64,
    pub standard_int: i64,
    pub dex: i64,
    pub standard_dex: i64,
    pub luk: i64,
    pub standard_luk: i64,
    pub att_power: i64,
    pub refining_power: i64,
    pub max_matt_power: i64,
    pub min_matt_power: i64,
    pub itemdef_power: i64,
    pub plusdef_power: i64,
    pub mdef_power: i64,
    pub plusmdef_power: i64,
    pub hit_success_value: i64,
    pub avoid_success_value: i64,
    pub plus_avoid_success_value: i64,
    pub critical_success_value: i64,
    pub aspd: i64,
    pub plus_aspd: i64,
}

impl StatusBlock {
    /// Attack speed in display units.
    pub const fn display_aspd(&self) -> i64 {
        (self.aspd + self.plus_aspd) / 4
    }
}

/// `ZC_STATUS_CHANGE_ACK`: answer to a stat raise request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusChangeAck {
    pub status_id: i32,
    /// False when the server refused the raise.
    pub result: bool,
    pub value: i64,
}
