//! Field normalizer: reduces every status wire shape to `(code, amount)`.

use super::StatusCode;

/// Field view of one status-family event.
///
/// Each wire shape fills at most one code field and at most one magnitude
/// field. The optional auxiliary fields are only present on the couple-status
/// shape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusFields {
    pub var_id: Option<i32>,
    pub status_type: Option<i32>,
    pub status_id: Option<i32>,
    pub amount: Option<i64>,
    pub count: Option<i64>,
    pub value: Option<i64>,
    pub default_status: Option<i64>,
    pub plus_status: Option<i64>,
}

/// Canonical update produced by [`StatusFields::normalize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizedStatus {
    pub code: StatusCode,
    pub amount: i64,
}

impl StatusFields {
    /// Resolves the attribute code.
    ///
    /// Priority: `var_id`, then `status_type`, then `status_id`. Falls back to
    /// [`StatusCode::UNRECOGNIZED`] when none is present.
    pub fn code(&self) -> StatusCode {
        self.var_id
            .or(self.status_type)
            .or(self.status_id)
            .map_or(StatusCode::UNRECOGNIZED, StatusCode)
    }

    /// Resolves the magnitude.
    ///
    /// Priority: `amount`, then `count`, then `value`. Defaults to 0.
    pub fn amount(&self) -> i64 {
        self.amount.or(self.count).or(self.value).unwrap_or(0)
    }

    pub fn normalize(&self) -> NormalizedStatus {
        NormalizedStatus {
            code: self.code(),
            amount: self.amount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_priority_is_var_id_then_status_type_then_status_id() {
        let all = StatusFields {
            var_id: Some(5),
            status_type: Some(13),
            status_id: Some(20),
            ..Default::default()
        };
        assert_eq!(all.code(), StatusCode(5));

        let no_var = StatusFields {
            var_id: None,
            ..all.clone()
        };
        assert_eq!(no_var.code(), StatusCode(13));

        let only_id = StatusFields {
            status_id: Some(20),
            ..Default::default()
        };
        assert_eq!(only_id.code(), StatusCode(20));
    }

    #[test]
    fn amount_priority_is_amount_then_count_then_value() {
        let all = StatusFields {
            amount: Some(1),
            count: Some(2),
            value: Some(3),
            ..Default::default()
        };
        assert_eq!(all.amount(), 1);

        let no_amount = StatusFields {
            amount: None,
            ..all.clone()
        };
        assert_eq!(no_amount.amount(), 2);

        let only_value = StatusFields {
            value: Some(3),
            ..Default::default()
        };
        assert_eq!(only_value.amount(), 3);
    }

    #[test]
    fn missing_fields_fall_back_to_sentinel_and_zero() {
        let empty = StatusFields {
            default_status: Some(9),
            plus_status: Some(4),
            ..Default::default()
        };
        assert_eq!(
            empty.normalize(),
            NormalizedStatus {
                code: StatusCode::UNRECOGNIZED,
                amount: 0,
            }
        );
    }

    #[test]
    fn zero_valued_fields_still_win_priority() {
        let fields = StatusFields {
            var_id: Some(0),
            status_id: Some(5),
            amount: Some(0),
            value: Some(7),
            ..Default::default()
        };
        assert_eq!(fields.code(), StatusCode(0));
        assert_eq!(fields.amount(), 0);
    }
}
