/// A current/maximum pair where either side may not have arrived yet.
///
/// Both sides start at [`Meter::UNKNOWN`]. The server sends the two halves in
/// separate updates and in no guaranteed order, so a pair is only displayable
/// once both sides are known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meter {
    pub current: i64,
    pub max: i64,
}

impl Meter {
    /// Sentinel for "not received from the server yet".
    pub const UNKNOWN: i64 = -1;

    pub const fn new(current: i64, max: i64) -> Self {
        Self { current, max }
    }

    pub const fn has_current(&self) -> bool {
        self.current > Self::UNKNOWN
    }

    pub const fn has_max(&self) -> bool {
        self.max > Self::UNKNOWN
    }

    /// Returns the pair when both sides are known.
    pub const fn known(&self) -> Option<(i64, i64)> {
        if self.has_current() && self.has_max() {
            Some((self.current, self.max))
        } else {
            None
        }
    }

    /// Fill ratio in permille, clamped to `0..=1000`.
    fn permille(&self) -> Option<u16> {
        let (current, max) = self.known()?;
        if max == 0 {
            return None;
        }
        Some((current.saturating_mul(1000) / max).clamp(0, 1000) as u16)
    }
}

impl Default for Meter {
    fn default() -> Self {
        Self::new(Self::UNKNOWN, Self::UNKNOWN)
    }
}

/// Which vital a gauge or heal refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum VitalKind {
    Hp,
    Sp,
}

/// Read-only life bar representation handed to UI and party collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LifeSnapshot {
    pub hp: i64,
    pub hp_max: i64,
    pub sp: i64,
    pub sp_max: i64,
    /// HP fill in permille; `None` until both halves are known.
    pub hp_permille: Option<u16>,
    /// SP fill in permille; `None` until both halves are known.
    pub sp_permille: Option<u16>,
}

/// HP and SP of the local player plus the cached life bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Life {
    pub hp: Meter,
    pub sp: Meter,
    snapshot: LifeSnapshot,
}

impl Life {
    pub fn new() -> Self {
        let mut life = Self {
            hp: Meter::default(),
            sp: Meter::default(),
            snapshot: LifeSnapshot {
                hp: Meter::UNKNOWN,
                hp_max: Meter::UNKNOWN,
                sp: Meter::UNKNOWN,
                sp_max: Meter::UNKNOWN,
                hp_permille: None,
                sp_permille: None,
            },
        };
        life.update();
        life
    }

    pub fn meter(&self, kind: VitalKind) -> &Meter {
        match kind {
            VitalKind::Hp => &self.hp,
            VitalKind::Sp => &self.sp,
        }
    }

    pub fn meter_mut(&mut self, kind: VitalKind) -> &mut Meter {
        match kind {
            VitalKind::Hp => &mut self.hp,
            VitalKind::Sp => &mut self.sp,
        }
    }

    /// Recomputes the cached life bar from the current meters.
    ///
    /// Must be called after every write to `hp` or `sp`.
    pub fn update(&mut self) {
        self.snapshot = LifeSnapshot {
            hp: self.hp.current,
            hp_max: self.hp.max,
            sp: self.sp.current,
            sp_max: self.sp.max,
            hp_permille: self.hp.permille(),
            sp_permille: self.sp.permille(),
        };
    }

    pub fn snapshot(&self) -> LifeSnapshot {
        self.snapshot
    }
}

impl Default for Life {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_is_unknown_until_both_sides_arrive() {
        let mut meter = Meter::default();
        assert_eq!(meter.known(), None);

        meter.max = 100;
        assert_eq!(meter.known(), None);

        meter.current = 0;
        assert_eq!(meter.known(), Some((0, 100)));
    }

    #[test]
    fn snapshot_tracks_updates() {
        let mut life = Life::new();
        assert_eq!(life.snapshot().hp_permille, None);

        life.hp = Meter::new(50, 200);
        life.update();
        let snapshot = life.snapshot();
        assert_eq!(snapshot.hp, 50);
        assert_eq!(snapshot.hp_max, 200);
        assert_eq!(snapshot.hp_permille, Some(250));
        assert_eq!(snapshot.sp_permille, None);
    }

    #[test]
    fn permille_is_clamped() {
        let mut life = Life::new();
        life.hp = Meter::new(300, 200);
        life.sp = Meter::new(-20, 0);
        life.update();
        assert_eq!(life.snapshot().hp_permille, Some(1000));
        assert_eq!(life.snapshot().sp_permille, None);
    }
}
