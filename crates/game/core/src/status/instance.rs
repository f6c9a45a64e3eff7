use super::StatusKind;

/// Construction failures for status instances.
///
/// These are programming errors (bad content tables, bad callers), not
/// recoverable game events, and must not be silently coerced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    #[error("{kind} requires a positive duration")]
    ZeroDuration { kind: StatusKind },

    #[error("{kind} requires a positive magnitude")]
    MissingMagnitude { kind: StatusKind },

    #[error("damage reduction must retain 1..=99 percent, got {percent}")]
    ReductionOutOfRange { percent: u32 },
}

/// One live timed modifier on an actor.
///
/// `magnitude` is interpreted per kind: the multiplier for AtkMultiplier,
/// the flat bonus for AtkUp, the retained damage percent for
/// DamageReduction, the per-tick heal cap for HealingScroll. Kinds without
/// a magnitude store 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusInstance {
    pub kind: StatusKind,
    /// Remaining ticks; always ≥1 while the instance is live.
    pub duration: u32,
    pub magnitude: u32,
}

impl StatusInstance {
    /// Creates an instance of a kind that carries no magnitude.
    pub fn new(kind: StatusKind, duration: u32) -> Result<Self, StatusError> {
        if kind.requires_magnitude() {
            return Err(StatusError::MissingMagnitude { kind });
        }
        Self::build(kind, duration, 0)
    }

    /// Creates an instance of a kind that carries a magnitude.
    pub fn with_magnitude(
        kind: StatusKind,
        duration: u32,
        magnitude: u32,
    ) -> Result<Self, StatusError> {
        if magnitude == 0 {
            return Err(StatusError::MissingMagnitude { kind });
        }
        if kind == StatusKind::DamageReduction && magnitude >= 100 {
            return Err(StatusError::ReductionOutOfRange { percent: magnitude });
        }
        Self::build(kind, duration, magnitude)
    }

    /// Builds from loosely-typed parts (content tables, wire payloads):
    /// routes to [`Self::new`] or [`Self::with_magnitude`] by kind.
    pub fn from_parts(kind: StatusKind, duration: u32, magnitude: u32) -> Result<Self, StatusError> {
        if kind.requires_magnitude() {
            Self::with_magnitude(kind, duration, magnitude)
        } else {
            Self::new(kind, duration)
        }
    }

    fn build(kind: StatusKind, duration: u32, magnitude: u32) -> Result<Self, StatusError> {
        if duration == 0 {
            return Err(StatusError::ZeroDuration { kind });
        }
        Ok(Self {
            kind,
            duration,
            magnitude,
        })
    }

    /// Display fragment for status summaries, e.g. `Poison(2)` or
    /// `AtkMultiplier(1)x2`.
    pub fn summary(&self) -> String {
        if self.kind.requires_magnitude() {
            format!("{}({})x{}", self.kind, self.duration, self.magnitude)
        } else {
            format!("{}({})", self.kind, self.duration)
        }
    }
}
