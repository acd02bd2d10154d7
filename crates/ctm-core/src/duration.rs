//! Talk lengths and the units they are expressed in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unit a talk length is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationUnit {
    Minutes,
    /// Five-minute slots.
    Lightning,
    /// No fixed length; takes whatever is left of the session it lands in.
    OpenEnded,
}

impl DurationUnit {
    /// Minutes per unit, or `None` when the length is decided at placement.
    pub const fn factor(self) -> Option<u32> {
        match self {
            Self::Minutes => Some(1),
            Self::Lightning => Some(5),
            Self::OpenEnded => None,
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Minutes => "min",
            Self::Lightning => "lightning",
            Self::OpenEnded => "open-ended",
        };
        write!(f, "{s}")
    }
}

impl FromStr for DurationUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "min" | "mins" | "minutes" => Ok(Self::Minutes),
            "lightning" => Ok(Self::Lightning),
            "open-ended" => Ok(Self::OpenEnded),
            _ => Err(UnknownUnit(s.to_string())),
        }
    }
}

/// Error type for unrecognised unit strings.
#[derive(Debug, Clone)]
pub struct UnknownUnit(String);

impl fmt::Display for UnknownUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown duration unit: {}", self.0)
    }
}

impl std::error::Error for UnknownUnit {}

/// Length of a talk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    value: u32,
    unit: DurationUnit,
}

impl Duration {
    /// Creates a duration, rejecting negative or oversized values.
    pub fn new(value: i64, unit: DurationUnit) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::NegativeDuration { value });
        }
        let value =
            u32::try_from(value).map_err(|_| ValidationError::DurationTooLarge { value })?;
        Ok(Self { value, unit })
    }

    pub const fn minutes(value: u32) -> Self {
        Self {
            value,
            unit: DurationUnit::Minutes,
        }
    }

    /// A single five-minute lightning slot.
    pub const fn lightning() -> Self {
        Self {
            value: 1,
            unit: DurationUnit::Lightning,
        }
    }

    pub const fn open_ended() -> Self {
        Self {
            value: 0,
            unit: DurationUnit::OpenEnded,
        }
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    pub const fn unit(&self) -> DurationUnit {
        self.unit
    }

    pub const fn is_open_ended(&self) -> bool {
        matches!(self.unit, DurationUnit::OpenEnded)
    }

    /// Length in minutes, or `None` for open-ended talks.
    ///
    /// Saturates instead of overflowing, so an absurd length simply never fits.
    pub fn effective_minutes(&self) -> Option<u32> {
        self.unit
            .factor()
            .map(|factor| self.value.saturating_mul(factor))
    }

    /// Minutes charged against the conference-wide budget at registration.
    ///
    /// Open-ended talks are free here; their cost is only known once placed.
    pub fn admission_minutes(&self) -> u32 {
        self.effective_minutes().unwrap_or(0)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            DurationUnit::Minutes => write!(f, "{}min", self.value),
            DurationUnit::Lightning if self.value == 1 => write!(f, "lightning"),
            DurationUnit::Lightning => write!(f, "{}x lightning", self.value),
            DurationUnit::OpenEnded => write!(f, "open-ended"),
        }
    }
}
