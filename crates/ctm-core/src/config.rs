//! Static track layout supplied by the organizer.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Serde helpers for `HH:MM` clock times.
pub mod clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(s.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}

/// A start/end pair of clock times within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    #[serde(with = "clock")]
    pub start: NaiveTime,
    #[serde(with = "clock")]
    pub end: NaiveTime,
}

impl Window {
    /// Builds a window from hour/minute pairs.
    ///
    /// Returns `None` for out-of-range clock values.
    pub fn from_hm(start: (u32, u32), end: (u32, u32)) -> Option<Self> {
        Some(Self {
            start: NaiveTime::from_hms_opt(start.0, start.1, 0)?,
            end: NaiveTime::from_hms_opt(end.0, end.1, 0)?,
        })
    }

    /// Rejects windows that end before they start.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.end < self.start {
            return Err(ValidationError::InvertedWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Length in whole minutes. Zero for inverted windows.
    pub fn minutes(&self) -> u32 {
        let minutes = (self.end - self.start).num_minutes();
        u32::try_from(minutes).unwrap_or(0)
    }
}

/// Layout of one track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackConfig {
    pub title: String,
    pub morning: Window,
    /// Display only; never holds talks.
    pub lunch: Window,
    pub evening: Window,
    /// Start of the networking event. Display only.
    #[serde(with = "clock")]
    pub networking: NaiveTime,
}

impl TrackConfig {
    /// The usual day: 09:00-12:00 talks, lunch until 13:00, talks until 17:00.
    pub fn standard(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            morning: hm_window((9, 0), (12, 0)),
            lunch: hm_window((12, 0), (13, 0)),
            evening: hm_window((13, 0), (17, 0)),
            networking: hm(17, 0),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "track title",
            });
        }
        self.morning.validate()?;
        self.lunch.validate()?;
        self.evening.validate()
    }
}

/// Immutable conference layout handed to [`Conference::new`](crate::Conference::new).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceConfig {
    pub tracks: Vec<TrackConfig>,
}

impl Default for ConferenceConfig {
    fn default() -> Self {
        Self {
            tracks: vec![
                TrackConfig::standard("Track 1"),
                TrackConfig::standard("Track 2"),
            ],
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn hm_window(start: (u32, u32), end: (u32, u32)) -> Window {
    Window {
        start: hm(start.0, start.1),
        end: hm(end.0, end.1),
    }
}
