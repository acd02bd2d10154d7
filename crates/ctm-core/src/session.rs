//! Capacity-bounded talk sessions.
//!
//! A session is a contiguous window inside a track. Talks are stamped back to
//! back from the session start, so a talk's start time is always the session
//! start plus the minutes consumed before it.

use std::fmt;

use chrono::{NaiveTime, TimeDelta};
use serde::Serialize;

use crate::config::Window;
use crate::error::DoesNotFit;
use crate::talk::Talk;

/// Which half of the day a session covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Morning,
    Evening,
}

impl SessionKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Evening => "evening",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A talk with its slot in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTalk {
    pub talk: Talk,
    pub start: NaiveTime,
    /// Minutes actually consumed. For open-ended talks this is the gap they filled.
    pub minutes: u32,
}

impl ScheduledTalk {
    pub fn end(&self) -> NaiveTime {
        self.start + TimeDelta::minutes(i64::from(self.minutes))
    }
}

/// Where a talk landed and what is left afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub start: NaiveTime,
    pub remaining: u32,
}

/// A bounded window holding an ordered run of talks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    kind: SessionKind,
    start: NaiveTime,
    end: NaiveTime,
    talks: Vec<ScheduledTalk>,
    consumed: u32,
}

impl Session {
    /// Creates an empty session over `window`.
    ///
    /// The window is expected to be validated already; an inverted window
    /// yields a session with zero capacity.
    pub const fn new(kind: SessionKind, window: Window) -> Self {
        Self {
            kind,
            start: window.start,
            end: window.end,
            talks: Vec::new(),
            consumed: 0,
        }
    }

    pub const fn kind(&self) -> SessionKind {
        self.kind
    }

    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn talks(&self) -> &[ScheduledTalk] {
        &self.talks
    }

    /// Total minutes between start and end.
    pub fn capacity(&self) -> u32 {
        Window {
            start: self.start,
            end: self.end,
        }
        .minutes()
    }

    pub fn remaining(&self) -> u32 {
        self.capacity().saturating_sub(self.consumed)
    }

    pub fn has_open_ended(&self) -> bool {
        self.talks.iter().any(|s| s.talk.duration().is_open_ended())
    }

    /// Appends `talk` if it fits.
    ///
    /// Fixed-length talks fit when their minutes do not exceed what is left.
    /// An open-ended talk takes the whole remaining gap, needs a non-empty
    /// gap, and only one may be hosted per session.
    pub fn try_place(&mut self, talk: &Talk) -> Result<Placement, DoesNotFit> {
        let remaining = self.remaining();
        let minutes = match talk.duration().effective_minutes() {
            Some(minutes) if minutes <= remaining => minutes,
            None if remaining > 0 && !self.has_open_ended() => remaining,
            _ => {
                return Err(DoesNotFit {
                    topic: talk.topic().to_string(),
                    remaining,
                });
            }
        };

        let start = self.start + TimeDelta::minutes(i64::from(self.consumed));
        self.talks.push(ScheduledTalk {
            talk: talk.clone(),
            start,
            minutes,
        });
        self.consumed += minutes;

        Ok(Placement {
            start,
            remaining: self.remaining(),
        })
    }

    /// Drops all placed talks.
    pub fn clear(&mut self) {
        self.talks.clear();
        self.consumed = 0;
    }
}
