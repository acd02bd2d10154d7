//! Tracks: two talk sessions around a lunch break, closed by networking.

use chrono::NaiveTime;

use crate::config::{TrackConfig, Window};
use crate::error::ValidationError;
use crate::session::{Session, SessionKind};

/// One parallel lane of the conference day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    title: String,
    morning: Session,
    lunch: Window,
    evening: Session,
    networking: NaiveTime,
}

impl Track {
    /// Builds a track with empty sessions from its configuration.
    pub fn from_config(config: &TrackConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            title: config.title.trim().to_string(),
            morning: Session::new(SessionKind::Morning, config.morning),
            lunch: config.lunch,
            evening: Session::new(SessionKind::Evening, config.evening),
            networking: config.networking,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn morning(&self) -> &Session {
        &self.morning
    }

    pub const fn evening(&self) -> &Session {
        &self.evening
    }

    pub const fn lunch(&self) -> Window {
        self.lunch
    }

    pub const fn networking(&self) -> NaiveTime {
        self.networking
    }

    /// Sessions in packing order: morning, then evening.
    pub fn sessions(&self) -> [&Session; 2] {
        [&self.morning, &self.evening]
    }

    pub fn sessions_mut(&mut self) -> [&mut Session; 2] {
        [&mut self.morning, &mut self.evening]
    }

    /// Combined capacity of both sessions in minutes.
    pub fn capacity(&self) -> u32 {
        self.morning.capacity() + self.evening.capacity()
    }

    pub fn clear(&mut self) {
        self.morning.clear();
        self.evening.clear();
    }
}
