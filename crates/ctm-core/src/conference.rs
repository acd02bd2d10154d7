//! Conference: the talk pool, admission control and scheduling entry point.

use crate::config::ConferenceConfig;
use crate::error::{CapacityExceeded, RegisterError, ValidationError};
use crate::format::ScheduleFormatter;
use crate::scheduler::{BestFitDecreasing, ScheduleOutcome, Scheduler};
use crate::source::TalkSource;
use crate::talk::Talk;
use crate::track::Track;

/// Tracks plus the talks registered for them.
///
/// `remaining_time` starts at the summed capacity of every session and only
/// shrinks as batches are admitted. It is an aggregate guard; whether talks
/// actually pack into sessions is decided by the scheduler.
#[derive(Debug, Clone)]
pub struct Conference<S = BestFitDecreasing> {
    tracks: Vec<Track>,
    selected_talks: Vec<Talk>,
    capacity: u32,
    remaining_time: u32,
    unscheduled: Vec<Talk>,
    scheduler: S,
}

impl Conference<BestFitDecreasing> {
    /// Builds a conference using best-fit-decreasing packing.
    pub fn new(config: &ConferenceConfig) -> Result<Self, ValidationError> {
        Self::with_scheduler(config, BestFitDecreasing)
    }
}

impl<S: Scheduler> Conference<S> {
    /// Builds a conference with an explicit placement policy.
    pub fn with_scheduler(config: &ConferenceConfig, scheduler: S) -> Result<Self, ValidationError> {
        let tracks = config
            .tracks
            .iter()
            .map(Track::from_config)
            .collect::<Result<Vec<_>, _>>()?;
        let capacity = tracks
            .iter()
            .fold(0u32, |total, track| total.saturating_add(track.capacity()));

        tracing::debug!(tracks = tracks.len(), capacity, "conference created");

        Ok(Self {
            tracks,
            selected_talks: Vec::new(),
            capacity,
            remaining_time: capacity,
            unscheduled: Vec::new(),
            scheduler,
        })
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Registered talks in registration order.
    pub fn selected_talks(&self) -> &[Talk] {
        &self.selected_talks
    }

    pub fn total_talks(&self) -> usize {
        self.selected_talks.len()
    }

    /// Summed capacity of every session, fixed at construction.
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Minutes still available for registration.
    pub const fn remaining_time(&self) -> u32 {
        self.remaining_time
    }

    /// Talks the most recent [`schedule`](Self::schedule) call could not place.
    pub fn unscheduled(&self) -> &[Talk] {
        &self.unscheduled
    }

    /// Admits a batch if its total fits the remaining time.
    ///
    /// All-or-nothing: a rejected batch leaves the pool and the remaining
    /// time untouched. Returns the minutes charged.
    pub fn register_talks(&mut self, batch: Vec<Talk>) -> Result<u32, CapacityExceeded> {
        let requested: u64 = batch
            .iter()
            .map(|talk| u64::from(talk.duration().admission_minutes()))
            .sum();

        let Some(charged) = u32::try_from(requested)
            .ok()
            .filter(|&minutes| minutes <= self.remaining_time)
        else {
            tracing::warn!(
                requested,
                remaining = self.remaining_time,
                talks = batch.len(),
                "registration rejected"
            );
            return Err(CapacityExceeded {
                requested,
                remaining: self.remaining_time,
            });
        };

        self.remaining_time -= charged;
        tracing::info!(
            talks = batch.len(),
            charged,
            remaining = self.remaining_time,
            "registered talks"
        );
        self.selected_talks.extend(batch);
        Ok(charged)
    }

    /// Loads a batch from `source` and registers it.
    pub fn register_from<T: TalkSource>(
        &mut self,
        source: &T,
    ) -> Result<u32, RegisterError<T::Error>> {
        let batch = source.load().map_err(RegisterError::Source)?;
        Ok(self.register_talks(batch)?)
    }

    /// Places the whole pool into the tracks, replacing any earlier placement.
    pub fn schedule(&mut self) -> ScheduleOutcome {
        let outcome = self
            .scheduler
            .schedule(&mut self.tracks, &self.selected_talks);
        self.unscheduled.clone_from(&outcome.unscheduled);
        outcome
    }

    /// First registered talk whose topic matches, ignoring case.
    pub fn talk_by_topic(&self, topic: &str) -> Option<&Talk> {
        self.selected_talks.iter().find(|talk| talk.has_topic(topic))
    }

    /// Hands the current schedule to `formatter`.
    pub fn render<F: ScheduleFormatter>(&self, formatter: &F) -> Result<String, F::Error> {
        formatter.format(&self.tracks, &self.unscheduled)
    }
}
