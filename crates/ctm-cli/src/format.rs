//! Schedule formatters: human-readable running order and JSON.

use std::fmt::Write;

use chrono::NaiveTime;
use ctm_core::{
    DurationUnit, ScheduleFormatter, ScheduledTalk, Session, SessionKind, Talk, Track, Window,
};
use serde::Serialize;

/// Clock format used in the running order, e.g. `09:00AM`.
const RUNNING_ORDER_TIME: &str = "%I:%M%p";

/// Clock format used in JSON and summaries, e.g. `13:00`.
const CLOCK_TIME: &str = "%H:%M";

pub fn clock(time: NaiveTime) -> String {
    time.format(CLOCK_TIME).to_string()
}

/// Length label for a placed talk. Open-ended talks show the gap they filled.
fn slot_label(slot: &ScheduledTalk) -> String {
    match slot.talk.duration().unit() {
        DurationUnit::OpenEnded => format!("{}min", slot.minutes),
        DurationUnit::Minutes | DurationUnit::Lightning => slot.talk.duration().to_string(),
    }
}

// ========== Text ==========

/// Plain running order, one line per talk.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    fn write_session(output: &mut String, session: &Session) -> std::fmt::Result {
        for slot in session.talks() {
            writeln!(
                output,
                "{} {} {}",
                slot.start.format(RUNNING_ORDER_TIME),
                slot.talk.topic(),
                slot_label(slot)
            )?;
        }
        Ok(())
    }
}

impl ScheduleFormatter for TextFormatter {
    type Error = std::fmt::Error;

    fn format(&self, tracks: &[Track], unscheduled: &[Talk]) -> Result<String, Self::Error> {
        let mut output = String::new();

        for (index, track) in tracks.iter().enumerate() {
            if index > 0 {
                writeln!(output)?;
            }
            writeln!(output, "{}:", track.title())?;
            Self::write_session(&mut output, track.morning())?;
            writeln!(
                output,
                "{} Lunch",
                track.lunch().start.format(RUNNING_ORDER_TIME)
            )?;
            Self::write_session(&mut output, track.evening())?;
            writeln!(
                output,
                "{} Networking Event",
                track.networking().format(RUNNING_ORDER_TIME)
            )?;
        }

        if !unscheduled.is_empty() {
            writeln!(output)?;
            writeln!(output, "UNSCHEDULED")?;
            writeln!(output, "───────────")?;
            for talk in unscheduled {
                writeln!(output, "{} {}", talk.topic(), talk.duration())?;
            }
        }

        Ok(output)
    }
}

// ========== JSON ==========

#[derive(Debug, Serialize)]
pub struct JsonSchedule {
    pub tracks: Vec<JsonTrack>,
    pub unscheduled: Vec<JsonTalk>,
}

#[derive(Debug, Serialize)]
pub struct JsonTrack {
    pub title: String,
    pub sessions: Vec<JsonSession>,
    pub lunch: JsonWindow,
    pub networking: String,
}

#[derive(Debug, Serialize)]
pub struct JsonSession {
    pub kind: SessionKind,
    pub start: String,
    pub end: String,
    pub capacity_minutes: u32,
    pub remaining_minutes: u32,
    pub talks: Vec<JsonSlot>,
}

#[derive(Debug, Serialize)]
pub struct JsonSlot {
    pub topic: String,
    pub start: String,
    pub minutes: u32,
}

#[derive(Debug, Serialize)]
pub struct JsonWindow {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Serialize)]
pub struct JsonTalk {
    pub topic: String,
    pub length: String,
}

impl From<&Session> for JsonSession {
    fn from(session: &Session) -> Self {
        Self {
            kind: session.kind(),
            start: clock(session.start()),
            end: clock(session.end()),
            capacity_minutes: session.capacity(),
            remaining_minutes: session.remaining(),
            talks: session
                .talks()
                .iter()
                .map(|slot| JsonSlot {
                    topic: slot.talk.topic().to_string(),
                    start: clock(slot.start),
                    minutes: slot.minutes,
                })
                .collect(),
        }
    }
}

impl From<Window> for JsonWindow {
    fn from(window: Window) -> Self {
        Self {
            start: clock(window.start),
            end: clock(window.end),
        }
    }
}

/// Pretty-printed JSON document of the whole schedule.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl ScheduleFormatter for JsonFormatter {
    type Error = serde_json::Error;

    fn format(&self, tracks: &[Track], unscheduled: &[Talk]) -> Result<String, Self::Error> {
        let schedule = JsonSchedule {
            tracks: tracks
                .iter()
                .map(|track| JsonTrack {
                    title: track.title().to_string(),
                    sessions: track.sessions().into_iter().map(JsonSession::from).collect(),
                    lunch: track.lunch().into(),
                    networking: clock(track.networking()),
                })
                .collect(),
            unscheduled: unscheduled
                .iter()
                .map(|talk| JsonTalk {
                    topic: talk.topic().to_string(),
                    length: talk.duration().to_string(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&schedule)
    }
}
