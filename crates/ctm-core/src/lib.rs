//! Core domain logic for conference track management.
//!
//! This crate contains the fundamental types and logic for:
//! - Talks and their lengths (minutes, lightning, open-ended)
//! - Sessions and tracks built from a static configuration
//! - Scheduling: packing the talk pool into sessions with start times
//! - Conference admission control against the total available time

pub mod config;
mod conference;
mod duration;
mod error;
mod format;
mod scheduler;
mod session;
pub mod source;
mod talk;
mod track;

pub use conference::Conference;
pub use config::{ConferenceConfig, TrackConfig, Window};
pub use duration::{Duration, DurationUnit, UnknownUnit};
pub use error::{CapacityExceeded, DoesNotFit, RegisterError, ValidationError};
pub use format::ScheduleFormatter;
pub use scheduler::{BestFitDecreasing, ScheduleOutcome, Scheduler};
pub use session::{Placement, ScheduledTalk, Session, SessionKind};
pub use source::{FileTalkSource, SourceError, TalkSource, TextTalkSource, parse_talks};
pub use talk::Talk;
pub use track::Track;
