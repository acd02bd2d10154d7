//! Talks offered to the conference.

use serde::Serialize;

use crate::duration::Duration;
use crate::error::ValidationError;

/// A topic and how long it runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Talk {
    topic: String,
    duration: Duration,
}

impl Talk {
    /// Creates a talk; the topic is trimmed and must not be blank.
    pub fn new(topic: impl Into<String>, duration: Duration) -> Result<Self, ValidationError> {
        let topic = topic.into();
        let trimmed = topic.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "topic" });
        }
        let topic = if trimmed.len() == topic.len() {
            topic
        } else {
            trimmed.to_string()
        };
        Ok(Self { topic, duration })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Case-insensitive topic comparison.
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topic.to_lowercase() == topic.trim().to_lowercase()
    }
}
