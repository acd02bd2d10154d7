//! Talk sources: where registration batches come from.
//!
//! The text format has one talk per line, the length as a trailing token:
//!
//! ```text
//! Writing Fast Tests Against Enterprise Rails 60min
//! Rails for Python Developers lightning
//! Unconference open-ended
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::duration::{Duration, DurationUnit};
use crate::error::ValidationError;
use crate::talk::Talk;

/// Pre-compiled regex for a single talk line.
static TALK_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<topic>.+?)\s+(?:(?P<value>-?\d+)\s*(?P<unit>min|mins|minutes)|(?P<keyword>lightning|open-ended))$")
        .expect("talk line regex is valid")
});

/// Errors raised while loading talks.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The talk list could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line does not match `<topic> <length>`.
    #[error("line {line}: cannot parse talk: {content:?}")]
    Parse { line: usize, content: String },

    /// A line parsed but describes an invalid talk.
    #[error("line {line}: invalid talk")]
    Invalid {
        line: usize,
        #[source]
        source: ValidationError,
    },
}

/// Supplies a batch of talks for registration.
pub trait TalkSource {
    type Error: std::error::Error + 'static;

    fn load(&self) -> Result<Vec<Talk>, Self::Error>;
}

impl TalkSource for Vec<Talk> {
    type Error = Infallible;

    fn load(&self) -> Result<Vec<Talk>, Self::Error> {
        Ok(self.clone())
    }
}

/// Talks held as text in memory.
#[derive(Debug, Clone)]
pub struct TextTalkSource {
    text: String,
}

impl TextTalkSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TalkSource for TextTalkSource {
    type Error = SourceError;

    fn load(&self) -> Result<Vec<Talk>, Self::Error> {
        parse_talks(&self.text)
    }
}

/// Talks read from a file on each load.
#[derive(Debug, Clone)]
pub struct FileTalkSource {
    path: PathBuf,
}

impl FileTalkSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TalkSource for FileTalkSource {
    type Error = SourceError;

    fn load(&self) -> Result<Vec<Talk>, Self::Error> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let talks = parse_talks(&text)?;
        tracing::debug!(path = %self.path.display(), count = talks.len(), "loaded talks");
        Ok(talks)
    }
}

/// Parses a talk list. Line numbers in errors are 1-based.
pub fn parse_talks(text: &str) -> Result<Vec<Talk>, SourceError> {
    let mut talks = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        talks.push(parse_line(line, content)?);
    }
    Ok(talks)
}

fn parse_line(line: usize, content: &str) -> Result<Talk, SourceError> {
    let parse_error = || SourceError::Parse {
        line,
        content: content.to_string(),
    };
    let caps = TALK_LINE_RE.captures(content).ok_or_else(parse_error)?;

    let duration = if let Some(value) = caps.name("value") {
        // Only overflow can fail here.
        let value = value.as_str();
        let value: i64 = value.parse().unwrap_or(if value.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        });
        Duration::new(value, DurationUnit::Minutes)
            .map_err(|source| SourceError::Invalid { line, source })?
    } else {
        match caps["keyword"].parse().map_err(|_| parse_error())? {
            DurationUnit::OpenEnded => Duration::open_ended(),
            _ => Duration::lightning(),
        }
    };

    Talk::new(&caps["topic"], duration).map_err(|source| SourceError::Invalid { line, source })
}
