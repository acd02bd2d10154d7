//! Schedule command: register a talk list and print the running order.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ctm_core::{Conference, FileTalkSource};

use crate::Config;
use crate::format::{JsonFormatter, TextFormatter};

/// Builds the conference from `config` and registers the talks in `talks`.
pub fn load_conference(config: &Config, talks: &Path) -> Result<Conference> {
    let mut conference =
        Conference::new(&config.conference).context("invalid track configuration")?;
    let source = FileTalkSource::new(talks);
    conference
        .register_from(&source)
        .with_context(|| format!("failed to register talks from {}", talks.display()))?;
    Ok(conference)
}

/// Runs the schedule command.
pub fn run<W: Write>(writer: &mut W, config: &Config, talks: &Path, json: bool) -> Result<()> {
    let mut conference = load_conference(config, talks)?;
    let outcome = conference.schedule();

    let output = if json {
        conference
            .render(&JsonFormatter)
            .context("failed to render schedule as JSON")?
    } else {
        conference
            .render(&TextFormatter)
            .context("failed to render schedule")?
    };

    if json {
        writeln!(writer, "{output}")?;
    } else {
        write!(writer, "{output}")?;
    }

    if !outcome.is_complete() {
        tracing::warn!(
            count = outcome.unscheduled.len(),
            "talks left unscheduled; add tracks or trim the list"
        );
    }

    Ok(())
}
