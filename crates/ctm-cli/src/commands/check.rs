//! Check command: admission only, no scheduling.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use super::schedule::load_conference;
use crate::Config;

/// Runs the check command.
pub fn run<W: Write>(writer: &mut W, config: &Config, talks: &Path) -> Result<()> {
    let conference = load_conference(config, talks)?;

    let capacity = conference.capacity();
    let remaining = conference.remaining_time();
    let open_ended = conference
        .selected_talks()
        .iter()
        .filter(|talk| talk.duration().is_open_ended())
        .count();

    writeln!(writer, "Talks:      {}", conference.total_talks())?;
    if open_ended > 0 {
        writeln!(writer, "Open-ended: {open_ended}")?;
    }
    writeln!(writer, "Requested:  {} min", capacity - remaining)?;
    writeln!(writer, "Capacity:   {capacity} min")?;
    writeln!(writer, "Remaining:  {remaining} min")?;

    Ok(())
}
