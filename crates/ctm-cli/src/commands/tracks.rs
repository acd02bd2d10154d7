//! Tracks command: show the configured day layout.

use std::io::Write;

use anyhow::{Context, Result};
use ctm_core::{Conference, Session};

use crate::Config;
use crate::format::clock;

fn write_session<W: Write>(writer: &mut W, session: &Session) -> std::io::Result<()> {
    writeln!(
        writer,
        "  {:<10} {}-{}  {} min",
        session.kind().as_str(),
        clock(session.start()),
        clock(session.end()),
        session.capacity()
    )
}

/// Runs the tracks command.
pub fn run<W: Write>(writer: &mut W, config: &Config) -> Result<()> {
    let conference =
        Conference::new(&config.conference).context("invalid track configuration")?;

    for track in conference.tracks() {
        writeln!(writer, "{}", track.title())?;
        write_session(writer, track.morning())?;
        writeln!(
            writer,
            "  {:<10} {}-{}",
            "lunch",
            clock(track.lunch().start),
            clock(track.lunch().end)
        )?;
        write_session(writer, track.evening())?;
        writeln!(
            writer,
            "  {:<10} {}",
            "networking",
            clock(track.networking())
        )?;
    }

    writeln!(writer, "Total capacity: {} min", conference.capacity())?;

    Ok(())
}
