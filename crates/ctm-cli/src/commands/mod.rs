//! CLI subcommand implementations.

pub mod check;
pub mod schedule;
pub mod tracks;
