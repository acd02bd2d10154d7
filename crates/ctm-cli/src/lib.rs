//! Conference track manager CLI library.
//!
//! This crate provides the CLI interface for scheduling conference talks.

mod cli;
pub mod commands;
mod config;
pub mod format;

pub use cli::{Cli, Commands};
pub use config::Config;
