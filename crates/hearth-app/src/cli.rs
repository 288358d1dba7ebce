use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hearth: live Discord presence card with a clock and theme toggle.
#[derive(Parser, Debug)]
#[command(name = "hearth", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override.
    #[arg(long, global = true, value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Follow the subject's presence until interrupted.
    Presence,

    /// Print the local time and date.
    Clock {
        /// Print once and exit instead of refreshing every second.
        #[arg(long)]
        once: bool,
    },

    /// Show the persisted theme, or toggle it.
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Compute the CSS tilt transform for a card.
    Tilt {
        /// Card bounds as X,Y,W,H.
        #[arg(long)]
        card: String,

        /// Pointer position as X,Y. Omit for a pointer that left the page.
        #[arg(long)]
        pointer: Option<String>,
    },

    /// Print the effective configuration as JSON.
    Config,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ThemeAction {
    /// Switch to the other theme and persist it.
    Toggle,
}

pub fn parse() -> Args {
    Args::parse()
}
