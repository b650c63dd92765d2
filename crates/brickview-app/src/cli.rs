use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Brickview: hover overlay and message bridge for the course-slide editor.
#[derive(Parser, Debug)]
#[command(name = "brickview", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a scenario's input script on a virtual clock.
    Replay {
        /// Scenario file (JSON).
        scenario: PathBuf,

        /// Print `postMessage` snippets instead of JSON lines.
        #[arg(long)]
        script: bool,
    },

    /// Drive a live overlay session from JSON-lines input on stdin.
    Serve {
        /// Scenario file (JSON). Only its document is used.
        scenario: PathBuf,
    },

    /// Print the effective configuration.
    Config {
        /// Print the default config file path instead.
        #[arg(long)]
        path: bool,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
