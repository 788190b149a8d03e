//! CLI module for microlog.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;
pub mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Info,
    Debug,
    Statement,
    Details,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Statement => Self::Statement,
            LogLevel::Details => Self::Details,
        }
    }
}

/// microlog - Write and view microlog log files.
#[derive(Parser)]
#[command(
    name = "microlog",
    version,
    about = "Write and view microlog log files"
)]
pub struct Cli {
    /// Config file (defaults to ~/.config/microlog/microlog.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Log directory override
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<String>,
    /// Don't echo lines to stdout
    #[arg(long, global = true)]
    pub no_console: bool,
    /// Echo plain `| `-prefixed lines instead of colors
    #[arg(long, global = true)]
    pub no_color: bool,
    /// Keep one file for the whole run
    #[arg(long, global = true)]
    pub no_rotate: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log a few tagged lines from two call sites (default).
    Demo,
    /// Log one line.
    Log {
        /// Log level
        #[arg(value_enum)]
        level: LogLevel,
        /// Tag the line with a uid
        #[arg(long)]
        uid: Option<String>,
        /// Tag the line with a reference
        #[arg(long)]
        reference: Option<String>,
        /// Message fragments, joined with spaces
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Print raw log lines with console colors.
    Colorize {
        /// Log file to read (reads stdin if omitted or "-")
        file: Option<PathBuf>,
    },
}

pub use commands::{cmd_colorize, cmd_demo, cmd_log};
pub use util::resolve_config;
