use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use limelight::{ColorChoice, LogLevel};

#[derive(Debug, Parser)]
#[command(name = "limelight-demo", version, about = "Tour of the Limelight terminal toolkit")]
pub struct Cli {
    /// Config file; overrides LIMELIGHT_CONFIG
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// When to emit color sequences (always, never, auto)
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a leveled log line
    Notice {
        #[arg(short, long, value_enum, default_value_t = Level::Info)]
        level: Level,
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Animate a progress bar and a spinner
    Progress {
        #[arg(long, default_value_t = 20)]
        steps: u64,
        #[arg(long, default_value_t = 50)]
        delay_ms: u64,
        #[arg(long, default_value_t = 30)]
        width: usize,
    },
    /// Run an interactive menu application
    Menu,
    /// List the registered color tags
    Palette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => LogLevel::Debug,
            Level::Info => LogLevel::Info,
            Level::Warn => LogLevel::Warn,
            Level::Error => LogLevel::Error,
        }
    }
}
