use chatpulse_core::Locale;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chatpulse")]
#[command(version)]
#[command(about = "Daily digests for group chat logs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Input day file plus settings that override the config file
#[derive(Args, Debug, Clone)]
pub struct DayArgs {
    /// Day file: message array, chat-log response, or {date, talker, messages}
    pub file: PathBuf,

    /// Output language (zh, en)
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Offset from UTC for hour-of-day math (defaults to the local offset)
    #[arg(long, allow_negative_numbers = true)]
    pub utc_offset_minutes: Option<i32>,

    /// Config file (defaults to ./report.config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a day file as JSON
    Summarize {
        #[command(flatten)]
        day: DayArgs,

        /// Write JSON here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Append a run record to this JSONL file
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Print a human-readable digest of a day file
    Report {
        #[command(flatten)]
        day: DayArgs,
    },

    /// View past summarize runs
    History {
        /// Run history JSONL file
        path: PathBuf,

        /// Show aggregate statistics instead of individual runs
        #[arg(long)]
        stats: bool,

        /// Number of recent runs to list
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Print version information
    Version,
}
