pub mod history;
pub mod report;
pub mod summarize;
pub mod version;

use crate::cli::DayArgs;
use anyhow::Context;
use chatpulse_core::{Config, SummaryConfig};
use chatpulse_store::{DayFile, read_day};
use chatpulse_summarize::{Summarizer, Summary};
use chrono::{Local, Offset};

/// A day file and its summary, plus the config used to produce it
pub struct SummarizedDay {
    pub config: Config,
    pub day: DayFile,
    pub summary: Summary,
}

impl SummarizedDay {
    /// Config label for the talker, else the raw talker id
    pub fn talker_label(&self) -> &str {
        self.config
            .talker_label(&self.day.talker)
            .unwrap_or(self.day.talker.as_str())
    }
}

/// Apply command-line overrides; an unset offset becomes the local one
fn effective_summary_config(base: &SummaryConfig, args: &DayArgs) -> SummaryConfig {
    let mut cfg = base.clone();
    if let Some(locale) = args.locale {
        cfg.locale = locale;
    }
    if args.utc_offset_minutes.is_some() {
        cfg.utc_offset_minutes = args.utc_offset_minutes;
    }
    if cfg.utc_offset_minutes.is_none() {
        cfg.utc_offset_minutes = Some(Local::now().offset().fix().local_minus_utc() / 60);
    }
    cfg
}

pub fn summarize_day(args: &DayArgs) -> anyhow::Result<SummarizedDay> {
    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;

    let day = read_day(&args.file)
        .with_context(|| format!("reading day file {}", args.file.display()))?;

    let summarizer = Summarizer::new(effective_summary_config(&config.summary, args));
    let summary = summarizer.summarize(&day.messages);

    Ok(SummarizedDay {
        config,
        day,
        summary,
    })
}
