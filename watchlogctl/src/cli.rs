use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use watchlog_core::query::{FilterRequest, TagMode};
use watchlog_model::Weekday;

use crate::condition::split_optional;

#[derive(Debug, Parser)]
#[command(
    name = "watchlog",
    version,
    about = "Filter an anime/manga catalog and plan viewing schedules"
)]
pub struct Cli {
    /// Configuration file (TOML or JSON); takes precedence over WATCHLOG_CONFIG_PATH
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Select catalog titles matching every given criterion
    Filter(FilterArgs),
    /// Spread a show's episodes over the coming weekdays
    Schedule(ScheduleArgs),
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Catalog snapshot: a JSON array of items
    #[arg(long, value_name = "FILE")]
    pub catalog: PathBuf,
    /// Case-insensitive title substring
    #[arg(long)]
    pub title: Option<String>,
    /// Type category, e.g. anime or manga
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,
    /// Rating condition such as ">= 8.5"; a bare number means ">="
    #[arg(long, value_name = "CONDITION", allow_hyphen_values = true)]
    pub rating: Option<String>,
    /// Episode count condition such as "<= 50"; a bare number means "="
    #[arg(long, value_name = "CONDITION", allow_hyphen_values = true)]
    pub episodes: Option<String>,
    /// Release year condition such as ">= 2010"; a bare number means "="
    #[arg(long, value_name = "CONDITION", allow_hyphen_values = true)]
    pub year: Option<String>,
    /// Required tag; repeat for several
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
    #[arg(long, value_enum, default_value_t = TagModeArg::All)]
    pub tag_mode: TagModeArg,
    /// Keep only the first N matches (default from config)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub limit: Option<i64>,
    /// Append average rating and episode statistics
    #[arg(long)]
    pub stats: bool,
    #[arg(long)]
    pub json: bool,
}

impl FilterArgs {
    /// Raw request; operator tokens are validated on conversion to criteria.
    pub fn to_request(&self, default_limit: Option<i64>) -> anyhow::Result<FilterRequest> {
        let (rating_operator, rating_value) = split_optional(self.rating.as_deref())?;
        let (episodes_operator, episodes_value) = split_optional(self.episodes.as_deref())?;
        let (year_operator, year_value) = split_optional(self.year.as_deref())?;

        Ok(FilterRequest {
            title: self.title.clone(),
            kind: self.kind.clone(),
            rating_operator,
            rating_value,
            episodes_operator,
            episodes_value,
            year_operator,
            year_value,
            tags: self.tags.clone(),
            tag_mode: self.tag_mode.into(),
            limit: self.limit.or(default_limit),
        })
    }
}

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    /// Total number of episodes to plan
    #[arg(long)]
    pub episodes: u32,
    /// Episodes per viewing day (default from config)
    #[arg(long, value_name = "N")]
    pub per_day: Option<u32>,
    /// First viewing day, e.g. monday or fri (default: today)
    #[arg(long, value_name = "DAY")]
    pub start: Option<Weekday>,
    /// Minutes per episode (default from config)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub minutes: Option<u32>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TagModeArg {
    All,
    Any,
}

impl From<TagModeArg> for TagMode {
    fn from(val: TagModeArg) -> Self {
        match val {
            TagModeArg::All => TagMode::All,
            TagModeArg::Any => TagMode::Any,
        }
    }
}
