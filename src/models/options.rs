//! Options controlling which records an analysis covers.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Killer;

/// Ranked entries per dimension when nothing else is configured.
pub const DEFAULT_TOP_N: usize = 3;

/// Buckets with fewer games than this are left out of rankings.
pub const DEFAULT_MIN_BUCKET_GAMES: u32 = 2;

/// Date window of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Same calendar day as the reference date
    Today,
    /// Within seven days of the reference date
    Week,
    #[default]
    All,
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Today => write!(f, "today"),
            Period::Week => write!(f, "week"),
            Period::All => write!(f, "all"),
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(Period::Today),
            "week" | "last-7-days" | "7d" => Ok(Period::Week),
            "all" => Ok(Period::All),
            other => Err(format!(
                "Unknown period: {} (expected today, week or all)",
                other
            )),
        }
    }
}

/// Caller-supplied analysis options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Date window
    #[serde(default)]
    pub period: Period,

    /// Only count matches against this killer
    #[serde(default)]
    pub killer_filter: Option<Killer>,

    /// Date treated as "today"; the local calendar date when unset
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,

    /// Entries per best/worst ranking
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Minimum games for a bucket to be ranked
    #[serde(default = "default_min_bucket_games")]
    pub min_bucket_games: u32,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_min_bucket_games() -> u32 {
    DEFAULT_MIN_BUCKET_GAMES
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            period: Period::All,
            killer_filter: None,
            reference_date: None,
            top_n: default_top_n(),
            min_bucket_games: default_min_bucket_games(),
        }
    }
}

impl AnalysisOptions {
    /// Builder method to set the period.
    pub fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Builder method to filter on one killer.
    pub fn with_killer(mut self, killer: Killer) -> Self {
        self.killer_filter = Some(killer);
        self
    }

    /// Builder method to pin "today".
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Reference date, falling back to the local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
