//! Recent-versus-older trend detection.

use serde::{Deserialize, Serialize};

use super::{calculate_rate, round_to_tenth};
use crate::models::{MatchRecord, TOTAL_SLOTS};

/// Fewest records that produce a trend.
pub const MIN_TREND_RECORDS: usize = 6;

/// Size of each window in the short-term comparison.
pub const SHORT_WINDOW: usize = 3;

/// Deltas within this many percentage points count as no change.
pub const NO_CHANGE_THRESHOLD: f64 = 3.0;

/// Direction and size of a rate change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "direction", content = "points")]
pub enum TrendDirection {
    NoChange,
    Improvement(u32),
    Decline(u32),
}

impl TrendDirection {
    /// Classify a signed delta in percentage points.
    pub fn classify(delta: f64) -> Self {
        if delta.abs() <= NO_CHANGE_THRESHOLD {
            return TrendDirection::NoChange;
        }
        let points = delta.abs().round() as u32;
        if delta > 0.0 {
            TrendDirection::Improvement(points)
        } else {
            TrendDirection::Decline(points)
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendDirection::NoChange => write!(f, "no change"),
            TrendDirection::Improvement(points) => write!(f, "+{}% improvement", points),
            TrendDirection::Decline(points) => write!(f, "-{}% decline", points),
        }
    }
}

/// Rates over one window of records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowRates {
    pub games: u32,
    pub escape_rate: f64,
    pub team_escape_rate: f64,
}

impl WindowRates {
    pub fn from_records(records: &[&MatchRecord]) -> Self {
        let games = records.len() as u32;
        let escapes = records.iter().filter(|r| r.self_escaped()).count() as u32;
        let team_escapes: u32 = records.iter().map(|r| r.outcome.escaped_slots()).sum();

        Self {
            games,
            escape_rate: calculate_rate(escapes, games),
            team_escape_rate: calculate_rate(team_escapes, games * TOTAL_SLOTS as u32),
        }
    }
}

/// Comparison of two adjacent windows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendDelta {
    pub recent: WindowRates,
    pub older: WindowRates,

    /// Personal escape rate, recent minus older
    pub escape_delta: f64,

    /// Team escape rate, recent minus older
    pub team_escape_delta: f64,
}

impl TrendDelta {
    pub fn between(recent: &[&MatchRecord], older: &[&MatchRecord]) -> Self {
        let recent = WindowRates::from_records(recent);
        let older = WindowRates::from_records(older);

        Self {
            recent,
            older,
            escape_delta: round_to_tenth(recent.escape_rate - older.escape_rate),
            team_escape_delta: round_to_tenth(recent.team_escape_rate - older.team_escape_rate),
        }
    }

    pub fn escape_direction(&self) -> TrendDirection {
        TrendDirection::classify(self.escape_delta)
    }

    pub fn team_escape_direction(&self) -> TrendDirection {
        TrendDirection::classify(self.team_escape_delta)
    }
}

/// Both trend comparisons over a recency-ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// First half against second half (odd lengths drop the oldest record)
    pub halves: TrendDelta,

    /// First three records against the next three
    pub short_term: TrendDelta,
}

/// Compare recent and older matches. `None` with fewer than six records.
pub fn analyze_trend(records: &[&MatchRecord]) -> Option<TrendSummary> {
    if records.len() < MIN_TREND_RECORDS {
        return None;
    }

    let half = records.len() / 2;
    let halves = TrendDelta::between(&records[..half], &records[half..half * 2]);
    let short_term = TrendDelta::between(
        &records[..SHORT_WINDOW],
        &records[SHORT_WINDOW..SHORT_WINDOW * 2],
    );

    Some(TrendSummary { halves, short_term })
}
