//! Derived statistics models.
//!
//! Everything here is rebuilt from the record list on every analysis call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Killer, MatchRecord, OpponentLevel, Stage, MIDPOINT_SCORE, TOTAL_SLOTS};
use crate::calculate::{calculate_average, calculate_rate};

/// Player skill classification based on overall personal escape rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Expert,
    UpperIntermediate,
    Intermediate,
    LowerIntermediate,
    Beginner,
}

impl SkillLevel {
    /// Calculate skill level from an escape rate in percent.
    pub fn from_escape_rate(escape_rate: f64) -> Self {
        if escape_rate >= 70.0 {
            SkillLevel::Expert
        } else if escape_rate >= 50.0 {
            SkillLevel::UpperIntermediate
        } else if escape_rate >= 30.0 {
            SkillLevel::Intermediate
        } else if escape_rate >= 15.0 {
            SkillLevel::LowerIntermediate
        } else {
            SkillLevel::Beginner
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillLevel::Expert => write!(f, "expert"),
            SkillLevel::UpperIntermediate => write!(f, "upper-intermediate"),
            SkillLevel::Intermediate => write!(f, "intermediate"),
            SkillLevel::LowerIntermediate => write!(f, "lower-intermediate"),
            SkillLevel::Beginner => write!(f, "beginner"),
        }
    }
}

/// Aggregated counters for one value of a grouping dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateBucket<K> {
    /// Grouping key (killer, stage, opponent level or date)
    pub key: K,

    /// Games in this bucket
    pub games: u32,

    /// Games the player escaped
    pub self_escapes: u32,

    /// Escaped slots summed over all four participants
    pub team_escapes: u32,

    /// Sum of self-rating scores, unrated games counted at the midpoint
    pub rating_sum: u32,

    /// Games carrying an explicit self rating
    pub rated_games: u32,

    /// Personal escape rate (0.0 to 100.0, one decimal)
    pub escape_rate: f64,

    /// Team escape rate (0.0 to 100.0, one decimal)
    pub team_escape_rate: f64,

    /// Average self-rating score, `None` when no game in the bucket was rated
    pub average_rating: Option<f64>,
}

impl<K> AggregateBucket<K> {
    /// Create an empty bucket.
    pub fn new(key: K) -> Self {
        Self {
            key,
            games: 0,
            self_escapes: 0,
            team_escapes: 0,
            rating_sum: 0,
            rated_games: 0,
            escape_rate: 0.0,
            team_escape_rate: 0.0,
            average_rating: None,
        }
    }

    /// Count one match into the bucket.
    pub fn add(&mut self, record: &MatchRecord) {
        self.games += 1;
        if record.self_escaped() {
            self.self_escapes += 1;
        }
        self.team_escapes += record.outcome.escaped_slots();

        match record.self_rating {
            Some(rating) => {
                self.rating_sum += u32::from(rating.score());
                self.rated_games += 1;
            }
            None => self.rating_sum += u32::from(MIDPOINT_SCORE),
        }

        self.escape_rate = calculate_rate(self.self_escapes, self.games);
        self.team_escape_rate = calculate_rate(self.team_escapes, self.games * TOTAL_SLOTS as u32);
        self.average_rating = if self.rated_games > 0 {
            Some(calculate_average(self.rating_sum, self.games))
        } else {
            None
        };
    }

    /// Unrounded personal escape rate, for threshold comparisons.
    pub fn raw_escape_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.self_escapes) * 100.0 / f64::from(self.games)
        }
    }

    /// Unrounded average rating score, `None` when no game was rated.
    pub fn average_score(&self) -> Option<f64> {
        (self.rated_games > 0).then(|| f64::from(self.rating_sum) / f64::from(self.games))
    }

    /// Whether the bucket has enough games to be ranked.
    pub fn qualifies(&self, min_games: u32) -> bool {
        self.games >= min_games
    }
}

/// Escape counters for one teammate label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanionStat {
    pub label: String,
    pub games: u32,
    pub escapes: u32,
    pub escape_rate: f64,
}

impl CompanionStat {
    pub fn new(label: String) -> Self {
        Self {
            label,
            games: 0,
            escapes: 0,
            escape_rate: 0.0,
        }
    }

    pub fn add(&mut self, escaped: bool) {
        self.games += 1;
        if escaped {
            self.escapes += 1;
        }
        self.escape_rate = calculate_rate(self.escapes, self.games);
    }
}

/// Numeric result of aggregating a record list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Games in scope after filtering
    pub total_games: u32,

    /// Games the player escaped
    pub total_escapes: u32,

    /// Escaped slots across all participants
    pub total_team_escapes: u32,

    /// Personal escape rate (0.0 to 100.0)
    pub escape_rate: f64,

    /// Team escape rate (0.0 to 100.0)
    pub team_escape_rate: f64,

    /// Sum of self-rating scores, unrated games counted at the midpoint
    pub rating_sum: u32,

    /// Games carrying an explicit self rating
    pub rated_games: u32,

    /// Average self-rating score over all games (0.0 when there are none)
    pub average_rating: f64,

    /// Per-killer buckets in killer declaration order
    pub killer_buckets: Vec<AggregateBucket<Killer>>,

    /// Per-stage buckets in stage declaration order
    pub stage_buckets: Vec<AggregateBucket<Stage>>,

    /// Per-opponent-level buckets, novice first
    pub opponent_level_buckets: Vec<AggregateBucket<OpponentLevel>>,

    /// Per-date buckets, oldest first
    pub date_buckets: Vec<AggregateBucket<NaiveDate>>,

    /// Per-teammate-label counters, sorted by label
    pub companions: Vec<CompanionStat>,
}

impl Stats {
    /// Unrounded average rating score over all games (0.0 when there are none).
    pub fn average_score(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            f64::from(self.rating_sum) / f64::from(self.total_games)
        }
    }

    /// Skill level implied by the overall personal escape rate.
    pub fn skill_level(&self) -> SkillLevel {
        SkillLevel::from_escape_rate(self.escape_rate)
    }

    /// Get the bucket for a killer.
    pub fn killer(&self, killer: Killer) -> Option<&AggregateBucket<Killer>> {
        self.killer_buckets.iter().find(|b| b.key == killer)
    }

    /// Get the bucket for a stage.
    pub fn stage(&self, stage: Stage) -> Option<&AggregateBucket<Stage>> {
        self.stage_buckets.iter().find(|b| b.key == stage)
    }

    /// Get the counters for a teammate label.
    pub fn companion(&self, label: &str) -> Option<&CompanionStat> {
        self.companions.iter().find(|c| c.label == label)
    }
}
