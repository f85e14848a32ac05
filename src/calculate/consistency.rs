//! Agreement between the player's self rating and the actual outcome.
//!
//! A high rating (score >= 4) predicts an escape and a low one (score <= 2)
//! predicts a death. Mid ratings predict nothing and stay out of the rate.

use serde::{Deserialize, Serialize};

use super::calculate_rate;
use crate::models::MatchRecord;

/// Lowest score read as "expected to escape".
pub const HIGH_RATING_SCORE: u8 = 4;

/// Highest score read as "expected to die".
pub const LOW_RATING_SCORE: u8 = 2;

/// Self-rating consistency counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Consistency {
    /// Records carrying a self rating
    pub rated_games: u32,

    /// Rated records with a high or low rating
    pub decisive_games: u32,

    /// Decisive records whose rating matched the outcome
    pub consistent_games: u32,

    /// consistent / decisive (0.0 to 100.0, one decimal)
    pub consistency_rate: f64,
}

/// Measure how often the self rating agreed with the outcome.
pub fn analyze_consistency(records: &[&MatchRecord]) -> Consistency {
    let mut result = Consistency::default();

    for record in records {
        let Some(rating) = record.self_rating else {
            continue;
        };
        result.rated_games += 1;

        let score = rating.score();
        let escaped = record.self_escaped();
        if score >= HIGH_RATING_SCORE {
            result.decisive_games += 1;
            if escaped {
                result.consistent_games += 1;
            }
        } else if score <= LOW_RATING_SCORE {
            result.decisive_games += 1;
            if !escaped {
                result.consistent_games += 1;
            }
        }
    }

    result.consistency_rate = calculate_rate(result.consistent_games, result.decisive_games);
    result
}
