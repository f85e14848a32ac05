//! Conversions between ordinal categories and numeric scores.

use crate::models::{OpponentLevel, SelfRating, MIDPOINT_SCORE};

/// Score of a self rating; a missing rating scores the midpoint.
pub fn rating_to_score(rating: Option<SelfRating>) -> u8 {
    rating.map_or(MIDPOINT_SCORE, |r| r.score())
}

/// Category for an average self-rating score.
pub fn score_to_rating(average: f64) -> SelfRating {
    SelfRating::from_average(average)
}

/// Score of an opponent level; a missing level scores the midpoint.
pub fn opponent_level_to_score(level: Option<OpponentLevel>) -> u8 {
    level.map_or(MIDPOINT_SCORE, |l| l.score())
}

/// Category for an average opponent-level score.
pub fn score_to_opponent_level(average: f64) -> OpponentLevel {
    OpponentLevel::from_average(average)
}
