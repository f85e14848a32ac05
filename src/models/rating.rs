//! Ordinal 5-point scales: the player's self rating and the opponent's level.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{normalize_name, ValidationError};

/// Score used in place of a missing rating or level.
pub const MIDPOINT_SCORE: u8 = 3;

/// Highest numeric killer grade accepted by [`OpponentLevel::from_grade`].
pub const MAX_OPPONENT_GRADE: u32 = 50;

/// Bucket an average score back onto the 5-point scale.
///
/// Thresholds are half-open: `>=4.5 -> 5`, `>=3.5 -> 4`, `>=2.5 -> 3`, `>=1.5 -> 2`, else 1.
fn bucket_average(average: f64) -> u8 {
    if average >= 4.5 {
        5
    } else if average >= 3.5 {
        4
    } else if average >= 2.5 {
        3
    } else if average >= 1.5 {
        2
    } else {
        1
    }
}

/// How the player rated their own performance in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfRating {
    Worst,
    Poor,
    Mid,
    Good,
    Best,
}

impl SelfRating {
    pub const ALL: [SelfRating; 5] = [
        SelfRating::Worst,
        SelfRating::Poor,
        SelfRating::Mid,
        SelfRating::Good,
        SelfRating::Best,
    ];

    /// Numeric score, 1 (worst) to 5 (best).
    pub fn score(&self) -> u8 {
        match self {
            SelfRating::Worst => 1,
            SelfRating::Poor => 2,
            SelfRating::Mid => 3,
            SelfRating::Good => 4,
            SelfRating::Best => 5,
        }
    }

    /// Category whose bucket contains the given average score.
    pub fn from_average(average: f64) -> Self {
        match bucket_average(average) {
            5 => SelfRating::Best,
            4 => SelfRating::Good,
            3 => SelfRating::Mid,
            2 => SelfRating::Poor,
            _ => SelfRating::Worst,
        }
    }

    /// Letter grade used by the match form (S best, D worst).
    pub fn letter(&self) -> char {
        match self {
            SelfRating::Worst => 'D',
            SelfRating::Poor => 'C',
            SelfRating::Mid => 'B',
            SelfRating::Good => 'A',
            SelfRating::Best => 'S',
        }
    }
}

impl std::fmt::Display for SelfRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelfRating::Worst => write!(f, "worst"),
            SelfRating::Poor => write!(f, "poor"),
            SelfRating::Mid => write!(f, "mid"),
            SelfRating::Good => write!(f, "good"),
            SelfRating::Best => write!(f, "best"),
        }
    }
}

impl FromStr for SelfRating {
    type Err = ValidationError;

    /// Accepts the category name or its letter grade.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        SelfRating::ALL
            .iter()
            .copied()
            .find(|r| r.to_string() == wanted || r.letter().to_ascii_lowercase().to_string() == wanted)
            .ok_or_else(|| ValidationError::UnknownRating(s.to_string()))
    }
}

/// Skill level of the opponent, as judged by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentLevel {
    Novice,
    Beginner,
    Intermediate,
    Advanced,
    Pro,
}

impl OpponentLevel {
    pub const ALL: [OpponentLevel; 5] = [
        OpponentLevel::Novice,
        OpponentLevel::Beginner,
        OpponentLevel::Intermediate,
        OpponentLevel::Advanced,
        OpponentLevel::Pro,
    ];

    /// Numeric score, 1 (novice) to 5 (pro).
    pub fn score(&self) -> u8 {
        match self {
            OpponentLevel::Novice => 1,
            OpponentLevel::Beginner => 2,
            OpponentLevel::Intermediate => 3,
            OpponentLevel::Advanced => 4,
            OpponentLevel::Pro => 5,
        }
    }

    pub fn from_average(average: f64) -> Self {
        match bucket_average(average) {
            5 => OpponentLevel::Pro,
            4 => OpponentLevel::Advanced,
            3 => OpponentLevel::Intermediate,
            2 => OpponentLevel::Beginner,
            _ => OpponentLevel::Novice,
        }
    }

    /// Convert a numeric killer grade (0..=50) into a level, ten grades per level.
    pub fn from_grade(grade: u32) -> Result<Self, ValidationError> {
        match grade {
            0..=9 => Ok(OpponentLevel::Novice),
            10..=19 => Ok(OpponentLevel::Beginner),
            20..=29 => Ok(OpponentLevel::Intermediate),
            30..=39 => Ok(OpponentLevel::Advanced),
            40..=MAX_OPPONENT_GRADE => Ok(OpponentLevel::Pro),
            _ => Err(ValidationError::GradeOutOfRange(grade)),
        }
    }
}

impl std::fmt::Display for OpponentLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpponentLevel::Novice => write!(f, "novice"),
            OpponentLevel::Beginner => write!(f, "beginner"),
            OpponentLevel::Intermediate => write!(f, "intermediate"),
            OpponentLevel::Advanced => write!(f, "advanced"),
            OpponentLevel::Pro => write!(f, "pro"),
        }
    }
}

impl FromStr for OpponentLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        OpponentLevel::ALL
            .iter()
            .copied()
            .find(|l| l.to_string() == wanted)
            .ok_or_else(|| ValidationError::UnknownOpponentLevel(s.to_string()))
    }
}
