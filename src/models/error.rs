//! Validation errors for match records.

use thiserror::Error;

/// A record or option value that violates the data model.
///
/// These are caller errors: the engine rejects the input instead of coercing it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown killer: {0:?}")]
    UnknownKiller(String),

    #[error("Unknown stage: {0:?}")]
    UnknownStage(String),

    #[error("Unknown self rating: {0:?}")]
    UnknownRating(String),

    #[error("Unknown opponent level: {0:?}")]
    UnknownOpponentLevel(String),

    #[error("Unknown survivor status: {0:?}")]
    UnknownStatus(String),

    #[error("Opponent grade {0} is outside 0..=50")]
    GradeOutOfRange(u32),

    #[error("Outcome must have exactly 4 slots (self + 3 teammates), found {found}")]
    SlotCount { found: usize },

    #[error("Teammate in slot {position} has a blank label")]
    BlankTeammateLabel { position: usize },
}
