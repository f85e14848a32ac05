//! Core data models for match logging and analysis.

mod error;
mod killer;
mod options;
mod rating;
mod record;
mod stage;
mod stats;

pub use error::*;
pub use killer::*;
pub use options::*;
pub use rating::*;
pub use record::*;
pub use stage::*;
pub use stats::*;

/// Lowercase alphanumeric form of a name, used for lenient enum lookups.
pub(crate) fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
