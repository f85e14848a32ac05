//! Statistics calculation engine.
//!
//! Computes derived metrics from a recency-ordered list of match records:
//! - Escape rates grouped by killer, stage, opponent level, date and teammate
//! - Recent-versus-older trend deltas
//! - Self-rating consistency
//! - Memo keyword counts and the short recent-form rule table
//!
//! Every function here is pure: it reads the records and allocates fresh output.

pub mod aggregate;
pub mod consistency;
pub mod memo;
pub mod recent;
pub mod scoring;
pub mod trend;

pub use aggregate::{aggregate, filter_records, rank_bottom, rank_top, Rankings};
pub use consistency::{analyze_consistency, Consistency};
pub use memo::{scan_memos, MemoKeyword, MemoLength, MemoScan};
pub use recent::{classify_recent, compare_form, FormComparison, FormShift, RecentForm};
pub use scoring::*;
pub use trend::{analyze_trend, TrendDelta, TrendDirection, TrendSummary};

/// Round to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage of `part` over `whole`, rounded to one decimal.
/// Zero when `whole` is zero.
pub fn calculate_rate(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round_to_tenth(part as f64 / whole as f64 * 100.0)
    }
}

/// Mean of `sum` over `count`, rounded to one decimal. Zero when `count` is zero.
pub fn calculate_average(sum: u32, count: u32) -> f64 {
    if count == 0 {
        0.0
    } else {
        round_to_tenth(sum as f64 / count as f64)
    }
}
