//! Filtering and grouping of match records into buckets.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::{calculate_average, calculate_rate, rating_to_score};
use crate::models::{
    AggregateBucket, AnalysisOptions, CompanionStat, MatchRecord, Period, Stats, TOTAL_SLOTS,
};

/// Days back from the reference date still covered by [`Period::Week`].
pub const WEEK_DAYS: i64 = 7;

/// Select the records covered by the options, preserving recency order.
pub fn filter_records<'a>(
    records: &'a [MatchRecord],
    options: &AnalysisOptions,
) -> Vec<&'a MatchRecord> {
    if records.windows(2).any(|w| w[0].date < w[1].date) {
        warn!("Match records are not in descending date order; treating list order as recency");
    }

    let today = options.today();
    let filtered: Vec<&MatchRecord> = records
        .iter()
        .filter(|r| match options.period {
            Period::Today => r.date == today,
            Period::Week => (today - r.date).num_days() <= WEEK_DAYS,
            Period::All => true,
        })
        .filter(|r| options.killer_filter.map_or(true, |k| r.opponent == k))
        .collect();

    debug!(
        "Filtered {} of {} records (period: {}, killer: {:?})",
        filtered.len(),
        records.len(),
        options.period,
        options.killer_filter
    );

    filtered
}

/// Group records by a key, yielding buckets in key order.
fn group_by<K, F>(records: &[&MatchRecord], key: F) -> Vec<AggregateBucket<K>>
where
    K: Ord + Copy,
    F: Fn(&MatchRecord) -> Option<K>,
{
    let mut buckets: BTreeMap<K, AggregateBucket<K>> = BTreeMap::new();
    for record in records {
        if let Some(k) = key(record) {
            buckets
                .entry(k)
                .or_insert_with(|| AggregateBucket::new(k))
                .add(record);
        }
    }
    buckets.into_values().collect()
}

fn companions(records: &[&MatchRecord]) -> Vec<CompanionStat> {
    let mut stats: BTreeMap<&str, CompanionStat> = BTreeMap::new();
    for record in records {
        for teammate in record.outcome.teammates() {
            stats
                .entry(teammate.label.as_str())
                .or_insert_with(|| CompanionStat::new(teammate.label.clone()))
                .add(teammate.status.is_escaped());
        }
    }
    stats.into_values().collect()
}

/// Aggregate records into overall totals and per-dimension buckets.
pub fn aggregate(records: &[&MatchRecord]) -> Stats {
    let total_games = records.len() as u32;
    let total_escapes = records.iter().filter(|r| r.self_escaped()).count() as u32;
    let total_team_escapes: u32 = records.iter().map(|r| r.outcome.escaped_slots()).sum();
    let rating_sum: u32 = records
        .iter()
        .map(|r| u32::from(rating_to_score(r.self_rating)))
        .sum();
    let rated_games = records.iter().filter(|r| r.self_rating.is_some()).count() as u32;

    Stats {
        total_games,
        total_escapes,
        total_team_escapes,
        escape_rate: calculate_rate(total_escapes, total_games),
        team_escape_rate: calculate_rate(total_team_escapes, total_games * TOTAL_SLOTS as u32),
        rating_sum,
        rated_games,
        average_rating: calculate_average(rating_sum, total_games),
        killer_buckets: group_by(records, |r| Some(r.opponent)),
        stage_buckets: group_by(records, |r| r.stage),
        opponent_level_buckets: group_by(records, |r| r.opponent_level),
        date_buckets: group_by(records, |r| Some(r.date)),
        companions: companions(records),
    }
}

/// Qualifying buckets with the highest personal escape rate, best first.
/// Ties go to the key that comes first in declaration order.
pub fn rank_top<K: Ord>(
    buckets: &[AggregateBucket<K>],
    n: usize,
    min_games: u32,
) -> Vec<&AggregateBucket<K>> {
    let mut ranked: Vec<_> = buckets.iter().filter(|b| b.qualifies(min_games)).collect();
    ranked.sort_by(|a, b| {
        b.escape_rate
            .total_cmp(&a.escape_rate)
            .then_with(|| a.key.cmp(&b.key))
    });
    ranked.truncate(n);
    ranked
}

/// Qualifying buckets with the lowest personal escape rate, worst first.
pub fn rank_bottom<K: Ord>(
    buckets: &[AggregateBucket<K>],
    n: usize,
    min_games: u32,
) -> Vec<&AggregateBucket<K>> {
    let mut ranked: Vec<_> = buckets.iter().filter(|b| b.qualifies(min_games)).collect();
    ranked.sort_by(|a, b| {
        a.escape_rate
            .total_cmp(&b.escape_rate)
            .then_with(|| a.key.cmp(&b.key))
    });
    ranked.truncate(n);
    ranked
}

/// Best and worst buckets of one dimension.
///
/// A bucket lands in at most one list; the best list is filled first.
#[derive(Debug)]
pub struct Rankings<'a, K> {
    pub top: Vec<&'a AggregateBucket<K>>,
    pub bottom: Vec<&'a AggregateBucket<K>>,
}

impl<'a, K: Ord> Rankings<'a, K> {
    pub fn new(buckets: &'a [AggregateBucket<K>], n: usize, min_games: u32) -> Self {
        let top = rank_top(buckets, n, min_games);
        let mut bottom = rank_bottom(buckets, usize::MAX, min_games);
        bottom.retain(|b| !top.iter().any(|t| t.key == b.key));
        bottom.truncate(n);
        Self { top, bottom }
    }
}
