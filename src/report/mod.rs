//! Report generation.
//!
//! Composes the aggregate, trend, consistency and memo results into an ordered,
//! deterministic list of text lines. Sections, in order:
//!
//! 1. Overview
//! 2. Best / worst killers, then killer tips
//! 3. Best / worst stages
//! 4. Opponent levels and companions
//! 5. Self rating and consistency
//! 6. Trend and recent form
//! 7. Memos and practice goals
//!
//! A section without data renders a single `"<title>: insufficient data"` line,
//! so the shape of the output never depends on which sections have data.

pub mod advice;
pub mod sections;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculate::{
    aggregate, analyze_consistency, analyze_trend, classify_recent, compare_form, filter_records,
    scan_memos, Consistency, FormComparison, MemoScan, RecentForm, TrendSummary,
};
use crate::models::{AnalysisOptions, MatchRecord, RawMatchRecord, Stats, ValidationError};

pub use sections::INSUFFICIENT_DATA;

/// Errors that reject an analysis call.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

/// Result of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Human-readable lines, safe to render verbatim
    pub lines: Vec<String>,

    /// Numbers behind the lines
    pub stats: Stats,

    /// Self-rating consistency
    pub consistency: Consistency,

    /// `None` with fewer than six records in scope
    pub trend: Option<TrendSummary>,

    /// `None` with fewer than three records in scope
    pub recent_form: Option<RecentForm>,

    /// Latest five matches against the overall rate, `None` with fewer than five records
    pub form: Option<FormComparison>,

    /// Memo keyword scan
    pub memos: MemoScan,
}

fn validate_options(options: &AnalysisOptions) -> Result<(), AnalysisError> {
    if options.top_n == 0 {
        return Err(AnalysisError::InvalidOptions(
            "top_n must be greater than 0".to_string(),
        ));
    }
    if options.min_bucket_games == 0 {
        return Err(AnalysisError::InvalidOptions(
            "min_bucket_games must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// Analyze a recency-ordered list of match records (most recent first).
///
/// The records are only read. Calling this twice with the same input yields
/// identical lines.
pub fn analyze(records: &[MatchRecord], options: &AnalysisOptions) -> Result<Report, AnalysisError> {
    validate_options(options)?;

    let filtered = filter_records(records, options);
    let stats = aggregate(&filtered);
    let consistency = analyze_consistency(&filtered);
    let trend = analyze_trend(&filtered);
    let recent_form = classify_recent(&filtered);
    let form = compare_form(&filtered);
    let memos = scan_memos(&filtered);

    let (best_killers, worst_killers) = sections::ranked(
        "Best killers",
        "Worst killers",
        &stats.killer_buckets,
        options,
    );
    let (best_stages, worst_stages) = sections::ranked(
        "Best stages",
        "Worst stages",
        &stats.stage_buckets,
        options,
    );

    let mut lines = Vec::new();
    for section in [
        sections::overview(&stats),
        best_killers,
        worst_killers,
        sections::killer_tips(&stats, options),
        best_stages,
        worst_stages,
        sections::opponent_levels(&stats),
        sections::companions(&stats),
        sections::self_rating(&stats, &consistency),
        sections::trend(trend.as_ref(), form.as_ref()),
        sections::recent_form(recent_form),
        sections::memos(&memos, stats.total_games),
        sections::goals(&stats),
    ] {
        section.render_into(&mut lines);
    }

    debug!(
        "Analyzed {} games into {} report lines",
        stats.total_games,
        lines.len()
    );

    Ok(Report {
        lines,
        stats,
        consistency,
        trend,
        recent_form,
        form,
        memos,
    })
}

/// Validate raw records, then analyze them.
///
/// Fails on the first record that violates the data model, naming its index.
pub fn analyze_raw(
    records: Vec<RawMatchRecord>,
    options: &AnalysisOptions,
) -> Result<Report, AnalysisError> {
    let records = records
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            MatchRecord::try_from(raw).map_err(|source| AnalysisError::InvalidRecord { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    analyze(&records, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::TrendDirection;
    use crate::models::SurvivorStatus::{Died, Escaped};
    use crate::models::{
        Killer, OpponentLevel, Outcome, Period, RawOutcome, SelfRating, Stage, SurvivorStatus,
        Teammate,
    };
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn status(escaped: bool) -> SurvivorStatus {
        if escaped {
            Escaped
        } else {
            Died
        }
    }

    fn game(day: u32, killer: Killer, escaped: bool) -> MatchRecord {
        MatchRecord::new(
            date(day),
            killer,
            Outcome::with_randoms(status(escaped), [Died, Escaped, Died]),
        )
    }

    fn is_placeholder(line: &str) -> bool {
        line.ends_with(&format!(": {}", INSUFFICIENT_DATA))
    }

    /// Body lines of the section with the given title.
    fn section<'a>(report: &'a Report, title: &str) -> Vec<&'a str> {
        let header = format!("{}:", title);
        let Some(start) = report.lines.iter().position(|l| *l == header) else {
            return Vec::new();
        };
        report.lines[start + 1..]
            .iter()
            .take_while(|l| l.starts_with("  - "))
            .map(|l| l.trim_start_matches("  - "))
            .collect()
    }

    fn placeholder(report: &Report, title: &str) -> bool {
        report
            .lines
            .contains(&format!("{}: {}", title, INSUFFICIENT_DATA))
    }

    #[test]
    fn test_empty_input() {
        let report = analyze(&[], &AnalysisOptions::default()).unwrap();

        assert_eq!(report.stats, Stats::default());
        assert_eq!(report.consistency, Consistency::default());
        assert!(report.trend.is_none());
        assert!(report.recent_form.is_none());
        assert!(report.form.is_none());
        assert_eq!(report.lines.len(), 13);
        assert!(report.lines.iter().all(|l| is_placeholder(l)));
    }

    #[test]
    fn test_single_killer_scenario() {
        let records = vec![
            game(4, Killer::Trapper, true),
            game(3, Killer::Trapper, true),
            game(2, Killer::Trapper, false),
            game(1, Killer::Trapper, true),
        ];
        let report = analyze(&records, &AnalysisOptions::default()).unwrap();

        assert_eq!(report.stats.escape_rate, 75.0);
        assert_eq!(report.stats.killer(Killer::Trapper).unwrap().escape_rate, 75.0);
        assert_eq!(
            section(&report, "Best killers"),
            vec!["Trapper: 75.0% escape (4 games), avg rating n/a"]
        );
        // One bucket never shows up in both lists
        assert!(placeholder(&report, "Worst killers"));
        assert!(placeholder(&report, "Best stages"));
        assert!(placeholder(&report, "Trend"));
    }

    #[test]
    fn test_trend_scenario() {
        let records = vec![
            game(6, Killer::Nurse, true),
            game(5, Killer::Nurse, true),
            game(4, Killer::Nurse, false),
            game(3, Killer::Nurse, false),
            game(2, Killer::Nurse, false),
            game(1, Killer::Nurse, false),
        ];
        let report = analyze(&records, &AnalysisOptions::default()).unwrap();

        let trend = report.trend.unwrap();
        assert_eq!(trend.halves.escape_direction(), TrendDirection::Improvement(67));
        assert_eq!(
            section(&report, "Trend")[0],
            "Escape rate (last 3 vs previous 3): +67% improvement"
        );
    }

    #[test]
    fn test_unrated_game_counts_as_midpoint() {
        let records = vec![
            game(2, Killer::Hag, true).with_self_rating(SelfRating::Best),
            game(1, Killer::Hag, true),
        ];
        let report = analyze(&records, &AnalysisOptions::default()).unwrap();

        assert_eq!(report.stats.average_rating, 4.0);
        assert_eq!(report.consistency.rated_games, 1);
        assert_eq!(report.consistency.decisive_games, 1);
        assert_eq!(
            section(&report, "Self rating"),
            vec![
                "Average rating: 4.0 (good)",
                "Rated games: 1 of 2",
                "Consistency: 100.0% (1 of 1 decisive ratings matched the outcome)",
            ]
        );
    }

    #[test]
    fn test_memo_keyword_threshold() {
        let records = vec![
            game(3, Killer::Pig, true).with_memo("rescue, then another rescue"),
            game(2, Killer::Pig, false).with_memo("late rescue"),
            game(1, Killer::Pig, false).with_memo("rescue at the gate"),
        ];
        let report = analyze(&records, &AnalysisOptions::default()).unwrap();
        assert!(section(&report, "Memos").contains(&"\"rescue\" appears 4 times"));

        let report = analyze(&records[1..], &AnalysisOptions::default()).unwrap();
        assert!(!section(&report, "Memos")
            .iter()
            .any(|l| l.starts_with("\"rescue\"")));
    }

    #[test]
    fn test_idempotent_lines() {
        let records = vec![
            game(6, Killer::Nurse, true).with_stage(Stage::Haddonfield),
            game(5, Killer::Trapper, false).with_stage(Stage::RedForest),
            game(4, Killer::Nurse, false).with_opponent_level(OpponentLevel::Pro),
            game(3, Killer::Trapper, true).with_memo("chase chase chase"),
            game(2, Killer::Spirit, false).with_self_rating(SelfRating::Poor),
            game(1, Killer::Spirit, false),
        ];
        let snapshot = records.clone();
        let options = AnalysisOptions::default();

        let first = analyze(&records, &options).unwrap();
        let second = analyze(&records, &options).unwrap();
        assert_eq!(first.lines, second.lines);
        assert_eq!(records, snapshot);
    }

    #[test]
    fn test_rankings_are_monotonic_and_qualified() {
        let mut records = Vec::new();
        for (i, killer) in Killer::ALL.iter().take(7).enumerate() {
            for g in 0..5u32 {
                records.push(game(20, *killer, g < (i as u32 % 5)));
            }
        }
        records.push(game(20, Killer::Blight, true));
        let report = analyze(&records, &AnalysisOptions::default()).unwrap();

        let rankings = crate::calculate::Rankings::new(&report.stats.killer_buckets, 3, 2);
        assert_eq!(rankings.top.len(), 3);
        assert!(rankings.top.windows(2).all(|w| w[0].escape_rate >= w[1].escape_rate));
        assert!(rankings.bottom.windows(2).all(|w| w[0].escape_rate <= w[1].escape_rate));
        assert!(rankings.top.iter().chain(&rankings.bottom).all(|b| b.games >= 2));
        assert!(!section(&report, "Best killers")
            .iter()
            .any(|l| l.starts_with("Blight")));
    }

    #[test]
    fn test_rates_within_bounds() {
        let records = vec![
            game(3, Killer::Wraith, true),
            game(2, Killer::Wraith, true),
            MatchRecord::new(
                date(1),
                Killer::Wraith,
                Outcome::with_randoms(Escaped, [Escaped, Escaped, Escaped]),
            ),
        ];
        let report = analyze(&records, &AnalysisOptions::default()).unwrap();
        let stats = &report.stats;

        for rate in [stats.escape_rate, stats.team_escape_rate, report.consistency.consistency_rate] {
            assert!((0.0..=100.0).contains(&rate));
        }
        for bucket in &stats.killer_buckets {
            assert!((0.0..=100.0).contains(&bucket.escape_rate));
            assert!((0.0..=100.0).contains(&bucket.team_escape_rate));
        }
        assert_eq!(stats.escape_rate, 100.0);
    }

    #[test]
    fn test_killer_filter_and_period() {
        let records = vec![
            game(15, Killer::Trapper, true),
            game(15, Killer::Nurse, false),
            game(1, Killer::Trapper, false),
        ];
        let options = AnalysisOptions::default()
            .with_period(Period::Week)
            .with_reference_date(date(15))
            .with_killer(Killer::Trapper);
        let report = analyze(&records, &options).unwrap();

        assert_eq!(report.stats.total_games, 1);
        assert_eq!(report.stats.escape_rate, 100.0);
    }

    #[test]
    fn test_recent_form_line() {
        let records = vec![
            game(3, Killer::Knight, true),
            game(2, Killer::Knight, true),
            game(1, Killer::Knight, false),
        ];
        let report = analyze(&records, &AnalysisOptions::default()).unwrap();

        assert_eq!(report.recent_form, Some(RecentForm::Positive));
        assert_eq!(
            section(&report, "Recent form"),
            vec!["Strong recent form: escaped at least 2 of the last 3 matches"]
        );
    }

    #[test]
    fn test_killer_tips_name_weakest() {
        let records = vec![
            game(4, Killer::Nurse, false),
            game(3, Killer::Nurse, false),
            game(2, Killer::Trapper, true),
            game(1, Killer::Trapper, true),
        ];
        let report = analyze(&records, &AnalysisOptions::default()).unwrap();
        let tips = section(&report, "Killer tips");

        assert!(tips[0].starts_with("Weakest: Nurse (0.0% escape)"));
        assert!(tips[1].starts_with("Strongest: Trapper (100.0% escape)"));
    }

    #[test]
    fn test_companion_section() {
        let outcome = Outcome::new(
            Escaped,
            [
                Teammate::new("Mika", Escaped),
                Teammate::random(Died),
                Teammate::random(Died),
            ],
        );
        let records = vec![MatchRecord::new(date(1), Killer::Lich, outcome)];
        let report = analyze(&records, &AnalysisOptions::default()).unwrap();

        assert_eq!(
            section(&report, "Companions"),
            vec![
                "Mika: 100.0% escape (1 of 1 games)",
                "random: 0.0% escape (0 of 2 games)",
            ]
        );
    }

    #[test]
    fn test_invalid_options() {
        let options = AnalysisOptions {
            top_n: 0,
            ..Default::default()
        };
        let err = analyze(&[], &options).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidOptions(_)));
    }

    #[test]
    fn test_analyze_raw_reports_index() {
        let good = RawMatchRecord::from(game(2, Killer::Trapper, true));
        let mut bad = good.clone();
        bad.outcome = RawOutcome {
            own: "escaped".to_string(),
            teammates: Vec::new(),
        };

        let err = analyze_raw(vec![good.clone(), bad], &AnalysisOptions::default()).unwrap_err();
        match err {
            AnalysisError::InvalidRecord { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source, ValidationError::SlotCount { found: 1 });
            }
            other => panic!("unexpected error: {}", other),
        }

        let report = analyze_raw(vec![good], &AnalysisOptions::default()).unwrap();
        assert_eq!(report.stats.total_games, 1);
    }

    #[test]
    fn test_rating_category_uses_unrounded_average() {
        let mut records = Vec::new();
        for day in 1..=6 {
            records.push(game(day, Killer::Hag, true).with_self_rating(SelfRating::Best));
        }
        for day in 7..=13 {
            records.push(game(day, Killer::Hag, false).with_self_rating(SelfRating::Good));
        }
        records.reverse();
        let report = analyze(&records, &AnalysisOptions::default()).unwrap();

        // 58 / 13 = 4.46
        assert_eq!(report.stats.rating_sum, 58);
        assert_eq!(section(&report, "Self rating")[0], "Average rating: 4.5 (good)");
        assert!(section(&report, "Best killers")[0].ends_with("avg rating 4.5 (good)"));
    }

    #[test]
    fn test_trend_section_with_five_records() {
        let records = vec![
            game(5, Killer::Nurse, true),
            game(4, Killer::Nurse, true),
            game(3, Killer::Nurse, true),
            game(2, Killer::Nurse, false),
            game(1, Killer::Nurse, false),
        ];
        let report = analyze(&records, &AnalysisOptions::default()).unwrap();

        assert!(report.trend.is_none());
        assert_eq!(
            section(&report, "Trend"),
            vec!["Last 5 games: 60% escape vs 60.0% overall - Steady performance; a good pace"]
        );
    }

    #[test]
    fn test_trend_section_lists_team_short_term() {
        let records: Vec<_> = (1..=6).rev().map(|d| game(d, Killer::Nurse, d > 3)).collect();
        let report = analyze(&records, &AnalysisOptions::default()).unwrap();
        let lines = section(&report, "Trend");

        assert_eq!(lines.len(), 5);
        assert!(lines[3].starts_with("Team escape rate (last 3 vs previous 3): "));
        assert!(lines[4].starts_with("Last 5 games: "));
    }
}
