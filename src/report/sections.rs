//! Rendering of report sections into text lines.

use std::fmt::Display;

use super::advice::{
    form_shift_message, killer_tip, practice_goals, recent_form_message, sample_size_remark,
    STRONG_KILLER_RATE, WEAK_KILLER_RATE,
};
use crate::calculate::{
    rank_bottom, rank_top, score_to_rating, Consistency, FormComparison, MemoLength, MemoScan,
    Rankings, RecentForm, TrendSummary,
};
use crate::models::{AggregateBucket, AnalysisOptions, Killer, Stats};

/// Placeholder rendered for a section without data.
pub const INSUFFICIENT_DATA: &str = "insufficient data";

/// Weak killers listed in the tips section.
const WEAK_KILLERS_LISTED: usize = 2;

/// A titled block of report lines.
///
/// An empty section still renders: as one `"<title>: insufficient data"` line.
pub struct Section {
    title: &'static str,
    body: Vec<String>,
}

impl Section {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            body: Vec::new(),
        }
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.body.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn render_into(self, lines: &mut Vec<String>) {
        if self.body.is_empty() {
            lines.push(format!("{}: {}", self.title, INSUFFICIENT_DATA));
            return;
        }
        lines.push(format!("{}:", self.title));
        lines.extend(self.body.into_iter().map(|l| format!("  - {}", l)));
    }
}

fn rating_note<K>(bucket: &AggregateBucket<K>) -> String {
    match (bucket.average_rating, bucket.average_score()) {
        (Some(avg), Some(score)) => format!("avg rating {:.1} ({})", avg, score_to_rating(score)),
        _ => "avg rating n/a".to_string(),
    }
}

fn bucket_line<K: Display>(bucket: &AggregateBucket<K>) -> String {
    format!(
        "{}: {:.1}% escape ({} games), {}",
        bucket.key,
        bucket.escape_rate,
        bucket.games,
        rating_note(bucket)
    )
}

pub fn overview(stats: &Stats) -> Section {
    let mut section = Section::new("Overview");
    if stats.total_games == 0 {
        return section;
    }

    section.line(format!(
        "Games: {} ({} escapes)",
        stats.total_games, stats.total_escapes
    ));
    section.line(format!("Escape rate: {:.1}%", stats.escape_rate));
    section.line(format!("Team escape rate: {:.1}%", stats.team_escape_rate));
    section.line(format!("Skill level: {}", stats.skill_level()));
    section.line(sample_size_remark(stats.total_games));
    section
}

/// Best and worst sections for one dimension.
pub fn ranked<K: Ord + Display>(
    best_title: &'static str,
    worst_title: &'static str,
    buckets: &[AggregateBucket<K>],
    options: &AnalysisOptions,
) -> (Section, Section) {
    let rankings = Rankings::new(buckets, options.top_n, options.min_bucket_games);

    let mut best = Section::new(best_title);
    for bucket in &rankings.top {
        best.line(bucket_line(bucket));
    }

    let mut worst = Section::new(worst_title);
    for bucket in &rankings.bottom {
        worst.line(bucket_line(bucket));
    }

    (best, worst)
}

pub fn killer_tips(stats: &Stats, options: &AnalysisOptions) -> Section {
    let mut section = Section::new("Killer tips");
    let ranked: Vec<&AggregateBucket<Killer>> =
        rank_bottom(&stats.killer_buckets, usize::MAX, options.min_bucket_games);
    if ranked.is_empty() {
        return section;
    }

    let weak: Vec<_> = ranked
        .iter()
        .filter(|b| b.raw_escape_rate() < WEAK_KILLER_RATE)
        .take(WEAK_KILLERS_LISTED)
        .collect();

    match weak.as_slice() {
        [] => section.line(format!("No killer below {:.0}% escape", WEAK_KILLER_RATE)),
        [weakest, rest @ ..] => {
            section.line(format!(
                "Weakest: {} ({:.1}% escape) - {}",
                weakest.key,
                weakest.escape_rate,
                killer_tip(weakest.key)
            ));
            for b in rest {
                section.line(format!("Also weak: {} ({:.1}% escape)", b.key, b.escape_rate));
            }
        }
    }

    let best = rank_top(&stats.killer_buckets, 1, options.min_bucket_games);
    if let Some(strongest) = best
        .first()
        .filter(|b| b.raw_escape_rate() > STRONG_KILLER_RATE)
    {
        section.line(format!(
            "Strongest: {} ({:.1}% escape) - carry this approach to other matchups",
            strongest.key, strongest.escape_rate
        ));
    }

    section
}

pub fn opponent_levels(stats: &Stats) -> Section {
    let mut section = Section::new("Opponent levels");
    for bucket in &stats.opponent_level_buckets {
        section.line(format!(
            "{}: {:.1}% escape ({} games)",
            bucket.key, bucket.escape_rate, bucket.games
        ));
    }
    section
}

pub fn companions(stats: &Stats) -> Section {
    let mut section = Section::new("Companions");
    for companion in &stats.companions {
        section.line(format!(
            "{}: {:.1}% escape ({} of {} games)",
            companion.label, companion.escape_rate, companion.escapes, companion.games
        ));
    }
    section
}

pub fn self_rating(stats: &Stats, consistency: &Consistency) -> Section {
    let mut section = Section::new("Self rating");
    if stats.total_games == 0 {
        return section;
    }

    section.line(format!(
        "Average rating: {:.1} ({})",
        stats.average_rating,
        score_to_rating(stats.average_score())
    ));
    section.line(format!(
        "Rated games: {} of {}",
        stats.rated_games, stats.total_games
    ));
    section.line(format!(
        "Consistency: {:.1}% ({} of {} decisive ratings matched the outcome)",
        consistency.consistency_rate, consistency.consistent_games, consistency.decisive_games
    ));
    section
}

pub fn trend(trend: Option<&TrendSummary>, form: Option<&FormComparison>) -> Section {
    let mut section = Section::new("Trend");

    if let Some(trend) = trend {
        let half = trend.halves.recent.games;
        let older = trend.halves.older.games;
        section.line(format!(
            "Escape rate (last {} vs previous {}): {}",
            half,
            older,
            trend.halves.escape_direction()
        ));
        section.line(format!(
            "Team escape rate (last {} vs previous {}): {}",
            half,
            older,
            trend.halves.team_escape_direction()
        ));
        section.line(format!(
            "Escape rate (last 3 vs previous 3): {}",
            trend.short_term.escape_direction()
        ));
        section.line(format!(
            "Team escape rate (last 3 vs previous 3): {}",
            trend.short_term.team_escape_direction()
        ));
    }

    if let Some(form) = form {
        section.line(format!(
            "Last 5 games: {}% escape vs {:.1}% overall - {}",
            form.recent_rate,
            form.overall_rate,
            form_shift_message(form.shift)
        ));
    }

    section
}

pub fn recent_form(form: Option<RecentForm>) -> Section {
    let mut section = Section::new("Recent form");
    if let Some(form) = form {
        section.line(recent_form_message(form));
    }
    section
}

pub fn memos(scan: &MemoScan, total_games: u32) -> Section {
    let mut section = Section::new("Memos");
    if scan.memo_count == 0 {
        return section;
    }

    section.line(format!(
        "Memos on {} of {} games ({:.1}%)",
        scan.memo_count, total_games, scan.memo_share
    ));
    for kw in &scan.keywords {
        section.line(format!("\"{}\" appears {} times", kw.keyword, kw.count));
    }
    match scan.length {
        Some(MemoLength::Detailed) => section.line(format!(
            "Memos are detailed (avg {:.1} characters)",
            scan.average_length
        )),
        Some(MemoLength::Concise) => section.line(format!(
            "Memos are concise (avg {:.1} characters)",
            scan.average_length
        )),
        Some(MemoLength::Neither) | None => {}
    }
    section
}

pub fn goals(stats: &Stats) -> Section {
    let mut section = Section::new("Practice goals");
    if stats.total_games == 0 {
        return section;
    }
    for (i, goal) in practice_goals(stats.escape_rate).iter().enumerate() {
        section.line(format!("{}. {}", i + 1, goal));
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_section_renders_placeholder() {
        let mut lines = Vec::new();
        Section::new("Trend").render_into(&mut lines);
        assert_eq!(lines, vec!["Trend: insufficient data".to_string()]);
    }

    #[test]
    fn test_section_renders_body() {
        let mut section = Section::new("Overview");
        section.line("Games: 1");
        section.line("Escape rate: 100.0%");
        assert!(!section.is_empty());

        let mut lines = Vec::new();
        section.render_into(&mut lines);
        assert_eq!(
            lines,
            vec![
                "Overview:".to_string(),
                "  - Games: 1".to_string(),
                "  - Escape rate: 100.0%".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_stats_sections_are_empty() {
        let stats = Stats::default();
        let options = AnalysisOptions::default();

        assert!(overview(&stats).is_empty());
        assert!(killer_tips(&stats, &options).is_empty());
        assert!(self_rating(&stats, &Consistency::default()).is_empty());
        assert!(goals(&stats).is_empty());
        assert!(trend(None, None).is_empty());
        assert!(recent_form(None).is_empty());
    }

    fn bucket(key: Killer, escapes: u32, games: u32) -> AggregateBucket<Killer> {
        AggregateBucket {
            self_escapes: escapes,
            games,
            escape_rate: crate::calculate::calculate_rate(escapes, games),
            ..AggregateBucket::new(key)
        }
    }

    #[test]
    fn test_strongest_tip_follows_ranking_order() {
        let stats = Stats {
            killer_buckets: vec![bucket(Killer::Trapper, 2, 2), bucket(Killer::Nurse, 2, 2)],
            ..Default::default()
        };
        let section = killer_tips(&stats, &AnalysisOptions::default());

        assert!(section.body.iter().any(|l| l.starts_with("Strongest: Trapper")));
    }

    #[test]
    fn test_weak_threshold_uses_unrounded_rate() {
        // 2999 / 10000 = 29.99%, displayed as 30.0%
        let stats = Stats {
            killer_buckets: vec![bucket(Killer::Hag, 2999, 10000)],
            ..Default::default()
        };
        let section = killer_tips(&stats, &AnalysisOptions::default());

        assert!(section.body[0].starts_with("Weakest: Hag (30.0% escape)"));
    }

    #[test]
    fn test_strong_threshold_uses_unrounded_rate() {
        // 7001 / 10000 = 70.01%, displayed as 70.0%
        let stats = Stats {
            killer_buckets: vec![bucket(Killer::Hag, 7001, 10000)],
            ..Default::default()
        };
        let section = killer_tips(&stats, &AnalysisOptions::default());

        assert!(section.body.iter().any(|l| l.starts_with("Strongest: Hag (70.0% escape)")));
    }

    #[test]
    fn test_trend_renders_form_without_trend() {
        let form = FormComparison {
            recent_rate: 80,
            overall_rate: 50.0,
            shift: crate::calculate::FormShift::Rising,
        };
        let section = trend(None, Some(&form));

        assert_eq!(
            section.body,
            vec!["Last 5 games: 80% escape vs 50.0% overall - Playing well lately; keep it going"
                .to_string()]
        );
    }
}
