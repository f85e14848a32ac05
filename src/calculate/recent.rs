//! Short recent-form classification.
//!
//! Two views: a rule table over the latest three matches, and the latest five
//! matches' personal escape rate set against the rate over every match in scope.

use serde::{Deserialize, Serialize};

use crate::models::MatchRecord;

/// Matches compared against the overall rate.
pub const FORM_WINDOW: usize = 5;

/// Percentage points the recent rate must move past the overall rate.
pub const FORM_BAND: f64 = 10.0;

/// Matches looked at.
pub const RECENT_WINDOW: usize = 3;

/// Team-average escapes at or above which the team carried the matches.
pub const HIGH_TEAM_AVERAGE: f64 = 2.0;

/// Team-average escapes at or above which the team held up.
pub const MID_TEAM_AVERAGE: f64 = 1.3;

/// Recent-form verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecentForm {
    /// Two or more personal escapes
    Positive,
    /// One escape while the team escaped a lot
    TeamContribution,
    /// One escape with moderate team escapes
    Resilient,
    /// Team escapes were scarce
    ToughOpponents,
    /// Anything else
    Steady,
}

/// Band of the average number of escaped slots per match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TeamBand {
    High,
    Mid,
    Low,
}

impl TeamBand {
    fn of(team_average: f64) -> Self {
        if team_average >= HIGH_TEAM_AVERAGE {
            TeamBand::High
        } else if team_average >= MID_TEAM_AVERAGE {
            TeamBand::Mid
        } else {
            TeamBand::Low
        }
    }
}

impl RecentForm {
    /// Rule table over personal escapes and the team-average band.
    /// Rows are checked top to bottom.
    fn decide(escapes: usize, band: TeamBand) -> Self {
        match (escapes, band) {
            (2.., _) => RecentForm::Positive,
            (1, TeamBand::High) => RecentForm::TeamContribution,
            (1, TeamBand::Mid) => RecentForm::Resilient,
            (_, TeamBand::Low) => RecentForm::ToughOpponents,
            _ => RecentForm::Steady,
        }
    }
}

/// Classify the most recent three matches. `None` with fewer than three records.
pub fn classify_recent(records: &[&MatchRecord]) -> Option<RecentForm> {
    if records.len() < RECENT_WINDOW {
        return None;
    }

    let window = &records[..RECENT_WINDOW];
    let escapes = window.iter().filter(|r| r.self_escaped()).count();
    let team_escapes: u32 = window.iter().map(|r| r.outcome.escaped_slots()).sum();
    let team_average = team_escapes as f64 / RECENT_WINDOW as f64;

    Some(RecentForm::decide(escapes, TeamBand::of(team_average)))
}

/// Direction of the recent rate relative to the overall rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormShift {
    /// More than ten points above overall
    Rising,
    /// More than ten points below overall
    Slipping,
    /// Within ten points either way
    Stable,
}

impl FormShift {
    /// Classify the recent rate against the overall rate, both in percent.
    pub fn classify(recent_rate: f64, overall_rate: f64) -> Self {
        if recent_rate > overall_rate + FORM_BAND {
            FormShift::Rising
        } else if recent_rate < overall_rate - FORM_BAND {
            FormShift::Slipping
        } else {
            FormShift::Stable
        }
    }
}

/// Latest five matches set against every match in scope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormComparison {
    /// Personal escape rate over the latest five matches, in whole percent
    pub recent_rate: u32,

    /// Personal escape rate over all matches (one decimal)
    pub overall_rate: f64,

    pub shift: FormShift,
}

fn unrounded_rate(records: &[&MatchRecord]) -> f64 {
    let escapes = records.iter().filter(|r| r.self_escaped()).count();
    escapes as f64 * 100.0 / records.len() as f64
}

/// Compare the latest five matches with the whole list. `None` with fewer than five records.
pub fn compare_form(records: &[&MatchRecord]) -> Option<FormComparison> {
    if records.len() < FORM_WINDOW {
        return None;
    }

    let recent = unrounded_rate(&records[..FORM_WINDOW]);
    let overall = unrounded_rate(records);

    Some(FormComparison {
        recent_rate: recent.round() as u32,
        overall_rate: super::round_to_tenth(overall),
        shift: FormShift::classify(recent, overall),
    })
}
