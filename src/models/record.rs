//! Match record model.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Killer, OpponentLevel, SelfRating, Stage, ValidationError};

/// Label for a teammate slot filled by matchmaking rather than a friend.
pub const RANDOM_TEAMMATE: &str = "random";

/// Number of teammate slots next to the player's own.
pub const TEAMMATE_SLOTS: usize = 3;

/// Total participant slots per match.
pub const TOTAL_SLOTS: usize = TEAMMATE_SLOTS + 1;

/// Whether a survivor got out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurvivorStatus {
    Escaped,
    Died,
}

impl SurvivorStatus {
    pub fn is_escaped(&self) -> bool {
        matches!(self, SurvivorStatus::Escaped)
    }
}

impl std::fmt::Display for SurvivorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurvivorStatus::Escaped => write!(f, "escaped"),
            SurvivorStatus::Died => write!(f, "died"),
        }
    }
}

impl FromStr for SurvivorStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "escaped" | "escape" => Ok(SurvivorStatus::Escaped),
            "died" | "dead" | "caught" | "sacrificed" | "killed" => Ok(SurvivorStatus::Died),
            _ => Err(ValidationError::UnknownStatus(s.to_string())),
        }
    }
}

/// One of the three other survivors in a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teammate {
    /// Friend name, or [`RANDOM_TEAMMATE`]
    pub label: String,
    pub status: SurvivorStatus,
}

impl Teammate {
    pub fn new(label: impl Into<String>, status: SurvivorStatus) -> Self {
        Self {
            label: label.into(),
            status,
        }
    }

    /// A matchmade teammate.
    pub fn random(status: SurvivorStatus) -> Self {
        Self::new(RANDOM_TEAMMATE, status)
    }
}

/// Address of a participant slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKey {
    /// The player's own slot
    Own,
    /// Teammate position, 1..=3
    Teammate(usize),
}

/// Per-participant result of a match: the player plus exactly three teammates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    own: SurvivorStatus,
    teammates: [Teammate; TEAMMATE_SLOTS],
}

impl Outcome {
    pub fn new(own: SurvivorStatus, teammates: [Teammate; TEAMMATE_SLOTS]) -> Self {
        Self { own, teammates }
    }

    /// Outcome of a match played with three matchmade teammates.
    pub fn with_randoms(own: SurvivorStatus, others: [SurvivorStatus; TEAMMATE_SLOTS]) -> Self {
        Self::new(own, others.map(Teammate::random))
    }

    pub fn own(&self) -> SurvivorStatus {
        self.own
    }

    pub fn own_escaped(&self) -> bool {
        self.own.is_escaped()
    }

    pub fn teammates(&self) -> &[Teammate; TEAMMATE_SLOTS] {
        &self.teammates
    }

    /// Status of the addressed slot, `None` for a teammate position outside 1..=3.
    pub fn status(&self, key: SlotKey) -> Option<SurvivorStatus> {
        match key {
            SlotKey::Own => Some(self.own),
            SlotKey::Teammate(position) => position
                .checked_sub(1)
                .and_then(|i| self.teammates.get(i))
                .map(|t| t.status),
        }
    }

    /// Number of escaped slots across all four participants.
    pub fn escaped_slots(&self) -> u32 {
        let teammates = self
            .teammates
            .iter()
            .filter(|t| t.status.is_escaped())
            .count() as u32;
        teammates + u32::from(self.own_escaped())
    }
}

/// A single completed match, as logged by the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchRecord", into = "RawMatchRecord")]
pub struct MatchRecord {
    /// Day the match was played
    pub date: NaiveDate,

    /// Killer faced
    pub opponent: Killer,

    /// Opponent skill as judged by the player
    pub opponent_level: Option<OpponentLevel>,

    /// Realm played on
    pub stage: Option<Stage>,

    /// Player's rating of their own performance
    pub self_rating: Option<SelfRating>,

    /// Per-participant result
    pub outcome: Outcome,

    /// Free-text note, stored exactly as entered
    pub memo: Option<String>,
}

impl MatchRecord {
    /// Create a record with only the required fields.
    pub fn new(date: NaiveDate, opponent: Killer, outcome: Outcome) -> Self {
        Self {
            date,
            opponent,
            opponent_level: None,
            stage: None,
            self_rating: None,
            outcome,
            memo: None,
        }
    }

    /// Builder method to set the opponent level.
    pub fn with_opponent_level(mut self, level: OpponentLevel) -> Self {
        self.opponent_level = Some(level);
        self
    }

    /// Builder method to set the stage.
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    /// Builder method to set the self rating.
    pub fn with_self_rating(mut self, rating: SelfRating) -> Self {
        self.self_rating = Some(rating);
        self
    }

    /// Builder method to set the memo.
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn self_escaped(&self) -> bool {
        self.outcome.own_escaped()
    }

    /// Memo text if it carries anything besides whitespace.
    pub fn memo_text(&self) -> Option<&str> {
        self.memo
            .as_deref()
            .map(str::trim)
            .filter(|memo| !memo.is_empty())
    }
}

/// Opponent level as it appears on the wire: a category name or a 0..=50 grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawOpponentLevel {
    Grade(u32),
    Name(String),
}

/// Wire form of a teammate slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTeammate {
    #[serde(default = "default_teammate_label")]
    pub label: String,
    pub status: String,
}

fn default_teammate_label() -> String {
    RANDOM_TEAMMATE.to_string()
}

/// Wire form of an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOutcome {
    #[serde(rename = "self")]
    pub own: String,
    #[serde(default)]
    pub teammates: Vec<RawTeammate>,
}

/// Unvalidated match record as produced by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMatchRecord {
    pub date: NaiveDate,
    pub opponent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent_level: Option<RawOpponentLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_rating: Option<String>,
    pub outcome: RawOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl TryFrom<RawOutcome> for Outcome {
    type Error = ValidationError;

    fn try_from(raw: RawOutcome) -> Result<Self, Self::Error> {
        if raw.teammates.len() != TEAMMATE_SLOTS {
            return Err(ValidationError::SlotCount {
                found: raw.teammates.len() + 1,
            });
        }

        let own = raw.own.parse()?;
        let mut teammates = Vec::with_capacity(TEAMMATE_SLOTS);
        for (i, t) in raw.teammates.into_iter().enumerate() {
            if t.label.trim().is_empty() {
                return Err(ValidationError::BlankTeammateLabel { position: i + 1 });
            }
            let status = t.status.parse()?;
            teammates.push(Teammate::new(t.label, status));
        }

        let teammates: [Teammate; TEAMMATE_SLOTS] = teammates
            .try_into()
            .map_err(|v: Vec<Teammate>| ValidationError::SlotCount { found: v.len() + 1 })?;

        Ok(Outcome::new(own, teammates))
    }
}

impl TryFrom<RawMatchRecord> for MatchRecord {
    type Error = ValidationError;

    fn try_from(raw: RawMatchRecord) -> Result<Self, Self::Error> {
        let opponent_level = match raw.opponent_level {
            None => None,
            Some(RawOpponentLevel::Grade(grade)) => Some(OpponentLevel::from_grade(grade)?),
            Some(RawOpponentLevel::Name(name)) => Some(name.parse()?),
        };

        Ok(Self {
            date: raw.date,
            opponent: raw.opponent.parse()?,
            opponent_level,
            stage: raw.stage.as_deref().map(str::parse::<Stage>).transpose()?,
            self_rating: raw.self_rating.as_deref().map(str::parse::<SelfRating>).transpose()?,
            outcome: raw.outcome.try_into()?,
            memo: raw.memo,
        })
    }
}

impl From<MatchRecord> for RawMatchRecord {
    fn from(record: MatchRecord) -> Self {
        Self {
            date: record.date,
            opponent: record.opponent.name().to_string(),
            opponent_level: record
                .opponent_level
                .map(|l| RawOpponentLevel::Name(l.to_string())),
            stage: record.stage.map(|s| s.name().to_string()),
            self_rating: record.self_rating.map(|r| r.to_string()),
            outcome: RawOutcome {
                own: record.outcome.own.to_string(),
                teammates: record
                    .outcome
                    .teammates
                    .into_iter()
                    .map(|t| RawTeammate {
                        label: t.label,
                        status: t.status.to_string(),
                    })
                    .collect(),
            },
            memo: record.memo,
        }
    }
}
