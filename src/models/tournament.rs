//! Persisted tournament record and the engine's error type.

use crate::models::bracket::Bracket;
use crate::models::fixture::{Group, Round};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Errors that can occur during fixture generation or score entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FixtureError {
    /// Too few teams for the requested format.
    InvalidTeamCount { got: usize, min: usize },
    /// Group count outside the supported range (see `suggest_group_counts`).
    InvalidGroupCount { got: usize },
    /// A knockout bracket needs at least 2 qualifier slots.
    InvalidBracketInput { got: usize },
    /// A proposed score is negative or out of range.
    InvalidScore { home: i64, away: i64 },
    /// No bracket match at the given round/match position.
    MatchNotFound { round: usize, match_idx: usize },
    /// The requested side of a bracket match has no team in it yet.
    UnresolvedSlot { round: usize, match_idx: usize },
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureError::InvalidTeamCount { got, min } => {
                write!(f, "Need at least {} teams (got {})", min, got)
            }
            FixtureError::InvalidGroupCount { got } => {
                write!(f, "Unsupported number of groups: {}", got)
            }
            FixtureError::InvalidBracketInput { got } => {
                write!(f, "A bracket needs at least 2 qualifier slots (got {})", got)
            }
            FixtureError::InvalidScore { home, away } => {
                write!(f, "Invalid score {}-{}: scores must be 0 or more", home, away)
            }
            FixtureError::MatchNotFound { round, match_idx } => {
                write!(f, "No bracket match at round {}, match {}", round, match_idx)
            }
            FixtureError::UnresolvedSlot { round, match_idx } => {
                write!(
                    f,
                    "Match {} of round {} has no team in that slot yet",
                    match_idx, round
                )
            }
        }
    }
}

impl std::error::Error for FixtureError {}

/// A full tournament as handed to the storage layer: either a flat league or
/// a cup (group stage plus knockout bracket). The storage layer owns it from
/// here and mutates match statuses/scores in place; the engine keeps nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TournamentRecord {
    #[serde(rename_all = "camelCase")]
    League {
        name: String,
        created_at: DateTime<Utc>,
        rounds: Vec<Round>,
    },
    #[serde(rename_all = "camelCase")]
    Cup {
        name: String,
        created_at: DateTime<Utc>,
        groups: Vec<Group>,
        bracket: Bracket,
    },
}

impl TournamentRecord {
    /// New league record stamped with the current time.
    pub fn league(name: impl Into<String>, rounds: Vec<Round>) -> Self {
        TournamentRecord::League {
            name: name.into(),
            created_at: Utc::now(),
            rounds,
        }
    }

    /// New cup record stamped with the current time.
    pub fn cup(name: impl Into<String>, groups: Vec<Group>, bracket: Bracket) -> Self {
        TournamentRecord::Cup {
            name: name.into(),
            created_at: Utc::now(),
            groups,
            bracket,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TournamentRecord::League { name, .. } | TournamentRecord::Cup { name, .. } => name,
        }
    }
}
