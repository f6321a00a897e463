//! Match, Round, and Group: the shared fixture vocabulary.

use crate::models::tournament::FixtureError;
use serde::{Deserialize, Serialize};

/// Lifecycle of a match. Newly generated matches are `Scheduled`; the layer
/// that activates a tournament flips them to `InProgress`; entering a score
/// completes them.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Done,
}

/// A single fixture between two teams.
///
/// `home`/`away` are `None` only for an unresolved knockout slot (TBD) or a
/// BYE; league and group matches always name both sides. Scores exist iff the
/// match is `Done`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub home: Option<String>,
    pub away: Option<String>,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_home: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_away: Option<u32>,
}

impl Match {
    /// Create a scheduled match between two named teams.
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: Some(home.into()),
            away: Some(away.into()),
            status: MatchStatus::Scheduled,
            score_home: None,
            score_away: None,
        }
    }

    /// Enter a final score and mark the match `Done`.
    ///
    /// Takes raw integers because scores arrive from untrusted storage/input;
    /// rejects anything negative or out of range without touching the match.
    pub fn record_result(&mut self, home: i64, away: i64) -> Result<(), FixtureError> {
        let (home, away) = validated_scores(home, away)?;
        self.score_home = Some(home);
        self.score_away = Some(away);
        self.status = MatchStatus::Done;
        Ok(())
    }
}

/// Check a proposed score pair at the write boundary (see `FixtureError::InvalidScore`).
pub(crate) fn validated_scores(home: i64, away: i64) -> Result<(u32, u32), FixtureError> {
    match (u32::try_from(home), u32::try_from(away)) {
        (Ok(h), Ok(a)) => Ok((h, a)),
        _ => Err(FixtureError::InvalidScore { home, away }),
    }
}

/// One round of a league: 1-based ordinal plus its matches.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    #[serde(rename = "round")]
    pub ordinal: usize,
    pub matches: Vec<Match>,
}

/// A drawn group: label ("Group A", ...), member teams, and the single-leg
/// round-robin fixtures among them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "name")]
    pub label: String,
    pub teams: Vec<String>,
    pub fixtures: Vec<Round>,
}
