//! Single-elimination bracket structures.

use crate::models::fixture::{validated_scores, MatchStatus};
use crate::models::tournament::FixtureError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a bracket match. Bracket matches are the only
/// matches in the system that carry a stable id, because later rounds must
/// reference the matches that feed them.
pub type BracketMatchId = Uuid;

/// Which side of a match (used when advancing a winner).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// A knockout match. First-round matches carry the seeded teams (or `None`
/// for a BYE); later rounds start as placeholders whose `source_home` /
/// `source_away` name the two previous-round matches that feed them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketMatch {
    pub id: BracketMatchId,
    pub home: Option<String>,
    pub away: Option<String>,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_home: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_away: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_home: Option<BracketMatchId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_away: Option<BracketMatchId>,
}

impl BracketMatch {
    /// First-round match: both slots known up front (team or BYE).
    pub fn new(home: Option<String>, away: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            home,
            away,
            status: MatchStatus::Scheduled,
            score_home: None,
            score_away: None,
            source_home: None,
            source_away: None,
        }
    }

    /// Later-round placeholder: empty slots, fed by two earlier matches.
    pub fn placeholder(source_home: BracketMatchId, source_away: BracketMatchId) -> Self {
        Self {
            source_home: Some(source_home),
            source_away: Some(source_away),
            ..Self::new(None, None)
        }
    }

    /// Enter a final score and mark the match `Done`. Same write boundary as
    /// `Match::record_result`; does not advance the winner (see `advance_winner`).
    pub fn record_result(&mut self, home: i64, away: i64) -> Result<(), FixtureError> {
        let (home, away) = validated_scores(home, away)?;
        self.score_home = Some(home);
        self.score_away = Some(away);
        self.status = MatchStatus::Done;
        Ok(())
    }
}

/// One named round of the bracket ("Quarter-Final", "Semi-Final", ...).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketRound {
    pub name: String,
    pub matches: Vec<BracketMatch>,
}

/// A full single-elimination bracket skeleton.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub rounds: Vec<BracketRound>,
    /// Number of rounds from first round to final (log2 of the padded size).
    #[serde(rename = "totalRounds")]
    pub depth: usize,
}
