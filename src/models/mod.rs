//! Data structures for fixtures, brackets, standings, and the persisted record.

mod bracket;
mod fixture;
mod standings;
mod tournament;

pub use bracket::{Bracket, BracketMatch, BracketMatchId, BracketRound, Side};
pub use fixture::{Group, Match, MatchStatus, Round};
pub use standings::{Outcome, StandingsRow};
pub use tournament::{FixtureError, TournamentRecord};
