//! Fixture draw and standings engine: round-robin leagues, group-stage cups
//! with knockout brackets, and league tables derived from entered results.

pub mod logic;
pub mod models;

pub use logic::{
    advance_winner, compute_standings, draw_groups, generate_knockout_bracket,
    generate_round_robin, seed_cross_group, shuffle, suggest_group_counts, suggest_qualifiers,
};
pub use models::{
    Bracket, BracketMatch, BracketMatchId, BracketRound, FixtureError, Group, Match, MatchStatus,
    Outcome, Round, Side, StandingsRow, TournamentRecord,
};
