//! Fixture generation and standings: scheduler, group draw, knockout, table.

mod group_draw;
mod knockout;
mod round_robin;
mod shuffle;
mod standings;

pub use group_draw::{draw_groups, suggest_group_counts, suggest_qualifiers};
pub use knockout::{advance_winner, generate_knockout_bracket, seed_cross_group};
pub use round_robin::generate_round_robin;
pub use shuffle::shuffle;
pub use standings::compute_standings;
