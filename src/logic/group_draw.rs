//! Group stage: random draw into labeled groups with intra-group fixtures.

use crate::logic::round_robin::generate_round_robin;
use crate::logic::shuffle::shuffle;
use crate::models::{FixtureError, Group};
use rand::Rng;

/// Largest group count the draw supports (labels run Group A..Group H).
const MAX_GROUPS: usize = 8;

/// Shuffle `teams` and deal them into `num_groups` groups, then generate
/// single-leg round-robin fixtures inside each group.
///
/// The deal is cyclic: shuffled team `k` lands in group `k % num_groups`, so
/// group sizes differ by at most one. It is deliberately not seeded or
/// serpentine; the shuffle is the whole draw.
pub fn draw_groups<R: Rng>(
    teams: &[String],
    num_groups: usize,
    rng: &mut R,
) -> Result<Vec<Group>, FixtureError> {
    if num_groups < 2 || num_groups > MAX_GROUPS {
        return Err(FixtureError::InvalidGroupCount { got: num_groups });
    }
    if teams.len() < num_groups * 2 {
        return Err(FixtureError::InvalidTeamCount {
            got: teams.len(),
            min: num_groups * 2,
        });
    }

    let shuffled = shuffle(teams, rng);

    let mut groups: Vec<Group> = (0..num_groups)
        .map(|i| Group {
            label: format!("Group {}", (b'A' + i as u8) as char),
            teams: Vec::new(),
            fixtures: Vec::new(),
        })
        .collect();

    for (idx, team) in shuffled.into_iter().enumerate() {
        groups[idx % num_groups].teams.push(team);
    }

    for group in &mut groups {
        group.fixtures = generate_round_robin(&group.teams, false)?;
    }

    log::debug!(
        "Drew {} team(s) into {} group(s)",
        teams.len(),
        num_groups
    );
    Ok(groups)
}

/// Group counts that work for `team_count`: every `g` in `[2, min(count/2, 8)]`
/// with at least two teams per group. Falls back to `[2]` when nothing fits.
pub fn suggest_group_counts(team_count: usize) -> Vec<usize> {
    let max_g = (team_count / 2).min(MAX_GROUPS);
    let options: Vec<usize> = (2..=max_g).filter(|g| team_count >= g * 2).collect();
    if options.is_empty() {
        vec![2]
    } else {
        options
    }
}

/// Qualifiers-per-group counts that yield a usable knockout field: every `q`
/// in `[1, min(teams_per_group - 1, 4)]` with at least two total qualifiers.
/// Falls back to `[1]`.
pub fn suggest_qualifiers(num_groups: usize, teams_per_group: usize) -> Vec<usize> {
    let max_q = teams_per_group.saturating_sub(1).min(4);
    let options: Vec<usize> = (1..=max_q).filter(|q| q * num_groups >= 2).collect();
    if options.is_empty() {
        vec![1]
    } else {
        options
    }
}
