//! Knockout stage: bracket construction, cross-group seeding, winner advance.

use crate::models::{Bracket, BracketMatch, BracketRound, FixtureError, Group, Side};

/// Build a single-elimination bracket skeleton from an ordered seeding.
///
/// The input order is the seeding; this function never reorders it. Slots are
/// padded with BYEs (`None`) up to the next power of two, so a bracket of
/// `P` slots always has `P - 1` matches across `log2(P)` rounds. First-round
/// matches pair consecutive slots; later rounds are empty placeholders linked
/// to the two matches that feed them. Winners are advanced separately (see
/// `advance_winner`), never here.
pub fn generate_knockout_bracket(seeded_slots: &[Option<String>]) -> Result<Bracket, FixtureError> {
    if seeded_slots.len() < 2 {
        return Err(FixtureError::InvalidBracketInput {
            got: seeded_slots.len(),
        });
    }

    let padded = seeded_slots.len().next_power_of_two();
    let depth = padded.trailing_zeros() as usize;
    let mut slots = seeded_slots.to_vec();
    slots.resize(padded, None);

    let names = round_names(depth);
    let first_round: Vec<BracketMatch> = slots
        .chunks(2)
        .map(|pair| BracketMatch::new(pair[0].clone(), pair[1].clone()))
        .collect();

    let mut rounds = vec![BracketRound {
        name: names[0].clone(),
        matches: first_round,
    }];

    for r in 1..depth {
        let feeders = &rounds[r - 1].matches;
        let matches: Vec<BracketMatch> = (0..feeders.len() / 2)
            .map(|m| BracketMatch::placeholder(feeders[2 * m].id, feeders[2 * m + 1].id))
            .collect();
        rounds.push(BracketRound {
            name: names[r].clone(),
            matches,
        });
    }

    log::debug!(
        "Built bracket: {} slot(s) padded to {}, {} round(s)",
        seeded_slots.len(),
        padded,
        depth
    );
    Ok(Bracket { rounds, depth })
}

/// Round names by distance to the final: Final, Semi-Final, Quarter-Final,
/// then "Round of N".
fn round_names(depth: usize) -> Vec<String> {
    (0..depth)
        .map(|i| {
            let remaining = depth - i;
            match remaining {
                1 => "Final".to_string(),
                2 => "Semi-Final".to_string(),
                3 => "Quarter-Final".to_string(),
                _ => format!("Round of {}", 1usize << remaining),
            }
        })
        .collect()
}

/// Seeding order for the knockout stage of a cup: qualifier placeholder
/// labels ("Group A #1", ...) paired across groups so each winner meets the
/// neighboring group's runner-up (A1 vs B2, B1 vs A2, then C/D, ...).
///
/// An odd group count pairs the last group against itself; a rank a group
/// cannot fill falls back to that group's top qualifier; a group with no
/// teams at all yields BYE slots. The result feeds `generate_knockout_bracket`
/// unchanged; the real team names replace the labels once the group stage is
/// settled.
pub fn seed_cross_group(groups: &[Group], qualifiers_per_group: usize) -> Vec<Option<String>> {
    let by_group: Vec<Vec<String>> = groups
        .iter()
        .map(|g| {
            (0..qualifiers_per_group.min(g.teams.len()))
                .map(|q| format!("{} #{}", g.label, q + 1))
                .collect()
        })
        .collect();

    let mut slots: Vec<Option<String>> = Vec::new();
    for pair in by_group.chunks(2) {
        let first = &pair[0];
        let second = pair.get(1).unwrap_or(first);
        for q in 0..qualifiers_per_group {
            let opposite = qualifiers_per_group - 1 - q;
            if q % 2 == 0 {
                slots.push(qualifier_at(first, q));
                slots.push(qualifier_at(second, opposite));
            } else {
                slots.push(qualifier_at(second, opposite));
                slots.push(qualifier_at(first, q));
            }
        }
    }
    slots
}

/// Label at `rank`, falling back to the group's top qualifier.
fn qualifier_at(labels: &[String], rank: usize) -> Option<String> {
    labels.get(rank).or_else(|| labels.first()).cloned()
}

/// Copy `bracket` with the winner of match `(round_idx, match_idx)` written
/// into its slot in the next round.
///
/// `side` names the winning side explicitly; nothing is inferred from scores.
/// Match `m` feeds match `m / 2` of the next round, home slot when `m` is
/// even, away when odd. The input bracket is never touched: validation
/// failures return an error and no bracket.
pub fn advance_winner(
    bracket: &Bracket,
    round_idx: usize,
    match_idx: usize,
    side: Side,
) -> Result<Bracket, FixtureError> {
    let source = bracket
        .rounds
        .get(round_idx)
        .and_then(|r| r.matches.get(match_idx))
        .ok_or(FixtureError::MatchNotFound {
            round: round_idx,
            match_idx,
        })?;

    let winner = match side {
        Side::Home => source.home.clone(),
        Side::Away => source.away.clone(),
    }
    .ok_or(FixtureError::UnresolvedSlot {
        round: round_idx,
        match_idx,
    })?;

    let next_round = round_idx + 1;
    let next_idx = match_idx / 2;
    let mut advanced = bracket.clone();
    let target = advanced
        .rounds
        .get_mut(next_round)
        .and_then(|r| r.matches.get_mut(next_idx))
        .ok_or(FixtureError::MatchNotFound {
            round: next_round,
            match_idx: next_idx,
        })?;

    if match_idx % 2 == 0 {
        target.home = Some(winner);
    } else {
        target.away = Some(winner);
    }
    Ok(advanced)
}
