//! Round-robin scheduling via the circle method.

use crate::models::{FixtureError, Match, Round};

/// Generate a round-robin schedule for `teams`; `double_leg` appends a
/// mirrored home-and-away second half.
///
/// Circle method:
/// 1. Pad with a BYE slot if the team count is odd.
/// 2. Fix the first team; the rest rotate one step per round.
/// 3. Each round pairs position `i` with position `n-1-i`; pairs touching the
///    BYE are dropped. Even rounds keep the natural orientation, odd rounds
///    swap home and away so venue counts stay balanced across the schedule.
///
/// Yields `n-1` rounds (`n` = team count rounded up to even), every unordered
/// pair exactly once per leg. All matches start `Scheduled`.
pub fn generate_round_robin(teams: &[String], double_leg: bool) -> Result<Vec<Round>, FixtureError> {
    if teams.len() < 2 {
        return Err(FixtureError::InvalidTeamCount {
            got: teams.len(),
            min: 2,
        });
    }

    // None is the BYE slot.
    let mut slots: Vec<Option<&str>> = teams.iter().map(|t| Some(t.as_str())).collect();
    if slots.len() % 2 != 0 {
        slots.push(None);
    }

    let n = slots.len();
    let fixed = slots[0];
    let mut rotating: Vec<Option<&str>> = slots[1..].to_vec();
    let mut rounds: Vec<Round> = Vec::with_capacity(n - 1);

    for r in 0..n - 1 {
        let mut current: Vec<Option<&str>> = Vec::with_capacity(n);
        current.push(fixed);
        current.extend(rotating.iter().copied());

        let mut matches = Vec::with_capacity(n / 2);
        for i in 0..n / 2 {
            let (Some(first), Some(second)) = (current[i], current[n - 1 - i]) else {
                continue; // BYE: no opponent this round
            };
            if r % 2 == 0 {
                matches.push(Match::new(first, second));
            } else {
                matches.push(Match::new(second, first));
            }
        }

        rounds.push(Round {
            ordinal: r + 1,
            matches,
        });

        // Rotate: last element moves to the front of the rotating list.
        if let Some(last) = rotating.pop() {
            rotating.insert(0, last);
        }
    }

    if double_leg {
        let first_leg = rounds.len();
        let second_leg: Vec<Round> = rounds
            .iter()
            .enumerate()
            .map(|(idx, round)| Round {
                ordinal: first_leg + idx + 1,
                matches: round
                    .matches
                    .iter()
                    .map(|m| Match {
                        home: m.away.clone(),
                        away: m.home.clone(),
                        ..m.clone()
                    })
                    .collect(),
            })
            .collect();
        rounds.extend(second_leg);
    }

    log::debug!(
        "Generated {} round(s) for {} team(s) (double_leg={})",
        rounds.len(),
        teams.len(),
        double_leg
    );
    Ok(rounds)
}
