//! League table computation from completed matches.

use crate::models::{Match, MatchStatus, Outcome, StandingsRow};
use std::collections::HashMap;

/// Fold completed matches into a ranked table.
///
/// Input order matters only for the form trail: pass matches in the order
/// they were completed (round order, then in-round order). Every named team
/// gets a row, zeroed if it has not played. Only `Done` matches with both
/// scores count; anything else is skipped so a half-entered tournament still
/// produces a table.
///
/// Ranking: points, then goal difference, then goals for, all descending;
/// remaining ties keep first-seen order (the sort is stable).
pub fn compute_standings(matches: &[Match]) -> Vec<StandingsRow> {
    // Register every named team in discovery order.
    let mut order: Vec<String> = Vec::new();
    let mut table: HashMap<String, StandingsRow> = HashMap::new();
    for m in matches {
        for name in [&m.home, &m.away].into_iter().flatten() {
            if !table.contains_key(name) {
                order.push(name.clone());
                table.insert(name.clone(), StandingsRow::new(name.clone()));
            }
        }
    }

    for m in matches {
        if m.status != MatchStatus::Done {
            continue;
        }
        let (Some(home), Some(away)) = (&m.home, &m.away) else {
            continue;
        };
        let (Some(score_home), Some(score_away)) = (m.score_home, m.score_away) else {
            continue;
        };
        // Unregistered names cannot happen for matches in this input, but a
        // caller mixing match sets must not crash the table.
        if !table.contains_key(home) || !table.contains_key(away) {
            continue;
        }

        let (home_outcome, away_outcome) = if score_home > score_away {
            (Outcome::Win, Outcome::Loss)
        } else if score_home == score_away {
            (Outcome::Draw, Outcome::Draw)
        } else {
            (Outcome::Loss, Outcome::Win)
        };

        if let Some(row) = table.get_mut(home) {
            apply(row, score_home, score_away, home_outcome);
        }
        if let Some(row) = table.get_mut(away) {
            apply(row, score_away, score_home, away_outcome);
        }
    }

    let mut rows: Vec<StandingsRow> = order
        .into_iter()
        .filter_map(|name| table.remove(&name))
        .map(|mut row| {
            // Full history stays in the accumulator; only the last five
            // outcomes are exposed.
            if row.form.len() > 5 {
                row.form.drain(..row.form.len() - 5);
            }
            row
        })
        .collect();

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference().cmp(&a.goal_difference()))
            .then(b.goals_for.cmp(&a.goals_for))
    });
    rows
}

/// Credit one completed match to one team's row.
fn apply(row: &mut StandingsRow, scored: u32, conceded: u32, outcome: Outcome) {
    row.played += 1;
    row.goals_for += scored;
    row.goals_against += conceded;
    match outcome {
        Outcome::Win => {
            row.won += 1;
            row.points += 3;
        }
        Outcome::Draw => {
            row.drawn += 1;
            row.points += 1;
        }
        Outcome::Loss => row.lost += 1,
    }
    row.form.push(outcome);
}
