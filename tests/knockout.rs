//! Tests for the knockout bracket builder, cross-group seeding, and
//! manual winner advancement.

use matchday::{
    advance_winner, generate_knockout_bracket, seed_cross_group, Bracket, FixtureError, Group,
    MatchStatus, Side,
};

fn slots(names: &[&str]) -> Vec<Option<String>> {
    names.iter().map(|s| Some(s.to_string())).collect()
}

fn group(label: &str, team_count: usize) -> Group {
    Group {
        label: label.to_string(),
        teams: (0..team_count).map(|i| format!("{label} team {i}")).collect(),
        fixtures: Vec::new(),
    }
}

fn total_matches(bracket: &Bracket) -> usize {
    bracket.rounds.iter().map(|r| r.matches.len()).sum()
}

#[test]
fn five_qualifiers_pad_to_eight() {
    let bracket = generate_knockout_bracket(&slots(&["A", "B", "C", "D", "E"])).unwrap();

    assert_eq!(bracket.depth, 3);
    let names: Vec<&str> = bracket.rounds.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Quarter-Final", "Semi-Final", "Final"]);

    let first = &bracket.rounds[0];
    assert_eq!(first.matches.len(), 4);
    // Slots reproduce the seeding order exactly, BYEs at the tail.
    let flattened: Vec<Option<String>> = first
        .matches
        .iter()
        .flat_map(|m| [m.home.clone(), m.away.clone()])
        .collect();
    let mut expected = slots(&["A", "B", "C", "D", "E"]);
    expected.resize(8, None);
    assert_eq!(flattened, expected);

    let with_a_team = first
        .matches
        .iter()
        .filter(|m| m.home.is_some() || m.away.is_some())
        .count();
    assert_eq!(with_a_team, 3);
}

#[test]
fn match_counts_halve_and_total_is_padded_size_minus_one() {
    for k in [2usize, 3, 6, 9, 16] {
        let input: Vec<Option<String>> = (0..k).map(|i| Some(format!("T{i}"))).collect();
        let bracket = generate_knockout_bracket(&input).unwrap();

        let padded = k.next_power_of_two();
        assert_eq!(total_matches(&bracket), padded - 1, "{k} qualifiers");
        assert_eq!(bracket.rounds[0].matches.len(), padded / 2, "{k} qualifiers");
        for pair in bracket.rounds.windows(2) {
            assert_eq!(pair[1].matches.len(), pair[0].matches.len() / 2);
        }
        assert_eq!(bracket.rounds.last().unwrap().name, "Final");
    }
}

#[test]
fn sixteen_slots_use_round_of_n_naming() {
    let input: Vec<Option<String>> = (0..16).map(|i| Some(format!("T{i}"))).collect();
    let bracket = generate_knockout_bracket(&input).unwrap();
    let names: Vec<&str> = bracket.rounds.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Round of 16", "Quarter-Final", "Semi-Final", "Final"]
    );
}

#[test]
fn placeholders_link_to_their_two_feeder_matches() {
    let bracket =
        generate_knockout_bracket(&slots(&["A", "B", "C", "D", "E", "F", "G", "H"])).unwrap();

    for r in 1..bracket.rounds.len() {
        let feeders = &bracket.rounds[r - 1].matches;
        for (m, placeholder) in bracket.rounds[r].matches.iter().enumerate() {
            assert_eq!(placeholder.home, None);
            assert_eq!(placeholder.away, None);
            assert_eq!(placeholder.status, MatchStatus::Scheduled);
            assert_eq!(placeholder.source_home, Some(feeders[2 * m].id));
            assert_eq!(placeholder.source_away, Some(feeders[2 * m + 1].id));
        }
    }
}

#[test]
fn fewer_than_two_slots_is_rejected() {
    assert!(matches!(
        generate_knockout_bracket(&slots(&["A"])),
        Err(FixtureError::InvalidBracketInput { got: 1 })
    ));
    assert!(matches!(
        generate_knockout_bracket(&[]),
        Err(FixtureError::InvalidBracketInput { got: 0 })
    ));
}

#[test]
fn advancing_a_winner_fills_the_next_round_slot() {
    let bracket = generate_knockout_bracket(&slots(&["A", "B", "C", "D"])).unwrap();

    let after_first = advance_winner(&bracket, 0, 0, Side::Home).unwrap();
    assert_eq!(
        after_first.rounds[1].matches[0].home,
        Some("A".to_string())
    );
    assert_eq!(after_first.rounds[1].matches[0].away, None);

    let after_second = advance_winner(&after_first, 0, 1, Side::Away).unwrap();
    assert_eq!(
        after_second.rounds[1].matches[0].away,
        Some("D".to_string())
    );

    // The input bracket is never mutated.
    assert_eq!(bracket.rounds[1].matches[0].home, None);
    assert_eq!(bracket.rounds[1].matches[0].away, None);
}

#[test]
fn advancing_out_of_the_final_is_rejected() {
    let bracket = generate_knockout_bracket(&slots(&["A", "B"])).unwrap();
    assert_eq!(
        advance_winner(&bracket, 0, 0, Side::Home),
        Err(FixtureError::MatchNotFound {
            round: 1,
            match_idx: 0
        })
    );
}

#[test]
fn advancing_an_unknown_match_is_rejected() {
    let bracket = generate_knockout_bracket(&slots(&["A", "B", "C", "D"])).unwrap();
    assert_eq!(
        advance_winner(&bracket, 5, 0, Side::Home),
        Err(FixtureError::MatchNotFound {
            round: 5,
            match_idx: 0
        })
    );
    assert_eq!(
        advance_winner(&bracket, 0, 7, Side::Home),
        Err(FixtureError::MatchNotFound {
            round: 0,
            match_idx: 7
        })
    );
}

#[test]
fn advancing_an_empty_slot_is_rejected() {
    let bracket = generate_knockout_bracket(&[Some("A".to_string()), None]).unwrap();
    assert_eq!(
        advance_winner(&bracket, 0, 0, Side::Away),
        Err(FixtureError::UnresolvedSlot {
            round: 0,
            match_idx: 0
        })
    );
}

#[test]
fn bracket_matches_take_scores_like_any_other_match() {
    let mut bracket = generate_knockout_bracket(&slots(&["A", "B", "C", "D"])).unwrap();
    let m = &mut bracket.rounds[0].matches[0];

    assert!(matches!(
        m.record_result(1, -3),
        Err(FixtureError::InvalidScore { home: 1, away: -3 })
    ));
    m.record_result(2, 1).unwrap();
    assert_eq!(m.status, MatchStatus::Done);
    assert_eq!((m.score_home, m.score_away), (Some(2), Some(1)));
}

#[test]
fn cross_group_seeding_pairs_winners_with_runners_up() {
    let groups = vec![group("Group A", 4), group("Group B", 4)];
    let seeding = seed_cross_group(&groups, 2);
    assert_eq!(
        seeding,
        vec![
            Some("Group A #1".to_string()),
            Some("Group B #2".to_string()),
            Some("Group B #1".to_string()),
            Some("Group A #2".to_string()),
        ]
    );
}

#[test]
fn cross_group_seeding_feeds_a_clean_bracket() {
    let groups = vec![
        group("Group A", 3),
        group("Group B", 3),
        group("Group C", 3),
        group("Group D", 3),
    ];
    let seeding = seed_cross_group(&groups, 2);
    assert_eq!(seeding.len(), 8);

    let bracket = generate_knockout_bracket(&seeding).unwrap();
    assert_eq!(bracket.depth, 3);
    assert_eq!(total_matches(&bracket), 7);
}
