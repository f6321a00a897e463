//! Command-line fixture draw: prints a tournament record as JSON.
//! Run with: cargo run --bin draw -- league Arsenal Chelsea Spurs "West Ham"
//!       or: cargo run --bin draw -- cup 2 <eight or more teams...>
//! Pass --double before the league teams for home-and-away legs.
//! Set SEED (u64) in the env for a reproducible draw.

use matchday::{
    draw_groups, generate_knockout_bracket, generate_round_robin, seed_cross_group, shuffle,
    FixtureError, TournamentRecord,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;

/// Qualifiers per group for the CLI cup draw (top two advance).
const CUP_QUALIFIERS_PER_GROUP: usize = 2;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.split_first() {
        Some((cmd, rest)) if cmd == "league" => run_league(rest),
        Some((cmd, rest)) if cmd == "cup" => run_cup(rest),
        _ => {
            eprintln!("Usage: draw league [--double] <team> <team> [...]");
            eprintln!("       draw cup <num_groups> <team> <team> [...]");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(record) => match serde_json::to_string_pretty(&record) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to encode record: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_league(args: &[String]) -> Result<TournamentRecord, FixtureError> {
    let (double_leg, teams) = match args.split_first() {
        Some((flag, rest)) if flag == "--double" => (true, rest),
        _ => (false, args),
    };

    // Draw order first, then schedule, like the app's re-draw button.
    let mut rng = seeded_rng();
    let drawn = shuffle(teams, &mut rng);
    let rounds = generate_round_robin(&drawn, double_leg)?;
    log::info!("League draw: {} team(s), {} round(s)", drawn.len(), rounds.len());
    Ok(TournamentRecord::league(
        format!("{} Team League", drawn.len()),
        rounds,
    ))
}

fn run_cup(args: &[String]) -> Result<TournamentRecord, FixtureError> {
    let Some((num_groups, teams)) = args.split_first() else {
        return Err(FixtureError::InvalidGroupCount { got: 0 });
    };
    let num_groups: usize = num_groups
        .parse()
        .map_err(|_| FixtureError::InvalidGroupCount { got: 0 })?;

    let mut rng = seeded_rng();
    let groups = draw_groups(teams, num_groups, &mut rng)?;
    let seeding = seed_cross_group(&groups, CUP_QUALIFIERS_PER_GROUP);
    let bracket = generate_knockout_bracket(&seeding)?;
    log::info!(
        "Cup draw: {} team(s), {} group(s), bracket depth {}",
        teams.len(),
        num_groups,
        bracket.depth
    );
    Ok(TournamentRecord::cup(
        format!("{} Teams Cup", teams.len()),
        groups,
        bracket,
    ))
}

/// RNG from the SEED env var when set, otherwise from entropy.
fn seeded_rng() -> StdRng {
    match std::env::var("SEED").ok().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => {
            log::info!("Using fixed seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
