//! Self-play demo: both seats driven by the candidate search
//!
//! Plays one full game against itself through the same request interface a
//! real front end would use, printing each committed move and the final
//! statistics. Run with `RUST_LOG=debug` for search internals.

use tracing_subscriber::EnvFilter;
use wordgrid::{
    ai, DictionaryIndex, Difficulty, GameState, MoveRequest, Player, TurnOutcome,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dict = DictionaryIndex::embedded().clone();
    let mut game = GameState::new(dict, Difficulty::Hard);
    let mut rng = rand::rng();

    while !game.is_over() {
        // the "human" seat: search its rack and submit the best move as a
        // plain request, the way an input layer would
        let candidates =
            ai::find_candidates(game.board(), DictionaryIndex::embedded(), game.rack(Player::Human));
        let outcome = match ai::choose(&candidates, Difficulty::Hard, &mut rng) {
            Some(candidate) => game.place(&MoveRequest {
                row: candidate.row,
                col: candidate.col,
                axis: candidate.axis,
                tiles: candidate.tiles.clone(),
            }),
            None => {
                let letters = game.rack(Player::Human).letters();
                match game.exchange(&letters) {
                    TurnOutcome::Rejected(_) => game.pass(),
                    exchanged => exchanged,
                }
            }
        };
        report(&outcome);
        if game.is_over() {
            break;
        }

        report(&game.computer_turn());
    }

    println!("{}", game.board());
    for stats in game.final_stats() {
        println!(
            "{:?}: {} points, {} tiles placed, {} points per round",
            stats.player, stats.score, stats.tiles_placed, stats.average_per_round
        );
    }
}

fn report(outcome: &TurnOutcome) {
    match outcome {
        TurnOutcome::Placed(report) => {
            let word: String = report.cells.iter().map(|cell| cell.letter).collect();
            println!(
                "{:?} played \"{word}\" for {} ({} total)",
                report.player, report.score, report.total_score
            );
        }
        TurnOutcome::Exchanged => println!("exchanged tiles"),
        TurnOutcome::Passed => println!("passed"),
        TurnOutcome::Rejected(rejection) => println!("rejected: {}", rejection.message()),
    }
}
