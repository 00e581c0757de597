//! Reversi engine CLI
//!
//! Plays a full game between two AI tiers and prints every move.
//! Set `RUST_LOG=debug` to see search statistics.

use clap::Parser;

use reversi::{AIEngine, Difficulty, GameEvent, GameMode, GameState, Side};

#[derive(Parser, Debug)]
#[command(name = "reversi", version, about = "Reversi engine self-play demo")]
struct Args {
    /// Tier for Black: 1/random, 2/greedy, 3/minimax
    #[arg(long, default_value = "minimax")]
    black: Difficulty,

    /// Tier for White: 1/random, 2/greedy, 3/minimax
    #[arg(long, default_value = "greedy")]
    white: Difficulty,

    /// Minimax depth in plies (1 or more)
    #[arg(
        long,
        default_value_t = reversi::engine::DEFAULT_SEARCH_DEPTH,
        value_parser = clap::value_parser!(u8).range(1..)
    )]
    depth: u8,

    /// RNG seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the final result
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut engine = AIEngine::with_config(args.depth, args.seed);
    let mut game = GameState::new(GameMode::PvP);

    println!("===========================================");
    println!("  Reversi: Black ({}) vs White ({})", args.black, args.white);
    println!("===========================================\n");

    while let Some(side) = game.side_to_move() {
        let tier = match side {
            Side::Black => args.black,
            Side::White => args.white,
        };

        let Some(outcome) = game.play_ai_turn(&mut engine, tier)? else {
            // The controller only hands the turn to a side that can move
            break;
        };

        if !args.quiet {
            println!(
                "{:>2}. {} plays {} flipping {}",
                game.history().len(),
                outcome.side,
                outcome.pos,
                outcome.flips.len()
            );
            println!("{}", game.board());
            for event in &outcome.events {
                if let GameEvent::Pass(passer) = event {
                    println!("    {} has no move and passes\n", passer);
                }
            }
        }
    }

    let score = game.score();
    println!("Final: {}", score);
    if let Some(result) = game.winner() {
        println!("Result: {}", result);
    }
    Ok(())
}
