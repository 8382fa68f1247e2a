//! Self-play demo binary
//!
//! Plays the engine against itself from the standard starting position
//! (or one given on the command line), printing each move until a side
//! has no reply or the move budget runs out.

use anyhow::{Context, Result};
use clap::Parser;

use checkers::{Board, Color, Engine, DEFAULT_DEPTH};

#[derive(Parser, Debug)]
#[command(author, version, about = "Checkers engine self-play demo")]
struct Cli {
    /// Look-ahead depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: i32,

    /// Tie-break RNG seed; omitted means a fresh OS-seeded game
    #[arg(long)]
    seed: Option<u64>,

    /// Call the game a draw after this many moves
    #[arg(long, default_value_t = 200)]
    max_moves: u32,

    /// Starting position as a 32-character board string, black to move
    #[arg(long)]
    position: Option<String>,

    /// Print only the move list, without board diagrams
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut board = match &cli.position {
        Some(text) => text.parse::<Board>().context("invalid --position")?,
        None => Board::new(),
    };
    let mut engine = match cli.seed {
        Some(seed) => Engine::from_seed(cli.depth, seed),
        None => Engine::with_depth(cli.depth),
    };

    if !cli.quiet {
        println!("{}\n", board.to_diagram());
    }

    let mut mover = Color::Black;
    for move_number in 1..=cli.max_moves {
        let result = engine.choose_move_with_stats(&board, mover);
        let Some(next) = result.board else {
            println!("{} wins.", mover.opponent());
            return Ok(());
        };
        println!(
            "{:3}. {} plays {}  (score {}, {} nodes, {}ms)",
            move_number, mover, next, result.score, result.nodes, result.time_ms
        );
        if !cli.quiet {
            println!("{}\n", next.to_diagram());
        }
        board = next;
        mover = mover.opponent();
    }

    println!("draw.");
    Ok(())
}
