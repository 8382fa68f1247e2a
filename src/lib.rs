//! Checkers engine with forced-capture rules
//!
//! A decision engine for a draughts variant on the 32 dark squares of
//! an 8x8 board:
//! - Captures are compulsory: when a jump exists, quiet steps are illegal
//! - Jumps chain until no further capture is available
//! - Men move forward only; kings move and capture both ways
//! - A man reaching the far rank is crowned, mid-jump included
//! - A player with no legal move loses
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Compact 32-cell board representation and text formats
//! - [`rules`]: Move generation (steps, jump chains, forced capture)
//! - [`eval`]: Material evaluation
//! - [`search`]: Negamax with alpha-beta pruning
//! - [`engine`]: Move selection for either color with tie-break RNG
//!
//! # Quick Start
//!
//! ```
//! use checkers::{Board, Color, Engine};
//!
//! // Shallow depth and a fixed seed keep the doc test quick
//! let mut engine = Engine::from_seed(2, 7);
//! let board = Board::new();
//!
//! // Engine answers for black from the standard starting position
//! if let Some(next) = engine.choose_move(&board, Color::Black) {
//!     println!("{}", next.to_diagram());
//! }
//! ```
//!
//! # Orientation
//!
//! The rules and search only ever score the side to move as black. The
//! board flip is an involution that reverses the square order and swaps
//! the colors, so a red decision is a black decision on the flipped
//! board, flipped back. [`Engine`] does that bookkeeping; callers just
//! pass the mover's [`Color`].

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Color, ParseBoardError, Square, NUM_SQUARES};
pub use engine::{Engine, MoveResult};
pub use eval::evaluate;
pub use rules::{has_jump, successors, JumpChain, Move};
pub use search::{negamax, search_child, DEFAULT_DEPTH, INFINITY};
