//! Move-selection engine for either color
//!
//! The search itself only understands the canonical orientation, where
//! the side to move owns the black pieces. This module wraps it with the
//! game-facing concerns:
//!
//! - flip the board when the actual mover is red, and flip the pick back
//! - order root successors by static evaluation before searching them
//! - score every successor through the negamax recursion
//! - break ties among equal best successors with a seedable RNG
//!
//! # Example
//!
//! ```
//! use checkers::{Board, Color, Engine};
//!
//! let mut engine = Engine::from_seed(2, 42);
//! let board = Board::new();
//!
//! let result = engine.choose_move_with_stats(&board, Color::Black);
//! assert!(result.board.is_some());
//! println!("searched {} nodes in {}ms", result.nodes, result.time_ms);
//! ```

use std::cmp::Reverse;
use std::time::Instant;

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::{Board, Color};
use crate::eval::evaluate;
use crate::rules::successors;
use crate::search::{search_child, DEFAULT_DEPTH, INFINITY};

/// Result of a move search with statistics
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen successor position in the mover's original orientation;
    /// None when the mover has no legal move and has lost
    pub board: Option<Board>,
    /// Search score of the chosen successor, from the mover's side
    pub score: i32,
    /// Number of negamax calls made
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Move-selection engine.
///
/// Owns the look-ahead depth and the tie-break RNG. Seeded construction
/// makes a whole game reproducible move for move, which the tests lean
/// on; the RNG influences only which of several equal-valued successors
/// is returned, never their values.
pub struct Engine {
    /// Look-ahead budget in plies
    depth: i32,
    /// Tie-break randomness
    rng: Xoshiro256PlusPlus,
}

impl Engine {
    /// Create an engine with the default depth and an OS-seeded RNG.
    ///
    /// # Example
    ///
    /// ```
    /// use checkers::Engine;
    ///
    /// let engine = Engine::new();
    /// assert_eq!(engine.depth(), checkers::DEFAULT_DEPTH);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an engine with a custom depth and an OS-seeded RNG
    #[must_use]
    pub fn with_depth(depth: i32) -> Self {
        Self {
            depth,
            rng: Xoshiro256PlusPlus::from_os_rng(),
        }
    }

    /// Create a reproducible engine: custom depth, fixed tie-break seed
    #[must_use]
    pub fn from_seed(depth: i32, seed: u64) -> Self {
        Self {
            depth,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Configured look-ahead in plies
    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Pick a successor position for `mover`.
    ///
    /// # Arguments
    ///
    /// * `board` - Position to move from, in `mover`'s own orientation
    /// * `mover` - Side whose move it is
    ///
    /// # Returns
    ///
    /// The position after the chosen move, or `None` when the mover has
    /// no legal move and so has lost.
    ///
    /// # Example
    ///
    /// ```
    /// use checkers::{Board, Color, Engine};
    ///
    /// let mut engine = Engine::from_seed(2, 42);
    /// let board = Board::new();
    ///
    /// if let Some(next) = engine.choose_move(&board, Color::Black) {
    ///     println!("black plays {}", next);
    /// }
    /// ```
    #[must_use]
    pub fn choose_move(&mut self, board: &Board, mover: Color) -> Option<Board> {
        self.choose_move_with_stats(board, mover).board
    }

    /// Like [`Engine::choose_move`], with search statistics attached.
    pub fn choose_move_with_stats(&mut self, board: &Board, mover: Color) -> MoveResult {
        let started = Instant::now();

        // Into canonical orientation: the mover's pieces become black
        let canonical = match mover {
            Color::Black => *board,
            Color::Red => board.flipped(),
        };

        let mut children = successors(&canonical);
        // Statically promising successors first. Every successor is
        // searched with a full-width window, so this ordering cannot
        // change which one wins, only cache and pruning behavior in
        // the subtrees.
        children.sort_by_key(|child| Reverse(evaluate(child)));

        let mut nodes = 0;
        let mut best_score = -INFINITY;
        let mut best: Vec<Board> = Vec::new();
        for child in children {
            let value = search_child(&child, self.depth, -INFINITY, INFINITY, &mut nodes);
            trace!("candidate {} scores {}", child, value);
            if value > best_score || best.is_empty() {
                best_score = value;
                best.clear();
                best.push(child);
            } else if value == best_score {
                best.push(child);
            }
        }

        let board = if best.is_empty() {
            None
        } else {
            let pick = self.rng.random_range(0..best.len());
            let chosen = best.swap_remove(pick);
            Some(match mover {
                Color::Black => chosen,
                Color::Red => chosen.flipped(),
            })
        };

        let time_ms = started.elapsed().as_millis() as u64;
        debug!(
            "{} to move: depth {}, {} nodes, score {}, {}ms",
            mover, self.depth, nodes, best_score, time_ms
        );
        MoveResult {
            board,
            score: best_score,
            nodes,
            time_ms,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
