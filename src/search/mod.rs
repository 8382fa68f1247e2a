//! Adversarial search
//!
//! Negamax with alpha-beta pruning, built on the board-flip symmetry so
//! every node is scored for the side to move.

pub mod negamax;

pub use negamax::{negamax, search_child, DEFAULT_DEPTH, INFINITY};
