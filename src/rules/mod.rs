//! Game rules for checkers
//!
//! This module implements move legality:
//! - Adjacency tables derived from the 8x8 diagonal geometry
//! - Ordinary steps and multi-jump capture chains
//! - The forced-capture rule (captures preempt all other moves)

pub mod movegen;
pub mod tables;

// Re-exports for convenient access
pub use movegen::{apply, has_jump, jump_moves, step_moves, successors, JumpChain, Move};
pub use tables::{tables, Jump, MoveTables};
