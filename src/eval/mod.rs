//! Position evaluation
//!
//! Static scoring consumed by the search at its leaves and by the root
//! driver when ordering successors.

pub mod material;

pub use material::{evaluate, KING_VALUE, MAN_VALUE};
