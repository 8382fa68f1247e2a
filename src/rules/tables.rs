//! Diagonal adjacency tables for the 32-square topology
//!
//! The four relations below are topology constants derived from the 8x8
//! geometry: single diagonal steps and two-square capturing hops, each in
//! both directions. They are built once on first use and shared read-only;
//! per-game state never touches them.

use once_cell::sync::Lazy;

use crate::board::{Square, NUM_SQUARES};

/// One capturing hop: from `from` over the captured square to `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    pub from: Square,
    pub over: Square,
    pub to: Square,
}

/// The four adjacency relations, in ascending source order
#[derive(Debug)]
pub struct MoveTables {
    /// Diagonal steps toward the opponent's back rank
    pub forward_moves: Vec<(Square, Square)>,
    /// Diagonal steps toward the mover's own back rank (kings only)
    pub backward_moves: Vec<(Square, Square)>,
    /// Capturing hops toward the opponent's back rank
    pub forward_jumps: Vec<Jump>,
    /// Capturing hops toward the mover's own back rank (kings only)
    pub backward_jumps: Vec<Jump>,
}

impl MoveTables {
    fn build() -> Self {
        let mut tables = Self {
            forward_moves: Vec::new(),
            backward_moves: Vec::new(),
            forward_jumps: Vec::new(),
            backward_jumps: Vec::new(),
        };
        for index in 0..NUM_SQUARES {
            let from = Square::new(index);
            let (row, file) = (from.row() as i32, from.file() as i32);
            for df in [-1, 1] {
                if let Some(to) = Square::from_coords(row + 1, file + df) {
                    tables.forward_moves.push((from, to));
                }
                if let Some(to) = Square::from_coords(row - 1, file + df) {
                    tables.backward_moves.push((from, to));
                }
                if let (Some(over), Some(to)) = (
                    Square::from_coords(row + 1, file + df),
                    Square::from_coords(row + 2, file + 2 * df),
                ) {
                    tables.forward_jumps.push(Jump { from, over, to });
                }
                if let (Some(over), Some(to)) = (
                    Square::from_coords(row - 1, file + df),
                    Square::from_coords(row - 2, file + 2 * df),
                ) {
                    tables.backward_jumps.push(Jump { from, over, to });
                }
            }
        }
        tables
    }

    /// Forward hops starting on `from`
    pub fn forward_jumps_from(&self, from: Square) -> impl Iterator<Item = &Jump> {
        self.forward_jumps.iter().filter(move |jump| jump.from == from)
    }

    /// Backward hops starting on `from`
    pub fn backward_jumps_from(&self, from: Square) -> impl Iterator<Item = &Jump> {
        self.backward_jumps.iter().filter(move |jump| jump.from == from)
    }
}

static TABLES: Lazy<MoveTables> = Lazy::new(MoveTables::build);

/// Shared adjacency tables, built on first use
#[inline]
pub fn tables() -> &'static MoveTables {
    &TABLES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(index: usize) -> Square {
        Square::new(index)
    }

    fn jump(from: usize, over: usize, to: usize) -> Jump {
        Jump {
            from: sq(from),
            over: sq(over),
            to: sq(to),
        }
    }

    #[test]
    fn test_table_sizes() {
        let t = tables();
        assert_eq!(t.forward_moves.len(), 49);
        assert_eq!(t.backward_moves.len(), 49);
        assert_eq!(t.forward_jumps.len(), 36);
        assert_eq!(t.backward_jumps.len(), 36);
    }

    #[test]
    fn test_known_step_entries() {
        let t = tables();
        assert_eq!(t.forward_moves[0], (sq(0), sq(4)));
        assert_eq!(t.forward_moves[1], (sq(0), sq(5)));
        assert_eq!(*t.forward_moves.last().unwrap(), (sq(27), sq(31)));
        assert_eq!(t.backward_moves[0], (sq(4), sq(0)));
        assert_eq!(t.backward_moves[1], (sq(5), sq(0)));
        // The edge squares of a row have a single diagonal neighbor
        assert_eq!(
            t.forward_moves.iter().filter(|&&(from, _)| from == sq(3)).count(),
            1
        );
    }

    #[test]
    fn test_known_jump_entries() {
        let t = tables();
        assert_eq!(t.forward_jumps[0], jump(0, 5, 9));
        assert!(t.forward_jumps.contains(&jump(21, 24, 28)));
        assert!(t.forward_jumps.contains(&jump(22, 25, 29)));
        assert_eq!(t.backward_jumps[0], jump(8, 5, 1));
        assert!(t.backward_jumps.contains(&jump(30, 26, 23)));
        assert!(t.backward_jumps.contains(&jump(29, 24, 20)));
    }

    #[test]
    fn test_backward_tables_mirror_forward() {
        let t = tables();
        for &(from, to) in &t.forward_moves {
            assert!(t.backward_moves.contains(&(to, from)));
        }
        for j in &t.forward_jumps {
            assert!(t.backward_jumps.contains(&Jump {
                from: j.to,
                over: j.over,
                to: j.from,
            }));
        }
    }

    #[test]
    fn test_jump_sources_stay_clear_of_far_rows() {
        let t = tables();
        // A forward hop spans two rows, so none can start past row 5
        assert!(t.forward_jumps.iter().all(|j| j.from.row() <= 5));
        assert!(t.backward_jumps.iter().all(|j| j.from.row() >= 2));
    }

    #[test]
    fn test_filtered_accessors() {
        let t = tables();
        let from_zero: Vec<Jump> = t.forward_jumps_from(sq(0)).copied().collect();
        assert_eq!(from_zero, vec![jump(0, 5, 9)]);
        let from_thirty: Vec<Jump> = t.backward_jumps_from(sq(30)).copied().collect();
        assert_eq!(from_thirty, vec![jump(30, 25, 21), jump(30, 26, 23)]);
    }
}
