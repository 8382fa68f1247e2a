//! Material evaluation for checkers positions
//!
//! A position is scored by raw piece count in the canonical orientation:
//! black material minus red material, with kings weighted above men.

use crate::board::{Board, Cell, Color};

/// Value of an unpromoted man
pub const MAN_VALUE: i32 = 20;
/// Value of a king
pub const KING_VALUE: i32 = 30;

/// Evaluate the board for the canonical mover (black).
///
/// Positive scores favor black, negative favor red. The function is
/// antisymmetric under the flip transform,
/// `evaluate(b) == -evaluate(&b.flipped())`, which negamax relies on
/// when it negates child scores.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    board
        .cells()
        .map(|cell| match cell {
            Cell::Empty => 0,
            Cell::Man(Color::Black) => MAN_VALUE,
            Cell::King(Color::Black) => KING_VALUE,
            Cell::Man(Color::Red) => -MAN_VALUE,
            Cell::King(Color::Red) => -KING_VALUE,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        Board::parse(text).unwrap()
    }

    #[test]
    fn test_starting_position_is_level() {
        assert_eq!(evaluate(&Board::new()), 0);
        assert_eq!(evaluate(&Board::empty()), 0);
    }

    #[test]
    fn test_material_count() {
        // Three black men and a black king against four red men
        let b = board("     b   r     b  r  b  r r   B ");
        assert_eq!(evaluate(&b), 3 * MAN_VALUE + KING_VALUE - 4 * MAN_VALUE);

        let b = board("bb      R                       ");
        assert_eq!(evaluate(&b), 2 * MAN_VALUE - KING_VALUE);
    }

    #[test]
    fn test_antisymmetric_under_flip() {
        for text in [
            "bbbbbbbbbbbb        rrrrrrrrrrrr",
            "     b   r     b  r  b  r r   B ",
            "                rrR     rrR  B  ",
            "b                               ",
        ] {
            let b = board(text);
            assert_eq!(evaluate(&b), -evaluate(&b.flipped()));
        }
    }

    #[test]
    fn test_kings_outweigh_men() {
        let king = board("B                               ");
        let man = board("b                               ");
        assert!(evaluate(&king) > evaluate(&man));
    }
}
