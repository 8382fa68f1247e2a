//! Negamax search with alpha-beta pruning
//!
//! The recursion works entirely in the canonical orientation: each level
//! flips the board so the side to move always owns the black pieces, and
//! negates the child's score on the way back up. Depth runs out only on
//! quiet positions; while a capture is pending the search keeps extending
//! until the tactics resolve.

use crate::board::Board;
use crate::eval::evaluate;
use crate::rules::{has_jump, successors};

/// Score bound for the alpha-beta window. A mover with no reply scores
/// the full negative bound.
pub const INFINITY: i32 = 99_999;

/// Default look-ahead in plies
pub const DEFAULT_DEPTH: i32 = 4;

/// Score `child` from the parent mover's perspective.
///
/// The child is flipped into the next mover's orientation and searched
/// with swapped, negated bounds; the returned score is negated back.
/// `depth` is the budget left for the child's subtree. All perspective
/// handling funnels through here, at every level including the root.
#[inline]
pub fn search_child(child: &Board, depth: i32, alpha: i32, beta: i32, nodes: &mut u64) -> i32 {
    -negamax(&child.flipped(), depth, -beta, -alpha, nodes)
}

/// Depth-bounded negamax over `board`, scored for the side to move.
///
/// Evaluates statically once `depth` is spent and no capture is pending.
/// Remaining siblings are dropped when `alpha` passes `beta` (strict
/// comparison, both here and at every level below). A position with no
/// successors scores `-INFINITY`: the mover has lost.
pub fn negamax(board: &Board, depth: i32, mut alpha: i32, beta: i32, nodes: &mut u64) -> i32 {
    *nodes += 1;
    if depth <= 0 && !has_jump(board) {
        return evaluate(board);
    }
    let mut best = -INFINITY;
    for child in successors(board) {
        let value = search_child(&child, depth - 1, alpha, beta, nodes);
        best = best.max(value);
        alpha = alpha.max(value);
        if alpha > beta {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        Board::parse(text).unwrap()
    }

    fn search(b: &Board, depth: i32) -> i32 {
        let mut nodes = 0;
        negamax(b, depth, -INFINITY, INFINITY, &mut nodes)
    }

    /// Negamax without pruning, as a reference result
    fn plain(b: &Board, depth: i32) -> i32 {
        if depth <= 0 && !has_jump(b) {
            return evaluate(b);
        }
        let mut best = -INFINITY;
        for child in successors(b) {
            best = best.max(-plain(&child.flipped(), depth - 1));
        }
        best
    }

    #[test]
    fn test_depth_zero_is_static_on_quiet_boards() {
        let start = Board::new();
        let mut nodes = 0;
        let value = negamax(&start, 0, -INFINITY, INFINITY, &mut nodes);
        assert_eq!(value, evaluate(&start));
        assert_eq!(nodes, 1);
    }

    #[test]
    fn test_node_count_at_depth_one() {
        // Root plus one leaf per opening move
        let mut nodes = 0;
        negamax(&Board::new(), 1, -INFINITY, INFINITY, &mut nodes);
        assert_eq!(nodes, 8);
    }

    #[test]
    fn test_pending_capture_extends_past_depth_zero() {
        // Black captures the lone red man even with no budget left
        let b = board("     b   r                      ");
        assert_eq!(evaluate(&b), 0);
        assert_eq!(search(&b, 0), 20);
    }

    #[test]
    fn test_forced_exchange_hand_computed() {
        // Black must jump 5x14; the red blocker on 23 stops the chain
        // there, and the red man on 18 recaptures: the exchange trades
        // black's only man for one of three red men.
        let b = board("     b   r        r    r        ");
        for depth in [0, 1, 2] {
            assert_eq!(search(&b, depth), -40, "depth {}", depth);
        }
        // One ply deeper the search sees black stripped of every piece,
        // which is not a material deficit but a lost game.
        assert_eq!(search(&b, 3), -INFINITY);
        assert_eq!(search(&b, 4), -INFINITY);
    }

    #[test]
    fn test_no_exchange_when_the_chain_continues() {
        // With 23 open the jump from 5 keeps going over 18 and takes
        // both red men in one turn; there is no recapture to weigh.
        let b = board("     b   r        r             ");
        assert_eq!(search(&b, 0), 20);
        assert_eq!(search(&b, 1), 20);
        // Deeper search sees red left with no reply at all
        assert_eq!(search(&b, 2), INFINITY);
    }

    #[test]
    fn test_search_child_signs_over_two_plies() {
        // One black man on 9 against a red man on 18. Stepping to 14
        // walks into 18's capture; stepping to 13 is safe.
        let safe = board("             b    r             ");
        let hanging = board("              b   r             ");
        let mut nodes = 0;
        assert_eq!(search_child(&safe, 0, -INFINITY, INFINITY, &mut nodes), 0);
        assert_eq!(
            search_child(&hanging, 0, -INFINITY, INFINITY, &mut nodes),
            -20
        );

        let parent = board("         b        r             ");
        assert_eq!(search(&parent, 1), 0);
    }

    #[test]
    fn test_no_successors_scores_lost() {
        // Lone blocked man on 27: no reply at any positive depth
        let b = board("                           b   r");
        assert_eq!(search(&b, 1), -INFINITY);
        assert_eq!(search(&b, 4), -INFINITY);
    }

    #[test]
    fn test_pruning_preserves_root_value() {
        for text in [
            "bbbbbbbbbbbb        rrrrrrrrrrrr",
            "     b   r     b  r  b  r r   B ",
            "     b   r       rr     r       ",
        ] {
            let b = board(text);
            for depth in 1..=4 {
                assert_eq!(search(&b, depth), plain(&b, depth), "depth {}", depth);
            }
        }
    }
}
