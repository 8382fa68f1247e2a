//! Move generation: ordinary steps and forced capture chains
//!
//! Everything here runs in the canonical orientation: the side to move
//! owns the black pieces and plays toward the high squares. Callers flip
//! the board first when the actual mover is red and flip the results back.

use crate::board::{Board, Cell, Color, Square};

use super::tables::{tables, Jump};

/// A capture chain: the origin square plus one (captured, landing) pair
/// per hop, in jump order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpChain {
    from: Square,
    hops: Vec<(Square, Square)>,
}

impl JumpChain {
    fn first(jump: &Jump) -> Self {
        Self {
            from: jump.from,
            hops: vec![(jump.over, jump.to)],
        }
    }

    fn extended(&self, jump: &Jump) -> Self {
        let mut hops = self.hops.clone();
        hops.push((jump.over, jump.to));
        Self {
            from: self.from,
            hops,
        }
    }

    /// Square the chain starts from
    #[inline]
    pub fn origin(&self) -> Square {
        self.from
    }

    /// Square the piece ends on
    #[inline]
    pub fn landing(&self) -> Square {
        self.hops[self.hops.len() - 1].1
    }

    /// Captured squares, in hop order
    pub fn captures(&self) -> impl Iterator<Item = Square> + '_ {
        self.hops.iter().map(|&(over, _)| over)
    }

    /// Landing squares, in hop order
    pub fn landings(&self) -> impl Iterator<Item = Square> + '_ {
        self.hops.iter().map(|&(_, to)| to)
    }

    /// Number of pieces the chain captures
    #[inline]
    pub fn capture_count(&self) -> usize {
        self.hops.len()
    }

    /// Flat index form `[src, captured, landing, captured, landing, ..]`
    pub fn indices(&self) -> Vec<usize> {
        let mut out = vec![self.from.index()];
        for &(over, to) in &self.hops {
            out.push(over.index());
            out.push(to.index());
        }
        out
    }
}

/// A legal move: a diagonal step or a full capture chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Step { from: Square, to: Square },
    Jump(JumpChain),
}

#[inline]
fn is_mover(cell: Cell) -> bool {
    cell.color() == Some(Color::Black)
}

#[inline]
fn is_mover_king(cell: Cell) -> bool {
    cell == Cell::King(Color::Black)
}

#[inline]
fn is_capturable(cell: Cell) -> bool {
    cell.color() == Some(Color::Red)
}

#[inline]
fn first_hop_open(board: &Board, jump: &Jump) -> bool {
    is_capturable(board.get(jump.over)) && board.is_empty(jump.to)
}

/// All legal successor positions for the canonical mover.
///
/// When any capture chain exists, only chain results are returned;
/// ordinary steps are legal solely on capture-free boards. An empty
/// result means the mover has no moves and has lost.
pub fn successors(board: &Board) -> Vec<Board> {
    let jumps = jump_moves(board);
    let moves = if jumps.is_empty() {
        step_moves(board)
    } else {
        jumps
    };
    moves.iter().map(|mv| apply(board, mv)).collect()
}

/// Fast probe for a pending capture: true when any piece has a valid
/// first hop. Builds no chains; the search cutoff calls this on every
/// candidate leaf.
pub fn has_jump(board: &Board) -> bool {
    let t = tables();
    t.forward_jumps
        .iter()
        .any(|j| is_mover(board.get(j.from)) && first_hop_open(board, j))
        || t.backward_jumps
            .iter()
            .any(|j| is_mover_king(board.get(j.from)) && first_hop_open(board, j))
}

/// Ordinary diagonal steps: forward for every black piece, backward for
/// kings. Ignores the forced-capture rule; `successors` handles that.
pub fn step_moves(board: &Board) -> Vec<Move> {
    let t = tables();
    let mut out = Vec::new();
    for &(from, to) in &t.forward_moves {
        if is_mover(board.get(from)) && board.is_empty(to) {
            out.push(Move::Step { from, to });
        }
    }
    for &(from, to) in &t.backward_moves {
        if is_mover_king(board.get(from)) && board.is_empty(to) {
            out.push(Move::Step { from, to });
        }
    }
    out
}

/// All maximal capture chains for the mover, one move per chain.
///
/// Chains from different first hops are kept separate even when they
/// produce the same successor board.
pub fn jump_moves(board: &Board) -> Vec<Move> {
    let t = tables();
    let mut out = Vec::new();
    for jump in &t.forward_jumps {
        let cell = board.get(jump.from);
        if is_mover(cell) && first_hop_open(board, jump) {
            extend_chain(board, JumpChain::first(jump), cell.is_king(), &mut out);
        }
    }
    for jump in &t.backward_jumps {
        if is_mover_king(board.get(jump.from)) && first_hop_open(board, jump) {
            extend_chain(board, JumpChain::first(jump), true, &mut out);
        }
    }
    out
}

/// Grow `chain` from its current landing square, emitting it once no
/// continuation applies. The board is never mutated during the search:
/// captured pieces stay on their squares and the chain tracks them, so
/// a square can be captured at most once per chain.
fn extend_chain(board: &Board, chain: JumpChain, was_king: bool, out: &mut Vec<Move>) {
    let here = chain.landing();
    // Crowning happens the moment a man touches the far rank; the rest
    // of the chain continues with king adjacency.
    let is_king = was_king || here.is_king_row();
    let t = tables();
    let mut extended = false;
    for jump in t.forward_jumps_from(here) {
        if continues(board, &chain, jump) {
            extend_chain(board, chain.extended(jump), is_king, out);
            extended = true;
        }
    }
    if is_king {
        for jump in t.backward_jumps_from(here) {
            if continues(board, &chain, jump) {
                extend_chain(board, chain.extended(jump), is_king, out);
                extended = true;
            }
        }
    }
    if !extended {
        out.push(Move::Jump(chain));
    }
}

/// A continuation hop must capture a live red piece not already taken by
/// this chain, and land on an empty square. The chain's own origin also
/// counts as free: the piece has left it, even though the unmutated
/// board still shows it occupied.
#[inline]
fn continues(board: &Board, chain: &JumpChain, jump: &Jump) -> bool {
    is_capturable(board.get(jump.over))
        && chain.captures().all(|captured| captured != jump.over)
        && (board.is_empty(jump.to) || jump.to == chain.origin())
}

/// Apply a move, producing the successor board. The moved piece is
/// crowned when any landing square of the move sits on the far rank,
/// even if a chain then carries it back off that rank.
pub fn apply(board: &Board, mv: &Move) -> Board {
    let mut cells = board.cells;
    match mv {
        Move::Step { from, to } => {
            let piece = board.get(*from);
            debug_assert!(is_mover(piece));
            cells[from.index()] = Cell::Empty;
            cells[to.index()] = if to.is_king_row() {
                piece.crowned()
            } else {
                piece
            };
        }
        Move::Jump(chain) => {
            let piece = board.get(chain.origin());
            debug_assert!(is_mover(piece));
            cells[chain.origin().index()] = Cell::Empty;
            for captured in chain.captures() {
                cells[captured.index()] = Cell::Empty;
            }
            let crowned = chain.landings().any(|sq| sq.is_king_row());
            cells[chain.landing().index()] = if crowned { piece.crowned() } else { piece };
        }
    }
    Board::from_cells(cells)
}
