//! Board representation for checkers

pub mod board;


// Re-exports
pub use board::{Board, ParseBoardError};

/// Full board width (8x8 grid, play happens on the dark squares)
pub const BOARD_SIZE: usize = 8;
/// Number of playable squares
pub const NUM_SQUARES: usize = 32; // 4 per row

/// Piece colors. Black moves toward the high indices, red toward the low ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::Red,
            Color::Red => Color::Black,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::Red => write!(f, "red"),
        }
    }
}

/// Contents of a single playable square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Man(Color),
    King(Color),
}

impl Cell {
    /// Color of the occupying piece, if any
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Man(c) | Cell::King(c) => Some(c),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn is_king(self) -> bool {
        matches!(self, Cell::King(_))
    }

    /// Same piece with the opposing color (identity for empty cells)
    #[inline]
    pub fn recolored(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Man(c) => Cell::Man(c.opponent()),
            Cell::King(c) => Cell::King(c.opponent()),
        }
    }

    /// Promote a man to a king; kings and empty cells are unchanged
    #[inline]
    pub fn crowned(self) -> Cell {
        match self {
            Cell::Man(c) => Cell::King(c),
            other => other,
        }
    }

    /// Character code used by the textual board form
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Man(Color::Black) => 'b',
            Cell::King(Color::Black) => 'B',
            Cell::Man(Color::Red) => 'r',
            Cell::King(Color::Red) => 'R',
        }
    }

    /// Parse a cell code. Both `' '` and `'-'` denote an empty square.
    #[inline]
    pub fn from_char(ch: char) -> Option<Cell> {
        match ch {
            ' ' | '-' => Some(Cell::Empty),
            'b' => Some(Cell::Man(Color::Black)),
            'B' => Some(Cell::King(Color::Black)),
            'r' => Some(Cell::Man(Color::Red)),
            'R' => Some(Cell::King(Color::Red)),
            _ => None,
        }
    }
}

/// A playable square, identified by its 0..32 index in row-major reading order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index < NUM_SQUARES);
        Self(index as u8)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Rank on the 8x8 grid, 0 = black's back rank
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 4
    }

    /// File on the 8x8 grid. Even rows hold their dark squares on odd files.
    #[inline]
    pub fn file(self) -> u8 {
        2 * (self.0 % 4) + u8::from(self.row() % 2 == 0)
    }

    /// Square at the given 8x8 coordinates, or None when off the grid
    /// or on a light (non-playable) square.
    #[inline]
    pub fn from_coords(row: i32, file: i32) -> Option<Square> {
        let size = BOARD_SIZE as i32;
        if row < 0 || row >= size || file < 0 || file >= size || (row + file) % 2 == 0 {
            return None;
        }
        Some(Self((row * 4 + file / 2) as u8))
    }

    /// True for the four squares of the opponent's back rank, where a
    /// black man is crowned.
    #[inline]
    pub fn is_king_row(self) -> bool {
        self.row() == 7
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
