//! Board value type with the flip transform and textual I/O

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{Cell, Color, Square, NUM_SQUARES};

/// Error parsing the 32-character textual board form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("board text must be 32 characters, got {0}")]
    BadLength(usize),
    #[error("invalid cell character {ch:?} at square {index}")]
    BadChar { index: usize, ch: char },
}

/// A checkers position: one cell per playable square, in index order.
///
/// Boards are immutable values. Move application and the flip transform
/// build new boards instead of mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) cells: [Cell; NUM_SQUARES],
}

impl Board {
    /// Standard starting position: 12 black men facing 12 red men
    /// across two empty rows.
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; NUM_SQUARES];
        cells[..12].fill(Cell::Man(Color::Black));
        cells[20..].fill(Cell::Man(Color::Red));
        Self { cells }
    }

    /// Board with every square empty
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; NUM_SQUARES],
        }
    }

    /// Build a board directly from its cell array
    pub fn from_cells(cells: [Cell; NUM_SQUARES]) -> Self {
        Self { cells }
    }

    /// Parse the textual form: 32 characters over `b B r R` plus
    /// `' '` or `'-'` for empty squares.
    pub fn parse(text: &str) -> Result<Self, ParseBoardError> {
        let mut cells = [Cell::Empty; NUM_SQUARES];
        let mut len = 0;
        for (index, ch) in text.chars().enumerate() {
            if index >= NUM_SQUARES {
                return Err(ParseBoardError::BadLength(text.chars().count()));
            }
            cells[index] = Cell::from_char(ch).ok_or(ParseBoardError::BadChar { index, ch })?;
            len = index + 1;
        }
        if len != NUM_SQUARES {
            return Err(ParseBoardError::BadLength(len));
        }
        Ok(Self { cells })
    }

    /// Get cell at square
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    /// Check if square is empty
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_empty()
    }

    /// Iterate cells in index order
    #[inline]
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// The same position seen from the other player's side: cell order
    /// reversed and every piece recolored. Applying it twice is the
    /// identity, and it is the only sanctioned way to reason about the
    /// non-canonical mover.
    #[must_use]
    pub fn flipped(&self) -> Board {
        let mut cells = [Cell::Empty; NUM_SQUARES];
        for (i, cell) in self.cells.iter().enumerate() {
            cells[NUM_SQUARES - 1 - i] = cell.recolored();
        }
        Board { cells }
    }

    /// Render the position as an 8-line diagram. Light squares show as
    /// `---`, empty dark squares as `.`.
    pub fn to_diagram(&self) -> String {
        let glyph = |cell: Cell| if cell.is_empty() { '.' } else { cell.to_char() };
        let mut out = String::new();
        for pair in self.cells.chunks(8) {
            out.push_str(&format!(
                "--- {} --- {} --- {} --- {}\n",
                glyph(pair[0]),
                glyph(pair[1]),
                glyph(pair[2]),
                glyph(pair[3])
            ));
            out.push_str(&format!(
                " {} --- {} --- {} --- {} ---\n",
                glyph(pair[4]),
                glyph(pair[5]),
                glyph(pair[6]),
                glyph(pair[7])
            ));
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Board {
    /// The 32-character line form, with `-` for empty squares
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells {
            let ch = if cell.is_empty() { '-' } else { cell.to_char() };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
