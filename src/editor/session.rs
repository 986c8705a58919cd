//! Grid and palette editing model
//!
//! Tracks a 9x9 grid of display tokens and a palette of paintable symbols.
//! The palette is an opaque alphabet — the default entries carry no meaning
//! here beyond being distinct paintable symbols.

use ndarray::Array2;

use crate::io::error::Result;
use crate::spatial::board::{BOARD_SIZE, Board};
use crate::spatial::pattern::WILDCARD;

/// Display token for a cell that has not been painted
pub const BLANK_DISPLAY: char = ' ';

/// Default symbol palette offered by the editor
pub const DEFAULT_PALETTE: [char; 6] = [BLANK_DISPLAY, 'f', 'w', 'e', 'a', 's'];

/// Editing state for one board-sized grid
#[derive(Debug, Clone)]
pub struct EditorSession {
    cells: Array2<char>,
    palette: Vec<char>,
    selected: usize,
}

impl EditorSession {
    /// Create a session over a blank grid with the default palette
    pub fn new() -> Self {
        Self::with_palette(DEFAULT_PALETTE.to_vec())
    }

    /// Create a session with a custom palette
    ///
    /// An empty palette is replaced by one holding only the blank token, so
    /// a session always has a selectable symbol.
    pub fn with_palette(palette: Vec<char>) -> Self {
        let palette = if palette.is_empty() {
            vec![BLANK_DISPLAY]
        } else {
            palette
        };
        Self {
            cells: Array2::from_elem((BOARD_SIZE, BOARD_SIZE), BLANK_DISPLAY),
            palette,
            selected: 0,
        }
    }

    /// The selectable symbols in palette order
    pub fn palette(&self) -> &[char] {
        &self.palette
    }

    /// Index of the currently selected palette entry
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// The symbol that [`EditorSession::paint`] will apply
    pub fn selected_symbol(&self) -> char {
        self.palette.get(self.selected).copied().unwrap_or(BLANK_DISPLAY)
    }

    /// Select a palette entry by index, returning its symbol
    ///
    /// Returns `None` and leaves the selection unchanged when the index has
    /// no palette entry.
    pub fn select(&mut self, index: usize) -> Option<char> {
        let symbol = self.palette.get(index).copied()?;
        self.selected = index;
        Some(symbol)
    }

    /// Paint the selected symbol at a grid position
    ///
    /// Returns whether the position was inside the grid.
    pub fn paint(&mut self, row: usize, col: usize) -> bool {
        let symbol = self.selected_symbol();
        self.cells.get_mut((row, col)).is_some_and(|cell| {
            *cell = symbol;
            true
        })
    }

    /// Display token at a grid position, or `None` outside the grid
    pub fn token_at(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get((row, col)).copied()
    }

    /// Export the grid as a board
    ///
    /// Concatenates the display tokens row-major, mapping blank cells to the
    /// wildcard symbol, and builds the board from the flat string.
    ///
    /// # Errors
    ///
    /// Propagates the board's contents-length validation; a board-sized
    /// session always satisfies it.
    pub fn export(&self) -> Result<Board> {
        let flat: String = self
            .cells
            .iter()
            .map(|&token| if token == BLANK_DISPLAY { WILDCARD } else { token })
            .collect();
        Board::from_contents(&flat)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
