//! 9x9 board specialization with the 3x3 house decomposition

use std::fmt;

use crate::io::error::{PatternError, Result};
use crate::spatial::pattern::Pattern;

/// Side length of a board
pub const BOARD_SIZE: usize = 9;

/// Side length of one house within a board
pub const HOUSE_SIZE: usize = 3;

/// A pattern fixed at 9x9, decomposed into nine 3x3 houses
///
/// The fixed size is expressed through the constructors rather than checked
/// at every call site: [`Board::new`] is infallible and
/// [`Board::from_pattern`] rejects any other shape. All geometric operations
/// remain available through [`Board::pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pattern: Pattern,
}

impl Board {
    /// Create an empty board with every cell set to the wildcard symbol
    pub fn new() -> Self {
        Self {
            pattern: Pattern::filled(BOARD_SIZE, BOARD_SIZE),
        }
    }

    /// Wrap an existing pattern as a board
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::BoardDimensions`] unless the pattern is
    /// exactly 9x9.
    pub fn from_pattern(pattern: Pattern) -> Result<Self> {
        if pattern.height() != BOARD_SIZE || pattern.width() != BOARD_SIZE {
            return Err(PatternError::BoardDimensions {
                height: pattern.height(),
                width: pattern.width(),
            });
        }
        Ok(Self { pattern })
    }

    /// Create a board from an 81-symbol flat row-major string
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::ContentsLength`] when the string does not hold
    /// exactly 81 symbols.
    pub fn from_contents(contents: &str) -> Result<Self> {
        let mut board = Self::new();
        board.set_contents(contents)?;
        Ok(board)
    }

    /// The underlying 9x9 pattern
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Replace the entire grid from a flat row-major string
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::ContentsLength`] when the string does not hold
    /// exactly 81 symbols.
    pub fn set_contents(&mut self, contents: &str) -> Result<()> {
        self.pattern.set_contents(contents)
    }

    /// The grid contents as a flat row-major string
    pub fn get_contents(&self) -> String {
        self.pattern.get_contents()
    }

    /// The nine 3x3 houses in block-row-major order
    ///
    /// House `(I, J)` is the window whose top-left corner sits at grid
    /// position `(3I, 3J)`; the result lists block-row 0 first, each
    /// block-row left to right. Houses are recomputed on every call and
    /// share no storage with the board.
    pub fn houses(&self) -> Vec<Pattern> {
        let mut houses = Vec::with_capacity(BOARD_SIZE);
        for i in (0..BOARD_SIZE).step_by(HOUSE_SIZE) {
            for j in (0..BOARD_SIZE).step_by(HOUSE_SIZE) {
                if let Ok(house) = self.pattern.read(i..i + HOUSE_SIZE, j..j + HOUSE_SIZE) {
                    houses.push(house);
                }
            }
        }
        houses
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pattern.fmt(f)
    }
}
