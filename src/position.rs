//! Grid coordinates for the 10x10 board and their textual encoding.
//!
//! The canonical text form is `"<letter>-<number>"` with the row letter in
//! `a..=j` and the 1-based column in `1..=10`, e.g. `"g-8"`. Internally both
//! components are 0-based.

use core::fmt;
use core::str::FromStr;

use crate::common::GameError;
use crate::config::BOARD_SIZE;

/// Row letters in board order, index = 0-based row.
pub const ROW_CHARS: [char; BOARD_SIZE as usize] =
    ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'];

/// Axis along which a position can be shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

/// A single cell address. Always in bounds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Build a position from 0-based row and column.
    pub fn new(row: u8, col: u8) -> Result<Self, GameError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::OutOfBounds);
        }
        Ok(Position { row, col })
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major flat index into a 100-cell array.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// All 100 positions in row-major order. The iterator is `Clone`, so
    /// callers can restart the walk freely.
    pub fn all() -> impl Iterator<Item = Position> + Clone {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }

    /// Position shifted by `delta` along `axis`, or `None` when the result
    /// would leave the grid. Callers treat `None` as a placement-rejection
    /// signal rather than an error.
    pub fn offset_by(self, delta: i8, axis: Axis) -> Option<Position> {
        let (row, col) = match axis {
            Axis::Row => (self.row as i16 + delta as i16, self.col as i16),
            Axis::Col => (self.row as i16, self.col as i16 + delta as i16),
        };
        if row < 0 || col < 0 || row >= BOARD_SIZE as i16 || col >= BOARD_SIZE as i16 {
            return None;
        }
        Some(Position {
            row: row as u8,
            col: col as u8,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", ROW_CHARS[self.row as usize], self.col + 1)
    }
}

impl FromStr for Position {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, GameError> {
        let (letter, number) = s.split_once('-').ok_or(GameError::InvalidPositionFormat)?;
        let mut chars = letter.chars();
        let ch = chars.next().ok_or(GameError::InvalidPositionFormat)?;
        if chars.next().is_some() {
            return Err(GameError::InvalidPositionFormat);
        }
        let row = ROW_CHARS
            .iter()
            .position(|&c| c == ch)
            .ok_or(GameError::InvalidPositionFormat)? as u8;
        let col: u8 = number
            .parse()
            .map_err(|_| GameError::InvalidPositionFormat)?;
        if col < 1 || col > BOARD_SIZE {
            return Err(GameError::InvalidPositionFormat);
        }
        Ok(Position { row, col: col - 1 })
    }
}
