//! Board coordinates.
//!
//! A [`Position`] pairs a [`Row`] and a [`Col`], each a three-variant
//! axis enum, so a coordinate outside the 3x3 grid is unrepresentable.
//! Raw indices coming from a driving collaborator go through the
//! fallible constructors instead.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Row of the board, top to bottom.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Row {
    /// Row index 0.
    Top,
    /// Row index 1.
    Middle,
    /// Row index 2.
    Bottom,
}

/// Column of the board, left to right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Col {
    /// Column index 0.
    Left,
    /// Column index 1.
    Center,
    /// Column index 2.
    Right,
}

impl Row {
    /// Returns the row index (0-2).
    pub fn index(self) -> usize {
        match self {
            Row::Top => 0,
            Row::Middle => 1,
            Row::Bottom => 2,
        }
    }

    /// Creates a row from an index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Row::Top),
            1 => Some(Row::Middle),
            2 => Some(Row::Bottom),
            _ => None,
        }
    }
}

impl Col {
    /// Returns the column index (0-2).
    pub fn index(self) -> usize {
        match self {
            Col::Left => 0,
            Col::Center => 1,
            Col::Right => 2,
        }
    }

    /// Creates a column from an index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Col::Left),
            1 => Some(Col::Center),
            2 => Some(Col::Right),
            _ => None,
        }
    }
}

/// A square coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row component.
    pub row: Row,
    /// Column component.
    pub col: Col,
}

impl Position {
    /// Creates a position from axis values.
    pub fn new(row: Row, col: Col) -> Self {
        Self { row, col }
    }

    /// Creates a position from raw (row, col) indices.
    ///
    /// Returns `None` when either index is outside `0..=2`.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        Some(Self {
            row: Row::from_index(row)?,
            col: Col::from_index(col)?,
        })
    }

    /// Converts to a row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row.index() * 3 + self.col.index()
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Self::from_coords(index / 3, index % 3)
        } else {
            None
        }
    }

    /// All nine positions in row-major order.
    ///
    /// This is the enumeration order move generation inherits, and
    /// therefore the order minimax breaks ties in: the first best-valued
    /// move wins.
    pub fn all() -> impl Iterator<Item = Self> {
        Row::iter().flat_map(|row| Col::iter().map(move |col| Self { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row.index(), self.col.index())
    }
}
