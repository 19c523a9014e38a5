//! Move generation and the board transition function.
//!
//! A move is validated and applied against an explicit board value.
//! Application returns a fresh board; the input is never mutated, so a
//! rejected move leaves the caller's board exactly as it was.

use crate::position::Position;
use crate::types::{Board, Square};
use tracing::instrument;

/// Error raised when a requested move is not legal on the given board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("square {_0} is already occupied")]
    SquareOccupied(Position),

    /// A raw coordinate lies outside the 3x3 grid.
    #[display("coordinates ({row}, {col}) are outside the board")]
    OutOfBounds {
        /// Requested row index.
        row: usize,
        /// Requested column index.
        col: usize,
    },

    /// The game is already over; no move remains to select.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

impl Board {
    /// Returns the legal moves on this board, in row-major order.
    ///
    /// Every empty square is a legal target for the side to move: nine
    /// moves on the empty board, none on a full one. The order is fixed
    /// so that consumers, the search tie-break in particular, behave
    /// deterministically.
    pub fn moves(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Applies a move for the side to move, returning the successor board.
    ///
    /// The mark placed is the one [`Board::to_move`] reports before
    /// placement. `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the target square already
    /// holds a mark.
    #[instrument(skip(self), fields(position = %pos, player = ?self.to_move()))]
    pub fn play(&self, pos: Position) -> Result<Board, MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        Ok(self.with(pos, Square::Occupied(self.to_move())))
    }

    /// Applies a move given raw (row, col) indices.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] when either index exceeds 2,
    /// otherwise behaves like [`Board::play`].
    pub fn play_at(&self, row: usize, col: usize) -> Result<Board, MoveError> {
        let pos = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.play(pos)
    }
}
