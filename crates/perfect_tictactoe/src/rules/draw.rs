//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the game ended in a draw.
///
/// A draw is a full board with no complete line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
