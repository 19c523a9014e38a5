//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight winning lines as row-major indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Lines are scanned rows first, then columns, then the two diagonals,
/// and the first complete line decides. Play stops at the first win, so
/// a reachable board never holds complete lines for both marks.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    let squares = board.squares();

    for [a, b, c] in LINES {
        if let Square::Occupied(player) = squares[a]
            && squares[b] == squares[a]
            && squares[c] == squares[a]
        {
            return Some(player);
        }
    }

    None
}
