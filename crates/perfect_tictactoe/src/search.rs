//! Exhaustive minimax move selection.
//!
//! The search walks the complete game tree below a position: no pruning,
//! no transposition table, and no state carried between calls. Recursion
//! depth is bounded by the number of empty squares, and every branch
//! stops at the first completed line or full board, so the tree below
//! the opening position stays well under the 9! move-sequence bound.

use crate::moves::MoveError;
use crate::position::Position;
use crate::rules::{terminal, utility};
use crate::types::{Board, Player};
use tracing::instrument;

/// Value of the board with X, the maximizing side, to move.
///
/// Terminal boards score as their utility. Otherwise X gets the best of
/// the values O can hold each successor to.
fn max_value(board: &Board) -> i8 {
    if terminal(board) {
        return utility(board);
    }

    board
        .moves()
        .into_iter()
        .map(|pos| {
            let next = board.play(pos).expect("generated move targets an empty square");
            min_value(&next)
        })
        .max()
        .expect("non-terminal board has at least one move")
}

/// Value of the board with O, the minimizing side, to move.
fn min_value(board: &Board) -> i8 {
    if terminal(board) {
        return utility(board);
    }

    board
        .moves()
        .into_iter()
        .map(|pos| {
            let next = board.play(pos).expect("generated move targets an empty square");
            max_value(&next)
        })
        .min()
        .expect("non-terminal board has at least one move")
}

/// Minimax value of the board under perfect play by both sides.
///
/// Dispatches on the side to move: X maximizes, O minimizes. A terminal
/// board scores as its utility.
pub fn value(board: &Board) -> i8 {
    match board.to_move() {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

/// Selects the optimal move for the side to move.
///
/// X picks the move maximizing the value of the successor under O's
/// best replies; O picks the move minimizing it under X's best replies.
/// The search is exhaustive and re-run from scratch on every call, so
/// the returned move never concedes an outcome a different move could
/// have avoided. Ties are broken by first occurrence in row-major move
/// order, making selection deterministic.
///
/// # Errors
///
/// Returns [`MoveError::GameOver`] when the board is terminal and no
/// move remains to select.
#[instrument(skip(board), fields(player = ?board.to_move()))]
pub fn minimax(board: &Board) -> Result<Position, MoveError> {
    debug_assert!(board.is_consistent());

    if terminal(board) {
        return Err(MoveError::GameOver);
    }

    let player = board.to_move();
    let mut best: Option<(Position, i8)> = None;

    for pos in board.moves() {
        let next = board.play(pos)?;
        let score = match player {
            Player::X => min_value(&next),
            Player::O => max_value(&next),
        };

        let improves = match best {
            None => true,
            Some((_, best_score)) => match player {
                Player::X => score > best_score,
                Player::O => score < best_score,
            },
        };
        if improves {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, _)| pos).ok_or(MoveError::GameOver)
}
