//! Terminal-state classification and signed utility.

use super::win::winner;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Player),
    /// The board filled with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {player} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Checks whether the game is over.
///
/// A board is terminal when a line is complete or no empty square
/// remains.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Classifies a board as won, drawn, or still in progress.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(player) = winner(board) {
        Some(Outcome::Winner(player))
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// Signed utility of a board from X's perspective.
///
/// +1 when X has won, -1 when O has won, 0 for a draw or an unfinished
/// board. Callers normally ask only about terminal boards.
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
