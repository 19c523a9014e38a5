//! Pure tic-tac-toe rules engine with exhaustive minimax move selection.
//!
//! Every operation here is a pure computation over board values: callers
//! hand in a [`Board`] and get back answers or fresh boards, never
//! mutations. The engine answers five questions about a position:
//!
//! - whose turn is it ([`Board::to_move`])
//! - which moves are legal ([`Board::moves`])
//! - what board results from a move ([`Board::play`])
//! - is the game over, and who won ([`rules`])
//! - what is the optimal next move ([`search::minimax`])
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{search, Board, Player};
//!
//! let board = Board::new();
//! assert_eq!(board.to_move(), Player::X);
//!
//! let reply = search::minimax(&board)?;
//! let next = board.play(reply)?;
//! assert_eq!(next.to_move(), Player::O);
//! # Ok::<(), perfect_tictactoe::MoveError>(())
//! ```
//!
//! Rendering, input handling, and the turn loop belong to a driving
//! collaborator; the engine performs no I/O and keeps no state between
//! calls.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod moves;
mod position;
mod types;

// Public module declarations
pub mod rules;
pub mod search;

// Crate-level exports - domain types
pub use types::{Board, Player, Square};

// Crate-level exports - coordinates
pub use position::{Col, Position, Row};

// Crate-level exports - move application
pub use moves::MoveError;

// Crate-level exports - outcome classification
pub use rules::Outcome;
