//! Tests for minimax optimality under full-game self-play.

use perfect_tictactoe::{Board, Outcome, Player, Position, rules, search};

/// Plays a game to the end with both sides selecting moves via minimax.
fn play_out(mut board: Board) -> Board {
    while !rules::terminal(&board) {
        let pos = search::minimax(&board).expect("board is not terminal");
        board = board.play(pos).expect("minimax selects a legal move");
    }
    board
}

#[test]
fn test_perfect_self_play_draws() {
    let end = play_out(Board::new());

    assert!(end.is_full());
    assert_eq!(rules::outcome(&end), Some(Outcome::Draw));
    assert_eq!(rules::utility(&end), 0);
}

#[test]
fn test_no_opening_loses_under_perfect_play() {
    // Whatever square X opens on, perfect play by both sides from there
    // ends in a draw; in particular X never hands O a forced win.
    for opening in Position::all() {
        let board = Board::new().play(opening).expect("square is empty");
        let end = play_out(board);

        assert_eq!(
            rules::outcome(&end),
            Some(Outcome::Draw),
            "opening {opening} should hold a draw"
        );
    }
}

#[test]
fn test_minimax_punishes_blunder() {
    // X opens in a corner; O answering on an edge instead of the center
    // is a losing blunder, and perfect play converts it for X.
    let board = Board::new()
        .play_at(0, 0)
        .and_then(|b| b.play_at(0, 1))
        .expect("legal moves");

    assert_eq!(search::value(&board), 1);

    let end = play_out(board);
    assert_eq!(rules::outcome(&end), Some(Outcome::Winner(Player::X)));
}

#[test]
fn test_search_leaves_input_untouched() {
    let board = Board::new().play_at(1, 1).expect("center is empty");
    let snapshot = board;

    search::minimax(&board).expect("board is not terminal");
    assert_eq!(board, snapshot);
}
