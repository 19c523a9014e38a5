//! Tests driving the public engine API the way a collaborator would.

use perfect_tictactoe::{Board, MoveError, Outcome, Player, Position, rules, search};

#[test]
fn test_fresh_game_state() {
    let board = Board::new();

    assert_eq!(board.to_move(), Player::X);
    assert_eq!(board.moves().len(), 9);
    assert!(!rules::terminal(&board));
    assert_eq!(rules::utility(&board), 0);
}

#[test]
fn test_diagonal_win_flow() {
    // X: (0,0), (1,1); O: (0,1), (0,2); X completes the diagonal at (2,2).
    let board = Board::new()
        .play_at(0, 0)
        .and_then(|b| b.play_at(0, 1))
        .and_then(|b| b.play_at(1, 1))
        .and_then(|b| b.play_at(0, 2))
        .and_then(|b| b.play_at(2, 2))
        .expect("legal moves");

    assert_eq!(rules::winner(&board), Some(Player::X));
    assert!(rules::terminal(&board));
    assert_eq!(rules::utility(&board), 1);
    assert_eq!(rules::outcome(&board), Some(Outcome::Winner(Player::X)));
}

#[test]
fn test_drawn_game_flow() {
    // X O X / X O O / O X X
    let board = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)]
        .iter()
        .fold(Board::new(), |board, &(row, col)| {
            board.play_at(row, col).expect("square is empty")
        });

    assert_eq!(rules::winner(&board), None);
    assert!(rules::terminal(&board));
    assert_eq!(rules::utility(&board), 0);
    assert_eq!(rules::outcome(&board), Some(Outcome::Draw));
}

#[test]
fn test_illegal_moves_are_rejected() {
    let board = Board::new().play_at(1, 1).expect("center is empty");

    let occupied = Position::from_coords(1, 1).expect("coordinates in range");
    assert_eq!(board.play(occupied), Err(MoveError::SquareOccupied(occupied)));
    assert_eq!(
        board.play_at(4, 4),
        Err(MoveError::OutOfBounds { row: 4, col: 4 })
    );
}

#[test]
fn test_move_count_tracks_occupancy() {
    let mut board = Board::new();
    for pos in Position::all() {
        let occupied = board.count(Player::X) + board.count(Player::O);
        assert_eq!(board.moves().len(), 9 - occupied);
        board = board.play(pos).expect("square is empty");
    }
    assert!(board.moves().is_empty());
}

#[test]
fn test_render_shows_marks() {
    let board = Board::new()
        .play_at(1, 1)
        .and_then(|b| b.play_at(0, 0))
        .expect("legal moves");

    assert_eq!(board.render(), "O|.|.\n-+-+-\n.|X|.\n-+-+-\n.|.|.");
}

#[test]
fn test_board_json_round_trip() {
    let board = Board::new()
        .play_at(1, 1)
        .and_then(|b| b.play_at(2, 0))
        .expect("legal moves");

    let json = serde_json::to_string(&board).expect("board serializes");
    let back: Board = serde_json::from_str(&json).expect("board deserializes");

    assert_eq!(back, board);
    assert_eq!(back.to_move(), board.to_move());
    assert_eq!(search::minimax(&back), search::minimax(&board));
}
