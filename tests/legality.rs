use xiangqi::board::Board;
use xiangqi::game::Game;
use xiangqi::location::{Location, Move};
use xiangqi::piece::{PieceKind, Team};

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

fn loc(s: &str) -> Location {
    s.parse().unwrap()
}

// Capturing the soldier pulls the rook off the file and exposes the red
// general to the flying-general rule. The move must be rejected and the
// would-be victim must still be on the board.
#[test]
fn rejects_capture_that_opens_flying_general() {
    let mut board = Board::from_fen("4k4/9/9/9/9/3pR4/9/9/9/4K4").unwrap();
    let before = board.fen();

    assert!(!board.is_legal(Team::Red, mv("e4d4")));
    assert_eq!(board.fen(), before);

    let soldier = board.get(loc("d4")).unwrap();
    assert_eq!(board.piece(soldier).kind(), PieceKind::Soldier);
    assert_eq!(board.piece(soldier).team(), Team::Black);
    assert_eq!(board.roster(Team::Black).len(), 2);

    // Staying on the file keeps the screen intact and is fine.
    assert!(board.is_legal(Team::Red, mv("e4e5")));
}

#[test]
fn rejects_moves_outside_the_grammar() {
    let mut board = Board::opening();

    assert!(!board.is_legal(Team::Red, mv("a0b1")));
    assert!(!board.is_legal(Team::Red, mv("e0e2")));
    assert!(!board.is_legal(Team::Red, mv("b2b8")));
}

#[test]
fn rejects_wrong_side_and_empty_cells() {
    let mut board = Board::opening();

    // Black piece on red's turn, and vice versa.
    assert!(!board.is_legal(Team::Red, mv("h7e7")));
    assert!(!board.is_legal(Team::Black, mv("b2e2")));
    // Nothing to move.
    assert!(!board.is_legal(Team::Red, mv("e4e5")));
}

#[test]
fn rejects_self_capture() {
    let mut board = Board::opening();

    // Rook a0 onto soldier a3 is within the rook's grammar but friendly.
    let rook = board.get(loc("a0")).unwrap();
    assert!(board.candidates(rook).contains(&loc("a3")));
    assert!(!board.is_legal(Team::Red, mv("a0a3")));
}

#[test]
fn rejects_stepping_into_fire() {
    // Black rook on f5 rakes the f file; black general on d9 bars d0 through
    // the flying-general rule. Only e1 remains for the red general.
    let mut board = Board::from_fen("3k5/9/9/9/9/5r3/9/9/9/4K4").unwrap();

    assert!(board.is_legal(Team::Red, mv("e0e1")));
    assert!(!board.is_legal(Team::Red, mv("e0f0")));
    assert!(!board.is_legal(Team::Red, mv("e0d0")));
}

#[test]
fn exploration_leaves_board_unchanged() {
    let mut board = Board::opening();
    let before = board.fen();

    let rook = board.get(loc("a0")).unwrap();
    board.legal_destinations(rook);
    assert_eq!(board.fen(), before);

    board.has_any_legal_move(Team::Red);
    board.legal_moves(Team::Black);
    assert_eq!(board.fen(), before);
}

#[test]
fn game_rejections_leave_state_untouched() {
    let mut game = Game::opening();
    let (fen, turn) = game.fen();

    for attempt in ["e4e5", "h7e7", "a0a3", "e0e2"] {
        assert!(!game.play(mv(attempt)));
        assert_eq!(game.fen(), (fen.clone(), turn));
    }

    assert!(game.play(mv("b2e2")));
    assert_eq!(game.turn(), Team::Black);
}
