use std::collections::HashSet;
use xiangqi::board::Board;
use xiangqi::location::Location;

fn loc(s: &str) -> Location {
    s.parse().unwrap()
}

fn candidates(board: &Board, from: &str) -> HashSet<Location> {
    let id = board.get(loc(from)).unwrap();
    board.candidates(id).into_iter().collect()
}

fn set(locations: &[&str]) -> HashSet<Location> {
    locations.iter().map(|s| loc(s)).collect()
}

#[test]
fn general_confined_to_palace() {
    let board = Board::from_fen("9/9/9/9/9/9/9/9/4K4/9").unwrap();
    assert_eq!(candidates(&board, "e1"), set(&["d1", "f1", "e0", "e2"]));

    let board = Board::from_fen("9/9/9/9/9/9/9/9/9/3K5").unwrap();
    assert_eq!(candidates(&board, "d0"), set(&["e0", "d1"]));

    let board = Board::from_fen("3k5/9/9/9/9/9/9/9/9/9").unwrap();
    assert_eq!(candidates(&board, "d9"), set(&["e9", "d8"]));
}

#[test]
fn advisor_diagonals_in_palace() {
    let board = Board::from_fen("9/9/9/9/9/9/9/9/4A4/9").unwrap();
    assert_eq!(candidates(&board, "e1"), set(&["d0", "f0", "d2", "f2"]));

    let board = Board::from_fen("9/9/9/9/9/9/9/9/9/3A5").unwrap();
    assert_eq!(candidates(&board, "d0"), set(&["e1"]));

    let board = Board::from_fen("9/4a4/9/9/9/9/9/9/9/9").unwrap();
    assert_eq!(candidates(&board, "e8"), set(&["d9", "f9", "d7", "f7"]));
}

// An occupied elephant eye forbids the move even with the destination free.
#[test]
fn elephant_eye_blocking() {
    let blocked = Board::from_fen("9/9/9/9/9/9/9/9/1P7/2E6").unwrap();
    assert_eq!(candidates(&blocked, "c0"), set(&["e2"]));

    let open = Board::from_fen("9/9/9/9/9/9/9/9/9/2E6").unwrap();
    assert_eq!(candidates(&open, "c0"), set(&["a2", "e2"]));
}

#[test]
fn elephant_never_crosses_river() {
    let board = Board::from_fen("9/9/9/9/9/2E6/9/9/9/9").unwrap();
    assert_eq!(candidates(&board, "c4"), set(&["a2", "e2"]));

    let board = Board::from_fen("9/9/9/9/2e6/9/9/9/9/9").unwrap();
    assert_eq!(candidates(&board, "c5"), set(&["a7", "e7"]));
}

#[test]
fn horse_leg_blocking() {
    let open = Board::from_fen("9/9/9/9/9/4H4/9/9/9/9").unwrap();
    assert_eq!(
        candidates(&open, "e4"),
        set(&["d6", "f6", "d2", "f2", "c5", "c3", "g5", "g3"])
    );

    // A piece on e5 blocks the upward leg only.
    let blocked = Board::from_fen("9/9/9/9/4p4/4H4/9/9/9/9").unwrap();
    assert_eq!(
        candidates(&blocked, "e4"),
        set(&["d2", "f2", "c5", "c3", "g5", "g3"])
    );
}

#[test]
fn rook_slides_until_first_piece() {
    let board = Board::from_fen("9/9/9/9/9/4R4/9/9/9/9").unwrap();
    assert_eq!(candidates(&board, "e4").len(), 17);

    // Stops on the first piece in each direction, including that cell
    // regardless of team; ownership is the legality gate's concern.
    let board = Board::from_fen("9/9/9/4p4/9/4R4/9/4P4/9/9").unwrap();
    let moves = candidates(&board, "e4");
    assert!(moves.contains(&loc("e6")));
    assert!(!moves.contains(&loc("e7")));
    assert!(moves.contains(&loc("e2")));
    assert!(!moves.contains(&loc("e1")));
    assert!(moves.contains(&loc("a4")));
    assert!(moves.contains(&loc("i4")));
}

// The screen scenario: cannon on b2, one piece on e2, an enemy on h2.
// The capture lands exactly on h2; the screen itself and everything past
// the target are out of reach.
#[test]
fn cannon_screen_arithmetic() {
    let board = Board::from_fen("9/9/9/9/9/9/9/1C2P2p1/9/9").unwrap();
    let moves = candidates(&board, "b2");

    assert!(moves.contains(&loc("h2")));
    assert!(!moves.contains(&loc("e2")));
    assert!(!moves.contains(&loc("f2")));
    assert!(!moves.contains(&loc("g2")));
    assert!(!moves.contains(&loc("i2")));
    assert!(moves.contains(&loc("a2")));
    assert!(moves.contains(&loc("c2")));
    assert!(moves.contains(&loc("d2")));
}

#[test]
fn cannon_cannot_capture_without_screen() {
    let board = Board::from_fen("9/9/9/9/9/9/9/1C5p1/9/9").unwrap();
    let moves = candidates(&board, "b2");

    // No screen on the row: the enemy piece merely blocks.
    assert!(!moves.contains(&loc("h2")));
    assert!(moves.contains(&loc("g2")));
}

#[test]
fn soldier_before_and_after_river() {
    let board = Board::from_fen("9/9/9/9/9/9/4P4/9/9/9").unwrap();
    assert_eq!(candidates(&board, "e3"), set(&["e4"]));

    let board = Board::from_fen("9/9/9/9/4P4/9/9/9/9/9").unwrap();
    assert_eq!(candidates(&board, "e5"), set(&["e6", "d5", "f5"]));

    let board = Board::from_fen("9/9/9/4p4/9/9/9/9/9/9").unwrap();
    assert_eq!(candidates(&board, "e6"), set(&["e5"]));

    let board = Board::from_fen("9/9/9/9/9/4p4/9/9/9/9").unwrap();
    assert_eq!(candidates(&board, "e4"), set(&["e3", "d4", "f4"]));

    // On the last rank only the lateral steps remain.
    let board = Board::from_fen("4P4/9/9/9/9/9/9/9/9/9").unwrap();
    assert_eq!(candidates(&board, "e9"), set(&["d9", "f9"]));
}
