//! Game Flow Integration Tests
//!
//! Tests full validate-then-commit flows through the public API:
//! - Turn alternation across committed moves
//! - Opening moves from the standard starting position
//! - Capture resolution and exclusivity
//! - Board replacement for setup and reset

use chessboard_core::{
    BoardError, BoardState, BoardStore, Occupancy, PieceColor, PieceId, Square,
};

fn sq(x: u8, y: u8) -> Square {
    Square::from_coords(x, y).unwrap()
}

/// Validate a move and commit it, asserting the validator accepted it
fn check_and_commit(store: &mut BoardStore, id: &str, to: Square) {
    let piece = PieceId::from(id);
    assert!(
        store.can_move(&piece, to).unwrap(),
        "{id} -> {to} should be legal"
    );
    store.apply_move(&piece, to).unwrap();
}

// ============================================================================
// Turn Alternation
// ============================================================================

#[test]
fn test_white_moves_first() {
    let store = BoardStore::new();
    assert_eq!(store.turn(), PieceColor::White);
}

#[test]
fn test_turn_alternates_over_a_sequence() {
    //! After N committed moves the turn is White for even N, Black for odd
    let mut store = BoardStore::new();
    let moves = [
        ("white_pawn_4", sq(4, 4)),
        ("black_pawn_4", sq(4, 3)),
        ("white_knight_1", sq(5, 5)),
        ("black_knight_0", sq(2, 2)),
    ];

    for (n, (id, to)) in moves.into_iter().enumerate() {
        let expected = if n % 2 == 0 {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        assert_eq!(store.turn(), expected, "turn before move {n}");
        check_and_commit(&mut store, id, to);
    }
    assert_eq!(store.turn(), PieceColor::White);
}

// ============================================================================
// Opening Moves
// ============================================================================

#[test]
fn test_pawn_double_advance_opening() {
    //! e2-e4 in this crate's orientation: (4, 6) -> (4, 4)
    let mut store = BoardStore::new();

    check_and_commit(&mut store, "white_pawn_4", sq(4, 4));

    assert_eq!(
        store.occupancy()[&PieceId::from("white_pawn_4")],
        Some(sq(4, 4))
    );
    assert_eq!(store.turn(), PieceColor::Black);
}

#[test]
fn test_knight_opening_move() {
    //! b1-c3: delta (1, 2) from (1, 7)
    let store = BoardStore::new();

    assert!(store
        .can_move(&PieceId::from("white_knight_0"), sq(2, 5))
        .unwrap());
}

#[test]
fn test_rook_blocked_by_own_pawn_at_start() {
    //! With the a-file pawn unmoved, the rook behind it cannot advance
    let store = BoardStore::new();

    assert!(!store
        .can_move(&PieceId::from("white_rook_0"), sq(0, 5))
        .unwrap());
}

// ============================================================================
// Captures
// ============================================================================

#[test]
fn test_pawn_diagonal_capture_flow() {
    //! A diagonal step is illegal onto an empty square and legal once an
    //! opposing piece stands there; committing it captures that piece.
    let mut state = BoardState::empty(PieceColor::Black);
    state.place(PieceId::from("black_pawn_3"), Some(sq(3, 1)));
    let mut store = BoardStore::with_state(state);
    let pawn = PieceId::from("black_pawn_3");

    assert!(
        !store.can_move(&pawn, sq(4, 2)).unwrap(),
        "no piece to capture"
    );

    let mut occupancy = store.occupancy().clone();
    occupancy.insert(PieceId::from("white_bishop_0"), Some(sq(4, 2)));
    store.replace_board(occupancy, PieceColor::Black).unwrap();

    assert!(store.can_move(&pawn, sq(4, 2)).unwrap());
    store.apply_move(&pawn, sq(4, 2)).unwrap();

    assert_eq!(
        store.occupancy()[&PieceId::from("white_bishop_0")],
        None,
        "captured bishop keeps its key with no square"
    );
    assert_eq!(store.occupancy()[&pawn], Some(sq(4, 2)));
}

#[test]
fn test_capture_exclusivity() {
    //! After a commit, the mover is the only piece on the destination
    let mut state = BoardState::empty(PieceColor::White);
    state.place(PieceId::from("white_rook_0"), Some(sq(5, 5)));
    state.place(PieceId::from("black_knight_1"), Some(sq(5, 2)));
    let mut store = BoardStore::with_state(state);

    check_and_commit(&mut store, "white_rook_0", sq(5, 2));

    let occupants = store
        .occupancy()
        .iter()
        .filter(|(_, placement)| **placement == Some(sq(5, 2)))
        .count();
    assert_eq!(occupants, 1);
    assert_eq!(store.occupancy()[&PieceId::from("black_knight_1")], None);
}

// ============================================================================
// Board Replacement
// ============================================================================

#[test]
fn test_replace_board_then_query_absent_piece() {
    //! Validating a piece that is not in the replaced occupancy is a
    //! caller error, not an illegal move.
    let mut store = BoardStore::new();
    store
        .replace_board(Occupancy::new(), PieceColor::White)
        .unwrap();

    assert_eq!(
        store.can_move(&PieceId::from("white_pawn_4"), sq(4, 4)),
        Err(BoardError::PieceNotOnBoard {
            id: "white_pawn_4".to_owned()
        })
    );
}

#[test]
fn test_replace_board_resets_a_finished_game() {
    let mut store = BoardStore::new();
    check_and_commit(&mut store, "white_pawn_4", sq(4, 4));
    assert_eq!(store.turn(), PieceColor::Black);

    store
        .replace_board(
            BoardState::standard_start().occupancy().clone(),
            PieceColor::White,
        )
        .unwrap();

    assert_eq!(store.turn(), PieceColor::White);
    assert_eq!(
        store.occupancy()[&PieceId::from("white_pawn_4")],
        Some(sq(4, 6))
    );
}
