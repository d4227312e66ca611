//! Static evaluation tests.

use super::play;
use crate::board::{Color, Position, DRAW, MATE};

#[test]
fn test_checkmated_side_scores_minus_mate() {
    let mut position = Position::new();
    play(
        &mut position,
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );
    assert_eq!(position.evaluate(1, 1), -MATE);
    assert_eq!(position.evaluate(0, 0), -MATE);
}

#[test]
fn test_double_check_mate_scores_minus_mate() {
    // Rook a1 and knight g3 both attack h1; no single reply answers both
    let mut position = Position::from_fen("k7/8/8/8/8/6n1/6PP/r6K w - - 0 1");
    assert!(position.is_check(Color::White));
    assert!(position.legal_moves(Color::White).is_empty());
    assert_eq!(position.evaluate(1, 1), -MATE);
}

#[test]
fn test_stalemate_scores_draw() {
    let mut position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(position.evaluate(1, 1), DRAW);
    // A queen up does not matter once the game is over
    assert_eq!(position.evaluate(0, 100), DRAW);
}

#[test]
fn test_material_is_relative_to_side_to_move() {
    let mut white = Position::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1");
    let mut black = Position::from_fen("4k3/8/8/8/8/8/8/Q3K3 b - - 0 1");
    assert_eq!(white.material_value(), 100);
    assert_eq!(black.material_value(), -100);
    assert_eq!(white.evaluate(0, 1), 100);
    assert_eq!(black.evaluate(0, 1), -100);
}

#[test]
fn test_mobility_counts_both_sides() {
    // White: king + rook on an open board; Black: cornered king
    let mut position = Position::from_fen("7k/8/8/8/8/8/8/R3K3 w - - 0 1");
    let white = position.legal_moves(Color::White).len() as i32;
    let black = position.legal_moves(Color::Black).len() as i32;
    assert_eq!(position.evaluate(1, 0), white - black);
    assert!(white > black);
}

#[test]
fn test_first_move_changes_balance() {
    let mut position = Position::new();
    play(&mut position, &[("e2", "e4")]);
    // Black to move: White's bishop and queen gained scope
    assert!(position.evaluate(1, 1) < 0);
}
