//! Search tests.

use std::time::Instant;

use super::play;
use crate::board::{
    find_best_move, Move, PieceKind, Position, SearchLimits, SearchParams, Square, DRAW, INFINITY,
    MATE,
};

#[test]
fn test_finds_back_rank_mate() {
    for depth in [1, 2] {
        let mut position = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let result = position.search(&SearchParams::with_depth(depth));
        assert_eq!(
            result.best_move,
            Some(Move::new(PieceKind::Rook, Square(0, 0), Square(7, 0)))
        );
        assert_eq!(result.score, MATE);
    }
}

#[test]
fn test_black_finds_fools_mate() {
    let mut position = Position::new();
    play(&mut position, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4")]);
    let result = position.search(&SearchParams::with_depth(1));
    let best = result.best_move.unwrap();
    assert_eq!(best.to_string(), "Qd8-h4");
    assert_eq!(result.score, MATE);
}

#[test]
fn test_wins_hanging_queen() {
    let mut position = Position::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
    let params = SearchParams {
        depth: 1,
        coef_mobility: 0,
        coef_material: 1,
    };
    let result = position.search(&params);
    let best = result.best_move.unwrap();
    assert_eq!(best.to(), Square(4, 3));
    assert_eq!(best.captured(), Some(PieceKind::Queen));
    assert_eq!(result.score, 50);
}

#[test]
fn test_search_is_deterministic_and_restores_position() {
    let mut position = Position::new();
    let first = position.search(&SearchParams::with_depth(2));
    assert_eq!(position, Position::new());
    let second = position.search(&SearchParams::with_depth(2));
    assert_eq!(first, second);
    assert!(first.nodes > 20);
}

#[test]
fn test_principal_variation_starts_with_best_move() {
    let mut position = Position::new();
    let result = position.search(&SearchParams::with_depth(2));
    assert_eq!(result.pv.len(), 2);
    assert_eq!(result.pv.first().copied(), result.best_move);

    // The line must be playable from the root
    let mut replay = Position::new();
    for mv in &result.pv {
        assert!(replay.is_legal(mv));
        replay = replay.after(*mv);
    }
}

#[test]
fn test_no_move_without_legal_moves() {
    let mut stalemate = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let result = stalemate.search(&SearchParams::default());
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, DRAW);
    assert!(result.pv.is_empty());
    assert_eq!(find_best_move(&mut stalemate, 3), None);
}

#[test]
fn test_depth_zero_still_returns_a_move() {
    let mut position = Position::new();
    assert!(position.best_move(0).is_some());
    assert_eq!(position.best_move(0), position.best_move(1));
}

#[test]
fn test_expired_deadline_returns_first_line() {
    let mut position = Position::new();
    let limits = SearchLimits::depth(3).with_deadline(Instant::now());
    let result = position.search_with_limits(&SearchParams::default(), &limits);

    let first = position.legal_moves(position.side_to_move()).first();
    assert_eq!(result.best_move, first);
    // One node per ply down the first line, plus the leaf
    assert_eq!(result.nodes, 4);
    assert_eq!(position, Position::new());
}

#[test]
fn test_find_best_move_matches_search() {
    let mut position = Position::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
    let expected = position.search(&SearchParams::with_depth(2)).best_move;
    assert_eq!(find_best_move(&mut position, 2), expected);
}

#[test]
fn test_negamax_window_and_determinism() {
    let mut position = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    let params = SearchParams::default();
    let full = position.negamax(2, -INFINITY, INFINITY, &params);
    assert_eq!(full, position.negamax(2, -INFINITY, INFINITY, &params));
    assert_eq!(full.0, MATE);
    assert_eq!(full.1.len(), 1);

    let (leaf, line) = position.negamax(0, -INFINITY, INFINITY, &params);
    assert_eq!(leaf, position.evaluate(1, 1));
    assert!(line.is_empty());
}
