//! Search tests through the public API.

use std::time::Duration;

use mailbox_chess::board::prelude::*;
use mailbox_chess::new_standard_position;

/// Test that the engine finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    // White to move, Qe8# is mate
    let mut position = Position::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let best = find_best_move(&mut position, 2).expect("Should find a move");
    assert_eq!(best.to_string(), "Qe1-e8", "Should find Qe8# (back rank mate)");
}

/// Test that the engine takes a free piece
#[test]
fn captures_undefended_rook() {
    let mut position = Position::from_fen("4k3/8/8/8/3r4/8/3Q4/4K3 w - - 0 1");
    let best = find_best_move(&mut position, 2).expect("Should find a move");
    assert_eq!(best.to(), Square(3, 3), "Should take the rook on d4");
    assert!(best.is_capture());
}

/// Test that the engine escapes check with its only legal move
#[test]
fn escapes_check() {
    let mut position = Position::from_fen("k7/8/8/8/8/8/1q6/K7 w - - 0 1");
    let legal = position.legal_moves(Color::White);
    assert_eq!(legal.len(), 1);
    assert_eq!(find_best_move(&mut position, 3), legal.first());
}

/// Self-play from the initial position stays legal and leaves no trace on the board
#[test]
fn self_play_stays_legal() {
    let mut position = new_standard_position();
    let params = SearchParams::with_depth(2);
    for _ in 0..8 {
        let before = position.clone();
        let result = position.search(&params);
        assert_eq!(position, before);
        let Some(best) = result.best_move else {
            break;
        };
        assert!(position.is_legal(&best));
        position = position.after(best);
    }
}

/// A generous deadline does not change the result of a fixed-depth search
#[test]
fn deadline_far_in_future_matches_fixed_depth() {
    let mut position = Position::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    let params = SearchParams::with_depth(2);
    let fixed = position.search(&params);
    let limits = SearchLimits::depth(2).with_time_budget(Duration::from_secs(3600));
    let timed = position.search_with_limits(&params, &limits);
    assert_eq!(fixed, timed);
}
