//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts against the standard reference positions
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Special moves, check, mate and stalemate
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Negamax results and determinism
//! - `proptest.rs` - Property-based tests over random playouts

mod eval;
mod proptest;
mod search;

use crate::board::{Move, Position, Square};

/// Play a sequence of moves given as `(from, to)` coordinate pairs, e.g. `("e2", "e4")`.
pub(super) fn play(position: &mut Position, moves: &[(&str, &str)]) {
    for &(from, to) in moves {
        let mv = find_move(position, from, to);
        let mut applied = mv;
        position.apply(&mut applied);
    }
}

/// The legal move of the side to move between two squares (first promotion kind if several)
pub(super) fn find_move(position: &mut Position, from: &str, to: &str) -> Move {
    let from: Square = from.parse().unwrap();
    let to: Square = to.parse().unwrap();
    let color = position.side_to_move();
    position
        .legal_moves(color)
        .iter()
        .find(|m| m.from() == Some(from) && m.to() == to)
        .copied()
        .unwrap_or_else(|| panic!("no legal move {from}-{to} in {}", position.to_fen()))
}
