//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use mailbox_chess::board::prelude::*;
//!
//! let mut position = Position::new();
//! assert_eq!(position.legal_moves(Color::White).len(), 20);
//! ```

pub use super::{
    find_best_move, CastleSide, Color, FenError, Move, MoveList, Piece, PieceKind, Position,
    PositionBuilder, SearchLimits, SearchParams, SearchResult, Square,
};
