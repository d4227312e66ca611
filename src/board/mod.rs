//! Chess position representation, rules and search.
//!
//! The position is an 8x8 mailbox indexed `[rank][file]`. Moves are generated
//! pseudo-legally per square and filtered for king safety by applying and
//! undoing each candidate. Search is a negamax with alpha-beta pruning that
//! mutates the position in place with the same apply/undo pair.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{Color, Position};
//!
//! let mut position = Position::new();
//! let moves = position.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{FenError, PositionError, ResolveError, SquareError};
pub use eval::{DRAW, INFINITY, MATE};
pub use state::{new_standard_position, Position};
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, PieceKind, Square,
    PROMOTION_KINDS,
};

// Public API - search functions and configuration
pub use search::{find_best_move, SearchLimits, SearchParams, SearchResult};

pub(crate) use types::UndoState;
