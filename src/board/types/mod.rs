//! Core chess types.
//!
//! - `PieceKind`, `Piece` and `Color` - the piece catalog
//! - `Square` - (rank, file) board coordinate
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind, PROMOTION_KINDS};
pub use square::Square;

pub(crate) use moves::UndoState;
