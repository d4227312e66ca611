pub mod board;

pub use board::{
    find_best_move, new_standard_position, Color, Move, Piece, PieceKind, Position, Square,
};
