//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{Color, PieceKind, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(0, 4), Color::White, PieceKind::King)
//!     .piece(Square(7, 4), Color::Black, PieceKind::King)
//!     .piece(Square(1, 0), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.king_square(Color::Black), Square(7, 4));
//! ```

use log::debug;

use super::error::PositionError;
use super::{CastleSide, CastlingRights, Color, Piece, PieceKind, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant_column: Option<usize>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant_column: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Position::new();
        PositionBuilder {
            pieces: start.pieces().collect(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant_column: None,
        }
    }

    /// Place a piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Piece::new(color, kind)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Grant a single castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castling.set(color, side);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::none();
        self
    }

    /// Open the en-passant window on a file, as if the opponent of the side
    /// to move had just pushed a pawn two squares there.
    #[must_use]
    pub fn en_passant_column(mut self, file: usize) -> Self {
        self.en_passant_column = Some(file);
        self
    }

    /// Build the position.
    ///
    /// Castling rights whose king or rook is off its home square are dropped,
    /// as is an en-passant column with no freshly double-pushed pawn on it.
    ///
    /// # Errors
    /// Fails unless each color has exactly one king, or if a pawn stands on
    /// the first or last rank.
    pub fn build(self) -> Result<Position, PositionError> {
        let mut position = Position::empty();

        for &(square, piece) in &self.pieces {
            if piece.kind == PieceKind::Pawn && (square.rank() == 0 || square.rank() == 7) {
                debug!("rejecting position: pawn on back rank {square}");
                return Err(PositionError::PawnOnBackRank { square });
            }
            position.set_piece(square, piece);
        }

        for color in Color::BOTH {
            let kings: Vec<Square> = position
                .pieces()
                .filter(|(_, p)| *p == Piece::new(color, PieceKind::King))
                .map(|(sq, _)| sq)
                .collect();
            match kings.as_slice() {
                [king] => position.kings[color.index()] = *king,
                [] => {
                    debug!("rejecting position: {color} has no king");
                    return Err(PositionError::MissingKing { color });
                }
                many => {
                    debug!("rejecting position: {color} has {} kings", many.len());
                    return Err(PositionError::TooManyKings {
                        color,
                        count: many.len(),
                    });
                }
            }
        }

        let mut castling = self.castling;
        for color in Color::BOTH {
            let rank = color.back_rank();
            let king_home =
                position.piece_at(Square(rank, 4)) == Some(Piece::new(color, PieceKind::King));
            for side in CastleSide::BOTH {
                let (rook_file, _) = side.rook_files();
                let rook_home = position.piece_at(Square(rank, rook_file))
                    == Some(Piece::new(color, PieceKind::Rook));
                if castling.has(color, side) && !(king_home && rook_home) {
                    debug!("dropping {color} {side:?}-side castling right: pieces not at home");
                    castling.remove(color, side);
                }
            }
        }

        position.side_to_move = self.side_to_move;
        position.castling = castling;
        position.en_passant_column = self
            .en_passant_column
            .filter(|&file| file < 8 && just_double_pushed(&position, file));
        Ok(position)
    }
}

/// The opponent of the side to move has a pawn that could have just crossed
/// two empty squares to land on `file`.
fn just_double_pushed(position: &Position, file: usize) -> bool {
    let pusher = position.side_to_move.opponent();
    let landed = Square(position.side_to_move.en_passant_rank(), file);
    let start = Square(pusher.pawn_start_rank(), file);
    let crossed = landed.offset(-pusher.pawn_direction(), 0);
    let valid = position.piece_at(landed) == Some(Piece::new(pusher, PieceKind::Pawn))
        && position.is_empty(start)
        && crossed.is_some_and(|sq| position.is_empty(sq));
    if !valid {
        debug!("dropping en-passant column {file}: no {pusher} pawn just pushed there");
    }
    valid
}
