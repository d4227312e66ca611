use std::fmt;

use super::{CastleSide, CastlingRights, Color, Piece, PieceKind, Square};

/// A chess position: an 8x8 mailbox board plus the state needed to play on.
///
/// Positions are mutated in place with [`Position::apply`] and
/// [`Position::undo`]; `Clone` gives a detached snapshot.
#[derive(Clone, Debug)]
pub struct Position {
    /// Indexed `[rank][file]`
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    /// File of the pawn that just advanced two squares, for one reply only
    pub(crate) en_passant_column: Option<usize>,
    /// King location per color, kept in sync by every king move
    pub(crate) kings: [Square; 2],
    /// Depth of the apply/undo stack, used to catch out-of-order undos
    pub(crate) ply: u32,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Position {
    /// The standard initial array, White to move, all castling rights.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            position.set_piece(Square(0, file), Piece::new(Color::White, kind));
            position.set_piece(Square(7, file), Piece::new(Color::Black, kind));
            position.set_piece(Square(1, file), Piece::new(Color::White, PieceKind::Pawn));
            position.set_piece(Square(6, file), Piece::new(Color::Black, PieceKind::Pawn));
        }
        position.castling = CastlingRights::all();
        position.kings = [Square(0, 4), Square(7, 4)];
        position
    }

    /// A board with no pieces. Callers must place both kings before use.
    pub(crate) fn empty() -> Self {
        Position {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant_column: None,
            kings: [Square(0, 4), Square(7, 4)],
            ply: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.0][sq.1] = Some(piece);
    }

    #[inline]
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.0][sq.1].take()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        self.castling.has(color, side)
    }

    /// File of the pawn that advanced two squares on the previous move
    #[inline]
    #[must_use]
    pub fn en_passant_column(&self) -> Option<usize> {
        self.en_passant_column
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    /// Iterate over occupied squares in a1, b1, ..., h8 order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..64).filter_map(move |idx| {
            let sq = Square::from_index(idx);
            self.piece_at(sq).map(|piece| (sq, piece))
        })
    }

    /// Material of the side to move minus material of the opponent.
    #[must_use]
    pub fn material_value(&self) -> i32 {
        let mut material = [0i32; 2];
        for (_, piece) in self.pieces() {
            material[piece.color.index()] += piece.value();
        }
        let own = self.side_to_move.index();
        material[own] - material[1 - own]
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Two positions are equal when board, side to move, castling rights and
/// en-passant column agree; the king cache follows from the board.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.side_to_move == other.side_to_move
            && self.castling == other.castling
            && self.en_passant_column == other.en_passant_column
    }
}

impl Eq for Position {}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, "-")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "{} to play", self.side_to_move)
    }
}

/// The standard initial position.
#[must_use]
pub fn new_standard_position() -> Position {
    Position::new()
}
