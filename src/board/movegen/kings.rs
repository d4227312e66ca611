use super::super::attack_tables::{BISHOP_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, ROOK_DIRECTIONS};
use super::super::{
    CastleSide, Color, Move, MoveList, Piece, PieceKind, Position, Square,
};

impl Position {
    pub(crate) fn push_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.push_jump_moves(
            from,
            color,
            PieceKind::King,
            &KING_TARGETS[from.as_index()],
            moves,
        );

        for side in CastleSide::BOTH {
            if self.can_castle_now(from, color, side) {
                moves.push(Move::castle(color, side));
            }
        }
    }

    /// Castling needs the right, the king and rook on their home squares,
    /// empty squares between them, and no attack on the king's start,
    /// transit or destination square.
    fn can_castle_now(&self, from: Square, color: Color, side: CastleSide) -> bool {
        let rank = color.back_rank();
        if !self.castling.has(color, side) || from != Square(rank, 4) {
            return false;
        }
        let (rook_file, _) = side.rook_files();
        if self.piece_at(Square(rank, rook_file)) != Some(Piece::new(color, PieceKind::Rook)) {
            return false;
        }
        if side
            .between_files()
            .iter()
            .any(|&file| !self.is_empty(Square(rank, file)))
        {
            return false;
        }
        !side
            .king_path_files()
            .iter()
            .any(|&file| self.is_square_attacked(Square(rank, file), color))
    }

    /// Whether the opponent of `defender` attacks `square`.
    ///
    /// Only the first piece along each ray counts. Kings and pawns attack at
    /// distance one, pawns only towards their own forward diagonals.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, defender: Color) -> bool {
        let attacker = defender.opponent();

        for &(dr, df) in &BISHOP_DIRECTIONS {
            if let Some((piece, distance)) = self.first_piece_on_ray(square, dr, df) {
                if piece.color != attacker {
                    continue;
                }
                let hit = match piece.kind {
                    PieceKind::Bishop | PieceKind::Queen => true,
                    PieceKind::King => distance == 1,
                    // The pawn sits one rank behind the square, from its own point of view
                    PieceKind::Pawn => distance == 1 && dr == -attacker.pawn_direction(),
                    _ => false,
                };
                if hit {
                    return true;
                }
            }
        }

        for &(dr, df) in &ROOK_DIRECTIONS {
            if let Some((piece, distance)) = self.first_piece_on_ray(square, dr, df) {
                if piece.color != attacker {
                    continue;
                }
                let hit = match piece.kind {
                    PieceKind::Rook | PieceKind::Queen => true,
                    PieceKind::King => distance == 1,
                    _ => false,
                };
                if hit {
                    return true;
                }
            }
        }

        KNIGHT_TARGETS[square.as_index()]
            .iter()
            .any(|&sq| self.piece_at(sq) == Some(Piece::new(attacker, PieceKind::Knight)))
    }

    /// First piece met walking from `from` (exclusive) and its distance in steps
    fn first_piece_on_ray(&self, from: Square, dr: isize, df: isize) -> Option<(Piece, usize)> {
        let mut current = from;
        let mut distance = 0;
        while let Some(next) = current.offset(dr, df) {
            current = next;
            distance += 1;
            if let Some(piece) = self.piece_at(current) {
                return Some((piece, distance));
            }
        }
        None
    }

    /// Whether the king of `color` is attacked
    #[must_use]
    pub fn is_check(&self, color: Color) -> bool {
        let king_sq = self.king_square(color);
        debug_assert_eq!(
            self.piece_at(king_sq),
            Some(Piece::new(color, PieceKind::King)),
            "king cache out of sync for {color}"
        );
        self.is_square_attacked(king_sq, color)
    }
}
