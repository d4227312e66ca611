use super::super::{Color, Move, MoveList, Piece, PieceKind, Position, Square, PROMOTION_KINDS};

impl Position {
    pub(crate) fn push_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let promoting = from.rank() as isize + dir == color.pawn_promotion_rank() as isize;

        if let Some(ahead) = from.offset(dir, 0) {
            if self.is_empty(ahead) {
                push_pawn_move(moves, Move::new(PieceKind::Pawn, from, ahead), promoting);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two_ahead) = ahead.offset(dir, 0) {
                        if self.is_empty(two_ahead) {
                            moves.push(Move::new(PieceKind::Pawn, from, two_ahead));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            if let Some(captured) = self.capture_target(target, color) {
                let mv = Move::new(PieceKind::Pawn, from, target).with_capture(captured);
                push_pawn_move(moves, mv, promoting);
            } else if self.can_capture_en_passant(from, target, color) {
                moves.push(Move::en_passant(from, target));
            }
        }
    }

    /// The two-push window belongs to the reply, so only the side to move
    /// may use it. The pushed pawn must still stand beside `from`.
    fn can_capture_en_passant(&self, from: Square, target: Square, color: Color) -> bool {
        color == self.side_to_move
            && from.rank() == color.en_passant_rank()
            && self.en_passant_column == Some(target.file())
            && self.is_empty(target)
            && self.piece_at(Square(from.rank(), target.file()))
                == Some(Piece::new(color.opponent(), PieceKind::Pawn))
    }
}

/// A pawn move reaching the last rank becomes one move per promotion kind.
fn push_pawn_move(moves: &mut MoveList, mv: Move, promoting: bool) {
    if promoting {
        for kind in PROMOTION_KINDS {
            moves.push(mv.with_promotion(kind));
        }
    } else {
        moves.push(mv);
    }
}
