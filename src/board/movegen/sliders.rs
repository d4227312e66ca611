use super::super::attack_tables::Offset;
use super::super::{Color, Move, MoveList, PieceKind, Position, Square};

impl Position {
    /// Walk each ray until the board edge or the first piece.
    ///
    /// Empty squares give quiet moves and the ray continues; an enemy
    /// (non-king) piece gives a capture and ends the ray; anything else ends
    /// the ray without a move.
    pub(crate) fn push_slider_moves(
        &self,
        from: Square,
        color: Color,
        kind: PieceKind,
        directions: &[Offset],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                current = to;
                if self.is_empty(to) {
                    moves.push(Move::new(kind, from, to));
                    continue;
                }
                if let Some(captured) = self.capture_target(to, color) {
                    moves.push(Move::new(kind, from, to).with_capture(captured));
                }
                break;
            }
        }
    }
}
