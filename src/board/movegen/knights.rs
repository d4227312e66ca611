use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Color, Move, MoveList, PieceKind, Position, Square};

impl Position {
    pub(crate) fn push_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.push_jump_moves(
            from,
            color,
            PieceKind::Knight,
            &KNIGHT_TARGETS[from.as_index()],
            moves,
        );
    }

    /// Single-step moves to precomputed targets: quiet if empty, capture if
    /// the target holds a capturable enemy, nothing otherwise.
    pub(crate) fn push_jump_moves(
        &self,
        from: Square,
        color: Color,
        kind: PieceKind,
        targets: &[Square],
        moves: &mut MoveList,
    ) {
        for &to in targets {
            if self.is_empty(to) {
                moves.push(Move::new(kind, from, to));
            } else if let Some(captured) = self.capture_target(to, color) {
                moves.push(Move::new(kind, from, to).with_capture(captured));
            }
        }
    }
}
