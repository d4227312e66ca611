//! Move generation.
//!
//! Pseudo-legal moves are produced square by square in a1, b1, ..., h8 order;
//! within a square the order is fixed by the ray and offset tables. Search
//! move ordering is exactly this order, so it must stay stable.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::error::ResolveError;
use super::{Color, Move, MoveList, PieceKind, Position, Square};

impl Position {
    /// Moves obeying piece geometry for `color`, without the king-safety filter.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for idx in 0..64 {
            self.push_moves_for_square(Square::from_index(idx), color, &mut moves);
        }
        moves
    }

    /// Pseudo-legal moves of the piece on `square`, if it belongs to `color`.
    ///
    /// Empty for an empty square or a square holding a piece of the other color.
    #[must_use]
    pub fn moves_for_square(&self, square: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.push_moves_for_square(square, color, &mut moves);
        moves
    }

    fn push_moves_for_square(&self, from: Square, color: Color, moves: &mut MoveList) {
        let Some(piece) = self.piece_at(from) else {
            return;
        };
        if piece.color != color {
            return;
        }
        match piece.kind {
            PieceKind::Pawn => self.push_pawn_moves(from, color, moves),
            PieceKind::Rook => {
                self.push_slider_moves(from, color, PieceKind::Rook, &ROOK_DIRECTIONS, moves);
            }
            PieceKind::Bishop => {
                self.push_slider_moves(from, color, PieceKind::Bishop, &BISHOP_DIRECTIONS, moves);
            }
            PieceKind::Queen => {
                self.push_slider_moves(from, color, PieceKind::Queen, &ROOK_DIRECTIONS, moves);
                self.push_slider_moves(from, color, PieceKind::Queen, &BISHOP_DIRECTIONS, moves);
            }
            PieceKind::Knight => self.push_knight_moves(from, color, moves),
            PieceKind::King => self.push_king_moves(from, color, moves),
        }
    }

    /// Kind of the piece `color` would capture on `sq`.
    ///
    /// `None` for empty squares, own pieces, and enemy kings: a king is never
    /// captured, king safety is enforced by the legality filter instead.
    #[inline]
    pub(crate) fn capture_target(&self, sq: Square, color: Color) -> Option<PieceKind> {
        self.piece_at(sq)
            .filter(|p| p.color != color && p.kind != PieceKind::King)
            .map(|p| p.kind)
    }

    /// Legal moves for `color`, in generation order.
    ///
    /// `color` does not have to be the side to move; the side to move is
    /// switched for the duration of the call and restored afterwards. An empty
    /// list means checkmate or stalemate, told apart by [`Position::is_check`].
    pub fn legal_moves(&mut self, color: Color) -> MoveList {
        // Generated before the switch: en passant is only offered to the side to move.
        let pseudo = self.pseudo_legal_moves(color);
        let saved = self.side_to_move;
        self.side_to_move = color;

        let mut legal = MoveList::new();
        for mv in pseudo {
            let mut probe = mv;
            self.apply(&mut probe);
            let exposed = self.is_check(color);
            self.undo(&probe);
            if !exposed {
                legal.push(mv);
            }
        }

        self.side_to_move = saved;
        legal
    }

    /// Whether `mv` is one of the legal moves of the side to move
    pub fn is_legal(&mut self, mv: &Move) -> bool {
        self.legal_moves(self.side_to_move).contains(mv)
    }

    /// Find the legal move a partially specified move stands for.
    ///
    /// A query without an origin matches on piece kind, destination and
    /// promotion; a fully specified move matches on equality.
    pub fn resolve_move(&mut self, query: &Move) -> Result<Move, ResolveError> {
        let legal = self.legal_moves(self.side_to_move);
        let candidates: Vec<Move> = legal
            .iter()
            .filter(|m| {
                if query.is_resolved() {
                    *m == query
                } else {
                    m.piece == query.piece && m.to == query.to && m.promotion == query.promotion
                }
            })
            .copied()
            .collect();

        match candidates.len() {
            0 => Err(ResolveError::NoMatch { query: *query }),
            1 => Ok(candidates[0]),
            _ => Err(ResolveError::Ambiguous {
                query: *query,
                candidates,
            }),
        }
    }

    /// Set the display-only check flag of a legal move of the side to move
    pub fn annotate_check(&mut self, mv: &mut Move) {
        let mut probe = *mv;
        self.apply(&mut probe);
        mv.check = self.is_check(self.side_to_move);
        self.undo(&probe);
    }

    /// The side to move is in check and has no legal move
    pub fn is_checkmate(&mut self) -> bool {
        let color = self.side_to_move;
        self.is_check(color) && self.legal_moves(color).is_empty()
    }

    /// The side to move is not in check but has no legal move
    pub fn is_stalemate(&mut self) -> bool {
        let color = self.side_to_move;
        !self.is_check(color) && self.legal_moves(color).is_empty()
    }
}
