use super::{CastleSide, Color, Move, Piece, PieceKind, Position, Square, UndoState};

impl Position {
    /// Play `mv` for the side to move and record its undo state on `mv`.
    ///
    /// # Panics
    /// Panics if `mv` has no origin, if the origin does not hold a piece of
    /// the stated kind, or if that piece does not belong to the side to move.
    /// Moves from the generator never trip these checks.
    pub fn apply(&mut self, mv: &mut Move) {
        let Some(from) = mv.from else {
            panic!("apply called with unresolved move {mv}");
        };
        let color = self.side_to_move;
        let piece = self.piece_at(from);
        assert_eq!(
            piece,
            Some(Piece::new(color, mv.piece)),
            "apply {mv}: {from} does not hold a {color} {:?}",
            mv.piece
        );

        mv.undo = Some(UndoState {
            ply: self.ply,
            castling: self.castling,
            en_passant_column: self.en_passant_column,
        });

        let moved = Piece::new(color, mv.piece);
        self.remove_piece(from);
        self.set_piece(mv.to, moved);

        if mv.en_passant {
            // The captured pawn stands beside the origin, on the destination file
            self.remove_piece(Square(from.rank(), mv.to.file()));
        } else if let Some(kind) = mv.promotion {
            match moved.promote(kind) {
                Some(promoted) => self.set_piece(mv.to, promoted),
                None => panic!("apply {mv}: cannot promote a {:?} to {kind:?}", mv.piece),
            }
        } else if let Some(side) = mv.castling {
            self.shift_castling_rook(color, side, false);
        }

        self.en_passant_column = None;
        match mv.piece {
            PieceKind::Pawn if from.rank().abs_diff(mv.to.rank()) == 2 => {
                self.en_passant_column = Some(from.file());
            }
            PieceKind::Rook => self.clear_rook_right(color, from),
            PieceKind::King => {
                self.kings[color.index()] = mv.to;
                self.castling.remove(color, CastleSide::King);
                self.castling.remove(color, CastleSide::Queen);
            }
            _ => {}
        }
        if mv.capture == Some(PieceKind::Rook) {
            self.clear_rook_right(color.opponent(), mv.to);
        }

        self.side_to_move = color.opponent();
        self.ply += 1;
    }

    /// Take back `mv`, which must be the move most recently applied.
    ///
    /// # Panics
    /// Panics if `mv` was never applied, if another move was applied after it
    /// and is still on the board, or if its destination does not hold the
    /// piece that moved.
    pub fn undo(&mut self, mv: &Move) {
        let Some(undo) = mv.undo else {
            panic!("undo called with move {mv} that was never applied");
        };
        assert_eq!(
            undo.ply + 1,
            self.ply,
            "undo {mv} out of order: applied at ply {}, position is at ply {}",
            undo.ply,
            self.ply
        );
        let Some(from) = mv.from else {
            panic!("undo called with unresolved move {mv}");
        };

        let color = self.side_to_move.opponent();
        let moved = self.remove_piece(mv.to);
        let expected = Piece::new(color, mv.promotion.unwrap_or(mv.piece));
        assert_eq!(
            moved,
            Some(expected),
            "undo {mv}: {} does not hold the moved piece",
            mv.to
        );

        self.set_piece(from, Piece::new(color, mv.piece));

        let captured_color = color.opponent();
        if mv.en_passant {
            self.set_piece(
                Square(from.rank(), mv.to.file()),
                Piece::new(captured_color, PieceKind::Pawn),
            );
        } else if let Some(kind) = mv.capture {
            self.set_piece(mv.to, Piece::new(captured_color, kind));
        }

        if let Some(side) = mv.castling {
            self.shift_castling_rook(color, side, true);
        }
        if mv.piece == PieceKind::King {
            self.kings[color.index()] = from;
        }

        self.castling = undo.castling;
        self.en_passant_column = undo.en_passant_column;
        self.side_to_move = color;
        self.ply -= 1;
    }

    /// Copy-on-move: a new position with `mv` applied, leaving `self` untouched.
    #[must_use]
    pub fn after(&self, mv: Move) -> Position {
        let mut next = self.clone();
        let mut mv = mv;
        next.apply(&mut mv);
        next
    }

    fn shift_castling_rook(&mut self, color: Color, side: CastleSide, back: bool) {
        let rank = color.back_rank();
        let (home, castled) = side.rook_files();
        let (from, to) = if back { (castled, home) } else { (home, castled) };
        let rook = self.remove_piece(Square(rank, from));
        assert_eq!(
            rook,
            Some(Piece::new(color, PieceKind::Rook)),
            "castling rook missing from {}",
            Square(rank, from)
        );
        self.set_piece(Square(rank, to), Piece::new(color, PieceKind::Rook));
    }

    /// A rook leaving (or captured on) its home corner ends that castling right
    fn clear_rook_right(&mut self, color: Color, sq: Square) {
        let rank = color.back_rank();
        if sq == Square(rank, 0) {
            self.castling.remove(color, CastleSide::Queen);
        } else if sq == Square(rank, 7) {
            self.castling.remove(color, CastleSide::King);
        }
    }
}
