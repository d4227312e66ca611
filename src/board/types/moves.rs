//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::{CastleSide, CastlingRights};
use super::piece::{Color, PieceKind};
use super::square::Square;

/// State a move needs to restore the position it was applied to.
///
/// Filled in by `Position::apply`, never by the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct UndoState {
    /// Number of moves on the apply stack before this one
    pub(crate) ply: u32,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant_column: Option<usize>,
}

/// One transition of a position.
///
/// Moves coming out of the generator are fully specified. A move built with
/// [`Move::query`] has no origin yet and must be resolved against the legal
/// moves before it can be applied.
///
/// Equality and hashing only look at origin, destination and promotion,
/// which is what a user-entered move can be matched on.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub(crate) piece: PieceKind,
    pub(crate) from: Option<Square>,
    pub(crate) to: Square,
    pub(crate) capture: Option<PieceKind>,
    pub(crate) promotion: Option<PieceKind>,
    pub(crate) en_passant: bool,
    pub(crate) castling: Option<CastleSide>,
    pub(crate) check: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) undo: Option<UndoState>,
}

impl Move {
    /// A quiet move of `piece` from `from` to `to`
    #[must_use]
    pub const fn new(piece: PieceKind, from: Square, to: Square) -> Self {
        Move {
            piece,
            from: Some(from),
            to,
            capture: None,
            promotion: None,
            en_passant: false,
            castling: None,
            check: false,
            undo: None,
        }
    }

    /// A move known only by piece kind and destination, awaiting resolution
    #[must_use]
    pub const fn query(piece: PieceKind, to: Square) -> Self {
        Move {
            piece,
            from: None,
            to,
            capture: None,
            promotion: None,
            en_passant: false,
            castling: None,
            check: false,
            undo: None,
        }
    }

    /// A pawn capturing en passant; the captured pawn is implied
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        let mut mv = Move::new(PieceKind::Pawn, from, to);
        mv.capture = Some(PieceKind::Pawn);
        mv.en_passant = true;
        mv
    }

    /// The two-square king shift of a castle
    #[must_use]
    pub const fn castle(color: Color, side: CastleSide) -> Self {
        let rank = color.back_rank();
        let mut mv = Move::new(
            PieceKind::King,
            Square(rank, 4),
            Square(rank, side.king_to_file()),
        );
        mv.castling = Some(side);
        mv
    }

    #[must_use]
    pub const fn with_capture(mut self, captured: PieceKind) -> Self {
        self.capture = Some(captured);
        self
    }

    #[must_use]
    pub const fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> PieceKind {
        self.piece
    }

    /// Origin square, `None` until the move is resolved
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Option<Square> {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Kind of the captured piece (a Pawn for en passant)
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<PieceKind> {
        self.capture
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub const fn castling(&self) -> Option<CastleSide> {
        self.castling
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        self.castling.is_some()
    }

    /// Display-only flag, see `Position::annotate_check`
    #[inline]
    #[must_use]
    pub const fn gives_check(&self) -> bool {
        self.check
    }

    /// Returns true once the origin square is known
    #[inline]
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.from.is_some()
    }

    /// True if this move has been applied and carries its undo state
    #[inline]
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        self.undo.is_some()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.promotion.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.castling {
            Some(CastleSide::King) => write!(f, "O-O")?,
            Some(CastleSide::Queen) => write!(f, "O-O-O")?,
            None => {
                write!(f, "{}", self.piece.algebraic())?;
                if let Some(from) = self.from {
                    let sep = if self.capture.is_some() { 'x' } else { '-' };
                    write!(f, "{from}{sep}")?;
                }
                write!(f, "{}", self.to)?;
                if let Some(promo) = self.promotion {
                    write!(f, "{}", promo.algebraic())?;
                } else if self.en_passant {
                    write!(f, "e.p.")?;
                }
            }
        }
        if self.check {
            write!(f, "+")?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;

const EMPTY_MOVE: Move = Move::query(PieceKind::Pawn, Square(0, 0));

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// Membership by move equality (origin, destination, promotion)
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
