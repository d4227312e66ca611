use once_cell::sync::Lazy;

use super::Square;

/// Rank/file step of a ray or jump
pub(crate) type Offset = (isize, isize);

/// Rook rays: left, right, up, down
pub(crate) const ROOK_DIRECTIONS: [Offset; 4] = [(0, -1), (0, 1), (1, 0), (-1, 0)];

/// Bishop rays: up-right, up-left, down-left, down-right
pub(crate) const BISHOP_DIRECTIONS: [Offset; 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub(crate) const KING_OFFSETS: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const KNIGHT_OFFSETS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board knight targets per square, in `KNIGHT_OFFSETS` order
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| jump_targets(&KNIGHT_OFFSETS));

/// On-board king targets per square, in `KING_OFFSETS` order
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| jump_targets(&KING_OFFSETS));

fn jump_targets(offsets: &[Offset]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        offsets
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
}
