//! Property-based tests using proptest.

use crate::board::{Color, Move, PieceKind, Position};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=24usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Pick a random legal move for the side to move, if any
fn random_move(position: &mut Position, rng: &mut StdRng) -> Option<Move> {
    let moves = position.legal_moves(position.side_to_move());
    if moves.is_empty() {
        return None;
    }
    moves.get(rng.gen_range(0..moves.len()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: applying moves and undoing them in reverse restores the position exactly
    #[test]
    fn prop_apply_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let initial = position.clone();
        let initial_fen = position.to_fen();

        let mut history: Vec<Move> = Vec::new();
        for _ in 0..num_moves {
            let Some(mut mv) = random_move(&mut position, &mut rng) else {
                break;
            };
            position.apply(&mut mv);
            history.push(mv);
        }

        while let Some(mv) = history.pop() {
            position.undo(&mv);
        }

        prop_assert_eq!(&position, &initial);
        prop_assert_eq!(position.to_fen(), initial_fen);
    }

    /// Property: every legal move is pseudo-legal and never leaves the mover in check
    #[test]
    fn prop_legal_moves_are_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let color = position.side_to_move();
            let pseudo = position.pseudo_legal_moves(color);
            let legal = position.legal_moves(color);
            for mv in &legal {
                prop_assert!(pseudo.contains(mv));
                let after = position.after(*mv);
                prop_assert!(!after.is_check(color), "{} leaves {} in check", mv, color);
            }

            let Some(mut mv) = random_move(&mut position, &mut rng) else {
                break;
            };
            position.apply(&mut mv);
        }
    }

    /// Property: each side keeps exactly one king and the king cache tracks it
    #[test]
    fn prop_one_king_per_side(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let Some(mut mv) = random_move(&mut position, &mut rng) else {
                break;
            };
            position.apply(&mut mv);

            for color in Color::BOTH {
                let kings: Vec<_> = position
                    .pieces()
                    .filter(|(_, p)| p.color == color && p.kind == PieceKind::King)
                    .collect();
                prop_assert_eq!(kings.len(), 1);
                prop_assert_eq!(kings[0].0, position.king_square(color));
            }
        }
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let Some(mut mv) = random_move(&mut position, &mut rng) else {
                break;
            };
            position.apply(&mut mv);
        }

        let restored = Position::from_fen(&position.to_fen());
        prop_assert_eq!(&restored, &position);
    }

    /// Property: evaluation leaves the position untouched
    #[test]
    fn prop_evaluate_is_pure(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let Some(mut mv) = random_move(&mut position, &mut rng) else {
                break;
            };
            position.apply(&mut mv);
        }

        let before = position.clone();
        let _ = position.evaluate(1, 1);
        prop_assert_eq!(&position, &before);
    }
}
