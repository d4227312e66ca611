//! Static evaluation: mobility differential plus material differential.

use super::Position;

/// Score of a checkmated side to move (negated)
pub const MATE: i32 = 999_999_999;

/// Bound strictly outside every reachable score
pub const INFINITY: i32 = MATE + 1;

/// Score of a stalemate
pub const DRAW: i32 = 0;

impl Position {
    /// Score of the position for the side to move.
    ///
    /// Without legal moves the position is terminal: `-MATE` when in check,
    /// `DRAW` otherwise. Else it is
    /// `mobility_diff * coef_mobility + material_diff * coef_material`, where
    /// mobility counts legal moves. The position is left as it was found.
    pub fn evaluate(&mut self, coef_mobility: i32, coef_material: i32) -> i32 {
        let color = self.side_to_move;
        let mobility = self.legal_moves(color).len() as i32;
        if mobility == 0 {
            return if self.is_check(color) { -MATE } else { DRAW };
        }

        let opponent_mobility = self.legal_moves(color.opponent()).len() as i32;
        let mobility_diff = mobility - opponent_mobility;

        mobility_diff * coef_mobility + self.material_value() * coef_material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_balanced() {
        let mut position = Position::new();
        assert_eq!(position.material_value(), 0);
        assert_eq!(position.evaluate(1, 1), 0);
    }

    #[test]
    fn test_evaluate_leaves_position_untouched() {
        let mut position = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let before = position.clone();
        let _ = position.evaluate(1, 1);
        assert_eq!(position, before);
        assert_eq!(position.side_to_move(), before.side_to_move());
    }

    #[test]
    fn test_coefficients_weight_terms() {
        // White: king + rook; Black: bare king
        let mut position = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        let material_only = position.evaluate(0, 1);
        assert_eq!(material_only, 50);

        let mobility_only = position.evaluate(1, 0);
        let white_moves = position.legal_moves(crate::board::Color::White).len() as i32;
        let black_moves = position.legal_moves(crate::board::Color::Black).len() as i32;
        assert_eq!(mobility_only, white_moves - black_moves);
        assert_eq!(position.evaluate(2, 3), 2 * mobility_only + 3 * material_only);
    }
}
