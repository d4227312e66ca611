//! Leaf-node counting for validating the move generator.

use super::{Move, Position};

impl Position {
    /// Number of leaf nodes of the legal move tree at `depth`.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(self.side_to_move());
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let mut applied = mv;
            self.apply(&mut applied);
            nodes += self.perft(depth - 1);
            self.undo(&applied);
        }

        nodes
    }

    /// Leaf count below each legal root move, in generation order.
    pub fn perft_divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        let moves = self.legal_moves(self.side_to_move());
        let mut counts = Vec::with_capacity(moves.len());
        for mv in moves {
            let mut applied = mv;
            self.apply(&mut applied);
            let nodes = self.perft(depth.saturating_sub(1));
            self.undo(&applied);
            counts.push((mv, nodes));
        }
        counts
    }
}
