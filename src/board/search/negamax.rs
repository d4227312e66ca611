//! Fail-soft negamax with alpha-beta pruning.
//!
//! Moves are searched in generation order; there is no move ordering,
//! quiescence or transposition table.

use std::time::Instant;

use log::trace;

use super::super::eval::INFINITY;
use super::super::{Move, Position};
use super::SearchParams;

/// State for a single search call
pub(super) struct SearchContext<'a> {
    pub position: &'a mut Position,
    pub params: SearchParams,
    pub deadline: Option<Instant>,
    pub nodes: u64,
    pub timed_out: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(position: &'a mut Position, params: SearchParams, deadline: Option<Instant>) -> Self {
        SearchContext {
            position,
            params,
            deadline,
            nodes: 0,
            timed_out: false,
        }
    }

    fn deadline_passed(&mut self) -> bool {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.timed_out = true;
            }
        }
        self.timed_out
    }

    /// Score of the side to move and the line achieving it.
    ///
    /// Leaves the position as it was found.
    pub fn negamax(&mut self, depth: u32, ply: u32, mut alpha: i32, beta: i32) -> (i32, Vec<Move>) {
        self.nodes += 1;

        let color = self.position.side_to_move();
        let moves = if depth == 0 {
            None
        } else {
            Some(self.position.legal_moves(color))
        };
        let moves = match moves {
            Some(moves) if !moves.is_empty() => moves,
            // Mate and stalemate are scored by the evaluation itself
            _ => {
                let score = self
                    .position
                    .evaluate(self.params.coef_mobility, self.params.coef_material);
                return (score, Vec::new());
            }
        };

        let mut best_score = -INFINITY;
        let mut best_line: Vec<Move> = Vec::new();

        for mv in moves {
            if !best_line.is_empty() && self.deadline_passed() {
                break;
            }

            let mut applied = mv;
            self.position.apply(&mut applied);
            let (child_score, child_line) = self.negamax(depth - 1, ply + 1, -beta, -alpha);
            self.position.undo(&applied);
            let score = -child_score;

            if ply == 0 {
                trace!("root move {mv} scored {score}");
            }

            if score > best_score {
                best_score = score;
                best_line.clear();
                best_line.push(mv);
                best_line.extend(child_line);
            }

            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        (best_score, best_line)
    }
}
