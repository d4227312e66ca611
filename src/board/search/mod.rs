//! Depth-limited adversarial search.
//!
//! A plain negamax with alpha-beta over [`Position::legal_moves`], mutating
//! the position with paired apply/undo. An optional deadline is checked
//! between sibling moves; when it passes the best line found so far is
//! returned.

mod negamax;
mod params;

use std::time::{Duration, Instant};

use log::debug;

use super::eval::INFINITY;
use super::{Move, Position};
use negamax::SearchContext;
pub use params::SearchParams;

/// Depth and optional wall-clock deadline for a search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    pub depth: u32,
    pub deadline: Option<Instant>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits::depth(SearchParams::default().depth)
    }
}

impl SearchLimits {
    /// Fixed depth, no deadline
    #[must_use]
    pub const fn depth(depth: u32) -> Self {
        SearchLimits {
            depth,
            deadline: None,
        }
    }

    /// Stop searching new sibling moves once `budget` has elapsed from now
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.deadline = Some(Instant::now() + budget);
        self
    }

    #[must_use]
    pub const fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Outcome of a search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// First move of the principal variation, `None` when the side to move
    /// has no legal move
    pub best_move: Option<Move>,
    /// Score from the point of view of the side to move
    pub score: i32,
    /// Principal variation, starting with `best_move`
    pub pv: Vec<Move>,
    /// Nodes visited
    pub nodes: u64,
}

impl Position {
    /// Search to `params.depth` with no deadline.
    pub fn search(&mut self, params: &SearchParams) -> SearchResult {
        self.search_with_limits(params, &SearchLimits::depth(params.depth))
    }

    /// Search with the coefficients of `params` under `limits`.
    ///
    /// `limits.depth` takes precedence over `params.depth`. The root is
    /// always searched at least one ply deep so that a move is returned
    /// whenever one exists.
    pub fn search_with_limits(&mut self, params: &SearchParams, limits: &SearchLimits) -> SearchResult {
        let depth = limits.depth.max(1);
        let params = SearchParams { depth, ..*params };
        let mut ctx = SearchContext::new(self, params, limits.deadline);
        let (score, pv) = ctx.negamax(depth, 0, -INFINITY, INFINITY);
        let (nodes, timed_out) = (ctx.nodes, ctx.timed_out);

        debug!(
            "search depth {depth} score {score} nodes {nodes}{} pv {}",
            if timed_out { " (deadline reached)" } else { "" },
            pv.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
        );

        SearchResult {
            best_move: pv.first().copied(),
            score,
            pv,
            nodes,
        }
    }

    /// Score and principal variation of a fail-soft negamax over the window
    /// `(alpha, beta)`, using the coefficients of `params`.
    ///
    /// Depth zero, or a side with no legal moves, returns the static
    /// evaluation and an empty line.
    pub fn negamax(
        &mut self,
        depth: u32,
        alpha: i32,
        beta: i32,
        params: &SearchParams,
    ) -> (i32, Vec<Move>) {
        SearchContext::new(self, *params, None).negamax(depth, 0, alpha, beta)
    }

    /// Best move for the side to move at `depth` with default coefficients.
    ///
    /// A depth of 0 is searched as 1, so `None` means the side to move has
    /// no legal move.
    pub fn best_move(&mut self, depth: u32) -> Option<Move> {
        self.search(&SearchParams::with_depth(depth)).best_move
    }
}

/// Find the best move for the side to move of `position` at a fixed depth.
///
/// Like [`Position::best_move`], a depth of 0 is searched as 1.
pub fn find_best_move(position: &mut Position, depth: u32) -> Option<Move> {
    position.best_move(depth)
}
