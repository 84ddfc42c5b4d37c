use std::time::{Duration, Instant};

use crate::board::Color;
use crate::rules::{Evaluator, Rules};
use crate::time::Deadline;
use crate::types::{EngineConfig, Score, MAX_DEPTH, MIN_DEPTH, SCORE_INFINITY};

/// Counters for one `select_move` call. Diagnostics only, never used to pick a move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// nodes expanded below the root
    pub nodes: u64,
    /// nodes answered with a static evaluation (time, depth or no moves)
    pub leaves: u64,
    /// sibling lists cut short by `alpha >= beta`
    pub pruned: u64,
    /// deepest ply visited
    pub max_ply: u32,
}

/// The move chosen by a search, with the value it was chosen for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectedMove<M> {
    pub mv: M,
    pub score: Score,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

impl<M> SelectedMove<M> {
    pub fn new(mv: M, score: Score, stats: SearchStats, elapsed: Duration) -> Self {
        Self {
            mv,
            score,
            stats,
            elapsed,
        }
    }
}

/// Per-call constants threaded through the recursion.
struct SearchLimits {
    me: Color,
    deadline: Deadline,
}

/// Fixed-depth minimax with alpha-beta pruning under a wall-clock deadline.
pub struct SearchEngine<R, E> {
    rules: R,
    evaluator: E,
    max_depth: i32,
    stats: SearchStats,
}

impl<R, E> SearchEngine<R, E>
where
    R: Rules,
    E: Evaluator<R::State>,
{
    /// `max_depth` is clamped to `MIN_DEPTH..=MAX_DEPTH`.
    pub fn new(rules: R, evaluator: E, max_depth: i32) -> Self {
        Self {
            rules,
            evaluator,
            max_depth: max_depth.clamp(MIN_DEPTH, MAX_DEPTH),
            stats: SearchStats::default(),
        }
    }

    pub fn with_config(rules: R, evaluator: E, config: &EngineConfig) -> Self {
        Self::new(rules, evaluator, config.max_depth)
    }

    pub fn set_max_depth(&mut self, max_depth: i32) {
        self.max_depth = max_depth.clamp(MIN_DEPTH, MAX_DEPTH);
    }

    /// Statistics of the most recent `select_move` call.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Pick a move for `me`, or `None` when `me` has no legal move.
    ///
    /// Every root move is searched with a full window. The first move with the
    /// strictly highest value wins. If no value beats negative infinity the
    /// first legal move is returned, so a move always comes back when one exists.
    pub fn select_move(
        &mut self,
        state: &R::State,
        me: Color,
        time_budget: Duration,
    ) -> Option<SelectedMove<R::Move>> {
        let start = Instant::now();
        let limits = SearchLimits {
            me,
            deadline: Deadline::after(time_budget),
        };
        self.stats = SearchStats::default();

        let moves = self.rules.legal_moves(state, me);
        let Some(&first) = moves.first() else {
            log::debug!("no legal moves for {me}");
            return None;
        };

        let mut best_move = None;
        let mut best_score = -SCORE_INFINITY;

        for &mv in &moves {
            let child = self.rules.apply(state, mv);
            let score = self.alpha_beta(
                &child,
                self.max_depth.saturating_sub(1),
                -SCORE_INFINITY,
                SCORE_INFINITY,
                !me,
                1,
                &limits,
            );

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        let mv = best_move.unwrap_or(first);
        let elapsed = start.elapsed();

        log::debug!(
            "search depth {} nodes {} leaves {} pruned {} score {} time {}ms",
            self.stats.max_ply,
            self.stats.nodes,
            self.stats.leaves,
            self.stats.pruned,
            best_score,
            elapsed.as_millis()
        );
        if limits.deadline.is_expired() {
            log::debug!("deadline reached, deeper nodes were cut to static evaluation");
        }

        Some(SelectedMove::new(mv, best_score, self.stats, elapsed))
    }

    /// Alpha-beta over alternating max/min levels. Values are always from `me`'s view.
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        state: &R::State,
        depth: i32,
        mut alpha: Score,
        mut beta: Score,
        to_move: Color,
        ply: u32,
        limits: &SearchLimits,
    ) -> Score {
        self.stats.nodes += 1;
        if ply > self.stats.max_ply {
            self.stats.max_ply = ply;
        }

        if limits.deadline.is_expired() || depth <= 0 {
            return self.leaf(state, limits.me);
        }

        let moves = self.rules.legal_moves(state, to_move);
        if moves.is_empty() {
            // no pass: a side without moves ends the line here
            return self.leaf(state, limits.me);
        }

        if to_move == limits.me {
            let mut value = -SCORE_INFINITY;
            for &mv in &moves {
                let child = self.rules.apply(state, mv);
                let score =
                    self.alpha_beta(&child, depth - 1, alpha, beta, !to_move, ply + 1, limits);
                value = value.max(score);
                alpha = alpha.max(value);

                if alpha >= beta {
                    self.stats.pruned += 1;
                    break;
                }
            }
            value
        } else {
            let mut value = SCORE_INFINITY;
            for &mv in &moves {
                let child = self.rules.apply(state, mv);
                let score =
                    self.alpha_beta(&child, depth - 1, alpha, beta, !to_move, ply + 1, limits);
                value = value.min(score);
                beta = beta.min(value);

                if alpha >= beta {
                    self.stats.pruned += 1;
                    break;
                }
            }
            value
        }
    }

    #[inline]
    fn leaf(&mut self, state: &R::State, me: Color) -> Score {
        self.stats.leaves += 1;
        self.evaluator.evaluate(state, me)
    }
}
