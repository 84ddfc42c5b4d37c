use crate::board::{Board, Color, OthelloMove};
use crate::evaluation::Heuristic;
use crate::rules::OthelloRules;
use crate::search::{SearchEngine, SearchStats, SelectedMove};
use crate::types::EngineConfig;

pub trait Agent {
    fn name(&self) -> &str;

    /// The color this agent plays.
    fn side(&self) -> Color;

    /// A legal move for `self.side()` on `board`, or `None` when there is none.
    fn select_move(&mut self, board: &Board) -> Option<OthelloMove>;
}

/// Alpha-beta search agent with a per-move time budget.
pub struct AlphaBetaAgent {
    name: String,
    side: Color,
    config: EngineConfig,
    engine: SearchEngine<OthelloRules, Heuristic>,
    last: Option<SelectedMove<OthelloMove>>,
}

impl AlphaBetaAgent {
    pub const DEFAULT_NAME: &'static str = "AlphaBetaAgent";

    pub fn new(side: Color) -> Self {
        Self::with_name(Self::DEFAULT_NAME, side)
    }

    /// Named agent playing black until `set_side` says otherwise.
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_name(name, Color::Black)
    }

    pub fn with_name(name: impl Into<String>, side: Color) -> Self {
        let config = EngineConfig::default();
        Self {
            name: name.into(),
            side,
            engine: SearchEngine::with_config(OthelloRules, Heuristic, &config),
            config,
            last: None,
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.engine.set_max_depth(config.max_depth);
        self.config = config;
        self
    }

    pub fn set_side(&mut self, side: Color) {
        self.side = side;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Result of the most recent search, `None` before the first or after a pass.
    pub fn last_search(&self) -> Option<&SelectedMove<OthelloMove>> {
        self.last.as_ref()
    }

    pub fn stats(&self) -> SearchStats {
        self.engine.stats()
    }
}

impl Agent for AlphaBetaAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn side(&self) -> Color {
        self.side
    }

    fn select_move(&mut self, board: &Board) -> Option<OthelloMove> {
        self.last = self
            .engine
            .select_move(board, self.side, self.config.time_budget);
        self.last.map(|selected| selected.mv)
    }
}

/// One-ply agent: takes the placement that flips the most discs, first one on ties.
pub struct GreedyAgent {
    name: String,
    side: Color,
}

impl GreedyAgent {
    pub const DEFAULT_NAME: &'static str = "GreedyAgent";

    pub fn new(side: Color) -> Self {
        Self::with_name(Self::DEFAULT_NAME, side)
    }

    pub fn with_name(name: impl Into<String>, side: Color) -> Self {
        Self {
            name: name.into(),
            side,
        }
    }
}

impl Agent for GreedyAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn side(&self) -> Color {
        self.side
    }

    fn select_move(&mut self, board: &Board) -> Option<OthelloMove> {
        let mut best: Option<(OthelloMove, u32)> = None;
        for mv in board.legal_moves(self.side) {
            let captured = board.flips(self.side, mv.square()).popcnt();
            if best.is_none_or(|(_, most)| captured > most) {
                best = Some((mv, captured));
            }
        }
        best.map(|(mv, _)| mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn quick() -> EngineConfig {
        EngineConfig::default()
            .with_depth(3)
            .with_time_budget(Duration::from_secs(60))
    }

    #[test]
    fn test_alphabeta_names() {
        assert_eq!(AlphaBetaAgent::new(Color::Black).name(), "AlphaBetaAgent");
        let agent = AlphaBetaAgent::with_name("deep", Color::White);
        assert_eq!(agent.name(), "deep");
        assert_eq!(agent.side(), Color::White);
        assert_eq!(agent.config(), &EngineConfig::default());
        assert_eq!(AlphaBetaAgent::named("solo").side(), Color::Black);
    }

    #[test]
    fn test_alphabeta_plays_legal_move() {
        let board = Board::default();
        let mut agent = AlphaBetaAgent::new(Color::Black).with_config(quick());
        let mv = agent.select_move(&board).unwrap();
        assert!(board.is_legal(mv));
        let last = agent.last_search().unwrap();
        assert_eq!(last.mv, mv);
        assert_eq!(last.stats, agent.stats());
        assert_eq!(last.stats.max_ply, 3);
    }

    #[test]
    fn test_alphabeta_passes_when_stuck() {
        let board: Board = format!("O{} X", "-".repeat(63)).parse().unwrap();
        let mut agent = AlphaBetaAgent::new(Color::Black).with_config(quick());
        assert_eq!(agent.select_move(&board), None);
        assert!(agent.last_search().is_none());
    }

    #[test]
    fn test_set_side() {
        let mut agent = AlphaBetaAgent::with_name("swap", Color::Black).with_config(quick());
        agent.set_side(Color::White);
        let mv = agent.select_move(&Board::default()).unwrap();
        assert_eq!(mv.color(), Color::White);
    }

    #[test]
    fn test_greedy_takes_biggest_capture() {
        // c1 flips one disc, e3 flips three
        let board: Board = concat!(
            "XO------",
            "--------",
            "XOOO----",
            "--------",
            "--------",
            "--------",
            "--------",
            "-------- X"
        )
        .parse()
        .unwrap();
        let mut agent = GreedyAgent::new(Color::Black);
        let mv = agent.select_move(&board).unwrap();
        assert_eq!(mv.to_string(), "e3");
    }

    #[test]
    fn test_greedy_first_on_ties() {
        // all four opening moves flip exactly one disc
        let mut agent = GreedyAgent::new(Color::Black);
        let mv = agent.select_move(&Board::default()).unwrap();
        assert_eq!(mv.to_string(), "d3");
    }
}

// The turn manager only knows about `Agent`. Each strategy owns whatever state it needs and is
// asked for a move once per turn.
