use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::board::{Board, OthelloMove, Square};
use crate::error::CommandError;
use crate::evaluation::Heuristic;
use crate::rules::OthelloRules;
use crate::search::SearchEngine;
use crate::types::{EngineConfig, MAX_DEPTH, MIN_DEPTH};

pub const ENGINE_NAME: &str = "magnetite";

/// Read commands from stdin until `quit` or end of input.
pub fn run(config: EngineConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config);

    for line in stdin.lock().lines() {
        let line = line?;
        let mut out = stdout.lock();
        let keep_going = session.handle(&line, &mut out)?;
        out.flush()?;
        if !keep_going {
            break;
        }
    }

    Ok(())
}

/// Engine state that lives across commands: current position and options.
pub struct Session {
    board: Board,
    config: EngineConfig,
    engine: SearchEngine<OthelloRules, Heuristic>,
}

impl Session {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            board: Board::default(),
            engine: SearchEngine::with_config(OthelloRules, Heuristic, &config),
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Handle one input line. Returns `false` once the session should end.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = tokens.first() else {
            return Ok(true);
        };

        match command {
            "magnetite" => {
                writeln!(out, "id name {} {}", ENGINE_NAME, env!("CARGO_PKG_VERSION"))?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min {} max {}",
                    self.config.max_depth, MIN_DEPTH, MAX_DEPTH
                )?;
                writeln!(
                    out,
                    "option name MoveTime type spin default {} min 1 max 600000",
                    self.config.time_budget.as_millis()
                )?;
                writeln!(out, "magnetiteok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "newgame" => {
                self.board = Board::default();
            }
            "position" => match parse_position(&tokens) {
                Ok(board) => self.board = board,
                Err(e) => log::warn!("ignoring `{}`: {}", line.trim(), e),
            },
            "go" => {
                let params = parse_go(&tokens);
                self.go(&params, out)?;
            }
            "setoption" => {
                if let Err(e) = parse_setoption(&tokens, &mut self.config) {
                    log::warn!("ignoring `{}`: {}", line.trim(), e);
                }
            }
            "d" | "print" => {
                writeln!(out, "{}", self.board)?;
                writeln!(out, "{}", self.board.to_board_string())?;
            }
            "quit" => return Ok(false),
            other => log::debug!("unknown command `{}`", other),
        }

        Ok(true)
    }

    fn go(&mut self, params: &GoParams, out: &mut impl Write) -> io::Result<()> {
        let side = self.board.side_to_move();
        let depth = params
            .depth
            .unwrap_or(self.config.max_depth)
            .clamp(MIN_DEPTH, MAX_DEPTH);
        let budget = params
            .movetime
            .map(Duration::from_millis)
            .unwrap_or(self.config.time_budget);

        self.engine.set_max_depth(depth);
        match self.engine.select_move(&self.board, side, budget) {
            Some(selected) => {
                let stats = selected.stats;
                writeln!(
                    out,
                    "info depth {} score {} nodes {} leaves {} pruned {} time {}",
                    stats.max_ply,
                    selected.score,
                    stats.nodes,
                    stats.leaves,
                    stats.pruned,
                    selected.elapsed.as_millis()
                )?;
                writeln!(out, "bestmove {}", selected.mv)?;
            }
            None => writeln!(out, "bestmove pass")?,
        }
        Ok(())
    }
}

/// Parsed `go` command parameters.
#[derive(Debug, Default, PartialEq, Eq)]
struct GoParams {
    depth: Option<i32>,
    movetime: Option<u64>,
}

fn parse_go(tokens: &[&str]) -> GoParams {
    let mut params = GoParams::default();
    let mut i = 1;

    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                i += 1;
                params.depth = tokens.get(i).and_then(|t| t.parse().ok());
            }
            "movetime" => {
                i += 1;
                params.movetime = tokens.get(i).and_then(|t| t.parse().ok());
            }
            _ => {}
        }
        i += 1;
    }

    params
}

/// `position startpos [moves ...]` or `position board <cells> <side> [moves ...]`.
fn parse_position(tokens: &[&str]) -> Result<Board, CommandError> {
    let mut idx = 1;
    let mut board = match tokens.get(idx) {
        Some(&"startpos") => {
            idx += 1;
            Board::default()
        }
        Some(&"board") => {
            let (Some(cells), Some(side)) = (tokens.get(idx + 1), tokens.get(idx + 2)) else {
                return Err(CommandError::Syntax("board needs cells and a side".to_string()));
            };
            idx += 3;
            format!("{} {}", cells, side).parse()?
        }
        _ => return Err(CommandError::Syntax("expected startpos or board".to_string())),
    };

    if tokens.get(idx) == Some(&"moves") {
        for &token in &tokens[idx + 1..] {
            board = apply_move_token(&board, token)?;
        }
    } else if let Some(extra) = tokens.get(idx) {
        return Err(CommandError::Syntax(format!("unexpected `{}`", extra)));
    }

    Ok(board)
}

/// A square for the side to move, or `pass`.
fn apply_move_token(board: &Board, token: &str) -> Result<Board, CommandError> {
    if token.eq_ignore_ascii_case("pass") {
        return Ok(board.try_pass()?);
    }
    let square: Square = token.parse()?;
    Ok(board.try_move(OthelloMove::new(square, board.side_to_move()))?)
}

fn parse_setoption(tokens: &[&str], config: &mut EngineConfig) -> Result<(), CommandError> {
    let name_idx = tokens.iter().position(|&t| t == "name");
    let value_idx = tokens.iter().position(|&t| t == "value");

    let (Some(ni), Some(vi)) = (name_idx, value_idx) else {
        return Err(CommandError::Syntax("expected name and value".to_string()));
    };
    if vi <= ni {
        return Err(CommandError::Syntax("value before name".to_string()));
    }

    let name: String = tokens[ni + 1..vi].join(" ");
    let value: String = tokens[vi + 1..].join(" ");
    let number: u64 = value
        .parse()
        .map_err(|_| CommandError::Syntax(format!("`{}` is not a number", value)))?;

    match name.to_lowercase().as_str() {
        "depth" => config.max_depth = number.clamp(MIN_DEPTH as u64, MAX_DEPTH as u64) as i32,
        "movetime" => config.time_budget = Duration::from_millis(number.clamp(1, 600_000)),
        _ => return Err(CommandError::Syntax(format!("unknown option `{}`", name))),
    }

    Ok(())
}
