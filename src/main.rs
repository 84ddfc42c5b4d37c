use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use magnetite::agent::{Agent, AlphaBetaAgent, GreedyAgent};
use magnetite::board::Color;
use magnetite::game::Game;
use magnetite::protocol;
use magnetite::types::{EngineConfig, DEFAULT_DEPTH, DEFAULT_TIME_BUDGET_MS, MAX_DEPTH, MIN_DEPTH};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Search depth in plies
    #[arg(
        long,
        default_value_t = DEFAULT_DEPTH,
        value_parser = clap::value_parser!(i32).range(i64::from(MIN_DEPTH)..=i64::from(MAX_DEPTH))
    )]
    depth: i32,

    /// Time budget per move in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIME_BUDGET_MS)]
    movetime: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one game between two agents and print the moves
    Play {
        #[arg(long, value_enum, default_value_t = AgentKind::Alphabeta)]
        black: AgentKind,

        #[arg(long, value_enum, default_value_t = AgentKind::Greedy)]
        white: AgentKind,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AgentKind {
    Alphabeta,
    Greedy,
}

fn build_agent(kind: AgentKind, side: Color, config: &EngineConfig) -> Box<dyn Agent> {
    match kind {
        AgentKind::Alphabeta => Box::new(AlphaBetaAgent::new(side).with_config(config.clone())),
        AgentKind::Greedy => Box::new(GreedyAgent::new(side)),
    }
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(args) {
        log::error!("fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = EngineConfig::default()
        .with_depth(args.depth)
        .with_time_budget(Duration::from_millis(args.movetime));

    match args.command {
        None => protocol::run(config).context("protocol loop failed"),
        Some(Command::Play { black, white }) => {
            let mut black = build_agent(black, Color::Black, &config);
            let mut white = build_agent(white, Color::White, &config);
            let record = Game::default()
                .play(black.as_mut(), white.as_mut())
                .context("game aborted")?;

            let moves: Vec<String> = record.turns.iter().map(|t| t.to_string()).collect();
            println!("{}", moves.join(" "));
            println!("{}", record.final_board);
            match record.winner {
                Some(color) => println!("winner: {}", color),
                None => println!("draw"),
            }
            Ok(())
        }
    }
}
