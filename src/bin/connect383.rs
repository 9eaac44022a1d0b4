//! Connect 383 CLI - play a game between two agents
//!
//! Agents:
//! - `random`: uniform random legal moves
//! - `human`: moves typed on stdin
//! - `minimax`: exact minimax (small boards only)
//! - `heuristic`: depth-limited minimax with the adjacency heuristic
//! - `prune`: alpha-beta with the adjacency heuristic

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::json;

use rust_minimax::games::connect383::{Connect383, DEFAULT_COLS, DEFAULT_ROWS};
use rust_minimax::{play_game, Agent, GameRng, HumanAgent, MinimaxAgent, Player, RandomAgent};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    Random,
    Human,
    Minimax,
    Heuristic,
    Prune,
}

#[derive(Parser, Debug)]
#[command(name = "connect383")]
#[command(version, about = "Play Connect 383 between two agents", long_about = None)]
struct Cli {
    /// Agent for player 1 (X)
    #[arg(long, value_enum, default_value = "human")]
    p1: AgentKind,

    /// Agent for player 2 (O)
    #[arg(long, value_enum, default_value = "prune")]
    p2: AgentKind,

    /// Search depth for the heuristic and prune agents
    #[arg(long, short = 'd', default_value_t = 4)]
    depth: i64,

    /// Board height
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Board width
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Blocked cell as `row,col` (repeatable)
    #[arg(long = "block", value_parser = parse_cell)]
    blocks: Vec<(usize, usize)>,

    /// Random seed for random agents
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the game record as JSON
    #[arg(long)]
    json: bool,
}

fn parse_cell(text: &str) -> Result<(usize, usize)> {
    let Some((row, col)) = text.split_once(',') else {
        bail!("expected `row,col`, got `{text}`");
    };
    let row = row.trim().parse().with_context(|| format!("bad row in `{text}`"))?;
    let col = col.trim().parse().with_context(|| format!("bad column in `{text}`"))?;
    Ok((row, col))
}

fn build_agent(
    kind: AgentKind,
    player: Player,
    depth: i64,
    rng: &GameRng,
) -> Result<Box<dyn Agent<Connect383>>> {
    let agent: Box<dyn Agent<Connect383>> = match kind {
        AgentKind::Random => Box::new(RandomAgent::from_rng(rng.for_player(player))),
        AgentKind::Human => Box::new(HumanAgent::stdio()),
        AgentKind::Minimax => Box::new(MinimaxAgent::minimax()),
        AgentKind::Heuristic => Box::new(MinimaxAgent::heuristic(depth)?),
        AgentKind::Prune => Box::new(MinimaxAgent::prune(depth)?),
    };
    Ok(agent)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut builder = Connect383::builder().rows(cli.rows).cols(cli.cols);
    for &(row, col) in &cli.blocks {
        builder = builder.block(row, col);
    }
    let game = builder.build().context("invalid board")?;

    let rng = GameRng::new(cli.seed);
    let mut p1 = build_agent(cli.p1, Player::One, cli.depth, &rng)?;
    let mut p2 = build_agent(cli.p2, Player::Two, cli.depth, &rng)?;

    println!("{game}\n");
    let record = play_game(game, [p1.as_mut(), p2.as_mut()])?;

    if cli.json {
        let moves: Vec<usize> = record.moves.iter().map(|step| step.mv).collect();
        let summary = json!({
            "moves": moves,
            "board": record.final_state.to_string().lines().collect::<Vec<_>>(),
            "score": record.score,
            "outcome": record.outcome,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}\n", record.final_state);
        println!("Score: {} ({})", record.score, record.outcome);
    }

    Ok(())
}
