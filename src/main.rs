//! Strictly Tic-Tac-Toe - Unified CLI
//!
//! Host loop around the engine: self-play, move suggestions and
//! interactive games.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_tictactoe::{
    Agent, Board, Config, Game, GameEvent, HumanPlayer, MinimaxPlayer, Orchestrator, Player,
    Searcher,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Selfplay => run_selfplay(&config),
        Command::Suggest { board } => run_suggest(&config, &board),
        Command::Play { mark } => run_play(&config, mark.unwrap_or(*config.play().human_mark())),
    }
}

/// Prints each board as the game progresses.
fn print_event(event: &GameEvent, game: &Game) {
    match event {
        GameEvent::MoveMade {
            player,
            mark,
            action,
        } => {
            println!("{player} ({mark}) plays {action}");
            println!("{}\n", game.board());
        }
        GameEvent::GameOver { outcome, winner } => match winner {
            Some(name) => println!("{outcome}: {name}"),
            None => println!("{outcome}"),
        },
    }
}

/// Run minimax against itself
#[instrument(skip_all)]
fn run_selfplay(config: &Config) -> Result<()> {
    info!("Starting self-play");
    let searcher = Searcher::new(*config.search());

    let mut orchestrator = Orchestrator::new(
        Box::new(MinimaxPlayer::new("Engine X", searcher)),
        Box::new(MinimaxPlayer::new("Engine O", searcher)),
    );
    orchestrator.run(print_event)?;
    Ok(())
}

/// Print the best move for a board
#[instrument(skip(config))]
fn run_suggest(config: &Config, board: &str) -> Result<()> {
    let board: Board = board.parse().context("Invalid --board")?;
    println!("{board}\n");

    let searcher = Searcher::new(*config.search());
    println!("{}", searcher.suggest(&board, *config.play().show_stats()));
    Ok(())
}

/// Run an interactive game against the engine
#[instrument(skip(config))]
fn run_play(config: &Config, mark: Player) -> Result<()> {
    info!(%mark, "Starting interactive game");
    let searcher = Searcher::new(*config.search());

    let human: Box<dyn Agent> = Box::new(HumanPlayer::new(
        "You",
        std::io::stdin().lock(),
        std::io::stdout(),
    ));
    let engine: Box<dyn Agent> = Box::new(MinimaxPlayer::new("Engine", searcher));
    let (player_x, player_o) = match mark {
        Player::X => (human, engine),
        Player::O => (engine, human),
    };

    println!("{}\n", Board::new());
    Orchestrator::new(player_x, player_o).run(print_event)?;
    Ok(())
}
