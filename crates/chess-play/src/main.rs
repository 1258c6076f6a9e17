//! chess-play - two players, one terminal.
//!
//! Reads commands from standard input and redraws the board after each one.
//! Logs go to standard error.

mod command;
mod config;
mod render;

use anyhow::Context;
use chess_engine::{GameState, SelectOutcome};
use clap::Parser;
use command::Command;
use config::PlayConfig;
use render::Renderer;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Two-player chess in the terminal.
#[derive(Parser)]
#[command(name = "chess-play")]
#[command(about = "Two-player chess in the terminal")]
struct Cli {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting layout, e.g. "4k3/8/8/8/8/8/4P3/4K3 w"
    #[arg(long)]
    fen: Option<String>,

    /// Draw pieces with letters instead of chess glyphs
    #[arg(long)]
    ascii: bool,

    /// Log filter, e.g. "debug" or "chess_engine=info"
    #[arg(long)]
    log_level: Option<String>,
}

/// Whether the prompt loop should keep going.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A game plus the way it is drawn.
struct Session {
    game: GameState,
    renderer: Renderer,
}

impl Session {
    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", self.renderer.board(&self.game))?;
        writeln!(out, "{}", self.renderer.status_line(&self.game))
    }

    /// Runs one input line and writes its result.
    fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(command::CommandError::Empty) => return Ok(Flow::Continue),
            Err(e) => {
                writeln!(out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "command");

        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => {
                writeln!(out, "{}", Command::HELP)?;
                return Ok(Flow::Continue);
            }
            Command::Fen => {
                writeln!(out, "{}", self.game.to_fen())?;
                return Ok(Flow::Continue);
            }
            Command::Moves(tile) => {
                let moves = self.game.legal_moves_for(tile);
                if moves.is_empty() {
                    writeln!(out, "no legal moves from {}", tile)?;
                } else {
                    let mut names: Vec<String> = moves.iter().map(|t| t.to_string()).collect();
                    names.sort();
                    writeln!(out, "{}: {}", tile, names.join(" "))?;
                }
                return Ok(Flow::Continue);
            }
            Command::Restart => self.game.restart(),
            Command::Click(tile) => {
                if let SelectOutcome::Ignored = self.game.select_tile(tile) {
                    writeln!(out, "nothing to do on {}", tile)?;
                }
            }
            Command::Play(m) => {
                self.game.clear_selection();
                if let Err(e) = self.game.apply_move(m.from(), m.to()) {
                    writeln!(out, "{}", e)?;
                    return Ok(Flow::Continue);
                }
            }
        }

        self.draw(out)?;
        Ok(Flow::Continue)
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = PlayConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if cli.ascii {
        config.unicode = false;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    init_tracing(&config.log_level);

    let game = match cli.fen.or_else(|| config.start_fen.clone()) {
        Some(fen) => GameState::from_fen(&fen).with_context(|| format!("loading layout '{}'", fen))?,
        None => GameState::new(),
    };
    info!(fen = %game.to_fen(), "starting game");

    let mut session = Session {
        game,
        renderer: Renderer::new(&config),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session.draw(&mut stdout)?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if session.handle(&line, &mut stdout)? == Flow::Quit {
            break;
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    Ok(())
}
