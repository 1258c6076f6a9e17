//! Parsing of the commands typed at the prompt.

use chess_core::{Move, Tile, TileError};
use thiserror::Error;

/// A parsed prompt command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A tile name, handled like a click on that tile.
    Click(Tile),
    /// A full move such as `e2e4`.
    Play(Move),
    /// List the legal moves of the piece on a tile.
    Moves(Tile),
    Restart,
    Fen,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("'moves' needs a tile, e.g. 'moves e2'")]
    MissingTile,

    #[error(transparent)]
    InvalidTile(#[from] TileError),
}

impl Command {
    pub const HELP: &'static str = "\
Commands:
  e2          select the piece on e2, or move the selected piece there
  e2e4        move the piece on e2 to e4
  moves e2    list the legal moves of the piece on e2
  restart, r  start over from the initial layout
  fen         print the current layout
  help        show this text
  quit, q     leave";

    /// Parses one input line. Case and surrounding whitespace are ignored.
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let line = input.trim().to_ascii_lowercase();
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };

        match head {
            "quit" | "q" | "exit" | "esc" => Ok(Command::Quit),
            "restart" | "r" => Ok(Command::Restart),
            "fen" => Ok(Command::Fen),
            "help" | "h" | "?" => Ok(Command::Help),
            "moves" | "m" => {
                let tile = words.next().ok_or(CommandError::MissingTile)?;
                Ok(Command::Moves(tile.parse()?))
            }
            _ if head.len() == 2 => Ok(Command::Click(head.parse()?)),
            _ => Move::from_uci(head)
                .map(Command::Play)
                .ok_or_else(|| CommandError::Unknown(head.to_string())),
        }
    }
}
