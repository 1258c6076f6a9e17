//! Text rendering of the board and the status line.

use crate::config::PlayConfig;
use chess_core::{Color, Piece, Tile};
use chess_engine::{GameState, GameStatus};
use std::fmt::Write;

/// Draws a game as text.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    unicode: bool,
    show_coordinates: bool,
    highlight_moves: bool,
}

impl Renderer {
    pub fn new(config: &PlayConfig) -> Self {
        Renderer {
            unicode: config.unicode,
            show_coordinates: config.show_coordinates,
            highlight_moves: config.highlight_moves,
        }
    }

    /// Returns the glyph for a piece.
    pub fn glyph(&self, piece: Piece, color: Color) -> char {
        if !self.unicode {
            return piece.to_fen_char(color);
        }
        match (color, piece) {
            (Color::White, Piece::King) => '♔',
            (Color::White, Piece::Queen) => '♕',
            (Color::White, Piece::Rook) => '♖',
            (Color::White, Piece::Bishop) => '♗',
            (Color::White, Piece::Knight) => '♘',
            (Color::White, Piece::Pawn(_)) => '♙',
            (Color::Black, Piece::King) => '♚',
            (Color::Black, Piece::Queen) => '♛',
            (Color::Black, Piece::Rook) => '♜',
            (Color::Black, Piece::Bishop) => '♝',
            (Color::Black, Piece::Knight) => '♞',
            (Color::Black, Piece::Pawn(_)) => '♟',
        }
    }

    /// Draws the board, rank 8 at the top.
    ///
    /// The selected piece is bracketed, its destinations are marked with `*`
    /// (or parenthesized when a piece stands there) and a checked king is
    /// wrapped in `!`.
    pub fn board(&self, game: &GameState) -> String {
        let selection = game.selection();
        let checked_king = game
            .check_status()
            .checked_color()
            .and_then(|color| game.king_tile(color));

        let mut out = String::new();
        for row in 0..Tile::SIZE {
            if self.show_coordinates {
                let _ = write!(out, "{} ", 8 - row);
            }
            for col in 0..Tile::SIZE {
                let Some(tile) = Tile::new(col, row) else {
                    continue;
                };
                let glyph = game.piece_at(tile).map(|(p, c)| self.glyph(p, c));
                let selected = selection.is_some_and(|s| s.tile() == tile);
                let target = self.highlight_moves && selection.is_some_and(|s| s.allows(tile));

                let cell = match glyph {
                    Some(g) if selected => format!("[{}]", g),
                    Some(g) if checked_king == Some(tile) => format!("!{}!", g),
                    Some(g) if target => format!("({})", g),
                    Some(g) => format!(" {} ", g),
                    None if target => " * ".to_string(),
                    None => " . ".to_string(),
                };
                out.push_str(&cell);
            }
            out.push('\n');
        }

        if self.show_coordinates {
            out.push_str("  ");
            for file in 'a'..='h' {
                let _ = write!(out, " {} ", file);
            }
            out.push('\n');
        }
        out
    }

    /// The line shown under the board.
    pub fn status_line(&self, game: &GameState) -> String {
        match game.status() {
            GameStatus::Checkmate { winner } => format!("CHECKMATE! {} wins", winner),
            GameStatus::Check(_) => format!("{}'s turn. Check!", game.turn()),
            GameStatus::InProgress => format!("{}'s turn", game.turn()),
        }
    }
}
