//! FEN-style board layout parsing and serialization.
//!
//! Only the piece placement and the side to move are meaningful to this
//! engine. Castling, en passant and clock fields are accepted when present
//! and then ignored.

use crate::{Color, Piece, Tile};
use thiserror::Error;

/// Errors that can occur when parsing layout strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 1 to 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Parsed layout data.
///
/// Holds the validated placement string and side to move. The engine turns
/// [`FenParser::placements`] into its own position representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Piece placement string, row 0 first (e.g., "rnbqkbnr/pppppppp/8/...").
    pub piece_placement: String,
    /// Side to move.
    pub active_color: Color,
}

impl FenParser {
    /// The standard starting layout.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

    /// Parses a layout string.
    ///
    /// The side to move defaults to White when omitted.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.is_empty() || parts.len() > 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let piece_placement = parts[0];
        Self::validate_piece_placement(piece_placement)?;

        let active_color = match parts.get(1).copied() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(FenParser {
            piece_placement: piece_placement.to_string(),
            active_color,
        })
    }

    fn validate_piece_placement(placement: &str) -> Result<(), FenError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                rows.len()
            )));
        }

        for (i, row) in rows.iter().enumerate() {
            let mut tiles = 0;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    tiles += skip;
                } else if Piece::from_fen_char(c).is_some() {
                    tiles += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - i
                    )));
                }
            }
            if tiles != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} tiles, expected 8",
                    8 - i,
                    tiles
                )));
            }
        }

        Ok(())
    }

    /// Returns every placed piece with its tile, row 0 first.
    pub fn placements(&self) -> Vec<(Tile, Piece, Color)> {
        let mut out = Vec::new();
        for (row, row_str) in self.piece_placement.split('/').enumerate() {
            let mut col = 0u32;
            for c in row_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip;
                } else if let Some((piece, color)) = Piece::from_fen_char(c) {
                    if let Some(tile) = Tile::new(col as u8, row as u8) {
                        out.push((tile, piece, color));
                    }
                    col += 1;
                }
            }
        }
        out
    }

    /// Converts the parsed layout back to a layout string.
    pub fn to_fen(&self) -> String {
        let color = match self.active_color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{} {}", self.piece_placement, color)
    }
}

impl Default for FenParser {
    fn default() -> Self {
        FenParser {
            piece_placement: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".to_string(),
            active_color: Color::White,
        }
    }
}
