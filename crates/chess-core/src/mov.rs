//! Move representation.

use crate::Tile;
use std::fmt;

/// A move of one piece from one tile to another.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Tile,
    to: Tile,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Tile, to: Tile) -> Self {
        Move { from, to }
    }

    /// Returns the source tile.
    #[inline]
    pub const fn from(self) -> Tile {
        self.from
    }

    /// Returns the destination tile.
    #[inline]
    pub const fn to(self) -> Tile {
        self.to
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4").
    pub fn to_uci(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses a move from coordinate notation.
    ///
    /// Only the tile pair is checked; whether the move is legal is up to
    /// the engine.
    pub fn from_uci(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Tile::from_algebraic(&s[0..2])?;
        let to = Tile::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
