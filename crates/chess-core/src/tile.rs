//! Board tile representation.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a tile name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TileError {
    #[error("invalid tile '{0}': expected a file a-h followed by a rank 1-8")]
    InvalidName(String),
}

/// A tile on the board, addressed by column and row.
///
/// Row 0 is Black's back rank and row 7 is White's, so the algebraic name
/// of a tile maps column 0..7 to files `a`..`h` and row 0..7 to ranks
/// `8`..`1`. Both coordinates are always in 0-7.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    row: u8,
    col: u8,
}

impl Tile {
    /// Number of tiles along each side of the board.
    pub const SIZE: u8 = 8;

    /// Creates a tile, or `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if col < Self::SIZE && row < Self::SIZE {
            Some(Tile { row, col })
        } else {
            None
        }
    }

    /// Creates a tile from a row-major index (0-63).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Tile {
                row: (index / 8) as u8,
                col: (index % 8) as u8,
            })
        } else {
            None
        }
    }

    /// Returns the row-major index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the tile shifted by the given deltas, or `None` if the
    /// result leaves the board.
    #[inline]
    pub const fn offset(self, dcol: i8, drow: i8) -> Option<Self> {
        let col = self.col as i8 + dcol;
        let row = self.row as i8 + drow;
        if col < 0 || row < 0 {
            return None;
        }
        Self::new(col as u8, row as u8)
    }

    /// Iterates over all 64 tiles, row by row from row 0.
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..64).filter_map(Tile::from_index)
    }

    /// Parses a tile from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Self::new(file - b'a', b'8' - rank)
    }

    /// Returns the algebraic notation for this tile.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, (b'8' - self.row) as char)
    }
}

impl FromStr for Tile {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tile::from_algebraic(s.trim()).ok_or_else(|| TileError::InvalidName(s.to_string()))
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile({})", self.to_algebraic())
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tile_new_bounds() {
        assert!(Tile::new(0, 0).is_some());
        assert!(Tile::new(7, 7).is_some());
        assert!(Tile::new(8, 0).is_none());
        assert!(Tile::new(0, 8).is_none());
    }

    #[test]
    fn tile_from_algebraic() {
        assert_eq!(Tile::from_algebraic("a8"), Tile::new(0, 0));
        assert_eq!(Tile::from_algebraic("e1"), Tile::new(4, 7));
        assert_eq!(Tile::from_algebraic("E2"), Tile::new(4, 6));
        assert_eq!(Tile::from_algebraic("h1"), Tile::new(7, 7));
        assert_eq!(Tile::from_algebraic("i1"), None);
        assert_eq!(Tile::from_algebraic("a9"), None);
        assert_eq!(Tile::from_algebraic("a0"), None);
        assert_eq!(Tile::from_algebraic(""), None);
    }

    #[test]
    fn tile_to_algebraic() {
        assert_eq!(Tile::new(0, 0).unwrap().to_algebraic(), "a8");
        assert_eq!(Tile::new(4, 4).unwrap().to_algebraic(), "e4");
        assert_eq!(Tile::new(7, 7).unwrap().to_algebraic(), "h1");
    }

    #[test]
    fn tile_offset() {
        let e4 = Tile::from_algebraic("e4").unwrap();
        assert_eq!(e4.offset(0, -1), Tile::from_algebraic("e5"));
        assert_eq!(e4.offset(1, 1), Tile::from_algebraic("f3"));

        let a8 = Tile::new(0, 0).unwrap();
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(0, -1), None);

        let h1 = Tile::new(7, 7).unwrap();
        assert_eq!(h1.offset(1, 0), None);
        assert_eq!(h1.offset(0, 1), None);
    }

    #[test]
    fn tile_from_str() {
        assert_eq!("d4".parse::<Tile>(), Ok(Tile::new(3, 4).unwrap()));
        assert_eq!(
            "z9".parse::<Tile>(),
            Err(TileError::InvalidName("z9".to_string()))
        );
    }

    #[test]
    fn tile_all_covers_board() {
        let tiles: Vec<Tile> = Tile::all().collect();
        assert_eq!(tiles.len(), 64);
        assert_eq!(tiles[0], Tile::new(0, 0).unwrap());
        assert_eq!(tiles[63], Tile::new(7, 7).unwrap());
    }

    #[test]
    fn tile_debug_display() {
        let e4 = Tile::from_algebraic("e4").unwrap();
        assert_eq!(format!("{:?}", e4), "Tile(e4)");
        assert_eq!(format!("{}", e4), "e4");
    }

    proptest! {
        #[test]
        fn offset_stays_on_board(col in 0u8..8, row in 0u8..8, dc in -8i8..=8, dr in -8i8..=8) {
            let tile = Tile::new(col, row).unwrap();
            if let Some(moved) = tile.offset(dc, dr) {
                prop_assert!(moved.col() < 8 && moved.row() < 8);
                prop_assert_eq!(moved.col() as i8, col as i8 + dc);
                prop_assert_eq!(moved.row() as i8, row as i8 + dr);
            }
        }

        #[test]
        fn algebraic_name_parses_back(index in 0usize..64) {
            let tile = Tile::from_index(index).unwrap();
            prop_assert_eq!(Tile::from_algebraic(&tile.to_algebraic()), Some(tile));
        }
    }
}
