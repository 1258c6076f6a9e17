//! The 8×8 grid of piece references.

use chess_core::Tile;
use std::fmt;

/// Stable handle of a piece in a [`Position`](crate::Position)'s arena.
///
/// Ids are handed out in placement order and never reused, so a captured
/// piece's id simply stops resolving.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u16);

impl PieceId {
    #[inline]
    pub(crate) const fn new(index: u16) -> Self {
        PieceId(index)
    }

    /// Returns the arena slot index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PieceId({})", self.0)
    }
}

/// An 8×8 grid where each cell holds at most one piece id.
///
/// The board does not own pieces; it only records which arena slot sits on
/// which tile.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<PieceId>; 64],
}

impl Board {
    /// Creates a board with every cell empty.
    pub const fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// Returns the id of the piece on the tile, if any.
    #[inline]
    pub fn occupant(&self, tile: Tile) -> Option<PieceId> {
        self.cells[tile.index()]
    }

    /// Puts a piece id on the tile, or clears it with `None`.
    ///
    /// Returns whatever was there before.
    #[inline]
    pub fn place(&mut self, tile: Tile, piece: Option<PieceId>) -> Option<PieceId> {
        std::mem::replace(&mut self.cells[tile.index()], piece)
    }

    /// Returns true if no piece sits on the tile.
    #[inline]
    pub fn is_empty(&self, tile: Tile) -> bool {
        self.cells[tile.index()].is_none()
    }

    /// Iterates over occupied tiles, row 0 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Tile, PieceId)> + '_ {
        Tile::all().filter_map(move |tile| self.occupant(tile).map(|id| (tile, id)))
    }

    /// Returns the number of occupied cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in 0..8u8 {
            for col in 0..8u8 {
                let cell = Tile::new(col, row).and_then(|tile| self.occupant(tile));
                match cell {
                    Some(id) => write!(f, "{:>3}", id.0)?,
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
