//! Candidate move generation.
//!
//! Candidates are the tiles a piece can geometrically reach: they respect
//! the board edge, blocking pieces and the ban on landing on a friendly
//! piece, but ignore whether the move would expose the mover's own king.
//! See [`crate::legal`] for the filtered set.

mod attacks;
pub mod perft;

use crate::{PieceId, PlacedPiece, Position};
use chess_core::{Color, Piece, Tile};

pub use attacks::{
    bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves,
};

// Placeholder for unused slots; never read past `len`.
const NO_TILE: Tile = match Tile::new(0, 0) {
    Some(t) => t,
    None => unreachable!(),
};

/// A list of tiles with a fixed maximum capacity.
///
/// A single piece reaches at most 27 tiles (a centralised queen), so the
/// list lives on the stack.
#[derive(Clone)]
pub struct TileList {
    tiles: [Tile; Self::MAX_TILES],
    len: usize,
}

impl TileList {
    /// Maximum number of candidate tiles for one piece.
    pub const MAX_TILES: usize = 32;

    /// Creates an empty tile list.
    #[inline]
    pub const fn new() -> Self {
        TileList {
            tiles: [NO_TILE; Self::MAX_TILES],
            len: 0,
        }
    }

    /// Adds a tile to the list.
    #[inline]
    pub fn push(&mut self, tile: Tile) {
        debug_assert!(self.len < Self::MAX_TILES);
        self.tiles[self.len] = tile;
        self.len += 1;
    }

    /// Adds a tile unless it is already present.
    #[inline]
    pub fn push_unique(&mut self, tile: Tile) {
        if !self.contains(tile) {
            self.push(tile);
        }
    }

    /// Returns the number of tiles.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the tiles.
    #[inline]
    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles[..self.len]
    }

    /// Returns true if the tile is in the list.
    #[inline]
    pub fn contains(&self, tile: Tile) -> bool {
        self.as_slice().contains(&tile)
    }

    /// Clears the tile list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Retains only tiles for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Tile) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.tiles[read]) {
                self.tiles[write] = self.tiles[read];
                write += 1;
            }
        }
        self.len = write;
    }

    /// Copies the tiles into a vector.
    pub fn to_vec(&self) -> Vec<Tile> {
        self.as_slice().to_vec()
    }
}

impl Default for TileList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TileList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for TileList {}

impl std::ops::Index<usize> for TileList {
    type Output = Tile;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.tiles[index]
    }
}

impl<'a> IntoIterator for &'a TileList {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for TileList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Returns true if a piece of `color` may land on the tile: it is empty or
/// holds an opposing piece.
///
/// Off-board destinations never reach this check; [`Tile::offset`] has
/// already turned them into `None`.
#[inline]
pub fn is_move_good(position: &Position, color: Color, tile: Tile) -> bool {
    position.color_at(tile) != Some(color)
}

/// Returns true if the tile holds a piece of the color opposing `color`.
#[inline]
pub fn is_enemy_on_tile(position: &Position, color: Color, tile: Tile) -> bool {
    position.color_at(tile) == Some(color.opposite())
}

/// Generates the candidate moves of the piece with the given id.
///
/// Returns an empty list if the id no longer resolves.
pub fn candidate_moves(position: &Position, id: PieceId) -> TileList {
    match position.get(id) {
        Some(placed) => candidates_for(position, placed),
        None => TileList::new(),
    }
}

/// Generates the candidate moves of a placed piece.
pub fn candidates_for(position: &Position, placed: &PlacedPiece) -> TileList {
    let mut moves = TileList::new();
    let (from, color) = (placed.tile, placed.color);

    match placed.piece {
        Piece::King => king_moves(position, from, color, &mut moves),
        Piece::Queen => queen_moves(position, from, color, &mut moves),
        Piece::Bishop => bishop_moves(position, from, color, &mut moves),
        Piece::Knight => knight_moves(position, from, color, &mut moves),
        Piece::Rook => rook_moves(position, from, color, &mut moves),
        Piece::Pawn(state) => pawn_moves(position, from, color, state, &mut moves),
    }

    moves
}
