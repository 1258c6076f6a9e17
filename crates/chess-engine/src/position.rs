//! Chess position representation.

use chess_core::{Color, FenError, FenParser, Piece, Tile};

use crate::{Board, PieceId};

/// A piece together with its owner and current tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    pub piece: Piece,
    pub color: Color,
    pub tile: Tile,
}

/// Board plus the arena of pieces standing on it.
///
/// Every piece lives in an arena slot addressed by a [`PieceId`], and the
/// board cell under it holds that id. The two are only ever changed
/// together, so a live slot's `tile` always names the cell that refers back
/// to it. Captured pieces leave an empty slot behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    pieces: Vec<Option<PlacedPiece>>,
}

impl Position {
    /// Creates an empty position.
    pub fn empty() -> Self {
        Position {
            board: Board::empty(),
            pieces: Vec::new(),
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        let mut position = Position::empty();
        for color in [Color::Black, Color::White] {
            let back = color.back_rank();
            let pawns = (back as i8 + color.pawn_direction()) as u8;
            for (col, piece) in (0u8..).zip(Piece::BACK_RANK) {
                if let Some(tile) = Tile::new(col, back) {
                    position.spawn(tile, piece, color);
                }
                if let Some(tile) = Tile::new(col, pawns) {
                    position.spawn(tile, Piece::PAWN, color);
                }
            }
        }
        position
    }

    /// Creates a position from a parsed layout.
    pub fn from_layout(layout: &FenParser) -> Self {
        let mut position = Position::empty();
        for (tile, piece, color) in layout.placements() {
            position.spawn(tile, piece, color);
        }
        position
    }

    /// Creates a position from a layout string, ignoring the side to move.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Self::from_layout(&parsed))
    }

    /// Returns the piece placement part of a layout string.
    pub fn to_placement(&self) -> String {
        let mut fen = String::new();

        for row in 0..8u8 {
            let mut empty_count = 0;
            for col in 0..8u8 {
                let placed = Tile::new(col, row).and_then(|tile| self.piece_at(tile));
                if let Some(p) = placed {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(p.piece.to_fen_char(p.color));
                } else {
                    empty_count += 1;
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen
    }

    /// Puts a new piece on the tile and returns its id.
    ///
    /// Being placed counts as the piece's first move onto a tile, which is
    /// what consumes a pawn's `initial_move` flag. Anything already on the
    /// tile is removed.
    pub fn spawn(&mut self, tile: Tile, mut piece: Piece, color: Color) -> PieceId {
        debug_assert!(self.pieces.len() < u16::MAX as usize);
        let id = PieceId::new(self.pieces.len() as u16);
        piece.record_move();
        self.pieces.push(Some(PlacedPiece { piece, color, tile }));
        if let Some(previous) = self.board.place(tile, Some(id)) {
            self.pieces[previous.index()] = None;
        }
        id
    }

    /// Moves a piece to the tile, capturing whatever stands there.
    ///
    /// Clears the source cell, updates the piece's tile and its move flags,
    /// and returns the captured piece if any. Does nothing and returns `None`
    /// if the id no longer resolves.
    pub fn move_piece(&mut self, id: PieceId, to: Tile) -> Option<PlacedPiece> {
        let from = self.get(id)?.tile;

        self.board.place(from, None);
        let captured = self
            .board
            .place(to, Some(id))
            .filter(|&other| other != id)
            .and_then(|other| self.pieces[other.index()].take());

        if let Some(placed) = self.pieces[id.index()].as_mut() {
            placed.tile = to;
            placed.piece.record_move();
        }

        captured
    }

    /// Returns the board grid.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the id of the piece on the tile, if any.
    #[inline]
    pub fn occupant(&self, tile: Tile) -> Option<PieceId> {
        self.board.occupant(tile)
    }

    /// Looks up a piece by id. Captured pieces resolve to `None`.
    #[inline]
    pub fn get(&self, id: PieceId) -> Option<&PlacedPiece> {
        self.pieces.get(id.index()).and_then(Option::as_ref)
    }

    /// Returns the piece on the given tile, if any.
    #[inline]
    pub fn piece_at(&self, tile: Tile) -> Option<&PlacedPiece> {
        self.occupant(tile).and_then(|id| self.get(id))
    }

    /// Returns the color of the piece on the tile, if any.
    #[inline]
    pub fn color_at(&self, tile: Tile) -> Option<Color> {
        self.piece_at(tile).map(|p| p.color)
    }

    /// Iterates over the pieces on the board, row 0 first.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &PlacedPiece)> + '_ {
        self.board
            .occupied()
            .filter_map(move |(_, id)| self.get(id).map(|p| (id, p)))
    }

    /// Iterates over the pieces of one color, row 0 first.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (PieceId, &PlacedPiece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Returns the id of the first king of the given color, if any.
    pub fn king_of(&self, color: Color) -> Option<PieceId> {
        self.pieces_of(color)
            .find(|(_, p)| p.piece.is_king())
            .map(|(id, _)| id)
    }

    /// Returns the number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.board.count()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
