//! Chess piece representation.

use crate::Color;

/// Movement flags carried by a pawn.
///
/// A pawn goes through two irreversible transitions, one per call to
/// [`PawnState::record_move`]: `initial_move` drops to false on the first
/// call, then `has_moved` rises to true on the second. Placing a pawn on
/// its starting tile counts as the first call, so the double step stays
/// available until the pawn's first real move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PawnState {
    initial_move: bool,
    has_moved: bool,
}

impl PawnState {
    /// A pawn that has not been moved onto any tile yet.
    pub const fn new() -> Self {
        PawnState {
            initial_move: true,
            has_moved: false,
        }
    }

    /// Builds a state from raw flags.
    pub const fn from_flags(initial_move: bool, has_moved: bool) -> Self {
        PawnState {
            initial_move,
            has_moved,
        }
    }

    /// True until the pawn is first moved onto a tile.
    #[inline]
    pub const fn initial_move(self) -> bool {
        self.initial_move
    }

    /// True from the pawn's second move onward.
    #[inline]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    /// Returns true if the two-tile advance is still available.
    #[inline]
    pub const fn can_double_step(self) -> bool {
        !self.has_moved
    }

    /// Advances the flags after the pawn is moved onto a tile.
    pub fn record_move(&mut self) {
        if self.initial_move {
            self.initial_move = false;
        } else if !self.has_moved {
            self.has_moved = true;
        }
    }
}

impl Default for PawnState {
    fn default() -> Self {
        Self::new()
    }
}

/// The six kinds of chess pieces. Only the pawn carries state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn(PawnState),
}

impl Piece {
    /// A pawn with fresh flags.
    pub const PAWN: Piece = Piece::Pawn(PawnState::new());

    /// Back rank order from column 0 to column 7.
    pub const BACK_RANK: [Piece; 8] = [
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
    ];

    /// Returns the FEN character for this piece with the given color.
    pub const fn to_fen_char(self, color: Color) -> char {
        let c = match self {
            Piece::Pawn(_) => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a FEN character into a piece and color.
    ///
    /// Pawns come back with fresh flags.
    pub const fn from_fen_char(c: char) -> Option<(Piece, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::PAWN,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        };
        Some((piece, color))
    }

    /// Returns true if this piece moves along rays (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Rook | Piece::Queen)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, Piece::King)
    }

    #[inline]
    pub const fn is_pawn(self) -> bool {
        matches!(self, Piece::Pawn(_))
    }

    /// Updates per-piece state after the piece is moved onto a tile.
    pub fn record_move(&mut self) {
        if let Piece::Pawn(state) = self {
            state.record_move();
        }
    }

    /// Returns the piece's display name.
    pub const fn name(self) -> &'static str {
        match self {
            Piece::Pawn(_) => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
            Piece::King => "King",
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_to_fen() {
        assert_eq!(Piece::PAWN.to_fen_char(Color::White), 'P');
        assert_eq!(Piece::PAWN.to_fen_char(Color::Black), 'p');
        assert_eq!(Piece::King.to_fen_char(Color::White), 'K');
        assert_eq!(Piece::Knight.to_fen_char(Color::Black), 'n');
    }

    #[test]
    fn piece_from_fen() {
        assert_eq!(Piece::from_fen_char('P'), Some((Piece::PAWN, Color::White)));
        assert_eq!(Piece::from_fen_char('p'), Some((Piece::PAWN, Color::Black)));
        assert_eq!(Piece::from_fen_char('K'), Some((Piece::King, Color::White)));
        assert_eq!(Piece::from_fen_char('x'), None);
    }

    #[test]
    fn is_slider() {
        assert!(!Piece::PAWN.is_slider());
        assert!(!Piece::Knight.is_slider());
        assert!(Piece::Bishop.is_slider());
        assert!(Piece::Rook.is_slider());
        assert!(Piece::Queen.is_slider());
        assert!(!Piece::King.is_slider());
    }

    #[test]
    fn pawn_flags_debounce() {
        let mut state = PawnState::new();
        assert!(state.initial_move());
        assert!(!state.has_moved());
        assert!(state.can_double_step());

        state.record_move();
        assert!(!state.initial_move());
        assert!(!state.has_moved());
        assert!(state.can_double_step());

        state.record_move();
        assert!(state.has_moved());
        assert!(!state.can_double_step());

        // Further moves change nothing.
        state.record_move();
        assert_eq!(state, PawnState::from_flags(false, true));
    }

    #[test]
    fn record_move_only_touches_pawns() {
        let mut rook = Piece::Rook;
        rook.record_move();
        assert_eq!(rook, Piece::Rook);

        let mut pawn = Piece::PAWN;
        pawn.record_move();
        assert_eq!(pawn, Piece::Pawn(PawnState::from_flags(false, false)));
    }

    #[test]
    fn back_rank_order() {
        assert_eq!(Piece::BACK_RANK[3], Piece::Queen);
        assert_eq!(Piece::BACK_RANK[4], Piece::King);
        assert_eq!(Piece::BACK_RANK[0], Piece::BACK_RANK[7]);
    }
}
