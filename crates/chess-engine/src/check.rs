//! Check and checkmate detection.

use crate::legal::has_any_legal_move;
use crate::movegen::candidates_for;
use crate::Position;
use chess_core::Color;

/// Which kings are currently attacked.
///
/// Derived from the position alone; nothing is cached between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckStatus {
    pub white_in_check: bool,
    pub black_in_check: bool,
}

impl CheckStatus {
    /// Returns true if the king of `color` is attacked.
    #[inline]
    pub const fn in_check(self, color: Color) -> bool {
        match color {
            Color::White => self.white_in_check,
            Color::Black => self.black_in_check,
        }
    }

    /// Returns true if either king is attacked.
    #[inline]
    pub const fn is_any(self) -> bool {
        self.white_in_check || self.black_in_check
    }

    /// Returns the color in check, White first if both are.
    pub const fn checked_color(self) -> Option<Color> {
        if self.white_in_check {
            Some(Color::White)
        } else if self.black_in_check {
            Some(Color::Black)
        } else {
            None
        }
    }

    fn set(&mut self, color: Color) {
        match color {
            Color::White => self.white_in_check = true,
            Color::Black => self.black_in_check = true,
        }
    }
}

/// Computes which kings are attacked.
///
/// A king is in check when any candidate move of an opposing piece lands on
/// its tile. Candidates never include friendly tiles, so a king found among
/// them always belongs to the other side.
pub fn compute_check_status(position: &Position) -> CheckStatus {
    let mut status = CheckStatus::default();

    for (_, placed) in position.pieces() {
        for &to in &candidates_for(position, placed) {
            if let Some(target) = position.piece_at(to) {
                if target.piece.is_king() {
                    status.set(target.color);
                }
            }
        }
    }

    status
}

/// Returns the winner if a checked side has no legal move.
///
/// White is examined before Black.
pub fn find_checkmate(position: &Position, status: CheckStatus) -> Option<Color> {
    Color::ALL
        .into_iter()
        .find(|&color| status.in_check(color) && !has_any_legal_move(position, color))
        .map(Color::opposite)
}
