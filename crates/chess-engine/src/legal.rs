//! Self-check filtering: turning candidate moves into legal moves.
//!
//! Each candidate is tried on a copy of the position (copy-make). The live
//! position is only ever borrowed, so a filter pass cannot leave it changed.

use crate::check::compute_check_status;
use crate::movegen::{candidate_moves, TileList};
use crate::{PieceId, Position};
use chess_core::{Color, Move, Tile};

/// Returns true if moving the piece to `to` would leave its own king in
/// check. Unknown ids count as invalid.
pub fn leaves_king_in_check(position: &Position, id: PieceId, to: Tile) -> bool {
    let Some(color) = position.get(id).map(|p| p.color) else {
        return true;
    };

    let mut after = position.clone();
    after.move_piece(id, to);
    compute_check_status(&after).in_check(color)
}

/// Returns the candidate moves of the piece that do not expose its own king.
pub fn legal_moves(position: &Position, id: PieceId) -> TileList {
    let mut moves = candidate_moves(position, id);
    moves.retain(|&to| !leaves_king_in_check(position, id, to));
    moves
}

/// Returns true if any piece of `color` has at least one legal move.
pub fn has_any_legal_move(position: &Position, color: Color) -> bool {
    position
        .pieces_of(color)
        .any(|(id, _)| !legal_moves(position, id).is_empty())
}

/// Collects every legal move of `color`, in board order.
pub fn all_legal_moves(position: &Position, color: Color) -> Vec<Move> {
    let mut out = Vec::new();
    for (id, placed) in position.pieces_of(color) {
        for &to in &legal_moves(position, id) {
            out.push(Move::new(placed.tile, to));
        }
    }
    out
}
