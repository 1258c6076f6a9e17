//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Castling, en passant and promotion are not part of these rules, so the
//! published counts only hold up to depth 4 from the starting position.

use crate::legal::all_legal_moves;
use crate::Position;
use chess_core::{Color, Move};

fn play(position: &Position, m: Move) -> Position {
    let mut next = position.clone();
    if let Some(id) = next.occupant(m.from()) {
        next.move_piece(id, m.to());
    }
    next
}

/// Counts the number of leaf nodes at the given depth, `color` to move.
pub fn perft(position: &Position, color: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_legal_moves(position, color);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|m| perft(&play(position, m), color.opposite(), depth - 1))
        .sum()
}

/// Perft with divide: node count below each root move, sorted by move.
pub fn perft_divide(position: &Position, color: Color, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = all_legal_moves(position, color)
        .into_iter()
        .map(|m| {
            let nodes = if depth > 1 {
                perft(&play(position, m), color.opposite(), depth - 1)
            } else {
                1
            };
            (m.to_uci(), nodes)
        })
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
