//! Per-piece candidate generation: step patterns and ray walks.

use super::{is_enemy_on_tile, is_move_good, TileList};
use crate::Position;
use chess_core::{Color, PawnState, Tile};

/// The 8 tiles around a king: (col delta, row delta).
const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The 8 L-shaped knight jumps.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (1, -2),
    (-1, -2),
    (2, -1),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (1, 2),
];

/// Left, up, right, down.
const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Up-left, up-right, down-right, down-left.
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

/// Adds every single-step destination that is on the board and not held by
/// a friendly piece.
fn step_moves(
    position: &Position,
    from: Tile,
    color: Color,
    steps: &[(i8, i8)],
    moves: &mut TileList,
) {
    for &(dc, dr) in steps {
        if let Some(to) = from.offset(dc, dr) {
            if is_move_good(position, color, to) {
                moves.push_unique(to);
            }
        }
    }
}

/// Walks each direction outward until the edge or a blocker.
///
/// A friendly blocker ends the ray before its tile; an enemy blocker is
/// included and then ends the ray.
fn ray_moves(
    position: &Position,
    from: Tile,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut TileList,
) {
    for &(dc, dr) in directions {
        let mut current = from;
        while let Some(to) = current.offset(dc, dr) {
            if !is_move_good(position, color, to) {
                break;
            }
            moves.push_unique(to);
            if is_enemy_on_tile(position, color, to) {
                break;
            }
            current = to;
        }
    }
}

/// King: the 8 adjacent tiles. No castling.
pub fn king_moves(position: &Position, from: Tile, color: Color, moves: &mut TileList) {
    step_moves(position, from, color, &KING_STEPS, moves);
}

/// Knight: the 8 L-shaped jumps, ignoring pieces in between.
pub fn knight_moves(position: &Position, from: Tile, color: Color, moves: &mut TileList) {
    step_moves(position, from, color, &KNIGHT_JUMPS, moves);
}

/// Rook: rays along rows and columns.
pub fn rook_moves(position: &Position, from: Tile, color: Color, moves: &mut TileList) {
    ray_moves(position, from, color, &ORTHOGONAL, moves);
}

/// Bishop: rays along the diagonals.
pub fn bishop_moves(position: &Position, from: Tile, color: Color, moves: &mut TileList) {
    ray_moves(position, from, color, &DIAGONAL, moves);
}

/// Queen: king, bishop and rook candidates combined, each tile once.
pub fn queen_moves(position: &Position, from: Tile, color: Color, moves: &mut TileList) {
    king_moves(position, from, color, moves);
    bishop_moves(position, from, color, moves);
    rook_moves(position, from, color, moves);
}

/// Pawn: one step forward onto an empty tile, two while the double step is
/// still available and both tiles are empty, and diagonal steps forward onto
/// enemy pieces. No en passant, no promotion.
pub fn pawn_moves(
    position: &Position,
    from: Tile,
    color: Color,
    state: PawnState,
    moves: &mut TileList,
) {
    let dir = color.pawn_direction();
    let board = position.board();

    if let Some(one) = from.offset(0, dir) {
        if board.is_empty(one) {
            moves.push(one);
            if state.can_double_step() {
                if let Some(two) = from.offset(0, 2 * dir) {
                    if board.is_empty(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(diagonal) = from.offset(dc, dir) {
            if is_enemy_on_tile(position, color, diagonal) {
                moves.push(diagonal);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(name: &str) -> Tile {
        Tile::from_algebraic(name).unwrap()
    }

    #[test]
    fn step_tables_have_no_duplicates() {
        for table in [&KING_STEPS[..], &KNIGHT_JUMPS[..], &ORTHOGONAL[..], &DIAGONAL[..]] {
            let mut sorted = table.to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), table.len());
            assert!(!table.contains(&(0, 0)));
        }
    }

    #[test]
    fn knight_jumps_are_l_shaped() {
        for (dc, dr) in KNIGHT_JUMPS {
            let (a, b) = (dc.abs(), dr.abs());
            assert!((a, b) == (1, 2) || (a, b) == (2, 1));
        }
    }

    #[test]
    fn pawn_second_move_is_single_step() {
        // A pawn that already made its first real move.
        let position = Position::empty();
        let mut moves = TileList::new();
        let state = PawnState::from_flags(false, true);
        pawn_moves(&position, tile("e3"), Color::White, state, &mut moves);
        assert_eq!(moves.to_vec(), vec![tile("e4")]);
    }

    #[test]
    fn pawn_fresh_state_allows_double_step() {
        let position = Position::empty();
        let mut moves = TileList::new();
        let state = PawnState::from_flags(false, false);
        pawn_moves(&position, tile("d7"), Color::Black, state, &mut moves);
        assert_eq!(moves.to_vec(), vec![tile("d6"), tile("d5")]);
    }

    #[test]
    fn ray_on_empty_board_reaches_edge() {
        let position = Position::empty();
        let mut moves = TileList::new();
        rook_moves(&position, tile("a1"), Color::White, &mut moves);
        assert_eq!(moves.len(), 14);
        assert!(moves.contains(tile("a8")));
        assert!(moves.contains(tile("h1")));
    }
}
