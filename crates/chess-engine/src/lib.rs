//! Two-player chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - 8×8 grid of [`PieceId`] references
//! - [`Position`] - the board plus the arena of pieces standing on it
//! - Candidate move generation per piece ([`movegen`])
//! - Self-check filtering ([`legal`]), check and checkmate detection
//!   ([`check`])
//! - [`GameState`] - turns, move application, selection and restart
//!
//! # Rules
//!
//! Standard piece movement without castling, en passant, promotion or any
//! draw rule. A game ends only by checkmate.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Tile};
//! use chess_engine::GameState;
//!
//! let tile = |name: &str| Tile::from_algebraic(name).unwrap();
//!
//! let mut game = GameState::new();
//! for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
//!     game.apply_move(tile(from), tile(to)).unwrap();
//! }
//! assert!(game.is_checkmate());
//! assert_eq!(game.winner(), Some(Color::Black));
//! ```

mod board;
pub mod check;
mod game;
pub mod legal;
pub mod movegen;
mod position;

pub use board::{Board, PieceId};
pub use check::{compute_check_status, find_checkmate, CheckStatus};
pub use game::{GameError, GameMove, GameState, GameStatus, SelectOutcome, Selection};
pub use legal::{all_legal_moves, has_any_legal_move, legal_moves};
pub use movegen::{candidate_moves, TileList};
pub use position::{PlacedPiece, Position};
