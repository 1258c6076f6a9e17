//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Piece`] and [`Color`] for piece representation, with [`PawnState`]
//!   carrying the pawn's movement flags
//! - [`Tile`] for board coordinates
//! - [`Move`] for move representation
//! - Board layout parsing (FEN-style piece placement)

mod color;
mod fen;
mod mov;
mod piece;
mod tile;

pub use color::Color;
pub use fen::{FenError, FenParser};
pub use mov::Move;
pub use piece::{PawnState, Piece};
pub use tile::{Tile, TileError};
