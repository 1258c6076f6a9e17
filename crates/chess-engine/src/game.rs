//! Game management: turns, check flags, checkmate and the selection workflow.
//!
//! [`GameState`] is the only type a front-end needs. It owns the live
//! [`Position`], accepts moves for the side to move and recomputes check and
//! checkmate after every move. Moves arrive either directly through
//! [`GameState::apply_move`] or through the click-style
//! [`GameState::select_tile`] workflow.

use crate::check::{compute_check_status, find_checkmate, CheckStatus};
use crate::legal::legal_moves;
use crate::{PieceId, Position};
use chess_core::{Color, FenError, FenParser, Move, Piece, Tile};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Error type for game operations.
///
/// A rejected move leaves the game untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("game has already ended")]
    GameAlreadyOver,

    #[error("no piece on {0}")]
    NoPieceOnTile(Tile),

    #[error("the piece on {tile} belongs to {color}, but it is {turn}'s turn")]
    NotYourTurn { tile: Tile, color: Color, turn: Color },

    #[error("{0} is occupied by a piece of the side to move")]
    OwnPieceOnTile(Tile),

    #[error("a king cannot be captured on {0}")]
    KingCapture(Tile),

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("invalid layout: {0}")]
    InvalidLayout(#[from] FenError),

    #[error("layout has no {0} king")]
    MissingKing(Color),
}

/// A move recorded in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMove {
    /// The move as played.
    pub mov: Move,
    /// The piece that moved, with its flags before the move.
    pub piece: Piece,
    /// The side that played it.
    pub color: Color,
    /// The piece captured on the destination, if any.
    pub captured: Option<Piece>,
}

/// The currently selected piece and its cached legal destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    piece: PieceId,
    tile: Tile,
    moves: Vec<Tile>,
}

impl Selection {
    /// Id of the selected piece.
    pub fn piece(&self) -> PieceId {
        self.piece
    }

    /// Tile the selected piece stands on.
    pub fn tile(&self) -> Tile {
        self.tile
    }

    /// Legal destinations of the selected piece, king tiles excluded.
    pub fn moves(&self) -> &[Tile] {
        &self.moves
    }

    /// Returns true if the tile is one of the cached destinations.
    pub fn allows(&self, tile: Tile) -> bool {
        self.moves.contains(&tile)
    }
}

/// What a click on a tile did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// A piece of the side to move was picked up.
    Selected,
    /// The selection was dropped without a move.
    Deselected,
    /// The selected piece moved to the clicked tile.
    Moved(Move),
    /// Nothing happened.
    Ignored,
}

/// Summary of the game for status displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check(Color),
    Checkmate { winner: Color },
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check(color) => write!(f, "{} is in check", color),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
        }
    }
}

/// A two-player game on one board.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current position.
    position: Position,
    /// Layout the game started from; restart rebuilds it.
    start: FenParser,
    /// Side to move.
    turn: Color,
    white_king: PieceId,
    black_king: PieceId,
    check: CheckStatus,
    /// Winner once checkmate has been declared.
    winner: Option<Color>,
    selection: Option<Selection>,
    history: Vec<GameMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Starts a new game from the standard layout, White to move.
    pub fn new() -> Self {
        let position = Position::startpos();
        let (white_king, black_king) = match (
            position.king_of(Color::White),
            position.king_of(Color::Black),
        ) {
            (Some(w), Some(b)) => (w, b),
            _ => unreachable!("the standard layout has both kings"),
        };

        GameState {
            position,
            start: FenParser::default(),
            turn: Color::White,
            white_king,
            black_king,
            check: CheckStatus::default(),
            winner: None,
            selection: None,
            history: Vec::new(),
        }
    }

    /// Starts a game from a layout string (`placement [w|b]`).
    ///
    /// Both sides need a king. Check and checkmate are evaluated right away,
    /// so a layout that is already mate yields a finished game.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let start = FenParser::parse(fen)?;
        let position = Position::from_layout(&start);
        let white_king = position
            .king_of(Color::White)
            .ok_or(GameError::MissingKing(Color::White))?;
        let black_king = position
            .king_of(Color::Black)
            .ok_or(GameError::MissingKing(Color::Black))?;

        let mut game = GameState {
            position,
            turn: start.active_color,
            start,
            white_king,
            black_king,
            check: CheckStatus::default(),
            winner: None,
            selection: None,
            history: Vec::new(),
        };
        game.update_check();
        game.update_checkmate();
        Ok(game)
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns true if the white king is attacked.
    pub fn is_white_check(&self) -> bool {
        self.check.white_in_check
    }

    /// Returns true if the black king is attacked.
    pub fn is_black_check(&self) -> bool {
        self.check.black_in_check
    }

    /// Returns both check flags.
    pub fn check_status(&self) -> CheckStatus {
        self.check
    }

    /// Returns true once checkmate has been declared.
    pub fn is_checkmate(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns the winner, if the game is over.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Returns a summary of the game state.
    pub fn status(&self) -> GameStatus {
        match (self.winner, self.check.checked_color()) {
            (Some(winner), _) => GameStatus::Checkmate { winner },
            (None, Some(color)) => GameStatus::Check(color),
            (None, None) => GameStatus::InProgress,
        }
    }

    /// Returns the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the piece and its owner on the tile, if any.
    pub fn piece_at(&self, tile: Tile) -> Option<(Piece, Color)> {
        self.position.piece_at(tile).map(|p| (p.piece, p.color))
    }

    /// Returns the tile of the king of the given color.
    pub fn king_tile(&self, color: Color) -> Option<Tile> {
        let id = match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        };
        self.position.get(id).map(|p| p.tile)
    }

    /// Returns the current selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Returns the moves played so far, oldest first.
    pub fn history(&self) -> &[GameMove] {
        &self.history
    }

    /// Exports the current layout and side to move.
    pub fn to_fen(&self) -> String {
        FenParser {
            piece_placement: self.position.to_placement(),
            active_color: self.turn,
        }
        .to_fen()
    }

    /// Returns the legal destinations of the piece on `from`.
    ///
    /// Empty if the tile is empty, holds a piece of the side not to move, or
    /// the game is over. Tiles holding a king are never included.
    pub fn legal_moves_for(&self, from: Tile) -> Vec<Tile> {
        if self.is_checkmate() {
            return Vec::new();
        }
        match self.position.occupant(from) {
            Some(id) if self.position.color_at(from) == Some(self.turn) => self.destinations(id),
            _ => Vec::new(),
        }
    }

    /// Plays a move for the side to move.
    ///
    /// On success the turn passes to the other side, check and checkmate are
    /// recomputed and any selection is cleared. On error nothing changes.
    pub fn apply_move(&mut self, from: Tile, to: Tile) -> Result<(), GameError> {
        let id = self.validate(from, to).map_err(|e| {
            debug!(%from, %to, error = %e, "move rejected");
            e
        })?;
        self.play(id, Move::new(from, to));
        Ok(())
    }

    /// Handles a click on a tile.
    ///
    /// With nothing selected, a piece of the side to move becomes the
    /// selection. Clicking the selected piece again drops it. Clicking any
    /// other tile plays the move if the tile is a cached destination, and
    /// clears the selection either way. Clicks are ignored after checkmate.
    pub fn select_tile(&mut self, tile: Tile) -> SelectOutcome {
        if self.is_checkmate() {
            return SelectOutcome::Ignored;
        }

        let Some(selection) = self.selection.take() else {
            return match self.position.occupant(tile) {
                Some(id) if self.position.color_at(tile) == Some(self.turn) => {
                    let moves = self.destinations(id);
                    debug!(%tile, moves = moves.len(), "piece selected");
                    self.selection = Some(Selection {
                        piece: id,
                        tile,
                        moves,
                    });
                    SelectOutcome::Selected
                }
                _ => SelectOutcome::Ignored,
            };
        };

        if selection.tile == tile || !selection.allows(tile) {
            debug!(tile = %selection.tile, "selection cleared");
            return SelectOutcome::Deselected;
        }

        let mov = Move::new(selection.tile, tile);
        self.play(selection.piece, mov);
        SelectOutcome::Moved(mov)
    }

    /// Drops the current selection, if any.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Rebuilds the layout the game started from and resets all flags.
    pub fn restart(&mut self) {
        let position = Position::from_layout(&self.start);
        if let (Some(w), Some(b)) = (
            position.king_of(Color::White),
            position.king_of(Color::Black),
        ) {
            self.white_king = w;
            self.black_king = b;
        }
        self.position = position;
        self.turn = self.start.active_color;
        self.check = CheckStatus::default();
        self.winner = None;
        self.selection = None;
        self.history.clear();
        self.update_check();
        self.update_checkmate();
        info!(fen = %self.to_fen(), "game restarted");
    }

    /// Legal destinations of a piece, minus any tile holding a king.
    fn destinations(&self, id: PieceId) -> Vec<Tile> {
        legal_moves(&self.position, id)
            .as_slice()
            .iter()
            .copied()
            .filter(|&to| !self.holds_king(to))
            .collect()
    }

    fn holds_king(&self, tile: Tile) -> bool {
        self.position
            .piece_at(tile)
            .is_some_and(|p| p.piece.is_king())
    }

    fn validate(&self, from: Tile, to: Tile) -> Result<PieceId, GameError> {
        if self.is_checkmate() {
            return Err(GameError::GameAlreadyOver);
        }

        let id = self
            .position
            .occupant(from)
            .ok_or(GameError::NoPieceOnTile(from))?;
        let color = self
            .position
            .color_at(from)
            .ok_or(GameError::NoPieceOnTile(from))?;
        if color != self.turn {
            return Err(GameError::NotYourTurn {
                tile: from,
                color,
                turn: self.turn,
            });
        }

        if self.position.color_at(to) == Some(color) {
            return Err(GameError::OwnPieceOnTile(to));
        }
        if self.holds_king(to) {
            return Err(GameError::KingCapture(to));
        }
        if !legal_moves(&self.position, id).contains(to) {
            return Err(GameError::IllegalMove(Move::new(from, to)));
        }

        Ok(id)
    }

    /// Applies an already validated move and hands the turn over.
    fn play(&mut self, id: PieceId, mov: Move) {
        let Some(&placed) = self.position.get(id) else {
            return;
        };

        let captured = self.position.move_piece(id, mov.to()).map(|c| c.piece);
        debug!(
            mov = %mov,
            piece = placed.piece.name(),
            color = %placed.color,
            captured = captured.map(Piece::name),
            "move applied"
        );

        self.history.push(GameMove {
            mov,
            piece: placed.piece,
            color: placed.color,
            captured,
        });
        self.selection = None;
        self.turn = self.turn.opposite();
        self.update_check();
        self.update_checkmate();
    }

    fn update_check(&mut self) {
        self.check = compute_check_status(&self.position);
        if let Some(color) = self.check.checked_color() {
            info!(%color, "check");
        }
    }

    fn update_checkmate(&mut self) {
        if !self.check.is_any() {
            return;
        }
        self.winner = find_checkmate(&self.position, self.check);
        if let Some(winner) = self.winner {
            info!(%winner, "checkmate");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::PawnState;

    fn tile(name: &str) -> Tile {
        Tile::from_algebraic(name).unwrap()
    }

    fn play(game: &mut GameState, moves: &[(&str, &str)]) {
        for (from, to) in moves {
            game.apply_move(tile(from), tile(to)).unwrap();
        }
    }

    #[test]
    fn new_game() {
        let game = GameState::new();
        assert_eq!(game.turn(), Color::White);
        assert!(!game.is_white_check());
        assert!(!game.is_black_check());
        assert!(!game.is_checkmate());
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.king_tile(Color::White), Some(tile("e1")));
        assert_eq!(game.king_tile(Color::Black), Some(tile("e8")));
        assert_eq!(game.to_fen(), FenParser::STARTPOS);
    }

    #[test]
    fn apply_move_flips_turn() {
        let mut game = GameState::new();
        game.apply_move(tile("e2"), tile("e4")).unwrap();
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(
            game.piece_at(tile("e4")).map(|(_, c)| c),
            Some(Color::White)
        );
        assert!(game.piece_at(tile("e2")).is_none());
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].mov.to_uci(), "e2e4");
    }

    #[test]
    fn rejected_moves_leave_state_unchanged() {
        let mut game = GameState::new();
        let before = game.to_fen();

        assert_eq!(
            game.apply_move(tile("e4"), tile("e5")),
            Err(GameError::NoPieceOnTile(tile("e4")))
        );
        assert!(matches!(
            game.apply_move(tile("e7"), tile("e5")),
            Err(GameError::NotYourTurn { .. })
        ));
        assert_eq!(
            game.apply_move(tile("a1"), tile("a2")),
            Err(GameError::OwnPieceOnTile(tile("a2")))
        );
        assert_eq!(
            game.apply_move(tile("e2"), tile("e5")),
            Err(GameError::IllegalMove(Move::new(tile("e2"), tile("e5"))))
        );

        assert_eq!(game.to_fen(), before);
        assert_eq!(game.turn(), Color::White);
        assert!(game.history().is_empty());
    }

    #[test]
    fn king_tile_is_never_a_destination() {
        // White to move while Black's king stands on the rook's file.
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/4RK2 w").unwrap();
        assert!(game.is_black_check());
        assert!(!game.legal_moves_for(tile("e1")).contains(&tile("e8")));
        assert_eq!(
            game.apply_move(tile("e1"), tile("e8")),
            Err(GameError::KingCapture(tile("e8")))
        );
    }

    #[test]
    fn legal_moves_for_wrong_side_is_empty() {
        let game = GameState::new();
        assert!(game.legal_moves_for(tile("e7")).is_empty());
        assert!(game.legal_moves_for(tile("e4")).is_empty());
        let mut moves = game.legal_moves_for(tile("g1"));
        moves.sort();
        assert_eq!(moves, vec![tile("f3"), tile("h3")]);
    }

    #[test]
    fn pawn_double_step_only_before_first_move() {
        let mut game = GameState::new();
        play(&mut game, &[("e2", "e3"), ("a7", "a6")]);
        assert_eq!(game.legal_moves_for(tile("e3")), vec![tile("e4")]);

        let (piece, _) = game.piece_at(tile("e3")).unwrap();
        assert_eq!(piece, Piece::Pawn(PawnState::from_flags(false, true)));
    }

    #[test]
    fn fools_mate() {
        let mut game = GameState::new();
        play(
            &mut game,
            &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
        );
        assert!(game.is_white_check());
        assert!(game.is_checkmate());
        assert_eq!(game.winner(), Some(Color::Black));
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );

        assert_eq!(
            game.apply_move(tile("a2"), tile("a3")),
            Err(GameError::GameAlreadyOver)
        );
        assert!(game.legal_moves_for(tile("a2")).is_empty());
        assert_eq!(game.select_tile(tile("a2")), SelectOutcome::Ignored);
    }

    #[test]
    fn check_is_reported() {
        let mut game = GameState::new();
        play(
            &mut game,
            &[("e2", "e4"), ("f7", "f6"), ("d1", "h5")],
        );
        assert!(game.is_black_check());
        assert!(!game.is_white_check());
        assert_eq!(game.status(), GameStatus::Check(Color::Black));
        assert!(!game.is_checkmate());

        // Only g7-g6 blocks; the king and other pieces cannot help.
        let mut replies = Vec::new();
        for (_, placed) in game.position().pieces_of(Color::Black) {
            for to in game.legal_moves_for(placed.tile) {
                replies.push(Move::new(placed.tile, to).to_uci());
            }
        }
        assert_eq!(replies, vec!["g7g6"]);
    }

    #[test]
    fn select_then_move() {
        let mut game = GameState::new();
        assert_eq!(game.select_tile(tile("e2")), SelectOutcome::Selected);
        let selection = game.selection().unwrap();
        assert_eq!(selection.tile(), tile("e2"));
        assert_eq!(selection.moves(), &[tile("e3"), tile("e4")]);

        assert_eq!(
            game.select_tile(tile("e4")),
            SelectOutcome::Moved(Move::new(tile("e2"), tile("e4")))
        );
        assert!(game.selection().is_none());
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn select_same_piece_deselects() {
        let mut game = GameState::new();
        game.select_tile(tile("g1"));
        assert_eq!(game.select_tile(tile("g1")), SelectOutcome::Deselected);
        assert!(game.selection().is_none());
    }

    #[test]
    fn select_unreachable_tile_deselects_without_moving() {
        let mut game = GameState::new();
        game.select_tile(tile("e2"));
        assert_eq!(game.select_tile(tile("d2")), SelectOutcome::Deselected);
        assert_eq!(game.select_tile(tile("e5")), SelectOutcome::Ignored);
        assert_eq!(game.turn(), Color::White);
        assert!(game.history().is_empty());
    }

    #[test]
    fn select_ignores_opponent_and_empty_tiles() {
        let mut game = GameState::new();
        assert_eq!(game.select_tile(tile("e7")), SelectOutcome::Ignored);
        assert_eq!(game.select_tile(tile("e4")), SelectOutcome::Ignored);
        assert!(game.selection().is_none());
    }

    #[test]
    fn restart_resets_everything() {
        let mut game = GameState::new();
        play(
            &mut game,
            &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
        );
        assert!(game.is_checkmate());

        game.restart();
        assert!(!game.is_checkmate());
        assert_eq!(game.winner(), None);
        assert_eq!(game.turn(), Color::White);
        assert!(game.history().is_empty());
        assert_eq!(game.to_fen(), FenParser::STARTPOS);
        assert_eq!(game.king_tile(Color::White), Some(tile("e1")));
        game.apply_move(tile("e2"), tile("e4")).unwrap();
    }

    #[test]
    fn restart_uses_the_starting_layout() {
        let fen = "4k3/8/8/8/8/8/4P3/4K3 b";
        let mut game = GameState::from_fen(fen).unwrap();
        game.apply_move(tile("e8"), tile("d8")).unwrap();
        game.restart();
        assert_eq!(game.to_fen(), fen);
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn layout_without_king_is_rejected() {
        assert_eq!(
            GameState::from_fen("8/8/8/8/8/8/8/4K3").unwrap_err(),
            GameError::MissingKing(Color::Black)
        );
        assert!(matches!(
            GameState::from_fen("not a layout"),
            Err(GameError::InvalidLayout(_))
        ));
    }

    #[test]
    fn mated_layout_is_finished_at_once() {
        let game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b").unwrap();
        assert!(game.is_checkmate());
        assert_eq!(game.winner(), Some(Color::White));
    }

    #[test]
    fn capture_is_recorded() {
        let mut game = GameState::new();
        play(&mut game, &[("e2", "e4"), ("d7", "d5"), ("e4", "d5")]);
        let last = game.history().last().unwrap();
        assert_eq!(last.color, Color::White);
        assert!(last.piece.is_pawn());
        assert!(last.captured.is_some_and(Piece::is_pawn));
        assert_eq!(game.position().piece_count(), 31);
    }
}
