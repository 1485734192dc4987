//! Turn order, game status and the public move entry points.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, info, trace};

use crate::attacks::is_king_attacked;
use crate::board::Board;
use crate::chess_move::{Move, MoveKind, MoveRecord, PromotionPiece};
use crate::color::Color;
use crate::error::{MoveError, SetupError};
use crate::legal;
use crate::make_move::execute;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::piece_set::{PieceId, PieceSet, PieceState};
use crate::setup::Setup;
use crate::square::Square;

/// Where a game stands. Every variant except `InProgress` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    TimeExpired { winner: Color },
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning side, if the game ended decisively.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } | GameStatus::TimeExpired { winner } => Some(winner),
            GameStatus::InProgress | GameStatus::Stalemate => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => f.write_str("in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => f.write_str("stalemate"),
            GameStatus::TimeExpired { winner } => write!(f, "time expired, {winner} wins"),
        }
    }
}

/// Outcome of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub kind: MoveKind,
    /// Id of the captured piece, if any.
    pub captured: Option<PieceId>,
    /// The captured piece as it was when taken.
    pub captured_piece: Option<Piece>,
    pub is_check: bool,
    pub is_checkmate: bool,
    /// Status after the move.
    pub status: GameStatus,
}

/// Snapshot of the whole game for display and external consumers.
#[derive(Debug, Clone)]
pub struct GameState {
    pub side_to_move: Color,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_game_over: bool,
    pub status: GameStatus,
    pub alive_pieces: Vec<(PieceId, PieceState)>,
    pub board: Board,
}

/// A single game: authoritative pieces, history, turn and status.
#[derive(Debug, Clone)]
pub struct Game {
    pieces: PieceSet,
    history: Vec<MoveRecord>,
    side_to_move: Color,
    status: GameStatus,
    in_check: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game in the standard starting position, White to move.
    pub fn new() -> Game {
        Game {
            pieces: PieceSet::standard(),
            history: Vec::new(),
            side_to_move: Color::White,
            status: GameStatus::InProgress,
            in_check: false,
        }
    }

    /// Start a game from a custom position.
    ///
    /// The status is classified immediately, so a setup can begin already
    /// checkmated or stalemated.
    pub fn from_setup(setup: Setup) -> Result<Game, SetupError> {
        let Setup {
            side_to_move,
            placements,
            moved,
            en_passant,
        } = setup;
        let mut pieces = PieceSet::from_placements(placements)?;

        for square in moved {
            let id = pieces
                .piece_at(square)
                .ok_or(SetupError::NoPieceAt { square })?;
            pieces.state_mut(id).mark_moved();
        }

        if let Some(square) = en_passant {
            let passer = side_to_move.flip();
            let double_step_rank = passer.pawn_rank() as i8 + 2 * passer.pawn_direction();
            let id = pieces
                .piece_at(square)
                .filter(|&id| {
                    let state = &pieces[id];
                    state.kind() == PieceKind::Pawn
                        && state.color() == passer
                        && square.rank() as i8 == double_step_rank
                })
                .ok_or(SetupError::InvalidEnPassant { square })?;
            pieces.state_mut(id).set_en_passant_eligible(true);
        }

        let idle = side_to_move.flip();
        if is_king_attacked(&pieces, &pieces.board(), idle) {
            return Err(SetupError::OpponentInCheck { color: idle });
        }

        let mut game = Game {
            pieces,
            history: Vec::new(),
            side_to_move,
            status: GameStatus::InProgress,
            in_check: false,
        };
        game.classify();
        debug!(side = %side_to_move, status = %game.status, "game set up");
        Ok(game)
    }

    /// Reset to the standard starting position with empty history.
    pub fn start_new_game(&mut self) {
        *self = Game::new();
        debug!("new game started");
    }

    /// Move the piece on `from` to `to`, promoting to a queen if the move
    /// promotes.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveReport, MoveError> {
        self.make_move_with_promotion(from, to, PromotionPiece::default())
    }

    /// Like [`Game::make_move`] with an explicit promotion piece, which is
    /// ignored unless the move promotes.
    pub fn make_move_with_promotion(
        &mut self,
        from: Square,
        to: Square,
        promotion: PromotionPiece,
    ) -> Result<MoveReport, MoveError> {
        self.try_move(from, to, promotion)
            .inspect_err(|err| trace!(%from, %to, error = %err, "move rejected"))
    }

    /// Raw `(file, rank)` entry point. Off-board coordinates yield
    /// [`MoveError::InvalidSquare`].
    pub fn make_move_coords(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<MoveReport, MoveError> {
        let from = Square::try_from(from)?;
        let to = Square::try_from(to)?;
        self.make_move(from, to)
    }

    fn try_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: PromotionPiece,
    ) -> Result<MoveReport, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameAlreadyOver {
                status: self.status,
            });
        }

        let id = self
            .pieces
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource { square: from })?;

        let owner = self.pieces[id].color();
        if owner != self.side_to_move {
            return Err(MoveError::WrongSideToMove {
                square: from,
                owner,
                side_to_move: self.side_to_move,
            });
        }

        let mv = legal::legal_move_to(&self.pieces, id, to)
            .ok_or(MoveError::IllegalDestination { from, to })?
            .with_promotion(promotion);

        Ok(self.commit(mv))
    }

    /// Apply a move already known to be legal and update turn and status.
    pub(crate) fn commit(&mut self, mv: Move) -> MoveReport {
        let side = self.side_to_move;
        let moved = self.pieces[mv.piece()].piece();
        let captured_piece = mv.captured().map(|victim| self.pieces[victim].piece());

        let outcome = execute(&mut self.pieces, &mv);
        debug_assert!(self.pieces.validate().is_ok(), "move broke the piece set");

        let record = MoveRecord {
            sequence: self.history.len() + 1,
            side,
            mv,
            moved,
            captured_piece,
            is_check: outcome.is_check,
            is_checkmate: outcome.is_checkmate,
        };
        self.history.push(record);

        self.side_to_move = side.flip();
        self.in_check = outcome.is_check;
        self.status = if outcome.is_checkmate {
            GameStatus::Checkmate { winner: side }
        } else if outcome.is_stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::InProgress
        };

        debug!(ply = record.sequence(), mv = %record, kind = %mv.kind(), "move played");
        if self.status.is_over() {
            info!(status = %self.status, "game over");
        }

        MoveReport {
            kind: outcome.kind,
            captured: outcome.captured,
            captured_piece,
            is_check: outcome.is_check,
            is_checkmate: outcome.is_checkmate,
            status: self.status,
        }
    }

    /// Recompute check and terminal status for the side to move.
    fn classify(&mut self) {
        let side = self.side_to_move;
        self.in_check = legal::in_check(&self.pieces, side);
        if legal::has_legal_move(&self.pieces, side) {
            self.status = GameStatus::InProgress;
        } else if self.in_check {
            self.status = GameStatus::Checkmate {
                winner: side.flip(),
            };
        } else {
            self.status = GameStatus::Stalemate;
        }
    }

    /// Declare a time forfeit by `losing`. No effect once the game is over.
    pub fn end_game_by_time(&mut self, losing: Color) {
        if self.status.is_over() {
            trace!(status = %self.status, "time forfeit ignored");
            return;
        }
        self.status = GameStatus::TimeExpired {
            winner: losing.flip(),
        };
        info!(status = %self.status, "game over");
    }

    /// Legal destinations of the piece on `square`.
    ///
    /// Empty when the square is empty, holds a piece of the side not on
    /// move, or the game is over.
    pub fn valid_moves(&self, square: Square) -> BTreeSet<Square> {
        if self.status.is_over() {
            return BTreeSet::new();
        }
        match self.pieces.piece_at(square) {
            Some(id) if self.pieces[id].color() == self.side_to_move => {
                legal::legal_destinations(&self.pieces, id)
            }
            _ => BTreeSet::new(),
        }
    }

    /// Every legal move for the side to move, promotions expanded.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_over() {
            return Vec::new();
        }
        legal::all_legal_moves(&self.pieces, self.side_to_move)
    }

    pub fn state(&self) -> GameState {
        GameState {
            side_to_move: self.side_to_move,
            is_check: self.in_check,
            is_checkmate: matches!(self.status, GameStatus::Checkmate { .. }),
            is_game_over: self.status.is_over(),
            status: self.status,
            alive_pieces: self
                .pieces
                .alive()
                .map(|(id, state)| (id, *state))
                .collect(),
            board: self.pieces.board(),
        }
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// `true` if the side to move is in check.
    #[inline]
    pub fn is_check(&self) -> bool {
        self.in_check
    }

    /// Accepted moves, oldest first.
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn pieces(&self) -> &PieceSet {
        &self.pieces
    }

    pub fn board(&self) -> Board {
        self.pieces.board()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn play(game: &mut Game, moves: &[&str]) {
        for mv in moves {
            let (from, to) = mv.split_at(2);
            game.make_move(sq(from), sq(to))
                .unwrap_or_else(|e| panic!("{mv}: {e}"));
        }
    }

    #[test]
    fn new_game_state() {
        let game = Game::new();
        let state = game.state();
        assert_eq!(state.side_to_move, Color::White);
        assert_eq!(state.status, GameStatus::InProgress);
        assert!(!state.is_check);
        assert!(!state.is_game_over);
        assert_eq!(state.alive_pieces.len(), 32);
        assert_eq!(state.board.occupied_count(), 32);
        assert!(game.history().is_empty());
        assert_eq!(game.legal_moves().len(), 20);
    }

    #[test]
    fn errors_in_order() {
        let mut game = Game::new();
        assert_eq!(
            game.make_move(sq("e4"), sq("e5")),
            Err(MoveError::NoPieceAtSource { square: sq("e4") })
        );
        assert_eq!(
            game.make_move(sq("e7"), sq("e5")),
            Err(MoveError::WrongSideToMove {
                square: sq("e7"),
                owner: Color::Black,
                side_to_move: Color::White,
            })
        );
        assert_eq!(
            game.make_move(sq("e2"), sq("e5")),
            Err(MoveError::IllegalDestination {
                from: sq("e2"),
                to: sq("e5"),
            })
        );
        assert_eq!(
            game.make_move_coords((4, 1), (4, 8)),
            Err(MoveError::InvalidSquare { file: 4, rank: 8 })
        );
        assert!(game.history().is_empty());
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn fools_mate() {
        let mut game = Game::new();
        play(&mut game, &["f2f3", "e7e5", "g2g4"]);
        let report = game.make_move(sq("d8"), sq("h4")).unwrap();
        assert!(report.is_check);
        assert!(report.is_checkmate);
        assert_eq!(
            report.status,
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
        assert!(game.state().is_game_over);
        assert!(game.valid_moves(sq("e2")).is_empty());
        assert!(game.legal_moves().is_empty());
        assert_eq!(
            game.make_move(sq("e2"), sq("e4")),
            Err(MoveError::GameAlreadyOver {
                status: game.status()
            })
        );
        assert_eq!(game.history().last().unwrap().to_string(), "d8h4#");
    }

    #[test]
    fn time_forfeit_only_while_in_progress() {
        let mut game = Game::new();
        game.end_game_by_time(Color::White);
        assert_eq!(
            game.status(),
            GameStatus::TimeExpired {
                winner: Color::Black
            }
        );
        game.end_game_by_time(Color::Black);
        assert_eq!(game.status().winner(), Some(Color::Black));

        game.start_new_game();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
    }

    #[test]
    fn valid_moves_only_for_side_to_move() {
        let game = Game::new();
        assert!(game.valid_moves(sq("e7")).is_empty());
        assert!(game.valid_moves(sq("e4")).is_empty());
        let dests: Vec<_> = game.valid_moves(sq("e2")).into_iter().collect();
        assert_eq!(dests, vec![sq("e3"), sq("e4")]);
    }

    #[test]
    fn underpromotion() {
        let mut game = Setup::new(Color::White)
            .place(Piece::WHITE_KING, sq("a1"))
            .place(Piece::WHITE_PAWN, sq("g7"))
            .place(Piece::BLACK_KING, sq("h1"))
            .build()
            .unwrap();
        let report = game
            .make_move_with_promotion(sq("g7"), sq("g8"), PromotionPiece::Knight)
            .unwrap();
        assert_eq!(report.kind, MoveKind::Promotion);
        let knight = game.pieces().piece_at(sq("g8")).unwrap();
        assert_eq!(game.pieces()[knight].piece(), Piece::WHITE_KNIGHT);
        assert_eq!(game.history()[0].to_string(), "g7g8n");
    }

    #[test]
    fn setup_rejects_idle_side_in_check() {
        let err = Setup::new(Color::White)
            .place(Piece::WHITE_KING, sq("e1"))
            .place(Piece::WHITE_ROOK, sq("e2"))
            .place(Piece::BLACK_KING, sq("e8"))
            .build()
            .unwrap_err();
        assert_eq!(err, SetupError::OpponentInCheck { color: Color::Black });
    }

    #[test]
    fn setup_classifies_stalemate() {
        let game = Setup::new(Color::Black)
            .place(Piece::WHITE_KING, sq("f7"))
            .place(Piece::WHITE_QUEEN, sq("g6"))
            .place(Piece::BLACK_KING, sq("h8"))
            .build()
            .unwrap();
        assert_eq!(game.status(), GameStatus::Stalemate);
        assert!(!game.is_check());
    }

    #[test]
    fn setup_en_passant_marker() {
        let mut game = Setup::new(Color::White)
            .place(Piece::WHITE_KING, sq("e1"))
            .place(Piece::WHITE_PAWN, sq("e5"))
            .place(Piece::BLACK_PAWN, sq("d5"))
            .place(Piece::BLACK_KING, sq("e8"))
            .en_passant(sq("d5"))
            .build()
            .unwrap();
        let report = game.make_move(sq("e5"), sq("d6")).unwrap();
        assert_eq!(report.kind, MoveKind::EnPassant);
        assert_eq!(report.captured_piece, Some(Piece::BLACK_PAWN));

        let err = Setup::new(Color::White)
            .place(Piece::WHITE_KING, sq("e1"))
            .place(Piece::BLACK_PAWN, sq("d6"))
            .place(Piece::BLACK_KING, sq("e8"))
            .en_passant(sq("d6"))
            .build()
            .unwrap_err();
        assert_eq!(err, SetupError::InvalidEnPassant { square: sq("d6") });
    }

    #[test]
    fn status_display() {
        assert_eq!(GameStatus::InProgress.to_string(), "in progress");
        assert_eq!(
            GameStatus::Checkmate {
                winner: Color::White
            }
            .to_string(),
            "checkmate, white wins"
        );
        assert_eq!(
            GameStatus::TimeExpired {
                winner: Color::Black
            }
            .to_string(),
            "time expired, black wins"
        );
    }
}
