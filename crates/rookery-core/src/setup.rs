//! Builder for custom starting positions.

use crate::color::Color;
use crate::error::SetupError;
use crate::game::Game;
use crate::piece::Piece;
use crate::square::Square;

/// A position to start a [`Game`] from.
///
/// ```
/// use rookery_core::{Color, Piece, Setup, Square};
///
/// let sq = |s| Square::from_algebraic(s).unwrap();
/// let game = Setup::new(Color::White)
///     .place(Piece::WHITE_KING, sq("e1"))
///     .place(Piece::BLACK_KING, sq("e8"))
///     .build()
///     .unwrap();
/// assert!(!game.status().is_over());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    pub(crate) side_to_move: Color,
    pub(crate) placements: Vec<(Piece, Square)>,
    pub(crate) moved: Vec<Square>,
    pub(crate) en_passant: Option<Square>,
}

impl Setup {
    pub fn new(side_to_move: Color) -> Setup {
        Setup {
            side_to_move,
            placements: Vec::new(),
            moved: Vec::new(),
            en_passant: None,
        }
    }

    /// Add a piece. Order of calls fixes piece ids.
    pub fn place(mut self, piece: Piece, square: Square) -> Setup {
        self.placements.push((piece, square));
        self
    }

    /// Mark the piece on `square` as having moved, which forfeits castling
    /// with it.
    pub fn moved(mut self, square: Square) -> Setup {
        self.moved.push(square);
        self
    }

    /// Mark the pawn on `square` as having just advanced two squares.
    pub fn en_passant(mut self, square: Square) -> Setup {
        self.en_passant = Some(square);
        self
    }

    pub fn build(self) -> Result<Game, SetupError> {
        Game::from_setup(self)
    }
}
