//! The authoritative list of every piece in a game, alive or captured.

use std::fmt;
use std::ops::Index;

use crate::board::Board;
use crate::color::Color;
use crate::error::SetupError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Stable handle to a piece within its [`PieceSet`].
///
/// Ids are assigned at creation and stay valid for the life of the game,
/// including after the piece is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(usize);

impl PieceId {
    /// Return the position of this piece in the master list.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity plus mutable state of one piece.
///
/// `has_moved` only matters for kings and rooks, `en_passant_eligible` only
/// for pawns. Both are written exclusively by the move executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceState {
    piece: Piece,
    square: Square,
    alive: bool,
    has_moved: bool,
    en_passant_eligible: bool,
}

impl PieceState {
    pub(crate) const fn new(piece: Piece, square: Square) -> PieceState {
        PieceState {
            piece,
            square,
            alive: true,
            has_moved: false,
            en_passant_eligible: false,
        }
    }

    #[inline]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.piece.color()
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.piece.kind()
    }

    /// Current square, or the square it was captured on.
    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// `true` during the single ply after this pawn advanced two squares.
    #[inline]
    pub const fn is_en_passant_eligible(&self) -> bool {
        self.en_passant_eligible
    }

    pub(crate) fn relocate(&mut self, to: Square) {
        self.square = to;
    }

    pub(crate) fn capture(&mut self) {
        self.alive = false;
        self.en_passant_eligible = false;
    }

    pub(crate) fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    pub(crate) fn set_en_passant_eligible(&mut self, eligible: bool) {
        self.en_passant_eligible = eligible;
    }

    pub(crate) fn promote(&mut self, kind: PieceKind) {
        self.piece = self.piece.with_kind(kind);
    }
}

/// Every piece of a game in creation order.
///
/// Captured pieces stay in the list so history records keep resolving; all
/// queries that describe the live position skip them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSet {
    pieces: Vec<PieceState>,
}

impl PieceSet {
    /// The standard 32-piece starting layout.
    ///
    /// Ids 0-7 are White's back rank (a-h), 8-15 White's pawns, 16-23 Black's
    /// back rank and 24-31 Black's pawns.
    pub fn standard() -> PieceSet {
        let mut pieces = Vec::with_capacity(32);
        for color in Color::ALL {
            for (file, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                pieces.push(PieceState::new(
                    Piece::new(kind, color),
                    Self::square_on(file as u8, color.back_rank()),
                ));
            }
            for file in 0u8..8 {
                pieces.push(PieceState::new(
                    Piece::new(PieceKind::Pawn, color),
                    Self::square_on(file, color.pawn_rank()),
                ));
            }
        }
        PieceSet { pieces }
    }

    fn square_on(file: u8, rank: u8) -> Square {
        Square::new(file, rank).expect("starting squares are on the board")
    }

    /// Build a set from explicit placements and validate it.
    ///
    /// Kings and rooks placed away from their starting squares count as
    /// having moved.
    pub fn from_placements<I>(placements: I) -> Result<PieceSet, SetupError>
    where
        I: IntoIterator<Item = (Piece, Square)>,
    {
        let pieces = placements
            .into_iter()
            .map(|(piece, square)| {
                let mut state = PieceState::new(piece, square);
                if piece.kind().tracks_moved() && !Self::is_home_square(piece, square) {
                    state.mark_moved();
                }
                state
            })
            .collect();
        let set = PieceSet { pieces };
        set.validate()?;
        Ok(set)
    }

    fn is_home_square(piece: Piece, square: Square) -> bool {
        square.rank() == piece.color().back_rank()
            && PieceKind::BACK_RANK[square.file() as usize] == piece.kind()
    }

    /// Number of pieces ever created, captured ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Look up a piece by id.
    #[inline]
    pub fn get(&self, id: PieceId) -> Option<&PieceState> {
        self.pieces.get(id.index())
    }

    pub(crate) fn state_mut(&mut self, id: PieceId) -> &mut PieceState {
        &mut self.pieces[id.index()]
    }

    pub(crate) fn states_mut(&mut self) -> impl Iterator<Item = &mut PieceState> {
        self.pieces.iter_mut()
    }

    /// All pieces, captured ones included.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &PieceState)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, state)| (PieceId(i), state))
    }

    /// Pieces still on the board.
    pub fn alive(&self) -> impl Iterator<Item = (PieceId, &PieceState)> {
        self.iter().filter(|(_, state)| state.is_alive())
    }

    /// Pieces of one color still on the board.
    pub fn alive_of(&self, color: Color) -> impl Iterator<Item = (PieceId, &PieceState)> {
        self.alive().filter(move |(_, state)| state.color() == color)
    }

    /// The alive piece standing on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        self.alive()
            .find(|(_, state)| state.square() == square)
            .map(|(id, _)| id)
    }

    /// The alive king of `color`, if there is one.
    pub fn king(&self, color: Color) -> Option<PieceId> {
        self.alive_of(color)
            .find(|(_, state)| state.kind() == PieceKind::King)
            .map(|(id, _)| id)
    }

    /// Project the alive pieces onto an 8×8 grid.
    pub fn board(&self) -> Board {
        Board::from_pieces(self)
    }

    /// Check the structural invariants of the alive pieces.
    pub fn validate(&self) -> Result<(), SetupError> {
        let mut seen = [false; Square::COUNT];
        for (_, state) in self.alive() {
            let square = state.square();
            if seen[square.index()] {
                return Err(SetupError::OverlappingPieces { square });
            }
            seen[square.index()] = true;

            if state.kind() == PieceKind::Pawn && (square.rank() == 0 || square.rank() == 7) {
                return Err(SetupError::PawnOnBackRank { square });
            }
        }

        for color in Color::ALL {
            let count = self
                .alive_of(color)
                .filter(|(_, state)| state.kind() == PieceKind::King)
                .count();
            if count != 1 {
                return Err(SetupError::InvalidKingCount { color, count });
            }
        }

        Ok(())
    }
}

impl Index<PieceId> for PieceSet {
    type Output = PieceState;

    #[inline]
    fn index(&self, id: PieceId) -> &PieceState {
        &self.pieces[id.index()]
    }
}
