//! Pseudo-legal move generation, one strategy per piece kind.
//!
//! Nothing here looks at king safety or at the special moves (castling, en
//! passant); those are layered on by [`crate::special`] and [`crate::legal`].

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::{gen_pawn, pawn_capture_squares};
use self::sliders::{DIAGONALS, ORTHOGONALS, gen_rays};

/// Squares a piece can reach, split by whether they are empty or hold an enemy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Destinations {
    /// Empty squares the piece can move to.
    pub quiet: Vec<Square>,
    /// Enemy-occupied squares the piece can capture on.
    pub captures: Vec<Square>,
}

impl Destinations {
    /// Return `true` if `sq` is a quiet or capture destination.
    pub fn contains(&self, sq: Square) -> bool {
        self.quiet.contains(&sq) || self.captures.contains(&sq)
    }

    pub fn len(&self) -> usize {
        self.quiet.len() + self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quiet.is_empty() && self.captures.is_empty()
    }

    /// Quiet destinations followed by captures.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.quiet.iter().chain(self.captures.iter()).copied()
    }

    /// File `to` as quiet or capture for a piece of color `us`.
    ///
    /// Returns `true` only when the square was empty, i.e. a ray may continue.
    fn push_target(&mut self, board: &Board, us: Color, to: Square) -> bool {
        match board.color_on(to) {
            None => {
                self.quiet.push(to);
                true
            }
            Some(color) if color != us => {
                self.captures.push(to);
                false
            }
            Some(_) => false,
        }
    }
}

/// Generate the pseudo-legal destinations of `piece` standing on `from`.
pub fn pseudo_legal(board: &Board, piece: Piece, from: Square) -> Destinations {
    let mut dests = Destinations::default();
    let us = piece.color();
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, us, from, &mut dests),
        PieceKind::Knight => gen_knight(board, us, from, &mut dests),
        PieceKind::Bishop => gen_rays(board, us, from, &DIAGONALS, &mut dests),
        PieceKind::Rook => gen_rays(board, us, from, &ORTHOGONALS, &mut dests),
        PieceKind::Queen => {
            gen_rays(board, us, from, &DIAGONALS, &mut dests);
            gen_rays(board, us, from, &ORTHOGONALS, &mut dests);
        }
        PieceKind::King => gen_king(board, us, from, &mut dests),
    }
    dests
}

/// Return `true` if `piece` on `from` attacks `target`.
///
/// For every kind but the pawn this is membership in [`pseudo_legal`]. Pawns
/// attack their two forward diagonals whether or not anything stands there,
/// and never attack straight ahead.
pub fn covers(board: &Board, piece: Piece, from: Square, target: Square) -> bool {
    match piece.kind() {
        PieceKind::Pawn => pawn_capture_squares(piece.color(), from)
            .into_iter()
            .flatten()
            .any(|sq| sq == target),
        _ => pseudo_legal(board, piece, from).contains(target),
    }
}
