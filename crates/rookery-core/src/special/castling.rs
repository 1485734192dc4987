//! Castling candidates.

use crate::attacks::is_attacked;
use crate::board::Board;
use crate::chess_move::{Move, RookHop};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::piece_set::{PieceId, PieceSet};
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File of the partner rook's corner.
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the king lands on.
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// File the rook lands on.
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }
}

/// Castling moves available to `king`.
///
/// Requires an unmoved king and an unmoved same-rank rook in the corner,
/// empty squares strictly between them, and no attack on any square the king
/// stands on, passes through or lands on.
pub fn castling_moves(pieces: &PieceSet, board: &Board, king: PieceId) -> Vec<Move> {
    let state = &pieces[king];
    if state.kind() != PieceKind::King || !state.is_alive() || state.has_moved() {
        return Vec::new();
    }

    CastleSide::ALL
        .into_iter()
        .filter_map(|side| castle_toward(pieces, board, king, side))
        .collect()
}

fn castle_toward(pieces: &PieceSet, board: &Board, king: PieceId, side: CastleSide) -> Option<Move> {
    let us = pieces[king].color();
    let from = pieces[king].square();

    let rook_from = from.with_file(side.rook_file())?;
    let (rook, rook_piece) = board.at(rook_from)?;
    if rook_piece != Piece::new(PieceKind::Rook, us) || pieces[rook].has_moved() {
        return None;
    }

    let king_to = from.with_file(side.king_target_file())?;
    let rook_to = from.with_file(side.rook_target_file())?;

    if !files_between(from, rook_from).all(|sq| board.is_empty(sq)) {
        return None;
    }

    if king_path(from, king_to).any(|sq| is_attacked(pieces, board, sq, us.flip())) {
        return None;
    }

    Some(Move::castle(
        king,
        from,
        king_to,
        RookHop {
            rook,
            from: rook_from,
            to: rook_to,
        },
    ))
}

/// Same-rank squares strictly between `a` and `b`.
fn files_between(a: Square, b: Square) -> impl Iterator<Item = Square> {
    let (lo, hi) = (a.file().min(b.file()), a.file().max(b.file()));
    ((lo + 1)..hi).filter_map(move |file| a.with_file(file))
}

/// Same-rank squares from `a` to `b`, both ends included.
fn king_path(a: Square, b: Square) -> impl Iterator<Item = Square> {
    let (lo, hi) = (a.file().min(b.file()), a.file().max(b.file()));
    (lo..=hi).filter_map(move |file| a.with_file(file))
}
