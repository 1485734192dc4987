//! Board-wide attack detection.
//!
//! Recomputed from scratch on every query: any move can change what every
//! other piece reaches, so nothing is cached.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::covers;
use crate::piece_set::PieceSet;
use crate::square::Square;

/// Return `true` if any alive piece of `by` attacks `target`.
pub fn is_attacked(pieces: &PieceSet, board: &Board, target: Square, by: Color) -> bool {
    pieces
        .alive_of(by)
        .any(|(_, state)| covers(board, state.piece(), state.square(), target))
}

/// Return `true` if the king of `color` stands on an attacked square.
///
/// # Panics
///
/// Panics if `color` has no alive king, which valid play never produces.
pub fn is_king_attacked(pieces: &PieceSet, board: &Board, color: Color) -> bool {
    let king = pieces
        .king(color)
        .expect("each side keeps exactly one king");
    is_attacked(pieces, board, pieces[king].square(), color.flip())
}

/// All squares attacked by `by`, in index order.
pub fn attacked_squares(pieces: &PieceSet, board: &Board, by: Color) -> Vec<Square> {
    Square::all()
        .filter(|&sq| is_attacked(pieces, board, sq, by))
        .collect()
}
