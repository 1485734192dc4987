//! En passant candidates.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::piece_set::{PieceId, PieceSet};

/// En passant captures available to `pawn`.
///
/// The victim must be an enemy pawn directly beside `pawn` whose
/// en-passant flag is set, i.e. it double-stepped on the previous ply. The
/// capturing pawn lands on the square the victim skipped.
pub fn en_passant_moves(pieces: &PieceSet, board: &Board, pawn: PieceId) -> Vec<Move> {
    let state = &pieces[pawn];
    if state.kind() != PieceKind::Pawn || !state.is_alive() {
        return Vec::new();
    }

    let us = state.color();
    let from = state.square();
    let enemy_pawn = Piece::new(PieceKind::Pawn, us.flip());

    [-1i8, 1]
        .into_iter()
        .filter_map(|file_delta| {
            let beside = from.offset(file_delta, 0)?;
            let (victim, piece) = board.at(beside)?;
            if piece != enemy_pawn || !pieces[victim].is_en_passant_eligible() {
                return None;
            }
            let to = from.offset(file_delta, us.pawn_direction())?;
            board
                .is_empty(to)
                .then(|| Move::en_passant(pawn, from, to, victim))
        })
        .collect()
}
