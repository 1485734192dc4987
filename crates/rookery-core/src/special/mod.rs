//! Moves that need more than one piece's geometry: castling and en passant.

pub mod castling;
pub mod en_passant;

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::piece_set::{PieceId, PieceSet};

pub use self::castling::CastleSide;

/// Special-move candidates for one piece. Not yet checked for king safety,
/// except that castling already refuses attacked king paths.
pub fn special_moves(pieces: &PieceSet, board: &Board, id: PieceId) -> Vec<Move> {
    match pieces[id].kind() {
        PieceKind::King => castling::castling_moves(pieces, board, id),
        PieceKind::Pawn => en_passant::en_passant_moves(pieces, board, id),
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => Vec::new(),
    }
}
