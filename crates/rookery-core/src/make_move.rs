//! Move execution. The only code that writes piece state.

use crate::attacks::is_king_attacked;
use crate::chess_move::{Move, MoveKind};
use crate::legal::has_legal_move;
use crate::piece_kind::PieceKind;
use crate::piece_set::{PieceId, PieceSet};

/// What applying a move did, and where it left the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    pub kind: MoveKind,
    pub captured: Option<PieceId>,
    /// The opponent's king is attacked after the move.
    pub is_check: bool,
    /// In check with no legal reply.
    pub is_checkmate: bool,
    /// Not in check, but no legal reply.
    pub is_stalemate: bool,
}

impl PieceSet {
    /// Apply a planned move in place, without any legality checks.
    ///
    /// Used both on authoritative state (after validation) and on disposable
    /// probes by the legality filter.
    pub(crate) fn apply(&mut self, mv: &Move) {
        let mover = mv.piece();
        let kind_before = self[mover].kind();

        // The en passant window closes for every pawn on every move.
        for state in self.states_mut() {
            state.set_en_passant_eligible(false);
        }

        match mv.kind() {
            MoveKind::Normal => {
                self.state_mut(mover).relocate(mv.to());
            }
            MoveKind::Capture => {
                if let Some(victim) = mv.captured() {
                    self.state_mut(victim).capture();
                }
                self.state_mut(mover).relocate(mv.to());
            }
            MoveKind::Castle => {
                let king = self.state_mut(mover);
                king.relocate(mv.to());
                king.mark_moved();
                if let Some(hop) = mv.rook_hop() {
                    let rook = self.state_mut(hop.rook);
                    rook.relocate(hop.to);
                    rook.mark_moved();
                }
            }
            MoveKind::EnPassant => {
                // The victim sits beside the origin, not on the destination.
                self.state_mut(mover).relocate(mv.to());
                if let Some(victim) = mv.captured() {
                    self.state_mut(victim).capture();
                }
            }
            MoveKind::Promotion => {
                if let Some(victim) = mv.captured() {
                    self.state_mut(victim).capture();
                }
                let pawn = self.state_mut(mover);
                pawn.relocate(mv.to());
                if let Some(promotion) = mv.promotion_piece() {
                    pawn.promote(promotion.to_piece_kind());
                }
            }
        }

        let state = self.state_mut(mover);
        if kind_before == PieceKind::Pawn && mv.from().rank().abs_diff(mv.to().rank()) == 2 {
            state.set_en_passant_eligible(true);
        }
        if kind_before.tracks_moved() {
            state.mark_moved();
        }
    }
}

/// Apply an already validated move and classify the opponent's position.
pub fn execute(pieces: &mut PieceSet, mv: &Move) -> Execution {
    let opponent = pieces[mv.piece()].color().flip();
    pieces.apply(mv);

    let board = pieces.board();
    let is_check = is_king_attacked(pieces, &board, opponent);
    let can_reply = has_legal_move(pieces, opponent);

    Execution {
        kind: mv.kind(),
        captured: mv.captured(),
        is_check,
        is_checkmate: is_check && !can_reply,
        is_stalemate: !is_check && !can_reply,
    }
}
