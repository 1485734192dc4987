//! Legal move validation.
//!
//! A candidate is legal when, after playing it on a throwaway copy of the
//! piece set, the mover's own king is not attacked. This covers pins,
//! check evasion, king steps into attacked squares and the en passant
//! discovered check in one rule.

use std::collections::BTreeSet;

use crate::attacks::is_king_attacked;
use crate::board::Board;
use crate::chess_move::{Move, MoveKind, PromotionPiece};
use crate::color::Color;
use crate::movegen::pseudo_legal;
use crate::piece_kind::PieceKind;
use crate::piece_set::{PieceId, PieceSet};
use crate::special::special_moves;
use crate::square::Square;

/// Every candidate move for one piece before king safety is checked.
///
/// Promotions appear once, with the default queen.
pub fn candidate_moves(pieces: &PieceSet, board: &Board, id: PieceId) -> Vec<Move> {
    let state = &pieces[id];
    if !state.is_alive() {
        return Vec::new();
    }

    let from = state.square();
    let promotes = |to: Square| {
        state.kind() == PieceKind::Pawn && to.rank() == state.color().promotion_rank()
    };
    let dests = pseudo_legal(board, state.piece(), from);
    let mut moves = Vec::with_capacity(dests.len() + 2);

    for &to in &dests.quiet {
        moves.push(if promotes(to) {
            Move::promotion(id, from, to, None, PromotionPiece::default())
        } else {
            Move::normal(id, from, to)
        });
    }
    for &to in &dests.captures {
        let Some(victim) = board.id_on(to) else {
            continue;
        };
        moves.push(if promotes(to) {
            Move::promotion(id, from, to, Some(victim), PromotionPiece::default())
        } else {
            Move::capture(id, from, to, victim)
        });
    }

    moves.extend(special_moves(pieces, board, id));
    moves
}

/// Return `true` if playing `mv` leaves the mover's king unattacked.
pub fn is_legal(pieces: &PieceSet, mv: &Move) -> bool {
    let color = pieces[mv.piece()].color();
    let mut probe = pieces.clone();
    probe.apply(mv);
    !is_king_attacked(&probe, &probe.board(), color)
}

fn legal_candidates(pieces: &PieceSet, id: PieceId) -> Vec<Move> {
    let board = pieces.board();
    candidate_moves(pieces, &board, id)
        .into_iter()
        .filter(|mv| is_legal(pieces, mv))
        .collect()
}

/// Legal moves for one piece, with each promotion expanded to all four
/// promotion pieces.
pub fn legal_moves(pieces: &PieceSet, id: PieceId) -> Vec<Move> {
    let mut moves = Vec::new();
    for mv in legal_candidates(pieces, id) {
        if mv.kind() == MoveKind::Promotion {
            moves.extend(PromotionPiece::ALL.map(|promo| mv.with_promotion(promo)));
        } else {
            moves.push(mv);
        }
    }
    moves
}

/// Squares `id` may legally move to. Empty for captured pieces.
pub fn legal_destinations(pieces: &PieceSet, id: PieceId) -> BTreeSet<Square> {
    legal_candidates(pieces, id)
        .iter()
        .map(Move::to)
        .collect()
}

/// The legal move taking `id` to `to`, promotions defaulting to a queen.
pub fn legal_move_to(pieces: &PieceSet, id: PieceId, to: Square) -> Option<Move> {
    let board = pieces.board();
    candidate_moves(pieces, &board, id)
        .into_iter()
        .find(|mv| mv.to() == to)
        .filter(|mv| is_legal(pieces, mv))
}

/// Every legal move for `color`, promotions expanded.
pub fn all_legal_moves(pieces: &PieceSet, color: Color) -> Vec<Move> {
    pieces
        .alive_of(color)
        .flat_map(|(id, _)| legal_moves(pieces, id))
        .collect()
}

/// Return `true` if `color` has at least one legal move.
///
/// Stops at the first one found.
pub fn has_legal_move(pieces: &PieceSet, color: Color) -> bool {
    let board = pieces.board();
    pieces.alive_of(color).any(|(id, _)| {
        candidate_moves(pieces, &board, id)
            .iter()
            .any(|mv| is_legal(pieces, mv))
    })
}

/// Return `true` if the king of `color` is attacked.
pub fn in_check(pieces: &PieceSet, color: Color) -> bool {
    is_king_attacked(pieces, &pieces.board(), color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn dests(pieces: &PieceSet, at: &str) -> Vec<Square> {
        let id = pieces.piece_at(sq(at)).unwrap();
        legal_destinations(pieces, id).into_iter().collect()
    }

    #[test]
    fn startpos_has_twenty_moves() {
        let pieces = PieceSet::standard();
        assert_eq!(all_legal_moves(&pieces, Color::White).len(), 20);
        assert_eq!(all_legal_moves(&pieces, Color::Black).len(), 20);
        assert_eq!(dests(&pieces, "g1"), vec![sq("f3"), sq("h3")]);
        assert!(dests(&pieces, "a1").is_empty());
    }

    #[test]
    fn pinned_knight_cannot_move() {
        let pieces = PieceSet::from_placements([
            (Piece::WHITE_KING, sq("e1")),
            (Piece::WHITE_KNIGHT, sq("e2")),
            (Piece::BLACK_ROOK, sq("e8")),
            (Piece::BLACK_KING, sq("a8")),
        ])
        .unwrap();
        assert!(dests(&pieces, "e2").is_empty());
    }

    #[test]
    fn pinned_rook_slides_along_the_pin() {
        let pieces = PieceSet::from_placements([
            (Piece::WHITE_KING, sq("e1")),
            (Piece::WHITE_ROOK, sq("e3")),
            (Piece::BLACK_ROOK, sq("e6")),
            (Piece::BLACK_KING, sq("a8")),
        ])
        .unwrap();
        assert_eq!(dests(&pieces, "e3"), vec![sq("e2"), sq("e4"), sq("e5"), sq("e6")]);
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let pieces = PieceSet::from_placements([
            (Piece::WHITE_KING, sq("e1")),
            (Piece::BLACK_ROOK, sq("d8")),
            (Piece::BLACK_KING, sq("h8")),
        ])
        .unwrap();
        assert_eq!(dests(&pieces, "e1"), vec![sq("f1"), sq("e2"), sq("f2")]);
    }

    #[test]
    fn king_cannot_capture_defended_piece() {
        let pieces = PieceSet::from_placements([
            (Piece::WHITE_KING, sq("e1")),
            (Piece::BLACK_QUEEN, sq("e2")),
            (Piece::BLACK_KNIGHT, sq("c3")),
            (Piece::BLACK_KING, sq("h8")),
        ])
        .unwrap();
        assert!(in_check(&pieces, Color::White));
        assert!(!dests(&pieces, "e1").contains(&sq("e2")));
    }

    #[test]
    fn check_must_be_answered() {
        let pieces = PieceSet::from_placements([
            (Piece::WHITE_KING, sq("e1")),
            (Piece::WHITE_ROOK, sq("a4")),
            (Piece::WHITE_PAWN, sq("h2")),
            (Piece::BLACK_ROOK, sq("e8")),
            (Piece::BLACK_KING, sq("h8")),
        ])
        .unwrap();
        assert!(in_check(&pieces, Color::White));
        // Only the interposition on e4 helps the rook; the pawn can do nothing.
        assert_eq!(dests(&pieces, "a4"), vec![sq("e4")]);
        assert!(dests(&pieces, "h2").is_empty());
    }

    #[test]
    fn en_passant_exposing_the_king_is_illegal() {
        let mut pieces = PieceSet::from_placements([
            (Piece::WHITE_KING, sq("a5")),
            (Piece::WHITE_PAWN, sq("d5")),
            (Piece::BLACK_PAWN, sq("e5")),
            (Piece::BLACK_ROOK, sq("h5")),
            (Piece::BLACK_KING, sq("h8")),
        ])
        .unwrap();
        let victim = pieces.piece_at(sq("e5")).unwrap();
        pieces.state_mut(victim).set_en_passant_eligible(true);
        assert_eq!(dests(&pieces, "d5"), vec![sq("d6")]);
    }

    #[test]
    fn promotions_expand_to_four_choices() {
        let pieces = PieceSet::from_placements([
            (Piece::WHITE_KING, sq("e1")),
            (Piece::WHITE_PAWN, sq("a7")),
            (Piece::BLACK_KING, sq("h8")),
        ])
        .unwrap();
        let pawn = pieces.piece_at(sq("a7")).unwrap();
        let moves = legal_moves(&pieces, pawn);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|mv| mv.kind() == MoveKind::Promotion));
        assert_eq!(legal_destinations(&pieces, pawn).len(), 1);

        let mv = legal_move_to(&pieces, pawn, sq("a8")).unwrap();
        assert_eq!(mv.promotion_piece(), Some(PromotionPiece::Queen));
    }

    #[test]
    fn stalemated_side_has_no_moves() {
        let pieces = PieceSet::from_placements([
            (Piece::WHITE_KING, sq("f7")),
            (Piece::WHITE_QUEEN, sq("g6")),
            (Piece::BLACK_KING, sq("h8")),
        ])
        .unwrap();
        assert!(!in_check(&pieces, Color::Black));
        assert!(!has_legal_move(&pieces, Color::Black));
        assert!(has_legal_move(&pieces, Color::White));
    }
}
