//! Planned moves and the immutable records kept in game history.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::piece_set::PieceId;
use crate::square::Square;

/// The category of a move, which decides how the executor applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Relocation onto an empty square.
    Normal,
    /// Relocation onto an enemy-occupied square.
    Capture,
    /// King and rook relocate together.
    Castle,
    /// Pawn capture of a pawn that just double-stepped past it.
    EnPassant,
    /// Pawn reaching the far rank, with or without a capture.
    Promotion,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveKind::Normal => "normal",
            MoveKind::Capture => "capture",
            MoveKind::Castle => "castle",
            MoveKind::EnPassant => "en passant",
            MoveKind::Promotion => "promotion",
        };
        f.write_str(name)
    }
}

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PromotionPiece {
    Knight,
    Bishop,
    Rook,
    #[default]
    Queen,
}

impl PromotionPiece {
    /// All promotion pieces.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    /// Lowercase suffix letter used in coordinate notation.
    pub const fn letter(self) -> char {
        self.to_piece_kind().letter()
    }

    /// Parse a suffix letter (case-insensitive).
    pub fn from_letter(c: char) -> Option<PromotionPiece> {
        match c.to_ascii_lowercase() {
            'n' => Some(PromotionPiece::Knight),
            'b' => Some(PromotionPiece::Bishop),
            'r' => Some(PromotionPiece::Rook),
            'q' => Some(PromotionPiece::Queen),
            _ => None,
        }
    }
}

/// The rook half of a castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RookHop {
    pub rook: PieceId,
    pub from: Square,
    pub to: Square,
}

/// A fully planned move: everything the executor needs, resolved up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    piece: PieceId,
    from: Square,
    to: Square,
    kind: MoveKind,
    captured: Option<PieceId>,
    rook_hop: Option<RookHop>,
    promotion: Option<PromotionPiece>,
}

impl Move {
    const fn base(piece: PieceId, from: Square, to: Square, kind: MoveKind) -> Move {
        Move {
            piece,
            from,
            to,
            kind,
            captured: None,
            rook_hop: None,
            promotion: None,
        }
    }

    /// A move onto an empty square.
    pub const fn normal(piece: PieceId, from: Square, to: Square) -> Move {
        Move::base(piece, from, to, MoveKind::Normal)
    }

    /// A move onto the square of `captured`.
    pub const fn capture(piece: PieceId, from: Square, to: Square, captured: PieceId) -> Move {
        let mut mv = Move::base(piece, from, to, MoveKind::Capture);
        mv.captured = Some(captured);
        mv
    }

    /// A castle; `from`/`to` are the king's squares.
    pub const fn castle(king: PieceId, from: Square, to: Square, hop: RookHop) -> Move {
        let mut mv = Move::base(king, from, to, MoveKind::Castle);
        mv.rook_hop = Some(hop);
        mv
    }

    /// An en passant capture of the pawn `captured`, which does not stand on `to`.
    pub const fn en_passant(pawn: PieceId, from: Square, to: Square, captured: PieceId) -> Move {
        let mut mv = Move::base(pawn, from, to, MoveKind::EnPassant);
        mv.captured = Some(captured);
        mv
    }

    /// A promotion, optionally capturing on `to`.
    pub const fn promotion(
        pawn: PieceId,
        from: Square,
        to: Square,
        captured: Option<PieceId>,
        promotion: PromotionPiece,
    ) -> Move {
        let mut mv = Move::base(pawn, from, to, MoveKind::Promotion);
        mv.captured = captured;
        mv.promotion = Some(promotion);
        mv
    }

    /// Replace the promotion piece; no effect on other kinds.
    pub const fn with_promotion(mut self, promotion: PromotionPiece) -> Move {
        if self.promotion.is_some() {
            self.promotion = Some(promotion);
        }
        self
    }

    #[inline]
    pub const fn piece(&self) -> PieceId {
        self.piece
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn captured(&self) -> Option<PieceId> {
        self.captured
    }

    #[inline]
    pub const fn rook_hop(&self) -> Option<RookHop> {
        self.rook_hop
    }

    #[inline]
    pub const fn promotion_piece(&self) -> Option<PromotionPiece> {
        self.promotion
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.letter())?;
        }
        Ok(())
    }
}

/// One accepted move as stored in history. Never modified after it is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub(crate) sequence: usize,
    pub(crate) side: Color,
    pub(crate) mv: Move,
    pub(crate) moved: Piece,
    pub(crate) captured_piece: Option<Piece>,
    pub(crate) is_check: bool,
    pub(crate) is_checkmate: bool,
}

impl MoveRecord {
    /// 1-based ply number.
    #[inline]
    pub const fn sequence(&self) -> usize {
        self.sequence
    }

    /// The side that made the move.
    #[inline]
    pub const fn side(&self) -> Color {
        self.side
    }

    /// The executed move.
    #[inline]
    pub const fn mv(&self) -> &Move {
        &self.mv
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.mv.from
    }

    #[inline]
    pub const fn to(&self) -> Square {
        self.mv.to
    }

    #[inline]
    pub const fn kind(&self) -> MoveKind {
        self.mv.kind
    }

    /// Id of the moving piece.
    #[inline]
    pub const fn piece(&self) -> PieceId {
        self.mv.piece
    }

    /// The moving piece as it was before the move (a pawn, for promotions).
    #[inline]
    pub const fn moved(&self) -> Piece {
        self.moved
    }

    /// Id of the captured piece, if any.
    #[inline]
    pub const fn captured(&self) -> Option<PieceId> {
        self.mv.captured
    }

    #[inline]
    pub const fn captured_piece(&self) -> Option<Piece> {
        self.captured_piece
    }

    #[inline]
    pub const fn promotion(&self) -> Option<PromotionPiece> {
        self.mv.promotion
    }

    #[inline]
    pub const fn is_check(&self) -> bool {
        self.is_check
    }

    #[inline]
    pub const fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mv)?;
        if self.is_checkmate {
            write!(f, "#")
        } else if self.is_check {
            write!(f, "+")
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_set::PieceSet;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn any_id() -> PieceId {
        PieceSet::standard().piece_at(sq("e2")).unwrap()
    }

    #[test]
    fn display_coordinates() {
        let mv = Move::normal(any_id(), sq("e2"), sq("e4"));
        assert_eq!(mv.to_string(), "e2e4");
        let promo = Move::promotion(any_id(), sq("e7"), sq("e8"), None, PromotionPiece::Knight);
        assert_eq!(promo.to_string(), "e7e8n");
    }

    #[test]
    fn with_promotion_only_touches_promotions() {
        let id = any_id();
        let promo = Move::promotion(id, sq("a7"), sq("a8"), None, PromotionPiece::Queen)
            .with_promotion(PromotionPiece::Rook);
        assert_eq!(promo.promotion_piece(), Some(PromotionPiece::Rook));
        let normal = Move::normal(id, sq("a2"), sq("a3")).with_promotion(PromotionPiece::Rook);
        assert_eq!(normal.promotion_piece(), None);
    }

    #[test]
    fn promotion_letters_roundtrip() {
        for promo in PromotionPiece::ALL {
            assert_eq!(PromotionPiece::from_letter(promo.letter()), Some(promo));
        }
        assert_eq!(PromotionPiece::from_letter('k'), None);
        assert_eq!(PromotionPiece::default(), PromotionPiece::Queen);
    }

    #[test]
    fn record_suffixes() {
        let mv = Move::normal(any_id(), sq("d1"), sq("h5"));
        let mut record = MoveRecord {
            sequence: 1,
            side: Color::White,
            mv,
            moved: Piece::WHITE_QUEEN,
            captured_piece: None,
            is_check: true,
            is_checkmate: false,
        };
        assert_eq!(record.to_string(), "d1h5+");
        record.is_checkmate = true;
        assert_eq!(record.to_string(), "d1h5#");
    }
}
