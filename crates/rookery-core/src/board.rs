//! An 8×8 projection of the alive pieces, rebuilt on demand.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_set::{PieceId, PieceSet};
use crate::square::Square;

/// Occupancy grid derived from a [`PieceSet`].
///
/// Never authoritative: it is a snapshot for fast square lookups and rendering.
/// Build a fresh one whenever the pieces change.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<(PieceId, Piece)>; Square::COUNT],
}

impl Board {
    /// Project every alive piece onto its square.
    pub fn from_pieces(pieces: &PieceSet) -> Board {
        let mut cells = [None; Square::COUNT];
        for (id, state) in pieces.alive() {
            debug_assert!(cells[state.square().index()].is_none(), "two alive pieces share {}", state.square());
            cells[state.square().index()] = Some((id, state.piece()));
        }
        Board { cells }
    }

    /// The piece reference on `sq`, if any.
    #[inline]
    pub fn at(&self, sq: Square) -> Option<(PieceId, Piece)> {
        self.cells[sq.index()]
    }

    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.at(sq).map(|(_, piece)| piece)
    }

    #[inline]
    pub fn id_on(&self, sq: Square) -> Option<PieceId> {
        self.at(sq).map(|(id, _)| id)
    }

    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_on(sq).map(Piece::color)
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Return a pretty-printable wrapper using letters.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            unicode: false,
        }
    }

    /// Return a pretty-printable wrapper using Unicode figurines.
    pub fn pretty_unicode(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            unicode: true,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{}\n)", self.pretty())
    }
}

/// Wrapper for printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    unicode: bool,
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let c = Square::new(file, rank)
                    .and_then(|sq| self.board.piece_on(sq))
                    .map_or('.', |piece| {
                        if self.unicode {
                            piece.figurine()
                        } else {
                            piece.letter()
                        }
                    });
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_set::PieceSet;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn projection_of_starting_position() {
        let board = PieceSet::standard().board();
        assert_eq!(board.occupied_count(), 32);
        assert_eq!(board.piece_on(sq("e1")), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_on(sq("d8")), Some(Piece::BLACK_QUEEN));
        assert_eq!(board.color_on(sq("a2")), Some(Color::White));
        assert!(board.is_empty(sq("e4")));
    }

    #[test]
    fn projection_ids_resolve_back_to_pieces() {
        let pieces = PieceSet::standard();
        let board = Board::from_pieces(&pieces);
        for (id, state) in pieces.alive() {
            assert_eq!(board.id_on(state.square()), Some(id));
        }
    }

    #[test]
    fn pretty_print() {
        let board = PieceSet::standard().board();
        let output = board.pretty().to_string();
        assert!(output.contains("8  r n b q k b n r"));
        assert!(output.contains("1  R N B Q K B N R"));
        assert!(output.ends_with("a b c d e f g h"));

        let unicode = board.pretty_unicode().to_string();
        assert!(unicode.contains("♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜"));
    }
}
