//! King step generation. Castling lives in [`crate::special::castling`].

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::Destinations;

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Generate the one-square king steps.
pub(super) fn gen_king(board: &Board, us: Color, from: Square, dests: &mut Destinations) {
    for (df, dr) in KING_OFFSETS {
        if let Some(to) = from.offset(df, dr) {
            dests.push_target(board, us, to);
        }
    }
}
