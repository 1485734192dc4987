//! Knight move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::Destinations;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Generate knight jumps. Each offset is tested on its own; nothing blocks a knight.
pub(super) fn gen_knight(board: &Board, us: Color, from: Square, dests: &mut Destinations) {
    for (df, dr) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(df, dr) {
            dests.push_target(board, us, to);
        }
    }
}
