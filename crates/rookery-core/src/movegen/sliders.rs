//! Sliding piece (bishop, rook, queen) ray generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::Destinations;

pub(super) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub(super) const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Walk each ray until the board edge or the first occupied square.
///
/// The first occupied square is a capture if it holds an enemy and is
/// dropped otherwise.
pub(super) fn gen_rays(
    board: &Board,
    us: Color,
    from: Square,
    directions: &[(i8, i8)],
    dests: &mut Destinations,
) {
    for &(df, dr) in directions {
        let mut cursor = from.offset(df, dr);
        while let Some(to) = cursor {
            if !dests.push_target(board, us, to) {
                break;
            }
            cursor = to.offset(df, dr);
        }
    }
}
