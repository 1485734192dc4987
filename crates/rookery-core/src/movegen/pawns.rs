//! Pawn move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::Destinations;

/// The two forward-diagonal squares of a pawn, `None` where off the board.
pub(crate) fn pawn_capture_squares(us: Color, from: Square) -> [Option<Square>; 2] {
    let dir = us.pawn_direction();
    [from.offset(-1, dir), from.offset(1, dir)]
}

/// Generate pawn pushes (single and double) and diagonal captures.
pub(super) fn gen_pawn(board: &Board, us: Color, from: Square, dests: &mut Destinations) {
    let dir = us.pawn_direction();

    if let Some(one) = from.offset(0, dir)
        && board.is_empty(one)
    {
        dests.quiet.push(one);
        if from.rank() == us.pawn_rank()
            && let Some(two) = from.offset(0, 2 * dir)
            && board.is_empty(two)
        {
            dests.quiet.push(two);
        }
    }

    for to in pawn_capture_squares(us, from).into_iter().flatten() {
        if board.color_on(to) == Some(us.flip()) {
            dests.captures.push(to);
        }
    }
}
