//! Error types for move requests and custom game setups.

use crate::color::Color;
use crate::game::GameStatus;
use crate::square::Square;

/// Why a move request was refused.
///
/// These are ordinary outcomes of user input, never a sign of engine corruption.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Raw coordinates lie outside the 8×8 board.
    #[error("square ({file}, {rank}) is off the board")]
    InvalidSquare {
        /// Requested file index.
        file: i32,
        /// Requested rank index.
        rank: i32,
    },
    /// The source square is empty.
    #[error("no piece on {square}")]
    NoPieceAtSource {
        /// The empty source square.
        square: Square,
    },
    /// The piece on the source square belongs to the side not on move.
    #[error("the piece on {square} is {owner}, but {side_to_move} is to move")]
    WrongSideToMove {
        /// The source square.
        square: Square,
        /// Color of the piece found there.
        owner: Color,
        /// The side whose turn it is.
        side_to_move: Color,
    },
    /// The destination is not among the piece's legal destinations.
    #[error("{from} to {to} is not a legal move")]
    IllegalDestination {
        /// Source square.
        from: Square,
        /// Rejected destination.
        to: Square,
    },
    /// The game has reached a terminal status.
    #[error("the game is already over: {status}")]
    GameAlreadyOver {
        /// The terminal status.
        status: GameStatus,
    },
}

/// Structural problems with a custom setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// Two pieces were placed on one square.
    #[error("more than one piece on {square}")]
    OverlappingPieces {
        /// The doubly occupied square.
        square: Square,
    },
    /// A pawn stands on the first or eighth rank.
    #[error("pawn on back rank at {square}")]
    PawnOnBackRank {
        /// Where the pawn was placed.
        square: Square,
    },
    /// A setup marker names a square with no piece on it.
    #[error("no piece on {square} to mark")]
    NoPieceAt {
        /// The empty square.
        square: Square,
    },
    /// The en passant marker does not name a pawn that could have just
    /// advanced two squares.
    #[error("no pawn on {square} can be captured en passant")]
    InvalidEnPassant {
        /// The marked square.
        square: Square,
    },
    /// The side that just "moved" is still in check.
    #[error("{color} is in check but not on move")]
    OpponentInCheck {
        /// The side left in check.
        color: Color,
    },
}
