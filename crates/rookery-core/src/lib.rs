//! Chess rules: piece state, move generation, legality and game flow.

mod attacks;
mod board;
mod chess_move;
mod color;
mod error;
mod game;
mod legal;
mod make_move;
mod piece;
mod piece_kind;
mod piece_set;
mod setup;
mod square;

pub mod movegen;
pub mod perft;
pub mod special;

pub use attacks::{attacked_squares, is_attacked, is_king_attacked};
pub use board::{Board, PrettyBoard};
pub use chess_move::{Move, MoveKind, MoveRecord, PromotionPiece, RookHop};
pub use color::Color;
pub use error::{MoveError, SetupError};
pub use game::{Game, GameState, GameStatus, MoveReport};
pub use legal::{
    all_legal_moves, candidate_moves, has_legal_move, in_check, is_legal, legal_destinations,
    legal_move_to, legal_moves,
};
pub use make_move::{Execution, execute};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use piece_set::{PieceId, PieceSet, PieceState};
pub use setup::Setup;
pub use special::CastleSide;
pub use square::Square;
