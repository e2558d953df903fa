pub mod rules;

pub use rules::{
    Board, CheckStatus, Game, InvalidMove, Move, MoveGenerator, MoveList, Piece, PieceKind,
    Square, Team,
};
