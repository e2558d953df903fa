use super::{slide, MoveGenerator, MoveList};
use crate::rules::{Board, Piece, Square};

const DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Rank and file slides.
pub struct RookMoves;

impl MoveGenerator for RookMoves {
    fn pseudo_legal_moves(&self, board: &Board, from: Square, piece: Piece, out: &mut MoveList) {
        slide(board, from, piece.team, &DIRECTIONS, out);
    }
}
