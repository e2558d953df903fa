use super::{slide, MoveGenerator, MoveList};
use crate::rules::{Board, Piece, Square};

const DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Diagonal slides.
pub struct BishopMoves;

impl MoveGenerator for BishopMoves {
    fn pseudo_legal_moves(&self, board: &Board, from: Square, piece: Piece, out: &mut MoveList) {
        slide(board, from, piece.team, &DIRECTIONS, out);
    }
}
