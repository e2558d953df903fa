use super::{BishopMoves, MoveGenerator, MoveList, RookMoves};
use crate::rules::{Board, Piece, Square};

/// The queen's pattern is the union of the bishop's and the rook's.
pub struct QueenMoves;

impl MoveGenerator for QueenMoves {
    fn pseudo_legal_moves(&self, board: &Board, from: Square, piece: Piece, out: &mut MoveList) {
        BishopMoves.pseudo_legal_moves(board, from, piece, out);
        RookMoves.pseudo_legal_moves(board, from, piece, out);
    }
}
