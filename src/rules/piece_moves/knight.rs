use super::{empty_or_enemy, MoveGenerator, MoveList};
use crate::rules::{Board, Move, Piece, Square};

const OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
];

/// Fixed L-shaped jumps; blocking pieces are irrelevant.
pub struct KnightMoves;

impl MoveGenerator for KnightMoves {
    fn pseudo_legal_moves(&self, board: &Board, from: Square, piece: Piece, out: &mut MoveList) {
        for &(dr, df) in &OFFSETS {
            let to = from.offset(dr, df);
            if empty_or_enemy(board, to, piece.team) {
                out.push(Move::new(from, to));
            }
        }
    }
}
