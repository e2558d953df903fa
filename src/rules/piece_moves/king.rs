use super::{empty_or_enemy, is_empty, MoveGenerator, MoveList};
use crate::rules::{Board, Move, Piece, PieceKind, Square};

const OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// One step in any direction, plus the castle candidates.
pub struct KingMoves;

impl MoveGenerator for KingMoves {
    fn pseudo_legal_moves(&self, board: &Board, from: Square, piece: Piece, out: &mut MoveList) {
        for &(dr, df) in &OFFSETS {
            let to = from.offset(dr, df);
            if empty_or_enemy(board, to, piece.team) {
                out.push(Move::new(from, to));
            }
        }
        castling_moves(board, from, piece, out);
    }
}

/// Castle candidates: an unmoved king on its home square, an unmoved rook
/// in the corner, nothing between them. Path safety is the game
/// controller's check, not this generator's.
fn castling_moves(board: &Board, from: Square, piece: Piece, out: &mut MoveList) {
    let home = Square::new(piece.team.home_rank(), 5);
    if piece.has_moved || from != home {
        return;
    }

    // queen side: b, c and d files clear, rook still in the a-file corner
    if castle_rook_ready(board, piece, 1) && (2..=4).all(|f| is_empty(board, Square::new(home.rank, f))) {
        out.push(Move::new(from, Square::new(home.rank, 3)));
    }

    // king side: f and g files clear, rook still in the h-file corner
    if castle_rook_ready(board, piece, 8) && (6..=7).all(|f| is_empty(board, Square::new(home.rank, f))) {
        out.push(Move::new(from, Square::new(home.rank, 7)));
    }
}

fn castle_rook_ready(board: &Board, king: Piece, file: i8) -> bool {
    board
        .piece_at(Square::new(king.team.home_rank(), file))
        .is_some_and(|rook| rook.kind == PieceKind::Rook && rook.is(king.team) && !rook.has_moved)
}
