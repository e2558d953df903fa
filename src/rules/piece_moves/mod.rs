mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use smallvec::SmallVec;

use super::{Board, Move, Piece, PieceKind, Square, Team};

pub use bishop::BishopMoves;
pub use king::KingMoves;
pub use knight::KnightMoves;
pub use pawn::PawnMoves;
pub use queen::QueenMoves;
pub use rook::RookMoves;

/// Move lists stay inline up to a queen's worst case on an open board.
pub type MoveList = SmallVec<[Move; 32]>;

/// Pseudo-legal move generation for one piece kind: movement pattern and
/// occupancy only, with no regard for whether the mover's own king is left
/// attacked. The game controller layers legality filtering on top.
pub trait MoveGenerator: Send + Sync {
    fn pseudo_legal_moves(&self, board: &Board, from: Square, piece: Piece, out: &mut MoveList);
}

static GENERATORS: Lazy<HashMap<PieceKind, Box<dyn MoveGenerator>>> = Lazy::new(|| {
    let mut table: HashMap<PieceKind, Box<dyn MoveGenerator>> = HashMap::new();
    table.insert(PieceKind::Pawn, Box::new(PawnMoves));
    table.insert(PieceKind::Knight, Box::new(KnightMoves));
    table.insert(PieceKind::Bishop, Box::new(BishopMoves));
    table.insert(PieceKind::Rook, Box::new(RookMoves));
    table.insert(PieceKind::Queen, Box::new(QueenMoves));
    table.insert(PieceKind::King, Box::new(KingMoves));
    table
});

/// Generates the pseudo-legal moves for whatever occupies `from`. An empty
/// or off-board square yields an empty list.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> MoveList {
    let mut moves = MoveList::new();
    pseudo_legal_moves_into(board, from, &mut moves);
    moves
}

/// Buffer-filling variant; the buffer is not cleared first.
pub fn pseudo_legal_moves_into(board: &Board, from: Square, out: &mut MoveList) {
    if let Some(piece) = board.piece_at(from) {
        GENERATORS[&piece.kind].pseudo_legal_moves(board, from, piece, out);
    }
}

// Occupancy predicates shared by the per-piece generators.

pub(crate) fn is_empty(board: &Board, square: Square) -> bool {
    square.in_bounds() && board.piece_at(square).is_none()
}

pub(crate) fn holds_enemy(board: &Board, square: Square, team: Team) -> bool {
    board.piece_at(square).is_some_and(|p| !p.is(team))
}

/// A valid destination for every piece except the pawn.
pub(crate) fn empty_or_enemy(board: &Board, square: Square, team: Team) -> bool {
    square.in_bounds() && board.piece_at(square).map_or(true, |p| !p.is(team))
}

/// Walks each direction one square at a time, emitting empty squares and
/// stopping after at most one capture.
pub(crate) fn slide(
    board: &Board,
    from: Square,
    team: Team,
    directions: &[(i8, i8)],
    out: &mut MoveList,
) {
    for &(dr, df) in directions {
        let mut current = from.offset(dr, df);
        while is_empty(board, current) {
            out.push(Move::new(from, current));
            current = current.offset(dr, df);
        }
        if holds_enemy(board, current, team) {
            out.push(Move::new(from, current));
        }
    }
}
