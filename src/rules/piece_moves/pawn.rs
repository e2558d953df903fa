use super::{holds_enemy, is_empty, MoveGenerator, MoveList};
use crate::rules::{Board, Move, Piece, PieceKind, Square, Team};

/// Choices offered whenever a pawn reaches the last rank.
const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
];

/// Forward advances, diagonal captures, promotion and en passant. The most
/// conditional of the generators: every destination depends on team
/// direction and on what occupies the neighboring files.
pub struct PawnMoves;

impl MoveGenerator for PawnMoves {
    fn pseudo_legal_moves(&self, board: &Board, from: Square, piece: Piece, out: &mut MoveList) {
        let team = piece.team;
        let forward = team.forward();

        // single advance
        let front = from.offset(forward, 0);
        if is_empty(board, front) {
            push_with_promotions(out, from, front, team);

            // double advance: only off the home pawn rank, both squares clear
            if from.rank == team.pawn_rank() {
                let two = from.offset(2 * forward, 0);
                if is_empty(board, two) {
                    out.push(Move::new(from, two));
                }
            }
        }

        // diagonal captures
        for df in [-1, 1] {
            let target = from.offset(forward, df);
            if holds_enemy(board, target, team) {
                push_with_promotions(out, from, target, team);
            }
        }

        // en passant: an enemy pawn beside us that just advanced two squares
        // is taken by moving into the square it skipped
        if from.rank == team.en_passant_rank() {
            for df in [-1, 1] {
                let beside = from.offset(0, df);
                let target = from.offset(forward, df);
                let victim_ready = board.piece_at(beside).is_some_and(|p| {
                    !p.is(team) && p.kind == PieceKind::Pawn && p.just_double_moved
                });
                if victim_ready && is_empty(board, target) {
                    out.push(Move::new(from, target));
                }
            }
        }
    }
}

fn push_with_promotions(out: &mut MoveList, from: Square, to: Square, team: Team) {
    if to.rank == team.last_rank() {
        for kind in PROMOTIONS {
            out.push(Move::promoting(from, to, kind));
        }
    } else {
        out.push(Move::new(from, to));
    }
}
