use super::piece_moves::pseudo_legal_moves;
use super::{Move, Piece, PieceKind, Square, Team};

/// An 8x8 grid of optional pieces, rank-major with 1-based accessors.
/// The board owns every piece on it; a piece has no identity outside its
/// square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Board {
        Board::standard()
    }
}

impl Board {
    pub fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting setup.
    pub fn standard() -> Board {
        let mut board = Board::empty();
        board.home_row(Team::White);
        board.pawn_row(Team::White);
        board.pawn_row(Team::Black);
        board.home_row(Team::Black);
        board
    }

    fn home_row(&mut self, team: Team) {
        use PieceKind::*;
        let order = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for (i, kind) in order.into_iter().enumerate() {
            let square = Square::new(team.home_rank(), i as i8 + 1);
            self.place(square, Some(Piece::new(team, kind)));
        }
    }

    fn pawn_row(&mut self, team: Team) {
        for file in 1..=8 {
            let square = Square::new(team.pawn_rank(), file);
            self.place(square, Some(Piece::new(team, PieceKind::Pawn)));
        }
    }

    /// Puts a piece on (or clears) a square. Out-of-bounds placement is a
    /// silent no-op; castling and en-passant arithmetic in the generators
    /// can produce off-board squares.
    pub fn place(&mut self, square: Square, piece: Option<Piece>) {
        if !square.in_bounds() {
            return;
        }
        self.squares[(square.rank - 1) as usize][(square.file - 1) as usize] = piece;
    }

    /// The piece occupying a square, or None when the square is empty or
    /// out of bounds.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.in_bounds() {
            return None;
        }
        self.squares[(square.rank - 1) as usize][(square.file - 1) as usize]
    }

    /// Every occupied square with its piece, rank by rank.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (1..=8).flat_map(move |rank| {
            (1..=8).filter_map(move |file| {
                let square = Square::new(rank, file);
                self.piece_at(square).map(|piece| (square, piece))
            })
        })
    }

    pub(crate) fn king_square(&self, team: Team) -> Option<Square> {
        self.occupied_squares().find_map(|(square, piece)| {
            (piece.is(team) && piece.kind == PieceKind::King).then_some(square)
        })
    }

    /// True when `team`'s king stands on a square some opposing piece could
    /// move to. Attack generation never recurses into legality: a pinned
    /// attacker still delivers check for the purposes of this scan.
    pub fn is_team_in_check(&self, team: Team) -> bool {
        let Some(king_square) = self.king_square(team) else {
            return false;
        };
        self.occupied_squares()
            .filter(|(_, piece)| !piece.is(team))
            .any(|(square, _)| {
                pseudo_legal_moves(self, square)
                    .iter()
                    .any(|m| m.to == king_square)
            })
    }

    /// Applies a move to a copy of the board and returns the copy, leaving
    /// the receiver untouched. This is the single state-transition function:
    /// the game controller uses it for legality probing and for the real
    /// commit. Castling path safety is not verified here; that check lives
    /// in the controller.
    pub fn speculative_apply(&self, mv: Move) -> Board {
        let mut next = self.clone();
        let Some(mover) = next.piece_at(mv.from) else {
            return next;
        };

        let mut moved = mover;

        // promotion swaps the pawn's kind on arrival
        if let Some(kind) = mv.promotion {
            moved.kind = kind;
        }

        // a two-square pawn advance opens the one-reply en passant window
        if mover.kind == PieceKind::Pawn && mv.rank_distance() == 2 {
            moved.just_double_moved = true;
        }

        // a pawn stepping diagonally into an empty square is capturing en
        // passant: the victim sits beside the source, not on the target
        if mover.kind == PieceKind::Pawn
            && mv.file_distance() == 1
            && next.piece_at(mv.to).is_none()
        {
            next.place(Square::new(mv.from.rank, mv.to.file), None);
        }

        // a two-file king move is a castle: bring the rook across with it
        if mover.kind == PieceKind::King && mv.file_distance() == 2 {
            let queen_side = mv.to.file == 3;
            let rook_from = Square::new(mv.from.rank, if queen_side { 1 } else { 8 });
            let rook_to = Square::new(mv.from.rank, if queen_side { 4 } else { 6 });
            if let Some(mut rook) = next.piece_at(rook_from) {
                rook.has_moved = true;
                next.place(rook_to, Some(rook));
                next.place(rook_from, None);
            }
        }

        moved.has_moved = true;
        next.place(mv.to, Some(moved));
        next.place(mv.from, None);
        next
    }
}
