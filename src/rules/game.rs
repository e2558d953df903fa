use log::debug;
use thiserror::Error;

use super::piece_moves::{pseudo_legal_moves, MoveList};
use super::{Board, Move, Piece, PieceKind, Square, Team};

/// The one way a move request can fail. The engine does not say why a move
/// was rejected; a caller that wants a user-facing reason re-derives it
/// from [`Game::legal_moves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid move")]
pub struct InvalidMove;

/// Result of a status query for one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    None,
    Check,
    Checkmate,
    Stalemate,
}

/// A single match: the live board, whose turn it is, and whether the
/// surrounding service has ended the game. The board is mutated only
/// through [`Game::make_move`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active_team: Team,
    over: bool,
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    /// Standard starting position, White to move.
    pub fn new() -> Game {
        Game {
            board: Board::standard(),
            active_team: Team::White,
            over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board wholesale. Used by the persistence layer when
    /// resuming a stored game, and by test fixtures.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    pub fn active_team(&self) -> Team {
        self.active_team
    }

    pub fn set_active_team(&mut self, team: Team) {
        self.active_team = team;
    }

    /// Set by the surrounding service on resignation; the engine itself
    /// only ever reports checkmate or stalemate on query.
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn set_over(&mut self, over: bool) {
        self.over = over;
    }

    /// Every legal move for the piece on `from`, or None for an empty
    /// square. A pseudo-legal move survives when applying it leaves the
    /// mover's own king unattacked; castling additionally requires the
    /// king's start and transit squares to be safe.
    pub fn legal_moves(&self, from: Square) -> Option<MoveList> {
        let piece = self.board.piece_at(from)?;
        let mut moves = pseudo_legal_moves(&self.board, from);
        moves.retain(|mv: &mut Move| self.is_legal(*mv, piece));
        Some(moves)
    }

    fn is_legal(&self, mv: Move, piece: Piece) -> bool {
        if self.board.speculative_apply(mv).is_team_in_check(piece.team) {
            return false;
        }
        if piece.kind == PieceKind::King && mv.file_distance() == 2 {
            // castling may not leave, cross, or enter an attacked square.
            // The start square is tested on the board as it stands, the
            // transit square via a one-file hypothetical king move; the
            // landing square is already covered by the filter above.
            if self.board.is_team_in_check(piece.team) {
                return false;
            }
            let transit = Square::new(mv.from.rank, if mv.to.file == 3 { 4 } else { 6 });
            let step = Move::new(mv.from, transit);
            if self.board.speculative_apply(step).is_team_in_check(piece.team) {
                return false;
            }
        }
        true
    }

    /// Applies a move for the active team. Fails with [`InvalidMove`] when
    /// the source square is empty, the piece belongs to the waiting team,
    /// or the move is not in the current legal set. Nothing is mutated on
    /// failure.
    pub fn make_move(&mut self, mv: Move) -> Result<(), InvalidMove> {
        let piece = self.board.piece_at(mv.from).ok_or(InvalidMove)?;
        if !piece.is(self.active_team) {
            debug!("rejected {mv}: not {:?}'s turn", piece.team);
            return Err(InvalidMove);
        }
        let legal = self.legal_moves(mv.from).ok_or(InvalidMove)?;
        if !legal.contains(&mv) {
            debug!("rejected {mv}: not legal for {:?}", self.active_team);
            return Err(InvalidMove);
        }

        // the one-reply en passant window on the mover's own pawns has
        // elapsed; clear it before the commit (which may set it afresh on a
        // new double advance)
        self.expire_double_move_flags(self.active_team);

        self.board = self.board.speculative_apply(mv);
        debug!("{:?} played {mv}", self.active_team);
        self.active_team = self.active_team.opponent();
        Ok(())
    }

    fn expire_double_move_flags(&mut self, team: Team) {
        for rank in 1..=8 {
            for file in 1..=8 {
                let square = Square::new(rank, file);
                let Some(mut piece) = self.board.piece_at(square) else {
                    continue;
                };
                if piece.kind == PieceKind::Pawn && piece.is(team) && piece.just_double_moved {
                    piece.just_double_moved = false;
                    self.board.place(square, Some(piece));
                }
            }
        }
    }

    /// True when `team`'s king is attacked on the current board.
    pub fn is_in_check(&self, team: Team) -> bool {
        self.board.is_team_in_check(team)
    }

    /// Checkmate: in check with nothing to play.
    pub fn is_in_checkmate(&self, team: Team) -> bool {
        self.is_in_check(team) && !self.has_any_legal_move(team)
    }

    /// Stalemate: not in check, nothing to play, and it is `team`'s turn.
    pub fn is_in_stalemate(&self, team: Team) -> bool {
        !self.is_in_check(team) && !self.has_any_legal_move(team) && self.active_team == team
    }

    /// Rolls the three queries into the single status the service layer
    /// broadcasts after each move.
    pub fn check_status(&self, team: Team) -> CheckStatus {
        if self.is_in_checkmate(team) {
            debug!("{team:?} is checkmated");
            CheckStatus::Checkmate
        } else if self.is_in_stalemate(team) {
            debug!("{team:?} is stalemated");
            CheckStatus::Stalemate
        } else if self.is_in_check(team) {
            CheckStatus::Check
        } else {
            CheckStatus::None
        }
    }

    fn has_any_legal_move(&self, team: Team) -> bool {
        self.board
            .occupied_squares()
            .filter(|(_, piece)| piece.is(team))
            .any(|(square, _)| {
                self.legal_moves(square)
                    .is_some_and(|moves| !moves.is_empty())
            })
    }
}
