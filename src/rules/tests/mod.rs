use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Opt-in test logging: RUST_LOG=debug cargo test -- --nocapture
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sq(rank: i8, file: i8) -> Square {
    Square::new(rank, file)
}

pub fn mv(from_rank: i8, from_file: i8, to_rank: i8, to_file: i8) -> Move {
    Move::new(sq(from_rank, from_file), sq(to_rank, to_file))
}

pub fn place(board: &mut Board, rank: i8, file: i8, team: Team, kind: PieceKind) {
    board.place(sq(rank, file), Some(Piece::new(team, kind)));
}

/// An otherwise empty board with the kings far apart on their home files,
/// so fixtures stay check-free unless a test arranges otherwise.
pub fn empty_with_kings() -> Board {
    let mut board = Board::empty();
    place(&mut board, 1, 5, Team::White, PieceKind::King);
    place(&mut board, 8, 5, Team::Black, PieceKind::King);
    board
}

/// A game over a prepared board with `team` to move.
pub fn fixture(board: Board, team: Team) -> Game {
    let mut game = Game::new();
    game.set_board(board);
    game.set_active_team(team);
    game
}

pub fn has_move(moves: &MoveList, to_rank: i8, to_file: i8) -> bool {
    moves.iter().any(|m| m.to == sq(to_rank, to_file))
}

pub fn moves_to(moves: &MoveList, to_rank: i8, to_file: i8) -> usize {
    moves.iter().filter(|m| m.to == sq(to_rank, to_file)).count()
}

// ==================== TEST MODULES ====================

mod check_detection;
