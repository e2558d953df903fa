use super::*;

// ==================== CHECK DETECTION TESTS ====================

#[test]
fn test_rook_checks_along_file() {
    let mut board = empty_with_kings();
    place(&mut board, 5, 5, Team::Black, PieceKind::Rook);

    assert!(board.is_team_in_check(Team::White));
    assert!(!board.is_team_in_check(Team::Black));
}

#[test]
fn test_blocked_rook_does_not_check() {
    let mut board = empty_with_kings();
    place(&mut board, 5, 5, Team::Black, PieceKind::Rook);
    place(&mut board, 3, 5, Team::White, PieceKind::Knight);

    assert!(!board.is_team_in_check(Team::White));
}

#[test]
fn test_bishop_checks_along_diagonal() {
    let mut board = empty_with_kings();
    place(&mut board, 4, 8, Team::Black, PieceKind::Bishop);

    assert!(board.is_team_in_check(Team::White));
}

#[test]
fn test_knight_checks_over_blockers() {
    let mut board = empty_with_kings();
    place(&mut board, 3, 4, Team::Black, PieceKind::Knight);
    // a wall around the knight changes nothing
    place(&mut board, 2, 4, Team::White, PieceKind::Pawn);
    place(&mut board, 2, 5, Team::White, PieceKind::Pawn);

    assert!(board.is_team_in_check(Team::White));
}

#[test]
fn test_pawn_checks_diagonally_only() {
    let mut board = empty_with_kings();
    place(&mut board, 2, 4, Team::Black, PieceKind::Pawn);

    assert!(board.is_team_in_check(Team::White), "pawn attacks one square diagonally forward");

    let mut board = empty_with_kings();
    place(&mut board, 2, 5, Team::Black, PieceKind::Pawn);

    assert!(!board.is_team_in_check(Team::White), "a pawn never attacks straight ahead");
}

#[test]
fn test_queen_checks_on_rank() {
    let mut board = empty_with_kings();
    place(&mut board, 1, 1, Team::Black, PieceKind::Queen);

    assert!(board.is_team_in_check(Team::White));
}

#[test]
fn test_opposing_kings_give_mutual_check_when_adjacent() {
    // unreachable in play, but the scan itself is symmetric
    let mut board = Board::empty();
    place(&mut board, 4, 4, Team::White, PieceKind::King);
    place(&mut board, 4, 5, Team::Black, PieceKind::King);

    assert!(board.is_team_in_check(Team::White));
    assert!(board.is_team_in_check(Team::Black));
}

#[test]
fn test_check_reported_through_game_queries() {
    let mut board = empty_with_kings();
    place(&mut board, 5, 5, Team::Black, PieceKind::Rook);

    let game = fixture(board, Team::White);

    assert!(game.is_in_check(Team::White));
    assert_eq!(game.check_status(Team::White), CheckStatus::Check);
    assert_eq!(game.check_status(Team::Black), CheckStatus::None);
}

#[test]
fn test_escaping_check_is_mandatory() {
    let mut board = empty_with_kings();
    place(&mut board, 5, 5, Team::Black, PieceKind::Rook);
    place(&mut board, 4, 1, Team::White, PieceKind::Rook);

    let game = fixture(board, Team::White);

    // the rook may only block on the e-file, not wander off
    let rook_moves = game.legal_moves(sq(4, 1)).unwrap();
    assert_eq!(rook_moves.len(), 1);
    assert!(has_move(&rook_moves, 4, 5));

    // the king may not stay on the attacked file
    let king_moves = game.legal_moves(sq(1, 5)).unwrap();
    assert!(!has_move(&king_moves, 2, 5));
    assert!(has_move(&king_moves, 1, 4));
}
