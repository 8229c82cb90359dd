use rookery::{legal, status, Bitboard, Game, PieceKind, Setup, Side, Square, Status};

fn game(setup: &str) -> Game {
    let setup: Setup = setup.parse().expect("valid setup");
    Game::from_setup(setup).expect("playable setup")
}

fn play(game: &mut Game, moves: &[(Square, Square)]) {
    for &(from, to) in moves {
        game.submit_move(from, to)
            .unwrap_or_else(|err| panic!("{from}{to}: {err}"));
    }
}

/// Visits every position reachable in `depth` plies.
fn walk(game: &Game, depth: u32, visit: &mut impl FnMut(&Game)) {
    visit(game);
    if depth > 0 {
        for m in game.legal_moves() {
            let mut child = game.clone();
            child.play_move(m);
            walk(&child, depth - 1, visit);
        }
    }
}

#[test]
fn test_initial_move_counts() {
    let mut game = Game::default();
    assert_eq!(game.legal_moves().len(), 20);

    let pawn_moves = game
        .legal_moves()
        .iter()
        .filter(|m| m.kind() == PieceKind::Pawn)
        .count();
    assert_eq!(pawn_moves, 16);

    play(&mut game, &[(Square::E2, Square::E4)]);
    assert_eq!(game.legal_moves().len(), 20);
}

#[test]
fn test_legal_filter_leaves_no_residue() {
    let start = game("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");

    walk(&start, 2, &mut |game: &Game| {
        let before = game.board().clone();
        for side in Side::ALL {
            for from in game.board().by_side(side) {
                let _ = legal::legal_moves(game.board(), from);
            }
            let _ = status::status(game.board(), side);
        }
        assert_eq!(*game.board(), before);
        assert_eq!(game.board().last_move(), before.last_move());
    });
}

#[test]
fn test_mate_and_stalemate_are_exclusive() {
    let start = game("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -");

    walk(&start, 3, &mut |game: &Game| {
        for side in Side::ALL {
            let board = game.board();
            let checkmate = status::is_checkmate(board, side);
            let stalemate = status::is_stalemate(board, side);
            assert!(!(checkmate && stalemate));
            if checkmate || stalemate {
                assert!(!status::has_legal_moves(board, side));
                let union = board
                    .by_side(side)
                    .into_iter()
                    .fold(Bitboard::EMPTY, |acc, from| acc | legal::legal_moves(board, from));
                assert!(union.is_empty());
            }
        }
    });
}

#[test]
fn test_en_passant_expires() {
    let mut game = Game::default();
    play(
        &mut game,
        &[
            (Square::E2, Square::E4),
            (Square::A7, Square::A6),
            (Square::E4, Square::E5),
            (Square::D7, Square::D5),
        ],
    );
    let destinations = game.legal_destinations(Square::E5).expect("white pawn");
    assert!(destinations.contains(Square::D6));

    play(&mut game, &[(Square::H2, Square::H3), (Square::H7, Square::H6)]);
    let destinations = game.legal_destinations(Square::E5).expect("white pawn");
    assert!(!destinations.contains(Square::D6));
    assert!(destinations.contains(Square::E6));
}

#[test]
fn test_castling_blocked_by_attacked_transit() {
    // The rook on f8 attacks f1, which is empty.
    let game = game("4kr2/8/8/8/8/8/8/4K2R w K -");
    assert!(!game.board().is_occupied(Square::F1));
    let destinations = game.legal_destinations(Square::E1).expect("white king");
    assert!(!destinations.contains(Square::G1));
    assert!(!destinations.contains(Square::F1));
    assert!(destinations.contains(Square::D1));
}

#[test]
fn test_promotion() {
    let mut game = game("4k3/P7/8/8/8/8/8/4K3 w - -");
    let submitted = game
        .submit_move(Square::A7, Square::A8)
        .expect("legal promotion");
    assert!(submitted.promotion_occurred);
    let piece = game.piece_at(Square::A8).expect("promoted piece");
    assert_eq!(piece.kind, PieceKind::Queen);
    assert_eq!(piece.side, Side::White);
    assert_eq!(game.status(Side::Black), Status::Check);
}

#[test]
fn test_fools_mate() {
    let mut game = Game::default();
    play(
        &mut game,
        &[
            (Square::F2, Square::F3),
            (Square::E7, Square::E5),
            (Square::G2, Square::G4),
            (Square::D8, Square::H4),
        ],
    );
    assert_eq!(game.status(Side::White), Status::Checkmate);
    assert!(game.is_game_over());
}

#[test]
fn test_stalemate() {
    for setup in ["7k/5Q2/6K1/8/8/8/8/8 b - -", "k7/P7/K7/8/8/8/8/8 b - -"] {
        let game = game(setup);
        assert_eq!(game.status(Side::Black), Status::Stalemate, "{setup}");
        assert!(game.legal_moves().is_empty());
    }
}

#[test]
fn test_stalemate_on_crowded_board() {
    // Every black piece is blocked in, and the king is not in check.
    let game = game("5bnr/4p1pq/4Qpkr/7p/7P/4P3/PPPP1PP1/RNB1KBNR b KQ -");
    assert!(!game.is_check());
    assert_eq!(game.status(Side::Black), Status::Stalemate);
}
