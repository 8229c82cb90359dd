//! Attack detection.
//!
//! A square is attacked by a side if one of its pieces could move there
//! next, ignoring whether that move would expose its own king.
//!
//! # Examples
//!
//! ```
//! use rookery::{attacks, Board, Side, Square};
//!
//! let board = Board::new();
//! // The knight on g1 reaches f3.
//! assert!(attacks::is_attacked(&board, Square::F3, Side::Black));
//! assert!(!attacks::is_attacked(&board, Square::E4, Side::White));
//! ```

use crate::{
    bitboard::Bitboard, board::Board, kind::PieceKind, movegen, side::Side, square::Square,
};

/// Row and column steps to the eight neighbouring squares.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Row and column steps of the L-shaped knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

fn steps(sq: Square, offsets: &[(i8, i8)]) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| sq.offset(dr, dc))
        .collect()
}

/// Squares adjacent to `sq`.
///
/// # Examples
///
/// ```
/// use rookery::{attacks, Square};
///
/// assert_eq!(attacks::king_attacks(Square::A1).count(), 3);
/// assert_eq!(attacks::king_attacks(Square::D4).count(), 8);
/// ```
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    steps(sq, &KING_OFFSETS)
}

#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    steps(sq, &KNIGHT_OFFSETS)
}

/// Tests if any piece of the side opposing `defending` can reach `sq`.
///
/// Opposing kings are only tested for adjacency. Asking the full king move
/// generator instead would ask for castling moves, which ask this function
/// again about the squares around that king, without end. Every other kind
/// goes through [`movegen::pseudo_legal_moves()`], which never calls back
/// here for non-king pieces.
pub fn is_attacked(board: &Board, sq: Square, defending: Side) -> bool {
    board
        .pieces()
        .filter(|&(_, piece)| piece.side != defending)
        .any(|(from, piece)| match piece.kind {
            PieceKind::King => king_attacks(from).contains(sq),
            _ => movegen::pseudo_legal_moves(board, from).contains(sq),
        })
}

/// Squares of the pieces opposing `defending` that can reach `sq`.
pub fn attackers(board: &Board, sq: Square, defending: Side) -> Bitboard {
    board
        .pieces()
        .filter(|&(from, piece)| {
            piece.side != defending
                && match piece.kind {
                    PieceKind::King => king_attacks(from).contains(sq),
                    _ => movegen::pseudo_legal_moves(board, from).contains(sq),
                }
        })
        .map(|(from, _)| from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_attacks() {
        assert_eq!(
            knight_attacks(Square::B1),
            Bitboard::from(Square::A3) | Bitboard::from(Square::C3) | Bitboard::from(Square::D2)
        );
        assert_eq!(knight_attacks(Square::E4).count(), 8);
    }

    #[test]
    fn test_king_adjacency_only() {
        // Unmoved kings next to unmoved rooks have castling candidates, but
        // a king only attacks its neighbours.
        let board: Board = "r3k2r/8/8/8/8/8/8/R3K2R".parse().expect("valid placement");
        assert!(is_attacked(&board, Square::E2, Side::Black));
        assert!(!is_attacked(&board, Square::E3, Side::Black));
        assert!(!is_attacked(&board, Square::E1, Side::White));
        assert!(is_attacked(&board, Square::A2, Side::Black));
        assert!(!is_attacked(&board, Square::D8, Side::Black));
        assert!(is_attacked(&board, Square::D8, Side::White));
    }

    #[test]
    fn test_sliders_are_blocked() {
        let board: Board = "4k3/8/8/8/1b6/2P5/8/4K3".parse().expect("valid placement");
        assert!(is_attacked(&board, Square::C3, Side::White));
        assert!(!is_attacked(&board, Square::D2, Side::White));
        assert!(!is_attacked(&board, Square::E1, Side::White));
        assert_eq!(attackers(&board, Square::C3, Side::White), Bitboard::from(Square::B4));
    }

    #[test]
    fn test_attackers_of_king() {
        // Fool's mate.
        let board: Board = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR"
            .parse()
            .expect("valid placement");
        assert_eq!(attackers(&board, Square::E1, Side::White), Bitboard::from(Square::H4));
    }
}
