//! Pseudo-legal move generation.
//!
//! Destinations follow each piece's movement pattern and the occupancy of
//! the board, without regard to whether the move would leave the mover's
//! own king attacked. See [`legal`](crate::legal) for that.
//!
//! # Examples
//!
//! ```
//! use rookery::{movegen, Board, Square};
//!
//! let board = Board::new();
//! let pushes = movegen::pseudo_legal_moves(&board, Square::E2);
//! assert!(pushes.contains(Square::E3));
//! assert!(pushes.contains(Square::E4));
//! assert_eq!(pushes.count(), 2);
//!
//! // Blocked by its own pieces.
//! assert!(movegen::pseudo_legal_moves(&board, Square::A1).is_empty());
//! ```

use core::iter;

use crate::{
    attacks::{self, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS},
    bitboard::Bitboard,
    board::Board,
    castling_side::CastlingSide,
    kind::PieceKind,
    piece::Piece,
    side::Side,
    square::Square,
};

/// Destinations of the piece on `from`, or an empty set if there is none.
///
/// Only a king's castling candidates consult
/// [`attacks::is_attacked()`]. Pawns, knights and sliders look at
/// occupancy alone.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Bitboard {
    let Some(piece) = board.piece_at(from) else {
        return Bitboard::EMPTY;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece),
        PieceKind::Rook => sliding_moves(board, from, piece.side, &ROOK_DIRECTIONS),
        PieceKind::Bishop => sliding_moves(board, from, piece.side, &BISHOP_DIRECTIONS),
        PieceKind::Queen => sliding_moves(board, from, piece.side, &QUEEN_DIRECTIONS),
        PieceKind::Knight => stepping_moves(board, from, piece.side, &KNIGHT_OFFSETS),
        PieceKind::King => {
            stepping_moves(board, from, piece.side, &KING_OFFSETS)
                | castling_moves(board, from, piece)
        }
    }
}

fn stepping_moves(board: &Board, from: Square, side: Side, offsets: &[(i8, i8)]) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| board.side_at(to) != Some(side))
        .collect()
}

fn sliding_moves(board: &Board, from: Square, side: Side, directions: &[(i8, i8)]) -> Bitboard {
    let mut moves = Bitboard::EMPTY;

    for &(dr, dc) in directions {
        let mut previous = from;

        while let Some(to) = previous.offset(dr, dc) {
            match board.side_at(to) {
                None => moves.add(to),
                Some(occupant) => {
                    if occupant != side {
                        moves.add(to);
                    }
                    break;
                }
            }
            previous = to;
        }
    }

    moves
}

fn pawn_moves(board: &Board, from: Square, pawn: Piece) -> Bitboard {
    let forward = pawn.side.forward();
    let mut moves = Bitboard::EMPTY;

    if let Some(single) = from.offset(forward, 0).filter(|&sq| !board.is_occupied(sq)) {
        moves.add(single);

        if !pawn.has_moved {
            if let Some(double) = single.offset(forward, 0).filter(|&sq| !board.is_occupied(sq)) {
                moves.add(double);
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(forward, dc) {
            if board.side_at(to) == Some(!pawn.side) {
                moves.add(to);
            }
        }
    }

    if let Some(to) = en_passant_target(board, from, pawn) {
        moves.add(to);
    }

    moves
}

/// Square a pawn on `from` may capture en passant onto.
///
/// Requires the last move to be a two-row advance of an opposing pawn
/// that landed right beside `from`. The destination is the square that
/// pawn passed over.
pub fn en_passant_target(board: &Board, from: Square, pawn: Piece) -> Option<Square> {
    let last_move = board.last_move()?;

    if pawn.kind != PieceKind::Pawn
        || !last_move.is_double_pawn_step()
        || last_move.side == pawn.side
        || last_move.to.row() != from.row()
        || last_move.to.col().abs_diff(from.col()) != 1
    {
        return None;
    }

    last_move
        .to
        .offset(pawn.side.forward(), 0)
        .filter(|&to| !board.is_occupied(to))
}

/// Castling destinations of an unmoved king on `king_sq`.
///
/// A side is a candidate if the corner rook on the king's row is an unmoved
/// rook of the same side, every square strictly between king and rook is
/// empty, and none of the squares the king stands on, passes over or lands
/// on is attacked. The destination is two columns towards the rook.
pub fn castling_moves(board: &Board, king_sq: Square, king: Piece) -> Bitboard {
    if king.kind != PieceKind::King || king.has_moved {
        return Bitboard::EMPTY;
    }

    CastlingSide::ALL
        .into_iter()
        .filter_map(|castling| castling_target(board, king_sq, king.side, castling))
        .collect()
}

fn castling_target(
    board: &Board,
    king_sq: Square,
    side: Side,
    castling: CastlingSide,
) -> Option<Square> {
    let rook_sq = castling.rook_from(king_sq);
    let rook = board.piece_at(rook_sq)?;
    if !rook.is(PieceKind::Rook, side) || rook.has_moved {
        return None;
    }

    // The king must land strictly between its square and the rook's.
    if king_sq.col().abs_diff(rook_sq.col()) < 3 {
        return None;
    }
    let king_to = castling.king_to(king_sq)?;

    if between(king_sq, rook_sq).any(|sq| board.is_occupied(sq)) {
        return None;
    }

    let mut path = iter::once(king_sq)
        .chain(between(king_sq, king_to))
        .chain(iter::once(king_to));
    if path.any(|sq| attacks::is_attacked(board, sq, side)) {
        return None;
    }

    Some(king_to)
}

/// Squares strictly between two squares of the same row.
fn between(a: Square, b: Square) -> impl Iterator<Item = Square> {
    debug_assert_eq!(a.row(), b.row());
    let (low, high) = if a.col() < b.col() {
        (a.col(), b.col())
    } else {
        (b.col(), a.col())
    };
    (low + 1..high).map(move |col| a.with_col(col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LastMove;

    fn board(placement: &str) -> Board {
        placement.parse().expect("valid placement")
    }

    fn squares(names: &[Square]) -> Bitboard {
        names.iter().copied().collect()
    }

    #[test]
    fn test_initial_pseudo_legal_counts() {
        let board = Board::new();
        let total: usize = board
            .by_side(Side::White)
            .into_iter()
            .map(|sq| pseudo_legal_moves(&board, sq).count())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn test_pawn_pushes() {
        let board = board("4k3/8/8/8/8/4p3/4P3/4K3");
        assert!(pseudo_legal_moves(&board, Square::E2).is_empty());

        let board = self::board("4k3/8/8/8/4p3/8/4P3/4K3");
        assert_eq!(pseudo_legal_moves(&board, Square::E2), squares(&[Square::E3]));

        let mut moved = Board::new();
        let pawn = moved.remove_piece_at(Square::D2).expect("pawn on d2");
        moved.set_piece_at(Square::D3, pawn.moved());
        assert_eq!(pseudo_legal_moves(&moved, Square::D3), squares(&[Square::D4]));
    }

    #[test]
    fn test_pawn_captures() {
        let board = board("4k3/8/8/8/8/3n1B2/4P3/4K3");
        assert_eq!(
            pseudo_legal_moves(&board, Square::E2),
            squares(&[Square::D3, Square::E3, Square::E4])
        );

        let board = self::board("4k3/3p4/2P1P3/8/8/8/8/4K3");
        assert_eq!(
            pseudo_legal_moves(&board, Square::D7),
            squares(&[Square::C6, Square::D6, Square::D5, Square::E6])
        );
    }

    #[test]
    fn test_en_passant() {
        let mut board = board("4k3/8/8/3pP3/8/8/8/4K3");
        assert!(!pseudo_legal_moves(&board, Square::E5).contains(Square::D6));

        board.set_last_move(Some(LastMove {
            from: Square::D7,
            to: Square::D5,
            kind: PieceKind::Pawn,
            side: Side::Black,
        }));
        assert_eq!(
            pseudo_legal_moves(&board, Square::E5),
            squares(&[Square::D6, Square::E6])
        );

        // A single step does not qualify.
        board.set_last_move(Some(LastMove {
            from: Square::D6,
            to: Square::D5,
            kind: PieceKind::Pawn,
            side: Side::Black,
        }));
        assert!(!pseudo_legal_moves(&board, Square::E5).contains(Square::D6));
    }

    #[test]
    fn test_en_passant_requires_adjacent_pawn() {
        let mut board = board("4k3/8/8/2p1P3/8/8/8/4K3");
        board.set_last_move(Some(LastMove {
            from: Square::C7,
            to: Square::C5,
            kind: PieceKind::Pawn,
            side: Side::Black,
        }));
        assert_eq!(pseudo_legal_moves(&board, Square::E5), squares(&[Square::E6]));
    }

    #[test]
    fn test_sliders() {
        let board = board("4k3/8/8/8/3R1p2/8/3P4/4K3");
        assert_eq!(
            pseudo_legal_moves(&board, Square::D4),
            squares(&[
                Square::D8,
                Square::D7,
                Square::D6,
                Square::D5,
                Square::A4,
                Square::B4,
                Square::C4,
                Square::E4,
                Square::F4,
                Square::D3,
            ])
        );

        let board = self::board("4k3/8/8/8/8/8/8/Q3K3");
        assert_eq!(pseudo_legal_moves(&board, Square::A1).count(), 7 + 3 + 7);
        assert_eq!(
            pseudo_legal_moves(&board, Square::A1) & Bitboard::from(Square::E1),
            Bitboard::EMPTY
        );
    }

    #[test]
    fn test_knight() {
        let board = Board::new();
        assert_eq!(
            pseudo_legal_moves(&board, Square::B8),
            squares(&[Square::A6, Square::C6])
        );
    }

    #[test]
    fn test_castling_candidates() {
        let board = board("r3k2r/8/8/8/8/8/8/R3K2R");
        let moves = pseudo_legal_moves(&board, Square::E1);
        assert!(moves.contains(Square::G1));
        assert!(moves.contains(Square::C1));
        assert_eq!(moves.count(), 5 + 2);
    }

    #[test]
    fn test_castling_blocked_by_pieces() {
        let board = board("4k3/8/8/8/8/8/8/RN2K1NR");
        assert!(castling_moves(&board, Square::E1, Side::White.king()).is_empty());

        // Only b1 occupied still blocks the queen side.
        let board = self::board("4k3/8/8/8/8/8/8/RN2K2R");
        assert_eq!(
            castling_moves(&board, Square::E1, Side::White.king()),
            squares(&[Square::G1])
        );
    }

    #[test]
    fn test_castling_needs_unmoved_pieces() {
        let board = board("4k3/8/8/8/8/8/8/R3K2R");
        assert!(castling_moves(&board, Square::E1, Side::White.king().moved()).is_empty());

        let mut board = board;
        board.set_piece_at(Square::H1, Side::White.rook().moved());
        assert_eq!(
            castling_moves(&board, Square::E1, Side::White.king()),
            squares(&[Square::C1])
        );

        board.set_piece_at(Square::A1, Side::Black.rook());
        assert!(castling_moves(&board, Square::E1, Side::White.king()).is_empty());
    }

    #[test]
    fn test_castling_through_attacked_square() {
        // The rook on f8 covers f1, which the king passes over.
        let board = board("4kr2/8/8/8/8/8/8/4K2R");
        assert!(!board.is_occupied(Square::F1));
        assert!(castling_moves(&board, Square::E1, Side::White.king()).is_empty());

        // An attacked b1 does not matter, the king never crosses it.
        let board = self::board("1r2k3/8/8/8/8/8/8/R3K3");
        assert_eq!(
            castling_moves(&board, Square::E1, Side::White.king()),
            squares(&[Square::C1])
        );
    }

    #[test]
    fn test_no_castling_out_of_check() {
        let board = board("4r1k1/8/8/8/8/8/8/R3K2R");
        assert!(castling_moves(&board, Square::E1, Side::White.king()).is_empty());
    }
}
