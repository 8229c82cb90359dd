//! Legal move filtering.
//!
//! A pseudo-legal destination is legal if, after moving the piece there,
//! the mover's own king is not attacked. The check is done by temporarily
//! applying the move to a scratch copy of the board and reverting it
//! afterwards, so the board passed in is never touched.

use log::trace;

use crate::{
    attacks,
    bitboard::Bitboard,
    board::Board,
    kind::PieceKind,
    movegen,
    piece::Piece,
    side::Side,
    square::Square,
};

/// Everything needed to take back a move applied by [`simulate()`].
#[derive(Copy, Clone, Debug)]
#[must_use]
pub struct Undo {
    from: Square,
    to: Square,
    moved: Piece,
    captured: Option<Piece>,
    en_passant: Option<(Square, Piece)>,
}

/// Moves the piece on `from` to `to` for the sake of testing king safety.
///
/// A pawn changing columns onto an empty square also lifts the pawn it
/// captures en passant. Castling rooks are not moved, the squares they
/// would travel over are not relevant to the king's safety after the move.
/// Moved flags and the last move are left alone.
///
/// Returns `None` if `from` is empty.
pub fn simulate(board: &mut Board, from: Square, to: Square) -> Option<Undo> {
    let moved = board.remove_piece_at(from)?;

    let en_passant = if moved.kind == PieceKind::Pawn
        && from.col() != to.col()
        && !board.is_occupied(to)
    {
        let victim = Square::new(from.row(), to.col());
        board.remove_piece_at(victim).map(|piece| (victim, piece))
    } else {
        None
    };

    let captured = board.set_piece_at(to, moved);

    Some(Undo {
        from,
        to,
        moved,
        captured,
        en_passant,
    })
}

/// Restores every square touched by [`simulate()`].
pub fn revert(board: &mut Board, undo: Undo) {
    board.put(undo.to, undo.captured);
    board.put(undo.from, Some(undo.moved));
    if let Some((sq, piece)) = undo.en_passant {
        board.put(sq, Some(piece));
    }
}

/// Tests if `side`'s king would be safe after moving `from` to `to`.
///
/// A side without a king is never in danger.
fn leaves_king_safe(scratch: &mut Board, side: Side, from: Square, to: Square) -> bool {
    let Some(undo) = simulate(scratch, from, to) else {
        return false;
    };

    let safe = match scratch.king_of(side) {
        Some(king) => !attacks::is_attacked(scratch, king, side),
        None => true,
    };

    revert(scratch, undo);
    safe
}

/// Legal destinations of the piece on `from`, or an empty set if there is
/// none.
///
/// # Examples
///
/// ```
/// use rookery::{legal, Board, Square};
///
/// // The pinned knight may not move.
/// let board: Board = "4k3/4r3/8/8/8/8/4N3/4K3".parse()?;
/// assert!(legal::legal_moves(&board, Square::E2).is_empty());
/// assert_eq!(legal::legal_moves(&board, Square::E1).count(), 4);
/// # Ok::<_, rookery::ParseBoardError>(())
/// ```
pub fn legal_moves(board: &Board, from: Square) -> Bitboard {
    let Some(piece) = board.piece_at(from) else {
        return Bitboard::EMPTY;
    };

    let candidates = movegen::pseudo_legal_moves(board, from);
    let mut scratch = board.clone();
    let mut legal = Bitboard::EMPTY;

    for to in candidates {
        if leaves_king_safe(&mut scratch, piece.side, from, to) {
            legal.add(to);
        } else {
            trace!("{from}{to} rejected, {} king would be attacked", piece.side);
        }
    }

    debug_assert_eq!(scratch, *board, "legal move filter left residue");
    legal
}

/// Tests if moving the piece on `from` to `to` is legal.
pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };

    movegen::pseudo_legal_moves(board, from).contains(to)
        && leaves_king_safe(&mut board.clone(), piece.side, from, to)
}

/// Tests if `side` has at least one legal move.
pub fn has_legal_moves(board: &Board, side: Side) -> bool {
    board
        .by_side(side)
        .into_iter()
        .any(|from| legal_moves(board, from).any())
}
