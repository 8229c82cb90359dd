//! Move execution.

use log::debug;

use crate::{
    board::{Board, LastMove},
    castling_side::CastlingSide,
    m::Move,
    square::Square,
};

/// Moves the piece on `from` to `to` and applies every side effect of the
/// move: captures, en passant removal, the castling rook, promotion, moved
/// flags and the last move record.
///
/// Returns the executed [`Move`], or `None` if `from` is empty. Legality is
/// the caller's responsibility, see [`Game::submit_move()`].
///
/// [`Game::submit_move()`]: crate::Game::submit_move
///
/// # Examples
///
/// ```
/// use rookery::{play, Board, Side, Square};
///
/// let mut board = Board::new();
/// play::execute(&mut board, Square::E2, Square::E4);
/// assert_eq!(board.piece_at(Square::E2), None);
/// assert_eq!(board.piece_at(Square::E4), Some(Side::White.pawn().moved()));
/// assert!(board.last_move().is_some_and(|m| m.is_double_pawn_step()));
/// ```
pub fn execute(board: &mut Board, from: Square, to: Square) -> Option<Move> {
    let m = Move::classify(board, from, to)?;
    let mut piece = board.remove_piece_at(from)?;

    match m {
        Move::EnPassant { .. } => {
            let victim = Square::new(from.row(), to.col());
            let captured = board.remove_piece_at(victim);
            debug!("{from}{to} captures en passant on {victim}: {captured:?}");
        }
        Move::Castle { king, to } => {
            let castling = CastlingSide::of_king_move(king, to);
            let rook_from = castling.rook_from(king);
            if let (Some(rook), Some(rook_to)) =
                (board.remove_piece_at(rook_from), castling.rook_to(to))
            {
                board.set_piece_at(rook_to, rook.moved());
                debug!("{king}{to} castles, rook {rook_from}{rook_to}");
            }
        }
        Move::Normal { .. } => {}
    }

    if let Some(promotion) = m.promotion() {
        debug!("{from}{to} promotes to {promotion:?}");
        piece.kind = promotion;
    }

    let captured = board.set_piece_at(to, piece.moved());
    debug!("{} {:?} {from}{to}, captured {captured:?}", piece.side, m.kind());

    board.set_last_move(Some(LastMove {
        from,
        to,
        kind: m.kind(),
        side: piece.side,
    }));

    Some(m)
}

/// Applies an already classified move, as produced by
/// [`Move::classify()`].
#[inline]
pub fn play_unchecked(board: &mut Board, m: Move) {
    execute(board, m.from(), m.to());
}
