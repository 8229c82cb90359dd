use arrayvec::ArrayVec;

use crate::{board::Board, castling_side::CastlingSide, kind::PieceKind, square::Square};

/// Information about a move.
///
/// Moves are told apart purely by their shape on the board, see
/// [`Move::classify()`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Move {
    /// A plain move or capture, possibly promoting a pawn.
    Normal {
        kind: PieceKind,
        from: Square,
        capture: Option<PieceKind>,
        to: Square,
        promotion: Option<PieceKind>,
    },
    /// A pawn capturing diagonally onto an empty square. The captured pawn
    /// stands next to `from`, on the column of `to`.
    EnPassant { from: Square, to: Square },
    /// A king moving two columns, taking the corner rook along.
    Castle { king: Square, to: Square },
}

impl Move {
    /// Describes moving the piece on `from` to `to`, or `None` if `from` is
    /// empty.
    ///
    /// This does not check legality. A pawn changing columns onto an empty
    /// square is en passant, a king moving two columns is castling, and a
    /// pawn reaching the opponent's home row promotes to a queen.
    ///
    /// # Examples
    ///
    /// ```
    /// use rookery::{Board, Move, PieceKind, Square};
    ///
    /// let board = Board::new();
    /// assert_eq!(
    ///     Move::classify(&board, Square::G1, Square::F3),
    ///     Some(Move::Normal {
    ///         kind: PieceKind::Knight,
    ///         from: Square::G1,
    ///         capture: None,
    ///         to: Square::F3,
    ///         promotion: None,
    ///     })
    /// );
    /// assert_eq!(Move::classify(&board, Square::E4, Square::E5), None);
    /// ```
    pub fn classify(board: &Board, from: Square, to: Square) -> Option<Move> {
        let piece = board.piece_at(from)?;

        Some(match piece.kind {
            PieceKind::Pawn if from.col() != to.col() && !board.is_occupied(to) => {
                Move::EnPassant { from, to }
            }
            PieceKind::King if from.col().abs_diff(to.col()) == 2 => Move::Castle { king: from, to },
            kind => Move::Normal {
                kind,
                from,
                capture: board.kind_at(to),
                to,
                promotion: (kind == PieceKind::Pawn && to.row() == piece.side.promotion_row())
                    .then_some(PieceKind::Queen),
            },
        })
    }

    /// Gets the kind of the moved piece.
    pub const fn kind(self) -> PieceKind {
        match self {
            Move::Normal { kind, .. } => kind,
            Move::EnPassant { .. } => PieceKind::Pawn,
            Move::Castle { .. } => PieceKind::King,
        }
    }

    pub const fn from(self) -> Square {
        match self {
            Move::Normal { from, .. } | Move::EnPassant { from, .. } => from,
            Move::Castle { king, .. } => king,
        }
    }

    /// Gets the target square. For castling this is the king's destination.
    pub const fn to(self) -> Square {
        match self {
            Move::Normal { to, .. } | Move::EnPassant { to, .. } | Move::Castle { to, .. } => to,
        }
    }

    /// Gets the kind of the captured piece or `None`.
    pub const fn capture(self) -> Option<PieceKind> {
        match self {
            Move::Normal { capture, .. } => capture,
            Move::EnPassant { .. } => Some(PieceKind::Pawn),
            Move::Castle { .. } => None,
        }
    }

    /// Square of the captured piece. Differs from [`Move::to()`] only for
    /// en passant.
    pub const fn capture_square(self) -> Option<Square> {
        match self {
            Move::Normal {
                capture: Some(_),
                to,
                ..
            } => Some(to),
            Move::EnPassant { from, to } => Some(from.with_col(to.col())),
            _ => None,
        }
    }

    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            Move::Normal {
                capture: Some(_),
                ..
            } | Move::EnPassant { .. }
        )
    }

    pub const fn is_en_passant(self) -> bool {
        matches!(self, Move::EnPassant { .. })
    }

    pub const fn is_castle(self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    pub const fn castling_side(self) -> Option<CastlingSide> {
        match self {
            Move::Castle { king, to } => Some(CastlingSide::of_king_move(king, to)),
            _ => None,
        }
    }

    pub const fn promotion(self) -> Option<PieceKind> {
        match self {
            Move::Normal { promotion, .. } => promotion,
            _ => None,
        }
    }

    pub const fn is_promotion(self) -> bool {
        matches!(
            self,
            Move::Normal {
                promotion: Some(_),
                ..
            }
        )
    }
}

/// A container for moves that can be stored inline on the stack.
///
/// There is enough space for the legal moves of any position that passes
/// [`Setup::validate()`](crate::Setup::validate), i.e. with at most 16
/// pieces per side.
pub type MoveList = ArrayVec<Move, 512>;
