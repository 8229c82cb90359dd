use core::ops;

use crate::square::Square;

/// `KingSide` (towards column 7) or `QueenSide` (towards column 0).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    #[inline]
    pub const fn is_queen_side(self) -> bool {
        matches!(self, CastlingSide::QueenSide)
    }

    #[inline]
    pub const fn is_king_side(self) -> bool {
        matches!(self, CastlingSide::KingSide)
    }

    #[inline]
    pub const fn from_king_side(king_side: bool) -> CastlingSide {
        if king_side {
            CastlingSide::KingSide
        } else {
            CastlingSide::QueenSide
        }
    }

    /// Column direction the king travels in.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastlingSide::KingSide => 1,
            CastlingSide::QueenSide => -1,
        }
    }

    /// Column of the corner rook.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastlingSide::KingSide => 7,
            CastlingSide::QueenSide => 0,
        }
    }

    /// Gets the side of a king move from `king` to `to`.
    #[inline]
    pub const fn of_king_move(king: Square, to: Square) -> CastlingSide {
        CastlingSide::from_king_side(king.col() < to.col())
    }

    /// Corner square of the rook on the king's row.
    #[inline]
    pub const fn rook_from(self, king: Square) -> Square {
        king.with_col(self.rook_col())
    }

    /// Destination of the king, two columns towards the rook.
    #[inline]
    pub const fn king_to(self, king: Square) -> Option<Square> {
        king.offset(0, 2 * self.direction())
    }

    /// Destination of the rook: next to the king's destination, on the side
    /// the king came from.
    #[inline]
    pub const fn rook_to(self, king_to: Square) -> Option<Square> {
        king_to.offset(0, -self.direction())
    }

    #[must_use]
    #[inline]
    pub const fn other(self) -> CastlingSide {
        match self {
            CastlingSide::KingSide => CastlingSide::QueenSide,
            CastlingSide::QueenSide => CastlingSide::KingSide,
        }
    }

    /// `KingSide` and `QueenSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];
}

impl ops::Not for CastlingSide {
    type Output = CastlingSide;

    #[inline]
    fn not(self) -> CastlingSide {
        self.other()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_geometry() {
        let side = CastlingSide::KingSide;
        assert_eq!(side.rook_from(Square::E1), Square::H1);
        assert_eq!(side.king_to(Square::E1), Some(Square::G1));
        assert_eq!(side.rook_to(Square::G1), Some(Square::F1));

        let side = CastlingSide::QueenSide;
        assert_eq!(side.rook_from(Square::E8), Square::A8);
        assert_eq!(side.king_to(Square::E8), Some(Square::C8));
        assert_eq!(side.rook_to(Square::C8), Some(Square::D8));
    }

    #[test]
    fn test_of_king_move() {
        assert_eq!(CastlingSide::of_king_move(Square::E1, Square::G1), CastlingSide::KingSide);
        assert_eq!(CastlingSide::of_king_move(Square::E8, Square::C8), CastlingSide::QueenSide);
        assert_eq!(!CastlingSide::KingSide, CastlingSide::QueenSide);
    }
}
