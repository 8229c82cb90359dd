//! Sets of squares.
//!
//! # Examples
//!
//! ```
//! use rookery::{Bitboard, Game, Square};
//!
//! let game = Game::new();
//! let targets: Bitboard = game.legal_destinations(Square::G1)?;
//! // . . . . . . . .
//! // . . . . . . . .
//! // . . . . . . . .
//! // . . . . . . . .
//! // . . . . . . . .
//! // . . . . . 1 . 1
//! // . . . . . . . .
//! // . . . . . . . .
//!
//! assert_eq!(targets, Bitboard::from(Square::F3) | Bitboard::from(Square::H3));
//! # Ok::<_, rookery::PlayError>(())
//! ```

use core::{
    fmt::{self, Write as _},
    iter::FusedIterator,
    ops,
};

use crate::square::Square;

/// A set of squares, one bit per square in row-major order.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(!0);

    /// The squares of a single row.
    #[inline]
    pub const fn row(row: u8) -> Bitboard {
        Bitboard(0xff << (8 * row as u32))
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1 << sq.index()) != 0
    }

    #[inline]
    pub fn add(&mut self, sq: Square) {
        self.0 |= 1 << sq.index();
    }

    /// Removes a square, returning whether it was present.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> bool {
        let present = self.contains(sq);
        self.0 &= !(1 << sq.index());
        present
    }

    #[must_use]
    #[inline]
    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | 1 << sq.index())
    }

    #[must_use]
    #[inline]
    pub const fn without(self, sq: Square) -> Bitboard {
        Bitboard(self.0 & !(1 << sq.index()))
    }

    #[inline]
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn more_than_one(self) -> bool {
        self.0 & self.0.wrapping_sub(1) != 0
    }

    #[inline]
    pub const fn first(self) -> Option<Square> {
        Square::from_index(self.0.trailing_zeros() as usize)
    }

    #[inline]
    pub const fn last(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Square::from_index(63 - self.0.leading_zeros() as usize)
        }
    }

    #[inline]
    pub const fn single_square(self) -> Option<Square> {
        if self.more_than_one() {
            None
        } else {
            self.first()
        }
    }
}

impl From<Square> for Bitboard {
    #[inline]
    fn from(sq: Square) -> Bitboard {
        Bitboard::EMPTY.with(sq)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::all() {
            f.write_char(if self.contains(sq) { '1' } else { '.' })?;
            f.write_char(if sq.col() < 7 { ' ' } else { '\n' })?;
        }
        Ok(())
    }
}

impl ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl ops::Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Bitboard {
        let mut result = Bitboard::EMPTY;
        result.extend(iter);
        result
    }
}

impl Extend<Square> for Bitboard {
    fn extend<T: IntoIterator<Item = Square>>(&mut self, iter: T) {
        for sq in iter {
            self.add(sq);
        }
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}

/// Iterator over the squares of a [`Bitboard`], in row-major order.
#[derive(Debug, Clone)]
pub struct IntoIter(Bitboard);

impl Iterator for IntoIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let square = self.0.first();
        self.0 .0 &= self.0 .0.wrapping_sub(1);
        square
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<Square> {
        let square = self.0.last();
        if let Some(sq) = square {
            self.0.remove(sq);
        }
        square
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_last() {
        assert_eq!(Bitboard::from(Square::A8).first(), Some(Square::A8));
        assert_eq!(Bitboard::from(Square::D2).first(), Some(Square::D2));
        assert_eq!(Bitboard::EMPTY.first(), None);
        assert_eq!(Bitboard::EMPTY.last(), None);
        assert_eq!(
            Bitboard::EMPTY.with(Square::A1).with(Square::H1).last(),
            Some(Square::H1)
        );
    }

    #[test]
    fn test_iter() {
        let squares = [Square::C8, Square::E4, Square::H1];
        let bb: Bitboard = squares.iter().copied().collect();
        assert_eq!(bb.count(), 3);
        assert!(bb.into_iter().eq(squares.iter().copied()));
        assert!(bb.into_iter().rev().eq(squares.iter().rev().copied()));
        assert_eq!(bb.into_iter().len(), 3);
    }

    #[test]
    fn test_row() {
        assert_eq!(Bitboard::row(7).first(), Some(Square::A1));
        assert_eq!(Bitboard::row(7).count(), 8);
        assert!(Bitboard::row(0).contains(Square::H8));
    }

    #[test]
    fn test_single_square() {
        assert_eq!(Bitboard::from(Square::F3).single_square(), Some(Square::F3));
        assert_eq!(Bitboard::row(2).single_square(), None);
        let mut bb = Bitboard::row(3);
        assert!(bb.remove(Square::A5));
        assert!(!bb.remove(Square::A5));
        assert_eq!(bb.count(), 7);
    }
}
