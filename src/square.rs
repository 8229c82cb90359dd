// This file is part of the rookery library.
// Copyright (C) 2026 The rookery developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use core::{fmt, num, str::FromStr};

use crate::{board::BOARD_SIZE, util::overflow_error};

/// Error when a row or column lies outside of `0..8`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct OutOfBoundsSquare {
    pub row: i32,
    pub col: i32,
}

impl fmt::Display for OutOfBoundsSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "square ({}, {}) is off the board", self.row, self.col)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfBoundsSquare {}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseSquareError {}

/// A square of the board, addressed by row and column.
///
/// Row 0 is Black's home row (the eighth rank), row 7 is White's home row
/// (the first rank). Column 0 is the a-file.
///
/// # Examples
///
/// ```
/// use rookery::Square;
///
/// let sq = Square::try_from_coords(6, 4)?;
/// assert_eq!(sq, Square::E2);
/// assert_eq!(sq.to_string(), "e2");
///
/// assert!(Square::try_from_coords(8, 0).is_err());
/// # Ok::<_, rookery::OutOfBoundsSquare>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Square(u8);

impl Square {
    /// Gets the square at `row` and `col`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not in `0..8`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Square(row * BOARD_SIZE + col)
    }

    /// Validates coordinates coming from outside the engine.
    pub const fn try_from_coords(row: i32, col: i32) -> Result<Square, OutOfBoundsSquare> {
        if 0 <= row && row < BOARD_SIZE as i32 && 0 <= col && col < BOARD_SIZE as i32 {
            Ok(Square::new(row as u8, col as u8))
        } else {
            Err(OutOfBoundsSquare { row, col })
        }
    }

    /// Gets the square with the given index in `0..64`, row by row.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < 64 {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Steps `dr` rows and `dc` columns away, or `None` when that leaves
    /// the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use rookery::Square;
    ///
    /// assert_eq!(Square::E2.offset(-2, 0), Some(Square::E4));
    /// assert_eq!(Square::H1.offset(0, 1), None);
    /// ```
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if 0 <= row && row < BOARD_SIZE as i8 && 0 <= col && col < BOARD_SIZE as i8 {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Gets the square on the same row with another column.
    #[must_use]
    #[inline]
    pub const fn with_col(self, col: u8) -> Square {
        Square::new(self.row(), col)
    }

    /// King-step distance between two squares.
    pub const fn distance(self, other: Square) -> u8 {
        let rows = self.row().abs_diff(other.row());
        let cols = self.col().abs_diff(other.col());
        if rows > cols {
            rows
        } else {
            cols
        }
    }

    /// Name of the column, `a` to `h`.
    pub const fn file_char(self) -> char {
        (b'a' + self.col()) as char
    }

    /// Name of the row as a rank, `8` for row 0 down to `1` for row 7.
    pub const fn rank_char(self) -> char {
        (b'8' - self.row()) as char
    }

    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        match *s {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Ok(Square::new(b'8' - rank, file - b'a')),
            _ => Err(ParseSquareError),
        }
    }

    /// All 64 squares, row by row from `A8` to `H1`.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..64u8).map(Square)
    }
}

macro_rules! square_consts {
    ($($name:ident = $row:expr, $col:expr;)+) => {
        #[allow(missing_docs)]
        impl Square {
            $(pub const $name: Square = Square::new($row, $col);)+
        }
    }
}

square_consts! {
    A8 = 0, 0;
    B8 = 0, 1;
    C8 = 0, 2;
    D8 = 0, 3;
    E8 = 0, 4;
    F8 = 0, 5;
    G8 = 0, 6;
    H8 = 0, 7;
    A7 = 1, 0;
    B7 = 1, 1;
    C7 = 1, 2;
    D7 = 1, 3;
    E7 = 1, 4;
    F7 = 1, 5;
    G7 = 1, 6;
    H7 = 1, 7;
    A6 = 2, 0;
    B6 = 2, 1;
    C6 = 2, 2;
    D6 = 2, 3;
    E6 = 2, 4;
    F6 = 2, 5;
    G6 = 2, 6;
    H6 = 2, 7;
    A5 = 3, 0;
    B5 = 3, 1;
    C5 = 3, 2;
    D5 = 3, 3;
    E5 = 3, 4;
    F5 = 3, 5;
    G5 = 3, 6;
    H5 = 3, 7;
    A4 = 4, 0;
    B4 = 4, 1;
    C4 = 4, 2;
    D4 = 4, 3;
    E4 = 4, 4;
    F4 = 4, 5;
    G4 = 4, 6;
    H4 = 4, 7;
    A3 = 5, 0;
    B3 = 5, 1;
    C3 = 5, 2;
    D3 = 5, 3;
    E3 = 5, 4;
    F3 = 5, 5;
    G3 = 5, 6;
    H3 = 5, 7;
    A2 = 6, 0;
    B2 = 6, 1;
    C2 = 6, 2;
    D2 = 6, 3;
    E2 = 6, 4;
    F2 = 6, 5;
    G2 = 6, 6;
    H2 = 6, 7;
    A1 = 7, 0;
    B1 = 7, 1;
    C1 = 7, 2;
    D1 = 7, 3;
    E1 = 7, 4;
    F1 = 7, 5;
    G1 = 7, 6;
    H1 = 7, 7;
}

impl From<Square> for u8 {
    #[inline]
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

impl From<Square> for usize {
    #[inline]
    fn from(sq: Square) -> usize {
        sq.index()
    }
}

impl TryFrom<u8> for Square {
    type Error = num::TryFromIntError;

    #[inline]
    fn try_from(value: u8) -> Result<Square, num::TryFromIntError> {
        Square::from_index(usize::from(value)).ok_or_else(overflow_error)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char().to_ascii_uppercase(), self.rank_char())
    }
}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Square> {
        u.int_in_range(0..=63).map(Square)
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        (1, Some(1))
    }
}
