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

use core::{fmt, ops, str::FromStr};

use crate::{kind::PieceKind, piece::Piece};

/// `White` or `Black`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const fn from_char(ch: char) -> Option<Side> {
        match ch {
            'w' => Some(Side::White),
            'b' => Some(Side::Black),
            _ => None,
        }
    }

    #[inline]
    pub const fn from_white(white: bool) -> Side {
        if white {
            Side::White
        } else {
            Side::Black
        }
    }

    /// Picks `white` or `black` depending on the side.
    #[inline]
    pub fn fold_wb<T>(self, white: T, black: T) -> T {
        match self {
            Side::White => white,
            Side::Black => black,
        }
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Side::White)
    }

    #[inline]
    pub const fn is_black(self) -> bool {
        matches!(self, Side::Black)
    }

    /// The opposing side.
    ///
    /// # Examples
    ///
    /// ```
    /// use rookery::Side;
    ///
    /// assert_eq!(Side::White.other(), Side::Black);
    /// assert_eq!(Side::White.other().other(), Side::White);
    /// ```
    #[must_use]
    #[inline]
    pub const fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a pawn step: White moves towards row 0, Black towards
    /// row 7.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// The row holding this side's pieces at the start of the game.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    /// The row holding this side's pawns at the start of the game.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    /// The row a pawn of this side promotes on, i.e. the opponent's home row.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.other().home_row()
    }

    pub const fn char(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }

    #[inline]
    pub const fn pawn(self) -> Piece {
        PieceKind::Pawn.of(self)
    }
    #[inline]
    pub const fn knight(self) -> Piece {
        PieceKind::Knight.of(self)
    }
    #[inline]
    pub const fn bishop(self) -> Piece {
        PieceKind::Bishop.of(self)
    }
    #[inline]
    pub const fn rook(self) -> Piece {
        PieceKind::Rook.of(self)
    }
    #[inline]
    pub const fn queen(self) -> Piece {
        PieceKind::Queen.of(self)
    }
    #[inline]
    pub const fn king(self) -> Piece {
        PieceKind::King.of(self)
    }

    /// `White` and `Black`, in this order.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];
}

impl ops::Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.other()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fold_wb("white", "black"))
    }
}

/// Error when parsing an invalid side name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSideError;

impl fmt::Display for ParseSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid side")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseSideError {}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Side, ParseSideError> {
        Ok(match s {
            "white" | "w" => Side::White,
            "black" | "b" => Side::Black,
            _ => return Err(ParseSideError),
        })
    }
}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Side {}

/// Container with values for each [`Side`].
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct BySide<T> {
    pub white: T,
    pub black: T,
}

impl<T> BySide<T> {
    #[inline]
    pub fn new_with<F>(mut init: F) -> BySide<T>
    where
        F: FnMut(Side) -> T,
    {
        BySide {
            white: init(Side::White),
            black: init(Side::Black),
        }
    }

    #[inline]
    pub const fn get(&self, side: Side) -> &T {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::White => &mut self.white,
            Side::Black => &mut self.black,
        }
    }

    #[inline]
    pub fn map<U, F>(self, mut f: F) -> BySide<U>
    where
        F: FnMut(T) -> U,
    {
        BySide {
            white: f(self.white),
            black: f(self.black),
        }
    }

    #[inline]
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        predicate(&self.white) || predicate(&self.black)
    }

    /// Finds the first side (White before Black) matching the predicate.
    #[inline]
    pub fn find<F>(&self, mut predicate: F) -> Option<Side>
    where
        F: FnMut(&T) -> bool,
    {
        if predicate(&self.white) {
            Some(Side::White)
        } else if predicate(&self.black) {
            Some(Side::Black)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involutive() {
        for side in Side::ALL {
            assert_ne!(side.other(), side);
            assert_eq!(side.other().other(), side);
            assert_eq!(!side, side.other());
        }
    }

    #[test]
    fn test_rows() {
        assert_eq!(Side::White.promotion_row(), 0);
        assert_eq!(Side::Black.promotion_row(), 7);
        assert_eq!(Side::White.pawn_row() as i8 + Side::White.forward(), 5);
        assert_eq!(Side::Black.pawn_row() as i8 + Side::Black.forward(), 2);
    }

    #[test]
    fn test_by_side() {
        let mut counts = BySide::new_with(|side| if side.is_white() { 1 } else { 2 });
        *counts.get_mut(Side::Black) += 1;
        assert_eq!(*counts.get(Side::White), 1);
        assert_eq!(*counts.get(Side::Black), 3);
        assert_eq!(counts.find(|&n| n > 2), Some(Side::Black));
        assert!(!counts.map(|n| n > 5).any(|&b| b));
    }

    #[test]
    fn test_parse() {
        assert_eq!("white".parse(), Ok(Side::White));
        assert_eq!("b".parse(), Ok(Side::Black));
        assert_eq!("red".parse::<Side>(), Err(ParseSideError));
    }
}
