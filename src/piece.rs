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

use core::fmt;

use crate::{kind::PieceKind, side::Side};

/// A piece with [`PieceKind`], [`Side`] and its moved flag.
///
/// `has_moved` becomes `true` the first time the piece is relocated by
/// [`execute`](crate::play::execute), including as the rook of a castling
/// move, and never resets. It gates the pawn double step and castling.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub has_moved: bool,
}

impl Piece {
    /// Marks the piece as moved.
    #[must_use]
    #[inline]
    pub const fn moved(self) -> Piece {
        Piece {
            has_moved: true,
            ..self
        }
    }

    #[inline]
    pub const fn is(self, kind: PieceKind, side: Side) -> bool {
        self.kind as u8 == kind as u8 && self.side as u8 == side as u8
    }

    /// Letter of the piece, uppercase for White and lowercase for Black.
    ///
    /// # Examples
    ///
    /// ```
    /// use rookery::Side;
    ///
    /// assert_eq!(Side::White.knight().char(), 'N');
    /// assert_eq!(Side::Black.queen().char(), 'q');
    /// ```
    pub fn char(self) -> char {
        self.side.fold_wb(self.kind.upper_char(), self.kind.char())
    }

    /// Parses a piece letter. The piece is unmoved.
    pub fn from_char(ch: char) -> Option<Piece> {
        PieceKind::from_char(ch).map(|kind| kind.of(Side::from_white(ch.is_ascii_uppercase())))
    }

    /// Unicode chess figurine for the piece.
    pub const fn symbol(self) -> char {
        match (self.side, self.kind) {
            (Side::White, PieceKind::King) => '♔',
            (Side::White, PieceKind::Queen) => '♕',
            (Side::White, PieceKind::Rook) => '♖',
            (Side::White, PieceKind::Bishop) => '♗',
            (Side::White, PieceKind::Knight) => '♘',
            (Side::White, PieceKind::Pawn) => '♙',
            (Side::Black, PieceKind::King) => '♚',
            (Side::Black, PieceKind::Queen) => '♛',
            (Side::Black, PieceKind::Rook) => '♜',
            (Side::Black, PieceKind::Bishop) => '♝',
            (Side::Black, PieceKind::Knight) => '♞',
            (Side::Black, PieceKind::Pawn) => '♟',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.side, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(Piece::from_char('R'), Some(Side::White.rook()));
        assert_eq!(Piece::from_char('p'), Some(Side::Black.pawn()));
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn test_moved() {
        let king = Side::Black.king();
        assert!(!king.has_moved);
        assert!(king.moved().has_moved);
        assert!(king.moved().is(PieceKind::King, Side::Black));
        assert_ne!(king, king.moved());
    }

    #[test]
    fn test_symbol() {
        assert_eq!(Side::White.king().symbol(), '♔');
        assert_eq!(Side::Black.pawn().symbol(), '♟');
    }
}
