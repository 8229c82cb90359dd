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

use crate::{piece::Piece, side::Side};

/// Piece types: `Pawn`, `Rook`, `Knight`, `Bishop`, `Queen`, `King`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Gets the piece type from its English letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use rookery::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('K'), Some(PieceKind::King));
    /// assert_eq!(PieceKind::from_char('n'), Some(PieceKind::Knight));
    ///
    /// assert_eq!(PieceKind::from_char('X'), None);
    /// ```
    pub const fn from_char(ch: char) -> Option<PieceKind> {
        match ch {
            'P' | 'p' => Some(PieceKind::Pawn),
            'R' | 'r' => Some(PieceKind::Rook),
            'N' | 'n' => Some(PieceKind::Knight),
            'B' | 'b' => Some(PieceKind::Bishop),
            'Q' | 'q' => Some(PieceKind::Queen),
            'K' | 'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Gets an unmoved [`Piece`] of the given side.
    #[inline]
    pub const fn of(self, side: Side) -> Piece {
        Piece {
            kind: self,
            side,
            has_moved: false,
        }
    }

    /// Gets the lowercase English letter for the piece type.
    pub const fn char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Gets the uppercase English letter for the piece type.
    pub const fn upper_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Whether the piece moves along rays until blocked.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }

    /// `Pawn`, `Rook`, `Knight`, `Bishop`, `Queen`, and `King`, in this order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];
}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for PieceKind {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.char()), Some(kind));
            assert_eq!(PieceKind::from_char(kind.upper_char()), Some(kind));
        }
    }

    #[test]
    fn test_sliders() {
        let sliders: usize = PieceKind::ALL.iter().filter(|k| k.is_slider()).count();
        assert_eq!(sliders, 3);
        assert!(!PieceKind::King.is_slider());
    }
}
