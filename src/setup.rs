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

//! Import of arbitrary positions.
//!
//! A [`Setup`] is written like the first four fields of a FEN:
//! piece placement, side to move, castling availability and the en passant
//! target square. Everything after the placement is optional.
//!
//! ```
//! use rookery::{Setup, Side, Square};
//!
//! let setup: Setup = "r3k2r/8/8/8/8/8/8/R3K2R b Kq -".parse()?;
//! assert_eq!(setup.turn, Side::Black);
//!
//! // Without matching castling rights, kings and rooks count as moved.
//! assert!(!setup.board.piece_at(Square::H1).is_some_and(|p| p.has_moved));
//! assert!(setup.board.piece_at(Square::A1).is_some_and(|p| p.has_moved));
//! assert_eq!(setup.to_string(), "r3k2r/8/8/8/8/8/8/R3K2R b Kq -");
//! # Ok::<_, rookery::ParseSetupError>(())
//! ```

use core::{fmt, fmt::Write as _, str::FromStr};

use bitflags::bitflags;

use crate::{
    bitboard::Bitboard,
    board::{Board, LastMove},
    castling_side::CastlingSide,
    kind::PieceKind,
    piece::Piece,
    side::{BySide, Side},
    square::Square,
    status,
};

/// Column of both kings at the start of the game.
const KING_COL: u8 = 4;

/// A not necessarily valid position.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Setup {
    /// Piece positions, including moved flags and the last move.
    pub board: Board,
    /// Side to move.
    pub turn: Side,
}

impl Default for Setup {
    fn default() -> Setup {
        Setup {
            board: Board::new(),
            turn: Side::White,
        }
    }
}

impl Setup {
    /// Parses a setup such as
    /// `rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3`.
    ///
    /// Kings and rooks away from their starting squares are marked as
    /// moved. If castling availability is given, kings and rooks without a
    /// matching right are marked as moved as well. An en passant square
    /// records the double pawn step that made it available.
    pub fn from_ascii(s: &[u8]) -> Result<Setup, ParseSetupError> {
        let mut parts = s.split(|&ch| ch == b' ').filter(|part| !part.is_empty());

        let mut board = Board::from_ascii(parts.next().ok_or(ParseSetupError::InvalidBoard)?)
            .map_err(|_| ParseSetupError::InvalidBoard)?;

        let turn = match parts.next() {
            Some(b"w") | None => Side::White,
            Some(b"b") => Side::Black,
            Some(_) => return Err(ParseSetupError::InvalidTurn),
        };

        let rights = match parts.next() {
            None => None,
            Some(b"-") => Some(BySide::default()),
            Some(part) => Some(parse_castling(&board, part)?),
        };
        mark_moved_kings_and_rooks(&mut board, rights);

        match parts.next() {
            None | Some(b"-") => (),
            Some(part) => {
                let ep_square =
                    Square::from_ascii(part).map_err(|_| ParseSetupError::InvalidEpSquare)?;
                let last_move = double_step_over(&board, ep_square, !turn)
                    .ok_or(ParseSetupError::InvalidEpSquare)?;
                board.set_last_move(Some(last_move));
            }
        }

        if parts.next().is_some() {
            return Err(ParseSetupError::InvalidBoard);
        }

        Ok(Setup { board, turn })
    }

    /// Square passed over by the double pawn step that was just played,
    /// if any.
    pub fn ep_square(&self) -> Option<Square> {
        let last_move = self.board.last_move()?;
        if !last_move.is_double_pawn_step() {
            return None;
        }
        last_move.to.offset(-last_move.side.forward(), 0)
    }

    /// Castling sides still available to `side`, judging by the moved flags
    /// of its king and corner rooks.
    pub fn castling_sides(&self, side: Side) -> impl Iterator<Item = CastlingSide> + '_ {
        let king = Square::new(side.home_row(), KING_COL);
        CastlingSide::ALL.into_iter().filter(move |castling| {
            self.board.piece_at(king) == Some(side.king())
                && self.board.piece_at(castling.rook_from(king)) == Some(side.rook())
        })
    }

    /// Checks that the position can be played.
    ///
    /// # Errors
    ///
    /// Returns every problem found at once, see [`SetupErrorKinds`].
    pub fn validate(&self) -> Result<(), SetupError> {
        let mut errors = SetupErrorKinds::empty();

        if self.board.occupied().is_empty() {
            errors |= SetupErrorKinds::EMPTY_BOARD;
        }

        for side in Side::ALL {
            if self.board.by_side(side).count() > 16 {
                errors |= SetupErrorKinds::TOO_MANY_PIECES;
            }

            let kings = self.board.by_piece(PieceKind::King, side);
            if kings.is_empty() {
                errors |= SetupErrorKinds::MISSING_KING;
            } else if kings.more_than_one() {
                errors |= SetupErrorKinds::TOO_MANY_KINGS;
            }
        }

        let backranks = Bitboard::row(0) | Bitboard::row(7);
        let pawns = self.board.by_piece(PieceKind::Pawn, Side::White)
            | self.board.by_piece(PieceKind::Pawn, Side::Black);
        if (pawns & backranks).any() {
            errors |= SetupErrorKinds::PAWNS_ON_BACKRANK;
        }

        if status::is_in_check(&self.board, !self.turn) {
            errors |= SetupErrorKinds::OPPOSITE_CHECK;
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SetupError { errors })
        }
    }
}

fn parse_castling(board: &Board, part: &[u8]) -> Result<BySide<[bool; 2]>, ParseSetupError> {
    let mut rights = BySide::<[bool; 2]>::default();

    for &ch in part {
        let side = Side::from_white(ch.is_ascii_uppercase());
        let castling = match ch.to_ascii_lowercase() {
            b'k' => CastlingSide::KingSide,
            b'q' => CastlingSide::QueenSide,
            _ => return Err(ParseSetupError::InvalidCastling),
        };

        let king = Square::new(side.home_row(), KING_COL);
        if board.kind_at(king) != Some(PieceKind::King)
            || board.side_at(king) != Some(side)
            || !board.piece_at(castling.rook_from(king)).is_some_and(|p| p.is(PieceKind::Rook, side))
        {
            return Err(ParseSetupError::InvalidCastling);
        }

        rights.get_mut(side)[castling as usize] = true;
    }

    Ok(rights)
}

/// Marks kings and rooks that cannot castle any more as moved.
///
/// With `rights` absent, only pieces away from their starting squares are
/// affected.
fn mark_moved_kings_and_rooks(board: &mut Board, rights: Option<BySide<[bool; 2]>>) {
    for (sq, piece) in board.clone().pieces() {
        let king = Square::new(piece.side.home_row(), KING_COL);
        let granted = |castling: CastlingSide| {
            rights.map_or(true, |rights| rights.get(piece.side)[castling as usize])
        };

        let unmoved = match piece.kind {
            PieceKind::King => sq == king && CastlingSide::ALL.into_iter().any(granted),
            PieceKind::Rook => CastlingSide::ALL
                .into_iter()
                .any(|castling| sq == castling.rook_from(king) && granted(castling)),
            _ => continue,
        };

        if !unmoved {
            board.set_piece_at(sq, piece.moved());
        }
    }
}

/// Reconstructs the double step of a `mover` pawn over `ep_square`.
fn double_step_over(board: &Board, ep_square: Square, mover: Side) -> Option<LastMove> {
    if ep_square.row() as i8 != mover.pawn_row() as i8 + mover.forward() {
        return None;
    }
    let from = ep_square.offset(-mover.forward(), 0)?;
    let to = ep_square.offset(mover.forward(), 0)?;

    let pawn: Piece = board.piece_at(to)?;
    if !pawn.is(PieceKind::Pawn, mover) || board.is_occupied(ep_square) || board.is_occupied(from)
    {
        return None;
    }

    Some(LastMove {
        from,
        to,
        kind: PieceKind::Pawn,
        side: mover,
    })
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.board, self.turn.char())?;

        let mut any = false;
        for side in Side::ALL {
            for castling in self.castling_sides(side) {
                let ch = if castling.is_king_side() { 'k' } else { 'q' };
                f.write_char(side.fold_wb(ch.to_ascii_uppercase(), ch))?;
                any = true;
            }
        }
        if !any {
            f.write_char('-')?;
        }

        match self.ep_square() {
            Some(sq) => write!(f, " {sq}"),
            None => f.write_str(" -"),
        }
    }
}

impl FromStr for Setup {
    type Err = ParseSetupError;

    fn from_str(s: &str) -> Result<Setup, ParseSetupError> {
        Setup::from_ascii(s.as_bytes())
    }
}

/// Error when parsing an invalid setup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseSetupError {
    InvalidBoard,
    InvalidTurn,
    InvalidCastling,
    InvalidEpSquare,
}

impl fmt::Display for ParseSetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseSetupError::InvalidBoard => "invalid setup: board part",
            ParseSetupError::InvalidTurn => "invalid setup: turn part",
            ParseSetupError::InvalidCastling => "invalid setup: castling part",
            ParseSetupError::InvalidEpSquare => "invalid setup: en passant part",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseSetupError {}

bitflags! {
    /// Reasons for a [`SetupError`].
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct SetupErrorKinds: u32 {
        /// There are no pieces on the board.
        const EMPTY_BOARD = 1 << 0;
        /// A side has no king.
        const MISSING_KING = 1 << 1;
        /// A side has more than one king.
        const TOO_MANY_KINGS = 1 << 2;
        /// There are pawns on the first or last row.
        const PAWNS_ON_BACKRANK = 1 << 3;
        /// The player who just moved is still in check.
        const OPPOSITE_CHECK = 1 << 4;
        /// A side has more than 16 pieces.
        const TOO_MANY_PIECES = 1 << 5;
    }
}

/// Error when a [`Setup`] is not a playable position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SetupError {
    errors: SetupErrorKinds,
}

impl SetupError {
    /// Every problem found.
    pub const fn kinds(&self) -> SetupErrorKinds {
        self.errors
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("illegal setup: ")?;

        let mut reasons = self.errors.iter_names().map(|(name, _)| name);
        if let Some(first) = reasons.next() {
            f.write_str(first)?;
        }
        for reason in reasons {
            write!(f, ", {reason}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SetupError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_default_roundtrip() {
        let setup: Setup = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"
            .parse()
            .expect("valid setup");
        assert_eq!(setup, Setup::default());
        assert_eq!(
            Setup::default().to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"
        );
    }

    #[test]
    fn test_placement_only() {
        let setup: Setup = "4k3/8/8/8/8/8/8/R3K2R".parse().expect("valid setup");
        assert_eq!(setup.turn, Side::White);
        assert_eq!(setup.board.piece_at(Square::H1), Some(Side::White.rook()));
        assert_eq!(setup.board.piece_at(Square::E8), Some(Side::Black.king()));
        assert_eq!(setup.to_string(), "4k3/8/8/8/8/8/8/R3K2R w KQ -");
    }

    #[test]
    fn test_no_castling() {
        let setup: Setup = "r3k2r/8/8/8/8/8/8/R3K2R w - -".parse().expect("valid setup");
        for sq in [Square::A1, Square::E1, Square::H1, Square::A8, Square::E8, Square::H8] {
            assert!(setup.board.piece_at(sq).is_some_and(|p| p.has_moved));
        }
    }

    #[test]
    fn test_displaced_king() {
        let setup: Setup = "3k4/8/8/8/8/8/8/R2K3R w".parse().expect("valid setup");
        assert_eq!(setup.board.piece_at(Square::D1), Some(Side::White.king().moved()));
        assert_eq!(setup.castling_sides(Side::White).count(), 0);
    }

    #[test]
    fn test_invalid_castling() {
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K3 w K -".parse::<Setup>(),
            Err(ParseSetupError::InvalidCastling)
        );
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K2R w X -".parse::<Setup>(),
            Err(ParseSetupError::InvalidCastling)
        );
    }

    #[test]
    fn test_ep_square() {
        let setup: Setup = "4k3/8/8/3pP3/8/8/8/4K3 w - d6".parse().expect("valid setup");
        let last_move = setup.board.last_move().expect("double step");
        assert_eq!(last_move.from, Square::D7);
        assert_eq!(last_move.to, Square::D5);
        assert_eq!(last_move.side, Side::Black);
        assert_eq!(setup.ep_square(), Some(Square::D6));
        assert_eq!(setup.to_string(), "4k3/8/8/3pP3/8/8/8/4K3 w - d6");

        let setup: Setup = "4k3/8/8/8/3pP3/8/8/4K3 b - e3".parse().expect("valid setup");
        assert_eq!(setup.ep_square(), Some(Square::E3));

        assert_eq!(
            "4k3/8/8/4P3/8/8/8/4K3 w - d6".parse::<Setup>(),
            Err(ParseSetupError::InvalidEpSquare)
        );
        assert_eq!(
            "4k3/8/8/3pP3/8/8/8/4K3 b - d6".parse::<Setup>(),
            Err(ParseSetupError::InvalidEpSquare)
        );
    }

    #[test]
    fn test_invalid_turn() {
        assert_eq!("8/8/8/8/8/8/8/8 x".parse::<Setup>(), Err(ParseSetupError::InvalidTurn));
    }

    #[test]
    fn test_validate() {
        assert_eq!(Setup::default().validate(), Ok(()));

        let empty: Setup = "8/8/8/8/8/8/8/8 w -".parse().expect("valid setup");
        let kinds = empty.validate().expect_err("empty board").kinds();
        assert!(kinds.contains(SetupErrorKinds::EMPTY_BOARD | SetupErrorKinds::MISSING_KING));

        let crowded: Setup = "QQQQkQQQ/QQQQQQQQ/Q7/8/8/8/8/4K3 w -".parse().expect("valid setup");
        assert!(crowded
            .validate()
            .expect_err("seventeen queens")
            .kinds()
            .contains(SetupErrorKinds::TOO_MANY_PIECES));

        let setup: Setup = "P3k3/8/8/8/8/8/8/4KK2 w -".parse().expect("valid setup");
        assert_eq!(
            setup.validate().map_err(|err| err.kinds()),
            Err(SetupErrorKinds::PAWNS_ON_BACKRANK | SetupErrorKinds::TOO_MANY_KINGS)
        );

        // Black to move would mean White left its king in check.
        let setup: Setup = "4k3/8/8/8/8/8/4r3/4K3 b -".parse().expect("valid setup");
        assert_eq!(
            setup.validate().map_err(|err| err.kinds()),
            Err(SetupErrorKinds::OPPOSITE_CHECK)
        );
    }
}
