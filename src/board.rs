//! The 8×8 grid of pieces and the bookkeeping needed for special moves.

use core::{fmt, fmt::Write as _, str::FromStr};

use crate::{bitboard::Bitboard, kind::PieceKind, piece::Piece, side::Side, square::Square};

/// Number of rows and columns of the board.
pub const BOARD_SIZE: u8 = 8;

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The most recently executed move. Only used to authorize en passant.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
    pub kind: PieceKind,
    pub side: Side,
}

impl LastMove {
    /// Whether this was a pawn advancing two rows.
    #[inline]
    pub fn is_double_pawn_step(&self) -> bool {
        self.kind == PieceKind::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }
}

/// Piece positions on the board, plus the last move played.
///
/// A square holds at most one piece. Pieces do not cache their own
/// position, so the grid cell is the only source of truth.
///
/// # Examples
///
/// ```
/// use rookery::{Board, Side, Square};
///
/// let board = Board::new();
/// assert_eq!(board.piece_at(Square::E1), Some(Side::White.king()));
/// assert_eq!(board.piece_at(Square::D8), Some(Side::Black.queen()));
/// assert_eq!(board.piece_at(Square::E4), None);
/// assert_eq!(board.last_move(), None);
///
/// // r n b q k b n r
/// // p p p p p p p p
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // P P P P P P P P
/// // R N B Q K B N R
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    grid: [Option<Piece>; 64],
    last_move: Option<LastMove>,
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for side in Side::ALL {
            for (col, kind) in (0..BOARD_SIZE).zip(BACK_ROW) {
                board.set_piece_at(Square::new(side.home_row(), col), kind.of(side));
                board.set_piece_at(Square::new(side.pawn_row(), col), side.pawn());
            }
        }
        board
    }

    pub const fn empty() -> Board {
        Board {
            grid: [None; 64],
            last_move: None,
        }
    }

    #[inline]
    pub const fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.index()]
    }

    #[inline]
    pub const fn side_at(&self, sq: Square) -> Option<Side> {
        match self.grid[sq.index()] {
            Some(piece) => Some(piece.side),
            None => None,
        }
    }

    #[inline]
    pub const fn kind_at(&self, sq: Square) -> Option<PieceKind> {
        match self.grid[sq.index()] {
            Some(piece) => Some(piece.kind),
            None => None,
        }
    }

    #[inline]
    pub const fn is_occupied(&self, sq: Square) -> bool {
        self.grid[sq.index()].is_some()
    }

    /// Places a piece, returning whatever stood on the square before.
    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.grid[sq.index()].replace(piece)
    }

    #[inline]
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.grid[sq.index()].take()
    }

    /// Restores a square to exactly the given content.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, content: Option<Piece>) {
        self.grid[sq.index()] = content;
    }

    #[inline]
    pub const fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    #[inline]
    pub fn set_last_move(&mut self, last_move: Option<LastMove>) {
        self.last_move = last_move;
    }

    /// Finds the king of the given side.
    pub fn king_of(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|&(_, piece)| piece.is(PieceKind::King, side))
            .map(|(sq, _)| sq)
    }

    pub fn occupied(&self) -> Bitboard {
        self.pieces().map(|(sq, _)| sq).collect()
    }

    pub fn by_side(&self, side: Side) -> Bitboard {
        self.pieces()
            .filter(|&(_, piece)| piece.side == side)
            .map(|(sq, _)| sq)
            .collect()
    }

    pub fn by_piece(&self, kind: PieceKind, side: Side) -> Bitboard {
        self.pieces()
            .filter(|&(_, piece)| piece.is(kind, side))
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Iterates over occupied squares, row by row from `A8` to `H1`.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Renders the piece placement, row 0 first, rows separated by `/`
    /// and runs of empty squares as digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use rookery::Board;
    ///
    /// assert_eq!(
    ///     Board::new().board_fen(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    #[cfg(feature = "alloc")]
    pub fn board_fen(&self) -> alloc::string::String {
        alloc::string::ToString::to_string(self)
    }

    /// Parses a piece placement as written by [`Board::board_fen()`].
    ///
    /// Pawns standing off their starting row are marked as moved, all other
    /// pieces are unmoved. The last move is empty.
    pub fn from_ascii(placement: &[u8]) -> Result<Board, ParseBoardError> {
        let mut board = Board::empty();
        let mut rows = placement.split(|&ch| ch == b'/');

        for row in 0..BOARD_SIZE {
            let text = rows.next().ok_or(ParseBoardError)?;
            let mut col = 0;
            for &ch in text {
                if col >= BOARD_SIZE {
                    return Err(ParseBoardError);
                }
                if let Some(empty) = (ch as char).to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += empty as u8;
                } else {
                    let mut piece = Piece::from_char(ch as char).ok_or(ParseBoardError)?;
                    if piece.kind == PieceKind::Pawn && row != piece.side.pawn_row() {
                        piece = piece.moved();
                    }
                    board.set_piece_at(Square::new(row, col), piece);
                    col += 1;
                }
            }
            if col != BOARD_SIZE {
                return Err(ParseBoardError);
            }
        }

        if rows.next().is_some() {
            return Err(ParseBoardError);
        }

        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let mut empty = 0;

            for col in 0..BOARD_SIZE {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        f.write_char(piece.char())?;
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                write!(f, "{empty}")?;
            }

            if row < BOARD_SIZE - 1 {
                f.write_char('/')?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::all() {
            f.write_char(self.piece_at(sq).map_or('.', Piece::char))?;
            f.write_char(if sq.col() < BOARD_SIZE - 1 { ' ' } else { '\n' })?;
        }
        if let Some(last_move) = self.last_move {
            write!(f, "last move: {:?} {} -> {}", last_move.kind, last_move.from, last_move.to)?;
        }
        Ok(())
    }
}

/// Error when parsing an invalid piece placement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseBoardError;

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid board")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Board, ParseBoardError> {
        Board::from_ascii(s.as_bytes())
    }
}
