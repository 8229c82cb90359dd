//! The game facade: a board plus the side to move.

use core::fmt;

use log::info;

use crate::{
    bitboard::Bitboard,
    board::Board,
    legal,
    m::{Move, MoveList},
    piece::Piece,
    play,
    setup::{Setup, SetupError},
    side::Side,
    square::{OutOfBoundsSquare, Square},
    status::{self, Outcome, Status},
};

/// A game of standard chess.
///
/// Moves are submitted as pairs of squares. The game checks them against
/// the legal destinations of the selected piece, executes them, hands the
/// turn to the other side and detects checkmate and stalemate.
///
/// # Examples
///
/// ```
/// use rookery::{Game, Side, Square, Status};
///
/// let mut game = Game::new();
/// assert_eq!(game.legal_moves().len(), 20);
///
/// for (from, to) in [
///     (Square::F2, Square::F3),
///     (Square::E7, Square::E5),
///     (Square::G2, Square::G4),
///     (Square::D8, Square::H4),
/// ] {
///     game.submit_move(from, to)?;
/// }
///
/// assert_eq!(game.status(Side::White), Status::Checkmate);
/// assert_eq!(game.outcome().and_then(|o| o.winner()), Some(Side::Black));
/// # Ok::<_, rookery::PlayError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Game {
    board: Board,
    turn: Side,
}

/// Result of a move accepted by [`Game::submit_move()`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Submitted {
    /// The executed move.
    pub m: Move,
    /// Whether a pawn was replaced by a queen.
    pub promotion_occurred: bool,
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    /// A game in the standard starting position, White to move.
    pub fn new() -> Game {
        Game {
            board: Board::new(),
            turn: Side::White,
        }
    }

    /// Validates a [`Setup`] and starts a game from it.
    ///
    /// # Errors
    ///
    /// Errors if the position is not playable, see
    /// [`Setup::validate()`].
    pub fn from_setup(setup: Setup) -> Result<Game, SetupError> {
        setup.validate()?;
        Ok(Game {
            board: setup.board,
            turn: setup.turn,
        })
    }

    pub fn to_setup(&self) -> Setup {
        Setup {
            board: self.board.clone(),
            turn: self.turn,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Like [`Game::piece_at()`], but with raw coordinates as they come from
    /// an input layer.
    ///
    /// # Errors
    ///
    /// Errors with [`PlayError::OutOfBounds`] if the coordinates are not on
    /// the board.
    pub fn piece_at_coords(&self, row: i32, col: i32) -> Result<Option<Piece>, PlayError> {
        Ok(self.piece_at(Square::try_from_coords(row, col)?))
    }

    fn selected(&self, from: Square) -> Result<Piece, PlayError> {
        if let Some(outcome) = self.outcome() {
            return Err(PlayError::GameOver(outcome));
        }

        self.board
            .piece_at(from)
            .filter(|piece| piece.side == self.turn)
            .ok_or(PlayError::InvalidSelection(from))
    }

    /// Legal destinations of the piece on `from`, for highlighting.
    ///
    /// # Errors
    ///
    /// Errors if `from` does not hold a piece of the side to move, or if
    /// the game is over.
    pub fn legal_destinations(&self, from: Square) -> Result<Bitboard, PlayError> {
        self.selected(from)?;
        Ok(legal::legal_moves(&self.board, from))
    }

    /// All legal moves of the side to move.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();

        for from in self.board.by_side(self.turn) {
            for to in legal::legal_moves(&self.board, from) {
                moves.extend(Move::classify(&self.board, from, to));
            }
        }

        moves
    }

    /// Tests if the side to move may move the piece on `from` to `to`.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.board.side_at(from) == Some(self.turn) && legal::is_legal(&self.board, from, to)
    }

    /// Validates and plays a move of the side to move, then passes the turn.
    ///
    /// # Errors
    ///
    /// On error the game is left unchanged.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<Submitted, PlayError> {
        self.selected(from)?;

        if !legal::legal_moves(&self.board, from).contains(to) {
            return Err(PlayError::IllegalDestination { from, to });
        }

        let m = self.play_unchecked(from, to)?;

        if let Some(outcome) = self.outcome() {
            info!("game over after {from}{to}: {outcome}");
        }

        Ok(Submitted {
            m,
            promotion_occurred: m.is_promotion(),
        })
    }

    /// Like [`Game::submit_move()`], but with raw coordinates as they come
    /// from an input layer.
    pub fn submit_coords(
        &mut self,
        (from_row, from_col): (i32, i32),
        (to_row, to_col): (i32, i32),
    ) -> Result<Submitted, PlayError> {
        let from = Square::try_from_coords(from_row, from_col)?;
        let to = Square::try_from_coords(to_row, to_col)?;
        self.submit_move(from, to)
    }

    /// Executes a move without checking its legality, then passes the
    /// turn.
    ///
    /// # Errors
    ///
    /// Errors with [`PlayError::InvalidSelection`] if `from` is empty.
    pub fn play_unchecked(&mut self, from: Square, to: Square) -> Result<Move, PlayError> {
        let m = play::execute(&mut self.board, from, to).ok_or(PlayError::InvalidSelection(from))?;
        self.turn = !self.turn;
        Ok(m)
    }

    /// Plays a move from [`Game::legal_moves()`].
    #[inline]
    pub fn play_move(&mut self, m: Move) {
        play::play_unchecked(&mut self.board, m);
        self.turn = !self.turn;
    }

    /// Situation of `side` on the current board.
    pub fn status(&self, side: Side) -> Status {
        status::status(&self.board, side)
    }

    /// Tests if the side to move is in check.
    pub fn is_check(&self) -> bool {
        status::is_in_check(&self.board, self.turn)
    }

    /// Tests if the side to move is checkmated.
    pub fn is_checkmate(&self) -> bool {
        status::is_checkmate(&self.board, self.turn)
    }

    /// Tests if the side to move is stalemated.
    pub fn is_stalemate(&self) -> bool {
        status::is_stalemate(&self.board, self.turn)
    }

    /// The outcome of the game, or `None` while the side to move has a legal
    /// move.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status(self.turn) {
            Status::Checkmate => Some(Outcome::Decisive { winner: !self.turn }),
            Status::Stalemate => Some(Outcome::Draw),
            Status::Normal | Status::Check => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        !legal::has_legal_moves(&self.board, self.turn)
    }
}

/// Error when a selection or move is rejected. The game is left unchanged.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PlayError {
    /// The square is empty or holds a piece of the side not to move.
    InvalidSelection(Square),
    /// The destination is not a legal move of the selected piece.
    IllegalDestination { from: Square, to: Square },
    /// Coordinates outside of the board.
    OutOfBounds(OutOfBoundsSquare),
    /// The game has already ended.
    GameOver(Outcome),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::InvalidSelection(sq) => {
                write!(f, "invalid selection: no piece of the side to move on {sq}")
            }
            PlayError::IllegalDestination { from, to } => {
                write!(f, "illegal destination: {from}{to}")
            }
            PlayError::OutOfBounds(err) => fmt::Display::fmt(err, f),
            PlayError::GameOver(outcome) => write!(f, "game over: {outcome}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlayError {}

impl From<OutOfBoundsSquare> for PlayError {
    fn from(err: OutOfBoundsSquare) -> PlayError {
        PlayError::OutOfBounds(err)
    }
}
