//! Check, checkmate and stalemate detection.

use core::fmt;

use crate::{attacks, board::Board, legal, side::Side};

/// Situation of one side.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Not in check, with at least one legal move.
    Normal,
    /// In check, with at least one legal move.
    Check,
    /// In check, with no legal move.
    Checkmate,
    /// Not in check, with no legal move.
    Stalemate,
}

impl Status {
    /// Whether the game cannot continue.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Normal => "normal",
            Status::Check => "check",
            Status::Checkmate => "checkmate",
            Status::Stalemate => "stalemate",
        })
    }
}

/// Outcome of a finished game.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Decisive { winner: Side },
    Draw,
}

impl Outcome {
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::Decisive { winner } => Some(winner),
            Outcome::Draw => None,
        }
    }

    pub const fn from_winner(winner: Option<Side>) -> Outcome {
        match winner {
            Some(winner) => Outcome::Decisive { winner },
            None => Outcome::Draw,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Decisive { winner: Side::White } => "1-0",
            Outcome::Decisive { winner: Side::Black } => "0-1",
            Outcome::Draw => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tests if the king of `side` is attacked. A side without a king is
/// never in check.
pub fn is_in_check(board: &Board, side: Side) -> bool {
    board
        .king_of(side)
        .is_some_and(|king| attacks::is_attacked(board, king, side))
}

/// Tests if `side` has at least one legal move.
#[inline]
pub fn has_legal_moves(board: &Board, side: Side) -> bool {
    legal::has_legal_moves(board, side)
}

pub fn is_checkmate(board: &Board, side: Side) -> bool {
    is_in_check(board, side) && !has_legal_moves(board, side)
}

pub fn is_stalemate(board: &Board, side: Side) -> bool {
    !is_in_check(board, side) && !has_legal_moves(board, side)
}

/// Classifies the situation of `side`.
///
/// # Examples
///
/// ```
/// use rookery::{status, Board, Side, Status};
///
/// assert_eq!(status::status(&Board::new(), Side::White), Status::Normal);
///
/// let board: Board = "7k/5Q2/6K1/8/8/8/8/8".parse()?;
/// assert_eq!(status::status(&board, Side::Black), Status::Stalemate);
/// # Ok::<_, rookery::ParseBoardError>(())
/// ```
pub fn status(board: &Board, side: Side) -> Status {
    match (is_in_check(board, side), has_legal_moves(board, side)) {
        (false, true) => Status::Normal,
        (true, true) => Status::Check,
        (true, false) => Status::Checkmate,
        (false, false) => Status::Stalemate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(placement: &str) -> Board {
        placement.parse().expect("valid placement")
    }

    #[test]
    fn test_initial_position() {
        let board = Board::new();
        for side in Side::ALL {
            assert!(!is_in_check(&board, side));
            assert!(has_legal_moves(&board, side));
            assert_eq!(status(&board, side), Status::Normal);
        }
    }

    #[test]
    fn test_fools_mate() {
        let board = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR");
        assert!(is_in_check(&board, Side::White));
        assert!(is_checkmate(&board, Side::White));
        assert!(!is_stalemate(&board, Side::White));
        assert_eq!(status(&board, Side::White), Status::Checkmate);
        assert_eq!(status(&board, Side::Black), Status::Normal);
    }

    #[test]
    fn test_check() {
        let board = board("4k3/8/8/8/8/8/4r3/4K3");
        assert_eq!(status(&board, Side::White), Status::Check);
    }

    #[test]
    fn test_stalemate() {
        let board = board("k7/P7/K7/8/8/8/8/8");
        assert!(!is_in_check(&board, Side::Black));
        assert!(is_stalemate(&board, Side::Black));
        assert!(!is_checkmate(&board, Side::Black));
        assert!(status(&board, Side::Black).is_terminal());
    }

    #[test]
    fn test_missing_king() {
        let board = board("8/8/8/8/8/8/8/R7");
        assert!(!is_in_check(&board, Side::White));
        assert_eq!(status(&board, Side::Black), Status::Stalemate);
    }

    #[test]
    fn test_outcome() {
        assert_eq!(Outcome::from_winner(Some(Side::Black)).as_str(), "0-1");
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
