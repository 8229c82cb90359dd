//! A library for the rules of chess: legal moves, check, checkmate and
//! stalemate.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use rookery::Game;
//!
//! let game = Game::default();
//! let legals = game.legal_moves();
//! assert_eq!(legals.len(), 20);
//! ```
//!
//! Query destinations for a selected piece and play moves:
//!
//! ```
//! use rookery::{Game, Square};
//!
//! let mut game = Game::default();
//! let destinations = game.legal_destinations(Square::G1)?;
//! assert!(destinations.contains(Square::F3));
//!
//! // 1. Nf3
//! let submitted = game.submit_move(Square::G1, Square::F3)?;
//! assert!(!submitted.promotion_occurred);
//! # Ok::<_, rookery::PlayError>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! # use rookery::Game;
//! # let game = Game::default();
//! assert!(!game.is_checkmate());
//! assert!(!game.is_stalemate());
//! assert_eq!(game.outcome(), None); // no winner yet
//! ```
//!
//! Start from an arbitrary position with [`Setup`]:
//!
//! ```
//! use rookery::{Game, Setup, Side, Status};
//!
//! let setup: Setup = "k7/P7/K7/8/8/8/8/8 b - -".parse()?;
//! let game = Game::from_setup(setup)?;
//! assert_eq!(game.status(Side::Black), Status::Stalemate);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! The lower layers are available as free functions operating on a
//! [`Board`]: [`movegen`] for pseudo-legal moves, [`attacks`] for attack
//! detection, [`legal`] for king safety, [`play`] for move execution and
//! [`status`] for classifying positions.
//!
//! # Feature flags
//!
//! * `alloc`: Enables APIs which require the
//!   [`alloc`](https://doc.rust-lang.org/stable/alloc/index.html) crate
//!   (e.g. [`Board::board_fen()`]).
//! * `std`: Implies `alloc`. Enabled by default.
//!   For `no_std` environments, this must be disabled with `default-features = false`.
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for types where all in-memory representations are valid.
//!
//! # Logging
//!
//! Special moves and game endings are reported through the
//! [`log`](https://docs.rs/log/0.4/log/) facade. No logger is installed by
//! the library.

#![no_std]
#![doc(html_root_url = "https://docs.rs/rookery/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod castling_side;
mod game;
mod kind;
mod m;
mod perft;
mod piece;
mod setup;
mod side;
mod square;
mod util;

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod legal;
pub mod movegen;
pub mod play;
pub mod status;

pub use bitboard::Bitboard;
pub use board::{Board, LastMove, ParseBoardError, BOARD_SIZE};
pub use castling_side::CastlingSide;
pub use game::{Game, PlayError, Submitted};
pub use kind::PieceKind;
pub use m::{Move, MoveList};
pub use perft::perft;
pub use piece::Piece;
pub use setup::{ParseSetupError, Setup, SetupError, SetupErrorKinds};
pub use side::{BySide, ParseSideError, Side};
pub use square::{OutOfBoundsSquare, ParseSquareError, Square};
pub use status::{Outcome, Status};
