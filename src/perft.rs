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

//! Count legal move paths.
//!
//! # Examples
//!
//! ```
//! use rookery::{perft, Game};
//!
//! let game = Game::default();
//! assert_eq!(perft(&game, 1), 20);
//! assert_eq!(perft(&game, 2), 400);
//! assert_eq!(perft(&game, 3), 8902);
//! ```

use crate::game::Game;

/// Counts legal move paths of a given length.
///
/// Paths with mate or stalemate are not counted unless it occurs in the final
/// position. Useful for comparing, testing and debugging move generation
/// correctness and performance.
pub fn perft(game: &Game, depth: u32) -> u64 {
    if depth < 1 {
        1
    } else {
        let moves = game.legal_moves();

        if depth == 1 {
            moves.len() as u64
        } else {
            moves
                .iter()
                .map(|&m| {
                    let mut child = game.clone();
                    child.play_move(m);
                    perft(&child, depth - 1)
                })
                .sum()
        }
    }
}
