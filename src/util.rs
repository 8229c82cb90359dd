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

use core::num::TryFromIntError;

/// Builds a [`TryFromIntError`] for out of range square and index
/// conversions. Its constructor is private, so one is produced by a
/// conversion that always overflows.
pub(crate) fn overflow_error() -> TryFromIntError {
    u8::try_from(u16::MAX).unwrap_err()
}
