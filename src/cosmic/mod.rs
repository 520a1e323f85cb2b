/*
    kepler-state, orbital elements and flight profile states
    Copyright (C) 2024 kepler-state contributors

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

pub use crate::errors::AstroError;

/// Pure conversions among true, eccentric, and mean anomaly.
pub mod anomaly;

// Re-Export orbital elements
mod coe;
pub use self::coe::*;

// Re-Export frames
mod frames;
pub use self::frames::*;

// Re-Export flight profile state
mod profile;
pub use self::profile::*;
