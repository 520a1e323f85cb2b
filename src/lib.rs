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

/*! # kepler-state

Conversions between equivalent representations of an orbital state: classical
(Keplerian) orbital elements versus Cartesian position and velocity, the
anomaly conversions linking true, eccentric, and mean anomaly (including the
Newton-Raphson solve of Kepler's equation), and an immutable kinematic and
attitude snapshot (flight profile state) tied to a shared reference frame.
*/

/// Classical orbital elements, anomaly conversions, reference frames, and flight profile states.
pub mod cosmic;

mod errors;
/// Functions which may fail return an error rather than panicking.
pub use self::errors::AstroError;

/// Utility functions shared by different modules, and which may be useful to engineers.
pub mod utils;

#[macro_use]
extern crate log;
extern crate hifitime;
extern crate nalgebra as na;

/// Re-export of hifitime
pub mod time {
    pub use hifitime::*;
}

/// Re-export nalgebra
pub mod linalg {
    pub use na::base::*;
    pub use na::geometry::UnitQuaternion;
}

/// Re-export some useful things
pub use self::cosmic::{gcrf, CartesianState, Coe, Frame, ProfileState, Transform};
