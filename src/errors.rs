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

use snafu::Snafu;

#[derive(Clone, Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AstroError {
    /// An accessor was called on an undefined element, or an operation required an undefined input.
    #[snafu(display("{param} is undefined"))]
    UndefinedValue { param: &'static str },
    /// Elliptical-only anomaly conversions require an eccentricity in [0, 1).
    #[snafu(display("eccentricity must be in [0, 1) for elliptical anomaly conversions, got {ecc}"))]
    EccentricityOutOfRange { ecc: f64 },
    /// The Kepler equation solver did not meet its tolerance within the iteration cap.
    #[snafu(display("Kepler equation solver did not converge after {iter} iterations"))]
    MaxIterReached { iter: usize },
    /// A reference frame handle was required but missing.
    #[snafu(display("reference frame is undefined"))]
    FrameUndefined,
}
