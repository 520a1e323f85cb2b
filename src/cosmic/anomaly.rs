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

use crate::errors::AstroError;
use crate::utils::between_0_360;

/// Iteration cap for the Newton-Raphson solve of Kepler's equation.
pub const MAX_KEPLER_ITER: usize = 50;

fn check_ecc(ecc: f64) -> Result<(), AstroError> {
    if !(0.0..1.0).contains(&ecc) {
        return Err(AstroError::EccentricityOutOfRange { ecc });
    }
    Ok(())
}

/// Computes the true anomaly from the eccentric anomaly, both in degrees.
///
/// Uses the half-angle tangent relation `tan(nu/2) = sqrt((1+e)/(1-e)) tan(E/2)`,
/// valid for elliptical orbits only. The result is bounded in [0, 360).
pub fn true_from_eccentric(ea_deg: f64, ecc: f64) -> Result<f64, AstroError> {
    check_ecc(ecc)?;
    let ea = ea_deg.to_radians();
    let ratio = ((1.0 + ecc) / (1.0 - ecc)).sqrt();
    let ta = 2.0 * (ratio * (ea / 2.0).tan()).atan();
    Ok(between_0_360(ta.to_degrees()))
}

/// Computes the eccentric anomaly from the true anomaly, both in degrees.
///
/// Inverse of [`true_from_eccentric`]: `tan(E/2) = sqrt((1-e)/(1+e)) tan(nu/2)`.
/// The result is bounded in [0, 360).
pub fn eccentric_from_true(ta_deg: f64, ecc: f64) -> Result<f64, AstroError> {
    check_ecc(ecc)?;
    let ta = ta_deg.to_radians();
    let ratio = ((1.0 - ecc) / (1.0 + ecc)).sqrt();
    let ea = 2.0 * (ratio * (ta / 2.0).tan()).atan();
    Ok(between_0_360(ea.to_degrees()))
}

/// Computes the mean anomaly from the eccentric anomaly, both in degrees.
///
/// Kepler's equation in its forward direction, `M = E - e sin E`, exact and
/// closed form. The result is bounded in [0, 360).
pub fn mean_from_eccentric(ea_deg: f64, ecc: f64) -> Result<f64, AstroError> {
    check_ecc(ecc)?;
    let ea = ea_deg.to_radians();
    Ok(between_0_360((ea - ecc * ea.sin()).to_degrees()))
}

/// Computes the eccentric anomaly from the mean anomaly, both in degrees.
///
/// Solves Kepler's equation by Newton-Raphson iteration on
/// `f(E) = E - e sin E - M`, seeded with `E = M`. The tolerance applies to the
/// equation residual in radians. Exceeding [`MAX_KEPLER_ITER`] iterations
/// without meeting the tolerance is a convergence failure.
pub fn eccentric_from_mean(ma_deg: f64, ecc: f64, tol: f64) -> Result<f64, AstroError> {
    check_ecc(ecc)?;
    let ma = between_0_360(ma_deg).to_radians();
    let mut ea = ma;
    for _ in 0..MAX_KEPLER_ITER {
        let residual = ea - ecc * ea.sin() - ma;
        if residual.abs() < tol {
            return Ok(between_0_360(ea.to_degrees()));
        }
        ea -= residual / (1.0 - ecc * ea.cos());
    }
    Err(AstroError::MaxIterReached {
        iter: MAX_KEPLER_ITER,
    })
}
