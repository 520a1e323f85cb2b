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

use super::anomaly;
use super::Frame;
use crate::errors::AstroError;
use crate::linalg::Vector3;
use crate::time::{Duration, Unit};
use crate::utils::between_0_360;
use approx::abs_diff_eq;
use serde_derive::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

/// If an orbit has an eccentricity below the following value, it is considered circular
pub const ECC_EPSILON: f64 = 1e-11;
/// If the sine of an orbit's inclination is below the following value, it is considered equatorial
pub const INC_EPSILON: f64 = 1e-11;

/// A frame-tagged Cartesian state: position and velocity expressed in a reference frame.
///
/// **Units:** km, km/s
#[derive(Clone, Debug)]
pub struct CartesianState {
    pub position_km: Vector3<f64>,
    pub velocity_km_s: Vector3<f64>,
    pub frame: Arc<Frame>,
}

impl CartesianState {
    pub fn new(position_km: Vector3<f64>, velocity_km_s: Vector3<f64>, frame: Arc<Frame>) -> Self {
        Self {
            position_km,
            velocity_km_s,
            frame,
        }
    }
}

impl PartialEq for CartesianState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.frame, &other.frame)
            && self.position_km == other.position_km
            && self.velocity_km_s == other.velocity_km_s
    }
}

impl fmt::Display for CartesianState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let decimals = f.precision().unwrap_or(6);
        write!(
            f,
            "[{}] position = [{}, {}, {}] km\tvelocity = [{}, {}, {}] km/s",
            self.frame,
            format!("{:.*}", decimals, self.position_km[0]),
            format!("{:.*}", decimals, self.position_km[1]),
            format!("{:.*}", decimals, self.position_km[2]),
            format!("{:.*}", decimals, self.velocity_km_s[0]),
            format!("{:.*}", decimals, self.velocity_km_s[1]),
            format!("{:.*}", decimals, self.velocity_km_s[2]),
        )
    }
}

/// Classical orbital elements of a bound elliptical orbit.
///
/// Each of the six elements may independently be undefined; the aggregate is
/// defined only when every element is. A `Coe` is immutable once constructed,
/// and it does not store a gravitational parameter: the period, mean motion,
/// and Cartesian conversions take it per query since they depend on the
/// central body.
///
/// The true anomaly is the canonical stored anomaly; the eccentric and mean
/// anomalies are recomputed from it on demand and never cached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coe {
    sma_km: Option<f64>,
    ecc: Option<f64>,
    inc_deg: Option<f64>,
    raan_deg: Option<f64>,
    aop_deg: Option<f64>,
    ta_deg: Option<f64>,
}

fn defined(value: Option<f64>, param: &'static str) -> Result<f64, AstroError> {
    value.ok_or(AstroError::UndefinedValue { param })
}

impl Coe {
    /// Creates a new element set from the six classical elements.
    ///
    /// **Units:** km, none, degrees, degrees, degrees, degrees
    ///
    /// The RAAN, AOP, and true anomaly are bounded into [0, 360); the
    /// inclination is stored as provided, with a warning when it falls
    /// outside [0, 180] since the Cartesian extraction never produces such
    /// a value.
    pub fn new(
        sma_km: f64,
        ecc: f64,
        inc_deg: f64,
        raan_deg: f64,
        aop_deg: f64,
        ta_deg: f64,
    ) -> Self {
        if ecc < 0.0 {
            warn!("eccentricity is negative ({ecc}): expect math errors in element conversions");
        }
        if !(0.0..=180.0).contains(&inc_deg) {
            warn!("inclination is outside [0, 180] deg ({inc_deg}): element round trips will not match");
        }
        Self {
            sma_km: Some(sma_km),
            ecc: Some(ecc),
            inc_deg: Some(inc_deg),
            raan_deg: Some(between_0_360(raan_deg)),
            aop_deg: Some(between_0_360(aop_deg)),
            ta_deg: Some(between_0_360(ta_deg)),
        }
    }

    /// Creates an element set whose six elements are all undefined.
    pub fn undefined() -> Self {
        Self {
            sma_km: None,
            ecc: None,
            inc_deg: None,
            raan_deg: None,
            aop_deg: None,
            ta_deg: None,
        }
    }

    /// Returns whether every element is defined.
    pub fn is_defined(&self) -> bool {
        self.sma_km.is_some()
            && self.ecc.is_some()
            && self.inc_deg.is_some()
            && self.raan_deg.is_some()
            && self.aop_deg.is_some()
            && self.ta_deg.is_some()
    }

    /// Returns the semi-major axis in km
    pub fn sma_km(&self) -> Result<f64, AstroError> {
        defined(self.sma_km, "semi-major axis")
    }

    /// Returns the eccentricity (no unit)
    pub fn ecc(&self) -> Result<f64, AstroError> {
        defined(self.ecc, "eccentricity")
    }

    /// Returns the inclination in degrees
    pub fn inc_deg(&self) -> Result<f64, AstroError> {
        defined(self.inc_deg, "inclination")
    }

    /// Returns the right ascension of the ascending node in degrees
    pub fn raan_deg(&self) -> Result<f64, AstroError> {
        defined(self.raan_deg, "RAAN")
    }

    /// Returns the argument of periapsis in degrees
    pub fn aop_deg(&self) -> Result<f64, AstroError> {
        defined(self.aop_deg, "argument of periapsis")
    }

    /// Returns the true anomaly in degrees
    pub fn ta_deg(&self) -> Result<f64, AstroError> {
        defined(self.ta_deg, "true anomaly")
    }

    /// Returns the eccentric anomaly in degrees, recomputed from the stored true anomaly.
    pub fn ea_deg(&self) -> Result<f64, AstroError> {
        anomaly::eccentric_from_true(self.ta_deg()?, self.ecc()?)
    }

    /// Returns the mean anomaly in degrees, recomputed from the stored true anomaly.
    pub fn ma_deg(&self) -> Result<f64, AstroError> {
        anomaly::mean_from_eccentric(self.ea_deg()?, self.ecc()?)
    }

    /// Returns the semilatus rectum in km
    pub fn semi_parameter_km(&self) -> Result<f64, AstroError> {
        Ok(self.sma_km()? * (1.0 - self.ecc()?.powi(2)))
    }

    /// Returns the radius of periapsis in km
    pub fn periapsis_km(&self) -> Result<f64, AstroError> {
        Ok(self.sma_km()? * (1.0 - self.ecc()?))
    }

    /// Returns the radius of apoapsis in km
    pub fn apoapsis_km(&self) -> Result<f64, AstroError> {
        Ok(self.sma_km()? * (1.0 + self.ecc()?))
    }

    /// Returns the mean motion in rad/s from Kepler's third law, `n = sqrt(gm / sma^3)`.
    ///
    /// The gravitational parameter is in km^3/s^2.
    pub fn mean_motion_rad_s(&self, gm_km3_s2: f64) -> Result<f64, AstroError> {
        Ok((gm_km3_s2 / self.sma_km()?.powi(3)).sqrt())
    }

    /// Returns the orbital period, `T = 2 pi / n`.
    ///
    /// The gravitational parameter is in km^3/s^2.
    pub fn orbital_period(&self, gm_km3_s2: f64) -> Result<Duration, AstroError> {
        Ok(2.0 * PI * (self.sma_km()?.powi(3) / gm_km3_s2).sqrt() * Unit::Second)
    }

    /// Converts this element set into a Cartesian state expressed in the provided frame.
    ///
    /// The position and velocity are computed in the perifocal plane from the
    /// conic equation and rotated through the 3-1-3 sequence (RAAN,
    /// inclination, AOP), expanded as combined direction cosines. The frame
    /// argument determines only the final basis: the elements are interpreted
    /// with respect to that frame's own axes.
    pub fn cartesian_state(
        &self,
        gm_km3_s2: f64,
        frame: &Arc<Frame>,
    ) -> Result<CartesianState, AstroError> {
        let sma = self.sma_km()?;
        let ecc = self.ecc()?;
        let inc = self.inc_deg()?.to_radians();
        let raan = self.raan_deg()?.to_radians();
        let aop = self.aop_deg()?.to_radians();
        let ta = self.ta_deg()?.to_radians();

        if gm_km3_s2.abs() < f64::EPSILON {
            warn!(
                "GM is near zero ({gm_km3_s2}): expect math errors in element to Cartesian conversion"
            );
        }
        if (sma * (1.0 - ecc)).abs() < 1e-3 {
            warn!("radius of periapsis is less than one meter");
        }

        let p = sma * (1.0 - ecc.powi(2));
        let radius = p / (1.0 + ecc * ta.cos());
        let (sin_aop_ta, cos_aop_ta) = (aop + ta).sin_cos();
        let (sin_inc, cos_inc) = inc.sin_cos();
        let (sin_raan, cos_raan) = raan.sin_cos();
        let (sin_aop, cos_aop) = aop.sin_cos();
        let x = radius * (cos_aop_ta * cos_raan - cos_inc * sin_aop_ta * sin_raan);
        let y = radius * (cos_aop_ta * sin_raan + cos_inc * sin_aop_ta * cos_raan);
        let z = radius * sin_aop_ta * sin_inc;
        let sqrt_gm_p = (gm_km3_s2 / p).sqrt();
        let cos_ta_ecc = ta.cos() + ecc;
        let sin_ta = ta.sin();
        let vx = sqrt_gm_p * cos_ta_ecc * (-sin_aop * cos_raan - cos_inc * sin_raan * cos_aop)
            - sqrt_gm_p * sin_ta * (cos_aop * cos_raan - cos_inc * sin_raan * sin_aop);
        let vy = sqrt_gm_p * cos_ta_ecc * (-sin_aop * sin_raan + cos_inc * cos_raan * cos_aop)
            - sqrt_gm_p * sin_ta * (cos_aop * sin_raan + cos_inc * cos_raan * sin_aop);
        let vz = sqrt_gm_p * (cos_ta_ecc * sin_inc * cos_aop - sin_ta * sin_inc * sin_aop);

        Ok(CartesianState::new(
            Vector3::new(x, y, z),
            Vector3::new(vx, vy, vz),
            frame.clone(),
        ))
    }

    /// Extracts the classical orbital elements from a Cartesian state.
    ///
    /// Derives the specific angular momentum vector `h = r x v`, the
    /// eccentricity vector, and the node vector `n = z x h`, then extracts the
    /// elements by vector geometry, disambiguating quadrants with the sign of
    /// `r . v` and the z/y components of the eccentricity and node vectors.
    ///
    /// Degenerate orbits use the following conventions, which are symmetric
    /// with [`Coe::cartesian_state`] so that round trips remain stable:
    /// - near-circular (`ecc < ECC_EPSILON`): the AOP is set to zero and the
    ///   true anomaly holds the argument of latitude;
    /// - near-equatorial (`|sin inc| < INC_EPSILON`): the RAAN is set to zero
    ///   and the AOP holds the longitude of periapsis;
    /// - both: the RAAN and AOP are set to zero and the true anomaly holds the
    ///   true longitude.
    pub fn from_cartesian(state: &CartesianState, gm_km3_s2: f64) -> Result<Coe, AstroError> {
        let r = state.position_km;
        let v = state.velocity_km_s;
        let rmag = r.norm();
        let hvec = r.cross(&v);
        let hmag = hvec.norm();

        let evec = ((v.norm_squared() - gm_km3_s2 / rmag) * r - r.dot(&v) * v) / gm_km3_s2;
        let ecc = evec.norm();
        let energy = v.norm_squared() / 2.0 - gm_km3_s2 / rmag;
        let sma = -gm_km3_s2 / (2.0 * energy);
        let inc = (hvec[2] / hmag).clamp(-1.0, 1.0).acos();

        let nvec = Vector3::new(0.0, 0.0, 1.0).cross(&hvec);
        let nmag = nvec.norm();
        let circular = ecc < ECC_EPSILON;
        let equatorial = nmag / hmag < INC_EPSILON;

        let quadrant = |cos_angle: f64, negative: bool| -> f64 {
            let angle = cos_angle.clamp(-1.0, 1.0).acos();
            if negative {
                2.0 * PI - angle
            } else {
                angle
            }
        };

        let (raan, aop, ta) = match (circular, equatorial) {
            (false, false) => {
                let raan = quadrant(nvec[0] / nmag, nvec[1] < 0.0);
                let aop = quadrant(nvec.dot(&evec) / (nmag * ecc), evec[2] < 0.0);
                let ta = quadrant(evec.dot(&r) / (ecc * rmag), r.dot(&v) < 0.0);
                (raan, aop, ta)
            }
            (true, false) => {
                warn!("orbit is near-circular (ecc = {ecc}): AOP set to zero, true anomaly holds the argument of latitude");
                let raan = quadrant(nvec[0] / nmag, nvec[1] < 0.0);
                let arg_lat = quadrant(nvec.dot(&r) / (nmag * rmag), r[2] < 0.0);
                (raan, 0.0, arg_lat)
            }
            (false, true) => {
                warn!("orbit is near-equatorial: RAAN set to zero, AOP holds the longitude of periapsis");
                let lon_per = quadrant(evec[0] / ecc, evec[1] < 0.0);
                let ta = quadrant(evec.dot(&r) / (ecc * rmag), r.dot(&v) < 0.0);
                (0.0, lon_per, ta)
            }
            (true, true) => {
                warn!("orbit is near-circular and near-equatorial: RAAN and AOP set to zero, true anomaly holds the true longitude");
                let true_lon = quadrant(r[0] / rmag, r[1] < 0.0);
                (0.0, 0.0, true_lon)
            }
        };

        Ok(Coe::new(
            sma,
            ecc,
            inc.to_degrees(),
            raan.to_degrees(),
            aop.to_degrees(),
            ta.to_degrees(),
        ))
    }

    /// Computes the eccentric anomaly from the true anomaly, both in degrees.
    pub fn eccentric_anomaly_from_true_anomaly(ta_deg: f64, ecc: f64) -> Result<f64, AstroError> {
        anomaly::eccentric_from_true(ta_deg, ecc)
    }

    /// Computes the true anomaly from the eccentric anomaly, both in degrees.
    pub fn true_anomaly_from_eccentric_anomaly(ea_deg: f64, ecc: f64) -> Result<f64, AstroError> {
        anomaly::true_from_eccentric(ea_deg, ecc)
    }

    /// Computes the mean anomaly from the eccentric anomaly, both in degrees.
    pub fn mean_anomaly_from_eccentric_anomaly(ea_deg: f64, ecc: f64) -> Result<f64, AstroError> {
        anomaly::mean_from_eccentric(ea_deg, ecc)
    }

    /// Computes the eccentric anomaly from the mean anomaly, both in degrees,
    /// with the provided tolerance on the Kepler equation residual in radians.
    pub fn eccentric_anomaly_from_mean_anomaly(
        ma_deg: f64,
        ecc: f64,
        tol: f64,
    ) -> Result<f64, AstroError> {
        anomaly::eccentric_from_mean(ma_deg, ecc, tol)
    }
}

fn elem(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(value) => format!("{value:.decimals$}"),
        None => "undefined".to_string(),
    }
}

impl fmt::Display for Coe {
    /// Prints the six elements with units; the alternate flag (`{:#}`) adds decorative rules.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let decimals = f.precision().unwrap_or(6);
        if f.alternate() {
            writeln!(
                f,
                "-- Classical Orbital Elements ----------------------------------------"
            )?;
        }
        write!(
            f,
            "sma = {} km\tecc = {}\tinc = {} deg\traan = {} deg\taop = {} deg\tta = {} deg",
            elem(self.sma_km, decimals),
            elem(self.ecc, decimals),
            elem(self.inc_deg, decimals),
            elem(self.raan_deg, decimals),
            elem(self.aop_deg, decimals),
            elem(self.ta_deg, decimals),
        )?;
        if f.alternate() {
            write!(
                f,
                "\n----------------------------------------------------------------------"
            )?;
        }
        Ok(())
    }
}

/// Panics unless both element sets are element-wise equal within the provided absolute tolerance.
pub fn assert_coe_eq_or_abs(left: &Coe, right: &Coe, epsilon: f64, msg: &str) {
    let pairs = [
        (left.sma_km, right.sma_km),
        (left.ecc, right.ecc),
        (left.inc_deg, right.inc_deg),
        (left.raan_deg, right.raan_deg),
        (left.aop_deg, right.aop_deg),
        (left.ta_deg, right.ta_deg),
    ];
    for (lhs, rhs) in pairs {
        let matches = match (lhs, rhs) {
            (Some(lhs), Some(rhs)) => abs_diff_eq!(lhs, rhs, epsilon = epsilon),
            (None, None) => true,
            _ => false,
        };
        if !matches {
            panic!(
                r#"assertion failed: `(left == right)`
  left: `{left}`,
 right: `{right}`: {msg}"#
            )
        }
    }
}
