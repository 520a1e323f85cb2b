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

use crate::linalg::{UnitQuaternion, Vector3};
use crate::time::Epoch;
use lazy_static::lazy_static;
use std::fmt;
use std::sync::Arc;

lazy_static! {
    static ref GCRF: Arc<Frame> = Arc::new(Frame {
        name: "GCRF".to_string(),
        orientation: UnitQuaternion::identity(),
        angular_velocity_rad_s: Vector3::zeros(),
    });
}

/// Returns the shared handle to the canonical inertial base frame.
///
/// All other frames are defined by their orientation and angular velocity with
/// respect to this frame.
pub fn gcrf() -> Arc<Frame> {
    GCRF.clone()
}

/// A reference frame, shared as an `Arc` handle.
///
/// Frames are immutable. Two handles refer to the same frame only if they point
/// to the same allocation (`Arc::ptr_eq`): frame comparison is by identity, not
/// by geometric equivalence.
#[derive(Clone, Debug)]
pub struct Frame {
    name: String,
    /// Rotation taking coordinates expressed in this frame into the inertial base.
    orientation: UnitQuaternion<f64>,
    /// Angular velocity of this frame with respect to the base, expressed in the base, in rad/s.
    angular_velocity_rad_s: Vector3<f64>,
}

impl Frame {
    /// Builds an inertial frame with a fixed orientation with respect to the base frame.
    pub fn inertial(name: &str, orientation: UnitQuaternion<f64>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            orientation,
            angular_velocity_rad_s: Vector3::zeros(),
        })
    }

    /// Builds a frame rotating at a constant rate about a fixed axis with respect to the base frame.
    ///
    /// The provided orientation is the frame orientation at the J2000 reference epoch.
    pub fn rotating(
        name: &str,
        orientation: UnitQuaternion<f64>,
        angular_velocity_rad_s: Vector3<f64>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            orientation,
            angular_velocity_rad_s,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rotation taking coordinates expressed in this frame into the base frame at the provided epoch.
    fn orientation_at(&self, epoch: Epoch) -> UnitQuaternion<f64> {
        if self.angular_velocity_rad_s.norm() < f64::EPSILON {
            return self.orientation;
        }
        let dt_s = (epoch - Epoch::from_gregorian_tai_at_noon(2000, 1, 1)).to_seconds();
        let spin = UnitQuaternion::from_scaled_axis(self.angular_velocity_rad_s * dt_s);
        spin * self.orientation
    }

    /// Computes the kinematic transform taking states expressed in `other` into this frame
    /// at the provided epoch.
    pub fn transform_from(&self, other: &Frame, epoch: Epoch) -> Transform {
        let q_target = self.orientation_at(epoch);
        let q_source = other.orientation_at(epoch);
        let relative_rate = other.angular_velocity_rad_s - self.angular_velocity_rad_s;
        Transform {
            rotation: q_target.inverse() * q_source,
            angular_velocity_rad_s: q_target.inverse() * relative_rate,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A kinematic transform between two frames at a given instant, applicable to
/// position, velocity, attitude, and angular velocity.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    /// Rotation taking source-frame coordinates into target-frame coordinates.
    pub rotation: UnitQuaternion<f64>,
    /// Angular velocity of the source frame with respect to the target frame,
    /// expressed in the target frame, in rad/s.
    pub angular_velocity_rad_s: Vector3<f64>,
}

impl Transform {
    /// Re-expresses a position vector in the target frame.
    pub fn apply_to_position(&self, position: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * position
    }

    /// Re-expresses a velocity vector in the target frame, accounting for the
    /// relative rotation rate of the two frames.
    pub fn apply_to_velocity(
        &self,
        velocity: &Vector3<f64>,
        position: &Vector3<f64>,
    ) -> Vector3<f64> {
        self.rotation * velocity + self.angular_velocity_rad_s.cross(&(self.rotation * position))
    }

    /// Re-expresses an attitude quaternion (body axes to source frame) as body axes to target frame.
    pub fn apply_to_attitude(&self, attitude: &UnitQuaternion<f64>) -> UnitQuaternion<f64> {
        self.rotation * attitude
    }

    /// Re-expresses a body angular velocity (body with respect to source frame,
    /// in body axes) as body with respect to target frame, in body axes.
    ///
    /// The attitude argument is the attitude with respect to the source frame.
    pub fn apply_to_angular_velocity(
        &self,
        angular_velocity: &Vector3<f64>,
        attitude: &UnitQuaternion<f64>,
    ) -> Vector3<f64> {
        let body_to_target = self.rotation * attitude;
        angular_velocity + body_to_target.inverse() * self.angular_velocity_rad_s
    }
}
