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

use super::Frame;
use crate::errors::AstroError;
use crate::linalg::{UnitQuaternion, Vector3};
use crate::time::Epoch;
use std::fmt;
use std::sync::Arc;

/// A flight profile state: an immutable kinematic and attitude snapshot tied to
/// a reference frame.
///
/// The position, velocity, attitude, and angular velocity are all expressed
/// with respect to the referenced frame. The attitude quaternion rotates body
/// axes into the frame basis; the angular velocity is the body rate with
/// respect to the frame, expressed in body axes, in rad/s. The frame is a
/// shared handle: several states may reference the same frame instance.
///
/// Any field may individually be undefined; the state is defined only when all
/// of them are. Transformations produce new instances, the source state is
/// never mutated.
#[derive(Clone, Debug)]
pub struct ProfileState {
    instant: Option<Epoch>,
    position_km: Option<Vector3<f64>>,
    velocity_km_s: Option<Vector3<f64>>,
    attitude: Option<UnitQuaternion<f64>>,
    angular_velocity_rad_s: Option<Vector3<f64>>,
    frame: Option<Arc<Frame>>,
}

impl ProfileState {
    pub fn new(
        instant: Epoch,
        position_km: Vector3<f64>,
        velocity_km_s: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity_rad_s: Vector3<f64>,
        frame: Arc<Frame>,
    ) -> Self {
        Self {
            instant: Some(instant),
            position_km: Some(position_km),
            velocity_km_s: Some(velocity_km_s),
            attitude: Some(attitude),
            angular_velocity_rad_s: Some(angular_velocity_rad_s),
            frame: Some(frame),
        }
    }

    /// Creates a state whose fields are all undefined.
    pub fn undefined() -> Self {
        Self {
            instant: None,
            position_km: None,
            velocity_km_s: None,
            attitude: None,
            angular_velocity_rad_s: None,
            frame: None,
        }
    }

    /// Returns whether every field is defined.
    pub fn is_defined(&self) -> bool {
        self.instant.is_some()
            && self.position_km.is_some()
            && self.velocity_km_s.is_some()
            && self.attitude.is_some()
            && self.angular_velocity_rad_s.is_some()
            && self.frame.is_some()
    }

    pub fn instant(&self) -> Result<Epoch, AstroError> {
        self.instant
            .ok_or(AstroError::UndefinedValue { param: "instant" })
    }

    /// Returns the position in km
    pub fn position_km(&self) -> Result<Vector3<f64>, AstroError> {
        self.position_km
            .ok_or(AstroError::UndefinedValue { param: "position" })
    }

    /// Returns the velocity in km/s
    pub fn velocity_km_s(&self) -> Result<Vector3<f64>, AstroError> {
        self.velocity_km_s
            .ok_or(AstroError::UndefinedValue { param: "velocity" })
    }

    /// Returns the attitude quaternion, body axes to frame basis
    pub fn attitude(&self) -> Result<UnitQuaternion<f64>, AstroError> {
        self.attitude
            .ok_or(AstroError::UndefinedValue { param: "attitude" })
    }

    /// Returns the angular velocity in rad/s, body with respect to frame, in body axes
    pub fn angular_velocity_rad_s(&self) -> Result<Vector3<f64>, AstroError> {
        self.angular_velocity_rad_s.ok_or(AstroError::UndefinedValue {
            param: "angular velocity",
        })
    }

    /// Returns the shared handle to the reference frame
    pub fn frame(&self) -> Result<Arc<Frame>, AstroError> {
        self.frame.clone().ok_or(AstroError::FrameUndefined)
    }

    /// Returns a new state re-expressed in the provided frame at the same instant.
    pub fn in_frame(&self, frame: &Arc<Frame>) -> Result<ProfileState, AstroError> {
        let instant = self.instant()?;
        let position = self.position_km()?;
        let velocity = self.velocity_km_s()?;
        let attitude = self.attitude()?;
        let angular_velocity = self.angular_velocity_rad_s()?;
        let source = self.frame()?;

        let transform = frame.transform_from(&source, instant);

        Ok(ProfileState::new(
            instant,
            transform.apply_to_position(&position),
            transform.apply_to_velocity(&velocity, &position),
            transform.apply_to_attitude(&attitude),
            transform.apply_to_angular_velocity(&angular_velocity, &attitude),
            frame.clone(),
        ))
    }
}

impl PartialEq for ProfileState {
    /// Field-by-field comparison; frames compare by handle identity.
    fn eq(&self, other: &Self) -> bool {
        let frames_match = match (&self.frame, &other.frame) {
            (Some(lhs), Some(rhs)) => Arc::ptr_eq(lhs, rhs),
            (None, None) => true,
            _ => false,
        };
        frames_match
            && self.instant == other.instant
            && self.position_km == other.position_km
            && self.velocity_km_s == other.velocity_km_s
            && self.attitude == other.attitude
            && self.angular_velocity_rad_s == other.angular_velocity_rad_s
    }
}

impl fmt::Display for ProfileState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let frame = match &self.frame {
            Some(frame) => frame.name().to_string(),
            None => "undefined".to_string(),
        };
        let instant = match self.instant {
            Some(instant) => format!("{instant}"),
            None => "undefined".to_string(),
        };
        fn vec(value: &Option<Vector3<f64>>) -> String {
            match value {
                Some(value) => format!("[{}, {}, {}]", value[0], value[1], value[2]),
                None => "undefined".to_string(),
            }
        }
        let attitude = match &self.attitude {
            Some(attitude) => format!("{attitude}"),
            None => "undefined".to_string(),
        };
        write!(
            f,
            "[{}] {}\tposition = {} km\tvelocity = {} km/s\tattitude = {}\tangular velocity = {} rad/s",
            frame,
            instant,
            vec(&self.position_km),
            vec(&self.velocity_km_s),
            attitude,
            vec(&self.angular_velocity_rad_s),
        )
    }
}
