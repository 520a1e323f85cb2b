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

/// Returns the provided angle in degrees bounded between 0.0 and 360.0.
pub fn between_0_360(angle_deg: f64) -> f64 {
    let mut bounded = angle_deg % 360.0;
    if bounded < 0.0 {
        bounded += 360.0;
    }
    bounded
}

/// Returns the provided angle in degrees bounded between -180.0 and +180.0.
pub fn between_pm_180(angle_deg: f64) -> f64 {
    let bounded = between_0_360(angle_deg);
    if bounded > 180.0 {
        bounded - 360.0
    } else {
        bounded
    }
}
