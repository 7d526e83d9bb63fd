// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::{Length, LengthUnit};

use super::Coordinate;

/// Minimum inflation applied to a freshly seeded airport bounding rectangle
/// (spec invariant: ≥100 m around the reference point).
const MIN_INFLATION_M: f32 = 100.0;

/// An axis-aligned bounding rectangle in lon/lat space.
///
/// Stored as top-left and bottom-right corners, matching the output
/// schema's four-column representation (spec §6).
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rectangle {
    pub top_left: Coordinate,
    pub bottom_right: Coordinate,
}

impl Rectangle {
    /// Seeds a rectangle as a square of at least `MIN_INFLATION_M` around
    /// `center`, then inflates it.
    pub fn seeded_at(center: Coordinate) -> Self {
        let mut rect = Self {
            top_left: center,
            bottom_right: center,
        };
        rect.inflate(Length::m(MIN_INFLATION_M));
        rect
    }

    /// Extends the rectangle to contain `point`.
    pub fn extend(&mut self, point: Coordinate) {
        self.top_left.latitude = self.top_left.latitude.max(point.latitude);
        self.top_left.longitude = self.top_left.longitude.min(point.longitude);
        self.bottom_right.latitude = self.bottom_right.latitude.min(point.latitude);
        self.bottom_right.longitude = self.bottom_right.longitude.max(point.longitude);
    }

    /// Inflates the rectangle by `distance` on every side.
    ///
    /// Uses a simple equirectangular approximation (degrees per meter scaled
    /// by latitude) which is adequate at airport scale.
    pub fn inflate(&mut self, distance: Length) {
        let meters = distance.convert_to(LengthUnit::Meters).value().to_owned() as f64;
        let lat_deg = meters / 111_320.0;
        let lat_rad = self.top_left.latitude.to_radians();
        let lon_deg = meters / (111_320.0 * lat_rad.cos().abs().max(0.01));

        self.top_left.latitude += lat_deg;
        self.top_left.longitude -= lon_deg;
        self.bottom_right.latitude -= lat_deg;
        self.bottom_right.longitude += lon_deg;
    }

    /// Returns whether `point` lies within the rectangle's bounds.
    pub fn contains(&self, point: &Coordinate) -> bool {
        point.latitude <= self.top_left.latitude
            && point.latitude >= self.bottom_right.latitude
            && point.longitude >= self.top_left.longitude
            && point.longitude <= self.bottom_right.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rectangle_contains_its_center() {
        let center = Coordinate::new(53.63, 9.99);
        let rect = Rectangle::seeded_at(center);
        assert!(rect.contains(&center));
    }

    #[test]
    fn extend_grows_to_include_point() {
        let center = Coordinate::new(53.63, 9.99);
        let mut rect = Rectangle::seeded_at(center);
        let far = Coordinate::new(53.70, 10.10);
        rect.extend(far);
        assert!(rect.contains(&far));
        assert!(rect.contains(&center));
    }
}
