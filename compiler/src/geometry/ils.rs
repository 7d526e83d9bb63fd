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

//! ILS feather polygon: the localizer beam's angular sector, rendered as a
//! triangle for display (spec §4.7).

use crate::geom::{reciprocal_course, Coordinate};
use crate::measurements::{Angle, Length, LengthUnit};

/// The three points of a localizer feather polygon: the two corners at the
/// beam's origin-ward edge, and a midpoint back along the centerline.
#[derive(Copy, Clone, Debug)]
pub struct Feather {
    pub left: Coordinate,
    pub right: Coordinate,
    pub midpoint: Coordinate,
}

/// Computes the feather polygon for a localizer at `origin` with `heading`
/// true, `width` (full angular beam width in degrees), and `length`
/// (spec §4.7).
pub fn feather(origin: Coordinate, heading: Angle, width: Angle, length: Length) -> Feather {
    let opposed = Angle::t(reciprocal_course(heading.normalized()));
    let half_width = width.normalized() / 2.0;

    let left = origin.endpoint(Angle::t(opposed.normalized() - half_width), length);
    let right = origin.endpoint(Angle::t(opposed.normalized() + half_width), length);

    let feather_width = left.dist(&right);
    let length_nm = *length.convert_to(LengthUnit::NauticalMiles).value();
    let feather_width_nm = *feather_width.convert_to(LengthUnit::NauticalMiles).value();
    let midpoint_distance = Length::nm(length_nm - feather_width_nm / 2.0);
    let midpoint = origin.endpoint(opposed, midpoint_distance);

    Feather { left, right, midpoint }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feather_extends_opposite_the_runway_heading() {
        let origin = Coordinate::new(0.0, 0.0);
        let result = feather(origin, Angle::t(90.0), Angle::t(4.0), Length::nm(9.0));

        // Heading 090, opposed 270; corners at 268/272 true.
        assert_eq!(origin.bearing(&result.left).normalized().round(), 268.0);
        assert_eq!(origin.bearing(&result.right).normalized().round(), 272.0);

        // The feather extends westward: longitude decreases.
        assert!(result.left.longitude < origin.longitude);
        assert!(result.right.longitude < origin.longitude);
        assert!(result.midpoint.longitude < origin.longitude);
    }
}
