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

use super::{Measurement, PhysicalQuantity, UnitOfMeasure};

/// Angle unit with radians as SI unit.
///
/// `True` and `Magnetic` share the same numeric representation (degrees);
/// the distinction is carried by the caller, not enforced by the unit
/// itself — matching how the source data tags bearings.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum AngleUnit {
    Radians,
    True,
    Magnetic,
}

impl UnitOfMeasure<f32> for AngleUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Angle
    }

    fn si() -> Self {
        Self::Radians
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Radians => "rad",
            Self::True => "°T",
            Self::Magnetic => "°M",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::Radians => value,
            Self::True | Self::Magnetic => value.to_degrees(),
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::Radians => *value,
            Self::True | Self::Magnetic => value.to_radians(),
        }
    }
}

/// A bearing or angle, in degrees true, degrees magnetic, or radians.
pub type Angle = Measurement<f32, AngleUnit>;

impl Angle {
    /// An angle in degrees true.
    pub fn t(degrees: f32) -> Self {
        Self {
            value: degrees,
            unit: AngleUnit::True,
        }
    }

    /// An angle in degrees magnetic.
    pub fn m(degrees: f32) -> Self {
        Self {
            value: degrees,
            unit: AngleUnit::Magnetic,
        }
    }

    /// An angle in radians.
    pub fn rad(radians: f32) -> Self {
        Self {
            value: radians,
            unit: AngleUnit::Radians,
        }
    }

    /// Returns the normalized course in `[0, 360)` if expressed as a bearing.
    pub fn normalized(&self) -> f32 {
        crate::geom::normalize_course(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_to_radians() {
        assert!((Angle::t(180.0).to_si() - std::f32::consts::PI).abs() < 0.0001);
    }

    #[test]
    fn normalized_wraps() {
        assert_eq!(Angle::t(-10.0).normalized(), 350.0);
    }
}
