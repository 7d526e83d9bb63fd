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

use super::{constants, Measurement, PhysicalQuantity, UnitOfMeasure};

/// Length unit with _m_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum LengthUnit {
    Meters,
    Feet,
    NauticalMiles,
    StatuteMiles,
}

impl UnitOfMeasure<f32> for LengthUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Length
    }

    fn si() -> Self {
        Self::Meters
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Feet => "ft",
            Self::NauticalMiles => "NM",
            Self::StatuteMiles => "SM",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::Meters => value,
            Self::Feet => value / constants::FEET_IN_METER,
            Self::NauticalMiles => value / constants::NAUTICAL_MILE_IN_METER,
            Self::StatuteMiles => value / constants::STATUTE_MILE_IN_METER,
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::Meters => *value,
            Self::Feet => value * constants::FEET_IN_METER,
            Self::NauticalMiles => value * constants::NAUTICAL_MILE_IN_METER,
            Self::StatuteMiles => value * constants::STATUTE_MILE_IN_METER,
        }
    }
}

/// A distance or length.
pub type Length = Measurement<f32, LengthUnit>;

impl Length {
    pub fn m(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Meters,
        }
    }

    pub fn ft(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Feet,
        }
    }

    pub fn nm(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::NauticalMiles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nm_to_meters() {
        assert!((Length::nm(1.0).to_si() - 1852.0).abs() < 0.001);
    }
}
