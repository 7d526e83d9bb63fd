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

//! Units of measure: a generic [`Measurement<V, U>`] tagged by a
//! [`UnitOfMeasure`], with concrete units for the physical quantities the
//! compiler deals with (length, angle, pressure, altitude).

use std::fmt;
use std::ops::{Add, Div, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod altitude;
mod angle;
pub mod constants;
mod length;
mod pressure;

pub use altitude::{Altitude, AltitudeUnit};
pub use angle::{Angle, AngleUnit};
pub use length::{Length, LengthUnit};
pub use pressure::{Pressure, PressureUnit};

/// The kind of physical quantity a [`UnitOfMeasure`] belongs to.
///
/// Units may only convert within the same quantity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PhysicalQuantity {
    Length,
    Angle,
    Pressure,
}

/// A unit of measure for values of type `V`.
///
/// Each unit knows its [`PhysicalQuantity`], its SI unit, and how to convert
/// a raw value to and from that SI unit.
pub trait UnitOfMeasure<V>: Copy + PartialEq {
    fn quantity() -> PhysicalQuantity;
    fn si() -> Self;
    fn symbol(&self) -> &'static str;
    fn from_si(value: V, to: &Self) -> V;
    fn to_si(&self, value: &V) -> V;
}

/// A value tagged with the unit it was expressed in.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement<V, U> {
    pub(crate) value: V,
    pub(crate) unit: U,
}

impl<V: Copy, U: UnitOfMeasure<V>> Measurement<V, U> {
    /// Returns the raw value in its current unit.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the unit the value is currently expressed in.
    pub fn unit(&self) -> U {
        self.unit
    }

    /// Converts to the SI unit of this quantity.
    pub fn to_si(&self) -> V {
        self.unit.to_si(&self.value)
    }

    /// Converts this measurement to `unit`, returning a new measurement.
    pub fn convert_to(&self, unit: U) -> Self {
        if unit == self.unit {
            return *self;
        }

        let si = self.to_si();
        Self {
            value: U::from_si(si, &unit),
            unit,
        }
    }
}

impl<U: UnitOfMeasure<f32> + fmt::Debug> fmt::Display for Measurement<f32, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

impl<U: UnitOfMeasure<f32>> Add for Measurement<f32, U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let rhs = rhs.convert_to(self.unit);
        Self {
            value: self.value + rhs.value,
            unit: self.unit,
        }
    }
}

impl<U: UnitOfMeasure<f32>> Sub for Measurement<f32, U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let rhs = rhs.convert_to(self.unit);
        Self {
            value: self.value - rhs.value,
            unit: self.unit,
        }
    }
}

impl<U: UnitOfMeasure<f32>> Div for Measurement<f32, U> {
    type Output = f32;

    fn div(self, rhs: Self) -> Self::Output {
        self.to_si() / rhs.to_si()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_roundtrip() {
        let a = Length::nm(10.0);
        let back = a.convert_to(LengthUnit::Meters).convert_to(LengthUnit::NauticalMiles);
        assert!((*back.value() - 10.0).abs() < 0.0001);
    }

    #[test]
    fn add_converts_rhs_to_lhs_unit() {
        let a = Length::m(1000.0);
        let b = Length::nm(1.0);
        let sum = a + b;
        assert_eq!(sum.unit(), LengthUnit::Meters);
        assert!((*sum.value() - (1000.0 + 1852.0)).abs() < 0.01);
    }
}
