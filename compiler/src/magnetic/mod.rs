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

//! Magnetic Model: world magnetic declination lookup by position.
//!
//! Loaded once and pinned for the run (spec §5); the pass in
//! [`crate::passes::magnetic`] calls [`MagneticModel::declination_at`] for
//! every positional row it updates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use time::Date;
use world_magnetic_model::{
    uom::si::{angle::degree, f32::Angle as WmmAngle, length::meter},
    GeomagneticField, WmmComputationError,
};

use crate::error::Error;
use crate::geom::Coordinate;
use crate::measurements::Angle;

/// Magnetic variation, signed by hemisphere of deviation from true north.
///
/// Source records carry `East`/`West`, but positional rows derived at
/// compile time are stored as the model's signed value directly; both
/// forms convert to the same [`Angle`].
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MagneticVariation {
    East(f32),
    West(f32),
    /// The position's grid is oriented to true north (polar regions).
    OrientedToTrueNorth,
}

impl MagneticVariation {
    /// Signed degrees, positive east, matching the ARINC 424 convention.
    pub fn degrees(&self) -> f32 {
        match self {
            Self::East(d) => *d,
            Self::West(d) => -*d,
            Self::OrientedToTrueNorth => 0.0,
        }
    }
}

impl From<MagneticVariation> for Angle {
    fn from(value: MagneticVariation) -> Self {
        Angle::t(value.degrees())
    }
}

impl fmt::Display for MagneticVariation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::East(d) => write!(f, "{d}E"),
            Self::West(d) => write!(f, "{d}W"),
            Self::OrientedToTrueNorth => write!(f, "UNREL"),
        }
    }
}

/// A pinned instance of the world magnetic model, used for the lifetime of
/// one compile run.
///
/// The model is date-dependent (declination drifts over time); the compiler
/// evaluates it at the epoch of the navigation data cycle being compiled.
pub struct MagneticModel {
    date: Date,
}

impl MagneticModel {
    /// Pins the model at `date` (typically the AIRAC cycle's effective date).
    pub fn new(date: Date) -> Self {
        Self { date }
    }

    /// Returns the magnetic declination at `position`, at sea level.
    pub fn declination_at(&self, position: Coordinate) -> Result<Angle, Error> {
        let field = GeomagneticField::new(
            WmmAngle::new::<meter>(0.0).into(),
            self.date,
            WmmAngle::new::<degree>(position.latitude as f32),
            WmmAngle::new::<degree>(position.longitude as f32),
        )
        .map_err(|e: WmmComputationError| Error::InvalidEncoding { field: e.to_string() })?;

        Ok(Angle::t(field.declination().get::<degree>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn east_is_positive_west_is_negative() {
        assert_eq!(MagneticVariation::East(4.0).degrees(), 4.0);
        assert_eq!(MagneticVariation::West(4.0).degrees(), -4.0);
    }
}
