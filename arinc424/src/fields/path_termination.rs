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

use crate::{Error, FixedField};

/// 5.17 Path and Termination (PATH TERM)
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum PathTermination {
    InitialFix,
    TrackToFix,
    CourseToFix,
    DirectToFix,
    FixToAltitude,
    CourseToAltitude,
    HeadingToAltitude,
    HeadingToManual,
    HeadingToIntercept,
    HeadingToRadial,
    CourseToRadial,
    CourseToDmeDistance,
    ArcToFix,
    RadiusToFix,
    ProcedureTurn,
    HoldToManual,
    HoldToAltitude,
    HoldToFix,
}

impl FixedField<'_> for PathTermination {
    const LENGTH: usize = 2;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        match &bytes[..2] {
            b"IF" => Ok(Self::InitialFix),
            b"TF" => Ok(Self::TrackToFix),
            b"CF" => Ok(Self::CourseToFix),
            b"DF" => Ok(Self::DirectToFix),
            b"FA" => Ok(Self::FixToAltitude),
            b"CA" => Ok(Self::CourseToAltitude),
            b"VA" => Ok(Self::HeadingToAltitude),
            b"VM" => Ok(Self::HeadingToManual),
            b"VI" => Ok(Self::HeadingToIntercept),
            b"VR" => Ok(Self::HeadingToRadial),
            b"CR" => Ok(Self::CourseToRadial),
            b"CD" => Ok(Self::CourseToDmeDistance),
            b"AF" => Ok(Self::ArcToFix),
            b"RF" => Ok(Self::RadiusToFix),
            b"PI" => Ok(Self::ProcedureTurn),
            b"HM" => Ok(Self::HoldToManual),
            b"HA" => Ok(Self::HoldToAltitude),
            b"HF" => Ok(Self::HoldToFix),
            bytes => Err(Error::InvalidVariant {
                field: "Path and Termination",
                bytes: bytes.to_vec(),
                expected: "a recognized ARINC 424-23 5.17 path terminator",
            }),
        }
    }
}

/// 5.19 Turn Direction (TURN)
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum TurnDirection {
    Left,
    Right,
    Either,
}

impl FixedField<'_> for TurnDirection {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        match bytes[0] {
            b'L' => Ok(Self::Left),
            b'R' => Ok(Self::Right),
            b'E' | b' ' => Ok(Self::Either),
            byte => Err(Error::InvalidCharacter {
                field: "Turn Direction",
                byte,
                expected: "L, R, E or blank",
            }),
        }
    }
}

/// 5.29 Altitude Description (ALT DESC)
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum AltitudeDescription {
    AtOrAbove,
    AtOrBelow,
    At,
    Between,
}

impl FixedField<'_> for AltitudeDescription {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        match bytes[0] {
            b'+' => Ok(Self::AtOrAbove),
            b'-' => Ok(Self::AtOrBelow),
            b'@' | b' ' => Ok(Self::At),
            b'B' => Ok(Self::Between),
            byte => Err(Error::InvalidCharacter {
                field: "Altitude Description",
                byte,
                expected: "+, -, @ or B",
            }),
        }
    }
}

/// 5.12 Waypoint Description Code (DESC CODE)
///
/// Four independently-meaningful flags packed into one field; only the
/// second (end-of-route, `'E'`) and fourth (IFR, `'B'`) positions are
/// consumed by the resolver today.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct WaypointDescriptionCode([u8; 4]);

impl WaypointDescriptionCode {
    pub fn is_end_of_route(&self) -> bool {
        self.0[1] == b'E'
    }

    pub fn is_flyover(&self) -> bool {
        self.0[1] == b'Y'
    }
}

impl FixedField<'_> for WaypointDescriptionCode {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < 4 {
            return Err(Error::InvalidFieldLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        Ok(Self([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_terminators() {
        assert_eq!(PathTermination::from_bytes(b"IF"), Ok(PathTermination::InitialFix));
        assert_eq!(PathTermination::from_bytes(b"RF"), Ok(PathTermination::RadiusToFix));
    }

    #[test]
    fn end_of_route_is_second_character() {
        let code = WaypointDescriptionCode::from_bytes(b" E B").unwrap();
        assert!(code.is_end_of_route());
    }
}
