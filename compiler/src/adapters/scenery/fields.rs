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

//! Bit-packed field decoders for the scenery archive's approach records
//! (spec §6: "approach flags: low nibble = approach type, bits 4-6 = runway
//! designator, bit 7 = GPS-overlay flag; fix identifier: 28-bit packed code
//! with a 5-bit shift offset, decodable to at most five ICAO characters").

/// Approach type, the flags byte's low nibble.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ApproachType {
    Ndb,
    Vor,
    Ils,
    Rnav,
    Gps,
    Loc,
    Unknown(u8),
}

impl From<u8> for ApproachType {
    fn from(nibble: u8) -> Self {
        match nibble {
            0 => Self::Ndb,
            1 => Self::Vor,
            3 => Self::Ils,
            4 => Self::Rnav,
            5 => Self::Gps,
            6 => Self::Loc,
            other => Self::Unknown(other),
        }
    }
}

/// Runway designator packed into bits 4-6 of the flags byte: a 3-bit slot,
/// so at most 8 distinct designators per approach type.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RunwayDesignator(pub u8);

/// Decodes an approach record's flags byte into `(type, runway designator,
/// gps overlay)`.
pub fn decode_approach_flags(flags: u8) -> (ApproachType, RunwayDesignator, bool) {
    let approach_type = ApproachType::from(flags & 0x0F);
    let designator = RunwayDesignator((flags >> 4) & 0x07);
    let gps_overlay = flags & 0x80 != 0;
    (approach_type, designator, gps_overlay)
}

/// Decodes a 28-bit packed fix identifier into up to five ICAO characters,
/// five bits each (`0` = no character, `1..=26` = `A..=Z`).
pub fn decode_fix_ident(packed: u32) -> String {
    let mut ident = String::with_capacity(5);
    for i in 0..5 {
        let shift = i * 5;
        let code = (packed >> shift) & 0x1F;
        if code == 0 {
            continue;
        }
        if let Some(c) = char::from_u32(u32::from(b'A') + code - 1) {
            ident.push(c);
        }
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_type_from_nibble() {
        assert_eq!(ApproachType::from(3), ApproachType::Ils);
        assert_eq!(ApproachType::from(9), ApproachType::Unknown(9));
    }

    #[test]
    fn empty_packed_ident_is_empty_string() {
        assert_eq!(decode_fix_ident(0), "");
    }
}
