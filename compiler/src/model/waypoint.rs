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

use std::fmt;

use crate::geom::Coordinate;
use crate::magnetic::MagneticVariation;

/// Whether a waypoint is usable enroute, only within a terminal area, or
/// both.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum WaypointUsage {
    HiAltitude,
    LoAltitude,
    HiLoAltitude,
    TerminalOnly,
    VfrOnly,
    Unknown,
}

/// A waypoint's region of applicability: enroute waypoints share a single
/// logical region, terminal waypoints are scoped to an airport.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Region {
    Enroute,
    TerminalArea(String),
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enroute => write!(f, "ENRT"),
            Self::TerminalArea(ident) => write!(f, "{ident}"),
        }
    }
}

/// A named fix: an enroute or terminal waypoint, with its last known
/// magnetic variation at compile time (spec §3, Waypoint entity).
#[derive(Clone, Debug)]
pub struct Waypoint {
    pub ident: String,
    pub region: Region,
    pub coordinate: Coordinate,
    pub usage: WaypointUsage,
    pub mag_var: Option<MagneticVariation>,
}

impl Waypoint {
    pub fn terminal_area(&self) -> Option<&str> {
        match &self.region {
            Region::TerminalArea(ident) => Some(ident),
            Region::Enroute => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_area_is_none_for_enroute_waypoints() {
        let wp = Waypoint {
            ident: "AAARG".into(),
            region: Region::Enroute,
            coordinate: Coordinate::new(32.69396388888889, -78.05129444444444),
            usage: WaypointUsage::HiLoAltitude,
            mag_var: None,
        };
        assert_eq!(wp.terminal_area(), None);
    }
}
