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

use crate::core::VerticalDistance;
use crate::geom::Rectangle;
use crate::model::FixKey;

/// Flight-level applicability of an airway segment (spec §4.6, the source's
/// single-character flight-level column).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum AirwayLevel {
    Jet,
    Victor,
    Both,
}

/// One-way travel restriction on an airway segment.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum DirectionRestriction {
    None,
    Forward,
    Backward,
}

/// A directed edge of a named airway, joining `from_fix` to `to_fix` (spec
/// §3, Airway entity; §4.6). Produced by [`crate::resolver::airway`]'s
/// fragment stitcher, which turns an ordered stream of per-waypoint source
/// rows into these edges.
#[derive(Clone, Debug)]
pub struct AirwaySegment {
    pub name: String,
    /// Disjoint fragment of the named airway this edge belongs to. A route
    /// can have multiple fragments when its waypoint chain is broken by an
    /// end-of-route marker and later resumes under the same name.
    pub fragment: u16,
    pub sequence: u16,
    pub from_fix: FixKey,
    pub to_fix: FixKey,
    pub level: AirwayLevel,
    pub direction_restriction: DirectionRestriction,
    pub minimum_altitude: Option<VerticalDistance>,
    pub maximum_altitude: Option<VerticalDistance>,
    pub rect: Rectangle,
}
