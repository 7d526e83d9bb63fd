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
use crate::geom::Coordinate;
use crate::measurements::{Angle, Length};
use crate::model::FixKey;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ProcedureKind {
    Sid,
    Star,
    Approach,
}

/// ARINC 424 path-terminator pairs (§4.10). Not every terminator appears in
/// a modern procedure but all are modeled so the writer never has to reject
/// a leg outright.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PathTermination {
    /// Initial Fix.
    InitialFix,
    /// Track to a Fix.
    TrackToFix,
    /// Course to a Fix.
    CourseToFix,
    /// Direct to a Fix.
    DirectToFix,
    /// Fix to an Altitude.
    FixToAltitude,
    /// Course to an Altitude.
    CourseToAltitude,
    /// Heading to an Altitude.
    HeadingToAltitude,
    /// Heading to a Manual termination.
    HeadingToManual,
    /// Heading to an Intercept.
    HeadingToIntercept,
    /// Heading to a Radial termination.
    HeadingToRadial,
    /// Course to a Radial termination.
    CourseToRadial,
    /// Course to a DME Distance.
    CourseToDmeDistance,
    /// Arc to a Fix (DME arc).
    ArcToFix,
    /// Radius to a Fix (constant-radius arc).
    RadiusToFix,
    /// Procedure Turn.
    ProcedureTurn,
    /// Holding to a Manual termination.
    HoldToManual,
    /// Holding to an Altitude.
    HoldToAltitude,
    /// Holding to a Fix.
    HoldToFix,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TurnDirection {
    Left,
    Right,
    Either,
}

/// A leg's altitude constraint, mirroring ARINC 424's altitude description
/// codes (at-or-above, at-or-below, between, exact).
#[derive(Clone, Debug)]
pub enum AltitudeConstraint {
    At(VerticalDistance),
    AtOrAbove(VerticalDistance),
    AtOrBelow(VerticalDistance),
    Between(VerticalDistance, VerticalDistance),
}

/// One leg of a procedure (SID, STAR, or approach). Modeled as a single
/// struct with optional fields rather than one variant per path terminator:
/// the writer's accumulator only ever needs to read a handful of fields at
/// a time and a tagged enum would just push the same optionality into match
/// arms (spec §9, "polymorphic approach-leg modeling").
#[derive(Clone, Debug)]
pub struct Leg {
    pub sequence: u16,
    pub path_termination: PathTermination,
    pub fix: Option<FixKey>,
    /// Synthesized in-line when the source names a coordinate but no known
    /// fix (spec §4.10, third-tier fix resolution).
    pub fix_coordinate: Option<Coordinate>,
    pub recommended_navaid: Option<FixKey>,
    pub theta: Option<Angle>,
    pub rho: Option<Length>,
    pub course: Option<Angle>,
    pub turn_direction: Option<TurnDirection>,
    pub altitude: Option<AltitudeConstraint>,
    pub speed_limit: Option<u16>,
    /// Minimum/maximum/mandatory qualifier for `speed_limit` (ARINC 424
    /// speed limit description), carried as free text rather than a closed
    /// enum since sources disagree on the exact code set (spec §4.3).
    pub speed_limit_description: Option<String>,
    /// Altitude at which a SID/STAR transitions between the local altimeter
    /// setting and standard pressure (spec §4.3).
    pub transition_altitude: Option<VerticalDistance>,
    /// Holding pattern inbound leg time, in minutes, read from the source's
    /// dual-purpose distance/time column for holding path terminators
    /// (spec §4.3). `None` for non-holding legs and for sources whose rho
    /// field is typed as distance-only.
    pub holding_time_minutes: Option<f32>,
    /// Free-text holding/TAA context the source attaches to a leg (e.g.
    /// inbound holding course qualifiers) that this model has no typed
    /// field for yet (spec §4.3).
    pub holding_context: Option<String>,
}

/// A full named procedure: a SID, STAR, or approach at one airport, as an
/// ordered sequence of legs (spec §3, Procedure entity).
#[derive(Clone, Debug)]
pub struct Procedure {
    pub airport_ident: String,
    pub ident: String,
    pub kind: ProcedureKind,
    pub transition: Option<String>,
    pub legs: Vec<Leg>,
}
