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

//! The compiler's in-memory entity model (spec §3), shared by every
//! adapter, resolver, and writer. An adapter's only job is to produce
//! these types; everything downstream is format-agnostic.

mod airport;
mod airspace;
mod airway;
mod metar;
mod navaid;
mod procedure;
mod runway;
mod waypoint;

pub use airport::Airport;
pub use airspace::{Airspace, AirspaceClassification, AirspaceType};
pub use airway::{AirwayLevel, AirwaySegment, DirectionRestriction};
pub use metar::Metar;
pub use navaid::{Ils, Marker, MarkerKind, NavAid, NavAidKind};
pub use procedure::{AltitudeConstraint, Leg, PathTermination, Procedure, ProcedureKind, TurnDirection};
pub use runway::{Runway, RunwayEnd};
pub use waypoint::{Region, Waypoint, WaypointUsage};

/// A region-qualified fix identifier: the three-part key (ident, region,
/// type) used to resolve a leg's named fix before falling back to nearest-
/// coordinate resolution (spec §4.10, §9).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FixKey {
    pub ident: String,
    pub region: Region,
}

impl FixKey {
    pub fn new(ident: impl Into<String>, region: Region) -> Self {
        Self {
            ident: ident.into(),
            region,
        }
    }
}
