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

//! Source adapters: three structurally different ingesters (spec §4.2–§4.4)
//! that all produce [`StagingRow`]s for the pipeline's load phase. Adapter
//! output lands in staging, never the final schema, so every downstream
//! cross-reference pass treats all three adapters uniformly.

pub mod relational;
pub mod scenery;
pub mod text;

use crate::model::{AirwaySegment, Ils, Marker, NavAid, Procedure, Runway, Waypoint};
use crate::model::{Airport, Airspace};

/// One row an adapter hands to the pipeline's load phase.
///
/// Adapters never write to the store directly (spec §5: "adapters MUST NOT
/// materialize a whole source into memory", and output insertion must be
/// externally serialized); they call back through `on_row` so the pipeline
/// controls batching and transaction scope.
#[derive(Debug)]
pub enum StagingRow {
    Airport(Airport),
    Runway(Runway),
    Waypoint(Waypoint),
    NavAid(NavAid),
    Ils(Ils),
    Marker(Marker),
    AirwaySegment(AirwaySegment),
    Procedure(Procedure),
    Airspace(Airspace),
}

/// Non-fatal per-file/per-record error callback (spec §6's `error_sink`).
///
/// `(scenery_area_or_source, file_or_table, message)`. The pipeline is free
/// to log these and keep going; they never abort a phase (spec §7).
pub type ErrorSink<'a> = dyn FnMut(&str, &str, &str) + 'a;
