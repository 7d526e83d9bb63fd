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

use time::OffsetDateTime;

use crate::geom::Coordinate;
use crate::measurements::Pressure;

/// A single station observation, kept only as its raw text plus the fields
/// needed to merge and index it (spec §3, Metar entity; §4.11).
#[derive(Clone, Debug)]
pub struct Metar {
    pub station: String,
    /// `None` until resolved against the station/airport table; a METAR
    /// with no known station coordinate still indexes by nearest-airport
    /// fallback once resolved (spec §4.11).
    pub coordinate: Option<Coordinate>,
    pub observed_at: OffsetDateTime,
    pub raw: String,
    pub altimeter: Option<Pressure>,
}
