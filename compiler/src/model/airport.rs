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

use crate::geom::Coordinate;
use crate::measurements::Altitude;

/// An airport or heliport (spec §3, Airport entity).
///
/// Runways are owned separately, keyed by `ident`; an airport with zero
/// associated runways is valid (a heliport, or a waypoint-only facility).
#[derive(Clone, Debug)]
pub struct Airport {
    pub ident: String,
    pub icao_region: String,
    pub name: String,
    pub coordinate: Coordinate,
    pub elevation: Altitude,
    pub iata: Option<String>,
}
