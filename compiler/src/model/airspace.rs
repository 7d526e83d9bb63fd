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

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum AirspaceClassification {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

/// Covers both the controlled-airspace and restrictive-airspace type codes
/// (spec §4.3, §9 Open Question: no shared taxonomy ships with either
/// record, so this is a superset rather than a lossy collapse onto a
/// smaller set).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum AirspaceType {
    Cta,
    Ctr,
    Tma,
    ClassB,
    ClassC,
    Restricted,
    Danger,
    Prohibited,
    Tmz,
    Rmz,
    RadarZone,
    Moa,
    Alert,
    Caution,
    Warning,
    Training,
    NationalSecurityArea,
    TemporaryFlightRestriction,
    Unspecified,
}

/// A closed airspace boundary built from arc/great-circle/rhumb-line
/// segments (spec §3, Airspace entity; §4.7 shares its arc interpolation
/// with the ILS feather).
#[derive(Clone, Debug)]
pub struct Airspace {
    pub name: String,
    pub airspace_type: AirspaceType,
    pub classification: Option<AirspaceClassification>,
    pub floor: VerticalDistance,
    pub ceiling: VerticalDistance,
    pub polygon: geo::Polygon<f64>,
}
