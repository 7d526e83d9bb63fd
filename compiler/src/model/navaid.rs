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
use crate::magnetic::MagneticVariation;
use crate::measurements::{Angle, Length};
use crate::model::Region;

/// The physical kind of ground-based radio navigation aid.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum NavAidKind {
    Vor,
    VorDme,
    Vortac,
    Tacan,
    Ndb,
    NdbDme,
    Dme,
}

/// A ground-based radio navigation aid: VOR, NDB, TACAN, or a DME
/// collocated with one of those (spec §3, Waypoint/NavAid entity).
#[derive(Clone, Debug)]
pub struct NavAid {
    pub ident: String,
    pub kind: NavAidKind,
    pub region: Region,
    pub coordinate: Coordinate,
    /// Frequency in kHz for NDBs, in hundredths of MHz (10 kHz steps) for
    /// VOR/TACAN channels, e.g. `10805` for 108.05 MHz.
    pub frequency: u32,
    /// TACAN channel, resolved from `frequency` for `Tacan`/`Vortac` kinds
    /// (spec §4.9).
    pub tacan_channel: Option<String>,
    pub mag_var: Option<MagneticVariation>,
    pub range: Option<Length>,
}

/// An Instrument Landing System installation serving one runway end.
#[derive(Clone, Debug)]
pub struct Ils {
    pub ident: String,
    pub runway_ident: String,
    pub localizer_coordinate: Coordinate,
    pub localizer_course: Angle,
    pub localizer_width: Angle,
    pub glide_slope_angle: Option<Angle>,
    pub glide_slope_coordinate: Option<Coordinate>,
    pub frequency: u32,
    pub category: IlsCategory,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum IlsCategory {
    LocalizerOnly,
    Cat1,
    Cat2,
    Cat3,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MarkerKind {
    Outer,
    Middle,
    Inner,
    BackCourse,
}

/// A marker beacon associated with an ILS approach.
#[derive(Clone, Debug)]
pub struct Marker {
    pub ident: String,
    pub kind: MarkerKind,
    pub coordinate: Coordinate,
    pub ils_ident: String,
    pub altitude: Option<VerticalDistance>,
}
