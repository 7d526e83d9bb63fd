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
use crate::measurements::{Angle, Length};

/// One physical runway surface, owning both of its landing ends (spec §3,
/// Runway entity; pairing itself is performed by [`crate::geometry::runway`]).
#[derive(Clone, Debug)]
pub struct Runway {
    pub airport_ident: String,
    pub length: Length,
    pub width: Length,
    pub surface: Option<String>,
    pub ends: (RunwayEnd, RunwayEnd),
}

/// One landing direction of a runway, e.g. `09L` and its reciprocal `27R`.
#[derive(Clone, Debug)]
pub struct RunwayEnd {
    /// Designator such as `"09L"`, `"27R"`, or `"18"` for a stub end with no
    /// published source record (spec §4.6, "synthesized closed stub ends").
    pub ident: String,
    pub threshold: Coordinate,
    pub bearing_true: Angle,
    pub threshold_elevation: Option<Length>,
    pub displaced_threshold: Option<Length>,
    /// `true` for an end synthesized to pair with a source record that had
    /// no matching reciprocal end.
    pub synthesized: bool,
    pub ils: Option<crate::model::Ils>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesized_end_is_distinguishable() {
        let end = RunwayEnd {
            ident: "18".into(),
            threshold: Coordinate::new(0.0, 0.0),
            bearing_true: Angle::t(180.0),
            threshold_elevation: None,
            displaced_threshold: None,
            synthesized: true,
            ils: None,
        };
        assert!(end.synthesized);
    }
}
