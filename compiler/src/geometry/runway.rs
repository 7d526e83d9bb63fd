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

//! Runway Pairer: matches single-end runway records into reciprocal pairs,
//! synthesizing a closed stub end when the source has only one direction
//! (spec §4.5).

use crate::geom::{normalize_course, reciprocal_course, Coordinate, Rectangle};
use crate::measurements::{Angle, Length};
use crate::model::{Runway, RunwayEnd};

/// One single-ended runway record as read from the source, before pairing.
#[derive(Clone, Debug)]
pub struct RunwayEndInput {
    /// Designator such as `"11R"`, `"04"`, or `"36"`.
    pub designator: String,
    pub threshold: Coordinate,
    pub bearing_true: Angle,
    pub length: Length,
    pub width: Length,
    pub surface: Option<String>,
    pub threshold_elevation: Option<Length>,
    pub displaced_threshold: Option<Length>,
}

/// Splits a designator into its numeric heading tens-digit and side letter.
fn parse_designator(designator: &str) -> Option<(u8, Option<char>)> {
    let mut chars = designator.chars();
    let last = chars.clone().last()?;
    let side = match last {
        'L' | 'R' | 'C' => {
            chars.next_back();
            Some(last)
        }
        _ => None,
    };
    let number: u8 = chars.as_str().parse().ok()?;
    Some((number, side))
}

/// Computes the canonical reciprocal designator, e.g. `"11R"` → `"29L"`.
fn opposite_designator(designator: &str) -> Option<String> {
    let (number, side) = parse_designator(designator)?;
    let opposite_number = match (u16::from(number) + 18) % 36 {
        0 => 36,
        n => n,
    };
    let opposite_side = match side {
        Some('L') => Some('R'),
        Some('R') => Some('L'),
        Some('C') => Some('C'),
        _ => None,
    };
    Some(match opposite_side {
        Some(side) => format!("{opposite_number:02}{side}"),
        None => format!("{opposite_number:02}"),
    })
}

fn build_end(input: RunwayEndInput, synthesized: bool) -> RunwayEnd {
    RunwayEnd {
        ident: input.designator,
        threshold: input.threshold,
        bearing_true: input.bearing_true,
        threshold_elevation: input.threshold_elevation,
        displaced_threshold: input.displaced_threshold,
        synthesized,
        ils: None,
    }
}

/// Synthesizes a closed stub for an end with no reciprocal record: a copy of
/// `end` at the canonical opposite identifier, with displaced threshold
/// zeroed and bearing reversed (spec §4.5, step 3).
fn synthesize_opposite(end: &RunwayEndInput, opposite_designator: String) -> RunwayEndInput {
    RunwayEndInput {
        designator: opposite_designator,
        threshold: end.threshold,
        bearing_true: Angle::t(reciprocal_course(end.bearing_true.normalized())),
        length: end.length,
        width: end.width,
        surface: end.surface.clone(),
        threshold_elevation: end.threshold_elevation,
        displaced_threshold: Some(Length::m(0.0)),
    }
}

/// Computes a runway end's threshold position from the runway's center
/// point, used when the source gives only a center and heading rather than
/// per-end thresholds (spec §4.5: `endpoint(center, length/2, heading)`).
pub fn end_position_from_center(center: Coordinate, length: Length, heading: Angle) -> Coordinate {
    center.endpoint(Angle::t(normalize_course(heading.normalized())), length)
}

/// Pairs every end in `ends` with its reciprocal, synthesizing closed stubs
/// for unpaired ends, and returns the resulting runways along with the
/// airport's bounding rectangle seeded at `airport_reference` and extended
/// by every threshold (spec §4.5).
pub fn pair_ends(ends: Vec<RunwayEndInput>, airport_reference: Coordinate) -> (Vec<Runway>, Rectangle) {
    let mut rect = Rectangle::seeded_at(airport_reference);
    let mut remaining: Vec<Option<RunwayEndInput>> = ends.into_iter().map(Some).collect();
    let mut order: Vec<usize> = (0..remaining.len()).collect();
    order.sort_by(|&a, &b| {
        remaining[a]
            .as_ref()
            .unwrap()
            .designator
            .cmp(&remaining[b].as_ref().unwrap().designator)
    });

    let mut runways = Vec::new();

    for index in order {
        let Some(end) = remaining[index].take() else {
            continue;
        };
        rect.extend(end.threshold);

        let Some(opposite_ident) = opposite_designator(&end.designator) else {
            // Designator doesn't parse (malformed source data); keep the
            // end's geometry in the bounding rectangle but emit no runway.
            continue;
        };

        let opposite_index = remaining
            .iter()
            .position(|candidate| matches!(candidate, Some(c) if c.designator == opposite_ident));

        let (primary, secondary, synthesized) = match opposite_index {
            Some(opposite_index) => {
                let opposite = remaining[opposite_index].take().unwrap();
                rect.extend(opposite.threshold);
                (end, opposite, false)
            }
            None => {
                let stub = synthesize_opposite(&end, opposite_ident);
                rect.extend(stub.threshold);
                (end, stub, true)
            }
        };

        let length = primary.length;
        let width = primary.width;
        let surface = primary.surface.clone();

        runways.push(Runway {
            airport_ident: String::new(),
            length,
            width,
            surface,
            ends: (build_end(primary, false), build_end(secondary, synthesized)),
        });
    }

    (runways, rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end(designator: &str, bearing: f32) -> RunwayEndInput {
        RunwayEndInput {
            designator: designator.into(),
            threshold: Coordinate::new(0.0, 0.0),
            bearing_true: Angle::t(bearing),
            length: Length::ft(8000.0),
            width: Length::ft(150.0),
            surface: Some("ASPH".into()),
            threshold_elevation: None,
            displaced_threshold: None,
        }
    }

    #[test]
    fn pairs_matching_reciprocal_ends() {
        let ends = vec![end("13L", 133.0), end("31R", 313.0)];
        let (runways, _) = pair_ends(ends, Coordinate::new(0.0, 0.0));
        assert_eq!(runways.len(), 1);
        assert!(!runways[0].ends.0.synthesized);
        assert!(!runways[0].ends.1.synthesized);
    }

    #[test]
    fn synthesizes_closed_stub_for_orphan_end() {
        let ends = vec![end("09", 88.0)];
        let (runways, _) = pair_ends(ends, Coordinate::new(0.0, 0.0));
        assert_eq!(runways.len(), 1);
        assert_eq!(runways[0].ends.1.ident, "27");
        assert!(runways[0].ends.1.synthesized);
        assert_eq!(runways[0].ends.1.bearing_true.normalized().round(), 268.0);
    }

    #[test]
    fn opposite_designator_swaps_side_and_wraps_heading() {
        assert_eq!(opposite_designator("11R").as_deref(), Some("29L"));
        assert_eq!(opposite_designator("36").as_deref(), Some("18"));
        assert_eq!(opposite_designator("18").as_deref(), Some("36"));
        assert_eq!(opposite_designator("09C").as_deref(), Some("27C"));
    }
}
