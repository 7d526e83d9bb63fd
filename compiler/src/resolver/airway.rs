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

//! Airway fragment stitcher (spec §4.6): turns an ordered stream of
//! per-waypoint source rows into directed [`AirwaySegment`] edges.
//!
//! Used two ways: the relational adapter drives this inline while streaming
//! its cursor (spec §4.12 step 6, "direct write"); the binary/text adapters
//! stage per-waypoint rows and a later pipeline phase replays them through
//! the same stitcher (spec §4.12 step 6, "intermediate resolver pass").

use crate::core::VerticalDistance;
use crate::geom::{Coordinate, Rectangle};
use crate::measurements::Length;
use crate::model::{AirwayLevel, AirwaySegment, DirectionRestriction, FixKey};

/// One row of the source's ordered airway waypoint sequence.
#[derive(Clone, Debug)]
pub struct AirwayWaypointRow {
    pub route_identifier: String,
    pub sequence: u16,
    /// Two-character ARINC waypoint description code; index 1 == `'E'`
    /// marks end-of-route (spec §4.6).
    pub waypoint_description_code: [u8; 2],
    pub fix: FixKey,
    pub position: Coordinate,
    /// `H`/`L`/`B`/blank flight-level column.
    pub flight_level: u8,
    /// blank/`F`/`B` direction restriction column.
    pub direction_restriction: u8,
    pub minimum_altitude: Option<VerticalDistance>,
    pub maximum_altitude: Option<VerticalDistance>,
}

fn map_level(code: u8) -> AirwayLevel {
    match code {
        b'H' => AirwayLevel::Jet,
        b'L' => AirwayLevel::Victor,
        _ => AirwayLevel::Both,
    }
}

fn map_direction(code: u8) -> DirectionRestriction {
    match code {
        b'F' => DirectionRestriction::Forward,
        b'B' => DirectionRestriction::Backward,
        _ => DirectionRestriction::None,
    }
}

fn is_end_of_route(row: &AirwayWaypointRow) -> bool {
    row.waypoint_description_code[1] == b'E'
}

/// Stitches an ordered stream of [`AirwayWaypointRow`]s into directed
/// [`AirwaySegment`] edges, dropping segments whose endpoints are farther
/// apart than `max_segment_length` (spec §4.6, "known-borked geometry").
pub struct AirwayStitcher {
    max_segment_length: Length,
    previous: Option<AirwayWaypointRow>,
    fragment: u16,
    fragment_sequence: u16,
}

impl AirwayStitcher {
    pub fn new(max_segment_length: Length) -> Self {
        Self {
            max_segment_length,
            previous: None,
            fragment: 1,
            fragment_sequence: 1,
        }
    }

    /// Feeds one row, returning the edge it completes, if any.
    pub fn push(&mut self, row: AirwayWaypointRow) -> Option<AirwaySegment> {
        let Some(previous) = self.previous.take() else {
            self.previous = Some(row);
            return None;
        };

        let name_change = previous.route_identifier != row.route_identifier;
        let previous_end_of_route = is_end_of_route(&previous);

        if name_change {
            self.fragment = 1;
            self.fragment_sequence = 1;
            self.previous = Some(row);
            return None;
        }

        if previous_end_of_route {
            self.fragment += 1;
            self.fragment_sequence = 1;
            self.previous = Some(row);
            return None;
        }

        let segment = self.build_segment(&previous, &row);
        self.fragment_sequence += 1;
        self.previous = Some(row);
        segment
    }

    /// Flushes any pending row. Airways never emit a trailing edge for the
    /// last row alone, so this exists only to reset state between sources.
    pub fn finish(&mut self) {
        self.previous = None;
        self.fragment = 1;
        self.fragment_sequence = 1;
    }

    fn build_segment(&self, from: &AirwayWaypointRow, to: &AirwayWaypointRow) -> Option<AirwaySegment> {
        let distance = from.position.dist(&to.position);
        if distance.to_si() > self.max_segment_length.to_si() {
            return None;
        }

        let mut rect = Rectangle::seeded_at(from.position);
        rect.extend(to.position);

        Some(AirwaySegment {
            name: to.route_identifier.clone(),
            fragment: self.fragment,
            sequence: self.fragment_sequence,
            from_fix: from.fix.clone(),
            to_fix: to.fix.clone(),
            level: map_level(to.flight_level),
            direction_restriction: map_direction(to.direction_restriction),
            minimum_altitude: to.minimum_altitude,
            maximum_altitude: to.maximum_altitude,
            rect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Region;

    fn row(name: &str, sequence: u16, end_of_route: bool, ident: &str) -> AirwayWaypointRow {
        AirwayWaypointRow {
            route_identifier: name.into(),
            sequence,
            waypoint_description_code: [b' ', if end_of_route { b'E' } else { b'A' }],
            fix: FixKey::new(ident, Region::Enroute),
            position: Coordinate::new(0.0, f64::from(sequence)),
            flight_level: b'B',
            direction_restriction: b' ',
            minimum_altitude: None,
            maximum_altitude: None,
        }
    }

    #[test]
    fn fragments_split_on_end_of_route_and_name_change() {
        let mut stitcher = AirwayStitcher::new(Length::nm(800.0));
        let mut segments = Vec::new();

        for (name, seq, eor) in [
            ("N1", 1, false),
            ("N1", 2, true),
            ("N1", 3, false),
            ("N1", 4, true),
            ("N2", 1, false),
            ("N2", 2, true),
        ] {
            if let Some(segment) = stitcher.push(row(name, seq, eor, &format!("{name}-{seq}"))) {
                segments.push(segment);
            }
        }

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].name, "N1");
        assert_eq!(segments[0].fragment, 1);
        assert_eq!(segments[0].sequence, 1);
        assert_eq!(segments[1].name, "N1");
        assert_eq!(segments[1].fragment, 2);
        assert_eq!(segments[1].sequence, 1);
        assert_eq!(segments[2].name, "N2");
        assert_eq!(segments[2].fragment, 1);
    }

    #[test]
    fn drops_segments_longer_than_the_borked_threshold() {
        let mut stitcher = AirwayStitcher::new(Length::nm(1.0));
        stitcher.push(row("N1", 1, false, "A"));
        let segment = stitcher.push(row("N1", 2, false, "B"));
        assert!(segment.is_none());
    }
}
