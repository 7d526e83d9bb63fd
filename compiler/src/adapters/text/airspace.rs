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

//! Stateful builder that turns a canonically-ordered stream of controlled-
//! and restrictive-airspace boundary records into [`Airspace`] polygons
//! (spec §3, §4.3), mirroring [`crate::procedures::writer::ProcedureWriter`]'s
//! boundary-flush shape: each record is one vertex or arc segment of a
//! boundary, linked by `seq_nr`/`cont_nr`/`multi_cd`, and `bdry_via`'s
//! `return_to_origin` flag marks the record that closes it.

use arinc424::fields::{ArspType, BoundaryPath, LowerUpperLimit, RestrictiveType, UnitIndicator};
use arinc424::records::{ControlledAirspace, RestrictiveAirspace};

use crate::core::VerticalDistance;
use crate::geom::{normalize_course, Coordinate};
use crate::measurements::{Angle, Length};
use crate::model::{Airspace, AirspaceClassification, AirspaceType};

/// Number of interpolated points used per 90 degrees of arc sweep, matching
/// the ILS feather's geodesic tessellation granularity (spec §4.7).
const ARC_POINTS_PER_QUADRANT: u32 = 6;

/// One record's contribution to the boundary, reduced to what both
/// `ControlledAirspace` and `RestrictiveAirspace` carry in common.
struct AirspaceRecord {
    boundary: Boundary,
    airspace_type: AirspaceType,
    classification: Option<AirspaceClassification>,
    name: Option<String>,
    path: BoundaryPath,
    return_to_origin: bool,
    point: Option<Coordinate>,
    arc_center: Option<Coordinate>,
    arc_radius: Option<Length>,
    floor: Option<VerticalDistance>,
    ceiling: Option<VerticalDistance>,
}

#[derive(Eq, PartialEq, Clone, Debug)]
struct Boundary {
    icao_code: String,
    designation: String,
    multi_cd: String,
}

struct BoundarySegment {
    path: BoundaryPath,
    end_point: Coordinate,
    arc_center: Option<Coordinate>,
    arc_radius: Option<Length>,
}

struct Pending {
    boundary: Boundary,
    name: String,
    airspace_type: AirspaceType,
    classification: Option<AirspaceClassification>,
    floor: VerticalDistance,
    ceiling: VerticalDistance,
    start_point: Coordinate,
    segments: Vec<BoundarySegment>,
}

/// Accumulates boundary records for the current airspace and flushes a
/// complete [`Airspace`] whenever the `(icao_code, designation, multi_cd)`
/// key changes or a record's `return_to_origin` flag closes the boundary.
pub struct AirspaceBuilder {
    pending: Option<Pending>,
}

impl AirspaceBuilder {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn push_controlled(
        &mut self,
        r: &ControlledAirspace,
        on_airspace: &mut dyn FnMut(Airspace),
    ) -> Result<(), crate::error::Error> {
        let point = match (r.latitude, r.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat.as_decimal()?, lon.as_decimal()?)),
            _ => None,
        };
        let arc_center = match (r.arc_origin_latitude, r.arc_origin_longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat.as_decimal()?, lon.as_decimal()?)),
            _ => None,
        };

        self.push(
            AirspaceRecord {
                boundary: Boundary {
                    icao_code: r.icao_code.as_str().to_string(),
                    designation: r.arsp_cntr.as_str().to_string(),
                    multi_cd: r.multi_cd.as_str().to_string(),
                },
                airspace_type: controlled_type(r.arsp_type),
                classification: parse_classification(r.arsp_class.map(|c| c.as_str())),
                name: r.arsp_name.map(|n| n.as_str().trim().to_string()),
                path: r.bdry_via.path,
                return_to_origin: r.bdry_via.return_to_origin,
                point,
                arc_center,
                arc_radius: r.arc_dist.map(|d| d.dist()).transpose()?.map(Length::nm),
                floor: r.lower_limit.and_then(|l| map_airspace_limit(l, r.lower_unit_indicator)),
                ceiling: r.upper_limit.and_then(|l| map_airspace_limit(l, r.upper_unit_indicator)),
            },
            on_airspace,
        );
        Ok(())
    }

    pub fn push_restrictive(
        &mut self,
        r: &RestrictiveAirspace,
        on_airspace: &mut dyn FnMut(Airspace),
    ) -> Result<(), crate::error::Error> {
        let point = match (r.latitude, r.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat.as_decimal()?, lon.as_decimal()?)),
            _ => None,
        };
        let arc_center = match (r.arc_origin_latitude, r.arc_origin_longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat.as_decimal()?, lon.as_decimal()?)),
            _ => None,
        };

        self.push(
            AirspaceRecord {
                boundary: Boundary {
                    icao_code: r.icao_code.as_str().to_string(),
                    designation: r.restrictive_designation.as_str().to_string(),
                    multi_cd: r.multi_cd.as_str().to_string(),
                },
                airspace_type: restrictive_type(r.restrictive_type),
                classification: None,
                name: r.arsp_name.map(|n| n.as_str().trim().to_string()),
                path: r.bdry_via.path,
                return_to_origin: r.bdry_via.return_to_origin,
                point,
                arc_center,
                arc_radius: r.arc_dist.map(|d| d.dist()).transpose()?.map(Length::nm),
                floor: r.lower_limit.and_then(|l| map_airspace_limit(l, r.lower_unit_indicator)),
                ceiling: r.upper_limit.and_then(|l| map_airspace_limit(l, r.upper_unit_indicator)),
            },
            on_airspace,
        );
        Ok(())
    }

    /// Flushes any remaining accumulated boundary. Must be called once the
    /// input stream is exhausted.
    pub fn finish(&mut self, on_airspace: &mut dyn FnMut(Airspace)) {
        self.flush(on_airspace);
    }

    fn push(&mut self, record: AirspaceRecord, on_airspace: &mut dyn FnMut(Airspace)) {
        if self.pending.as_ref().map(|p| &p.boundary) != Some(&record.boundary) {
            self.flush(on_airspace);
            self.pending = Some(Pending {
                boundary: record.boundary.clone(),
                name: record.name.clone().unwrap_or_default(),
                airspace_type: record.airspace_type,
                classification: record.classification,
                floor: record.floor.unwrap_or(VerticalDistance::Gnd),
                ceiling: record.ceiling.unwrap_or(VerticalDistance::Unlimited),
                start_point: record.point.unwrap_or(Coordinate::new(0.0, 0.0)),
                segments: Vec::new(),
            });
        }

        if let Some(pending) = &mut self.pending {
            if let Some(name) = &record.name {
                if !name.is_empty() {
                    pending.name = name.clone();
                }
            }
            if let Some(point) = record.point {
                pending.segments.push(BoundarySegment {
                    path: record.path,
                    end_point: point,
                    arc_center: record.arc_center,
                    arc_radius: record.arc_radius,
                });
            }
        }

        if record.return_to_origin {
            self.flush(on_airspace);
        }
    }

    fn flush(&mut self, on_airspace: &mut dyn FnMut(Airspace)) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        if pending.segments.is_empty() {
            return;
        }

        on_airspace(build(pending));
    }
}

impl Default for AirspaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn build(pending: Pending) -> Airspace {
    let exterior = build_polygon(&pending);
    Airspace {
        name: pending.name,
        airspace_type: pending.airspace_type,
        classification: pending.classification,
        floor: pending.floor,
        ceiling: pending.ceiling,
        polygon: geo::Polygon::new(exterior, vec![]),
    }
}

fn build_polygon(pending: &Pending) -> geo::LineString<f64> {
    if let [segment] = pending.segments.as_slice() {
        if segment.path == BoundaryPath::Circle {
            if let (Some(center), Some(radius)) = (segment.arc_center, segment.arc_radius) {
                return build_circle(center, radius);
            }
        }
    }

    let mut points = vec![pending.start_point];
    let mut previous = pending.start_point;
    for segment in &pending.segments {
        match segment.path {
            BoundaryPath::ClockwiseArc | BoundaryPath::CounterClockwiseArc => match segment.arc_center {
                Some(center) => points.extend(interpolate_arc(
                    center,
                    previous,
                    segment.end_point,
                    segment.path == BoundaryPath::ClockwiseArc,
                )),
                None => points.push(segment.end_point),
            },
            BoundaryPath::GreatCircle | BoundaryPath::RhumbLine | BoundaryPath::Circle => {
                points.push(segment.end_point)
            }
        }
        previous = segment.end_point;
    }

    if points.first() != points.last() {
        if let Some(&first) = points.first() {
            points.push(first);
        }
    }

    geo::LineString::new(points.into_iter().map(geo::Coord::from).collect())
}

fn build_circle(center: Coordinate, radius: Length) -> geo::LineString<f64> {
    let total = ARC_POINTS_PER_QUADRANT * 4;
    let points: Vec<Coordinate> = (0..=total)
        .map(|i| {
            let bearing = 360.0 * i as f32 / total as f32;
            center.endpoint(Angle::t(bearing), radius)
        })
        .collect();

    geo::LineString::new(points.into_iter().map(geo::Coord::from).collect())
}

fn interpolate_arc(center: Coordinate, start: Coordinate, end: Coordinate, clockwise: bool) -> Vec<Coordinate> {
    let radius = center.dist(&start);
    let start_bearing = center.bearing(&start).normalized();
    let end_bearing = center.bearing(&end).normalized();
    let sweep = calculate_arc_sweep(start_bearing, end_bearing, clockwise);

    let steps = ((sweep.abs() / 90.0) * ARC_POINTS_PER_QUADRANT as f32).round().max(1.0) as u32;
    let step = sweep / steps as f32;

    (1..=steps)
        .map(|i| {
            let bearing = normalize_course(start_bearing + step * i as f32);
            center.endpoint(Angle::t(bearing), radius)
        })
        .collect()
}

/// Signed sweep in degrees from `start` to `end`, going the way `clockwise`
/// says rather than the shorter way.
fn calculate_arc_sweep(start: f32, end: f32, clockwise: bool) -> f32 {
    let sweep = end - start;
    if clockwise {
        if sweep < 0.0 {
            sweep + 360.0
        } else {
            sweep
        }
    } else if sweep > 0.0 {
        sweep - 360.0
    } else {
        sweep
    }
}

fn controlled_type(t: ArspType) -> AirspaceType {
    match t {
        ArspType::ClassC => AirspaceType::ClassC,
        ArspType::ControlArea => AirspaceType::Cta,
        ArspType::TerminalControlArea => AirspaceType::Tma,
        ArspType::RadarZone => AirspaceType::RadarZone,
        ArspType::ClassB => AirspaceType::ClassB,
        ArspType::RadioMandatoryZone => AirspaceType::Rmz,
        ArspType::TransponderMandatoryZone => AirspaceType::Tmz,
        ArspType::ControlZone => AirspaceType::Ctr,
    }
}

fn restrictive_type(t: RestrictiveType) -> AirspaceType {
    match t {
        RestrictiveType::Alert => AirspaceType::Alert,
        RestrictiveType::Caution => AirspaceType::Caution,
        RestrictiveType::Danger => AirspaceType::Danger,
        RestrictiveType::LongTermTFR => AirspaceType::TemporaryFlightRestriction,
        RestrictiveType::MOA => AirspaceType::Moa,
        RestrictiveType::NationalSecurityArea => AirspaceType::NationalSecurityArea,
        RestrictiveType::Prohibited => AirspaceType::Prohibited,
        RestrictiveType::Restricted => AirspaceType::Restricted,
        RestrictiveType::Training => AirspaceType::Training,
        RestrictiveType::Warning => AirspaceType::Warning,
        RestrictiveType::UnspecifiedOrUnknown => AirspaceType::Unspecified,
    }
}

/// Only controlled-airspace records carry a classification letter (A-G); the
/// restrictive-airspace record has no counterpart field (spec §9).
fn parse_classification(class: Option<&str>) -> Option<AirspaceClassification> {
    match class {
        Some("A") => Some(AirspaceClassification::A),
        Some("B") => Some(AirspaceClassification::B),
        Some("C") => Some(AirspaceClassification::C),
        Some("D") => Some(AirspaceClassification::D),
        Some("E") => Some(AirspaceClassification::E),
        Some("F") => Some(AirspaceClassification::F),
        Some("G") => Some(AirspaceClassification::G),
        _ => None,
    }
}

fn map_airspace_limit(limit: LowerUpperLimit, unit: Option<UnitIndicator>) -> Option<VerticalDistance> {
    match limit {
        LowerUpperLimit::Altitude(ft) => Some(match unit {
            Some(UnitIndicator::AboveGroundLevel) => VerticalDistance::Agl(ft as u16),
            _ => VerticalDistance::Msl(ft as u16),
        }),
        LowerUpperLimit::FlightLevel(fl) => Some(VerticalDistance::Fl(fl)),
        LowerUpperLimit::Ground => Some(VerticalDistance::Gnd),
        LowerUpperLimit::Unlimited => Some(VerticalDistance::Unlimited),
        LowerUpperLimit::MeanSeaLevel => Some(VerticalDistance::Msl(0)),
        LowerUpperLimit::NotSpecified | LowerUpperLimit::NOTAM => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTROLLED: &[u8] = b"SUSAUCK6TKJFK PAB  A00100     R N40394857W074144423N40413000W07409590000402450   GND  A07000MNEW YORK AREA A               676061703";
    const RESTRICTIVE: &[u8] = b"SUSAURK1MEEL A     A00101L    H N46200000W124215300                              11000M17999MEEL A MOA                     715681713";

    #[test]
    fn flushes_controlled_airspace_on_return_to_origin() {
        let record = ControlledAirspace::try_from(CONTROLLED).unwrap();
        let mut builder = AirspaceBuilder::new();
        let mut out = Vec::new();

        builder.push_controlled(&record, &mut |a| out.push(a)).unwrap();
        builder.finish(&mut |a| out.push(a));

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "NEW YORK AREA A");
        assert_eq!(out[0].airspace_type, AirspaceType::ClassB);
        assert_eq!(out[0].classification, Some(AirspaceClassification::B));
        assert_eq!(out[0].floor, VerticalDistance::Gnd);
        assert_eq!(out[0].ceiling, VerticalDistance::Msl(7000));
    }

    #[test]
    fn restrictive_airspace_has_no_classification() {
        let record = RestrictiveAirspace::try_from(RESTRICTIVE).unwrap();
        let mut builder = AirspaceBuilder::new();
        let mut out = Vec::new();

        builder.push_restrictive(&record, &mut |a| out.push(a)).unwrap();
        builder.finish(&mut |a| out.push(a));

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].airspace_type, AirspaceType::Moa);
        assert_eq!(out[0].classification, None);
        assert_eq!(out[0].floor, VerticalDistance::Msl(11000));
        assert_eq!(out[0].ceiling, VerticalDistance::Msl(17999));
    }

    #[test]
    fn arc_sweep_goes_the_requested_direction() {
        assert_eq!(calculate_arc_sweep(0.0, 90.0, true), 90.0);
        assert_eq!(calculate_arc_sweep(350.0, 10.0, true), 20.0);
        assert_eq!(calculate_arc_sweep(10.0, 350.0, false), -20.0);
    }
}
