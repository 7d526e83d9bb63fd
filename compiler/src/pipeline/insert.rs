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

//! Translates [`StagingRow`]s into rows in the final schema. Primary keys
//! are the store's own `INTEGER PRIMARY KEY` counters (spec §6); foreign
//! keys this insertion can resolve immediately (an airport's own ident, a
//! fix's ident+region against rows already loaded) are resolved here, the
//! rest wait for the cross-reference phase (spec §4.12 step 8).

use std::collections::HashMap;

use log::{debug, warn};
use rusqlite::{params, OptionalExtension, Transaction};

use crate::adapters::StagingRow;
use crate::core::VerticalDistance;
use crate::measurements::{Altitude, AltitudeUnit, Angle, AngleUnit, Length, LengthUnit};
use crate::model::{Airspace, Ils, Procedure, Region, Runway, RunwayEnd};
use crate::resolver::airway::AirwayWaypointRow;

/// Renders a polygon's exterior ring as WKT (spec §9: no GeoJSON serializer
/// is in this crate's default dependency set, same convention as the ILS
/// feather polygon).
fn polygon_wkt(polygon: &geo::Polygon<f64>) -> String {
    let points: Vec<String> = polygon.exterior().coords().map(|c| format!("{} {}", c.x, c.y)).collect();
    format!("POLYGON(({}))", points.join(", "))
}

fn feet_alt(value: Altitude) -> f64 {
    *value.convert_to(AltitudeUnit::Feet).value() as f64
}

fn feet_len(value: Length) -> f64 {
    *value.convert_to(LengthUnit::Feet).value() as f64
}

fn true_degrees(value: Angle) -> f64 {
    *value.convert_to(AngleUnit::True).value() as f64
}

/// Encodes a [`VerticalDistance`] as a short tagged string for the TEXT
/// altitude columns (airways, airspaces) that need to preserve the original
/// reference (FL/AGL/MSL/...) rather than resolve it to MSL feet.
fn encode_vertical_distance(value: Option<VerticalDistance>) -> Option<String> {
    value.map(|vd| match vd {
        VerticalDistance::Agl(n) => format!("AGL:{n}"),
        VerticalDistance::Altitude(n) => format!("ALT:{n}"),
        VerticalDistance::PressureAltitude(n) => format!("PA:{n}"),
        VerticalDistance::Fl(n) => format!("FL:{n}"),
        VerticalDistance::Gnd => "GND".to_string(),
        VerticalDistance::Msl(n) => format!("MSL:{n}"),
        VerticalDistance::Unlimited => "UNL".to_string(),
    })
}

fn decode_vertical_distance(text: &str) -> Option<VerticalDistance> {
    if text == "GND" {
        return Some(VerticalDistance::Gnd);
    }
    if text == "UNL" {
        return Some(VerticalDistance::Unlimited);
    }
    let (tag, value) = text.split_once(':')?;
    match tag {
        "AGL" => Some(VerticalDistance::Agl(value.parse().ok()?)),
        "ALT" => Some(VerticalDistance::Altitude(value.parse().ok()?)),
        "PA" => Some(VerticalDistance::PressureAltitude(value.parse().ok()?)),
        "FL" => Some(VerticalDistance::Fl(value.parse().ok()?)),
        "MSL" => Some(VerticalDistance::Msl(value.parse().ok()?)),
        _ => None,
    }
}

fn altitude_feet(value: Option<VerticalDistance>) -> Option<f64> {
    value.map(|vd| match vd {
        VerticalDistance::Agl(n) | VerticalDistance::Altitude(n) | VerticalDistance::Msl(n) => n as f64,
        VerticalDistance::PressureAltitude(n) => n as f64,
        VerticalDistance::Fl(n) => n as f64 * 100.0,
        VerticalDistance::Gnd => 0.0,
        VerticalDistance::Unlimited => f64::MAX,
    })
}

/// Writes [`StagingRow`]s into the store, caching airport ident→id lookups
/// within one load phase (every source's `load` runs inside a single
/// transaction, so the cache never goes stale across adapters).
pub struct Inserter<'a> {
    tx: &'a Transaction<'a>,
    airport_ids: HashMap<String, i64>,
}

impl<'a> Inserter<'a> {
    pub fn new(tx: &'a Transaction<'a>) -> Self {
        Self {
            tx,
            airport_ids: HashMap::new(),
        }
    }

    fn airport_id(&mut self, ident: &str) -> Option<i64> {
        if let Some(&id) = self.airport_ids.get(ident) {
            return Some(id);
        }
        let id: Option<i64> = self
            .tx
            .query_row("SELECT id FROM airports WHERE ident = ?1", params![ident], |r| r.get(0))
            .optional()
            .unwrap_or(None);
        if let Some(id) = id {
            self.airport_ids.insert(ident.to_string(), id);
        }
        id
    }

    fn fix_id(&self, table: &str, ident: &str, region: &Region) -> Option<i64> {
        self.tx
            .query_row(
                &format!("SELECT id FROM {table} WHERE ident = ?1 AND region = ?2"),
                params![ident, region.to_string()],
                |r| r.get(0),
            )
            .optional()
            .unwrap_or(None)
    }

    pub fn insert(&mut self, row: StagingRow) {
        let result = match row {
            StagingRow::Airport(a) => self.insert_airport(&a),
            StagingRow::Runway(r) => self.insert_runway(&r),
            StagingRow::Waypoint(w) => self.insert_waypoint(&w),
            StagingRow::NavAid(n) => self.insert_navaid(&n),
            StagingRow::Ils(i) => self.insert_ils(&i, None).map(|_| ()),
            StagingRow::Marker(m) => self.insert_marker(&m),
            StagingRow::AirwaySegment(s) => self.insert_airway_segment(&s),
            StagingRow::Procedure(p) => self.insert_procedure(&p),
            StagingRow::Airspace(a) => self.insert_airspace(&a),
        };
        if let Err(e) = result {
            warn!("failed to insert staging row: {e}");
        }
    }

    /// Deduplicates on `ident` (spec §4.12 step 5): the first source to name
    /// an airport wins and later duplicates are dropped rather than
    /// overwriting or erroring, backed by `idx_airports_ident`'s uniqueness.
    fn insert_airport(&mut self, a: &crate::model::Airport) -> rusqlite::Result<()> {
        if self.airport_ids.contains_key(&a.ident) {
            debug!("duplicate airport {} ignored", a.ident);
            return Ok(());
        }

        self.tx.execute(
            "INSERT OR IGNORE INTO airports (ident, icao_region, name, latitude, longitude, elevation_ft, iata)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                a.ident,
                a.icao_region,
                a.name,
                a.coordinate.latitude,
                a.coordinate.longitude,
                feet_alt(a.elevation),
                a.iata,
            ],
        )?;

        let id: i64 = self.tx.query_row("SELECT id FROM airports WHERE ident = ?1", params![a.ident], |r| r.get(0))?;
        self.airport_ids.insert(a.ident.clone(), id);
        Ok(())
    }

    fn insert_runway(&mut self, r: &Runway) -> rusqlite::Result<()> {
        let Some(airport_id) = self.airport_id(&r.airport_ident) else {
            warn!("runway for unknown airport {}", r.airport_ident);
            return Ok(());
        };

        self.tx.execute(
            "INSERT INTO runways (airport_id, length_ft, width_ft, surface) VALUES (?1, ?2, ?3, ?4)",
            params![airport_id, feet_len(r.length), feet_len(r.width), r.surface],
        )?;
        let runway_id = self.tx.last_insert_rowid();

        let primary_id = self.insert_runway_end(runway_id, &r.ends.0)?;
        let secondary_id = self.insert_runway_end(runway_id, &r.ends.1)?;
        self.tx.execute(
            "UPDATE runways SET primary_end_id = ?1, secondary_end_id = ?2 WHERE id = ?3",
            params![primary_id, secondary_id, runway_id],
        )?;
        self.tx
            .execute("UPDATE airports SET runway_count = runway_count + 1 WHERE id = ?1", params![airport_id])?;
        Ok(())
    }

    fn insert_runway_end(&mut self, runway_id: i64, end: &RunwayEnd) -> rusqlite::Result<i64> {
        self.tx.execute(
            "INSERT INTO runway_ends (runway_id, designator, latitude, longitude, bearing_true, \
             threshold_elevation_ft, displaced_threshold_ft, synthesized) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                runway_id,
                end.ident,
                end.threshold.latitude,
                end.threshold.longitude,
                true_degrees(end.bearing_true),
                end.threshold_elevation.map(feet_len),
                end.displaced_threshold.map(feet_len),
                end.synthesized as i64,
            ],
        )?;
        let end_id = self.tx.last_insert_rowid();

        if let Some(ils) = &end.ils {
            let ils_id = self.insert_ils(ils, Some(end_id))?;
            self.tx
                .execute("UPDATE runway_ends SET ils_id = ?1 WHERE id = ?2", params![ils_id, end_id])?;
        }
        Ok(end_id)
    }

    fn insert_waypoint(&mut self, w: &crate::model::Waypoint) -> rusqlite::Result<()> {
        let airport_id = w.terminal_area().and_then(|ident| self.airport_id(ident));
        self.tx.execute(
            "INSERT INTO waypoints (ident, region, latitude, longitude, usage, mag_var, airport_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                w.ident,
                w.region.to_string(),
                w.coordinate.latitude,
                w.coordinate.longitude,
                format!("{:?}", w.usage),
                w.mag_var.map(|v| v.degrees() as f64),
                airport_id,
            ],
        )?;
        Ok(())
    }

    fn insert_navaid(&mut self, n: &crate::model::NavAid) -> rusqlite::Result<()> {
        let airport_id = match &n.region {
            Region::TerminalArea(ident) => self.airport_id(ident),
            Region::Enroute => None,
        };
        let channel = n
            .tacan_channel
            .clone()
            .or_else(|| crate::passes::tacan::tacan_channel(n.kind, n.frequency));

        self.tx.execute(
            "INSERT INTO navaids (ident, kind, region, latitude, longitude, frequency, tacan_channel, \
             mag_var, range_nm, airport_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                n.ident,
                format!("{:?}", n.kind),
                n.region.to_string(),
                n.coordinate.latitude,
                n.coordinate.longitude,
                n.frequency,
                channel,
                n.mag_var.map(|v| v.degrees() as f64),
                n.range.map(|r| *r.convert_to(LengthUnit::NauticalMiles).value() as f64),
                airport_id,
            ],
        )?;
        Ok(())
    }

    fn insert_ils(&mut self, ils: &Ils, runway_end_id: Option<i64>) -> rusqlite::Result<i64> {
        self.tx.execute(
            "INSERT INTO ils (ident, runway_ident, runway_end_id, localizer_latitude, localizer_longitude, \
             localizer_course, localizer_width, glide_slope_angle, glide_slope_latitude, \
             glide_slope_longitude, frequency, category) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                ils.ident,
                ils.runway_ident,
                runway_end_id,
                ils.localizer_coordinate.latitude,
                ils.localizer_coordinate.longitude,
                true_degrees(ils.localizer_course),
                true_degrees(ils.localizer_width),
                ils.glide_slope_angle.map(true_degrees),
                ils.glide_slope_coordinate.map(|c| c.latitude),
                ils.glide_slope_coordinate.map(|c| c.longitude),
                ils.frequency,
                format!("{:?}", ils.category),
            ],
        )?;
        Ok(self.tx.last_insert_rowid())
    }

    fn insert_airspace(&mut self, a: &Airspace) -> rusqlite::Result<()> {
        self.tx.execute(
            "INSERT INTO airspaces (name, airspace_type, classification, floor, ceiling, polygon_geojson) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                a.name,
                format!("{:?}", a.airspace_type),
                a.classification.map(|c| format!("{c:?}")),
                encode_vertical_distance(Some(a.floor)),
                encode_vertical_distance(Some(a.ceiling)),
                polygon_wkt(&a.polygon),
            ],
        )?;
        Ok(())
    }

    fn insert_marker(&mut self, m: &crate::model::Marker) -> rusqlite::Result<()> {
        self.tx.execute(
            "INSERT INTO markers (ident, kind, latitude, longitude, ils_ident, altitude_ft) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                m.ident,
                format!("{:?}", m.kind),
                m.coordinate.latitude,
                m.coordinate.longitude,
                m.ils_ident,
                altitude_feet(m.altitude),
            ],
        )?;
        Ok(())
    }

    fn insert_airway_segment(&mut self, s: &crate::model::AirwaySegment) -> rusqlite::Result<()> {
        let from_id = self.fix_id("waypoints", &s.from_fix.ident, &s.from_fix.region);
        let to_id = self.fix_id("waypoints", &s.to_fix.ident, &s.to_fix.region);

        self.tx.execute(
            "INSERT INTO airways (name, fragment, sequence, from_waypoint_id, to_waypoint_id, level, \
             direction_restriction, minimum_altitude, maximum_altitude, rect_top_lat, rect_left_lon, \
             rect_bottom_lat, rect_right_lon) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            params![
                s.name,
                s.fragment,
                s.sequence,
                from_id,
                to_id,
                format!("{:?}", s.level),
                format!("{:?}", s.direction_restriction),
                encode_vertical_distance(s.minimum_altitude),
                encode_vertical_distance(s.maximum_altitude),
                s.rect.top_left.latitude,
                s.rect.top_left.longitude,
                s.rect.bottom_right.latitude,
                s.rect.bottom_right.longitude,
            ],
        )?;
        Ok(())
    }

    fn insert_procedure(&mut self, p: &Procedure) -> rusqlite::Result<()> {
        let Some(airport_id) = self.airport_id(&p.airport_ident) else {
            warn!("procedure for unknown airport {}", p.airport_ident);
            return Ok(());
        };

        self.tx.execute(
            "INSERT INTO procedures (airport_id, kind, ident, transition_ident) VALUES (?1, ?2, ?3, ?4)",
            params![airport_id, format!("{:?}", p.kind), p.ident, p.transition],
        )?;
        let procedure_id = self.tx.last_insert_rowid();
        if p.kind == crate::model::ProcedureKind::Approach {
            self.tx
                .execute("UPDATE airports SET approach_count = approach_count + 1 WHERE id = ?1", params![airport_id])?;
        }

        let fix_region = Region::TerminalArea(p.airport_ident.clone());
        for leg in &p.legs {
            let fix_waypoint_id = leg
                .fix
                .as_ref()
                .and_then(|fix| self.fix_id("waypoints", &fix.ident, &fix.region).or_else(|| self.fix_id("waypoints", &fix.ident, &fix_region)));
            let recommended_navaid_id = leg
                .recommended_navaid
                .as_ref()
                .and_then(|fix| self.fix_id("navaids", &fix.ident, &fix.region).or_else(|| self.fix_id("navaids", &fix.ident, &fix_region)));

            let (altitude_description, alt1, alt2) = match &leg.altitude {
                Some(crate::model::AltitudeConstraint::At(a)) => ("AT", Some(*a), None),
                Some(crate::model::AltitudeConstraint::AtOrAbove(a)) => ("AT_OR_ABOVE", Some(*a), None),
                Some(crate::model::AltitudeConstraint::AtOrBelow(a)) => ("AT_OR_BELOW", Some(*a), None),
                Some(crate::model::AltitudeConstraint::Between(a, b)) => ("BETWEEN", Some(*a), Some(*b)),
                None => ("", None, None),
            };

            let (fix_latitude, fix_longitude) = match leg.fix_coordinate {
                Some(coord) => (Some(coord.latitude), Some(coord.longitude)),
                None => (None, None),
            };

            self.tx.execute(
                "INSERT INTO procedure_legs (procedure_id, sequence, path_termination, fix_waypoint_id, \
                 fix_latitude, fix_longitude, recommended_navaid_id, theta, rho, course, turn_direction, \
                 altitude_description, altitude1_ft, altitude2_ft, speed_limit, speed_limit_description, \
                 transition_altitude, holding_time_minutes, holding_context) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)",
                params![
                    procedure_id,
                    leg.sequence,
                    format!("{:?}", leg.path_termination),
                    fix_waypoint_id,
                    fix_latitude,
                    fix_longitude,
                    recommended_navaid_id,
                    leg.theta.map(true_degrees),
                    leg.rho.map(|v| *v.convert_to(LengthUnit::NauticalMiles).value() as f64),
                    leg.course.map(true_degrees),
                    leg.turn_direction.map(|t| format!("{t:?}")),
                    altitude_description,
                    alt1.and_then(altitude_feet_one),
                    alt2.and_then(altitude_feet_one),
                    leg.speed_limit,
                    leg.speed_limit_description,
                    encode_vertical_distance(leg.transition_altitude),
                    leg.holding_time_minutes,
                    leg.holding_context,
                ],
            )?;
        }
        Ok(())
    }

    /// Stages raw per-waypoint airway rows from the binary/text adapters so
    /// they survive into the dedicated resolver phase (spec §4.12 step 6),
    /// which runs in a later transaction than `load`.
    pub fn stage_airway_rows(&self, rows: Vec<AirwayWaypointRow>) -> rusqlite::Result<()> {
        for row in rows {
            self.tx.execute(
                "INSERT INTO staging_airway_rows (route_identifier, sequence, end_of_route, fix_ident, \
                 fix_region, latitude, longitude, flight_level, direction_restriction, minimum_altitude, \
                 maximum_altitude) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    row.route_identifier,
                    row.sequence,
                    (row.waypoint_description_code[1] == b'E') as i64,
                    row.fix.ident,
                    row.fix.region.to_string(),
                    row.position.latitude,
                    row.position.longitude,
                    (row.flight_level as char).to_string(),
                    (row.direction_restriction as char).to_string(),
                    encode_vertical_distance(row.minimum_altitude),
                    encode_vertical_distance(row.maximum_altitude),
                ],
            )?;
        }
        Ok(())
    }
}

fn altitude_feet_one(vd: VerticalDistance) -> Option<f64> {
    altitude_feet(Some(vd))
}

/// Reads back and clears every row staged by [`Inserter::stage_airway_rows`],
/// in insertion order (spec §4.6: the stitcher requires its canonical
/// sequence order).
pub fn take_staged_airway_rows(tx: &Transaction<'_>) -> rusqlite::Result<Vec<AirwayWaypointRow>> {
    let rows = {
        let mut stmt = tx.prepare(
            "SELECT route_identifier, sequence, end_of_route, fix_ident, fix_region, latitude, longitude, \
             flight_level, direction_restriction, minimum_altitude, maximum_altitude \
             FROM staging_airway_rows ORDER BY id",
        )?;
        stmt.query_map([], |r| {
            let route_identifier: String = r.get(0)?;
            let sequence: i64 = r.get(1)?;
            let end_of_route: i64 = r.get(2)?;
            let fix_ident: String = r.get(3)?;
            let fix_region: String = r.get(4)?;
            let latitude: f64 = r.get(5)?;
            let longitude: f64 = r.get(6)?;
            let flight_level: String = r.get(7)?;
            let direction_restriction: String = r.get(8)?;
            let minimum_altitude: Option<String> = r.get(9)?;
            let maximum_altitude: Option<String> = r.get(10)?;

            Ok((
                route_identifier,
                sequence,
                end_of_route,
                fix_ident,
                fix_region,
                latitude,
                longitude,
                flight_level,
                direction_restriction,
                minimum_altitude,
                maximum_altitude,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?
    };

    tx.execute("DELETE FROM staging_airway_rows", [])?;

    Ok(rows
        .into_iter()
        .map(
            |(route_identifier, sequence, end_of_route, fix_ident, fix_region, latitude, longitude, flight_level, direction_restriction, minimum_altitude, maximum_altitude)| {
                use crate::geom::Coordinate;
                use crate::model::FixKey;

                let region = if fix_region == "ENRT" {
                    Region::Enroute
                } else {
                    Region::TerminalArea(fix_region)
                };

                AirwayWaypointRow {
                    route_identifier,
                    sequence: sequence as u16,
                    waypoint_description_code: [b' ', if end_of_route != 0 { b'E' } else { b' ' }],
                    fix: FixKey::new(fix_ident, region),
                    position: Coordinate::new(latitude, longitude),
                    flight_level: flight_level.bytes().next().unwrap_or(b' '),
                    direction_restriction: direction_restriction.bytes().next().unwrap_or(b' '),
                    minimum_altitude: minimum_altitude.and_then(|s| decode_vertical_distance(&s)),
                    maximum_altitude: maximum_altitude.and_then(|s| decode_vertical_distance(&s)),
                }
            },
        )
        .collect())
}
