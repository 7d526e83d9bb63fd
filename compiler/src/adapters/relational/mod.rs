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

//! Relational Source Adapter (spec §4.3): streams a sibling SQLite database,
//! attached by the caller under a logical schema name (e.g. `ATTACH DATABASE
//! ? AS src`), straight into [`StagingRow`]s via prepared-statement cursors.
//!
//! Airways are stitched while the cursor streams (spec §4.12 step 6, "direct
//! write") because every row already carries its own waypoint position —
//! unlike the binary/text adapters, which stage raw rows for a later
//! resolver pass.

use log::warn;
use rusqlite::{Connection, Row};

use crate::adapters::StagingRow;
use crate::core::VerticalDistance;
use crate::error::Error;
use crate::geom::Coordinate;
use crate::measurements::{Altitude, Angle, Length};
use crate::model::{
    Airport, AltitudeConstraint, FixKey, PathTermination, Procedure, ProcedureKind, Region,
    Runway, TurnDirection, WaypointUsage,
};
use crate::geometry::runway::{pair_ends, RunwayEndInput};
use crate::procedures::writer::{is_holding, FixResolver, ProcedureInput, ProcedureWriter};
use crate::resolver::airway::{AirwayStitcher, AirwayWaypointRow};

/// Reads `tbl_airports`, `tbl_runways`, `tbl_airways`, and the three
/// procedure tables (`tbl_iaps`, `tbl_sids`, `tbl_stars`) of one attached
/// source database.
pub struct RelationalAdapter<F> {
    procedures: ProcedureWriter<F>,
    airways: AirwayStitcher,
    runway_airport: Option<String>,
    runway_ends: Vec<RunwayEndInput>,
}

impl<F: FixResolver> RelationalAdapter<F> {
    pub fn new(resolver: F, max_airway_segment_length: Length) -> Self {
        Self {
            procedures: ProcedureWriter::new(resolver),
            airways: AirwayStitcher::new(max_airway_segment_length),
            runway_airport: None,
            runway_ends: Vec::new(),
        }
    }

    /// Flushes any accumulated runway pairing and procedure. Must be called
    /// once every table has been read.
    pub fn finish(&mut self, on_row: &mut dyn FnMut(StagingRow)) {
        self.flush_runways(on_row);
        self.procedures.finish(&mut |p| on_row(StagingRow::Procedure(p)));
        self.airways.finish();
    }

    pub fn read_airports(
        &self,
        conn: &Connection,
        schema: &str,
        on_row: &mut dyn FnMut(StagingRow),
        on_error: &mut dyn FnMut(&str, &str, &str),
    ) -> Result<(), Error> {
        let sql = format!(
            "SELECT airport_identifier, icao_code, airport_name, iata_designator, \
             airport_ref_latitude, airport_ref_longitude, elevation \
             FROM {schema}.tbl_airports ORDER BY airport_identifier"
        );
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            match map_airport_row(row) {
                Ok(airport) => on_row(StagingRow::Airport(airport)),
                Err(e) => report(on_error, "tbl_airports", &e.to_string()),
            }
        }
        Ok(())
    }

    pub fn read_runways(
        &mut self,
        conn: &Connection,
        schema: &str,
        on_row: &mut dyn FnMut(StagingRow),
        on_error: &mut dyn FnMut(&str, &str, &str),
    ) -> Result<(), Error> {
        let sql = format!(
            "SELECT airport_identifier, runway_identifier, runway_latitude, runway_longitude, \
             runway_true_bearing, runway_length, runway_width, landing_threshold_elevation, \
             displaced_threshold, surface_code \
             FROM {schema}.tbl_runways ORDER BY airport_identifier, runway_identifier"
        );
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let airport_ident: String = row.get("airport_identifier")?;
            match map_runway_end_row(row) {
                Ok(end) => {
                    if self.runway_airport.as_deref() != Some(airport_ident.as_str()) {
                        self.flush_runways(on_row);
                        self.runway_airport = Some(airport_ident);
                    }
                    self.runway_ends.push(end);
                }
                Err(e) => report(on_error, "tbl_runways", &e.to_string()),
            }
        }
        Ok(())
    }

    fn flush_runways(&mut self, on_row: &mut dyn FnMut(StagingRow)) {
        let Some(airport_ident) = self.runway_airport.take() else {
            return;
        };
        let ends = std::mem::take(&mut self.runway_ends);
        let Some(reference) = ends.first().map(|end| end.threshold) else {
            return;
        };

        let (runways, _rect) = pair_ends(ends, reference);
        for mut runway in runways {
            runway.airport_ident = airport_ident.clone();
            on_row(StagingRow::Runway(runway));
        }
    }

    /// Direct-write airways (spec §4.12 step 6): stitches and emits segments
    /// as the cursor streams, without going through staging.
    pub fn read_airways(
        &mut self,
        conn: &Connection,
        schema: &str,
        on_row: &mut dyn FnMut(StagingRow),
        on_error: &mut dyn FnMut(&str, &str, &str),
    ) -> Result<(), Error> {
        let sql = format!(
            "SELECT route_identifier, seqno, waypoint_description_code, flightlevel, \
             direction_restriction, minimum_altitude1, maximum_altitude, center_waypoint, \
             center_waypoint_latitude, center_waypoint_longitude \
             FROM {schema}.tbl_airways ORDER BY route_identifier, seqno"
        );
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            match map_airway_row(row) {
                Ok(airway_row) => {
                    if let Some(segment) = self.airways.push(airway_row) {
                        on_row(StagingRow::AirwaySegment(segment));
                    }
                }
                Err(e) => report(on_error, "tbl_airways", &e.to_string()),
            }
        }
        Ok(())
    }

    /// Reads one of the three procedure tables, tagging every row with
    /// `kind` (spec §4.3's per-airport boundary detection happens inside
    /// [`ProcedureWriter`]).
    pub fn read_procedures(
        &mut self,
        conn: &Connection,
        schema: &str,
        table: &str,
        kind: ProcedureKind,
        on_row: &mut dyn FnMut(StagingRow),
        on_error: &mut dyn FnMut(&str, &str, &str),
    ) -> Result<(), Error> {
        let sql = format!(
            "SELECT airport_identifier, procedure_identifier, transition_identifier, seqno, \
             center_waypoint, center_waypoint_latitude, center_waypoint_longitude, \
             recommanded_navaid, path_termination, turn_direction, theta, rho, magnetic_course, \
             altitude_description, altitude1, altitude2, transition_altitude, \
             speed_limit_description, speed_limit \
             FROM {schema}.{table} ORDER BY airport_identifier, procedure_identifier, seqno"
        );
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            match map_procedure_row(row, table, kind) {
                Ok(input) => self.procedures.push(input, &mut |p: Procedure| on_row(StagingRow::Procedure(p))),
                Err(e) => report(on_error, table, &e.to_string()),
            }
        }
        Ok(())
    }
}

fn report(on_error: &mut dyn FnMut(&str, &str, &str), table: &str, message: &str) {
    warn!("relational/{table}: {message}");
    on_error("relational", table, message);
}

fn map_airport_row(row: &Row) -> Result<Airport, Error> {
    let ident: String = row.get("airport_identifier")?;
    let icao_region: String = row.get("icao_code")?;
    let name: String = row.get("airport_name")?;
    let iata: Option<String> = row.get("iata_designator")?;
    let latitude: f64 = row.get("airport_ref_latitude")?;
    let longitude: f64 = row.get("airport_ref_longitude")?;
    let elevation: f64 = row.get("elevation")?;

    Ok(Airport {
        ident,
        icao_region,
        name,
        coordinate: Coordinate::new(latitude, longitude),
        elevation: Altitude::ft(elevation as f32),
        iata,
    })
}

fn map_runway_end_row(row: &Row) -> Result<RunwayEndInput, Error> {
    let identifier: String = row.get("runway_identifier")?;
    let designator = identifier.strip_prefix("RW").unwrap_or(&identifier).to_string();
    let latitude: f64 = row.get("runway_latitude")?;
    let longitude: f64 = row.get("runway_longitude")?;
    let bearing: f64 = row.get("runway_true_bearing")?;
    let length: f64 = row.get("runway_length")?;
    let width: f64 = row.get("runway_width")?;
    let threshold_elevation: Option<f64> = row.get("landing_threshold_elevation")?;
    let displaced_threshold: Option<f64> = row.get("displaced_threshold")?;
    let surface: Option<String> = row.get("surface_code")?;

    Ok(RunwayEndInput {
        designator,
        threshold: Coordinate::new(latitude, longitude),
        bearing_true: Angle::t(bearing as f32),
        length: Length::ft(length as f32),
        width: Length::ft(width as f32),
        surface,
        threshold_elevation: threshold_elevation.map(|ft| Length::ft(ft as f32)),
        displaced_threshold: displaced_threshold.map(|ft| Length::ft(ft as f32)),
    })
}

fn map_flight_level(code: Option<String>) -> u8 {
    match code.as_deref() {
        Some("H") => b'H',
        Some("L") => b'L',
        _ => b'B',
    }
}

fn map_direction_restriction(code: Option<String>) -> u8 {
    match code.as_deref() {
        Some("F") => b'F',
        Some("B") => b'B',
        _ => b' ',
    }
}

fn map_altitude_feet(feet: Option<f64>) -> Option<VerticalDistance> {
    feet.filter(|ft| *ft > 0.0).map(|ft| VerticalDistance::Altitude(ft as u16))
}

fn map_airway_row(row: &Row) -> Result<AirwayWaypointRow, Error> {
    let route_identifier: String = row.get("route_identifier")?;
    let sequence: i64 = row.get("seqno")?;
    let description_code: Option<String> = row.get("waypoint_description_code")?;
    let is_end_of_route = description_code.as_deref().and_then(|c| c.chars().nth(1)) == Some('E');
    let flightlevel: Option<String> = row.get("flightlevel")?;
    let direction_restriction: Option<String> = row.get("direction_restriction")?;
    let minimum_altitude1: Option<f64> = row.get("minimum_altitude1")?;
    let maximum_altitude: Option<f64> = row.get("maximum_altitude")?;
    let fix_ident: String = row.get("center_waypoint")?;
    let latitude: f64 = row.get("center_waypoint_latitude")?;
    let longitude: f64 = row.get("center_waypoint_longitude")?;

    Ok(AirwayWaypointRow {
        route_identifier,
        sequence: sequence as u16,
        waypoint_description_code: [b' ', if is_end_of_route { b'E' } else { b' ' }],
        fix: FixKey::new(fix_ident, Region::Enroute),
        position: Coordinate::new(latitude, longitude),
        flight_level: map_flight_level(flightlevel),
        direction_restriction: map_direction_restriction(direction_restriction),
        minimum_altitude: map_altitude_feet(minimum_altitude1),
        maximum_altitude: map_altitude_feet(maximum_altitude),
    })
}

fn map_path_termination(code: &str) -> PathTermination {
    match code {
        "IF" => PathTermination::InitialFix,
        "TF" => PathTermination::TrackToFix,
        "CF" => PathTermination::CourseToFix,
        "DF" => PathTermination::DirectToFix,
        "FA" => PathTermination::FixToAltitude,
        "CA" => PathTermination::CourseToAltitude,
        "VA" => PathTermination::HeadingToAltitude,
        "VM" => PathTermination::HeadingToManual,
        "VI" => PathTermination::HeadingToIntercept,
        "VR" => PathTermination::HeadingToRadial,
        "CR" => PathTermination::CourseToRadial,
        "CD" => PathTermination::CourseToDmeDistance,
        "AF" => PathTermination::ArcToFix,
        "RF" => PathTermination::RadiusToFix,
        "PI" => PathTermination::ProcedureTurn,
        "HM" => PathTermination::HoldToManual,
        "HA" => PathTermination::HoldToAltitude,
        "HF" => PathTermination::HoldToFix,
        _ => PathTermination::TrackToFix,
    }
}

fn map_turn_direction(code: Option<&str>) -> Option<TurnDirection> {
    match code {
        Some("L") => Some(TurnDirection::Left),
        Some("R") => Some(TurnDirection::Right),
        Some("E") | None => Some(TurnDirection::Either),
        _ => Some(TurnDirection::Either),
    }
}

fn map_altitude_constraint(
    description: Option<&str>,
    altitude1: Option<f64>,
    altitude2: Option<f64>,
) -> Option<AltitudeConstraint> {
    let a1 = map_altitude_feet(altitude1)?;
    match description {
        Some("+") => Some(AltitudeConstraint::AtOrAbove(a1)),
        Some("-") => Some(AltitudeConstraint::AtOrBelow(a1)),
        Some("B") => {
            let a2 = map_altitude_feet(altitude2)?;
            Some(AltitudeConstraint::Between(a1, a2))
        }
        _ => Some(AltitudeConstraint::At(a1)),
    }
}

fn map_procedure_row(row: &Row, _table: &str, kind: ProcedureKind) -> Result<ProcedureInput, Error> {
    let airport_ident: String = row.get("airport_identifier")?;
    let procedure_ident: String = row.get("procedure_identifier")?;
    let transition_ident: Option<String> = row.get("transition_identifier")?;
    let sequence: i64 = row.get("seqno")?;
    let fix_ident: String = row.get("center_waypoint")?;
    let latitude: Option<f64> = row.get("center_waypoint_latitude")?;
    let longitude: Option<f64> = row.get("center_waypoint_longitude")?;
    let recommended_navaid_ident: Option<String> = row.get("recommanded_navaid")?;
    let path_termination_code: String = row.get("path_termination")?;
    let turn_direction_code: Option<String> = row.get("turn_direction")?;
    let theta: Option<f64> = row.get("theta")?;
    let rho: Option<f64> = row.get("rho")?;
    let magnetic_course: Option<f64> = row.get("magnetic_course")?;
    let altitude_description: Option<String> = row.get("altitude_description")?;
    let altitude1: Option<f64> = row.get("altitude1")?;
    let altitude2: Option<f64> = row.get("altitude2")?;
    let transition_altitude: Option<f64> = row.get("transition_altitude")?;
    let speed_limit_description: Option<String> = row.get("speed_limit_description")?;
    let speed_limit: Option<f64> = row.get("speed_limit")?;

    let path_termination = map_path_termination(&path_termination_code);
    let fix_region = Region::TerminalArea(airport_ident.clone());
    let fix_coordinate = match (latitude, longitude) {
        (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
        _ => None,
    };

    // §4.3: the source's route-distance/holding-time column is dual-purpose;
    // for holding legs it's a time, not a distance, so it's read into
    // `holding_time_minutes` instead of being misrepresented as a Length.
    let (rho, holding_time_minutes) = if is_holding(&path_termination) {
        (None, rho.map(|v| v as f32))
    } else {
        (rho.map(Length::nm), None)
    };

    Ok(ProcedureInput {
        airport_ident,
        kind,
        procedure_ident,
        transition_ident,
        sequence: sequence as u16,
        fix_ident: fix_ident.clone(),
        fix_region: fix_region.clone(),
        fix_coordinate,
        recommended_navaid_ident,
        recommended_navaid_region: Some(fix_region),
        recommended_navaid_coordinate: None,
        theta: theta.map(|v| Angle::t(v as f32)),
        rho,
        course: magnetic_course.map(|v| Angle::m(v as f32)),
        path_termination,
        turn_direction: map_turn_direction(turn_direction_code.as_deref()),
        altitude: map_altitude_constraint(altitude_description.as_deref(), altitude1, altitude2),
        speed_limit: speed_limit.map(|v| v as u16),
        speed_limit_description,
        transition_altitude: map_altitude_feet(transition_altitude),
        holding_time_minutes,
        holding_context: None,
    })
}

#[allow(dead_code)]
fn unused_waypoint_usage_hint() -> WaypointUsage {
    // Never constructed here: the relational tables this adapter reads
    // carry no standalone waypoint table (spec §4.3 only lists airports,
    // runways, airways, and the three procedure tables).
    WaypointUsage::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysKnown;
    impl FixResolver for AlwaysKnown {
        fn resolve(&mut self, ident: &str, region: &Region, _coordinate: Option<Coordinate>) -> crate::procedures::writer::ResolvedFix {
            crate::procedures::writer::ResolvedFix::Known(FixKey::new(ident, region.clone()))
        }
    }

    fn setup_source(conn: &Connection) {
        conn.execute_batch(
            "CREATE TABLE tbl_airports (airport_identifier TEXT, icao_code TEXT, airport_name TEXT, \
             iata_designator TEXT, airport_ref_latitude REAL, airport_ref_longitude REAL, elevation REAL);
             INSERT INTO tbl_airports VALUES ('KJFK', 'K6', 'JOHN F KENNEDY INTL', 'JFK', 40.64, -73.78, 13.0);

             CREATE TABLE tbl_runways (airport_identifier TEXT, runway_identifier TEXT, runway_latitude REAL, \
             runway_longitude REAL, runway_true_bearing REAL, runway_length REAL, runway_width REAL, \
             landing_threshold_elevation REAL, displaced_threshold REAL, surface_code TEXT);
             INSERT INTO tbl_runways VALUES ('KJFK', 'RW04L', 40.6206, -73.7789, 44.0, 12079, 150, 13, 0, 'CON');
             INSERT INTO tbl_runways VALUES ('KJFK', 'RW22R', 40.6446, -73.7558, 224.0, 12079, 150, 9, 0, 'CON');

             CREATE TABLE tbl_airways (route_identifier TEXT, seqno INTEGER, waypoint_description_code TEXT, \
             flightlevel TEXT, direction_restriction TEXT, minimum_altitude1 REAL, maximum_altitude REAL, \
             center_waypoint TEXT, center_waypoint_latitude REAL, center_waypoint_longitude REAL);
             INSERT INTO tbl_airways VALUES ('UL995', 1, ' A B', 'H', ' ', 8000, 20000, 'DHE', 53.0, 8.0);
             INSERT INTO tbl_airways VALUES ('UL995', 2, ' E B', 'H', ' ', 8000, 20000, 'GOSIL', 53.5, 8.5);",
        )
        .unwrap();
    }

    #[test]
    fn reads_airport_and_pairs_runways() {
        let conn = Connection::open_in_memory().unwrap();
        setup_source(&conn);

        let mut adapter = RelationalAdapter::new(AlwaysKnown, Length::nm(800.0));
        let mut rows = Vec::new();
        let mut errors = Vec::new();

        adapter
            .read_airports(&conn, "main", &mut |r| rows.push(r), &mut |a, t, m| errors.push(format!("{a}/{t}: {m}")))
            .unwrap();
        adapter
            .read_runways(&conn, "main", &mut |r| rows.push(r), &mut |a, t, m| errors.push(format!("{a}/{t}: {m}")))
            .unwrap();
        adapter.finish(&mut |r| rows.push(r));

        assert!(errors.is_empty(), "{errors:?}");
        assert!(matches!(&rows[0], StagingRow::Airport(a) if a.ident == "KJFK"));
        assert!(rows.iter().any(|r| matches!(r, StagingRow::Runway(rw) if rw.airport_ident == "KJFK")));
    }

    #[test]
    fn direct_writes_airway_segments_while_streaming() {
        let conn = Connection::open_in_memory().unwrap();
        setup_source(&conn);

        let mut adapter = RelationalAdapter::new(AlwaysKnown, Length::nm(800.0));
        let mut rows = Vec::new();
        let mut errors = Vec::new();

        adapter
            .read_airways(&conn, "main", &mut |r| rows.push(r), &mut |a, t, m| errors.push(format!("{a}/{t}: {m}")))
            .unwrap();
        adapter.finish(&mut |r| rows.push(r));

        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(rows.len(), 1);
        assert!(matches!(&rows[0], StagingRow::AirwaySegment(seg) if seg.name == "UL995"));
    }
}
