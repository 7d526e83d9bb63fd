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

//! End-to-end: drives [`Pipeline`] over each source kind and inspects the
//! output database directly, rather than any one adapter's staging rows.

use navcompile::pipeline::{CompileOptions, CompileResult, Pipeline, ProgressSignal, Source, SourceFile};

fn airac_date() -> time::Date {
    time::Date::from_calendar_date(2024, time::Month::January, 25).unwrap()
}

struct TempDb {
    path: std::path::PathBuf,
}

impl TempDb {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("navcompile_test_{name}_{}.sqlite", std::process::id()));
        let _ = std::fs::remove_file(&path);
        Self { path }
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

// A single fixed-width ARINC 424 airport record, the same fixture the text
// adapter's own unit tests use.
const AIRPORT_RECORD: &[u8] = b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";

#[test]
fn compiles_a_text_source_into_a_queryable_airport() {
    let out = TempDb::new("text");

    let source = Source::Text {
        files: vec![SourceFile {
            name: "test.txt".to_string(),
            data: AIRPORT_RECORD.to_vec(),
        }],
    };
    let mut options = CompileOptions::new(source, airac_date());
    options.output_path = Some(out.path.to_str().unwrap().to_string());

    let mut pipeline = Pipeline::new(options);
    let result = pipeline
        .compile(&mut |_, _, _| ProgressSignal::Continue, &mut |_, _, _| {})
        .expect("compile should not hard-fail");

    assert!(matches!(result, CompileResult::Ok { .. }), "{result:?}");

    let conn = rusqlite::Connection::open(&out.path).unwrap();
    let (ident, name): (String, String) = conn
        .query_row("SELECT ident, name FROM airports WHERE ident = 'KJFK'", [], |r| Ok((r.get(0)?, r.get(1)?)))
        .unwrap();
    assert_eq!(ident, "KJFK");
    assert!(name.contains("KENNEDY"));
}

#[test]
fn aborting_on_the_first_checkpoint_rolls_back_and_reports_aborted() {
    let out = TempDb::new("abort");

    let source = Source::Text {
        files: vec![SourceFile {
            name: "test.txt".to_string(),
            data: AIRPORT_RECORD.to_vec(),
        }],
    };
    let mut options = CompileOptions::new(source, airac_date());
    options.output_path = Some(out.path.to_str().unwrap().to_string());

    let mut pipeline = Pipeline::new(options);
    let result = pipeline
        .compile(&mut |_, _, _| ProgressSignal::Abort, &mut |_, _, _| {})
        .unwrap();

    assert!(matches!(result, CompileResult::Aborted));
}

#[test]
fn validation_fails_closed_when_no_airports_were_loaded() {
    let source = Source::Text { files: vec![] };
    let mut options = CompileOptions::new(source, airac_date());
    options.run_validation = true;

    let mut pipeline = Pipeline::new(options);
    let result = pipeline
        .compile(&mut |_, _, _| ProgressSignal::Continue, &mut |_, _, _| {})
        .unwrap();

    assert!(matches!(result, CompileResult::BasicValidationError { table, .. } if table == "airports"));
}

#[test]
fn relational_source_pairs_runway_ends_and_links_their_ils() {
    let src = TempDb::new("relational_src");
    let out = TempDb::new("relational_out");

    {
        let conn = rusqlite::Connection::open(&src.path).unwrap();
        conn.execute_batch(
            "CREATE TABLE tbl_airports (
                airport_identifier TEXT, icao_code TEXT, airport_name TEXT,
                iata_designator TEXT, airport_ref_latitude REAL, airport_ref_longitude REAL,
                elevation REAL
            );
            CREATE TABLE tbl_runways (
                airport_identifier TEXT, runway_identifier TEXT,
                runway_latitude REAL, runway_longitude REAL, runway_true_bearing REAL,
                runway_length REAL, runway_width REAL, landing_threshold_elevation REAL,
                displaced_threshold REAL, surface_code TEXT
            );
            CREATE TABLE tbl_airways (
                route_identifier TEXT, seqno INTEGER, waypoint_description_code TEXT,
                flightlevel TEXT, direction_restriction TEXT, minimum_altitude1 REAL,
                maximum_altitude REAL, center_waypoint TEXT, center_waypoint_latitude REAL,
                center_waypoint_longitude REAL
            );
            CREATE TABLE tbl_sids (
                airport_identifier TEXT, procedure_identifier TEXT, transition_identifier TEXT,
                seqno INTEGER, center_waypoint TEXT,
                center_waypoint_latitude REAL, center_waypoint_longitude REAL,
                recommanded_navaid TEXT, path_termination TEXT, turn_direction TEXT,
                theta REAL, rho REAL, magnetic_course REAL, altitude_description TEXT,
                altitude1 REAL, altitude2 REAL, transition_altitude REAL,
                speed_limit_description TEXT, speed_limit INTEGER
            );
            CREATE TABLE tbl_stars (
                airport_identifier TEXT, procedure_identifier TEXT, transition_identifier TEXT,
                seqno INTEGER, center_waypoint TEXT,
                center_waypoint_latitude REAL, center_waypoint_longitude REAL,
                recommanded_navaid TEXT, path_termination TEXT, turn_direction TEXT,
                theta REAL, rho REAL, magnetic_course REAL, altitude_description TEXT,
                altitude1 REAL, altitude2 REAL, transition_altitude REAL,
                speed_limit_description TEXT, speed_limit INTEGER
            );
            CREATE TABLE tbl_iaps (
                airport_identifier TEXT, procedure_identifier TEXT, transition_identifier TEXT,
                seqno INTEGER, center_waypoint TEXT,
                center_waypoint_latitude REAL, center_waypoint_longitude REAL,
                recommanded_navaid TEXT, path_termination TEXT, turn_direction TEXT,
                theta REAL, rho REAL, magnetic_course REAL, altitude_description TEXT,
                altitude1 REAL, altitude2 REAL, transition_altitude REAL,
                speed_limit_description TEXT, speed_limit INTEGER
            );",
        )
        .unwrap();
        conn.execute(
            "INSERT INTO tbl_airports VALUES ('KJFK', 'K6', 'JOHN F KENNEDY INTL', 'JFK', 40.6398, -73.7789, 13.0)",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO tbl_runways VALUES \
             ('KJFK', 'RW04L', 40.6206, -73.7789, 44.0, 12079.0, 200.0, 13.0, 0.0, 'CONC'), \
             ('KJFK', 'RW22R', 40.6473, -73.7628, 224.0, 12079.0, 200.0, 130.0, 0.0, 'CONC')",
            [],
        )
        .unwrap();
    }

    let source = Source::Relational {
        database_path: src.path.to_str().unwrap().to_string(),
        schema: "src".to_string(),
    };
    let mut options = CompileOptions::new(source, airac_date());
    options.output_path = Some(out.path.to_str().unwrap().to_string());

    let mut pipeline = Pipeline::new(options);
    let result = pipeline
        .compile(&mut |_, _, _| ProgressSignal::Continue, &mut |_, _, _| {})
        .unwrap();
    assert!(matches!(result, CompileResult::Ok { .. }), "{result:?}");

    let conn = rusqlite::Connection::open(&out.path).unwrap();
    let runway_count: i64 = conn
        .query_row("SELECT runway_count FROM airports WHERE ident = 'KJFK'", [], |r| r.get(0))
        .unwrap();
    assert_eq!(runway_count, 1, "both ends should pair into a single runway");

    let ends: i64 = conn.query_row("SELECT count(*) FROM runway_ends", [], |r| r.get(0)).unwrap();
    assert_eq!(ends, 2);
}
