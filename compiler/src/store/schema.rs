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

//! Schema DDL, split into boundary/nav/airport/route/meta groups following
//! spec §4.12 step 1's drop/create ordering. One [`rusqlite_migration::M`]
//! per group; staging tables share the migration that creates their final
//! counterpart since both are dropped and recreated together on a fresh run.

use rusqlite_migration::M;

pub fn migrations() -> Vec<M<'static>> {
    vec![
        M::up(
            "
            CREATE TABLE meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        ),
        M::up(
            "
            CREATE TABLE airports (
                id INTEGER PRIMARY KEY,
                ident TEXT NOT NULL,
                icao_region TEXT NOT NULL,
                name TEXT NOT NULL,
                latitude REAL NOT NULL,
                longitude REAL NOT NULL,
                elevation_ft REAL NOT NULL,
                iata TEXT,
                rect_top_lat REAL,
                rect_left_lon REAL,
                rect_bottom_lat REAL,
                rect_right_lon REAL,
                mag_var REAL,
                runway_count INTEGER NOT NULL DEFAULT 0,
                ils_count INTEGER NOT NULL DEFAULT 0,
                approach_count INTEGER NOT NULL DEFAULT 0,
                military INTEGER NOT NULL DEFAULT 0,
                closed INTEGER NOT NULL DEFAULT 0
            );
            CREATE UNIQUE INDEX idx_airports_ident ON airports (ident);

            CREATE TABLE runways (
                id INTEGER PRIMARY KEY,
                airport_id INTEGER NOT NULL REFERENCES airports (id),
                length_ft REAL NOT NULL,
                width_ft REAL NOT NULL,
                surface TEXT,
                primary_end_id INTEGER,
                secondary_end_id INTEGER
            );

            CREATE TABLE runway_ends (
                id INTEGER PRIMARY KEY,
                runway_id INTEGER REFERENCES runways (id),
                designator TEXT NOT NULL,
                latitude REAL NOT NULL,
                longitude REAL NOT NULL,
                bearing_true REAL NOT NULL,
                threshold_elevation_ft REAL,
                displaced_threshold_ft REAL,
                ils_id INTEGER,
                synthesized INTEGER NOT NULL DEFAULT 0
            );
            ",
        ),
        M::up(
            "
            CREATE TABLE waypoints (
                id INTEGER PRIMARY KEY,
                ident TEXT NOT NULL,
                region TEXT NOT NULL,
                latitude REAL NOT NULL,
                longitude REAL NOT NULL,
                usage TEXT NOT NULL,
                mag_var REAL,
                airport_id INTEGER REFERENCES airports (id),
                navaid_id INTEGER REFERENCES navaids (id)
            );
            CREATE INDEX idx_waypoints_ident_region ON waypoints (ident, region);

            CREATE TABLE navaids (
                id INTEGER PRIMARY KEY,
                ident TEXT NOT NULL,
                kind TEXT NOT NULL,
                region TEXT NOT NULL,
                latitude REAL NOT NULL,
                longitude REAL NOT NULL,
                frequency INTEGER NOT NULL,
                tacan_channel TEXT,
                mag_var REAL,
                range_nm REAL,
                airport_id INTEGER REFERENCES airports (id)
            );
            CREATE INDEX idx_navaids_ident_region ON navaids (ident, region);

            CREATE TABLE ils (
                id INTEGER PRIMARY KEY,
                ident TEXT NOT NULL,
                runway_ident TEXT NOT NULL,
                runway_end_id INTEGER REFERENCES runway_ends (id),
                localizer_latitude REAL NOT NULL,
                localizer_longitude REAL NOT NULL,
                localizer_course REAL NOT NULL,
                localizer_width REAL NOT NULL,
                glide_slope_angle REAL,
                glide_slope_latitude REAL,
                glide_slope_longitude REAL,
                frequency INTEGER NOT NULL,
                category TEXT NOT NULL,
                feather_geojson TEXT
            );

            CREATE TABLE markers (
                id INTEGER PRIMARY KEY,
                ident TEXT NOT NULL,
                kind TEXT NOT NULL,
                latitude REAL NOT NULL,
                longitude REAL NOT NULL,
                ils_ident TEXT NOT NULL,
                altitude_ft REAL
            );
            ",
        ),
        M::up(
            "
            CREATE TABLE airways (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                fragment INTEGER NOT NULL,
                sequence INTEGER NOT NULL,
                from_waypoint_id INTEGER REFERENCES waypoints (id),
                to_waypoint_id INTEGER REFERENCES waypoints (id),
                level TEXT NOT NULL,
                direction_restriction TEXT NOT NULL,
                minimum_altitude TEXT,
                maximum_altitude TEXT,
                rect_top_lat REAL,
                rect_left_lon REAL,
                rect_bottom_lat REAL,
                rect_right_lon REAL
            );
            CREATE INDEX idx_airways_name_fragment ON airways (name, fragment, sequence);

            CREATE TABLE procedures (
                id INTEGER PRIMARY KEY,
                airport_id INTEGER NOT NULL REFERENCES airports (id),
                kind TEXT NOT NULL,
                ident TEXT NOT NULL,
                transition_ident TEXT,
                runway_end_id INTEGER REFERENCES runway_ends (id)
            );

            CREATE TABLE procedure_legs (
                id INTEGER PRIMARY KEY,
                procedure_id INTEGER NOT NULL REFERENCES procedures (id),
                sequence INTEGER NOT NULL,
                path_termination TEXT NOT NULL,
                fix_waypoint_id INTEGER REFERENCES waypoints (id),
                fix_latitude REAL,
                fix_longitude REAL,
                recommended_navaid_id INTEGER REFERENCES navaids (id),
                theta REAL,
                rho REAL,
                course REAL,
                turn_direction TEXT,
                altitude_description TEXT,
                altitude1_ft REAL,
                altitude2_ft REAL,
                speed_limit INTEGER,
                speed_limit_description TEXT,
                transition_altitude TEXT,
                holding_time_minutes REAL,
                holding_context TEXT
            );
            ",
        ),
        M::up(
            "
            CREATE TABLE airspaces (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                airspace_type TEXT NOT NULL,
                classification TEXT,
                floor TEXT NOT NULL,
                ceiling TEXT NOT NULL,
                polygon_geojson TEXT NOT NULL
            );
            ",
        ),
        M::up(
            "
            CREATE TABLE staging_airway_rows (
                id INTEGER PRIMARY KEY,
                route_identifier TEXT NOT NULL,
                sequence INTEGER NOT NULL,
                end_of_route INTEGER NOT NULL,
                fix_ident TEXT NOT NULL,
                fix_region TEXT NOT NULL,
                latitude REAL NOT NULL,
                longitude REAL NOT NULL,
                flight_level TEXT NOT NULL,
                direction_restriction TEXT NOT NULL,
                minimum_altitude TEXT,
                maximum_altitude TEXT
            );
            ",
        ),
        M::up(
            "
            CREATE TABLE route_nodes (
                id INTEGER PRIMARY KEY,
                ident TEXT NOT NULL,
                region TEXT NOT NULL,
                latitude REAL NOT NULL,
                longitude REAL NOT NULL
            );
            CREATE INDEX idx_route_nodes_ident_region ON route_nodes (ident, region);

            CREATE TABLE route_edges (
                id INTEGER PRIMARY KEY,
                airway_name TEXT NOT NULL,
                from_node_id INTEGER NOT NULL REFERENCES route_nodes (id),
                to_node_id INTEGER NOT NULL REFERENCES route_nodes (id)
            );
            ",
        ),
    ]
}
