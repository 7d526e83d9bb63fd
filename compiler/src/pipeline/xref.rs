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

//! Cross-reference scripts (spec §4.12 step 8) and the two optional derived
//! passes gated on source kind (step 7) or caller opt-in (step 9).
//!
//! [`run`] assigns regions to airports lacking one, links standalone
//! [`crate::model::Ils`] rows to the runway end they serve and backfills
//! per-airport counters, computes ILS feather geometry, links waypoints to
//! their co-located navaid, and links approach procedures to the runway end
//! they serve. The relational adapter's own ILS records arrive nested
//! inside a [`crate::model::RunwayEnd`] and never need ILS linking; the
//! binary/text adapters emit `StagingRow::Ils` standalone (spec §9, "cyclic
//! ownership"), since neither source's ILS record carries a foreign key
//! back to a runway end row.

use log::debug;
use rusqlite::{params, Transaction};

use crate::error::Error;
use crate::geometry::ils::feather;
use crate::measurements::{Angle, Length};
use crate::passes::tacan;

/// Links every unlinked `ils` row to its nearest same-designator
/// `runway_ends` row, then backfills `airports.ils_count`.
///
/// There's no airport scope on a standalone ILS record (spec §9), so the
/// match is nearest-by-coordinate among ends sharing the same designator
/// rather than an exact join; misassignment is possible when two airports
/// share both a designator and a close localizer antenna, which in practice
/// doesn't happen at any meaningful distance.
pub fn run(tx: &Transaction<'_>) -> Result<(), Error> {
    assign_airport_regions(tx)?;
    link_ils_to_runway_ends(tx)?;
    backfill_ils_counts(tx)?;
    run_ils_geometry(tx)?;
    backfill_navaid_ids_on_waypoints(tx)?;
    link_approaches_to_runway_ends(tx)?;
    Ok(())
}

/// Assigns a region to every airport whose source left `icao_region` blank,
/// by copying the region of the nearest navaid (spec §4.12 step 8, §9
/// "region by nearest navaid"). Candidates are sorted by `(ident, region)`
/// before the nearest-match scan so ties — two navaids at the same
/// coordinate — resolve the same way on every run.
fn assign_airport_regions(tx: &Transaction<'_>) -> Result<(), Error> {
    let airports: Vec<(i64, f64, f64)> = {
        let mut stmt = tx.prepare("SELECT id, latitude, longitude FROM airports WHERE icao_region = ''")?;
        stmt.query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)))?
            .collect::<Result<Vec<_>, _>>()?
    };
    if airports.is_empty() {
        return Ok(());
    }

    let mut navaids: Vec<(String, String, f64, f64)> = {
        let mut stmt = tx.prepare("SELECT ident, region, latitude, longitude FROM navaids")?;
        stmt.query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)))?
            .collect::<Result<Vec<_>, _>>()?
    };
    navaids.sort_by(|a, b| (a.0.as_str(), a.1.as_str()).cmp(&(b.0.as_str(), b.1.as_str())));

    for (airport_id, lat, lon) in airports {
        let nearest = navaids
            .iter()
            .min_by(|a, b| {
                let da = (a.2 - lat).powi(2) + (a.3 - lon).powi(2);
                let db = (b.2 - lat).powi(2) + (b.3 - lon).powi(2);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(_, region, ..)| region.clone());

        if let Some(region) = nearest {
            tx.execute("UPDATE airports SET icao_region = ?1 WHERE id = ?2", params![region, airport_id])?;
        } else {
            debug!("airport {airport_id} has no region and no navaid to infer one from");
        }
    }

    Ok(())
}

fn link_ils_to_runway_ends(tx: &Transaction<'_>) -> Result<(), Error> {
    let unlinked: Vec<(i64, String, f64, f64)> = {
        let mut stmt = tx.prepare(
            "SELECT id, runway_ident, localizer_latitude, localizer_longitude FROM ils WHERE runway_end_id IS NULL",
        )?;
        stmt.query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)))?
            .collect::<Result<Vec<_>, _>>()?
    };

    for (ils_id, runway_ident, lat, lon) in unlinked {
        let candidate: Option<i64> = tx
            .query_row(
                "SELECT id FROM runway_ends WHERE designator = ?1 AND ils_id IS NULL \
                 ORDER BY (latitude - ?2) * (latitude - ?2) + (longitude - ?3) * (longitude - ?3) ASC \
                 LIMIT 1",
                params![runway_ident, lat, lon],
                |r| r.get(0),
            )
            .ok();

        if let Some(runway_end_id) = candidate {
            tx.execute("UPDATE ils SET runway_end_id = ?1 WHERE id = ?2", params![runway_end_id, ils_id])?;
            tx.execute("UPDATE runway_ends SET ils_id = ?1 WHERE id = ?2", params![ils_id, runway_end_id])?;
        } else {
            debug!("ils {ils_id} ({runway_ident}) matched no runway end");
        }
    }

    Ok(())
}

fn backfill_ils_counts(tx: &Transaction<'_>) -> Result<(), Error> {
    tx.execute(
        "UPDATE airports SET ils_count = (
            SELECT count(*) FROM runway_ends re
            JOIN runways rw ON rw.id = re.runway_id
            WHERE rw.airport_id = airports.id AND re.ils_id IS NOT NULL
        )",
        [],
    )?;
    Ok(())
}

/// Computes each linked ILS's feather polygon (spec §4.7) and stores it as
/// WKT (no GeoJSON serializer is in this crate's default dependency set).
fn run_ils_geometry(tx: &Transaction<'_>) -> Result<(), Error> {
    let rows: Vec<(i64, f64, f64, f64)> = {
        let mut stmt = tx.prepare(
            "SELECT id, localizer_latitude, localizer_longitude, localizer_course FROM ils WHERE feather_geojson IS NULL",
        )?;
        stmt.query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)))?
            .collect::<Result<Vec<_>, _>>()?
    };

    for (id, lat, lon, course) in rows {
        let origin = crate::geom::Coordinate::new(lat, lon);
        let result = feather(origin, Angle::t(course as f32), Angle::t(4.0), Length::nm(10.0));
        let wkt = format!(
            "POLYGON(({} {}, {} {}, {} {}, {} {}))",
            result.left.longitude,
            result.left.latitude,
            result.midpoint.longitude,
            result.midpoint.latitude,
            result.right.longitude,
            result.right.latitude,
            result.left.longitude,
            result.left.latitude,
        );
        tx.execute("UPDATE ils SET feather_geojson = ?1 WHERE id = ?2", params![wkt, id])?;
    }

    Ok(())
}

/// Links every waypoint to the navaid sharing its identifier and region
/// (spec §4.12 step 8, "set navaid IDs on waypoints"): some sources carry a
/// VOR/NDB both as a navaid record and as a plain enroute waypoint fix, and
/// this lets waypoint-only consumers discover the co-located navaid.
fn backfill_navaid_ids_on_waypoints(tx: &Transaction<'_>) -> Result<(), Error> {
    tx.execute(
        "UPDATE waypoints SET navaid_id = (
            SELECT n.id FROM navaids n WHERE n.ident = waypoints.ident AND n.region = waypoints.region
        )
        WHERE navaid_id IS NULL
          AND EXISTS (SELECT 1 FROM navaids n WHERE n.ident = waypoints.ident AND n.region = waypoints.region)",
        [],
    )?;
    Ok(())
}

/// Links every approach procedure to the runway end its ident designates
/// (spec §4.12 step 8, "set runway-end IDs on approaches"): an approach
/// ident ends in the runway designator it serves (e.g. `I04L`), matched
/// against the same airport's `runway_ends.designator`.
fn link_approaches_to_runway_ends(tx: &Transaction<'_>) -> Result<(), Error> {
    let approaches: Vec<(i64, i64, String)> = {
        let mut stmt = tx.prepare(
            "SELECT id, airport_id, ident FROM procedures WHERE kind = 'Approach' AND runway_end_id IS NULL",
        )?;
        stmt.query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)))?
            .collect::<Result<Vec<_>, _>>()?
    };

    for (procedure_id, airport_id, ident) in approaches {
        let Some(designator) = approach_runway_designator(&ident) else {
            continue;
        };

        let candidate: Option<i64> = tx
            .query_row(
                "SELECT re.id FROM runway_ends re
                 JOIN runways rw ON rw.id = re.runway_id
                 WHERE rw.airport_id = ?1 AND re.designator = ?2",
                params![airport_id, designator],
                |r| r.get(0),
            )
            .ok();

        if let Some(runway_end_id) = candidate {
            tx.execute(
                "UPDATE procedures SET runway_end_id = ?1 WHERE id = ?2",
                params![runway_end_id, procedure_id],
            )?;
        } else {
            debug!("approach {ident} at airport {airport_id} matched no runway end");
        }
    }

    Ok(())
}

/// Pulls the trailing runway designator (digits plus an optional L/C/R)
/// off an approach ident, e.g. `I04L` -> `04L`, `R22` -> `22`.
fn approach_runway_designator(ident: &str) -> Option<String> {
    let bytes = ident.as_bytes();
    let mut end = bytes.len();
    if end > 0 && matches!(bytes[end - 1], b'L' | b'C' | b'R') {
        end -= 1;
    }
    let start = bytes[..end].iter().rposition(|b| !b.is_ascii_digit()).map(|i| i + 1).unwrap_or(0);
    if start == end {
        return None;
    }
    Some(ident[start..].to_string())
}

/// Derived TACAN channel pass (spec §4.9), relational-source-only: the
/// binary/text adapters resolve this inline while mapping each navaid row
/// (spec §4.12 step 7 only runs for [`crate::pipeline::Source::Relational`]).
pub fn run_tacan(tx: &Transaction<'_>) -> Result<usize, Error> {
    let rows: Vec<(i64, String, u32)> = {
        let mut stmt = tx.prepare("SELECT id, kind, frequency FROM navaids WHERE tacan_channel IS NULL")?;
        stmt.query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)))?
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut updated = 0;
    for (id, kind, frequency) in rows {
        let Some(kind) = decode_navaid_kind(&kind) else {
            continue;
        };
        if let Some(channel) = tacan::tacan_channel(kind, frequency) {
            tx.execute("UPDATE navaids SET tacan_channel = ?1 WHERE id = ?2", params![channel, id])?;
            updated += 1;
        }
    }

    Ok(updated)
}

fn decode_navaid_kind(text: &str) -> Option<crate::model::NavAidKind> {
    use crate::model::NavAidKind::*;
    Some(match text {
        "Vor" => Vor,
        "VorDme" => VorDme,
        "Vortac" => Vortac,
        "Tacan" => Tacan,
        "Ndb" => Ndb,
        "NdbDme" => NdbDme,
        "Dme" => Dme,
        _ => return None,
    })
}

/// Populates the optional routing graph tables (spec §4.12 step 9): one
/// node per distinct fix referenced by an airway, one edge per segment.
/// Gated behind [`crate::pipeline::CompileOptions::run_routing`] — these are
/// materialized-view-style tables for an external consumer, not a router
/// this crate operates itself (spec, "Not a flight-planning router").
pub fn run_routing(tx: &Transaction<'_>) -> Result<(), Error> {
    tx.execute_batch(
        "DELETE FROM route_edges;
         DELETE FROM route_nodes;

         INSERT INTO route_nodes (ident, region, latitude, longitude)
         SELECT DISTINCT w.ident, w.region, w.latitude, w.longitude
         FROM waypoints w
         WHERE w.id IN (SELECT from_waypoint_id FROM airways WHERE from_waypoint_id IS NOT NULL)
            OR w.id IN (SELECT to_waypoint_id FROM airways WHERE to_waypoint_id IS NOT NULL);

         INSERT INTO route_edges (airway_name, from_node_id, to_node_id)
         SELECT a.name, fn.id, tn.id
         FROM airways a
         JOIN waypoints fw ON fw.id = a.from_waypoint_id
         JOIN waypoints tw ON tw.id = a.to_waypoint_id
         JOIN route_nodes fn ON fn.ident = fw.ident AND fn.region = fw.region
         JOIN route_nodes tn ON tn.ident = tw.ident AND tn.region = tw.region
         WHERE a.from_waypoint_id IS NOT NULL AND a.to_waypoint_id IS NOT NULL;",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    #[test]
    fn links_unlinked_ils_to_matching_runway_end() {
        let mut store = Store::open_in_memory().unwrap();
        store.reset_schema().unwrap();

        store
            .transaction(|tx| {
                tx.execute(
                    "INSERT INTO airports (ident, icao_region, name, latitude, longitude, elevation_ft) \
                     VALUES ('KJFK', 'K6', 'JFK', 40.64, -73.78, 13.0)",
                    [],
                )?;
                tx.execute("INSERT INTO runways (airport_id, length_ft, width_ft) VALUES (1, 12000.0, 150.0)", [])?;
                tx.execute(
                    "INSERT INTO runway_ends (runway_id, designator, latitude, longitude, bearing_true) \
                     VALUES (1, '04L', 40.6206, -73.7789, 44.0)",
                    [],
                )?;
                tx.execute(
                    "INSERT INTO ils (ident, runway_ident, localizer_latitude, localizer_longitude, \
                     localizer_course, localizer_width, frequency, category) \
                     VALUES ('IJFK', '04L', 40.6206, -73.7789, 44.0, 4.0, 110900, 'Cat1')",
                    [],
                )?;
                Ok(())
            })
            .unwrap();

        store.transaction(|tx| run(tx)).unwrap();

        let (runway_end_id, ils_count): (Option<i64>, i64) = store
            .connection()
            .query_row(
                "SELECT (SELECT runway_end_id FROM ils WHERE ident = 'IJFK'), (SELECT ils_count FROM airports WHERE ident = 'KJFK')",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();

        assert!(runway_end_id.is_some());
        assert_eq!(ils_count, 1);
    }
}
