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

//! Magnetic Variation Pass (spec §4.8): a generic tabular update that sets
//! every positional row's magnetic-variation column to the model's value at
//! that position.

use rusqlite::Transaction;

use crate::error::Error;
use crate::geom::Coordinate;
use crate::magnetic::MagneticModel;

/// One table this pass updates: its name, and the columns holding the
/// row id, latitude/longitude, and the magnetic-variation value to write.
pub struct PositionalTable {
    pub table: &'static str,
    pub id_column: &'static str,
    pub latitude_column: &'static str,
    pub longitude_column: &'static str,
    pub mag_var_column: &'static str,
}

/// The tables carrying a magnetic-variation column, in the order the pass
/// updates them.
pub const TABLES: &[PositionalTable] = &[
    PositionalTable {
        table: "airports",
        id_column: "id",
        latitude_column: "latitude",
        longitude_column: "longitude",
        mag_var_column: "mag_var",
    },
    PositionalTable {
        table: "waypoints",
        id_column: "id",
        latitude_column: "latitude",
        longitude_column: "longitude",
        mag_var_column: "mag_var",
    },
    PositionalTable {
        table: "navaids",
        id_column: "id",
        latitude_column: "latitude",
        longitude_column: "longitude",
        mag_var_column: "mag_var",
    },
];

/// Runs the `(select-columns, update-columns, transform-fn)` update
/// primitive for one table: reads every row's position, computes its
/// declination via `model`, and writes it back.
fn update_table(tx: &Transaction<'_>, table: &PositionalTable, model: &MagneticModel) -> Result<usize, Error> {
    let select_sql = format!(
        "SELECT {id} AS id, {lat} AS lat, {lon} AS lon FROM {table}",
        id = table.id_column,
        lat = table.latitude_column,
        lon = table.longitude_column,
        table = table.table,
    );
    let rows: Vec<(i64, f64, f64)> = {
        let mut stmt = tx.prepare(&select_sql)?;
        stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
            .collect::<Result<_, rusqlite::Error>>()?
    };

    let update_sql = format!(
        "UPDATE {table} SET {mag_var} = ?1 WHERE {id} = ?2",
        table = table.table,
        mag_var = table.mag_var_column,
        id = table.id_column,
    );
    let mut update_stmt = tx.prepare(&update_sql)?;

    let mut updated = 0;
    for (id, lat, lon) in rows {
        let declination = model.declination_at(Coordinate::new(lat, lon))?;
        let declination_deg = *declination.value() as f64;
        update_stmt.execute(rusqlite::params![declination_deg, id])?;
        updated += 1;
    }
    Ok(updated)
}

/// Runs the pass over every table in [`TABLES`], returning the total rows
/// updated.
pub fn run(tx: &Transaction<'_>, model: &MagneticModel) -> Result<usize, Error> {
    let mut total = 0;
    for table in TABLES {
        total += update_table(tx, table, model)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn updates_mag_var_for_every_row() {
        let mut conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE airports (id INTEGER PRIMARY KEY, latitude REAL, longitude REAL, mag_var REAL);
             INSERT INTO airports (id, latitude, longitude) VALUES (1, 53.63, 9.99);",
        )
        .unwrap();

        let tx = conn.transaction().unwrap();
        let model = MagneticModel::new(date!(2024 - 01 - 01));
        let table = PositionalTable {
            table: "airports",
            id_column: "id",
            latitude_column: "latitude",
            longitude_column: "longitude",
            mag_var_column: "mag_var",
        };
        let updated = update_table(&tx, &table, &model).unwrap();
        tx.commit().unwrap();

        assert_eq!(updated, 1);
        let mag_var: Option<f64> = conn
            .query_row("SELECT mag_var FROM airports WHERE id = 1", [], |row| row.get(0))
            .unwrap();
        assert!(mag_var.is_some());
    }
}
