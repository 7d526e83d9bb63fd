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

//! The output store: a transactional relational database (spec §4.12, §6).
//!
//! Schema objects live for one compilation run (spec "Lifecycles"); a fresh
//! run drops and recreates them via [`rusqlite_migration`]. Every pipeline
//! phase runs inside its own [`Store::transaction`] so that an abort rolls
//! back only work done since the last committed phase, matching the "every
//! phase commits" contract in spec §4.12.

mod schema;

use log::debug;
use rusqlite::Connection;
use rusqlite_migration::Migrations;

use crate::error::Error;

/// The output relational store.
///
/// Wraps a single [`rusqlite::Connection`]; staging and final tables live in
/// the same database so that cross-reference passes can join them directly.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens (or creates) the store at `path`.
    pub fn open(path: &str) -> Result<Self, Error> {
        let conn = Connection::open(path)?;
        Self::new(conn)
    }

    /// Opens an in-memory store, used by the integration test and by callers
    /// compiling into a throwaway database.
    pub fn open_in_memory() -> Result<Self, Error> {
        Self::new(Connection::open_in_memory()?)
    }

    fn new(conn: Connection) -> Result<Self, Error> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self { conn })
    }

    /// Drops then recreates all schema objects, per spec §4.12 step 1.
    ///
    /// Each migration step commits on its own; `rusqlite_migration` wraps the
    /// whole run in one transaction, which is acceptable here because schema
    /// DDL has no partial-success contract worth preserving.
    pub fn reset_schema(&mut self) -> Result<(), Error> {
        debug!("resetting output schema");
        let migrations = Migrations::new(schema::migrations());
        migrations.to_latest(&mut self.conn)?;
        Ok(())
    }

    /// Runs `f` inside a committed transaction, matching the "every phase
    /// commits" contract (spec §4.12, §5). Returns `f`'s error without
    /// committing, which rolls the transaction back on drop.
    pub fn transaction<F, T>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&rusqlite::Transaction<'_>) -> Result<T, Error>,
    {
        let tx = self.conn.transaction()?;
        let result = f(&tx)?;
        tx.commit()?;
        Ok(result)
    }

    /// Direct access to the underlying connection, for read-only queries
    /// (e.g. the validation pass) that don't need phase-scoped commit
    /// semantics.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_schema_is_idempotent() {
        let mut store = Store::open_in_memory().unwrap();
        store.reset_schema().unwrap();
        store.reset_schema().unwrap();

        let count: i64 = store
            .connection()
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = 'airports'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn transaction_rolls_back_on_error() {
        let mut store = Store::open_in_memory().unwrap();
        store.reset_schema().unwrap();

        let result: Result<(), Error> = store.transaction(|tx| {
            tx.execute(
                "INSERT INTO airports (ident, icao_region, name, latitude, longitude, elevation_ft) \
                 VALUES ('KJFK', 'K6', 'JFK', 40.64, -73.78, 13.0)",
                [],
            )?;
            Err(Error::Aborted)
        });
        assert!(result.is_err());

        let count: i64 = store
            .connection()
            .query_row("SELECT count(*) FROM airports", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
