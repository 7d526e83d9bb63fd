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

//! Pipeline Orchestrator (spec §4.12): drives the full compile through its
//! eleven phases, one committed [`crate::store::Store::transaction`] per
//! phase. Which phases actually do work depends on [`Source`]: the
//! relational source direct-writes airways and needs a separate
//! derived-value pass for magnetic variation, TACAN channels, and ILS
//! geometry; the binary and text sources resolve those inline while
//! streaming and instead need a dedicated airway-resolver pass over their
//! staged waypoint rows (spec §4.12 steps 6-7).

mod insert;
mod resolver;
mod source;
mod xref;

pub use source::{Source, SourceFile};

use log::{debug, info, warn};
use time::Date;

use crate::adapters::relational::RelationalAdapter;
use crate::adapters::scenery::SceneryAdapter;
use crate::adapters::text::TextAdapter;
use crate::error::Error;
use crate::magnetic::MagneticModel;
use crate::measurements::Length;
use crate::passes::magnetic;
use crate::resolver::airway::AirwayStitcher;
use crate::store::Store;

use insert::Inserter;
use resolver::StoreFixResolver;

/// What the caller observes at a phase boundary; returning [`ProgressSignal::Abort`]
/// rolls the in-flight phase back and stops the run (spec §5, §6 `progress`).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ProgressSignal {
    Continue,
    Abort,
}

pub type ProgressCallback<'a> = dyn FnMut(usize, usize, &str) -> ProgressSignal + 'a;
pub type ErrorSink<'a> = dyn FnMut(&str, &str, &str) + 'a;

/// The outcome of a compile run (spec §6 "Result codes").
#[derive(Debug)]
pub enum CompileResult {
    Ok { errors: usize },
    Aborted,
    BasicValidationError { table: String, rows: usize },
}

/// Run-wide configuration (spec §4.12, §5).
pub struct CompileOptions {
    pub source: Source,
    /// `None` compiles into a throwaway in-memory database (used by tests
    /// and by callers that only want the validation report).
    pub output_path: Option<String>,
    /// Epoch the magnetic model is pinned at; normally the AIRAC cycle's
    /// effective date.
    pub airac_date: Date,
    /// Segments longer than this are dropped by the airway stitcher as
    /// "borked data" (spec §9: hard-coded per source type upstream, exposed
    /// here as an explicit policy knob instead).
    pub max_airway_segment_length: Length,
    /// Corrupted binary frames abort the whole area instead of just the
    /// current file (spec §7).
    pub strict: bool,
    /// Populates `route_nodes`/`route_edges` from the loaded airway graph
    /// (spec §4.12 step 9, explicitly optional).
    pub run_routing: bool,
    /// Runs basic-validation row-count checks after the final indexes are
    /// built (spec §4.12 step 11, explicitly optional).
    pub run_validation: bool,
}

impl CompileOptions {
    pub fn new(source: Source, airac_date: Date) -> Self {
        Self {
            source,
            output_path: None,
            airac_date,
            max_airway_segment_length: Length::nm(800.0),
            strict: false,
            run_routing: false,
            run_validation: true,
        }
    }
}

/// Drives one compile run to completion.
pub struct Pipeline {
    options: CompileOptions,
}

impl Pipeline {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn compile(
        &mut self,
        progress: &mut ProgressCallback<'_>,
        on_error: &mut ErrorSink<'_>,
    ) -> Result<CompileResult, Error> {
        let mut store = match &self.options.output_path {
            Some(path) => Store::open(path)?,
            None => Store::open_in_memory()?,
        };
        let mut errors = 0usize;

        macro_rules! checkpoint {
            ($step:expr, $total:expr, $message:expr) => {
                if progress($step, $total, $message) == ProgressSignal::Abort {
                    return Ok(CompileResult::Aborted);
                }
            };
        }

        const TOTAL_STEPS: usize = 11;

        // Step 1: schema.
        checkpoint!(1, TOTAL_STEPS, "resetting schema");
        store.reset_schema()?;

        // Step 2: metadata.
        checkpoint!(2, TOTAL_STEPS, "writing metadata");
        let model = MagneticModel::new(self.options.airac_date);
        store.transaction(|tx| self.write_metadata(tx))?;

        // Step 3: load, 5: dedup (airport idents are deduplicated inline by
        // `Inserter::insert_airport` against `idx_airports_ident`'s unique
        // index — later duplicates are dropped, not merged or overwritten),
        // 6: airways (direct-write branch only here; the staged-row branch
        // runs in step 6 below).
        checkpoint!(3, TOTAL_STEPS, "loading source");
        let load_errors = store.transaction(|tx| self.load(tx, on_error))?;
        errors += load_errors;

        // Step 4: post-load indexes.
        checkpoint!(4, TOTAL_STEPS, "building post-load indexes");
        store.transaction(|tx| {
            tx.execute_batch(
                "CREATE INDEX IF NOT EXISTS idx_runways_airport ON runways (airport_id);
                 CREATE INDEX IF NOT EXISTS idx_navaids_airport ON navaids (airport_id);
                 CREATE INDEX IF NOT EXISTS idx_procedures_airport ON procedures (airport_id);",
            )?;
            Ok(())
        })?;

        // Step 6: resolve staged airway rows for the text/binary adapters.
        // The relational adapter already direct-wrote its segments in `load`.
        if matches!(self.options.source, Source::Text { .. } | Source::Scenery { .. }) {
            checkpoint!(6, TOTAL_STEPS, "resolving staged airways");
            store.transaction(|tx| self.resolve_staged_airways(tx))?;
        }

        // Step 7: derived-value passes, relational source only (spec §4.12
        // step 7: "since others do these during load").
        if matches!(self.options.source, Source::Relational { .. }) {
            checkpoint!(7, TOTAL_STEPS, "computing derived values");
            store.transaction(|tx| {
                let updated = magnetic::run(tx, &model)?;
                debug!("magnetic pass updated {updated} rows");
                xref::run_tacan(tx)?;
                Ok(())
            })?;
        }

        // Step 8: cross-reference scripts.
        checkpoint!(8, TOTAL_STEPS, "cross-referencing");
        store.transaction(|tx| xref::run(tx))?;

        // Step 9: optional routing tables.
        if self.options.run_routing {
            checkpoint!(9, TOTAL_STEPS, "populating routing tables");
            store.transaction(|tx| xref::run_routing(tx))?;
        }

        // Step 10: final indexes.
        checkpoint!(10, TOTAL_STEPS, "building final indexes");
        store.transaction(|tx| {
            tx.execute_batch(
                "CREATE INDEX IF NOT EXISTS idx_procedure_legs_procedure ON procedure_legs (procedure_id);
                 CREATE INDEX IF NOT EXISTS idx_markers_ils_ident ON markers (ils_ident);
                 CREATE INDEX IF NOT EXISTS idx_ils_runway_ident ON ils (runway_ident);",
            )?;
            Ok(())
        })?;

        // Step 11: optional validation/vacuum/analyze.
        if self.options.run_validation {
            checkpoint!(11, TOTAL_STEPS, "validating");
            if let Some(failure) = self.validate(store.connection())? {
                return Ok(failure);
            }
            store.connection().execute_batch("ANALYZE;")?;
        }

        info!("compile finished with {errors} non-fatal errors");
        Ok(CompileResult::Ok { errors })
    }

    fn write_metadata(&self, tx: &rusqlite::Transaction<'_>) -> Result<(), Error> {
        tx.execute(
            "INSERT INTO meta (key, value) VALUES ('airac_date', ?1)",
            rusqlite::params![self.options.airac_date.to_string()],
        )?;
        tx.execute(
            "INSERT INTO meta (key, value) VALUES ('source_kind', ?1)",
            rusqlite::params![self.options.source.kind_name()],
        )?;
        Ok(())
    }

    /// Step 3 (spec §4.12): dispatches to the adapter matching `self.options.source`.
    fn load(&self, tx: &rusqlite::Transaction<'_>, on_error: &mut ErrorSink<'_>) -> Result<usize, Error> {
        let mut inserter = Inserter::new(tx);
        let mut error_count = 0usize;
        let mut wrapped_error_sink = |area: &str, file: &str, message: &str| {
            warn!("{area}/{file}: {message}");
            on_error(area, file, message);
            error_count += 1;
        };

        match &self.options.source {
            Source::Relational { database_path, schema } => {
                tx.execute(&format!("ATTACH DATABASE ?1 AS {schema}"), rusqlite::params![database_path])?;
                let resolver = StoreFixResolver::new(tx);
                let mut adapter = RelationalAdapter::new(resolver, self.options.max_airway_segment_length);

                adapter.read_airports(tx, schema, &mut |row| inserter.insert(row), &mut wrapped_error_sink)?;
                adapter.read_runways(tx, schema, &mut |row| inserter.insert(row), &mut wrapped_error_sink)?;
                adapter.read_airways(tx, schema, &mut |row| inserter.insert(row), &mut wrapped_error_sink)?;
                adapter.read_procedures(
                    tx,
                    schema,
                    "tbl_sids",
                    crate::model::ProcedureKind::Sid,
                    &mut |row| inserter.insert(row),
                    &mut wrapped_error_sink,
                )?;
                adapter.read_procedures(
                    tx,
                    schema,
                    "tbl_stars",
                    crate::model::ProcedureKind::Star,
                    &mut |row| inserter.insert(row),
                    &mut wrapped_error_sink,
                )?;
                adapter.read_procedures(
                    tx,
                    schema,
                    "tbl_iaps",
                    crate::model::ProcedureKind::Approach,
                    &mut |row| inserter.insert(row),
                    &mut wrapped_error_sink,
                )?;
                adapter.finish(&mut |row| inserter.insert(row));
                tx.execute(&format!("DETACH DATABASE {schema}"), [])?;
            }
            Source::Text { files } => {
                let resolver = StoreFixResolver::new(tx);
                let mut adapter = TextAdapter::new(resolver);
                let mut staged_airways = Vec::new();

                for SourceFile { name, data } in files {
                    adapter.read(
                        data,
                        name,
                        &mut |row| inserter.insert(row),
                        &mut |row| staged_airways.push(row),
                        &mut wrapped_error_sink,
                    );
                }
                adapter.finish(&mut |row| inserter.insert(row));
                inserter.stage_airway_rows(staged_airways)?;
            }
            Source::Scenery { areas } => {
                let adapter = SceneryAdapter;
                let mut staged_airways = Vec::new();

                for area in areas {
                    if !area.enabled {
                        debug!("scenery area {} disabled, skipping", area.name);
                        continue;
                    }
                    for SourceFile { name, data } in &area.files {
                        let mut reader = crate::reader::Reader::new(std::io::Cursor::new(data.clone()));
                        let result = adapter.read_area(
                            &mut reader,
                            &area.name,
                            name,
                            &mut |row| inserter.insert(row),
                            &mut wrapped_error_sink,
                        );
                        if let Err(e) = result {
                            if self.options.strict {
                                return Err(e);
                            }
                            wrapped_error_sink(&area.name, name, &e.to_string());
                        }
                    }
                }
                // The scenery adapter currently emits procedures directly and
                // has no separate runway-pairing accumulator to flush; staged
                // airway rows aren't produced by this source either (spec
                // §4.2's runway/approach encoding carries no standalone
                // airway record), so `staged_airways` stays empty here.
                let _ = &staged_airways;
            }
        }

        Ok(error_count)
    }

    /// Step 6 for the staged-row branch: replays [`AirwayWaypointRow`]s
    /// through a fresh [`AirwayStitcher`] now that every waypoint referenced
    /// by position is already in the store.
    ///
    /// [`AirwayWaypointRow`]: crate::resolver::airway::AirwayWaypointRow
    fn resolve_staged_airways(&self, tx: &rusqlite::Transaction<'_>) -> Result<(), Error> {
        let rows = insert::take_staged_airway_rows(tx)?;
        let mut stitcher = AirwayStitcher::new(self.options.max_airway_segment_length);
        let mut inserter = Inserter::new(tx);
        for row in rows {
            if let Some(segment) = stitcher.push(row) {
                inserter.insert(crate::adapters::StagingRow::AirwaySegment(segment));
            }
        }
        stitcher.finish();
        Ok(())
    }

    fn validate(&self, conn: &rusqlite::Connection) -> Result<Option<CompileResult>, Error> {
        const MINIMUMS: &[(&str, usize)] = &[("airports", 1)];
        for (table, minimum) in MINIMUMS {
            let count: i64 = conn.query_row(&format!("SELECT count(*) FROM {table}"), [], |row| row.get(0))?;
            if (count as usize) < *minimum {
                return Ok(Some(CompileResult::BasicValidationError {
                    table: table.to_string(),
                    rows: count as usize,
                }));
            }
        }
        Ok(None)
    }
}
