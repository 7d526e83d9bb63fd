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

use std::fmt;
use std::io;

/// Errors that abort the current file, phase, or the whole run.
///
/// Per-record/per-file recoverable problems (spec §7) do not produce an
/// `Error`; they are reported through an `error_sink` callback and logged
/// instead. `Error` is reserved for what the orchestrator cannot route
/// around: corrupted streams, missing resources, and store failures.
#[derive(Debug)]
pub enum Error {
    /// The binary stream ended before a frame said it would.
    UnexpectedEof,
    /// A framed record's declared length overflows its parent frame.
    CorruptedFrame,
    /// A bit-packed or fixed-width field held a value outside its domain.
    InvalidEncoding { field: String },
    /// A required base path or source file was not found.
    FileNotFound(String),
    /// A required base path exists but could not be opened for reading.
    FileNotReadable(String),
    /// A value computed mid-pipeline (e.g. a pressure correction) is out of
    /// the representable range.
    ImplausibleValue,
    /// A string field did not match any recognized encoding for its type.
    UnexpectedString,
    /// Fewer output rows were produced than the basic-validation minimum.
    BasicValidationError { table: String, rows: usize },
    /// The compile was cancelled cooperatively by the caller's progress
    /// callback.
    Aborted,
    /// An ARINC 424 record failed to parse.
    Arinc424(arinc424::Error),
    /// The output store reported a failure.
    Store(rusqlite::Error),
    /// A schema migration failed to apply.
    Migration(String),
    /// An I/O failure while reading a source file.
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of stream"),
            Self::CorruptedFrame => write!(f, "record frame length overflows its parent"),
            Self::InvalidEncoding { field } => write!(f, "invalid encoding in field {field}"),
            Self::FileNotFound(path) => write!(f, "file not found: {path}"),
            Self::FileNotReadable(path) => write!(f, "file not readable: {path}"),
            Self::ImplausibleValue => write!(f, "computed value is out of range"),
            Self::UnexpectedString => write!(f, "unexpected string value"),
            Self::BasicValidationError { table, rows } => {
                write!(f, "table {table} has only {rows} rows, below declared minimum")
            }
            Self::Aborted => write!(f, "compile aborted"),
            Self::Arinc424(e) => write!(f, "ARINC 424 error: {e}"),
            Self::Store(e) => write!(f, "store error: {e}"),
            Self::Migration(e) => write!(f, "migration error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<arinc424::Error> for Error {
    fn from(e: arinc424::Error) -> Self {
        Self::Arinc424(e)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Self::Store(e)
    }
}

impl From<rusqlite_migration::Error> for Error {
    fn from(e: rusqlite_migration::Error) -> Self {
        Self::Migration(e.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
