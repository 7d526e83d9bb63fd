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

//! The three structurally different inputs a compile run can draw from
//! (spec §4.2–§4.4). The caller is responsible for getting bytes into
//! memory (or a sibling database onto disk); this crate only reads what it
//! is handed.

/// One named byte buffer, e.g. one ARINC 424 text file or one binary scenery
/// file.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// One scenery area (spec §4.2): a named group of binary files, toggled as a
/// unit the way a simulator's scenery library entries are.
#[derive(Clone, Debug)]
pub struct SceneryAreaSource {
    pub name: String,
    pub enabled: bool,
    pub files: Vec<SourceFile>,
}

/// The input to a compile run.
#[derive(Clone, Debug)]
pub enum Source {
    /// A sibling SQLite database, attached under `schema` (spec §4.3).
    Relational { database_path: String, schema: String },
    /// One or more ARINC 424 fixed-width text files (spec §4.4).
    Text { files: Vec<SourceFile> },
    /// One or more binary scenery areas (spec §4.2).
    Scenery { areas: Vec<SceneryAreaSource> },
}

impl Source {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Relational { .. } => "relational",
            Self::Text { .. } => "text",
            Self::Scenery { .. } => "scenery",
        }
    }
}
