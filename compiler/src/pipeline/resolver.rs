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

//! [`StoreFixResolver`]: the live-store-backed [`FixResolver`] every adapter
//! is constructed with (spec §9, "creating waypoints for procedures" must
//! have already run, so this only ever reads rows already loaded this
//! transaction).

use rusqlite::{params, OptionalExtension, Transaction};

use crate::geom::Coordinate;
use crate::model::Region;
use crate::procedures::writer::{FixResolver, ResolvedFix};

/// Resolves a leg's fix or recommended navaid against the `waypoints` and
/// `navaids` tables already written this transaction, falling back to
/// coordinate synthesis (tier 3, spec §4.10) when the source gave one.
pub struct StoreFixResolver<'a> {
    tx: &'a Transaction<'a>,
}

impl<'a> StoreFixResolver<'a> {
    pub fn new(tx: &'a Transaction<'a>) -> Self {
        Self { tx }
    }

    fn known_in(&self, table: &str, ident: &str, region: &Region) -> bool {
        self.tx
            .query_row(
                &format!("SELECT 1 FROM {table} WHERE ident = ?1 AND region = ?2"),
                params![ident, region.to_string()],
                |_| Ok(()),
            )
            .optional()
            .unwrap_or(None)
            .is_some()
    }
}

impl FixResolver for StoreFixResolver<'_> {
    fn resolve(&mut self, ident: &str, region: &Region, coordinate: Option<Coordinate>) -> ResolvedFix {
        if self.known_in("waypoints", ident, region) || self.known_in("navaids", ident, region) {
            return ResolvedFix::Known(crate::model::FixKey::new(ident, region.clone()));
        }

        match coordinate {
            Some(coord) => ResolvedFix::Synthesized(coord),
            None => ResolvedFix::Known(crate::model::FixKey::new(ident, region.clone())),
        }
    }
}
