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

//! METAR Spatial Index (spec §4.11): an in-memory identifier→record map,
//! rebuilt into an R-tree on every successful `read` for nearest-station
//! fallback lookups.

use std::collections::HashMap;

use rstar::primitives::GeomWithData;
use rstar::RTree;
use time::OffsetDateTime;

use crate::geom::Coordinate;
use crate::model::Metar;

use super::parse::{read_flat, read_noaa};
#[cfg(feature = "metar-json")]
use super::parse::read_json;

/// The result of [`MetarIndex::get_metar`]: the record found, alongside the
/// identifier and position the caller actually asked for (spec §4.11,
/// "keeping the original request position and identifier in the result").
#[derive(Clone, Debug)]
pub struct MetarLookup {
    pub requested_station: String,
    pub requested_position: Coordinate,
    pub metar: Metar,
}

/// Maps station identifiers to their latest observation, with a spatial
/// index for nearest-station fallback.
pub struct MetarIndex {
    by_station: HashMap<String, Metar>,
    tree: RTree<GeomWithData<geo::Point<f64>, String>>,
    fetch_airport_coords: Option<Box<dyn Fn(&str) -> Option<Coordinate>>>,
}

impl Default for MetarIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl MetarIndex {
    pub fn new() -> Self {
        Self {
            by_station: HashMap::new(),
            tree: RTree::new(),
            fetch_airport_coords: None,
        }
    }

    /// Registers the callback used to position stations in the spatial
    /// index. Stations the callback cannot resolve sit at the origin and
    /// are excluded from the index (spec §4.11).
    pub fn set_fetch_airport_coords(&mut self, f: impl Fn(&str) -> Option<Coordinate> + 'static) {
        self.fetch_airport_coords = Some(Box::new(f));
    }

    /// Parses every record in `text`, merging into the existing index
    /// unless `merge` is false, in which case the index is cleared first.
    /// On a duplicate station identifier the newer timestamp wins.
    /// Returns the number of records read.
    pub fn read(&mut self, text: &str, file_name: &str, merge: bool, on_error: &mut dyn FnMut(&str, &str, &str)) -> usize {
        if !merge {
            self.by_station.clear();
        }

        let mut line_errors = Vec::new();
        let metars = self.parse_for_format(text, file_name, &mut line_errors);
        for message in line_errors {
            on_error("metar", file_name, &message);
        }

        let count = metars.len();
        for metar in metars {
            self.merge_one(metar);
        }

        self.rebuild_index();
        count
    }

    fn parse_for_format(&self, text: &str, file_name: &str, on_error: &mut Vec<String>) -> Vec<Metar> {
        let mut sink = |message: &str| on_error.push(message.to_string());

        if file_name.to_ascii_lowercase().ends_with(".json") {
            #[cfg(feature = "metar-json")]
            {
                return read_json(text, &mut sink);
            }
            #[cfg(not(feature = "metar-json"))]
            {
                sink("METAR JSON format requires the metar-json feature");
                return Vec::new();
            }
        }

        if looks_like_noaa(text) {
            read_noaa(text, &mut sink)
        } else {
            read_flat(text, OffsetDateTime::now_utc(), &mut sink)
        }
    }

    fn merge_one(&mut self, metar: Metar) {
        match self.by_station.get(&metar.station) {
            Some(existing) if existing.observed_at >= metar.observed_at => {}
            _ => {
                self.by_station.insert(metar.station.clone(), metar);
            }
        }
    }

    fn rebuild_index(&mut self) {
        let Some(fetch) = self.fetch_airport_coords.as_ref() else {
            self.tree = RTree::new();
            return;
        };

        let entries: Vec<_> = self
            .by_station
            .keys()
            .filter_map(|station| fetch(station).map(|coord| GeomWithData::new(coord.into(), station.clone())))
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    /// Looks up `station`'s record; if absent, returns the nearest indexed
    /// station's record instead, with `requested_station`/`requested_position`
    /// preserved (spec §4.11).
    pub fn get_metar(&self, station: &str, position: Coordinate) -> Option<MetarLookup> {
        if let Some(metar) = self.by_station.get(station) {
            return Some(MetarLookup {
                requested_station: station.to_string(),
                requested_position: position,
                metar: metar.clone(),
            });
        }

        let nearest = self.tree.nearest_neighbor(&position.into())?;
        let metar = self.by_station.get(&nearest.data)?;
        Some(MetarLookup {
            requested_station: station.to_string(),
            requested_position: position,
            metar: metar.clone(),
        })
    }
}

/// A NOAA-style record's first line is a bare timestamp, not a station
/// identifier: the flat/JSON forms' first token is always 4+ alphanumerics
/// followed by whitespace, while the NOAA timestamp line contains `/`.
fn looks_like_noaa(text: &str) -> bool {
    text.lines()
        .find(|l| !l.trim().is_empty())
        .is_some_and(|first| first.contains('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_newer_timestamp_for_duplicate_station() {
        let mut index = MetarIndex::new();
        index.read(
            "2024/07/27 12:00\nKAAA 271200Z 00000KT 10SM CLR 20/10 A3000\n",
            "a.txt",
            true,
            &mut |_, _, _| {},
        );
        index.read(
            "2024/07/27 13:00\nKAAA 271300Z 00000KT 10SM CLR 21/10 A3000\n",
            "b.txt",
            true,
            &mut |_, _, _| {},
        );

        let result = index.get_metar("KAAA", Coordinate::new(0.0, 0.0)).unwrap();
        assert!(result.metar.raw.contains("271300Z"));
    }

    #[test]
    fn merge_false_clears_existing_entries() {
        let mut index = MetarIndex::new();
        index.read(
            "2024/07/27 12:00\nKAAA 271200Z 00000KT 10SM CLR 20/10 A3000\n",
            "a.txt",
            true,
            &mut |_, _, _| {},
        );
        index.read(
            "2024/07/27 13:00\nKBBB 271300Z 00000KT 10SM CLR 21/10 A3000\n",
            "b.txt",
            false,
            &mut |_, _, _| {},
        );

        assert!(index.get_metar("KAAA", Coordinate::new(0.0, 0.0)).is_none());
        assert!(index.get_metar("KBBB", Coordinate::new(0.0, 0.0)).is_some());
    }

    #[test]
    fn falls_back_to_nearest_station_preserving_request_identity() {
        let mut index = MetarIndex::new();
        index.set_fetch_airport_coords(|station| match station {
            "KAAA" => Some(Coordinate::new(0.0, 0.0)),
            "KBBB" => Some(Coordinate::new(1.0, 1.0)),
            _ => None,
        });
        index.read(
            "2024/07/27 12:00\nKAAA 271200Z 00000KT 10SM CLR 20/10 A3000\n",
            "a.txt",
            true,
            &mut |_, _, _| {},
        );
        index.read(
            "2024/07/27 12:00\nKBBB 271200Z 00000KT 10SM CLR 20/10 A3000\n",
            "b.txt",
            true,
            &mut |_, _, _| {},
        );

        let request_position = Coordinate::new(0.1, 0.1);
        let result = index.get_metar("KCCC", request_position).unwrap();
        assert_eq!(result.metar.station, "KAAA");
        assert_eq!(result.requested_station, "KCCC");
        assert_eq!(result.requested_position, request_position);
    }

    #[test]
    fn unresolvable_station_is_excluded_from_spatial_index() {
        let mut index = MetarIndex::new();
        index.set_fetch_airport_coords(|_| None);
        index.read(
            "2024/07/27 12:00\nKAAA 271200Z 00000KT 10SM CLR 20/10 A3000\n",
            "a.txt",
            true,
            &mut |_, _, _| {},
        );

        assert!(index.get_metar("KAAA", Coordinate::new(0.0, 0.0)).is_some());
        assert!(index.get_metar("KZZZ", Coordinate::new(0.0, 0.0)).is_none());
    }
}
