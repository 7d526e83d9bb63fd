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

use crate::fields::*;
use crate::Record;

/// Section E, subsection R: one fix of an enroute airway.
///
/// A complete airway is assembled from many of these records, ordered by
/// `seq_nr` and split into fragments wherever `route_ident` changes; see
/// [`crate::records::RecordKind::Airway`] and the resolver that stitches
/// fragments back into named routes.
#[derive(Record)]
pub struct Airway<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    pub sub_code: SubCode<'a>,
    #[arinc424(skip(5))]
    pub route_ident: RouteIdent<'a>,
    #[arinc424(skip(1))]
    pub seq_nr: SequenceNumber<'a, 4>,
    pub cont_nr: ContNr<'a>,
    pub fix_ident: FixIdent<'a>,
    pub icao_code: IcaoCode<'a>,
    pub regn_code: RegnCode<'a>,
    pub waypoint_description_code: WaypointDescriptionCode,
    pub level: Option<Level>,
    #[arinc424(skip(10))]
    pub minimum_altitude: Option<LowerUpperLimit>,
    pub maximum_altitude: Option<LowerUpperLimit>,
    #[arinc424(field = 124)]
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airway_bytes() -> Vec<u8> {
        let mut bytes = [
            b"S".as_slice(), // record_type (1)
            b"USA",          // cust_area (3)
            b"E",            // sec_code (1)
            b"R",            // sub_code (1)
            b"     ",        // skip(5)
            b"UL995",        // route_ident (5)
            b" ",            // skip(1)
            b"0020",         // seq_nr (4)
            b"0",            // cont_nr (1)
            b"DHE  ",        // fix_ident (5)
            b"ED",           // icao_code (2)
            b"ENRT",         // regn_code (4)
            b" E B",         // waypoint_description_code (4), end-of-route
            b"H",            // level (1)
            b"          ",   // skip(10)
            b"FL080",        // minimum_altitude (5)
            b"FL200",        // maximum_altitude (5)
        ]
        .concat();
        bytes.extend(std::iter::repeat(b' ').take(65)); // filler up to field=124
        bytes.extend_from_slice(b"12345"); // frn (5)
        bytes.extend_from_slice(b"2407"); // cycle (4)
        bytes
    }

    #[test]
    fn airway_fragment_end_marker() {
        let bytes = airway_bytes();
        assert_eq!(bytes.len(), 132);

        let airway = Airway::try_from(bytes.as_slice()).expect("airway should parse");

        assert_eq!(airway.route_ident.as_str(), "UL995");
        assert_eq!(airway.fix_ident.as_str(), "DHE");
        assert!(airway.waypoint_description_code.is_end_of_route());
        assert_eq!(airway.level, Some(Level::HighLevelAirwaysAltitudes));
        assert_eq!(airway.minimum_altitude, Some(LowerUpperLimit::FlightLevel(80)));
        assert_eq!(airway.maximum_altitude, Some(LowerUpperLimit::FlightLevel(200)));
        assert_eq!(airway.frn.as_u32(), Ok(12345));
    }
}
