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

/// Section P, subsection I: one ILS/MLS/GLS installation, localizer and
/// (if present) glide slope, serving a single runway end.
#[derive(Record)]
pub struct Ils<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    #[arinc424(skip(1))]
    pub arpt_ident: ArptHeliIdent<'a>,
    pub icao_code: IcaoCode<'a>,
    pub sub_code: SubCode<'a>,
    pub runway_ident: RunwayId<'a>,
    pub ils_ident: FixIdent<'a>,
    #[arinc424(skip(1))]
    pub category: Alphanumeric<'a, 1>,
    pub frequency: Frequency<'a>,
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    pub localizer_course: Course<'a>,
    #[arinc424(skip(4))]
    pub glide_slope_angle: Option<VerticalAngle<'a>>,
    #[arinc424(skip(8))]
    pub glide_slope_latitude: Option<Latitude<'a>>,
    pub glide_slope_longitude: Option<Longitude<'a>>,
    #[arinc424(skip(2))]
    pub localizer_width: LocalizerWidth<'a>,
    #[arinc424(field = 124)]
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ils_bytes() -> Vec<u8> {
        let mut bytes = [
            b"S".as_slice(), // record_type (1)
            b"USA",          // cust_area (3)
            b"P",            // sec_code (1)
            b" ",            // skip(1)
            b"KJFK",         // arpt_ident (4)
            b"K6",           // icao_code (2)
            b"I",            // sub_code (1)
            b"RW04L",        // runway_ident (5)
            b"IJFK ",        // ils_ident (5)
            b" ",            // skip(1)
            b"2",            // category (1)
            b"11010",        // frequency (5)
            b"N40372318",    // latitude (9)
            b"W073470505",   // longitude (10)
            b"0443",         // localizer_course (4)
            b"    ",         // skip(4)
            b"0300",         // glide_slope_angle (4)
            b"        ",     // skip(8)
            b"N40372318",    // glide_slope_latitude (9)
            b"W073470505",   // glide_slope_longitude (10)
            b"  ",           // skip(2)
            b"0090",         // localizer_width (4)
        ]
        .concat();
        bytes.extend(std::iter::repeat(b' ').take(29)); // filler up to field=124
        bytes.extend_from_slice(b"12345"); // frn (5)
        bytes.extend_from_slice(b"2407"); // cycle (4)
        bytes
    }

    #[test]
    fn ils_record() {
        let bytes = ils_bytes();
        assert_eq!(bytes.len(), 132);

        let ils = Ils::try_from(bytes.as_slice()).expect("ils should parse");

        assert_eq!(ils.runway_ident.designator(), Ok("04L"));
        assert_eq!(ils.ils_ident.as_str(), "IJFK");
        assert_eq!(ils.category.as_str(), "2");
        assert!(ils.glide_slope_angle.is_some());
    }
}
