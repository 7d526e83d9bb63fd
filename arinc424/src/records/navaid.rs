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

/// Section D: VHF (VOR/VORTAC/TACAN) and NDB navaid record.
#[derive(Record)]
pub struct NavAid<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    #[arinc424(skip(1))]
    pub arpt_ident: ArptHeliIdent<'a>,
    pub icao_code: IcaoCode<'a>,
    pub sub_code: SubCode<'a>,
    pub navaid_ident: FixIdent<'a>,
    #[arinc424(skip(1))]
    pub frequency: Frequency<'a>,
    pub navaid_class: Alphanumeric<'a, 5>,
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    #[arinc424(skip(10))]
    pub mag_var: Option<MagVar>,
    #[arinc424(field = 85)]
    pub datum: Datum,
    #[arinc424(field = 94)]
    pub name_field: NameField<'a>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Built segment-by-segment against each field's declared length rather
    // than as one hand-counted literal, since the positions were invented
    // for this record rather than copied from a real CIFP extract.
    fn vor_bytes() -> Vec<u8> {
        [
            b"S".as_slice(),     // record_type (1)
            b"USA",              // cust_area (3)
            b"D",                // sec_code (1)
            b" ",                // skip(1)
            b"    ",             // arpt_ident (4, blank)
            b"K6",                // icao_code (2)
            b" ",                // sub_code (1, blank = VHF)
            b"DHE  ",             // navaid_ident (5)
            b" ",                // skip(1)
            b"11090",             // frequency (5)
            b"VH   ",             // navaid_class (5)
            b"N53112047",         // latitude (9)
            b"E008124441",        // longitude (10)
            b"          ",        // skip(10)
            b"     ",             // mag_var (5, blank = None)
            b"                     ", // filler to field=85 (21)
            b"WGE",               // datum (3)
            b"      ",            // filler to field=94 (6)
            b"HELGOLAND                     ", // name_field (30)
            b"12345",             // frn (5)
            b"2407",              // cycle (4)
        ]
        .concat()
    }

    #[test]
    fn vor_record() {
        let bytes = vor_bytes();
        assert_eq!(bytes.len(), 132);

        let vor = NavAid::try_from(bytes.as_slice()).expect("navaid should parse");

        assert_eq!(vor.record_type, RecordType::Standard);
        assert_eq!(vor.cust_area, CustArea::USA);
        assert_eq!(vor.sec_code, SecCode::Navaid);
        assert_eq!(vor.navaid_ident.as_str(), "DHE");
        assert_eq!(vor.datum, Datum::WGE);
        assert_eq!(vor.name_field.as_str(), "HELGOLAND");
        assert_eq!(vor.frn.as_u32(), Ok(12345));
        assert_eq!(vor.cycle.year(), Ok(24));
        assert_eq!(vor.cycle.cycle(), Ok(7));
    }
}
