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

/// Section P, subsections D/E/F: one leg of a SID, STAR, or approach.
///
/// `sub_code` distinguishes the three (spec §4.10); the writer accumulates
/// consecutive records sharing `procedure_ident` and `transition_ident`
/// into a single procedure.
#[derive(Record)]
pub struct ProcedureLeg<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    #[arinc424(skip(1))]
    pub arpt_ident: ArptHeliIdent<'a>,
    pub icao_code: IcaoCode<'a>,
    pub sub_code: SubCode<'a>,
    pub procedure_ident: ProcedureIdent<'a>,
    #[arinc424(skip(1))]
    pub seq_nr: SequenceNumber<'a, 3>,
    #[arinc424(skip(2))]
    pub fix_ident: FixIdent<'a>,
    pub fix_icao_code: IcaoCode<'a>,
    pub fix_regn_code: RegnCode<'a>,
    pub waypoint_description_code: WaypointDescriptionCode,
    pub turn_direction: TurnDirection,
    #[arinc424(skip(1))]
    pub path_termination: PathTermination,
    #[arinc424(skip(1))]
    pub recommended_navaid: Option<FixIdent<'a>>,
    #[arinc424(skip(2))]
    pub theta: Option<Theta<'a>>,
    pub rho: Option<Rho<'a>>,
    pub course: Option<Course<'a>>,
    #[arinc424(skip(2))]
    pub altitude_description: Option<AltitudeDescription>,
    pub altitude1: Option<LowerUpperLimit>,
    pub altitude2: Option<LowerUpperLimit>,
    #[arinc424(skip(1))]
    pub speed_limit: Option<SpeedLimit<'a>>,
    #[arinc424(field = 124)]
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg_bytes() -> Vec<u8> {
        let mut bytes = [
            b"S".as_slice(), // record_type (1)
            b"USA",          // cust_area (3)
            b"P",            // sec_code (1)
            b" ",            // skip(1)
            b"KJFK",         // arpt_ident (4)
            b"K6",           // icao_code (2)
            b"F",            // sub_code (1, Approach)
            b"I04L  ",       // procedure_ident (6)
            b" ",            // skip(1)
            b"010",          // seq_nr (3)
            b"  ",           // skip(2)
            b"CRI  ",        // fix_ident (5)
            b"K6",           // fix_icao_code (2)
            b"ENRT",         // fix_regn_code (4)
            b" E  ",         // waypoint_description_code (4)
            b"R",            // turn_direction (1)
            b" ",            // skip(1)
            b"CF",           // path_termination (2)
            b" ",            // skip(1)
            b"CRI  ",        // recommended_navaid (5)
            b"  ",           // skip(2)
            b"0450",         // theta (4)
            b"0080",         // rho (4)
            b"0440",         // course (4)
            b"  ",           // skip(2)
            b"+",            // altitude_description (1)
            b"01800",        // altitude1 (5)
            b"NOTSP",        // altitude2 (5)
            b" ",            // skip(1)
            b"210",          // speed_limit (3)
        ]
        .concat();
        bytes.extend(std::iter::repeat(b' ').take(42)); // filler up to field=124
        bytes.extend_from_slice(b"12345"); // frn (5)
        bytes.extend_from_slice(b"2407"); // cycle (4)
        bytes
    }

    #[test]
    fn approach_leg_record() {
        let bytes = leg_bytes();
        assert_eq!(bytes.len(), 132);

        let leg = ProcedureLeg::try_from(bytes.as_slice()).expect("procedure leg should parse");

        assert_eq!(leg.procedure_ident.as_str(), "I04L");
        assert_eq!(leg.path_termination, PathTermination::CourseToFix);
        assert_eq!(leg.turn_direction, TurnDirection::Right);
        assert_eq!(leg.fix_ident.as_str(), "CRI");
        assert_eq!(
            leg.recommended_navaid.map(|n| n.as_str()),
            Some("CRI")
        );
        assert_eq!(leg.altitude_description, Some(AltitudeDescription::AtOrAbove));
        assert_eq!(leg.altitude1, Some(LowerUpperLimit::Altitude(1800)));
        assert_eq!(leg.speed_limit.and_then(|s| s.as_u16().ok()), Some(210));
    }
}
