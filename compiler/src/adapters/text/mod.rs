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

//! Text/Line Source Adapter (spec §4.4): reads fixed-width ARINC 424 records
//! via [`arinc424`], producing the same [`StagingRow`]s as the other two
//! adapters.
//!
//! Airway records carry no coordinate of their own (spec §4.12 step 6,
//! "intermediate resolver pass"): this adapter stages raw
//! [`AirwayWaypointRow`]s with a placeholder position through `on_airway_row`
//! rather than driving [`crate::resolver::airway::AirwayStitcher`] inline —
//! a later pipeline phase resolves each fix's position and replays the rows
//! through the stitcher. The relational adapter is the only one that can
//! stitch while streaming, because its cursor already carries a position
//! column per row.

use arinc424::fields::{
    AltitudeDescription, Level, LowerUpperLimit, MagVar, PathTermination as ArincPathTermination,
    SecCode, SubCodeKind, TurnDirection as ArincTurnDirection, WaypointUsage as ArincWaypointUsage,
};
use arinc424::records::{
    Airport as ArincAirport, Airway as ArincAirway, ControlledAirspace, Ils as ArincIls,
    NavAid as ArincNavAid, ProcedureLeg as ArincProcedureLeg, RecordKind, Records,
    RestrictiveAirspace, Runway as ArincRunway, Waypoint as ArincWaypoint,
};

mod airspace;

use crate::adapters::StagingRow;
use airspace::AirspaceBuilder;
use crate::core::VerticalDistance;
use crate::geom::Coordinate;
use crate::geometry::runway::{pair_ends, RunwayEndInput};
use crate::magnetic::MagneticVariation;
use crate::measurements::{Altitude, Angle, Length};
use crate::model::{
    AltitudeConstraint, FixKey, Ils, IlsCategory, NavAid, NavAidKind, PathTermination, Procedure,
    ProcedureKind, Region, TurnDirection, Waypoint, WaypointUsage,
};
use crate::procedures::writer::{FixResolver, ProcedureInput, ProcedureWriter};
use crate::resolver::airway::AirwayWaypointRow;

/// Reads one text-format source, accumulating runway ends per airport and
/// procedure legs per (airport, procedure) boundary.
pub struct TextAdapter<F> {
    procedures: ProcedureWriter<F>,
    runway_airport: Option<String>,
    runway_ends: Vec<RunwayEndInput>,
    airspaces: AirspaceBuilder,
}

impl<F: FixResolver> TextAdapter<F> {
    pub fn new(resolver: F) -> Self {
        Self {
            procedures: ProcedureWriter::new(resolver),
            runway_airport: None,
            runway_ends: Vec::new(),
            airspaces: AirspaceBuilder::new(),
        }
    }

    /// Reads every 132-byte record in `data`, calling `on_row` for entities
    /// ready to emit, `on_airway_row` for staged airway-fragment rows, and
    /// `on_error` for any record that fails to parse (spec §7).
    pub fn read(
        &mut self,
        data: &[u8],
        source_name: &str,
        on_row: &mut dyn FnMut(StagingRow),
        on_airway_row: &mut dyn FnMut(AirwayWaypointRow),
        on_error: &mut dyn FnMut(&str, &str, &str),
    ) {
        for (kind, bytes) in Records::new(data) {
            let result = match kind {
                RecordKind::Airport => ArincAirport::try_from(bytes)
                    .map_err(Into::into)
                    .and_then(|r| map_airport(&r))
                    .map(|a| on_row(StagingRow::Airport(a))),
                RecordKind::Runway => ArincRunway::try_from(bytes)
                    .map_err(Into::into)
                    .and_then(|r| self.push_runway(&r, on_row)),
                RecordKind::Waypoint => ArincWaypoint::try_from(bytes)
                    .map_err(Into::into)
                    .and_then(|r| map_waypoint(&r))
                    .map(|w| on_row(StagingRow::Waypoint(w))),
                RecordKind::NavAid => ArincNavAid::try_from(bytes)
                    .map_err(Into::into)
                    .and_then(|r| map_navaid(&r))
                    .map(|n| on_row(StagingRow::NavAid(n))),
                RecordKind::Ils => ArincIls::try_from(bytes)
                    .map_err(Into::into)
                    .and_then(|r| map_ils(&r))
                    .map(|i| on_row(StagingRow::Ils(i))),
                RecordKind::Airway => ArincAirway::try_from(bytes)
                    .map_err(Into::into)
                    .and_then(|r| map_airway_row(&r))
                    .map(|row| on_airway_row(row)),
                RecordKind::ProcedureLeg => ArincProcedureLeg::try_from(bytes)
                    .map_err(Into::into)
                    .and_then(|r| self.push_procedure_leg(&r, on_row)),
                RecordKind::ControlledAirspace => ControlledAirspace::try_from(bytes)
                    .map_err(Into::into)
                    .and_then(|r| {
                        self.airspaces
                            .push_controlled(&r, &mut |a| on_row(StagingRow::Airspace(a)))
                    }),
                RecordKind::RestrictiveAirspace => RestrictiveAirspace::try_from(bytes)
                    .map_err(Into::into)
                    .and_then(|r| {
                        self.airspaces
                            .push_restrictive(&r, &mut |a| on_row(StagingRow::Airspace(a)))
                    }),
            };

            if let Err(e) = result {
                on_error("text", source_name, &e.to_string());
            }
        }
    }

    /// Flushes any accumulated runway pairing and procedure. Must be called
    /// once the source is exhausted.
    pub fn finish(&mut self, on_row: &mut dyn FnMut(StagingRow)) {
        self.flush_runways(on_row);
        self.procedures.finish(&mut |p| on_row(StagingRow::Procedure(p)));
        self.airspaces.finish(&mut |a| on_row(StagingRow::Airspace(a)));
    }

    fn push_runway(
        &mut self,
        r: &ArincRunway,
        on_row: &mut dyn FnMut(StagingRow),
    ) -> Result<(), crate::error::Error> {
        let airport_ident = r.arpt_ident.as_str().to_string();
        let end = map_runway_end(r)?;

        if self.runway_airport.as_deref() != Some(airport_ident.as_str()) {
            self.flush_runways(on_row);
            self.runway_airport = Some(airport_ident);
        }
        self.runway_ends.push(end);
        Ok(())
    }

    fn flush_runways(&mut self, on_row: &mut dyn FnMut(StagingRow)) {
        let Some(airport_ident) = self.runway_airport.take() else {
            return;
        };
        let ends = std::mem::take(&mut self.runway_ends);
        let Some(reference) = ends.first().map(|end| end.threshold) else {
            return;
        };

        let (runways, _rect) = pair_ends(ends, reference);
        for mut runway in runways {
            runway.airport_ident = airport_ident.clone();
            on_row(StagingRow::Runway(runway));
        }
    }

    fn push_procedure_leg(
        &mut self,
        r: &ArincProcedureLeg,
        on_row: &mut dyn FnMut(StagingRow),
    ) -> Result<(), crate::error::Error> {
        let kind = procedure_kind(&r.sub_code, &r.sec_code);
        let airport_ident = r.arpt_ident.as_str().to_string();
        let input = map_procedure_leg(airport_ident, kind, r)?;
        self.procedures
            .push(input, &mut |p: Procedure| on_row(StagingRow::Procedure(p)));
        Ok(())
    }
}

fn procedure_kind(sub_code: &arinc424::fields::SubCode<'_>, sec_code: &SecCode) -> ProcedureKind {
    match sub_code.kind(sec_code) {
        Ok(SubCodeKind::Sid) => ProcedureKind::Sid,
        Ok(SubCodeKind::Star) => ProcedureKind::Star,
        _ => ProcedureKind::Approach,
    }
}

fn map_airport(r: &ArincAirport) -> Result<crate::model::Airport, crate::error::Error> {
    Ok(crate::model::Airport {
        ident: r.arpt_ident.as_str().to_string(),
        icao_region: r.icao_code.as_str().to_string(),
        name: r.airport_name.as_str().to_string(),
        coordinate: Coordinate::new(r.latitude.as_decimal()?, r.longitude.as_decimal()?),
        // Field elevation isn't modeled by this crate's Airport record yet;
        // runways carry their own threshold elevations.
        elevation: Altitude::ft(0.0),
        iata: (!r.iata.is_blank()).then(|| r.iata.as_str().to_string()),
    })
}

fn map_runway_end(r: &ArincRunway) -> Result<RunwayEndInput, crate::error::Error> {
    let bearing_true = match r.rwy_brg {
        arinc424::fields::RwyBrg::TrueNorth(deg) => Angle::t(deg as f32),
        // The record only carries a magnetic bearing here; true conversion
        // needs the field's own magnetic variation, applied by a later pass.
        arinc424::fields::RwyBrg::MagneticNorth(deg) => Angle::t(deg),
    };

    Ok(RunwayEndInput {
        designator: r.runway_id.designator()?.to_string(),
        threshold: Coordinate::new(r.threshould_latitude.as_decimal()?, r.threshould_longitude.as_decimal()?),
        bearing_true,
        length: Length::ft(r.runway_length.as_u32()? as f32),
        // Width isn't in this record layout; the Runway Pairer's output is
        // overwritten by a default-injection pass downstream.
        width: Length::ft(0.0),
        surface: None,
        threshold_elevation: None,
        displaced_threshold: None,
    })
}

fn map_waypoint(r: &ArincWaypoint) -> Result<Waypoint, crate::error::Error> {
    let region = if r.sec_code == SecCode::Enroute {
        Region::Enroute
    } else {
        Region::TerminalArea(r.regn_code.as_str().to_string())
    };

    Ok(Waypoint {
        ident: r.fix_ident.as_str().to_string(),
        region,
        coordinate: Coordinate::new(r.latitude.as_decimal()?, r.longitude.as_decimal()?),
        usage: map_waypoint_usage(r.waypoint_usage),
        mag_var: r.mag_var.map(map_mag_var),
    })
}

fn map_waypoint_usage(usage: ArincWaypointUsage) -> WaypointUsage {
    match usage {
        ArincWaypointUsage::HiLoAltitude => WaypointUsage::HiLoAltitude,
        ArincWaypointUsage::HiAltitude => WaypointUsage::HiAltitude,
        ArincWaypointUsage::LoAltitude => WaypointUsage::LoAltitude,
        ArincWaypointUsage::TerminalOnly => WaypointUsage::TerminalOnly,
    }
}

fn map_mag_var(v: MagVar) -> MagneticVariation {
    match v {
        MagVar::East(d) => MagneticVariation::East(d),
        MagVar::West(d) => MagneticVariation::West(d),
        MagVar::OrientedToTrueNorth => MagneticVariation::OrientedToTrueNorth,
    }
}

/// Classifies a navaid's ARINC 424 class-flag field into one of
/// [`NavAidKind`]'s variants. The class field packs several independent
/// flags (VOR/NDB type, co-located DME, TACAN) into one five-character
/// string; this reads the flags most CIFP extracts actually set rather than
/// the full ARINC 424-23 5.42 table.
fn classify_navaid(class: &str) -> NavAidKind {
    let ndb = class.starts_with('N') || class.starts_with('H');
    let tacan = class.contains('T');
    let has_dme = class.contains('D') || tacan;

    match (ndb, tacan, has_dme) {
        (true, _, true) => NavAidKind::NdbDme,
        (true, _, false) => NavAidKind::Ndb,
        (false, true, _) if class.contains('V') => NavAidKind::Vortac,
        (false, true, _) => NavAidKind::Tacan,
        (false, false, true) => NavAidKind::VorDme,
        _ => NavAidKind::Vor,
    }
}

fn map_navaid(r: &ArincNavAid) -> Result<NavAid, crate::error::Error> {
    let kind = classify_navaid(r.navaid_class.as_str());
    let raw = r.frequency.as_u32()?;
    let frequency = match kind {
        NavAidKind::Ndb | NavAidKind::NdbDme => raw / 10,
        _ => raw,
    };

    let region = if r.arpt_ident.is_blank() {
        Region::Enroute
    } else {
        Region::TerminalArea(r.arpt_ident.as_str().to_string())
    };

    Ok(NavAid {
        ident: r.navaid_ident.as_str().to_string(),
        kind,
        region,
        coordinate: Coordinate::new(r.latitude.as_decimal()?, r.longitude.as_decimal()?),
        frequency,
        // Resolved from `frequency` by the TACAN channel pass (spec §4.9).
        tacan_channel: None,
        mag_var: r.mag_var.map(map_mag_var),
        range: None,
    })
}

fn map_ils(r: &ArincIls) -> Result<Ils, crate::error::Error> {
    let glide_slope_angle = r
        .glide_slope_angle
        .map(|v| v.as_u16())
        .transpose()?
        .map(|v| Angle::t(v as f32 / 100.0));
    let glide_slope_coordinate = match (r.glide_slope_latitude, r.glide_slope_longitude) {
        (Some(lat), Some(lon)) => Some(Coordinate::new(lat.as_decimal()?, lon.as_decimal()?)),
        _ => None,
    };
    let category = match r.category.as_str() {
        "1" => IlsCategory::Cat1,
        "2" => IlsCategory::Cat2,
        "3" => IlsCategory::Cat3,
        _ => IlsCategory::LocalizerOnly,
    };

    Ok(Ils {
        ident: r.ils_ident.as_str().to_string(),
        runway_ident: r.runway_ident.designator()?.to_string(),
        localizer_coordinate: Coordinate::new(r.latitude.as_decimal()?, r.longitude.as_decimal()?),
        localizer_course: Angle::m(r.localizer_course.as_u16()? as f32 / 10.0),
        localizer_width: Angle::t(r.localizer_width.as_u16()? as f32 / 100.0),
        glide_slope_angle,
        glide_slope_coordinate,
        frequency: r.frequency.as_u32()?,
        category,
    })
}

fn map_level(level: Option<Level>) -> u8 {
    match level {
        Some(Level::HighLevelAirwaysAltitudes) => b'H',
        Some(Level::LowLevelAirwaysAltitudes) => b'L',
        _ => b'B',
    }
}

fn map_limit(limit: LowerUpperLimit) -> Option<VerticalDistance> {
    match limit {
        LowerUpperLimit::Altitude(ft) => Some(VerticalDistance::Altitude(ft as u16)),
        LowerUpperLimit::FlightLevel(fl) => Some(VerticalDistance::Fl(fl)),
        LowerUpperLimit::Ground => Some(VerticalDistance::Gnd),
        LowerUpperLimit::Unlimited => Some(VerticalDistance::Unlimited),
        LowerUpperLimit::MeanSeaLevel => Some(VerticalDistance::Msl(0)),
        LowerUpperLimit::NotSpecified | LowerUpperLimit::NOTAM => None,
    }
}

/// Stages one airway fix row with a placeholder position (spec §4.12 step
/// 6): the pipeline's resolver pass looks up `fix` and re-submits the row to
/// [`crate::resolver::airway::AirwayStitcher`] with its real coordinate.
fn map_airway_row(r: &ArincAirway) -> Result<AirwayWaypointRow, crate::error::Error> {
    Ok(AirwayWaypointRow {
        route_identifier: r.route_ident.as_str().to_string(),
        sequence: r.seq_nr.as_u16()?,
        waypoint_description_code: [b' ', if r.waypoint_description_code.is_end_of_route() { b'E' } else { b' ' }],
        fix: FixKey::new(r.fix_ident.as_str(), Region::Enroute),
        position: Coordinate::new(0.0, 0.0),
        flight_level: map_level(r.level),
        direction_restriction: b' ',
        minimum_altitude: r.minimum_altitude.and_then(map_limit),
        maximum_altitude: r.maximum_altitude.and_then(map_limit),
    })
}

fn map_path_termination(p: ArincPathTermination) -> PathTermination {
    use ArincPathTermination as A;
    match p {
        A::InitialFix => PathTermination::InitialFix,
        A::TrackToFix => PathTermination::TrackToFix,
        A::CourseToFix => PathTermination::CourseToFix,
        A::DirectToFix => PathTermination::DirectToFix,
        A::FixToAltitude => PathTermination::FixToAltitude,
        A::CourseToAltitude => PathTermination::CourseToAltitude,
        A::HeadingToAltitude => PathTermination::HeadingToAltitude,
        A::HeadingToManual => PathTermination::HeadingToManual,
        A::HeadingToIntercept => PathTermination::HeadingToIntercept,
        A::HeadingToRadial => PathTermination::HeadingToRadial,
        A::CourseToRadial => PathTermination::CourseToRadial,
        A::CourseToDmeDistance => PathTermination::CourseToDmeDistance,
        A::ArcToFix => PathTermination::ArcToFix,
        A::RadiusToFix => PathTermination::RadiusToFix,
        A::ProcedureTurn => PathTermination::ProcedureTurn,
        A::HoldToManual => PathTermination::HoldToManual,
        A::HoldToAltitude => PathTermination::HoldToAltitude,
        A::HoldToFix => PathTermination::HoldToFix,
    }
}

fn map_turn_direction(t: ArincTurnDirection) -> TurnDirection {
    match t {
        ArincTurnDirection::Left => TurnDirection::Left,
        ArincTurnDirection::Right => TurnDirection::Right,
        ArincTurnDirection::Either => TurnDirection::Either,
    }
}

fn map_altitude(
    desc: Option<AltitudeDescription>,
    alt1: Option<LowerUpperLimit>,
    alt2: Option<LowerUpperLimit>,
) -> Option<AltitudeConstraint> {
    let a1 = alt1.and_then(map_limit)?;
    match desc {
        Some(AltitudeDescription::AtOrAbove) => Some(AltitudeConstraint::AtOrAbove(a1)),
        Some(AltitudeDescription::AtOrBelow) => Some(AltitudeConstraint::AtOrBelow(a1)),
        Some(AltitudeDescription::Between) => {
            let a2 = alt2.and_then(map_limit)?;
            Some(AltitudeConstraint::Between(a1, a2))
        }
        _ => Some(AltitudeConstraint::At(a1)),
    }
}

/// Maps one [`ArincProcedureLeg`] into a [`ProcedureInput`] ready for
/// [`ProcedureWriter`].
///
/// This record layout has no separate transition-identifier field, so every
/// leg sharing a `procedure_ident` accumulates into one procedure without
/// transitions; a richer source (e.g. the relational adapter's named
/// `transition_identifier` column) can split further.
fn map_procedure_leg(
    airport_ident: String,
    kind: ProcedureKind,
    r: &ArincProcedureLeg,
) -> Result<ProcedureInput, crate::error::Error> {
    let fix_region = Region::TerminalArea(r.fix_icao_code.as_str().to_string());
    let theta = r.theta.map(|t| t.as_u16()).transpose()?.map(|v| Angle::t(v as f32 / 10.0));
    let rho = r.rho.map(|t| t.as_u16()).transpose()?.map(|v| Length::nm(v as f32 / 10.0));
    let course = r.course.map(|t| t.as_u16()).transpose()?.map(|v| Angle::t(v as f32 / 10.0));
    let speed_limit = r.speed_limit.map(|s| s.as_u16()).transpose()?;
    let recommended_navaid_ident = r.recommended_navaid.map(|f| f.as_str().to_string());

    Ok(ProcedureInput {
        airport_ident,
        kind,
        procedure_ident: r.procedure_ident.as_str().to_string(),
        transition_ident: None,
        sequence: r.seq_nr.as_u16()?,
        fix_ident: r.fix_ident.as_str().to_string(),
        fix_region: fix_region.clone(),
        fix_coordinate: None,
        recommended_navaid_ident,
        recommended_navaid_region: Some(fix_region),
        recommended_navaid_coordinate: None,
        theta,
        rho,
        course,
        path_termination: map_path_termination(r.path_termination),
        turn_direction: Some(map_turn_direction(r.turn_direction)),
        altitude: map_altitude(r.altitude_description, r.altitude1, r.altitude2),
        speed_limit,
        // This record's `rho` field is typed distance-only (arinc424's
        // `Rho` alias), unlike the relational source's untyped dual-purpose
        // column, so there's no holding-time reinterpretation here; neither
        // transition altitude nor a speed limit qualifier nor holding
        // context has a column in this record.
        speed_limit_description: None,
        transition_altitude: None,
        holding_time_minutes: None,
        holding_context: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysKnown;
    impl FixResolver for AlwaysKnown {
        fn resolve(
            &mut self,
            ident: &str,
            region: &Region,
            _coordinate: Option<Coordinate>,
        ) -> crate::procedures::writer::ResolvedFix {
            crate::procedures::writer::ResolvedFix::Known(FixKey::new(ident, region.clone()))
        }
    }

    const AIRPORT: &[u8] = b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";

    #[test]
    fn reads_airport_record() {
        let mut adapter = TextAdapter::new(AlwaysKnown);
        let mut rows = Vec::new();
        let mut airway_rows = Vec::new();
        let mut errors = Vec::new();

        adapter.read(
            AIRPORT,
            "test.txt",
            &mut |row| rows.push(row),
            &mut |row| airway_rows.push(row),
            &mut |area, file, msg| errors.push((area.to_string(), file.to_string(), msg.to_string())),
        );
        adapter.finish(&mut |row| rows.push(row));

        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(rows.len(), 1);
        assert!(matches!(&rows[0], StagingRow::Airport(a) if a.ident == "KJFK"));
    }

    fn runway_bytes(ident: &str, designator: &str) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"S");
        bytes.extend_from_slice(b"USA");
        bytes.extend_from_slice(b"P");
        bytes.extend_from_slice(b" ");
        bytes.extend_from_slice(format!("{ident:4}").as_bytes());
        bytes.extend_from_slice(b"K6");
        bytes.extend_from_slice(b"G");
        bytes.extend_from_slice(format!("RW{designator:3}").as_bytes());
        bytes.extend_from_slice(b"   ");
        bytes.extend_from_slice(b"0");
        bytes.extend_from_slice(b"12079");
        bytes.extend_from_slice(b"0440");
        bytes.extend_from_slice(b" ");
        bytes.extend_from_slice(b"N40372318");
        bytes.extend_from_slice(b"W073470505");
        bytes.extend(std::iter::repeat(b' ').take(132 - bytes.len() - 9));
        bytes.extend_from_slice(b"12345");
        bytes.extend_from_slice(b"2407");
        bytes
    }

    #[test]
    fn pairs_runway_ends_on_airport_boundary_change() {
        let mut adapter = TextAdapter::new(AlwaysKnown);
        let mut rows = Vec::new();
        let mut airway_rows = Vec::new();
        let mut errors = Vec::new();

        let first = runway_bytes("KJFK", "04L");
        assert_eq!(first.len(), 132);
        let second = runway_bytes("KJFK", "22R");
        assert_eq!(second.len(), 132);
        let mut data = first;
        data.extend_from_slice(&second);

        adapter.read(
            &data,
            "test.txt",
            &mut |row| rows.push(row),
            &mut |row| airway_rows.push(row),
            &mut |area, file, msg| errors.push((area.to_string(), file.to_string(), msg.to_string())),
        );
        adapter.finish(&mut |row| rows.push(row));

        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(rows.len(), 1);
        assert!(matches!(&rows[0], StagingRow::Runway(r) if r.airport_ident == "KJFK"));
    }

    #[test]
    fn classifies_navaid_kinds() {
        assert_eq!(classify_navaid("VH   "), NavAidKind::Vor);
        assert_eq!(classify_navaid("VHDME"), NavAidKind::VorDme);
        assert_eq!(classify_navaid("NB   "), NavAidKind::Ndb);
        assert_eq!(classify_navaid("VTACN"), NavAidKind::Vortac);
    }

    #[test]
    fn maps_end_of_route_flag() {
        let mut bytes = [
            b"S".as_slice(),
            b"USA",
            b"E",
            b"R",
            b"     ",
            b"UL995",
            b" ",
            b"0020",
            b"0",
            b"DHE  ",
            b"ED",
            b"ENRT",
            b" E B",
            b"H",
            b"          ",
            b"FL080",
            b"FL200",
        ]
        .concat();
        bytes.extend(std::iter::repeat(b' ').take(65));
        bytes.extend_from_slice(b"12345");
        bytes.extend_from_slice(b"2407");
        assert_eq!(bytes.len(), 132);

        let airway = ArincAirway::try_from(bytes.as_slice()).unwrap();
        let row = map_airway_row(&airway).unwrap();
        assert!(row.waypoint_description_code[1] == b'E');
        assert_eq!(row.minimum_altitude, Some(VerticalDistance::Fl(80)));
        assert_eq!(row.maximum_altitude, Some(VerticalDistance::Fl(200)));
    }
}
