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

//! Stateful builder that turns a canonically-ordered stream of
//! [`ProcedureInput`] rows into [`Procedure`]s, flushing on boundary changes
//! (spec §4.10).

use crate::geom::Coordinate;
use crate::model::{
    AltitudeConstraint, FixKey, Leg, PathTermination, Procedure, ProcedureKind, Region,
    TurnDirection,
};

/// The outcome of resolving a leg's named fix or recommended navaid.
///
/// Matches the writer's three-tier preference order: a `Known` fix resolved
/// by identifier (+region, +nearest coordinate), or a `Synthesized`
/// coordinate-only waypoint when no known fix matches (spec §4.10, §9).
#[derive(Clone, Debug)]
pub enum ResolvedFix {
    Known(FixKey),
    Synthesized(Coordinate),
}

/// External fix-resolution callback. Kept out of this module because the
/// actual identifier/region/nearest-coordinate matching needs a live view of
/// the waypoints/navaids already loaded into the store — the same
/// out-of-process-collaborator shape as `fetch_airport_coords` (spec §6).
///
/// The "creating waypoints for procedures" pass (spec §4.10) must run before
/// procedure writing so that implementations of this trait can always
/// satisfy tier 3 (coordinate-only synthesis) when a `coordinate` is given.
pub trait FixResolver {
    fn resolve(&mut self, ident: &str, region: &Region, coordinate: Option<Coordinate>) -> ResolvedFix;
}

/// A single incoming row, in canonical order `(airport, procedure, route
/// type, transition, sequence)` (spec §4.3, §4.10).
#[derive(Clone, Debug)]
pub struct ProcedureInput {
    pub airport_ident: String,
    pub kind: ProcedureKind,
    pub procedure_ident: String,
    pub transition_ident: Option<String>,
    pub sequence: u16,
    pub fix_ident: String,
    pub fix_region: Region,
    pub fix_coordinate: Option<Coordinate>,
    pub recommended_navaid_ident: Option<String>,
    pub recommended_navaid_region: Option<Region>,
    pub recommended_navaid_coordinate: Option<Coordinate>,
    pub theta: Option<crate::measurements::Angle>,
    pub rho: Option<crate::measurements::Length>,
    pub course: Option<crate::measurements::Angle>,
    pub path_termination: PathTermination,
    pub turn_direction: Option<TurnDirection>,
    pub altitude: Option<AltitudeConstraint>,
    pub speed_limit: Option<u16>,
    pub speed_limit_description: Option<String>,
    pub transition_altitude: Option<crate::core::VerticalDistance>,
    pub holding_time_minutes: Option<f32>,
    pub holding_context: Option<String>,
}

/// True for path terminators that hold rather than proceed to a fix (spec
/// §4.3: "Path-termination codes starting with 'H'...").
pub fn is_holding(path_termination: &PathTermination) -> bool {
    matches!(
        path_termination,
        PathTermination::HoldToManual | PathTermination::HoldToAltitude | PathTermination::HoldToFix
    )
}

#[derive(Eq, PartialEq, Clone, Debug)]
struct Boundary {
    airport_ident: String,
    procedure_ident: String,
    transition_ident: Option<String>,
}

/// Accumulates legs for the current procedure/transition and flushes a
/// complete [`Procedure`] whenever the boundary key changes.
pub struct ProcedureWriter<F> {
    resolver: F,
    boundary: Option<Boundary>,
    kind: ProcedureKind,
    legs: Vec<Leg>,
}

impl<F: FixResolver> ProcedureWriter<F> {
    pub fn new(resolver: F) -> Self {
        Self {
            resolver,
            boundary: None,
            kind: ProcedureKind::Approach,
            legs: Vec::new(),
        }
    }

    /// Feeds one input row, flushing the previous procedure first if `row`
    /// starts a new (airport, procedure, transition) boundary.
    pub fn push(&mut self, row: ProcedureInput, on_procedure: &mut dyn FnMut(Procedure)) {
        let boundary = Boundary {
            airport_ident: row.airport_ident.clone(),
            procedure_ident: row.procedure_ident.clone(),
            transition_ident: row.transition_ident.clone(),
        };

        if self.boundary.as_ref() != Some(&boundary) {
            self.flush(on_procedure);
            self.kind = row.kind;
            self.boundary = Some(boundary);
        }

        self.legs.push(self.build_leg(row));
    }

    /// Flushes any remaining accumulated procedure. Must be called once the
    /// input stream is exhausted.
    pub fn finish(&mut self, on_procedure: &mut dyn FnMut(Procedure)) {
        self.flush(on_procedure);
    }

    fn flush(&mut self, on_procedure: &mut dyn FnMut(Procedure)) {
        let Some(boundary) = self.boundary.take() else {
            return;
        };
        if self.legs.is_empty() {
            return;
        }

        on_procedure(Procedure {
            airport_ident: boundary.airport_ident,
            ident: boundary.procedure_ident,
            kind: self.kind,
            transition: boundary.transition_ident,
            legs: std::mem::take(&mut self.legs),
        });
    }

    fn build_leg(&mut self, row: ProcedureInput) -> Leg {
        let fix = if row.fix_ident.is_empty() {
            None
        } else {
            match self
                .resolver
                .resolve(&row.fix_ident, &row.fix_region, row.fix_coordinate)
            {
                ResolvedFix::Known(key) => Some(key),
                ResolvedFix::Synthesized(_) => Some(FixKey::new(row.fix_ident.clone(), row.fix_region.clone())),
            }
        };

        let fix_coordinate = match (
            row.fix_coordinate,
            self.last_resolution_was_synthesized(&row.fix_ident, &row.fix_region, row.fix_coordinate),
        ) {
            (Some(coord), true) => Some(coord),
            _ => None,
        };

        let recommended_navaid = match (&row.recommended_navaid_ident, &row.recommended_navaid_region) {
            (Some(ident), Some(region)) if !ident.is_empty() => {
                match self
                    .resolver
                    .resolve(ident, region, row.recommended_navaid_coordinate)
                {
                    ResolvedFix::Known(key) => Some(key),
                    ResolvedFix::Synthesized(_) => Some(FixKey::new(ident.clone(), region.clone())),
                }
            }
            _ => None,
        };

        Leg {
            sequence: row.sequence,
            path_termination: row.path_termination,
            fix,
            fix_coordinate,
            recommended_navaid,
            theta: row.theta,
            rho: row.rho,
            course: row.course,
            turn_direction: row.turn_direction,
            altitude: row.altitude,
            speed_limit: row.speed_limit,
            speed_limit_description: row.speed_limit_description,
            transition_altitude: row.transition_altitude,
            holding_time_minutes: row.holding_time_minutes,
            holding_context: row.holding_context,
        }
    }

    /// Re-resolves just to check whether tier 3 (synthesis) was taken, so
    /// the leg can carry the coordinate that made synthesis possible.
    /// `FixResolver::resolve` is expected to be referentially stable for the
    /// same `(ident, region, coordinate)` within one compile run.
    fn last_resolution_was_synthesized(
        &mut self,
        ident: &str,
        region: &Region,
        coordinate: Option<Coordinate>,
    ) -> bool {
        if ident.is_empty() {
            return false;
        }
        matches!(self.resolver.resolve(ident, region, coordinate), ResolvedFix::Synthesized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysKnown;
    impl FixResolver for AlwaysKnown {
        fn resolve(&mut self, ident: &str, region: &Region, _coordinate: Option<Coordinate>) -> ResolvedFix {
            ResolvedFix::Known(FixKey::new(ident, region.clone()))
        }
    }

    struct AlwaysSynthesizes;
    impl FixResolver for AlwaysSynthesizes {
        fn resolve(&mut self, _ident: &str, _region: &Region, coordinate: Option<Coordinate>) -> ResolvedFix {
            ResolvedFix::Synthesized(coordinate.unwrap_or(Coordinate::new(0.0, 0.0)))
        }
    }

    fn row(airport: &str, proc: &str, transition: Option<&str>, seq: u16) -> ProcedureInput {
        ProcedureInput {
            airport_ident: airport.into(),
            kind: ProcedureKind::Approach,
            procedure_ident: proc.into(),
            transition_ident: transition.map(String::from),
            sequence: seq,
            fix_ident: "CRI".into(),
            fix_region: Region::TerminalArea(airport.into()),
            fix_coordinate: None,
            recommended_navaid_ident: None,
            recommended_navaid_region: None,
            recommended_navaid_coordinate: None,
            theta: None,
            rho: None,
            course: None,
            path_termination: PathTermination::CourseToFix,
            turn_direction: None,
            altitude: None,
            speed_limit: None,
            speed_limit_description: None,
            transition_altitude: None,
            holding_time_minutes: None,
            holding_context: None,
        }
    }

    #[test]
    fn flushes_on_transition_boundary_change() {
        let mut writer = ProcedureWriter::new(AlwaysKnown);
        let mut out = Vec::new();

        writer.push(row("KJFK", "I04L", Some("CRI"), 10), &mut |p| out.push(p));
        writer.push(row("KJFK", "I04L", Some("CRI"), 20), &mut |p| out.push(p));
        writer.push(row("KJFK", "I04L", Some("DPK"), 10), &mut |p| out.push(p));
        writer.finish(&mut |p| out.push(p));

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].legs.len(), 2);
        assert_eq!(out[0].transition.as_deref(), Some("CRI"));
        assert_eq!(out[1].legs.len(), 1);
        assert_eq!(out[1].transition.as_deref(), Some("DPK"));
    }

    #[test]
    fn unresolved_fix_falls_back_to_coordinate_synthesis() {
        let mut writer = ProcedureWriter::new(AlwaysSynthesizes);
        let mut out = Vec::new();
        let mut input = row("KJFK", "I04L", None, 10);
        input.fix_coordinate = Some(Coordinate::new(40.5, -73.5));

        writer.push(input, &mut |p| out.push(p));
        writer.finish(&mut |p| out.push(p));

        assert_eq!(out[0].legs[0].fix_coordinate, Some(Coordinate::new(40.5, -73.5)));
    }

    #[test]
    fn holding_path_terminations_are_detected() {
        assert!(is_holding(&PathTermination::HoldToFix));
        assert!(!is_holding(&PathTermination::CourseToFix));
    }
}
