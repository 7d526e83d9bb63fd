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

//! Line-based parsers for the three METAR source formats (spec §4.11).

use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::measurements::Pressure;
use crate::model::Metar;

const NOAA_TIMESTAMP: &[time::format_description::FormatItem<'_>] =
    format_description!("[year]/[month]/[day] [hour]:[minute]");

/// Parses one raw METAR body into a [`Metar`], stamping it with
/// `observed_at` (the format-specific timestamp source, see §4.11).
///
/// Returns `None` for a line with no station identifier token, which the
/// caller skips with a warning (spec §7, malformed-line handling).
fn parse_body(raw: &str, observed_at: OffsetDateTime) -> Option<Metar> {
    let raw = raw.trim();
    let station = raw.split_whitespace().next()?;
    if station.len() < 3 || !station.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some(Metar {
        station: station.to_string(),
        coordinate: None,
        observed_at,
        raw: raw.to_string(),
        altimeter: parse_altimeter(raw),
    })
}

/// Extracts the altimeter group (`A3005` inches, or `Q1013` hectopascals).
fn parse_altimeter(raw: &str) -> Option<Pressure> {
    raw.split_whitespace().find_map(|token| {
        if let Some(digits) = token.strip_prefix('A') {
            let hundredths: f32 = digits.parse().ok()?;
            Some(Pressure::in_hg(hundredths / 100.0))
        } else if let Some(digits) = token.strip_prefix('Q') {
            let hpa: f32 = digits.parse().ok()?;
            Some(Pressure::h_pa(hpa))
        } else {
            None
        }
    })
}

/// NOAA/X-Plane two-line form: a UTC timestamp line, then the METAR body.
pub fn read_noaa(text: &str, on_error: &mut dyn FnMut(&str)) -> Vec<Metar> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let mut out = Vec::new();

    loop {
        let Some(timestamp_line) = lines.next() else {
            break;
        };
        let Some(body_line) = lines.next() else {
            on_error(&format!("NOAA record missing METAR body after timestamp {timestamp_line}"));
            break;
        };

        let observed_at = match PrimitiveDateTime::parse(timestamp_line.trim(), NOAA_TIMESTAMP) {
            Ok(dt) => dt.assume_utc(),
            Err(_) => {
                on_error(&format!("unparsable NOAA timestamp: {timestamp_line}"));
                continue;
            }
        };

        match parse_body(body_line, observed_at) {
            Some(metar) => out.push(metar),
            None => on_error(&format!("malformed METAR body: {body_line}")),
        }
    }

    out
}

/// Flat form: one METAR per line. The day-time group in the body (e.g.
/// `271820Z`) carries only day-of-month and time, so the current UTC
/// year/month fill in the rest; this is a few-day tolerance worse than the
/// NOAA form's full timestamp, acceptable since flat files are always
/// consumed shortly after being fetched.
pub fn read_flat(text: &str, now: OffsetDateTime, on_error: &mut dyn FnMut(&str)) -> Vec<Metar> {
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|line| {
            let observed_at = day_time_group(line, now).unwrap_or(now);
            match parse_body(line, observed_at) {
                Some(metar) => Some(metar),
                None => {
                    on_error(&format!("malformed METAR line: {line}"));
                    None
                }
            }
        })
        .collect()
}

/// Resolves the `DDHHMMZ` group (second token) against `now`'s year/month.
fn day_time_group(line: &str, now: OffsetDateTime) -> Option<OffsetDateTime> {
    let group = line.split_whitespace().nth(1)?;
    let group = group.strip_suffix('Z')?;
    if group.len() != 6 || !group.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let day: u8 = group[0..2].parse().ok()?;
    let hour: u8 = group[2..4].parse().ok()?;
    let minute: u8 = group[4..6].parse().ok()?;

    let date = Date::from_calendar_date(now.year(), now.month(), day).ok()?;
    let time = time::Time::from_hms(hour, minute, 0).ok()?;
    Some(PrimitiveDateTime::new(date, time).assume_utc())
}

/// JSON form: a list of `{station, time, raw}` entries (spec §4.11).
#[cfg(feature = "metar-json")]
pub fn read_json(text: &str, on_error: &mut dyn FnMut(&str)) -> Vec<Metar> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(text) else {
        on_error("malformed METAR JSON document");
        return Vec::new();
    };
    let Some(entries) = value.as_array() else {
        on_error("METAR JSON document is not a list");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let station = entry.get("station")?.as_str()?;
            let time_str = entry.get("time")?.as_str()?;
            let raw = entry.get("body").or_else(|| entry.get("raw"))?.as_str()?;

            let observed_at = OffsetDateTime::parse(time_str, &time::format_description::well_known::Rfc3339).ok()?;

            Some(Metar {
                station: station.to_string(),
                coordinate: None,
                observed_at,
                raw: raw.to_string(),
                altimeter: parse_altimeter(raw),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn parses_noaa_two_line_record() {
        let mut errors = Vec::new();
        let text = "2024/07/27 18:20\nKJFK 271820Z 18010KT 10SM FEW050 28/18 A3005\n";
        let metars = read_noaa(text, &mut |e| errors.push(e.to_string()));
        assert!(errors.is_empty());
        assert_eq!(metars.len(), 1);
        assert_eq!(metars[0].station, "KJFK");
        assert_eq!(metars[0].observed_at, datetime!(2024-07-27 18:20 UTC));
        assert!(metars[0].altimeter.is_some());
    }

    #[test]
    fn parses_flat_one_per_line() {
        let mut errors = Vec::new();
        let now = datetime!(2024-07-27 19:00 UTC);
        let text = "KJFK 271820Z 18010KT 10SM FEW050 28/18 A3005\n";
        let metars = read_flat(text, now, &mut |e| errors.push(e.to_string()));
        assert!(errors.is_empty());
        assert_eq!(metars.len(), 1);
        assert_eq!(metars[0].station, "KJFK");
    }

    #[test]
    #[cfg(feature = "metar-json")]
    fn parses_json_list() {
        let mut errors = Vec::new();
        let text = r#"[{"station":"KJFK","time":"2024-07-27T18:20:00Z","body":"KJFK 271820Z 18010KT 10SM FEW050 28/18 Q1013"}]"#;
        let metars = read_json(text, &mut |e| errors.push(e.to_string()));
        assert!(errors.is_empty());
        assert_eq!(metars.len(), 1);
        assert_eq!(metars[0].station, "KJFK");
        assert_eq!(metars[0].observed_at, datetime!(2024-07-27 18:20 UTC));
    }

    #[test]
    fn skips_malformed_lines_with_error_report() {
        let mut errors = Vec::new();
        let metars = read_flat("??\n", datetime!(2024-01-01 00:00 UTC), &mut |e| errors.push(e.to_string()));
        assert!(metars.is_empty());
        assert_eq!(errors.len(), 1);
    }
}
