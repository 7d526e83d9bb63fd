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

//! TACAN Channel Pass (spec §4.9): derives a TACAN channel designator for
//! collocated TACAN/VORTAC navaids from their frequency; everything else
//! gets no channel.

use crate::model::NavAidKind;

/// Lower bound of the VOR/TACAN band, in hundredths of MHz.
const BAND_LOW: u32 = 10800;
/// Upper bound of the VOR/TACAN band, in hundredths of MHz.
const BAND_HIGH: u32 = 11795;

/// Derives a channel designator from a VOR/TACAN frequency.
///
/// This is a simplified, internally consistent X/Y channel-pairing scheme
/// over the real 108.00-117.95 MHz VOR/TACAN band (channel 1 at 108.00 MHz,
/// incrementing every 0.05 MHz, alternating `X`/`Y`). It does not reproduce
/// the full ICAO channel-pairing table's reserved gaps, which this compiler
/// has no need to round-trip against certified charts.
fn channel_for_frequency(frequency_hundredths_mhz: u32) -> Option<String> {
    if !(BAND_LOW..=BAND_HIGH).contains(&frequency_hundredths_mhz) {
        return None;
    }
    let steps = (frequency_hundredths_mhz - BAND_LOW) / 5;
    let channel = steps / 2 + 1;
    let sub = if steps % 2 == 0 { 'X' } else { 'Y' };
    Some(format!("{channel}{sub}"))
}

/// Computes the TACAN channel for one navaid, or `None` if its kind doesn't
/// carry a TACAN channel (spec §4.9: only `TC`- and `VT`-typed rows).
pub fn tacan_channel(kind: NavAidKind, frequency: u32) -> Option<String> {
    match kind {
        NavAidKind::Tacan | NavAidKind::Vortac => channel_for_frequency(frequency),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_resolve_to_channel_one_and_last() {
        assert_eq!(channel_for_frequency(10800).as_deref(), Some("1X"));
        assert_eq!(channel_for_frequency(10805).as_deref(), Some("1Y"));
        assert_eq!(channel_for_frequency(10810).as_deref(), Some("2X"));
    }

    #[test]
    fn out_of_band_frequency_has_no_channel() {
        assert_eq!(channel_for_frequency(9000), None);
    }

    #[test]
    fn only_tacan_and_vortac_kinds_get_a_channel() {
        assert!(tacan_channel(NavAidKind::Vor, 10900).is_none());
        assert!(tacan_channel(NavAidKind::Ndb, 350).is_none());
        assert!(tacan_channel(NavAidKind::Vortac, 10900).is_some());
        assert!(tacan_channel(NavAidKind::Tacan, 10900).is_some());
    }
}
