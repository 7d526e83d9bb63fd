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

pub const FEET_IN_METER: f32 = 0.3048;
pub const INCH_IN_METER: f32 = 0.0254;
pub const KELVIN_IN_CELSIUS: f32 = 273.15;
pub const METER_PER_SECONDS_IN_KNOTS: f32 = 1.943844;
pub const NAUTICAL_MILE_IN_METER: f32 = 1852.0;
pub const STATUTE_MILE_IN_METER: f32 = 1609.344;
pub const PI2: f32 = std::f32::consts::PI * 2.0;
pub const POUNDS_IN_KILOGRAMS: f32 = 0.4535924;
/// Speed of sound at ISA sea-level conditions (15 °C, 101.325 kPa) in m/s.
pub const SPEED_OF_SOUND_ISA_SL: f32 = 340.294;
pub const US_GALLON_IN_QUBIC_METER: f32 = 0.003785412;
