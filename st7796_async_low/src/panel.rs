// Copyright 2021 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Panel tuning for the 3.5" 320x480 ST7796 modules. The values come from
//! the panel vendor and are sent as they are.

/// Command set control. `C3`/`96` unlock the extension commands, `C3`/`69`
/// lock them again.
pub const CSCON: u8 = 0xF0;
/// Display inversion control.
pub const DIC: u8 = 0xB4;
/// Entry mode set.
pub const EM: u8 = 0xB7;
/// Power control 1 to 3.
pub const PWR1: u8 = 0xC0;
pub const PWR2: u8 = 0xC1;
pub const PWR3: u8 = 0xC2;
/// VCOM control.
pub const VCMPCTL: u8 = 0xC5;
/// Display output ctrl adjust.
pub const DOCA: u8 = 0xE8;
/// Positive and negative gamma control.
pub const PGC: u8 = 0xE0;
pub const NGC: u8 = 0xE1;
pub const INVON: u8 = 0x21;
pub const DISPON: u8 = 0x29;

/// One register write of the bring-up sequence, then a wait.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Step {
    pub register: u8,
    pub params: &'static [u8],
    pub delay_ms: u32,
}

const fn step(register: u8, params: &'static [u8], delay_ms: u32) -> Step {
    Step{register, params, delay_ms}
}

/// Sent after the orientation is set, once the panel has been awake for
/// 120 ms.
pub const BRING_UP: [Step; 15] = [
    step(CSCON, &[0xC3], 0),
    step(CSCON, &[0x96], 0),
    step(DIC, &[0x01], 0),
    step(EM, &[0xC6], 0),
    step(PWR1, &[0x80, 0x45], 0),
    step(PWR2, &[0x13], 0),
    step(PWR3, &[0xA7], 0),
    step(VCMPCTL, &[0x0A], 0),
    step(DOCA, &[0x40, 0x8A, 0x00, 0x00, 0x29, 0x19, 0xA5, 0x33], 0),
    step(PGC, &[0xD0, 0x08, 0x0F, 0x06, 0x06, 0x33, 0x30,
                0x33, 0x47, 0x17, 0x13, 0x13, 0x2B, 0x31], 0),
    step(NGC, &[0xD0, 0x0A, 0x11, 0x0B, 0x09, 0x07, 0x2F,
                0x33, 0x47, 0x38, 0x15, 0x16, 0x2C, 0x32], 120),
    step(CSCON, &[0xC3], 0),
    step(CSCON, &[0x69], 120),
    step(INVON, &[], 120),
    step(DISPON, &[], 0),
];
