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

//! The FT6336U register map.

/// The fixed 7-bit I2C address.
pub const ADDRESS: u8 = 0x38;

/// The value of [ID_G_CIPHER_LOW] on an FT6336U.
pub const CHIP_CODE_FT6336U: u8 = 0x02;

pub const MODE_SWITCH: u8 = 0x00;
/// Number of active contacts, 0 to 2.
pub const TD_STATUS: u8 = 0x02;

pub const P1_XH: u8 = 0x03;
pub const P1_XL: u8 = 0x04;
pub const P1_YH: u8 = 0x05;
pub const P1_YL: u8 = 0x06;
pub const P1_WEIGHT: u8 = 0x07;
pub const P1_MISC: u8 = 0x08;
pub const P2_XH: u8 = 0x09;
pub const P2_XL: u8 = 0x0A;
pub const P2_YH: u8 = 0x0B;
pub const P2_YL: u8 = 0x0C;
pub const P2_WEIGHT: u8 = 0x0D;
pub const P2_MISC: u8 = 0x0E;

pub const ID_G_THGROUP: u8 = 0x80;
pub const ID_G_THDIFF: u8 = 0x85;
pub const ID_G_CTRL: u8 = 0x86;
pub const ID_G_TIMEENTERMONITOR: u8 = 0x87;
pub const ID_G_PERIODACTIVE: u8 = 0x88;
pub const ID_G_PERIODMONITOR: u8 = 0x89;
pub const ID_G_FREQ_HOPPING_EN: u8 = 0x8B;
pub const ID_G_TEST_MODE_FILTER: u8 = 0x96;
pub const ID_G_CIPHER_MID: u8 = 0x9F;
pub const ID_G_CIPHER_LOW: u8 = 0xA0;
pub const ID_G_LIB_VERSION_H: u8 = 0xA1;
pub const ID_G_LIB_VERSION_L: u8 = 0xA2;
pub const ID_G_CIPHER_HIGH: u8 = 0xA3;
pub const ID_G_MODE: u8 = 0xA4;
pub const ID_G_PMODE: u8 = 0xA5;
pub const ID_G_FIRMID: u8 = 0xA6;
pub const ID_G_FOCALTECH_ID: u8 = 0xA8;
pub const ID_G_VIRTUAL_KEY_THRES: u8 = 0xA9;
pub const ID_G_IS_CALLING: u8 = 0xAD;
pub const ID_G_FACTORY_MODE: u8 = 0xAE;
pub const ID_G_RELEASE_CODE_ID: u8 = 0xAF;
pub const ID_G_FACE_DEC_MODE: u8 = 0xB0;
pub const ID_G_STATE: u8 = 0xBC;
pub const ID_G_GESTURE_ENABLE: u8 = 0xD0;
pub const GESTURE_ID: u8 = 0xD3;

/// Coordinates are 12 bits wide; the top nibble of the high byte carries
/// event flags.
pub const COORDINATE_MASK: u16 = 0x0FFF;
