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

/// A 16-bit color as the panel stores it: 5 bits of red, 6 bits of green and
/// 5 bits of blue, red in the most significant bits.
///
/// On the wire a pixel is the big-endian form of the wrapped value.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Rgb565 = Rgb565(0x0000);
    pub const NAVY: Rgb565 = Rgb565(0x000F);
    pub const DARKGREEN: Rgb565 = Rgb565(0x03E0);
    pub const DARKCYAN: Rgb565 = Rgb565(0x03EF);
    pub const MAROON: Rgb565 = Rgb565(0x7800);
    pub const PURPLE: Rgb565 = Rgb565(0x780F);
    pub const OLIVE: Rgb565 = Rgb565(0x7BE0);
    pub const LIGHTGREY: Rgb565 = Rgb565(0xD69A);
    pub const DARKGREY: Rgb565 = Rgb565(0x7BEF);
    pub const BLUE: Rgb565 = Rgb565(0x001F);
    pub const GREEN: Rgb565 = Rgb565(0x07E0);
    pub const CYAN: Rgb565 = Rgb565(0x07FF);
    pub const RED: Rgb565 = Rgb565(0xF800);
    pub const MAGENTA: Rgb565 = Rgb565(0xF81F);
    pub const YELLOW: Rgb565 = Rgb565(0xFFE0);
    pub const WHITE: Rgb565 = Rgb565(0xFFFF);
    pub const ORANGE: Rgb565 = Rgb565(0xFDA0);
    pub const GREENYELLOW: Rgb565 = Rgb565(0xB7E0);
    pub const PINK: Rgb565 = Rgb565(0xFE19);
    pub const BROWN: Rgb565 = Rgb565(0x9A60);
    pub const GOLD: Rgb565 = Rgb565(0xFEA0);
    pub const SILVER: Rgb565 = Rgb565(0xC618);
    pub const SKYBLUE: Rgb565 = Rgb565(0x867D);
    pub const VIOLET: Rgb565 = Rgb565(0x915C);
    pub const AQUA: Rgb565 = Rgb565(0x07FF);

    /// Packs 8-bit components, dropping their low bits.
    ///
    /// ```
    /// # use st7796_async_low::Rgb565;
    /// assert_eq!(Rgb565::new(255, 0, 0), Rgb565::RED);
    /// assert_eq!(Rgb565::new(0x12, 0x34, 0x56).0, 0x11AA);
    /// ```
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u16 & 0xF8) << 8) | ((green as u16 & 0xFC) << 3)
             | (blue as u16 >> 3))
    }

    /// The 5-bit red, 6-bit green and 5-bit blue fields.
    pub const fn components(self) -> (u8, u8, u8) {
        ((self.0 >> 11) as u8, ((self.0 >> 5) & 0x3F) as u8,
         (self.0 & 0x1F) as u8)
    }

    /// The two bytes sent to the panel for one pixel.
    pub const fn to_be_bytes(self) -> [u8; 2] { self.0.to_be_bytes() }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self { Self(raw) }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> u16 { color.0 }
}
