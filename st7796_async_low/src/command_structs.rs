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

use paste::paste;

macro_rules! define_pub_bit_type {
    ($name:ident, zero: $zero_value:ident, one: $one_value:ident,
                  doc: $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum $name {
            $zero_value = 0,
            $one_value = 1,
        }
        impl $name {
            fn from_bool(b: bool) -> Self {  // Private.
                if b { Self::$one_value } else { Self::$zero_value }
            }
            fn to_bool(&self) -> bool {  // Private.
                match *self {
                    Self::$zero_value => false,
                    Self::$one_value => true,
                }
            }
        }
        impl Default for $name {
            fn default() -> Self { Self::$zero_value }
        }
        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter)
                    -> ::core::fmt::Result {
                <Self as core::fmt::Debug>::fmt(self, f)
            }
        }
    };
}
macro_rules! bit_field {
    ($name:ident, type: $type:ty, bit_offset: $i:expr) => {
        pub fn $name(&self) -> $type {
            <$type>::from_bool((self.data >> $i) & 1 == 1)
        }
        paste! {
            pub fn [<set_ $name>](&mut self, value: $type) -> &mut Self {
                if value.to_bool() {
                    self.data |= 1 << $i;
                } else {
                    self.data &= !(1 << $i);
                }
                self
            }
        }
    }
}

/// Defines the orientation parameters of the screen (the `MADCTL`
/// register, `36h`).
///
/// # Example
///
/// ```
/// # use st7796_async_low::*;
/// let mut mctl = Madctl::default();
/// mctl.set_row_address_order(RowOrder::TopToBottom)
///     .set_column_address_order(ColumnOrder::RightToLeft)
///     .set_row_column_swap(RowColumnSwap::Unswapped)
///     .set_rgb_order(ColorComponentOrder::BlueGreenRed);
/// assert_eq!(mctl.column_address_order(), ColumnOrder::RightToLeft);
/// assert_eq!(u8::from(mctl), 0x48);
/// // Can invoke `Commands::madctl(mctl)` to send it to the LCD.
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Madctl {
    data: u8,
}
impl Madctl {
    bit_field!(row_address_order, type: RowOrder, bit_offset: 7);
    bit_field!(column_address_order, type: ColumnOrder, bit_offset: 6);
    bit_field!(row_column_swap, type: RowColumnSwap, bit_offset: 5);
    bit_field!(vertical_refresh_order, type: RowOrder, bit_offset: 4);
    bit_field!(rgb_order, type: ColorComponentOrder, bit_offset: 3);
    bit_field!(horizontal_refresh_order, type: ColumnOrder, bit_offset: 2);
}
impl From<Madctl> for u8 {
    fn from(mctl: Madctl) -> u8 { mctl.data }
}

define_pub_bit_type!(RowOrder, zero: TopToBottom, one: BottomToTop,
                     doc: "The row order of the LCD pixels (`MY`/`ML`).");
define_pub_bit_type!(ColumnOrder, zero: LeftToRight, one: RightToLeft,
                     doc: "The column order of the LCD pixels (`MX`/`MH`).");
define_pub_bit_type!(RowColumnSwap, zero: Unswapped, one: Swapped,
                     doc: "Whether to swap the row and column definitions, \
                     i.e., to switch between the portrait and landscape mode \
                     (`MV`).");
define_pub_bit_type!(ColorComponentOrder, zero: RedGreenBlue, one: BlueGreenRed,
                     doc: "R/G/B component order inside a pixel.");

/// Bit depth of one pixel on one of the two interfaces of the ST7796.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    /// 4 bits per component.
    Bits12 = 0b011,
    /// Red has 5 bits; green has 6 bits; blue has 5 bits.
    Bits16 = 0b101,
    /// 6 bits per component.
    Bits18 = 0b110,
    /// 8 bits per component, truncated to 6 bits by the panel.
    Bits24 = 0b111,
}

/// Interface pixel format (the `COLMOD` register, `3Ah`).
///
/// The high nibble configures the RGB (DPI) interface and the low nibble the
/// MCU (DBI) interface this crate drives. Only bits `6:4` and `2:0` are
/// meaningful; the encoding masks the rest off.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Colmod {
    pub rgb_interface: PixelFormat,
    pub control_interface: PixelFormat,
}
impl Colmod {
    /// 65K colors on both interfaces; the format every drawing routine of
    /// this crate encodes.
    pub const RGB565: Colmod = Colmod{
        rgb_interface: PixelFormat::Bits16,
        control_interface: PixelFormat::Bits16,
    };
}
impl Default for Colmod {
    fn default() -> Self { Self::RGB565 }
}
impl From<Colmod> for u8 {
    fn from(colmod: Colmod) -> u8 {
        ((colmod.rgb_interface as u8) << 4 | colmod.control_interface as u8)
            & 0x77
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn madctl_defaults_to_zero() {
        let mctl = Madctl::default();
        assert_eq!(u8::from(mctl), 0);
        assert_eq!(mctl.row_address_order(), RowOrder::TopToBottom);
        assert_eq!(mctl.rgb_order(), ColorComponentOrder::RedGreenBlue);
    }

    #[test]
    fn madctl_every_bit() {
        let mut mctl = Madctl::default();
        mctl.set_row_address_order(RowOrder::BottomToTop)
            .set_column_address_order(ColumnOrder::RightToLeft)
            .set_row_column_swap(RowColumnSwap::Swapped)
            .set_vertical_refresh_order(RowOrder::BottomToTop)
            .set_rgb_order(ColorComponentOrder::BlueGreenRed)
            .set_horizontal_refresh_order(ColumnOrder::RightToLeft);
        assert_eq!(u8::from(mctl), 0xFC);
        assert_eq!(mctl.row_column_swap(), RowColumnSwap::Swapped);
        assert_eq!(mctl.horizontal_refresh_order(), ColumnOrder::RightToLeft);
    }

    #[test]
    fn madctl_clearing_a_bit() {
        let mut mctl = Madctl::default();
        mctl.set_row_column_swap(RowColumnSwap::Swapped)
            .set_rgb_order(ColorComponentOrder::BlueGreenRed);
        assert_eq!(u8::from(mctl), 0x28);
        mctl.set_row_column_swap(RowColumnSwap::Unswapped);
        assert_eq!(u8::from(mctl), 0x08);
    }

    #[test]
    fn colmod_encoding() {
        assert_eq!(u8::from(Colmod::RGB565), 0x55);
        assert_eq!(u8::from(Colmod{
            rgb_interface: PixelFormat::Bits18,
            control_interface: PixelFormat::Bits12,
        }), 0x63);
        assert_eq!(u8::from(Colmod{
            rgb_interface: PixelFormat::Bits24,
            control_interface: PixelFormat::Bits24,
        }), 0x77);
    }
}
