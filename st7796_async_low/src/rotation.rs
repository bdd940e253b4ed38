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

use crate::command_structs::*;

/// The 8 orientations of the panel: 4 rotations, each either plain or
/// mirrored. The mirrored ones suit bottom-up images such as BMP files.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    #[default]
    Deg0 = 0,
    Deg90 = 1,
    Deg180 = 2,
    Deg270 = 3,
    MirroredDeg0 = 4,
    MirroredDeg90 = 5,
    MirroredDeg180 = 6,
    MirroredDeg270 = 7,
}

impl Rotation {
    /// Any integer is accepted and wrapped into `0..8`.
    ///
    /// ```
    /// # use st7796_async_low::Rotation;
    /// assert_eq!(Rotation::new(11), Rotation::Deg270);
    /// assert_eq!(Rotation::new(-1), Rotation::MirroredDeg270);
    /// ```
    pub fn new(code: i32) -> Self {
        match code.rem_euclid(8) {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            3 => Self::Deg270,
            4 => Self::MirroredDeg0,
            5 => Self::MirroredDeg90,
            6 => Self::MirroredDeg180,
            _ => Self::MirroredDeg270,
        }
    }

    pub fn index(self) -> u8 { self as u8 }

    /// Whether rows and columns trade places, i.e. the odd codes.
    pub fn swaps_axes(self) -> bool { self.index() & 1 == 1 }

    /// The effective `(width, height)` of a panel whose native size is
    /// `width` by `height`.
    pub fn dimensions(self, width: u16, height: u16) -> (u16, u16) {
        if self.swaps_axes() { (height, width) } else { (width, height) }
    }

    /// The `MADCTL` value selecting this orientation. The panel is wired
    /// BGR, so every orientation sets the BGR bit.
    pub fn madctl(self) -> Madctl {
        use ColumnOrder::*;
        use RowColumnSwap::*;
        use RowOrder::*;
        let (rows, columns, swap) = match self {
            Self::Deg0 => (TopToBottom, RightToLeft, Unswapped),
            Self::Deg90 => (TopToBottom, LeftToRight, Swapped),
            Self::Deg180 => (BottomToTop, LeftToRight, Unswapped),
            Self::Deg270 => (BottomToTop, RightToLeft, Swapped),
            Self::MirroredDeg0 => (BottomToTop, RightToLeft, Unswapped),
            Self::MirroredDeg90 => (TopToBottom, RightToLeft, Swapped),
            Self::MirroredDeg180 => (TopToBottom, LeftToRight, Unswapped),
            Self::MirroredDeg270 => (BottomToTop, LeftToRight, Swapped),
        };
        let mut mctl = Madctl::default();
        mctl.set_row_address_order(rows)
            .set_column_address_order(columns)
            .set_row_column_swap(swap)
            .set_rgb_order(ColorComponentOrder::BlueGreenRed);
        mctl
    }
}

impl From<i32> for Rotation {
    fn from(code: i32) -> Self { Self::new(code) }
}
