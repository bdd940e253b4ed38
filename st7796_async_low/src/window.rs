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

//! Validation of address windows against the effective panel size.

/// An address window in panel coordinates, i.e. with the origin offset
/// already added. Both ends are inclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressWindow {
    pub columns: (u16, u16),
    pub rows: (u16, u16),
}

/// The part of the controller state that drawing depends on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    /// Effective width under the current rotation.
    pub width: u16,
    /// Effective height under the current rotation.
    pub height: u16,
    pub xstart: u16,
    pub ystart: u16,
}

impl Geometry {
    /// Maps `(x0, y0)`-`(x1, y1)` to an [AddressWindow], or `None` when
    /// either axis breaks `0 <= start <= end <= extent`.
    ///
    /// An end equal to the extent is accepted, one past the last pixel.
    /// The panel ignores what falls outside its memory.
    pub fn window(&self, x0: i32, y0: i32, x1: i32, y1: i32)
            -> Option<AddressWindow> {
        Some(AddressWindow{
            columns: span(x0, x1, self.width, self.xstart)?,
            rows: span(y0, y1, self.height, self.ystart)?,
        })
    }

    /// Whether a `width` by `height` block at `(x, y)` lies fully on the
    /// panel.
    pub fn contains(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        x >= 0 && y >= 0 && width > 0 && height > 0
            && x.saturating_add(width) <= i32::from(self.width)
            && y.saturating_add(height) <= i32::from(self.height)
    }
}

fn span(start: i32, end: i32, extent: u16, offset: u16) -> Option<(u16, u16)> {
    if start < 0 || start > end || end > i32::from(extent) {
        return None;
    }
    let shift = |v: i32| u16::try_from(v + i32::from(offset)).ok();
    Some((shift(start)?, shift(end)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: Geometry = Geometry{width: 320, height: 480, xstart: 0, ystart: 0};

    #[test]
    fn accepts_the_full_panel() {
        assert_eq!(PANEL.window(0, 0, 319, 479), Some(AddressWindow{
            columns: (0, 319), rows: (0, 479),
        }));
        assert_eq!(PANEL.window(5, 7, 5, 7), Some(AddressWindow{
            columns: (5, 5), rows: (7, 7),
        }));
    }

    #[test]
    fn end_may_equal_extent() {
        assert!(PANEL.window(0, 0, 320, 480).is_some());
        assert!(PANEL.window(0, 0, 321, 10).is_none());
        assert!(PANEL.window(0, 0, 10, 481).is_none());
    }

    #[test]
    fn rejects_each_axis_independently() {
        assert!(PANEL.window(-1, 0, 10, 10).is_none());
        assert!(PANEL.window(0, -1, 10, 10).is_none());
        assert!(PANEL.window(11, 0, 10, 10).is_none());
        assert!(PANEL.window(0, 11, 10, 10).is_none());
    }

    #[test]
    fn adds_the_origin() {
        let g = Geometry{xstart: 10, ystart: 20, ..PANEL};
        assert_eq!(g.window(1, 2, 3, 4), Some(AddressWindow{
            columns: (11, 13), rows: (22, 24),
        }));
        let far = Geometry{xstart: u16::MAX, ..PANEL};
        assert!(far.window(1, 0, 1, 0).is_none());
    }

    #[test]
    fn contains() {
        assert!(PANEL.contains(0, 0, 320, 480));
        assert!(PANEL.contains(312, 472, 8, 8));
        assert!(!PANEL.contains(313, 0, 8, 8));
        assert!(!PANEL.contains(0, 473, 8, 8));
        assert!(!PANEL.contains(-1, 0, 8, 8));
        assert!(!PANEL.contains(0, 0, 0, 8));
    }
}
