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

/// A gesture as reported by the controller's gesture ID register.
///
/// The discriminants are the driver's own codes, not the raw register
/// values; see [Gesture::from_raw()].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Gesture {
    #[default]
    None = 0,
    MoveUp = 1,
    MoveLeft = 2,
    MoveDown = 3,
    MoveRight = 4,
    ZoomIn = 5,
    ZoomOut = 6,
}

impl Gesture {
    /// Decodes a raw gesture ID byte. Unknown bytes are [Gesture::None].
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0x21 => Self::MoveUp,
            0x23 => Self::MoveRight,
            0x20 => Self::MoveDown,
            0x22 => Self::MoveLeft,
            0x24 => Self::ZoomIn,
            0x44 => Self::ZoomOut,
            _ => Self::None,
        }
    }

    pub fn code(self) -> u8 { self as u8 }
}

impl From<u8> for Gesture {
    fn from(raw: u8) -> Self { Self::from_raw(raw) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_codes() {
        assert_eq!(Gesture::from_raw(33), Gesture::MoveUp);
        assert_eq!(Gesture::from_raw(35), Gesture::MoveRight);
        assert_eq!(Gesture::from_raw(32), Gesture::MoveDown);
        assert_eq!(Gesture::from_raw(34), Gesture::MoveLeft);
        assert_eq!(Gesture::from_raw(36), Gesture::ZoomIn);
        assert_eq!(Gesture::from_raw(68), Gesture::ZoomOut);
    }

    #[test]
    fn unknown_codes() {
        for raw in [0u8, 1, 6, 0x1F, 0x25, 0x43, 0x45, 0xFF] {
            assert_eq!(Gesture::from(raw), Gesture::None, "raw {:#x}", raw);
        }
    }

    #[test]
    fn codes() {
        let all = [Gesture::None, Gesture::MoveUp, Gesture::MoveLeft,
                   Gesture::MoveDown, Gesture::MoveRight, Gesture::ZoomIn,
                   Gesture::ZoomOut];
        for (i, g) in all.iter().enumerate() {
            assert_eq!(usize::from(g.code()), i);
        }
    }
}
