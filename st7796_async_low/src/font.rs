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

//! Read-only views over font and image assets.
//!
//! The assets themselves are produced by external converters; this crate
//! only reads them. All bit streams are packed MSB first. Reading past the
//! end of an asset yields zero bits rather than panicking, so a truncated
//! asset draws garbage but never faults.

/// A monospace bitmap font, 8 or 16 pixels wide.
///
/// Glyph rows are packed MSB first, `width() / 8` bytes per row, glyphs back
/// to back starting at `first()`.
pub trait MonoFont {
    /// 8 or 16. Any other width is drawn as 16.
    fn width(&self) -> u8;
    /// 8 or 16 for 8-wide fonts; 16 or 32 for 16-wide fonts.
    fn height(&self) -> u8;
    /// Code of the first glyph.
    fn first(&self) -> u32;
    /// One past the code of the last glyph.
    fn last(&self) -> u32;
    fn glyphs(&self) -> &[u8];

    /// Whether `ch` has a glyph.
    fn covers(&self, ch: char) -> bool {
        (self.first()..self.last()).contains(&u32::from(ch))
    }
}

/// A variable width font converted from a TrueType font.
pub trait ProportionalFont {
    fn height(&self) -> u8;
    /// Every covered character, in glyph order.
    fn map(&self) -> &str;
    /// Size in bytes of each entry of `offsets()`, 1 to 3.
    fn offset_width(&self) -> u8;
    /// Big-endian bit offsets into `bitmaps()`, one per glyph.
    fn offsets(&self) -> &[u8];
    /// Advance width of each glyph.
    fn widths(&self) -> &[u8];
    /// The glyph images, each `width * height` bits, row after row.
    fn bitmaps(&self) -> &[u8];

    /// Finds the glyph of `ch`, or `None` if the font does not cover it.
    fn glyph(&self, ch: char) -> Option<Glyph> {
        let index = self.map().chars().position(|c| c == ch)?;
        let size = usize::from(self.offset_width());
        let offset = (0..size).fold(0usize, |acc, i| {
            let byte = self.offsets().get(index * size + i).copied()
                .unwrap_or(0);
            (acc << 8) | usize::from(byte)
        });
        let width = self.widths().get(index).copied().unwrap_or(0);
        Some(Glyph{width, bit_offset: offset})
    }

    /// Width in pixels of `text`, skipping characters the font lacks.
    fn text_width(&self, text: &str) -> u32 {
        text.chars()
            .filter_map(|ch| self.glyph(ch))
            .map(|g| u32::from(g.width))
            .sum()
    }
}

/// Where a [ProportionalFont] glyph lives.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    pub width: u8,
    pub bit_offset: usize,
}

/// A palette-indexed image, possibly holding several frames of the same
/// size back to back.
pub trait Bitmap {
    fn width(&self) -> u16;
    fn height(&self) -> u16;
    /// Bits per pixel, i.e. per palette index.
    fn bpp(&self) -> u8;
    /// RGB565 values.
    fn palette(&self) -> &[u16];
    fn data(&self) -> &[u8];
}

/// A [MonoFont] over static tables.
#[derive(Clone, Copy, Debug)]
pub struct StaticMonoFont {
    pub width: u8,
    pub height: u8,
    pub first: u32,
    pub last: u32,
    pub glyphs: &'static [u8],
}

impl MonoFont for StaticMonoFont {
    fn width(&self) -> u8 { self.width }
    fn height(&self) -> u8 { self.height }
    fn first(&self) -> u32 { self.first }
    fn last(&self) -> u32 { self.last }
    fn glyphs(&self) -> &[u8] { self.glyphs }
}

/// A [ProportionalFont] over static tables.
#[derive(Clone, Copy, Debug)]
pub struct StaticProportionalFont {
    pub height: u8,
    pub map: &'static str,
    pub offset_width: u8,
    pub offsets: &'static [u8],
    pub widths: &'static [u8],
    pub bitmaps: &'static [u8],
}

impl ProportionalFont for StaticProportionalFont {
    fn height(&self) -> u8 { self.height }
    fn map(&self) -> &str { self.map }
    fn offset_width(&self) -> u8 { self.offset_width }
    fn offsets(&self) -> &[u8] { self.offsets }
    fn widths(&self) -> &[u8] { self.widths }
    fn bitmaps(&self) -> &[u8] { self.bitmaps }
}

/// A [Bitmap] over static tables.
#[derive(Clone, Copy, Debug)]
pub struct StaticBitmap {
    pub width: u16,
    pub height: u16,
    pub bpp: u8,
    pub palette: &'static [u16],
    pub data: &'static [u8],
}

impl Bitmap for StaticBitmap {
    fn width(&self) -> u16 { self.width }
    fn height(&self) -> u16 { self.height }
    fn bpp(&self) -> u8 { self.bpp }
    fn palette(&self) -> &[u16] { self.palette }
    fn data(&self) -> &[u8] { self.data }
}

/// Bit `index` of an MSB-first stream; `false` past the end.
pub(crate) fn bit_at(data: &[u8], index: usize) -> bool {
    data.get(index / 8).map_or(false, |b| b & (0x80 >> (index % 8)) != 0)
}

/// Reads `count` bits starting at `index` as an unsigned number, first bit
/// most significant.
pub(crate) fn bits_at(data: &[u8], index: usize, count: u8) -> usize {
    (0..usize::from(count))
        .map(|i| bit_at(data, index.saturating_add(i)))
        .fold(0, |acc, bit| (acc << 1) | usize::from(bit))
}
