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

use crate::color::Rgb565;
use crate::display::St7796;
use crate::font::{bit_at, MonoFont, ProportionalFont};
use crate::spi::{CsxPin, DcxPin, ErrorType, WriteU8, WriteU8s};

impl<S, D> St7796<S, D>
        where S: DcxPin + CsxPin + ErrorType,
              for<'a> S: WriteU8<'a> + WriteU8s<'a> {
    /// Draws `text` in a monospace font, `color` on `background`, starting
    /// at `(x0, y0)`.
    ///
    /// Each glyph goes out in bands of 8 rows. Characters the font lacks, or
    /// that would cross the right or bottom edge, are skipped. An 8 pixel
    /// wide font only advances past drawn characters; a 16 pixel wide one
    /// advances past every character.
    pub async fn text<F: MonoFont + ?Sized>(
            &mut self, font: &F, text: &str, x0: i32, y0: i32,
            color: Rgb565, background: Rgb565) -> Result<(), S::Error> {
        let wide = font.width() != 8;
        let width: i32 = if wide { 16 } else { 8 };
        let height = i32::from(font.height());
        let bands = usize::from(font.height() / 8).max(1);
        // Bytes of one 8-row band, and of one glyph.
        let band_size = width as usize;
        let glyph_size = band_size * bands;

        let mut x = x0;
        for ch in text.chars() {
            let fits = font.covers(ch)
                && x.saturating_add(width) <= i32::from(self.width())
                && y0.saturating_add(height) <= i32::from(self.height());
            if fits {
                let glyph = (u32::from(ch) - font.first()) as usize * glyph_size;
                for band in 0..bands {
                    let start = (glyph + band * band_size) * 8;
                    let glyphs = font.glyphs();
                    self.stream(x, y0 + 8 * band as i32, width, 8, |i| {
                        if bit_at(glyphs, start + i) { color } else { background }
                    }).await?;
                }
            } else {
                #[cfg(feature = "defmt")]
                defmt::debug!("glyph {=u32} at {=i32} skipped", u32::from(ch), x);
            }
            if fits || wide {
                x = x.saturating_add(width);
            }
        }
        Ok(())
    }

    /// Draws `text` in a proportional font, `fg` on `bg`, starting at
    /// `(x, y)`. Characters the font lacks are skipped without advancing;
    /// those crossing the right or bottom edge are skipped but still
    /// advance.
    pub async fn write<F: ProportionalFont + ?Sized>(
            &mut self, font: &F, text: &str, x: i32, y: i32,
            fg: Rgb565, bg: Rgb565) -> Result<(), S::Error> {
        let height = i32::from(font.height());
        let mut x = x;
        for ch in text.chars() {
            let glyph = match font.glyph(ch) {
                Some(glyph) => glyph,
                None => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("no glyph for {=u32}", u32::from(ch));
                    continue;
                }
            };
            let width = i32::from(glyph.width);
            if self.geometry.contains(x, y, width, height) {
                let bitmaps = font.bitmaps();
                self.stream(x, y, width, height, |i| {
                    if bit_at(bitmaps, glyph.bit_offset + i) { fg } else { bg }
                }).await?;
            }
            x = x.saturating_add(width);
        }
        Ok(())
    }

    /// How wide [St7796::write()] would draw `text`.
    pub fn write_width<F: ProportionalFont + ?Sized>(&self, font: &F, text: &str)
            -> u32 {
        font.text_width(text)
    }
}
