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
use crate::font::{bits_at, Bitmap};
use crate::spi::{CsxPin, DcxPin, ErrorType, WriteU8, WriteU8s};

impl<S, D> St7796<S, D>
        where S: DcxPin + CsxPin + ErrorType,
              for<'a> S: WriteU8<'a> + WriteU8s<'a> {
    /// Draws frame `index` of `bitmap` with its top-left corner at `(x, y)`.
    ///
    /// Nothing is drawn unless the whole frame fits on the panel. Palette
    /// indices without a palette entry draw black.
    pub async fn bitmap<B: Bitmap + ?Sized>(
            &mut self, bitmap: &B, x: i32, y: i32, index: usize)
            -> Result<(), S::Error> {
        let (width, height) = (i32::from(bitmap.width()),
                               i32::from(bitmap.height()));
        if !self.geometry.contains(x, y, width, height) {
            #[cfg(feature = "defmt")]
            defmt::debug!("bitmap at ({=i32}, {=i32}) skipped", x, y);
            return Ok(());
        }
        let bpp = bitmap.bpp();
        let frame_bits = usize::from(bitmap.width())
            * usize::from(bitmap.height()) * usize::from(bpp);
        let start = frame_bits.saturating_mul(index);
        let (data, palette) = (bitmap.data(), bitmap.palette());
        self.stream(x, y, width, height, |i| {
            let bit = start.saturating_add(i * usize::from(bpp));
            let entry = bits_at(data, bit, bpp);
            Rgb565(palette.get(entry).copied().unwrap_or(0))
        }).await?;
        Ok(())
    }
}
