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

use embedded_hal_async::delay::DelayNs;

use crate::color::Rgb565;
use crate::command_structs::Colmod;
use crate::commands::{Commands, RamWriter};
use crate::panel;
use crate::raster;
use crate::rotation::Rotation;
use crate::spi::{CsxPin, DcxPin, ErrorType, ResxPin, WriteU8, WriteU8s};
use crate::window::Geometry;

/// Pixels staged per write when streaming a fill.
pub const BUFFER_PIXELS: usize = 1024;

/// A brought-up ST7796 panel with drawing routines on top of [Commands].
///
/// Coordinates are signed and relative to the origin set by
/// [St7796::set_position()]. Anything that would address memory outside
/// `0..=width` by `0..=height` is dropped without touching the bus, and
/// without an error: bus errors are the only errors.
///
/// A fixed 2 KiB buffer stages fills and glyphs, so drawing never
/// allocates. The controller is not meant to be shared; wrap it in a mutex
/// if several tasks draw.
pub struct St7796<S, D> {
    pub(crate) cmds: Commands<S>,
    pub(crate) delay: D,
    init_width: u16,
    init_height: u16,
    rotation: Rotation,
    pub(crate) geometry: Geometry,
    pub(crate) buffer: [u8; BUFFER_PIXELS * 2],
}

impl<S, D> St7796<S, D>
        where S: DcxPin + CsxPin + ResxPin + ErrorType,
              for<'a> S: WriteU8<'a> + WriteU8s<'a>,
              D: DelayNs {
    /// Resets and configures a `width` by `height` panel (in its native
    /// orientation), then clears it to black.
    pub async fn new(spi: S, delay: D, width: u16, height: u16,
                     rotation: Rotation) -> Result<Self, S::Error> {
        let (w, h) = rotation.dimensions(width, height);
        let mut this = Self{
            cmds: Commands::new(spi),
            delay,
            init_width: width,
            init_height: height,
            rotation,
            geometry: Geometry{width: w, height: h, xstart: 0, ystart: 0},
            buffer: [0; BUFFER_PIXELS * 2],
        };
        this.hard_reset().await;
        this.soft_reset().await?;
        this.sleep_mode(false).await?;
        this.cmds.colmod(Colmod::RGB565).await?;
        this.delay.delay_ms(50).await;
        this.set_rotation(rotation).await?;

        this.delay.delay_ms(120).await;
        for step in panel::BRING_UP.iter() {
            this.cmds.raw(step.register, step.params).await?;
            if step.delay_ms > 0 {
                this.delay.delay_ms(step.delay_ms).await;
            }
        }
        this.delay.delay_ms(500).await;
        this.fill(Rgb565::BLACK).await?;
        #[cfg(feature = "defmt")]
        defmt::debug!("st7796 up: {=u16}x{=u16}, {}", w, h, rotation);
        Ok(this)
    }

    /// Pulses RESX while the chip is selected.
    pub async fn hard_reset(&mut self) {
        self.cmds.select_chip();
        self.cmds.set_resx(true);
        self.delay.delay_ms(50).await;
        self.cmds.set_resx(false);
        self.delay.delay_ms(50).await;
        self.cmds.set_resx(true);
        self.delay.delay_ms(150).await;
        self.cmds.deselect_chip();
    }
}

impl<S, D> St7796<S, D>
        where S: DcxPin + CsxPin + ErrorType,
              for<'a> S: WriteU8<'a> + WriteU8s<'a>,
              D: DelayNs {
    pub async fn soft_reset(&mut self) -> Result<(), S::Error> {
        self.cmds.swreset().await?;
        self.delay.delay_ms(150).await;
        Ok(())
    }

    /// `true` enters the sleep mode, `false` leaves it.
    pub async fn sleep_mode(&mut self, value: bool) -> Result<(), S::Error> {
        if value { self.cmds.slpin().await } else { self.cmds.slpout().await }
    }

    pub async fn inversion_mode(&mut self, value: bool)
            -> Result<(), S::Error> {
        if value { self.cmds.invon().await } else { self.cmds.invoff().await }
    }

    /// Turns the screen on or off. The frame memory is kept either way.
    pub async fn display_mode(&mut self, on: bool) -> Result<(), S::Error> {
        if on { self.cmds.dispon().await } else { self.cmds.dispoff().await }
    }
}

impl<S, D> St7796<S, D>
        where S: DcxPin + CsxPin + ErrorType,
              for<'a> S: WriteU8<'a> + WriteU8s<'a> {
    /// Sends `MADCTL` for `rotation` and swaps the effective width and
    /// height accordingly. Plain integers wrap modulo 8.
    pub async fn set_rotation(&mut self, rotation: impl Into<Rotation>)
            -> Result<(), S::Error> {
        let rotation = rotation.into();
        self.cmds.madctl(rotation.madctl()).await?;
        let (width, height) =
            rotation.dimensions(self.init_width, self.init_height);
        self.rotation = rotation;
        self.geometry.width = width;
        self.geometry.height = height;
        Ok(())
    }

    pub fn rotation(&self) -> Rotation { self.rotation }
    /// Width under the current rotation.
    pub fn width(&self) -> u16 { self.geometry.width }
    /// Height under the current rotation.
    pub fn height(&self) -> u16 { self.geometry.height }

    /// Moves the origin of all later drawing to `(x, y)` in panel memory.
    /// Panels smaller than the controller memory need this.
    pub fn set_position(&mut self, x: u16, y: u16) {
        self.geometry.xstart = x;
        self.geometry.ystart = y;
    }

    pub fn position(&self) -> (u16, u16) {
        (self.geometry.xstart, self.geometry.ystart)
    }

    /// Direct access to the commands, e.g. for partial mode.
    pub fn commands(&mut self) -> &mut Commands<S> { &mut self.cmds }

    /// Addresses the window from `(x0, y0)` to `(x1, y1)`, both inclusive,
    /// and starts a memory write. Returns `false`, having sent nothing, when
    /// the window is off limits.
    pub async fn set_window(&mut self, x0: i32, y0: i32, x1: i32, y1: i32)
            -> Result<bool, S::Error> {
        let ram = open_window(&mut self.cmds, self.geometry, x0, y0, x1, y1)
            .await?;
        Ok(ram.is_some())
    }

    /// Streams raw big-endian RGB565 data into the last window.
    pub async fn write_pixels(&mut self, data: &[u8]) -> Result<(), S::Error> {
        self.cmds.write_data(data).await
    }

    /// Writes `buffer`, holding `width * height` pixels, at `(x, y)`.
    pub async fn blit_buffer(&mut self, buffer: &[u8], x: i32, y: i32,
                             width: i32, height: i32) -> Result<(), S::Error> {
        let (x1, y1) = (last(x, width), last(y, height));
        if let Some(mut ram) =
                open_window(&mut self.cmds, self.geometry, x, y, x1, y1)
                .await? {
            ram.write_u8s(buffer).await?;
        }
        Ok(())
    }

    /// Fills a rectangle, `BUFFER_PIXELS` pixels per write.
    pub async fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32,
                           color: Rgb565) -> Result<(), S::Error> {
        let (x1, y1) = (last(x, width), last(y, height));
        let mut ram = match
                open_window(&mut self.cmds, self.geometry, x, y, x1, y1)
                .await? {
            Some(ram) => ram,
            None => return Ok(()),
        };
        // The window check guarantees both are at least 1.
        let count = width as usize * height as usize;
        let staged = count.min(BUFFER_PIXELS);
        let pixel = color.to_be_bytes();
        for p in self.buffer[..staged * 2].chunks_exact_mut(2) {
            p.copy_from_slice(&pixel);
        }
        for _ in 0..count / BUFFER_PIXELS {
            ram.write_u8s(&self.buffer).await?;
        }
        let rest = count % BUFFER_PIXELS;
        if rest > 0 {
            ram.write_u8s(&self.buffer[..rest * 2]).await?;
        }
        Ok(())
    }

    /// Writes a `width` by `height` block whose `i`-th pixel, row after row,
    /// is `pixel(i)`. Returns `false`, having sent nothing, for a block off
    /// the panel.
    pub(crate) async fn stream<F>(&mut self, x: i32, y: i32, width: i32,
                                  height: i32, mut pixel: F)
            -> Result<bool, S::Error>
            where F: FnMut(usize) -> Rgb565 {
        let (x1, y1) = (last(x, width), last(y, height));
        let mut ram = match
                open_window(&mut self.cmds, self.geometry, x, y, x1, y1)
                .await? {
            Some(ram) => ram,
            None => return Ok(false),
        };
        let count = width as usize * height as usize;
        let mut done = 0;
        while done < count {
            let n = (count - done).min(BUFFER_PIXELS);
            for (i, p) in self.buffer[..n * 2].chunks_exact_mut(2).enumerate() {
                p.copy_from_slice(&pixel(done + i).to_be_bytes());
            }
            ram.write_u8s(&self.buffer[..n * 2]).await?;
            done += n;
        }
        Ok(true)
    }

    pub async fn fill(&mut self, color: Rgb565) -> Result<(), S::Error> {
        let (width, height) = (self.geometry.width, self.geometry.height);
        self.fill_rect(0, 0, width.into(), height.into(), color).await
    }

    pub async fn pixel(&mut self, x: i32, y: i32, color: Rgb565)
            -> Result<(), S::Error> {
        self.fill_rect(x, y, 1, 1, color).await
    }

    pub async fn hline(&mut self, x: i32, y: i32, length: i32, color: Rgb565)
            -> Result<(), S::Error> {
        self.fill_rect(x, y, length, 1, color).await
    }

    pub async fn vline(&mut self, x: i32, y: i32, length: i32, color: Rgb565)
            -> Result<(), S::Error> {
        self.fill_rect(x, y, 1, length, color).await
    }

    /// Draws a rectangle outline.
    pub async fn rect(&mut self, x: i32, y: i32, width: i32, height: i32,
                      color: Rgb565) -> Result<(), S::Error> {
        self.hline(x, y, width, color).await?;
        self.vline(x, y, height, color).await?;
        self.vline(last(x, width), y, height, color).await?;
        self.hline(x, last(y, height), width, color).await
    }

    /// Draws a one pixel wide line, one pixel at a time.
    pub async fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32,
                      color: Rgb565) -> Result<(), S::Error> {
        for (x, y) in raster::line(x0, y0, x1, y1) {
            self.pixel(x, y, color).await?;
        }
        Ok(())
    }

    pub async fn circle(&mut self, x0: i32, y0: i32, radius: u16,
                        color: Rgb565) -> Result<(), S::Error> {
        for (x, y) in raster::circle_points(x0, y0, radius) {
            self.pixel(x, y, color).await?;
        }
        Ok(())
    }

    pub async fn fill_circle(&mut self, x0: i32, y0: i32, radius: u16,
                             color: Rgb565) -> Result<(), S::Error> {
        for s in raster::circle_spans(x0, y0, radius) {
            self.vline(s.x, s.y, s.len, color).await?;
        }
        Ok(())
    }

    /// Draws the three edges in the given order.
    pub async fn triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32,
                          x2: i32, y2: i32, color: Rgb565)
            -> Result<(), S::Error> {
        self.line(x0, y0, x1, y1, color).await?;
        self.line(x1, y1, x2, y2, color).await?;
        self.line(x2, y2, x0, y0, color).await
    }

    pub async fn fill_triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32,
                               x2: i32, y2: i32, color: Rgb565)
            -> Result<(), S::Error> {
        for s in raster::triangle_spans(x0, y0, x1, y1, x2, y2) {
            self.hline(s.x, s.y, s.len, color).await?;
        }
        Ok(())
    }

    /// Gives the bus and the delay back.
    pub fn release(self) -> (S, D) {
        (self.cmds.release(), self.delay)
    }
}

/// Last coordinate of a run of `length` pixels starting at `start`.
pub(crate) fn last(start: i32, length: i32) -> i32 {
    start.saturating_add(length).saturating_sub(1)
}

/// Sends `CASET`, `RASET` and `RAMWR` for a valid window. Sends nothing and
/// returns `None` otherwise.
pub(crate) async fn open_window<'c, S>(
        cmds: &'c mut Commands<S>, geometry: Geometry,
        x0: i32, y0: i32, x1: i32, y1: i32)
        -> Result<Option<RamWriter<'c, S>>, S::Error>
        where S: DcxPin + CsxPin + ErrorType,
              for<'a> S: WriteU8<'a> + WriteU8s<'a> {
    let window = match geometry.window(x0, y0, x1, y1) {
        Some(window) => window,
        None => {
            #[cfg(feature = "defmt")]
            defmt::debug!("window ({=i32}, {=i32})-({=i32}, {=i32}) dropped",
                          x0, y0, x1, y1);
            return Ok(None);
        }
    };
    cmds.caset(window.columns.0, window.columns.1).await?;
    cmds.raset(window.rows.0, window.rows.1).await?;
    Ok(Some(cmds.ramwr().await?))
}
