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

//! This crate drives 4-wire serial ST7796 TFT panels in RGB565.
//!
//! The lower layer, [Commands](crate::Commands), provides the native ST7796
//! commands in their original form. A user of this crate should implement
//! the write traits in [crate::spi] (or use
//! [HalBus](crate::adapters::HalBus) over an `embedded-hal` SPI bus and
//! pins), then either wrap it with [Commands](crate::Commands) or hand it to
//! [St7796](crate::St7796), which runs the panel bring-up and draws shapes,
//! text and bitmaps through a fixed-size pixel buffer.
//!
//! Everything outside the panel is clipped by dropping: a shape, glyph or
//! bitmap that does not fit is simply not sent.

#![cfg_attr(not(test), no_std)]

pub mod adapters;
mod bitmap;
mod color;
pub use color::Rgb565;
mod command_structs;
pub use command_structs::{
    Colmod, ColorComponentOrder, ColumnOrder, Madctl, PixelFormat,
    RowColumnSwap, RowOrder};
mod commands;
pub use commands::{Commands, RamWriter};
mod display;
pub use display::{St7796, BUFFER_PIXELS};
pub mod font;
pub use font::{
    Bitmap, Glyph, MonoFont, ProportionalFont, StaticBitmap, StaticMonoFont,
    StaticProportionalFont};
pub mod panel;
pub mod raster;
mod rotation;
pub use rotation::Rotation;
pub mod spi;
mod text;
mod window;
pub use window::{AddressWindow, Geometry};

#[cfg(test)] pub mod testing_device;
