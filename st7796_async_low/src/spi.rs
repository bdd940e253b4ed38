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

//! Some traits needed to implement, in order to use [`Commands`] and
//! [`St7796`].
//!
//! The minimum would be to implement [ErrorType], [DcxPin], [CsxPin] and one
//! of [WriteU8] and [WriteU8s], then use an [`adapter`] to complete the
//! missing one of [WriteU8] and [WriteU8s]. [ResxPin] is only needed by
//! [`St7796`], which pulses the reset line while bringing the panel up.
//!
//! Boards that already have an `embedded-hal` SPI bus and three output pins
//! can skip all of this and use [`HalBus`].
//!
//! # Performance Consideration
//!
//! The reason to allow the user to implement [WriteU8] and [WriteU8s]
//! separately is for better performance. While it is natural to think
//! [WriteU8s] as a looped version of [WriteU8], there can be quite some
//! latency and throughput differences. Eg., in a RP2040 or STM32
//! microcontroller, a loop-based [WriteU8s] is suboptimal for the following
//! reasons:
//! * As soon as a byte is started to be sent, the user can already write
//!   the next byte to SPI's TX FIFO buffer. But [WriteU8::write_u8()] finishes
//!   only after the previous byte is fully sent to the device.
//! * DMA (direct memory access) is also very beneficial for [WriteU8s],
//!   especially when streaming a 2 KiB fill chunk.
//!
//! So the user should only use an [`AdapterU8`] if they doesn't care
//! about the performance difference here.
//!
//! [`Commands`]: ../struct.Commands.html
//! [`St7796`]: ../struct.St7796.html
//! [`adapter`]: ../adapters/index.html
//! [`AdapterU8`]: ../adapters/struct.AdapterU8.html
//! [`HalBus`]: ../adapters/struct.HalBus.html

use core::future::Future;

/// The transport error of a bus. Commands and drawing operations hand it
/// back to the caller untouched.
pub trait ErrorType {
    type Error;
}

/// Defines how the `DCX` pin operates.
pub trait DcxPin {
    /// Toggles the DCX pin to the `command mode` (LOW value).
    fn set_dcx_command_mode(&mut self);
    /// Toggles the DCX pin to the `data mode` (HIGH value).
    fn set_dcx_data_mode(&mut self);
}

/// Defines how the `CSX` pin operates.
///
/// The chip only listens on `SCK`/`SDA` while selected; every command or
/// data transaction is wrapped in a select/deselect pair.
pub trait CsxPin {
    /// Pulls CSX LOW.
    fn select_chip(&mut self);
    /// Pulls CSX HIGH.
    fn deselect_chip(&mut self);
}

/// Defines how the `RESX` pin operates.
pub trait ResxPin {
    fn set_resx_high(&mut self);
    fn set_resx_low(&mut self);
}

/// Defines how a single [u8] is written with the `SCK` and `SDA` pins.
///
/// Common MCUs' SPI peripheral can be used, with CPOL=0, CPHA=0 and
/// MSB-first. The ST7796 write cycle is at least 66ns, so SPI clocks up to
/// roughly 15MHz are safe without further tuning.
pub trait WriteU8<'a>: ErrorType {
    type WriteU8Done : 'a + Future<Output=Result<(), Self::Error>>;

    fn write_u8(&'a mut self, data: u8) -> Self::WriteU8Done;
}

/// Defines how a sequence of `u8` is written with the `SCK` and `SDA` pins.
pub trait WriteU8s<'a>: ErrorType {
    type WriteU8sDone : 'a + Future<Output=Result<(), Self::Error>>;

    fn write_u8s(&'a mut self, data: &'a [u8]) -> Self::WriteU8sDone;
}
