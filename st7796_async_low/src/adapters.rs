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

use core::convert::Infallible;
use core::future::{ready, Future, Ready};
use core::pin::Pin;
use core::task::{Context, Poll};

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::spi;
use spi::{CsxPin, DcxPin, ErrorType, ResxPin, WriteU8, WriteU8s};

/// A helper to add [WriteU8s] support when [WriteU8] is implemented.
///
/// Supposedly **not** very efficient. See the Performance Consideration section
/// of the module [spi].
pub struct AdapterU8<W> { w: W }

impl<W> AdapterU8<W> {
    pub fn new(w: W) -> Self { Self{w} }
    pub fn release(self) -> W { self.w }
}

impl<W: ErrorType> ErrorType for AdapterU8<W> {
    type Error = W::Error;
}

impl<W: DcxPin> DcxPin for AdapterU8<W> {
    fn set_dcx_command_mode(&mut self) { self.w.set_dcx_command_mode(); }
    fn set_dcx_data_mode(&mut self) { self.w.set_dcx_data_mode(); }
}

impl<W: CsxPin> CsxPin for AdapterU8<W> {
    fn select_chip(&mut self) { self.w.select_chip(); }
    fn deselect_chip(&mut self) { self.w.deselect_chip(); }
}

impl<W: ResxPin> ResxPin for AdapterU8<W> {
    fn set_resx_high(&mut self) { self.w.set_resx_high(); }
    fn set_resx_low(&mut self) { self.w.set_resx_low(); }
}

impl<'a, W: WriteU8<'a>> WriteU8<'a> for AdapterU8<W> {
    type WriteU8Done = <W as WriteU8<'a>>::WriteU8Done;

    fn write_u8(&'a mut self, data: u8) -> Self::WriteU8Done {
        self.w.write_u8(data)
    }
}

impl<'a, W> WriteU8s<'a> for AdapterU8<W>
        where W: 'a + ErrorType, for<'w> W: WriteU8<'w> {
    type WriteU8sDone = RepeatU8<'a, W>;

    fn write_u8s(&'a mut self, data: &'a [u8]) -> Self::WriteU8sDone {
        RepeatU8{data, w: &mut self.w, current_write: None}
    }
}

/// Future of [AdapterU8::write_u8s()]. Stops at the first failed byte; the
/// remaining bytes are not sent.
pub struct RepeatU8<'a, W: ErrorType + for<'w> WriteU8<'w>> {
    data: &'a [u8],
    // Lifetime is also 'a. `current_write` when not `None` can actually borrow
    // `*w` in mut.
    w: *mut W,
    current_write: Option<<W as WriteU8<'a>>::WriteU8Done>,
}

impl<'a, W> Future for RepeatU8<'a, W>
        where W: 'a + ErrorType, for<'w> W: WriteU8<'w> {
    type Output = Result<(), <W as ErrorType>::Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // Safety: Only `Self::current_write` needs pinning. The implementation
        // below indeed never moves it, only creates and drops.
        let ru = unsafe {self.get_unchecked_mut()};
        loop {
            if ru.current_write.is_none() {
                if let Some((first, remaining)) = ru.data.split_first() {
                    // Safety: `current_write` is `None`.
                    let w: &'a mut W = unsafe {&mut *ru.w};
                    ru.current_write = Some(w.write_u8(*first));
                    ru.data = remaining;
                } else {
                    return Poll::Ready(Ok(()));
                }
            }
            let polled = match &mut ru.current_write {
                // Safety: Pinning a field of a pinned.
                Some(done) => unsafe {Pin::new_unchecked(done)}.poll(cx),
                None => unsafe {core::hint::unreachable_unchecked()},
            };
            match polled {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Ok(())) => ru.current_write = None,
                Poll::Ready(Err(e)) => {
                    ru.current_write = None;
                    ru.data = &[];
                    return Poll::Ready(Err(e));
                }
            }
        }
    }
}

// mod adapter_u8_tests

/// A helper to add [WriteU8] support when [WriteU8s] is implemented.
///
/// There is a slightly overhead on using an array to represent an element,
/// especially when the compiler fails to inline the functions. The user
/// should decide on their own whether they need to implement [WriteU8] and
/// [WriteU8s] individually.
pub struct AdapterU8s<W> { w: W, buf: u8 }

impl<W> AdapterU8s<W> {
    pub fn new(w: W) -> Self { Self{w, buf: 0} }
    pub fn release(self) -> W { self.w }
}

impl<W: ErrorType> ErrorType for AdapterU8s<W> {
    type Error = W::Error;
}

impl<W: DcxPin> DcxPin for AdapterU8s<W> {
    fn set_dcx_command_mode(&mut self) { self.w.set_dcx_command_mode(); }
    fn set_dcx_data_mode(&mut self) { self.w.set_dcx_data_mode(); }
}

impl<W: CsxPin> CsxPin for AdapterU8s<W> {
    fn select_chip(&mut self) { self.w.select_chip(); }
    fn deselect_chip(&mut self) { self.w.deselect_chip(); }
}

impl<W: ResxPin> ResxPin for AdapterU8s<W> {
    fn set_resx_high(&mut self) { self.w.set_resx_high(); }
    fn set_resx_low(&mut self) { self.w.set_resx_low(); }
}

impl<'a, W: WriteU8s<'a>> WriteU8s<'a> for AdapterU8s<W> {
    type WriteU8sDone = <W as WriteU8s<'a>>::WriteU8sDone;

    fn write_u8s(&'a mut self, data: &'a [u8]) -> Self::WriteU8sDone {
        self.w.write_u8s(data)
    }
}

impl<'a, W: WriteU8s<'a>> WriteU8<'a> for AdapterU8s<W> {
    type WriteU8Done = <W as WriteU8s<'a>>::WriteU8sDone;

    fn write_u8(&'a mut self, data: u8) -> Self::WriteU8Done {
        self.buf = data;
        self.w.write_u8s(core::slice::from_ref(&self.buf))
    }
}

// mod adapter_u8s_tests

/// Implements every bus trait of [spi] on top of a blocking `embedded-hal`
/// [SpiBus] and three push-pull pins.
///
/// The SPI bus is flushed after each write, so the caller may toggle CSX as
/// soon as the returned future resolves. Pin errors are ignored since the
/// pins are required to be infallible.
pub struct HalBus<SPI, CS, DC, RST> {
    spi: SPI,
    cs: CS,
    dc: DC,
    rst: RST,
}

impl<SPI, CS, DC, RST> HalBus<SPI, CS, DC, RST>
        where CS: OutputPin<Error = Infallible>,
              DC: OutputPin<Error = Infallible>,
              RST: OutputPin<Error = Infallible> {
    /// Wraps the bus and pins, driving CSX high and DCX low.
    pub fn new(spi: SPI, mut cs: CS, mut dc: DC, rst: RST) -> Self {
        cs.set_high().ok();
        dc.set_low().ok();
        Self{spi, cs, dc, rst}
    }

    pub fn release(self) -> (SPI, CS, DC, RST) {
        (self.spi, self.cs, self.dc, self.rst)
    }
}

impl<SPI: SpiBus, CS, DC, RST> ErrorType for HalBus<SPI, CS, DC, RST> {
    type Error = <SPI as embedded_hal::spi::ErrorType>::Error;
}

impl<SPI, CS, DC, RST> DcxPin for HalBus<SPI, CS, DC, RST>
        where DC: OutputPin<Error = Infallible> {
    fn set_dcx_command_mode(&mut self) { self.dc.set_low().ok(); }
    fn set_dcx_data_mode(&mut self) { self.dc.set_high().ok(); }
}

impl<SPI, CS, DC, RST> CsxPin for HalBus<SPI, CS, DC, RST>
        where CS: OutputPin<Error = Infallible> {
    fn select_chip(&mut self) { self.cs.set_low().ok(); }
    fn deselect_chip(&mut self) { self.cs.set_high().ok(); }
}

impl<SPI, CS, DC, RST> ResxPin for HalBus<SPI, CS, DC, RST>
        where RST: OutputPin<Error = Infallible> {
    fn set_resx_high(&mut self) { self.rst.set_high().ok(); }
    fn set_resx_low(&mut self) { self.rst.set_low().ok(); }
}

impl<'a, SPI: SpiBus + 'a, CS, DC, RST> WriteU8<'a> for HalBus<SPI, CS, DC, RST> {
    type WriteU8Done = Ready<Result<(), Self::Error>>;

    fn write_u8(&'a mut self, data: u8) -> Self::WriteU8Done {
        ready(self.spi.write(&[data]).and_then(|()| self.spi.flush()))
    }
}

impl<'a, SPI: SpiBus + 'a, CS, DC, RST> WriteU8s<'a> for HalBus<SPI, CS, DC, RST> {
    type WriteU8sDone = Ready<Result<(), Self::Error>>;

    fn write_u8s(&'a mut self, data: &'a [u8]) -> Self::WriteU8sDone {
        ready(self.spi.write(data).and_then(|()| self.spi.flush()))
    }
}

// mod hal_bus_tests
