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
use crate::spi::{CsxPin, DcxPin, ErrorType, ResxPin, WriteU8, WriteU8s};

/// Commands of ST7796 in their original form, except that the parameters
/// of each command are typed.
///
/// Each command byte and each parameter block is sent as its own
/// transaction: CSX is pulled low before and released after it.
pub struct Commands<S> { spi: S }

impl<S: DcxPin + CsxPin> Commands<S> {
    /// Creates a new instance with an spi object.
    pub fn new(mut spi: S) -> Self {
        spi.deselect_chip();
        spi.set_dcx_command_mode();
        Self{spi}
    }

    /// Gives the spi object back.
    pub fn release(self) -> S { self.spi }

    #[cfg(test)]
    pub(crate) fn bus(&mut self) -> &mut S { &mut self.spi }

    /// Pulls CSX low outside of any command, e.g. while pulsing RESX.
    pub fn select_chip(&mut self) { self.spi.select_chip(); }
    pub fn deselect_chip(&mut self) { self.spi.deselect_chip(); }
}

impl<S: ResxPin> Commands<S> {
    /// Drives the RESX line. The panel is held in reset while it is low.
    pub fn set_resx(&mut self, high: bool) {
        if high {
            self.spi.set_resx_high();
        } else {
            self.spi.set_resx_low();
        }
    }
}

impl<S> Commands<S> where S: DcxPin + CsxPin + ErrorType,
                          for<'a> S: WriteU8<'a> + WriteU8s<'a> {
    /// Sets the column address window as `begin` to `end`, both inclusive.
    #[inline(always)]
    pub async fn caset(&mut self, begin: u16, end: u16)
            -> Result<(), S::Error> {
        self.command_with_u16_pair(0x2A, begin, end).await
    }

    /// Sets the row address window as `begin` to `end`, both inclusive.
    #[inline(always)]
    pub async fn raset(&mut self, begin: u16, end: u16)
            -> Result<(), S::Error> {
        self.command_with_u16_pair(0x2B, begin, end).await
    }

    /// Starts writing memory. The returned object can be used to actually do
    /// the memory writing.
    #[inline(always)]
    pub async fn ramwr(&mut self) -> Result<RamWriter<'_, S>, S::Error> {
        self.command(0x2C).await?;
        self.spi.set_dcx_data_mode();
        self.spi.select_chip();
        // `RamWriter::drop()` will restore to command mode.
        Ok(RamWriter{spi: &mut self.spi})
    }

    /// Sends `cmd` followed by its parameter bytes, if any. Meant for the
    /// panel-tuning registers that have no typed counterpart here.
    pub async fn raw(&mut self, cmd: u8, params: &[u8])
            -> Result<(), S::Error> {
        self.command(cmd).await?;
        if !params.is_empty() {
            self.write_data(params).await?;
        }
        Ok(())
    }

    /// Sends `data` in a data transaction of its own. Following a `RAMWR`,
    /// the panel keeps filling the address window from where it stopped.
    pub async fn write_data(&mut self, data: &[u8]) -> Result<(), S::Error> {
        self.spi.set_dcx_data_mode();
        self.spi.select_chip();
        let r = self.spi.write_u8s(data).await;
        self.spi.deselect_chip();
        self.spi.set_dcx_command_mode();
        r
    }

    // Performance-critical enough to have its instantiated version.
    async fn command_with_u16_pair(
            &mut self, cmd: u8, first: u16, second: u16)
            -> Result<(), S::Error> {
        self.command(cmd).await?;
        let data = [(first >> 8) as u8, (first & 0xFF) as u8,
                    (second >> 8) as u8, (second & 0xFF) as u8];
        self.write_data(&data).await
    }

    async fn command(&mut self, cmd: u8) -> Result<(), S::Error> {
        self.spi.set_dcx_command_mode();
        self.spi.select_chip();
        let r = self.spi.write_u8(cmd).await;
        self.spi.deselect_chip();
        r
    }

    async fn command_with_u8(&mut self, cmd: u8, data: u8)
            -> Result<(), S::Error> {
        self.command(cmd).await?;
        self.write_data(&[data]).await
    }

    /// Does nothing.
    #[inline(always)]
    pub async fn nop(&mut self) -> Result<(), S::Error> {
        self.command(0x00).await }
    /// Software-resets.
    #[inline(always)]
    pub async fn swreset(&mut self) -> Result<(), S::Error> {
        self.command(0x01).await }
    /// Enters the sleep mode.
    #[inline(always)]
    pub async fn slpin(&mut self) -> Result<(), S::Error> {
        self.command(0x10).await }
    /// Exits the sleep mode.
    #[inline(always)]
    pub async fn slpout(&mut self) -> Result<(), S::Error> {
        self.command(0x11).await }
    /// Enters the partial mode.
    #[inline(always)]
    pub async fn ptlon(&mut self) -> Result<(), S::Error> {
        self.command(0x12).await }
    /// Enters the normal mode (i.e., exits the partial mode).
    #[inline(always)]
    pub async fn noron(&mut self) -> Result<(), S::Error> {
        self.command(0x13).await }
    /// Disables the inversion mode.
    #[inline(always)]
    pub async fn invoff(&mut self) -> Result<(), S::Error> {
        self.command(0x20).await }
    /// Enables the inversion mode.
    #[inline(always)]
    pub async fn invon(&mut self) -> Result<(), S::Error> {
        self.command(0x21).await }
    /// Turns the display/screen off.
    #[inline(always)]
    pub async fn dispoff(&mut self) -> Result<(), S::Error> {
        self.command(0x28).await }
    /// Turns the display/screen on.
    #[inline(always)]
    pub async fn dispon(&mut self) -> Result<(), S::Error> {
        self.command(0x29).await }
    /// Sets the MADCTL register.
    #[inline(always)]
    pub async fn madctl(&mut self, data: Madctl) -> Result<(), S::Error> {
        self.command_with_u8(0x36, data.into()).await }
    /// Sets the color mode, i.e., how many bits of the R, G and B components
    /// have.
    #[inline(always)]
    pub async fn colmod(&mut self, data: Colmod) -> Result<(), S::Error> {
        self.command_with_u8(0x3A, data.into()).await }
}

/// A helper RAII object that can write memory data. It keeps borrowing and
/// keeps CSX low. Dropping it makes the command that creates this instance
/// end.
pub struct RamWriter<'s, S: DcxPin + CsxPin> { spi: &'s mut S }

impl<'s, S: DcxPin + CsxPin> Drop for RamWriter<'s, S> {
    fn drop(&mut self) {
        self.spi.deselect_chip();
        self.spi.set_dcx_command_mode();
    }
}

impl<'s, S: DcxPin + CsxPin + ErrorType> ErrorType for RamWriter<'s, S> {
    type Error = S::Error;
}

impl<'a, 's, S: DcxPin + CsxPin + WriteU8<'a>> WriteU8<'a>
        for RamWriter<'s, S> {
    type WriteU8Done = <S as WriteU8<'a>>::WriteU8Done;

    fn write_u8(&'a mut self, data: u8) -> Self::WriteU8Done {
        self.spi.write_u8(data)
    }
}

impl<'a, 's, S: DcxPin + CsxPin + WriteU8s<'a>> WriteU8s<'a>
        for RamWriter<'s, S> {
    type WriteU8sDone = <S as WriteU8s<'a>>::WriteU8sDone;

    fn write_u8s(&'a mut self, data: &'a [u8]) -> Self::WriteU8sDone {
        self.spi.write_u8s(data)
    }
}

// mod tests
