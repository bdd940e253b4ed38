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

use core::fmt;

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::gesture::Gesture;
use crate::registers::*;

/// Time the controller needs after power-up before it answers register
/// reads.
const STARTUP_MS: u32 = 200;

/// Errors of [Ft6336u::new()]. Once constructed, the driver returns the bus
/// errors as they are.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Nothing acknowledged a read at [ADDRESS].
    DeviceNotFound,
    /// [ID_G_CIPHER_LOW] held the given value instead of
    /// [CHIP_CODE_FT6336U].
    UnsupportedDevice(u8),
    Bus(E),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self { Self::Bus(e) }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceNotFound =>
                write!(f, "no device at I2C address {:#04x}", ADDRESS),
            Self::UnsupportedDevice(id) =>
                write!(f, "unsupported chip code {:#04x}", id),
            Self::Bus(e) => write!(f, "bus error: {:?}", e),
        }
    }
}

/// One of the two contacts the controller tracks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Contact {
    First,
    Second,
}

impl Contact {
    /// The high byte registers of the X and Y coordinates.
    fn registers(self) -> (u8, u8) {
        match self {
            Self::First => (P1_XH, P1_YH),
            Self::Second => (P2_XH, P2_YH),
        }
    }
}

/// A contact position in raw panel coordinates, 0 to 4095 on each axis.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DeviceMode {
    Working = 0x00,
    Factory = 0x40,
}

/// Driver of an FT6336U at [ADDRESS].
///
/// Every query is one fresh bus round trip; nothing is cached.
pub struct Ft6336u<I, D> {
    i2c: I,
    delay: D,
}

impl<I: I2c, D: DelayNs> Ft6336u<I, D> {
    /// Probes for the controller, checks its chip code, then puts it into
    /// working mode with gesture reporting on.
    pub async fn new(i2c: I, delay: D) -> Result<Self, Error<I::Error>> {
        let mut touch = Self{i2c, delay};
        let mut probe = [0u8; 1];
        if touch.i2c.read(ADDRESS, &mut probe).await.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("no FT6336U at {=u8:#x}", ADDRESS);
            return Err(Error::DeviceNotFound);
        }
        touch.delay.delay_ms(STARTUP_MS).await;
        let id = touch.read_u8(ID_G_CIPHER_LOW).await?;
        if id != CHIP_CODE_FT6336U {
            #[cfg(feature = "defmt")]
            defmt::warn!("unsupported touch chip code {=u8:#x}", id);
            return Err(Error::UnsupportedDevice(id));
        }
        touch.set_mode(DeviceMode::Working).await?;
        touch.write_u8(ID_G_GESTURE_ENABLE, 1).await?;
        #[cfg(feature = "defmt")]
        defmt::info!("FT6336U ready");
        Ok(touch)
    }

    pub async fn gesture(&mut self) -> Result<Gesture, I::Error> {
        Ok(Gesture::from_raw(self.read_u8(GESTURE_ID).await?))
    }

    /// The number of active contacts. The controller reports 0 to 2; the
    /// value is passed on unchecked.
    pub async fn point_count(&mut self) -> Result<u8, I::Error> {
        self.read_u8(TD_STATUS).await
    }

    pub async fn point(&mut self, contact: Contact)
            -> Result<TouchPoint, I::Error> {
        let (x, y) = contact.registers();
        Ok(TouchPoint{
            x: self.read_coordinate(x).await?,
            y: self.read_coordinate(y).await?,
        })
    }

    /// Positions of the active contacts, first contact first.
    pub async fn positions(&mut self)
            -> Result<heapless::Vec<TouchPoint, 2>, I::Error> {
        let count = self.point_count().await?;
        let mut positions = heapless::Vec::new();
        for contact in [Contact::First, Contact::Second]
                .into_iter().take(usize::from(count)) {
            let point = self.point(contact).await?;
            // At most two contacts are taken.
            let _ = positions.push(point);
        }
        Ok(positions)
    }

    pub async fn set_mode(&mut self, mode: DeviceMode) -> Result<(), I::Error> {
        self.write_u8(MODE_SWITCH, mode as u8).await
    }

    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }

    async fn read_u8(&mut self, register: u8) -> Result<u8, I::Error> {
        let mut data = [0u8; 1];
        self.i2c.write_read(ADDRESS, &[register], &mut data).await?;
        Ok(data[0])
    }

    /// Reads a big-endian coordinate from `register` and the one after it.
    async fn read_coordinate(&mut self, register: u8) -> Result<u16, I::Error> {
        let mut data = [0u8; 2];
        self.i2c.write_read(ADDRESS, &[register], &mut data).await?;
        Ok(u16::from_be_bytes(data) & COORDINATE_MASK)
    }

    async fn write_u8(&mut self, register: u8, value: u8)
            -> Result<(), I::Error> {
        self.i2c.write(ADDRESS, &[register, value]).await
    }
}
