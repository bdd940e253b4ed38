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

use std::future::Future;

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{self, ErrorKind, I2c, Operation};

pub fn block_on<F: Future>(f: F) -> F::Output {
    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    rt.block_on(f)
}

/// The bus error every test bus reports.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BusFault;

impl i2c::Error for BusFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(i2c::NoAcknowledgeSource::Address)
    }
}

/// Register-level view of the I2C traffic the driver produces.
#[mockall::automock]
pub trait RegisterIO {
    /// A bare read, as used to probe for the device.
    fn probe(&mut self, address: u8) -> Result<u8, BusFault>;
    fn read_register(&mut self, address: u8, register: u8, len: usize)
        -> Result<Vec<u8>, BusFault>;
    fn write_register(&mut self, address: u8, register: u8, value: u8)
        -> Result<(), BusFault>;
}

/// Helper class that turns I2C transactions into calls on `MockRegisterIO`,
/// the `mockall` mocked version of [RegisterIO].
#[derive(Default)]
pub struct MockBus {
    mock: MockRegisterIO,
}

impl MockBus {
    pub fn new() -> Self { Default::default() }
    pub fn mock(&mut self) -> &mut MockRegisterIO { &mut self.mock }

    /// Expects one read of `register` answering `data`.
    pub fn expect_read(&mut self, register: u8, data: &[u8]) {
        use mockall::predicate::eq;
        let data = data.to_vec();
        self.mock.expect_read_register()
            .with(eq(crate::registers::ADDRESS), eq(register), eq(data.len()))
            .times(1)
            .returning(move |_, _, _| Ok(data.clone()));
    }

    pub fn expect_write(&mut self, register: u8, value: u8) {
        use mockall::predicate::eq;
        self.mock.expect_write_register()
            .with(eq(crate::registers::ADDRESS), eq(register), eq(value))
            .times(1)
            .returning(|_, _, _| Ok(()));
    }

    /// Expects a successful bring-up reporting `chip_id`, stopping short of
    /// the writes when the ID is wrong.
    pub fn expect_bring_up(&mut self, chip_id: u8) {
        use mockall::predicate::eq;
        self.mock.expect_probe()
            .with(eq(crate::registers::ADDRESS))
            .times(1)
            .returning(|_| Ok(0));
        self.expect_read(crate::registers::ID_G_CIPHER_LOW, &[chip_id]);
        if chip_id == crate::registers::CHIP_CODE_FT6336U {
            self.expect_write(crate::registers::MODE_SWITCH, 0x00);
            self.expect_write(crate::registers::ID_G_GESTURE_ENABLE, 0x01);
        }
    }
}

impl i2c::ErrorType for MockBus {
    type Error = BusFault;
}

impl I2c for MockBus {
    async fn transaction(&mut self, address: u8,
                         operations: &mut [Operation<'_>])
            -> Result<(), BusFault> {
        match operations {
            [Operation::Read(buffer)] => {
                let value = self.mock.probe(address)?;
                buffer.fill(value);
                Ok(())
            }
            [Operation::Write([register]), Operation::Read(buffer)] => {
                let data = self.mock.read_register(address, *register,
                                                   buffer.len())?;
                buffer.copy_from_slice(&data);
                Ok(())
            }
            [Operation::Write([register, value])] =>
                self.mock.write_register(address, *register, *value),
            _ => panic!("unexpected I2C transaction"),
        }
    }
}

/// A delay that returns at once and only adds up how long it was asked to
/// wait.
#[derive(Default)]
pub struct NoDelay { pub total_ns: u64 }

impl NoDelay {
    pub fn elapsed_ms(&self) -> u64 { self.total_ns / 1_000_000 }
}

impl DelayNs for NoDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use super::*;

    #[test]
    fn write_read_becomes_a_register_read() {
        let mut bus = MockBus::new();
        bus.expect_read(0x03, &[0x81, 0x23]);
        let mut buffer = [0u8; 2];
        block_on(bus.write_read(0x38, &[0x03], &mut buffer)).unwrap();
        assert_eq!(buffer, [0x81, 0x23]);
    }

    #[test]
    fn write_becomes_a_register_write() {
        let mut bus = MockBus::new();
        bus.expect_write(0xD0, 0x01);
        block_on(bus.write(0x38, &[0xD0, 0x01])).unwrap();
    }

    #[test]
    fn probe_failure() {
        let mut bus = MockBus::new();
        bus.mock().expect_probe()
            .with(eq(0x38))
            .times(1)
            .returning(|_| Err(BusFault));
        let mut buffer = [0u8; 1];
        assert_eq!(block_on(bus.read(0x38, &mut buffer)), Err(BusFault));
    }

    #[test]
    fn no_delay_adds_up() {
        let mut delay = NoDelay::default();
        block_on(async {
            delay.delay_ms(200).await;
            delay.delay_us(500).await;
        });
        assert_eq!(delay.total_ns, 200_500_000);
        assert_eq!(delay.elapsed_ms(), 200);
    }
}
