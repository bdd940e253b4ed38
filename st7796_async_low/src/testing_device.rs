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

use std::future::{ready, Future, Ready};
use std::pin::Pin;

use embedded_hal_async::delay::DelayNs;

use crate::spi::{CsxPin, DcxPin, ErrorType, ResxPin, WriteU8, WriteU8s};

pub fn block_on<F: Future>(f: F) -> F::Output {
    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    rt.block_on(f)
}

/// The bus error every test device reports.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BusFault;

#[mockall::automock]
pub trait PlainIO {
    fn write_command(&mut self, byte: u8) -> Result<(), BusFault>;
    fn write_data(&mut self, byte: u8) -> Result<(), BusFault>;
    fn set_resx(&mut self, high: bool);
}

/// Helper class that delegates `write_u8()` of [WriteU8] to `MockPlainIO`, the
/// `mockall` mocked version of [PlainIO].
#[derive(Default)]
pub struct MockDevice {
    mock: MockPlainIO,
    is_data_mode: bool,
    is_selected: bool,
}

impl MockDevice {
    pub fn new() -> Self { Default::default() }
    pub fn mock(&mut self) -> &mut MockPlainIO { &mut self.mock }

    pub fn is_data_mode(&self) -> bool { self.is_data_mode }
    pub fn is_selected(&self) -> bool { self.is_selected }

    pub fn expect_standard_write_command(&mut self, command: u8, data: &[u8]) {
        let mut seq = mockall::Sequence::new();
        use mockall::predicate::eq;
        self.mock().expect_write_command()
            .with(eq(command))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        for data in data {
            self.mock().expect_write_data()
                .with(eq(*data))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }
    }
}

impl ErrorType for MockDevice {
    type Error = BusFault;
}

impl DcxPin for MockDevice {
    fn set_dcx_command_mode(&mut self) { self.is_data_mode = false; }
    fn set_dcx_data_mode(&mut self) { self.is_data_mode = true; }
}

impl CsxPin for MockDevice {
    fn select_chip(&mut self) { self.is_selected = true; }
    fn deselect_chip(&mut self) { self.is_selected = false; }
}

impl ResxPin for MockDevice {
    fn set_resx_high(&mut self) { self.mock.set_resx(true); }
    fn set_resx_low(&mut self) { self.mock.set_resx(false); }
}

impl<'a> WriteU8<'a> for MockDevice {
    type WriteU8Done = Pin<Box<dyn Future<Output=Result<(), BusFault>> + 'a>>;

    fn write_u8(&'a mut self, data: u8) -> Self::WriteU8Done {
        Box::pin(async move {
            assert!(self.is_selected, "write while CSX is high");
            if self.is_data_mode {
                self.mock.write_data(data)
            } else {
                self.mock.write_command(data)
            }
        })
    }
}

impl<'a> WriteU8s<'a> for MockDevice {
    type WriteU8sDone = Pin<Box<dyn Future<Output=Result<(), BusFault>> + 'a>>;

    fn write_u8s(&'a mut self, data: &'a [u8]) -> Self::WriteU8sDone {
        Box::pin(async move {
            for one in data { self.write_u8(*one).await?; }
            Ok(())
        })
    }
}

/// What a [Recorder] saw on the bus.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    Command(u8),
    /// One `write_u8()`/`write_u8s()` call in data mode.
    Data(Vec<u8>),
    Resx(bool),
}

/// A bus that logs everything instead of checking expectations. Drawing
/// operations send far too many bytes to spell them out with `mockall`.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<Event>,
    is_data_mode: bool,
    is_selected: bool,
    /// Number of writes left to succeed; `None` never fails.
    pub fail_after: Option<usize>,
}

impl Recorder {
    pub fn new() -> Self { Default::default() }

    pub fn failing_after(writes: usize) -> Self {
        Self{fail_after: Some(writes), ..Default::default()}
    }

    pub fn is_selected(&self) -> bool { self.is_selected }
    pub fn is_data_mode(&self) -> bool { self.is_data_mode }

    pub fn clear(&mut self) { self.events.clear(); }

    /// Commands with all the data bytes following each one.
    pub fn transactions(&self) -> Vec<(u8, Vec<u8>)> {
        let mut r: Vec<(u8, Vec<u8>)> = Vec::new();
        for e in &self.events {
            match e {
                Event::Command(c) => r.push((*c, Vec::new())),
                Event::Data(d) => match r.last_mut() {
                    Some((_, data)) => data.extend_from_slice(d),
                    None => panic!("data before any command"),
                },
                Event::Resx(_) => (),
            }
        }
        r
    }

    /// Only the command bytes, in order.
    pub fn commands(&self) -> Vec<u8> {
        self.transactions().into_iter().map(|(c, _)| c).collect()
    }

    /// Sizes of the individual data writes.
    pub fn data_write_lengths(&self) -> Vec<usize> {
        self.events.iter().filter_map(|e| match e {
            Event::Data(d) => Some(d.len()),
            _ => None,
        }).collect()
    }

    pub fn resx_levels(&self) -> Vec<bool> {
        self.events.iter().filter_map(|e| match e {
            Event::Resx(level) => Some(*level),
            _ => None,
        }).collect()
    }

    /// Replays `CASET`/`RASET`/`RAMWR` like the panel does and returns every
    /// pixel written as `(x, y, rgb565)`. Coordinates include the panel
    /// offsets.
    pub fn pixels(&self) -> Vec<(u16, u16, u16)> {
        let mut columns = (0u16, 0u16);
        let mut rows = (0u16, 0u16);
        let mut r = Vec::new();
        let pair = |d: &[u8]| {
            assert_eq!(d.len(), 4, "window needs 4 bytes");
            (u16::from_be_bytes([d[0], d[1]]), u16::from_be_bytes([d[2], d[3]]))
        };
        for (cmd, data) in self.transactions() {
            match cmd {
                0x2A => columns = pair(&data),
                0x2B => rows = pair(&data),
                0x2C => {
                    assert_eq!(data.len() % 2, 0, "odd pixel byte count");
                    let (mut x, mut y) = (columns.0, rows.0);
                    for p in data.chunks(2) {
                        assert!(y <= rows.1, "pixels overflow the window");
                        r.push((x, y, u16::from_be_bytes([p[0], p[1]])));
                        if x == columns.1 {
                            x = columns.0;
                            y += 1;
                        } else {
                            x += 1;
                        }
                    }
                }
                _ => (),
            }
        }
        r
    }

    fn write(&mut self, data: &[u8]) -> Result<(), BusFault> {
        assert!(self.is_selected, "write while CSX is high");
        match &mut self.fail_after {
            Some(0) => return Err(BusFault),
            Some(n) => *n -= 1,
            None => (),
        }
        if self.is_data_mode {
            self.events.push(Event::Data(data.to_vec()));
        } else {
            for one in data { self.events.push(Event::Command(*one)); }
        }
        Ok(())
    }
}

impl ErrorType for Recorder {
    type Error = BusFault;
}

impl DcxPin for Recorder {
    fn set_dcx_command_mode(&mut self) { self.is_data_mode = false; }
    fn set_dcx_data_mode(&mut self) { self.is_data_mode = true; }
}

impl CsxPin for Recorder {
    fn select_chip(&mut self) { self.is_selected = true; }
    fn deselect_chip(&mut self) { self.is_selected = false; }
}

impl ResxPin for Recorder {
    fn set_resx_high(&mut self) { self.events.push(Event::Resx(true)); }
    fn set_resx_low(&mut self) { self.events.push(Event::Resx(false)); }
}

impl<'a> WriteU8<'a> for Recorder {
    type WriteU8Done = Ready<Result<(), BusFault>>;

    fn write_u8(&'a mut self, data: u8) -> Self::WriteU8Done {
        ready(self.write(&[data]))
    }
}

impl<'a> WriteU8s<'a> for Recorder {
    type WriteU8sDone = Ready<Result<(), BusFault>>;

    fn write_u8s(&'a mut self, data: &'a [u8]) -> Self::WriteU8sDone {
        ready(self.write(data))
    }
}

/// A delay that returns at once and only adds up how long it was asked to
/// wait.
#[derive(Default)]
pub struct NoopDelay { pub total_ns: u64 }

impl NoopDelay {
    pub fn elapsed_ms(&self) -> u64 { self.total_ns / 1_000_000 }
}

impl DelayNs for NoopDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use mockall::predicate::eq;
    use super::*;

    #[test]
    fn write_command() {
        let mut d: MockDevice = Default::default();
        d.mock().expect_write_command()
            .with(eq(0x15))
            .times(1)
            .returning(|_| Ok(()));
        d.select_chip();
        d.set_dcx_command_mode();
        block_on(d.write_u8(0x15)).unwrap();
    }

    #[test]
    fn write_data_u8() {
        let mut d: MockDevice = Default::default();
        d.mock().expect_write_data()
            .with(eq(0x17))
            .times(1)
            .returning(|_| Ok(()));
        d.select_chip();
        d.set_dcx_data_mode();
        block_on(d.write_u8(0x17)).unwrap();
    }

    #[test]
    fn write_data_seq() {
        let mut d: MockDevice = Default::default();
        let mut seq = Sequence::new();
        let data: [u8; 4] = [0x31, 0x51, 0x41, 0x21];
        for one in &data {
            d.mock().expect_write_data()
                .with(eq(*one))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }
        d.select_chip();
        d.set_dcx_data_mode();
        block_on(d.write_u8s(&data)).unwrap();
    }

    #[test]
    #[should_panic(expected = "write while CSX is high")]
    fn write_needs_chip_select() {
        let mut d: MockDevice = Default::default();
        let _ = block_on(d.write_u8(0x00));
    }

    #[test]
    fn recorder_replays_a_window() {
        let mut r = Recorder::new();
        r.select_chip();
        let steps: [(bool, &[u8]); 7] = [
            (false, &[0x2A]), (true, &[0, 1, 0, 2]),
            (false, &[0x2B]), (true, &[0, 5, 0, 6]),
            (false, &[0x2C]), (true, &[0xF8, 0x00, 0x07, 0xE0, 0x00]),
            (true, &[0x1F, 0xFF, 0xFF])];
        for (is_data, bytes) in steps {
            if is_data { r.set_dcx_data_mode() } else { r.set_dcx_command_mode() }
            block_on(r.write_u8s(bytes)).unwrap();
        }
        assert_eq!(r.pixels(), [(1, 5, 0xF800), (2, 5, 0x07E0),
                                (1, 6, 0x001F), (2, 6, 0xFFFF)]);
        assert_eq!(r.data_write_lengths(), [4, 4, 5, 3]);
        assert_eq!(r.commands(), [0x2A, 0x2B, 0x2C]);
    }

    #[test]
    fn recorder_fails_on_demand() {
        let mut r = Recorder::failing_after(1);
        r.select_chip();
        assert_eq!(block_on(r.write_u8(1)), Ok(()));
        assert_eq!(block_on(r.write_u8(2)), Err(BusFault));
        assert_eq!(r.events, [Event::Command(1)]);
    }

    #[test]
    fn noop_delay_adds_up() {
        let mut d = NoopDelay::default();
        block_on(async {
            d.delay_ms(150).await;
            d.delay_us(500).await;
            d.delay_ms(50).await;
        });
        assert_eq!(d.elapsed_ms(), 200);
    }
}  // mod tests
