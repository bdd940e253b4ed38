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

//! This crate reads contacts and gestures from an FT6336U capacitive touch
//! controller over any `embedded-hal-async` I2C bus.
//!
//! [Ft6336u::new()] checks that the chip is present and supported before
//! handing out a driver; afterwards each query is a single register read.

#![cfg_attr(not(test), no_std)]

mod gesture;
pub use gesture::Gesture;
pub mod registers;
mod touch;
pub use touch::{Contact, DeviceMode, Error, Ft6336u, TouchPoint};

#[cfg(test)] pub mod testing_bus;
