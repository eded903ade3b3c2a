//! Device configuration for a VIEWTEXT32 module. Settled once when the driver is constructed and
//! read by every operation afterwards.

use crate::command::consts::*;

/// I2C address the VIEWTEXT32 board ships with.
pub const DEFAULT_ADDRESS: u8 = 0x62;

/// A configuration for the display. Builder methods offer a declarative way to override the
/// factory defaults: address 0x62, 32 character cells, and the minimum settle delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    address: u8,
    length: u8,
    settle_delay_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Config {
            address: DEFAULT_ADDRESS,
            length: MAX_CELLS as u8,
            settle_delay_ms: SETTLE_DELAY_MS,
        }
    }

    /// Extend this `Config` with the I2C address the display answers on.
    pub fn address(self, address: u8) -> Self {
        Self { address, ..self }
    }

    /// Extend this `Config` with the number of character cells on the module. Modules with
    /// anywhere from 1 to 32 cells are supported.
    ///
    /// # Panics
    ///
    /// Panics if `length` is 0 or greater than 32.
    pub fn length(self, length: u8) -> Self {
        if length == 0 || length as usize > MAX_CELLS {
            panic!("Display length not supported by VIEWTEXT32.");
        }
        Self { length, ..self }
    }

    /// Extend this `Config` with a longer wait after the init sequence, for modules that are slow
    /// to come out of reset. Values below the controller's minimum are raised to it.
    pub fn settle_delay_ms(self, ms: u32) -> Self {
        Self {
            settle_delay_ms: ms.max(SETTLE_DELAY_MS),
            ..self
        }
    }

    pub fn get_address(&self) -> u8 {
        self.address
    }

    pub fn get_length(&self) -> usize {
        self.length as usize
    }

    pub fn get_settle_delay_ms(&self) -> u32 {
        self.settle_delay_ms
    }
}
