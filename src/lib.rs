//! Driver library for the VIEWTEXT32 character display, with support for user-defined glyphs
//! stored in the controller's character generator RAM.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(test, not(feature = "std")))]
#[macro_use]
extern crate std;

pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod interface;

// Re-exports for primary API.
pub use config::Config;
pub use display::glyph::{binary_to_row, Glyph};
pub use display::{Status, ViewText32};
pub use error::Error;
pub use interface::i2c::I2cInterface;
