//! Full example code for driving a VIEWTEXT32 from an embedded Linux board. The display sits on
//! /dev/i2c-1 at its factory address 0x62; build against `linux-embedded-hal` 0.4.

extern crate linux_embedded_hal as hal;
extern crate viewtext32;

use hal::{Delay, I2cdev};
use viewtext32::{Config, Glyph, I2cInterface, ViewText32};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let i2c = I2cdev::new("/dev/i2c-1")?;
    let mut disp = ViewText32::new(I2cInterface::new(i2c), Config::new().address(0x62).length(32));

    // The controller needs 50ms after the setup sequence before it accepts more writes.
    let mut delay = Delay;
    disp.init(&mut delay)?;

    // Glyph 0 is a bell, drawn as a pixel grid.
    let bell: &[&[u8]] = &[
        &[0, 0, 1, 0, 0],
        &[0, 1, 1, 1, 0],
        &[0, 1, 1, 1, 0],
        &[0, 1, 1, 1, 0],
        &[1, 1, 1, 1, 1],
        &[0, 0, 0, 0, 0],
        &[0, 0, 1, 0, 0],
    ];
    disp.design_character(0, Some(bell))?;

    // Glyph 1 is a heart, drawn with binary row literals.
    let heart = Glyph::from_binary_rows(&[
        "00000", "01010", "11111", "11111", "11111", "01110", "00100", "00000",
    ]);
    disp.define_glyph(1, &heart)?;

    disp.show_text("Alarm", 0)?;
    disp.show_custom_character(0, 6)?;
    disp.show_text("I", 16)?;
    disp.show_custom_character(1, 18)?;
    disp.show_text("Rust", 20)?;

    Ok(())
}
