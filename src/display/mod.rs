//! The main API to the display driver. It keeps a host-side mirror of the characters on screen and
//! of the eight user-defined glyphs, and rewrites the controller from those mirrors whenever they
//! change.


pub mod glyph;

use core::iter;

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use log::debug;

use crate::command::consts::*;
use crate::command::{clamp_slot, BufCommand, Command};
use crate::config::Config;
use crate::display::glyph::Glyph;
use crate::error::Error;
use crate::interface;

/// Display memory holds a leading control byte followed by one byte per character cell.
const FRAME_LEN: usize = MAX_CELLS + 1;

/// What a positioned write did. Out-of-range positions are not errors; they leave the display
/// untouched and report `Ignored`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Updated,
    Ignored,
}

/// A driver for a VIEWTEXT32 display.
pub struct ViewText32<DI>
where
    DI: interface::DisplayInterface,
{
    iface: DI,
    config: Config,
    memory: Vec<u8, FRAME_LEN>,
    glyphs: [Glyph; NUM_GLYPHS as usize],
    initialized: bool,
}

impl<DI> ViewText32<DI>
where
    DI: interface::DisplayInterface,
{
    /// Construct a new driver for the display described by `config`, connected to the interface
    /// `iface`. Nothing is sent until `init` is called.
    pub fn new(iface: DI, config: Config) -> Self {
        let mut memory = Vec::new();
        memory.extend(iter::repeat(SPACE).take(config.get_length() + 1));
        memory[0] = CONTROL_COMMAND;
        ViewText32 {
            iface,
            config,
            memory,
            glyphs: [Glyph::BLANK; NUM_GLYPHS as usize],
            initialized: false,
        }
    }

    /// Initialize the display: send the controller setup sequence, wait for it to settle, and
    /// clear the screen. CGRAM does not survive a reset, so the glyph mirror is blanked as well and
    /// any custom characters must be defined again afterwards.
    ///
    /// Every step runs even if an earlier write fails, and the driver is usable afterwards either
    /// way; the first transport error is returned.
    pub fn init<D>(&mut self, delay: &mut D) -> Result<(), Error<DI::Error>>
    where
        D: DelayNs,
    {
        debug!(
            "init display at {:#04x}, {} cells",
            self.config.get_address(),
            self.config.get_length()
        );
        let setup = Command::Initialize
            .send(&mut self.iface, self.config.get_address())
            .map_err(Error::Interface);
        delay.delay_ms(self.config.get_settle_delay_ms());
        self.glyphs = [Glyph::BLANK; NUM_GLYPHS as usize];
        self.initialized = true;
        let cleared = self.clear();
        setup.and(cleared)
    }

    /// Blank every character cell.
    pub fn clear(&mut self) -> Result<(), Error<DI::Error>> {
        self.ensure_initialized()?;
        self.memory[1..].fill(SPACE);
        self.memory[0] = CONTROL_COMMAND;
        self.update()
    }

    /// Show `text` starting at the zero-based cell `position`. Text running past the last cell is
    /// cut off. Each UTF-16 code unit is sent as its low byte, without translation, so only ASCII
    /// displays as expected.
    pub fn show_text(&mut self, text: &str, position: usize) -> Result<Status, Error<DI::Error>> {
        self.write_cells(text.encode_utf16().map(|unit| unit as u8), position)
    }

    /// Like `show_text`, but with raw character codes. Codes 0-7 show custom glyphs.
    pub fn show_bytes(&mut self, codes: &[u8], position: usize) -> Result<Status, Error<DI::Error>> {
        self.write_cells(codes.iter().copied(), position)
    }

    /// Show the custom glyph in `slot` at cell `position`. The slot is written as the character
    /// code unchanged; the controller mirrors codes 8-15 onto glyphs 0-7.
    pub fn show_custom_character(
        &mut self,
        slot: u8,
        position: usize,
    ) -> Result<Status, Error<DI::Error>> {
        self.write_cells(iter::once(slot), position)
    }

    /// Define the custom glyph in `slot` from eight row bytes and upload it to the controller.
    /// The slot is clamped to 0-7. Rows are stored as given; only the low 5 bits are visible.
    pub fn create_custom_character(
        &mut self,
        slot: u8,
        rows: [u8; GLYPH_ROWS],
    ) -> Result<(), Error<DI::Error>> {
        self.define_glyph(slot, &Glyph(rows))
    }

    /// Define the custom glyph in `slot` from a pixel grid of up to 8 rows by 5 columns, where any
    /// non-zero pixel is lit. With no grid the glyph is blanked.
    pub fn design_character(
        &mut self,
        slot: u8,
        pixels: Option<&[&[u8]]>,
    ) -> Result<(), Error<DI::Error>> {
        let glyph = match pixels {
            Some(grid) => Glyph::from_pixels(grid),
            None => Glyph::BLANK,
        };
        self.define_glyph(slot, &glyph)
    }

    /// Define the custom glyph in `slot` and upload it to the controller. The slot is clamped to
    /// 0-7.
    pub fn define_glyph(&mut self, slot: u8, glyph: &Glyph) -> Result<(), Error<DI::Error>> {
        self.ensure_initialized()?;
        let slot = clamp_slot(slot);
        debug!("define glyph {}: {:02x?}", slot, glyph.rows());
        self.glyphs[slot as usize] = *glyph;
        self.send_glyph(slot)
    }

    /// The host's copy of the glyph in `slot`, clamped to 0-7.
    pub fn glyph(&self, slot: u8) -> &Glyph {
        &self.glyphs[clamp_slot(slot) as usize]
    }

    /// The character codes currently on screen, one per cell.
    pub fn cells(&self) -> &[u8] {
        &self.memory[1..]
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Give back the interface, e.g. to share the bus with another device.
    pub fn release(self) -> DI {
        self.iface
    }

    fn ensure_initialized(&self) -> Result<(), Error<DI::Error>> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Copy `codes` into display memory from `position`, dropping whatever does not fit, then
    /// rewrite the row.
    fn write_cells<I>(&mut self, codes: I, position: usize) -> Result<Status, Error<DI::Error>>
    where
        I: Iterator<Item = u8>,
    {
        self.ensure_initialized()?;
        if position >= self.config.get_length() {
            debug!("ignoring write at cell {}", position);
            return Ok(Status::Ignored);
        }
        for (cell, code) in self.memory[1 + position..].iter_mut().zip(codes) {
            *cell = code;
        }
        self.update()?;
        Ok(Status::Updated)
    }

    /// Rewrite the whole row of display RAM from display memory. Both writes are always attempted;
    /// the first error wins.
    fn update(&mut self) -> Result<(), Error<DI::Error>> {
        let address = self.config.get_address();
        let set_address = Command::SetDdramAddress(0).send(&mut self.iface, address);
        let write_row = BufCommand::WriteCharacters(&self.memory[1..]).send(&mut self.iface, address);
        set_address.and(write_row).map_err(Error::Interface)
    }

    fn send_glyph(&mut self, slot: u8) -> Result<(), Error<DI::Error>> {
        let address = self.config.get_address();
        let set_address = Command::SetCgramAddress(slot).send(&mut self.iface, address);
        let write_rows =
            BufCommand::WriteGlyph(self.glyphs[slot as usize].rows()).send(&mut self.iface, address);
        set_address.and(write_rows).map_err(Error::Interface)
    }
}
