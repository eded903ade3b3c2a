//! The command set of the VIEWTEXT32 controller, as seen over I2C.
//!
//! Every write on the bus is a single I2C transaction. Commands are framed by a leading control
//! byte of `0x00`; glyph bitmap data is framed by a leading `0x40`. Character data for display RAM
//! is sent unframed, straight after the address has been set.

use log::trace;

use crate::interface::DisplayInterface;

pub mod consts {
    //! Controller limits and protocol bytes.

    /// Control byte preceding an instruction.
    pub const CONTROL_COMMAND: u8 = 0x00;
    /// Control byte preceding CGRAM bitmap data.
    pub const CONTROL_GLYPH_DATA: u8 = 0x40;

    /// Function set: 8-bit bus, two lines, 5x8 font.
    pub const FUNCTION_SET: u8 = 0x38;
    /// Display on, cursor off, blink off.
    pub const DISPLAY_ON: u8 = 0x0C;
    /// Clear display RAM and home the address counter.
    pub const CLEAR_DISPLAY: u8 = 0x01;
    /// Entry mode: increment, no shift.
    pub const ENTRY_MODE: u8 = 0x06;

    /// Opcode for setting the CGRAM address, ORed with the address.
    pub const SET_CGRAM_ADDRESS: u8 = 0x40;
    /// Opcode for setting the DDRAM address, ORed with the address.
    pub const SET_DDRAM_ADDRESS: u8 = 0x80;
    pub const DDRAM_ADDRESS_MAX: u8 = 0x7F;

    /// Number of user-definable glyphs in CGRAM.
    pub const NUM_GLYPHS: u8 = 8;
    pub const GLYPH_SLOT_MAX: u8 = NUM_GLYPHS - 1;
    /// Pixel rows per glyph, and thus bytes per glyph in CGRAM.
    pub const GLYPH_ROWS: usize = 8;
    /// Pixel columns per glyph. Only the low bits of each row byte are displayed.
    pub const GLYPH_COLS: usize = 5;
    /// The largest meaningful row byte, all five pixels lit.
    pub const ROW_MAX: u8 = (1 << GLYPH_COLS) - 1;

    /// Number of character cells on the largest VIEWTEXT32 module.
    pub const MAX_CELLS: usize = 32;
    /// Character code of a blank cell.
    pub const SPACE: u8 = 0x20;
    /// Minimum time the controller needs after the init sequence before it accepts more writes.
    pub const SETTLE_DELAY_MS: u32 = 50;
}

use self::consts::*;

/// Pull a glyph slot index into the range supported by CGRAM.
pub fn clamp_slot(slot: u8) -> u8 {
    slot.min(GLYPH_SLOT_MAX)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Reset the controller into 8-bit two-line mode with the display on, cursor hidden, and the
    /// address counter incrementing. The display RAM is cleared by the controller as part of this
    /// sequence, but the driver still needs to follow up with its own row write.
    Initialize,
    /// Point the address counter at a location in display RAM, so that subsequent character data
    /// lands there. Range is 0-127; higher bits are masked off.
    SetDdramAddress(u8),
    /// Point the address counter at the first row of a glyph slot in CGRAM. Range is 0-7; higher
    /// bits are masked off.
    SetCgramAddress(u8),
}

pub enum BufCommand<'buf> {
    /// Write character codes into display RAM at the address counter. Codes 0-7 show the glyph
    /// stored in the matching CGRAM slot.
    WriteCharacters(&'buf [u8]),
    /// Write the eight row bytes of a glyph into CGRAM at the address counter.
    WriteGlyph(&'buf [u8; GLYPH_ROWS]),
}

macro_rules! frame {
    ($buf:ident, [$($byte:expr),*]) => {{
        let bytes = [$($byte),*];
        $buf[..bytes.len()].copy_from_slice(&bytes);
        &$buf[..bytes.len()]
    }};
}

impl Command {
    /// Encode the command into `buf`, returning the bytes to put on the bus.
    pub fn encode(self, buf: &mut [u8; 5]) -> &[u8] {
        match self {
            Command::Initialize => frame!(
                buf,
                [
                    CONTROL_COMMAND,
                    FUNCTION_SET,
                    DISPLAY_ON,
                    CLEAR_DISPLAY,
                    ENTRY_MODE
                ]
            ),
            Command::SetDdramAddress(addr) => frame!(
                buf,
                [CONTROL_COMMAND, SET_DDRAM_ADDRESS | (addr & DDRAM_ADDRESS_MAX)]
            ),
            Command::SetCgramAddress(slot) => frame!(
                buf,
                [
                    CONTROL_COMMAND,
                    SET_CGRAM_ADDRESS | ((slot & GLYPH_SLOT_MAX) << 3)
                ]
            ),
        }
    }

    pub fn send<DI>(self, iface: &mut DI, address: u8) -> Result<(), DI::Error>
    where
        DI: DisplayInterface,
    {
        let mut buf = [0u8; 5];
        let bytes = self.encode(&mut buf);
        trace!("{:?} -> {:02x?}", self, bytes);
        iface.write(address, bytes)
    }
}

impl<'a> BufCommand<'a> {
    pub fn send<DI>(self, iface: &mut DI, address: u8) -> Result<(), DI::Error>
    where
        DI: DisplayInterface,
    {
        match self {
            BufCommand::WriteCharacters(codes) => {
                trace!("characters -> {:02x?}", codes);
                iface.write(address, codes)
            }
            BufCommand::WriteGlyph(rows) => {
                let mut buf = [0u8; GLYPH_ROWS + 1];
                buf[0] = CONTROL_GLYPH_DATA;
                buf[1..].copy_from_slice(rows);
                trace!("glyph -> {:02x?}", buf);
                iface.write(address, &buf)
            }
        }
    }
}
