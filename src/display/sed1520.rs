/*
 *  display/sed1520.rs
 *
 *  sedpar - SED1520 parallel port LCD driver
 *  (c) 2025-26 The sedpar authors
 *
 *  The driver proper: text, custom glyphs, bars, big digits, icons,
 *  and the full-frame flush to the controller pair
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use log::{debug, info};

use crate::bigfont::{BIG_COLON, BIG_DIGITS, COLON_COLUMNS, DIGIT_COLUMNS};
use crate::constants::{
    CELL_HEIGHT, CELL_WIDTH, CHIP_COLUMNS, HEIGHT, PIXEL_WIDTH, WIDTH,
};
use crate::display::bus::{ChipSelect, ControlBus};
use crate::display::error::DisplayError;
use crate::display::framebuffer::{pack_column, FrameBuffer};
use crate::font::FontTable;
use crate::port::{DevPort, ParallelPort};

/// Host-level icon identifiers.
///
/// The set mirrors what a display server hands down to its drivers.
/// This panel renders the block and the two hearts; everything else is
/// reported as unsupported so the host can fall back to a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    BlockFilled,
    HeartFilled,
    HeartOpen,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    CheckboxOff,
    CheckboxOn,
    CheckboxGray,
    SelectorAtLeft,
    SelectorAtRight,
    Ellipsis,
    Stop,
    Pause,
    Play,
}

/// Driver for one 122x32 panel built from two SED1520 controllers.
///
/// All drawing calls mutate the in-memory framebuffer only; nothing
/// reaches the hardware until [`flush`](Sed1520::flush). Public
/// coordinates are 1-based character cells, upper-left is (1,1); calls
/// with out-of-range positions clip to a no-op rather than erroring.
/// One instance exclusively owns its port for its whole lifetime, and
/// everything (framebuffer, font) is torn down by `Drop`.
pub struct Sed1520<P> {
    bus: ControlBus<P>,
    framebuf: FrameBuffer,
    font: FontTable,
}

impl Sed1520<DevPort> {
    /// Claim the port pair through `/dev/port` and bring up the panel
    /// at base address `base`.
    pub fn open(base: u16) -> Result<Self, DisplayError> {
        let port = DevPort::open()
            .map_err(|source| DisplayError::PortAccess { port: base, source })?;
        Self::with_port(port, base)
    }
}

impl<P: ParallelPort> Sed1520<P> {
    /// Bring up the panel on an already-acquired port. Initialization
    /// failure is fatal: on error no usable instance exists.
    pub fn with_port(port: P, base: u16) -> Result<Self, DisplayError> {
        let mut bus = ControlBus::new(port, base);
        bus.reset()?;

        info!("SED1520 panel initialized on port 0x{:03X}", base);

        Ok(Self {
            bus,
            framebuf: FrameBuffer::new(),
            font: FontTable::new(),
        })
    }

    /// Character grid width.
    pub fn width(&self) -> usize {
        WIDTH
    }

    /// Character grid height.
    pub fn height(&self) -> usize {
        HEIGHT
    }

    /// Width of one character cell in pixels.
    pub fn cell_width(&self) -> usize {
        CELL_WIDTH
    }

    /// Height of one character cell in pixels.
    pub fn cell_height(&self) -> usize {
        CELL_HEIGHT
    }

    /// The panel image as drawn so far.
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuf
    }

    /// Blank the framebuffer. Takes effect on the next flush.
    pub fn clear(&mut self) {
        self.framebuf.clear();
    }

    /// Push the whole framebuffer to the panel: for every page, stream
    /// the left half to chip 2 and the right half to chip 1, resetting
    /// each chip's column address first. Always a full retransmission;
    /// there is no dirty tracking. Blocks for the duration.
    pub fn flush(&mut self) -> Result<(), DisplayError> {
        debug!("flushing {} pages to panel", HEIGHT);

        for row in 0..HEIGHT {
            self.bus.select_page(row as u8)?;

            self.bus.select_column(0, ChipSelect::Two)?;
            for col in 0..CHIP_COLUMNS {
                self.bus.write_data(self.framebuf.get(row, col), ChipSelect::Two)?;
            }

            self.bus.select_column(0, ChipSelect::One)?;
            for col in CHIP_COLUMNS..PIXEL_WIDTH {
                self.bus.write_data(self.framebuf.get(row, col), ChipSelect::One)?;
            }
        }

        Ok(())
    }

    /// Write `s` at 1-based cell (x, y). Characters running off the
    /// right edge are dropped. The string is taken byte-wise: each byte
    /// indexes the 256-entry font table.
    pub fn string(&mut self, x: i32, y: i32, s: &str) {
        for (i, z) in s.bytes().enumerate() {
            self.draw_char(x - 1 + i as i32, y - 1, z);
        }
    }

    /// Write one character at 1-based cell (x, y).
    pub fn chr(&mut self, x: i32, y: i32, z: u8) {
        self.draw_char(x - 1, y - 1, z);
    }

    /// Transpose glyph `z` into the framebuffer at zero-based cell
    /// (x, y). The font stores rows while the framebuffer stores pixel
    /// columns: cell column `i` collects bit `CELL_WIDTH-1-i` of every
    /// font row. Outside the grid: no-op.
    fn draw_char(&mut self, x: i32, y: i32, z: u8) {
        if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let rows = *self.font.glyph(z);

        for i in 0..CELL_WIDTH {
            let bit = CELL_WIDTH - 1 - i;
            let strip = pack_column(|j| (rows[j] >> bit) & 0x01 != 0);
            self.framebuf.set(y, x * CELL_WIDTH + i, strip);
        }
    }

    /// Reprogram the glyph for character code `n`. `data` holds
    /// `CELL_HEIGHT * CELL_WIDTH` cell values in row scan order, any
    /// non-zero entry lit. Out-of-range codes and wrong-size data are
    /// ignored. Cells already on screen keep the old shape until they
    /// are drawn again.
    pub fn set_char(&mut self, n: i32, data: &[u8]) {
        if !(0..=255).contains(&n) || data.len() != CELL_WIDTH * CELL_HEIGHT {
            return;
        }
        self.font.set_glyph(n as usize, data);
    }

    /// Draw a vertical bar of `len` pixels growing from the panel
    /// bottom at 1-based column `x`. The bar fills pages 3 up to 1,
    /// eight pixels of `len` per page, and uses only the middle three
    /// pixel columns of the cell; page 0 is left free for a caption.
    pub fn vbar(&mut self, x: i32, len: i32) {
        let x = x - 1;
        if x < 0 || x >= WIDTH as i32 {
            return;
        }
        let base = x as usize * CELL_WIDTH;
        let mut len = len;

        for j in 0..3 {
            let mut strip: u8 = 0;
            // bottom of the page is the leftmost (high) bit
            for i in 0..CELL_HEIGHT {
                if len > i as i32 {
                    strip |= 1 << (CELL_HEIGHT - 1 - i);
                }
            }

            let row = 3 - j;
            self.framebuf.set(row, base, 0);
            self.framebuf.set(row, base + 1, 0);
            self.framebuf.set(row, base + 2, strip);
            self.framebuf.set(row, base + 3, strip);
            self.framebuf.set(row, base + 4, strip);
            self.framebuf.set(row, base + 5, 0);

            len -= CELL_HEIGHT as i32;
        }
    }

    /// Draw a horizontal bar of `len` pixels rightward from 1-based
    /// cell (x, y), four dots tall in the middle of the row. Bars that
    /// would run past the grid are dropped whole.
    pub fn hbar(&mut self, x: i32, y: i32, len: i32) {
        let (x, y) = (x - 1, y - 1);
        if y < 0
            || y >= HEIGHT as i32
            || x < 0
            || len < 0
            || x + len / CELL_WIDTH as i32 >= WIDTH as i32
        {
            return;
        }

        for i in 0..len as usize {
            self.framebuf.set(y as usize, x as usize * CELL_WIDTH + i, 0x3C);
        }
    }

    /// Render big digit `n` (0-9, 10 draws the colon) three pages tall
    /// at 1-based character column `x`. Page 0 is left free for a
    /// caption. Columns hanging off the panel edge are clipped; an
    /// out-of-range `x` or `n` is a no-op.
    pub fn num(&mut self, x: i32, n: i32) {
        let x = x - 1;
        if x >= WIDTH as i32 || !(0..=10).contains(&n) {
            return;
        }

        let (art, cols): (&[&str], usize) = if n == 10 {
            (&BIG_COLON, COLON_COLUMNS)
        } else {
            (&BIG_DIGITS[n as usize], DIGIT_COLUMNS)
        };

        for z in 0..3 {
            for c in 0..cols {
                let strip =
                    pack_column(|j| art[z * CELL_HEIGHT + j].as_bytes()[c] == b'.');
                let col = x * CELL_WIDTH as i32 + c as i32;
                if (0..PIXEL_WIDTH as i32).contains(&col) {
                    self.framebuf.set(z + 1, col as usize, strip);
                }
            }
        }
    }

    /// Place an icon at 1-based cell (x, y). The hearts are installed
    /// into the programmable glyph slot 0 and drawn from there, exactly
    /// like a host-supplied custom character would be. Unlike the other
    /// drawing calls this one signals when the icon is not supported,
    /// so the host can substitute a plain character.
    pub fn icon(&mut self, x: i32, y: i32, icon: Icon) -> Result<(), DisplayError> {
        // inverse-video 6x8 hearts, 1 = lit
        const HEART_OPEN: [u8; CELL_WIDTH * CELL_HEIGHT] = [
            1, 1, 1, 1, 1, 1,
            1, 0, 1, 0, 1, 1,
            0, 0, 0, 0, 0, 1,
            0, 0, 0, 0, 0, 1,
            0, 0, 0, 0, 0, 1,
            1, 0, 0, 0, 1, 1,
            1, 1, 0, 1, 1, 1,
            1, 1, 1, 1, 1, 1,
        ];

        const HEART_FILLED: [u8; CELL_WIDTH * CELL_HEIGHT] = [
            1, 1, 1, 1, 1, 1,
            1, 0, 1, 0, 1, 1,
            0, 1, 0, 1, 0, 1,
            0, 1, 1, 1, 0, 1,
            0, 1, 1, 1, 0, 1,
            1, 0, 1, 0, 1, 1,
            1, 1, 0, 1, 1, 1,
            1, 1, 1, 1, 1, 1,
        ];

        match icon {
            Icon::BlockFilled => self.chr(x, y, 255),
            Icon::HeartFilled => {
                self.set_char(0, &HEART_FILLED);
                self.chr(x, y, 0);
            }
            Icon::HeartOpen => {
                self.set_char(0, &HEART_OPEN);
                self.chr(x, y, 0);
            }
            other => return Err(DisplayError::UnsupportedIcon(other)),
        }
        Ok(())
    }
}
