//! Panel geometry and wire timing constants shared across the driver.
//!
//! Everything here is fixed by the hardware: a single 122x32 panel wired
//! as two SED1520 controllers, one per half, behind a PC parallel port.

/// Total panel width in pixels.
pub const PIXEL_WIDTH: usize = 122;
/// Total panel height in pixels.
pub const PIXEL_HEIGHT: usize = 32;

/// Width of one character cell in pixels.
pub const CELL_WIDTH: usize = 6;
/// Height of one character cell in pixels. This equals the controller's
/// page height; one framebuffer byte spans exactly one cell row, so the
/// two must never be decoupled.
pub const CELL_HEIGHT: usize = 8;

/// Character grid width (20 columns).
pub const WIDTH: usize = PIXEL_WIDTH / CELL_WIDTH;
/// Character grid height (4 rows, one per controller page).
pub const HEIGHT: usize = PIXEL_HEIGHT / CELL_HEIGHT;

/// Framebuffer size in bytes: one byte per pixel column per page.
pub const FRAMEBUF_SIZE: usize = PIXEL_WIDTH * HEIGHT;

/// Pixel columns owned by each controller chip. Chip 2 drives the left
/// half of the panel, chip 1 the right half.
pub const CHIP_COLUMNS: usize = PIXEL_WIDTH / 2;

/// Settle time after each strobe edge, in microseconds. SED1520 timing
/// requirement, not a tunable.
pub const IO_DELAY_US: u32 = 500;

/// Default parallel port base address (LPT1).
pub const DEFAULT_PORT: u16 = 0x378;
