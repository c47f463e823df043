/*
 *  display/mod.rs
 *
 *  sedpar - SED1520 parallel port LCD driver
 *  (c) 2025-26 The sedpar authors
 *
 *  Display subsystem: framebuffer, wire protocol and the driver
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

pub mod bus;
pub mod error;
pub mod framebuffer;
pub mod sed1520;

// Re-exports for convenience
pub use bus::{ChipSelect, ControlBus};
pub use error::DisplayError;
pub use framebuffer::{pack_column, FrameBuffer};
pub use sed1520::{Icon, Sed1520};
