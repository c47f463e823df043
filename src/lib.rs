/*
 *  lib.rs
 *
 *  sedpar - SED1520 parallel port LCD driver
 *  (c) 2025-26 The sedpar authors
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

//! Driver for 122x32 graphic LCD panels built from a pair of SED1520
//! segment controllers on a PC parallel port.
//!
//! The SED1520 has no character generator, so everything on the panel
//! comes out of this crate: a 6x8 font transposed into the controller's
//! column-oriented page memory, big three-page digits for a clock
//! widget, bar primitives, and the four-control-line write protocol
//! (with its settle delays) that moves the framebuffer onto the two
//! chips sharing the glass.
//!
//! Drawing is pure memory mutation; [`Sed1520::flush`] is the only
//! operation that touches hardware after init. See [`Sed1520`] for the
//! host-facing surface.

pub mod bigfont;
pub mod config;
pub mod constants;
pub mod display;
pub mod font;
pub mod port;

pub use config::{Config, ConfigError};
pub use display::{ChipSelect, DisplayError, FrameBuffer, Icon, Sed1520};
pub use font::FontTable;
pub use port::{DevPort, MockPort, ParallelPort};
