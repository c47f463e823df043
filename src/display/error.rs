/*
 *  display/error.rs
 *
 *  sedpar - SED1520 parallel port LCD driver
 *  (c) 2025-26 The sedpar authors
 *
 *  Error types for the display subsystem
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

use std::error::Error;
use std::fmt;
use std::io;

use crate::display::sed1520::Icon;

/// Error type for display operations.
///
/// Drawing into the framebuffer never fails (out-of-range input is
/// clipped silently); errors come from the port at init or transfer
/// time, and from the one drawing call that signals, `icon`.
#[derive(Debug)]
pub enum DisplayError {
    /// The parallel port pair could not be claimed at init time.
    PortAccess { port: u16, source: io::Error },

    /// A raw port write failed mid-transfer.
    Io(io::Error),

    /// The host asked for an icon this panel cannot draw.
    UnsupportedIcon(Icon),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::PortAccess { port, source } =>
                write!(f, "unable to access port 0x{:03X}: {}", port, source),
            DisplayError::Io(err) =>
                write!(f, "port write failed: {}", err),
            DisplayError::UnsupportedIcon(icon) =>
                write!(f, "unsupported icon: {:?}", icon),
        }
    }
}

impl Error for DisplayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DisplayError::PortAccess { source, .. } => Some(source),
            DisplayError::Io(err) => Some(err),
            DisplayError::UnsupportedIcon(_) => None,
        }
    }
}

impl From<io::Error> for DisplayError {
    fn from(err: io::Error) -> Self {
        DisplayError::Io(err)
    }
}
