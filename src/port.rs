/*
 *  port.rs
 *
 *  sedpar - SED1520 parallel port LCD driver
 *  (c) 2025-26 The sedpar authors
 *
 *  Raw parallel port access: /dev/port backend and a recording mock
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

use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::fs::FileExt;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use log::info;

/// Byte-level access to PC I/O port space, plus the settle-delay
/// primitive the wire protocol needs between strobe edges.
///
/// The driver never assumes a write can be retried or times out; a write
/// either reaches the port or the transfer is abandoned with the error.
pub trait ParallelPort: Send {
    /// Write one byte to an absolute I/O port address.
    fn write(&mut self, addr: u16, value: u8) -> io::Result<()>;

    /// Block the calling thread for approximately `us` microseconds.
    fn delay_us(&mut self, us: u32);
}

/// Parallel port access through `/dev/port`.
///
/// A positioned one-byte write into `/dev/port` hits the ISA I/O space at
/// that offset, which is the userspace equivalent of `outb`. Opening the
/// device needs root or CAP_SYS_RAWIO; failure to open is the
/// port-access-denied case and is fatal at driver init.
pub struct DevPort {
    dev: File,
}

impl DevPort {
    /// Open `/dev/port` for writing.
    pub fn open() -> io::Result<Self> {
        let dev = OpenOptions::new().write(true).open("/dev/port")?;
        info!("opened /dev/port for raw port I/O");
        Ok(Self { dev })
    }
}

impl ParallelPort for DevPort {
    fn write(&mut self, addr: u16, value: u8) -> io::Result<()> {
        self.dev.write_all_at(&[value], u64::from(addr))
    }

    fn delay_us(&mut self, us: u32) {
        thread::sleep(Duration::from_micros(u64::from(us)));
    }
}

/// Recording port for testing without hardware.
///
/// Every write is logged verbatim and delays are accumulated instead of
/// slept, so tests can decode the exact wire traffic a driver operation
/// produced. State is shared behind an `Arc` so tests keep a handle after
/// the port has been moved into the driver.
#[derive(Debug, Clone, Default)]
pub struct MockPort {
    state: Arc<Mutex<MockPortState>>,
}

/// Internal state of the mock port, inspectable from tests.
#[derive(Debug, Default)]
pub struct MockPortState {
    /// Every (address, value) write, in issue order.
    pub writes: Vec<(u16, u8)>,

    /// Total microseconds of requested settle delay.
    pub delayed_us: u64,
}

impl MockPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the shared state for inspection in tests.
    pub fn state(&self) -> Arc<Mutex<MockPortState>> {
        Arc::clone(&self.state)
    }
}

impl MockPortState {
    /// Drop the recorded history (useful between test phases).
    pub fn reset(&mut self) {
        self.writes.clear();
        self.delayed_us = 0;
    }
}

impl ParallelPort for MockPort {
    fn write(&mut self, addr: u16, value: u8) -> io::Result<()> {
        self.state.lock().unwrap().writes.push((addr, value));
        Ok(())
    }

    fn delay_us(&mut self, us: u32) {
        self.state.lock().unwrap().delayed_us += u64::from(us);
    }
}
