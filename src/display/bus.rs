/*
 *  display/bus.rs
 *
 *  sedpar - SED1520 parallel port LCD driver
 *  (c) 2025-26 The sedpar authors
 *
 *  Control-line protocol and chip addressing for the dual SED1520 bus
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

use std::io;

use log::debug;

use crate::constants::IO_DELAY_US;
use crate::port::ParallelPort;

// Control register bits and the printer port lines they ride on.
// nSTRB, nLF and nSEL are inverted by the port hardware; INIT is not.
const A0: u8 = 0x08; // nSEL - data/command select
const CS2: u8 = 0x04; // INIT - chip select, left controller
const CS1: u8 = 0x02; // nLF  - chip select, right controller
const WR: u8 = 0x01; // nSTRB - write strobe

/// Which of the two controllers a byte is addressed to.
///
/// The panel is one logical display but electrically two chips: chip 2
/// owns the left 61 pixel columns, chip 1 the right 61. Commands that
/// must hit the whole panel go to `Both`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipSelect {
    One,
    Two,
    Both,
}

impl ChipSelect {
    fn mask(self) -> u8 {
        match self {
            ChipSelect::One => CS1,
            ChipSelect::Two => CS2,
            ChipSelect::Both => CS1 | CS2,
        }
    }
}

/// The four-line write protocol every byte to the panel goes through.
///
/// Owns the port handle and base address; nothing outside this module
/// knows the control register encoding.
pub struct ControlBus<P> {
    port: P,
    base: u16,
}

impl<P: ParallelPort> ControlBus<P> {
    pub fn new(port: P, base: u16) -> Self {
        Self { port, base }
    }

    /// Control word for a chip set and line state. Selecting chip 1
    /// means *clearing* CS1 (nLF is inverted on the wire), selecting
    /// chip 2 means *setting* CS2 (INIT is not). A set WR bit holds the
    /// strobe line low.
    fn control_word(chips: ChipSelect, data: bool, strobe_low: bool) -> u8 {
        let m = chips.mask();
        let mut word = (CS1 & !m) | (CS2 & m);
        if data {
            word |= A0;
        }
        if strobe_low {
            word |= WR;
        }
        word
    }

    /// Put one byte on the data bus and strobe it into the selected
    /// chips: strobe low with the byte stable, latch on the rising
    /// edge, settle, return the strobe low, settle again.
    fn strobe(&mut self, value: u8, chips: ChipSelect, data: bool) -> io::Result<()> {
        self.port.write(self.base, value)?;
        self.port.write(self.base + 2, Self::control_word(chips, data, true))?;
        self.port.write(self.base + 2, Self::control_word(chips, data, false))?;
        self.port.delay_us(IO_DELAY_US);
        self.port.write(self.base + 2, Self::control_word(chips, data, true))?;
        self.port.delay_us(IO_DELAY_US);
        Ok(())
    }

    /// Send a command byte to the selected chips.
    pub fn write_command(&mut self, value: u8, chips: ChipSelect) -> io::Result<()> {
        self.strobe(value, chips, false)
    }

    /// Send a display-data byte to the selected chips.
    pub fn write_data(&mut self, value: u8, chips: ChipSelect) -> io::Result<()> {
        self.strobe(value, chips, true)
    }

    /// Select the active page (0-3) on both chips.
    pub fn select_page(&mut self, page: u8) -> io::Result<()> {
        self.write_command(0xB8 | (page & 0x03), ChipSelect::Both)
    }

    /// Select a chip-local column (0-60) on the given chips.
    pub fn select_column(&mut self, column: u8, chips: ChipSelect) -> io::Result<()> {
        self.write_command(column & 0x7F, chips)
    }

    /// Drive the bus to its idle state and run the controller power-up
    /// sequence: software reset, display on, start address 0, page 3.
    pub fn reset(&mut self) -> io::Result<()> {
        debug!("resetting SED1520 pair on port 0x{:03X}", self.base);

        self.port.write(self.base, 0)?;
        self.port.write(self.base + 2, WR | CS2)?;

        self.write_command(0xE2, ChipSelect::Both)?; // software reset
        self.write_command(0xAF, ChipSelect::Both)?; // display on
        self.write_command(0xC0, ChipSelect::Both)?; // display start address
        self.select_page(3)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::MockPort;

    #[test]
    fn control_word_encoding() {
        // command, strobe low
        assert_eq!(ControlBus::<MockPort>::control_word(ChipSelect::Both, false, true), 0x05);
        assert_eq!(ControlBus::<MockPort>::control_word(ChipSelect::One, false, true), 0x01);
        assert_eq!(ControlBus::<MockPort>::control_word(ChipSelect::Two, false, true), 0x07);

        // latch edge (strobe high)
        assert_eq!(ControlBus::<MockPort>::control_word(ChipSelect::Both, false, false), 0x04);
        assert_eq!(ControlBus::<MockPort>::control_word(ChipSelect::One, false, false), 0x00);
        assert_eq!(ControlBus::<MockPort>::control_word(ChipSelect::Two, false, false), 0x06);

        // data writes assert A0 on top
        assert_eq!(ControlBus::<MockPort>::control_word(ChipSelect::Both, true, true), 0x0D);
        assert_eq!(ControlBus::<MockPort>::control_word(ChipSelect::One, true, false), 0x08);
    }

    #[test]
    fn command_write_sequence() {
        let port = MockPort::new();
        let state = port.state();
        let mut bus = ControlBus::new(port, 0x378);

        bus.write_command(0xB8, ChipSelect::Both).unwrap();

        let state = state.lock().unwrap();
        assert_eq!(
            state.writes,
            vec![
                (0x378, 0xB8), // value on the data bus
                (0x37A, 0x05), // strobe low
                (0x37A, 0x04), // latch
                (0x37A, 0x05), // strobe back low
            ]
        );
        assert_eq!(state.delayed_us, 2 * u64::from(IO_DELAY_US));
    }

    #[test]
    fn data_write_targets_one_chip() {
        let port = MockPort::new();
        let state = port.state();
        let mut bus = ControlBus::new(port, 0x378);

        bus.write_data(0x42, ChipSelect::Two).unwrap();

        let state = state.lock().unwrap();
        assert_eq!(
            state.writes,
            vec![(0x378, 0x42), (0x37A, 0x0F), (0x37A, 0x0E), (0x37A, 0x0F)]
        );
    }

    #[test]
    fn page_select_masks_to_two_bits() {
        let port = MockPort::new();
        let state = port.state();
        let mut bus = ControlBus::new(port, 0x378);

        bus.select_page(0x07).unwrap();

        assert_eq!(state.lock().unwrap().writes[0], (0x378, 0xBB));
    }

    #[test]
    fn reset_issues_power_up_sequence() {
        let port = MockPort::new();
        let state = port.state();
        let mut bus = ControlBus::new(port, 0x378);

        bus.reset().unwrap();

        let state = state.lock().unwrap();
        // idle preamble, then the value byte of each command transfer
        assert_eq!(state.writes[0], (0x378, 0x00));
        assert_eq!(state.writes[1], (0x37A, WR | CS2));
        let values: Vec<u8> = state
            .writes
            .iter()
            .skip(2)
            .filter(|(addr, _)| *addr == 0x378)
            .map(|&(_, v)| v)
            .collect();
        assert_eq!(values, vec![0xE2, 0xAF, 0xC0, 0xBB]);
    }
}
