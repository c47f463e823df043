/*
 *  tests/sed1520_integration.rs
 *
 *  Wire-level integration tests for the SED1520 driver
 *
 *  sedpar - SED1520 parallel port LCD driver
 *  (c) 2025-26 The sedpar authors
 */

use sedpar::constants::{CHIP_COLUMNS, HEIGHT, IO_DELAY_US, PIXEL_WIDTH};
use sedpar::{Icon, MockPort, Sed1520};

const BASE: u16 = 0x378;
const CTRL: u16 = BASE + 2;

const A0: u8 = 0x08;
const CS2: u8 = 0x04;
const CS1: u8 = 0x02;
const WR: u8 = 0x01;

/// One decoded byte transfer as seen by the controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Transfer {
    value: u8,
    data: bool,
    chip1: bool,
    chip2: bool,
}

/// Reconstruct transfers from the raw write log. A transfer is a data
/// register write followed by strobe-low / latch / strobe-low on the
/// control register; anything else (the init preamble) is skipped.
fn decode(writes: &[(u16, u8)]) -> Vec<Transfer> {
    let mut out = Vec::new();
    let mut i = 0;

    while i < writes.len() {
        if i + 3 < writes.len() {
            let (a0, value) = writes[i];
            let (a1, w1) = writes[i + 1];
            let (a2, w2) = writes[i + 2];
            let (a3, w3) = writes[i + 3];

            if a0 == BASE
                && a1 == CTRL
                && a2 == CTRL
                && a3 == CTRL
                && w1 & WR != 0
                && w2 == w1 & !WR
                && w3 == w1
            {
                out.push(Transfer {
                    value,
                    data: w1 & A0 != 0,
                    // CS1 (nLF) is inverted on the wire, CS2 (INIT) is not
                    chip1: w1 & CS1 == 0,
                    chip2: w1 & CS2 != 0,
                });
                i += 4;
                continue;
            }
        }
        i += 1;
    }

    out
}

#[test]
fn init_runs_the_power_up_sequence_on_both_chips() {
    let port = MockPort::new();
    let state = port.state();

    let _lcd = Sed1520::with_port(port, BASE).unwrap();

    let state = state.lock().unwrap();

    // idle preamble before any strobed transfer
    assert_eq!(state.writes[0], (BASE, 0x00));
    assert_eq!(state.writes[1], (CTRL, WR | CS2));

    let xfers = decode(&state.writes);
    let expect = [0xE2, 0xAF, 0xC0, 0xB8 | 3];
    assert_eq!(xfers.len(), expect.len());
    for (xfer, value) in xfers.iter().zip(expect) {
        assert_eq!(xfer.value, value);
        assert!(!xfer.data, "init sequence must be commands");
        assert!(xfer.chip1 && xfer.chip2, "init sequence must hit both chips");
    }
}

#[test]
fn every_transfer_pays_both_settle_delays() {
    let port = MockPort::new();
    let state = port.state();

    let _lcd = Sed1520::with_port(port, BASE).unwrap();

    let state = state.lock().unwrap();
    let xfers = decode(&state.writes);
    assert_eq!(
        state.delayed_us,
        xfers.len() as u64 * 2 * u64::from(IO_DELAY_US)
    );
}

#[test]
fn flush_streams_each_half_to_its_own_chip() {
    let port = MockPort::new();
    let state = port.state();
    let mut lcd = Sed1520::with_port(port, BASE).unwrap();
    state.lock().unwrap().reset();

    lcd.flush().unwrap();

    let xfers = decode(&state.lock().unwrap().writes);

    // total traffic: per page one page select, two column selects and a
    // full row of data
    assert_eq!(xfers.len(), HEIGHT * (3 + PIXEL_WIDTH));

    let data: Vec<&Transfer> = xfers.iter().filter(|x| x.data).collect();
    assert_eq!(data.len(), HEIGHT * PIXEL_WIDTH);
    assert_eq!(
        data.iter().filter(|x| x.chip2 && !x.chip1).count(),
        HEIGHT * CHIP_COLUMNS,
        "left halves go to chip 2 alone"
    );
    assert_eq!(
        data.iter().filter(|x| x.chip1 && !x.chip2).count(),
        HEIGHT * CHIP_COLUMNS,
        "right halves go to chip 1 alone"
    );
    assert_eq!(
        data.iter().filter(|x| x.chip1 && x.chip2).count(),
        0,
        "no data byte is broadcast"
    );
}

#[test]
fn flush_addresses_pages_and_columns_from_scratch() {
    let port = MockPort::new();
    let state = port.state();
    let mut lcd = Sed1520::with_port(port, BASE).unwrap();
    state.lock().unwrap().reset();

    lcd.flush().unwrap();

    let xfers = decode(&state.lock().unwrap().writes);
    let per_page = 3 + PIXEL_WIDTH;

    for page in 0..HEIGHT {
        let chunk = &xfers[page * per_page..(page + 1) * per_page];

        // page select to both chips
        assert_eq!(chunk[0].value, 0xB8 | page as u8);
        assert!(!chunk[0].data && chunk[0].chip1 && chunk[0].chip2);

        // column reset on chip 2, then its data
        assert_eq!(chunk[1].value, 0x00);
        assert!(!chunk[1].data && chunk[1].chip2 && !chunk[1].chip1);
        assert!(chunk[2..2 + CHIP_COLUMNS].iter().all(|x| x.data));

        // column reset on chip 1, then its data
        let c1 = &chunk[2 + CHIP_COLUMNS];
        assert_eq!(c1.value, 0x00);
        assert!(!c1.data && c1.chip1 && !c1.chip2);
        assert!(chunk[3 + CHIP_COLUMNS..].iter().all(|x| x.data));
    }
}

#[test]
fn flush_sends_framebuffer_bytes_verbatim() {
    let port = MockPort::new();
    let state = port.state();
    let mut lcd = Sed1520::with_port(port, BASE).unwrap();

    lcd.icon(1, 1, Icon::BlockFilled).unwrap(); // solid cell, bytes 0xFF
    lcd.string(11, 2, "|");
    state.lock().unwrap().reset();

    lcd.flush().unwrap();

    let xfers = decode(&state.lock().unwrap().writes);
    let sent: Vec<u8> = xfers.iter().filter(|x| x.data).map(|x| x.value).collect();
    assert_eq!(sent.len(), HEIGHT * PIXEL_WIDTH);

    let fb = lcd.framebuffer();
    for (i, &byte) in sent.iter().enumerate() {
        let (row, col) = (i / PIXEL_WIDTH, i % PIXEL_WIDTH);
        assert_eq!(byte, fb.page(row)[col], "byte for page {row} column {col}");
    }

    // spot checks: the solid block and the '|' column
    assert_eq!(sent[0], 0xFF);
    assert_eq!(sent[PIXEL_WIDTH + 10 * 6 + 3], 0x7F);
}

#[test]
fn drawing_calls_emit_no_wire_traffic() {
    let port = MockPort::new();
    let state = port.state();
    let mut lcd = Sed1520::with_port(port, BASE).unwrap();
    state.lock().unwrap().reset();

    lcd.string(1, 1, "quiet");
    lcd.chr(3, 2, b'x');
    lcd.vbar(4, 10);
    lcd.hbar(1, 4, 20);
    lcd.num(7, 3);
    lcd.set_char(9, &[1; 48]);
    lcd.clear();

    assert!(state.lock().unwrap().writes.is_empty());
    assert_eq!(state.lock().unwrap().delayed_us, 0);
}

#[test]
fn unsupported_icon_reports_and_stays_silent() {
    let port = MockPort::new();
    let state = port.state();
    let mut lcd = Sed1520::with_port(port, BASE).unwrap();
    state.lock().unwrap().reset();

    assert!(lcd.icon(1, 1, Icon::CheckboxOn).is_err());
    assert!(lcd.icon(2, 1, Icon::ArrowLeft).is_err());

    assert!(state.lock().unwrap().writes.is_empty());
    assert!(lcd.framebuffer().as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn custom_glyph_round_trips_to_the_wire() {
    let port = MockPort::new();
    let state = port.state();
    let mut lcd = Sed1520::with_port(port, BASE).unwrap();

    // checkerboard cell: odd rows lit in odd columns and vice versa
    let mut cell = [0u8; 48];
    for row in 0..8 {
        for col in 0..6 {
            cell[row * 6 + col] = ((row + col) % 2) as u8;
        }
    }
    lcd.set_char(200, &cell);
    lcd.chr(1, 1, 200);
    state.lock().unwrap().reset();

    lcd.flush().unwrap();

    let xfers = decode(&state.lock().unwrap().writes);
    let sent: Vec<u8> = xfers.iter().filter(|x| x.data).map(|x| x.value).collect();

    // the transpose turns alternating rows into alternating strips
    assert_eq!(&sent[..6], &[0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55]);
}
