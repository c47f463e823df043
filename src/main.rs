/*
 *  main.rs
 *
 *  sedpar - SED1520 parallel port LCD driver
 *  (c) 2025-26 The sedpar authors
 *
 *  Demo host: drives the panel with a clock, a text banner or a bar
 *  sweep so the wiring can be checked end to end
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

use std::thread;
use std::time::Duration;

use anyhow::Context;
use chrono::{Local, Timelike};
use env_logger::Env;
use log::info;

use sedpar::config::{self, Demo};
use sedpar::{DevPort, Icon, Sed1520};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

fn main() -> anyhow::Result<()> {
    let cfg = config::load()?;

    let level = cfg.log_level.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    info!(
        "sedpar {} (built {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE
    );

    let port = cfg.port();
    let mut lcd = Sed1520::open(port)
        .with_context(|| format!("bringing up the panel on port 0x{port:03X}"))?;

    match cfg.demo.unwrap_or(Demo::Clock) {
        Demo::Clock => run_clock(&mut lcd),
        Demo::Text => run_text(&mut lcd, cfg.text.as_deref().unwrap_or("sedpar")),
        Demo::Bars => run_bars(&mut lcd),
    }
}

/// HH:MM in big digits on pages 1-3, date caption on page 0, heartbeat
/// in the top-right corner.
fn run_clock(lcd: &mut Sed1520<DevPort>) -> anyhow::Result<()> {
    loop {
        let now = Local::now();

        lcd.clear();
        lcd.string(1, 1, &now.format("%a %d %b").to_string());

        let (h, m) = (now.hour() as i32, now.minute() as i32);
        lcd.num(2, h / 10);
        lcd.num(5, h % 10);
        lcd.num(8, 10);
        lcd.num(9, m / 10);
        lcd.num(12, m % 10);

        let beat = if now.second() % 2 == 0 {
            Icon::HeartFilled
        } else {
            Icon::HeartOpen
        };
        let _ = lcd.icon(20, 1, beat);

        lcd.flush().context("flushing clock frame")?;
        thread::sleep(Duration::from_millis(500));
    }
}

/// Static banner with an underline bar.
fn run_text(lcd: &mut Sed1520<DevPort>, text: &str) -> anyhow::Result<()> {
    lcd.clear();

    let cols = lcd.width() as i32;
    let len = text.len().min(lcd.width()) as i32;
    let x = 1 + (cols - len) / 2;

    lcd.string(x, 2, text);
    lcd.hbar(x, 3, len * lcd.cell_width() as i32 - 1);

    lcd.flush().context("flushing text frame")?;

    // nothing further to do, the image stays on the glass
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}

/// Sweeping vertical bars across the full grid, caption on page 0.
fn run_bars(lcd: &mut Sed1520<DevPort>) -> anyhow::Result<()> {
    let span = 3 * lcd.cell_height() as i32;
    let cols = lcd.width() as i32;
    let mut tick: i32 = 0;

    loop {
        lcd.clear();
        lcd.string(1, 1, "bar sweep");

        for x in 1..=cols {
            let len = (tick + x) % (span + 1);
            lcd.vbar(x, len);
        }

        lcd.flush().context("flushing bar frame")?;
        tick += 2;
        thread::sleep(Duration::from_millis(100));
    }
}
