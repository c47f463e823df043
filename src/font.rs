/*
 *  font.rs
 *
 *  sedpar - SED1520 parallel port LCD driver
 *  (c) 2025-26 The sedpar authors
 *
 *  Runtime-mutable 6x8 glyph table; the SED1520 has no character
 *  generator, every pixel on the panel comes from this table
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

use crate::constants::{CELL_HEIGHT, CELL_WIDTH};

/// Number of glyph slots. Every character code maps to a slot, and every
/// slot can be reprogrammed at runtime (a classic HD44780 only offers 8
/// programmable chars; keeping the whole table in RAM lifts that limit).
pub const GLYPH_COUNT: usize = 256;

/// Glyph table owned by one driver instance.
///
/// A glyph is `CELL_HEIGHT` row bytes, top to bottom, with the low
/// `CELL_WIDTH` bits used and bit 0 the rightmost pixel column. The
/// renderer transposes these rows into the framebuffer's column bytes.
pub struct FontTable {
    glyphs: [[u8; CELL_HEIGHT]; GLYPH_COUNT],
}

impl FontTable {
    /// A fresh table holding the built-in font.
    pub fn new() -> Self {
        Self { glyphs: FONTMAP }
    }

    /// Rows of glyph `z`.
    pub fn glyph(&self, z: u8) -> &[u8; CELL_HEIGHT] {
        &self.glyphs[usize::from(z)]
    }

    /// Replace glyph `n` from cell data in row scan order, one entry per
    /// pixel, any non-zero entry lit. Rows pack most-significant-first so
    /// the first entry of a row is the leftmost pixel column.
    ///
    /// The caller has validated `n` and the data length; cells already
    /// drawn keep their old shape until they are drawn again.
    pub(crate) fn set_glyph(&mut self, n: usize, data: &[u8]) {
        for row in 0..CELL_HEIGHT {
            let mut bits: u8 = 0;

            for col in 0..CELL_WIDTH {
                bits = (bits << 1) | u8::from(data[row * CELL_WIDTH + col] > 0);
            }

            self.glyphs[n][row] = bits;
        }
    }
}

impl Default for FontTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Printable ASCII 0x20..=0x7E as 5x7 row patterns in the low bits of
/// each row byte (bit 4 = leftmost glyph column). Bit 5, the leftmost
/// cell column, stays clear for inter-character spacing; row 7 stays
/// clear for the baseline gap.
#[rustfmt::skip]
const ASCII: [[u8; CELL_HEIGHT]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04, 0x00], // '!'
    [0x0A, 0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A, 0x00], // '#'
    [0x04, 0x0F, 0x14, 0x0E, 0x05, 0x1E, 0x04, 0x00], // '$'
    [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03, 0x00], // '%'
    [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D, 0x00], // '&'
    [0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00], // '\''
    [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02, 0x00], // '('
    [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08, 0x00], // ')'
    [0x00, 0x04, 0x15, 0x0E, 0x15, 0x04, 0x00, 0x00], // '*'
    [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08, 0x00], // ','
    [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // '.'
    [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00, 0x00], // '/'
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E, 0x00], // '0'
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00], // '1'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F, 0x00], // '2'
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E, 0x00], // '3'
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02, 0x00], // '4'
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E, 0x00], // '5'
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E, 0x00], // '6'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08, 0x00], // '7'
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E, 0x00], // '8'
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C, 0x00], // '9'
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00, 0x00], // ':'
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x04, 0x08, 0x00], // ';'
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02, 0x00], // '<'
    [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00, 0x00], // '='
    [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08, 0x00], // '>'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04, 0x00], // '?'
    [0x0E, 0x11, 0x01, 0x0D, 0x15, 0x15, 0x0E, 0x00], // '@'
    [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x00], // 'A'
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E, 0x00], // 'B'
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E, 0x00], // 'C'
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C, 0x00], // 'D'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F, 0x00], // 'E'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10, 0x00], // 'F'
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F, 0x00], // 'G'
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11, 0x00], // 'H'
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00], // 'I'
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C, 0x00], // 'J'
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11, 0x00], // 'K'
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F, 0x00], // 'L'
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11, 0x00], // 'M'
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x00], // 'N'
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00], // 'O'
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10, 0x00], // 'P'
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D, 0x00], // 'Q'
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11, 0x00], // 'R'
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E, 0x00], // 'S'
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00], // 'T'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00], // 'U'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04, 0x00], // 'V'
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A, 0x00], // 'W'
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11, 0x00], // 'X'
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x00], // 'Y'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F, 0x00], // 'Z'
    [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E, 0x00], // '['
    [0x00, 0x10, 0x08, 0x04, 0x02, 0x01, 0x00, 0x00], // '\\'
    [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E, 0x00], // ']'
    [0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00], // '_'
    [0x08, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00], // '`'
    [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F, 0x00], // 'a'
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E, 0x00], // 'b'
    [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E, 0x00], // 'c'
    [0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F, 0x00], // 'd'
    [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E, 0x00], // 'e'
    [0x06, 0x09, 0x08, 0x1C, 0x08, 0x08, 0x08, 0x00], // 'f'
    [0x00, 0x00, 0x0F, 0x11, 0x0F, 0x01, 0x0E, 0x00], // 'g'
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00], // 'h'
    [0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E, 0x00], // 'i'
    [0x02, 0x00, 0x06, 0x02, 0x02, 0x12, 0x0C, 0x00], // 'j'
    [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12, 0x00], // 'k'
    [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00], // 'l'
    [0x00, 0x00, 0x1A, 0x15, 0x15, 0x11, 0x11, 0x00], // 'm'
    [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00], // 'n'
    [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E, 0x00], // 'o'
    [0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10, 0x00], // 'p'
    [0x00, 0x00, 0x0D, 0x13, 0x0F, 0x01, 0x01, 0x00], // 'q'
    [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10, 0x00], // 'r'
    [0x00, 0x00, 0x0E, 0x10, 0x0E, 0x01, 0x1E, 0x00], // 's'
    [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06, 0x00], // 't'
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D, 0x00], // 'u'
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04, 0x00], // 'v'
    [0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A, 0x00], // 'w'
    [0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x00], // 'x'
    [0x00, 0x00, 0x11, 0x11, 0x0F, 0x01, 0x0E, 0x00], // 'y'
    [0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F, 0x00], // 'z'
    [0x02, 0x04, 0x04, 0x08, 0x04, 0x04, 0x02, 0x00], // '{'
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00], // '|'
    [0x08, 0x04, 0x04, 0x02, 0x04, 0x04, 0x08, 0x00], // '}'
    [0x00, 0x00, 0x08, 0x15, 0x02, 0x00, 0x00, 0x00], // '~'
];

const fn build_fontmap() -> [[u8; CELL_HEIGHT]; GLYPH_COUNT] {
    let mut map = [[0u8; CELL_HEIGHT]; GLYPH_COUNT];

    let mut i = 0;
    while i < ASCII.len() {
        map[0x20 + i] = ASCII[i];
        i += 1;
    }

    // 255 is the solid block, full cell width
    map[0xFF] = [0x3F; CELL_HEIGHT];

    map
}

/// The built-in font. Codes outside printable ASCII render blank until
/// reprogrammed, except 255 (solid block).
static FONTMAP: [[u8; CELL_HEIGHT]; GLYPH_COUNT] = build_fontmap();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_block_glyph_is_solid() {
        let font = FontTable::new();
        assert_eq!(font.glyph(255), &[0x3F; CELL_HEIGHT]);
    }

    #[test]
    fn builtin_space_is_blank() {
        let font = FontTable::new();
        assert_eq!(font.glyph(b' '), &[0x00; CELL_HEIGHT]);
    }

    #[test]
    fn unassigned_codes_are_blank() {
        let font = FontTable::new();
        assert_eq!(font.glyph(0), &[0x00; CELL_HEIGHT]);
        assert_eq!(font.glyph(0x7F), &[0x00; CELL_HEIGHT]);
        assert_eq!(font.glyph(200), &[0x00; CELL_HEIGHT]);
    }

    #[test]
    fn set_glyph_packs_rows_msb_first() {
        let mut font = FontTable::new();

        // one row with only the leftmost pixel lit, one with only the
        // rightmost, the rest blank
        let mut data = [0u8; CELL_WIDTH * CELL_HEIGHT];
        data[0] = 1; // row 0, leftmost column
        data[CELL_WIDTH + (CELL_WIDTH - 1)] = 9; // row 1, rightmost, non-zero counts as lit

        font.set_glyph(7, &data);

        let glyph = font.glyph(7);
        assert_eq!(glyph[0], 1 << (CELL_WIDTH - 1));
        assert_eq!(glyph[1], 0x01);
        assert_eq!(&glyph[2..], &[0u8; CELL_HEIGHT - 2]);
    }

    #[test]
    fn set_glyph_does_not_disturb_neighbors() {
        let mut font = FontTable::new();
        let data = [1u8; CELL_WIDTH * CELL_HEIGHT];

        font.set_glyph(65, &data);

        assert_eq!(font.glyph(65), &[0x3F; CELL_HEIGHT]);
        assert_eq!(font.glyph(66), &ASCII[(b'B' - 0x20) as usize]);
    }
}
