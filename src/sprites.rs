//! Embedded 1-bit sprite art and a tiny bitmap font.
//!
//! The game ships no image assets. Every sprite is a table of row bitmasks
//! drawn at half resolution and blitted at 2x, which keeps the art editable
//! in source and the binary self-contained. Row bit `width - 1 - x` maps to
//! pixel column `x`.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget};

/// Logical-to-backbuffer pixel scale for sprite art.
pub const PIXEL: u32 = 2;

#[derive(Debug, Clone, Copy)]
pub struct BitSprite {
    pub width: u32,
    pub rows: &'static [u32],
}

impl BitSprite {
    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Draws the sprite with its top-left corner at `(x, y)`, one filled
    /// rect per horizontal run of set bits.
    pub fn blit<T: RenderTarget>(&self, canvas: &mut Canvas<T>, x: i32, y: i32, color: Color) -> Result<(), String> {
        canvas.set_draw_color(color);
        for (py, row) in self.rows.iter().enumerate() {
            let mut px = 0;
            while px < self.width {
                if row >> (self.width - 1 - px) & 1 == 0 {
                    px += 1;
                    continue;
                }
                let start = px;
                while px < self.width && row >> (self.width - 1 - px) & 1 == 1 {
                    px += 1;
                }
                canvas.fill_rect(Rect::new(
                    x + (start * PIXEL) as i32,
                    y + (py as u32 * PIXEL) as i32,
                    (px - start) * PIXEL,
                    PIXEL,
                ))?;
            }
        }
        Ok(())
    }
}

/// Skater pushing along, two alternating frames. Board included.
pub const SKATER_ROLL: [BitSprite; 2] = [
    BitSprite {
        width: 7,
        rows: &[
            0b0110000, // head
            0b0110000,
            0b0010000,
            0b0111000, // torso
            0b1010100, // arms
            0b0010000,
            0b0010000,
            0b0101000, // legs
            0b0101000,
            0b0100100,
            0b0100100,
            0b0000000,
            0b1111111, // deck
            0b0100010, // wheels
        ],
    },
    BitSprite {
        width: 7,
        rows: &[
            0b0110000,
            0b0110000,
            0b0010000,
            0b0111000,
            0b1010100,
            0b0010000,
            0b0010000,
            0b0101000,
            0b0100100,
            0b0100010,
            0b0100001, // push leg extended
            0b0000000,
            0b1111111,
            0b0100010,
        ],
    },
];

/// Crouched under an overhead hazard. Board included.
pub const SKATER_DUCK: BitSprite = BitSprite {
    width: 7,
    rows: &[
        0b0011000, // head tucked forward
        0b0011000,
        0b0111100,
        0b1111100,
        0b0101000,
        0b0101000,
        0b1111111,
        0b0100010,
    ],
};

/// Airborne body only; the board is drawn separately so tricks can animate
/// it independently.
pub const SKATER_AIR: BitSprite = BitSprite {
    width: 7,
    rows: &[
        0b0011000,
        0b0011000,
        0b0010000,
        0b0111000,
        0b1010100, // arms out for balance
        0b0111000,
        0b0101000, // knees tucked
        0b1000100,
    ],
};

/// On a rail or ledge, knees bent. Board included.
pub const SKATER_GRIND: BitSprite = BitSprite {
    width: 7,
    rows: &[
        0b0110000,
        0b0110000,
        0b0010000,
        0b0111000,
        0b1010100,
        0b0010000,
        0b0111000, // crouch
        0b0101000,
        0b0101000,
        0b1000100,
        0b0000000,
        0b1111111,
        0b0100010,
        0b0000000,
    ],
};

pub const BOARD_FLAT: BitSprite = BitSprite {
    width: 7,
    rows: &[0b1111111, 0b0100010],
};

/// Kickflip rotation, alternated by frame: edge-on, then wheels-up.
pub const BOARD_KICKFLIP: [BitSprite; 2] = [
    BitSprite {
        width: 7,
        rows: &[0b1111111, 0b0000000],
    },
    BitSprite {
        width: 7,
        rows: &[0b0100010, 0b1111111],
    },
];

/// Pop shuv-it rotation, alternated by frame: foreshortened, then reversed.
pub const BOARD_SHUVIT: [BitSprite; 2] = [
    BitSprite {
        width: 7,
        rows: &[0b0011100, 0b0001000],
    },
    BitSprite {
        width: 7,
        rows: &[0b1111111, 0b1000001],
    },
];

pub const HYDRANT: BitSprite = BitSprite {
    width: 6,
    rows: &[
        0b011110, // cap
        0b011110,
        0b111111, // side nozzles
        0b011110,
        0b101101,
        0b011110,
        0b011110,
        0b011110,
        0b111111, // base
    ],
};

pub const RAIL: BitSprite = BitSprite {
    width: 21,
    rows: &[
        0b111111111111111111111,
        0b111111111111111111111,
        0b000110000000001100000, // posts
        0b000110000000001100000,
        0b000110000000001100000,
        0b000110000000001100000,
    ],
};

pub const CRATE_BOX: BitSprite = BitSprite {
    width: 15,
    rows: &[
        0b111111111111111,
        0b100000000000001,
        0b100111111111001, // label panel
        0b100100000001001,
        0b100111111111001,
        0b100000000000001,
        0b100000000000001,
        0b111111111111111,
    ],
};

/// Hovering drone, two rotor frames.
pub const DRONE: [BitSprite; 2] = [
    BitSprite {
        width: 10,
        rows: &[
            0b1111001111, // rotors
            0b0010000100,
            0b0011111100,
            0b0011011100, // camera eye
            0b0011111100,
            0b0000110000,
            0b0001001000, // landing skids
        ],
    },
    BitSprite {
        width: 10,
        rows: &[
            0b0110000110,
            0b0010000100,
            0b0011111100,
            0b0011011100,
            0b0011111100,
            0b0000110000,
            0b0001001000,
        ],
    },
];

pub const GUARD: BitSprite = BitSprite {
    width: 8,
    rows: &[
        0b00111100, // cap
        0b00111100,
        0b00111100,
        0b01111110, // shoulders
        0b11111111,
        0b10111101, // arms at sides
        0b10111101,
        0b10111101,
        0b00111100,
        0b00111100,
        0b00100100, // legs
        0b00100100,
        0b00100100,
        0b00100100,
        0b01100110, // boots
    ],
};

/// A short flight of stairs descending toward the skater.
pub const STAIRS: BitSprite = BitSprite {
    width: 17,
    rows: &[
        0b00000000000000111,
        0b00000000000000111,
        0b00000000000111111,
        0b00000000000111111,
        0b00000000111111111,
        0b00000000111111111,
        0b00001111111111111,
        0b00001111111111111,
        0b11111111111111111,
        0b11111111111111111,
    ],
};

/// 3x5 glyphs for A-Z, 0-9, '-', and '!'. Unknown characters render as
/// blanks. Row bit 2 is the left column.
const GLYPH_WIDTH: u32 = 3;
const GLYPH_HEIGHT: u32 = 5;
/// Horizontal advance per character, in backbuffer pixels (no scaling).
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

fn glyph(c: char) -> [u8; GLYPH_HEIGHT as usize] {
    match c {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b011, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b110, 0b100, 0b110, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b110, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        _ => [0; 5],
    }
}

/// Rendered width of `text` in backbuffer pixels.
pub fn text_width(text: &str) -> u32 {
    (text.chars().count() as u32 * GLYPH_ADVANCE).saturating_sub(1)
}

/// Draws `text` with its top-left corner at `(x, y)`, uppercase only.
pub fn draw_text<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    for (i, c) in text.chars().enumerate() {
        let rows = glyph(c.to_ascii_uppercase());
        let cx = x + (i as u32 * GLYPH_ADVANCE) as i32;
        for (py, row) in rows.iter().enumerate() {
            for px in 0..GLYPH_WIDTH {
                if row >> (GLYPH_WIDTH - 1 - px) & 1 == 1 {
                    canvas.fill_rect(Rect::new(cx + px as i32, y + py as i32, 1, 1))?;
                }
            }
        }
    }
    Ok(())
}
