//! 8×8 RGB bitmaps for the LED matrix
//!
//! Pixels are stored row-major, top-left first, as `[r, g, b]` triples.

/// One LED colour
pub type Rgb = [u8; 3];

/// A full-matrix image, row-major
pub type Glyph = [Rgb; 64];

const ICE: Rgb = [153, 217, 234];
const OFF: Rgb = [0, 0, 0];
const YELLOW: Rgb = [255, 255, 51];
const RED: Rgb = [255, 0, 0];
const ORANGE: Rgb = [255, 128, 51];
const DARK: Rgb = [26, 26, 26];

const S: Rgb = ICE;
const O: Rgb = OFF;
const Y: Rgb = YELLOW;
const R: Rgb = RED;
const N: Rgb = ORANGE;
const B: Rgb = DARK;

/// Shown when the heat index is below the cold threshold
#[rustfmt::skip]
pub const SNOWFLAKE: Glyph = [
    O, O, S, O, S, O, O, O,
    O, O, O, S, O, O, O, O,
    S, O, S, S, S, O, S, O,
    O, S, S, O, S, S, O, O,
    S, O, S, S, S, O, S, O,
    O, O, O, S, O, O, O, O,
    O, O, S, O, S, O, O, O,
    O, O, O, O, O, O, O, O,
];

/// Shown when the heat index is above the hot threshold
#[rustfmt::skip]
pub const FLAME: Glyph = [
    O, O, O, O, O, R, O, O,
    O, O, O, O, O, R, O, O,
    O, O, R, O, R, R, O, O,
    O, O, R, R, R, R, O, R,
    R, O, R, N, Y, R, R, R,
    R, R, R, N, Y, N, R, R,
    R, R, N, N, Y, Y, N, R,
    R, R, N, Y, Y, Y, N, R,
];

/// Shown when the heat index is comfortable
#[rustfmt::skip]
pub const HAPPY: Glyph = [
    O, O, Y, Y, Y, O, O, O,
    Y, Y, Y, Y, Y, Y, Y, O,
    Y, Y, B, Y, B, Y, Y, O,
    R, Y, Y, R, Y, Y, R, O,
    Y, B, Y, Y, Y, B, Y, O,
    Y, Y, B, B, B, Y, Y, O,
    Y, Y, Y, Y, Y, Y, Y, O,
    O, O, O, O, O, O, O, O,
];
