//! Tile colors.
//!
//! Backgrounds follow the classic 2048 palette. Small tiles (2, 4) use dark
//! text on a light tile, everything larger uses light text.

use crate::fb::{CellStyle, Rgb};
use crate::types::Tile;

/// Background for tiles above 2048.
const BEYOND_BG: Rgb = Rgb::new(0x3c, 0x3a, 0x32);

const DARK_TEXT: Rgb = Rgb::new(0x77, 0x6e, 0x65);
const LIGHT_TEXT: Rgb = Rgb::new(0xf9, 0xf6, 0xf2);

/// Grid background between tiles.
pub const GRID_BG: Rgb = Rgb::new(0xbb, 0xad, 0xa0);

/// Background color for a tile value (0 = empty cell).
pub fn tile_bg(value: Tile) -> Rgb {
    match value {
        0 => Rgb::new(0xcd, 0xc1, 0xb4),
        2 => Rgb::new(0xee, 0xe4, 0xda),
        4 => Rgb::new(0xed, 0xe0, 0xc8),
        8 => Rgb::new(0xf2, 0xb1, 0x79),
        16 => Rgb::new(0xf5, 0x95, 0x63),
        32 => Rgb::new(0xf6, 0x7c, 0x5f),
        64 => Rgb::new(0xf6, 0x5e, 0x3b),
        128 => Rgb::new(0xed, 0xcf, 0x72),
        256 => Rgb::new(0xed, 0xcc, 0x61),
        512 => Rgb::new(0xed, 0xc8, 0x50),
        1024 => Rgb::new(0xed, 0xc5, 0x3f),
        2048 => Rgb::new(0xed, 0xc2, 0x2e),
        _ => BEYOND_BG,
    }
}

/// Full cell style for a tile value.
pub fn tile_style(value: Tile) -> CellStyle {
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    CellStyle::new(fg, tile_bg(value)).bold()
}
