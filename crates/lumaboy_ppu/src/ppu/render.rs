use super::registers::LcdControl;
use super::Ppu;
use crate::Color;

mod background;
mod sprites;
mod window;

const TILE_MAP_LOW: usize = 0x1800;
const TILE_MAP_HIGH: usize = 0x1C00;
/// Tile 0 in signed addressing mode (0x9000).
const SIGNED_TILE_BASE: i32 = 0x1000;
const TILE_BYTES: usize = 16;

impl Ppu {
    /// Mode 3: compose background, window and sprites for line LY.
    pub(super) fn render_scanline(&mut self) {
        self.render_background();
        self.render_window();
        self.render_sprites();
    }

    /// Color index (0..=3) of background-space pixel (`x`, `y`) in the tile
    /// map selected by `high_map`.
    fn tile_map_pixel(&self, high_map: bool, x: u8, y: u8) -> u8 {
        let map_base = if high_map { TILE_MAP_HIGH } else { TILE_MAP_LOW };
        let map_addr = map_base + ((x / 8) as usize & 31) + ((y / 8) as usize & 31) * 32;
        let tile_id = self.vram[map_addr];
        let row_addr = self.bg_tile_row_address(tile_id, y & 7);
        self.tile_row_pixel(row_addr, 7 - (x & 7))
    }

    /// Address of `row` within a BG/window tile, honouring LCDC.4.
    fn bg_tile_row_address(&self, tile_id: u8, row: u8) -> usize {
        let tile_base = if self.regs.lcdc.contains(LcdControl::TILE_DATA_UNSIGNED) {
            tile_id as usize * TILE_BYTES
        } else {
            (SIGNED_TILE_BASE + tile_id as i8 as i32 * TILE_BYTES as i32) as usize
        };
        tile_base + row as usize * 2
    }

    /// Combine the two bit planes of a tile row at `bit` (7 = leftmost).
    #[inline]
    fn tile_row_pixel(&self, row_addr: usize, bit: u8) -> u8 {
        let lo = (self.vram[row_addr] >> bit) & 0x01;
        let hi = (self.vram[row_addr + 1] >> bit) & 0x01;
        (hi << 1) | lo
    }

    /// Run a color index through a DMG palette register and the color table.
    #[inline]
    fn palette_color(&self, palette: u8, index: u8) -> Color {
        let shade = (palette >> (index * 2)) & 0x03;
        self.config.color_table[shade as usize]
    }
}
