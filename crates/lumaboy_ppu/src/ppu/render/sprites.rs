use super::super::memory::SpriteAttributes;
use super::super::registers::LcdControl;
use super::super::Ppu;
use super::TILE_BYTES;
use crate::{RenderFlags, SCREEN_WIDTH};

impl Ppu {
    pub(in crate::ppu) fn render_sprites(&mut self) {
        if !self.regs.lcdc.contains(LcdControl::SPRITE_ENABLE)
            || !self.config.render_flags.contains(RenderFlags::OBJECTS)
        {
            return;
        }

        let height = self.sprite_height();
        let ly = self.regs.ly;
        let sprites = self.scanline;

        for sprite in sprites.in_paint_order() {
            let attrs = sprite.attributes;
            let tile = if height == 16 { sprite.tile & !1 } else { sprite.tile };

            let top = sprite.y as i16 - 16;
            let mut row = ((ly as i16 - top) as u8) % height;
            if attrs.contains(SpriteAttributes::FLIP_Y) {
                row = height - 1 - row;
            }
            // Sprite tiles always use unsigned addressing from 0x8000.
            let row_addr = tile as usize * TILE_BYTES + row as usize * 2;

            let palette = if attrs.contains(SpriteAttributes::PALETTE) {
                self.regs.obp1
            } else {
                self.regs.obp0
            };
            let left = sprite.x as i16 - 8;

            for col in 0..8u8 {
                let screen_x = left + col as i16;
                if screen_x < 0 || screen_x >= SCREEN_WIDTH as i16 {
                    continue;
                }
                let screen_x = screen_x as usize;

                let bit = if attrs.contains(SpriteAttributes::FLIP_X) { col } else { 7 - col };
                let index = self.tile_row_pixel(row_addr, bit);
                // Color 0 is transparent for sprites.
                if index == 0 {
                    continue;
                }
                if attrs.contains(SpriteAttributes::BEHIND_BG)
                    && self.frame.bg_index(screen_x, ly as usize) != 0
                {
                    continue;
                }

                let color = self.palette_color(palette, index);
                self.frame.put_pixel(screen_x, ly as usize, color);
            }
        }
    }
}
