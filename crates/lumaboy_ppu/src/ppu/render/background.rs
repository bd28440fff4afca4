use super::super::registers::LcdControl;
use super::super::Ppu;
use crate::{RenderFlags, SCREEN_WIDTH};

impl Ppu {
    pub(in crate::ppu) fn render_background(&mut self) {
        let visible = self.regs.lcdc.contains(LcdControl::BG_ENABLE)
            && self.config.render_flags.contains(RenderFlags::BACKGROUND);
        let high_map = self.regs.lcdc.contains(LcdControl::BG_TILE_MAP);
        let ly = self.regs.ly;
        let y = self.regs.scy.wrapping_add(ly);

        for screen_x in 0..SCREEN_WIDTH {
            let x = self.regs.scx.wrapping_add(screen_x as u8);
            let mut index = self.tile_map_pixel(high_map, x, y);
            // A hidden background still paints BGP color 0 and reads as
            // transparent for sprite priority.
            if !visible {
                index = 0;
            }
            let color = self.palette_color(self.regs.bgp, index);
            self.frame.set_bg_index(screen_x, ly as usize, index);
            self.frame.put_pixel(screen_x, ly as usize, color);
        }
    }
}
