use super::super::registers::LcdControl;
use super::super::Ppu;
use crate::{RenderFlags, SCREEN_WIDTH};

impl Ppu {
    /// Draw the window over the background for line LY.
    ///
    /// The window row comes from `window_line`, not LY, and only advances on
    /// lines where at least one window pixel was drawn.
    pub(in crate::ppu) fn render_window(&mut self) {
        if !self.regs.lcdc.contains(LcdControl::WINDOW_ENABLE)
            || !self.window_draw_flag
            || !self.config.render_flags.contains(RenderFlags::WINDOW)
        {
            return;
        }

        let ly = self.regs.ly;
        if ly < self.regs.wy {
            return;
        }

        let high_map = self.regs.lcdc.contains(LcdControl::WINDOW_TILE_MAP);
        let left = self.regs.wx as i16 - 7;
        let y = self.window_line;
        let mut drawn = false;

        for screen_x in 0..SCREEN_WIDTH {
            if (screen_x as i16) < left {
                continue;
            }
            let x = (screen_x as i16 - left) as u8;
            let index = self.tile_map_pixel(high_map, x, y);
            let color = self.palette_color(self.regs.bgp, index);
            self.frame.set_bg_index(screen_x, ly as usize, index);
            self.frame.put_pixel(screen_x, ly as usize, color);
            drawn = true;
        }

        if drawn {
            self.window_line = self.window_line.wrapping_add(1);
        }
    }
}
