use super::registers::{LcdControl, Mode, StatInterrupts};
use super::Ppu;
use crate::{Interrupt, PpuBus, SCREEN_HEIGHT};

const OAM_SEARCH_CYCLES: u32 = 80;
const DRAW_SCANLINE_CYCLES: u32 = 172;
const HBLANK_CYCLES: u32 = 204;
/// One full line; every VBlank line lasts this long.
const LINE_CYCLES: u32 = 456;
const VBLANK_START_LINE: u8 = SCREEN_HEIGHT as u8;
const LAST_LINE: u8 = 153;

impl Ppu {
    /// Advance the PPU by `cycles` T-cycles.
    ///
    /// At most one mode transition is taken per call; leftover cycles carry
    /// into the next call. Drivers must therefore step in small batches
    /// (one instruction's worth is fine). A batch large enough to cross
    /// several thresholds is not caught up and will stretch the frame.
    pub fn step(&mut self, bus: &mut impl PpuBus, cycles: u32) {
        if !self.regs.lcdc.contains(LcdControl::DISPLAY_ENABLE) {
            if !self.previously_disabled {
                log::debug!("GB PPU: LCD disabled at LY={} mode={:?}", self.regs.ly, self.mode);
            }
            self.mode = Mode::HBlank;
            self.previously_disabled = true;
            return;
        }

        if self.previously_disabled {
            log::debug!("GB PPU: LCD enabled, restarting line timing");
            self.reset(false);
            self.previously_disabled = false;
        }

        self.cycles = self.cycles.saturating_add(cycles);

        // STAT is one ORed interrupt line and only fires on a rising edge.
        // If any source already holds it high, nothing this step can fire.
        let allow_interrupt = !self.stat_line_high();

        match self.mode {
            Mode::OamSearch => {
                if self.cycles >= OAM_SEARCH_CYCLES {
                    self.cycles -= OAM_SEARCH_CYCLES;
                    self.scan_oam();
                    self.set_mode(Mode::DrawScanline);
                }
            }
            Mode::DrawScanline => {
                if self.cycles >= DRAW_SCANLINE_CYCLES {
                    self.cycles -= DRAW_SCANLINE_CYCLES;
                    self.set_mode(Mode::HBlank);
                    self.request_stat(bus, StatInterrupts::HBLANK, allow_interrupt);
                    self.render_scanline();
                }
            }
            Mode::HBlank => {
                if self.cycles >= HBLANK_CYCLES {
                    self.cycles -= HBLANK_CYCLES;
                    self.regs.ly += 1;

                    if self.regs.ly == VBLANK_START_LINE {
                        self.set_mode(Mode::VBlank);
                        bus.request_interrupt(Interrupt::VBlank);
                        log::debug!("GB PPU: VBlank start (frame {})", self.frame_count);
                        self.request_stat(bus, StatInterrupts::VBLANK, allow_interrupt);
                    } else {
                        self.set_mode(Mode::OamSearch);
                        self.request_stat(bus, StatInterrupts::OAM, allow_interrupt);
                    }
                }
            }
            Mode::VBlank => {
                if self.cycles >= LINE_CYCLES {
                    self.cycles -= LINE_CYCLES;
                    self.regs.ly += 1;

                    if self.regs.ly > LAST_LINE {
                        self.frame.publish();
                        self.frame_count += 1;
                        log::debug!("GB PPU: frame {} published", self.frame_count);

                        self.set_mode(Mode::OamSearch);
                        self.request_stat(bus, StatInterrupts::OAM, allow_interrupt);

                        self.regs.ly = 0;
                        self.window_line = 0;
                        self.window_draw_flag = false;
                    }
                }
            }
        }

        self.compare_ly_lyc(bus, allow_interrupt);

        if self.regs.wy == self.regs.ly {
            self.window_draw_flag = true;
        }
    }

    /// Whether any enabled STAT source currently holds the line high.
    pub(super) fn stat_line_high(&self) -> bool {
        let enables = self.regs.stat_enables;
        (enables.contains(StatInterrupts::LYC) && self.regs.coincidence)
            || (enables.contains(StatInterrupts::OAM) && self.mode == Mode::OamSearch)
            || (enables.contains(StatInterrupts::VBLANK) && self.mode == Mode::VBlank)
            || (enables.contains(StatInterrupts::HBLANK) && self.mode == Mode::HBlank)
    }

    fn compare_ly_lyc(&mut self, bus: &mut impl PpuBus, allow_interrupt: bool) {
        self.regs.coincidence = self.regs.ly == self.regs.lyc;
        if self.regs.coincidence {
            self.request_stat(bus, StatInterrupts::LYC, allow_interrupt);
        }
    }

    fn request_stat(&self, bus: &mut impl PpuBus, source: StatInterrupts, allow_interrupt: bool) {
        if allow_interrupt && self.regs.stat_enables.contains(source) {
            log::trace!(
                "GB PPU: STAT IRQ ({:?}) LY={} mode={:?}",
                source,
                self.regs.ly,
                self.mode
            );
            bus.request_interrupt(Interrupt::LcdStat);
        }
    }

    #[inline]
    fn set_mode(&mut self, mode: Mode) {
        log::trace!("GB PPU: LY={} {:?} -> {:?}", self.regs.ly, self.mode, mode);
        self.mode = mode;
    }
}
