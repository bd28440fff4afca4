//! DMG pixel processing unit.
//!
//! The PPU is driven by the CPU side in batches of T-cycles via
//! [`Ppu::step`]. Each scanline walks through OAM search (mode 2), pixel
//! transfer (mode 3) and HBlank (mode 0); lines 144..=153 are VBlank
//! (mode 1). A scanline is rasterized in one go when pixel transfer ends,
//! and the finished frame is published when VBlank wraps back to line 0.
use crate::{Color, PpuConfig, RenderFlags};

mod frame;
mod memory;
mod oam_scan;
mod registers;
mod render;
mod timing;

use frame::FrameBuffers;
use oam_scan::ScanlineSprites;
use registers::Registers;

pub use memory::{Sprite, SpriteAttributes, OAM_SIZE, VRAM_SIZE};
pub use registers::{LcdControl, Mode, StatInterrupts};

/// DMG PPU state: registers, VRAM/OAM, line timing and frame buffers.
pub struct Ppu {
    regs: Registers,
    mode: Mode,
    vram: Box<[u8; VRAM_SIZE]>,
    oam: [u8; OAM_SIZE],
    frame: FrameBuffers,
    /// Sprites selected for the current line by the last OAM search.
    scanline: ScanlineSprites,
    /// T-cycles accumulated in the current mode.
    cycles: u32,
    /// Window source row; only advances on lines where the window drew.
    window_line: u8,
    /// Latched once WY == LY has been seen during this frame.
    window_draw_flag: bool,
    /// Set while LCDC.7 is clear; the first enabled step restarts timing.
    previously_disabled: bool,
    frame_count: u64,
    config: PpuConfig,
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new(PpuConfig::default())
    }
}

impl Ppu {
    pub fn new(config: PpuConfig) -> Self {
        Self {
            regs: Registers::default(),
            mode: Mode::HBlank,
            vram: Box::new([0; VRAM_SIZE]),
            oam: [0; OAM_SIZE],
            frame: FrameBuffers::new(),
            scanline: ScanlineSprites::default(),
            cycles: 0,
            window_line: 0,
            window_draw_flag: false,
            previously_disabled: false,
            frame_count: 0,
            config,
        }
    }

    /// Reset the PPU.
    ///
    /// A hard reset clears registers, VRAM, OAM and both frame buffers and
    /// parks the PPU in HBlank. A soft reset only restarts the line, window
    /// and cycle counters; everything else is left untouched.
    pub fn reset(&mut self, hard: bool) {
        if hard {
            self.regs = Registers::default();
            self.vram.fill(0);
            self.oam.fill(0);
            self.frame.clear();
            self.mode = Mode::HBlank;
            self.frame_count = 0;
        }
        self.scanline.clear();
        self.window_draw_flag = false;
        self.cycles = 0;
        self.regs.ly = 0;
        self.window_line = 0;
    }

    /// Put the PPU into the state the DMG boot ROM leaves behind at PC=0x0100.
    ///
    /// Used when boot ROM emulation is skipped. LCDC=0x91 (LCD, BG and
    /// unsigned tile data on), BGP=0xFC, all STAT sources disabled, and the
    /// line timer primed so the first line completes shortly after hand-off.
    ///
    /// LY and the mode are parked at line 0 HBlank as well, since clearing
    /// the LCD-off latch skips the restart a re-enable would otherwise do.
    pub fn set_post_boot_state(&mut self) {
        self.regs.ly = 0;
        self.mode = Mode::HBlank;
        self.window_draw_flag = true;
        self.previously_disabled = false;
        self.cycles = 420;
        self.regs.stat_enables = StatInterrupts::empty();
        self.regs.coincidence = false;
        self.regs.lcdc = LcdControl::from_bits_retain(0x91);
        self.regs.bgp = 0xFC;
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current scanline (LY).
    #[inline]
    pub fn line_y(&self) -> u8 {
        self.regs.ly
    }

    /// Window source row that the next window line will draw from.
    #[inline]
    pub fn window_line(&self) -> u8 {
        self.window_line
    }

    /// Number of frames published since the last hard reset.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The last completed frame, RGBA, row-major, 160x144.
    ///
    /// Never contains a partially drawn frame.
    pub fn frame(&self) -> &[u8] {
        self.frame.complete()
    }

    /// The frame currently being drawn.
    pub fn working_frame(&self) -> &[u8] {
        self.frame.working()
    }

    /// Sprites picked by the most recent OAM search, highest priority first.
    pub fn scanline_sprites(&self) -> &[Sprite] {
        self.scanline.as_slice()
    }

    pub fn config(&self) -> &PpuConfig {
        &self.config
    }

    pub fn set_color_table(&mut self, color_table: [Color; 4]) {
        self.config.color_table = color_table;
    }

    pub fn set_render_flags(&mut self, render_flags: RenderFlags) {
        self.config.render_flags = render_flags;
    }

    #[inline]
    fn sprite_height(&self) -> u8 {
        if self.regs.lcdc.contains(LcdControl::SPRITE_SIZE) {
            16
        } else {
            8
        }
    }
}
