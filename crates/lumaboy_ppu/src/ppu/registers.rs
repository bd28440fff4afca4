use bitflags::bitflags;

use super::Ppu;

bitflags! {
    /// LCDC (0xFF40).
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct LcdControl: u8 {
        const DISPLAY_ENABLE     = 0b1000_0000;
        /// Window tile map at 0x9C00 instead of 0x9800.
        const WINDOW_TILE_MAP    = 0b0100_0000;
        const WINDOW_ENABLE      = 0b0010_0000;
        /// BG/window tiles addressed unsigned from 0x8000 instead of
        /// signed around 0x9000.
        const TILE_DATA_UNSIGNED = 0b0001_0000;
        /// Background tile map at 0x9C00 instead of 0x9800.
        const BG_TILE_MAP        = 0b0000_1000;
        /// 8x16 sprites.
        const SPRITE_SIZE        = 0b0000_0100;
        const SPRITE_ENABLE      = 0b0000_0010;
        const BG_ENABLE          = 0b0000_0001;
    }
}

bitflags! {
    /// The writable interrupt-select half of STAT (0xFF41, bits 3-6).
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct StatInterrupts: u8 {
        const LYC    = 0b0100_0000;
        const OAM    = 0b0010_0000;
        const VBLANK = 0b0001_0000;
        const HBLANK = 0b0000_1000;
    }
}

const STAT_COINCIDENCE: u8 = 0b0000_0100;
const STAT_MODE_MASK: u8 = 0b0000_0011;
const STAT_UNUSED: u8 = 0b1000_0000;

/// PPU mode as reported in STAT bits 0-1.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    #[default]
    HBlank = 0,
    VBlank = 1,
    OamSearch = 2,
    DrawScanline = 3,
}

impl Mode {
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Debug, Default)]
pub(super) struct Registers {
    pub(super) lcdc: LcdControl,
    pub(super) stat_enables: StatInterrupts,
    /// STAT bit 2, LYC == LY as of the last comparison.
    pub(super) coincidence: bool,
    pub(super) scy: u8,
    pub(super) scx: u8,
    pub(super) ly: u8,
    pub(super) lyc: u8,
    pub(super) bgp: u8,
    pub(super) obp0: u8,
    pub(super) obp1: u8,
    pub(super) wy: u8,
    pub(super) wx: u8,
}

impl Registers {
    pub(super) fn stat_byte(&self, mode: Mode) -> u8 {
        let mut stat = STAT_UNUSED | self.stat_enables.bits() | (mode.bits() & STAT_MODE_MASK);
        if self.coincidence {
            stat |= STAT_COINCIDENCE;
        }
        stat
    }
}

impl Ppu {
    /// Read one of the LCD I/O registers (0xFF40..=0xFF4B).
    ///
    /// 0xFF46 (DMA) belongs to the bus; it and anything outside the range
    /// read back as 0xFF.
    pub fn read_register(&self, addr: u16) -> u8 {
        let regs = &self.regs;
        match addr {
            0xFF40 => regs.lcdc.bits(),
            0xFF41 => regs.stat_byte(self.mode),
            0xFF42 => regs.scy,
            0xFF43 => regs.scx,
            0xFF44 => regs.ly,
            0xFF45 => regs.lyc,
            0xFF47 => regs.bgp,
            0xFF48 => regs.obp0,
            0xFF49 => regs.obp1,
            0xFF4A => regs.wy,
            0xFF4B => regs.wx,
            _ => 0xFF,
        }
    }

    /// Write one of the LCD I/O registers (0xFF40..=0xFF4B).
    ///
    /// STAT only takes bits 3-6; mode and LYC==LY stay under PPU control.
    /// LY is read-only.
    pub fn write_register(&mut self, addr: u16, value: u8) {
        let regs = &mut self.regs;
        match addr {
            0xFF40 => regs.lcdc = LcdControl::from_bits_retain(value),
            0xFF41 => regs.stat_enables = StatInterrupts::from_bits_truncate(value),
            0xFF42 => regs.scy = value,
            0xFF43 => regs.scx = value,
            0xFF45 => regs.lyc = value,
            0xFF47 => regs.bgp = value,
            0xFF48 => regs.obp0 = value,
            0xFF49 => regs.obp1 = value,
            0xFF4A => regs.wy = value,
            0xFF4B => regs.wx = value,
            _ => {}
        }
    }

    #[inline]
    pub fn lcd_control(&self) -> LcdControl {
        self.regs.lcdc
    }

    #[inline]
    pub fn set_lcd_control(&mut self, lcdc: LcdControl) {
        self.regs.lcdc = lcdc;
    }

    #[inline]
    pub fn stat_interrupts(&self) -> StatInterrupts {
        self.regs.stat_enables
    }

    #[inline]
    pub fn set_stat_interrupts(&mut self, enables: StatInterrupts) {
        self.regs.stat_enables = enables;
    }

    /// STAT bit 2 as of the last step.
    #[inline]
    pub fn lyc_equals_ly(&self) -> bool {
        self.regs.coincidence
    }
}
