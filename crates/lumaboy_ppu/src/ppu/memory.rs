use bitflags::bitflags;

use super::Ppu;
use crate::PpuBus;

/// VRAM window: 0x8000..=0x9FFF.
pub const VRAM_SIZE: usize = 0x2000;
/// OAM: 40 entries of 4 bytes at 0xFE00..=0xFE9F.
pub const OAM_SIZE: usize = 0xA0;
pub(super) const OAM_ENTRIES: usize = 40;

bitflags! {
    /// Attribute byte of an OAM entry.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct SpriteAttributes: u8 {
        /// BG/window colors 1-3 are drawn over the sprite.
        const BEHIND_BG = 0b1000_0000;
        const FLIP_Y    = 0b0100_0000;
        const FLIP_X    = 0b0010_0000;
        /// Use OBP1 instead of OBP0.
        const PALETTE   = 0b0001_0000;
    }
}

/// One decoded OAM entry. Coordinates are raw, i.e. offset by (8, 16).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Sprite {
    pub y: u8,
    pub x: u8,
    pub tile: u8,
    pub attributes: SpriteAttributes,
}

impl Sprite {
    #[inline]
    pub(super) fn from_oam_entry(entry: &[u8]) -> Self {
        Self {
            y: entry[0],
            x: entry[1],
            tile: entry[2],
            attributes: SpriteAttributes::from_bits_retain(entry[3]),
        }
    }
}

impl Ppu {
    /// Read VRAM. Only the low 13 bits of `addr` are used, so both
    /// 0x8000-based and zero-based addresses work.
    #[inline]
    pub fn read_vram(&self, addr: u16) -> u8 {
        self.vram[addr as usize & (VRAM_SIZE - 1)]
    }

    #[inline]
    pub fn write_vram(&mut self, addr: u16, value: u8) {
        self.vram[addr as usize & (VRAM_SIZE - 1)] = value;
    }

    /// Read OAM. Only the low 8 bits of `addr` are used; offsets past the
    /// last entry (0xA0..=0xFF) read as 0xFF.
    #[inline]
    pub fn read_oam(&self, addr: u16) -> u8 {
        self.oam.get((addr & 0xFF) as usize).copied().unwrap_or(0xFF)
    }

    #[inline]
    pub fn write_oam(&mut self, addr: u16, value: u8) {
        if let Some(byte) = self.oam.get_mut((addr & 0xFF) as usize) {
            *byte = value;
        }
    }

    /// Decode OAM entry `index` (0..40).
    pub fn sprite(&self, index: usize) -> Option<Sprite> {
        (index < OAM_ENTRIES).then(|| Sprite::from_oam_entry(&self.oam[index * 4..index * 4 + 4]))
    }

    /// OAM DMA: copy 160 bytes from `page << 8` into OAM at once.
    ///
    /// The 160 M-cycle transfer time and the CPU bus conflicts during it are
    /// not modelled.
    pub fn instant_dma(&mut self, bus: &mut impl PpuBus, page: u8) {
        let base = (page as u16) << 8;
        for (i, byte) in self.oam.iter_mut().enumerate() {
            *byte = bus.read8(base.wrapping_add(i as u16));
        }
        log::trace!("GB PPU: OAM DMA from 0x{:04X}", base);
    }
}
