use super::memory::{Sprite, OAM_ENTRIES};
use super::Ppu;

pub(super) const MAX_SPRITES_PER_LINE: usize = 10;

/// Up to ten sprites for one scanline, kept in priority order: ascending X,
/// ties broken by OAM index.
#[derive(Copy, Clone, Debug, Default)]
pub(super) struct ScanlineSprites {
    entries: [Sprite; MAX_SPRITES_PER_LINE],
    len: usize,
}

impl ScanlineSprites {
    pub(super) fn clear(&mut self) {
        self.entries = [Sprite::default(); MAX_SPRITES_PER_LINE];
        self.len = 0;
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len == MAX_SPRITES_PER_LINE
    }

    fn push(&mut self, sprite: Sprite) {
        self.entries[self.len] = sprite;
        self.len += 1;
    }

    /// Highest priority first.
    #[inline]
    pub(super) fn as_slice(&self) -> &[Sprite] {
        &self.entries[..self.len]
    }

    /// Lowest priority first, so that painting in this order leaves the
    /// highest priority sprite on top.
    pub(super) fn in_paint_order(&self) -> impl Iterator<Item = &Sprite> {
        self.as_slice().iter().rev()
    }
}

impl Ppu {
    /// Mode 2: pick the first ten OAM entries overlapping LY.
    pub(super) fn scan_oam(&mut self) {
        let height = self.sprite_height() as i16;
        let ly = self.regs.ly as i16;

        self.scanline.clear();
        for entry in self.oam.chunks_exact(4).take(OAM_ENTRIES) {
            if self.scanline.is_full() {
                break;
            }
            let sprite = Sprite::from_oam_entry(entry);
            let top = sprite.y as i16 - 16;
            if top <= ly && ly < top + height {
                self.scanline.push(sprite);
            }
        }

        // sort_by_key is stable, so equal X keeps OAM order.
        let len = self.scanline.len;
        self.scanline.entries[..len].sort_by_key(|sprite| sprite.x);
    }
}
