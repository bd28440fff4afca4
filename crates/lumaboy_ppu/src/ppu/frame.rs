use crate::{Color, BYTES_PER_PIXEL, FRAME_BYTES, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Working and published RGBA frames plus the per-pixel BG color index
/// shadow used for sprite priority.
pub(super) struct FrameBuffers {
    working: Vec<u8>,
    complete: Vec<u8>,
    bg_index: Vec<u8>,
}

impl FrameBuffers {
    pub(super) fn new() -> Self {
        Self {
            working: vec![0; FRAME_BYTES],
            complete: vec![0; FRAME_BYTES],
            bg_index: vec![0; SCREEN_WIDTH * SCREEN_HEIGHT],
        }
    }

    pub(super) fn clear(&mut self) {
        self.working.fill(0);
        self.complete.fill(0);
        self.bg_index.fill(0);
    }

    #[inline]
    pub(super) fn working(&self) -> &[u8] {
        &self.working
    }

    #[inline]
    pub(super) fn complete(&self) -> &[u8] {
        &self.complete
    }

    #[inline]
    pub(super) fn put_pixel(&mut self, x: usize, y: usize, color: Color) {
        let idx = (y * SCREEN_WIDTH + x) * BYTES_PER_PIXEL;
        self.working[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&color.rgba());
    }

    #[inline]
    pub(super) fn bg_index(&self, x: usize, y: usize) -> u8 {
        self.bg_index[y * SCREEN_WIDTH + x]
    }

    #[inline]
    pub(super) fn set_bg_index(&mut self, x: usize, y: usize, index: u8) {
        self.bg_index[y * SCREEN_WIDTH + x] = index;
    }

    /// Copy the working frame over the published one in a single pass.
    pub(super) fn publish(&mut self) {
        self.complete.copy_from_slice(&self.working);
    }
}
