pub mod bus;
pub mod color;
pub mod config;
pub mod ppu;

pub use bus::{Interrupt, PpuBus};
pub use color::Color;
pub use config::{PpuConfig, RenderFlags};
pub use ppu::{
    LcdControl, Mode, Ppu, Sprite, SpriteAttributes, StatInterrupts, OAM_SIZE, VRAM_SIZE,
};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
/// Bytes per pixel in the RGBA frame buffers.
pub const BYTES_PER_PIXEL: usize = 4;
/// Size in bytes of one complete RGBA frame.
pub const FRAME_BYTES: usize = SCREEN_WIDTH * SCREEN_HEIGHT * BYTES_PER_PIXEL;
