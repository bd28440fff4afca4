use bitflags::bitflags;
use typed_builder::TypedBuilder;

use crate::Color;

bitflags! {
    /// Layer switches supplied by the host. A cleared flag hides the layer
    /// regardless of what LCDC says.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct RenderFlags: u8 {
        const BACKGROUND = 0b0000_0001;
        const WINDOW     = 0b0000_0010;
        const OBJECTS    = 0b0000_0100;
    }
}

impl Default for RenderFlags {
    fn default() -> Self {
        RenderFlags::all()
    }
}

/// Host-side configuration for a [`crate::Ppu`].
#[derive(TypedBuilder, Clone, Debug, Eq, PartialEq)]
pub struct PpuConfig {
    /// Maps a palette-resolved shade (0..=3) to the color written out.
    #[builder(default = Color::DMG_GRAYSCALE)]
    pub color_table: [Color; 4],
    #[builder(default)]
    pub render_flags: RenderFlags,
}

impl Default for PpuConfig {
    fn default() -> Self {
        PpuConfig::builder().build()
    }
}
