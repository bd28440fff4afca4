/// A single RGBA output color.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// DMG shade 0 (lightest).
    pub const WHITE: Color = Color::new_rgb(0xFF, 0xFF, 0xFF);
    pub const LIGHT_GRAY: Color = Color::new_rgb(0xAA, 0xAA, 0xAA);
    pub const DARK_GRAY: Color = Color::new_rgb(0x55, 0x55, 0x55);
    /// DMG shade 3 (darkest).
    pub const BLACK: Color = Color::new_rgb(0x00, 0x00, 0x00);

    /// Plain grayscale ramp indexed by the palette-resolved shade (0..=3).
    pub const DMG_GRAYSCALE: [Color; 4] = [
        Color::WHITE,
        Color::LIGHT_GRAY,
        Color::DARK_GRAY,
        Color::BLACK,
    ];

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// The color as the 4 bytes stored per frame-buffer pixel.
    #[inline]
    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
