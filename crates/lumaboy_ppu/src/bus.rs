/// Interrupt sources understood by the DMG interrupt controller.
///
/// The PPU only ever raises [`Interrupt::VBlank`] and [`Interrupt::LcdStat`];
/// the remaining variants exist so a bus can route every request through a
/// single type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Interrupt {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl Interrupt {
    /// Bit of this source in the IF/IE registers (INT $40 is bit 0).
    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            Interrupt::VBlank => 0x01,
            Interrupt::LcdStat => 0x02,
            Interrupt::Timer => 0x04,
            Interrupt::Serial => 0x08,
            Interrupt::Joypad => 0x10,
        }
    }
}

/// The slice of the system bus the PPU talks to.
///
/// The PPU never holds on to the bus; the driver hands it in for the
/// duration of [`crate::Ppu::step`] and [`crate::Ppu::instant_dma`].
pub trait PpuBus {
    /// Read a byte from the general address space. Only used by OAM DMA.
    fn read8(&mut self, addr: u16) -> u8;

    /// Raise an interrupt request. Requests are fire-and-forget; raising the
    /// same source twice before it is serviced must be harmless.
    fn request_interrupt(&mut self, interrupt: Interrupt);
}
