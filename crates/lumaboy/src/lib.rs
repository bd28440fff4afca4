use std::path::PathBuf;

use anyhow::{bail, ensure, Context, Result};
use lumaboy_ppu::{Interrupt, Ppu, PpuBus, OAM_SIZE, VRAM_SIZE};

pub const USAGE: &str = "Usage: lumaboy <vram_dump> <out_rgba_path> [--frames N] [--oam <oam_dump>] [--reg FFxx=VV]...";

/// T-cycles fed to the PPU per step; one M-cycle, like a CPU would.
const STEP_CYCLES: u32 = 4;
/// One DMG frame in T-cycles.
const FRAME_CYCLES: u64 = 70_224;
/// Page the OAM dump is staged at before the DMA transfer.
const DMA_SOURCE_PAGE: u8 = 0xC0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub vram_path: PathBuf,
    pub out_path: PathBuf,
    pub oam_path: Option<PathBuf>,
    pub frames: u64,
    /// LCD register writes applied after the post-boot state.
    pub registers: Vec<(u16, u8)>,
}

impl Options {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut positional = Vec::new();
        let mut oam_path = None;
        let mut frames = 1;
        let mut registers = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--frames" => {
                    let value = args.next().context("--frames needs a value")?;
                    frames = value
                        .parse()
                        .with_context(|| format!("invalid frame count '{}'", value))?;
                    ensure!(frames > 0, "frame count must be at least 1");
                }
                "--oam" => {
                    oam_path = Some(PathBuf::from(args.next().context("--oam needs a path")?));
                }
                "--reg" => {
                    let value = args.next().context("--reg needs ADDR=VALUE")?;
                    registers.push(parse_register(&value)?);
                }
                other if other.starts_with("--") => bail!("unknown option '{}'", other),
                _ => positional.push(PathBuf::from(arg)),
            }
        }

        let mut positional = positional.into_iter();
        let (Some(vram_path), Some(out_path), None) =
            (positional.next(), positional.next(), positional.next())
        else {
            bail!("expected exactly two paths\n{}", USAGE);
        };

        Ok(Self {
            vram_path,
            out_path,
            oam_path,
            frames,
            registers,
        })
    }
}

fn parse_register(spec: &str) -> Result<(u16, u8)> {
    let (addr, value) = spec
        .split_once('=')
        .with_context(|| format!("register write '{}' is not ADDR=VALUE", spec))?;
    let addr = u16::from_str_radix(addr.trim_start_matches("0x"), 16)
        .with_context(|| format!("invalid register address '{}'", addr))?;
    let value = u8::from_str_radix(value.trim_start_matches("0x"), 16)
        .with_context(|| format!("invalid register value '{}'", value))?;
    // 0xFF46 starts OAM DMA on the bus and is not a PPU register.
    ensure!(
        (0xFF40..=0xFF4B).contains(&addr) && addr != 0xFF46,
        "register 0x{:04X} is not an LCD register",
        addr
    );
    Ok((addr, value))
}

/// Flat 64 KiB bus with an IF register, enough to host the PPU on its own.
struct FlatBus {
    memory: Vec<u8>,
    if_reg: u8,
}

impl FlatBus {
    fn new() -> Self {
        Self {
            memory: vec![0; 0x10000],
            if_reg: 0,
        }
    }
}

impl PpuBus for FlatBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.if_reg |= interrupt.bit();
    }
}

/// Load the dumps, run the requested number of frames and write the last
/// published frame as raw RGBA.
pub fn run(options: &Options) -> Result<()> {
    let vram = std::fs::read(&options.vram_path)
        .with_context(|| format!("failed to read VRAM dump '{}'", options.vram_path.display()))?;
    ensure!(
        vram.len() <= VRAM_SIZE,
        "VRAM dump is {} bytes, expected at most {}",
        vram.len(),
        VRAM_SIZE
    );

    let mut ppu = Ppu::default();
    let mut bus = FlatBus::new();
    ppu.set_post_boot_state();

    for (addr, &byte) in vram.iter().enumerate() {
        ppu.write_vram(addr as u16, byte);
    }

    if let Some(oam_path) = &options.oam_path {
        let oam = std::fs::read(oam_path)
            .with_context(|| format!("failed to read OAM dump '{}'", oam_path.display()))?;
        ensure!(
            oam.len() <= OAM_SIZE,
            "OAM dump is {} bytes, expected at most {}",
            oam.len(),
            OAM_SIZE
        );
        let base = (DMA_SOURCE_PAGE as usize) << 8;
        bus.memory[base..base + oam.len()].copy_from_slice(&oam);
        ppu.instant_dma(&mut bus, DMA_SOURCE_PAGE);
    }

    for &(addr, value) in &options.registers {
        log::debug!("LCD register 0x{:04X} <- 0x{:02X}", addr, value);
        ppu.write_register(addr, value);
    }

    // Allow one extra frame for the post-boot partial frame.
    let budget = (options.frames + 1) * FRAME_CYCLES;
    let mut elapsed = 0u64;
    while ppu.frame_count() < options.frames {
        if elapsed > budget {
            bail!(
                "no frame published after {} cycles (LCDC=0x{:02X})",
                elapsed,
                ppu.read_register(0xFF40)
            );
        }
        ppu.step(&mut bus, STEP_CYCLES);
        elapsed += STEP_CYCLES as u64;
    }
    log::info!(
        "ran {} frame(s) in {} cycles, IF=0x{:02X}",
        ppu.frame_count(),
        elapsed,
        bus.if_reg
    );

    std::fs::write(&options.out_path, ppu.frame())
        .with_context(|| format!("failed to write '{}'", options.out_path.display()))?;
    log::info!("wrote frame to '{}'", options.out_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_paths_and_options() {
        let options = Options::parse(args(&[
            "vram.bin",
            "out.rgba",
            "--frames",
            "3",
            "--oam",
            "oam.bin",
            "--reg",
            "FF47=E4",
            "--reg",
            "0xFF40=0x93",
        ]))
        .unwrap();

        assert_eq!(options.vram_path, PathBuf::from("vram.bin"));
        assert_eq!(options.out_path, PathBuf::from("out.rgba"));
        assert_eq!(options.oam_path, Some(PathBuf::from("oam.bin")));
        assert_eq!(options.frames, 3);
        assert_eq!(options.registers, vec![(0xFF47, 0xE4), (0xFF40, 0x93)]);
    }

    #[test]
    fn defaults_to_one_frame() {
        let options = Options::parse(args(&["vram.bin", "out.rgba"])).unwrap();
        assert_eq!(options.frames, 1);
        assert!(options.oam_path.is_none());
        assert!(options.registers.is_empty());
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Options::parse(args(&["vram.bin"])).is_err());
        assert!(Options::parse(args(&["a", "b", "c"])).is_err());
        assert!(Options::parse(args(&["a", "b", "--frames", "0"])).is_err());
        assert!(Options::parse(args(&["a", "b", "--reg", "FF46=01"])).is_err());
        assert!(Options::parse(args(&["a", "b", "--reg", "FF47"])).is_err());
        assert!(Options::parse(args(&["a", "b", "--verbose"])).is_err());
    }

    #[test]
    fn run_writes_a_full_frame() {
        let dir = std::env::temp_dir().join(format!("lumaboy-run-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let vram_path = dir.join("vram.bin");
        let out_path = dir.join("out.rgba");

        // Tile 0 solid color 3; the whole background map points at it.
        let mut vram = vec![0u8; VRAM_SIZE];
        vram[..16].fill(0xFF);
        std::fs::write(&vram_path, &vram).unwrap();

        let options = Options {
            vram_path,
            out_path: out_path.clone(),
            oam_path: None,
            frames: 1,
            registers: vec![(0xFF47, 0xE4)],
        };
        run(&options).unwrap();

        let frame = std::fs::read(&out_path).unwrap();
        assert_eq!(frame.len(), lumaboy_ppu::FRAME_BYTES);
        // Line 0 is skipped by the post-boot hand-off; line 1 onwards is drawn.
        let line1 = &frame[160 * 4..160 * 4 + 4];
        assert_eq!(line1, &[0x00, 0x00, 0x00, 0xFF]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
