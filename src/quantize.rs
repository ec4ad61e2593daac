use crate::bitmode::{BitMode, CHANNELS};
use crate::palette::{PALETTE_SIZE, Palette, Rgb};

/// Rescales an 8-bit channel to `bits` bits: `round(value * (2^bits - 1) / 255)`.
///
/// Integer form of the rounding. `2 * value * max` is even and 255 is odd,
/// so the exact quotient never lands on .5 and there is no tie to break.
pub fn quantize_channel(value: u8, bits: u8) -> u8 {
    let max = (1u32 << bits) - 1;
    ((value as u32 * max * 2 + 255) / 510) as u8
}

pub fn quantize_color(color: Rgb, mode: &BitMode) -> Rgb {
    let mut out = [0; CHANNELS];
    for (channel, value) in out.iter_mut().enumerate() {
        *value = quantize_channel(color[channel], mode.width(channel));
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedPalette {
    entries: [Rgb; PALETTE_SIZE],
    mode: BitMode,
}

impl QuantizedPalette {
    pub fn entries(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.entries
    }

    pub fn mode(&self) -> &BitMode {
        &self.mode
    }
}

pub fn quantize(palette: &Palette, mode: &BitMode) -> QuantizedPalette {
    let mut entries = [[0; CHANNELS]; PALETTE_SIZE];
    for (entry, color) in entries.iter_mut().zip(palette.iter()) {
        *entry = quantize_color(*color, mode);
    }

    QuantizedPalette {
        entries,
        mode: mode.clone(),
    }
}
