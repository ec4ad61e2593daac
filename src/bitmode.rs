use std::fmt;
use std::str::FromStr;

use crate::error::PaletteError;

pub const CHANNELS: usize = 3;
pub const MAX_CHANNEL_BITS: u8 = 8;

/// Bits per channel for the R, G and B components, e.g. `332` or `565`.
///
/// The label is the mode exactly as it was written and ends up in the
/// include guard and the output file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMode {
    widths: [u8; CHANNELS],
    label: String,
}

impl BitMode {
    pub fn widths(&self) -> [u8; CHANNELS] {
        self.widths
    }

    pub fn width(&self, channel: usize) -> u8 {
        self.widths[channel]
    }

    pub fn total_bits(&self) -> u32 {
        self.widths.iter().map(|&w| w as u32).sum()
    }

    /// Largest value that fits in the given channel.
    pub fn max_value(&self, channel: usize) -> u32 {
        (1u32 << self.widths[channel]) - 1
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl FromStr for BitMode {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != CHANNELS {
            return Err(PaletteError::BitModeLength(s.to_string()));
        }

        let mut widths = [0u8; CHANNELS];
        for (width, c) in widths.iter_mut().zip(s.chars()) {
            let digit = c.to_digit(10).ok_or_else(|| PaletteError::BitModeDigit {
                mode: s.to_string(),
                found: c,
            })? as u8;

            if digit > MAX_CHANNEL_BITS {
                return Err(PaletteError::ChannelTooWide {
                    mode: s.to_string(),
                    width: digit,
                });
            }
            *width = digit;
        }

        if widths.iter().all(|&w| w == 0) {
            return Err(PaletteError::EmptyBitMode(s.to_string()));
        }

        Ok(BitMode {
            widths,
            label: s.to_string(),
        })
    }
}

impl fmt::Display for BitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
