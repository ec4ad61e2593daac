use std::fs;
use std::path::Path;

use log::debug;

use crate::error::PaletteError;

pub const PALETTE_SIZE: usize = 256;
pub const PALETTE_BYTES: usize = PALETTE_SIZE * 3;

/// One palette entry, channels in R, G, B order.
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_SIZE],
}

impl Palette {
    pub fn from_bytes(bytes: &[u8]) -> Result<Palette, PaletteError> {
        if bytes.len() != PALETTE_BYTES {
            return Err(PaletteError::InvalidLength {
                expected: PALETTE_BYTES,
                actual: bytes.len(),
            });
        }

        let mut colors = [[0; 3]; PALETTE_SIZE];
        for (color, rgb) in colors.iter_mut().zip(bytes.chunks_exact(3)) {
            *color = [rgb[0], rgb[1], rgb[2]];
        }

        Ok(Palette { colors })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| PaletteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        Palette::from_bytes(&bytes)
    }

    pub fn get(&self, index: u8) -> Rgb {
        self.colors[index as usize]
    }

    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rgb> {
        self.colors.iter()
    }
}
