use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::bitmode::BitMode;
use crate::error::PaletteError;
use crate::pack::hex_literal;

pub const DEFAULT_ADDRESS: u32 = 0x2004_1000;
pub const DEFAULT_ADDRESS_COMMENT: &str = "Start of SRAM 5";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    U8,
    U16,
    /// Catch-all for anything wider than 16 bits.
    Bytes3,
}

impl StorageType {
    pub fn for_total_bits(total: u32) -> StorageType {
        match total {
            0..=8 => StorageType::U8,
            9..=16 => StorageType::U16,
            _ => StorageType::Bytes3,
        }
    }

    pub fn c_type(&self) -> &'static str {
        match self {
            StorageType::U8 => "uint8_t",
            StorageType::U16 => "uint16_t",
            StorageType::Bytes3 => "uint8_t[3]",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_type())
    }
}

/// Where the table lives on the target, written next to the declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub address: u32,
    pub comment: String,
}

impl Default for Placement {
    fn default() -> Self {
        Placement {
            address: DEFAULT_ADDRESS,
            comment: DEFAULT_ADDRESS_COMMENT.to_string(),
        }
    }
}

pub fn header_file_name(mode: &BitMode) -> String {
    format!("{}_palette.h", mode.label())
}

pub fn render_header(mode: &BitMode, packed: &[u32], placement: &Placement) -> String {
    let storage = StorageType::for_total_bits(mode.total_bits());
    let guard = format!("{}_PALETTE_H", mode.label());
    let literals = packed
        .iter()
        .map(|&p| hex_literal(p))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "//Generated with {tool}\n\
         #ifndef {guard}\n\
         #define {guard}\n\
         \n\
         #include <stdint.h>\n\
         \n\
         {storage}[{len}] *palette = {address:#010x}; // {comment}\n\
         //Conversion (or not) of the original Quake palette to the {mode} color bit mode\n\
         palette* = [{literals}];\n\
         \n\
         #endif",
        tool = env!("CARGO_PKG_NAME"),
        len = packed.len(),
        address = placement.address,
        comment = placement.comment,
    )
}

pub fn write_header<P: AsRef<Path>>(
    dir: P,
    mode: &BitMode,
    text: &str,
) -> Result<PathBuf, PaletteError> {
    let path = dir.as_ref().join(header_file_name(mode));
    fs::write(&path, text).map_err(|source| PaletteError::Write {
        path: path.clone(),
        source,
    })?;
    info!("Wrote {} ({} bytes)", path.display(), text.len());

    Ok(path)
}
