use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("palette must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("bit mode must be exactly 3 digits, got {0:?}")]
    BitModeLength(String),
    #[error("bit mode {mode:?} contains non-digit {found:?}")]
    BitModeDigit { mode: String, found: char },
    #[error("channel width {width} in bit mode {mode:?} is wider than 8 bits")]
    ChannelTooWide { mode: String, width: u8 },
    #[error("bit mode {0:?} has no bits to pack")]
    EmptyBitMode(String),
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}
