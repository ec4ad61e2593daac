use std::path::PathBuf;

use log::{debug, info};

use crate::bitmode::BitMode;
use crate::error::PaletteError;
use crate::header::{Placement, render_header, write_header};
use crate::pack::pack;
use crate::palette::Palette;
use crate::quantize::quantize;

#[derive(Debug, Clone)]
pub struct Job {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub modes: Vec<BitMode>,
    pub placement: Placement,
    pub to_stdout: bool,
}

/// Runs one palette through quantize, pack and render for a single mode.
pub fn convert(palette: &Palette, mode: &BitMode, placement: &Placement) -> String {
    let quantized = quantize(palette, mode);
    let packed = pack(&quantized);
    debug!(
        "Mode {mode}: {} bits per entry, first entry {:?} -> {:#x}",
        mode.total_bits(),
        palette.get(0),
        packed[0]
    );

    render_header(mode, &packed, placement)
}

/// Loads the palette once and emits a header per mode. Returns the paths
/// written, which is empty when printing to stdout.
pub fn run(job: &Job) -> Result<Vec<PathBuf>, PaletteError> {
    let palette = Palette::load(&job.input)?;
    info!("Loaded palette from {}", job.input.display());

    let mut written = Vec::with_capacity(job.modes.len());
    for mode in &job.modes {
        let text = convert(&palette, mode, &job.placement);
        if job.to_stdout {
            println!("{text}");
        } else {
            written.push(write_header(&job.output_dir, mode, &text)?);
        }
    }

    Ok(written)
}
