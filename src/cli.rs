use std::path::PathBuf;

use clap::Parser;

use crate::bitmode::BitMode;
use crate::convert::Job;
use crate::header::Placement;

/// Converts a 256-color RGB palette into packed C lookup tables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Bits per channel (R, G, B) as three digits 0-8, e.g. 332 or 565.
    /// One header is written per mode.
    #[arg(required = true)]
    pub modes: Vec<BitMode>,

    /// Raw palette file, 256 RGB triples.
    #[arg(short, long, default_value = "palette.lmp")]
    pub input: PathBuf,

    /// Directory the headers are written to.
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Target address of the table, hex with a 0x prefix or decimal.
    #[arg(long, default_value = "0x20041000", value_parser = parse_address)]
    pub address: u32,

    /// Comment written next to the address.
    #[arg(long, default_value = crate::header::DEFAULT_ADDRESS_COMMENT)]
    pub address_comment: String,

    /// Print the headers instead of writing files.
    #[arg(long, default_value_t = false)]
    pub stdout: bool,
}

impl Args {
    pub fn into_job(self) -> Job {
        Job {
            input: self.input,
            output_dir: self.output_dir,
            modes: self.modes,
            placement: Placement {
                address: self.address,
                comment: self.address_comment,
            },
            to_stdout: self.stdout,
        }
    }
}

fn parse_address(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address {s:?}: {e}"))
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::header::DEFAULT_ADDRESS;

    #[test]
    fn test_defaults() {
        let job = Args::try_parse_from(["pico-palette", "332"])
            .unwrap()
            .into_job();

        assert_eq!(job.input, PathBuf::from("palette.lmp"));
        assert_eq!(job.output_dir, PathBuf::from("."));
        assert_eq!(job.modes.len(), 1);
        assert_eq!(job.modes[0].widths(), [3, 3, 2]);
        assert_eq!(job.placement, Placement::default());
        assert!(!job.to_stdout);
    }

    #[test]
    fn test_invalid_mode_is_an_argument_error() {
        assert!(Args::try_parse_from(["pico-palette", "999"]).is_err());
        assert!(Args::try_parse_from(["pico-palette", "332", "39"]).is_err());
        assert!(Args::try_parse_from(["pico-palette"]).is_err());
    }

    #[test]
    fn test_nine_bit_mode_writes_nothing() {
        let dir = crate::convert::test::scratch_dir("cli-999");
        let input = crate::convert::test::write_palette(&dir);
        let dir_arg = dir.to_str().unwrap();
        let input_arg = input.to_str().unwrap();

        let parsed = Args::try_parse_from(["pico-palette", "-i", input_arg, "-o", dir_arg, "999"]);
        assert!(parsed.is_err());
        assert!(!dir.join("999_palette.h").exists());
    }

    #[test]
    fn test_placement_options() {
        let job = Args::try_parse_from([
            "pico-palette",
            "--address",
            "0x1000_0000",
            "--address-comment",
            "flash",
            "565",
            "888",
        ])
        .unwrap()
        .into_job();

        assert_eq!(job.placement.address, 0x1000_0000);
        assert_eq!(job.placement.comment, "flash");
        assert_eq!(job.modes.len(), 2);
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("0x20041000"), Ok(DEFAULT_ADDRESS));
        assert_eq!(parse_address("4096"), Ok(4096));
        assert!(parse_address("0xzz").is_err());
    }
}
