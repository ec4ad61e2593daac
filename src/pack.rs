use log::warn;

use crate::bitmode::{BitMode, CHANNELS};
use crate::palette::Rgb;
use crate::quantize::QuantizedPalette;

/// Fits `value` into a `bits`-digit slot.
///
/// The binary digits are left-padded with zeros to `bits` and then cut to the
/// first `bits` digits, so a value wider than its slot keeps its high-order
/// digits. Quantized values always fit; anything else loses its low bits.
pub fn fit_width(value: u32, bits: u8) -> u32 {
    let len = u32::BITS - value.leading_zeros();
    let bits = bits as u32;
    if len <= bits {
        return value;
    }

    let fitted = value >> (len - bits);
    warn!("{value:#b} does not fit in {bits} bits, truncated to {fitted:#b}");
    fitted
}

/// Concatenates the channels of `color` into one integer, red in the
/// most significant position.
pub fn pack_entry(color: Rgb, mode: &BitMode) -> u32 {
    color
        .iter()
        .zip(mode.widths())
        .fold(0u32, |acc, (&value, bits)| {
            (acc << bits) | fit_width(value as u32, bits)
        })
}

pub fn unpack_entry(mut packed: u32, mode: &BitMode) -> Rgb {
    let mut color = [0; CHANNELS];
    for channel in (0..CHANNELS).rev() {
        let bits = mode.width(channel);
        color[channel] = (packed & mode.max_value(channel)) as u8;
        packed >>= bits;
    }
    color
}

pub fn pack(quantized: &QuantizedPalette) -> Vec<u32> {
    quantized
        .entries()
        .iter()
        .map(|&color| pack_entry(color, quantized.mode()))
        .collect()
}

/// Lowercase hex with a `0x` prefix and no zero padding: `0x0`, `0xff`.
pub fn hex_literal(packed: u32) -> String {
    format!("{packed:#x}")
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::palette::{PALETTE_BYTES, Palette};
    use crate::quantize::{quantize, quantize_color};

    fn mode(s: &str) -> BitMode {
        s.parse().unwrap()
    }

    #[test]
    fn test_white_332_packs_to_ff() {
        let m = mode("332");
        let packed = pack_entry(quantize_color([255, 255, 255], &m), &m);

        assert_eq!(packed, 0b111_111_11);
        assert_eq!(hex_literal(packed), "0xff");
    }

    #[test]
    fn test_red_is_most_significant() {
        assert_eq!(pack_entry([0b11111, 0, 0], &mode("565")), 0xf800);
        assert_eq!(pack_entry([0, 0b111111, 0], &mode("565")), 0x07e0);
        assert_eq!(pack_entry([0, 0, 0b11111], &mode("565")), 0x001f);
    }

    #[test]
    fn test_unpack_restores_quantized_triple() {
        let cases = [
            ("332", [5, 2, 1]),
            ("565", [17, 42, 3]),
            ("888", [0xde, 0xad, 0x01]),
            ("444", [15, 0, 7]),
            ("181", [1, 200, 0]),
        ];
        for (m, color) in cases {
            let m = mode(m);
            assert_eq!(unpack_entry(pack_entry(color, &m), &m), color);
        }
    }

    #[test]
    fn test_zero_width_channel_packs_no_bits() {
        let m = mode("440");
        assert_eq!(pack_entry([0xf, 0x3, 0], &m), 0xf3);
        assert_eq!(unpack_entry(0xf3, &m), [0xf, 0x3, 0]);
    }

    #[test]
    fn test_fit_width_keeps_high_digits() {
        assert_eq!(fit_width(0b101, 3), 0b101);
        assert_eq!(fit_width(0b1011, 2), 0b10);
        assert_eq!(fit_width(0, 0), 0);
        assert_eq!(fit_width(1, 0), 0);
    }

    #[test]
    fn test_hex_literal_has_no_padding() {
        assert_eq!(hex_literal(0), "0x0");
        assert_eq!(hex_literal(0x7), "0x7");
        assert_eq!(hex_literal(0xabcdef), "0xabcdef");
    }

    #[test]
    fn test_pack_palette() {
        let palette = Palette::from_bytes(&[255; PALETTE_BYTES]).unwrap();
        let m = mode("565");
        let packed = pack(&quantize(&palette, &m));

        assert_eq!(packed.len(), 256);
        assert!(packed.iter().all(|&p| p == 0xffff));
    }
}
