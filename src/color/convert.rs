//! Hex, RGB and HSL conversion to canonical `#rrggbb`.

use std::fmt;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

// =============================================================================
// HEX COLOR
// =============================================================================

/// Canonical color text: `#` followed by exactly six lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Assemble a hex color from its captured digit groups.
///
/// With a second group the digits are kept in order; without one each digit
/// of the shorthand is doubled (`abc` → `aabbcc`).
#[must_use]
pub fn expand_hex(head: [char; 3], tail: Option<[char; 3]>) -> HexColor {
    let mut out = String::with_capacity(7);
    out.push('#');
    match tail {
        Some(tail) => out.extend(head.iter().chain(tail.iter())),
        None => {
            for c in head {
                out.push(c);
                out.push(c);
            }
        }
    }
    HexColor(out)
}

/// Encode a channel as two hex digits: `value / 16` then `value % 16`.
#[must_use]
pub fn encode_channel(value: u8) -> [char; 2] {
    let high = usize::from(value / 16);
    let low = usize::from(value % 16);
    [char::from(HEX_DIGITS[high]), char::from(HEX_DIGITS[low])]
}

/// Round a real-valued channel to the nearest integer in `[0, 255]`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_channel(value: f64) -> u8 {
    // The clamp only absorbs float residue around 0 and 255.
    value.round().clamp(0.0, 255.0) as u8
}

// =============================================================================
// RGB
// =============================================================================

/// An sRGB triple with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub fn to_hex(self) -> HexColor {
        let mut out = String::with_capacity(7);
        out.push('#');
        for channel in [self.r, self.g, self.b] {
            out.extend(encode_channel(channel));
        }
        HexColor(out)
    }
}

// =============================================================================
// HSL
// =============================================================================

/// Hue in whole degrees `[0, 359]`; saturation and lightness as fractions `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// Standard HSL → RGB conversion through chroma and the hue sextant.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let Self { hue, saturation, lightness } = self;

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let hue_prime = f64::from(hue) / 60.0;
        let second = chroma * (1.0 - (hue_prime % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        // hue < 360, so the integer sextant is 0..=5 and equals floor(hue_prime).
        let (r1, g1, b1) = match hue / 60 {
            0 => (chroma, second, 0.0),
            1 => (second, chroma, 0.0),
            2 => (0.0, chroma, second),
            3 => (0.0, second, chroma),
            4 => (second, 0.0, chroma),
            _ => (chroma, 0.0, second),
        };

        Rgb {
            r: round_channel((r1 + m) * 255.0),
            g: round_channel((g1 + m) * 255.0),
            b: round_channel((b1 + m) * 255.0),
        }
    }
}

/// Convert `"50%"` to `0.5`. A value without `%` is taken as a fraction already.
#[must_use]
pub fn fraction_from_percent(raw: &str) -> Option<f64> {
    match raw.strip_suffix('%') {
        Some(number) => number.parse::<f64>().ok().map(|n| n / 100.0),
        None => raw.parse::<f64>().ok(),
    }
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod tests;
