//! Format detection against the hex, rgb and hsl grammars.
//!
//! Each grammar is an anchored regex compiled once per process. The numeric
//! alternations reject out-of-range literals (`256`, `360`, `101%`) and
//! leading zeros (`01`) at the grammar level, so converters never re-check
//! ranges.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::convert::{Hsl, Rgb, fraction_from_percent};
use super::sanitize::SanitizedColor;

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9a-f]{3})([0-9a-f]{3})?$").expect("valid regex"));

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^rgb\(\s*(1\d\d|25[0-5]|2[0-4]\d|[1-9]?\d)",
        r"\s*,\s*(1\d\d|25[0-5]|2[0-4]\d|[1-9]?\d)",
        r"\s*,\s*(1\d\d|25[0-5]|2[0-4]\d|[1-9]?\d)\s*\)$",
    ))
    .expect("valid regex")
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^hsl\(\s*([1-2]\d\d|3[0-5]\d|[1-9]?\d)",
        r"\s*,\s*((?:100|[1-9]\d|\d)%)",
        r"\s*,\s*((?:100|[1-9]\d|\d)%)\s*\)$",
    ))
    .expect("valid regex")
});

/// Which notation a sanitized color is written in, with its parsed values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorFormat {
    /// `#rgb` or `#rrggbb`; `tail` is present for the six-digit form.
    Hex { head: [char; 3], tail: Option<[char; 3]> },
    Rgb(Rgb),
    Hsl(Hsl),
    Invalid,
}

/// Classify a sanitized color. Grammars are tried in order hex, rgb, hsl.
#[must_use]
pub fn detect(color: &SanitizedColor) -> ColorFormat {
    let s = color.as_str();

    if let Some(caps) = HEX_RE.captures(s) {
        return hex_format(&caps).unwrap_or(ColorFormat::Invalid);
    }
    if let Some(caps) = RGB_RE.captures(s) {
        return rgb_format(&caps).unwrap_or(ColorFormat::Invalid);
    }
    if let Some(caps) = HSL_RE.captures(s) {
        return hsl_format(&caps).unwrap_or(ColorFormat::Invalid);
    }
    ColorFormat::Invalid
}

fn hex_format(caps: &Captures<'_>) -> Option<ColorFormat> {
    let head = digit_triple(caps.get(1)?.as_str())?;
    let tail = match caps.get(2) {
        Some(m) => Some(digit_triple(m.as_str())?),
        None => None,
    };
    Some(ColorFormat::Hex { head, tail })
}

fn rgb_format(caps: &Captures<'_>) -> Option<ColorFormat> {
    Some(ColorFormat::Rgb(Rgb {
        r: capture(caps, 1)?,
        g: capture(caps, 2)?,
        b: capture(caps, 3)?,
    }))
}

fn hsl_format(caps: &Captures<'_>) -> Option<ColorFormat> {
    Some(ColorFormat::Hsl(Hsl {
        hue: capture(caps, 1)?,
        saturation: fraction_from_percent(caps.get(2)?.as_str())?,
        lightness: fraction_from_percent(caps.get(3)?.as_str())?,
    }))
}

fn capture<T: FromStr>(caps: &Captures<'_>, index: usize) -> Option<T> {
    caps.get(index)?.as_str().parse().ok()
}

fn digit_triple(digits: &str) -> Option<[char; 3]> {
    let mut chars = digits.chars();
    let triple = [chars.next()?, chars.next()?, chars.next()?];
    chars.next().is_none().then_some(triple)
}

#[cfg(test)]
#[path = "detect_test.rs"]
mod tests;
