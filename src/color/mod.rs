//! Color normalization.
//!
//! SYSTEM CONTEXT
//! ==============
//! Accepts a color in hex, `rgb(...)` or `hsl(...)` notation and produces the
//! canonical lowercase `#rrggbb` form. The pipeline is pure:
//!
//! `raw → sanitize → detect → convert → HexColor`
//!
//! `normalize` collapses every failure into the `Invalid color` sentinel that
//! the HTTP surface returns as its body.

pub mod convert;
pub mod detect;
pub mod sanitize;

pub use convert::{HexColor, Rgb};
pub use detect::{ColorFormat, detect};
pub use sanitize::{SanitizedColor, sanitize};

/// Body returned for absent or unrecognized colors.
pub const INVALID_COLOR: &str = "Invalid color";

// =============================================================================
// ERROR
// =============================================================================

/// Reasons a color input could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// No input, or an empty string.
    #[error("no color provided")]
    Missing,

    /// The sanitized input matched none of the hex, rgb or hsl grammars.
    #[error("unrecognized color format: {0:?}")]
    UnrecognizedFormat(String),
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Parse a raw color string into its canonical hex form.
///
/// # Errors
///
/// Returns [`ColorError::Missing`] for absent or empty input and
/// [`ColorError::UnrecognizedFormat`] when no grammar matches.
pub fn parse(raw: Option<&str>) -> Result<HexColor, ColorError> {
    let sanitized = sanitize(raw).ok_or(ColorError::Missing)?;

    match detect(&sanitized) {
        ColorFormat::Hex { head, tail } => Ok(convert::expand_hex(head, tail)),
        ColorFormat::Rgb(rgb) => Ok(rgb.to_hex()),
        ColorFormat::Hsl(hsl) => Ok(hsl.to_rgb().to_hex()),
        ColorFormat::Invalid => Err(ColorError::UnrecognizedFormat(sanitized.into_inner())),
    }
}

/// Normalize a raw color string, returning `#rrggbb` or [`INVALID_COLOR`].
#[must_use]
pub fn normalize(raw: Option<&str>) -> String {
    match parse(raw) {
        Ok(hex) => hex.into_string(),
        Err(e) => {
            tracing::debug!(error = %e, "color rejected");
            INVALID_COLOR.to_owned()
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
