//! Input cleanup ahead of format detection.

/// Color text after `%20` decoding, trimming and lowercasing.
///
/// The only value the grammars in [`super::detect`] are matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedColor(String);

impl SanitizedColor {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Sanitize a raw color value.
///
/// Returns `None` for absent or empty input. Literal `%20` sequences left over
/// from double-encoded query strings become spaces before trimming, so
/// `"%20#fff%20"` sanitizes to `"#fff"`.
#[must_use]
pub fn sanitize(raw: Option<&str>) -> Option<SanitizedColor> {
    let raw = raw.filter(|s| !s.is_empty())?;
    let cleaned = raw.replace("%20", " ").trim().to_lowercase();
    Some(SanitizedColor(cleaned))
}
