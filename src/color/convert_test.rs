use super::*;

fn hsl(hue: u16, saturation: f64, lightness: f64) -> Hsl {
    Hsl { hue, saturation, lightness }
}

// =============================================================================
// HEX
// =============================================================================

#[test]
fn expand_hex_doubles_shorthand_digits() {
    assert_eq!(expand_hex(['a', 'b', 'c'], None).as_str(), "#aabbcc");
}

#[test]
fn expand_hex_keeps_full_form_order() {
    assert_eq!(expand_hex(['1', 'a', '2'], Some(['b', '3', 'c'])).as_str(), "#1a2b3c");
}

// =============================================================================
// CHANNEL ENCODING
// =============================================================================

#[test]
fn encode_channel_edges() {
    assert_eq!(encode_channel(0), ['0', '0']);
    assert_eq!(encode_channel(15), ['0', 'f']);
    assert_eq!(encode_channel(16), ['1', '0']);
    assert_eq!(encode_channel(255), ['f', 'f']);
}

#[test]
fn encode_channel_digits_decode_back_for_every_value() {
    for value in 0..=u8::MAX {
        let digits: String = encode_channel(value).iter().collect();
        assert_eq!(u8::from_str_radix(&digits, 16), Ok(value), "round trip failed for {value}");
    }
}

#[test]
fn round_channel_rounds_half_up_and_clamps() {
    assert_eq!(round_channel(127.5), 128);
    assert_eq!(round_channel(4.25), 4);
    assert_eq!(round_channel(-1e-12), 0);
    assert_eq!(round_channel(255.000_000_1), 255);
}

#[test]
fn rgb_to_hex_encodes_each_channel() {
    assert_eq!(Rgb { r: 10, g: 20, b: 30 }.to_hex().as_str(), "#0a141e");
    assert_eq!(Rgb { r: 255, g: 0, b: 128 }.to_hex().as_str(), "#ff0080");
}

// =============================================================================
// HSL
// =============================================================================

#[test]
fn hsl_primary_and_secondary_hues() {
    assert_eq!(hsl(0, 1.0, 0.5).to_rgb(), Rgb { r: 255, g: 0, b: 0 });
    assert_eq!(hsl(60, 1.0, 0.5).to_rgb(), Rgb { r: 255, g: 255, b: 0 });
    assert_eq!(hsl(120, 1.0, 0.5).to_rgb(), Rgb { r: 0, g: 255, b: 0 });
    assert_eq!(hsl(180, 1.0, 0.5).to_rgb(), Rgb { r: 0, g: 255, b: 255 });
    assert_eq!(hsl(240, 1.0, 0.5).to_rgb(), Rgb { r: 0, g: 0, b: 255 });
    assert_eq!(hsl(300, 1.0, 0.5).to_rgb(), Rgb { r: 255, g: 0, b: 255 });
}

#[test]
fn hsl_greys_ignore_hue() {
    assert_eq!(hsl(0, 0.0, 0.0).to_rgb(), Rgb { r: 0, g: 0, b: 0 });
    assert_eq!(hsl(200, 0.0, 1.0).to_rgb(), Rgb { r: 255, g: 255, b: 255 });
    assert_eq!(hsl(90, 0.0, 0.5).to_rgb(), Rgb { r: 128, g: 128, b: 128 });
}

#[test]
fn hsl_last_sextant_wraps_towards_red() {
    assert_eq!(hsl(359, 1.0, 0.5).to_rgb(), Rgb { r: 255, g: 0, b: 4 });
}

#[test]
fn hsl_mid_saturation() {
    assert_eq!(hsl(210, 0.5, 0.4).to_rgb(), Rgb { r: 51, g: 102, b: 153 });
}

// =============================================================================
// PERCENT
// =============================================================================

fn assert_fraction(raw: &str, expected: f64) {
    let got = fraction_from_percent(raw).expect("numeric input");
    assert!((got - expected).abs() < f64::EPSILON, "{raw:?} gave {got}, expected {expected}");
}

#[test]
fn fraction_from_percent_divides_when_percent_present() {
    assert_fraction("50%", 0.5);
    assert_fraction("100%", 1.0);
    assert_fraction("0%", 0.0);
}

#[test]
fn fraction_from_percent_bare_number_is_fraction() {
    assert_fraction("0.25", 0.25);
}

#[test]
fn fraction_from_percent_rejects_non_numbers() {
    assert!(fraction_from_percent("abc%").is_none());
    assert!(fraction_from_percent("").is_none());
}
