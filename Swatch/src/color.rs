//! HSV type and hex conversion math.
//!
//! Hex strings are parsed permissively: the `#` prefix is optional, 3-digit
//! shorthand expands to 6 digits, and any channel pair that fails to parse
//! contributes zero. Formatting always produces canonical uppercase
//! `#RRGGBB`.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

/// A color in HSV space.
///
/// Hue is in degrees (`0.0..360.0` canonically, though a drag against the
/// right edge of the hue strip can momentarily yield exactly `360.0`, which
/// formats the same as `0.0`). Saturation and value are percentages in
/// `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Format as canonical uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        hsv_to_hex(self.h, self.s, self.v)
    }
}

/// Parse one two-digit channel starting at `start`, zero-filling anything
/// that is missing or not a hex digit.
fn channel(digits: &str, start: usize) -> u8 {
    let pair = digits
        .get(start..start + 2)
        .or_else(|| digits.get(start..))
        .unwrap_or("");
    u8::from_str_radix(pair, 16).unwrap_or(0)
}

/// Strip the optional `#` and expand 3-digit shorthand to 6 digits.
fn expand_digits(hex: &str) -> String {
    let stripped = hex.trim_start_matches('#');
    if stripped.len() == 3 {
        stripped.chars().flat_map(|c| [c, c]).collect()
    } else {
        stripped.to_string()
    }
}

/// Parse a hex string into RGB channel bytes, zero-filling invalid input.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let digits = expand_digits(hex);
    (channel(&digits, 0), channel(&digits, 2), channel(&digits, 4))
}

/// Normalize arbitrary hex input to canonical uppercase `#RRGGBB`.
///
/// Short forms expand and unparsable channels become `00`, so the result is
/// always well formed.
pub fn normalize_hex(hex: &str) -> String {
    let (r, g, b) = hex_to_rgb(hex);
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Convert a hex string to HSV.
///
/// Grey inputs (zero chroma) report hue 0, and pure black reports zero
/// saturation as well.
#[allow(clippy::float_cmp)]
pub fn hex_to_hsv(hex: &str) -> Hsv {
    let (rb, gb, bb) = hex_to_rgb(hex);
    let r = f64::from(rb) / 255.0;
    let g = f64::from(gb) / 255.0;
    let b = f64::from(bb) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let v = max;

    let mut h = 0.0;
    if d > 0.0 {
        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;
    }

    Hsv {
        h: h * 360.0,
        s: s * 100.0,
        v: v * 100.0,
    }
}

/// Convert HSV components to RGB channel bytes.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let s = s / 100.0;
    let v = v / 100.0;

    let i = (h / 60.0).floor();
    let f = h / 60.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    // Sector 6 (hue exactly 360) folds back onto sector 0.
    let (r, g, b) = match (i as i32) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, q),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

/// Convert HSV components to canonical uppercase `#RRGGBB`.
pub fn hsv_to_hex(h: f64, s: f64, v: f64) -> String {
    let (r, g, b) = hsv_to_rgb(h, s, v);
    format!("#{r:02X}{g:02X}{b:02X}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_canonical(hex: &str) {
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert!(hex[1..]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_primary_colors() {
        assert_eq!(hex_to_hsv("#FF0000"), Hsv { h: 0.0, s: 100.0, v: 100.0 });

        let green = hex_to_hsv("#00FF00");
        assert!((green.h - 120.0).abs() < 1e-9);
        assert_eq!((green.s, green.v), (100.0, 100.0));

        let blue = hex_to_hsv("#0000FF");
        assert!((blue.h - 240.0).abs() < 1e-9);

        assert_eq!(hsv_to_hex(0.0, 100.0, 100.0), "#FF0000");
        assert_eq!(hsv_to_hex(120.0, 100.0, 100.0), "#00FF00");
        assert_eq!(hsv_to_hex(240.0, 100.0, 100.0), "#0000FF");
    }

    #[test]
    fn test_greys_have_zero_hue_and_saturation() {
        let white = hex_to_hsv("#FFFFFF");
        assert_eq!((white.h, white.s, white.v), (0.0, 0.0, 100.0));

        let black = hex_to_hsv("#000000");
        assert_eq!((black.h, black.s, black.v), (0.0, 0.0, 0.0));

        let grey = hex_to_hsv("#808080");
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.s, 0.0);
    }

    #[test]
    fn test_hue_360_folds_to_red() {
        assert_eq!(hsv_to_hex(360.0, 100.0, 100.0), "#FF0000");
    }

    #[test]
    fn test_shorthand_expands() {
        assert_eq!(hex_to_hsv("#abc"), hex_to_hsv("#AABBCC"));
        assert_eq!(normalize_hex("abc"), "#AABBCC");
    }

    #[test]
    fn test_invalid_digits_zero_fill() {
        assert_eq!(hex_to_rgb("#ZZ00FF"), (0, 0, 255));
        assert_eq!(normalize_hex("#zzzzzz"), "#000000");
        assert_eq!(hex_to_hsv("not a color").v, 0.0);
    }

    #[test]
    fn test_partial_input_parses_available_digits() {
        // A lone trailing digit parses as its own value, like "F" -> 15.
        assert_eq!(hex_to_rgb("#abcdf"), (0xAB, 0xCD, 0x0F));
        assert_eq!(hex_to_rgb("#ab"), (0xAB, 0, 0));
    }

    #[test]
    fn test_output_is_canonical() {
        for (h, s, v) in [
            (0.0, 0.0, 0.0),
            (359.9, 100.0, 100.0),
            (123.4, 56.7, 89.0),
            (360.0, 50.0, 50.0),
            (42.0, 0.0, 13.0),
        ] {
            assert_canonical(&hsv_to_hex(h, s, v));
        }
        assert_canonical(&normalize_hex("#2563eb"));
    }

    #[test]
    fn test_round_trip_drifts_at_most_one_per_channel() {
        for hex in [
            "#0F172A", "#2563EB", "#DC2626", "#FFFFFF", "#000000", "#123456",
            "#FEDCBA", "#7F7F80", "#01FE02", "#BADA55",
        ] {
            let hsv = hex_to_hsv(hex);
            let back = hsv_to_hex(hsv.h, hsv.s, hsv.v);
            let (r0, g0, b0) = hex_to_rgb(hex);
            let (r1, g1, b1) = hex_to_rgb(&back);
            assert!(
                (i32::from(r0) - i32::from(r1)).abs() <= 1
                    && (i32::from(g0) - i32::from(g1)).abs() <= 1
                    && (i32::from(b0) - i32::from(b1)).abs() <= 1,
                "{hex} round-tripped to {back}"
            );
        }
    }

    #[test]
    fn test_hsv_struct_to_hex() {
        let hsv = Hsv { h: 217.0, s: 83.0, v: 92.0 };
        assert_canonical(&hsv.to_hex());
    }
}
