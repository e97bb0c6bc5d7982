// SPDX-License-Identifier: MIT
//
// folio-color typed core — RGB and HSL with strict hex parsing.
//
// The application boundary is a hex string, but all math happens on these
// two types. HSL is the working space for every adjustment the theming
// engine makes: lightness steps stay on the same hue, hue rotation keeps
// saturation and lightness fixed. Conversion pipeline:
//
//   "#RRGGBB" ↔ Rgb (8-bit channels) ↔ Hsl (h ∈ [0,360), s/l ∈ [0,100])

use std::fmt;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color.
///
/// Construction from a hex string is fallible ([`Rgb::parse_hex`]);
/// everything after that is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color, with or without the leading `#`.
    ///
    /// Case-insensitive. Anything else — 3-digit shorthand, 8-digit
    /// hex-with-alpha, wrong length, non-hex bytes — returns `None`.
    /// The string layer treats `None` as "pass the input through".
    #[must_use]
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 {
            return None;
        }
        let bytes = s.as_bytes();
        let r = parse_hex_byte(&bytes[0..2])?;
        let g = parse_hex_byte(&bytes[2..4])?;
        let b = parse_hex_byte(&bytes[4..6])?;
        Some(Self { r, g, b })
    }

    /// Build from float channels in [0.0, 1.0], rounding to the nearest
    /// 8-bit value and clamping out-of-range input.
    #[must_use]
    pub fn from_f32(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: to_channel(r),
            g: to_channel(g),
            b: to_channel(b),
        }
    }

    /// Format as `#rrggbb` (lowercase, zero-padded).
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL (h ∈ [0, 360), s/l ∈ [0, 100]).
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let max = r.max(g.max(b));
        let min = r.min(g.min(b));
        let l = (max + min) / 2.0;
        let d = max - min;

        if d < f32::EPSILON {
            // Achromatic — hue is undefined, default to 0.
            return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
        }

        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: normalize_hue(h * 60.0),
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space.
///
/// - `h`: hue angle in degrees, [0, 360)
/// - `s`: saturation in percent, [0, 100]
/// - `l`: lightness in percent, [0, 100]
///
/// Adjustment methods return copies; nothing mutates in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    /// Create an HSL color, normalizing the hue and clamping s/l.
    #[must_use]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Increase lightness by `percent` points (clamped to [0, 100]).
    #[inline]
    #[must_use]
    pub fn lighten(self, percent: f32) -> Self {
        Self {
            l: (self.l + percent).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Decrease lightness by `percent` points (clamped to [0, 100]).
    #[inline]
    #[must_use]
    pub fn darken(self, percent: f32) -> Self {
        Self {
            l: (self.l - percent).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Rotate the hue by `degrees` (may be negative; wraps around 360°).
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f32) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Add `amount` saturation points (clamped to [0, 100]).
    #[inline]
    #[must_use]
    pub fn saturate(self, amount: f32) -> Self {
        Self {
            s: (self.s + amount).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Convert back to 8-bit RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = normalize_hue(self.h);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - 2.0f32.mul_add(l, -1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb::from_f32(r + m, g + m, b + m)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.1}, {:.1}%, {:.1}%)", self.h, self.s, self.l)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float channel (0.0–1.0) to a u8 with round-then-clamp.
#[inline]
fn to_channel(v: f32) -> u8 {
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ── Hex parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        assert_eq!(Rgb::parse_hex("#ff8000"), Some(Rgb::new(255, 128, 0)));
    }

    #[test]
    fn hex_parsing_uppercase() {
        assert_eq!(Rgb::parse_hex("#3A7CFF"), Some(Rgb::new(0x3a, 0x7c, 0xff)));
    }

    #[test]
    fn hex_parsing_no_hash() {
        assert_eq!(Rgb::parse_hex("00ff00"), Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn hex_parsing_rejects_shorthand() {
        // 3-digit shorthand is not part of the boundary contract.
        assert_eq!(Rgb::parse_hex("#f80"), None);
    }

    #[test]
    fn hex_parsing_rejects_alpha() {
        assert_eq!(Rgb::parse_hex("#ff000080"), None);
    }

    #[test]
    fn hex_parsing_rejects_garbage() {
        assert_eq!(Rgb::parse_hex("not-a-color"), None);
        assert_eq!(Rgb::parse_hex("#12345"), None);
        assert_eq!(Rgb::parse_hex(""), None);
        assert_eq!(Rgb::parse_hex("#gg0000"), None);
    }

    #[test]
    fn hex_format_zero_pads() {
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn hex_format_parse_is_exact() {
        // Forward direction loses nothing: parse(to_hex(rgb)) == rgb.
        for v in [0u8, 1, 63, 128, 200, 254, 255] {
            let rgb = Rgb::new(v, 255 - v, v / 2);
            assert_eq!(Rgb::parse_hex(&rgb.to_hex()), Some(rgb));
        }
    }

    // ── RGB ↔ HSL roundtrip ──────────────────────────────────────────────

    fn assert_channel_close(actual: u8, expected: u8, what: &str) {
        let diff = (i16::from(actual) - i16::from(expected)).unsigned_abs();
        assert!(diff <= 1, "{what}: got {actual}, expected {expected}");
    }

    #[test]
    fn rgb_hsl_roundtrip_grid() {
        // Sample the 8-bit cube; each channel must survive within ±1.
        for r in (0u16..=255).step_by(15) {
            for g in (0u16..=255).step_by(15) {
                for b in (0u16..=255).step_by(15) {
                    let rgb = Rgb::new(r as u8, g as u8, b as u8);
                    let back = rgb.to_hsl().to_rgb();
                    assert_channel_close(back.r, rgb.r, "r");
                    assert_channel_close(back.g, rgb.g, "g");
                    assert_channel_close(back.b, rgb.b, "b");
                }
            }
        }
    }

    #[test]
    fn rgb_hsl_roundtrip_primaries() {
        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(0, 255, 255),
            Rgb::new(255, 0, 255),
            Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0),
        ] {
            assert_eq!(rgb.to_hsl().to_rgb(), rgb);
        }
    }

    // ── Known HSL values ─────────────────────────────────────────────────

    fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn red_is_hue_zero() {
        let hsl = Rgb::new(255, 0, 0).to_hsl();
        assert!(approx_eq(hsl.h, 0.0, 0.5), "hue was {}", hsl.h);
        assert!(approx_eq(hsl.s, 100.0, 0.5), "saturation was {}", hsl.s);
        assert!(approx_eq(hsl.l, 50.0, 0.5), "lightness was {}", hsl.l);
    }

    #[test]
    fn green_is_hue_120() {
        let hsl = Rgb::new(0, 255, 0).to_hsl();
        assert!(approx_eq(hsl.h, 120.0, 0.5), "hue was {}", hsl.h);
    }

    #[test]
    fn blue_is_hue_240() {
        let hsl = Rgb::new(0, 0, 255).to_hsl();
        assert!(approx_eq(hsl.h, 240.0, 0.5), "hue was {}", hsl.h);
    }

    #[test]
    fn gray_is_achromatic() {
        let hsl = Rgb::new(128, 128, 128).to_hsl();
        assert!(approx_eq(hsl.h, 0.0, 0.001));
        assert!(approx_eq(hsl.s, 0.0, 0.001));
        assert!(approx_eq(hsl.l, 50.2, 0.5), "lightness was {}", hsl.l);
    }

    // ── Adjustments ──────────────────────────────────────────────────────

    #[test]
    fn lighten_raises_lightness() {
        let hsl = Hsl::new(200.0, 60.0, 40.0).lighten(20.0);
        assert!(approx_eq(hsl.l, 60.0, 0.001));
        assert!(approx_eq(hsl.h, 200.0, 0.001));
        assert!(approx_eq(hsl.s, 60.0, 0.001));
    }

    #[test]
    fn lighten_clamps_to_100() {
        let hsl = Hsl::new(200.0, 60.0, 40.0).lighten(1000.0);
        assert!(approx_eq(hsl.l, 100.0, 0.001));
    }

    #[test]
    fn darken_clamps_to_0() {
        let hsl = Hsl::new(200.0, 60.0, 40.0).darken(1000.0);
        assert!(approx_eq(hsl.l, 0.0, 0.001));
    }

    #[test]
    fn shift_hue_wraps_forward() {
        let hsl = Hsl::new(350.0, 50.0, 50.0).shift_hue(30.0);
        assert!(approx_eq(hsl.h, 20.0, 0.001), "hue was {}", hsl.h);
    }

    #[test]
    fn shift_hue_wraps_negative() {
        let hsl = Hsl::new(10.0, 50.0, 50.0).shift_hue(-30.0);
        assert!(approx_eq(hsl.h, 340.0, 0.001), "hue was {}", hsl.h);
    }

    #[test]
    fn shift_hue_full_turn_is_identity() {
        let hsl = Hsl::new(123.4, 50.0, 50.0).shift_hue(360.0);
        assert!(approx_eq(hsl.h, 123.4, 0.01), "hue was {}", hsl.h);
    }

    #[test]
    fn saturate_clamps_both_ends() {
        let up = Hsl::new(0.0, 90.0, 50.0).saturate(50.0);
        assert!(approx_eq(up.s, 100.0, 0.001));
        let down = Hsl::new(0.0, 10.0, 50.0).saturate(-50.0);
        assert!(approx_eq(down.s, 0.0, 0.001));
    }

    // ── Lightness extremes through RGB ───────────────────────────────────

    #[test]
    fn full_lightness_is_white() {
        let rgb = Hsl::new(42.0, 80.0, 100.0).to_rgb();
        assert_eq!(rgb, Rgb::new(255, 255, 255));
    }

    #[test]
    fn zero_lightness_is_black() {
        let rgb = Hsl::new(42.0, 80.0, 0.0).to_rgb();
        assert_eq!(rgb, Rgb::new(0, 0, 0));
    }

    // ── Display ──────────────────────────────────────────────────────────

    #[test]
    fn rgb_display_is_hex() {
        assert_eq!(format!("{}", Rgb::new(255, 128, 0)), "#ff8000");
    }

    #[test]
    fn normalize_hue_range() {
        assert!(approx_eq(normalize_hue(720.5), 0.5, 0.01));
        assert!(approx_eq(normalize_hue(-90.0), 270.0, 0.001));
        assert!(approx_eq(normalize_hue(359.9), 359.9, 0.001));
    }
}
