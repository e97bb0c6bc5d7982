//! Hex-string transforms with the pass-through contract.
//!
//! The application boundary hands us user-facing hex strings. Every
//! function here parses, adjusts in HSL, and re-formats. If the input
//! does not parse, it is returned unchanged — a malformed string flows
//! through the whole derivation pipeline as a no-op instead of failing.
//! Use [`Rgb::parse_hex`](crate::Rgb::parse_hex) directly when failure
//! needs to be observed.

use crate::color::{Hsl, Rgb};

fn transform(hex: &str, f: impl FnOnce(Hsl) -> Hsl) -> String {
    Rgb::parse_hex(hex).map_or_else(
        || hex.to_owned(),
        |rgb| f(rgb.to_hsl()).to_rgb().to_hex(),
    )
}

/// Raise HSL lightness by `percent` points (clamped to [0, 100]).
#[must_use]
pub fn lighten(hex: &str, percent: f32) -> String {
    transform(hex, |hsl| hsl.lighten(percent))
}

/// Lower HSL lightness by `percent` points (clamped to [0, 100]).
#[must_use]
pub fn darken(hex: &str, percent: f32) -> String {
    transform(hex, |hsl| hsl.darken(percent))
}

/// Rotate the hue by `degrees` (may be negative; wraps mod 360),
/// preserving saturation and lightness.
#[must_use]
pub fn shift_hue(hex: &str, degrees: f32) -> String {
    transform(hex, |hsl| hsl.shift_hue(degrees))
}

/// Add `amount` saturation points (clamped to [0, 100]).
#[must_use]
pub fn adjust_saturation(hex: &str, amount: f32) -> String {
    transform(hex, |hsl| hsl.saturate(amount))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
