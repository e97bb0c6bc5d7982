//! WCAG relative luminance and the black-vs-white text decision.
//!
//! Luminance math runs in f64 in sRGB space — this is the WCAG
//! definition, distinct from HSL lightness, which only drives the
//! adjustment operations. The two disagree on purpose: a saturated blue
//! has HSL lightness 50 but relative luminance well below 0.5.

use crate::color::Rgb;

/// Convert a single sRGB component (0.0–1.0) to linear light.
///
/// Piecewise per WCAG 2.x: the linear segment below 0.03928 divides by
/// 12.92, everything above gamma-expands via `((v + 0.055) / 1.055)^2.4`.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG, in [0.0, 1.0].
///
/// Rec.709 weighting on linearized channels:
/// `L = 0.2126·R + 0.7152·G + 0.0722·B`.
#[must_use]
pub fn relative_luminance_of(rgb: Rgb) -> f64 {
    let r = srgb_to_linear(f64::from(rgb.r) / 255.0);
    let g = srgb_to_linear(f64::from(rgb.g) / 255.0);
    let b = srgb_to_linear(f64::from(rgb.b) / 255.0);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Relative luminance of a hex string.
///
/// Returns 0.0 when the string does not parse — the degraded value reads
/// as "dark", so downstream text selection falls back to white.
#[must_use]
pub fn relative_luminance(hex: &str) -> f64 {
    Rgb::parse_hex(hex).map_or(0.0, relative_luminance_of)
}

/// Whether a color is light enough to carry black text.
///
/// Luminance heuristic (`L > 0.5`), not a full contrast-ratio check.
#[must_use]
pub fn is_light(hex: &str) -> bool {
    relative_luminance(hex) > 0.5
}

/// WCAG 2.1 contrast ratio between two colors, in [1.0, 21.0].
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)` — symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
