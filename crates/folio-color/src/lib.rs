//! # folio-color — color-space primitives for accent-driven theming
//!
//! Everything the folio theming engine knows about color lives here:
//! hex parsing and formatting, RGB ↔ HSL conversion, perceptual-ish
//! adjustments (lighten, darken, hue rotation, saturation), and WCAG
//! relative luminance for the black-vs-white text decision.
//!
//! # Boundary contract
//!
//! The surrounding application traffics in hex strings, so this crate has
//! two layers:
//!
//! - Typed core: [`Rgb`] and [`Hsl`] with explicit, fallible parsing
//!   (`Rgb::parse_hex` returns `Option`).
//! - String layer ([`adjust`]): transforms that take and return hex
//!   strings. A string that fails to parse passes through unchanged —
//!   malformed input degrades to a no-op transform, never a panic or an
//!   error. Callers that need to detect failure use the typed core.
//!
//! All functions are pure and deterministic: no I/O, no logging, no
//! shared state.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]
// Channel quantization truncates intentionally after clamping.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod adjust;
pub mod color;
pub mod luminance;

pub use adjust::{adjust_saturation, darken, lighten, shift_hue};
pub use color::{Hsl, Rgb};
pub use luminance::{contrast_ratio, is_light, relative_luminance};
