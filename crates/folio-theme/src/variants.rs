//! Palette derivation — one accent color in, the full variant set out.
//!
//! `ColorVariants` is the record the UI layer consumes directly as style
//! values. It is recomputed whenever the accent or the resolved dark flag
//! changes, never mutated in place, and never persisted — only the accent
//! hex and theme mode are stored.

use folio_color::{darken, is_light, lighten};

use crate::role::IconColors;

/// Alpha suffix for the translucent tint on light surfaces (~8% opacity).
///
/// The tint is an 8-digit hex-with-alpha value: the base hex with a
/// two-hex-digit alpha appended, the format the consuming UI accepts.
const LIGHT_TINT_ALPHA: &str = "14";

/// Alpha suffix for the translucent tint on dark surfaces (~12% opacity).
const DARK_TINT_ALPHA: &str = "1F";

/// Text color placed on a light primary.
pub const TEXT_ON_LIGHT: &str = "#000000";

/// Text color placed on a dark primary.
pub const TEXT_ON_DARK: &str = "#FFFFFF";

/// The complete variant set derived from one accent color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorVariants {
    /// The working primary. On dark surfaces this is the accent lightened
    /// by 10 points for visibility; on light surfaces the accent verbatim.
    pub primary: String,
    /// A lightened companion of the primary.
    pub primary_light: String,
    /// Translucent tint: primary hex plus a two-digit alpha suffix.
    pub primary_light_rgba: String,
    /// A darkened companion (dark surfaces keep the original accent here).
    pub primary_dark: String,
    /// Black or white, whichever contrasts with the primary.
    pub primary_text: String,
    /// One icon color per feature role.
    pub icons: IconColors,
}

impl ColorVariants {
    /// Derive the full variant set from an accent hex and the resolved
    /// dark flag.
    ///
    /// Pure and deterministic: same inputs, same record. A malformed
    /// accent flows through every step unchanged (see `folio_color`'s
    /// pass-through contract) rather than failing.
    #[must_use]
    pub fn derive(accent: &str, is_dark: bool) -> Self {
        if is_dark {
            Self::derive_dark(accent)
        } else {
            Self::derive_light(accent)
        }
    }

    fn derive_light(accent: &str) -> Self {
        Self {
            primary: accent.to_owned(),
            primary_light: lighten(accent, 40.0),
            primary_light_rgba: format!("{accent}{LIGHT_TINT_ALPHA}"),
            primary_dark: darken(accent, 15.0),
            primary_text: text_for(accent),
            icons: IconColors::derive(accent, false),
        }
    }

    fn derive_dark(accent: &str) -> Self {
        // Lift the accent for visibility against dark surfaces.
        let adjusted = lighten(accent, 10.0);

        // Icons are derived from the ORIGINAL accent and re-lightened
        // inside IconColors::derive. The source application shipped this
        // double-adjustment path; it is preserved, not corrected.
        let icons = IconColors::derive(accent, true);

        Self {
            primary: adjusted.clone(),
            primary_light: adjusted.clone(),
            primary_light_rgba: format!("{adjusted}{DARK_TINT_ALPHA}"),
            primary_dark: accent.to_owned(),
            primary_text: text_for(&adjusted),
            icons,
        }
    }
}

/// Black text on light primaries, white on dark ones.
fn text_for(hex: &str) -> String {
    if is_light(hex) {
        TEXT_ON_LIGHT.to_owned()
    } else {
        TEXT_ON_DARK.to_owned()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
