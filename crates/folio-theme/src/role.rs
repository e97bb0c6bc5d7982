//! Per-feature icon colors, keyed by a closed enum.
//!
//! Each application feature gets an icon color derived from the accent by
//! a fixed hue rotation. The roles form a closed set — an enum with a
//! compile-time-checked lookup, not string keys resolved at runtime.

use folio_color::{lighten, shift_hue};

/// An application feature with a themed icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureRole {
    /// Document scanning. Uses the accent unrotated.
    Scan,
    /// Document editing.
    Edit,
    /// Format conversion.
    Convert,
    /// AI assistant.
    AskAi,
}

impl FeatureRole {
    pub const ALL: &[Self] = &[Self::Scan, Self::Edit, Self::Convert, Self::AskAi];

    /// Hue rotation applied to the accent for this role's icon, in degrees.
    #[must_use]
    pub const fn hue_offset(self) -> f32 {
        match self {
            Self::Scan => 0.0,
            Self::Edit => 30.0,
            Self::Convert => 150.0,
            Self::AskAi => -60.0,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Scan => "Scan",
            Self::Edit => "Edit",
            Self::Convert => "Convert",
            Self::AskAi => "Ask AI",
        }
    }
}

/// The derived icon color for every [`FeatureRole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconColors {
    pub scan: String,
    pub edit: String,
    pub convert: String,
    pub ask_ai: String,
}

impl IconColors {
    /// Derive one icon color per role from the accent.
    ///
    /// On dark surfaces every icon color is additionally lightened by 10
    /// lightness points for contrast.
    #[must_use]
    pub fn derive(accent: &str, is_dark: bool) -> Self {
        let one = |role: FeatureRole| {
            let offset = role.hue_offset();
            // A zero offset keeps the caller's exact string; going through
            // parse/format would re-case it.
            let rotated = if offset == 0.0 {
                accent.to_owned()
            } else {
                shift_hue(accent, offset)
            };
            if is_dark {
                lighten(&rotated, 10.0)
            } else {
                rotated
            }
        };

        Self {
            scan: one(FeatureRole::Scan),
            edit: one(FeatureRole::Edit),
            convert: one(FeatureRole::Convert),
            ask_ai: one(FeatureRole::AskAi),
        }
    }

    /// Look up the icon color for a role.
    #[must_use]
    pub fn get(&self, role: FeatureRole) -> &str {
        match role {
            FeatureRole::Scan => &self.scan,
            FeatureRole::Edit => &self.edit,
            FeatureRole::Convert => &self.convert,
            FeatureRole::AskAi => &self.ask_ai,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
