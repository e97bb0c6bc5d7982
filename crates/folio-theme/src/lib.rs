//! # folio-theme — accent-driven theming engine
//!
//! One user-chosen accent color produces the entire application palette.
//! A single parameter change (accent hex or theme mode) regenerates a
//! consistent set of tints, a contrasting text color, and one icon color
//! per application feature.
//!
//! # Architecture
//!
//! ```text
//! Settings (accent hex + ThemeMode)          ← persisted, settings.rs
//!     │
//!     ▼
//! mode.rs:     resolve ThemeMode against the system scheme → is_dark
//!     │
//!     ▼
//! variants.rs: derive ColorVariants (primary, tints, text color)
//!     │
//!     ▼
//! role.rs:     hue-rotate one icon color per FeatureRole
//!     │
//!     ▼
//! theme.rs:    Theme — the owned context object the UI reads
//! ```
//!
//! Derivation is a pure function of `(accent, is_dark)`: variants are
//! never persisted, only rebuilt. The settings layer is the single place
//! with I/O, errors, and logging.

pub mod mode;
pub mod role;
pub mod settings;
pub mod theme;
pub mod variants;

pub use mode::ThemeMode;
pub use role::{FeatureRole, IconColors};
pub use settings::{Settings, SettingsError, SettingsStore, DEFAULT_ACCENT};
pub use theme::Theme;
pub use variants::ColorVariants;
