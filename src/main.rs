// SPDX-License-Identifier: MIT
//
// folio — terminal previewer for the accent-driven theming core.
//
// Wires the crates together the way the application shell would:
//
//   settings.json  → Settings (accent hex + theme mode)
//   dark-light     → detected system color scheme
//   folio-theme    → Theme → ColorVariants
//   stdout         → truecolor swatch table
//
// The library stays pure; everything environmental (config paths, scheme
// detection, logging) happens here.

use std::env;
use std::process;

use anyhow::{bail, Context, Result};
use folio_color::{contrast_ratio, Rgb};
use folio_theme::{FeatureRole, SettingsStore, Theme, ThemeMode};
use log::debug;

const USAGE: &str = "\
usage: folio [ACCENT] [--mode light|dark|system] [--save]

  ACCENT   6-digit hex accent color (with or without #)
  --mode   override the persisted theme mode for this run
  --save   persist the resulting accent and mode
";

struct Args {
    accent: Option<String>,
    mode: Option<ThemeMode>,
    save: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        accent: None,
        mode: None,
        save: false,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print!("{USAGE}");
                process::exit(0);
            }
            "--save" => args.save = true,
            "--mode" => {
                let value = iter.next().context("--mode requires a value")?;
                args.mode = Some(value.parse()?);
            }
            flag if flag.starts_with('-') => bail!("unknown flag `{flag}`\n{USAGE}"),
            accent => {
                if args.accent.is_some() {
                    bail!("more than one accent given\n{USAGE}");
                }
                if Rgb::parse_hex(accent).is_none() {
                    bail!("`{accent}` is not a 6-digit hex color");
                }
                args.accent = Some(accent.to_owned());
            }
        }
    }

    Ok(args)
}

fn system_is_dark() -> bool {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => true,
        Ok(dark_light::Mode::Light) => false,
        Ok(dark_light::Mode::Unspecified) => {
            debug!("system scheme unspecified; assuming light");
            false
        }
        Err(e) => {
            debug!("system scheme detection failed: {e}; assuming light");
            false
        }
    }
}

/// A filled background block for a hex color, or nothing if it doesn't
/// parse (the degrade-gracefully path can carry arbitrary strings).
fn swatch(hex: &str) -> String {
    // Tints are 8-digit hex-with-alpha; preview the base color.
    let base = if hex.len() == 9 { &hex[..7] } else { hex };
    Rgb::parse_hex(base).map_or_else(String::new, |rgb| {
        format!("\x1b[48;2;{};{};{}m      \x1b[0m", rgb.r, rgb.g, rgb.b)
    })
}

fn print_row(label: &str, hex: &str) {
    println!("  {label:<14} {} {hex}", swatch(hex));
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;

    let config_dir = dirs::config_dir()
        .context("no config directory on this platform")?
        .join("folio");
    let store = SettingsStore::new(config_dir);
    let mut settings = store.load();

    if let Some(accent) = args.accent {
        settings.primary_color = accent;
    }
    if let Some(mode) = args.mode {
        settings.theme_mode = mode;
    }

    let theme = Theme::from_settings(&settings, system_is_dark());

    if args.save {
        store.save(&theme.settings())?;
    }

    let v = theme.variants();
    println!(
        "folio palette — accent {} — mode {} ({})",
        theme.accent(),
        theme.mode(),
        if theme.is_dark() { "dark" } else { "light" }
    );
    println!();
    print_row("primary", &v.primary);
    print_row("light", &v.primary_light);
    print_row("tint", &v.primary_light_rgba);
    print_row("dark", &v.primary_dark);
    print_row("text", &v.primary_text);
    println!();
    for role in FeatureRole::ALL {
        print_row(role.display_name(), v.icons.get(*role));
    }
    println!();
    println!(
        "  text contrast  {:.2}:1",
        contrast_ratio(&v.primary, &v.primary_text)
    );

    Ok(())
}
