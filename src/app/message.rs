// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use std::ffi::OsString;
use std::path::PathBuf;

/// Messages consumed by the main window's `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The Quit button was pressed.
    Quit,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`, `pt_BR`, `de-AT`).
    pub lang: Option<String>,
    /// Optional directory containing translation files.
    /// Takes precedence over `SVGCLEANER_TRANSLATIONS_DIR`.
    pub translations_dir: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SVGCLEANER_CONFIG_DIR`.
    pub config_dir: Option<PathBuf>,
    /// Remaining arguments, in order, not consumed by the launcher.
    pub args: Vec<OsString>,
}

impl Flags {
    /// Extracts the launcher flags, keeping every other argument in order.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self, pico_args::Error> {
        let lang = args.opt_value_from_str("--lang")?;
        let translations_dir = args.opt_value_from_str("--translations-dir")?;
        let config_dir = args.opt_value_from_str("--config-dir")?;

        Ok(Self {
            lang,
            translations_dir,
            config_dir,
            args: args.finish(),
        })
    }
}
