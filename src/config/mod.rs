// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from an optional
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Interface language override
//! - `[translations]` - Directory holding installed translation files
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` or set `SVGCLEANER_CONFIG_DIR`
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use svgcleaner::codec::TextCodecs;
//! use svgcleaner::config;
//!
//! let codecs = TextCodecs::utf8();
//! let (config, _warning) = config::load(&codecs, None);
//! println!("{:?}", config.general.language);
//! ```

use crate::app::paths;
use crate::codec::{Codec, TextCodecs};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// UI language, e.g. "fr" or "pt_BR". Overrides the system locale.
    #[serde(default)]
    pub language: Option<String>,
}

/// Where translation files are looked up.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TranslationsConfig {
    /// Directory replacing `<prefix>/share/svgcleaner/translations`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub translations: TranslationsConfig,
}

/// Loads the configuration, never failing.
///
/// A missing file yields defaults silently. A broken file yields defaults
/// plus a warning describing the problem.
pub fn load(codecs: &TextCodecs, config_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = paths::config_file_with_override(config_dir) {
        if path.exists() {
            return match load_from_path(&path, codecs.locale) {
                Ok(config) => (config, None),
                Err(e) => (
                    Config::default(),
                    Some(format!("Ignoring {}: {}", path.display(), e)),
                ),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path, decoding it with `codec`.
pub fn load_from_path(path: &Path, codec: Codec) -> Result<Config> {
    let bytes = fs::read(path)?;
    let content = codec
        .decode(&bytes)
        .map_err(|e| Error::Config(format!("not valid {codec}: {e}")))?;
    let config: Config = toml::from_str(content)?;
    Ok(config)
}
