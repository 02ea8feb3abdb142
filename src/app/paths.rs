// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Translations directory:
//! 1. **CLI argument** (`--translations-dir`)
//! 2. **Environment variable** (`SVGCLEANER_TRANSLATIONS_DIR`)
//! 3. **Config file** (`[translations] dir`)
//! 4. **Install prefix** - `<prefix>/share/svgcleaner/translations`
//!
//! Config directory:
//! 1. **Explicit override** - the `--config-dir` CLI argument, or a test path
//! 2. **Environment variable** (`SVGCLEANER_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate
//!
//! Overrides are passed in explicitly; nothing here keeps process-wide state.

use std::path::{Path, PathBuf};

/// Application name used for directory naming.
const APP_NAME: &str = "svgcleaner";

/// Installation prefix, fixed at compile time.
pub const INSTALL_PREFIX: &str = match option_env!("SVGCLEANER_PREFIX") {
    Some(prefix) => prefix,
    None => "/usr",
};

/// Settings file name inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Environment variable to override the translations directory.
pub const ENV_TRANSLATIONS_DIR: &str = "SVGCLEANER_TRANSLATIONS_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SVGCLEANER_CONFIG_DIR";

/// Returns `<prefix>/share/svgcleaner/translations`.
pub fn default_translations_dir() -> PathBuf {
    Path::new(INSTALL_PREFIX)
        .join("share")
        .join(APP_NAME)
        .join("translations")
}

/// Returns the directory holding installed translations.
///
/// # Arguments
///
/// * `cli_dir` - value of `--translations-dir`, highest priority
/// * `config_dir` - `[translations] dir` from the settings file
pub fn translations_dir(cli_dir: Option<PathBuf>, config_dir: Option<&Path>) -> PathBuf {
    // Priority 1: CLI argument
    if let Some(path) = cli_dir {
        return path;
    }

    // Priority 2: Environment variable
    if let Some(path) = env_dir(ENV_TRANSLATIONS_DIR) {
        return path;
    }

    // Priority 3: Config file
    if let Some(path) = config_dir {
        return path.to_path_buf();
    }

    // Priority 4: Install prefix
    default_translations_dir()
}

/// Returns the application config directory path.
///
/// Returns `None` if the platform config directory cannot be determined
/// and no override is given.
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the settings file path, see [`config_dir_with_override`].
pub fn config_file_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(override_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Serializes tests that touch the path environment variables.
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Reads a directory from `var`, ignoring unset and empty values.
fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_translations_dir_is_under_prefix() {
        let dir = default_translations_dir();
        assert!(dir.starts_with(INSTALL_PREFIX));
        assert!(dir.ends_with("share/svgcleaner/translations"));
    }

    #[test]
    fn cli_translations_dir_wins() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_TRANSLATIONS_DIR, "/env/translations");

        let result = translations_dir(
            Some(PathBuf::from("/cli/translations")),
            Some(Path::new("/config/translations")),
        );
        assert_eq!(result, PathBuf::from("/cli/translations"));

        std::env::remove_var(ENV_TRANSLATIONS_DIR);
    }

    #[test]
    fn env_translations_dir_beats_config() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_TRANSLATIONS_DIR, "/env/translations");

        let result = translations_dir(None, Some(Path::new("/config/translations")));
        assert_eq!(result, PathBuf::from("/env/translations"));

        std::env::remove_var(ENV_TRANSLATIONS_DIR);
    }

    #[test]
    fn config_translations_dir_beats_prefix() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_TRANSLATIONS_DIR);

        let result = translations_dir(None, Some(Path::new("/config/translations")));
        assert_eq!(result, PathBuf::from("/config/translations"));
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_TRANSLATIONS_DIR, "");

        assert_eq!(translations_dir(None, None), default_translations_dir());

        std::env::remove_var(ENV_TRANSLATIONS_DIR);
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let override_path = PathBuf::from("/custom/config/path");
        let result = config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        let result = config_file_with_override(None);
        assert_eq!(result, Some(PathBuf::from("/test/config/dir/settings.toml")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = config_dir_with_override(None) {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
        // If dirs::config_dir() returns None (rare), the test passes silently
    }
}
