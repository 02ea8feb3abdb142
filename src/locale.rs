// SPDX-License-Identifier: MPL-2.0
//! Locale name detection and translation file naming.
//!
//! Locale names use the underscore form (`de_DE`). Tags reported as BCP-47
//! (`de-DE`) or with a POSIX codeset/modifier (`de_DE.UTF-8@euro`) are
//! normalized to it. Only the language part, everything before the first
//! underscore, selects the translation file.

use std::path::{Path, PathBuf};

/// Base name shared by every installed translation file.
pub const TRANSLATION_BASENAME: &str = "svgcleaner";

/// Name reported when the host does not expose a locale.
pub const POSIX_LOCALE: &str = "C";

/// Returns the host locale in underscore form, or [`POSIX_LOCALE`].
pub fn system_locale_name() -> String {
    sys_locale::get_locale()
        .map(|tag| normalize_locale_name(&tag))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| POSIX_LOCALE.to_string())
}

/// Converts a locale tag to the underscore form, dropping codeset and modifier.
pub fn normalize_locale_name(tag: &str) -> String {
    let tag = tag.trim();
    let end = tag.find(['.', '@']).unwrap_or(tag.len());
    tag[..end].replace('-', "_")
}

/// Strips everything from the first underscore onward.
///
/// `pt_BR` becomes `pt`; a name without an underscore is returned unchanged.
pub fn language_suffix(name: &str) -> &str {
    match name.find('_') {
        Some(index) => &name[..index],
        None => name,
    }
}

/// Path of the translation file for `lang`, without extension.
///
/// The language is appended directly to the base name, so `de` in
/// `/usr/share/svgcleaner/translations` yields
/// `/usr/share/svgcleaner/translations/svgcleanerde`.
pub fn translation_file_stem(dir: &Path, lang: &str) -> PathBuf {
    dir.join(format!("{TRANSLATION_BASENAME}{lang}"))
}

/// Picks the locale name used for translation lookup.
///
/// Precedence: explicit CLI value, then the configured language, then the
/// host locale. Blank values are skipped. The winner is normalized.
pub fn resolve_locale_name<F>(cli_lang: Option<&str>, config_lang: Option<&str>, system: F) -> String
where
    F: FnOnce() -> String,
{
    // 1. CLI flag, 2. config file
    for candidate in [cli_lang, config_lang].into_iter().flatten() {
        let name = normalize_locale_name(candidate);
        if !name.is_empty() {
            return name;
        }
    }

    // 3. OS locale
    normalize_locale_name(&system())
}
