// SPDX-License-Identifier: MPL-2.0
use crate::codec::Codec;
use crate::error::TranslationError;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// File holding the source-language catalog inside [`Asset`].
const SOURCE_CATALOG: &str = "en.ftl";

/// Extension tried before the bare stem when looking for a translation.
const TRANSLATION_EXTENSION: &str = ".ftl";

/// A translation resource loaded from disk.
pub struct Translator {
    bundle: FluentBundle<FluentResource>,
    path: PathBuf,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("path", &self.path)
            .field("language", &self.language().to_string())
            .finish()
    }
}

impl Translator {
    /// Loads the translation addressed by `stem` for `language`.
    ///
    /// `<stem>.ftl` is tried first, then `<stem>` itself. The bytes are
    /// decoded with `codec`.
    pub fn load(stem: &Path, language: &str, codec: Codec) -> Result<Self, TranslationError> {
        let path = candidate_paths(stem)
            .into_iter()
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| TranslationError::NotFound(stem.to_path_buf()))?;

        let bytes = fs::read(&path).map_err(|e| TranslationError::Unreadable {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let source = codec.decode(&bytes).map_err(|e| TranslationError::Encoding {
            path: path.clone(),
            reason: format!("{codec}: {e}"),
        })?;

        Self::from_source(path, source, language)
    }

    /// Builds a translator from Fluent source text.
    pub fn from_source(
        path: PathBuf,
        source: &str,
        language: &str,
    ) -> Result<Self, TranslationError> {
        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            TranslationError::Malformed {
                path: path.clone(),
                reason: errors
                    .first()
                    .map(|e| format!("{:?}", e.kind))
                    .unwrap_or_else(|| "parse error".to_string()),
            }
        })?;
        if resource.entries().next().is_none() {
            return Err(TranslationError::Malformed {
                path,
                reason: "no entries".to_string(),
            });
        }

        let locale = language.parse::<LanguageIdentifier>().unwrap_or_default();
        let mut bundle = new_bundle(locale);
        if let Err(errors) = bundle.add_resource(resource) {
            return Err(TranslationError::Malformed {
                path,
                reason: format!("{} conflicting entries", errors.len()),
            });
        }

        Ok(Self { bundle, path })
    }

    /// File the translator was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn language(&self) -> &LanguageIdentifier {
        &self.bundle.locales[0]
    }

    fn translate(&self, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        format_message(&self.bundle, key, args)
    }
}

/// Human-readable text lookup for the whole application.
pub struct I18n {
    source: FluentBundle<FluentResource>,
    translator: Option<Translator>,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("translator", &self.translator)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Codec::default())
    }
}

impl I18n {
    /// Creates a lookup backed only by the embedded source-language catalog,
    /// decoded with `codec`.
    pub fn new(codec: Codec) -> Self {
        Self {
            source: load_source_catalog(codec),
            translator: None,
        }
    }

    /// Makes `translator` the active translation provider.
    pub fn install_translator(&mut self, translator: Translator) {
        self.translator = Some(translator);
    }

    pub fn translator(&self) -> Option<&Translator> {
        self.translator.as_ref()
    }

    pub fn has_translator(&self) -> bool {
        self.translator.is_some()
    }

    /// Translates `key`.
    pub fn tr(&self, key: &str) -> String {
        self.lookup(key, None)
    }

    /// Translates `key`, substituting `args` into the message placeables.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.lookup(key, Some(&fluent_args))
    }

    fn lookup(&self, key: &str, args: Option<&FluentArgs>) -> String {
        self.translator
            .as_ref()
            .and_then(|translator| translator.translate(key, args))
            .or_else(|| format_message(&self.source, key, args))
            .unwrap_or_else(|| key.to_string())
    }
}

fn new_bundle(locale: LanguageIdentifier) -> FluentBundle<FluentResource> {
    let mut bundle = FluentBundle::new(vec![locale]);
    bundle.set_use_isolating(false);
    bundle
}

fn candidate_paths(stem: &Path) -> [PathBuf; 2] {
    let mut with_extension = OsString::from(stem.as_os_str());
    with_extension.push(TRANSLATION_EXTENSION);
    [PathBuf::from(with_extension), stem.to_path_buf()]
}

fn format_message(
    bundle: &FluentBundle<FluentResource>,
    key: &str,
    args: Option<&FluentArgs>,
) -> Option<String> {
    let message = bundle.get_message(key)?;
    let pattern = message.value()?;
    let mut errors = vec![];
    let value = bundle.format_pattern(pattern, args, &mut errors);
    errors.is_empty().then(|| value.into_owned())
}

fn load_source_catalog(codec: Codec) -> FluentBundle<FluentResource> {
    let locale: LanguageIdentifier = "en".parse().unwrap_or_default();
    let mut bundle = new_bundle(locale);

    let Some(content) = Asset::get(SOURCE_CATALOG) else {
        log::error!("Embedded catalog {SOURCE_CATALOG} is missing");
        return bundle;
    };
    let text = match codec.decode(content.data.as_ref()) {
        Ok(text) => text.to_string(),
        Err(e) => {
            log::error!("Embedded catalog is not valid {codec}: {e}");
            return bundle;
        }
    };
    match FluentResource::try_new(text) {
        Ok(resource) => {
            if bundle.add_resource(resource).is_err() {
                log::error!("Embedded catalog has conflicting entries");
            }
        }
        Err((_, errors)) => log::error!("Embedded catalog has {} parse errors", errors.len()),
    }
    bundle
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    const FRENCH: &str = "quit-button = Quitter\nlanguage-label = Langue : { $lang }\n";

    #[test]
    fn source_catalog_translates_known_keys() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("quit-button"), "Quit");
        assert!(!i18n.has_translator());
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-message"), "no-such-message");
    }

    #[test]
    fn installed_translator_takes_precedence() {
        let mut i18n = I18n::default();
        let translator =
            Translator::from_source(PathBuf::from("svgcleanerfr"), FRENCH, "fr").unwrap();
        i18n.install_translator(translator);

        assert_eq!(i18n.tr("quit-button"), "Quitter");
        assert_eq!(
            i18n.tr_with_args("language-label", &[("lang", "fr")]),
            "Langue : fr"
        );
    }

    #[test]
    fn missing_translation_falls_back_to_source_text() {
        let mut i18n = I18n::default();
        let translator =
            Translator::from_source(PathBuf::from("svgcleanerfr"), FRENCH, "fr").unwrap();
        i18n.install_translator(translator);

        assert_eq!(
            i18n.tr("main-hint"),
            "Clean up your SVG files from unnecessary data."
        );
    }

    #[test]
    fn load_prefers_ftl_extension() {
        let dir = tempdir().expect("failed to create temp dir");
        let stem = dir.path().join("svgcleanerfr");
        fs::write(dir.path().join("svgcleanerfr.ftl"), FRENCH).unwrap();
        fs::write(&stem, "quit-button = Sortir\n").unwrap();

        let translator = Translator::load(&stem, "fr", Codec::Utf8).unwrap();
        assert_eq!(translator.path(), dir.path().join("svgcleanerfr.ftl"));
        assert_eq!(translator.language().to_string(), "fr");
    }

    #[test]
    fn load_accepts_bare_stem() {
        let dir = tempdir().expect("failed to create temp dir");
        let stem = dir.path().join("svgcleanerde");
        fs::write(&stem, "quit-button = Beenden\n").unwrap();

        let translator = Translator::load(&stem, "de", Codec::Utf8).unwrap();
        assert_eq!(translator.path(), stem.as_path());
        assert_eq!(translator.translate("quit-button", None).as_deref(), Some("Beenden"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempdir().expect("failed to create temp dir");
        let stem = dir.path().join("svgcleanerxx");
        match Translator::load(&stem, "xx", Codec::Utf8) {
            Err(TranslationError::NotFound(path)) => assert_eq!(path, stem),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn load_rejects_invalid_utf8() {
        let dir = tempdir().expect("failed to create temp dir");
        let stem = dir.path().join("svgcleanerfr");
        let mut file = fs::File::create(&stem).unwrap();
        file.write_all(b"quit-button = Quitt\xFFr\n").unwrap();

        assert!(matches!(
            Translator::load(&stem, "fr", Codec::Utf8),
            Err(TranslationError::Encoding { .. })
        ));
    }

    #[test]
    fn load_rejects_malformed_fluent() {
        let dir = tempdir().expect("failed to create temp dir");
        let stem = dir.path().join("svgcleanerfr");
        fs::write(&stem, "this is = = not fluent {\n").unwrap();

        assert!(matches!(
            Translator::load(&stem, "fr", Codec::Utf8),
            Err(TranslationError::Malformed { .. })
        ));
    }

    #[test]
    fn empty_resource_is_malformed() {
        let result = Translator::from_source(PathBuf::from("svgcleanerfr"), "", "fr");
        assert!(matches!(result, Err(TranslationError::Malformed { .. })));
    }

    #[test]
    fn duplicate_messages_are_malformed() {
        let source = "quit-button = Quitter\nquit-button = Sortir\n";
        let result = Translator::from_source(PathBuf::from("svgcleanerfr"), source, "fr");
        assert!(matches!(result, Err(TranslationError::Malformed { .. })));
    }

    #[test]
    fn unparsable_language_uses_undetermined_locale() {
        let translator =
            Translator::from_source(PathBuf::from("svgcleaner"), FRENCH, "not a tag!").unwrap();
        assert_eq!(translator.language(), &LanguageIdentifier::default());
    }
}
