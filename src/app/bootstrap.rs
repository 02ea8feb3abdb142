// SPDX-License-Identifier: MPL-2.0
//! One-time startup sequence.
//!
//! Steps, in order:
//!
//! 1. launcher flags are parsed and the remaining arguments kept (`main.rs`)
//! 2. [`TextCodecs::utf8`] fixes every text conversion path
//! 3. the settings file is read with the locale codec
//! 4. the locale name is resolved and truncated to its language part
//! 5. `<translations dir>/svgcleaner<lang>` is loaded and, on success,
//!    installed into [`I18n`]; on failure [`TRANSLATION_LOAD_FAILED`] goes to
//!    the debug log and the source-language text stays active
//! 6. the resulting [`AppContext`] is handed to an [`EventLoop`], which shows
//!    the main window and blocks until quit
//!
//! Everything built here is immutable once the event loop starts.

use super::paths;
use super::Flags;
use crate::codec::TextCodecs;
use crate::config::{self, Config};
use crate::i18n::{I18n, Translator};
use crate::locale;

/// Debug message emitted when no translation could be installed.
pub const TRANSLATION_LOAD_FAILED: &str = "Can't load translation.";

/// Process exit status reported by the event loop.
pub type ExitStatus = u8;

/// Runtime that owns the main window and its event loop.
pub trait EventLoop {
    /// Makes the main window visible and dispatches events until the
    /// application quits. The returned status becomes the process exit code.
    fn exec(self, context: AppContext) -> ExitStatus;
}

/// Immutable state produced by startup and read by the main window.
#[derive(Debug)]
pub struct AppContext {
    codecs: TextCodecs,
    config: Config,
    locale_name: String,
    language: String,
    i18n: I18n,
}

impl AppContext {
    pub fn codecs(&self) -> &TextCodecs {
        &self.codecs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Full locale name, e.g. `fr_CA`.
    pub fn locale_name(&self) -> &str {
        &self.locale_name
    }

    /// Language part of the locale name, e.g. `fr`.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }
}

/// Outcome of the startup sequence, before the event loop runs.
#[derive(Debug)]
pub struct Startup {
    pub context: AppContext,
    /// Diagnostics emitted while starting, in order.
    pub diagnostics: Vec<String>,
}

impl Startup {
    /// Runs startup using the host locale.
    pub fn prepare(flags: Flags) -> Self {
        Self::prepare_with_locale(flags, locale::system_locale_name)
    }

    /// Runs startup, asking `system_locale` for the host locale if neither the
    /// flags nor the settings file name a language.
    pub fn prepare_with_locale<F>(flags: Flags, system_locale: F) -> Self
    where
        F: FnOnce() -> String,
    {
        let mut diagnostics = Vec::new();

        let codecs = TextCodecs::utf8();

        let (config, config_warning) = config::load(&codecs, flags.config_dir);
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
            diagnostics.push(warning);
        }

        let locale_name = locale::resolve_locale_name(
            flags.lang.as_deref(),
            config.general.language.as_deref(),
            system_locale,
        );
        let language = locale::language_suffix(&locale_name).to_string();

        let mut i18n = I18n::new(codecs.c_strings);
        let dir = paths::translations_dir(flags.translations_dir, config.translations.dir.as_deref());
        let stem = locale::translation_file_stem(&dir, &language);
        match Translator::load(&stem, &language, codecs.tr) {
            Ok(translator) => {
                log::info!("Loaded translation {}", translator.path().display());
                i18n.install_translator(translator);
            }
            Err(err) => {
                log::debug!("{TRANSLATION_LOAD_FAILED}");
                log::trace!("{err}");
                diagnostics.push(TRANSLATION_LOAD_FAILED.to_string());
            }
        }

        Self {
            context: AppContext {
                codecs,
                config,
                locale_name,
                language,
                i18n,
            },
            diagnostics,
        }
    }

    /// Hands the context to `event_loop` and returns its exit status.
    pub fn run<E: EventLoop>(self, event_loop: E) -> ExitStatus {
        event_loop.exec(self.context)
    }
}
