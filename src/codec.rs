// SPDX-License-Identifier: MPL-2.0
//! Text codec configuration chosen once at startup.
//!
//! Three conversion paths exist in the application:
//!
//! - `c_strings` - built-in text shipped inside the binary (the embedded
//!   source-language catalog)
//! - `locale` - locale-dependent text read from the host, such as the
//!   settings file
//! - `tr` - translation resources installed on disk
//!
//! [`TextCodecs::utf8`] forces all three to UTF-8. The value is immutable and
//! handed by reference to whatever needs to turn bytes into text, so nothing
//! can load a configuration file or a translation before it exists.

use std::fmt;
use std::str::Utf8Error;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A byte-to-text codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Codec {
    #[default]
    Utf8,
}

impl Codec {
    /// Canonical codec name, as reported in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Codec::Utf8 => "UTF-8",
        }
    }

    /// Decodes `bytes` into text, dropping a leading byte-order mark.
    pub fn decode(self, bytes: &[u8]) -> Result<&str, Utf8Error> {
        match self {
            Codec::Utf8 => std::str::from_utf8(bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Codec assignment for every text conversion path of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCodecs {
    pub c_strings: Codec,
    pub locale: Codec,
    pub tr: Codec,
}

impl TextCodecs {
    /// All conversion paths set to UTF-8.
    pub fn utf8() -> Self {
        Self {
            c_strings: Codec::Utf8,
            locale: Codec::Utf8,
            tr: Codec::Utf8,
        }
    }

    /// Whether every conversion path uses `codec`.
    pub fn all(&self, codec: Codec) -> bool {
        self.c_strings == codec && self.locale == codec && self.tr == codec
    }
}
