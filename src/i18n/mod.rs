// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Source-language (English) catalog embedded in the binary
//! - At most one installed [`fluent::Translator`], loaded from disk at startup
//! - Lookups go through the translator first, then the embedded catalog,
//!   then fall back to the message key itself

pub mod fluent;

pub use fluent::{I18n, Translator};
