// SPDX-License-Identifier: MPL-2.0
//! `svgcleaner` is the desktop front-end of an SVG cleaning tool, built with
//! the Iced GUI framework.
//!
//! This crate covers application startup: text codec setup, locale
//! detection, loading of an installed Fluent translation, and running the
//! main window's event loop.

pub mod app;
pub mod codec;
pub mod config;
pub mod error;
pub mod i18n;
pub mod locale;
