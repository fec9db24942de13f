// SPDX-License-Identifier: PMPL-1.0-or-later

//! map-localize — Map label localization.
//!
//! Switches the label language of a map style. Symbol layers drawing from
//! streets vector sources have their `text-field` expressions rewritten to
//! read the localized name field, taking into account which fields each
//! streets schema generation (v6, v7, v8) actually carries.
//!
//! PIPELINE:
//! 1. **Locale**: resolves a platform locale (or an explicit language) to a
//!    [`MapLocale`](locale::MapLocale).
//! 2. **Classify**: decides which style sources are streets basemaps and of
//!    which generation.
//! 3. **Expression**: rewrites each candidate label expression.
//!
//! The [`LocalizationPlugin`](plugin::LocalizationPlugin) ties these
//! together over any [`StyleHandle`](style::StyleHandle) and replays the
//! active selection whenever a new style is loaded.

pub mod classify;
pub mod config;
pub mod error;
pub mod expression;
pub mod locale;
pub mod plugin;
pub mod report;
pub mod style;
pub mod types;

pub use error::LocalizationError;
pub use plugin::LocalizationPlugin;
