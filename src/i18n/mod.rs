// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the demo host.
//!
//! Translations use the Fluent localization system. The locale is resolved
//! from the CLI, then the config file, then the OS, and falls back to
//! `en-US`.

pub mod fluent;
