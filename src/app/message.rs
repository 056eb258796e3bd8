// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::card;
use std::path::PathBuf;
use std::time::Instant;

/// Stable identifier of a card in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(pub u64);

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Message for one card of the deck.
    Card { id: CardId, message: card::Message },
    /// Animation frame while any card animates.
    Tick(Instant),
    /// Rebuild the deck from its source.
    Reload,
    /// Switch the interface to the next available language.
    NextLanguage,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SWIPE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional deck file; takes precedence over `[deck] path`.
    pub deck_path: Option<PathBuf>,
}
