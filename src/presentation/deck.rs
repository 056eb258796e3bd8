// SPDX-License-Identifier: MPL-2.0
//! Deck files: the list of cards shown by the demo host.
//!
//! ```toml
//! [[cards]]
//! images = ["https://example.com/a.jpg", "https://example.com/b.jpg"]
//! text = "Kelly 23\nArchitect"
//!
//! [[cards]]
//! images = ["photos/ad.png"]
//! text = "Slide Out\nAdvertisement"
//! alignment = "center"
//! ```

use super::{CardViewModel, DisplayText, TextAlignment};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Deck bundled with the binary, used when no deck file is configured.
const SAMPLE_DECK: &str = include_str!("../../assets/decks/sample.toml");

#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(default)]
    cards: Vec<CardEntry>,
}

#[derive(Debug, Deserialize)]
struct CardEntry {
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    text: String,
    #[serde(default)]
    alignment: TextAlignment,
}

impl From<CardEntry> for CardViewModel {
    fn from(entry: CardEntry) -> Self {
        CardViewModel::new(entry.images, DisplayText::new(entry.text, entry.alignment))
    }
}

/// Parses a deck from TOML text. Cards are returned bottom-first, so the
/// first card of the file ends up on top of the stack.
pub fn parse_deck(content: &str) -> Result<Vec<CardViewModel>> {
    let deck: DeckFile = toml::from_str(content).map_err(|err| Error::Deck(err.to_string()))?;
    Ok(deck.cards.into_iter().rev().map(CardViewModel::from).collect())
}

/// Loads a deck file from disk.
pub fn load_deck(path: &Path) -> Result<Vec<CardViewModel>> {
    let content = fs::read_to_string(path)?;
    parse_deck(&content)
}

/// The bundled sample deck.
pub fn sample_deck() -> Result<Vec<CardViewModel>> {
    parse_deck(SAMPLE_DECK)
}
