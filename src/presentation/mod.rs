// SPDX-License-Identifier: MPL-2.0
//! Presentation model consumed by the card.
//!
//! The card never owns this data. It reads images and display text, calls
//! [`PresentationModel::advance`] / [`PresentationModel::go_back`] on taps and
//! reacts to [`PhotoChange`] notifications delivered through a single
//! observer subscription.

pub mod card_view_model;
pub mod deck;
pub mod observer;

pub use card_view_model::CardViewModel;
pub use observer::{ObserverHandle, ObserverSlot, PhotoChange, PhotoObserver};

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Horizontal alignment of the card's display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Pre-formatted text shown at the bottom of the card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayText {
    pub content: String,
    pub alignment: TextAlignment,
}

impl DisplayText {
    #[must_use]
    pub fn new(content: impl Into<String>, alignment: TextAlignment) -> Self {
        Self {
            content: content.into(),
            alignment,
        }
    }
}

/// Data and navigation provider for one card.
pub trait PresentationModel {
    /// Ordered image references (URLs or paths).
    fn images(&self) -> &[String];

    /// Text overlaid on the card.
    fn display_text(&self) -> &DisplayText;

    /// Index of the photo currently shown. Always `< images().len()` when
    /// images are present.
    fn current_index(&self) -> usize;

    /// Moves to the next photo, notifying the observer.
    fn advance(&mut self);

    /// Moves to the previous photo, notifying the observer.
    fn go_back(&mut self);

    /// Registers the single observer, replacing any previous one.
    fn subscribe(&mut self, observer: PhotoObserver) -> ObserverHandle;

    /// Removes the observer if `handle` is still the active subscription.
    fn unsubscribe(&mut self, handle: &ObserverHandle) -> bool;

    /// Image at the current index, if any.
    fn current_image(&self) -> Option<&str> {
        self.images().get(self.current_index()).map(String::as_str)
    }
}

impl fmt::Debug for dyn PresentationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationModel")
            .field("images", &self.images().len())
            .field("current_index", &self.current_index())
            .finish_non_exhaustive()
    }
}

/// Shared, externally owned presentation model.
pub type SharedModel = Rc<RefCell<dyn PresentationModel>>;

/// Wraps a concrete model for sharing with a card.
pub fn share<M: PresentationModel + 'static>(model: M) -> SharedModel {
    Rc::new(RefCell::new(model))
}
