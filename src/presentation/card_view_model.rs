// SPDX-License-Identifier: MPL-2.0
//! Concrete presentation model for one profile card.

use super::observer::{ObserverHandle, ObserverSlot, PhotoChange, PhotoObserver};
use super::{DisplayText, PresentationModel};

/// Images, text and photo position of one card.
///
/// Navigation clamps at both ends of the sequence. Every navigation call on
/// a non-empty model notifies the observer, including clamped calls that
/// leave the index unchanged.
#[derive(Debug, Default)]
pub struct CardViewModel {
    images: Vec<String>,
    display_text: DisplayText,
    index: usize,
    observers: ObserverSlot,
}

impl CardViewModel {
    #[must_use]
    pub fn new(images: Vec<String>, display_text: DisplayText) -> Self {
        Self {
            images,
            display_text,
            index: 0,
            observers: ObserverSlot::new(),
        }
    }

    fn set_index(&mut self, index: usize) {
        let Some(image_url) = self.images.get(index).cloned() else {
            return;
        };
        self.index = index;
        self.observers.notify(&PhotoChange { image_url, index });
    }
}

impl PresentationModel for CardViewModel {
    fn images(&self) -> &[String] {
        &self.images
    }

    fn display_text(&self) -> &DisplayText {
        &self.display_text
    }

    fn current_index(&self) -> usize {
        self.index
    }

    fn advance(&mut self) {
        if self.images.is_empty() {
            return;
        }
        let next = (self.index + 1).min(self.images.len() - 1);
        self.set_index(next);
    }

    fn go_back(&mut self) {
        self.set_index(self.index.saturating_sub(1));
    }

    fn subscribe(&mut self, observer: PhotoObserver) -> ObserverHandle {
        self.observers.subscribe(observer)
    }

    fn unsubscribe(&mut self, handle: &ObserverHandle) -> bool {
        self.observers.unsubscribe(handle)
    }
}
