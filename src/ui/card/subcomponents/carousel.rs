// SPDX-License-Identifier: MPL-2.0
//! Tap-driven photo carousel bound to a presentation model.
//!
//! Taps call into the model; the model answers through the observer
//! subscription installed by [`State::bind`]. The observer only holds a weak
//! reference to the displayed photo, so a dropped card never receives
//! notifications.

use crate::error::ImageError;
use crate::media::ImageData;
use crate::presentation::{ObserverHandle, PhotoChange, SharedModel};
use crate::ui::card::indicator::Indicator;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Photo currently displayed by the card.
#[derive(Debug, Default)]
struct PhotoView {
    image_url: Option<String>,
    indicator: Indicator,
    image: Option<ImageData>,
    pending_load: Option<String>,
}

impl PhotoView {
    fn show(&mut self, change: &PhotoChange) {
        self.indicator.activate(change.index);
        if self.image_url.as_deref() != Some(change.image_url.as_str()) {
            self.image_url = Some(change.image_url.clone());
            self.image = None;
            self.pending_load = Some(change.image_url.clone());
        }
    }
}

/// Carousel sub-component state.
#[derive(Debug, Default)]
pub struct State {
    model: Option<SharedModel>,
    subscription: Option<ObserverHandle>,
    view: Rc<RefCell<PhotoView>>,
}

/// Messages for the carousel sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Tap at `x` on a card `width` wide.
    Tap { x: f32, width: f32 },
    /// Image load finished.
    ImageLoaded {
        url: String,
        result: Result<ImageData, ImageError>,
    },
}

/// Effects produced by the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The displayed photo changed; the host should load it.
    LoadImage(String),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to `model` and shows its current photo.
    ///
    /// Any previous binding is released first. The indicator is rebuilt with
    /// one segment per image.
    pub fn bind(&mut self, model: SharedModel) -> Effect {
        self.unbind();

        let weak: Weak<RefCell<PhotoView>> = Rc::downgrade(&self.view);
        let Ok(mut borrowed) = model.try_borrow_mut() else {
            tracing::warn!("presentation model busy, card left unbound");
            return Effect::None;
        };

        let handle = borrowed.subscribe(Box::new(move |change: &PhotoChange| {
            let Some(view) = weak.upgrade() else {
                return;
            };
            if let Ok(mut view) = view.try_borrow_mut() {
                view.show(change);
            };
        }));

        {
            let mut view = self.view.borrow_mut();
            *view = PhotoView::default();
            view.indicator = Indicator::for_images(borrowed.images().len());
            if let Some(url) = borrowed.current_image() {
                view.show(&PhotoChange {
                    image_url: url.to_string(),
                    index: borrowed.current_index(),
                });
            }
        }
        drop(borrowed);

        self.subscription = Some(handle);
        self.model = Some(model);
        self.take_pending_load()
    }

    /// Releases the model subscription.
    pub fn unbind(&mut self) {
        let (Some(model), Some(handle)) = (self.model.take(), self.subscription.take()) else {
            return;
        };
        let Ok(mut model) = model.try_borrow_mut() else {
            tracing::warn!(id = handle.id(), "presentation model busy on unbind");
            return;
        };
        if !model.unsubscribe(&handle) {
            tracing::debug!(id = handle.id(), "card subscription already replaced");
        }
    }

    /// Handle a carousel message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Tap { x, width } => self.tap(x, width),
            Message::ImageLoaded { url, result } => {
                self.image_loaded(&url, result);
                Effect::None
            }
        }
    }

    fn tap(&mut self, x: f32, width: f32) -> Effect {
        if !(width.is_finite() && width > 0.0) {
            return Effect::None;
        }
        let Some(model) = self.model.as_ref() else {
            return Effect::None;
        };
        let Ok(mut model) = model.try_borrow_mut() else {
            tracing::warn!("presentation model busy, tap ignored");
            return Effect::None;
        };

        if x >= width / 2.0 {
            model.advance();
        } else {
            model.go_back();
        }
        drop(model);

        self.take_pending_load()
    }

    fn image_loaded(&mut self, url: &str, result: Result<ImageData, ImageError>) {
        let mut view = self.view.borrow_mut();
        if view.image_url.as_deref() != Some(url) {
            tracing::debug!(url, "discarding image for a photo no longer shown");
            return;
        }
        match result {
            Ok(image) => view.image = Some(image),
            Err(err) => tracing::warn!(url, %err, "failed to load card image"),
        }
    }

    fn take_pending_load(&mut self) -> Effect {
        match self.view.borrow_mut().pending_load.take() {
            Some(url) => Effect::LoadImage(url),
            None => Effect::None,
        }
    }

    /// Reference of the displayed photo.
    #[must_use]
    pub fn image_url(&self) -> Option<String> {
        self.view.borrow().image_url.clone()
    }

    /// Decoded image of the displayed photo, once loaded.
    #[must_use]
    pub fn image(&self) -> Option<ImageData> {
        self.view.borrow().image.clone()
    }

    #[must_use]
    pub fn indicator(&self) -> Indicator {
        self.view.borrow().indicator.clone()
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.unbind();
    }
}
