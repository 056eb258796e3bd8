// SPDX-License-Identifier: MPL-2.0
//! Single-slot photo change subscription.
//!
//! A model keeps at most one observer. Subscribing hands back an
//! [`ObserverHandle`]; subscribing again replaces the observer and the old
//! handle stops being active, so a stale owner can detect it lost the slot
//! and cannot remove its successor.

use std::fmt;

/// Notification payload: the photo now shown and its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoChange {
    pub image_url: String,
    pub index: usize,
}

/// Callback invoked on every photo change.
pub type PhotoObserver = Box<dyn FnMut(&PhotoChange)>;

/// Proof of a subscription. Not `Clone`: dispose it through
/// [`ObserverSlot::unsubscribe`].
#[derive(Debug, PartialEq, Eq)]
pub struct ObserverHandle(u64);

impl ObserverHandle {
    /// Subscription id, unique per slot.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Holds the active observer of a model.
#[derive(Default)]
pub struct ObserverSlot {
    next_id: u64,
    active: Option<(u64, PhotoObserver)>,
}

impl fmt::Debug for ObserverSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverSlot")
            .field("next_id", &self.next_id)
            .field("active", &self.active.as_ref().map(|(id, _)| *id))
            .finish()
    }
}

impl ObserverSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `observer`, discarding the previous one.
    pub fn subscribe(&mut self, observer: PhotoObserver) -> ObserverHandle {
        let id = self.next_id;
        self.next_id += 1;
        if let Some((previous, _)) = self.active.replace((id, observer)) {
            tracing::debug!(previous, id, "photo observer replaced");
        }
        ObserverHandle(id)
    }

    /// Removes the observer when `handle` is the active subscription.
    pub fn unsubscribe(&mut self, handle: &ObserverHandle) -> bool {
        if self.is_active(handle) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Returns true if `handle` still owns the slot.
    #[must_use]
    pub fn is_active(&self, handle: &ObserverHandle) -> bool {
        self.active.as_ref().is_some_and(|(id, _)| *id == handle.0)
    }

    #[cfg(test)]
    fn has_observer(&self) -> bool {
        self.active.is_some()
    }

    /// Delivers `change` to the active observer, if any.
    pub fn notify(&mut self, change: &PhotoChange) {
        if let Some((_, observer)) = self.active.as_mut() {
            observer(change);
        }
    }
}
