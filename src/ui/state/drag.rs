// SPDX-License-Identifier: MPL-2.0
//! Drag session state
//!
//! Holds the cumulative displacement of one drag gesture. A session exists
//! only between pan-begin and pan-end (or cancel).

use crate::domain::card::Displacement;
use iced::Vector;

/// Ephemeral state of an active drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSession {
    /// Displacement accumulated since the gesture started.
    delta: Displacement,
}

impl DragSession {
    /// Starts a drag with no displacement.
    #[must_use]
    pub fn start() -> Self {
        Self::default()
    }

    /// Records the cumulative translation reported by the gesture.
    pub fn update(&mut self, translation: Vector) -> Displacement {
        self.delta = Displacement::new(translation.x, translation.y);
        self.delta
    }

    /// Displacement since the gesture started.
    #[must_use]
    pub fn delta(&self) -> Displacement {
        self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_no_displacement() {
        assert_eq!(DragSession::start().delta(), Displacement::ZERO);
    }

    #[test]
    fn update_replaces_displacement() {
        let mut session = DragSession::start();
        session.update(Vector::new(10.0, 5.0));
        let delta = session.update(Vector::new(-30.0, 12.0));

        assert_eq!(delta, Displacement::new(-30.0, 12.0));
        assert_eq!(session.delta(), delta);
    }
}
