// SPDX-License-Identifier: MPL-2.0
//! Pan and tap recognition from raw pointer events.
//!
//! A press that stays within [`TAP_SLOP`] of its origin until release is a
//! tap. Leaving the slop turns it into a pan, reported with the cumulative
//! translation since the press.

use crate::config::defaults::TAP_SLOP;
use crate::domain::card::Displacement;
use iced::{Point, Vector};

/// Pointer input captured by the card canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button or finger down inside the card.
    Pressed {
        /// Window position, used to measure translation.
        position: Point,
        /// Position relative to the card bounds.
        local: Point,
        /// Card width at the time of the press.
        width: f32,
    },
    Moved(Point),
    Released,
    /// Pointer left the window or the touch was lost.
    Cancelled,
}

/// Recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    PanBegan,
    PanChanged(Vector),
    PanEnded(Vector),
    PanCancelled(Vector),
    Tap { x: f32, width: f32 },
}

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Point,
    local: Point,
    width: f32,
    translation: Vector,
    panning: bool,
}

/// Turns pointer events into [`Gesture`]s.
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    press: Option<Press>,
}

impl GestureRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn is_tracking(&self) -> bool {
        self.press.is_some()
    }

    /// Feeds one pointer event and returns the gestures it completes.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<Gesture> {
        match event {
            PointerEvent::Pressed {
                position,
                local,
                width,
            } => {
                // A second press without release supersedes the first one
                let gestures = self.cancel();
                self.press = Some(Press {
                    origin: position,
                    local,
                    width,
                    translation: Vector::ZERO,
                    panning: false,
                });
                gestures
            }
            PointerEvent::Moved(position) => {
                let Some(press) = self.press.as_mut() else {
                    return Vec::new();
                };
                press.translation = position - press.origin;

                if press.panning {
                    vec![Gesture::PanChanged(press.translation)]
                } else if exceeds_slop(press.translation) {
                    press.panning = true;
                    vec![Gesture::PanBegan, Gesture::PanChanged(press.translation)]
                } else {
                    Vec::new()
                }
            }
            PointerEvent::Released => match self.press.take() {
                Some(press) if press.panning => vec![Gesture::PanEnded(press.translation)],
                Some(press) => vec![Gesture::Tap {
                    x: press.local.x,
                    width: press.width,
                }],
                None => Vec::new(),
            },
            PointerEvent::Cancelled => self.cancel(),
        }
    }

    fn cancel(&mut self) -> Vec<Gesture> {
        match self.press.take() {
            Some(press) if press.panning => vec![Gesture::PanCancelled(press.translation)],
            _ => Vec::new(),
        }
    }
}

fn exceeds_slop(translation: Vector) -> bool {
    Displacement::new(translation.x, translation.y).length() > TAP_SLOP
}
