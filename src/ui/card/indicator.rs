// SPDX-License-Identifier: MPL-2.0
//! Photo position indicator: one bar per image along the top of the card.

use crate::ui::design_tokens::{sizing, spacing};
use iced::{Point, Rectangle, Size};

/// Active flags of the indicator segments.
///
/// At most one segment is active. Activating an index outside the sequence
/// leaves every segment inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indicator {
    segments: Vec<bool>,
}

impl Indicator {
    /// Builds `count` segments with the first one active.
    #[must_use]
    pub fn for_images(count: usize) -> Self {
        let mut indicator = Self {
            segments: vec![false; count],
        };
        indicator.activate(0);
        indicator
    }

    /// Marks `index` as the only active segment.
    pub fn activate(&mut self, index: usize) {
        self.segments.fill(false);
        if let Some(segment) = self.segments.get_mut(index) {
            *segment = true;
        }
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.segments.iter().position(|active| *active)
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.segments.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Frames of the segments for a card `card_width` wide, in card
    /// coordinates. Bars share the width left after insets and gaps.
    #[must_use]
    pub fn segment_frames(&self, card_width: f32) -> Vec<Rectangle> {
        let count = self.segments.len();
        if count == 0 {
            return Vec::new();
        }

        let gaps = sizing::SEGMENT_GAP * (count - 1) as f32;
        let available = (card_width - 2.0 * spacing::XS - gaps).max(0.0);
        let width = available / count as f32;

        (0..count)
            .map(|i| {
                let x = spacing::XS + i as f32 * (width + sizing::SEGMENT_GAP);
                Rectangle::new(
                    Point::new(x, spacing::XS),
                    Size::new(width, sizing::SEGMENT_HEIGHT),
                )
            })
            .collect()
    }
}
