// SPDX-License-Identifier: MPL-2.0
//! Pan-to-transform math for a dragged card.
//!
//! The transform is a pure function of the cumulative pointer displacement:
//! the card rotates proportionally to the horizontal displacement and is then
//! translated by the displacement inside the rotated frame.

use super::newtypes::RotationDivisor;

/// Cumulative pointer displacement since the gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Displacement {
    pub dx: f32,
    pub dy: f32,
}

impl Displacement {
    /// No displacement.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    #[must_use]
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length of the displacement.
    #[must_use]
    pub fn length(self) -> f32 {
        self.dx.hypot(self.dy)
    }
}

/// Rotation followed by translation, applied around the card center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardTransform {
    /// Clockwise rotation in degrees (screen coordinates, y grows down).
    pub rotation_degrees: f32,
    /// Translation expressed in the rotated frame.
    pub translation: Displacement,
}

impl CardTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        rotation_degrees: 0.0,
        translation: Displacement::ZERO,
    };

    /// Returns true when the transform leaves the card untouched.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.rotation_degrees == 0.0 && self.translation == Displacement::ZERO
    }

    /// Rotation in radians.
    #[must_use]
    pub fn rotation_radians(&self) -> f32 {
        self.rotation_degrees.to_radians()
    }

    /// Maps a point given relative to the card center.
    ///
    /// The translation is applied first in the card's own frame, then the
    /// result is rotated, matching `rotate(angle).translate(dx, dy)`.
    #[must_use]
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        let (sin, cos) = self.rotation_radians().sin_cos();
        let tx = x + self.translation.dx;
        let ty = y + self.translation.dy;
        (tx * cos - ty * sin, tx * sin + ty * cos)
    }

    /// Interpolates between two transforms.
    ///
    /// `fraction` is not clamped so spring curves may overshoot the target.
    #[must_use]
    pub fn lerp(&self, target: &Self, fraction: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * fraction;
        Self {
            rotation_degrees: mix(self.rotation_degrees, target.rotation_degrees),
            translation: Displacement {
                dx: mix(self.translation.dx, target.translation.dx),
                dy: mix(self.translation.dy, target.translation.dy),
            },
        }
    }
}

/// Stateless pan-to-transform calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformCalculator {
    divisor: RotationDivisor,
}

impl TransformCalculator {
    #[must_use]
    pub fn new(divisor: RotationDivisor) -> Self {
        Self { divisor }
    }

    /// Transform for a cumulative displacement.
    #[must_use]
    pub fn transform_for(&self, displacement: Displacement) -> CardTransform {
        CardTransform {
            rotation_degrees: self.divisor.degrees_for(displacement.dx),
            translation: displacement,
        }
    }
}
