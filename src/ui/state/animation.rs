// SPDX-License-Identifier: MPL-2.0
//! Release animations and their shared cancellation controller.

use crate::domain::card::{CardTransform, SpringDamping, SwipeOutcome};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Decay applied over the whole animation: the spring envelope reaches
/// `e^-6` (about 0.25%) at the end of the duration.
const SETTLE_DECAY: f32 = 6.0;

/// Cancellation controller shared by every card of a stack.
///
/// Each animation records the group epoch it started in. `cancel_all` bumps
/// the epoch, which cancels every animation started before the call.
#[derive(Debug, Clone, Default)]
pub struct AnimationGroup {
    epoch: Rc<Cell<u64>>,
}

impl AnimationGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current epoch, stamped on animations when they start.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch.get()
    }

    /// Cancels every animation running in the group.
    pub fn cancel_all(&self) {
        self.epoch.set(self.epoch.get().wrapping_add(1));
    }

    /// Returns true if an animation started at `epoch` has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self, epoch: u64) -> bool {
        epoch != self.epoch.get()
    }
}

/// Damped spring easing over a fixed duration.
///
/// The curve may overshoot 1.0 when under-damped and is pinned to exactly 1.0
/// once the duration has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringCurve {
    damping: SpringDamping,
}

impl SpringCurve {
    #[must_use]
    pub fn new(damping: SpringDamping) -> Self {
        Self { damping }
    }

    /// Progress for a time fraction in `[0, 1]`.
    #[must_use]
    pub fn sample(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }

        let zeta = self.damping.value();
        let omega = SETTLE_DECAY / zeta;
        let envelope = (-zeta * omega * fraction).exp();
        let damped_sq = 1.0 - zeta * zeta;

        if damped_sq <= f32::EPSILON {
            // Critically damped
            return 1.0 - envelope * (1.0 + omega * fraction);
        }

        let damped = omega * damped_sq.sqrt();
        let (sin, cos) = (damped * fraction).sin_cos();
        1.0 - envelope * (cos + (zeta * omega / damped) * sin)
    }
}

/// A running dismiss or snap-back animation.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeAnimation {
    pub outcome: SwipeOutcome,
    pub from: CardTransform,
    pub to: CardTransform,
    started_at: Instant,
    duration: Duration,
    curve: SpringCurve,
    epoch: u64,
}

impl SwipeAnimation {
    #[must_use]
    pub fn new(
        outcome: SwipeOutcome,
        from: CardTransform,
        to: CardTransform,
        started_at: Instant,
        duration: Duration,
        curve: SpringCurve,
        epoch: u64,
    ) -> Self {
        Self {
            outcome,
            from,
            to,
            started_at,
            duration,
            curve,
            epoch,
        }
    }

    /// Elapsed fraction of the duration, clamped to `[0, 1]`.
    #[must_use]
    pub fn fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated transform at `now`.
    #[must_use]
    pub fn transform_at(&self, now: Instant) -> CardTransform {
        self.from.lerp(&self.to, self.curve.sample(self.fraction(now)))
    }

    /// Returns true once the duration has elapsed.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.fraction(now) >= 1.0
    }

    /// Epoch of the group when the animation started.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
