// SPDX-License-Identifier: MPL-2.0
//! Drag state machine: follow the pointer, then dismiss or snap back.
//!
//! ```text
//! Idle ──Begin──▶ Dragging ──End/Cancel──▶ Dismissing ──done──▶ Detached
//!  ▲                                  └──▶ SnappingBack ──done──┐
//!  └────────────────────────────────────────────────────────────┘
//! ```

use crate::domain::card::{resolve_release, CardTransform, SwipeOutcome, SwipeSettings};
use crate::ui::state::{AnimationGroup, DragSession, SpringCurve, SwipeAnimation};
use iced::Vector;
use std::time::Instant;

/// Current phase of the card.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Dragging(DragSession),
    Dismissing(SwipeAnimation),
    SnappingBack(SwipeAnimation),
    /// Dismissed; the card ignores every further input.
    Detached,
}

/// Swipe sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    settings: SwipeSettings,
    group: AnimationGroup,
    phase: Phase,
    transform: CardTransform,
}

/// Messages for the swipe sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Pan began: cancel running animations and start a drag.
    Begin,
    /// Cumulative translation since the pan began.
    Move(Vector),
    /// Pan ended with its final translation.
    End { translation: Vector, now: Instant },
    /// Pan cancelled; resolved like a release with the last translation.
    Cancel { now: Instant },
    /// Animation frame.
    Tick(Instant),
}

/// Effects produced by swipe operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The dismissal finished; the host should remove the card.
    Detached,
}

impl State {
    #[must_use]
    pub fn new(settings: SwipeSettings, group: AnimationGroup) -> Self {
        Self {
            settings,
            group,
            phase: Phase::Idle,
            transform: CardTransform::IDENTITY,
        }
    }

    /// Handle a swipe message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        if self.is_detached() {
            return Effect::None;
        }

        match msg {
            Message::Begin => {
                self.group.cancel_all();
                if self.settle_cancelled() == Effect::Detached {
                    return Effect::Detached;
                }
                self.phase = Phase::Dragging(DragSession::start());
                Effect::None
            }
            Message::Move(translation) => {
                if let Phase::Dragging(session) = &mut self.phase {
                    let delta = session.update(translation);
                    self.transform = self.settings.calculator().transform_for(delta);
                }
                Effect::None
            }
            Message::End { translation, now } => {
                if let Phase::Dragging(session) = &mut self.phase {
                    let delta = session.update(translation);
                    self.transform = self.settings.calculator().transform_for(delta);
                    self.release(now);
                }
                Effect::None
            }
            Message::Cancel { now } => {
                if matches!(self.phase, Phase::Dragging(_)) {
                    self.release(now);
                }
                Effect::None
            }
            Message::Tick(now) => self.advance(now),
        }
    }

    /// Completes the running animation if another card cancelled it.
    pub fn settle_cancelled(&mut self) -> Effect {
        let cancelled = self
            .animation()
            .filter(|animation| self.group.is_cancelled(animation.epoch()))
            .map(|animation| animation.outcome);
        match cancelled {
            Some(outcome) => self.complete(outcome),
            None => Effect::None,
        }
    }

    fn release(&mut self, now: Instant) {
        let Phase::Dragging(session) = &self.phase else {
            return;
        };
        let delta = session.delta();
        let outcome = resolve_release(delta.dx, self.settings.threshold);
        let target = outcome.target(&self.transform, self.settings.dismiss_distance());

        tracing::debug!(dx = delta.dx, dy = delta.dy, ?outcome, "card released");

        let animation = SwipeAnimation::new(
            outcome,
            self.transform,
            target,
            now,
            self.settings.duration.as_duration(),
            SpringCurve::new(self.settings.damping),
            self.group.epoch(),
        );
        self.phase = match outcome {
            SwipeOutcome::Dismiss(_) => Phase::Dismissing(animation),
            SwipeOutcome::SnapBack => Phase::SnappingBack(animation),
        };
    }

    fn advance(&mut self, now: Instant) -> Effect {
        let Some(animation) = self.animation().cloned() else {
            return Effect::None;
        };
        if self.group.is_cancelled(animation.epoch()) || animation.is_finished(now) {
            return self.complete(animation.outcome);
        }
        self.transform = animation.transform_at(now);
        Effect::None
    }

    fn complete(&mut self, outcome: SwipeOutcome) -> Effect {
        self.transform = CardTransform::IDENTITY;
        match outcome {
            SwipeOutcome::Dismiss(direction) => {
                tracing::debug!(?direction, "card detached");
                self.phase = Phase::Detached;
                Effect::Detached
            }
            SwipeOutcome::SnapBack => {
                self.phase = Phase::Idle;
                Effect::None
            }
        }
    }

    fn animation(&self) -> Option<&SwipeAnimation> {
        match &self.phase {
            Phase::Dismissing(animation) | Phase::SnappingBack(animation) => Some(animation),
            _ => None,
        }
    }

    /// Transform to render. A cancelled animation renders as completed.
    #[must_use]
    pub fn transform(&self) -> CardTransform {
        match self.animation() {
            Some(animation) if self.group.is_cancelled(animation.epoch()) => {
                CardTransform::IDENTITY
            }
            _ => self.transform,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation().is_some()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    #[must_use]
    pub fn is_detached(&self) -> bool {
        matches!(self.phase, Phase::Detached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::{Displacement, SwipeDirection};
    use std::time::Duration;

    fn state() -> State {
        State::new(SwipeSettings::default(), AnimationGroup::new())
    }

    fn drag(state: &mut State, dx: f32, now: Instant) -> Effect {
        state.handle(Message::Begin);
        state.handle(Message::Move(Vector::new(dx / 2.0, 0.0)));
        state.handle(Message::End {
            translation: Vector::new(dx, 0.0),
            now,
        })
    }

    #[test]
    fn move_applies_rotation_and_translation() {
        let mut state = state();
        state.handle(Message::Begin);
        state.handle(Message::Move(Vector::new(60.0, 8.0)));

        let transform = state.transform();
        assert!((transform.rotation_degrees - 3.0).abs() < 1e-5);
        assert_eq!(transform.translation, Displacement::new(60.0, 8.0));
        assert!(state.is_dragging());
    }

    #[test]
    fn move_outside_drag_is_ignored() {
        let mut state = state();
        state.handle(Message::Move(Vector::new(60.0, 0.0)));
        assert!(state.transform().is_identity());
        assert_eq!(state.phase(), &Phase::Idle);
    }

    #[test]
    fn release_past_threshold_dismisses_in_drag_direction() {
        let mut state = state();
        let start = Instant::now();
        drag(&mut state, -150.0, start);

        let Phase::Dismissing(animation) = state.phase() else {
            panic!("expected dismissal, got {:?}", state.phase());
        };
        assert_eq!(animation.outcome, SwipeOutcome::Dismiss(SwipeDirection::Left));
        let (_, release_y) = animation.from.apply(0.0, 0.0);
        let (end_x, end_y) = animation.to.apply(0.0, 0.0);
        assert!((end_x + 600.0).abs() < 1e-3);
        assert!((end_y - release_y).abs() < 1e-3);
        assert!((animation.to.rotation_degrees + 7.5).abs() < 1e-4);
    }

    #[test]
    fn release_at_threshold_snaps_back() {
        let mut state = state();
        drag(&mut state, 100.0, Instant::now());
        assert!(matches!(state.phase(), Phase::SnappingBack(_)));
    }

    #[test]
    fn dismissal_completes_with_detached_effect() {
        let mut state = state();
        let start = Instant::now();
        drag(&mut state, 150.0, start);

        let midway = state.handle(Message::Tick(start + Duration::from_millis(200)));
        assert_eq!(midway, Effect::None);
        assert!(state.transform().translation.dx > 0.0);

        let done = state.handle(Message::Tick(start + Duration::from_millis(1000)));
        assert_eq!(done, Effect::Detached);
        assert!(state.is_detached());
        assert!(state.transform().is_identity());
    }

    #[test]
    fn detached_card_ignores_input() {
        let mut state = state();
        let start = Instant::now();
        drag(&mut state, 300.0, start);
        state.handle(Message::Tick(start + Duration::from_secs(1)));

        state.handle(Message::Begin);
        state.handle(Message::Move(Vector::new(20.0, 0.0)));
        assert!(state.is_detached());
        assert!(state.transform().is_identity());
    }

    #[test]
    fn snap_back_returns_to_identity_and_idle() {
        let mut state = state();
        let start = Instant::now();
        drag(&mut state, 40.0, start);

        let effect = state.handle(Message::Tick(start + Duration::from_millis(1000)));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), &Phase::Idle);
        assert!(state.transform().is_identity());
    }

    #[test]
    fn repeated_snap_backs_are_idempotent() {
        let mut state = state();
        let mut now = Instant::now();
        for dx in [40.0, -90.0, 0.0, 99.5, -100.0] {
            drag(&mut state, dx, now);
            now += Duration::from_millis(1000);
            state.handle(Message::Tick(now));
            assert_eq!(state.phase(), &Phase::Idle);
            assert_eq!(state.transform(), CardTransform::IDENTITY);
        }
    }

    #[test]
    fn cancel_resolves_with_last_translation() {
        let mut state = state();
        state.handle(Message::Begin);
        state.handle(Message::Move(Vector::new(180.0, 0.0)));
        state.handle(Message::Cancel {
            now: Instant::now(),
        });
        assert!(matches!(
            state.phase(),
            Phase::Dismissing(SwipeAnimation {
                outcome: SwipeOutcome::Dismiss(SwipeDirection::Right),
                ..
            })
        ));
    }

    #[test]
    fn new_drag_completes_own_snap_back() {
        let mut state = state();
        drag(&mut state, 50.0, Instant::now());
        assert!(state.is_animating());

        state.handle(Message::Begin);
        assert!(state.is_dragging());
        assert!(state.transform().is_identity());
    }

    #[test]
    fn new_drag_on_sibling_cancels_running_dismissal() {
        let group = AnimationGroup::new();
        let mut leaving = State::new(SwipeSettings::default(), group.clone());
        let mut next = State::new(SwipeSettings::default(), group);
        drag(&mut leaving, 200.0, Instant::now());

        next.handle(Message::Begin);
        assert!(leaving.transform().is_identity());
        assert_eq!(leaving.settle_cancelled(), Effect::Detached);
        assert!(leaving.is_detached());
        assert!(next.is_dragging());
    }

    #[test]
    fn cancelled_animation_completes_on_next_tick() {
        let group = AnimationGroup::new();
        let mut state = State::new(SwipeSettings::default(), group.clone());
        let start = Instant::now();
        drag(&mut state, 30.0, start);

        group.cancel_all();
        let effect = state.handle(Message::Tick(start + Duration::from_millis(10)));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), &Phase::Idle);
    }
}
