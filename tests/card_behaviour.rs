// SPDX-License-Identifier: MPL-2.0
//! End-to-end behaviour of the card: pointer input in, phases and effects out.

use iced::Point;
use iced_swipe::domain::card::{
    resolve_release, SwipeDirection, SwipeOutcome, SwipeSettings, SwipeThreshold,
};
use iced_swipe::presentation::{
    share, CardViewModel, DisplayText, ObserverHandle, ObserverSlot, PhotoChange, PhotoObserver,
    PresentationModel, SharedModel, TextAlignment,
};
use iced_swipe::ui::card::{self, Effect, Message, Phase, PointerEvent};
use iced_swipe::ui::state::AnimationGroup;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

const WIDTH: f32 = 400.0;

fn images(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("https://photos.test/{i}.jpg"))
        .collect()
}

fn bound_card(model: SharedModel) -> card::State {
    let mut state = card::State::new(SwipeSettings::default(), AnimationGroup::new());
    state.bind(model);
    state
}

fn pointer(state: &mut card::State, event: PointerEvent, now: Instant) -> Effect {
    state.handle_at(Message::Pointer(event), now)
}

fn press(x: f32) -> PointerEvent {
    PointerEvent::Pressed {
        position: Point::new(x, 300.0),
        local: Point::new(x, 300.0),
        width: WIDTH,
    }
}

fn tap(state: &mut card::State, x: f32) -> Effect {
    let now = Instant::now();
    pointer(state, press(x), now);
    pointer(state, PointerEvent::Released, now)
}

fn drag_and_release(state: &mut card::State, dx: f32, now: Instant) {
    pointer(state, press(200.0), now);
    pointer(state, PointerEvent::Moved(Point::new(200.0 + dx / 2.0, 300.0)), now);
    pointer(state, PointerEvent::Moved(Point::new(200.0 + dx, 300.0)), now);
    pointer(state, PointerEvent::Released, now);
}

fn finish_animation(state: &mut card::State, start: Instant) -> Effect {
    let end = start + Duration::from_millis(1000);
    state.handle_at(Message::Tick(end), end)
}

/// Model that records navigation calls instead of moving on its own.
#[derive(Default)]
struct RecordingModel {
    images: Vec<String>,
    text: DisplayText,
    index: usize,
    calls: Vec<&'static str>,
    observers: ObserverSlot,
}

impl PresentationModel for RecordingModel {
    fn images(&self) -> &[String] {
        &self.images
    }

    fn display_text(&self) -> &DisplayText {
        &self.text
    }

    fn current_index(&self) -> usize {
        self.index
    }

    fn advance(&mut self) {
        self.calls.push("advance");
    }

    fn go_back(&mut self) {
        self.calls.push("go_back");
    }

    fn subscribe(&mut self, observer: PhotoObserver) -> ObserverHandle {
        self.observers.subscribe(observer)
    }

    fn unsubscribe(&mut self, handle: &ObserverHandle) -> bool {
        self.observers.unsubscribe(handle)
    }
}

impl RecordingModel {
    fn emit(&mut self, index: usize) {
        let image_url = self.images.get(index).cloned().unwrap_or_default();
        self.observers.notify(&PhotoChange { image_url, index });
    }
}

#[test]
fn three_image_scenario_bind_then_tap_right() {
    let images = images(3);
    let model = share(CardViewModel::new(
        images.clone(),
        DisplayText::new("Kelly 23\nArchitect", TextAlignment::Left),
    ));
    let mut state = card::State::new(SwipeSettings::default(), AnimationGroup::new());

    let effect = state.bind(Rc::clone(&model));
    assert_eq!(effect, Effect::LoadImage(images[0].clone()));
    assert_eq!(state.indicator().len(), 3);
    assert_eq!(state.indicator().active_index(), Some(0));
    assert_eq!(state.image_url().as_deref(), Some(images[0].as_str()));

    let effect = tap(&mut state, WIDTH * 0.75);

    assert_eq!(effect, Effect::LoadImage(images[1].clone()));
    assert_eq!(model.borrow().current_index(), 1);
    assert_eq!(state.image_url().as_deref(), Some(images[1].as_str()));
    let indicator = state.indicator();
    assert!(indicator.is_active(1));
    assert!(!indicator.is_active(0));
    assert!(!indicator.is_active(2));
}

#[test]
fn drag_past_threshold_dismisses_and_detaches() {
    let mut state = bound_card(share(CardViewModel::new(images(2), DisplayText::default())));
    let start = Instant::now();

    drag_and_release(&mut state, 150.0, start);
    assert!(matches!(state.phase(), Phase::Dismissing(_)));

    assert_eq!(finish_animation(&mut state, start), Effect::Detached);
    assert!(state.is_detached());
}

#[test]
fn short_drag_snaps_back_to_identity() {
    let mut state = bound_card(share(CardViewModel::new(images(2), DisplayText::default())));
    let start = Instant::now();

    drag_and_release(&mut state, 40.0, start);
    assert!(matches!(state.phase(), Phase::SnappingBack(_)));

    assert_eq!(finish_animation(&mut state, start), Effect::None);
    assert!(state.transform().is_identity());
    assert!(!state.is_detached());
}

#[test]
fn threshold_decides_for_every_displacement() {
    let threshold = SwipeThreshold::default();
    for step in -60..=60 {
        let dx = step as f32 * 5.0;
        let outcome = resolve_release(dx, threshold);
        if dx.abs() > threshold.value() {
            let expected = if dx < 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            };
            assert_eq!(outcome, SwipeOutcome::Dismiss(expected), "dx = {dx}");
        } else {
            assert_eq!(outcome, SwipeOutcome::SnapBack, "dx = {dx}");
        }
    }
}

#[test]
fn dismissal_direction_follows_drag_sign() {
    for dx in [-400.0, -101.0, 101.0, 400.0] {
        let mut state = bound_card(share(CardViewModel::new(images(1), DisplayText::default())));
        drag_and_release(&mut state, dx, Instant::now());

        let Phase::Dismissing(animation) = state.phase() else {
            panic!("dx = {dx} should dismiss");
        };
        let (_, release_y) = animation.from.apply(0.0, 0.0);
        let (end_x, end_y) = animation.to.apply(0.0, 0.0);
        assert_eq!(end_x.signum(), dx.signum(), "dx = {dx}");
        assert!((end_y - release_y).abs() < 1e-3, "dx = {dx}: card drifted to y = {end_y}");
    }
}

#[test]
fn repeated_small_drags_leave_no_residual_rotation() {
    let mut state = bound_card(share(CardViewModel::new(images(1), DisplayText::default())));
    let mut now = Instant::now();

    for dx in [30.0, -60.0, 95.0, -100.0, 100.0, 12.0] {
        drag_and_release(&mut state, dx, now);
        finish_animation(&mut state, now);
        now += Duration::from_secs(2);

        let transform = state.transform();
        assert_eq!(transform.rotation_degrees, 0.0, "dx = {dx}");
        assert!(transform.is_identity(), "dx = {dx}");
        assert!(matches!(state.phase(), Phase::Idle));
    }
}

#[test]
fn taps_call_advance_and_go_back_by_half() {
    let model = Rc::new(RefCell::new(RecordingModel {
        images: images(3),
        ..RecordingModel::default()
    }));
    let shared: SharedModel = model.clone();
    let mut state = bound_card(shared);

    tap(&mut state, WIDTH * 0.75);
    tap(&mut state, WIDTH * 0.25);
    tap(&mut state, WIDTH * 0.5);

    assert_eq!(model.borrow().calls, vec!["advance", "go_back", "advance"]);
}

#[test]
fn every_notification_leaves_exactly_one_active_segment() {
    let model = Rc::new(RefCell::new(RecordingModel {
        images: images(5),
        ..RecordingModel::default()
    }));
    let shared: SharedModel = model.clone();
    let state = bound_card(shared);

    for index in [3, 0, 4, 4, 1, 2, 0] {
        model.borrow_mut().emit(index);
        let indicator = state.indicator();
        let active: Vec<_> = (0..indicator.len())
            .filter(|i| indicator.is_active(*i))
            .collect();
        assert_eq!(active, vec![index]);
    }

    model.borrow_mut().emit(9);
    assert_eq!(state.indicator().active_index(), None);
}

#[test]
fn binding_builds_one_segment_per_image() {
    for count in 0..6 {
        let state = bound_card(share(CardViewModel::new(
            images(count),
            DisplayText::default(),
        )));
        let indicator = state.indicator();
        assert_eq!(indicator.len(), count);
        assert_eq!(indicator.active_index(), (count > 0).then_some(0));
    }
}

#[test]
fn empty_model_keeps_gestures_working() {
    let mut state = bound_card(share(CardViewModel::new(Vec::new(), DisplayText::default())));
    assert_eq!(state.image_url(), None);

    assert_eq!(tap(&mut state, WIDTH * 0.75), Effect::None);

    let start = Instant::now();
    drag_and_release(&mut state, -220.0, start);
    assert_eq!(finish_animation(&mut state, start), Effect::Detached);
}

#[test]
fn unparseable_image_does_not_block_gestures() {
    let model = share(CardViewModel::new(
        vec!["::not a url::".into(), "second".into()],
        DisplayText::default(),
    ));
    let mut state = bound_card(Rc::clone(&model));

    state.handle(Message::ImageLoaded {
        url: "::not a url::".into(),
        result: Err(iced_swipe::error::ImageError::InvalidSource(
            "::not a url::".into(),
        )),
    });
    assert!(!state.has_image());

    tap(&mut state, WIDTH * 0.9);
    assert_eq!(model.borrow().current_index(), 1);
}

#[test]
fn pan_on_next_card_settles_dismissing_sibling() {
    let group = AnimationGroup::new();
    let mut leaving = card::State::new(SwipeSettings::default(), group.clone());
    let mut next = card::State::new(SwipeSettings::default(), group);
    leaving.bind(share(CardViewModel::new(images(1), DisplayText::default())));
    next.bind(share(CardViewModel::new(images(1), DisplayText::default())));

    let now = Instant::now();
    drag_and_release(&mut leaving, 300.0, now);
    assert!(leaving.is_animating());

    pointer(&mut next, press(200.0), now);
    pointer(&mut next, PointerEvent::Moved(Point::new(260.0, 300.0)), now);

    assert_eq!(leaving.settle_cancelled(), Effect::Detached);
    assert!(leaving.is_detached());
    assert!(matches!(next.phase(), Phase::Dragging(_)));
}
