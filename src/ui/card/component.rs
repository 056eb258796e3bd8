// SPDX-License-Identifier: MPL-2.0
//! Card component encapsulating swipe, carousel and gesture state.

use crate::domain::card::{CardTransform, SwipeSettings};
use crate::error::ImageError;
use crate::media::ImageData;
use crate::presentation::{DisplayText, SharedModel};
use crate::ui::card::canvas::{OverlayLayer, PhotoLayer};
use crate::ui::card::gesture::{Gesture, GestureRecognizer, PointerEvent};
use crate::ui::card::indicator::Indicator;
use crate::ui::card::subcomponents::{carousel, swipe};
use crate::ui::state::AnimationGroup;
use iced::widget::{Canvas, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Messages emitted by the card surface.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw pointer input captured by the canvas.
    Pointer(PointerEvent),
    /// Animation frame.
    Tick(Instant),
    /// Result of an image load requested through [`Effect::LoadImage`].
    ImageLoaded {
        url: String,
        result: Result<ImageData, ImageError>,
    },
}

/// Side effects the host should perform after handling a card message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Load the image at this reference and answer with
    /// [`Message::ImageLoaded`].
    LoadImage(String),
    /// The card was dismissed and must be removed from display.
    Detached,
}

impl Effect {
    fn rank(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::LoadImage(_) => 1,
            Self::Detached => 2,
        }
    }

    /// Keeps the more important of two effects.
    fn merge(self, other: Self) -> Self {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }
}

impl From<swipe::Effect> for Effect {
    fn from(effect: swipe::Effect) -> Self {
        match effect {
            swipe::Effect::None => Self::None,
            swipe::Effect::Detached => Self::Detached,
        }
    }
}

impl From<carousel::Effect> for Effect {
    fn from(effect: carousel::Effect) -> Self {
        match effect {
            carousel::Effect::None => Self::None,
            carousel::Effect::LoadImage(url) => Self::LoadImage(url),
        }
    }
}

/// Complete card state.
#[derive(Debug)]
pub struct State {
    swipe: swipe::State,
    carousel: carousel::State,
    gestures: GestureRecognizer,
    display_text: DisplayText,
}

impl State {
    /// Creates an unbound card. Cards of one stack share `group`.
    #[must_use]
    pub fn new(settings: SwipeSettings, group: AnimationGroup) -> Self {
        Self {
            swipe: swipe::State::new(settings, group),
            carousel: carousel::State::new(),
            gestures: GestureRecognizer::new(),
            display_text: DisplayText::default(),
        }
    }

    /// Binds the card to its presentation model.
    pub fn bind(&mut self, model: SharedModel) -> Effect {
        match model.try_borrow() {
            Ok(model) => self.display_text = model.display_text().clone(),
            Err(_) => tracing::warn!("presentation model busy, display text not read"),
        }
        self.carousel.bind(model).into()
    }

    /// Handle a card message.
    pub fn handle(&mut self, message: Message) -> Effect {
        self.handle_at(message, Instant::now())
    }

    /// Handle a card message with an explicit clock.
    pub fn handle_at(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::Pointer(event) => {
                if self.swipe.is_detached() {
                    return Effect::None;
                }
                self.gestures
                    .handle(event)
                    .into_iter()
                    .fold(Effect::None, |effect, gesture| {
                        effect.merge(self.apply_gesture(gesture, now))
                    })
            }
            Message::Tick(now) => self.swipe.handle(swipe::Message::Tick(now)).into(),
            Message::ImageLoaded { url, result } => self
                .carousel
                .handle(carousel::Message::ImageLoaded { url, result })
                .into(),
        }
    }

    fn apply_gesture(&mut self, gesture: Gesture, now: Instant) -> Effect {
        match gesture {
            Gesture::PanBegan => self.swipe.handle(swipe::Message::Begin).into(),
            Gesture::PanChanged(translation) => {
                self.swipe.handle(swipe::Message::Move(translation)).into()
            }
            Gesture::PanEnded(translation) => self
                .swipe
                .handle(swipe::Message::End { translation, now })
                .into(),
            Gesture::PanCancelled(translation) => {
                self.swipe.handle(swipe::Message::Move(translation));
                self.swipe.handle(swipe::Message::Cancel { now }).into()
            }
            Gesture::Tap { x, width } => self
                .carousel
                .handle(carousel::Message::Tap { x, width })
                .into(),
        }
    }

    /// Completes an animation cancelled by a gesture on another card.
    pub fn settle_cancelled(&mut self) -> Effect {
        self.swipe.settle_cancelled().into()
    }

    /// Renders the card over the whole deck area. Only an interactive card
    /// captures pointer input.
    pub fn view(&self, interactive: bool) -> Element<'_, Message> {
        let transform = self.transform();
        let photo = Canvas::new(PhotoLayer {
            transform,
            image: self.carousel.image(),
        })
        .width(Length::Fill)
        .height(Length::Fill);
        let overlay = Canvas::new(OverlayLayer {
            transform,
            indicator: self.carousel.indicator(),
            text: self.display_text.clone(),
            interactive: interactive && !self.swipe.is_detached(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        Stack::new()
            .push(photo)
            .push(overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    #[must_use]
    pub fn transform(&self) -> CardTransform {
        self.swipe.transform()
    }

    #[must_use]
    pub fn phase(&self) -> &swipe::Phase {
        self.swipe.phase()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.swipe.is_animating()
    }

    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.swipe.is_detached()
    }

    #[must_use]
    pub fn indicator(&self) -> Indicator {
        self.carousel.indicator()
    }

    #[must_use]
    pub fn image_url(&self) -> Option<String> {
        self.carousel.image_url()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.carousel.image().is_some()
    }

    #[must_use]
    pub fn display_text(&self) -> &DisplayText {
        &self.display_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{share, CardViewModel, TextAlignment};
    use iced::Point;
    use std::time::Duration;

    fn card_with(images: usize) -> (State, SharedModel) {
        let images = (0..images).map(|i| format!("photos/{i}.png")).collect();
        let model = share(CardViewModel::new(
            images,
            DisplayText::new("Kelly 23\nArchitect", TextAlignment::Left),
        ));
        let mut card = State::new(SwipeSettings::default(), AnimationGroup::new());
        card.bind(std::rc::Rc::clone(&model));
        (card, model)
    }

    fn pointer(card: &mut State, event: PointerEvent, now: Instant) -> Effect {
        card.handle_at(Message::Pointer(event), now)
    }

    fn press(x: f32) -> PointerEvent {
        PointerEvent::Pressed {
            position: Point::new(x, 200.0),
            local: Point::new(x, 200.0),
            width: 300.0,
        }
    }

    fn swipe(card: &mut State, dx: f32, now: Instant) -> Effect {
        pointer(card, press(150.0), now);
        pointer(card, PointerEvent::Moved(Point::new(150.0 + dx, 200.0)), now);
        pointer(card, PointerEvent::Released, now)
    }

    #[test]
    fn bind_reads_display_text() {
        let (card, _model) = card_with(2);
        assert_eq!(card.display_text().content, "Kelly 23\nArchitect");
    }

    #[test]
    fn tap_navigates_and_requests_image() {
        let (mut card, model) = card_with(3);
        let now = Instant::now();

        pointer(&mut card, press(225.0), now);
        let effect = pointer(&mut card, PointerEvent::Released, now);

        assert_eq!(effect, Effect::LoadImage("photos/1.png".into()));
        assert_eq!(model.borrow().current_index(), 1);
    }

    #[test]
    fn swipe_past_threshold_detaches() {
        let (mut card, _model) = card_with(1);
        let start = Instant::now();

        assert_eq!(swipe(&mut card, 150.0, start), Effect::None);
        assert!(matches!(card.phase(), swipe::Phase::Dismissing(_)));

        let effect = card.handle_at(
            Message::Tick(start + Duration::from_millis(1000)),
            start + Duration::from_millis(1000),
        );
        assert_eq!(effect, Effect::Detached);
        assert!(card.is_detached());
    }

    #[test]
    fn short_swipe_snaps_back() {
        let (mut card, _model) = card_with(1);
        let start = Instant::now();
        swipe(&mut card, 40.0, start);

        card.handle_at(Message::Tick(start + Duration::from_secs(1)), start);
        assert!(card.transform().is_identity());
        assert!(!card.is_detached());
    }

    #[test]
    fn detached_card_ignores_taps() {
        let (mut card, model) = card_with(3);
        let start = Instant::now();
        swipe(&mut card, -200.0, start);
        card.handle_at(Message::Tick(start + Duration::from_secs(1)), start);

        pointer(&mut card, press(250.0), start);
        pointer(&mut card, PointerEvent::Released, start);
        assert_eq!(model.borrow().current_index(), 0);
    }

    #[test]
    fn cancelled_pan_is_resolved() {
        let (mut card, _model) = card_with(1);
        let now = Instant::now();
        pointer(&mut card, press(100.0), now);
        pointer(&mut card, PointerEvent::Moved(Point::new(30.0, 200.0)), now);
        pointer(&mut card, PointerEvent::Cancelled, now);

        assert!(matches!(card.phase(), swipe::Phase::SnappingBack(_)));
    }

    #[test]
    fn effect_merge_prefers_detached() {
        assert_eq!(
            Effect::LoadImage("a".into()).merge(Effect::Detached),
            Effect::Detached
        );
        assert_eq!(
            Effect::Detached.merge(Effect::LoadImage("a".into())),
            Effect::Detached
        );
        assert_eq!(
            Effect::None.merge(Effect::LoadImage("a".into())),
            Effect::LoadImage("a".into())
        );
    }
}
