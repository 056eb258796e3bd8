// SPDX-License-Identifier: MPL-2.0
//! Canvas programs drawing the card and capturing its pointer input.
//!
//! The card is drawn in two layers. Canvas images always render above the
//! meshes of their own layer, so the photo lives in [`PhotoLayer`] and the
//! gradient, indicator and text in [`OverlayLayer`], stacked on top of it.
//! Both layers span the whole deck area and place the card with
//! [`card_frame`], which lets a dragged card move past its resting bounds.
//!
//! Uses f32 for canvas coordinates and u32 for pixel dimensions.
#![allow(clippy::cast_precision_loss)]

use crate::domain::card::CardTransform;
use crate::media::ImageData;
use crate::presentation::{DisplayText, TextAlignment};
use crate::ui::card::component::Message;
use crate::ui::card::gesture::PointerEvent;
use crate::ui::card::indicator::Indicator;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use iced::advanced::text::Alignment as TextAlign;
use iced::alignment::Vertical;
use iced::widget::canvas::{gradient, Frame, Geometry, Image, Path, Program, Text};
use iced::widget::Action;
use iced::{mouse, touch, Color, Event, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Card background and photo.
pub struct PhotoLayer {
    pub transform: CardTransform,
    pub image: Option<ImageData>,
}

/// Gradient, indicator and text drawn over the photo. Owns pointer input.
pub struct OverlayLayer {
    pub transform: CardTransform,
    pub indicator: Indicator,
    pub text: DisplayText,
    pub interactive: bool,
}

/// Press tracking local to the overlay widget.
#[derive(Debug, Default)]
pub struct Interaction {
    pressed: bool,
}

/// Largest rectangle with `aspect_ratio` centered in `area`.
fn contain_fit(aspect_ratio: f32, area: Size) -> Rectangle {
    if area.width <= 0.0 || area.height <= 0.0 || aspect_ratio <= 0.0 {
        return Rectangle::new(Point::ORIGIN, Size::ZERO);
    }

    if aspect_ratio > area.width / area.height {
        // Wider - fit to width
        let height = area.width / aspect_ratio;
        Rectangle::new(
            Point::new(0.0, (area.height - height) / 2.0),
            Size::new(area.width, height),
        )
    } else {
        // Taller - fit to height
        let width = area.height * aspect_ratio;
        Rectangle::new(
            Point::new((area.width - width) / 2.0, 0.0),
            Size::new(width, area.height),
        )
    }
}

/// Resting rectangle of the card inside a deck `area`: card-shaped, at most
/// [`sizing::CARD_MAX_WIDTH`] wide and centered.
#[must_use]
pub fn card_frame(area: Size) -> Rectangle {
    let fitted = contain_fit(sizing::CARD_ASPECT_RATIO, area);
    let width = fitted.width.min(sizing::CARD_MAX_WIDTH);
    let height = width / sizing::CARD_ASPECT_RATIO;
    Rectangle::new(
        Point::new((area.width - width) / 2.0, (area.height - height) / 2.0),
        Size::new(width, height),
    )
}

/// Runs `draw` with the origin at the card's top-left corner, rotated and
/// translated around the card center.
fn with_card_transform(
    frame: &mut Frame,
    card: Rectangle,
    transform: CardTransform,
    draw: impl FnOnce(&mut Frame),
) {
    let center = card.center();
    let translation = transform.translation;
    frame.with_save(|frame| {
        frame.translate(Vector::new(center.x, center.y));
        frame.rotate(transform.rotation_radians());
        frame.translate(Vector::new(translation.dx, translation.dy));
        frame.translate(Vector::new(-card.width / 2.0, -card.height / 2.0));
        draw(frame);
    });
}

fn card_shape(size: Size) -> Path {
    Path::rounded_rectangle(Point::ORIGIN, size, radius::CARD.into())
}

impl Program<Message> for PhotoLayer {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let card = card_frame(bounds.size());
        let background = if self.image.is_some() {
            palette::WHITE
        } else {
            palette::GRAY_100
        };
        with_card_transform(&mut frame, card, self.transform, |frame| {
            frame.fill(&card_shape(card.size()), background);
        });

        // Photos are pre-cropped to the card shape, so the card rectangle is
        // an exact fill. Image clipping is axis-aligned: the rounded clip only
        // matches the card while it rests.
        if let Some(image) = &self.image {
            if self.transform.is_identity() {
                let photo = Image {
                    border_radius: radius::CARD.into(),
                    ..Image::new(image.handle.clone())
                };
                frame.with_clip(card, |frame| frame.draw_image(card, photo));
            } else {
                with_card_transform(&mut frame, card, self.transform, |frame| {
                    frame.draw_image(
                        Rectangle::with_size(card.size()),
                        Image::new(image.handle.clone()),
                    );
                });
            }
        }

        vec![frame.into_geometry()]
    }
}

impl OverlayLayer {
    fn press(interaction: &mut Interaction, position: Point, card: Rectangle) -> Action<Message> {
        interaction.pressed = true;
        Action::publish(Message::Pointer(PointerEvent::Pressed {
            position,
            local: Point::new(position.x - card.x, position.y - card.y),
            width: card.width,
        }))
        .and_capture()
    }

    fn finish(interaction: &mut Interaction, event: PointerEvent) -> Option<Action<Message>> {
        if !interaction.pressed {
            return None;
        }
        interaction.pressed = false;
        Some(Action::publish(Message::Pointer(event)).and_capture())
    }

    /// Card rectangle in window coordinates.
    fn card_bounds(bounds: Rectangle) -> Rectangle {
        let card = card_frame(bounds.size());
        Rectangle::new(bounds.position() + Vector::new(card.x, card.y), card.size())
    }

    fn draw_overlay(&self, frame: &mut Frame, size: Size) {
        let gradient_top = size.height * (1.0 - sizing::GRADIENT_COVERAGE);
        let shade = gradient::Linear::new(Point::new(0.0, gradient_top), Point::new(0.0, size.height))
            .add_stop(
                0.0,
                Color {
                    a: opacity::TRANSPARENT,
                    ..palette::BLACK
                },
            )
            .add_stop(
                1.0,
                Color {
                    a: opacity::GRADIENT_BOTTOM,
                    ..palette::BLACK
                },
            );
        frame.fill(&card_shape(size), shade);

        let inactive = Color {
            a: opacity::SEGMENT_INACTIVE,
            ..palette::BLACK
        };
        for (index, segment) in self
            .indicator
            .segment_frames(size.width)
            .into_iter()
            .enumerate()
        {
            let color = if self.indicator.is_active(index) {
                palette::WHITE
            } else {
                inactive
            };
            let bar = Path::rounded_rectangle(
                segment.position(),
                segment.size(),
                radius::SEGMENT.into(),
            );
            frame.fill(&bar, color);
        }

        if !self.text.content.is_empty() {
            let (x, align_x) = match self.text.alignment {
                TextAlignment::Left => (spacing::MD, TextAlign::Left),
                TextAlignment::Center => (size.width / 2.0, TextAlign::Center),
                TextAlignment::Right => (size.width - spacing::MD, TextAlign::Right),
            };
            frame.fill_text(Text {
                content: self.text.content.clone(),
                position: Point::new(x, size.height - spacing::LG),
                color: palette::WHITE,
                size: typography::CARD_TEXT.into(),
                align_x,
                align_y: Vertical::Bottom,
                ..Text::default()
            });
        }
    }
}

impl Program<Message> for OverlayLayer {
    type State = Interaction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        if !self.interactive {
            interaction.pressed = false;
            return None;
        }
        let card = Self::card_bounds(bounds);

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_over(card)?;
                Some(Self::press(interaction, position, card))
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) if interaction.pressed => Some(
                Action::publish(Message::Pointer(PointerEvent::Moved(*position))).and_capture(),
            ),
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Self::finish(interaction, PointerEvent::Released)
            }
            // Cursor left the window
            Event::Mouse(mouse::Event::CursorLeft) => {
                Self::finish(interaction, PointerEvent::Cancelled)
            }
            Event::Touch(touch::Event::FingerPressed { position, .. })
                if card.contains(*position) =>
            {
                Some(Self::press(interaction, *position, card))
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) if interaction.pressed => {
                Some(
                    Action::publish(Message::Pointer(PointerEvent::Moved(*position)))
                        .and_capture(),
                )
            }
            Event::Touch(touch::Event::FingerLifted { .. }) => {
                Self::finish(interaction, PointerEvent::Released)
            }
            Event::Touch(touch::Event::FingerLost { .. }) => {
                Self::finish(interaction, PointerEvent::Cancelled)
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let card = card_frame(bounds.size());
        with_card_transform(&mut frame, card, self.transform, |frame| {
            self.draw_overlay(frame, card.size());
        });
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.pressed {
            mouse::Interaction::Grabbing
        } else if self.interactive && cursor.is_over(Self::card_bounds(bounds)) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contain_fit_letterboxes_wide_shapes() {
        let rect = contain_fit(2.0, Size::new(300.0, 400.0));
        assert!((rect.width - 300.0).abs() < 1e-4);
        assert!((rect.height - 150.0).abs() < 1e-4);
        assert!((rect.y - 125.0).abs() < 1e-4);
        assert!(rect.x.abs() < 1e-4);
    }

    #[test]
    fn contain_fit_pillarboxes_tall_shapes() {
        let rect = contain_fit(0.5, Size::new(300.0, 400.0));
        assert!((rect.height - 400.0).abs() < 1e-4);
        assert!((rect.width - 200.0).abs() < 1e-4);
        assert!((rect.x - 50.0).abs() < 1e-4);
    }

    #[test]
    fn card_frame_keeps_card_shape_inside_area() {
        for area in [
            Size::new(320.0, 480.0),
            Size::new(1200.0, 300.0),
            Size::new(200.0, 900.0),
        ] {
            let card = card_frame(area);
            assert!((card.width / card.height - sizing::CARD_ASPECT_RATIO).abs() < 1e-4);
            assert!(card.x >= -1e-3 && card.y >= -1e-3);
            assert!(card.x + card.width <= area.width + 1e-3);
            assert!(card.y + card.height <= area.height + 1e-3);
        }
    }

    #[test]
    fn card_frame_caps_width_and_centers() {
        let area = Size::new(1600.0, 1200.0);
        let card = card_frame(area);
        assert!((card.width - sizing::CARD_MAX_WIDTH).abs() < 1e-4);
        assert!((card.center().x - 800.0).abs() < 1e-3);
        assert!((card.center().y - 600.0).abs() < 1e-3);
    }

    #[test]
    fn card_frame_of_empty_area_is_empty() {
        let card = card_frame(Size::new(0.0, 100.0));
        assert_eq!(card.size(), Size::ZERO);
    }
}
