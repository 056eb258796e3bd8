// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{DeckCard, Message};
use crate::config::defaults::DECK_PADDING;
use crate::i18n::fluent::I18n;
use crate::ui::card;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub cards: &'a [DeckCard],
    pub load_error: Option<&'a str>,
}

/// Renders the deck, or the empty state once every card is gone.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.cards.is_empty() {
        return view_empty(ctx.i18n, ctx.load_error);
    }

    // A card flying off the deck hands input over to the one below it
    let active = ctx
        .cards
        .iter()
        .rposition(|entry| !matches!(entry.state.phase(), card::Phase::Dismissing(_)));
    let layers = ctx.cards.iter().enumerate().map(move |(position, entry)| {
        let id = entry.id;
        entry
            .state
            .view(Some(position) == active)
            .map(move |message| Message::Card { id, message })
    });

    Container::new(
        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .padding(DECK_PADDING)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_empty<'a>(i18n: &I18n, load_error: Option<&'a str>) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("deck-empty-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_700);

    let hint = Text::new(i18n.tr("deck-empty-hint"))
        .size(typography::BODY)
        .color(palette::GRAY_700);

    let reload = button(Text::new(i18n.tr("deck-reload-button")))
        .padding([spacing::XS, spacing::LG])
        .style(button::primary)
        .on_press(Message::Reload);

    let language = button(Text::new(i18n.tr("language-button")))
        .padding([spacing::XS, spacing::LG])
        .style(button::secondary)
        .on_press(Message::NextLanguage);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(hint);

    if let Some(error) = load_error {
        content = content.push(
            Text::new(format!("{}\n{error}", i18n.tr("deck-load-error")))
                .size(typography::BODY)
                .color(palette::PRIMARY_500),
        );
    }

    let actions = Row::new().spacing(spacing::XS).push(reload).push(language);

    Container::new(content.push(actions))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme| iced::widget::container::Style {
            background: Some(palette::GRAY_50.into()),
            ..iced::widget::container::Style::default()
        })
        .into()
}
