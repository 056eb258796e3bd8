// SPDX-License-Identifier: MPL-2.0
//! Application root state: a deck of swipeable cards.
//!
//! The `App` owns the presentation models of the deck and one card surface per
//! model. It translates card effects into side effects: image loads become
//! async tasks, and a detached card is dropped from the deck, which also
//! releases its model subscription.

mod message;
mod subscription;
mod view;

pub use message::{CardId, Flags, Message};

use crate::config::{self, defaults, Config};
use crate::domain::card::SwipeSettings;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::presentation::{self, deck, SharedModel};
use crate::ui::card;
use crate::ui::design_tokens::sizing;
use crate::ui::state::AnimationGroup;
use iced::{window, Element, Subscription, Task};
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

/// One card of the deck with the model it displays.
pub struct DeckCard {
    pub id: CardId,
    pub state: card::State,
    pub model: SharedModel,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    config_dir: Option<PathBuf>,
    settings: SwipeSettings,
    group: AnimationGroup,
    deck_path: Option<PathBuf>,
    /// Bottom-first: the last card is on top.
    cards: Vec<DeckCard>,
    next_id: u64,
    load_error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cards", &self.cards.len())
            .field("deck_path", &self.deck_path)
            .field("load_error", &self.load_error)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            defaults::WINDOW_DEFAULT_WIDTH,
            defaults::WINDOW_DEFAULT_HEIGHT,
        ),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot; flags are consumed by the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and the deck, then requests the first image of every card.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "settings.toml ignored");
        }

        let mut app = App {
            i18n: I18n::new(flags.lang, &config),
            settings: config.card.swipe_settings(),
            group: AnimationGroup::new(),
            deck_path: flags.deck_path.or_else(|| config.deck.path.clone()),
            config,
            config_dir,
            cards: Vec::new(),
            next_id: 0,
            load_error: None,
        };
        let task = app.load_deck();
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    /// Replaces the deck with fresh models from the deck source.
    fn load_deck(&mut self) -> Task<Message> {
        self.cards.clear();
        self.load_error = None;

        let models = match &self.deck_path {
            Some(path) => deck::load_deck(path),
            None => deck::sample_deck(),
        };
        let models = match models {
            Ok(models) => models,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load deck");
                self.load_error = Some(err.to_string());
                return Task::none();
            }
        };

        let tasks: Vec<_> = models
            .into_iter()
            .map(|model| self.push_card(presentation::share(model)))
            .collect();
        Task::batch(tasks)
    }

    fn push_card(&mut self, model: SharedModel) -> Task<Message> {
        let id = CardId(self.next_id);
        self.next_id += 1;

        let mut state = card::State::new(self.settings, self.group.clone());
        let effect = state.bind(Rc::clone(&model));
        self.cards.push(DeckCard { id, state, model });
        self.perform(id, effect)
    }

    /// Turns a card effect into a task or a deck change.
    fn perform(&mut self, id: CardId, effect: card::Effect) -> Task<Message> {
        match effect {
            card::Effect::None => Task::none(),
            card::Effect::LoadImage(url) => {
                let reference = url.clone();
                let loading = media::load(reference, sizing::CARD_ASPECT_RATIO);
                Task::perform(loading, move |result| Message::Card {
                    id,
                    message: card::Message::ImageLoaded {
                        url: url.clone(),
                        result,
                    },
                })
            }
            card::Effect::Detached => {
                self.cards.retain(|card| card.id != id);
                tracing::debug!(id = id.0, remaining = self.cards.len(), "card removed");
                Task::none()
            }
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Card { id, message } => {
                let is_pointer = matches!(message, card::Message::Pointer(_));
                let Some(card) = self.cards.iter_mut().find(|card| card.id == id) else {
                    return Task::none();
                };
                let effect = card.state.handle(message);

                let mut tasks = Vec::new();
                if is_pointer {
                    // A pan on this card may have cancelled animations of its siblings
                    let settled: Vec<_> = self
                        .cards
                        .iter_mut()
                        .filter(|card| card.id != id)
                        .map(|card| (card.id, card.state.settle_cancelled()))
                        .collect();
                    for (sibling, effect) in settled {
                        tasks.push(self.perform(sibling, effect));
                    }
                }
                tasks.push(self.perform(id, effect));
                Task::batch(tasks)
            }
            Message::Tick(now) => self.tick(now),
            Message::Reload => self.load_deck(),
            Message::NextLanguage => {
                self.next_language();
                Task::none()
            }
        }
    }

    /// Switches to the next available locale and remembers it in settings.toml.
    fn next_language(&mut self) {
        let locales = &self.i18n.available_locales;
        let Some(next) = locales
            .iter()
            .position(|locale| locale == self.i18n.current_locale())
            .and_then(|index| locales.get((index + 1) % locales.len()))
            .or_else(|| locales.first())
            .cloned()
        else {
            return;
        };

        self.config.general.language = Some(next.to_string());
        self.i18n.set_locale(next);
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!(error = %err, "failed to save settings");
        }
    }

    fn tick(&mut self, now: Instant) -> Task<Message> {
        let effects: Vec<_> = self
            .cards
            .iter_mut()
            .filter(|card| card.state.is_animating())
            .map(|card| {
                let effect = card
                    .state
                    .handle_at(card::Message::Tick(now), now);
                (card.id, effect)
            })
            .collect();

        Task::batch(
            effects
                .into_iter()
                .map(|(id, effect)| self.perform(id, effect))
                .collect::<Vec<_>>(),
        )
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            cards: &self.cards,
            load_error: self.load_error.as_deref(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.is_animating())
    }

    /// Returns true while any card runs a release animation.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.cards.iter().any(|card| card.state.is_animating())
    }

    #[must_use]
    pub fn cards(&self) -> &[DeckCard] {
        &self.cards
    }
}
