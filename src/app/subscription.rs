// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::defaults::ANIMATION_TICK_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Frame ticks, only while a card is animating.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
