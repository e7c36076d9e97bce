// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are reduced to the handful of messages the portfolio
//! reacts to. Arrow keys are only forwarded when no widget captured them,
//! so typing in the contact form never moves the slideshow.

use super::message::TouchEvent;
use super::Message;
use crate::gallery::Direction;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, touch, Subscription};
use std::time::Duration;

/// Period of the animation tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            ..
        }) => match (named, status) {
            (Named::Escape, _) => Some(Message::EscapePressed),
            (Named::ArrowLeft, event::Status::Ignored) => {
                Some(Message::ArrowKey(Direction::Previous))
            }
            (Named::ArrowRight, event::Status::Ignored) => Some(Message::ArrowKey(Direction::Next)),
            _ => None,
        },
        event::Event::Touch(touch) => touch_event(touch).map(Message::Touch),
        _ => None,
    })
}

fn touch_event(event: touch::Event) -> Option<TouchEvent> {
    match event {
        touch::Event::FingerPressed { id, position } => Some(TouchEvent::Pressed {
            finger: id.0,
            position,
        }),
        touch::Event::FingerLifted { id, position } => Some(TouchEvent::Lifted {
            finger: id.0,
            position,
        }),
        touch::Event::FingerLost { id, .. } => Some(TouchEvent::Lost { finger: id.0 }),
        touch::Event::FingerMoved { .. } => None,
    }
}

/// Ticks only while something time-driven is live.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
