// SPDX-License-Identifier: MPL-2.0
//! Notification queue and lifecycle.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen; the rest wait in FIFO order
//! and are promoted as space frees up. Expiry is driven by the application
//! tick with an explicit `Instant`.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now if there is room, otherwise queues it.
    pub fn push(&mut self, mut notification: Notification, now: Instant) {
        tracing::debug!(
            key = notification.message_key(),
            severity = ?notification.severity(),
            "notification pushed"
        );
        if self.visible.len() < MAX_VISIBLE {
            notification.mark_shown(now);
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Removes a notification wherever it is. Returns `true` if found.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(now);
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops expired toasts and promotes queued ones.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote_from_queue(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether any toast is visible or queued; the tick subscription stays
    /// alive while this is true.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.mark_shown(now);
            self.visible.push_back(notification);
        }
    }
}
