// SPDX-License-Identifier: MPL-2.0
//! Notification data: an i18n message key plus a severity.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Message sent (green, 3s).
    #[default]
    Success,
    Info,
    /// Validation problems and fallbacks (orange, 5s).
    Warning,
    /// Manual dismiss.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Error => "⚠",
        }
    }

    /// How long a toast of this severity stays on screen; `None` means
    /// until dismissed.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A toast waiting in the queue or on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    /// Set when the toast becomes visible; the dismiss countdown starts there
    /// so queued toasts get their full display time.
    shown_at: Option<Instant>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            shown_at: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent variable for the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    pub(super) fn mark_shown(&mut self, now: Instant) {
        self.shown_at.get_or_insert(now);
    }

    /// Whether the toast has been on screen for its full duration at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        match (self.shown_at, self.severity.auto_dismiss_duration()) {
            (Some(shown_at), Some(duration)) => now.saturating_duration_since(shown_at) >= duration,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        assert_ne!(Notification::success("a").id(), Notification::success("a").id());
    }

    #[test]
    fn warning_stays_longer_than_success() {
        let success = Severity::Success.auto_dismiss_duration().unwrap();
        let warning = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning > success);
        assert!(Severity::Error.auto_dismiss_duration().is_none());
    }

    #[test]
    fn countdown_starts_when_shown() {
        let now = Instant::now();
        let mut notification = Notification::success("contact-success");
        assert!(!notification.is_expired(now + Duration::from_secs(60)));

        notification.mark_shown(now);
        assert!(!notification.is_expired(now + Duration::from_millis(2999)));
        assert!(notification.is_expired(now + Duration::from_secs(3)));
    }

    #[test]
    fn builder_collects_arguments() {
        let notification = Notification::warning("gallery-load-error").with_arg("number", "4");
        assert_eq!(notification.severity(), Severity::Warning);
        assert_eq!(notification.message_args(), &[("number".to_string(), "4".to_string())]);
    }
}
