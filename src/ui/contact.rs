// SPDX-License-Identifier: MPL-2.0
//! Contact form stub.
//!
//! Nothing is sent anywhere: a valid submission disables the button for
//! [`CONTACT_SEND_DELAY`](crate::app::config::CONTACT_SEND_DELAY), then the
//! form is cleared and a thank-you toast is shown.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::widget::{button, text, text_editor, text_input, Column, Container};
use iced::{Element, Length};

#[derive(Default)]
pub struct State {
    name: String,
    email: String,
    message: text_editor::Content,
    sending: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
    /// The simulated send delay elapsed.
    Sent,
}

/// Side effects requested from the application.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    Notify(Notification),
    /// Start the send delay; `Message::Sent` must come back afterwards.
    StartSending,
}

impl State {
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message_text(&self) -> String {
        self.message.text()
    }

    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.text().trim().is_empty()
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                Effect::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Effect::None
            }
            Message::MessageEdited(action) => {
                self.message.perform(action);
                Effect::None
            }
            Message::Submit => {
                if self.sending {
                    return Effect::None;
                }
                if !self.is_complete() {
                    return Effect::Notify(Notification::warning("contact-validation-error"));
                }
                self.sending = true;
                tracing::debug!("contact form submitted");
                Effect::StartSending
            }
            Message::Sent => {
                if !self.sending {
                    return Effect::None;
                }
                *self = Self::default();
                Effect::Notify(Notification::success("contact-success"))
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let editable = !self.sending;

        let name = text_input(&i18n.tr("contact-name-placeholder"), &self.name)
            .on_input_maybe(editable.then_some(Message::NameChanged))
            .padding(spacing::XS);
        let email = text_input(&i18n.tr("contact-email-placeholder"), &self.email)
            .on_input_maybe(editable.then_some(Message::EmailChanged))
            .padding(spacing::XS);
        let mut body = text_editor(&self.message)
            .placeholder(i18n.tr("contact-message-placeholder"))
            .height(Length::Fixed(140.0))
            .padding(spacing::XS);
        if editable {
            body = body.on_action(Message::MessageEdited);
        }

        let label = if self.sending {
            i18n.tr("contact-sending")
        } else {
            i18n.tr("contact-send")
        };
        let submit = button(text(label).size(typography::BODY))
            .on_press_maybe(editable.then_some(Message::Submit))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary);

        let form = Column::new()
            .spacing(spacing::SM)
            .max_width(sizing::CONTENT_MAX_WIDTH / 1.5)
            .push(name)
            .push(email)
            .push(body)
            .push(submit);

        Container::new(form).center_x(Length::Fill).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    fn filled() -> State {
        let mut state = State::default();
        state.update(Message::NameChanged("Ada".into()));
        state.update(Message::EmailChanged("ada@example.org".into()));
        state.update(Message::MessageEdited(text_editor::Action::Edit(
            text_editor::Edit::Paste(std::sync::Arc::new("Hello there".into())),
        )));
        state
    }

    #[test]
    fn empty_submit_warns() {
        let mut state = State::default();
        match state.update(Message::Submit) {
            Effect::Notify(notification) => {
                assert_eq!(notification.severity(), Severity::Warning);
                assert_eq!(notification.message_key(), "contact-validation-error");
            }
            other => panic!("expected warning, got {other:?}"),
        }
        assert!(!state.is_sending());
    }

    #[test]
    fn whitespace_only_field_is_empty() {
        let mut state = filled();
        state.update(Message::NameChanged("   ".into()));
        assert!(matches!(state.update(Message::Submit), Effect::Notify(_)));
    }

    #[test]
    fn valid_submit_starts_sending_and_ignores_resubmit() {
        let mut state = filled();
        assert_eq!(state.message_text().trim(), "Hello there");
        assert!(matches!(state.update(Message::Submit), Effect::StartSending));
        assert!(state.is_sending());
        assert!(matches!(state.update(Message::Submit), Effect::None));
    }

    #[test]
    fn sent_resets_form_and_thanks() {
        let mut state = filled();
        state.update(Message::Submit);
        match state.update(Message::Sent) {
            Effect::Notify(notification) => {
                assert_eq!(notification.severity(), Severity::Success);
                assert_eq!(notification.message_key(), "contact-success");
            }
            other => panic!("expected success, got {other:?}"),
        }
        assert!(!state.is_sending());
        assert_eq!(state.name(), "");
        assert_eq!(state.email(), "");
        assert_eq!(state.message_text().trim(), "");
    }

    #[test]
    fn stray_sent_is_ignored() {
        let mut state = filled();
        assert!(matches!(state.update(Message::Sent), Effect::None));
        assert_eq!(state.name(), "Ada");
    }
}
