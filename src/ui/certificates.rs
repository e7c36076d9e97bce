// SPDX-License-Identifier: MPL-2.0
//! Certificate grid and lightbox.
//!
//! Clicking a certificate whose image has loaded opens it full size in a
//! modal. The modal closes with its close button, a click on the backdrop or
//! `Escape` (routed by the application).

use crate::content::Certificate;
use crate::error::Error;
use crate::gallery::AssetStatus;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{button, image, mouse_area, opaque, text, Column, Container, Row, Stack};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone)]
struct Item {
    certificate: Certificate,
    status: AssetStatus,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    items: Vec<Item>,
    open: Option<usize>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Clicked(usize),
    Close,
    ImageLoaded(usize, Result<Handle, Error>),
}

impl State {
    /// Builds the grid. Returns `(index, source)` pairs to load.
    pub fn new(certificates: Vec<Certificate>) -> (Self, Vec<(usize, String)>) {
        let loads = certificates
            .iter()
            .enumerate()
            .map(|(index, certificate)| (index, certificate.source.clone()))
            .collect();
        let items = certificates
            .into_iter()
            .map(|certificate| Item {
                certificate,
                status: AssetStatus::Pending,
            })
            .collect();
        (Self { items, open: None }, loads)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Clicked(index) => {
                let ready = matches!(
                    self.items.get(index).map(|item| &item.status),
                    Some(AssetStatus::Ready(_))
                );
                if ready {
                    self.open = Some(index);
                }
            }
            Message::Close => self.open = None,
            Message::ImageLoaded(index, result) => {
                let Some(item) = self.items.get_mut(index) else {
                    return;
                };
                item.status = match result {
                    Ok(handle) => AssetStatus::Ready(handle),
                    Err(error) => {
                        tracing::warn!(index, %error, "certificate image failed to load");
                        AssetStatus::Failed
                    }
                };
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let row = self
            .items
            .iter()
            .enumerate()
            .fold(Row::new().spacing(spacing::LG), |row, (index, item)| {
                row.push(card(index, item, i18n))
            });

        Container::new(row.wrap()).center_x(Length::Fill).into()
    }

    /// Full-window modal, or `None` when closed.
    pub fn lightbox<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        let item = self.items.get(self.open?)?;
        let AssetStatus::Ready(handle) = &item.status else {
            return None;
        };

        let close = button(text("×").size(typography::TITLE_LG))
            .on_press(Message::Close)
            .padding([0.0, spacing::XS])
            .style(styles::button::slide_control);

        let content = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right)
            .push(close)
            .push(
                image(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(
                Container::new(text(item.certificate.title.as_str()).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );

        let backdrop = mouse_area(
            Container::new(text(i18n.tr("certificate-close-hint")).size(typography::CAPTION))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_y(alignment::Vertical::Bottom)
                .align_x(alignment::Horizontal::Center)
                .style(styles::container::backdrop),
        )
        .on_press(Message::Close);

        let modal = Container::new(opaque(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XXL);

        Some(Stack::new().push(backdrop).push(modal).into())
    }
}

fn card<'a>(index: usize, item: &'a Item, i18n: &'a I18n) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match &item.status {
        AssetStatus::Ready(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(sizing::CERTIFICATE_THUMB_WIDTH))
            .height(Length::Fixed(sizing::CERTIFICATE_THUMB_HEIGHT))
            .into(),
        AssetStatus::Pending | AssetStatus::Failed => Container::new(text("📜").size(typography::DISPLAY))
            .width(Length::Fixed(sizing::CERTIFICATE_THUMB_WIDTH))
            .height(Length::Fixed(sizing::CERTIFICATE_THUMB_HEIGHT))
            .center_x(Length::Fixed(sizing::CERTIFICATE_THUMB_WIDTH))
            .center_y(Length::Fixed(sizing::CERTIFICATE_THUMB_HEIGHT))
            .style(styles::container::placeholder)
            .into(),
    };

    let issuer = if item.certificate.issuer.is_empty() {
        String::new()
    } else {
        i18n.tr_with_args("certificate-issued-by", &[("issuer", item.certificate.issuer.as_str())])
    };

    let body = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fixed(sizing::CERTIFICATE_THUMB_WIDTH))
        .push(thumbnail)
        .push(text(item.certificate.title.as_str()).size(typography::TITLE_SM))
        .push(text(issuer).size(typography::CAPTION));

    button(body)
        .on_press(Message::Clicked(index))
        .padding(spacing::XS)
        .style(styles::button::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn certificates() -> Vec<Certificate> {
        vec![
            Certificate {
                title: "A".into(),
                issuer: "Org".into(),
                source: "certs/a.png".into(),
            },
            Certificate {
                title: "B".into(),
                issuer: String::new(),
                source: "certs/b.png".into(),
            },
        ]
    }

    fn handle() -> Handle {
        Handle::from_rgba(1, 1, vec![0_u8; 4])
    }

    #[test]
    fn new_requests_one_load_per_certificate() {
        let (state, loads) = State::new(certificates());
        assert_eq!(loads, vec![(0, "certs/a.png".to_string()), (1, "certs/b.png".to_string())]);
        assert!(!state.is_open());
    }

    #[test]
    fn pending_or_failed_certificate_does_not_open() {
        let (mut state, _) = State::new(certificates());
        state.update(Message::Clicked(0));
        assert!(!state.is_open());

        state.update(Message::ImageLoaded(0, Err(Error::Io("missing".into()))));
        state.update(Message::Clicked(0));
        assert!(!state.is_open());
    }

    #[test]
    fn loaded_certificate_opens_and_closes() {
        let (mut state, _) = State::new(certificates());
        state.update(Message::ImageLoaded(1, Ok(handle())));
        state.update(Message::Clicked(1));
        assert_eq!(state.open_index(), Some(1));

        state.update(Message::Close);
        assert!(!state.is_open());
    }

    #[test]
    fn out_of_range_messages_are_ignored() {
        let (mut state, _) = State::new(certificates());
        state.update(Message::ImageLoaded(7, Ok(handle())));
        state.update(Message::Clicked(7));
        assert!(!state.is_open());
    }
}
