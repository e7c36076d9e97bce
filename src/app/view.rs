// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of fixed-height sections. The navbar,
//! toasts and the certificate lightbox float above it in a [`Stack`].

use super::update::{is_compact, PAGE_SCROLLABLE_ID};
use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::sections::{header_elevated, Section};
use crate::ui::{cards, gallery, hero, styles};
use iced::widget::{mouse_area, scrollable, text, Column, Container, Id, Space, Stack};
use iced::{alignment, Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let sections = Section::ALL
        .iter()
        .fold(Column::new().width(Length::Fill), |column, section| {
            column.push(view_section(app, *section))
        });

    let page = scrollable(sections)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::page),
        );

    // Any click outside the navbar closes the open menu.
    if app.menu_open {
        layers = layers.push(
            mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
                .on_press(Message::Navbar(navbar::Message::CloseMenu)),
        );
    }

    layers = layers
        .push(
            navbar::view(NavbarViewContext {
                i18n: &app.i18n,
                brand: &app.content.profile.name,
                menu_open: app.menu_open,
                compact: is_compact(app.window_size),
                elevated: header_elevated(app.scroll_offset),
                theme_mode: app.theme_mode,
            })
            .map(Message::Navbar),
        )
        .push(Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification));

    if let Some(lightbox) = app.certificates.lightbox(&app.i18n) {
        layers = layers.push(lightbox.map(Message::Certificates));
    }

    layers.into()
}

fn view_section(app: &App, section: Section) -> Element<'_, Message> {
    let height = Length::Fixed(section.height());

    // Unrevealed sections keep their height so the page geometry is stable.
    if !app.reveal.is_revealed(section) {
        return Space::new().width(Length::Fill).height(height).into();
    }

    let body: Element<'_, Message> = match section {
        Section::Hero => return hero::view(&app.content.profile, &app.typing),
        Section::About => cards::about(&app.content.profile),
        Section::Skills => cards::skills(&app.content.skills, &app.i18n),
        Section::Projects => cards::projects(&app.content.projects, &app.i18n),
        Section::Education => cards::education(&app.content.education, &app.i18n),
        Section::Certificates => app.certificates.view(&app.i18n).map(Message::Certificates),
        Section::Gallery => gallery::view(&app.slideshow, &app.i18n).map(Message::Gallery),
        Section::Contact => app.contact.view(&app.i18n).map(Message::Contact),
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(text(app.i18n.tr(section.label_key())).size(typography::TITLE_LG))
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .height(height)
        .padding([spacing::XL, spacing::LG])
        .center_x(Length::Fill)
        .clip(true)
        .into()
}
