// SPDX-License-Identifier: MPL-2.0
//! Navigation bar: brand, section links, theme toggle and, on narrow
//! windows, the hamburger menu that collapses the links.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::Section;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, tooltip, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub brand: &'a str,
    pub menu_open: bool,
    /// Window too narrow for inline links.
    pub compact: bool,
    /// Header drawn with its scrolled (elevated) style.
    pub elevated: bool,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    /// Click outside the navbar while the menu is open.
    CloseMenu,
    GoTo(Section),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ScrollTo(Section),
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::GoTo(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(top_bar(&ctx));

    if ctx.compact && ctx.menu_open {
        content = content.push(dropdown(&ctx));
    }

    content.into()
}

fn top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.brand.to_string()).size(typography::TITLE_SM);

    let mut row = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::LG])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        let hamburger = button(Text::new(if ctx.menu_open { "✕" } else { "☰" }).size(typography::TITLE_MD))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(styles::button::ghost);
        row = row.push(hamburger);
    } else {
        for section in Section::NAVIGABLE {
            row = row.push(link(ctx.i18n, section));
        }
    }

    row = row.push(theme_toggle(ctx));

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::header(ctx.elevated))
        .into()
}

fn theme_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let toggle = button(Text::new(ctx.theme_mode.toggle_icon()).size(typography::TITLE_SM))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(styles::button::ghost);

    tooltip(
        toggle,
        Container::new(Text::new(ctx.i18n.tr(ctx.theme_mode.toggle_label_key())).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::container::menu_panel),
        tooltip::Position::Bottom,
    )
    .gap(4)
    .into()
}

fn dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let links = Section::NAVIGABLE
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, section| {
            column.push(link(ctx.i18n, section))
        });

    Container::new(Container::new(links).padding(spacing::XS).style(styles::container::menu_panel))
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding([0.0, spacing::LG])
        .into()
}

fn link<'a>(i18n: &I18n, section: Section) -> Element<'a, Message> {
    button(Text::new(i18n.tr(section.label_key())).size(typography::BODY))
        .on_press(Message::GoTo(section))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::nav_link)
        .into()
}
