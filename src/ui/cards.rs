// SPDX-License-Identifier: MPL-2.0
//! Static content sections rendered as cards: about, skills, projects and
//! education. They emit no messages, so every view is generic over the
//! parent message type.

use crate::content::{Education, Profile, Project, Skill};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{text, Column, Container, Row};
use iced::{alignment, Element, Length, Theme};

const CARD_WIDTH: f32 = 280.0;

fn secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

fn card<'a, M: 'a>(body: Column<'a, M>) -> Element<'a, M> {
    Container::new(body.spacing(spacing::XS))
        .width(Length::Fixed(CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn grid<'a, M: 'a>(cards: Vec<Element<'a, M>>, i18n: &I18n) -> Element<'a, M> {
    if cards.is_empty() {
        return text(i18n.tr("section-empty"))
            .size(typography::BODY)
            .style(secondary)
            .into();
    }

    let row = cards
        .into_iter()
        .fold(Row::new().spacing(spacing::MD), Row::push)
        .wrap()
        .vertical_spacing(spacing::MD);

    Container::new(row)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .center_x(Length::Fill)
        .into()
}

pub fn about<'a, M: 'a>(profile: &'a Profile) -> Element<'a, M> {
    Container::new(text(profile.about.as_str()).size(typography::BODY_LG))
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .center_x(Length::Fill)
        .into()
}

pub fn skills<'a, M: 'a>(skills: &'a [Skill], i18n: &I18n) -> Element<'a, M> {
    let cards = skills
        .iter()
        .map(|skill| {
            card(
                Column::new()
                    .push(text(skill.name.as_str()).size(typography::TITLE_SM))
                    .push(
                        text(skill.description.as_str())
                            .size(typography::BODY)
                            .style(secondary),
                    ),
            )
        })
        .collect();
    grid(cards, i18n)
}

pub fn projects<'a, M: 'a>(projects: &'a [Project], i18n: &I18n) -> Element<'a, M> {
    let cards = projects
        .iter()
        .map(|project| {
            let mut body = Column::new()
                .push(text(project.title.as_str()).size(typography::TITLE_SM))
                .push(text(project.description.as_str()).size(typography::BODY));
            if !project.tags.is_empty() {
                body = body.push(
                    text(project.tags.join(" · "))
                        .size(typography::CAPTION)
                        .style(secondary),
                );
            }
            card(body)
        })
        .collect();
    grid(cards, i18n)
}

pub fn education<'a, M: 'a>(entries: &'a [Education], i18n: &I18n) -> Element<'a, M> {
    if entries.is_empty() {
        return grid(Vec::new(), i18n);
    }

    let list = entries.iter().fold(
        Column::new().spacing(spacing::MD).width(Length::Fill),
        |list, entry| {
            let heading = Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(
                    text(entry.degree.as_str())
                        .size(typography::TITLE_SM)
                        .width(Length::Fill),
                )
                .push(
                    text(entry.period.as_str())
                        .size(typography::CAPTION)
                        .style(secondary),
                );
            list.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(heading)
                        .push(text(entry.school.as_str()).size(typography::BODY)),
                )
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::card),
            )
        },
    );

    Container::new(list)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .center_x(Length::Fill)
        .into()
}
