// SPDX-License-Identifier: MPL-2.0
//! Gallery slideshow view.
//!
//! Renders the active slide of a [`Slideshow`] with its caption, the
//! previous/next controls and one indicator dot per slide. Everything is read
//! from the slideshow on each frame; the view keeps no state of its own.

use crate::gallery::{Input, SlideView, Slideshow};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::Section;
use crate::ui::styles;
use iced::widget::{
    button, image, mouse_area, text, tooltip, Column, Container, Row, Space, Stack,
};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Input(Input),
    /// Reload a slide whose image failed.
    Retry(usize),
}

/// Distance from the top of the gallery section to the slideshow stage:
/// section padding, the title line and the gap below it.
const STAGE_OFFSET: f32 = spacing::XL + typography::TITLE_LG * 1.3 + spacing::LG;

/// Whether window-space `y` lies over the slideshow stage when the page is
/// scrolled by `scroll_offset`. Touch gestures only count there; the section
/// title and the indicator row are excluded.
#[must_use]
pub fn contains_y(y: f32, scroll_offset: f32) -> bool {
    let top = Section::Gallery.top() + STAGE_OFFSET - scroll_offset;
    (top..top + sizing::SLIDESHOW_HEIGHT).contains(&y)
}

pub fn view<'a>(slideshow: &'a Slideshow, i18n: &'a I18n) -> Element<'a, Message> {
    let Some(active) = slideshow.slides().find(|slide| slide.active) else {
        return Container::new(text(i18n.tr("gallery-empty")).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::SLIDESHOW_HEIGHT))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(sizing::SLIDESHOW_HEIGHT))
            .style(styles::container::placeholder)
            .into();
    };

    let stage = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SLIDESHOW_HEIGHT))
        .push(slide(&active, i18n))
        .push(caption(&active))
        .push(controls(i18n));

    let stage = mouse_area(stage)
        .on_enter(Message::Input(Input::HoverEnter))
        .on_exit(Message::Input(Input::HoverExit));

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(stage)
        .push(indicators(slideshow))
        .into()
}

fn slide<'a>(view: &SlideView<'a>, i18n: &I18n) -> Element<'a, Message> {
    if let Some(handle) = view.image {
        return image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    let Some(placeholder) = view.placeholder else {
        // Still loading.
        return Container::new(text("…").size(typography::TITLE_LG))
            .center(Length::Fill)
            .style(styles::container::placeholder)
            .into();
    };

    let number = placeholder.number.to_string();
    let label = i18n.tr_with_args("gallery-placeholder-label", &[("number", number.as_str())]);
    let body = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(text("📷").size(typography::DISPLAY))
        .push(text(label).size(typography::TITLE_SM))
        .push(text(i18n.tr("gallery-placeholder-retry")).size(typography::CAPTION));

    button(Container::new(body).center(Length::Fill))
        .on_press(Message::Retry(view.index))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::button::card)
        .into()
}

fn caption<'a>(view: &SlideView<'a>) -> Element<'a, Message> {
    let band = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(text(view.record.title()).size(typography::TITLE_MD))
            .push(text(view.record.description()).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::caption);

    Container::new(band)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

fn controls<'a>(i18n: &I18n) -> Element<'a, Message> {
    let control = |glyph: &'static str, input: Input, label_key: &str| {
        let control_button = button(
            Container::new(text(glyph).size(typography::TITLE_MD))
                .center(Length::Fixed(sizing::SLIDE_CONTROL)),
        )
        .on_press(Message::Input(input))
        .padding(0)
        .style(styles::button::slide_control)
        .width(Length::Fixed(sizing::SLIDE_CONTROL))
        .height(Length::Fixed(sizing::SLIDE_CONTROL));

        // The tooltip carries the control's accessible label.
        tooltip(
            control_button,
            Container::new(text(i18n.tr(label_key)).size(typography::CAPTION))
                .padding(spacing::XXS)
                .style(styles::container::menu_panel),
            tooltip::Position::Top,
        )
        .gap(4)
    };

    let row = Row::new()
        .padding(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(control("‹", Input::PreviousControl, "gallery-previous"))
        .push(Space::new().width(Length::Fill))
        .push(control("›", Input::NextControl, "gallery-next"));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn indicators<'a>(slideshow: &Slideshow) -> Element<'a, Message> {
    let dots = slideshow
        .indicators()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, active)| {
            row.push(
                button(Space::new())
                    .on_press(Message::Input(Input::Indicator(index)))
                    .width(Length::Fixed(sizing::INDICATOR_DOT))
                    .height(Length::Fixed(sizing::INDICATOR_DOT))
                    .padding(0)
                    .style(styles::button::indicator(active)),
            )
        });

    Container::new(dots.wrap()).center_x(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_region_follows_scroll() {
        let stage = Section::Gallery.top() + STAGE_OFFSET;
        assert!(contains_y(10.0, stage));
        assert!(!contains_y(10.0, 0.0));
        assert!(contains_y(stage + 10.0, 0.0));
        assert!(!contains_y(sizing::SLIDESHOW_HEIGHT + 1.0, stage));
    }

    #[test]
    fn touch_region_excludes_title_and_indicators() {
        let top = Section::Gallery.top();
        // Section title.
        assert!(!contains_y(top + spacing::XL + 1.0, 0.0));
        // Indicator row under the stage.
        let below_stage = top + STAGE_OFFSET + sizing::SLIDESHOW_HEIGHT + spacing::XS;
        assert!(!contains_y(below_stage, 0.0));
        assert!(STAGE_OFFSET + sizing::SLIDESHOW_HEIGHT <= Section::Gallery.height());
    }
}
