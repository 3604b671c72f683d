// SPDX-License-Identifier: MPL-2.0
//! Rendering of the sliding panel and its navigation tree.
//!
//! The open panel sits on top of a full-window backdrop. The backdrop turns
//! presses outside the panel into [`Message::OutsidePointerDown`]; it is
//! only tinted when the panel options ask for an overlay.

use super::menu::MenuItem;
use super::panel::{Message, Panel, Side};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{
    button, container, mouse_area, opaque, scrollable, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, Background, Color, Element, Length, Theme};

/// Indentation added per tree level.
const LEVEL_INDENT: f32 = spacing::MD;

/// Renders the panel, or nothing while it is closed.
pub fn view<'a>(panel: &'a Panel, items: &'a [MenuItem]) -> Element<'a, Message> {
    if !panel.is_open() {
        return Space::new().width(Length::Shrink).height(Length::Shrink).into();
    }

    let options = panel.options();
    let tinted = options.has_overlay();
    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| backdrop_style(tinted)),
    )
    .on_press(Message::OutsidePointerDown);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .spacing(spacing::SM)
        .push(
            Container::new(Text::new(options.title_text()).size(typography::TITLE_MD))
                .width(Length::Fill),
        )
        .push(
            button(Text::new("✕").size(typography::BODY))
                .padding(spacing::XXS)
                .on_press(Message::Close)
                .style(item_button_style(false)),
        );

    let tree = items
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, item| {
            render_item(column, panel, item, 0)
        });

    let surface = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(scrollable(tree).height(Length::Fill)),
    )
    .width(Length::Fixed(options.width_px()))
    .height(Length::Fill)
    .padding(spacing::MD)
    .style(panel_style);

    let horizontal = match options.side_edge() {
        Side::Left => alignment::Horizontal::Left,
        Side::Right => alignment::Horizontal::Right,
    };

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(
            Container::new(opaque(surface))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(horizontal),
        )
        .into()
}

/// Appends `item` and, when expanded, its children to `column`.
fn render_item<'a>(
    column: Column<'a, Message>,
    panel: &Panel,
    item: &'a MenuItem,
    level: u16,
) -> Column<'a, Message> {
    let active = panel.active() == Some(item.id());
    let expanded = panel.is_expanded(item.id());

    let mut label = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(Text::new(item.label()).size(typography::BODY)).width(Length::Fill));

    if let Some(badge) = item.badge_text() {
        label = label.push(
            Container::new(Text::new(badge).size(typography::CAPTION))
                .padding([0.0, spacing::XS])
                .style(badge_style),
        );
    }
    if item.has_children() {
        label = label.push(Text::new(if expanded { "▾" } else { "▸" }).size(typography::BODY));
    }

    let mut entry = button(label)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(item_button_style(active));
    if !item.is_disabled() {
        entry = entry.on_press(Message::Activate(item.id().to_owned()));
    }

    let column = column.push(
        Container::new(entry).padding(iced::Padding::ZERO.left(LEVEL_INDENT * f32::from(level))),
    );

    if item.has_children() && expanded {
        item.child_items()
            .iter()
            .fold(column, |column, child| render_item(column, panel, child, level + 1))
    } else {
        column
    }
}

fn backdrop_style(tinted: bool) -> container::Style {
    container::Style {
        background: tinted.then_some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

fn panel_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn badge_style(theme: &Theme) -> container::Style {
    let primary = theme.extended_palette().primary.base;
    container::Style {
        background: Some(Background::Color(primary.color)),
        text_color: Some(primary.text),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn item_button_style(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let background = match (active, status) {
            (true, _) => Some(palette.primary.weak.color),
            (false, button::Status::Hovered) => Some(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette.background.strong.color
            }),
            (false, button::Status::Pressed) => Some(palette.background.strong.color),
            (false, button::Status::Active | button::Status::Disabled) => None,
        };
        let text_color = match status {
            button::Status::Disabled => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette.background.base.text
            },
            _ if active => palette.primary.weak.text,
            _ => palette.background.base.text,
        };

        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
