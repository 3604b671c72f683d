// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering queued notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with category-colored accents, an optional action and dismiss
//! button, and a progress bar counting down the auto-dismiss timer.

use super::manager::{Manager, Message, ToastView};
use super::notification::{Category, Position};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, progress_bar, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(toast: ToastView<'a>, now: Instant) -> Element<'a, Message> {
        let notification = toast.notification;
        let category = notification.category();
        let exiting = toast.is_exiting();
        let fade = if exiting {
            opacity::OVERLAY_MEDIUM
        } else {
            opacity::OPAQUE
        };
        let accent_color = Color {
            a: fade,
            ..category.color()
        };

        let icon_widget = Text::new(category.glyph())
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = notification.title() {
            body = body.push(
                Text::new(title)
                    .size(typography::BODY_LG)
                    .style(move |theme: &Theme| faded_text(theme, fade)),
            );
        }
        body = body.push(
            Text::new(notification.message())
                .size(typography::BODY)
                .style(move |theme: &Theme| faded_text(theme, fade)),
        );

        let id = notification.id().clone();
        if let Some(label) = notification.action_label() {
            let action = button(Text::new(label).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::XS])
                .style(move |theme: &Theme, status| action_button_style(theme, status, category));
            body = body.push(if exiting {
                action
            } else {
                action.on_press(Message::Action(id.clone()))
            });
        }

        // Layout: [icon] [title/message/action] [dismiss]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if notification.closable() {
            let dismiss = button(Text::new("✕").size(typography::BODY_SM))
                .padding(spacing::XXS)
                .style(dismiss_button_style);
            content = content.push(if exiting {
                dismiss
            } else {
                dismiss.on_press(Message::Close(id))
            });
        }

        let mut card = Column::new().spacing(spacing::XS).push(content);
        if let Some(remaining) = toast.remaining(now).filter(|_| !exiting) {
            card = card.push(
                progress_bar(0.0..=1.0, remaining)
                    .girth(sizing::PROGRESS_HEIGHT)
                    .style(move |theme: &Theme| progress_style(theme, category)),
            );
        }

        Container::new(card)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with every queued notification.
    ///
    /// Toasts are stacked per [`Position`] in queue order.
    pub fn view_overlay<'a>(manager: &'a Manager, now: Instant) -> Element<'a, Message> {
        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        for position in Position::ALL {
            let toasts: Vec<Element<'a, Message>> = manager
                .snapshot()
                .filter(|toast| toast.notification.position() == position)
                .map(|toast| Self::view(toast, now))
                .collect();

            if toasts.is_empty() {
                continue;
            }

            let column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(position.horizontal());

            layers = layers.push(
                Container::new(column)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(position.horizontal())
                    .align_y(position.vertical())
                    .padding(spacing::MD),
            );
        }

        layers.into()
    }
}

fn faded_text(theme: &Theme, alpha: f32) -> text::Style {
    text::Style {
        color: Some(Color {
            a: alpha,
            ..theme.palette().text
        }),
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: accent_color.a,
            ..bg_color
        })),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn progress_style(theme: &Theme, category: Category) -> progress_bar::Style {
    progress_bar::Style {
        background: iced::Background::Color(theme.extended_palette().background.weak.color),
        bar: iced::Background::Color(category.color()),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
    }
}

fn action_button_style(theme: &Theme, status: button::Status, category: Category) -> button::Style {
    let accent = category.color();
    let background = match status {
        button::Status::Hovered => Some(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        }),
        button::Status::Pressed => Some(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..accent
        }),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: background.map(iced::Background::Color),
        text_color: match status {
            button::Status::Disabled => theme.extended_palette().background.strong.color,
            _ => accent,
        },
        border: iced::Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let (background, text_color) = match status {
        button::Status::Active => (None, base.text),
        button::Status::Hovered => (
            Some(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            }),
            base.text,
        ),
        button::Status::Pressed => (
            Some(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            }),
            base.text,
        ),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background: background.map(iced::Background::Color),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
