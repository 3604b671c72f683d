// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the [`NotificationSpec`] a host hands to the
//! [`Manager`](super::Manager), the stamped [`Notification`] stored in the
//! queue, and the descriptive [`Category`] and [`Position`] enums.

use crate::config::ToastDefaults;
use crate::ui::design_tokens::palette;
use crate::ui::state::Callback;
use chrono::{DateTime, Utc};
use iced::alignment::{Horizontal, Vertical};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Generated ids look like `toast-1718000000000-2s`: the creation time in
/// unix milliseconds followed by a process-wide sequence number in base 36.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(String);

impl NotificationId {
    /// Generates a fresh id, unique within the process lifetime.
    pub fn generate(now: DateTime<Utc>) -> Self {
        static SEQUENCE: AtomicU64 = AtomicU64::new(0);
        let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!(
            "toast-{}-{}",
            now.timestamp_millis(),
            to_base36(sequence)
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NotificationId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for NotificationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

/// Category of a notification. Purely descriptive: drives icon and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Category {
    /// Returns the accent color for this category.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Category::Success => palette::SUCCESS_500,
            Category::Error => palette::ERROR_500,
            Category::Warning => palette::WARNING_500,
            Category::Info => palette::INFO_500,
        }
    }

    /// Returns the glyph rendered in front of the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Success => "✓",
            Category::Error => "✕",
            Category::Warning => "!",
            Category::Info => "i",
        }
    }
}

/// Screen corner or edge the toast stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopRight,
    TopLeft,
    #[default]
    BottomRight,
    BottomLeft,
    TopCenter,
    BottomCenter,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopRight,
        Position::TopLeft,
        Position::BottomRight,
        Position::BottomLeft,
        Position::TopCenter,
        Position::BottomCenter,
    ];

    #[must_use]
    pub fn horizontal(&self) -> Horizontal {
        match self {
            Position::TopLeft | Position::BottomLeft => Horizontal::Left,
            Position::TopCenter | Position::BottomCenter => Horizontal::Center,
            Position::TopRight | Position::BottomRight => Horizontal::Right,
        }
    }

    #[must_use]
    pub fn vertical(&self) -> Vertical {
        match self {
            Position::TopRight | Position::TopLeft | Position::TopCenter => Vertical::Top,
            Position::BottomRight | Position::BottomLeft | Position::BottomCenter => {
                Vertical::Bottom
            }
        }
    }
}

/// What a host asks to show. Id and creation time are assigned on enqueue.
///
/// Unset duration and position fall back to the manager's defaults.
#[derive(Debug, Clone)]
pub struct NotificationSpec {
    category: Category,
    title: Option<String>,
    message: String,
    duration: Option<Duration>,
    position: Option<Position>,
    closable: bool,
    action_label: Option<String>,
    on_action: Option<Callback>,
    on_close: Option<Callback>,
}

impl NotificationSpec {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            category: Category::default(),
            title: None,
            message: message.into(),
            duration: None,
            position: None,
            closable: true,
            action_label: None,
            on_action: None,
            on_close: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).category(Category::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).category(Category::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).category(Category::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).category(Category::Info)
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the auto-dismiss duration. `Duration::ZERO` never auto-dismisses.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keeps the notification until it is explicitly closed.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Adds a secondary action. Invoking it also dismisses the notification.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, on_action: impl Fn() + 'static) -> Self {
        self.action_label = Some(label.into());
        self.on_action = Some(Callback::new(on_action));
        self
    }

    /// Runs once when the notification finishes its exit animation.
    #[must_use]
    pub fn on_close(mut self, on_close: impl Fn() + 'static) -> Self {
        self.on_close = Some(Callback::new(on_close));
        self
    }

    pub(super) fn stamp(self, defaults: ToastDefaults, now: DateTime<Utc>) -> Notification {
        Notification {
            id: NotificationId::generate(now),
            category: self.category,
            title: self.title,
            message: self.message,
            duration: self.duration.unwrap_or(defaults.duration),
            position: self.position.unwrap_or(defaults.position),
            closable: self.closable,
            action_label: self.action_label,
            on_action: self.on_action,
            on_close: self.on_close,
            created_at: now,
        }
    }
}

/// A notification living in the queue.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    category: Category,
    title: Option<String>,
    message: String,
    duration: Duration,
    position: Position,
    closable: bool,
    action_label: Option<String>,
    on_action: Option<Callback>,
    on_close: Option<Callback>,
    /// Only used for ordering and debugging; dismissal runs on timers.
    created_at: DateTime<Utc>,
}

impl Notification {
    #[must_use]
    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether the auto-dismiss timer is armed for this notification.
    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        !self.duration.is_zero()
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn closable(&self) -> bool {
        self.closable
    }

    /// The action label, when the action can actually be offered.
    #[must_use]
    pub fn action_label(&self) -> Option<&str> {
        self.on_action.as_ref().and(self.action_label.as_deref())
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(super) fn run_action(&self) {
        if let Some(on_action) = &self.on_action {
            on_action.call();
        }
    }

    pub(super) fn run_on_close(&self) {
        if let Some(on_close) = &self.on_close {
            on_close.call();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(spec: NotificationSpec) -> Notification {
        spec.stamp(ToastDefaults::default(), Utc::now())
    }

    #[test]
    fn notification_ids_are_unique() {
        let now = Utc::now();
        let n1 = NotificationId::generate(now);
        let n2 = NotificationId::generate(now);
        assert_ne!(n1, n2);
    }

    #[test]
    fn generated_id_embeds_timestamp() {
        let now = Utc::now();
        let id = NotificationId::generate(now);
        let prefix = format!("toast-{}-", now.timestamp_millis());
        assert!(id.as_str().starts_with(&prefix), "unexpected id {id}");
    }

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn category_colors_are_distinct() {
        let colors = [
            Category::Success.color(),
            Category::Error.color(),
            Category::Warning.color(),
            Category::Info.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn spec_defaults_match_toast_defaults() {
        let notification = stamp(NotificationSpec::new("Saved"));

        assert_eq!(notification.category(), Category::Info);
        assert_eq!(notification.duration(), Duration::from_millis(5000));
        assert_eq!(notification.position(), Position::BottomRight);
        assert!(notification.closable());
        assert!(notification.title().is_none());
        assert!(notification.action_label().is_none());
    }

    #[test]
    fn builder_pattern_works() {
        let notification = stamp(
            NotificationSpec::error("Upload failed")
                .title("Network")
                .duration(Duration::from_secs(2))
                .position(Position::TopCenter)
                .closable(false)
                .action("Retry", || {}),
        );

        assert_eq!(notification.category(), Category::Error);
        assert_eq!(notification.title(), Some("Network"));
        assert_eq!(notification.message(), "Upload failed");
        assert_eq!(notification.duration(), Duration::from_secs(2));
        assert_eq!(notification.position(), Position::TopCenter);
        assert!(!notification.closable());
        assert_eq!(notification.action_label(), Some("Retry"));
    }

    #[test]
    fn persistent_disables_auto_dismiss() {
        let notification = stamp(NotificationSpec::warning("Low disk").persistent());
        assert!(!notification.auto_dismisses());
    }

    #[test]
    fn constructors_set_correct_category() {
        assert_eq!(stamp(NotificationSpec::success("")).category(), Category::Success);
        assert_eq!(stamp(NotificationSpec::error("")).category(), Category::Error);
        assert_eq!(stamp(NotificationSpec::warning("")).category(), Category::Warning);
        assert_eq!(stamp(NotificationSpec::info("")).category(), Category::Info);
    }

    #[test]
    fn positions_map_to_alignment() {
        assert_eq!(Position::TopLeft.horizontal(), Horizontal::Left);
        assert_eq!(Position::TopLeft.vertical(), Vertical::Top);
        assert_eq!(Position::BottomCenter.horizontal(), Horizontal::Center);
        assert_eq!(Position::BottomCenter.vertical(), Vertical::Bottom);
        assert_eq!(Position::TopRight.horizontal(), Horizontal::Right);
    }
}
