// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `NotificationSpec` builder and the queued `Notification`
//! - [`lifecycle`] - Per-notification `Shown → Exiting → Removed` state machine
//! - [`manager`] - `Manager` owning the queue and every entry's timers
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use iced_overlays::ui::notifications::{Manager, NotificationSpec, Toast};
//!
//! // Create a manager
//! let mut manager = Manager::new();
//!
//! // Push a notification
//! let id = manager.enqueue(NotificationSpec::success("Image saved"), Instant::now());
//!
//! // In your view function, render toasts
//! let toast_overlay = Toast::view_overlay(&manager, Instant::now()).map(Message::Notification);
//!
//! // And keep the timers running
//! let ticks = manager.subscription().map(Message::Notification);
//! ```
//!
//! # Timing
//!
//! - Auto-dismiss: per-notification duration, `0` keeps it until closed
//! - Exit animation: fixed delay between "exiting" and removal
//! - All toasts of a position are stacked in queue order

mod lifecycle;
mod manager;
mod notification;
mod toast;

pub use lifecycle::Phase;
pub use manager::{Manager, Message as NotificationMessage, ToastView};
pub use notification::{Category, Notification, NotificationId, NotificationSpec, Position};
pub use toast::Toast;
