// SPDX-License-Identifier: MPL-2.0
//! Notification queue management.
//!
//! The `Manager` owns the insertion-ordered queue of live notifications, one
//! [`Lifecycle`] per entry, and the scheduler holding every entry's timers.
//! Removal by id is idempotent: timer-driven dismissal, a close button and a
//! programmatic `remove` may race on the same id and only one removal is
//! observed.

use super::lifecycle::{Lifecycle, Phase, Step, ToastTimer};
use super::notification::{Notification, NotificationId, NotificationSpec};
use crate::config::{Config, ToastDefaults, TICK_INTERVAL};
use crate::ui::state::Scheduler;
use chrono::Utc;
use iced::{time, Subscription};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close button pressed: start the exit animation.
    Close(NotificationId),
    /// Action button pressed: run the action, then close.
    Action(NotificationId),
    /// Periodic tick driving auto-dismiss and exit timers.
    Tick(Instant),
}

#[derive(Debug)]
struct Entry {
    notification: Notification,
    lifecycle: Lifecycle,
}

/// Read-only view of one queued notification for rendering.
#[derive(Debug, Clone, Copy)]
pub struct ToastView<'a> {
    pub notification: &'a Notification,
    pub phase: Phase,
    lifecycle: &'a Lifecycle,
}

impl ToastView<'_> {
    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.phase == Phase::Exiting
    }

    /// Remaining auto-dismiss fraction for a progress bar.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<f32> {
        self.lifecycle.remaining(now)
    }
}

/// Manages the notification queue and the lifecycle of every entry.
#[derive(Debug, Default)]
pub struct Manager {
    entries: Vec<Entry>,
    timers: Scheduler<ToastTimer>,
    defaults: ToastDefaults,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_defaults(defaults: ToastDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        Self::with_defaults(config.toast_defaults())
    }

    #[must_use]
    pub fn defaults(&self) -> ToastDefaults {
        self.defaults
    }

    /// Appends a notification and returns its freshly assigned id.
    ///
    /// The entry is presented immediately, so its lifecycle starts at `now`.
    pub fn enqueue(&mut self, spec: NotificationSpec, now: Instant) -> NotificationId {
        let notification = spec.stamp(self.defaults, Utc::now());
        let id = notification.id().clone();
        let lifecycle = Lifecycle::mount(&id, notification.duration(), now, &mut self.timers);

        log::debug!(
            "enqueued {:?} notification {id} (duration {:?})",
            notification.category(),
            notification.duration()
        );
        self.entries.push(Entry {
            notification,
            lifecycle,
        });
        id
    }

    /// Drops the entry with `id` right away, cancelling its timers.
    ///
    /// Returns `false` if no such entry exists. No callbacks run.
    pub fn remove(&mut self, id: &NotificationId) -> bool {
        let Some(pos) = self.position_of(id) else {
            log::trace!("remove of unknown notification {id}");
            return false;
        };
        let mut entry = self.entries.remove(pos);
        entry.lifecycle.teardown(&mut self.timers);
        true
    }

    /// Requests a close: the entry starts exiting and is removed after the
    /// exit animation.
    ///
    /// Returns `false` if the entry is unknown or already exiting.
    pub fn close(&mut self, id: &NotificationId, now: Instant) -> bool {
        match self.entries.iter_mut().find(|e| e.notification.id() == id) {
            Some(entry) => entry.lifecycle.request_close(id, now, &mut self.timers),
            None => false,
        }
    }

    /// Runs the entry's action callback, then requests its close.
    ///
    /// Exiting entries no longer accept actions.
    pub fn invoke_action(&mut self, id: &NotificationId, now: Instant) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.notification.id() == id) else {
            return false;
        };
        if entry.lifecycle.phase() != Phase::Shown {
            return false;
        }
        entry.notification.run_action();
        entry.lifecycle.request_close(id, now, &mut self.timers)
    }

    /// Empties the queue. Timers of cleared entries never fire.
    pub fn clear(&mut self) {
        for entry in &mut self.entries {
            entry.lifecycle.teardown(&mut self.timers);
        }
        self.entries.clear();
        self.timers.clear();
    }

    /// Fires every timer due at `now` and returns the ids removed as a result.
    ///
    /// An entry's `on_close` callback runs right before it leaves the queue.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut removed = Vec::new();

        while let Some(fired) = self.timers.pop_due(now) {
            let ToastTimer { id, kind } = fired.target;
            let Some(pos) = self.position_of(&id) else {
                log::trace!("timer for departed notification {id} ignored");
                continue;
            };

            let entry = &mut self.entries[pos];
            let step = entry
                .lifecycle
                .on_timer(&id, fired.handle, kind, fired.at, &mut self.timers);

            if step == Step::Removed {
                let entry = self.entries.remove(pos);
                entry.notification.run_on_close();
                removed.push(id);
            }
        }

        removed
    }

    /// Handles a notification message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Close(id) => {
                self.close(&id, Instant::now());
            }
            Message::Action(id) => {
                self.invoke_action(&id, Instant::now());
            }
            Message::Tick(now) => {
                self.tick(now);
            }
        }
    }

    /// Tick subscription, active only while a timer is pending.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.has_pending_timers() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Queue snapshot in insertion order.
    pub fn snapshot(&self) -> impl Iterator<Item = ToastView<'_>> {
        self.entries.iter().map(|entry| ToastView {
            notification: &entry.notification,
            phase: entry.lifecycle.phase(),
            lifecycle: &entry.lifecycle,
        })
    }

    #[must_use]
    pub fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.entries
            .iter()
            .find(|e| e.notification.id() == id)
            .map(|e| &e.notification)
    }

    #[must_use]
    pub fn phase(&self, id: &NotificationId) -> Option<Phase> {
        self.entries
            .iter()
            .find(|e| e.notification.id() == id)
            .map(|e| e.lifecycle.phase())
    }

    #[must_use]
    pub fn contains(&self, id: &NotificationId) -> bool {
        self.position_of(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    fn position_of(&self, id: &NotificationId) -> Option<usize> {
        self.entries.iter().position(|e| e.notification.id() == id)
    }
}
