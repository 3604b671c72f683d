// SPDX-License-Identifier: MPL-2.0
//! Per-notification lifecycle: `Shown → Exiting → Removed`.
//!
//! A [`Lifecycle`] owns the handles of the timers it arms. Leaving `Shown`
//! cancels the auto-dismiss timer, and [`Lifecycle::teardown`] cancels
//! whatever is still pending, so a timer never outlives its notification.
//! Timers delivered with a handle the lifecycle no longer holds are stale
//! and ignored.

use super::notification::NotificationId;
use crate::config::EXIT_ANIMATION_DELAY;
use crate::ui::state::{Scheduler, TimerHandle};
use std::time::{Duration, Instant};

/// Observable phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// On screen (including the entering transition).
    Shown,
    /// Closing transition running; removal follows after the exit delay.
    Exiting,
    /// Terminal. The entry is gone from the queue.
    Removed,
}

/// Which of a notification's timers fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    AutoDismiss,
    ExitAnimation,
}

/// Timer payload stored in the manager's scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastTimer {
    pub id: NotificationId,
    pub kind: TimerKind,
}

/// Outcome of feeding a fired timer to a lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Stale or unexpected timer, nothing changed.
    Ignored,
    /// Auto-dismiss fired and the exit animation started.
    Exiting,
    /// Exit animation finished; the owner must drop the entry.
    Removed,
}

#[derive(Debug)]
pub struct Lifecycle {
    phase: Phase,
    duration: Duration,
    mounted_at: Instant,
    dismiss_timer: Option<TimerHandle>,
    exit_timer: Option<TimerHandle>,
}

impl Lifecycle {
    /// Starts a lifecycle in `Shown`, arming auto-dismiss unless `duration`
    /// is zero.
    ///
    /// A duration reaching past the clock's range never elapses, so the
    /// notification stays until closed.
    pub fn mount(
        id: &NotificationId,
        duration: Duration,
        now: Instant,
        timers: &mut Scheduler<ToastTimer>,
    ) -> Self {
        let dismiss_timer = if duration.is_zero() {
            None
        } else {
            timers.arm(
                now,
                duration,
                ToastTimer {
                    id: id.clone(),
                    kind: TimerKind::AutoDismiss,
                },
            )
        };

        Self {
            phase: Phase::Shown,
            duration,
            mounted_at: now,
            dismiss_timer,
            exit_timer: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.phase == Phase::Exiting
    }

    /// Fraction of the auto-dismiss time still remaining, from 1.0 to 0.0.
    ///
    /// Returns `None` for notifications that never auto-dismiss.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<f32> {
        if self.duration.is_zero() {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.mounted_at);
        let fraction = 1.0 - elapsed.as_secs_f32() / self.duration.as_secs_f32();
        Some(fraction.clamp(0.0, 1.0))
    }

    /// Starts the exit animation at `at`.
    ///
    /// Returns `false` when the lifecycle already left `Shown`.
    pub fn request_close(
        &mut self,
        id: &NotificationId,
        at: Instant,
        timers: &mut Scheduler<ToastTimer>,
    ) -> bool {
        if self.phase != Phase::Shown {
            log::trace!("close of {id} ignored, already {:?}", self.phase);
            return false;
        }

        if let Some(handle) = self.dismiss_timer.take() {
            timers.cancel(handle);
        }
        self.phase = Phase::Exiting;
        self.exit_timer = timers.arm(
            at,
            EXIT_ANIMATION_DELAY,
            ToastTimer {
                id: id.clone(),
                kind: TimerKind::ExitAnimation,
            },
        );
        if self.exit_timer.is_none() {
            log::warn!("exit animation of {id} could not be scheduled");
        }
        log::debug!("notification {id} exiting");
        true
    }

    /// Advances the lifecycle for a fired timer.
    pub fn on_timer(
        &mut self,
        id: &NotificationId,
        handle: TimerHandle,
        kind: TimerKind,
        at: Instant,
        timers: &mut Scheduler<ToastTimer>,
    ) -> Step {
        match kind {
            TimerKind::AutoDismiss if self.dismiss_timer == Some(handle) => {
                self.dismiss_timer = None;
                if self.request_close(id, at, timers) {
                    Step::Exiting
                } else {
                    Step::Ignored
                }
            }
            TimerKind::ExitAnimation if self.exit_timer == Some(handle) => {
                self.exit_timer = None;
                self.phase = Phase::Removed;
                log::debug!("notification {id} removed");
                Step::Removed
            }
            _ => {
                log::trace!("stale {kind:?} timer for {id} ignored");
                Step::Ignored
            }
        }
    }

    /// Cancels pending timers and moves to the terminal phase.
    pub fn teardown(&mut self, timers: &mut Scheduler<ToastTimer>) {
        for handle in [self.dismiss_timer.take(), self.exit_timer.take()]
            .into_iter()
            .flatten()
        {
            timers.cancel(handle);
        }
        self.phase = Phase::Removed;
    }
}
