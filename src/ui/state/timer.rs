// SPDX-License-Identifier: MPL-2.0
//! Deterministic timer scheduling for widget lifecycles.
//!
//! Every armed timer is identified by a [`TimerHandle`] that its owner keeps
//! alongside its own state. Owners cancel their handles on teardown, so a
//! timer can never fire on behalf of an entity that no longer exists.
//!
//! Time never advances on its own: callers pass the current [`Instant`] to
//! [`Scheduler::pop_due`], typically from an Iced tick subscription.
//!
//! # Example
//!
//! ```
//! use iced_overlays::ui::state::Scheduler;
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut timers = Scheduler::new();
//! let handle = timers.arm(start, Duration::from_millis(300), "fade").unwrap();
//!
//! assert!(timers.pop_due(start + Duration::from_millis(299)).is_none());
//!
//! let fired = timers.pop_due(start + Duration::from_millis(300)).unwrap();
//! assert_eq!(fired.handle, handle);
//! assert_eq!(fired.target, "fade");
//! assert!(!timers.cancel(handle)); // already fired
//! ```

use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

/// Identity of one armed timer. Handles are never reused by a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// A timer whose deadline has been reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    pub handle: TimerHandle,
    /// The deadline the timer was armed for (not the time it was observed).
    pub at: Instant,
    pub target: T,
}

/// Pending timers ordered by deadline, ties broken by arming order.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_handle: u64,
    pending: BTreeMap<(Instant, TimerHandle), T>,
    deadlines: HashMap<TimerHandle, Instant>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_handle: 0,
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a timer that becomes due `delay` after `now`.
    ///
    /// Returns `None` when the deadline lies beyond what [`Instant`] can
    /// represent; such a timer could never fire, so nothing is armed.
    pub fn arm(&mut self, now: Instant, delay: Duration, target: T) -> Option<TimerHandle> {
        let Some(deadline) = now.checked_add(delay) else {
            log::debug!("timer {delay:?} past the clock range not armed");
            return None;
        };

        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.insert((deadline, handle), target);
        self.deadlines.insert(handle, deadline);
        Some(handle)
    }

    /// Cancels a pending timer.
    ///
    /// Returns `false` if the handle already fired or was cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle) {
            Some(deadline) => self.pending.remove(&(deadline, handle)).is_some(),
            None => false,
        }
    }

    /// Removes and returns the earliest timer due at `now`, if any.
    ///
    /// Call in a loop: handlers may arm follow-up timers that are already
    /// due within the same tick.
    pub fn pop_due(&mut self, now: Instant) -> Option<Fired<T>> {
        let (&(deadline, handle), _) = self.pending.first_key_value()?;
        if deadline > now {
            return None;
        }
        let target = self.pending.remove(&(deadline, handle))?;
        self.deadlines.remove(&handle);
        Some(Fired {
            handle,
            at: deadline,
            target,
        })
    }

    #[must_use]
    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle)
    }

    #[must_use]
    pub fn deadline(&self, handle: TimerHandle) -> Option<Instant> {
        self.deadlines.get(&handle).copied()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.deadlines.clear();
    }
}
