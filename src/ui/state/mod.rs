// SPDX-License-Identifier: MPL-2.0
//! UI state primitives shared by the widgets.
//!
//! These types carry no rendering concerns, following the principle of
//! separation of concerns: widgets keep their timers, callbacks and page
//! locks here and render from snapshots.

pub mod callback;
pub mod scroll_lock;
pub mod timer;

// Re-export commonly used types for convenience
pub use callback::Callback;
pub use scroll_lock::{PageScroll, ScrollLockGuard};
pub use timer::{Fired, Scheduler, TimerHandle};
