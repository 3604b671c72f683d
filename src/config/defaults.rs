// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Auto-dismiss duration and exit animation timing
//! - **Sidebar**: Panel width and leaf-activation close delay
//! - **Scheduling**: Tick interval driving timers from the Iced runtime

use std::time::Duration;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default auto-dismiss duration for a toast (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Delay between entering the exiting phase and final removal.
///
/// Matches the length of the closing transition rendered by the view.
pub const EXIT_ANIMATION_DELAY: Duration = Duration::from_millis(300);

// ==========================================================================
// Sidebar Defaults
// ==========================================================================

/// Default panel width in logical pixels.
pub const DEFAULT_SIDEBAR_WIDTH: f32 = 320.0;

/// Minimum panel width accepted from configuration.
pub const MIN_SIDEBAR_WIDTH: f32 = 160.0;

/// Maximum panel width accepted from configuration.
pub const MAX_SIDEBAR_WIDTH: f32 = 960.0;

/// Default panel title.
pub const DEFAULT_SIDEBAR_TITLE: &str = "Menu";

/// Delay before the panel closes after a leaf item is activated, so the
/// active highlight is visible before the panel slides away.
pub const LEAF_CLOSE_DELAY: Duration = Duration::from_millis(150);

// ==========================================================================
// Scheduling Defaults
// ==========================================================================

/// Interval of the tick subscription while any timer is pending.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TOAST_DURATION_MS > 0);

    assert!(MIN_SIDEBAR_WIDTH > 0.0);
    assert!(MAX_SIDEBAR_WIDTH >= MIN_SIDEBAR_WIDTH);
    assert!(DEFAULT_SIDEBAR_WIDTH >= MIN_SIDEBAR_WIDTH);
    assert!(DEFAULT_SIDEBAR_WIDTH <= MAX_SIDEBAR_WIDTH);
};
