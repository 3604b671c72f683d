// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Widgets follow the Elm-style "state down, messages up" pattern: each one
//! exposes a `Message`, an `update`, a `subscription` for its timers and a
//! view rendering its current snapshot.
//!
//! - [`notifications`] - Toast notification queue and lifecycle
//! - [`sidebar`] - Sliding navigation panel
//! - [`state`] - Timers, page scroll lock and callbacks shared by widgets
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod notifications;
pub mod sidebar;
pub mod state;
