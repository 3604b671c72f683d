// SPDX-License-Identifier: MPL-2.0
//! `iced_overlays` provides toast notifications and a sliding sidebar
//! navigation panel for applications built with the Iced GUI framework.
//!
//! Both widgets keep their state machines independent of rendering: time is
//! passed in explicitly, every timer has an owner that cancels it on
//! teardown, and views render from snapshots.

#![doc(html_root_url = "https://docs.rs/iced_overlays/0.1.0")]

pub mod config;
pub mod error;
pub mod ui;

pub use error::{Error, Result};
