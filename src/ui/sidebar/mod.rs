// SPDX-License-Identifier: MPL-2.0
//! Sliding sidebar navigation.
//!
//! - [`menu`] - Read-only `MenuItem` tree supplied by the host
//! - [`panel`] - `Panel` interaction state: open flag, expansion, activation
//! - [`view`] - Rendering of the open panel and its backdrop
//!
//! The host owns the tree and passes it to both [`Panel::update`] and
//! [`view::view`]; the panel only keeps id-keyed state about it.

pub mod menu;
mod panel;
pub mod view;

pub use menu::MenuItem;
pub use panel::{
    Activation, Event as PanelEvent, Message as PanelMessage, Panel, PanelOptions, PanelSnapshot,
    Side,
};
