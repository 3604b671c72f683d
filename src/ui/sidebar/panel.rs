// SPDX-License-Identifier: MPL-2.0
//! Sliding panel interaction state.
//!
//! The panel owns one open/closed flag, the set of expanded node ids and the
//! active node id. While open it holds a [`ScrollLockGuard`] on the host page
//! and reacts to Escape and outside presses. Closing is idempotent and may be
//! requested from several paths in the same tick.

use super::menu::{self, MenuItem};
use crate::config::{DEFAULT_SIDEBAR_TITLE, DEFAULT_SIDEBAR_WIDTH, LEAF_CLOSE_DELAY, TICK_INTERVAL};
use crate::ui::state::{Callback, PageScroll, Scheduler, ScrollLockGuard, TimerHandle};
use iced::{event, keyboard, time, window, Subscription};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

/// Screen edge the panel slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    Left,
    #[default]
    Right,
}

/// Presentation options fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelOptions {
    title: String,
    side: Side,
    width: f32,
    overlay: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_SIDEBAR_TITLE.to_owned(),
            side: Side::default(),
            width: DEFAULT_SIDEBAR_WIDTH,
            overlay: true,
        }
    }
}

impl PanelOptions {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Dims the page behind the open panel.
    #[must_use]
    pub fn overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }

    #[must_use]
    pub fn title_text(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn side_edge(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn width_px(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.overlay
    }
}

/// Host callback receiving the activated leaf item.
#[derive(Clone)]
struct ItemCallback(Rc<dyn Fn(&MenuItem)>);

impl fmt::Debug for ItemCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ItemCallback(..)")
    }
}

/// Observer notified when a leaf item is activated, invoked in list order.
enum Observer<'a> {
    Node(&'a Callback),
    Panel(&'a ItemCallback),
}

/// Messages emitted by the panel view and subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    Open,
    Toggle,
    Close,
    Activate(String),
    ToggleExpansion(String),
    EscapePressed,
    OutsidePointerDown,
    Tick(Instant),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Opened,
    Closed,
}

/// Result of activating a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Disabled node, nothing happened.
    Ignored,
    /// Branch node: expansion toggled to the given state.
    Toggled { expanded: bool },
    /// Leaf node: callbacks ran and a delayed close is pending.
    Activated,
}

/// Render state of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSnapshot {
    pub is_open: bool,
    pub expanded: BTreeSet<String>,
    pub active: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LeafClose;

#[derive(Debug)]
pub struct Panel {
    options: PanelOptions,
    is_open: bool,
    expanded: BTreeSet<String>,
    active: Option<String>,
    page: PageScroll,
    scroll_lock: Option<ScrollLockGuard>,
    timers: Scheduler<LeafClose>,
    close_timer: Option<TimerHandle>,
    on_close: Option<Callback>,
    on_item_click: Option<ItemCallback>,
}

impl Panel {
    /// Creates a closed panel that locks scrolling of `page` while open.
    #[must_use]
    pub fn new(page: PageScroll) -> Self {
        Self::with_options(PanelOptions::default(), page)
    }

    #[must_use]
    pub fn with_options(options: PanelOptions, page: PageScroll) -> Self {
        Self {
            options,
            is_open: false,
            expanded: BTreeSet::new(),
            active: None,
            page,
            scroll_lock: None,
            timers: Scheduler::new(),
            close_timer: None,
            on_close: None,
            on_item_click: None,
        }
    }

    /// Runs on every open → closed transition.
    #[must_use]
    pub fn on_close(mut self, on_close: impl Fn() + 'static) -> Self {
        self.on_close = Some(Callback::new(on_close));
        self
    }

    /// Runs after the item's own callback whenever a leaf is activated.
    #[must_use]
    pub fn on_item_click(mut self, on_item_click: impl Fn(&MenuItem) + 'static) -> Self {
        self.on_item_click = Some(ItemCallback(Rc::new(on_item_click)));
        self
    }

    #[must_use]
    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn has_pending_close(&self) -> bool {
        self.close_timer.is_some()
    }

    #[must_use]
    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            is_open: self.is_open,
            expanded: self.expanded.clone(),
            active: self.active.clone(),
        }
    }

    /// Opens the panel and suppresses page scrolling.
    ///
    /// Returns `false` if it was already open.
    pub fn open(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        self.is_open = true;
        self.scroll_lock = Some(self.page.lock());
        log::debug!("sidebar opened");
        true
    }

    /// Opens a closed panel or closes an open one. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        if self.is_open {
            self.request_close();
        } else {
            self.open();
        }
        self.is_open
    }

    /// Closes the panel, cancelling any pending delayed close.
    ///
    /// Returns `false` when already closed; no callback runs in that case.
    pub fn request_close(&mut self) -> bool {
        if let Some(handle) = self.close_timer.take() {
            self.timers.cancel(handle);
        }
        if !self.is_open {
            log::trace!("sidebar close ignored, already closed");
            return false;
        }

        self.is_open = false;
        self.scroll_lock = None;
        log::debug!("sidebar closed");
        if let Some(on_close) = &self.on_close {
            on_close.call();
        }
        true
    }

    /// Escape closes an open panel immediately.
    pub fn escape_pressed(&mut self) -> bool {
        self.is_open && self.request_close()
    }

    /// A press outside the panel closes it immediately.
    pub fn outside_pointer_down(&mut self) -> bool {
        self.is_open && self.request_close()
    }

    /// Flips the expansion of `id`. Unknown ids are tracked like any other.
    ///
    /// Returns whether the node is expanded afterwards.
    pub fn toggle_expansion(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_owned());
            true
        }
    }

    /// Activates a node: branches expand or collapse, leaves become active,
    /// notify their observers and close the panel after a short delay.
    pub fn activate(&mut self, item: &MenuItem, now: Instant) -> Activation {
        if item.is_disabled() {
            return Activation::Ignored;
        }
        if item.has_children() {
            let expanded = self.toggle_expansion(item.id());
            return Activation::Toggled { expanded };
        }

        self.active = Some(item.id().to_owned());
        log::debug!("sidebar item {} activated", item.id());

        let observers = item
            .callback()
            .map(Observer::Node)
            .into_iter()
            .chain(self.on_item_click.as_ref().map(Observer::Panel));
        for observer in observers {
            match observer {
                Observer::Node(callback) => callback.call(),
                Observer::Panel(callback) => (callback.0)(item),
            }
        }

        if let Some(previous) = self.close_timer.take() {
            self.timers.cancel(previous);
        }
        self.close_timer = self.timers.arm(now, LEAF_CLOSE_DELAY, LeafClose);
        Activation::Activated
    }

    /// Fires the delayed close if it is due. Returns `true` if the panel closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut closed = false;
        while let Some(fired) = self.timers.pop_due(now) {
            if self.close_timer == Some(fired.handle) {
                self.close_timer = None;
                closed |= self.request_close();
            } else {
                log::trace!("stale sidebar close timer ignored");
            }
        }
        closed
    }

    /// Handles a panel message. `items` is the tree the view rendered.
    pub fn update(&mut self, message: Message, items: &[MenuItem]) -> Event {
        let was_open = self.is_open;

        match message {
            Message::Open => {
                self.open();
            }
            Message::Toggle => {
                self.toggle();
            }
            Message::Close => {
                self.request_close();
            }
            Message::Activate(id) => match menu::find(items, &id) {
                Some(item) => {
                    self.activate(item, Instant::now());
                }
                None => log::trace!("activation of unknown sidebar item {id}"),
            },
            Message::ToggleExpansion(id) => {
                self.toggle_expansion(&id);
            }
            Message::EscapePressed => {
                self.escape_pressed();
            }
            Message::OutsidePointerDown => {
                self.outside_pointer_down();
            }
            Message::Tick(now) => {
                self.tick(now);
            }
        }

        match (was_open, self.is_open) {
            (false, true) => Event::Opened,
            (true, false) => Event::Closed,
            _ => Event::None,
        }
    }

    /// Escape listener while open, tick while a delayed close is pending.
    pub fn subscription(&self) -> Subscription<Message> {
        let escape = if self.is_open {
            event::listen_with(escape_key)
        } else {
            Subscription::none()
        };
        let tick = if self.has_pending_close() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };
        Subscription::batch([escape, tick])
    }
}

fn escape_key(event: event::Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    type Log = Rc<RefCell<Vec<String>>>;

    fn recorder(log: &Log, entry: &str) -> impl Fn() + 'static {
        let log = Rc::clone(log);
        let entry = entry.to_owned();
        move || log.borrow_mut().push(entry.clone())
    }

    #[test]
    fn new_panel_is_closed_and_page_scrolls() {
        let page = PageScroll::new();
        let panel = Panel::new(page.clone());
        assert!(!panel.is_open());
        assert!(!page.is_suppressed());
    }

    #[test]
    fn open_and_close_toggle_scroll_lock() {
        let page = PageScroll::new();
        let mut panel = Panel::new(page.clone());

        assert!(panel.open());
        assert!(page.is_suppressed());
        assert!(!panel.open());

        assert!(panel.request_close());
        assert!(!page.is_suppressed());
    }

    #[test]
    fn dropping_open_panel_restores_scroll() {
        let page = PageScroll::new();
        let mut panel = Panel::new(page.clone());
        panel.open();

        drop(panel);
        assert!(!page.is_suppressed());
    }

    #[test]
    fn close_is_idempotent() {
        let log = Log::default();
        let mut panel = Panel::new(PageScroll::new()).on_close(recorder(&log, "close"));
        panel.open();

        assert!(panel.request_close());
        assert!(!panel.request_close());
        assert_eq!(*log.borrow(), vec!["close"]);
    }

    #[test]
    fn escape_and_outside_press_close_open_panel() {
        let mut panel = Panel::new(PageScroll::new());
        panel.open();
        assert!(panel.escape_pressed());
        assert!(!panel.is_open());

        panel.open();
        assert!(panel.outside_pointer_down());
        assert!(!panel.is_open());
    }

    #[test]
    fn escape_and_outside_press_ignored_while_closed() {
        let log = Log::default();
        let page = PageScroll::new();
        let mut panel = Panel::new(page.clone()).on_close(recorder(&log, "close"));

        assert!(!panel.escape_pressed());
        assert!(!panel.outside_pointer_down());
        assert!(!panel.is_open());
        assert!(!page.is_suppressed());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn toggle_expansion_flips_membership() {
        let mut panel = Panel::new(PageScroll::new());
        assert!(panel.toggle_expansion("anything"));
        assert!(panel.is_expanded("anything"));
        assert!(!panel.toggle_expansion("anything"));
        assert!(!panel.is_expanded("anything"));
    }

    #[test]
    fn disabled_node_is_ignored() {
        let log = Log::default();
        let mut panel = Panel::new(PageScroll::new());
        let item = MenuItem::new("x", "X")
            .disabled(true)
            .on_click(recorder(&log, "node"));

        assert_eq!(panel.activate(&item, Instant::now()), Activation::Ignored);
        assert!(panel.active().is_none());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn branch_node_only_toggles_expansion() {
        let log = Log::default();
        let start = Instant::now();
        let mut panel = Panel::new(PageScroll::new()).on_item_click({
            let log = Rc::clone(&log);
            move |item: &MenuItem| log.borrow_mut().push(format!("panel:{}", item.id()))
        });
        panel.open();
        let branch = MenuItem::new("settings", "Settings")
            .on_click(recorder(&log, "node"))
            .children([MenuItem::new("profile", "Profile")]);

        assert_eq!(
            panel.activate(&branch, start),
            Activation::Toggled { expanded: true }
        );
        assert_eq!(
            panel.activate(&branch, start),
            Activation::Toggled { expanded: false }
        );
        assert!(!panel.tick(start + ms(1000)));
        assert!(panel.is_open());
        assert!(panel.active().is_none());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn leaf_activation_notifies_in_order_then_closes_after_delay() {
        let log = Log::default();
        let start = Instant::now();
        let mut panel = Panel::new(PageScroll::new())
            .on_item_click({
                let log = Rc::clone(&log);
                move |item: &MenuItem| log.borrow_mut().push(format!("panel:{}", item.id()))
            })
            .on_close(recorder(&log, "close"));
        panel.open();
        let leaf = MenuItem::new("home", "Home").on_click(recorder(&log, "node"));

        assert_eq!(panel.activate(&leaf, start), Activation::Activated);
        assert_eq!(panel.active(), Some("home"));
        assert_eq!(*log.borrow(), vec!["node", "panel:home"]);

        assert!(!panel.tick(start + ms(149)));
        assert!(panel.is_open());
        assert!(panel.tick(start + ms(150)));
        assert!(!panel.is_open());
        assert_eq!(*log.borrow(), vec!["node", "panel:home", "close"]);
    }

    #[test]
    fn explicit_close_cancels_delayed_close() {
        let start = Instant::now();
        let mut panel = Panel::new(PageScroll::new());
        panel.open();
        panel.activate(&MenuItem::new("home", "Home"), start);

        panel.escape_pressed();
        assert!(!panel.has_pending_close());

        // Reopened before the old delay would have elapsed: stays open.
        panel.open();
        assert!(!panel.tick(start + ms(500)));
        assert!(panel.is_open());
    }

    #[test]
    fn repeated_leaf_activation_restarts_delay() {
        let start = Instant::now();
        let mut panel = Panel::new(PageScroll::new());
        panel.open();
        panel.activate(&MenuItem::new("a", "A"), start);
        panel.activate(&MenuItem::new("b", "B"), start + ms(100));

        assert!(!panel.tick(start + ms(200)));
        assert!(panel.tick(start + ms(250)));
        assert_eq!(panel.active(), Some("b"));
    }

    fn key_press(named: keyboard::key::Named, code: keyboard::key::Code) -> event::Event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn escape_key_maps_to_escape_pressed() {
        let escape = key_press(keyboard::key::Named::Escape, keyboard::key::Code::Escape);
        assert!(matches!(
            escape_key(escape, event::Status::Ignored, window::Id::unique()),
            Some(Message::EscapePressed)
        ));
    }

    #[test]
    fn other_events_are_not_escape() {
        let enter = key_press(keyboard::key::Named::Enter, keyboard::key::Code::Enter);
        assert!(escape_key(enter, event::Status::Ignored, window::Id::unique()).is_none());

        let focus = event::Event::Window(window::Event::Focused);
        assert!(escape_key(focus, event::Status::Ignored, window::Id::unique()).is_none());
    }

    #[test]
    fn update_reports_transitions() {
        let items = vec![MenuItem::new("home", "Home")];
        let mut panel = Panel::new(PageScroll::new());

        assert_eq!(panel.update(Message::Toggle, &items), Event::Opened);
        assert_eq!(
            panel.update(Message::ToggleExpansion("x".into()), &items),
            Event::None
        );
        assert_eq!(panel.update(Message::EscapePressed, &items), Event::Closed);
        assert_eq!(panel.update(Message::EscapePressed, &items), Event::None);
    }

    #[test]
    fn update_activates_items_from_the_tree() {
        let items = vec![MenuItem::new("settings", "Settings")
            .children([MenuItem::new("profile", "Profile")])];
        let mut panel = Panel::new(PageScroll::new());
        panel.open();

        panel.update(Message::Activate("settings".into()), &items);
        assert!(panel.is_expanded("settings"));

        panel.update(Message::Activate("profile".into()), &items);
        assert_eq!(panel.active(), Some("profile"));
        assert!(panel.has_pending_close());

        panel.update(Message::Activate("missing".into()), &items);
        assert_eq!(panel.active(), Some("profile"));
    }

    #[test]
    fn snapshot_reflects_state() {
        let start = Instant::now();
        let mut panel = Panel::new(PageScroll::new());
        panel.open();
        panel.toggle_expansion("settings");
        panel.activate(&MenuItem::new("home", "Home"), start);

        let snapshot = panel.snapshot();
        assert!(snapshot.is_open);
        assert!(snapshot.expanded.contains("settings"));
        assert_eq!(snapshot.active.as_deref(), Some("home"));
    }

    #[test]
    fn options_builder() {
        let options = PanelOptions::default()
            .title("Navigate")
            .side(Side::Left)
            .width(280.0)
            .overlay(false);
        assert_eq!(options.title_text(), "Navigate");
        assert_eq!(options.side_edge(), Side::Left);
        assert_eq!(options.width_px(), 280.0);
        assert!(!options.has_overlay());
    }
}
