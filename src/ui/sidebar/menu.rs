// SPDX-License-Identifier: MPL-2.0
//! Navigation tree supplied by the host.
//!
//! The tree is read-only input: the panel tracks expansion and activation
//! in its own id-keyed side table and never mutates the items.

use crate::ui::state::Callback;

/// One entry of the navigation tree.
#[derive(Debug, Clone)]
pub struct MenuItem {
    id: String,
    label: String,
    badge: Option<String>,
    href: Option<String>,
    disabled: bool,
    on_click: Option<Callback>,
    children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            badge: None,
            href: None,
            disabled: false,
            on_click: None,
            children: Vec::new(),
        }
    }

    /// Badge shown next to the label, e.g. an unread count.
    #[must_use]
    pub fn badge(mut self, badge: impl ToString) -> Self {
        self.badge = Some(badge.to_string());
        self
    }

    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn on_click(mut self, on_click: impl Fn() + 'static) -> Self {
        self.on_click = Some(Callback::new(on_click));
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = MenuItem>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn badge_text(&self) -> Option<&str> {
        self.badge.as_deref()
    }

    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.href.as_deref()
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// A node is a branch only when it owns at least one child.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    #[must_use]
    pub fn child_items(&self) -> &[MenuItem] {
        &self.children
    }

    pub(super) fn callback(&self) -> Option<&Callback> {
        self.on_click.as_ref()
    }
}

/// Depth-first lookup of `id` in `items`.
#[must_use]
pub fn find<'a>(items: &'a [MenuItem], id: &str) -> Option<&'a MenuItem> {
    items.iter().find_map(|item| {
        if item.id == id {
            Some(item)
        } else {
            find(&item.children, id)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<MenuItem> {
        vec![
            MenuItem::new("home", "Home"),
            MenuItem::new("settings", "Settings").children([
                MenuItem::new("profile", "Profile"),
                MenuItem::new("advanced", "Advanced")
                    .children([MenuItem::new("danger", "Danger zone").disabled(true)]),
            ]),
        ]
    }

    #[test]
    fn find_walks_nested_children() {
        let items = tree();
        assert_eq!(find(&items, "home").map(MenuItem::label), Some("Home"));
        assert_eq!(find(&items, "danger").map(MenuItem::label), Some("Danger zone"));
        assert!(find(&items, "missing").is_none());
    }

    #[test]
    fn empty_children_is_a_leaf() {
        let item = MenuItem::new("x", "X").children(Vec::new());
        assert!(!item.has_children());
    }

    #[test]
    fn badge_accepts_numbers_and_text() {
        assert_eq!(MenuItem::new("a", "A").badge(3).badge_text(), Some("3"));
        assert_eq!(MenuItem::new("a", "A").badge("new").badge_text(), Some("new"));
    }

    #[test]
    fn builder_sets_fields() {
        let item = MenuItem::new("docs", "Docs").href("/docs").disabled(true);
        assert_eq!(item.id(), "docs");
        assert_eq!(item.link(), Some("/docs"));
        assert!(item.is_disabled());
        assert!(item.callback().is_none());
    }
}
