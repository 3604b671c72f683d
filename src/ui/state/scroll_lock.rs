// SPDX-License-Identifier: MPL-2.0
//! Page-level scroll suppression.
//!
//! A [`PageScroll`] is the host page's "scrolling allowed" flag. A panel
//! holds a [`ScrollLockGuard`] while it is open; dropping the guard restores
//! scrolling, so the flag is released on every exit path including the
//! panel itself being dropped while open.
//!
//! Only one lock holder per page is expected. No nesting count is kept.

use std::cell::Cell;
use std::rc::Rc;

/// Shared scroll flag of a host page. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    suppressed: Rc<Cell<bool>>,
}

impl PageScroll {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a lock holder suppresses page scrolling.
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        self.suppressed.get()
    }

    /// Suppresses page scrolling until the returned guard is dropped.
    #[must_use = "scrolling is restored as soon as the guard is dropped"]
    pub fn lock(&self) -> ScrollLockGuard {
        self.suppressed.set(true);
        ScrollLockGuard { page: self.clone() }
    }
}

/// Restores page scrolling when dropped.
#[derive(Debug)]
pub struct ScrollLockGuard {
    page: PageScroll,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.page.suppressed.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_page_scrolls_freely() {
        assert!(!PageScroll::new().is_suppressed());
    }

    #[test]
    fn guard_suppresses_until_dropped() {
        let page = PageScroll::new();
        let guard = page.lock();
        assert!(page.is_suppressed());

        drop(guard);
        assert!(!page.is_suppressed());
    }

    #[test]
    fn clones_share_the_same_flag() {
        let page = PageScroll::new();
        let observer = page.clone();

        let _guard = page.lock();
        assert!(observer.is_suppressed());
    }

    #[test]
    fn pages_are_independent() {
        let first = PageScroll::new();
        let second = PageScroll::new();

        let _guard = first.lock();
        assert!(!second.is_suppressed());
    }
}
