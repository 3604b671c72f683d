// SPDX-License-Identifier: MPL-2.0
//! Host-supplied callbacks.
//!
//! Widgets run on the UI thread only, so callbacks are reference counted
//! with `Rc` and cloned along with the data that carries them.

use std::fmt;
use std::rc::Rc;

/// A cloneable, argument-less host callback.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_invoke_the_same_closure() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let callback = Callback::new(move || counter.set(counter.get() + 1));

        callback.call();
        callback.clone().call();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn debug_does_not_expose_closure() {
        let callback = Callback::new(|| {});
        assert_eq!(format!("{callback:?}"), "Callback(..)");
    }
}
