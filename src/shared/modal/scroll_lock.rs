//! Document-global scroll lock shared by all open modal dialogs.
//!
//! The lock is reference-counted: the page stays unscrollable while at least
//! one dialog holds it, and closing one of several open dialogs does not
//! unlock scrolling for the rest.

use std::cell::RefCell;

use log::debug;

/// Pure acquire/release counter. `acquire`/`release` report whether the
/// locked/unlocked transition happened, so the DOM side effect runs only on
/// the edges.
#[derive(Debug, Default)]
struct Refcount(usize);

impl Refcount {
    fn acquire(&mut self) -> bool {
        self.0 += 1;
        self.0 == 1
    }

    fn release(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        self.0 == 0
    }
}

thread_local! {
    static OPEN_DIALOGS: RefCell<Refcount> = RefCell::new(Refcount::default());
}

/// Registers one more open dialog; locks body scrolling on the first.
pub fn acquire() {
    if OPEN_DIALOGS.with(|c| c.borrow_mut().acquire()) {
        debug!("scroll lock acquired");
        set_body_overflow(Some("hidden"));
    }
}

/// Unregisters an open dialog; restores body scrolling when none remain.
pub fn release() {
    if OPEN_DIALOGS.with(|c| c.borrow_mut().release()) {
        debug!("scroll lock released");
        set_body_overflow(None);
    }
}

fn set_body_overflow(value: Option<&str>) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    match value {
        Some(v) => {
            let _ = body.style().set_property("overflow", v);
        }
        None => {
            let _ = body.style().remove_property("overflow");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_acquire_locks() {
        let mut count = Refcount::default();
        assert!(count.acquire());
    }

    #[test]
    fn nested_acquire_does_not_relock() {
        let mut count = Refcount::default();
        assert!(count.acquire());
        assert!(!count.acquire());
    }

    #[test]
    fn releasing_one_of_two_keeps_the_lock() {
        let mut count = Refcount::default();
        count.acquire();
        count.acquire();
        assert!(!count.release());
        assert!(count.release());
    }

    #[test]
    fn final_release_unlocks() {
        let mut count = Refcount::default();
        count.acquire();
        assert!(count.release());
    }

    #[test]
    fn release_without_acquire_is_inert() {
        let mut count = Refcount::default();
        assert!(!count.release());
        // A later acquire still behaves as the first one.
        assert!(count.acquire());
    }
}
