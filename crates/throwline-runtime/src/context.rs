//! Thread-local scope chain
//!
//! Each thread owns a chain of open scope frames, innermost first. Frames
//! live on the stack of the `try_scope` call that opened them; the chain
//! holds raw pointers into those frames, valid exactly while the scope is
//! open (strict LIFO discipline, enforced by the RAII guard).

use std::cell::Cell;
use std::ptr;

thread_local! {
    /// Innermost open scope frame for this thread, or null
    static CURRENT_FRAME: Cell<*const ScopeFrame> = const { Cell::new(ptr::null()) };
}

/// One open scope: active flag plus the frame that was current when it
/// opened. Never shared across threads.
pub(crate) struct ScopeFrame {
    active: Cell<bool>,
    prev: Cell<*const ScopeFrame>,
}

impl ScopeFrame {
    pub(crate) fn new() -> Self {
        Self {
            active: Cell::new(false),
            prev: Cell::new(ptr::null()),
        }
    }
}

/// RAII push/pop of a scope frame.
///
/// `enter` records the previous current frame and makes this one current;
/// drop restores the previous frame (possibly none). Drop runs on every
/// exit path out of a scope, so the chain can never point at a dead frame.
pub(crate) struct ScopeGuard<'a> {
    frame: &'a ScopeFrame,
}

impl<'a> ScopeGuard<'a> {
    pub(crate) fn enter(frame: &'a ScopeFrame) -> Self {
        CURRENT_FRAME.with(|cell| {
            frame.prev.set(cell.get());
            frame.active.set(true);
            cell.set(frame as *const ScopeFrame);
        });
        Self { frame }
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.frame.active.set(false);
        CURRENT_FRAME.with(|cell| cell.set(self.frame.prev.get()));
    }
}

/// Check if the calling thread has an open scope a raise can target.
///
/// Re-checked at every raise: once a scope closes it is unreachable, so a
/// resumption point can never be invoked after its scope exits.
#[inline]
pub fn in_scope() -> bool {
    CURRENT_FRAME.with(|cell| {
        let p = cell.get();
        // Chained frames are alive while their scope is open
        !p.is_null() && unsafe { (*p).active.get() }
    })
}

/// Number of open scopes on the calling thread
pub fn scope_depth() -> usize {
    let mut depth = 0;
    let mut p = CURRENT_FRAME.with(|cell| cell.get());
    while !p.is_null() {
        depth += 1;
        p = unsafe { (*p).prev.get() };
    }
    depth
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_scope_initially() {
        assert!(!in_scope());
        assert_eq!(scope_depth(), 0);
    }

    #[test]
    fn guard_push_pop_restores_previous() {
        let outer = ScopeFrame::new();
        {
            let _g1 = ScopeGuard::enter(&outer);
            assert!(in_scope());
            assert_eq!(scope_depth(), 1);

            let inner = ScopeFrame::new();
            {
                let _g2 = ScopeGuard::enter(&inner);
                assert_eq!(scope_depth(), 2);
            }
            // Inner closed: back to exactly the outer frame
            assert!(in_scope());
            assert_eq!(scope_depth(), 1);
        }
        assert!(!in_scope());
        assert_eq!(scope_depth(), 0);
    }

    #[test]
    fn chains_are_per_thread() {
        let frame = ScopeFrame::new();
        let _g = ScopeGuard::enter(&frame);
        assert_eq!(scope_depth(), 1);

        let handle = std::thread::spawn(|| {
            assert!(!in_scope());
            assert_eq!(scope_depth(), 0);
        });
        handle.join().unwrap();

        assert_eq!(scope_depth(), 1);
    }
}
