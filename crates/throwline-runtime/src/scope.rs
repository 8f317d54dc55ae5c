//! Try-scopes: bounded regions that intercept raises
//!
//! A scope is a one-shot resumption point. `try_scope` opens it, runs the
//! body, and reports either normal completion or the kind recorded by a
//! raise that targeted it. The scope closes before the outcome is returned,
//! so handler code dispatching on the outcome already runs under the
//! enclosing scope (or none).

use std::panic::{self, AssertUnwindSafe};

use throwline_core::ErrorKind;

use crate::context::{ScopeFrame, ScopeGuard};
use crate::raise::ThrowSignal;

/// How a scope body finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeOutcome<T> {
    /// Body ran to the end; carries its value
    Completed(T),

    /// A raise inside the scope transferred control here; carries the kind
    Caught(ErrorKind),
}

impl<T> ScopeOutcome<T> {
    /// The caught kind, if any
    #[inline]
    pub fn caught(&self) -> Option<ErrorKind> {
        match self {
            ScopeOutcome::Completed(_) => None,
            ScopeOutcome::Caught(kind) => Some(*kind),
        }
    }

    /// The completed value, if any
    #[inline]
    pub fn completed(self) -> Option<T> {
        match self {
            ScopeOutcome::Completed(v) => Some(v),
            ScopeOutcome::Caught(_) => None,
        }
    }
}

/// Open a scope, run `body` inside it, and intercept any raise from within.
///
/// Nesting is unbounded; a raise always targets the innermost open scope of
/// the calling thread. Panics that are not throwline raises pass through
/// unchanged (the scope closes first).
///
/// The caller dispatches on the returned outcome, typically with `match`:
/// first matching arm wins, `_` is the catch-all.
pub fn try_scope<T, F>(body: F) -> ScopeOutcome<T>
where
    F: FnOnce() -> T,
{
    let frame = ScopeFrame::new();
    let guard = ScopeGuard::enter(&frame);
    let result = panic::catch_unwind(AssertUnwindSafe(body));
    // Close the scope before dispatch: a raise from a handler arm must
    // target the enclosing scope, never this consumed one.
    drop(guard);

    match result {
        Ok(value) => ScopeOutcome::Completed(value),
        Err(payload) => match payload.downcast::<ThrowSignal>() {
            Ok(signal) => ScopeOutcome::Caught(signal.kind),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::scope_depth;
    use crate::raise::{raise, raise_with};

    #[test]
    fn completed_carries_value() {
        let outcome = try_scope(|| 40 + 2);
        assert_eq!(outcome, ScopeOutcome::Completed(42));
        assert_eq!(outcome.caught(), None);
    }

    #[test]
    fn raise_is_caught_with_its_kind() {
        let outcome = try_scope(|| -> u32 { raise(ErrorKind::DomainError) });
        assert_eq!(outcome, ScopeOutcome::Caught(ErrorKind::DomainError));
    }

    #[test]
    fn message_does_not_affect_dispatch() {
        let outcome =
            try_scope(|| -> u32 { raise_with(ErrorKind::LengthError, "too long by 3") });
        assert_eq!(outcome.caught(), Some(ErrorKind::LengthError));
    }

    #[test]
    fn innermost_scope_catches() {
        let outcome = try_scope(|| {
            let inner = try_scope(|| -> u32 { raise(ErrorKind::OverflowError) });
            assert_eq!(inner.caught(), Some(ErrorKind::OverflowError));
            7u32
        });
        // The outer scope saw nothing
        assert_eq!(outcome, ScopeOutcome::Completed(7));
    }

    #[test]
    fn depth_restored_after_caught_raise() {
        assert_eq!(scope_depth(), 0);
        let _ = try_scope(|| -> u32 { raise(ErrorKind::LogicError) });
        assert_eq!(scope_depth(), 0);
    }

    #[test]
    fn foreign_panic_passes_through() {
        let result = std::panic::catch_unwind(|| {
            try_scope(|| -> u32 { panic!("not a raise") })
        });
        assert!(result.is_err());
        // And the scope still closed on the way out
        assert_eq!(scope_depth(), 0);
    }
}
