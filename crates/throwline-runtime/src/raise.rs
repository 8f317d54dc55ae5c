//! The raise engine
//!
//! A raise either transfers control to the innermost open scope of the
//! calling thread, or, with no scope open, emits a diagnostic block and
//! terminates the process. It never returns and never waits on another
//! thread.

use std::panic;
use std::process;
use std::sync::Once;

use throwline_core::ErrorKind;

use crate::config::DiagConfig;
use crate::context;
use crate::diag;

/// Panic payload carrying a raised kind to the catching scope.
///
/// Only `try_scope` ever downcasts to this; everything else treats it as an
/// opaque in-flight transfer.
pub(crate) struct ThrowSignal {
    pub(crate) kind: ErrorKind,
}

static QUIET_HOOK: Once = Once::new();

/// Suppress the default panic banner for in-flight raises.
///
/// A raise is control transfer, not a program error; only genuine panics
/// reach the previous hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if info.payload().downcast_ref::<ThrowSignal>().is_some() {
                return;
            }
            prev(info);
        }));
    });
}

/// Raise `kind` toward the innermost open scope of this thread.
///
/// With no scope open this is the unhandled path: a diagnostic block goes
/// to stderr and the process terminates abnormally.
pub fn raise(kind: ErrorKind) -> ! {
    do_raise(kind, None)
}

/// Raise `kind` with a free-text description.
///
/// The message is diagnostic-only: it appears in the unhandled block but is
/// discarded when a scope catches the raise (dispatch is on kind alone).
pub fn raise_with(kind: ErrorKind, message: &str) -> ! {
    do_raise(kind, Some(message))
}

fn do_raise(kind: ErrorKind, message: Option<&str>) -> ! {
    if context::in_scope() {
        install_quiet_hook();
        panic::panic_any(ThrowSignal { kind });
    }
    diag::emit_unhandled(kind, message, &DiagConfig::from_env());
    process::abort();
}

/// Terminal entry point for the fault bridge.
///
/// The signal handler has already formatted `message` into pre-sized
/// storage. Unwinding cannot cross a signal frame, so this path never
/// attempts a transfer into a scope; the only outcome is diagnose then
/// terminate.
pub(crate) fn fault_terminate(message: &str) -> ! {
    diag::emit_unhandled(ErrorKind::FaultSegv, Some(message), &DiagConfig::from_env());
    process::abort();
}
