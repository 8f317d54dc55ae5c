//! # throwline - structured throw/catch for return-code code
//!
//! Exception-like error signaling layered on one-shot unwinding, with a
//! SIGSEGV bridge that reports hardware faults through the same diagnostic
//! channel.
//!
//! ## Model
//!
//! - A **scope** is a bounded region that intercepts raises from within.
//!   Scopes nest per thread; a raise always targets the innermost one.
//! - A **raise** signals an [`ErrorKind`], optionally with a message. Inside
//!   a scope it transfers control to that scope; outside any scope it emits
//!   a delimited diagnostic block (time, pid/tid, kind, stack trace) to
//!   stderr and terminates the process.
//! - The **fault bridge** converts SIGSEGV into a `FaultSegv` diagnostic on
//!   the same path, then terminates; faults are never resumable.
//!
//! ## Quick Start
//!
//! ```
//! use throwline::{attempt, raise, try_scope, ErrorKind, ScopeOutcome};
//!
//! fn checked_div(a: i32, b: i32) -> i32 {
//!     if b == 0 {
//!         raise(ErrorKind::DomainError);
//!     }
//!     a / b
//! }
//!
//! // Explicit dispatch on the outcome:
//! match try_scope(|| checked_div(10, 0)) {
//!     ScopeOutcome::Completed(v) => println!("quotient {}", v),
//!     ScopeOutcome::Caught(ErrorKind::DomainError) => println!("division by zero"),
//!     ScopeOutcome::Caught(other) => println!("caught {}", other),
//! }
//!
//! // Or the macro form: first matching arm wins, `_` is the catch-all.
//! let q = attempt!({ checked_div(10, 2) },
//!     ErrorKind::DomainError => 0,
//!     _ => -1,
//! );
//! assert_eq!(q, 5);
//! ```
//!
//! ## Environment Variables
//!
//! - `TL_LOG_LEVEL`, `TL_FLUSH_EPRINT` - leveled stderr logging
//! - `TL_MAX_FRAMES`, `TL_COLOR` - diagnostic block shape

// Re-export core types
pub use throwline_core::{ErrorKind, FaultBridgeError, TlResult};

// Re-export logging macros and controls
pub use throwline_core::log::{init as init_logging, set_log_level, LogLevel};
pub use throwline_core::{tl_debug, tl_error, tl_info, tl_warn};

// Re-export env utilities
pub use throwline_core::{env_get, env_get_bool, env_is_set};

// Re-export runtime operations
pub use throwline_runtime::{
    in_scope, install_fault_handler, raise, raise_with, scope_depth, try_scope, DiagConfig,
    ScopeOutcome,
};

/// Run a block inside a scope and dispatch any caught kind.
///
/// Sugar over [`try_scope`] plus `match`: the block's value is returned on
/// normal completion; on a caught raise the arms are tried in order and the
/// first matching one wins. Arms must be exhaustive over [`ErrorKind`];
/// end with a `_` catch-all unless every kind is listed.
///
/// ```
/// use throwline::{attempt, raise, ErrorKind};
///
/// let v = attempt!({ raise(ErrorKind::OutOfRange) },
///     ErrorKind::OutOfRange => 7,
///     _ => 0,
/// );
/// assert_eq!(v, 7);
/// ```
#[macro_export]
macro_rules! attempt {
    ($body:block $(, $kind:pat => $handler:expr)+ $(,)?) => {
        match $crate::try_scope(|| $body) {
            $crate::ScopeOutcome::Completed(val) => val,
            $crate::ScopeOutcome::Caught(caught) => match caught {
                $($kind => $handler,)+
            },
        }
    };
}
