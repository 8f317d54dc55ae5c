//! Basic throwline example
//!
//! Demonstrates scoped catch dispatch, nesting, and the message-carrying
//! raise.
//!
//! # Environment Variables
//!
//! - `TL_LOG_LEVEL=debug` - Set log level (off, error, warn, info, debug)
//! - `TL_FLUSH_EPRINT=1` - Flush debug output immediately

use throwline::{attempt, raise, raise_with, scope_depth, try_scope, ErrorKind, ScopeOutcome};
use throwline::{init_logging, tl_info};

// TL_LOG_LEVEL=debug cargo run -p throwline-basic
fn main() {
    println!("=== throwline Basic Example ===\n");
    init_logging();

    // Macro form: first matching arm wins, `_` is the catch-all
    let value = attempt!({ checked_index(7, 3) },
        ErrorKind::OutOfRange => {
            tl_info!("caught OUT_OF_RANGE, substituting 0");
            0
        },
        _ => -1,
    );
    println!("checked_index(7, 3) resolved to {}", value);

    // Explicit form: dispatch on the outcome with a plain match
    match try_scope(|| checked_index(1, 3)) {
        ScopeOutcome::Completed(v) => println!("checked_index(1, 3) completed with {}", v),
        ScopeOutcome::Caught(kind) => println!("unexpectedly caught {}", kind),
    }

    // Nested scopes: the inner catch-all consumes the raise
    let outer = try_scope(|| {
        let inner = attempt!({ raise_with(ErrorKind::RuntimeError, "inner failure") },
            _ => "handled inside",
        );
        println!("inner scope said: {}", inner);
        assert_eq!(scope_depth(), 1);
        "outer never saw it"
    });
    println!("outer scope: {:?}\n", outer);

    println!("raising UNKNOWN_ERROR with no scope open; expect a diagnostic block");
    raise_with(ErrorKind::UnknownError, "demonstration of the unhandled path");
}

fn checked_index(idx: usize, len: usize) -> i32 {
    if idx >= len {
        raise(ErrorKind::OutOfRange);
    }
    (idx * 10) as i32
}
