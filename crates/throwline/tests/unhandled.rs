//! Golden checks for the unhandled path.
//!
//! The unhandled path terminates the process, so each scenario re-runs this
//! test binary as a child with a trigger variable set. The `child_*` tests
//! are no-ops in a normal run; under the trigger they perform the raise (or
//! the deliberate fault) and never return. The parent asserts on the
//! child's exit status and captured stderr block.

use std::process::{Command, Output};

const BANNER_OPEN: &str = "==================== EXCEPTION THROW ====================";
const BANNER_CLOSE: &str = "==================== END EXCEPTION ======================";
const TRIGGER: &str = "TL_TEST_TRIGGER";

fn run_child(test_name: &str) -> Output {
    Command::new(std::env::current_exe().expect("no current exe"))
        .args(["--exact", test_name, "--nocapture", "--test-threads=1"])
        .env(TRIGGER, "1")
        .output()
        .expect("failed to spawn child test process")
}

fn triggered() -> bool {
    std::env::var(TRIGGER).is_ok()
}

/// Pull one `Field: value` line out of a diagnostic block
fn field<'a>(block: &'a str, prefix: &str) -> Option<&'a str> {
    block
        .lines()
        .find(|l| l.starts_with(prefix))
        .map(|l| &l[prefix.len()..])
}

fn assert_block_shape(stderr: &str, kind_name: &str) {
    assert!(stderr.contains(BANNER_OPEN), "missing open banner:\n{}", stderr);
    assert!(stderr.contains(BANNER_CLOSE), "missing close banner:\n{}", stderr);
    assert_eq!(
        field(stderr, "Exception: "),
        Some(kind_name),
        "wrong kind in:\n{}",
        stderr
    );

    let stamp = field(stderr, "Time: ").expect("missing Time line");
    assert!(
        chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S").is_ok(),
        "malformed timestamp: {}",
        stamp
    );

    let ids = field(stderr, "Process ID: ").expect("missing id line");
    assert!(ids.contains(", Thread ID: "), "malformed id line: {}", ids);

    assert!(
        stderr.contains("Stack trace (most recent call first):"),
        "missing stack trace header:\n{}",
        stderr
    );

    // Piped stderr is not a tty, so the block must be style-free
    assert!(!stderr.contains('\x1b'), "ANSI styling leaked into piped output");
}

// Child entry points (no-ops without the trigger)

#[test]
fn child_raise_no_scope() {
    if !triggered() {
        return;
    }
    throwline::raise(throwline::ErrorKind::LogicError);
}

#[test]
fn child_raise_no_scope_with_message() {
    if !triggered() {
        return;
    }
    throwline::raise_with(throwline::ErrorKind::OutOfRange, "index 7 beyond length 3");
}

#[test]
fn child_raise_caught_in_scope() {
    if !triggered() {
        return;
    }
    let outcome = throwline::try_scope(|| -> u32 {
        throwline::raise_with(throwline::ErrorKind::RuntimeError, "scoped secret")
    });
    assert_eq!(outcome.caught(), Some(throwline::ErrorKind::RuntimeError));
    // Exits normally: nothing may have been emitted
}

#[cfg(unix)]
#[test]
fn child_segv_no_scope() {
    if !triggered() {
        return;
    }
    throwline::install_fault_handler().expect("fault bridge install failed");
    // Deliberate invalid memory access
    unsafe { std::ptr::null_mut::<u8>().write_volatile(1) };
}

// Parent assertions

#[test]
fn unhandled_raise_terminates_with_block() {
    let out = run_child("child_raise_no_scope");
    assert!(!out.status.success(), "child must terminate abnormally");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_block_shape(&stderr, "LOGIC_ERROR");
    assert!(
        !stderr.contains("Description:"),
        "no description was supplied:\n{}",
        stderr
    );
}

#[test]
fn unhandled_raise_surfaces_message() {
    let out = run_child("child_raise_no_scope_with_message");
    assert!(!out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_block_shape(&stderr, "OUT_OF_RANGE");
    assert_eq!(
        field(&stderr, "Description: "),
        Some("index 7 beyond length 3")
    );
}

#[test]
fn caught_raise_emits_nothing() {
    let out = run_child("child_raise_caught_in_scope");
    assert!(out.status.success(), "caught raise must not kill the child");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(!stderr.contains(BANNER_OPEN), "caught raise leaked a block:\n{}", stderr);
    assert!(
        !stderr.contains("scoped secret"),
        "message must be discarded on the scoped path:\n{}",
        stderr
    );
}

#[cfg(unix)]
#[test]
fn segv_reports_fault_kind_and_address() {
    let out = run_child("child_segv_no_scope");
    assert!(!out.status.success(), "faulting child must terminate abnormally");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_block_shape(&stderr, "FAULT_SEGV");

    let desc = field(&stderr, "Description: ").expect("fault block missing description");
    assert!(
        desc.starts_with("invalid memory access (SIGSEGV) at address 0x"),
        "unexpected fault description: {}",
        desc
    );
}
