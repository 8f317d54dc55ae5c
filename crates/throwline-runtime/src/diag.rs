//! Diagnostic block emission for the unhandled path
//!
//! Builds the full block in a private buffer and writes it to stderr under
//! the handle lock in one call, so blocks from concurrently-failing threads
//! stay internally contiguous.

use std::backtrace::Backtrace;
use std::io::Write;

use throwline_core::constants::{BANNER_CLOSE, BANNER_OPEN, TIME_FORMAT};
use throwline_core::ErrorKind;

use crate::config::DiagConfig;

const RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Emit the unhandled-raise diagnostic block for `kind` to stderr.
///
/// Field order is fixed and machine-checked by golden tests; color is
/// cosmetic and applied only when the config enables it.
pub fn emit_unhandled(kind: ErrorKind, message: Option<&str>, config: &DiagConfig) {
    let block = render_block(kind, message, config);
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = handle.write_all(block.as_bytes());
    let _ = handle.flush();
}

fn render_block(kind: ErrorKind, message: Option<&str>, config: &DiagConfig) -> String {
    let mut out = String::with_capacity(2048);

    if config.color {
        out.push_str(RED);
    }
    out.push_str(BANNER_OPEN);
    out.push('\n');

    let now = chrono::Local::now();
    out.push_str(&format!("Time: {}\n", now.format(TIME_FORMAT)));
    out.push_str(&format!(
        "Process ID: {}, Thread ID: {}\n",
        std::process::id(),
        thread_id()
    ));
    out.push_str(&format!("Exception: {}\n", kind.display_name()));
    if let Some(msg) = message {
        out.push_str(&format!("Description: {}\n", msg));
    }
    out.push_str(&format!(
        "Build: {} {}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));

    out.push_str("Stack trace (most recent call first):\n");
    let bt = Backtrace::force_capture().to_string();
    let mut frames = 0;
    for line in bt.lines() {
        let trimmed = line.trim_start();
        // Keep "N: symbol" frame lines; drop the "at file:line" continuations
        let is_frame = trimmed
            .split_once(':')
            .is_some_and(|(idx, _)| !idx.is_empty() && idx.bytes().all(|b| b.is_ascii_digit()));
        if !is_frame {
            continue;
        }
        if frames >= config.max_frames {
            out.push_str("  ...\n");
            break;
        }
        out.push_str("  ");
        out.push_str(trimmed);
        out.push('\n');
        frames += 1;
    }

    out.push_str(BANNER_CLOSE);
    out.push('\n');
    if config.color {
        out.push_str(RESET);
    }
    out
}

#[cfg(unix)]
fn thread_id() -> usize {
    nix::sys::pthread::pthread_self() as usize
}

#[cfg(not(unix))]
fn thread_id() -> usize {
    // No pthread identity; hash of the opaque std id is stable enough
    use std::hash::{Hash, Hasher};
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    std::thread::current().id().hash(&mut hasher);
    hasher.finish() as usize
}
