//! Fault bridge example
//!
//! Installs the SIGSEGV handler and then dereferences a null pointer, so
//! the hardware fault surfaces as a FAULT_SEGV diagnostic block before the
//! process terminates.

use throwline::{init_logging, install_fault_handler, tl_warn};

fn main() {
    println!("=== throwline Fault Bridge Example ===\n");
    init_logging();

    if let Err(e) = install_fault_handler() {
        // Not fatal: the platform default fault behavior stays in effect
        tl_warn!("fault bridge unavailable: {}", e);
    }

    println!("dereferencing a null pointer; expect a FAULT_SEGV diagnostic block\n");
    unsafe { std::ptr::null_mut::<u8>().write_volatile(1) };

    // A caught fault would resume here; the bridge never resumes
    unreachable!("execution cannot continue past an invalid memory access");
}
