//! Fault bridge: SIGSEGV to the exception channel
//!
//! Converts an invalid memory access into a `FaultSegv` diagnostic through
//! the same reporting path as a software raise. The process still
//! terminates; a fault leaves the program in an undefined state and
//! unwinding cannot cross a signal frame, so the only supported outcome is
//! diagnose-then-terminate.

cfg_if::cfg_if! {
    if #[cfg(unix)] {

mod platform {
    use std::ptr;
    use std::sync::atomic::{AtomicBool, Ordering};

    use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};
    use throwline_core::{FaultBridgeError, TlResult};

    use crate::raise;

    /// Alternate signal stack size. Generous headroom so a fault caused by
    /// stack exhaustion can still run the handler.
    const ALT_STACK_SIZE: usize = 64 * 1024;

    static HANDLER_INSTALLED: AtomicBool = AtomicBool::new(false);
    static IN_HANDLER: AtomicBool = AtomicBool::new(false);

    /// Install the process-wide SIGSEGV handler.
    ///
    /// Idempotent: repeat calls return Ok without re-registering. On error
    /// the default fault behavior stays in effect and a later call may
    /// retry.
    pub fn install_fault_handler() -> TlResult<()> {
        if HANDLER_INSTALLED.swap(true, Ordering::SeqCst) {
            return Ok(()); // Already installed
        }

        if let Err(e) = install_alt_stack() {
            HANDLER_INSTALLED.store(false, Ordering::SeqCst);
            return Err(e);
        }

        let action = SigAction::new(
            SigHandler::SigAction(segv_handler),
            SaFlags::SA_SIGINFO | SaFlags::SA_ONSTACK,
            SigSet::all(),
        );
        // SAFETY: handler is registered once and only inspects the siginfo
        // the kernel hands it.
        if let Err(errno) = unsafe { signal::sigaction(Signal::SIGSEGV, &action) } {
            HANDLER_INSTALLED.store(false, Ordering::SeqCst);
            return Err(FaultBridgeError::RegisterFailed(errno as i32));
        }
        Ok(())
    }

    /// Map an alternate stack for the installing thread so SA_ONSTACK has
    /// somewhere to deliver when the main stack is the casualty.
    fn install_alt_stack() -> TlResult<()> {
        // SAFETY: fresh anonymous mapping, checked against MAP_FAILED.
        let mem = unsafe {
            libc::mmap(
                ptr::null_mut(),
                ALT_STACK_SIZE,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANON,
                -1,
                0,
            )
        };
        if mem == libc::MAP_FAILED {
            return Err(FaultBridgeError::AltStackFailed(last_errno()));
        }

        let ss = libc::stack_t {
            ss_sp: mem,
            ss_flags: 0,
            ss_size: ALT_STACK_SIZE,
        };
        // SAFETY: ss points at the mapping made above.
        if unsafe { libc::sigaltstack(&ss, ptr::null_mut()) } != 0 {
            let errno = last_errno();
            // SAFETY: mem came from mmap above.
            unsafe { libc::munmap(mem, ALT_STACK_SIZE) };
            return Err(FaultBridgeError::AltStackFailed(errno));
        }
        Ok(())
    }

    fn last_errno() -> i32 {
        std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
    }

    /// SIGSEGV handler.
    ///
    /// Restricts itself to the fault info the kernel resolved and a fixed
    /// stack buffer for the message, then hands off to the diagnostic
    /// engine. A second fault while reporting means the reporting path is
    /// broken: raw write plus immediate exit, nothing else is safe.
    extern "C" fn segv_handler(
        _sig: libc::c_int,
        info: *mut libc::siginfo_t,
        _ucontext: *mut libc::c_void,
    ) {
        if IN_HANDLER.swap(true, Ordering::Acquire) {
            const MSG: &[u8] = b"throwline: fault while reporting fault, terminating\n";
            // SAFETY: write and _exit are async-signal-safe.
            unsafe {
                libc::write(libc::STDERR_FILENO, MSG.as_ptr().cast(), MSG.len());
                libc::_exit(128 + libc::SIGSEGV);
            }
        }

        // SAFETY: info is valid in signal context; si_addr is the
        // already-resolved faulting address.
        let addr = if info.is_null() { 0 } else { unsafe { fault_addr(info) } };

        let mut buf = [0u8; 96];
        let len = format_fault_msg(&mut buf, addr);
        let msg = core::str::from_utf8(&buf[..len])
            .unwrap_or("invalid memory access (SIGSEGV)");
        raise::fault_terminate(msg);
    }

    /// Faulting address from the kernel-resolved siginfo.
    ///
    /// # Safety
    ///
    /// `info` must be the non-null siginfo pointer delivered to a SIGSEGV
    /// handler registered with SA_SIGINFO.
    #[cfg(target_os = "linux")]
    unsafe fn fault_addr(info: *mut libc::siginfo_t) -> usize {
        (*info).si_addr() as usize
    }

    #[cfg(not(target_os = "linux"))]
    unsafe fn fault_addr(info: *mut libc::siginfo_t) -> usize {
        (*info).si_addr as usize
    }

    /// Write "invalid memory access (SIGSEGV) at address 0x<hex>" into
    /// `buf` without allocating. Returns the number of bytes written.
    fn format_fault_msg(buf: &mut [u8; 96], addr: usize) -> usize {
        const PREFIX: &[u8] = b"invalid memory access (SIGSEGV) at address 0x";
        buf[..PREFIX.len()].copy_from_slice(PREFIX);
        let mut len = PREFIX.len();

        if addr == 0 {
            buf[len] = b'0';
            return len + 1;
        }

        let mut digits = [0u8; 16];
        let mut n = addr;
        let mut count = 0;
        while n != 0 {
            let d = (n & 0xf) as u8;
            digits[count] = if d < 10 { b'0' + d } else { b'a' + d - 10 };
            n >>= 4;
            count += 1;
        }
        for i in (0..count).rev() {
            buf[len] = digits[i];
            len += 1;
        }
        len
    }

}

    } else {

mod platform {
    use throwline_core::{FaultBridgeError, TlResult};

    /// No signal support on this platform; the default fault behavior
    /// stays in effect.
    pub fn install_fault_handler() -> TlResult<()> {
        Err(FaultBridgeError::Unsupported)
    }
}

    }
}

pub use platform::install_fault_handler;
