//! Error types for fallible throwline operations

use core::fmt;

/// Result type for throwline setup operations
pub type TlResult<T> = Result<T, FaultBridgeError>;

/// Errors that can occur while installing the fault bridge.
///
/// Installation failure is reported, never fatal: the process keeps the
/// platform's default fault behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultBridgeError {
    /// sigaltstack rejected the alternate signal stack
    AltStackFailed(i32),

    /// sigaction rejected the handler registration
    RegisterFailed(i32),

    /// Target platform has no signal support
    Unsupported,
}

impl fmt::Display for FaultBridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultBridgeError::AltStackFailed(errno) => {
                write!(f, "failed to install alternate signal stack (errno {})", errno)
            }
            FaultBridgeError::RegisterFailed(errno) => {
                write!(f, "failed to register SIGSEGV handler (errno {})", errno)
            }
            FaultBridgeError::Unsupported => {
                write!(f, "fault bridge not supported on this platform")
            }
        }
    }
}

impl std::error::Error for FaultBridgeError {}
