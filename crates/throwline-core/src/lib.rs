//! # throwline-core
//!
//! Core types for the throwline exception channel.
//!
//! This crate is platform-agnostic and contains no OS-specific code.
//! The scope chain, raise engine, and fault bridge live in
//! `throwline-runtime`.
//!
//! ## Modules
//!
//! - `kind` - the closed `ErrorKind` enumeration and its display table
//! - `error` - error types for fallible setup operations
//! - `env` - environment variable utilities
//! - `log` - leveled stderr logging macros

pub mod kind;
pub mod error;
pub mod env;
pub mod log;

// Re-exports for convenience
pub use kind::ErrorKind;
pub use error::{FaultBridgeError, TlResult};
pub use env::{env_get, env_get_bool, env_is_set};
pub use log::LogLevel;

/// Constants shared by the diagnostic emitter and its golden tests
pub mod constants {
    /// Opening banner of an unhandled-raise diagnostic block
    pub const BANNER_OPEN: &str =
        "==================== EXCEPTION THROW ====================";

    /// Closing banner of an unhandled-raise diagnostic block
    pub const BANNER_CLOSE: &str =
        "==================== END EXCEPTION ======================";

    /// Timestamp format inside a diagnostic block (strftime syntax)
    pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Default cap on resolved stack frames in a diagnostic block
    pub const DEFAULT_MAX_FRAMES: usize = 64;
}
