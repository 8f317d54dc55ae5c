//! Diagnostic emitter configuration
//!
//! Compile-time defaults with runtime environment overrides.
//!
//! # Environment Variables
//!
//! - `TL_MAX_FRAMES` - cap on resolved stack frames per block
//! - `TL_COLOR` - force ANSI color on (1) or off (0); default is
//!   color only when stderr is a tty, so piped output stays style-free

use throwline_core::constants::DEFAULT_MAX_FRAMES;
use throwline_core::env::{env_get, env_get_bool, env_is_set};

/// Configuration for unhandled-raise diagnostic blocks.
///
/// Use `from_env()` for defaults plus environment overrides, then the
/// builder setters for programmatic tweaks.
#[derive(Debug, Clone)]
pub struct DiagConfig {
    /// Maximum resolved stack frames per block
    pub max_frames: usize,
    /// Wrap the block in ANSI red
    pub color: bool,
}

impl Default for DiagConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl DiagConfig {
    /// Create config from compile-time defaults with environment overrides
    pub fn from_env() -> Self {
        Self {
            max_frames: env_get("TL_MAX_FRAMES", DEFAULT_MAX_FRAMES),
            color: if env_is_set("TL_COLOR") {
                env_get_bool("TL_COLOR", false)
            } else {
                stderr_is_tty()
            },
        }
    }

    /// Set the stack frame cap
    pub fn max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Enable or disable ANSI color
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

#[cfg(unix)]
fn stderr_is_tty() -> bool {
    // isatty has no failure mode beyond "not a tty" for our purposes
    unsafe { libc::isatty(libc::STDERR_FILENO) == 1 }
}

#[cfg(not(unix))]
fn stderr_is_tty() -> bool {
    false
}
