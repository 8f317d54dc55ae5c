//! # throwline-runtime
//!
//! Mechanics of the throwline exception channel.
//!
//! This crate provides:
//! - Thread-local scope chain (`context`)
//! - Try-scopes over one-shot unwinding (`scope`)
//! - The raise engine and unhandled path (`raise`)
//! - Diagnostic block emission (`diag`)
//! - Diagnostic configuration (`config`)
//! - SIGSEGV fault bridge (`fault`, unix; stub elsewhere)

pub mod config;
pub mod context;
pub mod diag;
pub mod fault;
pub mod raise;
pub mod scope;

// Re-exports
pub use config::DiagConfig;
pub use context::{in_scope, scope_depth};
pub use fault::install_fault_handler;
pub use raise::{raise, raise_with};
pub use scope::{try_scope, ScopeOutcome};
