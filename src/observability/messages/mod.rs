// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the crate's own diagnostics.
//!
//! * `config` - settings loading and configuration replacement
//! * `callback` - callback registration
//!
//! ```rust
//! use tagged_log::observability::messages::callback::CallbackRegistered;
//! use tagged_log::observability::messages::StructuredLog;
//!
//! CallbackRegistered { replaced: false }.log();
//! ```

use tracing::Span;

pub mod callback;
pub mod config;

/// A diagnostic message that knows its own level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the message as a `tracing` event.
    fn log(&self);

    /// Span carrying the same fields, for wrapping follow-up work.
    fn span(&self, name: &str) -> Span;
}
