// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod assertion;     // logged assertions
pub mod config;        // settings, global slots, file loader
pub mod dispatch;      // logger pipeline + macros
pub mod errors;        // error handling
pub mod format;        // record rendering
pub mod history;       // per-object log history
pub mod observability;
pub mod sinks;         // built-in sinks
pub mod taxonomy;      // level + scope tags
pub mod traits;        // sink seams

pub use config::{AssertionConfig, Configuration};
pub use dispatch::Logger;
pub use format::{Location, Params};
pub use history::Loggable;
pub use taxonomy::{Level, Scope};
