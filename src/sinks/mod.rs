// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in sink implementations.
//!
//! * `console` - standard output
//! * `platform` - the `tracing` facade, standing in for the OS system log
//! * `memory` - in-process capture for tests and diagnostics screens

pub mod console;
pub mod memory;
pub mod platform;

pub use console::StdoutConsole;
pub use memory::{MemorySink, PlatformEntry};
pub use platform::{TracingPlatformLog, PLATFORM_TARGET};
