// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Level and scope tags.
//!
//! Both are open enumerations keyed by a display symbol. Code that consumes
//! them must never assume the well-known constants are the only values.

mod level;
mod scope;

pub use level::{Level, FALLBACK_SEVERITY};
pub use scope::Scope;
