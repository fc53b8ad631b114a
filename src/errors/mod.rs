// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod assertion;
mod config;

pub use assertion::AssertionFailure;
pub use config::ConfigError;
