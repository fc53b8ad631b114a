// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Diagnostics about the logging facility itself, and platform log setup.
//!
//! The crate reports its own lifecycle events (settings loaded, configuration
//! replaced, callback registered) through `tracing` under
//! [`INTERNAL_TARGET`], using message structs that implement `Display` and
//! [`messages::StructuredLog`]. These never pass through the tagged pipeline,
//! so they are unaffected by `block_all_logs`.
//!
//! # Usage
//!
//! ```rust
//! use tagged_log::observability::init_platform_log;
//! use tagged_log::config::{set_configuration, Configuration};
//!
//! init_platform_log("info");
//! set_configuration(Configuration {
//!     print_to_platform_log: true,
//!     ..Configuration::default()
//! });
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Target used for the crate's own diagnostics.
pub const INTERNAL_TARGET: &str = "tagged_log::internal";

/// Install a `tracing-subscriber` fmt subscriber as the platform log.
///
/// `RUST_LOG` takes precedence over `default_filter` when set. Returns
/// `false` if a global subscriber was already installed, in which case the
/// existing one keeps receiving platform log events.
pub fn init_platform_log(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
