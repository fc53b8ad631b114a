// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_HISTORY_LIMIT, DEFAULT_SUBSYSTEM};
use serde::Deserialize;

/// Snapshot of the settings that decide which sinks run.
///
/// A snapshot is never mutated in place; callers build a new one and swap it
/// into the slot as a whole, so every log call sees one consistent set of
/// values.
///
/// # Fields
/// * `print_to_console` - Write the console line to the console sink (default on)
/// * `print_to_platform_log` - Write to the platform log sink (default off)
/// * `block_all_logs` - Global kill switch for every sink and the callback
/// * `loggable_history_enabled` - Whether loggable objects accumulate history
/// * `loggable_history_limit` - Maximum lines kept per loggable key
/// * `subsystem` - Subsystem identifier for the platform log
///
/// # Example
/// ```yaml
/// print_to_console: true
/// print_to_platform_log: true
/// loggable_history_limit: 20
/// subsystem: com.example.shop
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub print_to_console: bool,
    pub print_to_platform_log: bool,
    pub block_all_logs: bool,
    pub loggable_history_enabled: bool,
    pub loggable_history_limit: usize,
    pub subsystem: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            print_to_console: true,
            print_to_platform_log: false,
            block_all_logs: false,
            loggable_history_enabled: true,
            loggable_history_limit: DEFAULT_HISTORY_LIMIT,
            subsystem: DEFAULT_SUBSYSTEM.to_string(),
        }
    }
}

impl Configuration {
    /// Configuration with every sink and the callback suppressed.
    pub fn silent() -> Self {
        Self {
            block_all_logs: true,
            ..Self::default()
        }
    }
}

/// Whether a logged assertion also halts the caller.
///
/// Defaults to fatal in debug builds and log-only in release builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssertionConfig {
    pub throw_assertion_failures: bool,
}

impl Default for AssertionConfig {
    fn default() -> Self {
        Self {
            throw_assertion_failures: cfg!(debug_assertions),
        }
    }
}

/// Everything a settings file can carry.
///
/// # Example
/// ```toml
/// [logging]
/// print_to_platform_log = true
///
/// [assertions]
/// throw_assertion_failures = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: Configuration,
    pub assertions: AssertionConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert!(config.print_to_console);
        assert!(!config.print_to_platform_log);
        assert!(!config.block_all_logs);
        assert!(config.loggable_history_enabled);
        assert_eq!(config.loggable_history_limit, 50);
        assert_eq!(config.subsystem, "app");
    }

    #[test]
    fn test_silent_only_flips_kill_switch() {
        let silent = Configuration::silent();
        assert!(silent.block_all_logs);
        assert_eq!(
            Configuration {
                block_all_logs: false,
                ..silent
            },
            Configuration::default()
        );
    }

    #[test]
    fn test_assertions_follow_build_profile() {
        assert_eq!(
            AssertionConfig::default().throw_assertion_failures,
            cfg!(debug_assertions)
        );
    }
}
