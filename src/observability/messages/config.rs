// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for settings loading and configuration replacement.

use crate::config::{Configuration, Settings, SettingsFormat};
use crate::observability::messages::StructuredLog;
use crate::observability::INTERNAL_TARGET;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Settings file loaded and validated.
///
/// # Log Level
/// `info!` - Important operational event
pub struct SettingsLoaded<'a> {
    pub path: &'a Path,
    pub format: SettingsFormat,
    pub settings: &'a Settings,
}

impl Display for SettingsLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {:?} logging settings from '{}'",
            self.format,
            self.path.display()
        )
    }
}

impl StructuredLog for SettingsLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            target: INTERNAL_TARGET,
            path = %self.path.display(),
            format = ?self.format,
            block_all_logs = self.settings.logging.block_all_logs,
            throw_assertion_failures = self.settings.assertions.throw_assertion_failures,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            target: INTERNAL_TARGET,
            "settings_loaded",
            span_name = name,
            path = %self.path.display(),
        )
    }
}

/// Process-wide configuration swapped for a new snapshot.
///
/// # Log Level
/// `debug!` - Routine state change
///
/// # Example
/// ```
/// use tagged_log::config::Configuration;
/// use tagged_log::observability::messages::config::ConfigurationReplaced;
///
/// let old = Configuration::default();
/// let new = Configuration::silent();
/// let msg = ConfigurationReplaced { previous: &old, current: &new };
///
/// assert_eq!(
///     msg.to_string(),
///     "Logging configuration replaced: console=true platform=false blocked=true history=true(50)"
/// );
/// ```
pub struct ConfigurationReplaced<'a> {
    pub previous: &'a Configuration,
    pub current: &'a Configuration,
}

impl Display for ConfigurationReplaced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Logging configuration replaced: console={} platform={} blocked={} history={}({})",
            self.current.print_to_console,
            self.current.print_to_platform_log,
            self.current.block_all_logs,
            self.current.loggable_history_enabled,
            self.current.loggable_history_limit
        )
    }
}

impl StructuredLog for ConfigurationReplaced<'_> {
    fn log(&self) {
        tracing::debug!(
            target: INTERNAL_TARGET,
            was_blocked = self.previous.block_all_logs,
            blocked = self.current.block_all_logs,
            subsystem = %self.current.subsystem,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            target: INTERNAL_TARGET,
            "configuration_replaced",
            span_name = name,
            blocked = self.current.block_all_logs,
        )
    }
}
