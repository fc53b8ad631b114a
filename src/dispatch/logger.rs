// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{AssertionConfig, Configuration, SettingsSlot};
use crate::format::{describe, Location, Params, Record};
use crate::history::{HistoryBuffer, Loggable};
use crate::observability::messages::callback::{CallbackCleared, CallbackRegistered};
use crate::observability::messages::config::ConfigurationReplaced;
use crate::observability::messages::StructuredLog;
use crate::sinks::{StdoutConsole, TracingPlatformLog};
use crate::taxonomy::{Level, Scope};
use crate::traits::{ConsoleSink, LogCallback, PlatformSink};
use std::fmt::Display;
use std::sync::Arc;

/// The formatting and fan-out pipeline.
///
/// Every entry point funnels into [`Logger::log`]: check the kill switch,
/// render the record, then write the console line, the platform line and
/// finally call the callback, in that order and on the caller's thread.
///
/// The process-wide instance lives behind [`global`](crate::dispatch::global);
/// separate instances are useful for tests and for libraries that want their
/// own sinks.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use tagged_log::dispatch::Logger;
/// use tagged_log::format::Location;
/// use tagged_log::sinks::MemorySink;
/// use tagged_log::Level;
///
/// let console = Arc::new(MemorySink::new());
/// let logger = Logger::builder().console(console.clone()).build();
///
/// let line = logger.log(
///     &Level::ERROR,
///     None,
///     "disk full",
///     None,
///     Location::new("Storage.ext", "save", 42),
/// );
///
/// assert_eq!(line, "❌ disk full -> Storage.save [42]");
/// assert_eq!(console.console_lines(), vec![line]);
/// ```
pub struct Logger {
    config: SettingsSlot<Configuration>,
    assertions: SettingsSlot<AssertionConfig>,
    callback: SettingsSlot<Option<Box<LogCallback>>>,
    console: SettingsSlot<Arc<dyn ConsoleSink>>,
    platform: SettingsSlot<Arc<dyn PlatformSink>>,
    history: HistoryBuffer,
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    pub fn configuration(&self) -> Arc<Configuration> {
        self.config.load()
    }

    pub fn set_configuration(&self, config: Configuration) {
        let previous = self.config.replace(config);
        let current = self.config.load();
        let msg = ConfigurationReplaced {
            previous: &previous,
            current: &current,
        };
        let span = msg.span("configuration_replaced");
        let _guard = span.enter();
        msg.log();
    }

    pub fn assertion_config(&self) -> AssertionConfig {
        *self.assertions.load()
    }

    pub fn set_assertion_config(&self, config: AssertionConfig) {
        self.assertions.replace(config);
    }

    /// Install the callback, replacing any previous one.
    pub fn set_callback<F>(&self, callback: F)
    where
        F: Fn(&Level, (&str, Option<&Params>)) + Send + Sync + 'static,
    {
        let callback: Box<LogCallback> = Box::new(callback);
        let previous = self.callback.replace(Some(callback));
        let msg = CallbackRegistered {
            replaced: previous.is_some(),
        };
        let span = msg.span("callback_registered");
        let _guard = span.enter();
        msg.log();
    }

    pub fn clear_callback(&self) {
        self.callback.replace(None);
        let span = CallbackCleared.span("callback_cleared");
        let _guard = span.enter();
        CallbackCleared.log();
    }

    pub fn set_console_sink(&self, sink: Arc<dyn ConsoleSink>) {
        self.console.replace(sink);
    }

    pub fn set_platform_sink(&self, sink: Arc<dyn PlatformSink>) {
        self.platform.replace(sink);
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Log `message` at `level` and return the canonical line.
    ///
    /// Returns an empty string, and touches no sink, when `block_all_logs`
    /// is set.
    pub fn log<M: Display + ?Sized>(
        &self,
        level: &Level,
        scope: Option<&Scope>,
        message: &M,
        params: Option<&Params>,
        location: Location,
    ) -> String {
        self.log_with(&self.config.load(), level, scope, message, params, location)
    }

    /// [`Logger::log`] at [`Level::STANDARD`].
    pub fn log_standard<M: Display + ?Sized>(
        &self,
        scope: Option<&Scope>,
        message: &M,
        params: Option<&Params>,
        location: Location,
    ) -> String {
        self.log(&Level::STANDARD, scope, message, params, location)
    }

    pub fn info<M: Display + ?Sized>(
        &self,
        scope: Option<&Scope>,
        message: &M,
        params: Option<&Params>,
        location: Location,
    ) -> String {
        self.log(&Level::INFO, scope, message, params, location)
    }

    pub fn standard<M: Display + ?Sized>(
        &self,
        scope: Option<&Scope>,
        message: &M,
        params: Option<&Params>,
        location: Location,
    ) -> String {
        self.log(&Level::STANDARD, scope, message, params, location)
    }

    pub fn warning<M: Display + ?Sized>(
        &self,
        scope: Option<&Scope>,
        message: &M,
        params: Option<&Params>,
        location: Location,
    ) -> String {
        self.log(&Level::WARNING, scope, message, params, location)
    }

    pub fn error<M: Display + ?Sized>(
        &self,
        scope: Option<&Scope>,
        message: &M,
        params: Option<&Params>,
        location: Location,
    ) -> String {
        self.log(&Level::ERROR, scope, message, params, location)
    }

    /// Like [`Logger::log`], but builds the message only if it will be used.
    ///
    /// `producer` is never called while `block_all_logs` is set.
    pub fn log_lazy<M, F>(
        &self,
        level: &Level,
        scope: Option<&Scope>,
        producer: F,
        params: Option<&Params>,
        location: Location,
    ) -> String
    where
        M: Display,
        F: FnOnce() -> M,
    {
        let config = self.config.load();
        if config.block_all_logs {
            return String::new();
        }

        let message = producer();
        let record = Record::new(level, scope, describe(&message), params, location);
        self.emit(&config, &record)
    }

    /// Log an optional error at [`Level::ERROR`] using its description.
    ///
    /// `None` is a no-op that returns an empty string.
    pub fn log_error<E: std::error::Error + ?Sized>(
        &self,
        error: Option<&E>,
        scope: Option<&Scope>,
        params: Option<&Params>,
        location: Location,
    ) -> String {
        match error {
            Some(error) => self.log(&Level::ERROR, scope, error, params, location),
            None => String::new(),
        }
    }

    /// Log on behalf of `target` and record the canonical line in its history.
    ///
    /// Nothing is recorded when logging is blocked or history is disabled.
    pub fn log_loggable<T, M>(
        &self,
        target: &T,
        level: &Level,
        scope: Option<&Scope>,
        message: &M,
        params: Option<&Params>,
        location: Location,
    ) -> String
    where
        T: Loggable + ?Sized,
        M: Display + ?Sized,
    {
        let config = self.config.load();
        let line = self.log_with(&config, level, scope, message, params, location);
        if !line.is_empty() {
            self.history.append(target.history_key(), line.as_str(), &config);
        }
        line
    }

    /// The pipeline against one configuration snapshot, so a call never mixes
    /// flags from two snapshots even if the callback replaces the settings.
    fn log_with<M: Display + ?Sized>(
        &self,
        config: &Configuration,
        level: &Level,
        scope: Option<&Scope>,
        message: &M,
        params: Option<&Params>,
        location: Location,
    ) -> String {
        if config.block_all_logs {
            return String::new();
        }

        let record = Record::new(level, scope, describe(message), params, location);
        self.emit(config, &record)
    }

    fn emit(&self, config: &Configuration, record: &Record<'_>) -> String {
        if config.print_to_console {
            self.console.load().write(&record.console_line());
        }

        if config.print_to_platform_log {
            self.platform.load().write(
                record.level.platform_severity(),
                &config.subsystem,
                record.category(),
                &record.platform_line(),
            );
        }

        let canonical = record.canonical_line();
        if let Some(callback) = &*self.callback.load() {
            callback(record.level, (canonical.as_str(), record.params));
        }
        canonical
    }
}

/// Builder for a [`Logger`] with non-default settings or sinks.
#[derive(Default)]
pub struct LoggerBuilder {
    config: Option<Configuration>,
    assertions: Option<AssertionConfig>,
    console: Option<Arc<dyn ConsoleSink>>,
    platform: Option<Arc<dyn PlatformSink>>,
}

impl LoggerBuilder {
    pub fn configuration(mut self, config: Configuration) -> Self {
        self.config = Some(config);
        self
    }

    pub fn assertions(mut self, config: AssertionConfig) -> Self {
        self.assertions = Some(config);
        self
    }

    pub fn console(mut self, sink: Arc<dyn ConsoleSink>) -> Self {
        self.console = Some(sink);
        self
    }

    pub fn platform(mut self, sink: Arc<dyn PlatformSink>) -> Self {
        self.platform = Some(sink);
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            config: SettingsSlot::new(self.config.unwrap_or_default()),
            assertions: SettingsSlot::new(self.assertions.unwrap_or_default()),
            callback: SettingsSlot::new(None),
            console: SettingsSlot::new(
                self.console
                    .unwrap_or_else(|| Arc::new(StdoutConsole) as Arc<dyn ConsoleSink>),
            ),
            platform: SettingsSlot::new(
                self.platform
                    .unwrap_or_else(|| Arc::new(TracingPlatformLog) as Arc<dyn PlatformSink>),
            ),
            history: HistoryBuffer::new(),
        }
    }
}
