// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Assertions that are logged before they fail.
//!
//! An assertion always goes through the pipeline at [`Level::ERROR`]. Only
//! then, and only if [`AssertionConfig::throw_assertion_failures`] is set,
//! does it halt the caller with a panic whose message is the logged line.
//!
//! [`AssertionConfig::throw_assertion_failures`]: crate::config::AssertionConfig

use crate::dispatch::{global, Logger};
use crate::errors::AssertionFailure;
use crate::format::{Location, Params};
use crate::taxonomy::Level;
use std::fmt::Display;

impl Logger {
    /// Log an assertion failure, then panic if configured to.
    ///
    /// Returns the logged line when assertions are not fatal.
    pub fn assertion_failure<M: Display + ?Sized>(
        &self,
        message: &M,
        params: Option<&Params>,
        location: Location,
    ) -> String {
        match self.check_assertion(message, params, location) {
            Ok(logged) => logged,
            Err(failure) => panic!("{}", failure),
        }
    }

    /// Log an assertion failure and hand the failure back instead of panicking.
    ///
    /// `Err` carries the logged line when assertions are configured to be
    /// fatal; `Ok` carries it otherwise. With logging blocked the logged line
    /// is empty, and so is the failure's description.
    pub fn check_assertion<M: Display + ?Sized>(
        &self,
        message: &M,
        params: Option<&Params>,
        location: Location,
    ) -> Result<String, AssertionFailure> {
        let logged = self.log(&Level::ERROR, None, message, params, location);

        if self.assertion_config().throw_assertion_failures {
            Err(AssertionFailure::new(logged))
        } else {
            Ok(logged)
        }
    }
}

/// [`Logger::assertion_failure`] on the process-wide logger.
pub fn assertion_failure<M: Display + ?Sized>(
    message: &M,
    params: Option<&Params>,
    location: Location,
) -> String {
    global().assertion_failure(message, params, location)
}

/// [`Logger::check_assertion`] on the process-wide logger.
pub fn check_assertion<M: Display + ?Sized>(
    message: &M,
    params: Option<&Params>,
    location: Location,
) -> Result<String, AssertionFailure> {
    global().check_assertion(message, params, location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AssertionConfig, Configuration};
    use crate::sinks::MemorySink;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn location() -> Location {
        Location::new("Checkout.rs", "pay", 7)
    }

    fn logger(fatal: bool) -> (Logger, Arc<MemorySink>) {
        let console = Arc::new(MemorySink::new());
        let logger = Logger::builder()
            .console(console.clone())
            .assertions(AssertionConfig {
                throw_assertion_failures: fatal,
            })
            .build();
        (logger, console)
    }

    #[test]
    fn test_non_fatal_assertion_logs_once_and_returns() {
        let (logger, console) = logger(false);
        let levels = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&levels);
        logger.set_callback(move |level, _| seen.lock().push(level.clone()));

        let logged = logger.assertion_failure("cart empty", None, location());

        assert_eq!(logged, "❌ cart empty -> Checkout.pay [7]");
        assert_eq!(console.console_lines().len(), 1);
        assert_eq!(*levels.lock(), vec![Level::ERROR]);
    }

    #[test]
    fn test_fatal_check_carries_logged_line() {
        let (logger, console) = logger(true);

        let failure = logger
            .check_assertion("cart empty", None, location())
            .unwrap_err();

        assert_eq!(failure.to_string(), "❌ cart empty -> Checkout.pay [7]");
        assert_eq!(console.console_lines(), vec![failure.logged.clone()]);
    }

    #[test]
    #[should_panic(expected = "❌ cart empty -> Checkout.pay [7]")]
    fn test_fatal_assertion_panics_with_logged_line() {
        let (logger, _console) = logger(true);
        logger.assertion_failure("cart empty", None, location());
    }

    #[test]
    fn test_blocked_fatal_assertion_fails_with_what_was_logged() {
        let (logger, console) = logger(true);
        logger.set_configuration(Configuration::silent());

        let logged = logger.log(&Level::ERROR, None, "cart empty", None, location());
        let failure = logger
            .check_assertion("cart empty", None, location())
            .unwrap_err();

        assert_eq!(logged, "");
        assert_eq!(failure.logged, logged);
        assert!(console.console_lines().is_empty());
    }

    #[test]
    #[should_panic]
    fn test_blocked_fatal_assertion_still_panics() {
        let (logger, _console) = logger(true);
        logger.set_configuration(Configuration::silent());
        logger.assertion_failure("cart empty", None, location());
    }

    #[test]
    fn test_panic_payload_matches_callback_line() {
        let (logger, _console) = logger(true);
        let delivered = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&delivered);
        logger.set_callback(move |_, (line, _)| *sink.lock() = line.to_string());

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.assertion_failure("limit", Some(&Params::new().with("max", &3)), location());
        }));

        let payload = result.unwrap_err();
        let message = payload
            .downcast_ref::<String>()
            .cloned()
            .unwrap_or_default();
        assert_eq!(message, *delivered.lock());
    }
}
