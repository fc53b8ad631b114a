// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Free functions over the process-wide [`Logger`].

use crate::dispatch::Logger;
use crate::format::{Location, Params};
use crate::history::Loggable;
use crate::taxonomy::{Level, Scope};
use once_cell::sync::Lazy;
use std::fmt::Display;

static GLOBAL: Lazy<Logger> = Lazy::new(Logger::new);

/// The process-wide logger behind the free functions and macros.
pub fn global() -> &'static Logger {
    &GLOBAL
}

pub fn log<M: Display + ?Sized>(
    level: &Level,
    scope: Option<&Scope>,
    message: &M,
    params: Option<&Params>,
    location: Location,
) -> String {
    GLOBAL.log(level, scope, message, params, location)
}

pub fn log_standard<M: Display + ?Sized>(
    scope: Option<&Scope>,
    message: &M,
    params: Option<&Params>,
    location: Location,
) -> String {
    GLOBAL.log_standard(scope, message, params, location)
}

pub fn info<M: Display + ?Sized>(
    scope: Option<&Scope>,
    message: &M,
    params: Option<&Params>,
    location: Location,
) -> String {
    GLOBAL.info(scope, message, params, location)
}

pub fn standard<M: Display + ?Sized>(
    scope: Option<&Scope>,
    message: &M,
    params: Option<&Params>,
    location: Location,
) -> String {
    GLOBAL.standard(scope, message, params, location)
}

pub fn warning<M: Display + ?Sized>(
    scope: Option<&Scope>,
    message: &M,
    params: Option<&Params>,
    location: Location,
) -> String {
    GLOBAL.warning(scope, message, params, location)
}

pub fn error<M: Display + ?Sized>(
    scope: Option<&Scope>,
    message: &M,
    params: Option<&Params>,
    location: Location,
) -> String {
    GLOBAL.error(scope, message, params, location)
}

pub fn log_lazy<M, F>(
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
    GLOBAL.log_lazy(level, scope, producer, params, location)
}

pub fn log_error<E: std::error::Error + ?Sized>(
    error: Option<&E>,
    scope: Option<&Scope>,
    params: Option<&Params>,
    location: Location,
) -> String {
    GLOBAL.log_error(error, scope, params, location)
}

pub fn log_loggable<T, M>(
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
    GLOBAL.log_loggable(target, level, scope, message, params, location)
}

pub fn set_callback<F>(callback: F)
where
    F: Fn(&Level, (&str, Option<&Params>)) + Send + Sync + 'static,
{
    GLOBAL.set_callback(callback);
}

pub fn clear_callback() {
    GLOBAL.clear_callback();
}
