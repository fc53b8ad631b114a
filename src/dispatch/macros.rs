// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Call-site macros for the process-wide logger.
//!
//! Every macro captures file, enclosing function and line with [`here!`].
//! The message is any `Display` value; an optional scope goes first after
//! `in`, and optional params go last after `;`:
//!
//! ```
//! use tagged_log::{error, info, params, Scope};
//!
//! info!("service started");
//! error!(in Scope::DATABASE, "write failed"; params! { "table" => "orders" });
//! ```

/// Capture the current [`Location`](crate::format::Location).
#[macro_export]
macro_rules! here {
    () => {{
        fn __here_marker() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::format::Location::new(
            file!(),
            $crate::format::enclosing_function(__type_name_of(__here_marker)),
            line!(),
        )
    }};
}

/// Build [`Params`](crate::format::Params) from `key => value` pairs.
///
/// ```
/// use tagged_log::params;
///
/// let params = params! { "user" => 17, "region" => "eu" };
/// assert_eq!(params.to_string(), r#"["region": eu, "user": 17]"#);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::format::Params::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::format::Params::new()$(.with($key, &$value))+
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __optional_params {
    () => {
        ::core::option::Option::None
    };
    ($params:expr) => {
        ::core::option::Option::Some(&$params)
    };
}

/// Log at an explicit level.
///
/// ```
/// use tagged_log::{log_at, Level};
///
/// log_at!(Level::new("🧪"), "custom level");
/// ```
#[macro_export]
macro_rules! log_at {
    ($level:expr, in $scope:expr, $message:expr $(; $params:expr)?) => {
        $crate::dispatch::global().log(
            &$level,
            ::core::option::Option::Some(&$scope),
            &$message,
            $crate::__optional_params!($($params)?),
            $crate::here!(),
        )
    };
    ($level:expr, $message:expr $(; $params:expr)?) => {
        $crate::dispatch::global().log(
            &$level,
            ::core::option::Option::None,
            &$message,
            $crate::__optional_params!($($params)?),
            $crate::here!(),
        )
    };
}

/// Log at [`Level::STANDARD`](crate::Level::STANDARD).
#[macro_export]
macro_rules! log {
    ($($rest:tt)+) => {
        $crate::log_at!($crate::Level::STANDARD, $($rest)+)
    };
}

#[macro_export]
macro_rules! info {
    ($($rest:tt)+) => {
        $crate::log_at!($crate::Level::INFO, $($rest)+)
    };
}

#[macro_export]
macro_rules! standard {
    ($($rest:tt)+) => {
        $crate::log_at!($crate::Level::STANDARD, $($rest)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($($rest:tt)+) => {
        $crate::log_at!($crate::Level::WARNING, $($rest)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($rest:tt)+) => {
        $crate::log_at!($crate::Level::ERROR, $($rest)+)
    };
}

/// Log with a message closure that only runs when logging is not blocked.
///
/// ```
/// use tagged_log::{log_lazy, Level};
///
/// log_lazy!(Level::INFO, || format!("{} items", 3));
/// ```
#[macro_export]
macro_rules! log_lazy {
    ($level:expr, in $scope:expr, $producer:expr $(; $params:expr)?) => {
        $crate::dispatch::global().log_lazy(
            &$level,
            ::core::option::Option::Some(&$scope),
            $producer,
            $crate::__optional_params!($($params)?),
            $crate::here!(),
        )
    };
    ($level:expr, $producer:expr $(; $params:expr)?) => {
        $crate::dispatch::global().log_lazy(
            &$level,
            ::core::option::Option::None,
            $producer,
            $crate::__optional_params!($($params)?),
            $crate::here!(),
        )
    };
}

/// Log an assertion failure and halt if assertions are configured to.
#[macro_export]
macro_rules! assertion_failure {
    ($message:expr $(; $params:expr)?) => {
        $crate::dispatch::global().assertion_failure(
            &$message,
            $crate::__optional_params!($($params)?),
            $crate::here!(),
        )
    };
}

/// Report an assertion failure when `condition` is false.
///
/// ```
/// use tagged_log::log_assert;
///
/// let retries = 2;
/// log_assert!(retries < 5, "too many retries");
/// ```
#[macro_export]
macro_rules! log_assert {
    ($condition:expr, $message:expr $(; $params:expr)?) => {
        if !$condition {
            $crate::assertion_failure!($message $(; $params)?);
        }
    };
}
