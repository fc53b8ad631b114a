// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{self, Display, Write};

/// Rendering of an absent value.
pub const NIL: &str = "nil";

/// Rendering of a value whose `Display` impl reported an error.
pub const UNREPRESENTABLE: &str = "<unrepresentable>";

/// Stringify any displayable value without ever panicking.
///
/// `ToString` panics when a `Display` impl returns an error; this writes into
/// a buffer instead and substitutes [`UNREPRESENTABLE`].
///
/// # Example
/// ```
/// use tagged_log::format::describe;
///
/// assert_eq!(describe(&42), "42");
/// assert_eq!(describe("disk full"), "disk full");
/// ```
pub fn describe<T: Display + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    match write!(out, "{}", value) {
        Ok(()) => out,
        Err(_) => UNREPRESENTABLE.to_string(),
    }
}

/// Display adapter that renders `None` as [`NIL`].
#[derive(Debug, Clone, Copy)]
pub struct OrNil<T>(pub Option<T>);

impl<T: Display> Display for OrNil<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(NIL),
        }
    }
}

/// Wrap an optional value so it can be logged as a message or parameter.
///
/// ```
/// use tagged_log::format::{describe, or_nil};
///
/// let missing: Option<u32> = None;
/// assert_eq!(describe(&or_nil(missing)), "nil");
/// assert_eq!(describe(&or_nil(Some(7))), "7");
/// ```
pub fn or_nil<T: Display>(value: Option<T>) -> OrNil<T> {
    OrNil(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Display for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_broken_display_falls_back_to_placeholder() {
        assert_eq!(describe(&Broken), UNREPRESENTABLE);
    }

    #[test]
    fn test_broken_display_inside_or_nil() {
        assert_eq!(describe(&or_nil(Some(Broken))), UNREPRESENTABLE);
    }

    #[test]
    fn test_error_values_use_their_description() {
        let error = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert_eq!(describe(&error), "disk full");
    }
}
