// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::format::{Location, Params};
use crate::taxonomy::{Level, Scope};

/// One log call, ready to be rendered.
///
/// A record lives only for the duration of the call; sinks receive the
/// rendered strings, never the record itself.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub level: &'a Level,
    pub scope: Option<&'a Scope>,
    pub message: String,
    pub params: Option<&'a Params>,
    pub location: Location,
}

impl<'a> Record<'a> {
    pub fn new(
        level: &'a Level,
        scope: Option<&'a Scope>,
        message: String,
        params: Option<&'a Params>,
        location: Location,
    ) -> Self {
        Self {
            level,
            scope,
            message,
            params,
            location,
        }
    }

    /// Line written to the console sink.
    ///
    /// `<level> <scope> <message> <params> -> <file>.<function> [<line>]`,
    /// where a missing scope collapses to a single space and missing params
    /// add nothing.
    ///
    /// ```
    /// use tagged_log::format::{Location, Params, Record};
    /// use tagged_log::{Level, Scope};
    ///
    /// let level = Level::ERROR;
    /// let scope = Scope::DATABASE;
    /// let params = Params::new().with("bytes", &512);
    /// let record = Record::new(
    ///     &level,
    ///     Some(&scope),
    ///     "disk full".to_string(),
    ///     Some(&params),
    ///     Location::new("Storage.ext", "save", 42),
    /// );
    /// assert_eq!(
    ///     record.console_line(),
    ///     r#"❌ 💾 disk full ["bytes": 512] -> Storage.save [42]"#
    /// );
    /// ```
    pub fn console_line(&self) -> String {
        let scope = match self.scope {
            Some(scope) => format!(" {} ", scope),
            None => " ".to_string(),
        };
        format!(
            "{}{}{}{} -> {}",
            self.level,
            scope,
            self.message,
            self.params_suffix(),
            self.location
        )
    }

    /// Sink-independent line handed to the callback and returned to callers.
    ///
    /// Only the level, message and location take part; scope is console
    /// decoration and params travel to the callback separately.
    pub fn canonical_line(&self) -> String {
        format!("{} {} -> {}", self.level, self.message, self.location)
    }

    /// Line written to the platform log. Scope is omitted; the platform sink
    /// receives the file name as its category instead.
    pub fn platform_line(&self) -> String {
        format!(
            "{} {}{} -> {}",
            self.level,
            self.message,
            self.params_suffix(),
            self.location
        )
    }

    /// Category the platform sink files this record under.
    pub fn category(&self) -> &'static str {
        self.location.file_name()
    }

    fn params_suffix(&self) -> String {
        match self.params {
            Some(params) => format!(" {}", params),
            None => String::new(),
        }
    }
}
