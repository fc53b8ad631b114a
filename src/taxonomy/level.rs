// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Severity tag for a log record.
///
/// Levels are an open set identified by their display symbol. The well-known
/// constants cover the common severities, and callers may build their own with
/// [`Level::new`] or [`Level::with_severity`]. Two levels are equal when their
/// symbols are equal; the platform severity does not take part in equality.
///
/// # Example
/// ```
/// use tagged_log::Level;
///
/// let audit = Level::new("🧾");
/// assert_eq!(audit, Level::new("🧾"));
/// assert_eq!(audit.platform_severity(), tracing::Level::INFO);
/// assert_eq!(Level::ERROR.platform_severity(), tracing::Level::ERROR);
/// ```
#[derive(Debug, Clone)]
pub struct Level {
    symbol: Cow<'static, str>,
    severity: Option<tracing::Level>,
}

/// Severity used for levels with no explicit or well-known mapping.
pub const FALLBACK_SEVERITY: tracing::Level = tracing::Level::INFO;

impl Level {
    pub const INFO: Level = Level::from_static("ℹ️");
    pub const STANDARD: Level = Level::from_static("🔹");
    pub const WARNING: Level = Level::from_static("⚠️");
    pub const ERROR: Level = Level::from_static("❌");

    const fn from_static(symbol: &'static str) -> Self {
        Self {
            symbol: Cow::Borrowed(symbol),
            severity: None,
        }
    }

    /// Build a level from a display symbol.
    pub fn new(symbol: impl Into<Cow<'static, str>>) -> Self {
        Self {
            symbol: symbol.into(),
            severity: None,
        }
    }

    /// Build a level that maps to an explicit platform severity.
    pub fn with_severity(symbol: impl Into<Cow<'static, str>>, severity: tracing::Level) -> Self {
        Self {
            symbol: symbol.into(),
            severity: Some(severity),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Severity handed to the platform log sink.
    ///
    /// An explicit severity wins; otherwise the well-known symbols are looked
    /// up and anything unrecognised falls back to [`FALLBACK_SEVERITY`].
    pub fn platform_severity(&self) -> tracing::Level {
        if let Some(severity) = self.severity {
            return severity;
        }
        well_known_severity(&self.symbol).unwrap_or(FALLBACK_SEVERITY)
    }
}

fn well_known_severity(symbol: &str) -> Option<tracing::Level> {
    const TABLE: [(&str, tracing::Level); 4] = [
        ("ℹ️", tracing::Level::INFO),
        ("🔹", tracing::Level::DEBUG),
        ("⚠️", tracing::Level::WARN),
        ("❌", tracing::Level::ERROR),
    ];

    TABLE
        .iter()
        .find(|(known, _)| *known == symbol)
        .map(|(_, severity)| *severity)
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Level {}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}
