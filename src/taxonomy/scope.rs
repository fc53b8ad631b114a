// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::borrow::Cow;
use std::fmt;

/// Functional area a log record belongs to.
///
/// Purely annotative: a scope only changes how the console line is rendered.
/// Like [`Level`](crate::Level) this is an open set compared by symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    symbol: Cow<'static, str>,
}

impl Scope {
    pub const DATABASE: Scope = Scope::from_static("💾");
    pub const AUTH: Scope = Scope::from_static("🔑");
    pub const NETWORK: Scope = Scope::from_static("🌐");
    pub const STARTUP: Scope = Scope::from_static("🚀");
    pub const UI: Scope = Scope::from_static("🖼️");
    pub const STORAGE: Scope = Scope::from_static("📦");
    pub const SECURITY: Scope = Scope::from_static("🛡️");

    const fn from_static(symbol: &'static str) -> Self {
        Self {
            symbol: Cow::Borrowed(symbol),
        }
    }

    pub fn new(symbol: impl Into<Cow<'static, str>>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}
