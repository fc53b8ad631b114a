// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::format::describe::{describe, NIL};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// Structured parameters attached to a record.
///
/// Values are stringified when inserted, and an absent value is kept as
/// `None` so it renders as `nil`. Keys are kept sorted so the same parameters
/// always render to the same text.
///
/// # Example
/// ```
/// use tagged_log::format::Params;
///
/// let params = Params::new()
///     .with("user", &17)
///     .with_optional("session", None::<&str>);
/// assert_eq!(params.to_string(), r#"["session": nil, "user": 17]"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: BTreeMap<String, Option<String>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<V: Display + ?Sized>(mut self, key: impl Into<String>, value: &V) -> Self {
        self.insert(key, Some(describe(value)));
        self
    }

    pub fn with_optional<V: Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert(key, value.map(|v| describe(&v)));
        self
    }

    /// Insert an already stringified value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.entries.insert(key.into(), value);
    }

    /// `None` when the key is missing, `Some(None)` when its value is nil.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries.get(key).map(|value| value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("[:]");
        }

        f.write_str("[")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: {}", key, value.as_deref().unwrap_or(NIL))?;
        }
        f.write_str("]")
    }
}
