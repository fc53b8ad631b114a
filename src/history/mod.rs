// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Bounded per-object history of emitted log lines.
//!
//! Any object that implements [`Loggable`] can keep a trailing window of its
//! own log lines, independent of the console, platform and callback sinks.
//! Objects pick their own key; colliding keys share one history.

use crate::config::Configuration;
use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

/// Mapping from loggable key to its most recent lines, oldest first.
///
/// Appends to different keys proceed in parallel. Appends to the same key
/// are serialised by the map's shard lock, so push and trim happen together
/// and a reader never sees more than the limit.
#[derive(Debug, Default)]
pub struct HistoryBuffer {
    entries: DashMap<u64, VecDeque<String>>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `line` under `key`, evicting the oldest lines past the limit.
    ///
    /// Does nothing when history is disabled in `config`.
    pub fn append(&self, key: u64, line: impl Into<String>, config: &Configuration) {
        if !config.loggable_history_enabled {
            return;
        }

        let limit = config.loggable_history_limit;
        let mut lines = self.entries.entry(key).or_default();
        lines.push_back(line.into());
        while lines.len() > limit {
            lines.pop_front();
        }
    }

    /// Lines recorded for `key`, newest last.
    pub fn history(&self, key: u64) -> Vec<String> {
        self.entries
            .get(&key)
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self, key: u64) -> usize {
        self.entries.get(&key).map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn contains(&self, key: u64) -> bool {
        self.entries.contains_key(&key)
    }

    /// Drop every line for `key`.
    pub fn clear(&self, key: u64) {
        self.entries.remove(&key);
    }

    pub fn keys(&self) -> Vec<u64> {
        self.entries.iter().map(|entry| *entry.key()).collect()
    }
}

/// An object that keeps its own log history.
///
/// ```
/// use tagged_log::history::{next_history_key, Loggable};
///
/// struct Upload {
///     key: u64,
/// }
///
/// impl Loggable for Upload {
///     fn history_key(&self) -> u64 {
///         self.key
///     }
/// }
///
/// let upload = Upload { key: next_history_key() };
/// assert!(upload.log_history().is_empty());
/// ```
pub trait Loggable {
    /// Stable key identifying this object in the history buffer.
    fn history_key(&self) -> u64;

    /// Lines this object has logged through the process-wide logger.
    fn log_history(&self) -> Vec<String> {
        crate::dispatch::global().history().history(self.history_key())
    }
}

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

/// Hand out a process-unique history key.
pub fn next_history_key() -> u64 {
    NEXT_KEY.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn limited(limit: usize) -> Configuration {
        Configuration {
            loggable_history_limit: limit,
            ..Configuration::default()
        }
    }

    #[test]
    fn test_keeps_last_entries_in_order() {
        let buffer = HistoryBuffer::new();
        let config = limited(3);

        for i in 0..10 {
            buffer.append(7, format!("line {}", i), &config);
        }

        assert_eq!(buffer.history(7), vec!["line 7", "line 8", "line 9"]);
    }

    #[test]
    fn test_disabled_leaves_buffer_unchanged() {
        let buffer = HistoryBuffer::new();
        let disabled = Configuration {
            loggable_history_enabled: false,
            ..Configuration::default()
        };

        buffer.append(1, "ignored", &disabled);
        assert!(!buffer.contains(1));

        buffer.append(1, "kept", &Configuration::default());
        buffer.append(1, "ignored", &disabled);
        assert_eq!(buffer.history(1), vec!["kept"]);
    }

    #[test]
    fn test_keys_are_independent() {
        let buffer = HistoryBuffer::new();
        let config = limited(2);

        buffer.append(1, "a1", &config);
        buffer.append(2, "b1", &config);
        buffer.append(1, "a2", &config);

        assert_eq!(buffer.history(1), vec!["a1", "a2"]);
        assert_eq!(buffer.history(2), vec!["b1"]);

        let mut keys = buffer.keys();
        keys.sort();
        assert_eq!(keys, vec![1, 2]);
    }

    #[test]
    fn test_lowered_limit_trims_on_next_append() {
        let buffer = HistoryBuffer::new();
        for i in 0..5 {
            buffer.append(3, i.to_string(), &limited(5));
        }

        buffer.append(3, "5", &limited(2));
        assert_eq!(buffer.history(3), vec!["4", "5"]);
    }

    #[test]
    fn test_clear_removes_key() {
        let buffer = HistoryBuffer::new();
        buffer.append(9, "x", &Configuration::default());
        buffer.clear(9);
        assert_eq!(buffer.len(9), 0);
        assert!(buffer.history(9).is_empty());
    }

    #[test]
    fn test_concurrent_appends_to_same_key_respect_limit() {
        let buffer = Arc::new(HistoryBuffer::new());
        let config = Arc::new(limited(16));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let buffer = Arc::clone(&buffer);
                let config = Arc::clone(&config);
                std::thread::spawn(move || {
                    for i in 0..250 {
                        buffer.append(42, format!("{}-{}", t, i), &config);
                        assert!(buffer.len(42) <= 16);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(buffer.len(42), 16);
    }

    #[test]
    fn test_next_history_key_is_unique() {
        let a = next_history_key();
        let b = next_history_key();
        assert_ne!(a, b);
    }
}
