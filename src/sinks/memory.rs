// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::{ConsoleSink, PlatformSink};
use parking_lot::Mutex;

/// A platform log write as the sink received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformEntry {
    pub severity: tracing::Level,
    pub subsystem: String,
    pub category: String,
    pub line: String,
}

/// Keeps every write in memory, in arrival order.
///
/// Serves as either sink, which makes it the usual choice for asserting on
/// output in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    console: Mutex<Vec<String>>,
    platform: Mutex<Vec<PlatformEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn console_lines(&self) -> Vec<String> {
        self.console.lock().clone()
    }

    pub fn platform_entries(&self) -> Vec<PlatformEntry> {
        self.platform.lock().clone()
    }

    pub fn clear(&self) {
        self.console.lock().clear();
        self.platform.lock().clear();
    }
}

impl ConsoleSink for MemorySink {
    fn write(&self, line: &str) {
        self.console.lock().push(line.to_string());
    }
}

impl PlatformSink for MemorySink {
    fn write(&self, severity: tracing::Level, subsystem: &str, category: &str, line: &str) {
        self.platform.lock().push(PlatformEntry {
            severity,
            subsystem: subsystem.to_string(),
            category: category.to_string(),
            line: line.to_string(),
        });
    }
}
