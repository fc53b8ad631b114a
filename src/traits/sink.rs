// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::format::Params;
use crate::taxonomy::Level;

/// Destination for console lines.
pub trait ConsoleSink: Send + Sync {
    fn write(&self, line: &str);
}

/// Destination for platform log lines.
///
/// Implementations that cannot reach their backend drop the line silently.
pub trait PlatformSink: Send + Sync {
    fn write(&self, severity: tracing::Level, subsystem: &str, category: &str, line: &str);
}

/// User hook invoked for every log call that is not globally blocked.
///
/// Receives the level and the canonical line with the call's params.
pub type LogCallback = dyn Fn(&Level, (&str, Option<&Params>)) + Send + Sync;
