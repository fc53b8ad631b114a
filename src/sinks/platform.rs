// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::PlatformSink;
use tracing::Level;

/// Target every platform log event is emitted under.
pub const PLATFORM_TARGET: &str = "tagged_log::platform";

/// Forwards lines to the `tracing` facade.
///
/// Subsystem and category become structured fields on the event. With no
/// subscriber installed the event goes nowhere, which is the expected
/// behaviour when the host has no platform log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPlatformLog;

impl PlatformSink for TracingPlatformLog {
    fn write(&self, severity: Level, subsystem: &str, category: &str, line: &str) {
        match severity {
            Level::ERROR => {
                tracing::error!(target: PLATFORM_TARGET, subsystem, category, "{}", line)
            }
            Level::WARN => {
                tracing::warn!(target: PLATFORM_TARGET, subsystem, category, "{}", line)
            }
            Level::INFO => {
                tracing::info!(target: PLATFORM_TARGET, subsystem, category, "{}", line)
            }
            Level::DEBUG => {
                tracing::debug!(target: PLATFORM_TARGET, subsystem, category, "{}", line)
            }
            _ => {
                tracing::trace!(target: PLATFORM_TARGET, subsystem, category, "{}", line)
            }
        }
    }
}
