// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::StructuredLog;
use crate::observability::INTERNAL_TARGET;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Log callback installed.
///
/// # Log Level
/// `debug!` - Routine state change
pub struct CallbackRegistered {
    pub replaced: bool,
}

impl Display for CallbackRegistered {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.replaced {
            write!(f, "Log callback registered, replacing the previous one")
        } else {
            write!(f, "Log callback registered")
        }
    }
}

impl StructuredLog for CallbackRegistered {
    fn log(&self) {
        tracing::debug!(target: INTERNAL_TARGET, replaced = self.replaced, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            target: INTERNAL_TARGET,
            "callback_registered",
            span_name = name,
            replaced = self.replaced,
        )
    }
}

/// Log callback removed.
///
/// # Log Level
/// `debug!` - Routine state change
pub struct CallbackCleared;

impl Display for CallbackCleared {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Log callback cleared")
    }
}

impl StructuredLog for CallbackCleared {
    fn log(&self) {
        tracing::debug!(target: INTERNAL_TARGET, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(target: INTERNAL_TARGET, "callback_cleared", span_name = name)
    }
}
