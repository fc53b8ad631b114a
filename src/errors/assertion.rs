// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// A failed assertion, carrying exactly the line that was logged for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{logged}")]
pub struct AssertionFailure {
    pub logged: String,
}

impl AssertionFailure {
    pub fn new(logged: impl Into<String>) -> Self {
        Self {
            logged: logged.into(),
        }
    }
}
