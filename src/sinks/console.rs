// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::ConsoleSink;
use std::io::Write;

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl ConsoleSink for StdoutConsole {
    fn write(&self, line: &str) {
        // A closed stdout must not take the caller down with it
        let _ = writeln!(std::io::stdout().lock(), "{}", line);
    }
}
