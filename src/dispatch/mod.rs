// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod global;
mod logger;
mod macros;


pub use global::{
    clear_callback, error, global, info, log, log_error, log_lazy, log_loggable, log_standard,
    set_callback, standard, warning,
};
pub use logger::{Logger, LoggerBuilder};
