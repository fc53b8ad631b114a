// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod global;
mod loader;
mod settings;

pub mod consts;

pub use global::{
    assertion_config, configuration, set_assertion_config, set_configuration, SettingsSlot,
};
pub use loader::{load_configuration, parse_settings, SettingsFormat};
pub use settings::{AssertionConfig, Configuration, Settings};
