// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{AssertionConfig, Configuration};
use crate::dispatch::global;
use parking_lot::RwLock;
use std::sync::Arc;

/// Holder for a whole settings snapshot that is replaced, never edited.
///
/// Readers clone the inner `Arc` under a shared lock that is held only for the
/// pointer copy, so they never wait on each other and never see a partially
/// written value. A reader that started before a swap keeps the old snapshot
/// for the rest of its call.
#[derive(Debug, Default)]
pub struct SettingsSlot<T> {
    current: RwLock<Arc<T>>,
}

impl<T> SettingsSlot<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: RwLock::new(Arc::new(value)),
        }
    }

    /// Current snapshot.
    pub fn load(&self) -> Arc<T> {
        Arc::clone(&self.current.read())
    }

    /// Swap in a new snapshot, returning the one it replaced.
    pub fn replace(&self, value: T) -> Arc<T> {
        std::mem::replace(&mut *self.current.write(), Arc::new(value))
    }
}

/// Process-wide logging configuration.
pub fn configuration() -> Arc<Configuration> {
    global().configuration()
}

/// Replace the process-wide logging configuration. Last write wins.
pub fn set_configuration(config: Configuration) {
    global().set_configuration(config);
}

/// Process-wide assertion configuration.
pub fn assertion_config() -> AssertionConfig {
    global().assertion_config()
}

/// Replace the process-wide assertion configuration.
pub fn set_assertion_config(config: AssertionConfig) {
    global().set_assertion_config(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_keeps_snapshot_taken_before_replace() {
        let slot = SettingsSlot::new(Configuration::default());
        let before = slot.load();

        let previous = slot.replace(Configuration::silent());

        assert!(!before.block_all_logs);
        assert!(!previous.block_all_logs);
        assert!(slot.load().block_all_logs);
    }

    #[test]
    fn test_concurrent_replace_never_tears() {
        let slot = Arc::new(SettingsSlot::new(Configuration::default()));

        let writers: Vec<_> = (0..4)
            .map(|i| {
                let slot = Arc::clone(&slot);
                std::thread::spawn(move || {
                    for n in 0..200 {
                        slot.replace(Configuration {
                            loggable_history_limit: n + 1,
                            subsystem: format!("writer-{}-{}", i, n + 1),
                            ..Configuration::default()
                        });
                    }
                })
            })
            .collect();

        for _ in 0..500 {
            let snapshot = slot.load();
            if snapshot.subsystem != "app" {
                // Both fields always come from the same write
                let suffix = snapshot.subsystem.rsplit('-').next().unwrap();
                assert_eq!(suffix, snapshot.loggable_history_limit.to_string());
            }
        }

        for writer in writers {
            writer.join().unwrap();
        }
    }

    #[test]
    fn test_reader_is_not_held_up_by_another_reader() {
        let slot = Arc::new(SettingsSlot::new(Configuration::default()));
        let held = slot.current.read();

        let other = Arc::clone(&slot);
        let loaded = std::thread::spawn(move || other.load()).join().unwrap();

        assert_eq!(*loaded, **held);
    }

    #[test]
    fn test_process_wide_settings_round_trip_through_free_functions() {
        let previous_config = configuration();
        let previous_assertions = assertion_config();

        set_configuration(Configuration {
            print_to_platform_log: true,
            loggable_history_limit: 7,
            subsystem: "com.example.global".to_string(),
            ..(*previous_config).clone()
        });
        set_assertion_config(AssertionConfig {
            throw_assertion_failures: !previous_assertions.throw_assertion_failures,
        });

        let current = configuration();
        assert!(current.print_to_platform_log);
        assert_eq!(current.loggable_history_limit, 7);
        assert_eq!(current.subsystem, "com.example.global");
        assert!(!current.block_all_logs);
        assert_eq!(
            assertion_config().throw_assertion_failures,
            !previous_assertions.throw_assertion_failures
        );

        set_configuration((*previous_config).clone());
        set_assertion_config(previous_assertions);

        assert_eq!(*configuration(), *previous_config);
        assert_eq!(assertion_config(), previous_assertions);
    }
}
