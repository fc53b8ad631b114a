// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::Settings;
use crate::errors::ConfigError;
use crate::observability::messages::config::SettingsLoaded;
use crate::observability::messages::StructuredLog;
use std::fs;
use std::path::Path;

/// On-disk formats a settings file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Yaml,
    Toml,
}

impl SettingsFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "yaml" | "yml" => Ok(SettingsFormat::Yaml),
            "toml" => Ok(SettingsFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat { extension }),
        }
    }
}

/// Parse and validate settings from a string.
pub fn parse_settings(content: &str, format: SettingsFormat) -> Result<Settings, ConfigError> {
    let settings: Settings = match format {
        SettingsFormat::Yaml => serde_yaml::from_str(content)?,
        SettingsFormat::Toml => toml::from_str(content)?,
    };

    if settings.logging.loggable_history_limit == 0 {
        return Err(ConfigError::InvalidHistoryLimit(0));
    }

    Ok(settings)
}

/// Load settings from a YAML or TOML file.
///
/// The returned [`Settings`] is not installed; pass its parts to
/// [`set_configuration`](crate::config::set_configuration) and
/// [`set_assertion_config`](crate::config::set_assertion_config).
pub fn load_configuration<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    let format = SettingsFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&content, format)?;

    let msg = SettingsLoaded {
        path,
        format,
        settings: &settings,
    };
    let span = msg.span("settings_loaded");
    let _guard = span.enter();
    msg.log();

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_partial_yaml() {
        let yaml = r#"
logging:
  print_to_platform_log: true
  loggable_history_limit: 5
"#;

        let settings = parse_settings(yaml, SettingsFormat::Yaml).unwrap();
        assert!(settings.logging.print_to_platform_log);
        assert!(settings.logging.print_to_console);
        assert_eq!(settings.logging.loggable_history_limit, 5);
        assert_eq!(
            settings.assertions.throw_assertion_failures,
            cfg!(debug_assertions)
        );
    }

    #[test]
    fn parse_toml_with_both_sections() {
        let content = r#"
[logging]
block_all_logs = true
subsystem = "com.example.shop"

[assertions]
throw_assertion_failures = false
"#;

        let settings = parse_settings(content, SettingsFormat::Toml).unwrap();
        assert!(settings.logging.block_all_logs);
        assert_eq!(settings.logging.subsystem, "com.example.shop");
        assert!(!settings.assertions.throw_assertion_failures);
    }

    #[test]
    fn test_zero_history_limit_is_rejected() {
        let result = parse_settings("logging:\n  loggable_history_limit: 0\n", SettingsFormat::Yaml);
        assert!(matches!(result, Err(ConfigError::InvalidHistoryLimit(0))));
    }

    #[test]
    fn test_wrong_field_type_is_a_yaml_error() {
        let result = parse_settings("logging:\n  print_to_console: maybe\n", SettingsFormat::Yaml);
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_load_from_yml_file() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "logging:\n  print_to_console: false").unwrap();

        let settings = load_configuration(file.path()).unwrap();
        assert!(!settings.logging.print_to_console);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();

        let error = load_configuration(file.path()).unwrap_err();
        assert!(error.to_string().contains("Unsupported settings format 'ini'"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let error = load_configuration(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Io { .. }));
    }
}
