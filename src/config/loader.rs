//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::HandlerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Path of an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "HANDLER_CONFIG";
/// Overrides `protocol.scheme`.
pub const PROTOCOL_ENV: &str = "HANDLER_PROTOCOL";
/// Overrides `protocol.name`.
pub const PROTOCOL_NAME_ENV: &str = "HANDLER_PROTOCOL_NAME";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<HandlerConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<HandlerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Apply `HANDLER_PROTOCOL` / `HANDLER_PROTOCOL_NAME`. Empty values are
/// treated as unset.
pub fn apply_env_overrides<F>(config: &mut HandlerConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(scheme) = non_empty(PROTOCOL_ENV) {
        config.protocol.scheme = scheme;
    }
    if let Some(name) = non_empty(PROTOCOL_NAME_ENV) {
        config.protocol.name = name;
    }
}

/// Defaults, then the file named by `HANDLER_CONFIG` (if any), then the
/// environment overrides, then validation.
pub fn load_with<F>(lookup: F) -> Result<HandlerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup(CONFIG_PATH_ENV) {
        Some(path) if !path.trim().is_empty() => {
            tracing::info!(path = %path, "Loading configuration file");
            read_config(Path::new(&path))?
        }
        _ => HandlerConfig::default(),
    };

    apply_env_overrides(&mut config, &lookup);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// [`load_with`] reading the process environment.
pub fn load_from_env() -> Result<HandlerConfig, ConfigError> {
    load_with(|key| std::env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = load_with(env(&[])).unwrap();
        assert_eq!(config.protocol.scheme, "web+foo");
        assert_eq!(config.protocol.name, "Foo Protocol");
    }

    #[test]
    fn test_environment_overrides() {
        let config = load_with(env(&[
            (PROTOCOL_ENV, "web+blankos"),
            (PROTOCOL_NAME_ENV, "Blankos"),
        ]))
        .unwrap();
        assert_eq!(config.protocol.scheme, "web+blankos");
        assert_eq!(config.protocol.name, "Blankos");
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let config = load_with(env(&[(PROTOCOL_NAME_ENV, "")])).unwrap();
        assert_eq!(config.protocol.name, "Foo Protocol");
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let err = load_with(env(&[(PROTOCOL_ENV, "foo")])).unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors[0].field, "protocol.scheme"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_with(env(&[(CONFIG_PATH_ENV, "/definitely/not/here.toml")])).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_file_then_environment() {
        let path = std::env::temp_dir()
            .join(format!("handler-config-{}.toml", std::process::id()));
        let toml = r#"
[protocol]
scheme = "web+bar"
name = "Bar"

[listener]
bind_address = "127.0.0.1:4000"
"#;
        fs::write(&path, toml).unwrap();

        let path_str = path.to_string_lossy().into_owned();
        let config = load_with(env(&[
            (CONFIG_PATH_ENV, path_str.as_str()),
            (PROTOCOL_NAME_ENV, "Bar Protocol"),
        ]))
        .unwrap();
        let from_file = load_config(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.protocol.scheme, "web+bar");
        assert_eq!(config.protocol.name, "Bar Protocol");
        assert_eq!(config.listener.bind_address, "127.0.0.1:4000");
        assert_eq!(from_file.protocol.name, "Bar");
    }
}
