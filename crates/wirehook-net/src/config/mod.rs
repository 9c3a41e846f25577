//! Config loader (strict parsing).
//!
//! Errors name where the config came from (file path, or `<inline>` for
//! strings) so a failing `wirehook-check` run points at the right file.

pub mod schema;

use std::fs;
use std::io;

use thiserror::Error;
use wirehook_core::error::{ErrorCode, WireHookError};

pub use schema::{EnforcerSection, WireHookConfig};

const INLINE: &str = "<inline>";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path} failed: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid yaml in {origin}: {source}")]
    Yaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid config in {origin}: {source}")]
    Invalid {
        origin: String,
        #[source]
        source: WireHookError,
    },
}

impl ConfigError {
    /// Path or `<inline>` the failing config came from.
    pub fn origin(&self) -> &str {
        match self {
            ConfigError::Read { path, .. } => path,
            ConfigError::Yaml { origin, .. } | ConfigError::Invalid { origin, .. } => origin,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigError::Read { .. } => ErrorCode::Io,
            ConfigError::Yaml { .. } => ErrorCode::BadRequest,
            ConfigError::Invalid { source, .. } => source.code(),
        }
    }
}

impl From<ConfigError> for WireHookError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Read { path, source } => {
                WireHookError::Io(io::Error::new(source.kind(), format!("{path}: {source}")))
            }
            ConfigError::Yaml { origin, source } => {
                WireHookError::BadRequest(format!("invalid yaml in {origin}: {source}"))
            }
            ConfigError::Invalid { source, .. } => source,
        }
    }
}

pub fn load_from_file(path: &str) -> Result<WireHookConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    parse(&s, path)
}

pub fn load_from_str(s: &str) -> Result<WireHookConfig, ConfigError> {
    parse(s, INLINE)
}

fn parse(s: &str, origin: &str) -> Result<WireHookConfig, ConfigError> {
    let cfg: WireHookConfig = serde_yaml::from_str(s).map_err(|source| ConfigError::Yaml {
        origin: origin.to_string(),
        source,
    })?;
    cfg.validate().map_err(|source| ConfigError::Invalid {
        origin: origin.to_string(),
        source,
    })?;
    tracing::debug!(%origin, enforcer = cfg.enforcer.enabled, "config loaded");
    Ok(cfg)
}
