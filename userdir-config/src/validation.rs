use axum::http::{HeaderName, HeaderValue, Method};
use thiserror::Error;

use crate::models::{Config, CorsConfig};

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("invalid CORS configuration: {reason}")]
    InvalidCorsConfig { reason: String },
    #[error(
        "CORS credentials cannot be allowed while every origin is accepted; set CORS_ALLOWED_ORIGINS"
    )]
    CredentialsWithAnyOrigin,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.dev_mode {
        warnings.push_with_hint(
            "DEV_MODE is enabled; CORS accepts every origin, method and header",
            "Unset DEV_MODE to apply the configured CORS allow-lists",
        );
        return Ok(warnings);
    }

    validate_cors(&config.cors)?;

    if config.cors.allow_credentials && config.cors.allows_any_origin() {
        return Err(ConfigGuardRailError::CredentialsWithAnyOrigin);
    }

    if config.cors.allows_any_origin() {
        warnings.push(
            "CORS accepts requests from any origin; set CORS_ALLOWED_ORIGINS to restrict browsers",
        );
    }

    Ok(warnings)
}

fn validate_cors(cors: &CorsConfig) -> Result<(), ConfigGuardRailError> {
    if cors.allowed_methods.is_empty() {
        return Err(ConfigGuardRailError::InvalidCorsConfig {
            reason: "CORS_ALLOWED_METHODS must include at least one HTTP method"
                .into(),
        });
    }

    for method in &cors.allowed_methods {
        if method == "*" {
            return Err(wildcard_not_allowed("CORS_ALLOWED_METHODS"));
        }
        Method::from_bytes(method.as_bytes()).map_err(|_| {
            ConfigGuardRailError::InvalidCorsConfig {
                reason: format!(
                    "invalid HTTP method `{}` in CORS_ALLOWED_METHODS",
                    method
                ),
            }
        })?;
    }

    if cors.allowed_headers.is_empty() {
        return Err(ConfigGuardRailError::InvalidCorsConfig {
            reason: "CORS_ALLOWED_HEADERS must include at least one header name"
                .into(),
        });
    }

    for header in &cors.allowed_headers {
        if header == "*" {
            return Err(wildcard_not_allowed("CORS_ALLOWED_HEADERS"));
        }
        HeaderName::from_bytes(header.as_bytes()).map_err(|_| {
            ConfigGuardRailError::InvalidCorsConfig {
                reason: format!(
                    "invalid header name `{}` in CORS_ALLOWED_HEADERS",
                    header
                ),
            }
        })?;
    }

    for origin in &cors.allowed_origins {
        if origin.trim() == "*" {
            continue;
        }
        HeaderValue::from_str(origin).map_err(|_| {
            ConfigGuardRailError::InvalidCorsConfig {
                reason: format!(
                    "invalid origin `{}` in CORS_ALLOWED_ORIGINS",
                    origin
                ),
            }
        })?;
    }

    Ok(())
}

fn wildcard_not_allowed(field: &str) -> ConfigGuardRailError {
    ConfigGuardRailError::InvalidCorsConfig {
        reason: format!("`*` is not accepted in {field}; list values explicitly"),
    }
}
