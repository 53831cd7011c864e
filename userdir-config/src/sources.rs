use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<bool>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub cors_allowed_methods: Option<Vec<String>>,
    pub cors_allowed_headers: Option<Vec<String>>,
    pub cors_allow_credentials: Option<bool>,
    pub dev_mode: Option<bool>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source; `gather` reads the process
    /// environment through this.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            config_path: lookup("USERDIR_CONFIG").map(PathBuf::from),
            server_host: lookup("SERVER_HOST")
                .filter(|value| !value.trim().is_empty()),
            server_port: lookup("SERVER_PORT")
                .and_then(|raw| raw.trim().parse().ok()),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_csv(&raw)),
            cors_allowed_methods: lookup("CORS_ALLOWED_METHODS")
                .map(|raw| parse_csv(&raw)),
            cors_allowed_headers: lookup("CORS_ALLOWED_HEADERS")
                .map(|raw| parse_csv(&raw)),
            cors_allow_credentials: lookup("CORS_ALLOW_CREDENTIALS")
                .and_then(|raw| parse_bool(&raw)),
            dev_mode: lookup("DEV_MODE").and_then(|raw| parse_bool(&raw)),
        }
    }
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(
        pairs: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_known_variables() {
        let env = EnvConfig::from_lookup(lookup_from(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, ,http://b.test"),
            ("CORS_ALLOW_CREDENTIALS", "yes"),
            ("DEV_MODE", "0"),
        ]));

        assert_eq!(env.server_host.as_deref(), Some("127.0.0.1"));
        assert_eq!(env.server_port, Some(8080));
        assert_eq!(
            env.cors_allowed_origins,
            Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );
        assert_eq!(env.cors_allow_credentials, Some(true));
        assert_eq!(env.dev_mode, Some(false));
        assert!(env.config_path.is_none());
    }

    #[test]
    fn unparsable_values_are_ignored() {
        let env = EnvConfig::from_lookup(lookup_from(&[
            ("SERVER_PORT", "not-a-port"),
            ("DEV_MODE", "maybe"),
            ("SERVER_HOST", "  "),
        ]));

        assert_eq!(env.server_port, None);
        assert_eq!(env.dev_mode, None);
        assert_eq!(env.server_host, None);
    }
}
