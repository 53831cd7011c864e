use std::path::PathBuf;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 4356;

pub const DEFAULT_CORS_METHODS: &[&str] =
    &["GET", "POST", "PUT", "DELETE", "OPTIONS"];
pub const DEFAULT_CORS_HEADERS: &[&str] = &["content-type"];

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    /// Replaces the CORS allow-lists with a fully permissive policy.
    pub dev_mode: bool,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            allowed_methods: to_owned_list(DEFAULT_CORS_METHODS),
            allowed_headers: to_owned_list(DEFAULT_CORS_HEADERS),
            allow_credentials: false,
        }
    }
}

impl CorsConfig {
    pub fn is_wildcard_included(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin.trim() == "*")
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.is_wildcard_included()
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

pub(crate) fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
