//! Configuration library for the userdir server.
//!
//! Settings are layered from built-in defaults, an optional TOML file, an
//! optional `.env` file and the process environment. The binary applies its
//! own CLI overrides on top of the loaded [`Config`].

pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError,
};
pub use models::{Config, ConfigMetadata, CorsConfig, ServerConfig};
pub use sources::{EnvConfig, FileConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
