pub use userdir_config::{
    Config, ConfigLoad, ConfigLoadError, ConfigLoader, ConfigMetadata,
    ConfigWarnings, CorsConfig, ServerConfig,
};
