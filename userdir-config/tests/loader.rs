use std::fs;

use tempfile::tempdir;
use userdir_config::{
    ConfigGuardRailError, ConfigLoadError, ConfigLoader, EnvConfig,
    models::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT},
};

fn loader() -> ConfigLoader {
    ConfigLoader::new().without_default_locations()
}

#[test]
fn defaults_apply_without_file_or_env() {
    let load = loader()
        .load_with_env(EnvConfig::default(), false)
        .expect("defaults load");

    assert_eq!(load.config.server.host, DEFAULT_SERVER_HOST);
    assert_eq!(load.config.server.port, DEFAULT_SERVER_PORT);
    assert!(load.config.cors.allows_any_origin());
    assert!(!load.config.dev_mode);
    assert!(load.config.metadata.config_path.is_none());
    assert!(
        load.warnings
            .items
            .iter()
            .any(|warning| warning.message.contains("No userdir.toml"))
    );
}

#[test]
fn file_values_override_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("userdir.toml");
    fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
port = 9000

[cors]
allowed_origins = ["http://localhost:4200"]
allow_credentials = true
"#,
    )
    .expect("write config");

    let load = loader()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default(), false)
        .expect("file load");

    assert_eq!(load.config.server.host, "127.0.0.1");
    assert_eq!(load.config.server.port, 9000);
    assert_eq!(
        load.config.cors.allowed_origins,
        vec!["http://localhost:4200".to_string()]
    );
    assert!(load.config.cors.allow_credentials);
    assert_eq!(load.config.metadata.config_path.as_deref(), Some(path.as_path()));
    assert!(load.warnings.is_empty());
}

#[test]
fn environment_wins_over_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("userdir.toml");
    fs::write(&path, "[server]\nport = 9000\n").expect("write config");

    let env = EnvConfig {
        server_port: Some(7000),
        ..Default::default()
    };
    let load = loader()
        .with_config_path(&path)
        .load_with_env(env, true)
        .expect("layered load");

    assert_eq!(load.config.server.port, 7000);
    assert!(load.config.metadata.env_file_loaded);
}

#[test]
fn config_path_from_environment_is_used() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");
    fs::write(&path, "dev_mode = true\n").expect("write config");

    let env = EnvConfig {
        config_path: Some(path.clone()),
        ..Default::default()
    };
    let load = loader().load_with_env(env, false).expect("env path load");

    assert!(load.config.dev_mode);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");

    let err = loader()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default(), false)
        .unwrap_err();

    assert!(matches!(err, ConfigLoadError::MissingConfig { path: p } if p == path));
}

#[test]
fn malformed_file_reports_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[server\nport = ").expect("write config");

    let err = loader()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default(), false)
        .unwrap_err();

    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn guard_rails_reject_credentials_for_any_origin() {
    let env = EnvConfig {
        cors_allow_credentials: Some(true),
        ..Default::default()
    };

    let err = loader().load_with_env(env, false).unwrap_err();

    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::CredentialsWithAnyOrigin)
    ));
}
