#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Result, anyhow};
use axum_test::TestServer;
use userdir_server::{
    AppState, create_app,
    infra::config::{Config, CorsConfig},
};

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

/// Server over a fresh, empty directory with default configuration.
pub fn build_test_app() -> Result<TestApp> {
    build_test_app_with_config(Config::default())
}

pub fn build_test_app_with_config(config: Config) -> Result<TestApp> {
    let state = AppState::in_memory(Arc::new(config));
    let server = TestServer::new(create_app(state.clone()))
        .map_err(|err| anyhow!(err.to_string()))?;

    Ok(TestApp { server, state })
}

/// Config that only lets `origin` through CORS.
pub fn restricted_cors(origin: &str) -> Config {
    Config {
        cors: CorsConfig {
            allowed_origins: vec![origin.to_string()],
            ..CorsConfig::default()
        },
        ..Config::default()
    }
}
