use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use userdir_server::{
    AppState, create_app,
    infra::{
        config::{Config, ConfigLoad, ConfigLoader, ConfigWarnings},
        shutdown::shutdown_signal,
    },
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "userdir-server")]
#[command(about = "In-memory user directory served over a REST API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

/// Flags only; `USERDIR_CONFIG`, `SERVER_HOST` and `SERVER_PORT` are read by
/// the config loader.
#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Server port (overrides config and environment)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config and environment)
    #[arg(long)]
    host: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Load and validate the configuration, report it and exit
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = load_runtime_config(&cli.serve)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    log_config(&config, &warnings);

    if let Some(Command::Config(ConfigCommand::Check)) = cli.command {
        info!("configuration is valid");
        return Ok(());
    }

    run_server(Arc::new(config)).await
}

fn load_runtime_config(
    args: &ServeArgs,
) -> anyhow::Result<(Config, ConfigWarnings)> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = args.config.clone() {
        loader = loader.with_config_path(path);
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }

    Ok((config, warnings))
}

fn log_config(config: &Config, warnings: &ConfigWarnings) {
    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "config file loaded");
    }

    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }

    info!(
        server.host = %config.server.host,
        server.port = config.server.port,
        dev_mode = config.dev_mode,
        cors.any_origin = config.cors.allows_any_origin(),
        "configuration in effect"
    );
}

async fn run_server(config: Arc<Config>) -> anyhow::Result<()> {
    let addr = (config.server.host.clone(), config.server.port);
    let state = AppState::in_memory(config);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind((addr.0.as_str(), addr.1))
        .await
        .with_context(|| format!("failed to bind {}:{}", addr.0, addr.1))?;

    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}
