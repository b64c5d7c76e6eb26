use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use storesearch_core::config::Config;
use storesearch_core::Catalog;

#[derive(Parser)]
#[command(name = "storesearch", about = "Store Search: substring search over a store catalog")]
struct Cli {
    /// Extra TOML config file layered over the defaults.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Address to listen on (overrides `server.bind`).
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// Catalog CSV file (overrides `catalog.path`).
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(path) = cli.catalog {
        config.catalog.path = path.to_string_lossy().into_owned();
    }

    let catalog = Catalog::new(config.catalog.path());
    match catalog.path() {
        Some(path) if path.exists() => tracing::info!(path = %path.display(), "serving catalog file"),
        Some(path) => tracing::info!(path = %path.display(), "catalog file not found, serving built-in items"),
        None => tracing::info!("no catalog file configured, serving built-in items"),
    }

    let app = storesearch_api::router(catalog, &config.server.prefix);
    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("binding {}", config.server.bind))?;
    tracing::info!(
        addr = %listener.local_addr()?,
        prefix = %config.server.prefix,
        "storesearch listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("storesearch stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
