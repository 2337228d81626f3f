//! CLI entrypoint for namecraft
//!
//! This is the main binary that wires together all layers using
//! dependency injection and serves the HTTP API.

use anyhow::{Context, Result, bail};
use clap::Parser;
use namecraft_application::GenerateSuggestionsUseCase;
use namecraft_infrastructure::{ConfigLoader, FileConfig, GeminiLlmGateway};
use namecraft_presentation::{Cli, router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration before logging so the file can set the level
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?
    };

    if cli.show_config {
        print_config(&config)?;
        return Ok(());
    }

    init_tracing(&cli, &config);

    info!("Starting namecraft");

    let issues = config.validate();
    for issue in issues.iter().filter(|issue| !issue.is_error()) {
        warn!(code = ?issue.code, "{}", issue.message);
    }
    let errors: Vec<_> = issues.iter().filter(|issue| issue.is_error()).collect();
    if !errors.is_empty() {
        for issue in &errors {
            error!(code = ?issue.code, "{}", issue.message);
        }
        bail!("configuration has {} error(s)", errors.len());
    }

    let addr = listen_addr(&cli, &config)?;

    // === Dependency Injection ===
    let Some(api_key) = config.provider.resolve_api_key() else {
        bail!(
            "no provider API key found; set provider.api_key or one of: {}",
            config.provider.api_key_env.join(", ")
        );
    };
    let gateway = GeminiLlmGateway::new(config.provider.to_gemini_config(Some(api_key)))
        .context("failed to build provider client")?;
    info!(model = %gateway.model(), "Provider configured");

    let use_case = GenerateSuggestionsUseCase::new(Arc::new(gateway));
    let app = router(use_case);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(addr = %addr, "namecraft listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await?;
    info!("namecraft shutting down");
    Ok(())
}

fn init_tracing(cli: &Cli, config: &FileConfig) {
    // RUST_LOG wins over the flags and the file
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(cli, config));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if cli.log_json || config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Filter from `-v`, else `logging.level` (unknown levels become `info`).
fn default_filter(cli: &Cli, config: &FileConfig) -> EnvFilter {
    EnvFilter::new(cli.verbosity_level().unwrap_or(config.logging.effective_level()))
}

fn listen_addr(cli: &Cli, config: &FileConfig) -> Result<SocketAddr> {
    match &cli.listen_addr {
        Some(addr) => addr
            .parse()
            .with_context(|| format!("invalid --listen-addr '{}'", addr)),
        None => config.server.socket_addr().with_context(|| {
            format!("invalid server.listen_addr '{}'", config.server.listen_addr)
        }),
    }
}

fn print_config(config: &FileConfig) -> Result<()> {
    println!("Configuration sources:");
    for source in ConfigLoader::config_sources() {
        println!("  {}", source);
    }
    println!();
    let rendered = ConfigLoader::render(config).context("failed to render configuration")?;
    println!("{}", rendered);
    Ok(())
}

async fn wait_for_shutdown() {
    shutdown_on(tokio::signal::ctrl_c()).await;
}

/// Resolve once `signal` fires. Never resolves if the handler could not be
/// installed.
async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            error!("failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
