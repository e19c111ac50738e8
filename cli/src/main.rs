//! CLI entrypoint for ticket-triage
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use triage_application::{SuggestCategoryUseCase, SuggestInput};
use triage_infrastructure::{ConfigLoader, ConfigValidationError, OpenAiTransport};
use triage_presentation::{
    AppState, Cli, Command, ConsoleFormatter, OutputFormat, build_router, serve,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise -v count picks the level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        print!("{}", ConfigLoader::describe_sources(cli.config.as_ref()));
        return Ok(());
    }

    let Some(command) = cli.command else {
        bail!("No command given. Run `ticket-triage --help` for usage.");
    };

    info!("Starting ticket-triage");

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::Error::from(*e))
            .context("Failed to load configuration")?
    };

    let issues = match &command {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind.clone();
            }
            config.validate_for_serve()
        }
        Command::Suggest { .. } => config.validate(),
    };
    check_config(issues)?;

    // === Dependency Injection ===
    let transport = Arc::new(OpenAiTransport::from_config(&config.openai)?);
    let use_case = Arc::new(SuggestCategoryUseCase::new(
        transport,
        config.suggest_settings(),
    ));
    info!("Using model {}", use_case.model());

    // Ctrl-C cancels every in-flight suggestion and stops the server
    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received");
            signal_token.cancel();
        }
    });

    match command {
        Command::Serve { .. } => {
            let addr = config
                .server
                .socket_addr()
                .context("server.bind is not a socket address")?;
            let listener = TcpListener::bind(addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;

            let state = Arc::new(AppState::new(use_case, shutdown.clone()));
            let router = build_router(state, &config.server.allowed_origins);
            serve(listener, router, shutdown).await?;
            info!("Server stopped");
        }
        Command::Suggest {
            title,
            description,
            output,
        } => {
            let suggestion = use_case
                .execute(SuggestInput::new(title, description), &shutdown)
                .await?;

            let rendered = match output {
                OutputFormat::Text => ConsoleFormatter::format(&suggestion),
                OutputFormat::Json => ConsoleFormatter::format_json(&suggestion),
            };
            println!("{}", rendered.trim_end());
        }
    }

    Ok(())
}

fn check_config(issues: Vec<ConfigValidationError>) -> Result<()> {
    if issues.is_empty() {
        return Ok(());
    }

    for issue in &issues {
        warn!("Invalid configuration: {}", issue);
    }
    bail!(
        "Invalid configuration:\n{}",
        issues
            .iter()
            .map(|issue| format!("  - {}", issue))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
