mod cli;
mod replay;
mod scenario;
mod serve;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use brickview_bridge::{JsonLinesSink, MessageSink, ScriptSink};
use brickview_common::{BrickviewError, ConfigError};
use brickview_config::BrickviewConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::cli::Command;
use crate::scenario::Scenario;

fn load_config(path: Option<&Path>) -> Result<BrickviewConfig, ConfigError> {
    match path {
        Some(path) => {
            let config = brickview_config::toml_loader::load_from_path(path)?;
            brickview_config::validation::validate(&config)?;
            Ok(config)
        }
        None => brickview_config::load_config(),
    }
}

fn init_logging(directive: &str) {
    let filter = match directive.parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::new("brickview=info"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn stdout_sink(script: bool) -> Arc<dyn MessageSink> {
    if script {
        Arc::new(ScriptSink::new(std::io::stdout()))
    } else {
        Arc::new(JsonLinesSink::new(std::io::stdout()))
    }
}

async fn run(command: Command, config: BrickviewConfig) -> Result<(), BrickviewError> {
    match command {
        Command::Replay { scenario, script } => {
            let scenario = Scenario::load(&scenario)?;
            replay::run_replay(&config, &scenario, stdout_sink(script))?;
        }
        Command::Serve { scenario } => {
            let scenario = Scenario::load(&scenario)?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let report = serve::run_serve(&config, &scenario, stdout_sink(false), stdin).await?;
            tracing::info!(
                moves = report.moves,
                clicks = report.clicks,
                handled = report.handled_clicks,
                inbound = report.inbound,
                hides = report.hides,
                "session report"
            );
        }
        Command::Config { path } => {
            if path {
                println!("{}", brickview_config::toml_loader::default_config_path()?.display());
            } else {
                println!("{}", brickview_config::config_to_json(&config));
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Logging is configured from the config file, so load it first and
    // report any failure once the subscriber is up.
    let loaded = load_config(args.config.as_deref());
    let level = match &loaded {
        Ok(config) => config.logging.level.directive(),
        Err(_) => BrickviewConfig::default().logging.level.directive(),
    };
    let directive = args
        .log_level
        .as_deref()
        .map(|l| format!("brickview={l}"))
        .unwrap_or(level);
    init_logging(&directive);

    tracing::info!("Brickview v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        BrickviewConfig::default()
    });

    match run(args.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("brickview: {e}");
            ExitCode::FAILURE
        }
    }
}
