//! CLI entrypoint for the Mess Review Bot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use reviewbot_application::{
    ClassifyReviewUseCase, LlmGateway, NoStreamObserver, StreamObserver,
};
use reviewbot_domain::{Model, OutputFormat};
use reviewbot_infrastructure::{ConfigLoader, FileConfig, OllamaLlmGateway};
use reviewbot_presentation::{
    Cli, ConsoleFormatter, ConsoleStreamEcho, ReplySpinner, WebState, web,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue.message);
    }
    if let Some(issue) = issues.iter().find(|i| i.is_error()) {
        bail!("Invalid configuration: {}", issue.message);
    }

    let classifier_config = config.to_classifier_config();

    if cli.show_prompt {
        let review = cli.review.as_deref().unwrap_or_default();
        println!("{}", classifier_config.render_prompt(review));
        return Ok(());
    }

    // === Dependency Injection ===
    let gateway = OllamaLlmGateway::new(config.ollama.to_client_config())?;
    check_model_available(&gateway, classifier_config.model()).await;

    let use_case = ClassifyReviewUseCase::new(Arc::new(gateway), classifier_config);

    // Serve the web form unless a review was given
    let Some(review) = cli.review else {
        let state = WebState {
            use_case,
            echo: config.output.echo,
        };
        web::run(state, &config.server.bind).await?;
        return Ok(());
    };

    let format = config.output.format.unwrap_or_default();

    // Streaming text would break JSON on stdout
    let echo = ConsoleStreamEcho;
    let spinner = ReplySpinner::new();
    let observer: &dyn StreamObserver = if cli.quiet {
        &NoStreamObserver
    } else if config.output.echo && format != OutputFormat::Json {
        &echo
    } else {
        &spinner
    };

    let result = use_case.execute_with_observer(&review, observer).await?;

    println!("{}", ConsoleFormatter::format(&result, format));

    Ok(())
}

/// Command-line flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.ollama.model = model.clone();
    }
    if let Some(url) = &cli.ollama_url {
        config.ollama.base_url = url.clone();
    }
    if let Some(bind) = &cli.bind {
        config.server.bind = bind.clone();
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
    if cli.quiet {
        config.output.echo = false;
    }
}

/// Warn early when Ollama is down or the model has not been pulled
async fn check_model_available(gateway: &OllamaLlmGateway, model: &Model) {
    if !gateway.ping().await {
        warn!(
            "Ollama is not reachable at {}; start it with `ollama serve`",
            gateway.base_url()
        );
        return;
    }

    match gateway.available_models().await {
        Ok(models) if models.iter().any(|m| model.matches_tag(m.as_str())) => {
            info!("Using model {}", model);
        }
        Ok(_) => warn!(
            "Model {} is not pulled yet; run `ollama pull {}`",
            model, model
        ),
        Err(e) => warn!("Could not list Ollama models: {}", e),
    }
}
