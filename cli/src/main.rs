//! CLI entrypoint for ads-experiments
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use experiments_application::{ExperimentProvider, ResolvePurchaseIntentUseCase};
use experiments_domain::{ConfigIssueCode, known_experiments};
use experiments_infrastructure::{
    ConfigLoader, ExperimentOverrides, FileConfig, FileExperimentProvider, ParamOverride,
};
use experiments_presentation::{Cli, ConsoleFormatter, OutputFormat};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        print_config_sources(&cli);
        return Ok(());
    }

    if cli.list {
        print!(
            "{}",
            ConsoleFormatter::format_known_experiments(known_experiments())
        );
        return Ok(());
    }

    let mut config = load_config(&cli)?;

    let params = cli
        .param
        .iter()
        .map(|raw| raw.parse::<ParamOverride>())
        .collect::<Result<Vec<_>, _>>()?;
    let overrides = ExperimentOverrides {
        enable: cli.enable.clone(),
        disable: cli.disable.clone(),
        params,
    };
    if !overrides.is_empty() {
        info!(
            "Applying overrides: {} enable, {} disable, {} param",
            overrides.enable.len(),
            overrides.disable.len(),
            overrides.params.len()
        );
    }

    let mut issues = overrides.apply(&mut config);
    issues.extend(config.validate());

    if cli.check {
        if issues.is_empty() {
            println!("Configuration OK");
            return Ok(());
        }
        print!("{}", ConsoleFormatter::format_issues(&issues));
        let errors = issues.iter().filter(|i| i.is_error()).count();
        if errors > 0 {
            bail!("configuration has {} error(s)", errors);
        }
        return Ok(());
    }

    // Malformed values are reported again by the resolver when they apply
    for issue in issues
        .iter()
        .filter(|i| !matches!(i.code, ConfigIssueCode::MalformedParameter { .. }))
    {
        warn!("{}", issue.message);
    }

    // === Dependency Injection ===
    let provider: Arc<dyn ExperimentProvider> = Arc::new(FileExperimentProvider::new(&config));
    let resolved = ResolvePurchaseIntentUseCase::new(provider).execute();

    let output = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format(&resolved),
        OutputFormat::Json => ConsoleFormatter::format_json(&resolved),
    };
    println!("{}", output.trim_end());

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        info!("Skipping configuration files and environment");
        return Ok(ConfigLoader::load_defaults());
    }
    let config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow!("failed to load configuration: {}", e))?;
    info!("Loaded {} experiment table(s)", config.experiments.len());
    Ok(config)
}

fn print_config_sources(cli: &Cli) {
    println!("Configuration sources (in priority order):");
    println!("  [ARGS ] Overrides: --enable / --disable / --param");
    for source in ConfigLoader::sources(cli.config.as_ref()) {
        let marker = if source.found { "FOUND" } else { "     " };
        println!("  [{}] {:?}: {}", marker, source.kind, source.location);
    }
}
