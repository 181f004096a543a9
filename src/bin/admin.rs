//! CLI administration tool for sentiment-service.
//!
//! Provides commands for inspecting and resetting the analysis cache and for
//! running one-off analyses without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check Redis and Ollama connectivity
//! cargo run --bin admin -- check
//!
//! # Clear all cached analyses
//! cargo run --bin admin -- cache clear
//!
//! # Look up the cached analysis for a text
//! cargo run --bin admin -- cache get "I love this product!"
//!
//! # Drop the cached analysis for a text
//! cargo run --bin admin -- cache forget "I love this product!" --model llama3
//!
//! # Analyze a text (uses and populates the cache)
//! cargo run --bin admin -- analyze "I love this product!" --model llama3
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`sentiment_service::config`].

use sentiment_service::application::services::AnalysisService;
use sentiment_service::config::{self, Config, mask_connection_string};
use sentiment_service::domain::entities::SentimentResult;
use sentiment_service::logging;
use sentiment_service::server::build_analysis_service;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing sentiment-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Cache operations
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Analyze a text through the cache-aside flow
    Analyze {
        /// Text to analyze
        text: String,

        /// Model override (defaults to OLLAMA_MODEL)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Check cache and model backend connectivity
    Check,
}

/// Cache subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// Remove every cached analysis
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the cached analysis for a text, if any
    Get {
        /// Text to look up
        text: String,

        /// Model the analysis was produced with (defaults to OLLAMA_MODEL)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Drop the cached analysis for a text
    Forget {
        /// Text whose entry should be removed
        text: String,

        /// Model the analysis was produced with (defaults to OLLAMA_MODEL)
        #[arg(short, long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    logging::init("warn", &config.log_format);

    let service = build_analysis_service(&config).await?;

    match cli.command {
        Commands::Cache { action } => handle_cache_action(action, &service).await?,
        Commands::Analyze { text, model } => analyze(&service, &text, model.as_deref()).await?,
        Commands::Check => check(&config, &service).await,
    }

    Ok(())
}

/// Dispatches cache commands.
async fn handle_cache_action(action: CacheAction, service: &AnalysisService) -> Result<()> {
    match action {
        CacheAction::Clear { yes } => clear_cache(service, yes).await,
        CacheAction::Get { text, model } => get_cached(service, &text, model.as_deref()).await,
        CacheAction::Forget { text, model } => forget(service, &text, model.as_deref()).await,
    }
}

/// Clears the cache after confirmation (unless `--yes`).
async fn clear_cache(service: &AnalysisService, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Clear analysis cache".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete every cached analysis?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let removed = service
        .clear_cache()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to clear cache: {}", e))?;

    println!(
        "{} {}",
        "✅ Cache cleared, entries removed:".green().bold(),
        removed.to_string().bright_white()
    );

    Ok(())
}

/// Prints the cached analysis for a text without calling the model.
async fn get_cached(service: &AnalysisService, text: &str, model: Option<&str>) -> Result<()> {
    let entry = service
        .lookup(text, model)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    match entry {
        Some(entry) => {
            println!("{}", "Cache HIT".green().bold());
            println!("  Text:  {}", entry.text.cyan());
            println!("  Model: {}", entry.model_used.cyan());
            print_sentiment(&entry.sentiment);
        }
        None => {
            println!("{}", "Cache MISS".yellow().bold());
        }
    }

    Ok(())
}

/// Drops the cached analysis for a text.
async fn forget(service: &AnalysisService, text: &str, model: Option<&str>) -> Result<()> {
    service
        .forget(text, model)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to drop cache entry: {}", e))?;

    println!(
        "{} {}",
        "✅ Cache entry dropped for model".green().bold(),
        model.unwrap_or(service.default_model()).bright_white()
    );

    Ok(())
}

/// Runs one analysis and prints the result.
async fn analyze(service: &AnalysisService, text: &str, model: Option<&str>) -> Result<()> {
    let analysis = service
        .analyze(text, model)
        .await
        .map_err(|e| anyhow::anyhow!("Analysis failed: {}", e))?;

    let source = if analysis.cached {
        "cache".green()
    } else {
        "model".bright_magenta()
    };

    println!("{}", "Analysis".bright_white().bold());
    println!("  Model:  {}", analysis.model_used.cyan());
    println!("  Source: {}", source);
    print_sentiment(&analysis.sentiment);

    Ok(())
}

/// Reports the status of both external dependencies.
async fn check(config: &Config, service: &AnalysisService) {
    println!("{}", "🔍 Connectivity check".bright_blue().bold());
    println!();

    let redis = config
        .redis_url
        .as_deref()
        .map(mask_connection_string)
        .unwrap_or_else(|| "not configured".to_string());

    if service.cache_healthy().await {
        println!("  {} Cache ({})", "✅".green(), redis);
    } else {
        println!("  {} Cache ({})", "❌".red(), redis);
    }

    if service.classifier_healthy().await {
        println!("  {} Ollama ({})", "✅".green(), config.ollama_base_url);
    } else {
        println!("  {} Ollama ({})", "❌".red(), config.ollama_base_url);
    }

    println!("  Default model: {}", service.default_model().cyan());
}

fn print_sentiment(sentiment: &SentimentResult) {
    let label = sentiment.label.as_str();
    let colored_label = match label {
        "positive" => label.green().bold(),
        "negative" => label.red().bold(),
        "mixed" => label.yellow().bold(),
        _ => label.white().bold(),
    };

    println!("  Label:      {}", colored_label);
    println!("  Confidence: {:.2}", sentiment.confidence);
    if let Some(explanation) = &sentiment.explanation {
        println!("  Why:        {}", explanation.dimmed());
    }
}
