use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::catalog::{CATEGORIES, find_category};
use crate::config::AppConfig;
use crate::generator::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};
use crate::logging::{init_file_logging, init_stderr_logging};
use crate::retrieval::{FetchOutcome, RetrievalService};

#[derive(Parser)]
#[command(name = "startup-sunsets")]
#[command(version = "0.1.0")]
#[command(about = "Browse an archive of failed startups, generated on demand", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub generator: GeneratorArgs,

    /// Log file for the interactive UI
    #[arg(long, env = "STARTUP_SUNSETS_LOG", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone)]
pub struct GeneratorArgs {
    /// Generator model name
    #[arg(long, env = "STARTUP_SUNSETS_MODEL", default_value = DEFAULT_MODEL, global = true)]
    pub model: String,

    /// Generator API base URL
    #[arg(long, env = "STARTUP_SUNSETS_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Give up on a generator call after this many seconds (default: wait indefinitely)
    #[arg(long, env = "STARTUP_SUNSETS_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the browsable categories
    Categories,
    /// Fetch case files for one category and print them as JSON
    Fetch {
        /// Category id (see `categories`)
        category: String,
    },
    /// Search for case files by company name or topic and print them as JSON
    Search {
        /// Company name or topic
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_args(&cli.generator, cli.log_file.clone());

    match &cli.command {
        None => {
            init_file_logging(&config.log_path()?)?;
            let service = build_service(&config)?;
            crate::tui::run_interactive(service)?;
        }
        Some(Commands::Categories) => show_categories(),
        Some(Commands::Fetch { category }) => {
            let category = find_category(category).with_context(|| {
                format!("Unknown category '{}'. Run `startup-sunsets categories` to list them.", category)
            })?;
            init_stderr_logging()?;
            let service = build_service(&config)?;
            print_outcome(service.fetch_by_category(category))?;
        }
        Some(Commands::Search { query }) => {
            let query = query.join(" ");
            if query.trim().is_empty() {
                anyhow::bail!("Search query must not be blank");
            }
            init_stderr_logging()?;
            let service = build_service(&config)?;
            print_outcome(service.fetch_by_query(&query))?;
        }
    }

    Ok(())
}

fn build_service(config: &AppConfig) -> Result<Arc<RetrievalService>> {
    let client =
        GeminiClient::new(config.gemini.clone()).context("Failed to build generator client")?;
    Ok(Arc::new(RetrievalService::new(Arc::new(client))))
}

fn show_categories() {
    println!("Startup Sunsets Categories");
    println!("==========================");
    for category in &CATEGORIES {
        println!("{:<10} {:<16} focus: {}", category.id, category.name, category.focus);
        println!("{:<10} {}", "", category.description);
    }
}

fn print_outcome(outcome: FetchOutcome) -> Result<()> {
    match &outcome {
        FetchOutcome::Failed(reason) => eprintln!("Warning: Retrieval failed: {}", reason),
        FetchOutcome::Empty => eprintln!("No case files found"),
        FetchOutcome::Found(_) => {}
    }

    let json = serde_json::to_string_pretty(outcome.records())
        .context("Failed to serialize case files")?;
    println!("{}", json);
    Ok(())
}
