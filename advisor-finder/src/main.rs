//! Research Advisor Finder (advisor-finder) - terminal front end
//!
//! Searches the advisor discovery backend by free-text interest or CV,
//! explains individual matches, runs the interactive research-direction
//! explorer, and prints the advisor-search guide.
//!
//! Backend URL resolution order: --api-url, ADVISOR_API_URL, config file,
//! compiled default.

use std::path::PathBuf;

use advisor_common::config::ClientConfig;
use advisor_finder::filters::DEFAULT_RESULT_COUNT;
use advisor_finder::ApiClient;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Command-line arguments for advisor-finder
#[derive(Parser, Debug)]
#[command(name = "advisor-finder")]
#[command(about = "Find research advisors by interest, CV or guided exploration")]
#[command(version)]
struct Args {
    /// Backend base URL (overrides ADVISOR_API_URL and the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Config file (default: <config dir>/advisor-finder/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (overrides the config file; RUST_LOG wins over both)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

/// Result filters and compare picks shared by `search` and `upload`
#[derive(clap::Args, Debug)]
pub struct FilterArgs {
    /// Number of results (5-20, steps of 5)
    #[arg(short, long, default_value_t = DEFAULT_RESULT_COUNT)]
    pub limit: u32,

    /// Minimum h-index (0-100, steps of 5)
    #[arg(long, default_value_t = 0)]
    pub min_h_index: u32,

    /// Restrict to a university; repeat for several
    #[arg(short, long = "university")]
    pub universities: Vec<String>,

    /// Compare these results side by side (faculty ids, up to 3)
    #[arg(long, value_name = "FACULTY_ID", value_delimiter = ',')]
    pub compare: Vec<i64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search faculty by research interest
    Search {
        #[arg(required = true)]
        query: Vec<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Match faculty against a CV (PDF or DOCX, up to 10MB)
    Upload {
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Explain why a faculty member matches your interests
    Explain {
        faculty_id: i64,

        #[arg(long)]
        interests: String,
    },

    /// Narrow a broad interest into a research direction, interactively
    Explore { interest: Vec<String> },

    /// Print the advisor-search guide
    Resources,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ClientConfig::resolve(
        args.api_url.as_deref(),
        args.config.as_deref(),
        args.log_level.as_deref(),
    )
    .context("Failed to resolve configuration")?;

    // Initialize tracing; logs go to stderr so stdout carries only results
    let default_filter = format!(
        "advisor_finder={level},advisor_common={level}",
        level = config.log_level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(api_url = %config.api_url, "Configuration resolved");

    if let Command::Resources = args.command {
        commands::resources();
        return Ok(());
    }

    let client = ApiClient::from_config(&config).context("Failed to create API client")?;

    match args.command {
        Command::Search { query, filters } => {
            commands::search(&client, query.join(" "), &filters).await
        }
        Command::Upload { file, filters } => commands::upload(&client, &file, &filters).await,
        Command::Explain {
            faculty_id,
            interests,
        } => commands::explain(&client, faculty_id, &interests).await,
        Command::Explore { interest } => commands::explore(&client, interest.join(" ")).await,
        Command::Resources => Ok(()),
    }
}
