//! CLI front end for the linkstash core.
//!
//! A thin consumer of the service layer: it resolves ids, registers links,
//! records clicks, and prints summaries. The redirect itself (following the
//! destination) is left to whatever embeds the core.
//!
//! # Usage
//!
//! ```bash
//! # Register a link for an owner
//! linkstash shorten example.com/page --owner user_1
//!
//! # Resolve and record a visit
//! linkstash resolve abc12345
//! linkstash record abc12345 --descriptor "Mozilla/5.0 (...)"
//!
//! # Analytics
//! linkstash stats abc12345
//! linkstash overall
//!
//! # Housekeeping
//! linkstash list --owner user_1
//! linkstash delete abc12345 --owner user_1
//! linkstash mark-qr abc12345
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use tracing_subscriber::EnvFilter;

use linkstash::application::services::{ClickRecorder, LinkRegistry, StatsService};
use linkstash::config::Config;
use linkstash::domain::entities::Link;
use linkstash::infrastructure::persistence::JsonFileStore;

/// Short-link registry with click analytics.
#[derive(Parser)]
#[command(name = "linkstash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a destination URL and print the new short id
    Shorten {
        /// Destination URL; `https://` is assumed when no scheme is given
        url: String,
        /// Owner id the link is registered under
        #[arg(long)]
        owner: String,
    },
    /// Look up the destination behind a short id
    Resolve {
        short_id: String,
    },
    /// List all links belonging to an owner, oldest first
    List {
        #[arg(long)]
        owner: String,
    },
    /// Delete a link and its entire click history
    Delete {
        short_id: String,
        /// Owner id requesting the deletion
        #[arg(long)]
        owner: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Record a click against a short id
    Record {
        short_id: String,
        /// Client capability descriptor used for device/browser classification
        #[arg(long, default_value = "linkstash-cli")]
        descriptor: String,
    },
    /// Bump the QR export counter for a short id
    MarkQr {
        short_id: String,
    },
    /// Print the analytics summary for one link
    Stats {
        short_id: String,
    },
    /// Print the cross-link operator aggregate
    Overall,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config);

    let store = Arc::new(
        JsonFileStore::open(&config.data_dir).context("Failed to open the data directory")?,
    );
    let registry = Arc::new(LinkRegistry::new(store));
    let recorder = ClickRecorder::new(Arc::clone(&registry));
    let stats = StatsService::new(Arc::clone(&registry));
    match cli.command {
        Commands::Shorten { url, owner } => {
            let link = registry.create(&url, &owner).await?;
            println!("{} {}", "Created".green().bold(), link.short_id.cyan());
            println!("  destination: {}", link.destination_url);
        }
        Commands::Resolve { short_id } => {
            let link = registry.resolve(&short_id).await?;
            println!("{}", link.destination_url);
        }
        Commands::List { owner } => {
            let mut links = registry.list_by_owner(&owner).await?;
            // The store guarantees no order.
            links.sort_by_key(|l| l.created_at);

            if links.is_empty() {
                println!("{}", "No links for this owner.".yellow());
            }
            for link in links {
                print_link_row(&link);
            }
        }
        Commands::Delete {
            short_id,
            owner,
            yes,
        } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt(format!(
                        "Delete '{short_id}' and its entire click history?"
                    ))
                    .default(false)
                    .interact()?;
            if !confirmed {
                println!("{}", "Aborted.".yellow());
                return Ok(());
            }

            registry.delete(&short_id, &owner).await?;
            println!("{} {}", "Deleted".red().bold(), short_id);
        }
        Commands::Record {
            short_id,
            descriptor,
        } => {
            let event = recorder.record(&short_id, &descriptor).await?;
            println!(
                "{} {} ({} / {} / {})",
                "Recorded".green().bold(),
                short_id.cyan(),
                event.device,
                event.browser,
                event.location
            );
        }
        Commands::MarkQr { short_id } => {
            registry.increment_qr_export(&short_id).await?;
            println!("{} {}", "QR export counted for".green(), short_id.cyan());
        }
        Commands::Stats { short_id } => {
            let summary = stats.summarize(&short_id).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Overall => {
            let overall = stats.overall_stats().await?;
            println!("{}", serde_json::to_string_pretty(&overall)?);
        }
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn print_link_row(link: &Link) {
    println!(
        "{}  {}  clicks: {}  qr: {}  created: {}",
        link.short_id.cyan().bold(),
        link.destination_url,
        link.click_count.to_string().green(),
        link.qr_export_count,
        link.created_at.format("%Y-%m-%d %H:%M")
    );
}
