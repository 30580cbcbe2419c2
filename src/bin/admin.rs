//! CLI administration tool for shortlink.
//!
//! Manages links directly against the database without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links, newest first
//! cargo run --bin admin -- links list
//!
//! # Create a link with a generated or chosen code
//! cargo run --bin admin -- links create https://example.com/page
//! cargo run --bin admin -- links create https://example.com/page --code promo24
//!
//! # Show a link's stats
//! cargo run --bin admin -- links show promo24
//!
//! # Delete a link
//! cargo run --bin admin -- links delete promo24
//!
//! # Totals and connectivity
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use shortlink::application::services::LinkService;
use shortlink::config;
use shortlink::domain::entities::Link;
use shortlink::infrastructure::persistence::PgLinkRepository;
use shortlink::server::connect_with_retry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortlink.
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
    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show link and click totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Show a single link and its click stats
    Show {
        /// Short code
        code: String,
    },

    /// Create a new link
    Create {
        /// Target URL (prompted for if omitted)
        url: Option<String>,

        /// Requested code, [A-Za-z0-9]{6,8} (generated if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Delete a link
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

type Service = LinkService<PgLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.uses_memory_store() {
        anyhow::bail!("The admin tool needs a PostgreSQL DATABASE_URL, not 'memory'");
    }

    let pool = connect_with_retry(&config).await?;
    let service = LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))));

    match cli.command {
        Commands::Links { action } => {
            handle_link_action(action, &service, &config.base_url).await?
        }
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &Service, base_url: &str) -> Result<()> {
    match action {
        LinkAction::List => list_links(service).await,
        LinkAction::Show { code } => show_link(service, base_url, &code).await,
        LinkAction::Create { url, code } => create_link(service, base_url, url, code).await,
        LinkAction::Delete { code, yes } => delete_link(service, &code, yes).await,
    }
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
/// Links
///
///   Code     Clicks  Last click         Target
///   ------------------------------------------------------------------
///   promo24  12      2025-01-15 10:30   https://example.com/page
/// ```
async fn list_links(service: &Service) -> Result<()> {
    println!("{}", "Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin -- links create <URL>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<8} {:<7} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Last click".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "-".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<8} {:<7} {:<18} {}",
            link.code.cyan(),
            link.clicks.to_string().bright_green(),
            format_last_click(link).bright_black(),
            link.target_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints one link in detail.
async fn show_link(service: &Service, base_url: &str, code: &str) -> Result<()> {
    let link = service
        .get_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_link_details(service, base_url, &link);

    Ok(())
}

/// Creates a link, prompting for the URL when it was not given.
async fn create_link(
    service: &Service,
    base_url: &str,
    url: Option<String>,
    code: Option<String>,
) -> Result<()> {
    println!("{}", "Create link".bright_blue().bold());
    println!();

    let target_url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Target URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let link = service
        .create_link(target_url, code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "Link created".green().bold());
    print_link_details(service, base_url, &link);

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(service: &Service, code: &str, skip_confirm: bool) -> Result<()> {
    let link = service
        .get_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Cannot delete")?;

    println!("  Code:   {}", link.code.cyan());
    println!("  Target: {}", link.target_url);
    println!("  Clicks: {}", link.clicks.to_string().bright_green());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "Link deleted".green().bold());
    println!();

    Ok(())
}

/// Displays link and click totals.
async fn handle_stats(service: &Service) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let totals = service
        .totals()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  Links:  {}",
        totals.links.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        totals.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}

fn print_link_details(service: &Service, base_url: &str, link: &Link) {
    println!();
    println!(
        "  Short URL:  {}",
        service
            .get_short_url(base_url, &link.code)
            .bright_yellow()
            .bold()
    );
    println!("  Target:     {}", link.target_url);
    println!("  Clicks:     {}", link.clicks.to_string().bright_green());
    println!("  Last click: {}", format_last_click(link));
    println!(
        "  Created:    {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!();
}

fn format_last_click(link: &Link) -> String {
    link.last_clicked_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string())
}
