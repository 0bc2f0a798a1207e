//! CLI administration tool for attendance-dashboard.
//!
//! Queries the configured roster and checks the attendance source without
//! starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Print the roster filtered by "engineer", sorted by name descending
//! cargo run --bin admin -- roster --search engineer --sort name --desc
//!
//! # Fetch today's counts once from the configured source
//! cargo run --bin admin -- summary
//!
//! # Validate configuration and dashboard definition
//! cargo run --bin admin -- config check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `ATTENDANCE_URL`, `ATTENDANCE_TIMEOUT_SECS`,
//! `DASHBOARD_CONFIG`.

use attendance_dashboard::application::services::{RosterService, SummaryService};
use attendance_dashboard::config::{self, Config};
use attendance_dashboard::domain::entities::DashboardConfig;
use attendance_dashboard::domain::roster_query::{SortDirection, SortDirective, SortKey};
use attendance_dashboard::domain::summary::SummaryState;
use attendance_dashboard::server::build_source;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing attendance-dashboard.
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
    /// Print the roster table
    Roster {
        /// Case-insensitive search over name, role and status
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort column: name, role, status or lastLogin
        #[arg(long)]
        sort: Option<SortKey>,

        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Fetch today's attendance counts once
    Summary,

    /// Configuration checks
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Validate environment and dashboard configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Roster { search, sort, desc } => {
            let dashboard = config::load_dashboard(config.dashboard_config_path.as_deref())?;
            let direction = if desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            let directive = SortDirective {
                key: sort,
                direction,
            };
            print_roster(&dashboard, &search, directive);
        }
        Commands::Summary => handle_summary(&config).await?,
        Commands::Config { action } => match action {
            ConfigAction::Check => handle_config_check(&config)?,
        },
    }

    Ok(())
}

/// Prints the filtered roster.
///
/// # Output Format
///
/// ```text
/// 📋 Roster
///
///   Name         Role                  Status   Last Login
///   ─────────────────────────────────────────────────────────
///   Akshita      Software Engineer     Absent   45 mins ago
/// ```
fn print_roster(dashboard: &DashboardConfig, search: &str, sort: SortDirective) {
    println!("{}", "📋 Roster".bright_blue().bold());
    println!();

    let service = RosterService::new(dashboard.roster.clone().into());
    let rows = service.query(search, sort);

    if rows.is_empty() {
        println!("{}", "  No users found.".yellow());
        return;
    }

    println!(
        "  {:<12} {:<22} {:<8} {}",
        "Name".bright_white().bold(),
        "Role".bright_white().bold(),
        "Status".bright_white().bold(),
        "Last Login".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for record in &rows {
        let status = if record.status.is_present() {
            record.status.attendance_label().green()
        } else {
            record.status.attendance_label().red()
        };

        println!(
            "  {:<12} {:<22} {:<8} {}",
            record.name.cyan(),
            record.role,
            status,
            record.last_login.bright_black()
        );
    }

    println!();
    println!(
        "  Showing: {} of {}",
        rows.len().to_string().bright_white().bold(),
        service.len()
    );
    println!();
}

/// Runs one summary activation against the configured source.
async fn handle_summary(config: &Config) -> Result<()> {
    println!("{}", "📊 Attendance Today".bright_blue().bold());
    println!();

    let dashboard = config::load_dashboard(config.dashboard_config_path.as_deref())?;
    let source = build_source(config, &dashboard.roster)?;
    let service = SummaryService::new(source);

    println!("  Source: {}", service.source_description().cyan());

    match service.refresh().await? {
        SummaryState::Ready { present, absent } => {
            println!("  Present: {}", present.to_string().green().bold());
            println!("  Absent:  {}", absent.to_string().red().bold());
        }
        SummaryState::Error { message } => {
            println!("  {}", message.red().bold());
        }
        SummaryState::Loading => {
            println!("  {}", "Still loading".yellow());
        }
    }

    if let Some(at) = service.settled_at() {
        println!(
            "  Fetched: {}",
            at.format("%Y-%m-%d %H:%M:%S UTC").to_string().bright_black()
        );
    }

    println!();
    Ok(())
}

/// Validates configuration and dashboard content.
fn handle_config_check(config: &Config) -> Result<()> {
    println!("{}", "🔧 Configuration".bright_blue().bold());
    println!();

    let dashboard = config::load_dashboard(config.dashboard_config_path.as_deref())?;

    println!("  Listen:     {}", config.listen_addr.cyan());
    println!(
        "  Attendance: {}",
        config
            .attendance_url
            .as_deref()
            .unwrap_or("roster-derived")
            .cyan()
    );
    println!(
        "  Dashboard:  {} ({} records, {} cards)",
        dashboard.title.cyan(),
        dashboard.roster.len(),
        dashboard.stat_cards.len()
    );
    println!();
    println!("{}", "✅ Configuration is valid".green().bold());
    println!();

    Ok(())
}
