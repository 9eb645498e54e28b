use analytics::{DashboardService, InMemoryRepository, SalesRepository};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use configuration::{Config, ConfigOverrides, load_config};
use database::DbRepository;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod render;

/// The main entry point for the Tally reporting tool.
#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.overrides.apply(&mut config)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Analytics(args) => {
            let source = args.source.clone();
            with_repository(&source, |repo| handle_analytics(repo, args, &config)).await
        }
        Commands::Dashboard(args) => {
            let source = args.source.clone();
            with_repository(&source, |repo| handle_dashboard(repo, args, &config)).await
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Sales analytics and dashboard summaries for a small-business account.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ConfigOverrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print total sales, sales by date and the top products.
    Analytics(AnalyticsArgs),
    /// Print the full dashboard: sales, inventory and customers.
    Dashboard(DashboardArgs),
}

#[derive(Args, Clone)]
struct SourceArgs {
    /// The account (user id) whose records are summarized.
    #[arg(long)]
    account: String,

    /// Read records from a JSON snapshot instead of the database.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Print JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct AnalyticsArgs {
    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Args)]
struct DashboardArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// The date treated as "today" (format: YYYY-MM-DD). Defaults to the
    /// current date in the configured UTC offset.
    #[arg(long)]
    today: Option<NaiveDate>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Opens the snapshot or database named by `source` and runs `f` against it.
async fn with_repository<F, Fut>(source: &SourceArgs, f: F) -> Result<()>
where
    F: FnOnce(Box<dyn SalesRepository>) -> Fut,
    Fut: std::future::Future<Output = Result<()>>,
{
    let repo: Box<dyn SalesRepository> = match &source.snapshot {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
            tracing::info!(path = %path.display(), "Using snapshot repository.");
            Box::new(InMemoryRepository::from_json(&json)?)
        }
        None => {
            let pool = database::connect().await?;
            Box::new(DbRepository::new(pool))
        }
    };
    f(repo).await
}

async fn handle_analytics(
    repo: Box<dyn SalesRepository>,
    args: AnalyticsArgs,
    config: &Config,
) -> Result<()> {
    let service = DashboardService::new(repo, config.dashboard_options()?);
    let report = service.sales_analytics(&args.source.account).await?;

    if args.source.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::render_analytics(&report, &config.dashboard.currency_symbol));
    }
    Ok(())
}

async fn handle_dashboard(
    repo: Box<dyn SalesRepository>,
    args: DashboardArgs,
    config: &Config,
) -> Result<()> {
    let today = match args.today {
        Some(date) => date,
        None => Utc::now().with_timezone(&config.utc_offset()?).date_naive(),
    };

    let service = DashboardService::new(repo, config.dashboard_options()?);
    let summary = service.build(&args.source.account, today).await?;

    if args.source.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render::render_dashboard(&summary, &config.dashboard.currency_symbol));
    }
    Ok(())
}
