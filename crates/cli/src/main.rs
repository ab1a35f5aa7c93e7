mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ironlog_core::{DATA_DIR_NAME, DB_FILE_NAME, FilterParams};
use ironlog_service::WorkoutService;
use ironlog_storage::Storage;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ironlog")]
#[command(about = "Personal workout log with a JSON HTTP API", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "IRONLOG_DB")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, env = "IRONLOG_PORT", default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, env = "IRONLOG_HOST", default_value = "127.0.0.1")]
        host: String,
    },
    /// List workouts, newest first
    List(FilterArgs),
    /// Show one workout with its sets
    Get { id: i64 },
    /// Delete a workout and its sets
    Delete { id: i64 },
    /// Exercise names, most used first
    Exercises,
    /// Per-day top set
    Trend(FilterArgs),
    /// Row counts
    Stats,
}

#[derive(Args)]
struct FilterArgs {
    /// Case-sensitive substring of the exercise name
    #[arg(short, long)]
    exercise: Option<String>,
    /// Earliest date, YYYY-MM-DD
    #[arg(long)]
    from: Option<String>,
    /// Latest date, YYYY-MM-DD
    #[arg(long)]
    to: Option<String>,
}

impl From<FilterArgs> for FilterParams {
    fn from(args: FilterArgs) -> Self {
        Self { exercise: args.exercise, from: args.from, to: args.to }
    }
}

pub(crate) fn default_db_path() -> PathBuf {
    dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join(DATA_DIR_NAME).join(DB_FILE_NAME)
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Open the store once at startup; everything downstream shares it.
fn open_service(db_path: &Path) -> Result<Arc<WorkoutService>> {
    ensure_db_dir(db_path)?;
    let storage = Storage::new(db_path)?;
    Ok(Arc::new(WorkoutService::new(Arc::new(storage))))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db_path = cli.db.unwrap_or_else(default_db_path);
    let service = open_service(&db_path)?;

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(service, &host, port).await?,
        Commands::List(filter) => commands::query::run_list(&service, filter.into()).await?,
        Commands::Get { id } => commands::query::run_get(&service, id).await?,
        Commands::Delete { id } => commands::query::run_delete(&service, id).await?,
        Commands::Exercises => commands::query::run_exercises(&service).await?,
        Commands::Trend(filter) => commands::query::run_trend(&service, filter.into()).await?,
        Commands::Stats => commands::query::run_stats(&service).await?,
    }

    Ok(())
}
