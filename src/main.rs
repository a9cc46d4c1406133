//! CLI entry point for the faculty feedback service.
//!
//! `serve` loads the dataset once and exposes it over HTTP. The other
//! subcommands run a single query against a dataset file and print JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use faculty_feedback::analyzers::{
    faculty_details, faculty_suggestions, leaderboard, list_faculties,
};
use faculty_feedback::config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig, default_dataset_path};
use faculty_feedback::dataset::Dataset;
use faculty_feedback::output::{print_json, write_leaderboard_csv};
use faculty_feedback::server::{self, AppState};
use std::ffi::OsStr;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "faculty_feedback")]
#[command(about = "Aggregate statistics over faculty feedback records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the statistics over HTTP
    Serve {
        /// CSV dataset (defaults to faculty_feedback_2000.csv beside the executable)
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Address to bind
        #[arg(long, default_value_t = DEFAULT_HOST)]
        host: IpAddr,

        /// Port to bind
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// List all faculty ids
    Faculties {
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
    /// Show the summary for one faculty
    Faculty {
        #[arg(value_name = "FACULTY_ID")]
        faculty_id: String,

        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
    /// Show the weak rating columns for one faculty
    Suggestions {
        #[arg(value_name = "FACULTY_ID")]
        faculty_id: String,

        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
    /// Show the top faculties by overall score
    Leaderboard {
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Also write the leaderboard to this CSV file
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/faculty_feedback.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("faculty_feedback.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { data, host, port } => {
            let config = ServerConfig::resolve(data, host, port)?;
            info!(dataset = %config.dataset_path.display(), "Loading dataset");

            // Nothing is served unless the dataset loads.
            let dataset = Dataset::load(&config.dataset_path)?;
            server::serve(config.bind_addr, AppState::new(dataset)).await?;
        }
        Commands::Faculties { data } => {
            let dataset = load(data)?;
            print_json(&list_faculties(&dataset))?;
        }
        Commands::Faculty { faculty_id, data } => {
            let dataset = load(data)?;
            let details = faculty_details(&dataset, &faculty_id, &mut rand::thread_rng())?;
            print_json(&details)?;
        }
        Commands::Suggestions { faculty_id, data } => {
            let dataset = load(data)?;
            print_json(&faculty_suggestions(&dataset, &faculty_id)?)?;
        }
        Commands::Leaderboard { data, output } => {
            let dataset = load(data)?;
            let board = leaderboard(&dataset);
            print_json(&board)?;

            if let Some(path) = output {
                write_leaderboard_csv(&path, &board)?;
                info!(path = %path, "Leaderboard written");
            }
        }
    }

    Ok(())
}

/// Loads the dataset from `data`, or from the default location.
fn load(data: Option<PathBuf>) -> Result<Dataset> {
    let path = match data {
        Some(path) => path,
        None => default_dataset_path()?,
    };
    Ok(Dataset::load(path)?)
}
