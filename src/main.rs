//! CLI entry point for the bikeshare explorer.
//!
//! `explore` (the default) runs the interactive prompt loop; `report` runs the
//! same pipeline once for a selection given on the command line.

use anyhow::Result;
use bikeshare_stats::{
    config::CitySources,
    error::SessionError,
    filter::{ALL, FilterSpec},
    services::prompt::stdin_prompt,
    session::{ReportFormat, Session, run_once},
};
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory holding the city CSV files
    #[arg(long, global = true, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// JSON file mapping city names to CSV file names
    #[arg(long, global = true)]
    cities: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively pick a city, month and day, then view statistics
    Explore,
    /// Print statistics for one selection and exit
    Report {
        /// City to analyze (e.g. "chicago")
        #[arg(long)]
        city: String,

        /// Month name (January to June) or "all"
        #[arg(long, default_value = ALL)]
        month: String,

        /// Day of week or "all"
        #[arg(long, default_value = ALL)]
        day: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Also print every matching trip
        #[arg(long, default_value_t = false)]
        raw: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // stdout carries the prompts, so stderr stays quiet unless asked
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        );

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG_JSON").unwrap_or_else(|_| EnvFilter::new("debug")),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let sources = match &cli.cities {
        Some(path) => CitySources::load(path)?,
        None => CitySources::default(),
    }
    .with_data_dir(&cli.data_dir);

    info!(
        data_dir = %cli.data_dir.display(),
        cities = ?sources.cities().collect::<Vec<_>>(),
        "Starting bikeshare_stats"
    );

    match cli.command.unwrap_or(Commands::Explore) {
        Commands::Explore => {
            let mut session = Session::new(sources, stdin_prompt(), std::io::stdout());
            match session.run() {
                Err(SessionError::InputClosed) => info!("Input closed, exiting"),
                result => result?,
            }
        }
        Commands::Report {
            city,
            month,
            day,
            format,
            raw,
        } => {
            let spec = FilterSpec::parse(&sources, &city, &month, &day)?;
            let mut stdout = std::io::stdout().lock();
            run_once(&sources, &spec, format.into(), raw, &mut stdout)?;
        }
    }

    Ok(())
}
