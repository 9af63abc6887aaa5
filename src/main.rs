mod commands;
mod render;
mod utils;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use schoolcal_core::config::CalendarConfig;
use schoolcal_core::export::ExportFormat;
use schoolcal_core::month::MonthCursor;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schoolcal")]
#[command(about = "Manage the school event calendar and export it to JSON or iCalendar")]
struct Cli {
    /// Directory holding the event document (overrides the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        month: Option<String>,

        /// Move forward (or back, if negative) by this many months
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
    },
    /// List all events in date order
    List {
        /// Print the raw event records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an event
    Add {
        title: String,

        /// Date (YYYY-MM-DD or e.g. "tomorrow", "fri"), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Start time (HH:MM); omit for an all-day event
        #[arg(short, long)]
        time: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
    /// Edit an existing event
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long, conflicts_with = "all_day")]
        time: Option<String>,

        /// Remove the start time
        #[arg(long)]
        all_day: bool,

        /// New description; pass an empty string to clear it
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Write all events to a file named <prefix>-<YYYY-MM-DD>.<ext>
    Export {
        format: FormatArg,

        /// Directory to write into, defaults to the current directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show configuration and paths
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Ics,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Ics => ExportFormat::Ics,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = CalendarConfig::load()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    init_tracing(&config.log_level);
    tracing::debug!(data_dir = %config.data_path().display(), "Configuration loaded");

    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Month { month, offset } => {
            let month = month.as_deref().map(MonthCursor::parse).transpose()?;
            let mut app = commands::open_app(&config, today);
            commands::month::run(&mut app, month, offset, today)
        }
        Commands::List { json } => {
            let app = commands::open_app(&config, today);
            commands::list::run(&app, json)
        }
        Commands::Add {
            title,
            date,
            time,
            description,
        } => {
            let mut app = commands::open_app(&config, today);
            commands::add::run(&mut app, title, date, time, description, today)
        }
        Commands::Edit {
            id,
            title,
            date,
            time,
            all_day,
            description,
        } => {
            let mut app = commands::open_app(&config, today);
            let changes = commands::edit::Changes {
                title,
                date,
                time,
                all_day,
                description,
            };
            commands::edit::run(&mut app, &id, changes, today)
        }
        Commands::Delete { id, yes } => {
            let mut app = commands::open_app(&config, today);
            commands::delete::run(&mut app, &id, yes)
        }
        Commands::Export { format, output } => {
            let app = commands::open_app(&config, today);
            commands::export::run(&app, &config, format.into(), output, today)
        }
        Commands::Config => commands::config::run(&config),
    }
}

/// Log to stderr, filtered by RUST_LOG or the configured level.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
