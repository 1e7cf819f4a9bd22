// Rust guideline compliant 2026-02-06

//! bizdir CLI Application
//!
//! Command-line front end for browsing a local business directory.

use bizdir_app::{AppError, BrowseOptions, DirectoryContext};
use bizdir_cli::commands;
use bizdir_cli::{create_formatter, logging, should_use_color, OutputFormatter};
use bizdir_core::{Config, OutputFormat};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "bizdir",
    version,
    about = "bizdir: browse a local business directory",
    long_about = "bizdir loads scraped business listings into a searchable, filterable, paginated directory with per-business detail views.",
    after_help = "Examples:\n  bizdir init --dataset dataset_crawler-google-places.json\n  bizdir unlock 123456\n  bizdir list --search jollof --city Lagos\n  bizdir list --category Restaurant --page 2\n  bizdir show ChIJ-abc123\n  bizdir open /business/ChIJ-abc123\n  bizdir explore\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write logs as JSON lines to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Directory root containing .bizdir (default: current directory)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a business directory
    Init {
        /// Scraped listings file (JSON array or JSON Lines) to copy in
        #[arg(long)]
        dataset: Option<PathBuf>,
    },

    /// Pass the access check
    Unlock {
        /// Access passphrase
        passphrase: String,
    },

    /// List businesses
    List {
        /// Search name, category, city, neighborhood and state
        #[arg(long)]
        search: Option<String>,

        /// Filter by category
        #[arg(long)]
        category: Option<String>,

        /// Filter by city
        #[arg(long)]
        city: Option<String>,

        /// Filter by neighborhood
        #[arg(long, alias = "area")]
        neighborhood: Option<String>,

        /// Filter by state
        #[arg(long)]
        state: Option<String>,

        /// Page number (starting at 1)
        #[arg(long)]
        page: Option<usize>,
    },

    /// Show details of a business
    Show {
        /// Business ID
        id: String,
    },

    /// Open a route path such as / or /business/ID
    Open {
        /// Route path
        path: String,
    },

    /// List the categories, cities, neighborhoods and states
    Facets,

    /// Browse interactively, one command per line
    Explore,
}

/// Reads the directory configuration for output and logging defaults.
///
/// A missing or invalid directory falls back to defaults; the command
/// itself reports the problem.
fn load_settings(root: Option<&Path>) -> Config {
    DirectoryContext::discover(root)
        .and_then(|context| context.load_config())
        .unwrap_or_default()
}

/// Recovers a typed error so JSON output can carry its code.
fn into_app_error(err: anyhow::Error) -> Result<AppError, anyhow::Error> {
    err.downcast::<AppError>()
        .or_else(|err| err.downcast::<bizdir_core::Error>().map(AppError::from))
}

fn run(
    command: Option<Commands>,
    root: Option<&Path>,
    json: bool,
    formatter: &dyn OutputFormatter,
) -> anyhow::Result<()> {
    match command {
        Some(Commands::Init { dataset }) => {
            commands::init::execute(root, dataset, formatter)?;
        }
        Some(Commands::Unlock { passphrase }) => {
            commands::unlock::execute(root, &passphrase, formatter)?;
        }
        Some(Commands::List {
            search,
            category,
            city,
            neighborhood,
            state,
            page,
        }) => {
            let options = BrowseOptions {
                search,
                category,
                city,
                neighborhood,
                state,
                page,
            };
            commands::list::execute(root, &options, formatter)?;
        }
        Some(Commands::Show { id }) => {
            commands::show::execute(root, &id, formatter)?;
        }
        Some(Commands::Open { path }) => {
            commands::open::execute(root, &path, formatter)?;
        }
        Some(Commands::Facets) => {
            commands::facets::execute(root, formatter)?;
        }
        Some(Commands::Explore) => {
            commands::explore::execute(root, json, formatter)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let root = cli.dir.as_deref();
    let settings = load_settings(root);

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(settings.log_level.as_str());
    let guard = logging::init_tracing(level, cli.log_file.as_deref())?;

    // Explicit flags win over the configured default.
    let format = match (cli.format, cli.json) {
        (Some(format), _) => format.into(),
        (None, true) => OutputFormat::Json,
        (None, false) => settings.output_format,
    };
    let json = format == OutputFormat::Json;
    let use_color = !cli.no_color && should_use_color();
    let formatter = create_formatter(format, use_color);

    match run(cli.command, root, json, formatter.as_ref()) {
        Ok(()) => Ok(()),
        Err(err) if json => {
            let rendered = match into_app_error(err) {
                Ok(app_error) => formatter.format_app_error(&app_error),
                Err(err) => formatter.format_error(&format!("{:#}", err)),
            };
            println!("{}", rendered);
            drop(guard);
            std::process::exit(1);
        }
        Err(err) => Err(err),
    }
}
