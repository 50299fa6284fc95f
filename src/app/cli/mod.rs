//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::adapters::LocalFilesystem;
use crate::app::AppContext;
use crate::app::commands::generate::{self, Progress};
use crate::domain::{AppError, GenerateOptions};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(name = "dsgen")]
#[command(version)]
#[command(
    about = "Combine manifest-listed SQL scripts into single install and rollback scripts",
    long_about = None
)]
struct Cli {
    /// Install scripts base directory
    #[arg(short = 'i', long = "install")]
    install: PathBuf,
    /// Rollback scripts base directory
    #[arg(short = 'r', long = "rollback")]
    rollback: PathBuf,
    /// The output destination folder
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

impl From<Cli> for GenerateOptions {
    fn from(cli: Cli) -> Self {
        GenerateOptions {
            install_dir: cli.install,
            rollback_dir: cli.rollback,
            output_dir: cli.output,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run_generate(cli.into()) {
        if e.is_configuration() {
            println!("{}", e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run_generate(options: GenerateOptions) -> Result<(), AppError> {
    let ctx = AppContext::current(LocalFilesystem::new())?;

    generate::execute(&ctx, &options, |progress| match progress {
        Progress::Found { name, count } => {
            println!("Found {} scripts in the manifest for {}.", count, name);
        }
        Progress::Generated(outcome) => {
            println!("Generated {}.", outcome.display_path.display());
        }
    })?;

    Ok(())
}
