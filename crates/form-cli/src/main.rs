mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use form_engine::EngineConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formcheck")]
#[command(version, about = "Validate signup form records", long_about = None)]
struct Cli {
    /// Config file (defaults to ./formcheck.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON record and print the errors
    Validate {
        /// Record file, or `-` for stdin
        record: PathBuf,

        /// Evaluation date (YYYY-MM-DD) instead of today
        #[arg(long)]
        today: Option<String>,

        /// Stop at the first failing field
        #[arg(long)]
        stop_on_first: bool,

        /// Replace a field value before validating (field=value)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        sets: Vec<String>,

        /// Check a checkbox item before validating (field=item); applied after every --set
        #[arg(long = "check", value_name = "FIELD=ITEM")]
        checks: Vec<String>,

        /// Uncheck a checkbox item before validating (field=item); applied after every --check
        #[arg(long = "uncheck", value_name = "FIELD=ITEM")]
        unchecks: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the rule chains of the signup schema
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::load_default()?,
    };

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate {
            record,
            today,
            stop_on_first,
            sets,
            checks,
            unchecks,
            json,
        } => {
            let args = commands::validate::ValidateArgs {
                record,
                today,
                stop_on_first,
                sets,
                checks,
                unchecks,
                json,
            };
            let valid = commands::validate::execute(&config, args)?;
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::Schema => {
            commands::schema::execute()?;
        }
    }

    Ok(())
}
