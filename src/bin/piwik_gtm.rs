use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use piwik_gtm::{
    commands::{
        convert::{convert_file, Input},
        tables::print_tables,
    },
    config::Config,
    convert::Converter,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a Piwik PRO container export into a GTM container export
    Convert {
        /// Path to the Piwik PRO export, or - for stdin
        input: Input,
        /// Folder to write the converted export to. Printed to stdout if not given.
        #[arg(short, long)]
        output_folder: Option<PathBuf>,
        /// Name of the converted container
        #[arg(long)]
        name: Option<String>,
        /// Public ID of the converted container, e.g. GTM-ABC123
        #[arg(long)]
        public_id: Option<String>,
    },
    /// Print the event/parameter/firing/condition translation tables in use
    Tables,
}

/// Converts tag manager container exports from Piwik PRO to Google Tag Manager.
/// Logs are written to stderr.
#[derive(Parser, Debug)]
#[command(name = "piwik_gtm")]
#[clap(version)]
struct Cli {
    /// Config file (optional, defaults to the per-user config if it exists)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose logging, including every repaired field
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Command::Convert {
            input,
            output_folder,
            name,
            public_id,
        } => {
            if let Some(name) = name {
                config.container.name = name;
            }
            if let Some(public_id) = public_id {
                config.container.public_id = public_id;
            }

            let converter = Converter::from_config(config);
            convert_file(&converter, &input, output_folder.as_deref())
                .context("Convert command failed")?;
        }
        Command::Tables => {
            let converter = Converter::from_config(config);
            print_tables(converter.tables()).context("Tables command failed")?;
        }
    }

    Ok(())
}
