use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod core;
mod output;
mod source;

#[derive(Parser)]
#[command(name = "enum-dumper")]
#[command(
    author,
    version,
    about = "Enum Dumper - Generate Rust and C++ enums from the Roblox engine reference"
)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the user config
    #[arg(short, long, global = true, env = "ENUM_DUMPER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape every enum and write the Rust and C++ output files
    Dump {
        /// Index page listing all enums
        #[arg(long)]
        entry_url: Option<String>,

        /// Directory the output files are written to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of detail pages fetched at once
        #[arg(short = 'j', long)]
        concurrency: Option<usize>,
    },

    /// Render a single enum from a local file
    Render {
        /// Descriptor JSON file, or a saved detail page with --html
        path: PathBuf,

        /// Target language
        #[arg(short, long, value_enum, default_value = "rust")]
        dialect: output::Dialect,

        /// Treat the input as a saved detail page
        #[arg(long)]
        html: bool,
    },

    /// Show current configuration
    Config {
        /// Initialize a new config file
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Dump {
            entry_url,
            output,
            concurrency,
        } => {
            commands::dump::run(commands::dump::DumpArgs {
                config: cli.config,
                entry_url,
                output,
                concurrency,
            })
            .await?;
        }
        Commands::Render {
            path,
            dialect,
            html,
        } => {
            commands::render::run(commands::render::RenderArgs {
                config: cli.config,
                path,
                dialect,
                html,
            })?;
        }
        Commands::Config { init } => {
            commands::config::run(init, cli.config.as_deref())?;
        }
    }

    Ok(())
}
