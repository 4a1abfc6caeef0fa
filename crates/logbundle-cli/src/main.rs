//! logbundle CLI - Log message bundle compiler
//!
//! Commands:
//! - `logbundle generate` - Generate implementation classes from a manifest
//! - `logbundle check` - Validate a manifest without writing anything

use clap::{ArgAction, Parser, Subcommand};
use logbundle_core::GeneratorError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod generate;
mod manifest;

#[derive(Parser)]
#[command(name = "logbundle")]
#[command(author, version, about = "Compiler for log message bundles", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate implementation classes for every bundle in a manifest
    Generate {
        /// Path to the declaration manifest (default: ./logbundle.toml)
        #[arg(short, long)]
        manifest: Option<String>,

        /// Output directory for generated sources
        #[arg(short, long)]
        output: String,

        /// Override the implementation class suffix
        #[arg(long)]
        impl_suffix: Option<String>,

        /// Only reject methods carrying all three annotation kinds
        #[arg(long)]
        lenient: bool,
    },

    /// Validate a manifest and report what would be generated
    Check {
        /// Path to the declaration manifest (default: ./logbundle.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Generate {
            manifest,
            output,
            impl_suffix,
            lenient,
        } => {
            let overrides = generate::Overrides {
                impl_suffix,
                lenient,
            };
            generate::run(manifest, &output, &overrides)?;
        }
        Commands::Check { manifest } => {
            manifest::check(manifest)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<GeneratorError>())
                .map_or(1, GeneratorError::error_code);
            ExitCode::from(code)
        }
    }
}
