use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use motif::ThemeUsage;
use motif_playground::{describe_error, render, theme, Format};
use tracing_subscriber::EnvFilter;

/// Resolve site configurations against the theme-playground theme.
#[derive(Debug, Parser)]
#[command(name = "motif-playground", version)]
struct Cli {
    /// Output format
    #[arg(long, short, value_enum, default_value_t = Format::Json, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a usage document (.json, .yaml or .yml) and print the build config
    Resolve {
        /// Path to the site's usage document
        usage: PathBuf,
    },
    /// Print the theme's configuration schema
    Schema,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MOTIF_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let theme = theme();
    match &cli.command {
        Command::Resolve { usage } => {
            tracing::debug!(usage = %usage.display(), theme = theme.name(), "resolving usage document");
            let usage = ThemeUsage::from_file(usage)
                .with_context(|| format!("loading {}", usage.display()))?;
            let build = theme
                .resolve(&usage)
                .map_err(|err| anyhow::anyhow!(describe_error(&err)))?;
            render(&build, cli.format)
        }
        Command::Schema => render(theme.config_schema(), cli.format),
    }
}
