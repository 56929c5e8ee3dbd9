//! Census CLI - Static module-reference extractor for JavaScript/TypeScript.

use anyhow::Result;
use census_cli::formatters::{Formatter, HumanFormatter, JsonFormatter, PlainFormatter};
use census_cli::{commands, scan};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "census")]
#[command(about = "Lists every module a source file depends on", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Paths to scan (files or directories)
    ///
    /// Examples:
    ///   census .                   # Scan the whole project
    ///   census src/                # Scan one directory
    ///   census src/app.ts          # Scan a single file
    #[arg(value_name = "PATHS", default_values = ["."])]
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long = "output", value_enum, default_value = "human")]
    format: OutputFormat,

    /// Output JSON format (alias for --output json)
    #[arg(long)]
    json: bool,

    /// Print each specifier once in plain output
    #[arg(long)]
    unique: bool,

    /// Fold '+' concatenations of string literals into a single specifier
    #[arg(long = "fold-concat")]
    fold_concat: bool,

    /// Configuration file path (defaults to ./.census.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Additional ignore patterns (can be specified multiple times)
    #[arg(long = "ignore", value_name = "PATTERN")]
    ignore_patterns: Vec<String>,

    /// Disable all ignore patterns (including defaults and .gitignore)
    #[arg(long)]
    no_ignore: bool,

    /// Disable .gitignore respect (still uses default patterns)
    #[arg(long)]
    no_gitignore: bool,

    /// Verbose output
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Manage census configuration
    Config {
        #[command(subcommand)]
        command: commands::ConfigCommand,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    /// Bare specifier list, one per line
    Plain,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Command::Config { command }) => commands::handle_config_command(command),
        None => {
            let report = scan::run_scan(&scan::ScanRunOptions {
                paths: cli.paths.clone(),
                config: cli.config.clone(),
                fold_concat: cli.fold_concat,
                no_ignore: cli.no_ignore,
                no_gitignore: cli.no_gitignore,
                ignore_patterns: cli.ignore_patterns.clone(),
            })?;

            let format = if cli.json {
                OutputFormat::Json
            } else {
                cli.format
            };

            let formatter: Box<dyn Formatter> = match format {
                OutputFormat::Human => Box::new(HumanFormatter),
                OutputFormat::Json => Box::new(JsonFormatter),
                OutputFormat::Plain => Box::new(PlainFormatter {
                    unique: cli.unique,
                }),
            };
            formatter.format(&report);

            if report.has_errors() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
