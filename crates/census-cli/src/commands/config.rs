//! `census config` subcommand.

use anyhow::{Context, Result};
use census_extract::CensusConfig;
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a default .census.toml
    Init {
        /// Directory for the config file
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Show the config file path
    Path {
        /// Directory to resolve from
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Print the effective configuration
    Show {
        /// Directory to resolve from
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Validate the config file
    Validate {
        /// Directory to resolve from
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

pub fn handle_config_command(cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Init { dir } => init_config(&dir),
        ConfigCommand::Path { dir } => show_config_path(&dir),
        ConfigCommand::Show { dir } => show_config(&dir),
        ConfigCommand::Validate { dir } => validate_config(&dir),
    }
}

fn config_path(dir: &Path) -> PathBuf {
    dir.join(".census.toml")
}

fn init_config(dir: &Path) -> Result<()> {
    let path = config_path(dir);

    if path.exists() {
        println!("Config already exists at: {}", path.display());
        println!("To reinitialize, please delete the existing config first.");
        return Ok(());
    }

    let content = toml::to_string_pretty(&CensusConfig::default())
        .context("Failed to serialize default config")?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✓ Initialized config at: {}", path.display());
    Ok(())
}

fn show_config_path(dir: &Path) -> Result<()> {
    let path = config_path(dir);
    println!("{}", path.display());
    if !path.exists() {
        println!("(not present, defaults apply)");
    }
    Ok(())
}

fn show_config(dir: &Path) -> Result<()> {
    let config = CensusConfig::load_or_default(dir)?;
    let content =
        toml::to_string_pretty(&config).context("Failed to serialize config")?;
    print!("{}", content);
    Ok(())
}

fn validate_config(dir: &Path) -> Result<()> {
    let path = config_path(dir);

    if !path.exists() {
        println!("No config at {}; defaults apply.", path.display());
        return Ok(());
    }

    // load() validates after parsing
    CensusConfig::load(&path)?;
    println!("✓ {} is valid", path.display());
    Ok(())
}
