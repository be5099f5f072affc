//! Command-line interface for the preflight upload validator.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::control::{ControlRegistry, FsControl};
use crate::notify::ConsoleNotifier;
use crate::verify::Verifier;

/// Config consulted when `--config` / `PREFLIGHT_CONFIG` is not given.
const SYSTEM_CONFIG_PATH: &str = "/etc/preflight/config.toml";

/// Top-level CLI for the preflight upload validator.
#[derive(Debug, Parser)]
#[command(name = "preflight")]
#[command(about = "Validate files against a per-field upload policy", long_about = None)]
pub struct Cli {
    /// Path to the policy configuration file.
    #[arg(long, env = "PREFLIGHT_CONFIG", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate a file against a field's upload policy.
    Check {
        /// Upload field identifier the file is intended for.
        #[arg(long)]
        field: String,

        /// Path to the candidate file.
        path: PathBuf,
    },

    /// Print the effective policy table.
    Policy {
        /// Emit the table as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

impl CliCommand {
    /// Parse arguments and run the selected command.
    ///
    /// Returns the process exit code; a rejected file maps to a nonzero
    /// exit so scripts can gate on it.
    pub fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_deref())?;

        match cli.command {
            CliCommand::Check { field, path } => run_check(cfg, &field, path),
            CliCommand::Policy { json } => {
                run_policy(&cfg, json)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::from_file(&path.to_string_lossy())
            .with_context(|| format!("loading policy from {}", path.display())),
        None if Path::new(SYSTEM_CONFIG_PATH).exists() => Config::from_file(SYSTEM_CONFIG_PATH)
            .with_context(|| format!("loading policy from {SYSTEM_CONFIG_PATH}")),
        None => Ok(Config::default()),
    }
}

fn run_check(cfg: Config, field: &str, path: PathBuf) -> Result<ExitCode> {
    let meta =
        std::fs::metadata(&path).with_context(|| format!("cannot read {}", path.display()))?;
    if !meta.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    let mut registry = ControlRegistry::new();
    registry.register(field, Arc::new(FsControl::new(path)));

    let verifier = Verifier::from_config(
        Arc::new(cfg),
        Arc::new(registry),
        Arc::new(ConsoleNotifier),
    )?;
    let verdict = verifier.verify(field);
    if verdict.success {
        println!("ok");
        Ok(ExitCode::SUCCESS)
    } else {
        // The notifier has already shown the rejection message.
        Ok(ExitCode::FAILURE)
    }
}

fn run_policy(cfg: &Config, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&cfg.restrictions)?);
        return Ok(());
    }
    for rule in &cfg.restrictions {
        match rule.policy() {
            Some(policy) => println!(
                "{}: extensions {}, limit {} MB",
                policy.field,
                policy.extensions.join(","),
                policy.max_upload_mb
            ),
            None => println!("{}: incomplete rule (uploads rejected)", rule.field),
        }
    }
    Ok(())
}
