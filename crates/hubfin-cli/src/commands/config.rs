//! Config command implementation.
//!
//! Inspects or creates the lending configuration file.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use hubfin_config::LendingConfig;

use crate::cli::OutputFormat;
use crate::commands::{Context, Field};
use crate::error::CliError;
use crate::output::{heading, notice, print_json, render, Notice};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show the configuration file location
    Path,

    /// Write a configuration file with default values
    Init(InitArgs),
}

/// Arguments for the init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Destination file. Defaults to the user configuration file.
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// The per-user configuration file, `<config dir>/hubfin/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hubfin").join("config.toml"))
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Path => path(ctx),
        ConfigCommand::Init(init_args) => init(init_args, ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    let config = &ctx.config;
    match ctx.format {
        OutputFormat::Json => print_json(config)?,
        OutputFormat::Minimal => print!("{}", config.to_toml().map_err(CliError::from)?),
        OutputFormat::Table | OutputFormat::Csv => {
            let menu: Vec<String> = config.installment_menu.iter().map(u32::to_string).collect();
            let rows = vec![
                Field::new("currency", config.currency.code()),
                Field::new("minimum_principal", config.minimum_principal().to_string()),
                Field::new("installment_menu", menu.join(", ")),
                Field::new("default_installments", config.default_installments.to_string()),
                Field::new("simulated_score", config.simulated_score.to_string()),
            ];
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                heading("Configuração");
                match &ctx.config_path {
                    Some(path) => notice(Notice::Info, &format!("Arquivo: {}", path.display())),
                    None => notice(Notice::Info, "Usando valores padrão"),
                }
            }
            render(&rows, ctx.format)?;
        }
    }
    Ok(())
}

fn path(ctx: &Context) -> Result<()> {
    match ctx.config_path.clone().or_else(default_config_path) {
        Some(path) => {
            println!("{}", path.display());
            if !path.exists() && !ctx.quiet {
                notice(Notice::Info, "Arquivo não existe; execute 'hubfin config init' para criá-lo.");
            }
        }
        None => notice(Notice::Warning, "Nenhum diretório de configuração disponível."),
    }
    Ok(())
}

fn init(args: InitArgs, ctx: &Context) -> Result<()> {
    let target = args
        .path
        .or_else(default_config_path)
        .ok_or_else(|| anyhow::anyhow!("no configuration directory; pass a path"))?;

    if target.exists() && !args.force {
        anyhow::bail!(
            "{} already exists; use --force to overwrite",
            target.display()
        );
    }
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    LendingConfig::default()
        .write_to(&target)
        .map_err(CliError::from)?;
    tracing::info!(path = %target.display(), "wrote default configuration");

    if !ctx.quiet {
        notice(Notice::Success, &format!("Configuração criada em {}", target.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_layout() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("hubfin/config.toml"));
        }
    }
}
