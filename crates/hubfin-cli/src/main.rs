//! Hub Financeiro CLI - loan eligibility and installment calculator.
//!
//! # Usage
//!
//! ```bash
//! # Tier and lending terms for a score
//! hubfin tier --score 720
//!
//! # Quote a loan
//! hubfin quote --score 720 --amount 12000 --installments 12
//!
//! # Amortization schedule
//! hubfin schedule --score 720 --amount 12.000,00 --installments 12
//!
//! # Installment terms offered for a score
//! hubfin options --score 480 --amount 5000
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::config::default_config_path;
use commands::Context;
use hubfin_config::LendingConfig;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // Logs go to stderr so stdout stays machine-readable.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn build_context(cli: &Cli) -> Result<Context> {
    let config_path = LendingConfig::resolve_path(cli.config.as_deref())
        .or_else(|| default_config_path().filter(|path| path.exists()));

    let config = match &config_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading configuration");
            LendingConfig::from_file(path).map_err(error::CliError::from)?
        }
        None => LendingConfig::default(),
    };

    Ok(Context {
        config,
        config_path,
        format: cli.format,
        quiet: cli.quiet,
    })
}

fn run(cli: Cli) -> Result<()> {
    let ctx = build_context(&cli)?;
    tracing::info!(command = ?cli.command, "dispatching command");

    match cli.command {
        Commands::Tier(args) => commands::tier::execute(args, &ctx)?,
        Commands::Policies(args) => commands::policies::execute(args, &ctx)?,
        Commands::Quote(args) => commands::quote::execute(args, &ctx)?,
        Commands::Schedule(args) => commands::schedule::execute(args, &ctx)?,
        Commands::Options(args) => commands::options::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "hubfin starting");

    if let Err(err) = run(cli) {
        output::notice(output::Notice::Error, &format!("{err:#}"));
        std::process::exit(1);
    }
}
