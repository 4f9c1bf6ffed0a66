//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::{
    ConfigArgs, OptionsArgs, PoliciesArgs, QuoteArgs, ScheduleArgs, TierArgs,
};

/// Hub Financeiro - loan eligibility and installment calculator
#[derive(Parser)]
#[command(name = "hubfin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (TOML)
    #[arg(short, long, env = "HUBFIN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the credit tier and lending terms for a score
    Tier(TierArgs),

    /// List the lending terms of every tier
    Policies(PoliciesArgs),

    /// Quote a loan: installment, total payable, and eligibility
    Quote(QuoteArgs),

    /// Print the period-by-period amortization schedule
    Schedule(ScheduleArgs),

    /// List the installment terms available for a score
    Options(OptionsArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
